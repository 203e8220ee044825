//! Tournament staff kinds: invitations and permission changes for referees,
//! judges and organizers

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::locale::LocaleTable;

use super::localized::{BuildContext, LocalizedBuilder, Messages, Phrase, Sections};
use super::registry::BuilderRegistry;

pub const STAFF_INVITATION: &str = "staff-invitation";
pub const STAFF_PERMISSIONS_UPDATED: &str = "staff-permissions-updated";
pub const STAFF_REMOVED: &str = "staff-removed";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPayload {
    pub staff_name: Option<String>,
    /// Tournament the staff member works on; subjects need it, intros fall
    /// back to a plain wording without it
    pub tournament_name: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub invited_by: Option<String>,
    pub action_url: Option<String>,
}

pub(super) fn register(registry: &mut BuilderRegistry) {
    registry.register(LocalizedBuilder::new(STAFF_INVITATION, &INVITATION, invitation_sections));
    registry.register(LocalizedBuilder::new(
        STAFF_PERMISSIONS_UPDATED,
        &PERMISSIONS_UPDATED,
        permission_sections,
    ));
    registry.register(LocalizedBuilder::new(STAFF_REMOVED, &REMOVED, staff_sections));
}

fn staff_sections(p: &StaffPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.staff_name.clone(),
        entity: p.tournament_name.clone(),
        action_url: p.action_url.clone(),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.tournament, p.tournament_name.clone());
    sections.optional_detail(ctx.labels.role, p.role.clone());
    sections
}

fn invitation_sections(p: &StaffPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = staff_sections(p, ctx);
    sections.optional_detail(ctx.labels.invited_by, p.invited_by.clone());
    sections
}

fn permission_sections(p: &StaffPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = staff_sections(p, ctx);
    if !p.permissions.is_empty() {
        sections.detail(ctx.labels.permissions, p.permissions.join(", "));
    }
    sections
}

lazy_static! {
    static ref INVITATION: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("You have been invited to join the staff of {t}")),
        heading: Phrase::Text("You are invited to join the staff"),
        intro: Phrase::NamedOr(
            |t| format!("The organizers of {t} would like you to join the tournament staff."),
            "The organizers would like you to join the tournament staff.",
        ),
        action: Some("Accept invitation"),
        outro: Some("If you were not expecting this invitation, you can ignore it."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Приглашение в команду турнира «{t}»")),
        heading: Phrase::Text("Вас приглашают в команду турнира"),
        intro: Phrase::NamedOr(
            |t| format!("Организаторы турнира «{t}» приглашают вас присоединиться к команде."),
            "Организаторы турнира приглашают вас присоединиться к команде.",
        ),
        action: Some("Принять приглашение"),
        outro: Some("Если вы не ждали этого приглашения, просто проигнорируйте его."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Запрошення до команди турніру «{t}»")),
        heading: Phrase::Text("Вас запрошують до команди турніру"),
        intro: Phrase::NamedOr(
            |t| format!("Організатори турніру «{t}» запрошують вас приєднатися до команди."),
            "Організатори турніру запрошують вас приєднатися до команди.",
        ),
        action: Some("Прийняти запрошення"),
        outro: Some("Якщо ви не очікували цього запрошення, просто проігноруйте його."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Invitación al equipo organizador de {t}")),
        heading: Phrase::Text("Te invitamos a unirte al equipo"),
        intro: Phrase::NamedOr(
            |t| format!("Los organizadores de {t} quieren que formes parte del equipo del torneo."),
            "Los organizadores quieren que formes parte del equipo del torneo.",
        ),
        action: Some("Aceptar invitación"),
        outro: Some("Si no esperabas esta invitación, puedes ignorarla."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Invitation à rejoindre l'équipe de {t}")),
        heading: Phrase::Text("Vous êtes invité à rejoindre l'équipe"),
        intro: Phrase::NamedOr(
            |t| format!("Les organisateurs de {t} souhaitent que vous rejoigniez l'équipe du tournoi."),
            "Les organisateurs souhaitent que vous rejoigniez l'équipe du tournoi.",
        ),
        action: Some("Accepter l'invitation"),
        outro: Some("Si vous n'attendiez pas cette invitation, vous pouvez l'ignorer."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Einladung ins Team von {t}")),
        heading: Phrase::Text("Du bist ins Turnierteam eingeladen"),
        intro: Phrase::NamedOr(
            |t| format!("Die Veranstalter von {t} möchten dich im Turnierteam haben."),
            "Die Veranstalter möchten dich im Turnierteam haben.",
        ),
        action: Some("Einladung annehmen"),
        outro: Some("Wenn du diese Einladung nicht erwartet hast, kannst du sie ignorieren."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Invito a far parte dello staff di {t}")),
        heading: Phrase::Text("Sei invitato a far parte dello staff"),
        intro: Phrase::NamedOr(
            |t| format!("Gli organizzatori di {t} vorrebbero che entrassi nello staff del torneo."),
            "Gli organizzatori vorrebbero che entrassi nello staff del torneo.",
        ),
        action: Some("Accetta l'invito"),
        outro: Some("Se non ti aspettavi questo invito, puoi ignorarlo."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Invitació a l'equip de {t}")),
        heading: Phrase::Text("T'han convidat a formar part de l'equip"),
        intro: Phrase::NamedOr(
            |t| format!("Els organitzadors de {t} volen que formis part de l'equip del torneig."),
            "Els organitzadors volen que formis part de l'equip del torneig.",
        ),
        action: Some("Acceptar la invitació"),
        outro: Some("Si no esperaves aquesta invitació, pots ignorar-la."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Uitnodiging voor het team van {t}")),
        heading: Phrase::Text("Je bent uitgenodigd voor het toernooiteam"),
        intro: Phrase::NamedOr(
            |t| format!("De organisatie van {t} wil je graag in het toernooiteam."),
            "De organisatie wil je graag in het toernooiteam.",
        ),
        action: Some("Uitnodiging accepteren"),
        outro: Some("Had je deze uitnodiging niet verwacht? Dan kun je haar negeren."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Invitation til holdet bag {t}")),
        heading: Phrase::Text("Du er inviteret med i turneringsholdet"),
        intro: Phrase::NamedOr(
            |t| format!("Arrangørerne af {t} vil gerne have dig med i turneringsholdet."),
            "Arrangørerne vil gerne have dig med i turneringsholdet.",
        ),
        action: Some("Accepter invitationen"),
        outro: Some("Hvis du ikke ventede denne invitation, kan du se bort fra den."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Inbjudan till funktionärsteamet för {t}")),
        heading: Phrase::Text("Du är inbjuden till funktionärsteamet"),
        intro: Phrase::NamedOr(
            |t| format!("Arrangörerna av {t} vill gärna ha med dig i turneringens funktionärsteam."),
            "Arrangörerna vill gärna ha med dig i turneringens funktionärsteam.",
        ),
        action: Some("Acceptera inbjudan"),
        outro: Some("Om du inte väntade dig den här inbjudan kan du bortse från den."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Invitasjon til funksjonærteamet for {t}")),
        heading: Phrase::Text("Du er invitert til funksjonærteamet"),
        intro: Phrase::NamedOr(
            |t| format!("Arrangørene av {t} vil gjerne ha deg med i turneringens funksjonærteam."),
            "Arrangørene vil gjerne ha deg med i turneringens funksjonærteam.",
        ),
        action: Some("Godta invitasjonen"),
        outro: Some("Hvis du ikke ventet denne invitasjonen, kan du se bort fra den."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("دعوة للانضمام إلى طاقم {t}")),
        heading: Phrase::Text("أنت مدعو للانضمام إلى الطاقم"),
        intro: Phrase::NamedOr(
            |t| format!("يرغب منظمو {t} في انضمامك إلى طاقم البطولة."),
            "يرغب المنظمون في انضمامك إلى طاقم البطولة.",
        ),
        action: Some("قبول الدعوة"),
        outro: Some("إذا لم تكن تتوقع هذه الدعوة، يمكنك تجاهلها."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("邀请您加入{t}的工作团队")),
        heading: Phrase::Text("邀请您加入工作团队"),
        intro: Phrase::NamedOr(
            |t| format!("{t}的主办方诚邀您加入赛事工作团队。"),
            "主办方诚邀您加入赛事工作团队。",
        ),
        action: Some("接受邀请"),
        outro: Some("如果您并未预期收到此邀请，可以忽略此邮件。"),
    });

    static ref PERMISSIONS_UPDATED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Your permissions for {t} have changed")),
        heading: Phrase::Text("Your permissions have been updated"),
        intro: Phrase::NamedOr(
            |t| format!("Your staff permissions for {t} have been updated."),
            "Your staff permissions have been updated.",
        ),
        action: Some("Open dashboard"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Ваши права в турнире «{t}» изменены")),
        heading: Phrase::Text("Ваши права обновлены"),
        intro: Phrase::NamedOr(
            |t| format!("Ваши права в команде турнира «{t}» обновлены."),
            "Ваши права в команде турнира обновлены.",
        ),
        action: Some("Открыть панель"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Ваші права в турнірі «{t}» змінено")),
        heading: Phrase::Text("Ваші права оновлено"),
        intro: Phrase::NamedOr(
            |t| format!("Ваші права в команді турніру «{t}» оновлено."),
            "Ваші права в команді турніру оновлено.",
        ),
        action: Some("Відкрити панель"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Tus permisos en {t} han cambiado")),
        heading: Phrase::Text("Tus permisos se han actualizado"),
        intro: Phrase::NamedOr(
            |t| format!("Se han actualizado tus permisos como miembro del equipo de {t}."),
            "Se han actualizado tus permisos como miembro del equipo.",
        ),
        action: Some("Abrir panel"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Vos autorisations pour {t} ont changé")),
        heading: Phrase::Text("Vos autorisations ont été mises à jour"),
        intro: Phrase::NamedOr(
            |t| format!("Vos autorisations dans l'équipe de {t} ont été mises à jour."),
            "Vos autorisations dans l'équipe du tournoi ont été mises à jour.",
        ),
        action: Some("Ouvrir le tableau de bord"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Deine Berechtigungen für {t} wurden geändert")),
        heading: Phrase::Text("Deine Berechtigungen wurden aktualisiert"),
        intro: Phrase::NamedOr(
            |t| format!("Deine Berechtigungen im Team von {t} wurden aktualisiert."),
            "Deine Berechtigungen im Turnierteam wurden aktualisiert.",
        ),
        action: Some("Dashboard öffnen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("I tuoi permessi per {t} sono cambiati")),
        heading: Phrase::Text("I tuoi permessi sono stati aggiornati"),
        intro: Phrase::NamedOr(
            |t| format!("I tuoi permessi nello staff di {t} sono stati aggiornati."),
            "I tuoi permessi nello staff del torneo sono stati aggiornati.",
        ),
        action: Some("Apri la dashboard"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Els teus permisos a {t} han canviat")),
        heading: Phrase::Text("S'han actualitzat els teus permisos"),
        intro: Phrase::NamedOr(
            |t| format!("S'han actualitzat els teus permisos a l'equip de {t}."),
            "S'han actualitzat els teus permisos a l'equip del torneig.",
        ),
        action: Some("Obrir el tauler"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Je rechten voor {t} zijn gewijzigd")),
        heading: Phrase::Text("Je rechten zijn bijgewerkt"),
        intro: Phrase::NamedOr(
            |t| format!("Je rechten in het team van {t} zijn bijgewerkt."),
            "Je rechten in het toernooiteam zijn bijgewerkt.",
        ),
        action: Some("Dashboard openen"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Dine rettigheder for {t} er ændret")),
        heading: Phrase::Text("Dine rettigheder er opdateret"),
        intro: Phrase::NamedOr(
            |t| format!("Dine rettigheder i holdet bag {t} er blevet opdateret."),
            "Dine rettigheder i turneringsholdet er blevet opdateret.",
        ),
        action: Some("Åbn kontrolpanelet"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Dina behörigheter för {t} har ändrats")),
        heading: Phrase::Text("Dina behörigheter har uppdaterats"),
        intro: Phrase::NamedOr(
            |t| format!("Dina behörigheter i funktionärsteamet för {t} har uppdaterats."),
            "Dina behörigheter i funktionärsteamet har uppdaterats.",
        ),
        action: Some("Öppna kontrollpanelen"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Tillatelsene dine for {t} er endret")),
        heading: Phrase::Text("Tillatelsene dine er oppdatert"),
        intro: Phrase::NamedOr(
            |t| format!("Tillatelsene dine i funksjonærteamet for {t} er oppdatert."),
            "Tillatelsene dine i funksjonærteamet er oppdatert.",
        ),
        action: Some("Åpne kontrollpanelet"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تغيّرت صلاحياتك في {t}")),
        heading: Phrase::Text("تم تحديث صلاحياتك"),
        intro: Phrase::NamedOr(
            |t| format!("تم تحديث صلاحياتك ضمن طاقم {t}."),
            "تم تحديث صلاحياتك ضمن طاقم البطولة.",
        ),
        action: Some("فتح لوحة التحكم"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("您在{t}的权限已变更")),
        heading: Phrase::Text("您的权限已更新"),
        intro: Phrase::NamedOr(
            |t| format!("您在{t}工作团队中的权限已更新。"),
            "您在赛事工作团队中的权限已更新。",
        ),
        action: Some("打开控制台"),
        outro: None,
    });

    static ref REMOVED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("You are no longer on the staff of {t}")),
        heading: Phrase::Text("Staff access removed"),
        intro: Phrase::NamedOr(
            |t| format!("You have been removed from the staff of {t}. Thank you for your help."),
            "You have been removed from the tournament staff. Thank you for your help.",
        ),
        action: None,
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Вы больше не в команде турнира «{t}»")),
        heading: Phrase::Text("Доступ к команде отозван"),
        intro: Phrase::NamedOr(
            |t| format!("Вы исключены из команды турнира «{t}». Спасибо за помощь!"),
            "Вы исключены из команды турнира. Спасибо за помощь!",
        ),
        action: None,
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Ви більше не в команді турніру «{t}»")),
        heading: Phrase::Text("Доступ до команди відкликано"),
        intro: Phrase::NamedOr(
            |t| format!("Вас виключено з команди турніру «{t}». Дякуємо за допомогу!"),
            "Вас виключено з команди турніру. Дякуємо за допомогу!",
        ),
        action: None,
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Ya no formas parte del equipo de {t}")),
        heading: Phrase::Text("Acceso al equipo retirado"),
        intro: Phrase::NamedOr(
            |t| format!("Has dejado de formar parte del equipo de {t}. Gracias por tu ayuda."),
            "Has dejado de formar parte del equipo del torneo. Gracias por tu ayuda.",
        ),
        action: None,
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Vous ne faites plus partie de l'équipe de {t}")),
        heading: Phrase::Text("Accès à l'équipe retiré"),
        intro: Phrase::NamedOr(
            |t| format!("Vous avez été retiré de l'équipe de {t}. Merci pour votre aide."),
            "Vous avez été retiré de l'équipe du tournoi. Merci pour votre aide.",
        ),
        action: None,
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Du bist nicht mehr im Team von {t}")),
        heading: Phrase::Text("Teamzugang entfernt"),
        intro: Phrase::NamedOr(
            |t| format!("Du wurdest aus dem Team von {t} entfernt. Danke für deine Hilfe."),
            "Du wurdest aus dem Turnierteam entfernt. Danke für deine Hilfe.",
        ),
        action: None,
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Non fai più parte dello staff di {t}")),
        heading: Phrase::Text("Accesso allo staff rimosso"),
        intro: Phrase::NamedOr(
            |t| format!("Sei stato rimosso dallo staff di {t}. Grazie per il tuo aiuto."),
            "Sei stato rimosso dallo staff del torneo. Grazie per il tuo aiuto.",
        ),
        action: None,
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Ja no formes part de l'equip de {t}")),
        heading: Phrase::Text("Accés a l'equip retirat"),
        intro: Phrase::NamedOr(
            |t| format!("Has deixat de formar part de l'equip de {t}. Gràcies per la teva ajuda."),
            "Has deixat de formar part de l'equip del torneig. Gràcies per la teva ajuda.",
        ),
        action: None,
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Je maakt geen deel meer uit van het team van {t}")),
        heading: Phrase::Text("Toegang tot het team ingetrokken"),
        intro: Phrase::NamedOr(
            |t| format!("Je bent verwijderd uit het team van {t}. Bedankt voor je hulp."),
            "Je bent verwijderd uit het toernooiteam. Bedankt voor je hulp.",
        ),
        action: None,
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Du er ikke længere en del af holdet bag {t}")),
        heading: Phrase::Text("Adgang til holdet fjernet"),
        intro: Phrase::NamedOr(
            |t| format!("Du er blevet fjernet fra holdet bag {t}. Tak for din hjælp."),
            "Du er blevet fjernet fra turneringsholdet. Tak for din hjælp.",
        ),
        action: None,
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Du ingår inte längre i funktionärsteamet för {t}")),
        heading: Phrase::Text("Åtkomst till teamet borttagen"),
        intro: Phrase::NamedOr(
            |t| format!("Du har tagits bort från funktionärsteamet för {t}. Tack för din hjälp."),
            "Du har tagits bort från funktionärsteamet. Tack för din hjälp.",
        ),
        action: None,
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Du er ikke lenger med i funksjonærteamet for {t}")),
        heading: Phrase::Text("Tilgang til teamet fjernet"),
        intro: Phrase::NamedOr(
            |t| format!("Du er fjernet fra funksjonærteamet for {t}. Takk for hjelpen."),
            "Du er fjernet fra funksjonærteamet. Takk for hjelpen.",
        ),
        action: None,
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("لم تعد ضمن طاقم {t}")),
        heading: Phrase::Text("تمت إزالة صلاحية الوصول إلى الطاقم"),
        intro: Phrase::NamedOr(
            |t| format!("تمت إزالتك من طاقم {t}. شكراً لمساعدتك."),
            "تمت إزالتك من طاقم البطولة. شكراً لمساعدتك.",
        ),
        action: None,
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("您已不再是{t}工作团队的成员")),
        heading: Phrase::Text("工作团队权限已移除"),
        intro: Phrase::NamedOr(
            |t| format!("您已被移出{t}的工作团队。感谢您的帮助。"),
            "您已被移出赛事工作团队。感谢您的帮助。",
        ),
        action: None,
        outro: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ContentBuilder;
    use serde_json::json;

    #[test]
    fn test_invitation_details() {
        let payload = json!({
            "staffName": "Omar",
            "tournamentName": "City Open",
            "role": "Referee",
            "invitedBy": "Julia",
            "actionUrl": "https://example.com/staff/accept"
        });

        let built = LocalizedBuilder::new(STAFF_INVITATION, &INVITATION, invitation_sections)
            .build(&payload, "ua")
            .unwrap();

        assert_eq!(
            built.subject.as_deref(),
            Some("Запрошення до команди турніру «City Open»")
        );
        assert!(built.document.contains("Referee"));
        assert!(built.document.contains("Julia"));
        assert!(built.document.contains("Прийняти запрошення"));
    }

    #[test]
    fn test_subject_needs_tournament_name() {
        let built = LocalizedBuilder::new(STAFF_REMOVED, &REMOVED, staff_sections)
            .build(&json!({"staffName": "Omar"}), "en")
            .unwrap();

        assert!(built.subject.is_none());
        assert!(built.document.contains("Staff access removed"));
    }

    #[test]
    fn test_permissions_listed() {
        let payload = json!({
            "tournamentName": "City Open",
            "permissions": ["scores", "schedule"]
        });

        let built = LocalizedBuilder::new(
            STAFF_PERMISSIONS_UPDATED,
            &PERMISSIONS_UPDATED,
            permission_sections,
        )
        .build(&payload, "en")
        .unwrap();

        assert!(built.document.contains("scores, schedule"));
    }

    #[test]
    fn test_invitation_without_tournament_name_reads_cleanly() {
        let payload = json!({"staffName": "Omar", "role": "Referee"});

        let built = LocalizedBuilder::new(STAFF_INVITATION, &INVITATION, invitation_sections)
            .build(&payload, "en")
            .unwrap();

        assert!(built.subject.is_none());
        assert!(built
            .document
            .contains("The organizers would like you to join the tournament staff."));
        assert!(!built.document.contains("organizers of  "));
        assert!(!built.document.contains("of  would"));
    }

    #[test]
    fn test_blank_tournament_name_uses_plain_intro() {
        let payload = json!({"staffName": "Omar", "tournamentName": "  "});

        let built = LocalizedBuilder::new(
            STAFF_PERMISSIONS_UPDATED,
            &PERMISSIONS_UPDATED,
            permission_sections,
        )
        .build(&payload, "ru")
        .unwrap();

        assert!(built.subject.is_none());
        assert!(built.document.contains("Ваши права в команде турнира обновлены."));
        assert!(!built.document.contains("«"));
    }

    #[test]
    fn test_staff_tables_cover_every_locale() {
        for info in crate::locale::LOCALES {
            for table in [&*INVITATION, &*PERMISSIONS_UPDATED, &*REMOVED] {
                assert!(table.contains(info.code), "missing staff messages for {}", info.code);
            }
        }
    }
}
