//! Club membership and team invitation kinds

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::locale::LocaleTable;

use super::localized::{BuildContext, LocalizedBuilder, Messages, Phrase, Sections};
use super::registry::BuilderRegistry;

pub const MEMBERSHIP_APPROVED: &str = "club-membership-approved";
pub const MEMBERSHIP_REJECTED: &str = "club-membership-rejected";
pub const TEAM_INVITATION: &str = "team-invitation";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPayload {
    pub member_name: Option<String>,
    pub club_name: String,
    pub reason: Option<String>,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInvitationPayload {
    pub recipient_name: Option<String>,
    pub team_name: String,
    pub club_name: Option<String>,
    pub invited_by: Option<String>,
    pub action_url: Option<String>,
}

pub(super) fn register(registry: &mut BuilderRegistry) {
    registry.register(LocalizedBuilder::new(MEMBERSHIP_APPROVED, &APPROVED, membership_sections));
    registry.register(LocalizedBuilder::new(MEMBERSHIP_REJECTED, &REJECTED, membership_sections));
    registry.register(LocalizedBuilder::new(TEAM_INVITATION, &TEAM_INVITE, team_sections));
}

fn membership_sections(p: &MembershipPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.member_name.clone(),
        entity: Some(p.club_name.clone()),
        action_url: p.action_url.clone(),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.reason, p.reason.clone());
    sections
}

fn team_sections(p: &TeamInvitationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.recipient_name.clone(),
        entity: Some(p.team_name.clone()),
        action_url: p.action_url.clone(),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.club, p.club_name.clone());
    sections.optional_detail(ctx.labels.invited_by, p.invited_by.clone());
    sections
}

lazy_static! {
    static ref APPROVED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|c| format!("Welcome to {c}")),
        heading: Phrase::Text("Your membership is approved"),
        intro: Phrase::Named(|c| format!("Your request to join {c} has been approved. Welcome to the club!")),
        action: Some("Open club page"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|c| format!("Добро пожаловать в клуб «{c}»")),
        heading: Phrase::Text("Ваше членство одобрено"),
        intro: Phrase::Named(|c| format!("Ваша заявка на вступление в клуб «{c}» одобрена. Добро пожаловать!")),
        action: Some("Открыть страницу клуба"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|c| format!("Ласкаво просимо до клубу «{c}»")),
        heading: Phrase::Text("Ваше членство схвалено"),
        intro: Phrase::Named(|c| format!("Вашу заявку на вступ до клубу «{c}» схвалено. Ласкаво просимо!")),
        action: Some("Відкрити сторінку клубу"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|c| format!("Bienvenido a {c}")),
        heading: Phrase::Text("Tu solicitud de socio ha sido aprobada"),
        intro: Phrase::Named(|c| format!("Tu solicitud para unirte a {c} ha sido aprobada. ¡Bienvenido al club!")),
        action: Some("Abrir página del club"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|c| format!("Bienvenue à {c}")),
        heading: Phrase::Text("Votre adhésion est acceptée"),
        intro: Phrase::Named(|c| format!("Votre demande d'adhésion à {c} a été acceptée. Bienvenue au club !")),
        action: Some("Voir la page du club"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|c| format!("Willkommen bei {c}")),
        heading: Phrase::Text("Deine Mitgliedschaft wurde bestätigt"),
        intro: Phrase::Named(|c| format!("Deine Anfrage, {c} beizutreten, wurde angenommen. Willkommen im Verein!")),
        action: Some("Vereinsseite öffnen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|c| format!("Benvenuto in {c}")),
        heading: Phrase::Text("La tua iscrizione al club è stata approvata"),
        intro: Phrase::Named(|c| format!("La tua richiesta di entrare in {c} è stata approvata. Benvenuto nel club!")),
        action: Some("Apri la pagina del club"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|c| format!("Et donem la benvinguda a {c}")),
        heading: Phrase::Text("La teva sol·licitud de soci s'ha aprovat"),
        intro: Phrase::Named(|c| format!("La teva sol·licitud per unir-te a {c} s'ha aprovat. Benvingut al club!")),
        action: Some("Obrir la pàgina del club"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|c| format!("Welkom bij {c}")),
        heading: Phrase::Text("Je lidmaatschap is goedgekeurd"),
        intro: Phrase::Named(|c| format!("Je aanvraag om lid te worden van {c} is goedgekeurd. Welkom bij de club!")),
        action: Some("Clubpagina openen"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|c| format!("Velkommen i {c}")),
        heading: Phrase::Text("Dit medlemskab er godkendt"),
        intro: Phrase::Named(|c| format!("Din anmodning om at blive medlem af {c} er godkendt. Velkommen i klubben!")),
        action: Some("Åbn klubsiden"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|c| format!("Välkommen till {c}")),
        heading: Phrase::Text("Ditt medlemskap är godkänt"),
        intro: Phrase::Named(|c| format!("Din ansökan om att gå med i {c} har godkänts. Välkommen till klubben!")),
        action: Some("Öppna klubbsidan"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|c| format!("Velkommen til {c}")),
        heading: Phrase::Text("Medlemskapet ditt er godkjent"),
        intro: Phrase::Named(|c| format!("Forespørselen din om å bli med i {c} er godkjent. Velkommen i klubben!")),
        action: Some("Åpne klubbsiden"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|c| format!("مرحباً بك في {c}")),
        heading: Phrase::Text("تمت الموافقة على عضويتك"),
        intro: Phrase::Named(|c| format!("تمت الموافقة على طلب انضمامك إلى {c}. مرحباً بك في النادي!")),
        action: Some("فتح صفحة النادي"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|c| format!("欢迎加入{c}")),
        heading: Phrase::Text("您的会员申请已通过"),
        intro: Phrase::Named(|c| format!("您加入{c}的申请已获批准。欢迎加入俱乐部！")),
        action: Some("打开俱乐部页面"),
        outro: None,
    });

    static ref REJECTED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|c| format!("Your request to join {c}")),
        heading: Phrase::Text("Your membership request was declined"),
        intro: Phrase::Named(|c| format!("Unfortunately, {c} could not accept your membership request.")),
        action: None,
        outro: Some("You are welcome to apply to other clubs on the platform."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|c| format!("Ваша заявка в клуб «{c}»")),
        heading: Phrase::Text("Заявка на членство отклонена"),
        intro: Phrase::Named(|c| format!("К сожалению, клуб «{c}» не смог принять вашу заявку.")),
        action: None,
        outro: Some("Вы можете подать заявку в другие клубы на платформе."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|c| format!("Ваша заявка до клубу «{c}»")),
        heading: Phrase::Text("Заявку на членство відхилено"),
        intro: Phrase::Named(|c| format!("На жаль, клуб «{c}» не зміг прийняти вашу заявку.")),
        action: None,
        outro: Some("Ви можете подати заявку до інших клубів на платформі."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|c| format!("Tu solicitud para unirte a {c}")),
        heading: Phrase::Text("Tu solicitud de socio ha sido rechazada"),
        intro: Phrase::Named(|c| format!("Lamentablemente, {c} no ha podido aceptar tu solicitud.")),
        action: None,
        outro: Some("Puedes solicitar la entrada en otros clubes de la plataforma."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|c| format!("Votre demande d'adhésion à {c}")),
        heading: Phrase::Text("Votre demande d'adhésion a été refusée"),
        intro: Phrase::Named(|c| format!("Malheureusement, {c} n'a pas pu accepter votre demande d'adhésion.")),
        action: None,
        outro: Some("N'hésitez pas à postuler auprès d'autres clubs de la plateforme."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|c| format!("Deine Anfrage bei {c}")),
        heading: Phrase::Text("Deine Mitgliedsanfrage wurde abgelehnt"),
        intro: Phrase::Named(|c| format!("Leider konnte {c} deine Mitgliedsanfrage nicht annehmen.")),
        action: None,
        outro: Some("Du kannst dich gerne bei anderen Vereinen auf der Plattform bewerben."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|c| format!("La tua richiesta di entrare in {c}")),
        heading: Phrase::Text("La tua richiesta di iscrizione è stata rifiutata"),
        intro: Phrase::Named(|c| format!("Purtroppo {c} non ha potuto accettare la tua richiesta di iscrizione.")),
        action: None,
        outro: Some("Puoi fare richiesta ad altri club sulla piattaforma."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|c| format!("La teva sol·licitud per unir-te a {c}")),
        heading: Phrase::Text("La teva sol·licitud de soci s'ha denegat"),
        intro: Phrase::Named(|c| format!("Malauradament, {c} no ha pogut acceptar la teva sol·licitud.")),
        action: None,
        outro: Some("Pots sol·licitar l'entrada a altres clubs de la plataforma."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|c| format!("Je aanvraag bij {c}")),
        heading: Phrase::Text("Je lidmaatschapsaanvraag is afgewezen"),
        intro: Phrase::Named(|c| format!("Helaas kon {c} je lidmaatschapsaanvraag niet accepteren.")),
        action: None,
        outro: Some("Je bent welkom om je aan te melden bij andere clubs op het platform."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|c| format!("Din anmodning til {c}")),
        heading: Phrase::Text("Din anmodning om medlemskab blev afvist"),
        intro: Phrase::Named(|c| format!("Desværre kunne {c} ikke godkende din anmodning om medlemskab.")),
        action: None,
        outro: Some("Du er velkommen til at søge om optagelse i andre klubber på platformen."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|c| format!("Din ansökan till {c}")),
        heading: Phrase::Text("Din medlemsansökan har avslagits"),
        intro: Phrase::Named(|c| format!("Tyvärr kunde {c} inte godkänna din medlemsansökan.")),
        action: None,
        outro: Some("Du är välkommen att ansöka till andra klubbar på plattformen."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|c| format!("Forespørselen din til {c}")),
        heading: Phrase::Text("Medlemskapsforespørselen din ble avslått"),
        intro: Phrase::Named(|c| format!("Dessverre kunne ikke {c} godta forespørselen din om medlemskap.")),
        action: None,
        outro: Some("Du er velkommen til å søke deg inn i andre klubber på plattformen."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|c| format!("طلب انضمامك إلى {c}")),
        heading: Phrase::Text("تم رفض طلب عضويتك"),
        intro: Phrase::Named(|c| format!("للأسف، لم يتمكن {c} من قبول طلب عضويتك.")),
        action: None,
        outro: Some("يمكنك التقدم بطلب للانضمام إلى أندية أخرى على المنصة."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|c| format!("您加入{c}的申请")),
        heading: Phrase::Text("您的会员申请未通过"),
        intro: Phrase::Named(|c| format!("很遗憾，{c}未能接受您的会员申请。")),
        action: None,
        outro: Some("欢迎您申请加入平台上的其他俱乐部。"),
    });

    static ref TEAM_INVITE: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("You are invited to join {t}")),
        heading: Phrase::Text("Team invitation"),
        intro: Phrase::Named(|t| format!("You have been invited to play for {t}.")),
        action: Some("Respond to invitation"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Приглашение в команду «{t}»")),
        heading: Phrase::Text("Приглашение в команду"),
        intro: Phrase::Named(|t| format!("Вас пригласили играть за команду «{t}».")),
        action: Some("Ответить на приглашение"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Запрошення до команди «{t}»")),
        heading: Phrase::Text("Запрошення до команди"),
        intro: Phrase::Named(|t| format!("Вас запросили грати за команду «{t}».")),
        action: Some("Відповісти на запрошення"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Te han invitado a unirte a {t}")),
        heading: Phrase::Text("Invitación de equipo"),
        intro: Phrase::Named(|t| format!("Te han invitado a jugar con {t}.")),
        action: Some("Responder a la invitación"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Vous êtes invité à rejoindre {t}")),
        heading: Phrase::Text("Invitation d'équipe"),
        intro: Phrase::Named(|t| format!("Vous avez été invité à jouer pour {t}.")),
        action: Some("Répondre à l'invitation"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Du bist eingeladen, {t} beizutreten")),
        heading: Phrase::Text("Team-Einladung"),
        intro: Phrase::Named(|t| format!("Du wurdest eingeladen, für {t} zu spielen.")),
        action: Some("Auf Einladung antworten"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Sei invitato a unirti a {t}")),
        heading: Phrase::Text("Invito in squadra"),
        intro: Phrase::Named(|t| format!("Sei stato invitato a giocare per {t}.")),
        action: Some("Rispondi all'invito"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("T'han convidat a unir-te a {t}")),
        heading: Phrase::Text("Invitació d'equip"),
        intro: Phrase::Named(|t| format!("T'han convidat a jugar amb {t}.")),
        action: Some("Respondre a la invitació"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Je bent uitgenodigd voor {t}")),
        heading: Phrase::Text("Teamuitnodiging"),
        intro: Phrase::Named(|t| format!("Je bent uitgenodigd om voor {t} te spelen.")),
        action: Some("Reageren op uitnodiging"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Du er inviteret til at blive en del af {t}")),
        heading: Phrase::Text("Holdinvitation"),
        intro: Phrase::Named(|t| format!("Du er blevet inviteret til at spille for {t}.")),
        action: Some("Svar på invitationen"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Du är inbjuden att gå med i {t}")),
        heading: Phrase::Text("Laginbjudan"),
        intro: Phrase::Named(|t| format!("Du har bjudits in att spela för {t}.")),
        action: Some("Svara på inbjudan"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Du er invitert til å bli med i {t}")),
        heading: Phrase::Text("Laginvitasjon"),
        intro: Phrase::Named(|t| format!("Du er invitert til å spille for {t}.")),
        action: Some("Svar på invitasjonen"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("أنت مدعو للانضمام إلى {t}")),
        heading: Phrase::Text("دعوة للانضمام إلى فريق"),
        intro: Phrase::Named(|t| format!("تمت دعوتك للعب مع {t}.")),
        action: Some("الرد على الدعوة"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("邀请您加入{t}")),
        heading: Phrase::Text("球队邀请"),
        intro: Phrase::Named(|t| format!("您受邀为{t}效力。")),
        action: Some("回复邀请"),
        outro: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ContentBuilder;
    use serde_json::json;

    #[test]
    fn test_membership_approved() {
        let payload = json!({"memberName": "Pau", "clubName": "CT Gràcia"});
        let built = LocalizedBuilder::new(MEMBERSHIP_APPROVED, &APPROVED, membership_sections)
            .build(&payload, "es")
            .unwrap();

        assert_eq!(built.subject.as_deref(), Some("Bienvenido a CT Gràcia"));
        assert!(built.document.contains("¡Hola, Pau!"));
    }

    #[test]
    fn test_membership_requires_club_name() {
        let result = LocalizedBuilder::new(MEMBERSHIP_REJECTED, &REJECTED, membership_sections)
            .build(&json!({"memberName": "Pau"}), "es");

        assert!(result.is_err());
    }

    #[test]
    fn test_team_invitation_escapes_names() {
        let payload = json!({
            "teamName": "<Eagles>",
            "clubName": "{{#if x}}",
            "invitedBy": "Coach"
        });
        let built = LocalizedBuilder::new(TEAM_INVITATION, &TEAM_INVITE, team_sections)
            .build(&payload, "en")
            .unwrap();

        assert!(built.document.contains("&lt;Eagles&gt;"));
        assert!(!built.document.contains("{{#if x}}"));
        assert_eq!(
            built.subject.as_deref(),
            Some("You are invited to join <Eagles>")
        );
    }
}
