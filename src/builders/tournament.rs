//! Tournament lifecycle kinds, sent to everyone following a tournament

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::locale::LocaleTable;

use super::localized::{BuildContext, LocalizedBuilder, Messages, Phrase, Sections};
use super::payload::TournamentRef;
use super::registry::BuilderRegistry;

pub const TOURNAMENT_CREATED: &str = "tournament-created";
pub const TOURNAMENT_UPDATED: &str = "tournament-updated";
pub const TOURNAMENT_CANCELLED: &str = "tournament-cancelled";
pub const TOURNAMENT_REMINDER: &str = "tournament-reminder";
pub const SCHEDULE_PUBLISHED: &str = "tournament-schedule-published";
pub const RESULTS_PUBLISHED: &str = "tournament-results-published";
pub const REGISTRATION_OPENED: &str = "tournament-registration-opened";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentNotice {
    pub recipient_name: Option<String>,
    #[serde(flatten)]
    pub tournament: TournamentRef,
    pub registration_deadline: Option<NaiveDate>,
    /// Free-text summary of what was changed
    pub changes: Option<String>,
    pub reason: Option<String>,
    pub action_url: Option<String>,
}

pub(super) fn register(registry: &mut BuilderRegistry) {
    registry.register(LocalizedBuilder::new(TOURNAMENT_CREATED, &CREATED, notice_sections));
    registry.register(LocalizedBuilder::new(TOURNAMENT_UPDATED, &UPDATED, with_changes));
    registry.register(LocalizedBuilder::new(TOURNAMENT_CANCELLED, &CANCELLED, with_reason));
    registry.register(LocalizedBuilder::new(TOURNAMENT_REMINDER, &REMINDER, notice_sections));
    registry.register(LocalizedBuilder::new(SCHEDULE_PUBLISHED, &SCHEDULE, notice_sections));
    registry.register(LocalizedBuilder::new(RESULTS_PUBLISHED, &RESULTS, notice_sections));
    registry.register(LocalizedBuilder::new(
        REGISTRATION_OPENED,
        &REGISTRATION_OPEN,
        with_registration_deadline,
    ));
}

fn notice_sections(n: &TournamentNotice, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: n.recipient_name.clone(),
        entity: Some(n.tournament.name.clone()),
        action_url: n.action_url.clone().or_else(|| n.tournament.url.clone()),
        ..Default::default()
    };
    n.tournament.add_details(&mut sections, ctx);
    sections
}

fn with_changes(n: &TournamentNotice, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = notice_sections(n, ctx);
    sections.optional_detail(ctx.labels.changes, n.changes.clone());
    sections
}

fn with_reason(n: &TournamentNotice, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = notice_sections(n, ctx);
    sections.optional_detail(ctx.labels.reason, n.reason.clone());
    sections
}

fn with_registration_deadline(n: &TournamentNotice, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = notice_sections(n, ctx);
    sections.optional_detail(
        ctx.labels.registration_deadline,
        n.registration_deadline.map(|d| ctx.date(d)),
    );
    sections
}

lazy_static! {
    static ref CREATED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Tournament created: {t}")),
        heading: Phrase::Text("Your tournament has been created"),
        intro: Phrase::Named(|t| format!("{t} has been created. You can now review the details and open registration.")),
        action: Some("Manage tournament"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Турнир создан: {t}")),
        heading: Phrase::Text("Ваш турнир создан"),
        intro: Phrase::Named(|t| format!("Турнир «{t}» создан. Проверьте детали и откройте регистрацию.")),
        action: Some("Управлять турниром"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Турнір створено: {t}")),
        heading: Phrase::Text("Ваш турнір створено"),
        intro: Phrase::Named(|t| format!("Турнір «{t}» створено. Перевірте деталі та відкрийте реєстрацію.")),
        action: Some("Керувати турніром"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Torneo creado: {t}")),
        heading: Phrase::Text("Tu torneo ha sido creado"),
        intro: Phrase::Named(|t| format!("{t} ha sido creado. Ya puedes revisar los detalles y abrir las inscripciones.")),
        action: Some("Gestionar torneo"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Tournoi créé : {t}")),
        heading: Phrase::Text("Votre tournoi a été créé"),
        intro: Phrase::Named(|t| format!("{t} a été créé. Vous pouvez maintenant vérifier les détails et ouvrir les inscriptions.")),
        action: Some("Gérer le tournoi"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Turnier erstellt: {t}")),
        heading: Phrase::Text("Dein Turnier wurde erstellt"),
        intro: Phrase::Named(|t| format!("{t} wurde erstellt. Du kannst jetzt die Details prüfen und die Anmeldung öffnen.")),
        action: Some("Turnier verwalten"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Torneo creato: {t}")),
        heading: Phrase::Text("Il tuo torneo è stato creato"),
        intro: Phrase::Named(|t| format!("{t} è stato creato. Ora puoi controllare i dettagli e aprire le iscrizioni.")),
        action: Some("Gestisci torneo"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Torneig creat: {t}")),
        heading: Phrase::Text("El teu torneig s'ha creat"),
        intro: Phrase::Named(|t| format!("S'ha creat {t}. Ara pots revisar els detalls i obrir les inscripcions.")),
        action: Some("Gestionar el torneig"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Toernooi aangemaakt: {t}")),
        heading: Phrase::Text("Je toernooi is aangemaakt"),
        intro: Phrase::Named(|t| format!("{t} is aangemaakt. Je kunt nu de details controleren en de inschrijving openen.")),
        action: Some("Toernooi beheren"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Turnering oprettet: {t}")),
        heading: Phrase::Text("Din turnering er oprettet"),
        intro: Phrase::Named(|t| format!("{t} er oprettet. Du kan nu gennemgå detaljerne og åbne for tilmelding.")),
        action: Some("Administrer turneringen"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Turnering skapad: {t}")),
        heading: Phrase::Text("Din turnering har skapats"),
        intro: Phrase::Named(|t| format!("{t} har skapats. Du kan nu granska detaljerna och öppna anmälan.")),
        action: Some("Hantera turneringen"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Turnering opprettet: {t}")),
        heading: Phrase::Text("Turneringen din er opprettet"),
        intro: Phrase::Named(|t| format!("{t} er opprettet. Du kan nå se over detaljene og åpne påmeldingen.")),
        action: Some("Administrer turneringen"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم إنشاء البطولة: {t}")),
        heading: Phrase::Text("تم إنشاء بطولتك"),
        intro: Phrase::Named(|t| format!("تم إنشاء {t}. يمكنك الآن مراجعة التفاصيل وفتح باب التسجيل.")),
        action: Some("إدارة البطولة"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("赛事已创建：{t}")),
        heading: Phrase::Text("您的赛事已创建"),
        intro: Phrase::Named(|t| format!("{t}已创建。您现在可以查看详情并开放报名。")),
        action: Some("管理赛事"),
        outro: None,
    });

    static ref UPDATED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Tournament updated: {t}")),
        heading: Phrase::Text("Tournament details have changed"),
        intro: Phrase::Named(|t| format!("The organizers have updated {t}. Please review the latest details.")),
        action: Some("View tournament"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Турнир обновлён: {t}")),
        heading: Phrase::Text("Детали турнира изменились"),
        intro: Phrase::Named(|t| format!("Организаторы обновили информацию о турнире «{t}». Пожалуйста, ознакомьтесь с изменениями.")),
        action: Some("Открыть турнир"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Турнір оновлено: {t}")),
        heading: Phrase::Text("Деталі турніру змінилися"),
        intro: Phrase::Named(|t| format!("Організатори оновили інформацію про турнір «{t}». Будь ласка, ознайомтеся зі змінами.")),
        action: Some("Відкрити турнір"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Torneo actualizado: {t}")),
        heading: Phrase::Text("Los detalles del torneo han cambiado"),
        intro: Phrase::Named(|t| format!("Los organizadores han actualizado {t}. Revisa los últimos detalles.")),
        action: Some("Ver torneo"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Tournoi mis à jour : {t}")),
        heading: Phrase::Text("Les détails du tournoi ont changé"),
        intro: Phrase::Named(|t| format!("Les organisateurs ont mis à jour {t}. Merci de consulter les dernières informations.")),
        action: Some("Voir le tournoi"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Turnier aktualisiert: {t}")),
        heading: Phrase::Text("Die Turnierdetails haben sich geändert"),
        intro: Phrase::Named(|t| format!("Die Veranstalter haben {t} aktualisiert. Bitte sieh dir die neuesten Details an.")),
        action: Some("Turnier ansehen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Torneo aggiornato: {t}")),
        heading: Phrase::Text("I dettagli del torneo sono cambiati"),
        intro: Phrase::Named(|t| format!("Gli organizzatori hanno aggiornato {t}. Controlla i dettagli più recenti.")),
        action: Some("Vedi torneo"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Torneig actualitzat: {t}")),
        heading: Phrase::Text("Els detalls del torneig han canviat"),
        intro: Phrase::Named(|t| format!("Els organitzadors han actualitzat {t}. Revisa els detalls més recents.")),
        action: Some("Veure el torneig"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Toernooi bijgewerkt: {t}")),
        heading: Phrase::Text("De toernooigegevens zijn gewijzigd"),
        intro: Phrase::Named(|t| format!("De organisatie heeft {t} bijgewerkt. Bekijk de nieuwste details.")),
        action: Some("Toernooi bekijken"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Turnering opdateret: {t}")),
        heading: Phrase::Text("Turneringens detaljer er ændret"),
        intro: Phrase::Named(|t| format!("Arrangørerne har opdateret {t}. Se de seneste detaljer.")),
        action: Some("Se turneringen"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Turnering uppdaterad: {t}")),
        heading: Phrase::Text("Turneringens detaljer har ändrats"),
        intro: Phrase::Named(|t| format!("Arrangörerna har uppdaterat {t}. Se de senaste detaljerna.")),
        action: Some("Visa turneringen"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Turnering oppdatert: {t}")),
        heading: Phrase::Text("Turneringsdetaljene er endret"),
        intro: Phrase::Named(|t| format!("Arrangørene har oppdatert {t}. Se gjennom de nyeste detaljene.")),
        action: Some("Se turneringen"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم تحديث البطولة: {t}")),
        heading: Phrase::Text("تغيّرت تفاصيل البطولة"),
        intro: Phrase::Named(|t| format!("قام المنظمون بتحديث {t}. يرجى مراجعة أحدث التفاصيل.")),
        action: Some("عرض البطولة"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("赛事已更新：{t}")),
        heading: Phrase::Text("赛事详情已变更"),
        intro: Phrase::Named(|t| format!("主办方更新了{t}。请查看最新详情。")),
        action: Some("查看赛事"),
        outro: None,
    });

    static ref CANCELLED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Tournament cancelled: {t}")),
        heading: Phrase::Text("The tournament has been cancelled"),
        intro: Phrase::Named(|t| format!("We are sorry to let you know that {t} has been cancelled.")),
        action: None,
        outro: Some("Registered participants will be contacted about refunds."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Турнир отменён: {t}")),
        heading: Phrase::Text("Турнир отменён"),
        intro: Phrase::Named(|t| format!("К сожалению, турнир «{t}» отменён.")),
        action: None,
        outro: Some("Мы свяжемся с зарегистрированными участниками по поводу возврата средств."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Турнір скасовано: {t}")),
        heading: Phrase::Text("Турнір скасовано"),
        intro: Phrase::Named(|t| format!("На жаль, турнір «{t}» скасовано.")),
        action: None,
        outro: Some("Ми зв'яжемося із зареєстрованими учасниками щодо повернення коштів."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Torneo cancelado: {t}")),
        heading: Phrase::Text("El torneo ha sido cancelado"),
        intro: Phrase::Named(|t| format!("Lamentamos informarte de que {t} ha sido cancelado.")),
        action: None,
        outro: Some("Nos pondremos en contacto con los inscritos para gestionar los reembolsos."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Tournoi annulé : {t}")),
        heading: Phrase::Text("Le tournoi a été annulé"),
        intro: Phrase::Named(|t| format!("Nous sommes désolés de vous annoncer que {t} a été annulé.")),
        action: None,
        outro: Some("Les participants inscrits seront contactés au sujet des remboursements."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Turnier abgesagt: {t}")),
        heading: Phrase::Text("Das Turnier wurde abgesagt"),
        intro: Phrase::Named(|t| format!("Leider müssen wir dir mitteilen, dass {t} abgesagt wurde.")),
        action: None,
        outro: Some("Angemeldete Teilnehmende werden wegen der Rückerstattung kontaktiert."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Torneo annullato: {t}")),
        heading: Phrase::Text("Il torneo è stato annullato"),
        intro: Phrase::Named(|t| format!("Siamo spiacenti di comunicarti che {t} è stato annullato.")),
        action: None,
        outro: Some("I partecipanti iscritti saranno contattati per i rimborsi."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Torneig cancel·lat: {t}")),
        heading: Phrase::Text("El torneig s'ha cancel·lat"),
        intro: Phrase::Named(|t| format!("Lamentem informar-te que {t} s'ha cancel·lat.")),
        action: None,
        outro: Some("Contactarem amb els inscrits per gestionar els reemborsaments."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Toernooi geannuleerd: {t}")),
        heading: Phrase::Text("Het toernooi is geannuleerd"),
        intro: Phrase::Named(|t| format!("Helaas moeten we je laten weten dat {t} is geannuleerd.")),
        action: None,
        outro: Some("Ingeschreven deelnemers worden benaderd over terugbetaling."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Turnering aflyst: {t}")),
        heading: Phrase::Text("Turneringen er aflyst"),
        intro: Phrase::Named(|t| format!("Vi må desværre meddele, at {t} er aflyst.")),
        action: None,
        outro: Some("Tilmeldte deltagere bliver kontaktet om refusion."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Turnering inställd: {t}")),
        heading: Phrase::Text("Turneringen är inställd"),
        intro: Phrase::Named(|t| format!("Tyvärr måste vi meddela att {t} har ställts in.")),
        action: None,
        outro: Some("Anmälda deltagare kontaktas angående återbetalning."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Turnering avlyst: {t}")),
        heading: Phrase::Text("Turneringen er avlyst"),
        intro: Phrase::Named(|t| format!("Vi må dessverre meddele at {t} er avlyst.")),
        action: None,
        outro: Some("Påmeldte deltakere blir kontaktet om refusjon."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم إلغاء البطولة: {t}")),
        heading: Phrase::Text("تم إلغاء البطولة"),
        intro: Phrase::Named(|t| format!("يؤسفنا إبلاغك بأنه تم إلغاء {t}.")),
        action: None,
        outro: Some("سيتم التواصل مع المشاركين المسجلين بخصوص استرداد الرسوم."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("赛事已取消：{t}")),
        heading: Phrase::Text("赛事已取消"),
        intro: Phrase::Named(|t| format!("很遗憾地通知您，{t}已取消。")),
        action: None,
        outro: Some("我们将就退款事宜联系已报名的参赛者。"),
    });

    static ref REMINDER: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Reminder: {t} starts soon")),
        heading: Phrase::Text("The tournament is almost here"),
        intro: Phrase::Named(|t| format!("This is a friendly reminder that {t} starts soon. Good luck!")),
        action: Some("View schedule"),
        outro: Some("Please arrive early to check in."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Напоминание: скоро начнётся «{t}»")),
        heading: Phrase::Text("Турнир уже скоро"),
        intro: Phrase::Named(|t| format!("Напоминаем, что турнир «{t}» скоро начнётся. Удачи!")),
        action: Some("Открыть расписание"),
        outro: Some("Пожалуйста, приходите заранее, чтобы пройти регистрацию на месте."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Нагадування: незабаром почнеться «{t}»")),
        heading: Phrase::Text("Турнір уже незабаром"),
        intro: Phrase::Named(|t| format!("Нагадуємо, що турнір «{t}» незабаром розпочнеться. Успіхів!")),
        action: Some("Відкрити розклад"),
        outro: Some("Будь ласка, приходьте заздалегідь, щоб пройти реєстрацію на місці."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Recordatorio: {t} empieza pronto")),
        heading: Phrase::Text("El torneo está a punto de empezar"),
        intro: Phrase::Named(|t| format!("Te recordamos que {t} empieza pronto. ¡Mucha suerte!")),
        action: Some("Ver calendario"),
        outro: Some("Llega con antelación para acreditarte."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Rappel : {t} commence bientôt")),
        heading: Phrase::Text("Le tournoi approche"),
        intro: Phrase::Named(|t| format!("Petit rappel : {t} commence bientôt. Bonne chance !")),
        action: Some("Voir le programme"),
        outro: Some("Merci d'arriver en avance pour l'accueil."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Erinnerung: {t} beginnt bald")),
        heading: Phrase::Text("Das Turnier steht vor der Tür"),
        intro: Phrase::Named(|t| format!("Kleine Erinnerung: {t} beginnt bald. Viel Erfolg!")),
        action: Some("Spielplan ansehen"),
        outro: Some("Bitte komm rechtzeitig zum Check-in."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Promemoria: {t} inizia a breve")),
        heading: Phrase::Text("Il torneo è quasi arrivato"),
        intro: Phrase::Named(|t| format!("Ti ricordiamo che {t} inizia a breve. In bocca al lupo!")),
        action: Some("Vedi programma"),
        outro: Some("Arriva in anticipo per il check-in."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Recordatori: {t} comença aviat")),
        heading: Phrase::Text("El torneig és a tocar"),
        intro: Phrase::Named(|t| format!("Et recordem que {t} comença aviat. Molta sort!")),
        action: Some("Veure el calendari"),
        outro: Some("Arriba amb temps per fer el registre."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Herinnering: {t} begint binnenkort")),
        heading: Phrase::Text("Het toernooi is bijna begonnen"),
        intro: Phrase::Named(|t| format!("Een vriendelijke herinnering dat {t} binnenkort begint. Veel succes!")),
        action: Some("Schema bekijken"),
        outro: Some("Kom op tijd om je aan te melden."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Påmindelse: {t} starter snart")),
        heading: Phrase::Text("Turneringen er lige om hjørnet"),
        intro: Phrase::Named(|t| format!("En venlig påmindelse om, at {t} starter snart. Held og lykke!")),
        action: Some("Se programmet"),
        outro: Some("Mød op i god tid for at tjekke ind."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Påminnelse: {t} börjar snart")),
        heading: Phrase::Text("Turneringen är nästan här"),
        intro: Phrase::Named(|t| format!("En vänlig påminnelse om att {t} börjar snart. Lycka till!")),
        action: Some("Visa schemat"),
        outro: Some("Kom i god tid för att checka in."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Påminnelse: {t} starter snart")),
        heading: Phrase::Text("Turneringen er nesten her"),
        intro: Phrase::Named(|t| format!("En vennlig påminnelse om at {t} starter snart. Lykke til!")),
        action: Some("Se programmet"),
        outro: Some("Møt opp i god tid for å sjekke inn."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تذكير: {t} تبدأ قريباً")),
        heading: Phrase::Text("البطولة على الأبواب"),
        intro: Phrase::Named(|t| format!("نذكّرك بأن {t} تبدأ قريباً. بالتوفيق!")),
        action: Some("عرض الجدول"),
        outro: Some("يرجى الحضور مبكراً لتسجيل الوصول."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("提醒：{t}即将开始")),
        heading: Phrase::Text("赛事即将开始"),
        intro: Phrase::Named(|t| format!("友情提醒：{t}即将开始。祝您好运！")),
        action: Some("查看赛程"),
        outro: Some("请提前到场签到。"),
    });

    static ref SCHEDULE: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Schedule published: {t}")),
        heading: Phrase::Text("The schedule is ready"),
        intro: Phrase::Named(|t| format!("The match schedule for {t} has been published.")),
        action: Some("View schedule"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Опубликовано расписание: {t}")),
        heading: Phrase::Text("Расписание готово"),
        intro: Phrase::Named(|t| format!("Расписание матчей турнира «{t}» опубликовано.")),
        action: Some("Открыть расписание"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Опубліковано розклад: {t}")),
        heading: Phrase::Text("Розклад готовий"),
        intro: Phrase::Named(|t| format!("Розклад матчів турніру «{t}» опубліковано.")),
        action: Some("Відкрити розклад"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Calendario publicado: {t}")),
        heading: Phrase::Text("El calendario está listo"),
        intro: Phrase::Named(|t| format!("Se ha publicado el calendario de partidos de {t}.")),
        action: Some("Ver calendario"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Programme publié : {t}")),
        heading: Phrase::Text("Le programme est prêt"),
        intro: Phrase::Named(|t| format!("Le programme des matchs de {t} a été publié.")),
        action: Some("Voir le programme"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Spielplan veröffentlicht: {t}")),
        heading: Phrase::Text("Der Spielplan steht"),
        intro: Phrase::Named(|t| format!("Der Spielplan für {t} wurde veröffentlicht.")),
        action: Some("Spielplan ansehen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Programma pubblicato: {t}")),
        heading: Phrase::Text("Il programma è pronto"),
        intro: Phrase::Named(|t| format!("Il calendario delle partite di {t} è stato pubblicato.")),
        action: Some("Vedi programma"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Calendari publicat: {t}")),
        heading: Phrase::Text("El calendari està a punt"),
        intro: Phrase::Named(|t| format!("S'ha publicat el calendari de partits de {t}.")),
        action: Some("Veure el calendari"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Schema gepubliceerd: {t}")),
        heading: Phrase::Text("Het schema staat klaar"),
        intro: Phrase::Named(|t| format!("Het wedstrijdschema voor {t} is gepubliceerd.")),
        action: Some("Schema bekijken"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Program offentliggjort: {t}")),
        heading: Phrase::Text("Programmet er klar"),
        intro: Phrase::Named(|t| format!("Kampprogrammet for {t} er offentliggjort.")),
        action: Some("Se programmet"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Schema publicerat: {t}")),
        heading: Phrase::Text("Schemat är klart"),
        intro: Phrase::Named(|t| format!("Matchschemat för {t} har publicerats.")),
        action: Some("Visa schemat"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Program publisert: {t}")),
        heading: Phrase::Text("Programmet er klart"),
        intro: Phrase::Named(|t| format!("Kampprogrammet for {t} er publisert.")),
        action: Some("Se programmet"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم نشر الجدول: {t}")),
        heading: Phrase::Text("الجدول جاهز"),
        intro: Phrase::Named(|t| format!("تم نشر جدول مباريات {t}.")),
        action: Some("عرض الجدول"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("赛程已发布：{t}")),
        heading: Phrase::Text("赛程已就绪"),
        intro: Phrase::Named(|t| format!("{t}的比赛赛程已发布。")),
        action: Some("查看赛程"),
        outro: None,
    });

    static ref RESULTS: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Results published: {t}")),
        heading: Phrase::Text("The results are in"),
        intro: Phrase::Named(|t| format!("The final results of {t} are now available. Thank you for taking part!")),
        action: Some("View results"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Опубликованы результаты: {t}")),
        heading: Phrase::Text("Результаты готовы"),
        intro: Phrase::Named(|t| format!("Итоговые результаты турнира «{t}» уже доступны. Спасибо за участие!")),
        action: Some("Посмотреть результаты"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Опубліковано результати: {t}")),
        heading: Phrase::Text("Результати готові"),
        intro: Phrase::Named(|t| format!("Підсумкові результати турніру «{t}» вже доступні. Дякуємо за участь!")),
        action: Some("Переглянути результати"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Resultados publicados: {t}")),
        heading: Phrase::Text("Ya tenemos los resultados"),
        intro: Phrase::Named(|t| format!("Los resultados finales de {t} ya están disponibles. ¡Gracias por participar!")),
        action: Some("Ver resultados"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Résultats publiés : {t}")),
        heading: Phrase::Text("Les résultats sont disponibles"),
        intro: Phrase::Named(|t| format!("Les résultats finaux de {t} sont disponibles. Merci de votre participation !")),
        action: Some("Voir les résultats"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Ergebnisse veröffentlicht: {t}")),
        heading: Phrase::Text("Die Ergebnisse sind da"),
        intro: Phrase::Named(|t| format!("Die Endergebnisse von {t} sind jetzt verfügbar. Danke fürs Mitmachen!")),
        action: Some("Ergebnisse ansehen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Risultati pubblicati: {t}")),
        heading: Phrase::Text("I risultati sono arrivati"),
        intro: Phrase::Named(|t| format!("I risultati finali di {t} sono ora disponibili. Grazie per aver partecipato!")),
        action: Some("Vedi risultati"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Resultats publicats: {t}")),
        heading: Phrase::Text("Ja tenim els resultats"),
        intro: Phrase::Named(|t| format!("Els resultats finals de {t} ja estan disponibles. Gràcies per participar!")),
        action: Some("Veure els resultats"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Uitslagen gepubliceerd: {t}")),
        heading: Phrase::Text("De uitslagen zijn bekend"),
        intro: Phrase::Named(|t| format!("De einduitslagen van {t} zijn nu beschikbaar. Bedankt voor je deelname!")),
        action: Some("Uitslagen bekijken"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Resultater offentliggjort: {t}")),
        heading: Phrase::Text("Resultaterne er klar"),
        intro: Phrase::Named(|t| format!("De endelige resultater fra {t} er nu tilgængelige. Tak for din deltagelse!")),
        action: Some("Se resultaterne"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Resultat publicerade: {t}")),
        heading: Phrase::Text("Resultaten är klara"),
        intro: Phrase::Named(|t| format!("Slutresultaten från {t} finns nu tillgängliga. Tack för att du deltog!")),
        action: Some("Visa resultaten"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Resultater publisert: {t}")),
        heading: Phrase::Text("Resultatene er klare"),
        intro: Phrase::Named(|t| format!("De endelige resultatene fra {t} er nå tilgjengelige. Takk for at du deltok!")),
        action: Some("Se resultatene"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم نشر النتائج: {t}")),
        heading: Phrase::Text("صدرت النتائج"),
        intro: Phrase::Named(|t| format!("النتائج النهائية لـ{t} متاحة الآن. شكراً لمشاركتك!")),
        action: Some("عرض النتائج"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("成绩已公布：{t}")),
        heading: Phrase::Text("成绩出炉"),
        intro: Phrase::Named(|t| format!("{t}的最终成绩现已公布。感谢您的参与！")),
        action: Some("查看成绩"),
        outro: None,
    });

    static ref REGISTRATION_OPEN: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Registration is open: {t}")),
        heading: Phrase::Text("Registration is now open"),
        intro: Phrase::Named(|t| format!("You can now register for {t}. Places are limited, so sign up early.")),
        action: Some("Register now"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Открыта регистрация: {t}")),
        heading: Phrase::Text("Регистрация открыта"),
        intro: Phrase::Named(|t| format!("Открыта регистрация на турнир «{t}». Количество мест ограничено, не откладывайте.")),
        action: Some("Зарегистрироваться"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Відкрито реєстрацію: {t}")),
        heading: Phrase::Text("Реєстрацію відкрито"),
        intro: Phrase::Named(|t| format!("Відкрито реєстрацію на турнір «{t}». Кількість місць обмежена, не зволікайте.")),
        action: Some("Зареєструватися"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Inscripciones abiertas: {t}")),
        heading: Phrase::Text("Las inscripciones están abiertas"),
        intro: Phrase::Named(|t| format!("Ya puedes inscribirte en {t}. Las plazas son limitadas, así que no esperes.")),
        action: Some("Inscribirme"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Inscriptions ouvertes : {t}")),
        heading: Phrase::Text("Les inscriptions sont ouvertes"),
        intro: Phrase::Named(|t| format!("Vous pouvez désormais vous inscrire à {t}. Les places sont limitées.")),
        action: Some("S'inscrire"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Anmeldung geöffnet: {t}")),
        heading: Phrase::Text("Die Anmeldung ist geöffnet"),
        intro: Phrase::Named(|t| format!("Du kannst dich jetzt für {t} anmelden. Die Plätze sind begrenzt.")),
        action: Some("Jetzt anmelden"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Iscrizioni aperte: {t}")),
        heading: Phrase::Text("Le iscrizioni sono aperte"),
        intro: Phrase::Named(|t| format!("Ora puoi iscriverti a {t}. I posti sono limitati, iscriviti presto.")),
        action: Some("Iscriviti ora"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Inscripcions obertes: {t}")),
        heading: Phrase::Text("Les inscripcions ja són obertes"),
        intro: Phrase::Named(|t| format!("Ja et pots inscriure a {t}. Les places són limitades, així que inscriu-te aviat.")),
        action: Some("Inscriu-te ara"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Inschrijving geopend: {t}")),
        heading: Phrase::Text("De inschrijving is geopend"),
        intro: Phrase::Named(|t| format!("Je kunt je nu inschrijven voor {t}. Het aantal plaatsen is beperkt, dus wees er snel bij.")),
        action: Some("Nu inschrijven"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Tilmeldingen er åben: {t}")),
        heading: Phrase::Text("Tilmeldingen er nu åben"),
        intro: Phrase::Named(|t| format!("Du kan nu tilmelde dig {t}. Der er et begrænset antal pladser, så tilmeld dig i god tid.")),
        action: Some("Tilmeld dig nu"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Anmälan är öppen: {t}")),
        heading: Phrase::Text("Anmälan är nu öppen"),
        intro: Phrase::Named(|t| format!("Nu kan du anmäla dig till {t}. Antalet platser är begränsat, så anmäl dig i tid.")),
        action: Some("Anmäl dig nu"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Påmeldingen er åpen: {t}")),
        heading: Phrase::Text("Påmeldingen er nå åpen"),
        intro: Phrase::Named(|t| format!("Nå kan du melde deg på {t}. Det er begrenset med plasser, så meld deg på tidlig.")),
        action: Some("Meld deg på nå"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("التسجيل مفتوح: {t}")),
        heading: Phrase::Text("باب التسجيل مفتوح الآن"),
        intro: Phrase::Named(|t| format!("يمكنك الآن التسجيل في {t}. الأماكن محدودة، فسارع بالتسجيل.")),
        action: Some("سجّل الآن"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("报名已开放：{t}")),
        heading: Phrase::Text("报名现已开放"),
        intro: Phrase::Named(|t| format!("您现在可以报名参加{t}。名额有限，请尽早报名。")),
        action: Some("立即报名"),
        outro: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ContentBuilder;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "recipientName": "Marc",
            "tournamentName": "Autumn Cup",
            "startDate": "2026-10-03",
            "endDate": "2026-10-04",
            "location": "Barcelona",
            "tournamentUrl": "https://example.com/t/autumn-cup"
        })
    }

    #[test]
    fn test_cancelled_with_reason() {
        let mut payload = sample();
        payload["reason"] = json!("Venue unavailable");

        let built = LocalizedBuilder::new(TOURNAMENT_CANCELLED, &CANCELLED, with_reason)
            .build(&payload, "ca")
            .unwrap();

        assert_eq!(
            built.subject.as_deref(),
            Some("Torneig cancel·lat: Autumn Cup")
        );
        assert!(built.document.contains("Venue unavailable"));
        assert!(built.document.contains("03/10/2026 – 04/10/2026"));
        assert!(!built.document.contains("class=\"button\""));
    }

    #[test]
    fn test_registration_deadline_is_localized() {
        let mut payload = sample();
        payload["registrationDeadline"] = json!("2026-09-20");

        let built = LocalizedBuilder::new(
            REGISTRATION_OPENED,
            &REGISTRATION_OPEN,
            with_registration_deadline,
        )
        .build(&payload, "de")
        .unwrap();

        assert!(built.document.contains("20.09.2026"));
        assert!(built.document.contains("Jetzt anmelden"));
        assert!(built.document.contains("https://example.com/t/autumn-cup"));
    }

    #[test]
    fn test_updated_without_changes_omits_row() {
        let built = LocalizedBuilder::new(TOURNAMENT_UPDATED, &UPDATED, with_changes)
            .build(&sample(), "en")
            .unwrap();

        assert!(!built.document.contains("What changed"));
        assert!(built.document.contains("Hello, Marc!"));
    }

    #[test]
    fn test_missing_start_date_is_invalid() {
        let mut payload = sample();
        payload.as_object_mut().unwrap().remove("startDate");

        assert!(LocalizedBuilder::new(TOURNAMENT_REMINDER, &REMINDER, notice_sections)
            .build(&payload, "en")
            .is_err());
    }
}
