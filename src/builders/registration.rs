//! Tournament registration kinds: a participant's entry moving through
//! review, payment and waitlist, plus the organizer notice

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::locale::LocaleTable;

use super::localized::{BuildContext, LocalizedBuilder, Messages, Phrase, Sections};
use super::payload::{self, CategoryRef, TournamentRef};
use super::registry::BuilderRegistry;

pub const REGISTRATION_RECEIVED: &str = "tournament-registration-received";
pub const REGISTRATION_CONFIRMED: &str = "tournament-registration-confirmed";
pub const REGISTRATION_REJECTED: &str = "tournament-registration-rejected";
pub const REGISTRATION_CANCELLED: &str = "tournament-registration-cancelled";
pub const REGISTRATION_WAITLISTED: &str = "tournament-registration-waitlisted";
pub const PAYMENT_REMINDER: &str = "tournament-payment-reminder";
pub const PAYMENT_RECEIVED: &str = "tournament-payment-received";
pub const ADMIN_NEW_REGISTRATION: &str = "tournament-admin-new-registration";

/// A participant's registration for one tournament
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub participant_name: Option<String>,
    pub participant_email: Option<String>,
    #[serde(flatten)]
    pub tournament: TournamentRef,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    pub price_single_category: Option<f64>,
    pub currency: Option<String>,
    pub amount_paid: Option<f64>,
    pub waitlist_position: Option<u32>,
    pub reason: Option<String>,
    /// Link for the call to action; the tournament page when absent
    pub action_url: Option<String>,
}

impl RegistrationPayload {
    fn total_price(&self) -> Option<f64> {
        payload::total_price(self.categories.len(), self.price_single_category)
    }
}

pub(super) fn register(registry: &mut BuilderRegistry) {
    registry.register(LocalizedBuilder::new(
        REGISTRATION_RECEIVED,
        &RECEIVED,
        with_payment_terms,
    ));
    registry.register(LocalizedBuilder::new(
        REGISTRATION_CONFIRMED,
        &CONFIRMED,
        participant_sections,
    ));
    registry.register(LocalizedBuilder::new(
        REGISTRATION_REJECTED,
        &REJECTED,
        with_reason,
    ));
    registry.register(LocalizedBuilder::new(
        REGISTRATION_CANCELLED,
        &CANCELLED,
        with_reason,
    ));
    registry.register(LocalizedBuilder::new(
        REGISTRATION_WAITLISTED,
        &WAITLISTED,
        waitlisted_sections,
    ));
    registry.register(LocalizedBuilder::new(
        PAYMENT_REMINDER,
        &PAYMENT_REMINDER_MESSAGES,
        with_payment_terms,
    ));
    registry.register(LocalizedBuilder::new(
        PAYMENT_RECEIVED,
        &PAYMENT_RECEIVED_MESSAGES,
        payment_received_sections,
    ));
    registry.register(LocalizedBuilder::new(
        ADMIN_NEW_REGISTRATION,
        &ADMIN_NEW,
        admin_sections,
    ));
}

fn participant_sections(p: &RegistrationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        recipient: p.participant_name.clone(),
        entity: Some(p.tournament.name.clone()),
        action_url: p.action_url.clone().or_else(|| p.tournament.url.clone()),
        ..Default::default()
    };
    p.tournament.add_details(&mut sections, ctx);
    sections.optional_detail(
        ctx.labels.categories,
        payload::category_list(&p.categories, ctx.labels),
    );
    sections
}

/// Entry fee for all categories and the payment deadline
fn with_payment_terms(p: &RegistrationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = participant_sections(p, ctx);
    if let Some(total) = p.total_price() {
        sections.detail(
            ctx.labels.price,
            payload::format_money(total, p.currency.as_deref()),
        );
    }
    if let Some(deadline) = payload::payment_deadline(p.tournament.start_date) {
        sections.detail(ctx.labels.payment_deadline, ctx.date(deadline));
    }
    sections
}

fn with_reason(p: &RegistrationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = participant_sections(p, ctx);
    sections.optional_detail(ctx.labels.reason, p.reason.clone());
    sections
}

fn waitlisted_sections(p: &RegistrationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = participant_sections(p, ctx);
    sections.optional_detail(
        ctx.labels.waitlist_position,
        p.waitlist_position.map(|pos| format!("#{pos}")),
    );
    sections
}

fn payment_received_sections(p: &RegistrationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = participant_sections(p, ctx);
    let paid = p.amount_paid.or_else(|| p.total_price());
    sections.optional_detail(
        ctx.labels.amount_paid,
        paid.map(|amount| payload::format_money(amount, p.currency.as_deref())),
    );
    sections
}

/// Organizer notice: no recipient name, the participant goes in the details
fn admin_sections(p: &RegistrationPayload, ctx: &BuildContext<'_>) -> Sections {
    let mut sections = Sections {
        entity: Some(p.tournament.name.clone()),
        action_url: p.action_url.clone(),
        ..Default::default()
    };
    sections.optional_detail(ctx.labels.participant, p.participant_name.clone());
    sections.optional_detail(ctx.labels.email, p.participant_email.clone());
    p.tournament.add_details(&mut sections, ctx);
    sections.optional_detail(
        ctx.labels.categories,
        payload::category_list(&p.categories, ctx.labels),
    );
    if let Some(total) = p.total_price() {
        sections.detail(
            ctx.labels.price,
            payload::format_money(total, p.currency.as_deref()),
        );
    }
    sections
}

lazy_static! {
    static ref RECEIVED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Registration received: {t}")),
        heading: Phrase::Text("We have received your registration"),
        intro: Phrase::Named(|t| format!("Thank you for registering for {t}. Your entry is now being reviewed by the organizers.")),
        action: Some("View tournament"),
        outro: Some("Please complete the payment before the deadline to secure your place."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Заявка получена: {t}")),
        heading: Phrase::Text("Мы получили вашу заявку"),
        intro: Phrase::Named(|t| format!("Спасибо за регистрацию на турнир «{t}». Организаторы рассмотрят вашу заявку.")),
        action: Some("Открыть турнир"),
        outro: Some("Пожалуйста, оплатите участие до указанного срока, чтобы сохранить место."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Заявку отримано: {t}")),
        heading: Phrase::Text("Ми отримали вашу заявку"),
        intro: Phrase::Named(|t| format!("Дякуємо за реєстрацію на турнір «{t}». Організатори розглянуть вашу заявку.")),
        action: Some("Відкрити турнір"),
        outro: Some("Будь ласка, сплатіть участь до вказаного терміну, щоб зберегти місце."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Inscripción recibida: {t}")),
        heading: Phrase::Text("Hemos recibido tu inscripción"),
        intro: Phrase::Named(|t| format!("Gracias por inscribirte en {t}. Los organizadores están revisando tu inscripción.")),
        action: Some("Ver torneo"),
        outro: Some("Realiza el pago antes de la fecha límite para asegurar tu plaza."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Inscription reçue : {t}")),
        heading: Phrase::Text("Nous avons bien reçu votre inscription"),
        intro: Phrase::Named(|t| format!("Merci de vous être inscrit à {t}. Les organisateurs examinent votre inscription.")),
        action: Some("Voir le tournoi"),
        outro: Some("Veuillez effectuer le paiement avant la date limite pour garantir votre place."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Anmeldung eingegangen: {t}")),
        heading: Phrase::Text("Wir haben deine Anmeldung erhalten"),
        intro: Phrase::Named(|t| format!("Danke für deine Anmeldung zu {t}. Die Veranstalter prüfen sie gerade.")),
        action: Some("Turnier ansehen"),
        outro: Some("Bitte bezahle vor Ablauf der Zahlungsfrist, um deinen Platz zu sichern."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Iscrizione ricevuta: {t}")),
        heading: Phrase::Text("Abbiamo ricevuto la tua iscrizione"),
        intro: Phrase::Named(|t| format!("Grazie per esserti iscritto a {t}. Gli organizzatori stanno esaminando la tua iscrizione.")),
        action: Some("Vedi torneo"),
        outro: Some("Completa il pagamento entro la scadenza per assicurarti il posto."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Inscripció rebuda: {t}")),
        heading: Phrase::Text("Hem rebut la teva inscripció"),
        intro: Phrase::Named(|t| format!("Gràcies per inscriure't a {t}. Els organitzadors estan revisant la teva inscripció.")),
        action: Some("Veure el torneig"),
        outro: Some("Fes el pagament abans de la data límit per assegurar la teva plaça."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Inschrijving ontvangen: {t}")),
        heading: Phrase::Text("We hebben je inschrijving ontvangen"),
        intro: Phrase::Named(|t| format!("Bedankt voor je inschrijving voor {t}. De organisatie beoordeelt je inschrijving.")),
        action: Some("Toernooi bekijken"),
        outro: Some("Betaal vóór de betaaltermijn om je plaats zeker te stellen."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Tilmelding modtaget: {t}")),
        heading: Phrase::Text("Vi har modtaget din tilmelding"),
        intro: Phrase::Named(|t| format!("Tak for din tilmelding til {t}. Arrangørerne gennemgår nu din tilmelding.")),
        action: Some("Se turneringen"),
        outro: Some("Betal inden fristen for at sikre din plads."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Anmälan mottagen: {t}")),
        heading: Phrase::Text("Vi har tagit emot din anmälan"),
        intro: Phrase::Named(|t| format!("Tack för din anmälan till {t}. Arrangörerna går nu igenom den.")),
        action: Some("Visa turneringen"),
        outro: Some("Betala före sista betalningsdag för att säkra din plats."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Påmelding mottatt: {t}")),
        heading: Phrase::Text("Vi har mottatt påmeldingen din"),
        intro: Phrase::Named(|t| format!("Takk for at du meldte deg på {t}. Arrangørene går nå gjennom påmeldingen.")),
        action: Some("Se turneringen"),
        outro: Some("Betal innen fristen for å sikre plassen din."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم استلام التسجيل: {t}")),
        heading: Phrase::Text("لقد استلمنا تسجيلك"),
        intro: Phrase::Named(|t| format!("شكراً لتسجيلك في {t}. يقوم المنظمون بمراجعة طلبك الآن.")),
        action: Some("عرض البطولة"),
        outro: Some("يرجى إتمام الدفع قبل الموعد النهائي لضمان مكانك."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("已收到报名：{t}")),
        heading: Phrase::Text("我们已收到您的报名"),
        intro: Phrase::Named(|t| format!("感谢您报名参加{t}。主办方正在审核您的报名。")),
        action: Some("查看赛事"),
        outro: Some("请在截止日期前完成付款以确保您的名额。"),
    });

    static ref CONFIRMED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Registration confirmed: {t}")),
        heading: Phrase::Text("Your registration is confirmed"),
        intro: Phrase::Named(|t| format!("Great news! Your place at {t} is confirmed. We look forward to seeing you.")),
        action: Some("View tournament"),
        outro: Some("Check the schedule closer to the start date."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Регистрация подтверждена: {t}")),
        heading: Phrase::Text("Ваша регистрация подтверждена"),
        intro: Phrase::Named(|t| format!("Отличные новости! Ваше участие в турнире «{t}» подтверждено. Ждём вас!")),
        action: Some("Открыть турнир"),
        outro: Some("Следите за расписанием ближе к началу турнира."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Реєстрацію підтверджено: {t}")),
        heading: Phrase::Text("Вашу реєстрацію підтверджено"),
        intro: Phrase::Named(|t| format!("Чудові новини! Вашу участь у турнірі «{t}» підтверджено. Чекаємо на вас!")),
        action: Some("Відкрити турнір"),
        outro: Some("Стежте за розкладом ближче до початку турніру."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Inscripción confirmada: {t}")),
        heading: Phrase::Text("Tu inscripción está confirmada"),
        intro: Phrase::Named(|t| format!("¡Buenas noticias! Tu plaza en {t} está confirmada. Te esperamos.")),
        action: Some("Ver torneo"),
        outro: Some("Consulta el calendario cuando se acerque la fecha de inicio."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Inscription confirmée : {t}")),
        heading: Phrase::Text("Votre inscription est confirmée"),
        intro: Phrase::Named(|t| format!("Bonne nouvelle ! Votre place pour {t} est confirmée. Nous avons hâte de vous voir.")),
        action: Some("Voir le tournoi"),
        outro: Some("Consultez le programme à l'approche du tournoi."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Anmeldung bestätigt: {t}")),
        heading: Phrase::Text("Deine Anmeldung ist bestätigt"),
        intro: Phrase::Named(|t| format!("Gute Nachrichten! Dein Platz bei {t} ist bestätigt. Wir freuen uns auf dich.")),
        action: Some("Turnier ansehen"),
        outro: Some("Schau kurz vor Turnierbeginn in den Spielplan."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Iscrizione confermata: {t}")),
        heading: Phrase::Text("La tua iscrizione è confermata"),
        intro: Phrase::Named(|t| format!("Ottime notizie! Il tuo posto a {t} è confermato. Ti aspettiamo.")),
        action: Some("Vedi torneo"),
        outro: Some("Controlla il programma in prossimità dell'inizio."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Inscripció confirmada: {t}")),
        heading: Phrase::Text("La teva inscripció està confirmada"),
        intro: Phrase::Named(|t| format!("Bones notícies! La teva plaça a {t} està confirmada. T'esperem.")),
        action: Some("Veure el torneig"),
        outro: Some("Consulta el calendari quan s'acosti la data d'inici."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Inschrijving bevestigd: {t}")),
        heading: Phrase::Text("Je inschrijving is bevestigd"),
        intro: Phrase::Named(|t| format!("Goed nieuws! Je plaats bij {t} is bevestigd. We kijken ernaar uit je te zien.")),
        action: Some("Toernooi bekijken"),
        outro: Some("Bekijk het schema vlak voor de start."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Tilmelding bekræftet: {t}")),
        heading: Phrase::Text("Din tilmelding er bekræftet"),
        intro: Phrase::Named(|t| format!("Gode nyheder! Din plads ved {t} er bekræftet. Vi glæder os til at se dig.")),
        action: Some("Se turneringen"),
        outro: Some("Tjek programmet, når starten nærmer sig."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Anmälan bekräftad: {t}")),
        heading: Phrase::Text("Din anmälan är bekräftad"),
        intro: Phrase::Named(|t| format!("Goda nyheter! Din plats i {t} är bekräftad. Vi ser fram emot att se dig.")),
        action: Some("Visa turneringen"),
        outro: Some("Kolla spelschemat när starten närmar sig."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Påmelding bekreftet: {t}")),
        heading: Phrase::Text("Påmeldingen din er bekreftet"),
        intro: Phrase::Named(|t| format!("Gode nyheter! Plassen din i {t} er bekreftet. Vi gleder oss til å se deg.")),
        action: Some("Se turneringen"),
        outro: Some("Sjekk programmet når starten nærmer seg."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم تأكيد التسجيل: {t}")),
        heading: Phrase::Text("تم تأكيد تسجيلك"),
        intro: Phrase::Named(|t| format!("أخبار رائعة! تم تأكيد مكانك في {t}. نتطلع إلى رؤيتك.")),
        action: Some("عرض البطولة"),
        outro: Some("تابع الجدول الزمني مع اقتراب موعد البداية."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("报名已确认：{t}")),
        heading: Phrase::Text("您的报名已确认"),
        intro: Phrase::Named(|t| format!("好消息！您在{t}的名额已确认，期待您的到来。")),
        action: Some("查看赛事"),
        outro: Some("临近开赛时请留意赛程安排。"),
    });

    static ref REJECTED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Registration declined: {t}")),
        heading: Phrase::Text("Your registration was not accepted"),
        intro: Phrase::Named(|t| format!("Unfortunately, the organizers of {t} could not accept your registration.")),
        action: None,
        outro: Some("If you have questions, reply to this email and we will help."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Заявка отклонена: {t}")),
        heading: Phrase::Text("Ваша заявка не принята"),
        intro: Phrase::Named(|t| format!("К сожалению, организаторы турнира «{t}» не смогли принять вашу заявку.")),
        action: None,
        outro: Some("Если у вас есть вопросы, ответьте на это письмо, и мы поможем."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Заявку відхилено: {t}")),
        heading: Phrase::Text("Вашу заявку не прийнято"),
        intro: Phrase::Named(|t| format!("На жаль, організатори турніру «{t}» не змогли прийняти вашу заявку.")),
        action: None,
        outro: Some("Якщо у вас є запитання, дайте відповідь на цей лист, і ми допоможемо."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Inscripción rechazada: {t}")),
        heading: Phrase::Text("Tu inscripción no ha sido aceptada"),
        intro: Phrase::Named(|t| format!("Lamentablemente, los organizadores de {t} no han podido aceptar tu inscripción.")),
        action: None,
        outro: Some("Si tienes preguntas, responde a este correo y te ayudaremos."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Inscription refusée : {t}")),
        heading: Phrase::Text("Votre inscription n'a pas été acceptée"),
        intro: Phrase::Named(|t| format!("Malheureusement, les organisateurs de {t} n'ont pas pu accepter votre inscription.")),
        action: None,
        outro: Some("Pour toute question, répondez à cet e-mail et nous vous aiderons."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Anmeldung abgelehnt: {t}")),
        heading: Phrase::Text("Deine Anmeldung wurde nicht angenommen"),
        intro: Phrase::Named(|t| format!("Leider konnten die Veranstalter von {t} deine Anmeldung nicht annehmen.")),
        action: None,
        outro: Some("Bei Fragen antworte einfach auf diese E-Mail."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Iscrizione rifiutata: {t}")),
        heading: Phrase::Text("La tua iscrizione non è stata accettata"),
        intro: Phrase::Named(|t| format!("Purtroppo gli organizzatori di {t} non hanno potuto accettare la tua iscrizione.")),
        action: None,
        outro: Some("Per qualsiasi domanda, rispondi a questa email."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Inscripció rebutjada: {t}")),
        heading: Phrase::Text("La teva inscripció no s'ha acceptat"),
        intro: Phrase::Named(|t| format!("Malauradament, els organitzadors de {t} no han pogut acceptar la teva inscripció.")),
        action: None,
        outro: Some("Si tens preguntes, respon aquest correu i t'ajudarem."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Inschrijving afgewezen: {t}")),
        heading: Phrase::Text("Je inschrijving is niet geaccepteerd"),
        intro: Phrase::Named(|t| format!("Helaas kon de organisatie van {t} je inschrijving niet accepteren.")),
        action: None,
        outro: Some("Heb je vragen? Beantwoord deze e-mail en we helpen je verder."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Tilmelding afvist: {t}")),
        heading: Phrase::Text("Din tilmelding blev ikke godkendt"),
        intro: Phrase::Named(|t| format!("Desværre kunne arrangørerne af {t} ikke godkende din tilmelding.")),
        action: None,
        outro: Some("Har du spørgsmål, så svar på denne e-mail."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Anmälan avböjd: {t}")),
        heading: Phrase::Text("Din anmälan godkändes inte"),
        intro: Phrase::Named(|t| format!("Tyvärr kunde arrangörerna av {t} inte godkänna din anmälan.")),
        action: None,
        outro: Some("Har du frågor kan du svara på detta mejl."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Påmelding avslått: {t}")),
        heading: Phrase::Text("Påmeldingen din ble ikke godkjent"),
        intro: Phrase::Named(|t| format!("Dessverre kunne ikke arrangørene av {t} godkjenne påmeldingen din.")),
        action: None,
        outro: Some("Har du spørsmål, kan du svare på denne e-posten."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم رفض التسجيل: {t}")),
        heading: Phrase::Text("لم يتم قبول تسجيلك"),
        intro: Phrase::Named(|t| format!("للأسف، لم يتمكن منظمو {t} من قبول تسجيلك.")),
        action: None,
        outro: Some("إذا كانت لديك أسئلة، يرجى الرد على هذا البريد وسنساعدك."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("报名未通过：{t}")),
        heading: Phrase::Text("您的报名未被接受"),
        intro: Phrase::Named(|t| format!("很遗憾，{t}的主办方未能接受您的报名。")),
        action: None,
        outro: Some("如有疑问，请直接回复此邮件。"),
    });

    static ref CANCELLED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Registration cancelled: {t}")),
        heading: Phrase::Text("Your registration has been cancelled"),
        intro: Phrase::Named(|t| format!("Your registration for {t} has been cancelled.")),
        action: Some("View tournament"),
        outro: Some("Any refund will be processed according to the tournament rules."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Регистрация отменена: {t}")),
        heading: Phrase::Text("Ваша регистрация отменена"),
        intro: Phrase::Named(|t| format!("Ваша регистрация на турнир «{t}» отменена.")),
        action: Some("Открыть турнир"),
        outro: Some("Возврат средств, если он положен, будет выполнен согласно регламенту турнира."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Реєстрацію скасовано: {t}")),
        heading: Phrase::Text("Вашу реєстрацію скасовано"),
        intro: Phrase::Named(|t| format!("Вашу реєстрацію на турнір «{t}» скасовано.")),
        action: Some("Відкрити турнір"),
        outro: Some("Повернення коштів, якщо воно передбачене, буде здійснено згідно з регламентом турніру."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Inscripción cancelada: {t}")),
        heading: Phrase::Text("Tu inscripción ha sido cancelada"),
        intro: Phrase::Named(|t| format!("Tu inscripción en {t} ha sido cancelada.")),
        action: Some("Ver torneo"),
        outro: Some("Cualquier reembolso se tramitará según el reglamento del torneo."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Inscription annulée : {t}")),
        heading: Phrase::Text("Votre inscription a été annulée"),
        intro: Phrase::Named(|t| format!("Votre inscription à {t} a été annulée.")),
        action: Some("Voir le tournoi"),
        outro: Some("Tout remboursement sera traité conformément au règlement du tournoi."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Anmeldung storniert: {t}")),
        heading: Phrase::Text("Deine Anmeldung wurde storniert"),
        intro: Phrase::Named(|t| format!("Deine Anmeldung zu {t} wurde storniert.")),
        action: Some("Turnier ansehen"),
        outro: Some("Eine eventuelle Rückerstattung erfolgt gemäß den Turnierregeln."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Iscrizione annullata: {t}")),
        heading: Phrase::Text("La tua iscrizione è stata annullata"),
        intro: Phrase::Named(|t| format!("La tua iscrizione a {t} è stata annullata.")),
        action: Some("Vedi torneo"),
        outro: Some("Eventuali rimborsi saranno gestiti secondo il regolamento del torneo."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Inscripció cancel·lada: {t}")),
        heading: Phrase::Text("La teva inscripció s'ha cancel·lat"),
        intro: Phrase::Named(|t| format!("La teva inscripció a {t} s'ha cancel·lat.")),
        action: Some("Veure el torneig"),
        outro: Some("Qualsevol reemborsament es tramitarà segons el reglament del torneig."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Inschrijving geannuleerd: {t}")),
        heading: Phrase::Text("Je inschrijving is geannuleerd"),
        intro: Phrase::Named(|t| format!("Je inschrijving voor {t} is geannuleerd.")),
        action: Some("Toernooi bekijken"),
        outro: Some("Een eventuele terugbetaling verloopt volgens het toernooireglement."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Tilmelding annulleret: {t}")),
        heading: Phrase::Text("Din tilmelding er annulleret"),
        intro: Phrase::Named(|t| format!("Din tilmelding til {t} er annulleret.")),
        action: Some("Se turneringen"),
        outro: Some("Eventuel refusion sker efter turneringens regler."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Anmälan avbokad: {t}")),
        heading: Phrase::Text("Din anmälan har avbokats"),
        intro: Phrase::Named(|t| format!("Din anmälan till {t} har avbokats.")),
        action: Some("Visa turneringen"),
        outro: Some("Eventuell återbetalning sker enligt turneringens regler."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Påmelding kansellert: {t}")),
        heading: Phrase::Text("Påmeldingen din er kansellert"),
        intro: Phrase::Named(|t| format!("Påmeldingen din til {t} er kansellert.")),
        action: Some("Se turneringen"),
        outro: Some("Eventuell refusjon behandles etter turneringens regler."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم إلغاء التسجيل: {t}")),
        heading: Phrase::Text("تم إلغاء تسجيلك"),
        intro: Phrase::Named(|t| format!("تم إلغاء تسجيلك في {t}.")),
        action: Some("عرض البطولة"),
        outro: Some("سيتم معالجة أي استرداد وفقاً للوائح البطولة."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("报名已取消：{t}")),
        heading: Phrase::Text("您的报名已取消"),
        intro: Phrase::Named(|t| format!("您在{t}的报名已取消。")),
        action: Some("查看赛事"),
        outro: Some("如有退款，将按照赛事规则处理。"),
    });

    static ref WAITLISTED: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("You are on the waiting list: {t}")),
        heading: Phrase::Text("You are on the waiting list"),
        intro: Phrase::Named(|t| format!("{t} is currently full, so we have placed you on the waiting list. We will email you as soon as a place opens up.")),
        action: Some("View tournament"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Вы в листе ожидания: {t}")),
        heading: Phrase::Text("Вы в листе ожидания"),
        intro: Phrase::Named(|t| format!("Все места на турнир «{t}» сейчас заняты, поэтому мы добавили вас в лист ожидания. Мы напишем, как только освободится место.")),
        action: Some("Открыть турнир"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Ви в листі очікування: {t}")),
        heading: Phrase::Text("Ви в листі очікування"),
        intro: Phrase::Named(|t| format!("Усі місця на турнір «{t}» зараз зайняті, тому ми додали вас до листа очікування. Ми напишемо, щойно звільниться місце.")),
        action: Some("Відкрити турнір"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Estás en la lista de espera: {t}")),
        heading: Phrase::Text("Estás en la lista de espera"),
        intro: Phrase::Named(|t| format!("{t} está completo, así que te hemos añadido a la lista de espera. Te escribiremos en cuanto quede una plaza libre.")),
        action: Some("Ver torneo"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Vous êtes sur liste d'attente : {t}")),
        heading: Phrase::Text("Vous êtes sur liste d'attente"),
        intro: Phrase::Named(|t| format!("{t} est complet, nous vous avons donc placé sur liste d'attente. Nous vous écrirons dès qu'une place se libère.")),
        action: Some("Voir le tournoi"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Du stehst auf der Warteliste: {t}")),
        heading: Phrase::Text("Du stehst auf der Warteliste"),
        intro: Phrase::Named(|t| format!("{t} ist derzeit ausgebucht, daher haben wir dich auf die Warteliste gesetzt. Wir melden uns, sobald ein Platz frei wird.")),
        action: Some("Turnier ansehen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Sei in lista d'attesa: {t}")),
        heading: Phrase::Text("Sei in lista d'attesa"),
        intro: Phrase::Named(|t| format!("{t} è al completo, quindi ti abbiamo inserito in lista d'attesa. Ti scriveremo appena si libera un posto.")),
        action: Some("Vedi torneo"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Ets a la llista d'espera: {t}")),
        heading: Phrase::Text("Ets a la llista d'espera"),
        intro: Phrase::Named(|t| format!("{t} està complet, així que t'hem afegit a la llista d'espera. T'escriurem tan bon punt quedi una plaça lliure.")),
        action: Some("Veure el torneig"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Je staat op de wachtlijst: {t}")),
        heading: Phrase::Text("Je staat op de wachtlijst"),
        intro: Phrase::Named(|t| format!("{t} is vol, daarom hebben we je op de wachtlijst gezet. We mailen je zodra er een plaats vrijkomt.")),
        action: Some("Toernooi bekijken"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Du er på ventelisten: {t}")),
        heading: Phrase::Text("Du er på ventelisten"),
        intro: Phrase::Named(|t| format!("{t} er fuldt booket, så vi har sat dig på ventelisten. Vi skriver, så snart der bliver en plads ledig.")),
        action: Some("Se turneringen"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Du står på väntelistan: {t}")),
        heading: Phrase::Text("Du står på väntelistan"),
        intro: Phrase::Named(|t| format!("{t} är fullbokad, så vi har satt dig på väntelistan. Vi hör av oss så snart en plats blir ledig.")),
        action: Some("Visa turneringen"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Du står på ventelisten: {t}")),
        heading: Phrase::Text("Du står på ventelisten"),
        intro: Phrase::Named(|t| format!("{t} er fullt, så vi har satt deg på ventelisten. Vi sender deg en e-post så snart en plass blir ledig.")),
        action: Some("Se turneringen"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("أنت على قائمة الانتظار: {t}")),
        heading: Phrase::Text("أنت على قائمة الانتظار"),
        intro: Phrase::Named(|t| format!("اكتمل العدد في {t}، لذلك أضفناك إلى قائمة الانتظار. سنراسلك فور توفر مكان.")),
        action: Some("عرض البطولة"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("您已进入候补名单：{t}")),
        heading: Phrase::Text("您已进入候补名单"),
        intro: Phrase::Named(|t| format!("{t}目前名额已满，我们已将您加入候补名单。一旦有空位，我们会立即通知您。")),
        action: Some("查看赛事"),
        outro: None,
    });

    static ref PAYMENT_REMINDER_MESSAGES: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Payment reminder: {t}")),
        heading: Phrase::Text("Your entry fee is still pending"),
        intro: Phrase::Named(|t| format!("We have not yet received the entry fee for {t}. Please complete the payment before the deadline below.")),
        action: Some("Pay now"),
        outro: Some("If you have already paid, please ignore this message."),
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Напоминание об оплате: {t}")),
        heading: Phrase::Text("Стартовый взнос ещё не оплачен"),
        intro: Phrase::Named(|t| format!("Мы ещё не получили стартовый взнос за турнир «{t}». Пожалуйста, оплатите до указанного ниже срока.")),
        action: Some("Оплатить"),
        outro: Some("Если вы уже оплатили, просто проигнорируйте это письмо."),
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Нагадування про оплату: {t}")),
        heading: Phrase::Text("Стартовий внесок ще не сплачено"),
        intro: Phrase::Named(|t| format!("Ми ще не отримали стартовий внесок за турнір «{t}». Будь ласка, сплатіть до вказаного нижче терміну.")),
        action: Some("Сплатити"),
        outro: Some("Якщо ви вже сплатили, просто проігноруйте цей лист."),
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Recordatorio de pago: {t}")),
        heading: Phrase::Text("Tu cuota de inscripción está pendiente"),
        intro: Phrase::Named(|t| format!("Aún no hemos recibido la cuota de inscripción de {t}. Realiza el pago antes de la fecha límite indicada.")),
        action: Some("Pagar ahora"),
        outro: Some("Si ya has pagado, ignora este mensaje."),
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Rappel de paiement : {t}")),
        heading: Phrase::Text("Vos frais d'inscription sont en attente"),
        intro: Phrase::Named(|t| format!("Nous n'avons pas encore reçu vos frais d'inscription pour {t}. Merci de régler avant la date limite ci-dessous.")),
        action: Some("Payer maintenant"),
        outro: Some("Si vous avez déjà payé, ignorez ce message."),
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Zahlungserinnerung: {t}")),
        heading: Phrase::Text("Deine Startgebühr ist noch offen"),
        intro: Phrase::Named(|t| format!("Wir haben die Startgebühr für {t} noch nicht erhalten. Bitte bezahle vor der unten genannten Frist.")),
        action: Some("Jetzt bezahlen"),
        outro: Some("Falls du bereits bezahlt hast, ignoriere diese Nachricht."),
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Promemoria di pagamento: {t}")),
        heading: Phrase::Text("La quota di iscrizione è ancora in sospeso"),
        intro: Phrase::Named(|t| format!("Non abbiamo ancora ricevuto la quota di iscrizione per {t}. Completa il pagamento entro la scadenza indicata.")),
        action: Some("Paga ora"),
        outro: Some("Se hai già pagato, ignora questo messaggio."),
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Recordatori de pagament: {t}")),
        heading: Phrase::Text("La teva quota d'inscripció està pendent"),
        intro: Phrase::Named(|t| format!("Encara no hem rebut la quota d'inscripció de {t}. Fes el pagament abans de la data límit indicada.")),
        action: Some("Paga ara"),
        outro: Some("Si ja has pagat, ignora aquest missatge."),
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Betalingsherinnering: {t}")),
        heading: Phrase::Text("Je inschrijfgeld staat nog open"),
        intro: Phrase::Named(|t| format!("We hebben het inschrijfgeld voor {t} nog niet ontvangen. Betaal vóór de onderstaande termijn.")),
        action: Some("Nu betalen"),
        outro: Some("Heb je al betaald? Dan kun je dit bericht negeren."),
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Betalingspåmindelse: {t}")),
        heading: Phrase::Text("Dit startgebyr mangler stadig"),
        intro: Phrase::Named(|t| format!("Vi har endnu ikke modtaget startgebyret for {t}. Betal venligst inden fristen nedenfor.")),
        action: Some("Betal nu"),
        outro: Some("Har du allerede betalt, kan du se bort fra denne besked."),
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Betalningspåminnelse: {t}")),
        heading: Phrase::Text("Din anmälningsavgift är obetald"),
        intro: Phrase::Named(|t| format!("Vi har ännu inte fått anmälningsavgiften för {t}. Betala före sista betalningsdag nedan.")),
        action: Some("Betala nu"),
        outro: Some("Om du redan har betalat kan du bortse från detta meddelande."),
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Betalingspåminnelse: {t}")),
        heading: Phrase::Text("Startavgiften er fortsatt ubetalt"),
        intro: Phrase::Named(|t| format!("Vi har ennå ikke mottatt startavgiften for {t}. Betal innen fristen nedenfor.")),
        action: Some("Betal nå"),
        outro: Some("Har du allerede betalt, kan du se bort fra denne meldingen."),
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تذكير بالدفع: {t}")),
        heading: Phrase::Text("رسوم التسجيل لم تُدفع بعد"),
        intro: Phrase::Named(|t| format!("لم نستلم بعد رسوم التسجيل في {t}. يرجى إتمام الدفع قبل الموعد المحدد أدناه.")),
        action: Some("ادفع الآن"),
        outro: Some("إذا كنت قد دفعت بالفعل، يرجى تجاهل هذه الرسالة."),
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("付款提醒：{t}")),
        heading: Phrase::Text("您的报名费尚未支付"),
        intro: Phrase::Named(|t| format!("我们尚未收到{t}的报名费，请在以下截止日期前完成付款。")),
        action: Some("立即付款"),
        outro: Some("如果您已付款，请忽略此邮件。"),
    });

    static ref PAYMENT_RECEIVED_MESSAGES: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("Payment received: {t}")),
        heading: Phrase::Text("Thank you for your payment"),
        intro: Phrase::Named(|t| format!("We have received your entry fee for {t}. Your registration is now fully paid.")),
        action: Some("View tournament"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Оплата получена: {t}")),
        heading: Phrase::Text("Спасибо за оплату"),
        intro: Phrase::Named(|t| format!("Мы получили ваш стартовый взнос за турнир «{t}». Регистрация полностью оплачена.")),
        action: Some("Открыть турнир"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Оплату отримано: {t}")),
        heading: Phrase::Text("Дякуємо за оплату"),
        intro: Phrase::Named(|t| format!("Ми отримали ваш стартовий внесок за турнір «{t}». Реєстрацію повністю сплачено.")),
        action: Some("Відкрити турнір"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Pago recibido: {t}")),
        heading: Phrase::Text("Gracias por tu pago"),
        intro: Phrase::Named(|t| format!("Hemos recibido tu cuota de inscripción de {t}. Tu inscripción está completamente pagada.")),
        action: Some("Ver torneo"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Paiement reçu : {t}")),
        heading: Phrase::Text("Merci pour votre paiement"),
        intro: Phrase::Named(|t| format!("Nous avons bien reçu vos frais d'inscription pour {t}. Votre inscription est désormais entièrement réglée.")),
        action: Some("Voir le tournoi"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Zahlung eingegangen: {t}")),
        heading: Phrase::Text("Danke für deine Zahlung"),
        intro: Phrase::Named(|t| format!("Wir haben deine Startgebühr für {t} erhalten. Deine Anmeldung ist jetzt vollständig bezahlt.")),
        action: Some("Turnier ansehen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Pagamento ricevuto: {t}")),
        heading: Phrase::Text("Grazie per il pagamento"),
        intro: Phrase::Named(|t| format!("Abbiamo ricevuto la quota di iscrizione per {t}. La tua iscrizione è ora interamente pagata.")),
        action: Some("Vedi torneo"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Pagament rebut: {t}")),
        heading: Phrase::Text("Gràcies pel teu pagament"),
        intro: Phrase::Named(|t| format!("Hem rebut la quota d'inscripció per a {t}. La teva inscripció ja està totalment pagada.")),
        action: Some("Veure el torneig"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Betaling ontvangen: {t}")),
        heading: Phrase::Text("Bedankt voor je betaling"),
        intro: Phrase::Named(|t| format!("We hebben je inschrijfgeld voor {t} ontvangen. Je inschrijving is nu volledig betaald.")),
        action: Some("Toernooi bekijken"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Betaling modtaget: {t}")),
        heading: Phrase::Text("Tak for din betaling"),
        intro: Phrase::Named(|t| format!("Vi har modtaget dit deltagergebyr for {t}. Din tilmelding er nu fuldt betalt.")),
        action: Some("Se turneringen"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Betalning mottagen: {t}")),
        heading: Phrase::Text("Tack för din betalning"),
        intro: Phrase::Named(|t| format!("Vi har tagit emot din anmälningsavgift för {t}. Din anmälan är nu helt betald.")),
        action: Some("Visa turneringen"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Betaling mottatt: {t}")),
        heading: Phrase::Text("Takk for betalingen"),
        intro: Phrase::Named(|t| format!("Vi har mottatt startkontingenten din for {t}. Påmeldingen din er nå fullt betalt.")),
        action: Some("Se turneringen"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تم استلام الدفعة: {t}")),
        heading: Phrase::Text("شكراً لك على الدفع"),
        intro: Phrase::Named(|t| format!("لقد استلمنا رسوم مشاركتك في {t}. تم الآن سداد تسجيلك بالكامل.")),
        action: Some("عرض البطولة"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("已收到付款：{t}")),
        heading: Phrase::Text("感谢您的付款"),
        intro: Phrase::Named(|t| format!("我们已收到您{t}的报名费。您的报名费用已全部付清。")),
        action: Some("查看赛事"),
        outro: None,
    });

    static ref ADMIN_NEW: LocaleTable<Messages> = LocaleTable::new(Messages {
        subject: Phrase::Named(|t| format!("New registration: {t}")),
        heading: Phrase::Text("A new registration has arrived"),
        intro: Phrase::Named(|t| format!("A participant has registered for {t}. Review the entry in the admin panel.")),
        action: Some("Open admin panel"),
        outro: None,
    })
    .with("ru", Messages {
        subject: Phrase::Named(|t| format!("Новая заявка: {t}")),
        heading: Phrase::Text("Поступила новая заявка"),
        intro: Phrase::Named(|t| format!("Участник зарегистрировался на турнир «{t}». Проверьте заявку в панели администратора.")),
        action: Some("Открыть панель администратора"),
        outro: None,
    })
    .with("ua", Messages {
        subject: Phrase::Named(|t| format!("Нова заявка: {t}")),
        heading: Phrase::Text("Надійшла нова заявка"),
        intro: Phrase::Named(|t| format!("Учасник зареєструвався на турнір «{t}». Перевірте заявку в панелі адміністратора.")),
        action: Some("Відкрити панель адміністратора"),
        outro: None,
    })
    .with("es", Messages {
        subject: Phrase::Named(|t| format!("Nueva inscripción: {t}")),
        heading: Phrase::Text("Ha llegado una nueva inscripción"),
        intro: Phrase::Named(|t| format!("Un participante se ha inscrito en {t}. Revisa la inscripción en el panel de administración.")),
        action: Some("Abrir panel de administración"),
        outro: None,
    })
    .with("fr", Messages {
        subject: Phrase::Named(|t| format!("Nouvelle inscription : {t}")),
        heading: Phrase::Text("Une nouvelle inscription est arrivée"),
        intro: Phrase::Named(|t| format!("Un participant s'est inscrit à {t}. Consultez l'inscription dans le panneau d'administration.")),
        action: Some("Ouvrir l'administration"),
        outro: None,
    })
    .with("de", Messages {
        subject: Phrase::Named(|t| format!("Neue Anmeldung: {t}")),
        heading: Phrase::Text("Eine neue Anmeldung ist eingegangen"),
        intro: Phrase::Named(|t| format!("Jemand hat sich zu {t} angemeldet. Prüfe die Anmeldung im Adminbereich.")),
        action: Some("Adminbereich öffnen"),
        outro: None,
    })
    .with("it", Messages {
        subject: Phrase::Named(|t| format!("Nuova iscrizione: {t}")),
        heading: Phrase::Text("È arrivata una nuova iscrizione"),
        intro: Phrase::Named(|t| format!("Un partecipante si è iscritto a {t}. Controlla l'iscrizione nel pannello di amministrazione.")),
        action: Some("Apri pannello di amministrazione"),
        outro: None,
    })
    .with("ca", Messages {
        subject: Phrase::Named(|t| format!("Nova inscripció: {t}")),
        heading: Phrase::Text("Ha arribat una nova inscripció"),
        intro: Phrase::Named(|t| format!("Un participant s'ha inscrit a {t}. Revisa la inscripció al tauler d'administració.")),
        action: Some("Obrir el tauler d'administració"),
        outro: None,
    })
    .with("nl", Messages {
        subject: Phrase::Named(|t| format!("Nieuwe inschrijving: {t}")),
        heading: Phrase::Text("Er is een nieuwe inschrijving binnengekomen"),
        intro: Phrase::Named(|t| format!("Een deelnemer heeft zich ingeschreven voor {t}. Bekijk de inschrijving in het beheerpaneel.")),
        action: Some("Beheerpaneel openen"),
        outro: None,
    })
    .with("da", Messages {
        subject: Phrase::Named(|t| format!("Ny tilmelding: {t}")),
        heading: Phrase::Text("Der er kommet en ny tilmelding"),
        intro: Phrase::Named(|t| format!("En deltager har tilmeldt sig {t}. Gennemgå tilmeldingen i administrationspanelet.")),
        action: Some("Åbn administrationspanelet"),
        outro: None,
    })
    .with("sv", Messages {
        subject: Phrase::Named(|t| format!("Ny anmälan: {t}")),
        heading: Phrase::Text("En ny anmälan har kommit in"),
        intro: Phrase::Named(|t| format!("En deltagare har anmält sig till {t}. Granska anmälan i adminpanelen.")),
        action: Some("Öppna adminpanelen"),
        outro: None,
    })
    .with("no", Messages {
        subject: Phrase::Named(|t| format!("Ny påmelding: {t}")),
        heading: Phrase::Text("En ny påmelding har kommet inn"),
        intro: Phrase::Named(|t| format!("En deltaker har meldt seg på {t}. Gå gjennom påmeldingen i adminpanelet.")),
        action: Some("Åpne adminpanelet"),
        outro: None,
    })
    .with("ar", Messages {
        subject: Phrase::Named(|t| format!("تسجيل جديد: {t}")),
        heading: Phrase::Text("وصل تسجيل جديد"),
        intro: Phrase::Named(|t| format!("سجّل مشارك في {t}. راجع الطلب في لوحة الإدارة.")),
        action: Some("فتح لوحة الإدارة"),
        outro: None,
    })
    .with("zh", Messages {
        subject: Phrase::Named(|t| format!("新报名：{t}")),
        heading: Phrase::Text("收到一条新报名"),
        intro: Phrase::Named(|t| format!("有参赛者报名了{t}。请在管理后台审核该报名。")),
        action: Some("打开管理后台"),
        outro: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ContentBuilder;
    use serde_json::json;

    fn builder(
        kind: &'static str,
        messages: &'static LocaleTable<Messages>,
        sections: fn(&RegistrationPayload, &BuildContext<'_>) -> Sections,
    ) -> LocalizedBuilder<RegistrationPayload> {
        LocalizedBuilder::new(kind, messages, sections)
    }

    fn sample() -> serde_json::Value {
        json!({
            "participantName": "Ann",
            "tournamentName": "Spring Open",
            "startDate": "2026-03-10",
            "endDate": "2026-03-12",
            "location": "Valencia",
            "tournamentUrl": "https://example.com/t/spring-open",
            "categories": [{"gender": "women", "ageGroup": "U18"}, "Open"],
            "priceSingleCategory": 40
        })
    }

    #[test]
    fn test_received_derives_total_and_deadline() {
        let built = builder(REGISTRATION_RECEIVED, &RECEIVED, with_payment_terms)
            .build(&sample(), "en")
            .unwrap();

        assert_eq!(
            built.subject.as_deref(),
            Some("Registration received: Spring Open")
        );
        assert!(built.document.contains("80 €"));
        assert!(built.document.contains("February 23, 2026"));
        assert!(built.document.contains("Women U18, Open"));
        assert!(built.document.contains("Hello, Ann!"));
    }

    #[test]
    fn test_received_single_category_uses_unit_price() {
        let mut payload = sample();
        payload["categories"] = json!(["Open"]);
        payload["currency"] = json!("USD");

        let built = builder(REGISTRATION_RECEIVED, &RECEIVED, with_payment_terms)
            .build(&payload, "en")
            .unwrap();
        assert!(built.document.contains("40 USD"));
        assert!(!built.document.contains("80 USD"));
    }

    #[test]
    fn test_received_without_price_omits_row() {
        let mut payload = sample();
        payload.as_object_mut().unwrap().remove("priceSingleCategory");

        let built = builder(REGISTRATION_RECEIVED, &RECEIVED, with_payment_terms)
            .build(&payload, "en")
            .unwrap();
        assert!(!built.document.contains("Entry fee"));
        assert!(built.document.contains("February 23, 2026"));
    }

    #[test]
    fn test_received_localized_date_and_quotes() {
        let built = builder(REGISTRATION_RECEIVED, &RECEIVED, with_payment_terms)
            .build(&sample(), "ru")
            .unwrap();

        assert!(built.document.contains("«Spring Open»"));
        assert!(built.document.contains("23.02.2026"));
        assert!(built.document.contains("Женщины U18"));
    }

    #[test]
    fn test_missing_tournament_name_is_invalid() {
        let mut payload = sample();
        payload.as_object_mut().unwrap().remove("tournamentName");

        let err = builder(REGISTRATION_RECEIVED, &RECEIVED, with_payment_terms)
            .build(&payload, "en")
            .unwrap_err();
        assert!(err.to_string().contains(REGISTRATION_RECEIVED));
    }

    #[test]
    fn test_cancelled_localized_in_chinese() {
        let built = builder(REGISTRATION_CANCELLED, &CANCELLED, with_reason)
            .build(&sample(), "zh")
            .unwrap();

        assert_eq!(built.subject.as_deref(), Some("报名已取消：Spring Open"));
        assert!(built.document.contains("lang=\"zh\""));
        assert!(built.document.contains("2026年03月10日"));
        assert!(built.document.contains("如有退款，将按照赛事规则处理。"));
    }

    #[test]
    fn test_admin_notice_localized() {
        let built = builder(ADMIN_NEW_REGISTRATION, &ADMIN_NEW, admin_sections)
            .build(&sample(), "ua")
            .unwrap();
        assert!(built.subject.is_some());
        assert_ne!(built.subject.as_deref(), Some("New registration: Spring Open"));

        let built = builder(ADMIN_NEW_REGISTRATION, &ADMIN_NEW, admin_sections)
            .build(&sample(), "de")
            .unwrap();
        assert_eq!(built.subject.as_deref(), Some("Neue Anmeldung: Spring Open"));
    }

    #[test]
    fn test_unsupported_locale_uses_english_messages() {
        let built = builder(REGISTRATION_CANCELLED, &CANCELLED, with_reason)
            .build(&sample(), "pt")
            .unwrap();

        assert_eq!(
            built.subject.as_deref(),
            Some("Registration cancelled: Spring Open")
        );
    }

    #[test]
    fn test_waitlist_position_and_reason() {
        let mut payload = sample();
        payload["waitlistPosition"] = json!(3);
        payload["reason"] = json!("Category full");

        let waitlisted = builder(REGISTRATION_WAITLISTED, &WAITLISTED, waitlisted_sections)
            .build(&payload, "en")
            .unwrap();
        assert!(waitlisted.document.contains("#3"));

        let rejected = builder(REGISTRATION_REJECTED, &REJECTED, with_reason)
            .build(&payload, "en")
            .unwrap();
        assert!(rejected.document.contains("Category full"));
        assert!(!rejected.document.contains("class=\"button\""));
    }

    #[test]
    fn test_payment_received_prefers_amount_paid() {
        let mut payload = sample();
        payload["amountPaid"] = json!(75.5);

        let built = builder(PAYMENT_RECEIVED, &PAYMENT_RECEIVED_MESSAGES, payment_received_sections)
            .build(&payload, "es")
            .unwrap();
        assert!(built.document.contains("75.50 €"));
    }

    #[test]
    fn test_admin_notice_lists_participant() {
        let mut payload = sample();
        payload["participantEmail"] = json!("ann@example.com");
        payload["actionUrl"] = json!("https://example.com/admin/registrations/7");

        let built = builder(ADMIN_NEW_REGISTRATION, &ADMIN_NEW, admin_sections)
            .build(&payload, "en")
            .unwrap();
        assert!(built.document.contains("ann@example.com"));
        assert!(built.document.contains("/admin/registrations/7"));
        assert!(!built.document.contains("Hello, Ann!"));
    }
}
