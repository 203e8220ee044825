//! Labels shared by all builders

use lazy_static::lazy_static;

use crate::locale::{self, LocaleTable};

/// Greeting, field labels and sign-off for one locale
pub struct Labels {
    pub greeting: fn(&str) -> String,
    pub greeting_generic: &'static str,
    pub tournament: &'static str,
    pub dates: &'static str,
    pub location: &'static str,
    pub categories: &'static str,
    pub price: &'static str,
    pub payment_deadline: &'static str,
    pub amount_paid: &'static str,
    pub waitlist_position: &'static str,
    pub registration_deadline: &'static str,
    pub participant: &'static str,
    pub email: &'static str,
    pub reason: &'static str,
    pub role: &'static str,
    pub permissions: &'static str,
    pub club: &'static str,
    pub invited_by: &'static str,
    pub message: &'static str,
    pub changes: &'static str,
    pub link_expires: fn(u32) -> String,
    pub link_fallback: &'static str,
    pub sign_off: &'static str,
    pub men: &'static str,
    pub women: &'static str,
    pub mixed: &'static str,
}

/// Labels for `requested`, falling back to English
pub fn for_locale(requested: &str) -> &'static Labels {
    locale::resolve(requested, &*LABELS)
}

lazy_static! {
    static ref LABELS: LocaleTable<Labels> = LocaleTable::new(Labels {
        greeting: |name| format!("Hello, {name}!"),
        greeting_generic: "Hello!",
        tournament: "Tournament",
        dates: "Dates",
        location: "Location",
        categories: "Categories",
        price: "Entry fee",
        payment_deadline: "Payment deadline",
        amount_paid: "Amount paid",
        waitlist_position: "Position on the waiting list",
        registration_deadline: "Registration closes",
        participant: "Participant",
        email: "Email",
        reason: "Reason",
        role: "Role",
        permissions: "Permissions",
        club: "Club",
        invited_by: "Invited by",
        message: "Message",
        changes: "What changed",
        link_expires: |hours| format!("This link expires in {hours} hours."),
        link_fallback: "If the button does not work, copy this link into your browser:",
        sign_off: "Best regards, the tournament team",
        men: "Men",
        women: "Women",
        mixed: "Mixed",
    })
    .with("ru", Labels {
        greeting: |name| format!("Здравствуйте, {name}!"),
        greeting_generic: "Здравствуйте!",
        tournament: "Турнир",
        dates: "Даты",
        location: "Место проведения",
        categories: "Категории",
        price: "Стартовый взнос",
        payment_deadline: "Оплатить до",
        amount_paid: "Оплачено",
        waitlist_position: "Место в листе ожидания",
        registration_deadline: "Регистрация закрывается",
        participant: "Участник",
        email: "Эл. почта",
        reason: "Причина",
        role: "Роль",
        permissions: "Права доступа",
        club: "Клуб",
        invited_by: "Приглашение от",
        message: "Сообщение",
        changes: "Что изменилось",
        link_expires: |hours| format!("Ссылка действительна {hours} ч."),
        link_fallback: "Если кнопка не работает, скопируйте эту ссылку в браузер:",
        sign_off: "С уважением, команда турнира",
        men: "Мужчины",
        women: "Женщины",
        mixed: "Смешанный",
    })
    .with("ua", Labels {
        greeting: |name| format!("Вітаємо, {name}!"),
        greeting_generic: "Вітаємо!",
        tournament: "Турнір",
        dates: "Дати",
        location: "Місце проведення",
        categories: "Категорії",
        price: "Стартовий внесок",
        payment_deadline: "Оплатити до",
        amount_paid: "Сплачено",
        waitlist_position: "Місце в листі очікування",
        registration_deadline: "Реєстрація закривається",
        participant: "Учасник",
        email: "Ел. пошта",
        reason: "Причина",
        role: "Роль",
        permissions: "Права доступу",
        club: "Клуб",
        invited_by: "Запрошення від",
        message: "Повідомлення",
        changes: "Що змінилося",
        link_expires: |hours| format!("Посилання дійсне {hours} год."),
        link_fallback: "Якщо кнопка не працює, скопіюйте це посилання в браузер:",
        sign_off: "З повагою, команда турніру",
        men: "Чоловіки",
        women: "Жінки",
        mixed: "Змішаний",
    })
    .with("es", Labels {
        greeting: |name| format!("¡Hola, {name}!"),
        greeting_generic: "¡Hola!",
        tournament: "Torneo",
        dates: "Fechas",
        location: "Lugar",
        categories: "Categorías",
        price: "Cuota de inscripción",
        payment_deadline: "Fecha límite de pago",
        amount_paid: "Importe pagado",
        waitlist_position: "Posición en la lista de espera",
        registration_deadline: "Cierre de inscripciones",
        participant: "Participante",
        email: "Correo electrónico",
        reason: "Motivo",
        role: "Rol",
        permissions: "Permisos",
        club: "Club",
        invited_by: "Invitado por",
        message: "Mensaje",
        changes: "Cambios",
        link_expires: |hours| format!("Este enlace caduca en {hours} horas."),
        link_fallback: "Si el botón no funciona, copia este enlace en tu navegador:",
        sign_off: "Saludos cordiales, el equipo del torneo",
        men: "Masculino",
        women: "Femenino",
        mixed: "Mixto",
    })
    .with("fr", Labels {
        greeting: |name| format!("Bonjour {name} !"),
        greeting_generic: "Bonjour !",
        tournament: "Tournoi",
        dates: "Dates",
        location: "Lieu",
        categories: "Catégories",
        price: "Frais d'inscription",
        payment_deadline: "Date limite de paiement",
        amount_paid: "Montant payé",
        waitlist_position: "Position sur la liste d'attente",
        registration_deadline: "Clôture des inscriptions",
        participant: "Participant",
        email: "E-mail",
        reason: "Motif",
        role: "Rôle",
        permissions: "Autorisations",
        club: "Club",
        invited_by: "Invité par",
        message: "Message",
        changes: "Modifications",
        link_expires: |hours| format!("Ce lien expire dans {hours} heures."),
        link_fallback: "Si le bouton ne fonctionne pas, copiez ce lien dans votre navigateur :",
        sign_off: "Cordialement, l'équipe du tournoi",
        men: "Hommes",
        women: "Femmes",
        mixed: "Mixte",
    })
    .with("de", Labels {
        greeting: |name| format!("Hallo {name}!"),
        greeting_generic: "Hallo!",
        tournament: "Turnier",
        dates: "Zeitraum",
        location: "Ort",
        categories: "Kategorien",
        price: "Startgebühr",
        payment_deadline: "Zahlungsfrist",
        amount_paid: "Bezahlter Betrag",
        waitlist_position: "Position auf der Warteliste",
        registration_deadline: "Anmeldeschluss",
        participant: "Teilnehmer",
        email: "E-Mail",
        reason: "Grund",
        role: "Rolle",
        permissions: "Berechtigungen",
        club: "Verein",
        invited_by: "Eingeladen von",
        message: "Nachricht",
        changes: "Änderungen",
        link_expires: |hours| format!("Dieser Link ist {hours} Stunden gültig."),
        link_fallback: "Falls die Schaltfläche nicht funktioniert, kopiere diesen Link in deinen Browser:",
        sign_off: "Viele Grüße, dein Turnierteam",
        men: "Herren",
        women: "Damen",
        mixed: "Mixed",
    })
    .with("it", Labels {
        greeting: |name| format!("Ciao {name}!"),
        greeting_generic: "Ciao!",
        tournament: "Torneo",
        dates: "Date",
        location: "Luogo",
        categories: "Categorie",
        price: "Quota di iscrizione",
        payment_deadline: "Scadenza del pagamento",
        amount_paid: "Importo pagato",
        waitlist_position: "Posizione in lista d'attesa",
        registration_deadline: "Chiusura iscrizioni",
        participant: "Partecipante",
        email: "Email",
        reason: "Motivo",
        role: "Ruolo",
        permissions: "Permessi",
        club: "Club",
        invited_by: "Invitato da",
        message: "Messaggio",
        changes: "Modifiche",
        link_expires: |hours| format!("Questo link scade tra {hours} ore."),
        link_fallback: "Se il pulsante non funziona, copia questo link nel browser:",
        sign_off: "Cordiali saluti, lo staff del torneo",
        men: "Maschile",
        women: "Femminile",
        mixed: "Misto",
    })
    .with("ca", Labels {
        greeting: |name| format!("Hola, {name}!"),
        greeting_generic: "Hola!",
        tournament: "Torneig",
        dates: "Dates",
        location: "Lloc",
        categories: "Categories",
        price: "Quota d'inscripció",
        payment_deadline: "Data límit de pagament",
        amount_paid: "Import pagat",
        waitlist_position: "Posició a la llista d'espera",
        registration_deadline: "Tancament d'inscripcions",
        participant: "Participant",
        email: "Correu electrònic",
        reason: "Motiu",
        role: "Rol",
        permissions: "Permisos",
        club: "Club",
        invited_by: "Convidat per",
        message: "Missatge",
        changes: "Canvis",
        link_expires: |hours| format!("Aquest enllaç caduca en {hours} hores."),
        link_fallback: "Si el botó no funciona, copia aquest enllaç al navegador:",
        sign_off: "Salutacions, l'equip del torneig",
        men: "Masculí",
        women: "Femení",
        mixed: "Mixt",
    })
    .with("nl", Labels {
        greeting: |name| format!("Hallo {name}!"),
        greeting_generic: "Hallo!",
        tournament: "Toernooi",
        dates: "Data",
        location: "Locatie",
        categories: "Categorieën",
        price: "Inschrijfgeld",
        payment_deadline: "Betaaltermijn",
        amount_paid: "Betaald bedrag",
        waitlist_position: "Positie op de wachtlijst",
        registration_deadline: "Inschrijving sluit",
        participant: "Deelnemer",
        email: "E-mail",
        reason: "Reden",
        role: "Rol",
        permissions: "Rechten",
        club: "Club",
        invited_by: "Uitgenodigd door",
        message: "Bericht",
        changes: "Wijzigingen",
        link_expires: |hours| format!("Deze link verloopt over {hours} uur."),
        link_fallback: "Werkt de knop niet? Kopieer deze link naar je browser:",
        sign_off: "Met vriendelijke groet, het toernooiteam",
        men: "Heren",
        women: "Dames",
        mixed: "Gemengd",
    })
    .with("da", Labels {
        greeting: |name| format!("Hej {name}!"),
        greeting_generic: "Hej!",
        tournament: "Turnering",
        dates: "Datoer",
        location: "Sted",
        categories: "Kategorier",
        price: "Startgebyr",
        payment_deadline: "Betalingsfrist",
        amount_paid: "Betalt beløb",
        waitlist_position: "Plads på ventelisten",
        registration_deadline: "Tilmelding lukker",
        participant: "Deltager",
        email: "E-mail",
        reason: "Årsag",
        role: "Rolle",
        permissions: "Rettigheder",
        club: "Klub",
        invited_by: "Inviteret af",
        message: "Besked",
        changes: "Ændringer",
        link_expires: |hours| format!("Dette link udløber om {hours} timer."),
        link_fallback: "Hvis knappen ikke virker, så kopiér dette link ind i din browser:",
        sign_off: "Venlig hilsen, turneringsholdet",
        men: "Herrer",
        women: "Damer",
        mixed: "Mixed",
    })
    .with("sv", Labels {
        greeting: |name| format!("Hej {name}!"),
        greeting_generic: "Hej!",
        tournament: "Turnering",
        dates: "Datum",
        location: "Plats",
        categories: "Klasser",
        price: "Anmälningsavgift",
        payment_deadline: "Sista betalningsdag",
        amount_paid: "Betalt belopp",
        waitlist_position: "Plats på väntelistan",
        registration_deadline: "Anmälan stänger",
        participant: "Deltagare",
        email: "E-post",
        reason: "Anledning",
        role: "Roll",
        permissions: "Behörigheter",
        club: "Klubb",
        invited_by: "Inbjuden av",
        message: "Meddelande",
        changes: "Ändringar",
        link_expires: |hours| format!("Länken upphör att gälla om {hours} timmar."),
        link_fallback: "Om knappen inte fungerar, kopiera länken till din webbläsare:",
        sign_off: "Vänliga hälsningar, turneringsteamet",
        men: "Herrar",
        women: "Damer",
        mixed: "Mixed",
    })
    .with("no", Labels {
        greeting: |name| format!("Hei {name}!"),
        greeting_generic: "Hei!",
        tournament: "Turnering",
        dates: "Datoer",
        location: "Sted",
        categories: "Klasser",
        price: "Startavgift",
        payment_deadline: "Betalingsfrist",
        amount_paid: "Betalt beløp",
        waitlist_position: "Plass på ventelisten",
        registration_deadline: "Påmelding stenger",
        participant: "Deltaker",
        email: "E-post",
        reason: "Årsak",
        role: "Rolle",
        permissions: "Tillatelser",
        club: "Klubb",
        invited_by: "Invitert av",
        message: "Melding",
        changes: "Endringer",
        link_expires: |hours| format!("Denne lenken utløper om {hours} timer."),
        link_fallback: "Hvis knappen ikke fungerer, kopier denne lenken inn i nettleseren:",
        sign_off: "Vennlig hilsen, turneringsteamet",
        men: "Herrer",
        women: "Damer",
        mixed: "Mixed",
    })
    .with("ar", Labels {
        greeting: |name| format!("مرحباً {name}!"),
        greeting_generic: "مرحباً!",
        tournament: "البطولة",
        dates: "التواريخ",
        location: "المكان",
        categories: "الفئات",
        price: "رسوم التسجيل",
        payment_deadline: "آخر موعد للدفع",
        amount_paid: "المبلغ المدفوع",
        waitlist_position: "الترتيب في قائمة الانتظار",
        registration_deadline: "يغلق التسجيل",
        participant: "المشارك",
        email: "البريد الإلكتروني",
        reason: "السبب",
        role: "الدور",
        permissions: "الصلاحيات",
        club: "النادي",
        invited_by: "بدعوة من",
        message: "الرسالة",
        changes: "التغييرات",
        link_expires: |hours| format!("تنتهي صلاحية هذا الرابط خلال {hours} ساعة."),
        link_fallback: "إذا لم يعمل الزر، انسخ هذا الرابط في متصفحك:",
        sign_off: "مع أطيب التحيات، فريق البطولة",
        men: "رجال",
        women: "سيدات",
        mixed: "مختلط",
    })
    .with("zh", Labels {
        greeting: |name| format!("{name}，您好！"),
        greeting_generic: "您好！",
        tournament: "赛事",
        dates: "日期",
        location: "地点",
        categories: "组别",
        price: "报名费",
        payment_deadline: "付款截止日期",
        amount_paid: "已付金额",
        waitlist_position: "候补名单位置",
        registration_deadline: "报名截止",
        participant: "参赛者",
        email: "电子邮箱",
        reason: "原因",
        role: "角色",
        permissions: "权限",
        club: "俱乐部",
        invited_by: "邀请人",
        message: "留言",
        changes: "变更内容",
        link_expires: |hours| format!("此链接将在 {hours} 小时后失效。"),
        link_fallback: "如果按钮无法使用，请将此链接复制到浏览器：",
        sign_off: "此致，赛事团队",
        men: "男子",
        women: "女子",
        mixed: "混合",
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LOCALES;

    #[test]
    fn test_labels_cover_every_locale() {
        for info in LOCALES {
            assert!(LABELS.contains(info.code), "missing labels for {}", info.code);
        }
    }

    #[test]
    fn test_greeting_word_order() {
        assert_eq!((for_locale("en").greeting)("Ann"), "Hello, Ann!");
        assert_eq!((for_locale("zh").greeting)("Ann"), "Ann，您好！");
    }

    #[test]
    fn test_unknown_locale_uses_english() {
        assert_eq!(for_locale("xx").tournament, "Tournament");
    }
}
