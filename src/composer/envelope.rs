//! Pieces of the branded envelope that depend on the locale

use lazy_static::lazy_static;

use crate::locale::LocaleTable;

lazy_static! {
    static ref TAGLINES: LocaleTable<&'static str> = LocaleTable::new("Your tournaments, all in one place")
        .with("ru", "Все ваши турниры в одном месте")
        .with("ua", "Усі ваші турніри в одному місці")
        .with("es", "Todos tus torneos en un solo lugar")
        .with("fr", "Tous vos tournois au même endroit")
        .with("de", "Alle deine Turniere an einem Ort")
        .with("it", "Tutti i tuoi tornei in un unico posto")
        .with("nl", "Al je toernooien op één plek")
        .with("sv", "Alla dina turneringar på ett ställe")
        .with("no", "Alle turneringene dine på ett sted")
        .with("ar", "جميع بطولاتك في مكان واحد")
        .with("zh", "您的所有赛事，尽在一处");

    static ref GENERIC_SUBJECTS: LocaleTable<fn(&str) -> String> = LocaleTable::new(
        (|brand: &str| format!("Notification from {brand}")) as fn(&str) -> String
    )
    .with("ru", |brand| format!("Уведомление от {brand}"))
    .with("ua", |brand| format!("Сповіщення від {brand}"))
    .with("es", |brand| format!("Notificación de {brand}"))
    .with("fr", |brand| format!("Notification de {brand}"))
    .with("de", |brand| format!("Benachrichtigung von {brand}"))
    .with("it", |brand| format!("Notifica da {brand}"))
    .with("ca", |brand| format!("Notificació de {brand}"))
    .with("nl", |brand| format!("Melding van {brand}"))
    .with("da", |brand| format!("Besked fra {brand}"))
    .with("sv", |brand| format!("Meddelande från {brand}"))
    .with("no", |brand| format!("Melding fra {brand}"))
    .with("ar", |brand| format!("إشعار من {brand}"))
    .with("zh", |brand| format!("来自{brand}的通知"));
}

/// Envelope tagline for `locale`
pub fn tagline(locale: &str) -> &'static str {
    *TAGLINES.resolve(locale)
}

/// Subject used when a kind cannot form its own
pub fn generic_subject(locale: &str, brand_name: &str) -> String {
    (GENERIC_SUBJECTS.resolve(locale))(brand_name)
}

/// Inner content of the first `<body …>…</body>` span, or the whole document
/// when there is none. Tag names match case-insensitively.
pub fn extract_body(document: &str) -> &str {
    // ASCII lowercasing keeps byte offsets aligned with `document`
    let lower = document.to_ascii_lowercase();

    let Some(open) = find_body_open(&lower) else {
        return document;
    };
    let Some(open_end) = lower[open..].find('>').map(|i| open + i + 1) else {
        return document;
    };
    match lower[open_end..].find("</body>") {
        Some(close) => &document[open_end..open_end + close],
        None => document,
    }
}

/// Start of the first `<body` that is the whole tag name (not `<bodyx`)
fn find_body_open(lower: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(i) = lower[from..].find("<body") {
        let start = from + i;
        let next = lower[start + "<body".len()..].chars().next();
        match next {
            Some(c) if c == '>' || c.is_ascii_whitespace() || c == '/' => return Some(start),
            None => return None,
            _ => from = start + "<body".len(),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_body() {
        let doc = "<html><head><title>x</title></head><body class=\"m\">\n<p>Hi</p>\n</body></html>";
        assert_eq!(extract_body(doc), "\n<p>Hi</p>\n");
    }

    #[test]
    fn test_extract_body_case_insensitive() {
        let doc = "<HTML><BODY style=\"margin:0\"><p>Привет</p></Body></HTML>";
        assert_eq!(extract_body(doc), "<p>Привет</p>");
    }

    #[test]
    fn test_extract_body_first_span_only() {
        let doc = "<body>one</body><body>two</body>";
        assert_eq!(extract_body(doc), "one");
    }

    #[test]
    fn test_extract_body_falls_back_to_document() {
        assert_eq!(extract_body("<p>fragment</p>"), "<p>fragment</p>");
        assert_eq!(extract_body("<body><p>open"), "<body><p>open");
        assert_eq!(extract_body("<bodyguard>x</bodyguard>"), "<bodyguard>x</bodyguard>");
    }

    #[test]
    fn test_tagline_fallback() {
        assert_eq!(tagline("es"), "Todos tus torneos en un solo lugar");
        // Catalan has no tagline of its own
        assert_eq!(tagline("ca"), tagline("en"));
        assert_eq!(tagline("xx"), tagline("en"));
    }

    #[test]
    fn test_generic_subject() {
        assert_eq!(generic_subject("en", "Hub"), "Notification from Hub");
        assert_eq!(generic_subject("zh", "Hub"), "来自Hub的通知");
        assert_eq!(generic_subject("pt", "Hub"), "Notification from Hub");
    }
}
