//! Locale resolution.
//!
//! Every locale-dependent lookup (builder messages, envelope tagline, date
//! format, text direction) goes through the same rule: use the requested
//! locale's entry if the table has one, otherwise English. There is no
//! negotiation between lookups; each resolves the requested code on its own.

mod table;

pub use table::{resolve, LocaleTable};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;

/// Locale used whenever a requested locale is not known
pub const DEFAULT_LOCALE: &str = "en";

/// Writing direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Formatting conventions of a supported locale
#[derive(Debug, Clone, Serialize)]
pub struct LocaleInfo {
    pub code: &'static str,
    /// Name of the language in that language
    pub name: &'static str,
    pub direction: TextDirection,
    /// chrono format string for calendar dates
    #[serde(skip)]
    pub date_format: &'static str,
}

/// Supported locales
pub static LOCALES: &[LocaleInfo] = &[
    LocaleInfo { code: "en", name: "English", direction: TextDirection::Ltr, date_format: "%B %-d, %Y" },
    LocaleInfo { code: "ru", name: "Русский", direction: TextDirection::Ltr, date_format: "%d.%m.%Y" },
    LocaleInfo { code: "ua", name: "Українська", direction: TextDirection::Ltr, date_format: "%d.%m.%Y" },
    LocaleInfo { code: "es", name: "Español", direction: TextDirection::Ltr, date_format: "%d/%m/%Y" },
    LocaleInfo { code: "fr", name: "Français", direction: TextDirection::Ltr, date_format: "%d/%m/%Y" },
    LocaleInfo { code: "de", name: "Deutsch", direction: TextDirection::Ltr, date_format: "%d.%m.%Y" },
    LocaleInfo { code: "it", name: "Italiano", direction: TextDirection::Ltr, date_format: "%d/%m/%Y" },
    LocaleInfo { code: "ca", name: "Català", direction: TextDirection::Ltr, date_format: "%d/%m/%Y" },
    LocaleInfo { code: "nl", name: "Nederlands", direction: TextDirection::Ltr, date_format: "%d-%m-%Y" },
    LocaleInfo { code: "da", name: "Dansk", direction: TextDirection::Ltr, date_format: "%d.%m.%Y" },
    LocaleInfo { code: "sv", name: "Svenska", direction: TextDirection::Ltr, date_format: "%Y-%m-%d" },
    LocaleInfo { code: "no", name: "Norsk", direction: TextDirection::Ltr, date_format: "%d.%m.%Y" },
    LocaleInfo { code: "ar", name: "العربية", direction: TextDirection::Rtl, date_format: "%d/%m/%Y" },
    LocaleInfo { code: "zh", name: "中文", direction: TextDirection::Ltr, date_format: "%Y年%m月%d日" },
];

lazy_static! {
    static ref LOCALE_TABLE: LocaleTable<&'static LocaleInfo> = {
        let english = LOCALES
            .iter()
            .find(|info| info.code == DEFAULT_LOCALE)
            .unwrap_or(&LOCALES[0]);
        LOCALES
            .iter()
            .fold(LocaleTable::new(english), |table, info| table.with(info.code, info))
    };
}

/// Conventions for `requested`, falling back to English
pub fn locale_info(requested: &str) -> &'static LocaleInfo {
    *resolve(requested, &*LOCALE_TABLE)
}

/// Canonical supported code for `requested`, or `en`
pub fn resolve_code(requested: &str) -> &'static str {
    locale_info(requested).code
}

pub fn is_supported(code: &str) -> bool {
    LOCALE_TABLE.contains(code)
}

/// Text direction for `requested`; only Arabic is right-to-left
pub fn text_direction(requested: &str) -> TextDirection {
    locale_info(requested).direction
}

/// Format a calendar date with the locale's convention
pub fn format_date(date: NaiveDate, requested: &str) -> String {
    date.format(locale_info(requested).date_format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourteen_locales() {
        assert_eq!(LOCALES.len(), 14);
        for code in [
            "en", "ru", "ua", "es", "fr", "de", "it", "ca", "nl", "da", "sv", "no", "ar", "zh",
        ] {
            assert!(is_supported(code), "{code} should be supported");
        }
    }

    #[test]
    fn test_resolve_code() {
        assert_eq!(resolve_code("de"), "de");
        assert_eq!(resolve_code("xx-unknown"), "en");
        assert_eq!(resolve_code("en-US"), "en");
    }

    #[test]
    fn test_text_direction() {
        assert_eq!(text_direction("ar"), TextDirection::Rtl);
        assert_eq!(text_direction("en"), TextDirection::Ltr);
        assert_eq!(text_direction("zh"), TextDirection::Ltr);
        assert_eq!(text_direction("unknown"), TextDirection::Ltr);
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 5).unwrap();

        assert_eq!(format_date(date, "en"), "June 5, 2026");
        assert_eq!(format_date(date, "ru"), "05.06.2026");
        assert_eq!(format_date(date, "sv"), "2026-06-05");
        assert_eq!(format_date(date, "zh"), "2026年06月05日");
        assert_eq!(format_date(date, "nope"), "June 5, 2026");
    }
}
