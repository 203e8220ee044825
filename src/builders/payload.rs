//! Payload fields shared by the tournament builders, and the values derived
//! from them

use chrono::{Days, NaiveDate};
use serde::Deserialize;

use super::labels::Labels;
use super::localized::{BuildContext, Sections};

/// Payment is due this many calendar days before the tournament starts
pub const PAYMENT_DEADLINE_DAYS: u64 = 15;

const DEFAULT_CURRENCY: &str = "€";

/// Tournament identity and date range
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRef {
    #[serde(rename = "tournamentName")]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    #[serde(rename = "tournamentUrl")]
    pub url: Option<String>,
}

impl TournamentRef {
    /// Tournament, dates and location rows
    pub fn add_details(&self, sections: &mut Sections, ctx: &BuildContext<'_>) {
        sections.detail(ctx.labels.tournament, self.name.clone());
        sections.detail(
            ctx.labels.dates,
            ctx.date_range(self.start_date, self.end_date),
        );
        sections.optional_detail(ctx.labels.location, self.location.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Mixed,
}

impl Gender {
    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            Gender::Men => labels.men,
            Gender::Women => labels.women,
            Gender::Mixed => labels.mixed,
        }
    }
}

/// A category as sent by the registration form: a plain name, or gender and
/// age group that are localized here
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Name(String),
    #[serde(rename_all = "camelCase")]
    Detailed {
        name: Option<String>,
        gender: Option<Gender>,
        age_group: Option<String>,
    },
}

impl CategoryRef {
    pub fn display(&self, labels: &Labels) -> String {
        match self {
            CategoryRef::Name(name) => name.clone(),
            CategoryRef::Detailed {
                name,
                gender,
                age_group,
            } => {
                let parts: Vec<&str> = gender
                    .map(|g| g.label(labels))
                    .into_iter()
                    .chain(age_group.as_deref())
                    .filter(|part| !part.trim().is_empty())
                    .collect();

                if parts.is_empty() {
                    name.clone().unwrap_or_default()
                } else {
                    parts.join(" ")
                }
            }
        }
    }
}

/// Comma-separated localized category names, `None` when there are none
pub fn category_list(categories: &[CategoryRef], labels: &Labels) -> Option<String> {
    let names: Vec<String> = categories
        .iter()
        .map(|c| c.display(labels))
        .filter(|name| !name.trim().is_empty())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// Price for all categories: the unit price for one category, otherwise the
/// unit price times the category count. Undefined without a unit price.
pub fn total_price(category_count: usize, price_single_category: Option<f64>) -> Option<f64> {
    if category_count == 1 {
        price_single_category
    } else {
        price_single_category.map(|price| price * category_count as f64)
    }
}

/// Start date minus the payment window, in calendar days
pub fn payment_deadline(start_date: NaiveDate) -> Option<NaiveDate> {
    start_date.checked_sub_days(Days::new(PAYMENT_DEADLINE_DAYS))
}

/// Whole amounts print without decimals, others with two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

pub fn format_money(amount: f64, currency: Option<&str>) -> String {
    let currency = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);
    format!("{} {}", format_amount(amount), currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::labels;

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(1, Some(40.0)), Some(40.0));
        assert_eq!(total_price(2, Some(40.0)), Some(80.0));
        assert_eq!(total_price(3, Some(12.5)), Some(37.5));
        assert_eq!(total_price(2, None), None);
        assert_eq!(total_price(1, None), None);
    }

    #[test]
    fn test_payment_deadline_is_calendar_days() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(
            payment_deadline(start),
            NaiveDate::from_ymd_opt(2026, 2, 23)
        );
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(80.0, None), "80 €");
        assert_eq!(format_money(37.5, Some("USD")), "37.50 USD");
        assert_eq!(format_money(10.0, Some(" ")), "10 €");
    }

    #[test]
    fn test_category_display() {
        let en = labels::for_locale("en");
        let es = labels::for_locale("es");

        let detailed: CategoryRef =
            serde_json::from_value(serde_json::json!({"gender": "women", "ageGroup": "U18"}))
                .unwrap();
        let plain: CategoryRef = serde_json::from_value(serde_json::json!("Open")).unwrap();
        let named: CategoryRef =
            serde_json::from_value(serde_json::json!({"name": "Veterans"})).unwrap();

        assert_eq!(detailed.display(en), "Women U18");
        assert_eq!(detailed.display(es), "Femenino U18");
        assert_eq!(plain.display(es), "Open");
        assert_eq!(named.display(en), "Veterans");

        assert_eq!(
            category_list(&[detailed, plain], en).as_deref(),
            Some("Women U18, Open")
        );
        assert_eq!(category_list(&[], en), None);
    }
}
