//! HTML page rendered by every builder

use super::localized::Detail;

/// A complete, self-contained notification page.
///
/// All fields hold plain text; escaping happens in [`Page::render`].
pub struct Page {
    pub lang: &'static str,
    pub dir: &'static str,
    pub title: String,
    pub heading: Option<String>,
    pub greeting: String,
    pub intro: Option<String>,
    pub details: Vec<Detail>,
    pub notes: Vec<String>,
    /// Button label and target
    pub action: Option<(&'static str, String)>,
    pub link_fallback: &'static str,
    pub outro: Option<&'static str>,
    pub sign_off: &'static str,
}

impl Page {
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"{}\" dir=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
            self.lang,
            self.dir,
            escape_html(&self.title)
        ));
        if let Some(heading) = &self.heading {
            html.push_str(&format!(
                "<h1 style=\"font-size:22px;margin:0 0 16px;color:#111827;\">{}</h1>\n",
                escape_html(heading)
            ));
        }
        html.push_str(&paragraph(&self.greeting));
        if let Some(intro) = &self.intro {
            html.push_str(&paragraph(intro));
        }

        if !self.details.is_empty() {
            html.push_str(
                "<table role=\"presentation\" class=\"details\" width=\"100%\" cellspacing=\"0\" cellpadding=\"6\" style=\"margin:16px 0;border-collapse:collapse;\">\n",
            );
            for detail in &self.details {
                html.push_str(&format!(
                    "<tr><td style=\"color:#6b7280;white-space:nowrap;\">{}</td><td style=\"color:#111827;font-weight:600;\">{}</td></tr>\n",
                    escape_html(detail.label),
                    escape_html(&detail.value)
                ));
            }
            html.push_str("</table>\n");
        }

        for note in &self.notes {
            html.push_str(&paragraph(note));
        }

        if let Some((label, url)) = &self.action {
            let url = escape_html(url);
            html.push_str(&format!(
                "<p style=\"margin:24px 0;text-align:center;\"><a class=\"button\" href=\"{}\" style=\"display:inline-block;padding:12px 28px;background:#1d4ed8;color:#ffffff;border-radius:6px;text-decoration:none;font-weight:600;\">{}</a></p>\n",
                url,
                escape_html(label)
            ));
            html.push_str(&format!(
                "<p style=\"font-size:12px;color:#6b7280;\">{}<br><a href=\"{}\">{}</a></p>\n",
                escape_html(self.link_fallback),
                url,
                url
            ));
        }

        if let Some(outro) = self.outro {
            html.push_str(&paragraph(outro));
        }
        html.push_str(&paragraph(self.sign_off));
        html.push_str("</body>\n</html>\n");

        html
    }
}

fn paragraph(text: &str) -> String {
    format!(
        "<p style=\"margin:0 0 12px;line-height:1.5;\">{}</p>\n",
        escape_html(text)
    )
}

/// Escape text for HTML text and quoted attributes. Braces are escaped too
/// so payload text can never form template markers once embedded in the
/// envelope.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text)
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> Page {
        Page {
            lang: "en",
            dir: "ltr",
            title: "Registration received".to_string(),
            heading: Some("We got your registration".to_string()),
            greeting: "Hello, Ann!".to_string(),
            intro: Some("Thanks for registering.".to_string()),
            details: vec![Detail {
                label: "Entry fee",
                value: "80 €".to_string(),
            }],
            notes: vec![],
            action: Some(("View tournament", "https://example.com/t?a=1&b=2".to_string())),
            link_fallback: "Copy this link:",
            outro: None,
            sign_off: "The tournament team",
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & Jerry</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; Jerry&lt;/b&gt;"
        );
        let quoted = escape_html("'Jerry'");
        assert!(!quoted.contains('\''));
        assert!(quoted.contains("Jerry"));
        assert_eq!(escape_html("Mañana 東京"), "Mañana 東京");
        assert_eq!(escape_html("{{#if x}}"), "&#123;&#123;#if x&#125;&#125;");
    }

    #[test]
    fn test_render_full_document() {
        let html = sample_page().render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\" dir=\"ltr\">"));
        assert!(html.contains("<body>"));
        assert!(html.contains("</body>"));
        assert!(html.contains("80 €"));
        assert!(html.contains("href=\"https://example.com/t?a=1&amp;b=2\""));
    }

    #[test]
    fn test_render_without_action_or_details() {
        let mut page = sample_page();
        page.action = None;
        page.details.clear();

        let html = page.render();
        assert!(!html.contains("class=\"button\""));
        assert!(!html.contains("class=\"details\""));
        assert!(!html.contains("Copy this link:"));
    }

    #[test]
    fn test_render_skips_missing_heading_and_intro() {
        let mut page = sample_page();
        page.heading = None;
        page.intro = None;

        let html = page.render();
        assert!(!html.contains("<h1"));
        assert!(!html.contains("Thanks for registering."));
        assert!(html.contains("Hello, Ann!"));
        assert!(!html.contains("<p style=\"margin:0 0 12px;line-height:1.5;\"></p>"));
    }
}
