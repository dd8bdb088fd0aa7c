//! Turns dialogue lines with contact placeholders into clickable spans.

use crate::content::{CLICK_TO_EMAIL, CLICK_TO_OPEN, LINK_ICON, Portfolio};
use crate::entity::Section;

pub const MAIL_LABEL: &str = "Click here to email";
pub const LINK_LABEL: &str = "Click here to open";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    /// A `mailto:` link to `address`.
    Mail { label: String, address: String },
    /// A link opening `url` in a new tab.
    Link { label: String, url: String },
}

impl Span {
    fn text(s: &str) -> Option<Self> {
        (!s.is_empty()).then(|| Self::Text(s.to_owned()))
    }
}

/// Split `line` into spans. Only contact lines are rewritten; a link line
/// whose platform is unknown stays plain text.
pub fn render_line(line: &str, section: Section, portfolio: &Portfolio) -> Vec<Span> {
    if section != Section::Contact {
        return vec![Span::Text(line.to_owned())];
    }

    if let Some((before, after)) = line.split_once(CLICK_TO_EMAIL) {
        let link = Span::Mail {
            label: MAIL_LABEL.to_owned(),
            address: portfolio.contact.email.to_owned(),
        };
        return surround(before, link, after);
    }

    if let Some((before, after)) = line.split_once(CLICK_TO_OPEN) {
        let platform = before
            .trim_end()
            .trim_end_matches(':')
            .trim_start()
            .trim_start_matches(LINK_ICON)
            .trim();
        if let Some(social) = portfolio.social_link(platform) {
            let link = Span::Link {
                label: LINK_LABEL.to_owned(),
                url: social.url.to_owned(),
            };
            return surround(before, link, after);
        }
    }

    vec![Span::Text(line.to_owned())]
}

fn surround(before: &str, link: Span, after: &str) -> Vec<Span> {
    Span::text(before)
        .into_iter()
        .chain(std::iter::once(link))
        .chain(Span::text(after))
        .collect()
}

/// Lay the spans out on wrapping rows. Link clicks open through egui.
pub fn show_spans(ui: &mut egui::Ui, spans: &[Span]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            match span {
                Span::Text(text) => {
                    ui.label(text);
                }
                Span::Mail { label, address } => {
                    ui.hyperlink_to(label, format!("mailto:{address}"));
                }
                Span::Link { label, url } => {
                    ui.hyperlink_to(label, url);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    #[test]
    fn email_placeholder_becomes_mail_link() {
        let spans = render_line("📧 Email: CLICK_TO_EMAIL", Section::Contact, &PORTFOLIO);
        assert_eq!(
            spans,
            vec![
                Span::Text("📧 Email: ".into()),
                Span::Mail {
                    label: MAIL_LABEL.into(),
                    address: "muralireddyvennapusa@gmail.com".into(),
                },
            ]
        );
    }

    #[test]
    fn link_placeholder_resolves_platform_url() {
        let spans = render_line("🔗 LinkedIn: CLICK_TO_OPEN", Section::Contact, &PORTFOLIO);
        assert_eq!(
            spans,
            vec![
                Span::Text("🔗 LinkedIn: ".into()),
                Span::Link {
                    label: LINK_LABEL.into(),
                    url: "https://linkedin.com/in/vennapusa-murali".into(),
                },
            ]
        );
    }

    #[test]
    fn unknown_platform_stays_plain() {
        let line = "🔗 Myspace: CLICK_TO_OPEN";
        assert_eq!(
            render_line(line, Section::Contact, &PORTFOLIO),
            vec![Span::Text(line.into())]
        );
    }

    #[test]
    fn other_sections_are_never_rewritten() {
        let line = "📧 Email: CLICK_TO_EMAIL";
        assert_eq!(
            render_line(line, Section::About, &PORTFOLIO),
            vec![Span::Text(line.into())]
        );
    }

    #[test]
    fn trailing_text_is_kept() {
        let spans = render_line("Write: CLICK_TO_EMAIL today", Section::Contact, &PORTFOLIO);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans.last(), Some(&Span::Text(" today".into())));
    }

    #[test]
    fn every_contact_line_resolves() {
        let script = crate::content::dialogue_script(Section::Contact, &PORTFOLIO);
        for line in &script {
            let spans = render_line(line, Section::Contact, &PORTFOLIO);
            if line.contains(CLICK_TO_EMAIL) || line.contains(CLICK_TO_OPEN) {
                assert!(
                    spans.iter().any(|s| !matches!(s, Span::Text(_))),
                    "unresolved: {line}"
                );
            }
        }
    }
}
