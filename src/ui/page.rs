//! The traditional scrolling portfolio page.

use super::section_heading;
use crate::content::{Portfolio, Project, Skill, SkillCategory};
use crate::entity::Section;
use crate::relay::ContactForm;
use egui::{Align, RichText};

const COLUMN_WIDTH: f32 = 860.0;

/// A place the top bar can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    Section(Section),
}

impl Anchor {
    pub const NAV: [Self; 6] = [
        Self::Home,
        Self::Section(Section::About),
        Self::Section(Section::Skills),
        Self::Section(Section::Projects),
        Self::Section(Section::Achievements),
        Self::Section(Section::Contact),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Section(Section::About) => "About",
            Self::Section(Section::Skills) => "Skills",
            Self::Section(Section::Projects) => "Projects",
            Self::Section(Section::Achievements) => "Achievements",
            Self::Section(Section::Contact) => "Contact",
        }
    }
}

/// Page state that survives between frames.
#[derive(Debug, Default)]
pub struct PageState {
    /// Jump requested from the top bar, consumed once the target is drawn.
    pub scroll_to: Option<Anchor>,
}

/// What the visitor asked for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageActions {
    pub play: bool,
    pub toggle_theme: bool,
    pub submit: bool,
}

/// Skills grouped by category in display order. Empty groups are skipped.
pub fn skill_groups(portfolio: &Portfolio) -> Vec<(SkillCategory, Vec<&Skill>)> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| (category, portfolio.skills_in(category).collect::<Vec<_>>()))
        .filter(|(_, skills)| !skills.is_empty())
        .collect()
}

pub fn other_projects(portfolio: &Portfolio) -> impl Iterator<Item = &Project> {
    portfolio.projects.iter().filter(|p| !p.featured)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn show(
    ctx: &egui::Context,
    portfolio: &Portfolio,
    page: &mut PageState,
    form: &mut ContactForm,
    sending: bool,
    dark_mode: bool,
) -> PageActions {
    let mut actions = PageActions::default();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong(portfolio.personal.name);
            ui.separator();
            for anchor in Anchor::NAV {
                if ui.selectable_label(false, anchor.label()).clicked() {
                    page.scroll_to = Some(anchor);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                let theme = if dark_mode { "☀ Light" } else { "🌙 Dark" };
                if ui.button(theme).clicked() {
                    actions.toggle_theme = true;
                }
                if ui.button("🎮 Game").clicked() {
                    actions.play = true;
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(COLUMN_WIDTH);
                hero(ui, portfolio, page, &mut actions);
                about(ui, portfolio, page);
                skills(ui, portfolio, page);
                projects(ui, portfolio, page);
                achievements(ui, portfolio, page);
                game_preview(ui, &mut actions);
                contact(ui, portfolio, page, form, sending, &mut actions);
                footer(ui, portfolio);
            });
        });
    });

    actions
}

fn anchor_heading(ui: &mut egui::Ui, page: &mut PageState, anchor: Anchor, text: &str) {
    ui.add_space(48.0);
    let response = ui.heading(RichText::new(text).size(28.0).strong());
    if page.scroll_to == Some(anchor) {
        response.scroll_to_me(Some(Align::TOP));
        page.scroll_to = None;
    }
    ui.add_space(12.0);
}

fn social_row(ui: &mut egui::Ui, portfolio: &Portfolio) {
    ui.horizontal_wrapped(|ui| {
        for link in portfolio.personal.social_links {
            ui.hyperlink_to(link.platform, link.url);
        }
    });
}

fn hero(ui: &mut egui::Ui, portfolio: &Portfolio, page: &mut PageState, actions: &mut PageActions) {
    let personal = &portfolio.personal;
    ui.add_space(64.0);
    let response = ui.label(RichText::new(personal.name).size(44.0).strong());
    if page.scroll_to == Some(Anchor::Home) {
        response.scroll_to_me(Some(Align::TOP));
        page.scroll_to = None;
    }
    ui.label(RichText::new(personal.title).size(22.0));
    ui.add_space(8.0);
    ui.label(RichText::new(personal.tagline).italics());
    ui.add_space(12.0);
    social_row(ui, portfolio);
    ui.add_space(12.0);
    if ui.button(RichText::new("Explore the town ▶").size(18.0)).clicked() {
        actions.play = true;
    }
}

fn about(ui: &mut egui::Ui, portfolio: &Portfolio, page: &mut PageState) {
    let section = Section::About;
    anchor_heading(ui, page, Anchor::Section(section), section_heading(section));
    ui.label(portfolio.about.short);
    ui.add_space(8.0);
    ui.label(portfolio.about.long);
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for highlight in portfolio.about.highlights {
            ui.label(RichText::new(*highlight).strong());
            ui.label("·");
        }
    });
    ui.add_space(8.0);
    egui::Grid::new("about_facts").num_columns(2).show(ui, |ui| {
        ui.weak("Location");
        ui.label(portfolio.personal.location);
        ui.end_row();
        ui.weak("Email");
        ui.hyperlink_to(portfolio.personal.email, format!("mailto:{}", portfolio.personal.email));
        ui.end_row();
        ui.weak("Status");
        ui.colored_label(egui::Color32::from_rgb(0x22, 0xc5, 0x5e), "Available for work");
        ui.end_row();
    });
}

fn skills(ui: &mut egui::Ui, portfolio: &Portfolio, page: &mut PageState) {
    let section = Section::Skills;
    anchor_heading(ui, page, Anchor::Section(section), section_heading(section));
    for (category, skills) in skill_groups(portfolio) {
        ui.add_space(8.0);
        ui.strong(category.label());
        egui::Grid::new(("skills", category.label()))
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for skill in skills {
                    ui.label(skill.name);
                    ui.add(
                        egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                            .desired_width(320.0)
                            .text(format!("{}%", skill.level)),
                    );
                    ui.end_row();
                }
            });
    }
}

fn project_card(ui: &mut egui::Ui, project: &Project) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(project.title).size(18.0).strong());
        ui.label(project.long_description);
        ui.weak(project.technologies.join(" · "));
        ui.horizontal(|ui| {
            if let Some(url) = project.live_url {
                ui.hyperlink_to("Live demo", url);
            }
            if let Some(url) = project.github_url {
                ui.hyperlink_to("Source", url);
            }
        });
    });
}

fn projects(ui: &mut egui::Ui, portfolio: &Portfolio, page: &mut PageState) {
    let section = Section::Projects;
    anchor_heading(ui, page, Anchor::Section(section), section_heading(section));
    for project in portfolio.featured_projects() {
        project_card(ui, project);
        ui.add_space(6.0);
    }
    ui.add_space(12.0);
    ui.label(RichText::new("Other Projects").size(18.0));
    for project in other_projects(portfolio) {
        project_card(ui, project);
        ui.add_space(6.0);
    }
}

fn achievements(ui: &mut egui::Ui, portfolio: &Portfolio, page: &mut PageState) {
    let section = Section::Achievements;
    anchor_heading(ui, page, Anchor::Section(section), section_heading(section));
    for achievement in portfolio.achievements {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(achievement.title);
                ui.weak(format!("{} · {}", achievement.kind.label(), achievement.date));
            });
            ui.label(achievement.description);
        });
        ui.add_space(6.0);
    }
}

fn game_preview(ui: &mut egui::Ui, actions: &mut PageActions) {
    ui.add_space(48.0);
    ui.weak("Interactive Experience");
    ui.heading(RichText::new("Pixel World Adventure").size(26.0).strong());
    ui.label("Walk around a little town and talk to its residents to discover the same portfolio.");
    ui.add_space(6.0);
    ui.label("Use W A S D to move, J to talk, K for details and Esc to close.");
    ui.add_space(8.0);
    if ui.button(RichText::new("Ready to Play?").size(18.0)).clicked() {
        actions.play = true;
    }
}

fn contact(
    ui: &mut egui::Ui,
    portfolio: &Portfolio,
    page: &mut PageState,
    form: &mut ContactForm,
    sending: bool,
    actions: &mut PageActions,
) {
    let contact = &portfolio.contact;
    anchor_heading(ui, page, Anchor::Section(Section::Contact), contact.heading);
    ui.label(contact.description);
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.weak("Email");
        ui.hyperlink_to(contact.email, format!("mailto:{}", contact.email));
        ui.separator();
        ui.weak("Location");
        ui.label(portfolio.personal.location);
    });
    ui.add_space(6.0);
    ui.strong("Connect with me");
    social_row(ui, portfolio);

    ui.add_space(16.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("contact_form").num_columns(2).spacing([8.0, 8.0]).show(ui, |ui| {
            ui.label("Name");
            ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Your name"));
            ui.end_row();
            ui.label("Email");
            ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("you@example.com"));
            ui.end_row();
            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("Say hi!")
                    .desired_rows(5),
            );
            ui.end_row();
        });
        let label = if sending { "Sending…" } else { "Send Message" };
        if ui.add_enabled(!sending, egui::Button::new(label)).clicked() {
            actions.submit = true;
        }
    });
}

fn footer(ui: &mut egui::Ui, portfolio: &Portfolio) {
    ui.add_space(48.0);
    ui.separator();
    social_row(ui, portfolio);
    ui.weak(format!("© {} · {}", portfolio.personal.name, portfolio.personal.title));
    ui.add_space(24.0);
}
