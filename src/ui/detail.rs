//! The detail panel: a structured, read-only view of one section.

use crate::content::{Achievement, Contact, Portfolio, Project, Skill};
use crate::entity::Section;
use crate::game::{GameAction, GameState, Overlay, World};

/// What the panel shows for a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent<'a> {
    About {
        bio: &'a str,
        highlights: &'a [&'static str],
    },
    /// Featured projects only.
    Projects(Vec<&'a Project>),
    Skills(&'a [Skill]),
    Achievements(&'a [Achievement]),
    Contact(&'a Contact),
}

pub fn detail_content(section: Section, portfolio: &Portfolio) -> DetailContent<'_> {
    match section {
        Section::About => DetailContent::About {
            bio: portfolio.about.long,
            highlights: portfolio.about.highlights,
        },
        Section::Projects => DetailContent::Projects(portfolio.featured_projects().collect()),
        Section::Skills => DetailContent::Skills(portfolio.skills),
        Section::Achievements => DetailContent::Achievements(portfolio.achievements),
        Section::Contact => DetailContent::Contact(&portfolio.contact),
    }
}

/// Draw the panel if it is open. Returns [`GameAction::Cancel`] when the
/// visitor closes it.
pub fn show(ctx: &egui::Context, world: &World, state: &GameState, portfolio: &Portfolio) -> Option<GameAction> {
    let Overlay::Detail { npc } = state.overlay else {
        return None;
    };
    let record = world.registry.get(npc)?;
    let mut open = true;
    let mut close = false;

    egui::Window::new(&record.detail_title)
        .id(egui::Id::new("detail_panel"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.weak(format!("from {}", record.name));
            ui.separator();
            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                show_content(ui, &detail_content(record.section, portfolio));
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Close (Esc)").clicked() {
                    close = true;
                }
            });
        });

    (close || !open).then_some(GameAction::Cancel)
}

fn show_content(ui: &mut egui::Ui, content: &DetailContent<'_>) {
    match content {
        DetailContent::About { bio, highlights } => {
            ui.label(*bio);
            ui.add_space(8.0);
            ui.strong("Highlights");
            ui.horizontal_wrapped(|ui| {
                for highlight in *highlights {
                    ui.label(egui::RichText::new(*highlight).background_color(ui.visuals().faint_bg_color));
                }
            });
        }
        DetailContent::Projects(projects) => {
            for project in projects {
                ui.group(|ui| {
                    ui.strong(project.title);
                    ui.label(project.description);
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
        }
        DetailContent::Skills(skills) => {
            for skill in *skills {
                ui.horizontal(|ui| {
                    ui.add_sized([140.0, 18.0], egui::Label::new(skill.name));
                    ui.add(
                        egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                            .desired_width(200.0)
                            .text(format!("{}%", skill.level)),
                    );
                });
            }
        }
        DetailContent::Achievements(achievements) => {
            for achievement in *achievements {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(achievement.title);
                        ui.weak(achievement.date);
                    });
                    ui.label(achievement.description);
                });
            }
        }
        DetailContent::Contact(contact) => {
            ui.label(contact.description);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Email:");
                ui.hyperlink_to(contact.email, format!("mailto:{}", contact.email));
            });
            ui.colored_label(ui.visuals().hyperlink_color, contact.availability);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    #[test]
    fn projects_panel_lists_featured_only() {
        let DetailContent::Projects(projects) = detail_content(Section::Projects, &PORTFOLIO) else {
            panic!("wrong content for projects");
        };
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| p.featured));
    }

    #[test]
    fn each_section_projects_its_own_content() {
        assert!(matches!(
            detail_content(Section::About, &PORTFOLIO),
            DetailContent::About { highlights, .. } if highlights.len() == 4
        ));
        assert_eq!(
            detail_content(Section::Skills, &PORTFOLIO),
            DetailContent::Skills(PORTFOLIO.skills)
        );
        assert_eq!(
            detail_content(Section::Achievements, &PORTFOLIO),
            DetailContent::Achievements(PORTFOLIO.achievements)
        );
        assert_eq!(
            detail_content(Section::Contact, &PORTFOLIO),
            DetailContent::Contact(&PORTFOLIO.contact)
        );
    }
}
