//! Dialogue box at the bottom of the sandbox.

use super::markup::{self, Span};
use super::section_color;
use crate::content::Portfolio;
use crate::game::dialogue::DialogueSession;
use crate::game::{GameAction, GameState, World};

/// Label of the advance button for the session's current state.
pub fn advance_label(session: &DialogueSession) -> &'static str {
    if session.is_revealing() {
        "Skip"
    } else if session.is_last_line() {
        "Finish"
    } else {
        "Next"
    }
}

/// Spans for what is on screen right now. Placeholders only turn into
/// links once the line is fully typed out.
pub fn visible_spans(session: &DialogueSession, world: &World, portfolio: &Portfolio) -> Vec<Span> {
    if session.is_revealing() {
        return vec![Span::Text(session.visible_text().to_owned())];
    }
    match world.registry.get(session.npc()) {
        Some(npc) => markup::render_line(session.current_line(), npc.section, portfolio),
        None => vec![Span::Text(session.current_line().to_owned())],
    }
}

/// Draw the box if a dialogue is open and return the button pressed, if any.
pub fn show(ctx: &egui::Context, world: &World, state: &GameState, portfolio: &Portfolio) -> Option<GameAction> {
    let session = state.dialogue()?;
    let npc = world.registry.get(session.npc())?;
    let mut pressed = None;

    egui::TopBottomPanel::bottom("dialogue_box")
        .resizable(false)
        .min_height(140.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.colored_label(section_color(npc.section), egui::RichText::new(&npc.name).strong());
                ui.weak(&npc.detail_title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} / {}", session.line_index() + 1, session.line_count()));
                    if session.is_revealing() {
                        ui.weak("typing…");
                    }
                });
            });
            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(80.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    markup::show_spans(ui, &visible_spans(session, world, portfolio));
                });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Close (Esc)").clicked() {
                    pressed = Some(GameAction::Cancel);
                }
                if ui.button("Details (K)").clicked() {
                    pressed = Some(GameAction::Details);
                }
                let advance = format!("{} (J)", advance_label(session));
                if ui.button(advance).clicked() {
                    pressed = Some(GameAction::Interact);
                }
            });
            ui.add_space(6.0);
        });

    pressed
}
