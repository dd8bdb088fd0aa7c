//! Application shell: wires content, game, UI and the contact relay together.

use crate::config::GameConfig;
use crate::content::PORTFOLIO;
use crate::game::player::HeldDirections;
use crate::game::{self, GameAction, GameState, TickInput, World};
use crate::relay::{ContactForm, Relay, RelayError};
use crate::ui::{self, page::PageState};

use egui::{Align2, Color32, Key, RichText, vec2};

/// How long a toast stays on screen, in seconds.
const TOAST_SECS: f64 = 5.0;
/// Longest frame the sandbox simulates in one step.
const MAX_DT: f32 = 0.1;

/// Which presentation is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Traditional,
    Sandbox,
}

impl AppMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Traditional => Self::Sandbox,
            Self::Sandbox => Self::Traditional,
        }
    }
}

// ---------------------------------------------------------------------------
// Toasts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    kind: ToastKind,
    title: String,
    detail: String,
    expires_at: f64,
}

#[derive(Debug, Default)]
struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    fn push(&mut self, kind: ToastKind, title: &str, detail: String, now: f64) {
        self.items.push(Toast {
            kind,
            title: title.to_owned(),
            detail,
            expires_at: now + TOAST_SECS,
        });
    }

    fn expire(&mut self, now: f64) {
        self.items.retain(|t| t.expires_at > now);
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn show(&self, ctx: &egui::Context) {
        if self.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 48.0))
            .show(ctx, |ui| {
                for toast in &self.items {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        let color = match toast.kind {
                            ToastKind::Success => Color32::from_rgb(0x22, 0xc5, 0x5e),
                            ToastKind::Error => Color32::from_rgb(0xef, 0x44, 0x44),
                        };
                        ui.colored_label(color, RichText::new(&toast.title).strong());
                        ui.label(&toast.detail);
                    });
                    ui.add_space(6.0);
                }
            });
    }
}

// ---------------------------------------------------------------------------
// Sandbox session
// ---------------------------------------------------------------------------

/// One visit to the town. Dropped when leaving sandbox mode.
struct Sandbox {
    world: World,
    state: GameState,
    /// Presses from on-screen buttons, applied on the next step.
    pending: Vec<GameAction>,
    /// Directions held on the touch d-pad during the last frame.
    touch_held: HeldDirections,
}

impl Sandbox {
    fn new(config: &GameConfig) -> Self {
        let world = World::town(&PORTFOLIO, config.clone());
        let state = GameState::new(&world);
        Self {
            world,
            state,
            pending: Vec::new(),
            touch_held: HeldDirections::NONE,
        }
    }

    fn keyboard(ctx: &egui::Context) -> TickInput {
        ctx.input(|i| {
            let held = HeldDirections {
                up: i.key_down(Key::W) || i.key_down(Key::ArrowUp),
                down: i.key_down(Key::S) || i.key_down(Key::ArrowDown),
                left: i.key_down(Key::A) || i.key_down(Key::ArrowLeft),
                right: i.key_down(Key::D) || i.key_down(Key::ArrowRight),
            };
            let mut actions = Vec::new();
            if i.key_pressed(Key::J) || i.key_pressed(Key::Enter) {
                actions.push(GameAction::Interact);
            }
            if i.key_pressed(Key::K) {
                actions.push(GameAction::Details);
            }
            if i.key_pressed(Key::Escape) {
                actions.push(GameAction::Cancel);
            }
            TickInput { held, actions }
        })
    }

    fn frame(&mut self, ctx: &egui::Context) {
        let keys = Self::keyboard(ctx);
        let mut actions = std::mem::take(&mut self.pending);
        actions.extend(keys.actions);
        let input = TickInput {
            held: keys.held.union(self.touch_held),
            actions,
        };

        let dt = ctx.input(|i| i.stable_dt).min(MAX_DT);
        for event in game::step(&mut self.state, &self.world, &input, dt) {
            log::debug!("{event:?}");
        }

        if let Some(action) = ui::dialogue::show(ctx, &self.world, &self.state, &PORTFOLIO) {
            self.pending.push(action);
        }
        if let Some(action) = ui::detail::show(ctx, &self.world, &self.state, &PORTFOLIO) {
            self.pending.push(action);
        }
        ui::hud::show(ctx, &self.world, &self.state);
        let (touch_held, touch_actions) = ui::hud::show_touch_controls(ctx);
        self.touch_held = touch_held;
        self.pending.extend(touch_actions);

        let time = ctx.input(|i| i.time);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::from_rgb(0x1a, 0x2e, 0x1a)))
            .show(ctx, |ui| {
                ui::town::show(ui, &self.world, &self.state, time);
            });

        ctx.request_repaint();
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// We derive Deserialize/Serialize so we can persist the theme on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PortfolioApp {
    dark_mode: bool,

    #[serde(skip)]
    mode: AppMode,
    #[serde(skip)]
    sandbox: Option<Sandbox>,
    #[serde(skip)]
    config: GameConfig,
    #[serde(skip)]
    page: PageState,
    #[serde(skip)]
    form: ContactForm,
    #[serde(skip)]
    relay: Relay,
    #[serde(skip)]
    toasts: Toasts,
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self {
            dark_mode: true,
            mode: AppMode::default(),
            sandbox: None,
            config: GameConfig::default(),
            page: PageState::default(),
            form: ContactForm::default(),
            relay: Relay::default(),
            toasts: Toasts::default(),
        }
    }
}

impl PortfolioApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = match cc.storage {
            Some(storage) => eframe::get_value::<Self>(storage, eframe::APP_KEY).unwrap_or_default(),
            None => Self {
                dark_mode: cc.egui_ctx.style().visuals.dark_mode,
                ..Self::default()
            },
        };
        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Switch presentation. Entering the sandbox always starts a fresh visit.
    pub fn set_mode(&mut self, mode: AppMode) {
        if mode == self.mode {
            return;
        }
        log::info!("switching to {mode:?} mode");
        self.mode = mode;
        self.sandbox = match mode {
            AppMode::Sandbox => Some(Sandbox::new(&self.config)),
            AppMode::Traditional => None,
        };
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }

    fn poll_relay(&mut self, now: f64) {
        let Some(outcome) = self.relay.poll() else {
            return;
        };
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.toasts.push(
                    ToastKind::Success,
                    "Message sent successfully!",
                    "Thanks for reaching out. I'll get back to you soon.".to_owned(),
                    now,
                );
            }
            Err(e) => self.relay_failed(&e, now),
        }
    }

    fn relay_failed(&mut self, error: &RelayError, now: f64) {
        let detail = match error {
            RelayError::InvalidForm(reason) => (*reason).to_owned(),
            _ => format!(
                "Please try again or email me directly at {}",
                PORTFOLIO.personal.email
            ),
        };
        self.toasts.push(ToastKind::Error, "Failed to send message", detail, now);
    }

    fn traditional_frame(&mut self, ctx: &egui::Context, now: f64) {
        let actions = ui::page::show(
            ctx,
            &PORTFOLIO,
            &mut self.page,
            &mut self.form,
            self.relay.in_flight(),
            self.dark_mode,
        );
        if actions.toggle_theme {
            self.dark_mode = !self.dark_mode;
            self.apply_theme(ctx);
        }
        if actions.submit {
            if let Err(e) = self.relay.submit(&self.form, PORTFOLIO.personal.name) {
                log::warn!("contact form not sent: {e}");
                self.relay_failed(&e, now);
            }
        }
        if actions.play {
            self.set_mode(AppMode::Sandbox);
        }
    }

    fn mode_toggle(&mut self, ctx: &egui::Context) {
        let (anchor, offset, label) = match self.mode {
            AppMode::Traditional => (Align2::RIGHT_BOTTOM, vec2(-16.0, -16.0), "🎮 Sandbox mode"),
            AppMode::Sandbox => (Align2::CENTER_TOP, vec2(0.0, 12.0), "📄 Traditional mode"),
        };
        let clicked = egui::Area::new(egui::Id::new("mode_toggle"))
            .anchor(anchor, offset)
            .show(ctx, |ui| ui.button(RichText::new(label).size(16.0)).clicked())
            .inner;
        if clicked {
            self.set_mode(self.mode.toggled());
        }
    }
}

impl eframe::App for PortfolioApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.poll_relay(now);
        self.toasts.expire(now);

        match self.mode {
            AppMode::Traditional => self.traditional_frame(ctx, now),
            AppMode::Sandbox => {
                if let Some(sandbox) = &mut self.sandbox {
                    sandbox.frame(ctx);
                }
            }
        }

        self.mode_toggle(ctx);
        self.toasts.show(ctx);

        if self.relay.in_flight() || !self.toasts.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_traditional() {
        let app = PortfolioApp::default();
        assert_eq!(app.mode(), AppMode::Traditional);
        assert!(app.sandbox.is_none());
    }

    #[test]
    fn entering_sandbox_starts_fresh_and_leaving_drops_it() {
        let mut app = PortfolioApp::default();
        app.set_mode(AppMode::Sandbox);
        let sandbox = app.sandbox.as_mut().expect("sandbox session");
        let spawn = sandbox.state.player.position;
        sandbox.state.player.position.x += 20.0;

        app.set_mode(AppMode::Traditional);
        assert!(app.sandbox.is_none());

        app.set_mode(AppMode::Sandbox);
        let again = app.sandbox.as_ref().expect("sandbox session");
        assert_eq!(again.state.player.position, spawn);
    }

    #[test]
    fn toggling_twice_returns_home() {
        assert_eq!(AppMode::Traditional.toggled().toggled(), AppMode::Traditional);
        assert_eq!(AppMode::Traditional.toggled(), AppMode::Sandbox);
    }

    #[test]
    fn toasts_expire_after_five_seconds() {
        let mut toasts = Toasts::default();
        toasts.push(ToastKind::Success, "ok", String::new(), 10.0);
        toasts.expire(14.9);
        assert!(!toasts.is_empty());
        toasts.expire(15.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn unconfigured_submit_suggests_direct_email() {
        let mut app = PortfolioApp {
            relay: Relay::new(crate::config::RelayConfig::default()),
            ..PortfolioApp::default()
        };
        app.relay_failed(&RelayError::NotConfigured, 0.0);
        let toast = app.toasts.items.first().expect("error toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.detail.contains(PORTFOLIO.personal.email));
    }

    #[test]
    fn only_the_theme_is_persisted() {
        let app = PortfolioApp {
            dark_mode: false,
            ..PortfolioApp::default()
        };
        let json = serde_json::to_value(&app).expect("serializable");
        assert_eq!(json, serde_json::json!({ "dark_mode": false }));
    }
}
