//! egui kiosk window.
//!
//! [`KioskApp`] is a thin view: every frame it snapshots [`SharedState`],
//! draws it, and turns clicks and the chat input into [`KioskCommand`]s for
//! the orchestrator.  It never blocks on the async side.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ ● Baymax                         - x │  ← draggable title bar
//! │ [notice ........................ x ] │  ← only when set
//! │  «caption text»                      │  ← for caption_secs
//! │ ┌ camera panel (if visible) ───────┐ │
//! │ │ happy     ██████████░░░░  0.71   │ │
//! │ │ sad       ██░░░░░░░░░░░░  0.12   │ │
//! │ └──────────────────────────────────┘ │
//! │ [Apagar cámara] [Ocultar cámara]     │
//! │ chat transcript (scrolls)            │
//! │ [ message ................ ][Enviar] │
//! └──────────────────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use eframe::egui;
use tokio::sync::mpsc;

use crate::chat::Speaker;
use crate::config::UiConfig;
use crate::emotion::{dominant_label, EmotionLabel, ExpressionReading};
use crate::kiosk::{KioskCommand, KioskState, SharedState};
use crate::speech::Caption;

const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);
const TEXT_MAIN: egui::Color32 = egui::Color32::from_rgb(220, 220, 220);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(68, 136, 255);

// ---------------------------------------------------------------------------
// KioskApp
// ---------------------------------------------------------------------------

pub struct KioskApp {
    state: SharedState,
    commands: mpsc::Sender<KioskCommand>,
    ui_config: UiConfig,
    /// Chat input buffer.
    input: String,
}

impl KioskApp {
    pub fn new(state: SharedState, commands: mpsc::Sender<KioskCommand>, ui_config: UiConfig) -> Self {
        Self {
            state,
            commands,
            ui_config,
            input: String::new(),
        }
    }

    fn send(&self, command: KioskCommand) {
        if let Err(e) = self.commands.try_send(command) {
            log::warn!("ui: could not reach orchestrator: {e}");
        }
    }

    fn snapshot(&self) -> KioskState {
        match self.state.lock() {
            Ok(st) => st.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn submit_chat(&mut self) {
        let message = std::mem::take(&mut self.input);
        if !message.trim().is_empty() {
            self.send(KioskCommand::SendChat(message));
        }
    }

    // ── Title bar ────────────────────────────────────────────────────────

    fn draw_title_bar(&self, ui: &mut egui::Ui, ctx: &egui::Context, st: &KioskState) {
        ui.horizontal(|ui| {
            let dot = if st.camera_active {
                egui::Color32::from_rgb(80, 200, 120)
            } else {
                egui::Color32::from_rgb(100, 100, 100)
            };
            ui.label(egui::RichText::new("●").color(dot));

            let title = ui.label(
                egui::RichText::new(&self.ui_config.assistant_name)
                    .color(TEXT_MAIN)
                    .size(14.0),
            );
            if title.is_pointer_button_down_on() {
                if let Some(outer_rect) = ctx.input(|i| i.viewport().outer_rect) {
                    let delta = ctx.input(|i| i.pointer.delta());
                    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(
                        outer_rect.min + delta,
                    ));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close = egui::Button::new(
                    egui::RichText::new("x")
                        .color(egui::Color32::from_rgb(200, 100, 100))
                        .size(12.0),
                )
                .frame(false);
                if ui.add(close).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                let minimise =
                    egui::Button::new(egui::RichText::new("-").color(TEXT_DIM).size(12.0))
                        .frame(false);
                if ui.add(minimise).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                }
            });
        });
    }

    // ── Notice / caption ─────────────────────────────────────────────────

    fn draw_notice(&self, ui: &mut egui::Ui, notice: &str) {
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(90, 50, 30))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(notice).color(egui::Color32::from_rgb(255, 170, 110)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(egui::Button::new("x").frame(false)).clicked() {
                            self.send(KioskCommand::DismissNotice);
                        }
                    });
                });
            });
    }

    /// The caption fades out over the last moments of its lifetime.
    fn draw_caption(ui: &mut egui::Ui, caption: Option<&Caption>, now: Instant) {
        let (text, color) = match caption {
            Some(caption) => (
                caption.text.as_str(),
                TEXT_MAIN.gamma_multiply(caption.opacity_at(now)),
            ),
            None => ("…", TEXT_DIM),
        };
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(text).color(color).size(18.0));
        });
        ui.add_space(4.0);
    }

    // ── Camera panel ─────────────────────────────────────────────────────

    fn draw_camera_panel(ui: &mut egui::Ui, st: &KioskState) {
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(20, 20, 20))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if !st.camera_active {
                    ui.label(egui::RichText::new("Cámara apagada").color(TEXT_DIM));
                    return;
                }
                match &st.overlay {
                    Some(reading) => Self::draw_overlay(ui, reading),
                    None => {
                        ui.label(egui::RichText::new("Buscando un rostro…").color(TEXT_DIM));
                    }
                }
            });
    }

    /// One horizontal score bar per label, the dominant one highlighted.
    fn draw_overlay(ui: &mut egui::Ui, reading: &ExpressionReading) {
        let dominant = dominant_label(reading);
        for (label, score) in reading.iter() {
            ui.horizontal(|ui| {
                let name_color = if label == dominant { TEXT_MAIN } else { TEXT_DIM };
                ui.add_sized(
                    [72.0, 14.0],
                    egui::Label::new(egui::RichText::new(label.as_str()).color(name_color)),
                );

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2((ui.available_width() - 40.0).max(20.0), 10.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();
                painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(45, 45, 45));
                let filled = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * score, rect.height()),
                );
                painter.rect_filled(filled, 2.0, label_color(label));

                ui.label(egui::RichText::new(format!("{score:.2}")).color(TEXT_DIM).size(11.0));
            });
        }
    }

    // ── Controls ─────────────────────────────────────────────────────────

    fn draw_controls(&self, ui: &mut egui::Ui, st: &KioskState) {
        ui.horizontal(|ui| {
            let camera_label = if st.camera_active {
                "Apagar cámara"
            } else {
                "Encender cámara"
            };
            if ui.button(camera_label).clicked() {
                self.send(KioskCommand::ToggleCamera);
            }

            let visibility_label = if st.camera_visible {
                "Ocultar cámara"
            } else {
                "Mostrar cámara"
            };
            if ui.button(visibility_label).clicked() {
                self.send(KioskCommand::ToggleVisibility);
            }
        });
    }

    // ── Chat ─────────────────────────────────────────────────────────────

    fn draw_chat(&mut self, ui: &mut egui::Ui, st: &KioskState) {
        let input_height = 32.0;
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .max_height((ui.available_height() - input_height).max(60.0))
            .show(ui, |ui| {
                for entry in st.transcript.iter() {
                    let (name, color) = match entry.speaker {
                        Speaker::User => (&self.ui_config.user_name, ACCENT),
                        Speaker::Assistant => (&self.ui_config.assistant_name, TEXT_MAIN),
                    };
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(format!("{name}:")).color(color).strong());
                        ui.label(egui::RichText::new(&entry.text).color(TEXT_MAIN));
                    });
                }
                if st.is_waiting_for_chat() {
                    ui.label(egui::RichText::new("…").color(TEXT_DIM));
                }
            });

        ui.horizontal(|ui| {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Escribe un mensaje…")
                    .desired_width(ui.available_width() - 70.0),
            );
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.button("Enviar").clicked();
            if enter || clicked {
                self.submit_chat();
                edit.request_focus();
            }
        });
    }
}

/// Bar colour per label.
fn label_color(label: EmotionLabel) -> egui::Color32 {
    match label {
        EmotionLabel::Happy => egui::Color32::from_rgb(80, 200, 120),
        EmotionLabel::Sad => egui::Color32::from_rgb(68, 136, 255),
        EmotionLabel::Angry => egui::Color32::from_rgb(255, 68, 68),
        EmotionLabel::Neutral => egui::Color32::from_rgb(160, 160, 160),
        EmotionLabel::Surprised => egui::Color32::from_rgb(255, 200, 60),
        EmotionLabel::Disgusted => egui::Color32::from_rgb(140, 190, 60),
        EmotionLabel::Fearful => egui::Color32::from_rgb(170, 110, 230),
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let st = self.snapshot();

        // State changes arrive from other tasks; keep polling.
        ctx.request_repaint_after(Duration::from_millis(100));

        let frame = egui::Frame::new()
            .fill(egui::Color32::from_rgba_premultiplied(30, 30, 30, 235))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(8));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            self.draw_title_bar(ui, ctx, &st);
            ui.separator();

            if let Some(notice) = &st.notice {
                self.draw_notice(ui, notice);
                ui.add_space(4.0);
            }

            let now = Instant::now();
            Self::draw_caption(ui, st.visible_caption(now), now);

            if st.camera_visible {
                Self::draw_camera_panel(ui, &st);
                ui.add_space(4.0);
            }

            self.draw_controls(ui, &st);
            ui.separator();
            self.draw_chat(ui, &st);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("kiosk window closing");
    }
}
