//! Toast notification system for brief feedback messages.
//!
//! Toasts are non-blocking notifications that appear briefly and fade away.
//! They carry the countdown's notices ("Illegal operation", "Countdown finished!").

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

use crate::services::countdown::{Notice, NoticeKind};

const TOAST_WIDTH: f32 = 300.0;
const TOAST_HEIGHT: f32 = 56.0;
const MARGIN: f32 = 10.0;
const SPACING: f32 = 5.0;
const FADE: Duration = Duration::from_millis(500);

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✗",
    }
}

fn background_color(kind: NoticeKind, is_dark_theme: bool) -> Color32 {
    match (kind, is_dark_theme) {
        (NoticeKind::Success, true) => Color32::from_rgb(30, 70, 40),
        (NoticeKind::Error, true) => Color32::from_rgb(80, 30, 30),
        (NoticeKind::Success, false) => Color32::from_rgb(220, 255, 220),
        (NoticeKind::Error, false) => Color32::from_rgb(255, 220, 220),
    }
}

fn text_color(kind: NoticeKind, is_dark_theme: bool) -> Color32 {
    match (kind, is_dark_theme) {
        (NoticeKind::Success, true) => Color32::from_rgb(100, 220, 120),
        (NoticeKind::Error, true) => Color32::from_rgb(255, 120, 120),
        (NoticeKind::Success, false) => Color32::from_rgb(30, 120, 50),
        (NoticeKind::Error, false) => Color32::from_rgb(180, 40, 40),
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(notice: Notice, duration: Duration) -> Self {
        Self {
            notice,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity for the fade-out over the last half second
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(FADE);

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let fade_progress = (self.duration - elapsed).as_secs_f32() / FADE.as_secs_f32();
            fade_progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager for toast notifications
#[derive(Debug)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastManager {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.toasts.push(Toast::new(notice, self.duration));
    }

    #[cfg(test)]
    pub(super) fn kinds(&self) -> Vec<NoticeKind> {
        self.toasts.iter().map(|t| t.notice.kind).collect()
    }

    /// Remove expired toasts
    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Render all active toasts, each stacked in its own corner
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        // Request repaint for the fade animation
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let mut stacked = [0usize; 4];

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let position = toast.notice.position;
            let slot = &mut stacked[position as usize];
            let offset = (*slot as f32) * (TOAST_HEIGHT + SPACING);
            *slot += 1;

            let x = if position.is_right() {
                screen_rect.right() - TOAST_WIDTH - MARGIN
            } else {
                screen_rect.left() + MARGIN
            };
            let y = if position.is_top() {
                screen_rect.top() + MARGIN + offset
            } else {
                screen_rect.bottom() - TOAST_HEIGHT - MARGIN - offset
            };

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(Pos2::new(x, y))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let kind = toast.notice.kind;
                    let bg = background_color(kind, is_dark_theme);
                    let fg = text_color(kind, is_dark_theme);

                    let bg = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let fg = Color32::from_rgba_unmultiplied(
                        fg.r(),
                        fg.g(),
                        fg.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(TOAST_WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(icon(kind)).color(fg).strong());
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(&toast.notice.title).color(fg).strong(),
                                    );
                                    ui.label(RichText::new(&toast.notice.message).color(fg));
                                });
                            });
                        });
                });
        }
    }
}
