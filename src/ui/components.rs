// Reusable UI components
// Provides common UI elements for the application

use eframe::egui;
use ignitehub_backend::chat::{ChatMessage, MessageRole};

const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(0, 170, 90);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const ACCENT_CYAN: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
const USER_PURPLE: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);

/// Kind of banner to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Green, check mark
    Success,
    /// Red, warning sign
    Error,
}

/// Render a transient status banner with a title and detail line
pub fn banner(ui: &mut egui::Ui, kind: BannerKind, title: &str, detail: &str) {
    let (color, icon) = match kind {
        BannerKind::Success => (SUCCESS_GREEN, "✔"),
        BannerKind::Error => (ERROR_RED, "⚠"),
    };

    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(color, egui::RichText::new(icon).size(18.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(title).strong().color(color));
                    if !detail.is_empty() {
                        ui.label(detail);
                    }
                });
            });
        });
}

/// Render a green/red dot with a caption
pub fn status_line(ui: &mut egui::Ui, ok: bool, ok_text: &str, not_ok_text: &str) {
    ui.horizontal(|ui| {
        let (color, text) = if ok {
            (SUCCESS_GREEN, ok_text)
        } else {
            (ERROR_RED, not_ok_text)
        };
        ui.colored_label(color, "●");
        ui.colored_label(color, text);
    });
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, enabled: bool, text: &str) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(text).strong()).min_size(egui::vec2(120.0, 28.0)),
    )
}

/// Render one chat turn as a bubble, right-aligned for the user
pub fn message_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let is_user = message.role == MessageRole::User;
    let layout = if is_user {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };
    let fill = if is_user {
        USER_PURPLE.gamma_multiply(0.35)
    } else {
        ui.visuals().faint_bg_color
    };
    let max_width = (ui.available_width() * 0.75).max(200.0);

    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, ACCENT_CYAN.gamma_multiply(0.4)))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    if !is_user {
                        ui.colored_label(ACCENT_CYAN, egui::RichText::new("🤖 IdeaForge++").small());
                    }
                    ui.label(&message.content);
                    ui.label(
                        egui::RichText::new(message.time_label())
                            .small()
                            .weak(),
                    );
                });
            });
    });
}

/// Render the "thinking" placeholder shown while a reply is pending
pub fn thinking_indicator(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(ACCENT_CYAN, "IdeaForge++ is thinking...");
    });
}

/// Render a page heading with a subtitle
pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.heading(egui::RichText::new(title).size(26.0).strong());
    ui.label(egui::RichText::new(subtitle).weak());
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}
