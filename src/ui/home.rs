// Home page
// Landing view linking to the other pages

use crate::state::{AppState, Page};
use eframe::egui;

/// Render the landing page
pub fn render_home_page(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(egui::RichText::new("🔥 IgniteHub").size(32.0).strong());
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Resources, ideas, and a helping hand for young innovators")
                .size(15.0),
        );
        ui.add_space(32.0);

        ui.horizontal(|ui| {
            // Center the two buttons
            let width = 2.0 * 180.0 + ui.spacing().item_spacing.x;
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
            if ui
                .add(egui::Button::new("💡 Brainstorm with IdeaForge++").min_size(egui::vec2(180.0, 36.0)))
                .clicked()
            {
                state.navigate(Page::IdeaForge);
            }
            if ui
                .add(egui::Button::new("✉ Get in touch").min_size(egui::vec2(180.0, 36.0)))
                .clicked()
            {
                state.navigate(Page::Contact);
            }
        });
    });
}
