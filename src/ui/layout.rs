// Main application layout
// Handles menu bar, sidebar navigation, and page dispatch

use crate::state::{AppState, Page, Services};
use crate::ui::{chat, contact, home};
use eframe::egui;

/// Render the main application layout
/// Includes menu bar, sidebar, and the current page
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState, services: &Services) {
    render_menu_bar(ctx, state);

    if state.ui_state.sidebar_visible {
        render_sidebar(ctx, state);
    }

    egui::CentralPanel::default().show(ctx, |ui| match state.page {
        Page::Home => home::render_home_page(ui, state),
        Page::IdeaForge => chat::render_chat_page(ui, state, services),
        Page::Contact => contact::render_contact_page(ui, state, services),
    });
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add_enabled(!state.chat.is_busy(), egui::Button::new("New Chat"))
                    .clicked()
                {
                    state.reset_chat();
                    state.navigate(Page::IdeaForge);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
                ui.checkbox(&mut state.ui_state.sidebar_visible, "Sidebar");
            });
        });
    });
}

/// Render the left sidebar with page navigation
fn render_sidebar(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("nav_sidebar")
        .resizable(true)
        .default_width(180.0)
        .min_width(140.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("IgniteHub");
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            for page in Page::ALL {
                let selected = state.page == page;
                if ui
                    .add_sized(
                        [ui.available_width(), 28.0],
                        egui::SelectableLabel::new(selected, page.title()),
                    )
                    .clicked()
                {
                    state.navigate(page);
                }
                ui.add_space(2.0);
            }
        });
}
