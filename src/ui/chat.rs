// IdeaForge++ page
// Conversation view, quick prompts, and the message input

use crate::state::{AppState, Services};
use crate::ui::components::{message_bubble, page_header, primary_button, status_line, thinking_indicator};
use eframe::egui;
use ignitehub_backend::chat::QUICK_PROMPTS;

const INPUT_ID: &str = "ideaforge_input";

/// Render the chat page
pub fn render_chat_page(ui: &mut egui::Ui, state: &mut AppState, services: &Services) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            page_header(
                ui,
                "IdeaForge++",
                "Your AI project assistant for ideas, doubts, and hackathons",
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!state.chat.is_busy(), egui::Button::new("🗑 New chat"))
                .clicked()
            {
                state.reset_chat();
            }
        });
    });

    status_line(
        ui,
        services.chat_configured(),
        "Connected to OpenAI",
        "OpenAI API key not configured, replies will explain how to set it up",
    );
    ui.add_space(6.0);

    // Input row is laid out from the bottom so the conversation fills the rest
    egui::TopBottomPanel::bottom("ideaforge_input_panel")
        .resizable(false)
        .show_inside(ui, |ui| {
            ui.add_space(6.0);
            render_quick_prompts(ui, state);
            ui.add_space(6.0);
            render_input(ui, state, services);
            ui.add_space(6.0);
        });

    egui::ScrollArea::vertical()
        .id_source("ideaforge_messages")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in state.chat.messages() {
                message_bubble(ui, message);
                ui.add_space(6.0);
            }
            if state.chat.is_busy() {
                thinking_indicator(ui);
            }
        });
}

fn render_quick_prompts(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Try:").weak());
        for (index, quick) in QUICK_PROMPTS.iter().enumerate() {
            if ui
                .add_enabled(!state.chat.is_busy(), egui::Button::new(quick.label).small())
                .clicked()
            {
                state.chat.apply_quick_prompt(index);
                ui.memory_mut(|m| m.request_focus(egui::Id::new(INPUT_ID)));
            }
        }
    });
}

fn render_input(ui: &mut egui::Ui, state: &mut AppState, services: &Services) {
    let input_id = egui::Id::new(INPUT_ID);

    // Enter sends, Shift+Enter inserts a newline; consume before the editor sees it
    let has_focus = ui.memory(|m| m.has_focus(input_id));
    let enter_pressed = has_focus
        && ui.input_mut(|i| !i.modifiers.shift && i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

    let busy = state.chat.is_busy();
    let send_clicked = ui
        .horizontal(|ui| {
            let button_width = 90.0;
            ui.add_enabled(
                !busy,
                egui::TextEdit::multiline(&mut state.chat.input)
                    .id(input_id)
                    .hint_text("Ask me anything about your project ideas...")
                    .desired_rows(2)
                    .desired_width(ui.available_width() - button_width),
            );
            primary_button(ui, state.chat.can_send(), "Send").clicked()
        })
        .inner;

    if send_clicked || enter_pressed {
        services.send_chat(state, ui.ctx());
    }
}
