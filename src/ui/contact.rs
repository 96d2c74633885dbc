// Contact page
// Form with name, email and message plus the success/error banner

use crate::state::{AppState, Services};
use crate::ui::components::{banner, page_header, primary_button, status_line, BannerKind};
use eframe::egui;
use ignitehub_backend::contact::validation::{
    MAX_EMAIL_LENGTH, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
};
use ignitehub_backend::contact::SubmitStatus;
use std::time::Instant;

const CONTACT_EMAIL: &str = "dharshansondi.dev@gmail.com";

/// Render the contact page
pub fn render_contact_page(ui: &mut egui::Ui, state: &mut AppState, services: &Services) {
    // Banners clear themselves after a fixed time
    let now = Instant::now();
    state.contact.expire_status(now);
    if let Some(remaining) = state.contact.status_remaining(now) {
        ui.ctx().request_repaint_after(remaining);
    }

    page_header(
        ui,
        "Get in Touch",
        "Have a suggestion, question, or want to contribute? We'd love to hear from you!",
    );

    let configured = services.contact_configured();

    egui::ScrollArea::vertical()
        .id_source("contact_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Want to Contribute?").strong());
            ui.label(
                "IgniteHub is always growing! If you know of amazing resources that should be \
                 featured, or if you'd like to help curate content, let us know.",
            );
            ui.label(format!("You can also reach us directly at: {}", CONTACT_EMAIL));
            ui.add_space(8.0);

            status_line(
                ui,
                configured,
                "Messages will be saved securely to our database",
                "Please configure Supabase settings to enable the contact form",
            );
            ui.add_space(8.0);

            match state.contact.status() {
                SubmitStatus::Success => banner(
                    ui,
                    BannerKind::Success,
                    "Message sent successfully!",
                    "Thank you for reaching out. We'll get back to you soon!",
                ),
                SubmitStatus::Error => {
                    let detail = format!(
                        "If the problem persists, please email us directly at {}",
                        CONTACT_EMAIL
                    );
                    banner(ui, BannerKind::Error, state.contact.display_error(), &detail)
                }
                SubmitStatus::Idle => {}
            }
            ui.add_space(8.0);

            render_form(ui, state, services, configured);
        });
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState, services: &Services, configured: bool) {
    let enabled = state.contact.inputs_enabled(configured);
    let form = &mut state.contact;

    ui.label("Name *");
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("Your name")
            .char_limit(MAX_NAME_LENGTH)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("Email *");
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("your.email@example.com")
            .char_limit(MAX_EMAIL_LENGTH)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("Message *");
    ui.add_enabled(
        enabled,
        egui::TextEdit::multiline(&mut form.message)
            .hint_text("Tell us about your suggestion, question, or how you'd like to contribute...")
            .char_limit(MAX_MESSAGE_LENGTH)
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );
    ui.label(
        egui::RichText::new(format!(
            "{}/{} characters",
            form.message_char_count(),
            MAX_MESSAGE_LENGTH
        ))
        .small()
        .weak(),
    );
    ui.add_space(8.0);

    let label = if form.is_submitting() {
        "Sending..."
    } else {
        "Send Message"
    };
    let clicked = ui
        .horizontal(|ui| {
            let response = primary_button(ui, enabled, label);
            if form.is_submitting() {
                ui.spinner();
            }
            response.clicked()
        })
        .inner;

    if clicked {
        services.submit_contact(state, ui.ctx());
    }
}
