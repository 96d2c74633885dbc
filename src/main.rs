// IgniteHub GUI - Main Entry Point
// Native front end for the contact form and the IdeaForge++ assistant

mod state;
mod ui;

use eframe::egui;
use ignitehub_backend::config::Config;
use state::{AppState, Services};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::render_app_layout;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!(?config, "Loaded configuration");

    let services = Services::from_config(&config)?;
    if !services.contact_configured() {
        warn!("Supabase not configured, contact form is disabled");
    }
    if !services.chat_configured() {
        warn!("OPENAI_API_KEY not set, IdeaForge++ will answer with setup instructions");
    }

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("IgniteHub")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };

    let app = IgniteHubApp::new(services);
    eframe::run_native("IgniteHub", options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("GUI exited with error: {}", e))
}

/// Main application struct
/// Owns the page state and the background services
struct IgniteHubApp {
    state: AppState,
    services: Services,
}

impl IgniteHubApp {
    fn new(services: Services) -> Self {
        Self {
            state: AppState::new(),
            services,
        }
    }
}

impl eframe::App for IgniteHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Results from finished network calls land before anything is drawn
        self.services.drain(&mut self.state);
        render_app_layout(ctx, &mut self.state, &self.services);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignitehub_backend::config::{CompletionConfig, DatabaseConfig, ServerConfig};
    use state::Page;

    fn unconfigured() -> Config {
        Config {
            server: ServerConfig {
                port: 8080,
                host: "127.0.0.1".to_string(),
            },
            database: DatabaseConfig {
                url: String::new(),
                anon_key: String::new(),
                contact_table: "contacts".to_string(),
            },
            completion: CompletionConfig::with_api_key(String::new()),
        }
    }

    #[test]
    fn test_app_creation() {
        let services = Services::from_config(&unconfigured()).unwrap();
        let app = IgniteHubApp::new(services);
        assert_eq!(app.state.page, Page::Home);
        assert!(!app.services.contact_configured());
        assert!(!app.services.chat_configured());
    }

    #[test]
    fn test_frame_renders_every_page() {
        let services = Services::from_config(&unconfigured()).unwrap();
        let mut app = IgniteHubApp::new(services);
        let ctx = egui::Context::default();

        for page in Page::ALL {
            app.state.navigate(page);
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                app.services.drain(&mut app.state);
                render_app_layout(ctx, &mut app.state, &app.services);
            });
        }
        assert_eq!(app.state.page, Page::Contact);
    }
}
