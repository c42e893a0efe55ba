use crate::app::MapnessDemoApp;
use crate::app::settings::{Settings, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

/// Native entry point
pub fn native_main() {
    setup_logging();
    log_version_info();

    let settings = Settings::from_cli();
    tracing::debug!(?settings, "parsed settings");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title(WINDOW_TITLE),
        centered: true,
        ..Default::default()
    };

    let _ = eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(MapnessDemoApp::new(settings, cc)))),
    );
}

/// Initialize the tracing subscriber with a helpful default filter when
/// RUST_LOG is not set.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    if std::env::var("RUST_LOG").is_err() {
        // Safety: single-threaded at startup
        unsafe {
            std::env::set_var(
                "RUST_LOG",
                "info,eframe=warn,walkers=info,egui::context=warn",
            );
        }
    }

    let fmt_layer = fmt::layer().with_filter(EnvFilter::from_default_env());
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn log_version_info() {
    tracing::info!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
}
