use eframe::egui;
use lexicard::{
    api::ApiClient,
    config::Config,
    core::tasks::TaskManager,
    gui::LexicardApp,
};
use tracing::info;
use tracing_subscriber::{
    fmt,
    EnvFilter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let api = ApiClient::new(&config.api_base, config.http_timeout)?;
    let task_manager = TaskManager::new(api)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lexicard")
            .with_inner_size([1120.0, 760.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    info!("Starting Lexicard");
    eframe::run_native(
        "Lexicard",
        options,
        Box::new(move |cc| Ok(Box::new(LexicardApp::new(cc, config, task_manager)))),
    )?;

    Ok(())
}
