//! Transform Inspector main entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xf_frontend=debug,xf_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Transform Inspector");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Transform Inspector"),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "xf",
        native_options,
        Box::new(|cc| Ok(Box::new(xf_frontend::InspectorApp::new(cc)))),
    )
}
