//! Linepad native entry point.

mod app;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Linepad");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Linepad"),
        ..Default::default()
    };

    eframe::run_native(
        "linepad",
        native_options,
        Box::new(|cc| Ok(Box::new(app::LinepadApp::new(cc)))),
    )
}
