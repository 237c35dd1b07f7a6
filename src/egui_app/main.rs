/**
 * egui Native Desktop App - Main Entry Point
 *
 * Starts the tokio runtime that carries all network work, begins background
 * polling, and hands the UI thread to eframe.
 */
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use syncboard::egui_app::{theme, views, AppState, Config, HttpSyncClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("syncboard-worker")
        .build()?;

    let config = Config::from_env()?;
    tracing::info!("Sync engine at {}", config.api_url(""));
    let client = HttpSyncClient::new(config.clone())?;

    let mut state = AppState::new(config, runtime.handle().clone(), Arc::new(client));
    state.start_polling()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SyncBoard",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(SyncBoardApp { state }))
        }),
    )?;

    // The app (and its poller) is gone; let in-flight requests wind down
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}

/// Main application state
struct SyncBoardApp {
    state: AppState,
}

impl eframe::App for SyncBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_background();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // Background results only show up on the next frame
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
