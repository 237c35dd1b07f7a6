use eframe::egui;

use crate::egui_app::sync::Connectivity;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::AppView;

pub mod dashboard_view;
pub mod logs_view;
pub mod mappings_view;
pub mod settings_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🔄 SyncBoard").size(18.0).strong(),
                );
                ui.add_space(24.0);

                for view in AppView::ALL {
                    let selected = state.current_view == view;
                    let label = egui::RichText::new(view.label()).color(colors::TEXT_LIGHT);
                    if ui.selectable_label(selected, label).clicked() {
                        state.current_view = view;
                    }
                }

                // Connectivity status indicator
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    match &state.snapshot.connectivity {
                        Connectivity::Online => {
                            ui.colored_label(colors::SUCCESS, "🟢 Online");
                        }
                        Connectivity::Degraded { error } => {
                            ui.colored_label(colors::WARNING, "🟠 Degraded")
                                .on_hover_text(error.as_str());
                        }
                        Connectivity::Unavailable { error } => {
                            ui.colored_label(colors::ERROR, "🔴 Offline")
                                .on_hover_text(error.as_str());
                        }
                        Connectivity::Connecting => {
                            ui.spinner();
                            ui.colored_label(colors::TEXT_LIGHT, "Connecting…");
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::PAGE_BG)
        .inner_margin(egui::Margin::same(24));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Dashboard => dashboard_view::render(ui, state),
            AppView::Mappings => mappings_view::render(ui, state),
            AppView::Logs => logs_view::render(ui, state),
            AppView::Settings => settings_view::render(ui, state),
        });
}

/// Local time as shown in tables, e.g. `2025-03-01 14:05`
pub(crate) fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
