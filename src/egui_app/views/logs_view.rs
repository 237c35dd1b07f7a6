use eframe::egui;

use crate::egui_app::logs::StatusFilter;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::views::dashboard_view::log_table;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let snapshot = state.snapshot.clone();

    ui.heading(egui::RichText::new("Sync Logs").color(colors::TEXT_PRIMARY).strong());
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.log_query.search)
                .hint_text("Search logs...")
                .desired_width(260.0),
        );

        egui::ComboBox::from_id_salt("log_status_filter")
            .selected_text(state.log_query.status.to_string())
            .show_ui(ui, |ui| {
                for option in StatusFilter::options() {
                    ui.selectable_value(&mut state.log_query.status, option, option.to_string());
                }
            });

        if ui.button("Refresh").clicked() {
            state.refresh_now();
        }
        if state.log_query.is_active() && ui.small_button("Clear").clicked() {
            state.log_query = Default::default();
        }
    });

    if let Some(error) = &snapshot.last_error {
        ui.colored_label(colors::WARNING, format!("⚠️ {}", error));
    }
    ui.add_space(8.0);

    theme::card_frame().show(ui, |ui| {
        if !snapshot.logs_loaded {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading logs…");
            });
            return;
        }

        let filtered = state.log_query.apply(&snapshot.logs);
        if filtered.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No logs match your filters.");
            return;
        }

        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("Showing {} of {} entries", filtered.len(), snapshot.logs.len()),
        );
        egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
            log_table(ui, "all_logs", filtered.into_iter());
        });
    });
}
