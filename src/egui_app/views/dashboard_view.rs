use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::sync::{Connectivity, TriggerOutcome};
use crate::egui_app::theme::{self, colors};
use crate::egui_app::views::format_timestamp;
use crate::egui_app::AppView;
use crate::shared::{SyncLogEntry, SyncType};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let snapshot = state.snapshot.clone();

    // No health snapshot ever arrived: show nothing that looks like data
    if let Connectivity::Unavailable { error } = &snapshot.connectivity {
        render_unavailable(ui, state, error);
        return;
    }

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("System Overview").color(colors::TEXT_PRIMARY).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let syncing = state.is_trigger_in_flight();
            let label = if syncing { "Syncing..." } else { "Sync Inventory Now" };
            let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
                .fill(colors::BUTTON_PRIMARY);
            if ui.add_enabled(!syncing, button).clicked() {
                state.trigger_sync(SyncType::Inventory);
            }
            if syncing {
                ui.spinner();
            }
        });
    });

    match &snapshot.last_trigger {
        Some(TriggerOutcome::Failed(message)) => {
            ui.colored_label(colors::ERROR, format!("❌ {}", message));
        }
        Some(TriggerOutcome::Started(entry)) => {
            ui.colored_label(
                colors::SUCCESS,
                format!("✓ {} sync accepted ({})", entry.sync_type, entry.status),
            );
        }
        None => {}
    }
    if let Connectivity::Degraded { error } = &snapshot.connectivity {
        ui.colored_label(
            colors::WARNING,
            format!("⚠️ Lost contact with the sync engine, showing last known state: {}", error),
        );
    }
    ui.add_space(12.0);

    match &snapshot.health {
        Some(health) => {
            ui.columns(4, |columns| {
                stat_card(
                    &mut columns[0],
                    "System Health",
                    if health.is_operational() { "Operational" } else { "Degraded" },
                    if health.is_operational() { colors::SUCCESS } else { colors::ERROR },
                );
                let last = health
                    .last_successful_sync
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| "Never".to_string());
                stat_card(&mut columns[1], "Last Successful Sync", &last, colors::TEXT_PRIMARY);
                stat_card(
                    &mut columns[2],
                    "Active Workers",
                    &health.celery_workers_active.to_string(),
                    colors::TEXT_PRIMARY,
                );
                stat_card(
                    &mut columns[3],
                    "Queued Updates",
                    &health.pending_tasks.to_string(),
                    colors::TEXT_PRIMARY,
                );
            });
        }
        None => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading system health…");
            });
        }
    }

    ui.add_space(16.0);
    theme::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Recent Sync Activity").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link("View All Logs →").clicked() {
                    state.current_view = AppView::Logs;
                }
            });
        });
        ui.separator();
        let recent = snapshot.recent_logs(state.config.recent_log_limit());
        if recent.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No recent activity found.");
        } else {
            log_table(ui, "recent_logs", recent.iter());
        }
    });
}

fn render_unavailable(ui: &mut egui::Ui, state: &mut AppState, error: &str) {
    theme::alert_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.colored_label(colors::ERROR, egui::RichText::new("⚠️").size(32.0));
            ui.colored_label(colors::ERROR, egui::RichText::new("System Unavailable").size(20.0).strong());
            ui.colored_label(colors::ERROR, format!("Failed to connect to backend service: {}", error));
            ui.add_space(12.0);
            if ui.button("Retry Connection").clicked() {
                state.retry();
            }
        });
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, color: egui::Color32) {
    theme::card_frame().show(ui, |ui| {
        ui.colored_label(colors::TEXT_SECONDARY, title);
        ui.colored_label(color, egui::RichText::new(value).size(18.0).strong());
    });
}

/// Status / Type / Message / Time table shared with the logs view
pub(crate) fn log_table<'a>(
    ui: &mut egui::Ui,
    id: &str,
    entries: impl Iterator<Item = &'a SyncLogEntry>,
) {
    egui::Grid::new(id)
        .striped(true)
        .num_columns(4)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Status");
            ui.strong("Type");
            ui.strong("Message");
            ui.strong("Time");
            ui.end_row();

            for entry in entries {
                ui.colored_label(theme::sync_status_color(entry.status), entry.status.as_str());
                ui.label(entry.sync_type.as_str());
                ui.label(entry.message.as_str());
                ui.colored_label(colors::TEXT_SECONDARY, format_timestamp(&entry.timestamp));
                ui.end_row();
            }
        });
}
