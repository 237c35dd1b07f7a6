use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::views::format_timestamp;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let snapshot = state.snapshot.clone();

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Product Mappings").color(colors::TEXT_PRIMARY).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                state.refresh_now();
            }
        });
    });
    ui.add_space(8.0);

    if !snapshot.mappings_loaded {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading mappings…");
        });
        return;
    }

    let summary = snapshot.mapping_summary();
    ui.horizontal(|ui| {
        ui.label(format!("{} mapped products", summary.total));
        ui.separator();
        ui.colored_label(colors::SUCCESS, format!("{} synced", summary.synced));
        ui.colored_label(colors::WARNING, format!("{} out of sync", summary.out_of_sync));
        ui.colored_label(colors::ERROR, format!("{} errors", summary.error));
    });
    ui.add_space(8.0);

    theme::card_frame().show(ui, |ui| {
        if snapshot.mappings.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No product mappings yet.");
            return;
        }

        egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
            egui::Grid::new("mappings")
                .striped(true)
                .num_columns(5)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Odoo Product");
                    ui.strong("eBay SKU");
                    ui.strong("Status");
                    ui.strong("Last Synced");
                    ui.strong("Odoo ID");
                    ui.end_row();

                    for mapping in &snapshot.mappings {
                        ui.label(mapping.odoo_name.as_str());
                        ui.monospace(mapping.ebay_sku.as_str());
                        ui.colored_label(
                            theme::mapping_status_color(mapping.status),
                            mapping.status.to_string(),
                        );
                        ui.colored_label(colors::TEXT_SECONDARY, format_timestamp(&mapping.last_synced_at));
                        ui.label(mapping.odoo_product_id.to_string());
                        ui.end_row();
                    }
                });
        });
    });
}
