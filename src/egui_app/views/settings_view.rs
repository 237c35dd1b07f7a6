use eframe::egui;

use crate::egui_app::settings::{CredentialField, TestState};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(egui::RichText::new("Configuration").color(colors::TEXT_PRIMARY).strong());
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_odoo_card(ui, state);
        ui.add_space(16.0);
        render_ebay_card(ui, state);
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            let button = egui::Button::new(
                egui::RichText::new("Save Configuration").color(colors::TEXT_LIGHT),
            )
            .fill(colors::BUTTON_PRIMARY);
            if ui.add_enabled(!state.saving, button).clicked() {
                state.save_credentials();
            }
            if state.saving {
                ui.spinner();
            }
            match &state.save_status {
                Some(Ok(message)) => {
                    ui.colored_label(colors::SUCCESS, message.as_str());
                }
                Some(Err(message)) => {
                    ui.colored_label(colors::ERROR, message.as_str());
                }
                None => {}
            }
        });
    });
}

fn render_odoo_card(ui: &mut egui::Ui, state: &mut AppState) {
    theme::card_frame().show(ui, |ui| {
        ui.label(egui::RichText::new("Odoo ERP").strong().size(16.0));
        ui.colored_label(colors::TEXT_SECONDARY, "Connection to the Odoo XML-RPC endpoint.");
        ui.add_space(8.0);

        egui::Grid::new("odoo_fields")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for field in CredentialField::ALL {
                    ui.label(field.label());
                    // Edit a copy so every change goes through the form
                    let mut value = state.odoo_form.field(field).to_string();
                    let edit = egui::TextEdit::singleline(&mut value)
                        .password(field.is_secret())
                        .desired_width(320.0);
                    if ui.add(edit).changed() {
                        state.odoo_form.set_field(field, value);
                    }
                    ui.end_row();
                }
            });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let testing = state.odoo_form.is_testing();
            let label = if testing { "Testing..." } else { "Test Connection" };
            if ui.add_enabled(!testing, egui::Button::new(label)).clicked() {
                state.test_credentials();
            }

            match state.odoo_form.state() {
                TestState::Idle => {}
                TestState::Testing => {
                    ui.spinner();
                }
                TestState::Tested { success: true, message } => {
                    ui.colored_label(colors::SUCCESS, format!("✓ {}", message));
                }
                TestState::Tested { success: false, message } => {
                    ui.colored_label(colors::ERROR, format!("❌ {}", message));
                }
            }
        });
    });
}

fn render_ebay_card(ui: &mut egui::Ui, state: &mut AppState) {
    theme::card_frame().show(ui, |ui| {
        ui.label(egui::RichText::new("eBay API").strong().size(16.0));
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Kept for this session only; the engine reads eBay keys from its own environment.",
        );
        ui.add_space(8.0);

        let ebay = &mut state.ebay_config;
        egui::Grid::new("ebay_fields")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label("App ID");
                ui.add(egui::TextEdit::singleline(&mut ebay.app_id).desired_width(320.0));
                ui.end_row();

                ui.label("Cert ID");
                ui.add(egui::TextEdit::singleline(&mut ebay.cert_id).password(true).desired_width(320.0));
                ui.end_row();

                ui.label("User Token");
                ui.add(egui::TextEdit::singleline(&mut ebay.user_token).password(true).desired_width(320.0));
                ui.end_row();

                ui.label("Refresh Token");
                ui.add(
                    egui::TextEdit::singleline(&mut ebay.refresh_token)
                        .password(true)
                        .desired_width(320.0),
                );
                ui.end_row();
            });
    });
}
