//! Theme Styling Functions

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;
use crate::shared::{MappingStatus, SyncStatus};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::PAGE_BG;
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    style.visuals.selection.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for stats cards and tables
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
}

/// Frame for the "System Unavailable" panel
pub fn alert_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(0xFE, 0xF2, 0xF2))
        .stroke(Stroke::new(1.0, colors::ERROR))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(24))
}

pub fn sync_status_color(status: SyncStatus) -> egui::Color32 {
    match status {
        SyncStatus::Success => colors::SUCCESS,
        SyncStatus::Failed => colors::ERROR,
        SyncStatus::Pending => colors::WARNING,
        SyncStatus::Running => colors::INFO,
    }
}

pub fn mapping_status_color(status: MappingStatus) -> egui::Color32 {
    match status {
        MappingStatus::Synced => colors::SUCCESS,
        MappingStatus::Error => colors::ERROR,
        MappingStatus::OutOfSync => colors::WARNING,
    }
}
