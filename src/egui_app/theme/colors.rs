//! Color Constants for the Dashboard Theme
//!
//! Neutral light panels with an indigo accent; status colors follow the usual
//! green/red/amber/blue convention for sync outcomes.

use eframe::egui::Color32;

/// Top bar background - Deep indigo
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1E, 0x1B, 0x4B);

/// Page background - Off-white
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Card background - White
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Light gray
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEE, 0xF2, 0xFF);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Button primary background - Indigo
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x4F, 0x46, 0xE5);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Warning color - Amber
pub const WARNING: Color32 = Color32::from_rgb(0xD9, 0x77, 0x06);

/// Running / informational color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
