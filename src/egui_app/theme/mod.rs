//! Theme Module
//!
//! Color scheme and styling helpers for the dashboard:
//!
//! - Color constants for panels, text and sync outcomes
//! - Frame builders for cards and alerts
//! - Status-to-color mapping for log and mapping badges

pub mod colors;
pub mod styles;

pub use styles::*;
