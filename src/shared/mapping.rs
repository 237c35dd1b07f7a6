//! Product Mapping Types
//!
//! A mapping links one ERP product to one marketplace SKU. Its status is
//! computed by the sync engine; the dashboard only displays it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drift status of a mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingStatus {
    Synced,
    Error,
    /// Both sides are known to disagree and have not been reconciled yet
    OutOfSync,
}

impl fmt::Display for MappingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingStatus::Synced => write!(f, "Synced"),
            MappingStatus::Error => write!(f, "Error"),
            MappingStatus::OutOfSync => write!(f, "Out of Sync"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMapping {
    pub id: String,
    /// ERP-side product identifier
    pub odoo_product_id: i64,
    /// Marketplace-side identifier
    pub ebay_sku: String,
    /// Display name of the ERP product
    pub odoo_name: String,
    pub last_synced_at: DateTime<Utc>,
    pub status: MappingStatus,
}

/// Per-status counts for the mappings header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingSummary {
    pub total: usize,
    pub synced: usize,
    pub error: usize,
    pub out_of_sync: usize,
}

impl MappingSummary {
    pub fn from_mappings(mappings: &[ProductMapping]) -> Self {
        mappings.iter().fold(Self::default(), |mut summary, mapping| {
            summary.total += 1;
            match mapping.status {
                MappingStatus::Synced => summary.synced += 1,
                MappingStatus::Error => summary.error += 1,
                MappingStatus::OutOfSync => summary.out_of_sync += 1,
            }
            summary
        })
    }

    /// Mappings that need operator attention
    pub fn needs_attention(&self) -> usize {
        self.error + self.out_of_sync
    }
}
