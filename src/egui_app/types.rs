/**
 * Shared Types Module
 *
 * Defines the app view states for the dashboard tabs.
 */

/// Current dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// System overview with stats cards and recent activity
    #[default]
    Dashboard,
    /// ERP product to marketplace SKU mappings
    Mappings,
    /// Full sync log with filters
    Logs,
    /// Credential configuration
    Settings,
}

impl AppView {
    pub const ALL: [AppView; 4] = [
        AppView::Dashboard,
        AppView::Mappings,
        AppView::Logs,
        AppView::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::Mappings => "Product Mappings",
            AppView::Logs => "Sync Logs",
            AppView::Settings => "Configuration",
        }
    }
}
