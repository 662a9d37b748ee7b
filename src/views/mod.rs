//! Route Views
//!
//! One canonical view per route. Each view owns its list state exclusively,
//! fetches on mount, re-fetches when a filter changes, and reloads the full
//! list after every mutation instead of merging optimistically.

mod analytics;
mod contacts;
mod dashboard;
mod deals;
mod home;
mod settings;
mod tasks;

pub use analytics::AnalyticsView;
pub use contacts::ContactsView;
pub use dashboard::DashboardView;
pub use deals::DealsView;
pub use home::HomeView;
pub use settings::SettingsView;
pub use tasks::TasksView;
