//! Dashboard module - client-side aggregation for the overview panel.

mod dashboard_model;
mod dashboard_service;


pub use dashboard_model::DashboardSummary;
pub use dashboard_service::{summarize, DashboardService, DashboardServiceTrait};
