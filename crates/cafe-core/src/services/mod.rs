//! Page services

pub mod auth_service;
pub mod dashboard_service;
pub mod menu_page_service;

pub use auth_service::AuthService;
pub use dashboard_service::{DashboardData, DashboardService};
pub use menu_page_service::{MenuPageService, PublicMenu};
