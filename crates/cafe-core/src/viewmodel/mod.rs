//! ViewModels
//!
//! Page state the presentation layer binds to. No rendering here.

pub mod dashboard_vm;
pub mod menu_item_form;
pub mod menu_vm;
pub mod state;

pub use dashboard_vm::DashboardViewModel;
pub use menu_item_form::MenuItemForm;
pub use menu_vm::MenuViewModel;
pub use state::{FormState, LoadState, LoadTicket, PageLoader};
