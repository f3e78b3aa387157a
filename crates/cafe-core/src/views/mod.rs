//! Derived views shared by the public menu and the admin dashboard

pub mod pricing;
pub mod grouping;

pub use pricing::{DisplayPrice, PriceFormatter};
pub use grouping::{category_tabs, group_by_category, CategoryFilter, CategoryGroup, CategoryTab};
