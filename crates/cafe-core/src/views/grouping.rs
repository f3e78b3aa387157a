//! Grouping menu items under their categories

use serde::Serialize;

use crate::domain::{Category, EntityId, MenuItem};

/// Which items are visible before grouping
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EntityId),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => item.belongs_to(id),
        }
    }
}

/// A category together with its visible items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Bucket `items` under `categories`.
///
/// Category order and in-bucket item order are kept as given. Categories
/// with no visible items are left out, and so are items whose category is
/// not in the list.
pub fn group_by_category(
    categories: &[Category],
    items: &[MenuItem],
    filter: &CategoryFilter,
) -> Vec<CategoryGroup> {
    categories
        .iter()
        .filter_map(|category| {
            let id = category.id.as_ref()?;
            let bucket: Vec<MenuItem> = items
                .iter()
                .filter(|item| filter.matches(item) && item.belongs_to(id))
                .cloned()
                .collect();

            if bucket.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category: category.clone(),
                    items: bucket,
                })
            }
        })
        .collect()
}

/// Entry of the public menu's category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: String,
    pub emoji: String,
}

/// "All" followed by every category that has at least one item.
pub fn category_tabs(categories: &[Category], items: &[MenuItem], all_label: &str) -> Vec<CategoryTab> {
    let mut tabs = vec![CategoryTab {
        filter: CategoryFilter::All,
        label: all_label.to_string(),
        emoji: String::new(),
    }];

    tabs.extend(
        group_by_category(categories, items, &CategoryFilter::All)
            .into_iter()
            .filter_map(|group| {
                let id = group.category.id.clone()?;
                Some(CategoryTab {
                    filter: CategoryFilter::Only(id),
                    label: group.category.label().to_string(),
                    emoji: group.category.emoji,
                })
            }),
    );

    tabs
}
