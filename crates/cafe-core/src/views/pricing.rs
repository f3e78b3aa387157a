//! Price display

use cafe_shared::config::{DigitStyle, DisplaySettings};

use crate::domain::MenuItem;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Regular and optional premium price of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrice {
    pub regular: u64,
    pub premium: Option<u64>,
}

impl DisplayPrice {
    pub fn of(item: &MenuItem) -> Self {
        Self {
            regular: item.price,
            premium: item.premium(),
        }
    }
}

/// Renders whole-unit amounts as localized currency strings.
#[derive(Debug, Clone)]
pub struct PriceFormatter {
    settings: DisplaySettings,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl PriceFormatter {
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    pub fn format_amount(&self, amount: u64) -> String {
        let digits = amount.to_string();
        let mut grouped = String::with_capacity(digits.len() * 2);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.settings.grouping_separator);
            }
            grouped.push(self.localize_digit(ch));
        }

        if self.settings.currency_label.is_empty() {
            grouped
        } else {
            format!("{} {}", grouped, self.settings.currency_label)
        }
    }

    /// Single price, or `regular - premium` when dual pricing is active.
    pub fn format_item(&self, item: &MenuItem) -> String {
        self.format_price(DisplayPrice::of(item))
    }

    pub fn format_price(&self, price: DisplayPrice) -> String {
        match price.premium {
            Some(premium) => format!(
                "{}{}{}",
                self.format_amount(price.regular),
                self.settings.range_separator,
                self.format_amount(premium)
            ),
            None => self.format_amount(price.regular),
        }
    }

    fn localize_digit(&self, ch: char) -> char {
        match (self.settings.digits, ch.to_digit(10)) {
            (DigitStyle::Persian, Some(d)) => PERSIAN_DIGITS[d as usize],
            _ => ch,
        }
    }
}
