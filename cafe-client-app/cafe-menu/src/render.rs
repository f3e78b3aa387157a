//! Text and JSON output

use serde::Serialize;

use cafe_core::services::PublicMenu;
use cafe_core::views::{CategoryGroup, PriceFormatter};
use cafe_core::{CafeSettings, Category, CoffeeShop, MenuItem, Tenant};

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn shop_header(settings: &CafeSettings) {
    println!("== {} ==", settings.name);
    for line in [&settings.description, &settings.location, &settings.phone, &settings.instagram_url] {
        if !line.is_empty() {
            println!("{}", line);
        }
    }
}

pub fn groups(groups: &[CategoryGroup], pricing: &PriceFormatter) {
    if groups.is_empty() {
        println!("(no items)");
        return;
    }
    for group in groups {
        println!();
        match group.category.emoji.as_str() {
            "" => println!("[{}]", group.category.label()),
            emoji => println!("[{} {}]", emoji, group.category.label()),
        }
        for item in &group.items {
            item_line(item, pricing);
        }
    }
}

pub fn item_line(item: &MenuItem, pricing: &PriceFormatter) {
    let id = item.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let availability = if item.is_available { "" } else { " (unavailable)" };
    println!("  #{:<4} {:<28} {}{}", id, item.name, pricing.format_item(item), availability);
}

pub fn menu(menu: &PublicMenu, grouped: &[CategoryGroup], pricing: &PriceFormatter) {
    shop_header(&menu.settings);
    groups(grouped, pricing);
}

pub fn settings(settings: &CafeSettings) {
    shop_header(settings);
    println!("logo:   {}", settings.logo_url);
    println!("hero:   {}", settings.hero_image_url);
    println!("active: {}", settings.is_active);
}

pub fn categories(categories: &[Category]) {
    for c in categories {
        let id = c.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        println!(
            "#{:<4} {:<20} {:<24} {} order={} active={}",
            id,
            c.name,
            c.display_name,
            c.emoji,
            c.order_index,
            c.is_active
        );
    }
}

pub fn tenants(tenants: &[Tenant]) {
    for t in tenants {
        let id = t.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        println!("#{:<4} {:<20} {} active={} shops={}", id, t.subdomain, t.name, t.is_active, t.coffee_shops.len());
    }
}

pub fn shops(shops: &[CoffeeShop]) {
    for s in shops {
        let id = s.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        println!("#{:<4} {:<24} {} active={} admins={}", id, s.name, s.location, s.is_active, s.admins.len());
    }
}
