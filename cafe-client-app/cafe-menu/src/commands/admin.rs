use anyhow::{anyhow, bail};
use serde_json::json;
use validator::Validate;

use cafe_core::repositories::{CategoryRepository, CoffeeShopRepository, TenantRepository};
use cafe_core::{AdminRole, Category, CategoryInput, CoffeeShop, EntityId, ShopAdminInput, Tenant, TenantInput};
use cafe_shared::constants::{MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_SAVE_FAILED};

use crate::app::App;
use crate::cli::{CategoryCommand, CategoryFields, ShopCommand, TenantCommand};
use crate::render;

use super::dashboard::settings_input;

pub async fn category(app: &App, command: CategoryCommand) -> anyhow::Result<()> {
    app.auth.require(AdminRole::Main)?;

    match command {
        CategoryCommand::List => {
            let categories = app
                .categories
                .list()
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;
            if app.json {
                return render::print_json(&categories);
            }
            render::categories(&categories);
        }
        CategoryCommand::Add(fields) => {
            let name = fields.name.clone().ok_or_else(|| anyhow!("--name is required"))?;
            let display_name = fields.display_name.clone().unwrap_or_else(|| name.clone());
            let mut input = CategoryInput::new(&name, &display_name);
            apply_category_fields(fields, &mut input);
            input.validate()?;

            let created = app
                .categories
                .create(&input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            print_record(app, &created, || render::categories(std::slice::from_ref(&created)))?;
        }
        CategoryCommand::Edit { id, fields } => {
            let current = app
                .categories
                .get(&EntityId::new(id))
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;
            let mut input = CategoryInput::from(&current);
            apply_category_fields(fields, &mut input);
            input.validate()?;

            let updated = app
                .categories
                .update(&current, &input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            print_record(app, &updated, || render::categories(std::slice::from_ref(&updated)))?;
        }
        CategoryCommand::Delete { id } => {
            let stub = Category::from_json(&json!({ "id": id }));
            app.categories
                .delete(&stub)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_DELETE_FAILED)))?;
            println!("Deleted category #{}", id);
        }
    }
    Ok(())
}

fn apply_category_fields(fields: CategoryFields, input: &mut CategoryInput) {
    if let Some(name) = fields.name {
        input.name = name.trim().to_string();
    }
    if let Some(display_name) = fields.display_name {
        input.display_name = display_name.trim().to_string();
    }
    if let Some(emoji) = fields.emoji {
        input.emoji = emoji;
    }
    if let Some(color) = fields.color {
        input.color = color;
    }
    if let Some(order) = fields.order {
        input.order_index = order;
    }
    if fields.active.is_some() {
        input.is_active = fields.active;
    }
}

pub async fn tenant(app: &App, command: TenantCommand) -> anyhow::Result<()> {
    app.auth.require(AdminRole::Main)?;

    match command {
        TenantCommand::List => {
            let tenants = app
                .tenants
                .list()
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;
            if app.json {
                return render::print_json(&tenants);
            }
            render::tenants(&tenants);
        }
        TenantCommand::Add { subdomain, name } => {
            let input = TenantInput::create(&subdomain, &name);
            input.validate()?;
            let created = app
                .tenants
                .create(&input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            print_record(app, &created, || render::tenants(std::slice::from_ref(&created)))?;
        }
        TenantCommand::Edit { id, name, active } => {
            let input = TenantInput {
                subdomain: None,
                name: name.map(|n| n.trim().to_string()),
                is_active: active,
            };
            if input.name.is_none() && input.is_active.is_none() {
                bail!("Nothing to update");
            }
            input.validate()?;

            let current = app
                .tenants
                .get(&EntityId::new(id))
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;
            let updated = app
                .tenants
                .update(&current, &input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            print_record(app, &updated, || render::tenants(std::slice::from_ref(&updated)))?;
        }
        TenantCommand::Delete { id } => {
            let stub = Tenant::from_json(&json!({ "id": id }));
            app.tenants
                .delete(&stub)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_DELETE_FAILED)))?;
            println!("Deleted tenant #{}", id);
        }
    }
    Ok(())
}

pub async fn shop(app: &App, command: ShopCommand) -> anyhow::Result<()> {
    app.auth.require(AdminRole::Main)?;

    match command {
        ShopCommand::List { tenant } => {
            let shops = app
                .shops
                .list_for_tenant(&EntityId::new(tenant))
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;
            if app.json {
                return render::print_json(&shops);
            }
            render::shops(&shops);
        }
        ShopCommand::Add { tenant, fields } => {
            let input = settings_input(fields);
            if input.name.is_none() {
                bail!("--name is required");
            }
            input.validate()?;
            let created = app
                .shops
                .create_for_tenant(&EntityId::new(tenant), &input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            print_record(app, &created, || render::shops(std::slice::from_ref(&created)))?;
        }
        ShopCommand::Edit { id, fields } => {
            let input = settings_input(fields);
            if input.is_empty() {
                bail!("Nothing to update");
            }
            input.validate()?;

            let current = app
                .shops
                .get(&EntityId::new(id))
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;
            let updated = app
                .shops
                .update(&current, &input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            print_record(app, &updated, || render::shops(std::slice::from_ref(&updated)))?;
        }
        ShopCommand::Delete { id } => {
            let stub = CoffeeShop::from_json(&json!({ "id": id }));
            app.shops
                .delete(&stub)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_DELETE_FAILED)))?;
            println!("Deleted coffee shop #{}", id);
        }
        ShopCommand::Admin { shop, username, password } => {
            let input = ShopAdminInput::new(&username, &password);
            input.validate()?;
            let admin = app
                .shops
                .create_admin(&EntityId::new(shop), &input)
                .await
                .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?;
            if app.json {
                return render::print_json(&admin);
            }
            println!("Created shop admin {}", admin.username);
        }
    }
    Ok(())
}

fn print_record<T: serde::Serialize>(app: &App, record: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    if app.json {
        return render::print_json(record);
    }
    text();
    Ok(())
}
