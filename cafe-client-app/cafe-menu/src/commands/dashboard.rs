use anyhow::{anyhow, bail};

use cafe_core::repositories::SettingsRepository;
use cafe_core::viewmodel::{DashboardViewModel, MenuItemForm};
use cafe_core::{AdminRole, EntityId, SettingsInput};
use cafe_shared::constants::{MSG_LOAD_FAILED, MSG_SAVE_FAILED};

use crate::app::{App, Dashboard};
use crate::cli::{ItemCommand, ItemFields, SettingsCommand, ShopFields};
use crate::render;

async fn loaded(app: &App, service: &Dashboard) -> anyhow::Result<DashboardViewModel> {
    app.auth.require(AdminRole::Shop)?;

    let mut vm = DashboardViewModel::new();
    vm.load(service).await;
    if let Some(msg) = vm.load_error() {
        bail!("{}", msg);
    }
    Ok(vm)
}

pub async fn show(app: &App) -> anyhow::Result<()> {
    let service = app.dashboard();
    let vm = loaded(app, &service).await?;
    let data = vm.data().ok_or_else(|| anyhow!(MSG_LOAD_FAILED))?;

    if app.json {
        return render::print_json(&data.grouped());
    }
    render::shop_header(&data.settings);
    render::groups(&data.grouped(), &app.pricing);

    let orphans: Vec<_> = data
        .items
        .iter()
        .filter(|i| i.category_id.as_ref().map_or(true, |id| data.category(id).is_none()))
        .collect();
    if !orphans.is_empty() {
        println!("\n[uncategorized]");
        for item in orphans {
            render::item_line(item, &app.pricing);
        }
    }
    Ok(())
}

pub async fn item(app: &App, command: ItemCommand) -> anyhow::Result<()> {
    let service = app.dashboard();
    let mut vm = loaded(app, &service).await?;

    match command {
        ItemCommand::Add(fields) => {
            vm.open_new()?;
            apply_item_fields(&fields, &mut vm.form);
            submit(app, &service, &mut vm).await
        }
        ItemCommand::Edit { id, fields } => {
            vm.open_edit(&EntityId::new(id))?;
            apply_item_fields(&fields, &mut vm.form);
            submit(app, &service, &mut vm).await
        }
        ItemCommand::Delete { id } => {
            let id = EntityId::new(id);
            if let Err(e) = vm.delete(&service, &id).await {
                bail!(vm.error.clone().unwrap_or_else(|| e.to_string()));
            }
            println!("Deleted menu item #{}", id);
            Ok(())
        }
    }
}

async fn submit(app: &App, service: &Dashboard, vm: &mut DashboardViewModel) -> anyhow::Result<()> {
    match vm.submit(service).await {
        Ok(saved) if app.json => render::print_json(&saved),
        Ok(saved) => {
            render::item_line(&saved, &app.pricing);
            Ok(())
        }
        Err(e) => bail!(vm.error.clone().unwrap_or_else(|| e.user_message(MSG_SAVE_FAILED))),
    }
}

fn apply_item_fields(fields: &ItemFields, form: &mut MenuItemForm) {
    if let Some(name) = &fields.name {
        form.name = name.clone();
    }
    if let Some(category) = &fields.category {
        form.category_id = category.clone();
    }
    if let Some(price) = &fields.price {
        form.price = price.clone();
    }
    if let Some(premium) = &fields.premium {
        form.price_premium = premium.clone();
        form.has_dual_pricing = true;
    }
    if fields.single_price {
        form.price_premium.clear();
        form.has_dual_pricing = false;
    }
    if let Some(url) = &fields.image_url {
        form.image_url = url.clone();
    }
    if let Some(order) = &fields.order {
        form.order_index = order.clone();
    }
    if let Some(available) = fields.available {
        form.is_available = available;
    }
}

pub async fn settings(app: &App, command: SettingsCommand) -> anyhow::Result<()> {
    app.auth.require(AdminRole::Shop)?;
    let current = app
        .settings
        .get()
        .await
        .map_err(|e| anyhow!(e.user_message(MSG_LOAD_FAILED)))?;

    let shown = match command {
        SettingsCommand::Show => current,
        SettingsCommand::Update(fields) => app
            .dashboard()
            .update_settings(&current, &settings_input(fields))
            .await
            .map_err(|e| anyhow!(e.user_message(MSG_SAVE_FAILED)))?,
    };

    if app.json {
        return render::print_json(&shown);
    }
    render::settings(&shown);
    Ok(())
}

pub fn settings_input(fields: ShopFields) -> SettingsInput {
    SettingsInput {
        name: fields.name,
        location: fields.location,
        phone: fields.phone,
        instagram_url: fields.instagram_url,
        logo_url: fields.logo_url,
        hero_image_url: fields.hero_image_url,
        description: fields.description,
        is_active: fields.active,
    }
}
