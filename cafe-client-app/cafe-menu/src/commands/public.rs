use anyhow::anyhow;

use cafe_core::viewmodel::MenuViewModel;
use cafe_core::views::CategoryFilter;
use cafe_core::EntityId;
use cafe_shared::constants::MSG_MENU_LOAD_FAILED;

use crate::app::App;
use crate::render;

pub async fn menu(app: &App, category: Option<String>) -> anyhow::Result<()> {
    let mut vm = MenuViewModel::new();
    vm.load(&app.menu_service()).await;

    let menu = vm
        .menu()
        .ok_or_else(|| anyhow!(vm.error().unwrap_or(MSG_MENU_LOAD_FAILED).to_string()))?
        .clone();

    if let Some(id) = category {
        vm.select(CategoryFilter::Only(EntityId::new(id)));
    }
    let groups = vm.groups();

    if app.json {
        return render::print_json(&serde_json::json!({
            "settings": menu.settings,
            "groups": groups,
        }));
    }
    render::menu(&menu, &groups, &app.pricing);
    Ok(())
}
