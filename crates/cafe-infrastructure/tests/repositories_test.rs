use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cafe_core::domain::{
    AdminRole, CategoryInput, Credentials, EntityId, MenuItem, MenuItemInput, SettingsInput, ShopAdminInput, TenantInput,
};
use cafe_core::repositories::{
    AuthGateway, CategoryRepository, CoffeeShopRepository, MenuItemRepository, SettingsRepository, TenantRepository,
};
use cafe_infrastructure::{
    ApiClient, HttpAuthGateway, HttpCategoryRepository, HttpCoffeeShopRepository, HttpMenuItemRepository,
    HttpSettingsRepository, HttpTenantRepository,
};
use cafe_shared::config::ApiSettings;

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(
        ApiClient::new(&ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        })
        .unwrap(),
    )
}

#[tokio::test]
async fn test_public_menu_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Espresso", "category_id": 2, "price": 35000},
            {"id": 2, "name": "Latte", "category_id": "2", "price": "not a number", "has_dual_pricing": true, "price_premium": 60000},
            "garbage"
        ])))
        .mount(&server)
        .await;

    let items = HttpMenuItemRepository::new(client_for(&server)).list_public().await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].price, 35000);
    assert!(items[1].belongs_to(&EntityId::from(2)));
    assert_eq!(items[1].price, 0);
    assert_eq!(items[1].premium(), Some(60000));
    assert_eq!(items[2].name, "");
}

#[tokio::test]
async fn test_create_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/menu"))
        .and(body_partial_json(json!({"name": "Mocha", "category_id": 2, "price": 50000, "price_premium": null})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Menu item created successfully",
            "data": {"id": 12, "name": "Mocha", "category_id": 2, "price": 50000}
        })))
        .mount(&server)
        .await;

    let input = MenuItemInput::new("Mocha", EntityId::from(2), 50000);
    let created = HttpMenuItemRepository::new(client_for(&server)).create(&input).await.unwrap();

    assert_eq!(created.id, Some(EntityId::from(12)));
    assert_eq!(created.name, "Mocha");
}

#[tokio::test]
async fn test_update_overwrites_with_server_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/menu/7"))
        .and(body_partial_json(json!({"image_url": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Menu item updated successfully",
            "data": {"id": 7, "name": "Latte", "price": 14000}
        })))
        .mount(&server)
        .await;

    let original = MenuItem::from_json(&json!({
        "id": 7,
        "name": "Latte",
        "category_id": 1,
        "price": 12000,
        "image_url": "https://cdn.example.com/latte.png"
    }));
    let input = MenuItemInput::new("Latte", EntityId::from(1), 14000);

    let updated = HttpMenuItemRepository::new(client_for(&server))
        .update(&original, &input)
        .await
        .unwrap();

    assert_eq!(updated.price, 14000);
    assert_eq!(updated.image_url, "");
    assert_eq!(updated.category_id, None);
    assert_eq!(original.price, 12000);
}

#[tokio::test]
async fn test_delete_missing_surfaces_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/categories/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Category not found"})))
        .mount(&server)
        .await;

    let category = cafe_core::Category::from_json(&json!({"id": 99, "name": "gone"}));
    let err = HttpCategoryRepository::new(client_for(&server))
        .delete(&category)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Category not found");
}

#[tokio::test]
async fn test_update_without_id_is_rejected_locally() {
    let server = MockServer::start().await;
    let err = HttpMenuItemRepository::new(client_for(&server))
        .update(&MenuItem::default(), &MenuItemInput::new("Latte", EntityId::from(1), 1))
        .await
        .unwrap_err();

    assert!(matches!(err, cafe_core::ClientError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_category_create_and_settings_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/categories"))
        .and(body_partial_json(json!({"name": "hot", "display_name": "نوشیدنی گرم"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Category created successfully",
            "data": {"id": 3, "name": "hot", "display_name": "نوشیدنی گرم"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/settings"))
        .and(body_partial_json(json!({"phone": "021-5555"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Settings updated successfully",
            "data": {"id": 1, "name": "Nour", "phone": "021-5555"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = HttpCategoryRepository::new(client.clone())
        .create(&CategoryInput::new("hot", "نوشیدنی گرم"))
        .await
        .unwrap();
    assert_eq!(created.label(), "نوشیدنی گرم");

    let settings = HttpSettingsRepository::new(client);
    let input = SettingsInput {
        phone: Some("021-5555".into()),
        ..Default::default()
    };
    let updated = settings.update(&Default::default(), &input).await.unwrap();
    assert_eq!(updated.phone, "021-5555");
    assert!(updated.is_active);
}

#[tokio::test]
async fn test_tenant_and_shop_admin_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/tenants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "subdomain": "nour", "name": "Nour", "is_active": true,
             "coffee_shops": [{"id": 4, "tenant_id": 1, "name": "Nour Downtown"}]}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/tenants"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Tenant created successfully",
            "data": {"id": 2, "subdomain": "sahar", "name": "Sahar"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/shops/4/admins"))
        .and(body_partial_json(json!({"username": "barista"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Shop admin created successfully",
            "data": {"id": 9, "coffee_shop_id": 4, "username": "barista"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tenants = HttpTenantRepository::new(client.clone());
    let listed = tenants.list().await.unwrap();
    assert_eq!(listed[0].coffee_shops[0].name, "Nour Downtown");

    let created = tenants.create(&TenantInput::create("Sahar", "Sahar")).await.unwrap();
    assert_eq!(created.subdomain, "sahar");

    let admin = HttpCoffeeShopRepository::new(client)
        .create_admin(&EntityId::from(4), &ShopAdminInput::new("barista", "secret1"))
        .await
        .unwrap();
    assert_eq!(admin.username, "barista");
}

#[tokio::test]
async fn test_login_picks_endpoint_by_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/shop-admin/login"))
        .and(body_partial_json(json!({"username": "barista", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-shop",
            "user": {"id": 9, "username": "barista", "coffee_shop_id": 4}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let gateway = HttpAuthGateway::new(client.clone());
    let login = gateway
        .login(AdminRole::Shop, &Credentials::new("barista", "secret"))
        .await
        .unwrap();
    assert_eq!(login.token, "jwt-shop");

    gateway.set_token(Some(login.token));
    assert_eq!(client.token().as_deref(), Some("jwt-shop"));
}
