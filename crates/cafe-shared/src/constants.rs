//! Application-wide constants

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_SESSION_PATH: &str = ".cafe-menu/session.json";

// Display defaults (fa-IR, Iranian rial)
pub const DEFAULT_CURRENCY_LABEL: &str = "ریال";
pub const DEFAULT_GROUPING_SEPARATOR: &str = "٬";
pub const DEFAULT_RANGE_SEPARATOR: &str = " - ";

// User-facing fallback messages
pub const MSG_LOAD_FAILED: &str = "خطا در بارگذاری اطلاعات";
pub const MSG_SAVE_FAILED: &str = "خطا در ذخیره آیتم";
pub const MSG_DELETE_FAILED: &str = "خطا در حذف آیتم";
pub const MSG_LOGIN_FAILED: &str = "خطا در ورود. لطفاً اطلاعات را بررسی کنید.";
pub const MSG_MENU_LOAD_FAILED: &str = "Failed to load menu data";

pub mod endpoints {
    pub const MAIN_ADMIN_LOGIN: &str = "/api/auth/main-admin/login";
    pub const SHOP_ADMIN_LOGIN: &str = "/api/auth/shop-admin/login";

    pub const PUBLIC_CATEGORIES: &str = "/api/public/categories";
    pub const PUBLIC_MENU: &str = "/api/public/menu";
    pub const PUBLIC_SHOP: &str = "/api/public/shop";

    pub const ADMIN_TENANTS: &str = "/api/admin/tenants";
    pub const ADMIN_SHOPS: &str = "/api/admin/shops";
    pub const ADMIN_CATEGORIES: &str = "/api/admin/categories";
    pub const ADMIN_MENU: &str = "/api/admin/menu";
    pub const ADMIN_SETTINGS: &str = "/api/admin/settings";

    pub fn tenant(id: &str) -> String {
        format!("{}/{}", ADMIN_TENANTS, id)
    }

    pub fn tenant_shops(tenant_id: &str) -> String {
        format!("{}/{}/shops", ADMIN_TENANTS, tenant_id)
    }

    pub fn shop(id: &str) -> String {
        format!("{}/{}", ADMIN_SHOPS, id)
    }

    pub fn shop_admins(shop_id: &str) -> String {
        format!("{}/{}/admins", ADMIN_SHOPS, shop_id)
    }

    pub fn category(id: &str) -> String {
        format!("{}/{}", ADMIN_CATEGORIES, id)
    }

    pub fn menu_item(id: &str) -> String {
        format!("{}/{}", ADMIN_MENU, id)
    }
}
