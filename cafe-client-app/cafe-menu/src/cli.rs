//! Command line definition

use clap::{Args, Parser, Subcommand, ValueEnum};

use cafe_core::AdminRole;

#[derive(Parser, Debug)]
#[command(name = "cafe-menu", version, about = "Café Menu - multi-tenant menu client")]
pub struct Cli {
    /// API base URL, overrides `api.base_url`
    #[arg(long, global = true, env = "CAFE_API__BASE_URL")]
    pub api_url: Option<String>,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the public menu of the shop behind the API host
    Menu {
        /// Only show this category id
        #[arg(long)]
        category: Option<String>,
    },

    /// Sign in as main or shop admin
    Login {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        username: String,
        #[arg(long, env = "CAFE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in admin
    Whoami,

    /// Shop admin: list the shop's menu grouped by category
    Dashboard,

    /// Shop admin: manage menu items
    #[command(subcommand)]
    Item(ItemCommand),

    /// Shop admin: view or change shop settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Main admin: manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Main admin: manage tenants
    #[command(subcommand)]
    Tenant(TenantCommand),

    /// Main admin: manage coffee shops and their admins
    #[command(subcommand)]
    Shop(ShopCommand),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RoleArg {
    Main,
    Shop,
}

impl From<RoleArg> for AdminRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Main => AdminRole::Main,
            RoleArg::Shop => AdminRole::Shop,
        }
    }
}

/// Menu item fields; unset fields keep their current value on edit.
#[derive(Args, Debug, Default)]
pub struct ItemFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    /// Premium tier price; enables dual pricing
    #[arg(long)]
    pub premium: Option<String>,
    /// Turn dual pricing off
    #[arg(long, conflicts_with = "premium")]
    pub single_price: bool,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub order: Option<String>,
    #[arg(long)]
    pub available: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    Add(ItemFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: ItemFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ShopFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub instagram_url: Option<String>,
    #[arg(long)]
    pub logo_url: Option<String>,
    #[arg(long)]
    pub hero_image_url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    Show,
    Update(ShopFields),
}

#[derive(Args, Debug, Default)]
pub struct CategoryFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long)]
    pub emoji: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub order: Option<i64>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    List,
    Add(CategoryFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: CategoryFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TenantCommand {
    List,
    Add {
        #[arg(long)]
        subdomain: String,
        #[arg(long)]
        name: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShopCommand {
    List {
        #[arg(long)]
        tenant: String,
    },
    Add {
        #[arg(long)]
        tenant: String,
        #[command(flatten)]
        fields: ShopFields,
    },
    Edit {
        id: String,
        #[command(flatten)]
        fields: ShopFields,
    },
    Delete {
        id: String,
    },
    /// Create an admin account for a shop
    Admin {
        #[arg(long)]
        shop: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "CAFE_SHOP_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}
