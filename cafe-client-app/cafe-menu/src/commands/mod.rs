//! Command handlers

mod admin;
mod auth;
mod dashboard;
mod public;

use crate::app::App;
use crate::cli::Command;

pub async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Menu { category } => public::menu(app, category).await,
        Command::Login { role, username, password } => auth::login(app, role.into(), &username, &password).await,
        Command::Logout => auth::logout(app),
        Command::Whoami => auth::whoami(app),
        Command::Dashboard => dashboard::show(app).await,
        Command::Item(cmd) => dashboard::item(app, cmd).await,
        Command::Settings(cmd) => dashboard::settings(app, cmd).await,
        Command::Category(cmd) => admin::category(app, cmd).await,
        Command::Tenant(cmd) => admin::tenant(app, cmd).await,
        Command::Shop(cmd) => admin::shop(app, cmd).await,
    }
}
