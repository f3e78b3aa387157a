use anyhow::bail;
use tracing::warn;

use cafe_core::{AdminRole, Credentials};
use cafe_shared::constants::MSG_LOGIN_FAILED;

use crate::app::App;
use crate::render;

pub async fn login(app: &App, role: AdminRole, username: &str, password: &str) -> anyhow::Result<()> {
    let credentials = Credentials::new(username, password);
    match app.auth.login(role, &credentials).await {
        Ok(session) => {
            if app.json {
                return render::print_json(&session.user_info);
            }
            println!(
                "Signed in as {} admin {}",
                session.user_type,
                session.username().unwrap_or(credentials.username.as_str())
            );
            Ok(())
        }
        Err(e) => bail!(e.user_message(MSG_LOGIN_FAILED)),
    }
}

pub fn logout(app: &App) -> anyhow::Result<()> {
    if let Err(e) = app.auth.logout() {
        warn!("Session file was not removed: {}", e);
    }
    println!("Signed out");
    Ok(())
}

pub fn whoami(app: &App) -> anyhow::Result<()> {
    match app.auth.current() {
        Some(session) if app.json => render::print_json(&serde_json::json!({
            "user_type": session.user_type,
            "user": session.user_info,
        })),
        Some(session) => {
            println!("{} admin {}", session.user_type, session.username().unwrap_or("?"));
            Ok(())
        }
        None => bail!("Not signed in"),
    }
}
