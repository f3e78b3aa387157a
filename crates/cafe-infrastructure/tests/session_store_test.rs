use serde_json::json;
use tempfile::TempDir;

use cafe_core::domain::{AdminRole, LoginResponse, Session};
use cafe_core::repositories::SessionStore;
use cafe_infrastructure::FileSessionStore;

fn session() -> Session {
    Session::new(
        AdminRole::Main,
        LoginResponse::from_json(&json!({"token": "tok-main", "user": {"id": 1, "username": "root"}})),
    )
}

#[test]
fn test_round_trip_and_clear() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested/session.json"));

    assert_eq!(store.load().unwrap(), None);

    store.save(&session()).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, session());
    assert_eq!(loaded.username(), Some("root"));

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}

#[test]
fn test_user_info_stored_as_string() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    let store = FileSessionStore::new(&path);
    store.save(&session()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["auth_token"], json!("tok-main"));
    assert_eq!(raw["user_type"], json!("main"));
    assert!(raw["user_info"].is_string());
}

#[test]
fn test_corrupt_file_reads_as_signed_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    assert_eq!(FileSessionStore::new(&path).load().unwrap(), None);

    std::fs::write(&path, r#"{"auth_token": "t", "user_type": "owner"}"#).unwrap();
    assert_eq!(FileSessionStore::new(&path).load().unwrap(), None);
}

#[test]
fn test_missing_user_info_and_empty_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    std::fs::write(&path, r#"{"auth_token": "tok", "user_type": "shop"}"#).unwrap();
    let loaded = FileSessionStore::new(&path).load().unwrap().unwrap();
    assert_eq!(loaded.user_type, AdminRole::Shop);
    assert!(loaded.user_info.is_null());

    std::fs::write(&path, r#"{"auth_token": "", "user_type": "shop", "user_info": "{}"}"#).unwrap();
    assert_eq!(FileSessionStore::new(&path).load().unwrap(), None);
}
