//! Integration Test: デバイスCRUD API
//!
//! シード済みレジストリに対する一覧・取得・登録・更新・削除の
//! エンドツーエンド動作を確認する。

use reqwest::Client;
use serde_json::{json, Value};

use crate::support::server::spawn_test_server;

/// シナリオA: 初期状態の一覧がシードデバイスのみを返すことを確認
#[tokio::test]
async fn test_list_devices_returns_seed() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .get(server.url("/api/devices"))
        .send()
        .await
        .expect("list request failed");

    assert_eq!(response.status().as_u16(), 200);

    let devices: Value = response.json().await.unwrap();
    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["id"], "P-1");
    assert_eq!(devices[0]["name"], "PC 1");
    assert_eq!(devices[0]["isEnabled"], true);
    assert_eq!(devices[0]["operatingSystem"], "Windows 10");
    assert_eq!(devices[1]["id"], "P-2");
    assert_eq!(devices[1]["operatingSystem"], "Ubuntu");
}

/// シナリオB: 登録後に取得・一覧へ反映されることを確認
#[tokio::test]
async fn test_create_device_then_get() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .post(server.url("/api/devices"))
        .json(&json!({
            "id": "P-3",
            "name": "PC 3",
            "isEnabled": false,
            "operatingSystem": "macOS"
        }))
        .send()
        .await
        .expect("create request failed");

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/api/devices/P-3"
    );

    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], "P-3");

    let fetched: Value = client
        .get(server.url("/api/devices/P-3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "PC 3");
    assert_eq!(fetched["isEnabled"], false);
    assert_eq!(fetched["operatingSystem"], "macOS");

    let list: Value = client
        .get(server.url("/api/devices"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.as_array().unwrap().len(), 3);
}

/// シナリオC: 更新が可変フィールドのみを書き換えることを確認
#[tokio::test]
async fn test_update_device_overwrites_fields() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .put(server.url("/api/devices/P-1"))
        .json(&json!({
            "id": "P-1",
            "name": "Renamed",
            "isEnabled": false,
            "operatingSystem": "Windows 11"
        }))
        .send()
        .await
        .expect("update request failed");

    assert_eq!(response.status().as_u16(), 200);

    let fetched: Value = client
        .get(server.url("/api/devices/P-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["id"], "P-1");
    assert_eq!(fetched["name"], "Renamed");
    assert_eq!(fetched["isEnabled"], false);
    assert_eq!(fetched["operatingSystem"], "Windows 11");
}

/// パスのIDがボディのIDより優先されることを確認
#[tokio::test]
async fn test_update_path_id_overrides_body_id() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .put(server.url("/api/devices/P-1"))
        .json(&json!({
            "id": "P-9",
            "name": "Renamed",
            "isEnabled": true,
            "operatingSystem": "Windows 11"
        }))
        .send()
        .await
        .expect("update request failed");

    assert_eq!(response.status().as_u16(), 200);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], "P-1");

    // ボディのIDでは何も作られていない
    let response = client
        .get(server.url("/api/devices/P-9"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

/// シナリオD: 削除後は取得が404になり一覧からも消えることを確認
#[tokio::test]
async fn test_delete_device_then_get_returns_404() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .delete(server.url("/api/devices/P-2"))
        .send()
        .await
        .expect("delete request failed");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().is_empty());

    let response = client
        .get(server.url("/api/devices/P-2"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let list: Value = client
        .get(server.url("/api/devices"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["P-1"]);
}

/// 未知のIDに対する取得・更新・削除が404を返すことを確認
#[tokio::test]
async fn test_unknown_id_returns_404() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .get(server.url("/api/devices/P-9"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("P-9"));

    let response = client
        .put(server.url("/api/devices/P-9"))
        .json(&json!({
            "id": "P-9",
            "name": "Ghost",
            "isEnabled": false,
            "operatingSystem": "None"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .delete(server.url("/api/devices/P-9"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

/// 重複IDの登録が409を返し、既存レコードを変更しないことを確認
#[tokio::test]
async fn test_create_duplicate_id_returns_409() {
    let server = spawn_test_server(Some(10)).await;
    let client = Client::new();

    let response = client
        .post(server.url("/api/devices"))
        .json(&json!({
            "id": "P-1",
            "name": "Impostor",
            "isEnabled": false,
            "operatingSystem": "DOS"
        }))
        .send()
        .await
        .expect("create request failed");

    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("P-1"));

    let fetched: Value = client
        .get(server.url("/api/devices/P-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "PC 1");
}
