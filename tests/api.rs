//! End-to-end tests of the REST surface.

use reqwest::StatusCode;
use serde_json::{json, Value};

use driver_standings::config::StandingsConfig;

mod common;

async fn get_json(url: String) -> (StatusCode, Value) {
    let res = common::client().get(url).send().await.expect("server unreachable");
    let status = res.status();
    (status, res.json().await.unwrap_or(Value::Null))
}

fn ids(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_drivers_in_standings_order() {
    let server = common::start_server(common::small_config()).await;

    let (status, body) = get_json(format!("{}/drivers", server.api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["senna", "prost", "mansell"]);
    assert_eq!(body[0]["name"], "Ayrton Senna");
    assert_eq!(body[0]["time"], "1:30.100");
    assert_eq!(body[0]["points"], 30);
}

#[tokio::test]
async fn test_driver_standings_position() {
    let server = common::start_server(common::small_config()).await;

    let (status, body) = get_json(format!("{}/drivers/standings/1", server.api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "senna");

    let (status, body) = get_json(format!("{}/drivers/standings/3", server.api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "mansell");

    for bad in ["0", "4", "first", "1.5"] {
        let (status, body) = get_json(format!("{}/drivers/standings/{}", server.api, bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "position {}", bad);
        assert_eq!(body["error"], "ValidationError");
        assert!(!body["details"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_get_driver_by_id() {
    let server = common::start_server(common::small_config()).await;

    let (status, body) = get_json(format!("{}/drivers/prost", server.api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alain Prost");

    let res = common::client()
        .get(format!("{}/drivers/nobody", server.api))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Driver not found");
}

#[tokio::test]
async fn test_create_driver_ranks_collection() {
    let server = common::start_server(common::small_config()).await;
    let client = common::client();

    let res = client
        .post(format!("{}/drivers", server.api))
        .json(&json!({ "name": "Gerhard Berger", "time": "1:31.000", "points": 25 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], "driver-1");
    assert_eq!(created["points"], 25);

    let (_, list) = get_json(format!("{}/drivers", server.api)).await;
    assert_eq!(ids(&list), vec!["senna", "driver-1", "prost", "mansell"]);

    // Omitted points default to 0 and tie-break after existing records.
    let res = client
        .post(format!("{}/drivers", server.api))
        .json(&json!({ "name": "Rookie", "time": "1:35.000" }))
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["points"], 0);

    let (_, last) = get_json(format!("{}/drivers/standings/5", server.api)).await;
    assert_eq!(last["id"], "driver-2");
}

#[tokio::test]
async fn test_create_driver_reports_every_violation() {
    let server = common::start_server(common::small_config()).await;

    let res = common::client()
        .post(format!("{}/drivers", server.api))
        .json(&json!({ "name": "Al", "points": 5000, "team": "Ferrari" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "time", "points", "team"]);

    assert_eq!(server.state.drivers.read().await.len(), 3);
}

#[tokio::test]
async fn test_create_driver_with_malformed_body() {
    let server = common::start_server(common::small_config()).await;

    let res = common::client()
        .post(format!("{}/drivers", server.api))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "body");
}

#[tokio::test]
async fn test_update_driver_merges_fields() {
    let server = common::start_server(common::small_config()).await;
    let client = common::client();

    let res = client
        .put(format!("{}/drivers/prost", server.api))
        .json(&json!({ "points": 40 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(
        updated,
        json!({ "id": "prost", "name": "Alain Prost", "time": "1:31.200", "points": 40 })
    );

    // Updates do not re-rank by default.
    let (_, list) = get_json(format!("{}/drivers", server.api)).await;
    assert_eq!(ids(&list), vec!["senna", "prost", "mansell"]);

    // Zero points are ignored by the merge.
    let res = client
        .put(format!("{}/drivers/prost", server.api))
        .json(&json!({ "points": 0, "time": "1:29.999" }))
        .send()
        .await
        .unwrap();
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["points"], 40);
    assert_eq!(updated["time"], "1:29.999");
}

#[tokio::test]
async fn test_update_driver_errors() {
    let server = common::start_server(common::small_config()).await;
    let client = common::client();

    let res = client
        .put(format!("{}/drivers/prost", server.api))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .put(format!("{}/drivers/nobody", server.api))
        .json(&json!({ "name": "Somebody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Validation runs before the lookup.
    let res = client
        .put(format!("{}/drivers/nobody", server.api))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_reranks_when_configured() {
    let mut config = common::small_config();
    config.api.rerank_on_update = true;
    let server = common::start_server(config).await;

    let res = common::client()
        .put(format!("{}/drivers/mansell", server.api))
        .json(&json!({ "points": 99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let (_, list) = get_json(format!("{}/drivers", server.api)).await;
    assert_eq!(ids(&list), vec!["mansell", "senna", "prost"]);
}

#[tokio::test]
async fn test_delete_driver() {
    let server = common::start_server(common::small_config()).await;
    let client = common::client();

    let res = client
        .delete(format!("{}/drivers/senna", server.api))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let removed: Value = res.json().await.unwrap();
    assert_eq!(removed["name"], "Ayrton Senna");

    let (_, list) = get_json(format!("{}/drivers", server.api)).await;
    assert_eq!(ids(&list), vec!["prost", "mansell"]);

    let res = client
        .delete(format!("{}/drivers/senna", server.api))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.state.drivers.read().await.len(), 2);
}

#[tokio::test]
async fn test_team_standings() {
    let server = common::start_server(common::small_config()).await;

    let (status, teams) = get_json(format!("{}/teams", server.api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teams[0]["name"], "McLaren");
    assert_eq!(teams[0]["points"], 50);
    assert_eq!(teams[1]["name"], "Williams");
    assert_eq!(teams[1]["points"], 10);

    let (_, again) = get_json(format!("{}/teams", server.api)).await;
    assert_eq!(teams, again);

    let (status, team) = get_json(format!("{}/teams/standings/2", server.api)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(team["name"], "Williams");

    let (status, _) = get_json(format!("{}/teams/standings/3", server.api)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_teams_follow_driver_changes() {
    let server = common::start_server(common::small_config()).await;

    common::client()
        .put(format!("{}/drivers/mansell", server.api))
        .json(&json!({ "points": 100 }))
        .send()
        .await
        .unwrap();

    let (_, team) = get_json(format!("{}/teams/standings/1", server.api)).await;
    assert_eq!(team["name"], "Williams");
    assert_eq!(team["points"], 100);
}

#[tokio::test]
async fn test_custom_base_path() {
    let mut config = common::small_config();
    config.api.base_path = String::new();
    let server = common::start_server(config).await;

    let (status, list) = get_json(format!("{}/drivers", server.root)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_request_id_and_status() {
    let server = common::start_server(common::small_config()).await;
    let client = common::client();

    let res = client.get(format!("{}/status", server.root)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let status: Value = res.json().await.unwrap();
    assert_eq!(status["status"], "operational");
    assert_eq!(status["drivers"], 3);

    let res = client
        .get(format!("{}/drivers", server.api))
        .header("x-request-id", "test-req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "test-req-42");
}

#[tokio::test]
async fn test_default_seed_serves_standings() {
    let server = common::start_server(StandingsConfig::default()).await;

    let (_, leader) = get_json(format!("{}/drivers/standings/1", server.api)).await;
    assert_eq!(leader["name"], "Max Verstappen");

    let (_, team) = get_json(format!("{}/teams/standings/1", server.api)).await;
    assert_eq!(team["name"], "Red Bull Racing");
}
