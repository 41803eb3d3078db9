use std::{sync::Arc, time::Duration};

use seat_planner::{
    app,
    config::{AppConfig, Config, UpstreamConfig},
    AppState,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(upstream: &MockServer) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "seat_planner=debug".to_string(),
        },
        upstream: UpstreamConfig {
            allocations_url: format!("{}/api/allocations/", upstream.uri()),
        },
    }
}

async fn serve(state: Arc<AppState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn wait_for_plan(state: &AppState) {
    for _ in 0..100 {
        if !state.plan.read().await.is_empty() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("seat plan was never loaded");
}

fn record(classroom_id: i64, row: usize, column: usize, side: usize, student: Value) -> Value {
    json!({
        "classroom": {"id": classroom_id, "name": format!("Hall {classroom_id}"), "rows": 2, "columns": 2},
        "row": row,
        "column": column,
        "sub_column": side,
        "student": student
    })
}

#[tokio::test]
async fn serves_chart_print_and_json_from_fetched_allocations() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/allocations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record(2, 1, 1, 0, json!({"roll_number": "B1", "name": "Bo", "college": {"id": 7, "name": "Arts"}})),
            record(1, 0, 0, 0, json!({"roll_number": "A1", "name": "Al", "college": {"id": 5, "name": "Science"}})),
            record(1, 0, 0, 1, Value::Null),
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let state = AppState::new(config_for(&upstream)).unwrap();
    wait_for_plan(&state).await;
    let base = serve(state).await;
    let http = reqwest::Client::new();

    let health: Value = http
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "OK");
    assert_eq!(health["environment"], "test");
    assert_eq!(health["allocations_url"], format!("{}/api/allocations/", upstream.uri()));
    assert_eq!(health["classrooms"], 2);

    let classrooms: Value = http
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(classrooms[0]["id"], 1);
    assert_eq!(classrooms[1]["id"], 2);
    assert_eq!(classrooms[0]["seats"][0][0][0]["student"]["roll_number"], "A1");
    assert_eq!(classrooms[0]["seats"][0][0][1], Value::Null);
    assert_eq!(classrooms[1]["seats"][1][1][0]["student"]["roll_number"], "B1");

    let colors: Value = http
        .get(format!("{base}/api/college-colors"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        colors,
        json!([
            {"college_id": 7, "color": "#FF6B6B"},
            {"college_id": 5, "color": "#4ECDC4"}
        ])
    );

    let chart = http.get(format!("{base}/")).send().await.unwrap();
    assert!(chart
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
    let chart = chart.text().await.unwrap();
    assert!(chart.contains("Hall 1"));
    assert!(chart.contains("Science"));
    assert!(chart.contains("background-color: #4ECDC4"));

    let print = http.get(format!("{base}/print")).send().await.unwrap().text().await.unwrap();
    assert!(print.contains("<div class=\"seat\">A1</div>"));
    assert!(print.contains("<div class=\"seat\">B1</div>"));
}

#[tokio::test]
async fn failed_fetch_serves_empty_pages() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&upstream)
        .await;

    let state = AppState::new(config_for(&upstream)).unwrap();
    for _ in 0..100 {
        if !upstream.received_requests().await.unwrap_or_default().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let base = serve(state.clone()).await;
    let http = reqwest::Client::new();

    let chart = http.get(format!("{base}/")).send().await.unwrap();
    assert!(chart.status().is_success());
    let chart = chart.text().await.unwrap();
    assert!(chart.contains("Classroom Allocations"));
    assert!(!chart.contains("class=\"classroom\" id="));

    let classrooms: Value = http
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(classrooms, json!([]));

    let health: Value = http
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["environment"], "test");
    assert_eq!(health["classrooms"], 0);
    assert!(state.plan.read().await.is_empty());
}
