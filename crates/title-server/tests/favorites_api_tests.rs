use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App, Error,
};
use actix_http::Request;
use serde_json::{json, Value};
use title_server::{app_config, AppState, ServerConfig, StaticCredential};

async fn setup_app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let state = AppState::new(ServerConfig::default())
        .unwrap()
        .with_credentials(Arc::new(StaticCredential::new(None)));

    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(app_config),
    )
    .await
}

async fn add(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    user: &str,
    body: Value,
) -> (StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/api/favorites")
        .insert_header(("x-user-id", user))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

async fn get(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    user: &str,
    uri: &str,
) -> (StatusCode, Value) {
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(("x-user-id", user))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn add_list_and_delete_favorites() {
    let app = setup_app().await;

    let (status, created) = add(
        &app,
        "alice",
        json!({ "title": "平价好物推荐", "topic": "美妆推荐", "tags": ["平价"], "rating": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    let id = created["favorite"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["favorite"]["rating"], 4);
    assert!(created["favorite"]["createdAt"].is_string());

    let (status, listed) = get(&app, "alice", "/api/favorites").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["favorites"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/favorites/{id}"))
        .insert_header(("x-user-id", "alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, listed) = get(&app, "alice", "/api/favorites").await;
    assert!(listed["favorites"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn list_supports_search_tag_and_sort() {
    let app = setup_app().await;
    add(&app, "alice", json!({ "title": "租房避雷指南", "topic": "生活分享", "tags": ["避雷"], "rating": 3 })).await;
    add(&app, "alice", json!({ "title": "考研上岸经验", "topic": "学习经验", "tags": ["经验"], "rating": 5 })).await;
    add(&app, "alice", json!({ "title": "快手早餐", "topic": "美食制作", "tags": ["经验", "早餐"], "rating": 4 })).await;

    let (_, by_rating) = get(&app, "alice", "/api/favorites?sort=rating").await;
    let ratings: Vec<i64> = by_rating["favorites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["rating"].as_i64().unwrap())
        .collect();
    assert_eq!(ratings, vec![5, 4, 3]);

    let (_, tagged) = get(&app, "alice", "/api/favorites?tag=%E7%BB%8F%E9%AA%8C").await;
    assert_eq!(tagged["favorites"].as_array().unwrap().len(), 2);

    let (_, searched) = get(&app, "alice", "/api/favorites?q=%E7%A7%9F%E6%88%BF").await;
    assert_eq!(searched["favorites"][0]["title"], "租房避雷指南");

    let (_, tags) = get(&app, "alice", "/api/favorites/tags").await;
    assert_eq!(tags["tags"], json!(["避雷", "经验", "早餐"]));
}

#[actix_web::test]
async fn invalid_favorite_and_unknown_id() {
    let app = setup_app().await;

    let (status, body) = add(&app, "alice", json!({ "title": "t", "topic": "p", "rating": 9 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let req = test::TestRequest::delete()
        .uri("/api/favorites/does-not-exist")
        .insert_header(("x-user-id", "alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "alice", "/api/favorites?sort=oldest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn favorites_are_private_and_need_a_session() {
    let app = setup_app().await;
    add(&app, "alice", json!({ "title": "t", "topic": "p" })).await;

    let (_, other) = get(&app, "bob", "/api/favorites").await;
    assert!(other["favorites"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/api/favorites").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
