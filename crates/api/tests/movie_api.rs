//! HTTP-level integration tests for the movie catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

fn movie_body(screenings: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "title": "Inception",
        "description": "A mind-bending thriller",
        "duration": 148,
        "start_date": "2023-06-01",
        "end_date": "2023-06-30",
        "screenings": screenings,
    })
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_mutations_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(&app, "/movies", movie_body(serde_json::json!(["2023-06-01T18:00:00"]))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_mutations_are_forbidden_below_manager(pool: PgPool) {
    common::create_test_user(&pool, "carl", "client").await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_token(&app, "carl").await;

    let response = post_json_auth(
        &app,
        "/movies",
        &token,
        movie_body(serde_json::json!(["2023-06-01T18:00:00"])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The denial names the caller's role and the accepted set.
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("client"), "message should name the caller role: {message}");
    assert!(message.contains("manager"), "message should name the required roles: {message}");
}

// ---------------------------------------------------------------------------
// Create: validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_movie_validates_before_touching_the_store(pool: PgPool) {
    common::create_test_user(&pool, "meg", "manager").await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_token(&app, "meg").await;

    // Missing title.
    let mut body = movie_body(serde_json::json!(["2023-06-01T18:00:00"]));
    body["title"] = serde_json::Value::Null;
    let response = post_json_auth(&app, "/movies", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Missing required fields (title, duration, start_date, or end_date)"
    );

    // Malformed date.
    let mut body = movie_body(serde_json::json!(["2023-06-01T18:00:00"]));
    body["start_date"] = serde_json::json!("June 1st 2023");
    let response = post_json_auth(&app, "/movies", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid date format");

    // Empty screening list.
    let response = post_json_auth(&app, "/movies", &token, movie_body(serde_json::json!([]))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "At least one screening time is required"
    );

    // Unparsable screening time aborts the whole request.
    let response = post_json_auth(
        &app,
        "/movies",
        &token,
        movie_body(serde_json::json!(["2023-06-01T18:00:00", ""])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid screening time");

    // Nothing reached the store.
    let (movies,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(movies, 0);
}

// ---------------------------------------------------------------------------
// Create + playing-on-date scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn created_movie_shows_up_in_playing_listing(pool: PgPool) {
    common::create_test_user(&pool, "meg", "manager").await;
    let app = common::build_test_app(pool);
    let token = common::login_token(&app, "meg").await;

    let created = common::create_movie(&app, &token, "Inception", &["2023-06-01T18:00:00"]).await;
    assert_eq!(created["screenings_added"], 1);
    assert!(created["movie_id"].is_number());

    let response = get(&app, "/movies/playing?date=2023-06-01").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Inception");
    assert_eq!(json["data"][0]["screenings"], serde_json::json!(["18:00:00"]));
    assert_eq!(json["data"][0]["screening_ids"].as_array().unwrap().len(), 1);

    // Outside the run window the movie disappears.
    let response = get(&app, "/movies/playing?date=2023-07-15").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn playing_requires_a_strict_date_parameter(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/movies/playing").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Date parameter is required");

    for bad in ["2023-6-1", "01-06-2023", "yesterday", "2023-02-30"] {
        let response = get(&app, &format!("/movies/playing?date={bad}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{bad} must be rejected");
        assert_eq!(
            body_json(response).await["error"],
            "Invalid date format. Please use YYYY-MM-DD format"
        );
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_screenings_and_reports_count(pool: PgPool) {
    common::create_test_user(&pool, "meg", "manager").await;
    let app = common::build_test_app(pool);
    let token = common::login_token(&app, "meg").await;

    let created = common::create_movie(
        &app,
        &token,
        "Inception",
        &["2023-06-01T18:00:00", "2023-06-02T20:30:00"],
    )
    .await;
    let movie_id = created["movie_id"].as_i64().unwrap();

    let response = put_json_auth(
        &app,
        &format!("/movies/{movie_id}"),
        &token,
        movie_body(serde_json::json!(["2023-06-20T19:00:00"])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["screenings_updated"], 1);

    // The catalog listing shows exactly the new set.
    let listing = body_json(get(&app, "/movies").await).await;
    let screenings = listing[0]["screenings"].as_array().unwrap();
    assert_eq!(screenings.len(), 1);
    assert_eq!(screenings[0]["screening_time"], "2023-06-20T19:00:00");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_requires_the_screenings_field(pool: PgPool) {
    common::create_test_user(&pool, "meg", "manager").await;
    let app = common::build_test_app(pool);
    let token = common::login_token(&app, "meg").await;

    let created = common::create_movie(&app, &token, "Inception", &["2023-06-01T18:00:00"]).await;
    let movie_id = created["movie_id"].as_i64().unwrap();

    let mut body = movie_body(serde_json::json!([]));
    body.as_object_mut().unwrap().remove("screenings");
    let response = put_json_auth(&app, &format!("/movies/{movie_id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Screenings must be an array");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_movie_returns_not_found(pool: PgPool) {
    common::create_test_user(&pool, "meg", "manager").await;
    let app = common::build_test_app(pool);
    let token = common::login_token(&app, "meg").await;

    let response = put_json_auth(
        &app,
        "/movies/9999",
        &token,
        movie_body(serde_json::json!(["2023-06-01T18:00:00"])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_movie_and_unknown_id_is_not_found(pool: PgPool) {
    common::create_test_user(&pool, "meg", "manager").await;
    let app = common::build_test_app(pool);
    let token = common::login_token(&app, "meg").await;

    let created = common::create_movie(&app, &token, "Inception", &["2023-06-01T18:00:00"]).await;
    let movie_id = created["movie_id"].as_i64().unwrap();

    let response = delete_auth(&app, &format!("/movies/{movie_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listing = body_json(get(&app, "/movies").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 0);

    let response = delete_auth(&app, &format!("/movies/{movie_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
