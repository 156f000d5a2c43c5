mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use common::{build_app, get_json, post_json};

async fn row_count(app: &axum::Router) -> anyhow::Result<usize> {
    let mut total = 0;
    for id in 1..=3 {
        let (_, r) = get_json(app, &format!("/restaurants/{id}")).await?;
        total += r["restaurant_pizzas"].as_array().map(Vec::len).unwrap_or(0);
    }
    Ok(total)
}

#[tokio::test]
async fn create_round_trip() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = post_json(
        &app,
        "/restaurant_pizzas",
        &json!({"price": 15, "pizza_id": 1, "restaurant_id": 1}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], json!(15.0));
    assert_eq!(body["pizza_id"], 1);
    assert_eq!(body["restaurant_id"], 1);
    assert_eq!(body["pizza"], json!({"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}));
    assert_eq!(body["restaurant"], json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"}));
    assert!(body["restaurant"].get("restaurant_pizzas").is_none());

    let (_, r1) = get_json(&app, "/restaurants/1").await?;
    assert_eq!(r1["restaurant_pizzas"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn boundary_prices() -> anyhow::Result<()> {
    let app = build_app().await?;
    for price in [1.0, 30.0] {
        let (status, _) = post_json(&app, "/restaurant_pizzas", &json!({"price": price, "pizza_id": 3, "restaurant_id": 3})).await?;
        assert_eq!(status, StatusCode::CREATED, "price {price}");
    }
    for price in [0.99, 30.01] {
        let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": price, "pizza_id": 3, "restaurant_id": 3})).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price}");
        assert_eq!(body, json!({"errors": ["validation errors"]}));
    }
    Ok(())
}

#[tokio::test]
async fn invalid_price_persists_nothing() -> anyhow::Result<()> {
    let app = build_app().await?;
    let before = row_count(&app).await?;
    for body in [
        json!({"price": 0, "pizza_id": 1, "restaurant_id": 3}),
        json!({"price": 31, "pizza_id": 1, "restaurant_id": 3}),
        json!({"pizza_id": 1, "restaurant_id": 3}),
        json!({"price": null, "pizza_id": 1, "restaurant_id": 3}),
    ] {
        let (status, _) = post_json(&app, "/restaurant_pizzas", &body).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
    assert_eq!(row_count(&app).await?, before);
    Ok(())
}

#[tokio::test]
async fn missing_references_are_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let before = row_count(&app).await?;

    let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": 5, "pizza_id": 99, "restaurant_id": 1})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Pizza not found"}));

    let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": 5, "pizza_id": 1, "restaurant_id": 99})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));

    assert_eq!(row_count(&app).await?, before);
    Ok(())
}

#[tokio::test]
async fn price_error_reported_before_missing_restaurant() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": 100, "pizza_id": 1, "restaurant_id": 99})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["validation errors"]));
    Ok(())
}

#[tokio::test]
async fn create_after_delete_is_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = common::delete(&app, "/restaurants/2").await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": 9, "pizza_id": 3, "restaurant_id": 2})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));
    Ok(())
}

#[tokio::test]
async fn unreadable_body_is_400() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/restaurant_pizzas")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, body) = common::send(&app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body)?;
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    Ok(())
}

#[tokio::test]
async fn ids_beyond_the_column_are_404() -> anyhow::Result<()> {
    let app = build_app().await?;
    let before = row_count(&app).await?;

    let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": 10, "pizza_id": 1, "restaurant_id": 4294967296_i64})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));

    let (status, body) = post_json(&app, "/restaurant_pizzas", &json!({"price": 10, "pizza_id": -4294967296_i64, "restaurant_id": 1})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Pizza not found"}));

    assert_eq!(row_count(&app).await?, before);
    Ok(())
}
