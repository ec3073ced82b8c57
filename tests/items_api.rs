//! Item catalog, search and comment HTTP tests.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Local};
use common::{build_test_app, create_booking, create_item, create_user, sharer, sharer_header};
use serde_json::{json, Value};
use shareit::db::{self, CreateBooking};
use shareit_models::BookingStatus;

#[tokio::test]
async fn test_item_create_validation() {
    let (server, _pool) = build_test_app().await;
    let owner = create_user(&server, "Owner", "owner@example.com").await;

    for body in [
        json!({ "name": "", "description": "x", "available": true }),
        json!({ "name": "Drill", "description": "x" }),
        json!({ "name": "Drill", "available": true }),
    ] {
        server
            .post("/items")
            .add_header(sharer_header(), sharer(owner))
            .json(&body)
            .await
            .assert_status_bad_request();
    }

    server
        .post("/items")
        .add_header(sharer_header(), sharer(4040))
        .json(&json!({ "name": "Drill", "description": "x", "available": true }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_only_owner_may_patch() {
    let (server, _pool) = build_test_app().await;
    let owner = create_user(&server, "Owner", "owner@example.com").await;
    let other = create_user(&server, "Other", "other@example.com").await;
    let item = create_item(&server, owner, "Drill", "Cordless drill").await;

    let response = server
        .patch(&format!("/items/{item}"))
        .add_header(sharer_header(), sharer(other))
        .json(&json!({ "name": "Mine now" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .patch(&format!("/items/{item}"))
        .add_header(sharer_header(), sharer(owner))
        .json(&json!({ "name": "Hammer drill" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Hammer drill");
    assert_eq!(body["description"], "Cordless drill");
    assert_eq!(body["available"], true);
    assert_eq!(body["requestId"], Value::Null);
}

#[tokio::test]
async fn test_search_is_case_insensitive_for_cyrillic() {
    let (server, _pool) = build_test_app().await;
    let owner = create_user(&server, "Owner", "owner@example.com").await;
    let drill = create_item(&server, owner, "Дрель", "Аккумуляторная дрель").await;
    create_item(&server, owner, "Пила", "Ручная").await;
    let hidden = create_item(&server, owner, "Дрель старая", "Не работает").await;
    server
        .patch(&format!("/items/{hidden}"))
        .add_header(sharer_header(), sharer(owner))
        .json(&json!({ "available": false }))
        .await
        .assert_status_ok();

    let response = server
        .get("/items/search")
        .add_query_param("text", "дРЕЛЬ")
        .add_header(sharer_header(), sharer(owner))
        .await;

    response.assert_status_ok();
    let found: Vec<Value> = response.json();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], drill);

    let blank = server
        .get("/items/search")
        .add_query_param("text", "")
        .add_header(sharer_header(), sharer(owner))
        .await;
    blank.assert_status_ok();
    assert!(blank.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_own_items_are_paginated() {
    let (server, _pool) = build_test_app().await;
    let owner = create_user(&server, "Owner", "owner@example.com").await;
    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(create_item(&server, owner, &format!("Item {n}"), "Thing").await);
    }

    let response = server
        .get("/items")
        .add_query_param("from", 2)
        .add_query_param("size", 2)
        .add_header(sharer_header(), sharer(owner))
        .await;

    response.assert_status_ok();
    let page: Vec<Value> = response.json();
    let page_ids: Vec<i64> = page.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(page_ids, ids[2..4].to_vec());
    assert!(page[0]["comments"].is_array());
}

#[tokio::test]
async fn test_item_page_shows_bookings_to_owner_only() {
    let (server, _pool) = build_test_app().await;
    let owner = create_user(&server, "Owner", "owner@example.com").await;
    let booker = create_user(&server, "Booker", "booker@example.com").await;
    let item = create_item(&server, owner, "Drill", "Cordless drill").await;
    let booking = create_booking(&server, booker, item).await;

    let as_owner: Value = server
        .get(&format!("/items/{item}"))
        .add_header(sharer_header(), sharer(owner))
        .await
        .json();
    assert_eq!(as_owner["lastBooking"], Value::Null);
    assert_eq!(as_owner["nextBooking"]["id"], booking["id"]);
    assert_eq!(as_owner["nextBooking"]["bookerId"], booker);

    let as_booker: Value = server
        .get(&format!("/items/{item}"))
        .add_header(sharer_header(), sharer(booker))
        .await
        .json();
    assert_eq!(as_booker["nextBooking"], Value::Null);
}

#[tokio::test]
async fn test_comment_requires_started_approved_booking() {
    let (server, pool) = build_test_app().await;
    let owner = create_user(&server, "Owner", "owner@example.com").await;
    let renter = create_user(&server, "Renter", "renter@example.com").await;
    let item = create_item(&server, owner, "Tent", "Two person tent").await;

    let refused = server
        .post(&format!("/items/{item}/comment"))
        .add_header(sharer_header(), sharer(renter))
        .json(&json!({ "text": "Great tent" }))
        .await;
    refused.assert_status_bad_request();
    assert_eq!(refused.json::<Value>()["cause"], "NOT_AVAILABLE");

    // The API refuses windows in the past, so seed a finished rental directly.
    let now = Local::now().naive_local();
    let past = db::create_booking(
        &pool,
        CreateBooking {
            start_at: now - Duration::days(3),
            end_at: now - Duration::days(2),
            item_id: item,
            booker_id: renter,
        },
    )
    .await
    .unwrap()
    .unwrap();
    db::decide_booking(&pool, past.id, BookingStatus::Approved)
        .await
        .unwrap();

    let response = server
        .post(&format!("/items/{item}/comment"))
        .add_header(sharer_header(), sharer(renter))
        .json(&json!({ "text": "Great tent" }))
        .await;
    response.assert_status_ok();
    let comment: Value = response.json();
    assert_eq!(comment["authorName"], "Renter");
    assert_eq!(comment["text"], "Great tent");

    let page: Value = server
        .get(&format!("/items/{item}"))
        .add_header(sharer_header(), sharer(renter))
        .await
        .json();
    assert_eq!(page["comments"], json!([comment]));

    server
        .post(&format!("/items/{item}/comment"))
        .add_header(sharer_header(), sharer(renter))
        .json(&json!({ "text": " " }))
        .await
        .assert_status_bad_request();
}
