//! 前厅 API 端到端测试
//!
//! 每个测试使用独立的临时 RocksDB，通过 HttpService::oneshot 直接驱动完整路由
//! (含认证中间件和权限层)。

mod common;

use axum::body::Body;
use common::TestApp;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::json;

#[tokio::test]
async fn test_taco_order_occupies_then_cleans_table() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let waiter = app.login("waiter").await;

    let taco = app.create_menu_item(&admin, "Taco", 3.00).await;
    let table = app.create_table(&admin, 5).await;
    assert_eq!(app.table_status(&waiter, &table).await, "available");

    let order = app
        .create_order(&waiter, &table, json!([{ "menu_item_id": taco, "quantity": 2 }]))
        .await;
    assert_eq!(order["total_amount"], json!(6.0));
    assert_eq!(order["status"], "active");
    assert_eq!(order["table_number"], 5);
    assert_eq!(order["waiter_name"], "Walt Waiter");
    assert_eq!(order["items"][0]["name"], "Taco");
    assert_eq!(order["items"][0]["status"], "pending");
    assert_eq!(app.table_status(&waiter, &table).await, "occupied");

    let order_id = order["id"].as_str().unwrap();
    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/orders/{order_id}/status"),
            Some(&waiter),
            Some(json!({ "status": "completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "completed");
    assert!(body["completed_at"].is_i64());
    assert_eq!(app.table_status(&waiter, &table).await, "cleaning");
}

#[tokio::test]
async fn test_table_cleans_only_after_last_active_order() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let soup = app.create_menu_item(&admin, "Soup", 4.50).await;
    let table = app.create_table(&admin, 7).await;
    let first = app
        .create_order(&admin, &table, json!([{ "menu_item_id": soup }]))
        .await;
    let second = app
        .create_order(&admin, &table, json!([{ "menu_item_id": soup, "quantity": 3 }]))
        .await;
    assert_eq!(first["total_amount"], json!(4.5));
    assert_eq!(second["total_amount"], json!(13.5));

    let (status, _) = app
        .request(
            "PATCH",
            &format!("/api/orders/{}/status", first["id"].as_str().unwrap()),
            Some(&admin),
            Some(json!({ "status": "cancelled" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.table_status(&admin, &table).await, "occupied");

    let (status, _) = app
        .request(
            "PATCH",
            &format!("/api/orders/{}/status", second["id"].as_str().unwrap()),
            Some(&admin),
            Some(json!({ "status": "completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    // Never back to available on its own
    assert_eq!(app.table_status(&admin, &table).await, "cleaning");
}

#[tokio::test]
async fn test_delete_table_with_active_order_conflicts() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let burger = app.create_menu_item(&admin, "Burger", 9.90).await;
    let table = app.create_table(&admin, 3).await;
    let order = app
        .create_order(&admin, &table, json!([{ "menu_item_id": burger }]))
        .await;

    let (status, body) = app
        .request("DELETE", &format!("/api/tables/{table}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7104);

    app.request(
        "PATCH",
        &format!("/api/orders/{}/status", order["id"].as_str().unwrap()),
        Some(&admin),
        Some(json!({ "status": "completed" })),
    )
    .await;

    let (status, body) = app
        .request("DELETE", &format!("/api/tables/{table}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, _) = app
        .request("GET", &format!("/api/tables/{table}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_admin_cannot_mutate_menu_or_tables() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let waiter = app.login("waiter").await;
    let chef = app.login("chef").await;

    for token in [&waiter, &chef] {
        let (status, _) = app
            .request(
                "POST",
                "/api/menu",
                Some(token),
                Some(json!({ "name": "Flan", "price": 2.5, "category": "desserts" })),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app
            .request(
                "POST",
                "/api/tables",
                Some(token),
                Some(json!({ "number": 11, "seats": 2 })),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    let item = app.create_menu_item(&admin, "Flan", 2.5).await;
    let (status, _) = app
        .request("DELETE", &format!("/api/menu/{item}"), Some(&waiter), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/menu/{item}"),
            Some(&admin),
            Some(json!({ "price": 3.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], json!(3.0));
}

#[tokio::test]
async fn test_availability_toggle_is_reflected_in_menu() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let chef = app.login("chef").await;
    let waiter = app.login("waiter").await;

    let item = app.create_menu_item(&admin, "Paella", 14.0).await;

    let (status, _) = app
        .request(
            "PATCH",
            &format!("/api/menu/{item}/availability"),
            Some(&waiter),
            Some(json!({ "is_available": false })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/menu/{item}/availability"),
            Some(&chef),
            Some(json!({ "is_available": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    // Menu reads are public
    let (status, menu) = app.request("GET", "/api/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let paella = menu
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == item.as_str())
        .unwrap();
    assert_eq!(paella["is_available"], false);
}

#[tokio::test]
async fn test_item_price_is_snapshotted_at_order_time() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let wine = app.create_menu_item(&admin, "Wine", 5.0).await;
    let table = app.create_table(&admin, 2).await;
    let order = app
        .create_order(&admin, &table, json!([{ "menu_item_id": wine, "quantity": 2 }]))
        .await;
    let order_id = order["id"].as_str().unwrap();

    app.request(
        "PUT",
        &format!("/api/menu/{wine}"),
        Some(&admin),
        Some(json!({ "price": 7.5 })),
    )
    .await;

    let (_, fetched) = app
        .request("GET", &format!("/api/orders/{order_id}"), Some(&admin), None)
        .await;
    assert_eq!(fetched["items"][0]["price"], json!(5.0));
    assert_eq!(fetched["total_amount"], json!(10.0));

    // New lines use the current price
    let (status, updated) = app
        .request(
            "POST",
            &format!("/api/orders/{order_id}/items"),
            Some(&admin),
            Some(json!({ "items": [{ "menu_item_id": wine }] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["items"].as_array().unwrap().len(), 2);
    assert_eq!(updated["total_amount"], json!(17.5));

    let first_line = updated["items"][0]["id"].as_str().unwrap();
    let (status, trimmed) = app
        .request(
            "DELETE",
            &format!("/api/orders/{order_id}/items/{first_line}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trimmed["total_amount"], json!(7.5));
}

#[tokio::test]
async fn test_kitchen_queue_and_item_status() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let chef = app.login("chef").await;
    let waiter = app.login("waiter").await;

    let steak = app.create_menu_item(&admin, "Steak", 18.0).await;
    let table = app.create_table(&admin, 9).await;
    let order = app
        .create_order(&waiter, &table, json!([{ "menu_item_id": steak }]))
        .await;
    let order_id = order["id"].as_str().unwrap();
    let item_id = order["items"][0]["id"].as_str().unwrap();

    let (status, _) = app
        .request("GET", "/api/orders/kitchen/active", Some(&waiter), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, queue) = app
        .request("GET", "/api/orders/kitchen/active", Some(&chef), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue.as_array().unwrap().len(), 1);

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/orders/{order_id}/items/{item_id}/status"),
            Some(&chef),
            Some(json!({ "status": "ready" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["items"][0]["status"], "ready");

    let (_, queue) = app
        .request("GET", "/api/orders/kitchen/active", Some(&chef), None)
        .await;
    assert!(queue.as_array().unwrap().is_empty());

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/orders/{order_id}/items/{item_id}/status"),
            Some(&chef),
            Some(json!({ "status": "burnt" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);
}

#[tokio::test]
async fn test_unknown_menu_item_leaves_table_available() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let table = app.create_table(&admin, 12).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/orders",
            Some(&admin),
            Some(json!({ "table_id": table, "items": [{ "menu_item_id": "menu_item:ghost" }] })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
    assert_eq!(app.table_status(&admin, &table).await, "available");
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let app = TestApp::new().await;

    for (method, uri) in [
        ("GET", "/api/tables"),
        ("GET", "/api/orders"),
        ("GET", "/api/auth/me"),
        ("GET", "/api/reports/sales"),
    ] {
        let (status, body) = app.request(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["code"], 1001);
    }

    let (status, body) = app.request("GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _) = app
        .request("GET", "/api/tables", Some("not-a-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": "chef", "password": common::PASSWORD }).to_string(),
        ))
        .unwrap();
    let response = app.http.oneshot(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.http.oneshot(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "chef", "password": "wrong-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_admin_manages_users() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let waiter = app.login("waiter").await;

    let (status, _) = app
        .request("GET", "/api/auth/users", Some(&waiter), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/users",
            Some(&admin),
            Some(json!({ "username": "nina", "password": "pass1234", "name": "Nina" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["user"]["role"], "waiter");

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/users",
            Some(&admin),
            Some(json!({ "username": "nina", "password": "pass1234", "name": "Nina" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 8002);

    let (status, users) = app
        .request("GET", "/api/auth/users", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 4);
    assert!(users.iter().all(|u| u.get("password").is_none()));

    let nina = app.login("nina").await;
    assert!(!nina.is_empty());
}

#[tokio::test]
async fn test_sales_report_counts_today() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;
    let waiter = app.login("waiter").await;

    let taco = app.create_menu_item(&admin, "Taco", 3.0).await;
    let table = app.create_table(&admin, 5).await;
    app.create_order(&waiter, &table, json!([{ "menu_item_id": taco, "quantity": 2 }]))
        .await;

    let (status, _) = app
        .request("GET", "/api/reports/sales", Some(&waiter), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, report) = app
        .request("GET", "/api/reports/sales", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK, "{report}");
    assert_eq!(report["order_count"], 1);
    assert_eq!(report["total_sales"], json!(6.0));
}

async fn set_order_status(app: &TestApp, token: &str, order: &serde_json::Value, status: &str) {
    let (code, body) = app
        .request(
            "PATCH",
            &format!("/api/orders/{}/status", order["id"].as_str().unwrap()),
            Some(token),
            Some(json!({ "status": status })),
        )
        .await;
    assert_eq!(code, StatusCode::OK, "{body}");
}

fn ids(list: &serde_json::Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_order_list_filters_by_status_and_table() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let tea = app.create_menu_item(&admin, "Tea", 2.0).await;
    let t1 = app.create_table(&admin, 1).await;
    let t2 = app.create_table(&admin, 2).await;

    let done = app
        .create_order(&admin, &t1, json!([{ "menu_item_id": tea }]))
        .await;
    set_order_status(&app, &admin, &done, "completed").await;
    let open_t1 = app
        .create_order(&admin, &t1, json!([{ "menu_item_id": tea }]))
        .await;
    let open_t2 = app
        .create_order(&admin, &t2, json!([{ "menu_item_id": tea }]))
        .await;

    let (status, all) = app.request("GET", "/api/orders", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, active) = app
        .request("GET", "/api/orders?status=active", Some(&admin), None)
        .await;
    let active = ids(&active);
    assert_eq!(active.len(), 2);
    assert!(active.contains(&open_t1["id"].as_str().unwrap().to_string()));
    assert!(active.contains(&open_t2["id"].as_str().unwrap().to_string()));

    let (_, on_t1) = app
        .request("GET", &format!("/api/orders?table={t1}"), Some(&admin), None)
        .await;
    assert_eq!(on_t1.as_array().unwrap().len(), 2);

    let (_, both) = app
        .request(
            "GET",
            &format!("/api/orders?status=completed&table={t1}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(ids(&both), vec![done["id"].as_str().unwrap().to_string()]);

    let (status, body) = app
        .request("GET", "/api/orders?status=lost", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);
}

#[tokio::test]
async fn test_table_orders_are_active_only_newest_first() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let soda = app.create_menu_item(&admin, "Soda", 1.5).await;
    let table = app.create_table(&admin, 4).await;

    let mut orders = Vec::new();
    for _ in 0..3 {
        orders.push(
            app.create_order(&admin, &table, json!([{ "menu_item_id": soda }]))
                .await,
        );
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    set_order_status(&app, &admin, &orders[1], "cancelled").await;

    let (status, listed) = app
        .request("GET", &format!("/api/tables/{table}/orders"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&listed),
        vec![
            orders[2]["id"].as_str().unwrap().to_string(),
            orders[0]["id"].as_str().unwrap().to_string(),
        ]
    );
}

#[tokio::test]
async fn test_menu_by_category() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    app.create_menu_item(&admin, "Stew", 11.0).await;
    let (status, lemonade) = app
        .request(
            "POST",
            "/api/menu",
            Some(&admin),
            Some(json!({ "name": "Lemonade", "price": 2.5, "category": "drinks" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, drinks) = app
        .request("GET", "/api/menu/category/drinks", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&drinks), vec![lemonade["id"].as_str().unwrap().to_string()]);

    let (status, body) = app
        .request("GET", "/api/menu/category/soups", None, None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6101);
}

#[tokio::test]
async fn test_update_table_to_taken_number_conflicts() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    app.create_table(&admin, 1).await;
    let second = app.create_table(&admin, 2).await;

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/tables/{second}"),
            Some(&admin),
            Some(json!({ "number": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7002);

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/tables/{second}"),
            Some(&admin),
            Some(json!({ "number": 20, "seats": 6 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["number"], 20);
    assert_eq!(body["seats"], 6);
}

#[tokio::test]
async fn test_closed_order_rejects_new_items() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let pie = app.create_menu_item(&admin, "Pie", 4.0).await;
    let table = app.create_table(&admin, 8).await;
    let order = app
        .create_order(&admin, &table, json!([{ "menu_item_id": pie }]))
        .await;
    set_order_status(&app, &admin, &order, "completed").await;

    let order_id = order["id"].as_str().unwrap();
    let (status, body) = app
        .request(
            "POST",
            &format!("/api/orders/{order_id}/items"),
            Some(&admin),
            Some(json!({ "items": [{ "menu_item_id": pie }] })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);

    let item_id = order["items"][0]["id"].as_str().unwrap();
    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/orders/{order_id}/items/{item_id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let (status, body) = app
        .request("GET", "/api/orders/missing", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (status, body) = app
        .request("GET", "/api/tables/missing", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);

    let (status, body) = app
        .request(
            "PATCH",
            "/api/orders/missing/status",
            Some(&admin),
            Some(json!({ "status": "completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_deleted_menu_item_is_gone() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    let item = app.create_menu_item(&admin, "Gazpacho", 6.0).await;
    let (status, _) = app
        .request("DELETE", &format!("/api/menu/{item}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request("GET", &format!("/api/menu/{item}"), None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let (status, _) = app
        .request("DELETE", &format!("/api/menu/{item}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_bodies_get_error_envelope() {
    let app = TestApp::new().await;
    let admin = app.login("admin").await;

    for (method, uri, body) in [
        ("POST", "/api/tables", json!({ "number": "5", "seats": 4 })),
        (
            "POST",
            "/api/menu",
            json!({ "name": "Broth", "price": 3.0, "category": "soups" }),
        ),
        ("POST", "/api/orders", json!({ "items": [] })),
    ] {
        let (status, response) = app.request(method, uri, Some(&admin), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(response["code"], 2, "{method} {uri}");
        assert!(response["message"].is_string());
    }

    let table = app.create_table(&admin, 6).await;
    let (status, response) = app
        .request(
            "PATCH",
            &format!("/api/tables/{table}/status"),
            Some(&admin),
            Some(json!({ "status": 5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], 2);

    let request = Request::builder()
        .method("POST")
        .uri("/api/tables")
        .header(header::AUTHORIZATION, format!("Bearer {admin}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"number\": 5,"))
        .unwrap();
    let response = app.http.oneshot(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 5);
}
