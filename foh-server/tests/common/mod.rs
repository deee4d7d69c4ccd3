//! 集成测试公共设施 - 临时 RocksDB + 完整路由
#![allow(dead_code)]

use axum::body::Body;
use foh_server::auth::JwtConfig;
use foh_server::db::DbService;
use foh_server::db::repository::{NewUser, UserRepository};
use foh_server::{Config, HttpService, ServerState};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::models::UserRole;
use tempfile::TempDir;

pub const PASSWORD: &str = "secret123";

pub struct TestApp {
    pub state: ServerState,
    pub http: HttpService,
    _dir: TempDir,
}

impl TestApp {
    /// Fresh database with one admin, one chef and one waiter
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("foh.db");
        let db = DbService::new(&db_path.to_string_lossy()).await.unwrap();

        let jwt = JwtConfig::with_secret("integration-test-secret-0123456789abcdef", 60);
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0, jwt);
        let state = ServerState::new(config, db.db);

        let users = UserRepository::new(state.get_db());
        for (username, name, role) in [
            ("admin", "Ada Admin", UserRole::Admin),
            ("chef", "Carla Chef", UserRole::Chef),
            ("waiter", "Walt Waiter", UserRole::Waiter),
        ] {
            users
                .create(NewUser {
                    username: username.to_string(),
                    password: PASSWORD.to_string(),
                    name: name.to_string(),
                    role,
                    now: shared::util::now_millis(),
                })
                .await
                .unwrap();
        }

        let http = HttpService::new(state.clone());
        Self {
            state,
            http,
            _dir: dir,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.http.oneshot(request).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn login(&self, username: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "username": username, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn create_menu_item(&self, token: &str, name: &str, price: f64) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/menu",
                Some(token),
                Some(json!({
                    "name": name,
                    "description": format!("{name} of the house"),
                    "price": price,
                    "category": "main",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create menu item failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_table(&self, token: &str, number: i64) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/tables",
                Some(token),
                Some(json!({ "number": number, "seats": 4 })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create table failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_order(&self, token: &str, table_id: &str, items: Value) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/orders",
                Some(token),
                Some(json!({ "table_id": table_id, "items": items })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create order failed: {body}");
        body
    }

    pub async fn table_status(&self, token: &str, table_id: &str) -> String {
        let (status, body) = self
            .request("GET", &format!("/api/tables/{table_id}"), Some(token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        body["status"].as_str().unwrap().to_string()
    }
}
