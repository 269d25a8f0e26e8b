use smartsell_backend::{
    api::router::create_router,
    config::Config,
    infra::factory::build_state,
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;
use serde_json::{json, Value};

pub const ADMIN_EMAIL: &str = "admin@smartsell.test";
pub const ADMIN_PASSWORD: &str = "admin-pass";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret_key: "test-secret".to_string(),
            access_token_ttl_minutes: 15,
            log_dir: "./logs".to_string(),
        };

        let state = Arc::new(build_state(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Sends a request with an optional JSON body and bearer token.
    pub async fn request(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    pub async fn register(&self, token: Option<&str>, name: &str, phone: &str, email: &str, password: &str, role: Option<&str>) -> Response {
        let mut payload = json!({
            "nome": name,
            "telefone": phone,
            "email": email,
            "senha": password,
        });
        if let Some(role) = role {
            payload["papel"] = json!(role);
        }
        self.request("POST", "/cadastro/usuario", token, Some(payload)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.request("POST", "/login", None, Some(json!({"email": email, "senha": password}))).await;

        if response.status() != StatusCode::OK {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["access_token"].as_str().expect("No access_token in body").to_string()
    }

    /// Registers the bootstrap admin (first account) and returns its token.
    pub async fn admin_token(&self) -> String {
        let response = self.register(None, "Admin", "1100000000", ADMIN_EMAIL, ADMIN_PASSWORD, Some("admin")).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Registers a plain user and returns `(user_id, token)`.
    pub async fn user_token(&self, name: &str, phone: &str, email: &str) -> (i64, String) {
        let response = self.register(None, name, phone, email, "user-pass", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = parse_body(response).await;
        let id = body["user_id"].as_i64().unwrap();
        (id, self.login(email, "user-pass").await)
    }

    pub async fn create_ingredient(&self, token: &str, name: &str, unit: &str, stock: f64) -> i64 {
        let response = self.request(
            "POST",
            "/cadastro/ingrediente",
            Some(token),
            Some(json!({"nome": name, "unidade": unit, "quantidade_estoque": stock})),
        ).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        parse_body(response).await["ingrediente"]["id"].as_i64().unwrap()
    }

    pub async fn create_menu_item(&self, token: &str, name: &str, price: f64, recipe: Value) -> Response {
        self.request(
            "POST",
            "/cadastro/item/cardapio",
            Some(token),
            Some(json!({
                "nome": name,
                "descricao": format!("{} da casa", name),
                "preco": price,
                "categoria": "Pizza",
                "ingredientes": recipe,
            })),
        ).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
