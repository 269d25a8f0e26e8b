use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, user, ingredient, menu, order, movement};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/login", post(auth::login))

        // Users
        .route("/cadastro/usuario", post(user::register_user))
        .route("/editar/usuario/{id}", put(user::update_user))
        .route("/usuarios", get(user::list_users))

        // Ingredients
        .route("/cadastro/ingrediente", post(ingredient::create_ingredient))
        .route("/editar/item/{tipo}/{valor}", put(ingredient::update_ingredient))
        .route("/itens", get(ingredient::list_ingredients))

        // Menu
        .route("/cadastro/item/cardapio", post(menu::create_menu_item))
        .route("/cardapio", get(menu::list_menu))
        .route("/cardapio/{id}/status", put(menu::set_menu_item_status))

        // Orders & Movements
        .route("/pedidos", post(order::place_order).get(order::list_orders))
        .route("/pedidos/{id}/status", put(order::update_order_status))
        .route("/pedidos/{id}/movimentos", get(movement::list_order_movements))
        .route("/movimentos", post(movement::record_movement))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
