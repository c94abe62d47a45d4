pub mod config;
pub mod state;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{identity, orders, payouts, products, subscriptions};
use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/:order_id", get(orders::get_order))
        .route("/api/orders/:order_id/capture", post(orders::capture_order))
        .route(
            "/api/orders/:order_id/authorize",
            post(orders::authorize_order),
        )
        .route(
            "/api/orders/:order_id/capture-authorization",
            post(orders::capture_authorized_payment),
        )
        .route("/api/payouts/create", post(payouts::create_payout_batch))
        .route("/api/payouts/oauth/config", get(payouts::get_oauth_config))
        .route("/api/payouts/user-info", post(payouts::get_user_info))
        .route(
            "/api/payouts/items/:payout_item_id",
            get(payouts::get_payout_item),
        )
        .route("/api/payouts/:payout_batch_id", get(payouts::get_payout))
        .route("/api/identity/id-token", post(identity::create_id_token))
        .route(
            "/api/products",
            post(products::create_product).get(products::list_products),
        )
        .route(
            "/api/products/:product_id",
            get(products::get_product).patch(products::update_product),
        )
        .route(
            "/api/subscriptions/plans",
            post(subscriptions::create_plan),
        )
        .route(
            "/api/subscriptions/plans/:plan_id",
            get(subscriptions::get_plan),
        )
        .route(
            "/api/subscriptions/:subscription_id",
            get(subscriptions::get_subscription).patch(subscriptions::update_subscription),
        )
        .route(
            "/api/subscriptions/:subscription_id/cancel",
            post(subscriptions::cancel_subscription),
        )
        .route(
            "/api/subscriptions/:subscription_id/suspend",
            post(subscriptions::suspend_subscription),
        )
        .route(
            "/api/subscriptions/:subscription_id/activate",
            post(subscriptions::activate_subscription),
        )
        .route(
            "/api/subscriptions/:subscription_id/revise",
            post(subscriptions::revise_subscription),
        )
        .route(
            "/api/subscriptions/:subscription_id/capture",
            post(subscriptions::capture_payment),
        )
        .route(
            "/api/subscriptions/:subscription_id/transactions",
            get(subscriptions::list_transactions),
        )
        .with_state(state)
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}
