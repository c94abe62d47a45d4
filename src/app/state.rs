use std::sync::Arc;

use crate::app::config::Config;
use crate::services::{OrdersApi, PayPalClient, PayoutsApi, ProductsApi, SubscriptionsApi};

/// Per-process application state, constructed once at startup and
/// injected into every handler. The resource clients share one PayPal
/// client (and thus one connection pool and credential set).
#[derive(Clone)]
pub struct AppState {
    pub paypal: Arc<PayPalClient>,
    pub orders: Arc<OrdersApi>,
    pub payouts: Arc<PayoutsApi>,
    pub products: Arc<ProductsApi>,
    pub subscriptions: Arc<SubscriptionsApi>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let paypal = Arc::new(PayPalClient::new(config));

        Self {
            orders: Arc::new(OrdersApi::new(paypal.clone())),
            payouts: Arc::new(PayoutsApi::new(paypal.clone())),
            products: Arc::new(ProductsApi::new(paypal.clone())),
            subscriptions: Arc::new(SubscriptionsApi::new(paypal.clone())),
            paypal,
        }
    }
}
