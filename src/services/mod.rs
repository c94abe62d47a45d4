pub mod error;
pub mod orders;
pub mod paypal_client;
pub mod payouts;
pub mod products;
pub mod subscriptions;

pub use error::ApiError;
pub use orders::OrdersApi;
pub use paypal_client::PayPalClient;
pub use payouts::PayoutsApi;
pub use products::ProductsApi;
pub use subscriptions::SubscriptionsApi;
