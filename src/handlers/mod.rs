pub mod identity;
pub mod orders;
pub mod payouts;
pub mod products;
pub mod subscriptions;
