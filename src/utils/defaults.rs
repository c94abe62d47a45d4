// Named fallback values applied by the request builders. The upstream
// platform owns the semantics; these only fill fields the caller omitted.

use chrono::Utc;

pub const PAYOUT_NOTE: &str = "Thank you for your service!";
pub const PAYOUT_CURRENCY: &str = "USD";
pub const PAYOUT_RECIPIENT_TYPE: &str = "PAYPAL_ID";

pub const ORDER_INTENT: &str = "CAPTURE";

pub const CANCEL_REASON: &str = "Customer requested cancellation";
pub const SUSPEND_REASON: &str = "Subscription suspended";
pub const ACTIVATE_REASON: &str = "Subscription activated";
pub const CAPTURE_TYPE: &str = "OUTSTANDING_BALANCE";

pub const PRODUCT_LIST_PAGE: u32 = 1;
pub const PRODUCT_LIST_PAGE_SIZE: u32 = 20;

pub fn sender_item_id() -> String {
    format!("item_{}", Utc::now().timestamp_millis())
}

pub fn sender_batch_id() -> String {
    format!("batch_{}", Utc::now().timestamp_millis())
}

pub fn product_request_id() -> String {
    format!("product-{}", Utc::now().timestamp_millis())
}
