use serde::Deserialize;
use serde_json::{json, Value};

/// Body shared by the cancel/suspend/activate endpoints; the reason falls
/// back to a fixed per-action string when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionAction {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionUpdate {
    pub shipping_address: Option<Value>,
    pub billing_info: Option<Value>,
}

impl SubscriptionUpdate {
    pub fn patch_ops(&self) -> Vec<Value> {
        let mut operations = Vec::new();

        if let Some(shipping_address) = &self.shipping_address {
            operations.push(json!({
                "op": "replace",
                "path": "/subscriber/shipping_address",
                "value": shipping_address,
            }));
        }
        if let Some(billing_info) = &self.billing_info {
            operations.push(json!({
                "op": "replace",
                "path": "/billing_info",
                "value": billing_info,
            }));
        }

        operations
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviseSubscription {
    pub plan_id: Option<String>,
    pub quantity: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureSubscriptionPayment {
    pub note: Option<String>,
    pub capture_type: Option<String>,
    pub amount: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_patch_paths() {
        let update = SubscriptionUpdate {
            shipping_address: Some(json!({ "address_line_1": "1 Main St" })),
            billing_info: None,
        };

        let ops = update.patch_ops();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0]["path"], "/subscriber/shipping_address");
        assert_eq!(ops[0]["value"]["address_line_1"], "1 Main St");
    }

    #[test]
    fn test_empty_update_builds_no_ops() {
        let update = SubscriptionUpdate {
            shipping_address: None,
            billing_info: None,
        };
        assert!(update.patch_ops().is_empty());
    }
}
