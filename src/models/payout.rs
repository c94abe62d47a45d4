use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::utils::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutRecipient {
    pub receiver: Option<String>,
    pub amount: Option<String>,
    pub note: Option<String>,
    pub sender_item_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayoutRequest {
    pub sender_batch_id: Option<String>,
    pub email_subject: Option<String>,
    pub email_message: Option<String>,
    #[serde(default)]
    pub recipients: Vec<PayoutRecipient>,
}

impl CreatePayoutRequest {
    /// Builds the Payouts v1 batch payload, filling the named defaults
    /// for every field the caller omitted.
    pub fn into_payload(self) -> Value {
        let items: Vec<Value> = self
            .recipients
            .into_iter()
            .map(|recipient| {
                json!({
                    "recipient_type": defaults::PAYOUT_RECIPIENT_TYPE,
                    "amount": {
                        "value": recipient.amount,
                        "currency": defaults::PAYOUT_CURRENCY,
                    },
                    "receiver": recipient.receiver,
                    "note": recipient.note.unwrap_or_else(|| defaults::PAYOUT_NOTE.to_string()),
                    "sender_item_id": recipient
                        .sender_item_id
                        .unwrap_or_else(defaults::sender_item_id),
                })
            })
            .collect();

        json!({
            "sender_batch_header": {
                "sender_batch_id": self
                    .sender_batch_id
                    .unwrap_or_else(defaults::sender_batch_id),
                "email_subject": self.email_subject,
                "email_message": self.email_message,
            },
            "items": items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient(note: Option<&str>, item_id: Option<&str>) -> PayoutRecipient {
        PayoutRecipient {
            receiver: Some("sb-buyer@example.com".to_string()),
            amount: Some("10.00".to_string()),
            note: note.map(str::to_string),
            sender_item_id: item_id.map(str::to_string),
        }
    }

    #[test]
    fn test_note_defaults_to_thank_you() {
        let request = CreatePayoutRequest {
            sender_batch_id: Some("batch_1".to_string()),
            email_subject: None,
            email_message: None,
            recipients: vec![recipient(None, Some("item_1"))],
        };

        let payload = request.into_payload();
        assert_eq!(
            payload["items"][0]["note"],
            "Thank you for your service!"
        );
        assert_eq!(payload["items"][0]["sender_item_id"], "item_1");
    }

    #[test]
    fn test_sender_item_id_synthesized_from_timestamp() {
        let request = CreatePayoutRequest {
            sender_batch_id: None,
            email_subject: None,
            email_message: None,
            recipients: vec![recipient(Some("good work"), None)],
        };

        let payload = request.into_payload();
        let item_id = payload["items"][0]["sender_item_id"].as_str().unwrap();
        assert!(item_id.starts_with("item_"));
        assert_eq!(payload["items"][0]["note"], "good work");

        let batch_id = payload["sender_batch_header"]["sender_batch_id"]
            .as_str()
            .unwrap();
        assert!(batch_id.starts_with("batch_"));
    }

    #[test]
    fn test_amount_carries_fixed_currency() {
        let request = CreatePayoutRequest {
            sender_batch_id: Some("batch_2".to_string()),
            email_subject: Some("You got paid!".to_string()),
            email_message: None,
            recipients: vec![recipient(None, None)],
        };

        let payload = request.into_payload();
        assert_eq!(payload["items"][0]["amount"]["value"], "10.00");
        assert_eq!(payload["items"][0]["amount"]["currency"], "USD");
        assert_eq!(payload["items"][0]["recipient_type"], "PAYPAL_ID");
        assert_eq!(
            payload["sender_batch_header"]["email_subject"],
            "You got paid!"
        );
    }
}
