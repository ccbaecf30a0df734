//! # Push Order Types
//!
//! The inbound payment-initiation value object. Exists only for the duration
//! of one request/response cycle.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A payment-initiation request as received from the caller.
///
/// The relay performs no schema validation: every field is optional and
/// carried as raw JSON, so absent or malformed values travel to the gateway
/// uninspected. The gateway is the sole source of validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushOrder {
    /// Payer phone number, expected in the gateway's international format
    /// (e.g. `254712345678`). Not validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Value>,

    /// Amount to charge. Not validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,

    /// Account reference shown on the payer's statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<Value>,

    /// Free-text transaction description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_desc: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_keys() {
        let order: PushOrder = serde_json::from_value(json!({
            "phoneNumber": "254712345678",
            "amount": 10,
            "accountReference": "TestRef",
            "transactionDesc": "Test payment"
        }))
        .unwrap();

        assert_eq!(order.phone_number, Some(json!("254712345678")));
        assert_eq!(order.amount, Some(json!(10)));
        assert_eq!(order.account_reference, Some(json!("TestRef")));
        assert_eq!(order.transaction_desc, Some(json!("Test payment")));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let order: PushOrder = serde_json::from_value(json!({})).unwrap();

        assert!(order.phone_number.is_none());
        assert!(order.amount.is_none());

        // Absent fields are omitted on re-serialization, not rendered as null
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_malformed_values_pass_through() {
        // A string amount and a numeric phone are not rejected here;
        // the gateway decides what to do with them.
        let order: PushOrder = serde_json::from_value(json!({
            "phoneNumber": 254712345678u64,
            "amount": "ten"
        }))
        .unwrap();

        assert_eq!(order.phone_number, Some(json!(254712345678u64)));
        assert_eq!(order.amount, Some(json!("ten")));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let order: PushOrder = serde_json::from_value(json!({
            "amount": 5,
            "currency": "KES"
        }))
        .unwrap();

        assert_eq!(order.amount, Some(json!(5)));
    }
}
