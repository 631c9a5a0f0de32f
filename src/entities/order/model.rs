//! Order record, status lifecycle and request payload

use crate::core::validation::validators::{as_positive_integer, as_text};
use crate::core::{ApiError, Record};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Where an order is in its lifecycle
///
/// Any status may be set by an update until the order is `Delivered`,
/// which is terminal. Only `Pending` orders may be deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parse the wire form (`"out-for-delivery"`, ...)
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// No further updates once reached
    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    pub fn allows_delete(self) -> bool {
        self == OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dish in an order
///
/// The dish reference is kept exactly as submitted (id, name, price, ...),
/// next to the ordered quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    pub quantity: u64,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

/// Validated order fields, everything except the id
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    /// Only set for updates; creates always start `Pending`
    pub status: Option<OrderStatus>,
    pub dishes: Vec<LineItem>,
}

impl Order {
    /// A new order, always `Pending`
    pub fn new(id: impl Into<String>, fields: OrderFields) -> Self {
        Self {
            id: id.into(),
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: OrderStatus::Pending,
            dishes: fields.dishes,
        }
    }

    /// Replace every field except the id
    pub fn overwrite(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        if let Some(status) = fields.status {
            self.status = status;
        }
        self.dishes = fields.dishes;
    }
}

impl Record for Order {
    fn kind() -> &'static str {
        "Order"
    }

    fn resource_name() -> &'static str {
        "orders"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /orders` and `PUT /orders/{order_id}`
///
/// Fields stay untyped until the chain has checked them. `dishes` is expected
/// to be an array of dish objects, each carrying a `quantity`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

impl OrderPayload {
    /// Submitted line items; empty unless `dishes` is an array
    pub fn line_items(&self) -> &[Value] {
        self.dishes
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn status(&self) -> Option<OrderStatus> {
        as_text(&self.status).and_then(OrderStatus::parse)
    }

    /// Convert a payload that passed an order chain
    pub fn into_fields(self) -> Result<OrderFields, ApiError> {
        let items = self.line_items();
        if items.is_empty() {
            return Err(anyhow!("order dishes passed validation but are empty").into());
        }

        let dishes = items
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<LineItem, ApiError> {
                let mut dish = item
                    .as_object()
                    .cloned()
                    .ok_or_else(|| anyhow!("dish {index} passed validation but is not an object"))?;
                let quantity = dish
                    .remove("quantity")
                    .as_ref()
                    .and_then(as_positive_integer)
                    .ok_or_else(|| anyhow!("dish {index} quantity passed validation but is invalid"))?;
                Ok(LineItem { dish, quantity })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderFields {
            deliver_to: checked_text(&self.deliver_to, "deliverTo")?,
            mobile_number: checked_text(&self.mobile_number, "mobileNumber")?,
            status: self.status(),
            dishes,
        })
    }
}

fn checked_text(value: &Option<Value>, field: &str) -> Result<String, ApiError> {
    as_text(value)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("order {field} passed validation but is not a string").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out-for-delivery")
        );
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("cancelled"), None);
        assert_eq!(OrderStatus::parse("Pending"), None);
    }

    #[test]
    fn test_status_rules() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
        assert!(OrderStatus::Pending.allows_delete());
        assert!(!OrderStatus::Preparing.allows_delete());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order: Order = serde_json::from_value(json!({
            "id": "o1",
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "status": "preparing",
            "dishes": [{ "id": "d1", "name": "Bagel", "price": 6, "quantity": 2 }]
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.dishes[0].quantity, 2);
        assert_eq!(order.dishes[0].dish["name"], "Bagel");

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["deliverTo"], "308 Negra Arroyo Lane");
        assert_eq!(value["mobileNumber"], "(505) 143-3369");
        assert_eq!(value["dishes"][0]["id"], "d1");
        assert_eq!(value["dishes"][0]["quantity"], 2);
    }

    #[test]
    fn test_payload_line_items() {
        let payload: OrderPayload =
            serde_json::from_value(json!({ "dishes": [{ "id": "d1", "quantity": 2.5 }, 7] }))
                .unwrap();
        let items = payload.line_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["quantity"], json!(2.5));
        assert_eq!(items[1], json!(7));

        let payload: OrderPayload = serde_json::from_value(json!({ "dishes": "lots" })).unwrap();
        assert_eq!(payload.dishes, Some(json!("lots")));
        assert!(payload.line_items().is_empty());

        assert!(OrderPayload::default().line_items().is_empty());
    }

    #[test]
    fn test_payload_status() {
        let payload: OrderPayload =
            serde_json::from_value(json!({ "status": "preparing" })).unwrap();
        assert_eq!(payload.status(), Some(OrderStatus::Preparing));

        for status in [json!(5), json!("Preparing"), json!(null)] {
            let payload: OrderPayload =
                serde_json::from_value(json!({ "status": status })).unwrap();
            assert_eq!(payload.status(), None);
        }
    }

    #[test]
    fn test_new_orders_start_pending() {
        let order = Order::new(
            "o1",
            OrderFields {
                deliver_to: "a".into(),
                mobile_number: "b".into(),
                status: Some(OrderStatus::Delivered),
                dishes: vec![],
            },
        );
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_into_fields_parses_quantities_and_status() {
        let payload: OrderPayload = serde_json::from_value(json!({
            "deliverTo": "a",
            "mobileNumber": "b",
            "status": "out-for-delivery",
            "dishes": [{ "id": "d1", "quantity": 3 }]
        }))
        .unwrap();
        let fields = payload.into_fields().unwrap();
        assert_eq!(fields.status, Some(OrderStatus::OutForDelivery));
        assert_eq!(fields.dishes[0].quantity, 3);
        assert_eq!(fields.deliver_to, "a");
        assert_eq!(fields.dishes[0].dish["id"], "d1");
        assert!(!fields.dishes[0].dish.contains_key("quantity"));
    }

    #[test]
    fn test_into_fields_with_non_object_item_is_internal() {
        let payload: OrderPayload = serde_json::from_value(json!({
            "deliverTo": "a",
            "mobileNumber": "b",
            "dishes": [{ "quantity": 1 }, 7]
        }))
        .unwrap();
        assert!(matches!(payload.into_fields(), Err(ApiError::Internal(_))));
    }
}
