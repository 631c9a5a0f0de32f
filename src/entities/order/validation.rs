//! Order validation chains
//!
//! Create:  presence (deliverTo, mobileNumber, dishes) → deliverTo →
//!          mobileNumber → dishes non-empty → quantity present → quantity > 0 →
//!          quantity integer.
//!
//! Update:  delivered orders are rejected outright, before the body is even
//!          read. Then the create checks with the status check after
//!          mobileNumber, then the payload id must match the route.
//!
//! Delete:  the stored order must still be pending.

use super::model::{Order, OrderPayload};
use crate::core::validation::validators::{
    Truthy, id_matches_route, is_integer, not_blank, required,
};
use crate::core::{ApiError, Chain, Submission};
use serde_json::Value;

const ORDER: &str = "Order";

pub const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
pub const DELIVERED_MESSAGE: &str = "A delivered order cannot be changed";
pub const DISHES_MESSAGE: &str = "Order must include at least one dish";
pub const NOT_PENDING_MESSAGE: &str = "An order cannot be deleted unless it is pending";

fn quantity_message(index: usize) -> String {
    format!("Dish {index} must have a quantity that is an integer greater than 0")
}

/// Check that fails on the first line item matching `invalid`, naming its index
fn each_quantity(
    invalid: fn(Option<&Value>) -> bool,
) -> impl for<'a> Fn(&Submission<'a, OrderPayload, Order>) -> Result<(), ApiError> + Send + Sync + 'static
{
    move |s: &Submission<'_, OrderPayload, Order>| {
        match s
            .payload
            .line_items()
            .iter()
            .position(|item: &Value| invalid(item.get("quantity")))
        {
            Some(index) => Err(ApiError::Validation(quantity_message(index))),
            None => Ok(()),
        }
    }
}

fn dishes_not_empty(s: &Submission<'_, OrderPayload, Order>) -> Result<(), ApiError> {
    if s.payload.line_items().is_empty() {
        Err(ApiError::Validation(DISHES_MESSAGE.to_string()))
    } else {
        Ok(())
    }
}

fn valid_status(s: &Submission<'_, OrderPayload, Order>) -> Result<(), ApiError> {
    match s.payload.status() {
        Some(_) => Ok(()),
        None => Err(ApiError::Validation(STATUS_MESSAGE.to_string())),
    }
}

fn not_delivered(s: &Submission<'_, (), Order>) -> Result<(), ApiError> {
    match s.current {
        Some(order) if order.status.is_terminal() => {
            Err(ApiError::Immutable(DELIVERED_MESSAGE.to_string()))
        }
        _ => Ok(()),
    }
}

fn is_pending(s: &Submission<'_, (), Order>) -> Result<(), ApiError> {
    match s.current {
        Some(order) if order.status.allows_delete() => Ok(()),
        _ => Err(ApiError::Conflict(NOT_PENDING_MESSAGE.to_string())),
    }
}

fn presence_checks(chain: Chain<OrderPayload, Order>) -> Chain<OrderPayload, Order> {
    chain
        .check(required(ORDER, "deliverTo", |p: &OrderPayload| &p.deliver_to))
        .check(required(ORDER, "mobileNumber", |p: &OrderPayload| &p.mobile_number))
        .check(required(ORDER, "dishes", |p: &OrderPayload| &p.dishes))
        .check(not_blank(ORDER, "deliverTo", |p: &OrderPayload| &p.deliver_to))
        .check(not_blank(ORDER, "mobileNumber", |p: &OrderPayload| &p.mobile_number))
}

fn dish_checks(chain: Chain<OrderPayload, Order>) -> Chain<OrderPayload, Order> {
    chain
        .check(dishes_not_empty)
        .check(each_quantity(|quantity| !quantity.is_truthy()))
        .check(each_quantity(|quantity| {
            quantity.and_then(Value::as_f64).is_some_and(|q| q <= 0.0)
        }))
        .check(each_quantity(|quantity| !quantity.is_some_and(is_integer)))
}

/// `POST /orders`
pub fn create_chain() -> Chain<OrderPayload, Order> {
    dish_checks(presence_checks(Chain::new("order.create")))
}

/// `PUT /orders/{order_id}`, run on the stored order before the body is parsed
pub fn update_guard_chain() -> Chain<(), Order> {
    Chain::new("order.update.guard").check(not_delivered)
}

/// `PUT /orders/{order_id}`, run on the parsed body after [`update_guard_chain`]
pub fn update_chain() -> Chain<OrderPayload, Order> {
    let chain = presence_checks(Chain::new("order.update")).check(valid_status);
    dish_checks(chain).check(id_matches_route(ORDER, |p: &OrderPayload| &p.id))
}

/// `DELETE /orders/{order_id}`, run after the existence lookup
pub fn delete_chain() -> Chain<(), Order> {
    Chain::new("order.delete").check(is_pending)
}
