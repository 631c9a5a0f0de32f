//! Order HTTP handlers

use super::model::{Order, OrderPayload};
use super::validation::{create_chain, delete_chain, update_chain, update_guard_chain};
use crate::core::validation::find_existing;
use crate::core::{ApiError, Chain, DataEnvelope, Payload, SharedIdGenerator, Submission};
use crate::storage::InMemoryStore;
use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::LazyLock;

static CREATE_CHAIN: LazyLock<Chain<OrderPayload, Order>> = LazyLock::new(create_chain);
static UPDATE_GUARD_CHAIN: LazyLock<Chain<(), Order>> = LazyLock::new(update_guard_chain);
static UPDATE_CHAIN: LazyLock<Chain<OrderPayload, Order>> = LazyLock::new(update_chain);
static DELETE_CHAIN: LazyLock<Chain<(), Order>> = LazyLock::new(delete_chain);

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: InMemoryStore<Order>,
    pub ids: SharedIdGenerator,
}

/// GET /orders
pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> Result<Json<DataEnvelope<Vec<Order>>>, ApiError> {
    Ok(Json(DataEnvelope::new(state.store.list()?)))
}

/// POST /orders
pub async fn create_order(
    State(state): State<OrderAppState>,
    body: Payload,
) -> Result<(StatusCode, Json<DataEnvelope<Order>>), ApiError> {
    let payload: OrderPayload = body.parse()?;
    let mut orders = state.store.write()?;

    CREATE_CHAIN.run(&Submission::new(&payload))?;

    let order = Order::new(orders.fresh_id(state.ids.as_ref()), payload.into_fields()?);
    orders.append(order.clone())?;

    tracing::info!(order_id = %order.id, dishes = order.dishes.len(), "order created");
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(order))))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let orders = state.store.read()?;
    let (_, order) = find_existing(&*orders, &order_id)?;
    Ok(Json(DataEnvelope::new(order.clone())))
}

/// PUT /orders/{order_id}
pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    body: Payload,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let mut orders = state.store.write()?;

    let (index, current) = find_existing(&*orders, &order_id)?;
    UPDATE_GUARD_CHAIN.run(&Submission::for_record(&(), &order_id, current))?;
    let payload: OrderPayload = body.parse()?;
    UPDATE_CHAIN.run(&Submission::for_record(&payload, &order_id, current))?;

    let fields = payload.into_fields()?;
    let order = orders
        .get_index_mut(index)
        .ok_or_else(|| anyhow!("order {order_id} disappeared while the store was locked"))?;
    let previous = order.status;
    order.overwrite(fields);

    tracing::info!(
        order_id = %order.id,
        from = %previous,
        to = %order.status,
        "order updated"
    );
    Ok(Json(DataEnvelope::new(order.clone())))
}

/// DELETE /orders/{order_id}
pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut orders = state.store.write()?;

    let (index, current) = find_existing(&*orders, &order_id)?;
    DELETE_CHAIN.run(&Submission::for_record(&(), &order_id, current))?;

    orders
        .remove_index(index)
        .ok_or_else(|| anyhow!("order {order_id} disappeared while the store was locked"))?;

    tracing::info!(%order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
