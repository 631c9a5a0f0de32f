//! Dish HTTP handlers

use super::model::{Dish, DishPayload};
use super::validation::{create_chain, update_chain};
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

static CREATE_CHAIN: LazyLock<Chain<DishPayload, Dish>> = LazyLock::new(create_chain);
static UPDATE_CHAIN: LazyLock<Chain<DishPayload, Dish>> = LazyLock::new(update_chain);

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: InMemoryStore<Dish>,
    pub ids: SharedIdGenerator,
}

/// GET /dishes
pub async fn list_dishes(
    State(state): State<DishAppState>,
) -> Result<Json<DataEnvelope<Vec<Dish>>>, ApiError> {
    Ok(Json(DataEnvelope::new(state.store.list()?)))
}

/// POST /dishes
pub async fn create_dish(
    State(state): State<DishAppState>,
    body: Payload,
) -> Result<(StatusCode, Json<DataEnvelope<Dish>>), ApiError> {
    let payload: DishPayload = body.parse()?;
    let mut dishes = state.store.write()?;

    CREATE_CHAIN.run(&Submission::new(&payload))?;

    let dish = Dish::new(dishes.fresh_id(state.ids.as_ref()), payload.into_fields()?);
    dishes.append(dish.clone())?;

    tracing::info!(dish_id = %dish.id, "dish created");
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(dish))))
}

/// GET /dishes/{dish_id}
pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataEnvelope<Dish>>, ApiError> {
    let dishes = state.store.read()?;
    let (_, dish) = find_existing(&*dishes, &dish_id)?;
    Ok(Json(DataEnvelope::new(dish.clone())))
}

/// PUT /dishes/{dish_id}
pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    body: Payload,
) -> Result<Json<DataEnvelope<Dish>>, ApiError> {
    let mut dishes = state.store.write()?;

    let (index, current) = find_existing(&*dishes, &dish_id)?;
    let payload: DishPayload = body.parse()?;
    UPDATE_CHAIN.run(&Submission::for_record(&payload, &dish_id, current))?;

    let fields = payload.into_fields()?;
    let dish = dishes
        .get_index_mut(index)
        .ok_or_else(|| anyhow!("dish {dish_id} disappeared while the store was locked"))?;
    dish.overwrite(fields);

    tracing::info!(dish_id = %dish.id, "dish updated");
    Ok(Json(DataEnvelope::new(dish.clone())))
}
