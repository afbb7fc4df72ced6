use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{
    errors::address::AddressError,
    models::{Address, AddressSearchQuery, CreateAddress, UpdateAddress},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route("/search", get(search_addresses))
        .route("/houseid/{house_id}", get(get_addresses_by_house_id))
        .route(
            "/{id}",
            get(get_address).put(update_address).delete(delete_address),
        )
}

#[utoipa::path(
    get,
    path = "/api/addresses",
    tag = "addresses",
    responses(
        (status = 200, description = "List of all addresses", body = Vec<Address>)
    )
)]
pub async fn list_addresses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Address>>, AddressError> {
    let addresses = state.db.get_all_addresses().await?;
    Ok(Json(addresses))
}

#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    tag = "addresses",
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address record", body = Address),
        (status = 404, description = "Address not found")
    )
)]
pub async fn get_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Address>, AddressError> {
    let address = state
        .db
        .get_address_by_id(id)
        .await?
        .ok_or(AddressError::NotFoundById { id })?;

    Ok(Json(address))
}

#[utoipa::path(
    get,
    path = "/api/addresses/houseid/{house_id}",
    tag = "addresses",
    params(
        ("house_id" = i64, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Addresses attached to the house", body = Vec<Address>),
        (status = 404, description = "No addresses for this house")
    )
)]
pub async fn get_addresses_by_house_id(
    State(state): State<Arc<AppState>>,
    Path(house_id): Path<i64>,
) -> Result<Json<Vec<Address>>, AddressError> {
    let addresses = state.db.get_addresses_by_house_id(house_id).await?;

    // An empty result set reports as not-found, matching the original contract
    if addresses.is_empty() {
        return Err(AddressError::NoneForHouse { house_id });
    }

    Ok(Json(addresses))
}

#[utoipa::path(
    post,
    path = "/api/addresses",
    tag = "addresses",
    request_body = CreateAddress,
    responses(
        (status = 201, description = "Address created successfully", body = Address),
        (status = 400, description = "Request body missing")
    )
)]
pub async fn create_address(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CreateAddress>>,
) -> Result<impl IntoResponse, AddressError> {
    let Some(Json(payload)) = payload else {
        return Err(AddressError::MissingPayload);
    };

    let address = state.db.create_address(payload).await?;
    let location = format!("/api/addresses/{}", address.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(address),
    ))
}

#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    tag = "addresses",
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    request_body = UpdateAddress,
    responses(
        (status = 200, description = "Address updated successfully", body = Address),
        (status = 400, description = "Request body missing"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Option<Json<UpdateAddress>>,
) -> Result<Json<Address>, AddressError> {
    let Some(Json(payload)) = payload else {
        return Err(AddressError::MissingPayload);
    };

    let address = state
        .db
        .update_address(id, payload)
        .await?
        .ok_or(AddressError::NotFoundById { id })?;

    Ok(Json(address))
}

#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    tag = "addresses",
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AddressError> {
    let deleted = state.db.delete_address(id).await?;

    if !deleted {
        return Err(AddressError::NotFoundById { id });
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/addresses/search",
    tag = "addresses",
    params(AddressSearchQuery),
    responses(
        (status = 200, description = "Addresses matching all supplied filters", body = Vec<Address>),
        (status = 404, description = "No addresses matched")
    )
)]
pub async fn search_addresses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddressSearchQuery>,
) -> Result<Json<Vec<Address>>, AddressError> {
    let addresses = state.db.search_addresses(&query).await?;

    if addresses.is_empty() {
        return Err(AddressError::NoSearchMatches);
    }

    Ok(Json(addresses))
}
