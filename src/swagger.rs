use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{Address, AddressSearchQuery, CreateAddress, UpdateAddress},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::addresses::list_addresses,
        crate::routes::addresses::get_address,
        crate::routes::addresses::get_addresses_by_house_id,
        crate::routes::addresses::create_address,
        crate::routes::addresses::update_address,
        crate::routes::addresses::delete_address,
        crate::routes::addresses::search_addresses,
    ),
    components(
        schemas(Address, CreateAddress, UpdateAddress, AddressSearchQuery)
    ),
    tags(
        (name = "addresses", description = "Address management endpoints")
    ),
    info(
        title = "Domus API",
        version = "0.1.0",
        description = "CRUD and filtered search over house addresses"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
