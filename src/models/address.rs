use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A postal address attached to a house record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Address {
    pub id: i64,
    pub house_id: i64,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAddress {
    #[serde(alias = "houseId")]
    pub house_id: i64,
    pub street: String,
    pub city: String,
    #[serde(alias = "postalCode")]
    pub postal_code: String,
    pub country: String,
    pub notes: Option<String>,
}

/// Wholesale replacement of the mutable fields; `id` and `house_id`
/// are never touched by an update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAddress {
    pub street: String,
    pub city: String,
    #[serde(alias = "postalCode")]
    pub postal_code: String,
    pub country: String,
    pub notes: Option<String>,
}

/// Optional substring filters, combined conjunctively.
/// Parameters that are present but empty behave as if absent.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AddressSearchQuery {
    pub street: Option<String>,
    pub city: Option<String>,
    #[serde(alias = "postalCode")]
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub notes: Option<String>,
}
