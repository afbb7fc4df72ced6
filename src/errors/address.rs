use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors related to address management operations
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Address data is null")]
    MissingPayload,

    #[error("Address with id {id} not found")]
    NotFoundById { id: i64 },

    #[error("No addresses found for house {house_id}")]
    NoneForHouse { house_id: i64 },

    #[error("No addresses found.")]
    NoSearchMatches,

    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

impl AppError for AddressError {
    fn status_code(&self) -> StatusCode {
        match self {
            AddressError::MissingPayload => StatusCode::BAD_REQUEST,
            AddressError::NotFoundById { .. }
            | AddressError::NoneForHouse { .. }
            | AddressError::NoSearchMatches => StatusCode::NOT_FOUND,
            AddressError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            AddressError::MissingPayload => "Address data is null".to_string(),
            AddressError::NotFoundById { .. } => "Address not found".to_string(),
            AddressError::NoneForHouse { .. } => "No addresses found for this house".to_string(),
            AddressError::NoSearchMatches => "No addresses found.".to_string(),
            AddressError::Database(_) => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AddressError::MissingPayload => "ADDRESS_DATA_NULL",
            AddressError::NotFoundById { .. } => "ADDRESS_NOT_FOUND",
            AddressError::NoneForHouse { .. } => "ADDRESS_NONE_FOR_HOUSE",
            AddressError::NoSearchMatches => "ADDRESS_NO_MATCHES",
            AddressError::Database(_) => "ADDRESS_DATABASE_ERROR",
        }
    }
}

impl_into_response!(AddressError);
