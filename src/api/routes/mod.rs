//! Route handlers.

pub mod admin;
pub mod pages;
pub mod players;

#[cfg(test)]
pub(crate) mod testutil;

use axum::response::Redirect;

use crate::api::{redirect_with_error, ApiError};
use crate::storage::GatewayError;

/// Collapse a mutation outcome into the redirect convention: success
/// goes to `success`, a rejection bounces to `error_page` with the
/// reason, and a storage failure surfaces as a 500.
pub(crate) fn finish(
    result: Result<(), GatewayError>,
    success: &str,
    error_page: &str,
) -> Result<Redirect, ApiError> {
    match result {
        Ok(()) => Ok(Redirect::to(success)),
        Err(GatewayError::Rejected(e)) => Ok(redirect_with_error(error_page, &e.to_string())),
        Err(GatewayError::Storage(e)) => Err(ApiError::Internal(e.to_string())),
    }
}

/// Best-effort index coercion: empty or non-numeric form fields mean
/// "no index".
pub(crate) fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Best-effort count coercion, defaulting to zero.
pub(crate) fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
