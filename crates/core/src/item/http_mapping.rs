//! Pure functions for mapping item errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`ItemError`]
//! variants, following the Functional Core pattern - pure functions with
//! no side effects.

use super::ItemError;

/// Maps an [`ItemError`] to an HTTP status code.
///
/// - `MissingId` -> 400 (Bad Request)
/// - `InvalidPayload` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
///
/// # Examples
///
/// ```
/// use itemvault_core::item::{item_error_to_status_code, ItemError};
///
/// assert_eq!(item_error_to_status_code(&ItemError::NotFound), 404);
/// ```
pub fn item_error_to_status_code(error: &ItemError) -> u16 {
    match error {
        ItemError::MissingId => 400,
        ItemError::InvalidPayload(_) => 400,
        ItemError::NotFound => 404,
        ItemError::AlreadyExists => 409,
    }
}
