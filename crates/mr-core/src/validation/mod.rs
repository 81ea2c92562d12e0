//! Input validation errors shared by the auth flow and the request forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user input failed a form guard.
///
/// Always recoverable: the user stays on the same step and re-enters input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ValidationError {
    #[error("phone number must contain at least {min_len} characters")]
    PhoneTooShort { min_len: usize },

    #[error("confirmation code must contain exactly {len} characters")]
    CodeLength { len: usize },

    #[error("apartment, entrance and complex are required")]
    MissingApartmentFields,

    #[error("residential complex is not in the catalog: {0}")]
    UnknownComplex(String),

    #[error("title, category and description are required")]
    MissingRequiredFields,
}
