//! Error type for rejected inputs.

use thiserror::Error;

/// Why a street of houses could not be solved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobberyError {
    #[error("no houses to rob: input must contain at least one value")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, RobberyError>;
