use thiserror::Error;
use uuid::Uuid;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum CalculationError {
    #[error("invalid principal: {amount} (must not be negative)")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("unknown calculation mode: {value}")]
    UnknownMode {
        value: String,
    },

    #[error("missing required field: {field}")]
    MissingField {
        field: &'static str,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid rate for {index}: {rate}")]
    InvalidRate {
        index: String,
        rate: Rate,
    },

    #[error("calculation not found: {id}")]
    CalculationNotFound {
        id: Uuid,
    },

    #[error("arithmetic overflow: {context}")]
    Overflow {
        context: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculationError>;
