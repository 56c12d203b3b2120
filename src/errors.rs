use thiserror::Error;

use crate::decimal::Money;
use crate::types::PlanStatus;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        field: String,
        value: String,
    },

    #[error("invalid {field}: {message}")]
    InvalidField {
        field: String,
        message: String,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("plan not active: current status is {status:?}")]
    PlanNotActive {
        status: PlanStatus,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScheduleError {
    pub(crate) fn invalid_date(field: &str, value: &str) -> Self {
        ScheduleError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        ScheduleError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
