//! Inspector error types

use thiserror::Error;

/// Failure while a type describes its members
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("member description unavailable for {type_name}: {reason}")]
    Unavailable {
        type_name: &'static str,
        reason: String,
    },
    #[error("describe panicked for {type_name}: {message}")]
    Panicked {
        type_name: &'static str,
        message: String,
    },
}

/// Failure raised by an invoked action
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("'{0}' is not a zero-argument action")]
    NotInvocable(String),
    #[error("{0}")]
    Failed(String),
    #[error("action panicked: {0}")]
    Panicked(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Extract a readable message from a caught panic payload
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
