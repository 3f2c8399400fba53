//! error types shared by the controller and the browser glue

use thiserror::Error;

use crate::form::FormField;

/// failure talking to the campaign api
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// api answered with a non-2xx status
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// the `error` field of the response body, if any
        message: Option<String>,
    },

    /// response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// human readable message supplied by the server
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message: Some(m), .. } if !m.is_empty() => Some(m),
            _ => None,
        }
    }
}

/// add form rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingFields(Vec<FormField>),
}

/// browser local storage could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("localStorage {0} failed")]
    Access(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_rejections() {
        let rejected = ApiError::Rejected { status: 401, message: Some("Invalid credentials".into()) };
        assert_eq!(rejected.server_message(), Some("Invalid credentials"));

        let empty = ApiError::Rejected { status: 500, message: Some(String::new()) };
        assert_eq!(empty.server_message(), None);

        assert_eq!(ApiError::Network("offline".into()).server_message(), None);
    }

    #[test]
    fn test_validation_message() {
        let err = ValidationError::MissingFields(vec![FormField::Name]);
        assert_eq!(err.to_string(), "Please fill all fields");
    }
}
