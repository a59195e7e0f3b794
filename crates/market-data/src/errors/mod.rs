//! Error types for the vendor client.
//!
//! [`MarketDataError`] separates caller mistakes ([`MarketDataError::InvalidArgument`])
//! from failures talking to the vendor ([`MarketDataError::Transport`] and
//! [`MarketDataError::Timeout`]). An empty vendor response is never an error.

use thiserror::Error;

/// Errors that can occur while fetching data from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A caller-supplied argument failed validation.
    /// Raised before any request is issued.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The vendor call failed: network error, non-2xx status,
    /// an error payload or an undecodable body.
    #[error("Transport error on {endpoint} ({}): {message}", status_label(.status))]
    Transport {
        /// Vendor endpoint path, e.g. `income-statement`
        endpoint: String,
        /// HTTP status when a response was received
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timeout calling {endpoint}")]
    Timeout {
        /// Vendor endpoint path
        endpoint: String,
    },

    /// The provider could not be constructed from its configuration.
    #[error("Provider configuration error: {0}")]
    Configuration(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {}", code),
        None => "no response".to_string(),
    }
}

impl MarketDataError {
    /// Shorthand for a transport failure.
    pub fn transport(endpoint: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            status,
            message: message.into(),
        }
    }

    /// True for failures of the vendor call itself. Timeouts count as transport failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// True when the error was raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// HTTP status carried by a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Endpoint the failure relates to, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Transport { endpoint, .. } | Self::Timeout { endpoint } => Some(endpoint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display_includes_endpoint_and_status() {
        let error = MarketDataError::transport("income-statement", Some(502), "Bad Gateway");
        assert_eq!(
            error.to_string(),
            "Transport error on income-statement (HTTP 502): Bad Gateway"
        );
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.endpoint(), Some("income-statement"));
    }

    #[test]
    fn test_transport_without_response() {
        let error = MarketDataError::transport("profile", None, "connection refused");
        assert!(error.to_string().contains("no response"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_timeout_is_transport() {
        let error = MarketDataError::Timeout {
            endpoint: "news/stock".to_string(),
        };
        assert!(error.is_transport());
        assert!(!error.is_invalid_argument());
        assert_eq!(error.endpoint(), Some("news/stock"));
    }

    #[test]
    fn test_invalid_argument_is_not_transport() {
        let error = MarketDataError::InvalidArgument("limit must be between 1 and 100".into());
        assert!(error.is_invalid_argument());
        assert!(!error.is_transport());
        assert_eq!(error.endpoint(), None);
    }
}
