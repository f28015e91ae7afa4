//! Error types and handling for the city guide

use thiserror::Error;

/// Main error type for the city guide
#[derive(Error, Debug)]
pub enum CityGuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Completion API returned a non-success status
    #[error("API error: {message}")]
    Api { message: String },

    /// Completion API rejected the credential
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Completion API is throttling requests
    #[error("Rate limit error: {message}")]
    RateLimit { message: String },

    /// Transport failure while talking to the completion API
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Completion API answered with something we cannot use
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Template rendering errors
    #[error("Render error: {message}")]
    Render { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CityGuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a new rate limit error
    pub fn rate_limit<S: Into<String>>(message: S) -> Self {
        Self::RateLimit {
            message: message.into(),
        }
    }

    /// Create a new invalid response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CityGuideError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            CityGuideError::Api { .. } | CityGuideError::InvalidResponse { .. } => {
                "The completion service returned an unexpected answer.".to_string()
            }
            CityGuideError::Authentication { .. } => {
                "The completion service rejected the API key. Check OPENAI_API_KEY.".to_string()
            }
            CityGuideError::RateLimit { .. } => {
                "The completion service is rate limiting requests. Try again later.".to_string()
            }
            CityGuideError::Network { .. } => {
                "Unable to connect to the completion service. Please check your internet connection."
                    .to_string()
            }
            CityGuideError::Render { .. } => "Failed to render the page.".to_string(),
            CityGuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = CityGuideError::config("missing API key");
        assert!(matches!(config_err, CityGuideError::Config { .. }));

        let api_err = CityGuideError::api("status 500");
        assert!(matches!(api_err, CityGuideError::Api { .. }));

        let auth_err = CityGuideError::authentication("bad key");
        assert!(matches!(auth_err, CityGuideError::Authentication { .. }));

        let empty = CityGuideError::invalid_response("no choices");
        assert_eq!(empty.to_string(), "Invalid response: no choices");
    }

    #[test]
    fn test_user_messages() {
        let config_err = CityGuideError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let auth_err = CityGuideError::authentication("test");
        assert!(auth_err.user_message().contains("OPENAI_API_KEY"));

        let limit_err = CityGuideError::rate_limit("test");
        assert!(limit_err.user_message().contains("rate limiting"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guide_err: CityGuideError = io_err.into();
        assert!(matches!(guide_err, CityGuideError::Io { .. }));
    }
}
