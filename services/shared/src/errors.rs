/// Shared error types for the lottery bets service
///
/// Design Philosophy:
/// - Standardized error codes for consistent error handling across crates
/// - Categorized by error domain (Validation, Network, Internal, NotFound)
/// - Includes context fields for debugging (error_code, message, context)
///
/// Usage:
/// - The backend maps its `AppError` into a ServiceError at the HTTP boundary
/// - Error codes follow pattern: <CATEGORY>_<SPECIFIC>_<DETAIL>
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error categories that map to HTTP status codes and logging severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Validation errors (400 Bad Request)
    /// Client provided invalid input
    Validation,

    /// Storage is unavailable or failed the write (503 Service Unavailable)
    Network,

    /// Internal service errors (500 Internal Server Error)
    /// Collaborator failures, corrupt records, programming errors
    Internal,

    /// Resource not found (404 Not Found)
    NotFound,
}

impl ErrorCategory {
    /// Map error category to HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorCategory::Validation => 400,
            ErrorCategory::Network => 503,
            ErrorCategory::Internal => 500,
            ErrorCategory::NotFound => 404,
        }
    }

    /// Map error category to log level
    pub fn log_level(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "warn",
            ErrorCategory::Network => "error",
            ErrorCategory::Internal => "error",
            ErrorCategory::NotFound => "info",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Validation",
            ErrorCategory::Network => "Network",
            ErrorCategory::Internal => "Internal",
            ErrorCategory::NotFound => "NotFound",
        }
    }
}

/// Standard error codes used across all services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    // Validation errors
    pub const VALIDATION_INVALID_DRAWS: ErrorCode = ErrorCode("VALIDATION_INVALID_DRAWS");
    pub const VALIDATION_INVALID_INPUT: ErrorCode = ErrorCode("VALIDATION_INVALID_INPUT");
    pub const VALIDATION_MISSING_FIELD: ErrorCode = ErrorCode("VALIDATION_MISSING_FIELD");
    pub const VALIDATION_INVALID_BET_ID: ErrorCode = ErrorCode("VALIDATION_INVALID_BET_ID");

    // Network errors
    pub const NETWORK_PERSISTENCE: ErrorCode = ErrorCode("NETWORK_PERSISTENCE");
    pub const NETWORK_REDIS_CONNECTION: ErrorCode = ErrorCode("NETWORK_REDIS_CONNECTION");

    // Internal errors
    pub const INTERNAL_IDENTITY_GENERATION: ErrorCode = ErrorCode("INTERNAL_IDENTITY_GENERATION");
    pub const INTERNAL_CLOCK: ErrorCode = ErrorCode("INTERNAL_CLOCK");
    pub const INTERNAL_UNEXPECTED: ErrorCode = ErrorCode("INTERNAL_UNEXPECTED");
    pub const INTERNAL_SERIALIZATION: ErrorCode = ErrorCode("INTERNAL_SERIALIZATION");
    pub const INTERNAL_DESERIALIZATION: ErrorCode = ErrorCode("INTERNAL_DESERIALIZATION");

    // Resource errors
    pub const NOT_FOUND_BET: ErrorCode = ErrorCode("NOT_FOUND_BET");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standardized error structure used across all services
///
/// This provides consistent error reporting with:
/// - Structured error codes for programmatic handling
/// - Human-readable messages
/// - Optional context for debugging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    /// Error category (determines status code and log level)
    pub category: ErrorCategory,

    /// Structured error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context (e.g., draw index, storage error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ServiceError {
    /// Create a new ServiceError
    pub fn new(category: ErrorCategory, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            category,
            code: code.as_str().to_string(),
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Validation error constructors
    pub fn invalid_draws(reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_INVALID_DRAWS,
            format!("Invalid draw length: {}", reason),
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_INVALID_INPUT,
            message,
        )
    }

    pub fn missing_field(field: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_MISSING_FIELD,
            format!("Missing required field: {}", field),
        )
    }

    pub fn invalid_bet_id(bet_id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_INVALID_BET_ID,
            format!("Invalid bet ID: {}", bet_id),
        )
    }

    // Network error constructors
    pub fn persistence_failure(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Network,
            ErrorCode::NETWORK_PERSISTENCE,
            "Bet storage failed",
        )
        .with_context(error.to_string())
    }

    pub fn redis_error(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Network,
            ErrorCode::NETWORK_REDIS_CONNECTION,
            "Redis connection error",
        )
        .with_context(error.to_string())
    }

    // Collaborator error constructors
    pub fn identity_generation_failure(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_IDENTITY_GENERATION,
            "Bet identifier generation failed",
        )
        .with_context(error.to_string())
    }

    pub fn clock_failure(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_CLOCK,
            "Clock unavailable",
        )
        .with_context(error.to_string())
    }

    // Resource not found constructors
    pub fn bet_not_found(bet_id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::NotFound,
            ErrorCode::NOT_FOUND_BET,
            format!("Bet not found: {}", bet_id),
        )
    }

    // Internal error constructors
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_UNEXPECTED,
            message,
        )
    }

    pub fn serialization_error(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_SERIALIZATION,
            "Serialization error",
        )
        .with_context(error.to_string())
    }

    pub fn deserialization_error(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_DESERIALIZATION,
            "Stored bet could not be read",
        )
        .with_context(error.to_string())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "[{}] {}: {}", self.code, self.message, context)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

// Convenience type alias
pub type Result<T> = std::result::Result<T, ServiceError>;
