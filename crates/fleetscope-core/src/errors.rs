use fleetscope_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using ClientHistoryError
pub type Result<T> = std::result::Result<T, ClientHistoryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the fleetscope history engine. Each kind maps to a stable error code
/// usable for programmatic handling, testing, and external API responses.
/// The diffing pipeline itself is total; every kind below originates in the
/// wire-translation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A wire timestamp is not a valid microsecond epoch value
    InvalidTimestamp,
    /// A stringified numeric wire field failed to parse
    InvalidNumber,
    /// A required wire field (e.g. `clientId`, `age`) is absent
    MissingField,
    /// Wire bytes failed JSON deserialization
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidTimestamp => "ERR_INVALID_TIMESTAMP",
            ExErrorKind::InvalidNumber => "ERR_INVALID_NUMBER",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification fields
/// for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    client_id: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            client_id: None,
            field: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add client ID context
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Add wire field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the client ID context, if any
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Get the wire field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(client_id) = &self.client_id {
            write!(f, " (client_id: {})", client_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for the wire-translation boundary
///
/// The diffing pipeline has no recoverable-error taxonomy of its own:
/// malformed optional wire data is modeled as absence, and these variants
/// cover only structurally invalid required data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientHistoryError {
    /// A wire timestamp could not be read as microseconds since the epoch
    #[error("Invalid microsecond timestamp: {value}")]
    InvalidTimestamp { value: String },

    /// A stringified 64-bit wire field failed to parse
    #[error("Invalid numeric value for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// A required wire field is absent
    #[error("Required field is absent: {field}")]
    MissingField { field: &'static str },

    /// Wire bytes failed JSON deserialization
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for ClientHistoryError {
    fn from(err: serde_json::Error) -> Self {
        ClientHistoryError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<ClientHistoryError> for ExError {
    fn from(err: ClientHistoryError) -> Self {
        match err {
            ClientHistoryError::InvalidTimestamp { value } => {
                ExError::new(ExErrorKind::InvalidTimestamp)
                    .with_message(format!("Invalid microsecond timestamp: {}", value))
            }

            ClientHistoryError::InvalidNumber { field, value } => {
                ExError::new(ExErrorKind::InvalidNumber)
                    .with_field(field)
                    .with_message(format!("Invalid numeric value: {}", value))
            }

            ClientHistoryError::MissingField { field } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_field(field)
                    .with_message("Required field is absent")
            }

            ClientHistoryError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
