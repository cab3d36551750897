//! Error Types
//!
//! Every failure in the lookup pipeline is terminal, so each variant carries
//! enough context to produce a one-line diagnostic for the user.

use thiserror::Error;

/// Result type for pipeline operations
pub type KibanaResult<T> = Result<T, KibanaError>;

/// Errors raised while correlating two applications and deriving the dashboard URL
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KibanaError {
    /// No application with this name exists in the targeted space
    #[error("app '{app}' does not exist in this org/space")]
    NotFound { app: String },

    /// The application has no binding for the requested service type
    #[error("app '{app}' is not bound to a {label} service")]
    NotBound { app: String, label: String },

    /// The two applications are bound to different service instances
    #[error("app and kibana do not share the same {label} service (kibana: '{kibana_service}', app: '{app_service}')")]
    CorrelationMismatch {
        label: String,
        kibana_service: String,
        app_service: String,
    },

    /// A structured response could not be decoded into the expected shape
    #[error("malformed response from {context}: {message}")]
    MalformedResponse { context: String, message: String },

    /// The status output carries no route for the application
    #[error("app '{app}' has no route")]
    NoRoute { app: String },

    /// The host CLI failed to run a command or reported an API error
    #[error("command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// The host CLI executable could not be started at all
    #[error("unable to start {binary}: {message}")]
    CommandUnavailable { binary: String, message: String },

    /// The persisted CLI session could not be used
    #[error("cf session error: {message}")]
    Session { message: String },

    /// Caller supplied an unusable value
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl KibanaError {
    pub fn malformed(context: impl Into<String>, message: impl ToString) -> Self {
        KibanaError::MalformedResponse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    pub fn command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        KibanaError::CommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn session(message: impl Into<String>) -> Self {
        KibanaError::Session { message: message.into() }
    }

    /// Report a binding failure against the application name rather than its GUID
    pub fn for_app(self, app: &str) -> Self {
        match self {
            KibanaError::NotBound { label, .. } => KibanaError::NotBound {
                app: app.to_string(),
                label,
            },
            other => other,
        }
    }
}
