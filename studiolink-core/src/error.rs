use miette::Diagnostic;
use thiserror::Error;

/// Result type for studiolink operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown destination type '{kind}'")]
    #[diagnostic(
        code(studiolink::unknown_destination),
        help("valid types are: git, named-template, custom-template, prototype-prompt")
    )]
    UnknownDestinationKind { kind: String },

    #[error("malformed '{kind}' destination")]
    #[diagnostic(code(studiolink::malformed_destination))]
    MalformedDestination {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid button {field} '{value}'")]
    #[diagnostic(
        code(studiolink::invalid_button),
        help(
            "labels: open, try, export, continue; colors: dark, light, blue, bright, dynamic, dynamic-reverse; sizes: 20, 32; formats: svg, png"
        )
    )]
    InvalidButtonConfig { field: &'static str, value: String },

    #[error("unknown baseline environment '{value}'")]
    #[diagnostic(
        code(studiolink::unknown_baseline),
        help("baseline environments: flutter, stitch, html, react, angular, python")
    )]
    UnknownBaselineEnvironment { value: String },

    #[error("launching a workspace requires a browser document")]
    #[diagnostic(
        code(studiolink::unsupported_environment),
        help("use render_launch_page to produce a self-submitting HTML page instead")
    )]
    UnsupportedEnvironment,

    #[error("browser call '{operation}' failed: {message}")]
    #[diagnostic(code(studiolink::dom))]
    Dom {
        operation: &'static str,
        message: String,
    },

    #[error("failed to serialize workspace settings")]
    #[diagnostic(code(studiolink::settings))]
    Settings {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an invalid button config error
    pub fn invalid_button(field: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidButtonConfig {
            field,
            value: value.into(),
        }
    }

    /// Create a DOM error from a failed browser call
    pub fn dom(operation: &'static str, message: impl Into<String>) -> Self {
        Error::Dom {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_destination_message() {
        let err = Error::UnknownDestinationKind {
            kind: "zip".to_string(),
        };
        assert_eq!(err.to_string(), "unknown destination type 'zip'");
    }

    #[test]
    fn test_invalid_button_message() {
        let err = Error::invalid_button("size", "48");
        assert_eq!(err.to_string(), "invalid button size '48'");
        assert!(matches!(
            err,
            Error::InvalidButtonConfig { field: "size", .. }
        ));
    }
}
