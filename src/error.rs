//! Errors reported by the generator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::richtext::ParseError;
use crate::style::StyleError;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Installation guidance shown when no usable font family can be found.
pub const INSTALL_HINT: &str = "Install a TrueType font family (for example `apt install fonts-liberation`) \
or copy Roboto-Regular/Bold/Italic/BoldItalic.ttf into assets/fonts, \
or point SAMPLE_PDF_FONTS_DIR at a directory containing them.";

/// The two failure kinds a caller has to distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The rendering engine cannot run at all in this environment.
    CapabilityUnavailable,
    /// Anything else that went wrong while building or writing the document.
    GenerationFailure,
}

/// Errors that can occur while generating the sample PDF.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No font family usable by the rendering engine could be loaded.
    #[error("PDF rendering fonts not available: {reason}")]
    CapabilityUnavailable {
        /// Description of every location that was searched.
        reason: String,
    },

    /// A style definition or lookup failed.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Paragraph text contained malformed inline markup.
    #[error("invalid markup in {element} `{text}`: {source}")]
    Markup {
        /// Kind of content element carrying the text.
        element: &'static str,
        /// The offending markup.
        text: String,
        /// Parser error.
        #[source]
        source: ParseError,
    },

    /// The layout engine failed while paginating or serializing the document.
    #[error("PDF rendering failed: {0}")]
    Render(#[from] genpdf::error::Error),

    /// The rendered document could not be written to disk.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Classifies the error into one of the two reported failure kinds.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::CapabilityUnavailable { .. } => FailureKind::CapabilityUnavailable,
            Self::Style(_) | Self::Markup { .. } | Self::Render(_) | Self::Write { .. } => {
                FailureKind::GenerationFailure
            }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            FailureKind::CapabilityUnavailable | FailureKind::GenerationFailure => 1,
        }
    }

    /// Remediation hint for errors the user can fix by installing something.
    pub fn remediation(&self) -> Option<&'static str> {
        match self.kind() {
            FailureKind::CapabilityUnavailable => Some(INSTALL_HINT),
            FailureKind::GenerationFailure => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn capability_errors_carry_install_hint() {
        let err = GenerateError::CapabilityUnavailable {
            reason: "no fonts".into(),
        };
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);
        assert_eq!(err.exit_code(), 1);
        assert!(err.remediation().unwrap().contains("SAMPLE_PDF_FONTS_DIR"));
        assert!(err.to_string().contains("no fonts"));
    }

    #[test]
    fn write_errors_are_generation_failures() {
        let err = GenerateError::Write {
            path: PathBuf::from("/missing/dir/out.pdf"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.kind(), FailureKind::GenerationFailure);
        assert_eq!(err.exit_code(), 1);
        assert!(err.remediation().is_none());
        assert!(err.to_string().contains("/missing/dir/out.pdf"));
        assert!(err.source().is_some());
    }

    #[test]
    fn style_errors_display_transparently() {
        let err = GenerateError::from(StyleError::Unknown("Caption".into()));
        assert_eq!(err.kind(), FailureKind::GenerationFailure);
        assert_eq!(err.to_string(), "style `Caption` is not defined");
    }
}
