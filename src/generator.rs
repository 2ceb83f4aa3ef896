//! Generating the sample fixture file.

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::fonts::{FontData, FontFamily};
use log::info;

use crate::builder::{self, DocumentBuilder, RenderedPdf};
use crate::content::{self, DOCUMENT_TITLE};
use crate::error::{GenerateError, Result};
use crate::fonts;
use crate::style::StyleSheet;

/// Location of the fixture relative to the project root.
pub const DEFAULT_FIXTURE_PATH: &str = "tests/fixtures/sample.pdf";

/// The fixture path used when no output path is given.
pub fn default_output_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_FIXTURE_PATH)
}

/// Outcome of a successful [`generate`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Path the document was written to.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub bytes: usize,
    /// Number of pages in the document.
    pub pages: usize,
}

/// Renders the sample document to memory using the default font search.
pub fn render_sample() -> Result<RenderedPdf> {
    render_sample_with(fonts::default_font_family)
}

/// Renders the sample document to memory with fonts supplied by `load_fonts`.
///
/// Any error from `load_fonts` is reported as
/// [`GenerateError::CapabilityUnavailable`].
pub fn render_sample_with<F>(load_fonts: F) -> Result<RenderedPdf>
where
    F: FnOnce() -> std::result::Result<FontFamily<FontData>, genpdf::error::Error>,
{
    let styles = StyleSheet::fixture()?;
    let document = content::sample_document();

    let font_family = load_fonts().map_err(|err| GenerateError::CapabilityUnavailable {
        reason: err.to_string(),
    })?;

    let template = DocumentBuilder::letter().with_title(DOCUMENT_TITLE);
    builder::render_sequence(&document, &styles, template, font_family)
}

/// Generates the sample PDF at `output_path`, replacing any existing file.
///
/// The parent directory must already exist.  Nothing is written unless the
/// whole document rendered successfully.
pub fn generate(output_path: impl AsRef<Path>) -> Result<GenerationReport> {
    generate_with(output_path, fonts::default_font_family)
}

/// [`generate`] with fonts supplied by `load_fonts`.
pub fn generate_with<F>(output_path: impl AsRef<Path>, load_fonts: F) -> Result<GenerationReport>
where
    F: FnOnce() -> std::result::Result<FontFamily<FontData>, genpdf::error::Error>,
{
    let path = output_path.as_ref();
    let rendered = render_sample_with(load_fonts)?;

    fs::write(path, &rendered.bytes).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} ({} bytes, {} pages)",
        path.display(),
        rendered.bytes.len(),
        rendered.pages
    );

    Ok(GenerationReport {
        path: path.to_path_buf(),
        bytes: rendered.bytes.len(),
        pages: rendered.pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use std::io;

    fn no_fonts() -> std::result::Result<FontFamily<FontData>, genpdf::error::Error> {
        Err(genpdf::error::Error::new(
            "no fonts in test",
            io::Error::new(io::ErrorKind::NotFound, "font family not found"),
        ))
    }

    #[test]
    fn default_path_points_at_fixture_directory() {
        let path = default_output_path();
        assert!(path.is_absolute());
        assert!(path.ends_with("tests/fixtures/sample.pdf"));
    }

    #[test]
    fn missing_fonts_are_a_capability_failure_and_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.pdf");

        let err = generate_with(&target, no_fonts).unwrap_err();
        assert_eq!(err.kind(), FailureKind::CapabilityUnavailable);
        assert!(err.to_string().contains("no fonts in test"));
        assert!(!target.exists());
    }

    #[test]
    fn render_without_fonts_fails_before_layout() {
        let err = render_sample_with(no_fonts).unwrap_err();
        assert!(matches!(err, GenerateError::CapabilityUnavailable { .. }));
    }
}
