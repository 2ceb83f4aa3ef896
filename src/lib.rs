//! Generator for the structured sample PDF used as a test fixture.
//!
//! [`content::sample_document`] declares the document as an ordered
//! [`model::ContentSequence`]; [`builder::render_sequence`] lays it out with
//! `genpdf`; [`generate`] ties both together and writes the file.

pub mod builder;
pub mod content;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod logging;
pub mod model;
pub mod richtext;
pub mod style;

pub use error::{FailureKind, GenerateError};
pub use generator::{default_output_path, generate, render_sample, GenerationReport};
