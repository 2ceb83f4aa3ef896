//! Paragraph styles and the style sheet used to render the sample document.
//!
//! Styles are flat records.  A [`StyleDef`] names an optional base style and a
//! set of overrides; [`StyleSheet::define`] merges those overrides onto the
//! already-resolved base once, so looking a style up later never walks an
//! inheritance chain.

use std::collections::BTreeMap;

use genpdf::style::{Color, Style};
use genpdf::{Alignment, Mm};
use thiserror::Error;

use crate::elements::mm_from_f64;

/// Name of the centered title style.
pub const TITLE_STYLE: &str = "Title";
/// Name of the section heading style.
pub const HEADING_STYLE: &str = "Heading";
/// Name of the body paragraph style, also used for list items.
pub const BODY_STYLE: &str = "Body";

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;
const DEFAULT_FONT_SIZE: u8 = 10;
const BLACK: Color = Color::Rgb(0, 0, 0);

/// A length in typographic points (1/72 inch).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Pt(pub f64);

impl Pt {
    /// Creates a length from a value in inches.
    pub fn inches(value: f64) -> Self {
        Self(value * POINTS_PER_INCH)
    }

    /// Returns the raw value in points.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts the length into the millimetres used by `genpdf`.
    pub fn to_mm(self) -> Mm {
        mm_from_f64(self.0 * MM_PER_INCH / POINTS_PER_INCH)
    }
}

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    /// Left aligned text.
    #[default]
    Left,
    /// Centered text.
    Center,
    /// Right aligned text.
    Right,
}

impl From<TextAlignment> for Alignment {
    fn from(alignment: TextAlignment) -> Self {
        match alignment {
            TextAlignment::Left => Alignment::Left,
            TextAlignment::Center => Alignment::Center,
            TextAlignment::Right => Alignment::Right,
        }
    }
}

/// Errors raised while defining or looking up styles.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// A content element referenced a style that was never defined.
    #[error("style `{0}` is not defined")]
    Unknown(String),
    /// A style was derived from a base that is not defined yet.
    #[error("style `{style}` is based on undefined style `{base}`")]
    UnknownBase {
        /// Style being defined.
        style: String,
        /// Missing base style.
        base: String,
    },
    /// A style with the same name already exists in the sheet.
    #[error("style `{0}` is already defined")]
    Duplicate(String),
}

/// A fully resolved paragraph style.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    name: String,
    based_on: Option<String>,
    font_size: u8,
    color: Color,
    alignment: TextAlignment,
    bold: bool,
    space_before: Pt,
    space_after: Pt,
}

impl ParagraphStyle {
    fn root(name: String) -> Self {
        Self {
            name,
            based_on: None,
            font_size: DEFAULT_FONT_SIZE,
            color: BLACK,
            alignment: TextAlignment::Left,
            bold: false,
            space_before: Pt::default(),
            space_after: Pt::default(),
        }
    }

    /// Returns the style name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the style this one was derived from, if any.
    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the paragraph alignment.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Returns whether the whole paragraph is set in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns the vertical space inserted above the paragraph.
    pub fn space_before(&self) -> Pt {
        self.space_before
    }

    /// Returns the vertical space inserted below the paragraph.
    pub fn space_after(&self) -> Pt {
        self.space_after
    }

    /// Builds the `genpdf` text style applied to every span of the paragraph.
    pub fn to_text_style(&self) -> Style {
        let mut style = Style::new()
            .with_font_size(self.font_size)
            .with_color(self.color);
        if self.bold {
            style.set_bold();
        }
        style
    }
}

/// Definition of a style as a set of overrides on top of an optional base.
#[derive(Clone, Debug, Default)]
pub struct StyleDef {
    name: String,
    based_on: Option<String>,
    font_size: Option<u8>,
    color: Option<Color>,
    alignment: Option<TextAlignment>,
    bold: Option<bool>,
    space_before: Option<Pt>,
    space_after: Option<Pt>,
}

impl StyleDef {
    /// Starts a definition for the style called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Derives the style from `base`.
    pub fn based_on(mut self, base: impl Into<String>) -> Self {
        self.based_on = Some(base.into());
        self
    }

    /// Overrides the font size.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Overrides the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Overrides the alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Overrides the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Overrides the space above the paragraph.
    pub fn with_space_before(mut self, space: Pt) -> Self {
        self.space_before = Some(space);
        self
    }

    /// Overrides the space below the paragraph.
    pub fn with_space_after(mut self, space: Pt) -> Self {
        self.space_after = Some(space);
        self
    }

    fn resolve(self, base: Option<&ParagraphStyle>) -> ParagraphStyle {
        let mut resolved = match base {
            Some(base) => ParagraphStyle {
                name: self.name.clone(),
                based_on: Some(base.name.clone()),
                ..base.clone()
            },
            None => ParagraphStyle::root(self.name.clone()),
        };

        if let Some(font_size) = self.font_size {
            resolved.font_size = font_size;
        }
        if let Some(color) = self.color {
            resolved.color = color;
        }
        if let Some(alignment) = self.alignment {
            resolved.alignment = alignment;
        }
        if let Some(bold) = self.bold {
            resolved.bold = bold;
        }
        if let Some(space) = self.space_before {
            resolved.space_before = space;
        }
        if let Some(space) = self.space_after {
            resolved.space_after = space;
        }
        resolved
    }
}

/// Table of resolved styles addressed by name.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    styles: BTreeMap<String, ParagraphStyle>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The base styles every document starts from: `Normal`, `BodyText`,
    /// `Heading1` and `Heading2`.
    pub fn sample() -> Result<Self, StyleError> {
        let mut sheet = Self::new();
        sheet.define(StyleDef::new("Normal").with_font_size(DEFAULT_FONT_SIZE))?;
        sheet.define(
            StyleDef::new("BodyText")
                .based_on("Normal")
                .with_space_before(Pt(6.0)),
        )?;
        sheet.define(
            StyleDef::new("Heading1")
                .based_on("Normal")
                .with_font_size(18)
                .with_bold(true)
                .with_space_after(Pt(6.0)),
        )?;
        sheet.define(
            StyleDef::new("Heading2")
                .based_on("Normal")
                .with_font_size(14)
                .with_bold(true)
                .with_space_before(Pt(12.0))
                .with_space_after(Pt(6.0)),
        )?;
        Ok(sheet)
    }

    /// The sample styles plus the title, heading and body styles used by the
    /// fixture document.
    pub fn fixture() -> Result<Self, StyleError> {
        let mut sheet = Self::sample()?;
        sheet.define(
            StyleDef::new(TITLE_STYLE)
                .based_on("Heading1")
                .with_font_size(24)
                .with_color(BLACK)
                .with_space_after(Pt(30.0))
                .with_alignment(TextAlignment::Center),
        )?;
        sheet.define(
            StyleDef::new(HEADING_STYLE)
                .based_on("Heading2")
                .with_font_size(16)
                .with_color(BLACK)
                .with_space_after(Pt(12.0))
                .with_space_before(Pt(12.0)),
        )?;
        sheet.define(StyleDef::new(BODY_STYLE).based_on("BodyText"))?;
        Ok(sheet)
    }

    /// Resolves `def` against its base and adds it to the sheet.
    pub fn define(&mut self, def: StyleDef) -> Result<&ParagraphStyle, StyleError> {
        if self.styles.contains_key(&def.name) {
            return Err(StyleError::Duplicate(def.name));
        }

        let base = match &def.based_on {
            Some(base) => Some(self.styles.get(base).ok_or_else(|| StyleError::UnknownBase {
                style: def.name.clone(),
                base: base.clone(),
            })?),
            None => None,
        };

        let resolved = def.resolve(base);
        let name = resolved.name.clone();
        Ok(self.styles.entry(name).or_insert(resolved))
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Result<&ParagraphStyle, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::Unknown(name.to_owned()))
    }

    /// Returns whether a style called `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Number of defined styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` when no style is defined.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_style_inherits_unset_attributes() {
        let sheet = StyleSheet::fixture().expect("fixture styles");
        let title = sheet.get(TITLE_STYLE).unwrap();
        assert_eq!(title.based_on(), Some("Heading1"));
        assert_eq!(title.font_size(), 24);
        assert!(title.is_bold(), "bold is inherited from Heading1");
        assert_eq!(title.alignment(), TextAlignment::Center);
        assert_eq!(title.space_after(), Pt(30.0));
        assert_eq!(title.space_before(), Pt(0.0));
    }

    #[test]
    fn heading_has_spacing_on_both_sides() {
        let sheet = StyleSheet::fixture().unwrap();
        let heading = sheet.get(HEADING_STYLE).unwrap();
        assert_eq!(heading.font_size(), 16);
        assert_eq!(heading.space_before(), Pt(12.0));
        assert_eq!(heading.space_after(), Pt(12.0));
        assert_eq!(heading.alignment(), TextAlignment::Left);
    }

    #[test]
    fn body_is_an_unmodified_copy_of_body_text() {
        let sheet = StyleSheet::fixture().unwrap();
        let body = sheet.get(BODY_STYLE).unwrap();
        let body_text = sheet.get("BodyText").unwrap();
        assert_eq!(body.font_size(), body_text.font_size());
        assert_eq!(body.space_before(), body_text.space_before());
        assert_eq!(body.space_after(), body_text.space_after());
        assert!(!body.is_bold());
    }

    #[test]
    fn base_must_be_defined_first() {
        let mut sheet = StyleSheet::new();
        let err = sheet
            .define(StyleDef::new("Child").based_on("Parent"))
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownBase {
                style: "Child".into(),
                base: "Parent".into()
            }
        );
        assert!(sheet.is_empty());
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let mut sheet = StyleSheet::sample().unwrap();
        let err = sheet.define(StyleDef::new("Normal")).unwrap_err();
        assert_eq!(err, StyleError::Duplicate("Normal".into()));
        assert_eq!(sheet.len(), 4);
    }

    #[test]
    fn redefining_a_base_does_not_affect_resolved_children() {
        let mut sheet = StyleSheet::new();
        sheet.define(StyleDef::new("Base").with_font_size(12)).unwrap();
        sheet
            .define(StyleDef::new("Child").based_on("Base").with_bold(true))
            .unwrap();
        assert_eq!(sheet.get("Child").unwrap().font_size(), 12);
        assert!(!sheet.get("Base").unwrap().is_bold());
    }

    #[test]
    fn unknown_lookup_names_the_style() {
        let sheet = StyleSheet::sample().unwrap();
        assert_eq!(
            sheet.get("Caption").unwrap_err().to_string(),
            "style `Caption` is not defined"
        );
    }

    #[test]
    fn inches_convert_to_points() {
        assert_eq!(Pt::inches(0.5), Pt(36.0));
        assert!((Pt::inches(1.0).value() - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn text_style_reflects_bold_and_size() {
        let sheet = StyleSheet::fixture().unwrap();
        let style = sheet.get(HEADING_STYLE).unwrap().to_text_style();
        assert!(style.is_bold());
        assert_eq!(style.font_size(), 16);
        assert_eq!(style.color(), Some(BLACK));
    }
}
