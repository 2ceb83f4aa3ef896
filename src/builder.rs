//! Turning a [`ContentSequence`] into a paginated PDF with `genpdf`.

use std::cell::Cell;
use std::rc::Rc;

use genpdf::elements::{PageBreak, Paragraph};
use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style;
use genpdf::{self, Element, Margins, PageDecorator, PaperSize, Size};
use log::debug;

use crate::elements::Spacer;
use crate::error::{GenerateError, Result};
use crate::model::{ContentElement, ContentSequence, StyledText, BULLET};
use crate::richtext::parse_markup;
use crate::style::{Pt, StyleError, StyleSheet};

/// Page margins, stored in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageMargins {
    /// Right margin.
    pub right: Pt,
    /// Left margin.
    pub left: Pt,
    /// Top margin.
    pub top: Pt,
    /// Bottom margin.
    pub bottom: Pt,
}

impl PageMargins {
    /// The same margin on every side.
    pub fn uniform(margin: Pt) -> Self {
        Self {
            right: margin,
            left: margin,
            top: margin,
            bottom: margin,
        }
    }
}

impl From<PageMargins> for Margins {
    fn from(margins: PageMargins) -> Self {
        Margins::trbl(
            margins.top.to_mm(),
            margins.right.to_mm(),
            margins.bottom.to_mm(),
            margins.left.to_mm(),
        )
    }
}

/// Number of pages laid out so far, shared with the page decorator.
#[derive(Clone, Debug, Default)]
pub struct PageCounter(Rc<Cell<usize>>);

impl PageCounter {
    /// Returns the current page count.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn next(&self) -> usize {
        let page = self.0.get() + 1;
        self.0.set(page);
        page
    }
}

/// Builder for `genpdf::Document` instances describing the page template.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    paper_size: Option<Size>,
    margins: Option<PageMargins>,
    title: Option<String>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with `genpdf` defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// US Letter paper with one-inch margins and a short bottom margin.
    pub fn letter() -> Self {
        Self::new()
            .with_paper_size(PaperSize::Letter)
            .with_margins(PageMargins {
                right: Pt(72.0),
                left: Pt(72.0),
                top: Pt(72.0),
                bottom: Pt(18.0),
            })
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: PageMargins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Sets the title stored in the document metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builds a configured `genpdf::Document` together with its page counter.
    pub fn build(self, font_family: FontFamily<FontData>) -> (genpdf::Document, PageCounter) {
        let mut document = genpdf::Document::new(font_family);

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        if let Some(title) = self.title {
            document.set_title(title);
        }

        let pages = PageCounter::default();
        let decorator = ConfiguredPageDecorator::new(self.margins.map(Margins::from), pages.clone());
        document.set_page_decorator(decorator);

        (document, pages)
    }
}

struct ConfiguredPageDecorator {
    pages: PageCounter,
    margins: Option<Margins>,
}

impl ConfiguredPageDecorator {
    fn new(margins: Option<Margins>, pages: PageCounter) -> Self {
        Self { pages, margins }
    }
}

impl PageDecorator for ConfiguredPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        _context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        _style: style::Style,
    ) -> std::result::Result<genpdf::render::Area<'a>, Error> {
        let page = self.pages.next();
        debug!("Laying out page {}", page);

        if let Some(margins) = self.margins {
            area.add_margins(margins);
        }

        Ok(area)
    }
}

/// A PDF rendered to memory.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// Serialized document.
    pub bytes: Vec<u8>,
    /// Number of pages the layout engine produced.
    pub pages: usize,
}

/// Checks that every style referenced by `sequence` is defined in `styles`.
pub fn validate_styles(sequence: &ContentSequence, styles: &StyleSheet) -> std::result::Result<(), StyleError> {
    for name in sequence.style_names() {
        styles.get(name)?;
    }
    Ok(())
}

/// Lays out `sequence` with `styles` on the page template described by
/// `builder` and serializes the result to memory.
///
/// Styles and markup are checked for every element before anything is handed
/// to the layout engine.
pub fn render_sequence(
    sequence: &ContentSequence,
    styles: &StyleSheet,
    builder: DocumentBuilder,
    font_family: FontFamily<FontData>,
) -> Result<RenderedPdf> {
    validate_styles(sequence, styles)?;

    let (mut document, pages) = builder.build(font_family);
    for element in sequence.elements() {
        push_element(&mut document, element, styles)?;
    }
    debug!("Rendering {} content elements", sequence.len());

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;

    Ok(RenderedPdf {
        bytes,
        pages: pages.get(),
    })
}

fn push_element(
    document: &mut genpdf::Document,
    element: &ContentElement,
    styles: &StyleSheet,
) -> Result<()> {
    match element {
        ContentElement::Title(text) | ContentElement::Heading(text) | ContentElement::Body(text) => {
            document.push(styled_paragraph(element.kind(), text, None, styles)?);
        }
        ContentElement::ListItem(text) => {
            document.push(styled_paragraph(element.kind(), text, Some(BULLET), styles)?);
        }
        ContentElement::Spacer(height) => document.push(Spacer::new(height.to_mm())),
        ContentElement::PageBreak => document.push(PageBreak::new()),
    }
    Ok(())
}

fn styled_paragraph(
    kind: &'static str,
    text: &StyledText,
    prefix: Option<&str>,
    styles: &StyleSheet,
) -> Result<impl Element> {
    let style = styles.get(text.style())?;
    let spans = parse_markup(text.markup()).map_err(|source| GenerateError::Markup {
        element: kind,
        text: text.markup().to_owned(),
        source,
    })?;

    let mut paragraph = Paragraph::default();
    if let Some(prefix) = prefix {
        paragraph.push(prefix);
    }
    for span in &spans {
        paragraph.push(span);
    }
    paragraph.set_alignment(style.alignment().into());

    let spacing = Margins::trbl(style.space_before().to_mm(), 0, style.space_after().to_mm(), 0);
    Ok(paragraph.padded(spacing).styled(style.to_text_style()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::mm_to_f64;
    use crate::style::{StyleDef, BODY_STYLE};

    #[test]
    fn letter_template_uses_short_bottom_margin() {
        let builder = DocumentBuilder::letter();
        let margins = builder.margins.expect("letter margins");
        assert_eq!(margins.bottom, Pt(18.0));
        assert_eq!(margins.left, Pt(72.0));
        assert_eq!(margins.right, Pt(72.0));
        assert_eq!(margins.top, Pt(72.0));
        assert!(builder.paper_size.is_some());
    }

    #[test]
    fn one_inch_margin_is_25_4_mm() {
        assert!((mm_to_f64(Pt(72.0).to_mm()) - 25.4).abs() < 1e-9);
        let uniform = PageMargins::uniform(Pt(36.0));
        assert_eq!(uniform.top, uniform.bottom);
    }

    #[test]
    fn page_counter_is_shared_between_clones() {
        let counter = PageCounter::default();
        let decorator_side = counter.clone();
        assert_eq!(decorator_side.next(), 1);
        assert_eq!(decorator_side.next(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn validation_reports_first_undefined_style() {
        let mut styles = StyleSheet::new();
        styles.define(StyleDef::new(BODY_STYLE)).unwrap();
        let sequence = ContentSequence::new().body("ok").heading("missing");
        assert_eq!(
            validate_styles(&sequence, &styles),
            Err(StyleError::Unknown("Heading".into()))
        );
    }

    #[test]
    fn bad_markup_names_the_element() {
        let styles = StyleSheet::fixture().unwrap();
        let text = StyledText::new("<b>open", BODY_STYLE);
        let err = styled_paragraph("list item", &text, Some(BULLET), &styles)
            .err()
            .expect("markup error");
        assert!(matches!(
            err,
            GenerateError::Markup { element: "list item", .. }
        ));
    }
}
