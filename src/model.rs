//! Data structures describing the logical content of the sample document.
//!
//! The types here do not reference the rendering crate.  A [`ContentSequence`]
//! is an ordered list of [`ContentElement`] values; the order is the reading
//! order of the final PDF and is preserved exactly by the renderer in
//! [`crate::builder`].

use crate::style::{Pt, BODY_STYLE, HEADING_STYLE, TITLE_STYLE};

/// Glyph prefixed to every list item when it is rendered.
pub const BULLET: &str = "\u{2022} ";

/// Paragraph text together with the name of the style it is set in.
///
/// The text may contain the inline markup understood by
/// [`crate::richtext::parse_markup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledText {
    markup: String,
    style: String,
}

impl StyledText {
    /// Creates styled text from a markup string and a style name.
    pub fn new(markup: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
        }
    }

    /// Returns the markup text.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns the style name.
    pub fn style(&self) -> &str {
        &self.style
    }
}

/// A unit of document content the layout engine can place and paginate.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentElement {
    /// Document title.
    Title(StyledText),
    /// Section heading.
    Heading(StyledText),
    /// Body paragraph.
    Body(StyledText),
    /// Bulleted list item; the bullet glyph is added at render time.
    ListItem(StyledText),
    /// Vertical whitespace.
    Spacer(Pt),
    /// Explicit page break; following content starts on a new page.
    PageBreak,
}

impl ContentElement {
    /// Title in the default title style.
    pub fn title(markup: impl Into<String>) -> Self {
        Self::Title(StyledText::new(markup, TITLE_STYLE))
    }

    /// Heading in the default heading style.
    pub fn heading(markup: impl Into<String>) -> Self {
        Self::Heading(StyledText::new(markup, HEADING_STYLE))
    }

    /// Body paragraph in the default body style.
    pub fn body(markup: impl Into<String>) -> Self {
        Self::Body(StyledText::new(markup, BODY_STYLE))
    }

    /// List item, which reuses the body style.
    pub fn list_item(markup: impl Into<String>) -> Self {
        Self::ListItem(StyledText::new(markup, BODY_STYLE))
    }

    /// Spacer measured in inches.
    pub fn spacer_inches(inches: f64) -> Self {
        Self::Spacer(Pt::inches(inches))
    }

    /// Returns the styled text payload, if the element carries one.
    pub fn text(&self) -> Option<&StyledText> {
        match self {
            Self::Title(text) | Self::Heading(text) | Self::Body(text) | Self::ListItem(text) => {
                Some(text)
            }
            Self::Spacer(_) | Self::PageBreak => None,
        }
    }

    /// Returns the name of the style the element is rendered with, if any.
    pub fn style_name(&self) -> Option<&str> {
        self.text().map(StyledText::style)
    }

    /// Short lowercase label used in log output and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Heading(_) => "heading",
            Self::Body(_) => "paragraph",
            Self::ListItem(_) => "list item",
            Self::Spacer(_) => "spacer",
            Self::PageBreak => "page break",
        }
    }
}

/// Ordered list of content elements built through chaining calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentSequence {
    elements: Vec<ContentElement>,
}

impl ContentSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns the updated sequence.
    pub fn push(mut self, element: ContentElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Appends every element of `elements` in order.
    pub fn extend<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = ContentElement>,
    {
        self.elements.extend(elements);
        self
    }

    /// Appends a title paragraph.
    pub fn title(self, markup: impl Into<String>) -> Self {
        self.push(ContentElement::title(markup))
    }

    /// Appends a heading.
    pub fn heading(self, markup: impl Into<String>) -> Self {
        self.push(ContentElement::heading(markup))
    }

    /// Appends a body paragraph.
    pub fn body(self, markup: impl Into<String>) -> Self {
        self.push(ContentElement::body(markup))
    }

    /// Appends a list item.
    pub fn list_item(self, markup: impl Into<String>) -> Self {
        self.push(ContentElement::list_item(markup))
    }

    /// Appends a spacer of the given height in inches.
    pub fn spacer(self, inches: f64) -> Self {
        self.push(ContentElement::spacer_inches(inches))
    }

    /// Appends an explicit page break.
    pub fn page_break(self) -> Self {
        self.push(ContentElement::PageBreak)
    }

    /// Returns the elements in rendering order.
    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the distinct style names referenced by the sequence, in
    /// first-use order.
    pub fn style_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.elements.iter().filter_map(ContentElement::style_name) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl IntoIterator for ContentSequence {
    type Item = ContentElement;
    type IntoIter = std::vec::IntoIter<ContentElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl FromIterator<ContentElement> for ContentSequence {
    fn from_iter<I: IntoIterator<Item = ContentElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chaining_preserves_order() {
        let sequence = ContentSequence::new()
            .title("Doc")
            .spacer(0.2)
            .heading("Intro")
            .body("Text")
            .page_break()
            .list_item("Item");

        let kinds: Vec<_> = sequence.elements().iter().map(ContentElement::kind).collect();
        assert_eq!(
            kinds,
            ["title", "spacer", "heading", "paragraph", "page break", "list item"]
        );
    }

    #[test]
    fn list_items_reuse_the_body_style() {
        let item = ContentElement::list_item("Clean git history");
        assert_eq!(item.style_name(), Some(BODY_STYLE));
        assert_eq!(item.text().map(StyledText::markup), Some("Clean git history"));
    }

    #[test]
    fn spacers_and_breaks_carry_no_text() {
        assert!(ContentElement::spacer_inches(0.3).text().is_none());
        assert!(ContentElement::PageBreak.style_name().is_none());
        assert_eq!(ContentElement::spacer_inches(0.5), ContentElement::Spacer(Pt(36.0)));
    }

    #[test]
    fn style_names_are_deduplicated_in_first_use_order() {
        let sequence = ContentSequence::new()
            .body("a")
            .title("b")
            .list_item("c")
            .heading("d")
            .body("e");
        assert_eq!(
            sequence.style_names(),
            vec![BODY_STYLE, TITLE_STYLE, HEADING_STYLE]
        );
    }

    #[test]
    fn extend_and_collect_agree() {
        let parts = vec![ContentElement::heading("A"), ContentElement::PageBreak];
        let extended = ContentSequence::new().extend(parts.clone());
        let collected: ContentSequence = parts.into_iter().collect();
        assert_eq!(extended, collected);
        assert_eq!(extended.len(), 2);
    }
}
