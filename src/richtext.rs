//! Inline emphasis for paragraph text.
//!
//! Paragraph payloads use a tiny tag-based markup subset: `<b>…</b>` for bold,
//! `<i>…</i>` for italic (tags may nest), and the entities `&amp;`, `&lt;`,
//! `&gt;` and `&quot;`.  [`parse_markup`] turns such a string into a list of
//! [`Span`]s that map one-to-one onto `genpdf` styled strings.

use std::fmt;

use genpdf::style::{Style, StyledString};

/// A run of text sharing the same emphasis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
}

impl Span {
    /// Creates a new span with the provided text and no emphasis.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Marks the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Converts the span to a [`StyledString`] carrying only its emphasis.
    ///
    /// Font size and color come from the paragraph style the string is
    /// rendered with.
    pub fn to_styled_string(&self) -> StyledString {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        StyledString::new(self.text.clone(), style)
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

/// Returns the text of `spans` with all markup removed.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Parse errors produced by [`parse_markup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    index: usize,
    message: String,
}

impl ParseError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte index in the original input string where the error was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description of the parsing error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.index)
    }
}

impl std::error::Error for ParseError {}

#[derive(Clone, Copy, Debug, Default)]
struct Emphasis {
    bold: bool,
    italic: bool,
}

impl Emphasis {
    fn span(self, text: String) -> Span {
        Span {
            text,
            bold: self.bold,
            italic: self.italic,
        }
    }

    fn with(mut self, tag: Tag) -> Self {
        match tag {
            Tag::Bold => self.bold = true,
            Tag::Italic => self.italic = true,
        }
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Bold,
    Italic,
}

impl Tag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "b" | "strong" => Some(Tag::Bold),
            "i" | "em" => Some(Tag::Italic),
            _ => None,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Tag::Bold => "bold span",
            Tag::Italic => "italic span",
        }
    }
}

const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
];

/// Parses inline markup into a list of [`Span`]s.
///
/// Adjacent text with identical emphasis ends up in a single span.  Unknown
/// tags, stray closing tags and unterminated spans are rejected with a
/// [`ParseError`] pointing at the offending byte.
pub fn parse_markup(input: &str) -> Result<Vec<Span>, ParseError> {
    let mut spans = Vec::new();
    let index = parse_inner(input, 0, Emphasis::default(), None, &mut spans)?;
    debug_assert_eq!(index, input.len());
    Ok(spans)
}

fn parse_inner(
    input: &str,
    mut index: usize,
    emphasis: Emphasis,
    open: Option<(Tag, usize)>,
    spans: &mut Vec<Span>,
) -> Result<usize, ParseError> {
    let mut buffer = String::new();

    while index < input.len() {
        let rest = &input[index..];

        if rest.starts_with('<') {
            let end = rest
                .find('>')
                .ok_or_else(|| ParseError::new(index, "unterminated tag; expected `>`"))?;
            let raw = &rest[1..end];
            let (closing, name) = match raw.strip_prefix('/') {
                Some(name) => (true, name),
                None => (false, raw),
            };
            let tag = Tag::from_name(name.trim()).ok_or_else(|| {
                ParseError::new(index, format!("unsupported tag `<{}>`", raw))
            })?;

            flush_buffer(&mut buffer, spans, emphasis);
            let after = index + end + 1;

            if closing {
                return match open {
                    Some((expected, _)) if expected == tag => Ok(after),
                    Some((expected, _)) => Err(ParseError::new(
                        index,
                        format!(
                            "mismatched closing tag `</{}>` inside {}",
                            name,
                            expected.description()
                        ),
                    )),
                    None => Err(ParseError::new(
                        index,
                        format!("closing tag `</{}>` without matching opening tag", name),
                    )),
                };
            }

            index = parse_inner(input, after, emphasis.with(tag), Some((tag, index)), spans)?;
            continue;
        }

        if rest.starts_with('&') {
            if let Some((entity, ch)) = ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity))
            {
                buffer.push(*ch);
                index += entity.len();
                continue;
            }
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        buffer.push(ch);
        index += ch.len_utf8();
    }

    if let Some((tag, start)) = open {
        return Err(ParseError::new(
            start,
            format!("unterminated {}", tag.description()),
        ));
    }

    flush_buffer(&mut buffer, spans, emphasis);
    Ok(index)
}

fn flush_buffer(buffer: &mut String, spans: &mut Vec<Span>, emphasis: Emphasis) {
    if buffer.is_empty() {
        return;
    }
    let text = std::mem::take(buffer);
    match spans.last_mut() {
        Some(last) if last.bold == emphasis.bold && last.italic == emphasis.italic => {
            last.text.push_str(&text);
        }
        _ => spans.push(emphasis.span(text)),
    }
}
