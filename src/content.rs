//! The fixed content of the sample document.
//!
//! Every section is built by its own function so the elements a section emits
//! can be checked in isolation.  [`sample_document`] concatenates the sections
//! in reading order; the only page break sits between "Use Cases" and
//! "Technical Details".

use log::debug;

use crate::model::{ContentElement, ContentSequence};

/// Title shown at the top of the first page and stored as the PDF title.
pub const DOCUMENT_TITLE: &str = "Sample Document for Testing";

/// Features listed in the "Features of pdf2md" section.
pub const FEATURES: [&str; 5] = [
    "Command-line interface for easy integration",
    "Dry-run mode to preview PDF structure",
    "Verbose output for detailed processing information",
    "Automatic directory creation for output files",
    "Robust error handling with clear messages",
];

/// Items listed in the "Quality Standards" section.
pub const QUALITY_STANDARDS: [&str; 6] = [
    "Zero compiler warnings",
    "Zero clippy warnings",
    "All tests must pass",
    "Code coverage above 80%",
    "Comprehensive documentation",
    "Clean git history",
];

/// Gap between consecutive paragraphs of a section.
const PARAGRAPH_GAP: f64 = 0.2;
/// Gap closing a section.
const SECTION_GAP: f64 = 0.3;
/// Gap between an intro paragraph and the list or labels below it.
const LIST_LEAD_GAP: f64 = 0.1;
/// Gap after each list item.
const ITEM_GAP: f64 = 0.05;

/// Title paragraph followed by a spacer.
pub fn title_block() -> Vec<ContentElement> {
    vec![
        ContentElement::title(DOCUMENT_TITLE),
        ContentElement::spacer_inches(PARAGRAPH_GAP),
    ]
}

/// Italic metadata line under the title.
pub fn metadata_block() -> Vec<ContentElement> {
    vec![
        ContentElement::body("<i>A test PDF for pdf2md converter</i>"),
        ContentElement::spacer_inches(SECTION_GAP),
    ]
}

/// "Introduction" section.
pub fn introduction() -> Vec<ContentElement> {
    vec![
        ContentElement::heading("Introduction"),
        ContentElement::body(
            "This is a sample PDF document created for testing the pdf2md converter. \
             It contains structured text with multiple sections, paragraphs, and formatting \
             to validate the conversion process.",
        ),
        ContentElement::spacer_inches(PARAGRAPH_GAP),
        ContentElement::body(
            "The document includes various elements commonly found in PDF files, such as \
             headings, body text, lists, and multiple paragraphs. This helps ensure that \
             the converter can handle real-world PDF documents effectively.",
        ),
        ContentElement::spacer_inches(SECTION_GAP),
    ]
}

/// "Features of pdf2md" section with one bullet per entry of [`FEATURES`].
pub fn features() -> Vec<ContentElement> {
    let mut elements = vec![
        ContentElement::heading("Features of pdf2md"),
        ContentElement::body("The pdf2md tool provides several key features:"),
        ContentElement::spacer_inches(LIST_LEAD_GAP),
    ];
    elements.extend(bullet_list(&FEATURES));
    elements.push(ContentElement::spacer_inches(SECTION_GAP));
    elements
}

/// "Use Cases" section: three paragraphs opening with a bold label.
pub fn use_cases() -> Vec<ContentElement> {
    const CASES: [(&str, &str); 3] = [
        (
            "Documentation",
            "Convert PDF manuals to Markdown for documentation websites and wikis. \
             This makes content more accessible and easier to maintain.",
        ),
        (
            "Content Migration",
            "Move PDF content to Markdown-based content management systems or static \
             site generators like Jekyll, Hugo, or MkDocs.",
        ),
        (
            "Automation",
            "Integrate PDF processing into CI/CD pipelines for automated documentation \
             workflows and content publishing.",
        ),
    ];

    let mut elements = vec![
        ContentElement::heading("Use Cases"),
        ContentElement::body("The pdf2md converter is useful in several scenarios:"),
        ContentElement::spacer_inches(PARAGRAPH_GAP),
    ];

    for (index, (label, text)) in CASES.iter().enumerate() {
        elements.push(ContentElement::body(labelled(label, text)));
        let gap = if index + 1 == CASES.len() {
            SECTION_GAP
        } else {
            LIST_LEAD_GAP
        };
        elements.push(ContentElement::spacer_inches(gap));
    }
    elements
}

/// "Technical Details" section.
pub fn technical_details() -> Vec<ContentElement> {
    vec![
        ContentElement::heading("Technical Details"),
        ContentElement::body(
            "The pdf2md tool is built with Rust 2024 edition, ensuring memory safety, \
             performance, and reliability. It follows Test-Driven Development practices \
             with comprehensive test coverage.",
        ),
        ContentElement::spacer_inches(PARAGRAPH_GAP),
        ContentElement::body(
            "The architecture is modular, with separate components for CLI parsing, \
             PDF processing, and Markdown generation. This design makes the codebase \
             maintainable and extensible.",
        ),
        ContentElement::spacer_inches(SECTION_GAP),
    ]
}

/// "Quality Standards" section with one bullet per entry of [`QUALITY_STANDARDS`].
pub fn quality_standards() -> Vec<ContentElement> {
    let mut elements = vec![
        ContentElement::heading("Quality Standards"),
        ContentElement::body("The project adheres to strict quality standards:"),
        ContentElement::spacer_inches(LIST_LEAD_GAP),
    ];
    elements.extend(bullet_list(&QUALITY_STANDARDS));
    elements.push(ContentElement::spacer_inches(SECTION_GAP));
    elements
}

/// "Conclusion" section; the document ends here without a trailing spacer.
pub fn conclusion() -> Vec<ContentElement> {
    vec![
        ContentElement::heading("Conclusion"),
        ContentElement::body(
            "This sample document demonstrates the type of content that pdf2md can process. \
             The converter extracts text from PDFs and formats it as Markdown, making it \
             suitable for modern documentation workflows.",
        ),
        ContentElement::spacer_inches(PARAGRAPH_GAP),
        ContentElement::body(
            "For more information, visit the project repository or consult the documentation \
             in the docs/ directory. The tool is open source and contributions are welcome.",
        ),
    ]
}

/// Builds the complete sample document in reading order.
pub fn sample_document() -> ContentSequence {
    let sequence = ContentSequence::new()
        .extend(title_block())
        .extend(metadata_block())
        .extend(introduction())
        .extend(features())
        .extend(use_cases())
        .page_break()
        .extend(technical_details())
        .extend(quality_standards())
        .extend(conclusion());

    debug!("Built sample document with {} elements", sequence.len());
    sequence
}

fn bullet_list(items: &[&str]) -> Vec<ContentElement> {
    items
        .iter()
        .flat_map(|item| {
            [
                ContentElement::list_item(*item),
                ContentElement::spacer_inches(ITEM_GAP),
            ]
        })
        .collect()
}

fn labelled(label: &str, text: &str) -> String {
    format!("<b>{}:</b> {}", label, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::{parse_markup, plain_text};
    use crate::style::{Pt, StyleSheet, BODY_STYLE};

    fn headings(elements: &[ContentElement]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|element| match element {
                ContentElement::Heading(text) => Some(text.markup()),
                _ => None,
            })
            .collect()
    }

    fn list_items(elements: &[ContentElement]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|element| match element {
                ContentElement::ListItem(text) => Some(text.markup()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sections_appear_in_reading_order() {
        let document = sample_document();
        assert_eq!(
            headings(document.elements()),
            [
                "Introduction",
                "Features of pdf2md",
                "Use Cases",
                "Technical Details",
                "Quality Standards",
                "Conclusion",
            ]
        );
        assert_eq!(
            document.elements().first(),
            Some(&ContentElement::title(DOCUMENT_TITLE))
        );
    }

    #[test]
    fn exactly_one_page_break_before_technical_details() {
        let document = sample_document();
        let elements = document.elements();
        let breaks: Vec<_> = elements
            .iter()
            .enumerate()
            .filter(|(_, element)| matches!(element, ContentElement::PageBreak))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(breaks.len(), 1);
        assert_eq!(
            elements.get(breaks[0] + 1),
            Some(&ContentElement::heading("Technical Details"))
        );
        assert_eq!(
            headings(&elements[..breaks[0]]),
            ["Introduction", "Features of pdf2md", "Use Cases"]
        );
    }

    #[test]
    fn feature_list_pairs_items_with_small_spacers() {
        let section = features();
        assert_eq!(list_items(&section), FEATURES);
        let body = &section[3..3 + 2 * FEATURES.len()];
        for pair in body.chunks(2) {
            assert!(matches!(pair[0], ContentElement::ListItem(_)));
            assert_eq!(pair[1], ContentElement::spacer_inches(ITEM_GAP));
        }
        assert_eq!(
            section.last(),
            Some(&ContentElement::spacer_inches(SECTION_GAP))
        );
    }

    #[test]
    fn quality_standards_list_all_six_items() {
        let section = quality_standards();
        assert_eq!(list_items(&section), QUALITY_STANDARDS);
        assert_eq!(section.len(), 3 + 2 * QUALITY_STANDARDS.len() + 1);
    }

    #[test]
    fn use_cases_open_with_bold_labels() {
        let section = use_cases();
        let labels: Vec<_> = section
            .iter()
            .filter_map(|element| match element {
                ContentElement::Body(text) => {
                    let spans = parse_markup(text.markup()).expect("valid markup");
                    spans
                        .first()
                        .filter(|span| span.is_bold())
                        .map(|span| span.text().to_owned())
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            ["Documentation:", "Content Migration:", "Automation:"]
        );
        assert_eq!(
            section.last(),
            Some(&ContentElement::spacer_inches(SECTION_GAP))
        );
    }

    #[test]
    fn metadata_line_is_italic() {
        let block = metadata_block();
        let ContentElement::Body(text) = &block[0] else {
            panic!("metadata line should be a body paragraph");
        };
        let spans = parse_markup(text.markup()).unwrap();
        assert_eq!(spans.len(), 1);
        assert!(spans[0].is_italic());
        assert_eq!(plain_text(&spans), "A test PDF for pdf2md converter");
    }

    #[test]
    fn conclusion_ends_without_spacer() {
        let section = conclusion();
        assert_eq!(section.len(), 4);
        assert!(matches!(section.last(), Some(ContentElement::Body(_))));
    }

    #[test]
    fn every_referenced_style_is_defined() {
        let sheet = StyleSheet::fixture().unwrap();
        let document = sample_document();
        for name in document.style_names() {
            assert!(sheet.contains(name), "style `{}` missing", name);
        }
    }

    #[test]
    fn all_markup_parses() {
        for element in sample_document().elements() {
            if let Some(text) = element.text() {
                parse_markup(text.markup())
                    .unwrap_or_else(|err| panic!("{}: {}", text.markup(), err));
            }
        }
    }

    #[test]
    fn list_items_use_body_style() {
        for element in sample_document().elements() {
            if let ContentElement::ListItem(text) = element {
                assert_eq!(text.style(), BODY_STYLE);
            }
        }
    }

    #[test]
    fn spacers_use_the_fixed_gap_sizes() {
        let allowed = [ITEM_GAP, LIST_LEAD_GAP, PARAGRAPH_GAP, SECTION_GAP].map(Pt::inches);
        for element in sample_document().elements() {
            if let ContentElement::Spacer(height) = element {
                assert!(allowed.contains(height), "unexpected spacer {:?}", height);
            }
        }
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(sample_document(), sample_document());
    }
}
