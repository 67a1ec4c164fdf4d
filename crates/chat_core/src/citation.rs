//! Citation block formatting
//!
//! Folds an answer and its source documents into the final assistant
//! turn content. The format is deterministic: sources keep backend
//! order, and page numbers are appended only when present.

use crate::protocol::SourceDoc;

const SOURCES_PREFIX: &str = "\u{1F4CE} Sources: ";

/// Build assistant turn content from an answer and its sources.
///
/// With no sources the content is exactly the answer text; otherwise
/// the answer is followed by a blank line and a single citation line.
pub fn format_answer(answer: &str, sources: &[SourceDoc]) -> String {
    if sources.is_empty() {
        return answer.to_string();
    }

    let labels: Vec<String> = sources
        .iter()
        .map(|doc| match doc.page {
            Some(page) => format!("{} (p. {})", doc.source, page),
            None => doc.source.clone(),
        })
        .collect();

    format!("{answer}\n\n{SOURCES_PREFIX}{}", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source: &str, page: Option<u32>) -> SourceDoc {
        SourceDoc {
            source: source.to_string(),
            page,
        }
    }

    #[test]
    fn test_no_sources_is_answer_only() {
        assert_eq!(format_answer("75% minimum", &[]), "75% minimum");
    }

    #[test]
    fn test_single_source_with_page() {
        let content = format_answer("75% minimum", &[doc("handbook.pdf", Some(12))]);
        assert_eq!(
            content,
            "75% minimum\n\n\u{1F4CE} Sources: handbook.pdf (p. 12)"
        );
    }

    #[test]
    fn test_source_without_page_has_no_page_suffix() {
        let content = format_answer("See the fee circular.", &[doc("fees.pdf", None)]);
        assert!(content.ends_with("Sources: fees.pdf"));
    }

    #[test]
    fn test_sources_keep_backend_order() {
        let content = format_answer(
            "answer",
            &[doc("b.pdf", Some(2)), doc("a.pdf", None), doc("c.pdf", Some(9))],
        );
        assert!(content.ends_with("b.pdf (p. 2), a.pdf, c.pdf (p. 9)"));
    }
}
