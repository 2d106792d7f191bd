//! Scholar document data model and its view derivations.
//!
//! The document is fetched fresh on every page load (the fetch bypasses
//! the cache) and is immutable once parsed: the "recent" and "all" views
//! are borrows of the same source sequence, never copies or reorderings.
//! Every field is optional at the consumer; absent values render as
//! placeholders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Placeholder shown when an optional stats field is absent.
pub const PLACEHOLDER: &str = "—";

/// A value the document may carry either as a number or a string
/// (`year`, `h_index`, `citations` in older exports).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// Numeric form.
    Number(f64),
    /// Textual form.
    Text(String),
}

impl NumberOrText {
    /// Numeric value, parsing the textual form when possible.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0".
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single publication entry. Immutable once parsed; the source document
/// order defines the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Publication {
    /// Publication title.
    pub title: Option<String>,
    /// Link target for the title.
    pub url: Option<String>,
    /// Publication year (number or string in the source document).
    pub year: Option<NumberOrText>,
    /// Formatted citation text.
    pub citation: Option<String>,
    /// Citation count for this entry.
    pub citations_count: u64,
    /// Abstract text.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
}

/// Whether and how the citation count line is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitationDisplay {
    /// Hide the citation container entirely.
    Hidden,
    /// Show the container with this text.
    Shown(String),
}

/// The fetched citation/publication document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScholarStats {
    /// Total citation count.
    pub citations: Option<NumberOrText>,
    /// Total publication count.
    pub publications: Option<NumberOrText>,
    /// h-index.
    pub h_index: Option<NumberOrText>,
    /// Human-readable refresh timestamp.
    pub last_updated: Option<String>,
    /// Publications in display order, most recent first.
    pub recent_publications: Vec<Publication>,
}

impl ScholarStats {
    /// Parse the scholar document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Parse`] when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        serde_json::from_str(json).map_err(FolioError::from)
    }

    /// First `n` publications in source order (the "recent" view).
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Publication] {
        let len = self.recent_publications.len().min(n);
        &self.recent_publications[..len]
    }

    /// Every publication in source order (the "all" view).
    #[must_use]
    pub fn all(&self) -> &[Publication] {
        &self.recent_publications
    }

    /// Citation display rule: the count is shown iff it is a finite
    /// number greater than zero; otherwise the whole container is hidden.
    #[must_use]
    pub fn citation_display(&self) -> CitationDisplay {
        match self.citations.as_ref().and_then(NumberOrText::as_number) {
            Some(c) if c.is_finite() && c > 0.0 => {
                CitationDisplay::Shown(format!("{}", c as u64))
            }
            _ => CitationDisplay::Hidden,
        }
    }

    /// Text for the publication-count field.
    #[must_use]
    pub fn publications_text(&self) -> String {
        optional_text(self.publications.as_ref())
    }

    /// Text for the h-index field.
    #[must_use]
    pub fn h_index_text(&self) -> String {
        optional_text(self.h_index.as_ref())
    }

    /// Text for the last-updated field.
    #[must_use]
    pub fn last_updated_text(&self) -> String {
        self.last_updated
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_owned())
    }
}

fn optional_text(value: Option<&NumberOrText>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_citations(citations: &str) -> ScholarStats {
        ScholarStats::from_json(&format!(r#"{{"citations": {citations}}}"#)).unwrap()
    }

    #[test]
    fn zero_citations_hide_the_container() {
        assert_eq!(doc_with_citations("0").citation_display(), CitationDisplay::Hidden);
        assert_eq!(doc_with_citations("-3").citation_display(), CitationDisplay::Hidden);
        assert_eq!(
            doc_with_citations("\"n/a\"").citation_display(),
            CitationDisplay::Hidden
        );
        assert_eq!(ScholarStats::default().citation_display(), CitationDisplay::Hidden);
    }

    #[test]
    fn positive_citations_are_shown_as_an_integer() {
        assert_eq!(
            doc_with_citations("12").citation_display(),
            CitationDisplay::Shown("12".to_owned())
        );
        // Textual numbers coerce, as the page always did.
        assert_eq!(
            doc_with_citations("\"12\"").citation_display(),
            CitationDisplay::Shown("12".to_owned())
        );
    }

    #[test]
    fn absent_fields_render_placeholders() {
        let stats = ScholarStats::default();
        assert_eq!(stats.publications_text(), PLACEHOLDER);
        assert_eq!(stats.h_index_text(), PLACEHOLDER);
        assert_eq!(stats.last_updated_text(), PLACEHOLDER);
    }

    #[test]
    fn numeric_and_textual_fields_render_plainly() {
        let stats = ScholarStats::from_json(
            r#"{"publications": 7, "h_index": "4*", "last_updated": "2026-08-01"}"#,
        )
        .unwrap();
        assert_eq!(stats.publications_text(), "7");
        assert_eq!(stats.h_index_text(), "4*");
        assert_eq!(stats.last_updated_text(), "2026-08-01");
    }

    #[test]
    fn recent_takes_the_first_three_in_order() {
        let stats = ScholarStats::from_json(
            r#"{"recent_publications": [
                {"title": "A"}, {"title": "B"}, {"title": "C"},
                {"title": "D"}, {"title": "E"}
            ]}"#,
        )
        .unwrap();
        let titles: Vec<_> = stats
            .recent(3)
            .iter()
            .map(|p| p.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(stats.all().len(), 5);
        assert_eq!(stats.all()[4].title.as_deref(), Some("E"));
    }

    #[test]
    fn recent_is_shorter_when_the_document_is() {
        let stats = ScholarStats::from_json(r#"{"recent_publications": [{"title": "A"}]}"#).unwrap();
        assert_eq!(stats.recent(3).len(), 1);
    }

    #[test]
    fn publication_fields_default_when_absent() {
        let stats = ScholarStats::from_json(r#"{"recent_publications": [{}]}"#).unwrap();
        let publication = &stats.all()[0];
        assert_eq!(publication.title, None);
        assert_eq!(publication.citations_count, 0);
        assert_eq!(publication.abstract_text, None);
    }

    #[test]
    fn year_accepts_number_or_string() {
        let stats = ScholarStats::from_json(
            r#"{"recent_publications": [{"year": 2024}, {"year": "in press"}]}"#,
        )
        .unwrap();
        assert_eq!(stats.all()[0].year.as_ref().unwrap().to_string(), "2024");
        assert_eq!(stats.all()[1].year.as_ref().unwrap().to_string(), "in press");
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = ScholarStats::from_json("{oops").unwrap_err();
        assert!(matches!(err, FolioError::Parse(_)));
    }
}
