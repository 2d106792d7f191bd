//! Publication item view construction and the abstract toggle.
//!
//! [`PublicationItemView`] computes every string the DOM fragment for one
//! publication needs, so fallback rules and identifier uniqueness are
//! testable without a browser. All values are carried as plain text; the
//! browser layer inserts them via `set_text_content` only, so markup-like
//! publication data stays literal instead of being interpreted.

use std::fmt::Write as _;

use crate::model::{Publication, PLACEHOLDER};

/// Everything the DOM fragment for one publication item needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationItemView {
    /// Year / citation-count summary line.
    pub meta_line: String,
    /// Link text.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Formatted citation text line.
    pub citation_line: String,
    /// Abstract body text.
    pub abstract_text: String,
    /// Unique id for the abstract block, `abstract-{prefix}-{index}`.
    pub abstract_id: String,
}

impl PublicationItemView {
    /// Build the view for one publication.
    ///
    /// `prefix` keeps abstract ids distinct between the recent (`r`) and
    /// all (`a`) views; `index` is the item's position within its view.
    #[must_use]
    pub fn build(prefix: &str, index: usize, publication: &Publication) -> Self {
        let year = publication
            .year
            .as_ref()
            .map_or_else(|| PLACEHOLDER.to_owned(), ToString::to_string);
        let mut meta_line = format!("Year: {year}");
        if publication.citations_count > 0 {
            // Writing to a String cannot fail.
            let _ = write!(meta_line, " — Citations: {}", publication.citations_count);
        }

        Self {
            meta_line,
            title: publication
                .title
                .clone()
                .unwrap_or_else(|| "Untitled".to_owned()),
            href: publication.url.clone().unwrap_or_else(|| "#".to_owned()),
            citation_line: publication
                .citation
                .clone()
                .unwrap_or_else(|| "Citation not available".to_owned()),
            abstract_text: publication
                .abstract_text
                .clone()
                .unwrap_or_else(|| "Abstract not available".to_owned()),
            abstract_id: format!("abstract-{prefix}-{index}"),
        }
    }
}

/// Show/hide state machine for one abstract block.
///
/// Starts hidden with the "Show Abstract" label; toggling twice returns
/// to the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbstractToggle {
    visible: bool,
}

impl AbstractToggle {
    /// Initial state: hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self { visible: false }
    }

    /// Whether the abstract block is currently shown.
    #[must_use]
    pub const fn visible(self) -> bool {
        self.visible
    }

    /// CSS `display` value for the block in the current state.
    #[must_use]
    pub const fn display(self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }

    /// Toggle button label for the current state.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.visible {
            "Hide Abstract"
        } else {
            "Show Abstract"
        }
    }

    /// Flip visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NumberOrText;

    fn publication() -> Publication {
        Publication {
            title: Some("Deep Survey".to_owned()),
            url: Some("https://example.org/paper".to_owned()),
            year: Some(NumberOrText::Number(2024.0)),
            citation: Some("J. Examples 12(3), 2024".to_owned()),
            citations_count: 7,
            abstract_text: Some("We survey things.".to_owned()),
        }
    }

    #[test]
    fn meta_line_appends_citations_only_when_positive() {
        let view = PublicationItemView::build("r", 0, &publication());
        assert_eq!(view.meta_line, "Year: 2024 — Citations: 7");

        let mut uncited = publication();
        uncited.citations_count = 0;
        let view = PublicationItemView::build("r", 0, &uncited);
        assert_eq!(view.meta_line, "Year: 2024");
    }

    #[test]
    fn fallbacks_for_absent_fields() {
        let view = PublicationItemView::build("a", 2, &Publication::default());
        assert_eq!(view.title, "Untitled");
        assert_eq!(view.href, "#");
        assert_eq!(view.citation_line, "Citation not available");
        assert_eq!(view.abstract_text, "Abstract not available");
        assert_eq!(view.meta_line, format!("Year: {PLACEHOLDER}"));
    }

    #[test]
    fn abstract_ids_are_unique_across_views() {
        let publication = publication();
        let recent = PublicationItemView::build("r", 1, &publication);
        let all = PublicationItemView::build("a", 1, &publication);
        assert_eq!(recent.abstract_id, "abstract-r-1");
        assert_eq!(all.abstract_id, "abstract-a-1");
        assert_ne!(recent.abstract_id, all.abstract_id);
    }

    #[test]
    fn markup_like_data_stays_literal_text() {
        let mut publication = publication();
        publication.title = Some("<script>alert(1)</script>".to_owned());
        publication.abstract_text = Some("<img onerror=x>".to_owned());
        let view = PublicationItemView::build("r", 0, &publication);
        // Carried verbatim as text; the DOM layer only ever uses
        // set_text_content with these values.
        assert_eq!(view.title, "<script>alert(1)</script>");
        assert_eq!(view.abstract_text, "<img onerror=x>");
    }

    #[test]
    fn toggle_round_trips_to_the_initial_state() {
        let mut toggle = AbstractToggle::new();
        assert!(!toggle.visible());
        assert_eq!(toggle.display(), "none");
        assert_eq!(toggle.label(), "Show Abstract");

        toggle.toggle();
        assert!(toggle.visible());
        assert_eq!(toggle.display(), "block");
        assert_eq!(toggle.label(), "Hide Abstract");

        toggle.toggle();
        assert_eq!(toggle, AbstractToggle::new());
        assert_eq!(toggle.label(), "Show Abstract");
    }
}
