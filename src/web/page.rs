//! One-time resolution of the DOM collaborators.
//!
//! Every element is looked up exactly once at startup; each handle is a
//! typed `Option`, so an absent element disables only the effect that
//! targets it instead of failing the whole page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::SelectorConfig;

/// Resolved DOM collaborators.
pub(crate) struct PageHandles {
    /// Fixed navigation bar ("scrolled" class target).
    pub(crate) navbar: Option<Element>,
    /// Parallax header.
    pub(crate) header: Option<HtmlElement>,
    /// Header content block (fade target).
    pub(crate) header_content: Option<HtmlElement>,
    /// Profile image container (fade target).
    pub(crate) profile_image: Option<HtmlElement>,
    /// Section whose approach drives the header fade.
    pub(crate) trigger_section: Option<Element>,
    /// Page sections in document order, for nav highlighting.
    pub(crate) sections: Vec<HtmlElement>,
    /// Same-page navigation links ("active" class targets).
    pub(crate) nav_links: Vec<Element>,
    /// Citation count text element.
    pub(crate) citation_count: Option<Element>,
    /// Element wrapping the citation count line.
    pub(crate) citation_container: Option<HtmlElement>,
    /// Publication count text element.
    pub(crate) publication_count: Option<Element>,
    /// h-index text element.
    pub(crate) h_index: Option<Element>,
    /// Last-updated text element.
    pub(crate) last_updated: Option<Element>,
    /// "Recent publications" container.
    pub(crate) recent_container: Option<Element>,
    /// "All publications" container.
    pub(crate) all_container: Option<Element>,
}

impl PageHandles {
    /// Look up every configured collaborator once.
    pub(crate) fn resolve(document: &Document, selectors: &SelectorConfig) -> Self {
        let citation_count = document.get_element_by_id(&selectors.citation_count_id);
        // Fall back to the count's parent when no dedicated container
        // element exists on the page.
        let citation_container = document
            .get_element_by_id(&selectors.citation_container_id)
            .or_else(|| citation_count.as_ref().and_then(|el| el.parent_element()))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Self {
            navbar: document.get_element_by_id(&selectors.navbar_id),
            header: query_html(document, &selectors.header),
            header_content: query_html(document, &selectors.header_content),
            profile_image: query_html(document, &selectors.profile_image),
            trigger_section: query(document, &selectors.trigger_section),
            sections: query_all_html(document, &selectors.sections),
            nav_links: query_all(document, &selectors.nav_links),
            citation_count,
            citation_container,
            publication_count: document.get_element_by_id(&selectors.publication_count_id),
            h_index: document.get_element_by_id(&selectors.h_index_id),
            last_updated: document.get_element_by_id(&selectors.last_updated_id),
            recent_container: document.get_element_by_id(&selectors.recent_container_id),
            all_container: document.get_element_by_id(&selectors.all_container_id),
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                elements.push(element);
            }
        }
    }
    elements
}

fn query_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}
