//! Scholar document fetching and publication rendering.
//!
//! Three independent operations share nothing but the document URL: the
//! stats line, the recent list, and the full list each fetch the document
//! themselves (cache bypassed), so a slow or failed fetch never blocks
//! the others. Every failure is logged and swallowed; the target
//! container keeps whatever it last displayed. A container is cleared
//! only after a successful fetch and parse, so rendering is
//! all-or-nothing per call.

use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Request, RequestCache, RequestInit, Response, Window};

use super::page::PageHandles;
use crate::{
    config::DataConfig,
    error::FolioError,
    model::{CitationDisplay, ScholarStats},
    view::{AbstractToggle, PublicationItemView},
};

/// Fetch the document and populate the summary statistics fields, hiding
/// the citation line when the count is not a positive finite number.
pub(crate) async fn update_stats(window: &Window, handles: &PageHandles, data: &DataConfig) {
    match fetch_document(window, &data.stats_url).await {
        Ok(stats) => apply_stats(handles, &stats),
        Err(e) => log::error!("failed to update scholar stats: {e}"),
    }
}

/// Fetch the document and render the first few publications into the
/// "recent" container.
pub(crate) async fn update_recent_publications(
    window: &Window,
    document: &Document,
    handles: &PageHandles,
    data: &DataConfig,
) {
    let Some(container) = &handles.recent_container else {
        return;
    };
    if let Err(e) = render_list(
        window,
        document,
        container,
        &data.stats_url,
        "r",
        Some(data.recent_len),
    )
    .await
    {
        log::error!("failed to update recent publications: {e}");
    }
}

/// Fetch the document and render every publication into the "all"
/// container.
pub(crate) async fn update_all_publications(
    window: &Window,
    document: &Document,
    handles: &PageHandles,
    data: &DataConfig,
) {
    let Some(container) = &handles.all_container else {
        return;
    };
    if let Err(e) =
        render_list(window, document, container, &data.stats_url, "a", None).await
    {
        log::error!("failed to update all publications: {e}");
    }
}

/// GET the scholar document with the HTTP cache bypassed.
async fn fetch_document(window: &Window, url: &str) -> Result<ScholarStats, FolioError> {
    let init = RequestInit::new();
    init.set_cache(RequestCache::NoStore);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|e| fetch_error(&e))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_error(&e))?;
    let response: Response = response.dyn_into().map_err(|e| fetch_error(&e))?;
    if !response.ok() {
        return Err(FolioError::Fetch(format!("HTTP {}", response.status())));
    }

    let body = JsFuture::from(response.text().map_err(|e| fetch_error(&e))?)
        .await
        .map_err(|e| fetch_error(&e))?;
    let text = body
        .as_string()
        .ok_or_else(|| FolioError::Fetch("response body is not text".to_owned()))?;
    ScholarStats::from_json(&text)
}

fn fetch_error(value: &JsValue) -> FolioError {
    FolioError::Fetch(format!("{value:?}"))
}

fn apply_stats(handles: &PageHandles, stats: &ScholarStats) {
    if let Some(container) = &handles.citation_container {
        match stats.citation_display() {
            CitationDisplay::Hidden => {
                let _ = container.style().set_property("display", "none");
            }
            CitationDisplay::Shown(text) => {
                if let Some(el) = &handles.citation_count {
                    el.set_text_content(Some(&text));
                }
                let _ = container.style().remove_property("display");
            }
        }
    }

    if let Some(el) = &handles.publication_count {
        el.set_text_content(Some(&stats.publications_text()));
    }
    if let Some(el) = &handles.h_index {
        el.set_text_content(Some(&stats.h_index_text()));
    }
    if let Some(el) = &handles.last_updated {
        el.set_text_content(Some(&stats.last_updated_text()));
    }
}

/// Fetch, then clear and repopulate one publication container. The clear
/// happens only after a successful fetch and parse.
async fn render_list(
    window: &Window,
    document: &Document,
    container: &Element,
    url: &str,
    prefix: &str,
    limit: Option<usize>,
) -> Result<(), FolioError> {
    let stats = fetch_document(window, url).await?;
    let publications = limit.map_or_else(|| stats.all(), |n| stats.recent(n));

    container.set_inner_html("");
    for (index, publication) in publications.iter().enumerate() {
        let item_view = PublicationItemView::build(prefix, index, publication);
        match build_item(document, &item_view) {
            Ok(item) => {
                let _ = container.append_child(&item);
            }
            Err(e) => log::error!("failed to build publication item: {e:?}"),
        }
    }

    refresh_aos(window);
    Ok(())
}

/// Materialize one publication item: meta line, linked title, citation
/// line, and a toggle button driving an initially hidden abstract block.
/// All data lands in the DOM via `set_text_content` so markup-like text
/// stays literal.
fn build_item(document: &Document, item_view: &PublicationItemView) -> Result<Element, JsValue> {
    let item = element_with_class(document, "div", "publication-item")?;
    item.set_attribute("data-aos", "fade-up")?;

    let meta = element_with_class(document, "div", "publication-year")?;
    meta.set_text_content(Some(&item_view.meta_line));

    let heading = document.create_element("h3")?;
    let link = document.create_element("a")?;
    link.set_attribute("href", &item_view.href)?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener")?;
    link.set_text_content(Some(&item_view.title));
    let _ = heading.append_child(&link)?;

    let citation = element_with_class(document, "p", "Journal")?;
    citation.set_text_content(Some(&item_view.citation_line));

    let button = element_with_class(document, "button", "abstract-toggle")?;
    let abstract_el = element_with_class(document, "div", "abstract")?;
    abstract_el.set_id(&item_view.abstract_id);
    abstract_el.set_text_content(Some(&item_view.abstract_text));

    let mut toggle = AbstractToggle::new();
    button.set_text_content(Some(toggle.label()));
    if let Some(el) = abstract_el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("display", toggle.display());
    }

    // Per-item click closure; the toggle state lives inside it.
    {
        let closure_button = button.clone();
        let abstract_el = abstract_el.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            toggle.toggle();
            if let Some(el) = abstract_el.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("display", toggle.display());
            }
            closure_button.set_text_content(Some(toggle.label()));
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    for child in [&meta, &heading, &citation, &button, &abstract_el] {
        let _ = item.append_child(child)?;
    }
    Ok(item)
}

fn element_with_class(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

/// Best-effort `AOS.refresh()` so newly inserted items pick up their
/// reveal animation. Skipped when the library or its hook is absent.
fn refresh_aos(window: &Window) {
    let aos = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("AOS"))
        .unwrap_or(JsValue::UNDEFINED);
    if aos.is_undefined() || aos.is_null() {
        return;
    }
    let refresh = js_sys::Reflect::get(&aos, &JsValue::from_str("refresh"))
        .unwrap_or(JsValue::UNDEFINED);
    if let Some(function) = refresh.dyn_ref::<js_sys::Function>() {
        if function.call0(&aos).is_err() {
            log::warn!("AOS.refresh() failed");
        }
    }
}
