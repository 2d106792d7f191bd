//! Scroll listener and per-frame effect application.
//!
//! A passive scroll listener consults the shared [`FrameGate`]; only the
//! first notification before the next repaint schedules a
//! `requestAnimationFrame` callback, so at most one update runs per
//! rendered frame regardless of scroll event frequency. The frame
//! callback samples live geometry, derives [`FrameEffects`], and applies
//! them. Missing elements are skipped silently.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Window};

use super::page::PageHandles;
use crate::{
    config::ScrollTuning,
    scroll::{FrameEffects, FrameGate, ScrollInputs, SectionTop},
};

/// Register the scroll listener and apply one initial frame so the page
/// reflects a restored scroll position before the first scroll event.
pub(crate) fn attach(
    window: &Window,
    handles: &Rc<PageHandles>,
    tuning: &ScrollTuning,
) -> Result<(), JsValue> {
    let gate = Rc::new(RefCell::new(FrameGate::new()));

    let frame_cb = {
        let window = window.clone();
        let handles = Rc::clone(handles);
        let gate = Rc::clone(&gate);
        let tuning = tuning.clone();
        Rc::new(Closure::<dyn FnMut()>::new(move || {
            apply_frame(&window, &handles, &tuning);
            gate.borrow_mut().finish();
        }))
    };

    let scroll_cb = {
        let window = window.clone();
        let gate = Rc::clone(&gate);
        let frame_cb = Rc::clone(&frame_cb);
        Closure::<dyn FnMut()>::new(move || {
            if gate.borrow_mut().request() {
                let scheduled = window
                    .request_animation_frame(frame_cb.as_ref().as_ref().unchecked_ref());
                if scheduled.is_err() {
                    // Could not schedule; re-arm so the next scroll
                    // notification tries again.
                    gate.borrow_mut().finish();
                }
            }
        })
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        scroll_cb.as_ref().unchecked_ref(),
        &options,
    )?;
    // The listener lives for the page; the frame closure is kept alive by
    // the forgotten scroll closure holding its Rc.
    scroll_cb.forget();

    apply_frame(window, handles, tuning);
    Ok(())
}

/// Sample live geometry, derive the frame's visual state, and apply it.
fn apply_frame(window: &Window, handles: &PageHandles, tuning: &ScrollTuning) {
    let inputs = sample(window, handles);
    let effects = FrameEffects::derive(&inputs, tuning);

    if let Some(navbar) = &handles.navbar {
        let _ = navbar
            .class_list()
            .toggle_with_force("scrolled", effects.navbar_scrolled);
    }

    if let Some(header) = &handles.header {
        let transform = format!("translate3d(0, {}px, 0)", effects.parallax_y);
        let _ = header.style().set_property("transform", &transform);
    }

    let active = effects.active_section.unwrap_or_default();
    for link in &handles.nav_links {
        let is_active = link
            .get_attribute("href")
            .is_some_and(|href| href.strip_prefix('#') == Some(active.as_str()));
        let _ = link.class_list().toggle_with_force("active", is_active);
    }

    if let Some(fade) = effects.header_fade {
        let opacity = fade.opacity.to_string();
        let transform = format!("translate3d(0, {}px, 0)", fade.rise_y);
        for target in [&handles.header_content, &handles.profile_image] {
            if let Some(el) = target {
                let _ = el.style().set_property("opacity", &opacity);
                let _ = el.style().set_property("transform", &transform);
            }
        }
    }
}

/// Read the frame's inputs from the live DOM.
fn sample(window: &Window, handles: &PageHandles) -> ScrollInputs {
    let y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|h| *h > 0.0)
        .unwrap_or(1.0);

    let sections = handles
        .sections
        .iter()
        .map(|section| SectionTop {
            id: section.id(),
            top: f64::from(section.offset_top()),
        })
        .collect();

    // The fade needs all three collaborators; otherwise it is disabled.
    let trigger_top = if handles.header_content.is_some() && handles.profile_image.is_some() {
        handles
            .trigger_section
            .as_ref()
            .map(|section| section.get_bounding_client_rect().top())
    } else {
        None
    };

    ScrollInputs {
        y,
        viewport_height,
        sections,
        trigger_top,
    }
}
