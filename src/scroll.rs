//! Scroll-driven visual state derivation.
//!
//! Pure computation: the browser layer samples live geometry into
//! [`ScrollInputs`] once per animation frame and applies the resulting
//! [`FrameEffects`] to the DOM. Nothing here touches the DOM, so every
//! property of the scroll behavior is testable natively.
//!
//! [`FrameGate`] is the coalescing latch that keeps it to one update per
//! rendered frame no matter how fast scroll events arrive.

use crate::config::ScrollTuning;

/// A page section eligible for nav highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTop {
    /// Section element id (empty when the section carries none).
    pub id: String,
    /// Top offset within the document, in pixels.
    pub top: f64,
}

/// Geometry sampled from the live DOM at the start of a frame.
///
/// Recomputed every frame and discarded afterwards; there is no cached
/// scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollInputs {
    /// Vertical scroll offset.
    pub y: f64,
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Top offsets of the page sections, in document order.
    pub sections: Vec<SectionTop>,
    /// Trigger section top relative to the viewport. `None` when any of
    /// the fade collaborators (trigger section, header content, profile
    /// image) is missing, which disables the fade entirely.
    pub trigger_top: Option<f64>,
}

/// Header fade state: opacity plus the vertical rise that accompanies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFade {
    /// Opacity in `[0, 1]`: 1 while the trigger section is a full
    /// viewport below, 0 once its top reaches the viewport top.
    pub opacity: f64,
    /// Vertical translation in pixels, `(1 - opacity) × fade_rise`.
    pub rise_y: f64,
}

/// Visual state derived for one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEffects {
    /// Whether the navbar shows its "scrolled" state.
    pub navbar_scrolled: bool,
    /// Header parallax translation along the vertical axis. Unclamped.
    pub parallax_y: f64,
    /// Id of the active section, or `None` when no section has been
    /// scrolled past yet.
    pub active_section: Option<String>,
    /// Header fade state, when the fade collaborators are present.
    pub header_fade: Option<HeaderFade>,
}

impl FrameEffects {
    /// Derive the frame's visual state from sampled geometry.
    #[must_use]
    pub fn derive(inputs: &ScrollInputs, tuning: &ScrollTuning) -> Self {
        let navbar_scrolled = inputs.y > tuning.navbar_threshold;
        let parallax_y = tuning.parallax_factor * inputs.y;

        // Last section scrolled past wins; later sections overwrite
        // earlier ones on overlapping ranges.
        let mut active_section = None;
        for section in &inputs.sections {
            if section.top - tuning.section_offset <= inputs.y {
                active_section = Some(section.id.clone());
            }
        }

        let header_fade = inputs.trigger_top.map(|top| {
            let height = if inputs.viewport_height > 0.0 {
                inputs.viewport_height
            } else {
                1.0
            };
            let opacity = (top / height).clamp(0.0, 1.0);
            HeaderFade {
                opacity,
                rise_y: (1.0 - opacity) * tuning.fade_rise,
            }
        });

        Self {
            navbar_scrolled,
            parallax_y,
            active_section,
            header_fade,
        }
    }
}

/// One-update-per-frame latch.
///
/// The scroll listener calls [`request`](Self::request) on every
/// notification; only the first one before the frame runs schedules a
/// callback, the rest are coalesced. The frame callback calls
/// [`finish`](Self::finish) after applying effects, re-arming the gate.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Create an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Returns `true` exactly when a frame callback should be scheduled.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Re-arm the gate once the frame callback has run.
    pub fn finish(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(y: f64) -> ScrollInputs {
        ScrollInputs {
            y,
            viewport_height: 800.0,
            sections: Vec::new(),
            trigger_top: None,
        }
    }

    fn sections(tops: &[(&str, f64)]) -> Vec<SectionTop> {
        tops.iter()
            .map(|(id, top)| SectionTop {
                id: (*id).to_owned(),
                top: *top,
            })
            .collect()
    }

    #[test]
    fn navbar_scrolled_iff_past_threshold() {
        let tuning = ScrollTuning::default();
        assert!(!FrameEffects::derive(&inputs(0.0), &tuning).navbar_scrolled);
        assert!(!FrameEffects::derive(&inputs(50.0), &tuning).navbar_scrolled);
        assert!(FrameEffects::derive(&inputs(50.5), &tuning).navbar_scrolled);
        assert!(FrameEffects::derive(&inputs(5000.0), &tuning).navbar_scrolled);
    }

    #[test]
    fn parallax_is_half_the_scroll_offset() {
        let tuning = ScrollTuning::default();
        assert_eq!(FrameEffects::derive(&inputs(0.0), &tuning).parallax_y, 0.0);
        assert_eq!(
            FrameEffects::derive(&inputs(650.0), &tuning).parallax_y,
            325.0
        );
        // Unclamped: arbitrarily deep scrolls keep scaling.
        assert_eq!(
            FrameEffects::derive(&inputs(100_000.0), &tuning).parallax_y,
            50_000.0
        );
    }

    #[test]
    fn active_section_is_last_one_scrolled_past() {
        let tuning = ScrollTuning::default();
        let mut input = inputs(650.0);
        input.sections = sections(&[("home", 0.0), ("research", 500.0), ("pubs", 1200.0)]);
        let effects = FrameEffects::derive(&input, &tuning);
        assert_eq!(effects.active_section.as_deref(), Some("research"));
    }

    #[test]
    fn no_section_qualifies_near_the_top() {
        let tuning = ScrollTuning::default();
        let mut input = inputs(0.0);
        input.sections = sections(&[("research", 500.0), ("pubs", 1200.0)]);
        let effects = FrameEffects::derive(&input, &tuning);
        assert_eq!(effects.active_section, None);
    }

    #[test]
    fn later_section_wins_ties() {
        let tuning = ScrollTuning::default();
        let mut input = inputs(300.0);
        input.sections = sections(&[("first", 500.0), ("second", 500.0)]);
        let effects = FrameEffects::derive(&input, &tuning);
        assert_eq!(effects.active_section.as_deref(), Some("second"));
    }

    #[test]
    fn section_boundary_is_inclusive() {
        // top - offset == y still qualifies.
        let tuning = ScrollTuning::default();
        let mut input = inputs(300.0);
        input.sections = sections(&[("edge", 500.0)]);
        let effects = FrameEffects::derive(&input, &tuning);
        assert_eq!(effects.active_section.as_deref(), Some("edge"));
    }

    #[test]
    fn header_fade_is_linear_between_endpoints() {
        let tuning = ScrollTuning::default();
        let mut input = inputs(0.0);

        // Trigger a full viewport below: fully opaque, no rise.
        input.trigger_top = Some(800.0);
        let fade = FrameEffects::derive(&input, &tuning).header_fade.unwrap();
        assert_eq!(fade.opacity, 1.0);
        assert_eq!(fade.rise_y, 0.0);

        // Trigger at (or above) the viewport top: fully faded, full rise.
        input.trigger_top = Some(0.0);
        let fade = FrameEffects::derive(&input, &tuning).header_fade.unwrap();
        assert_eq!(fade.opacity, 0.0);
        assert_eq!(fade.rise_y, -50.0);

        input.trigger_top = Some(-250.0);
        let fade = FrameEffects::derive(&input, &tuning).header_fade.unwrap();
        assert_eq!(fade.opacity, 0.0);

        // Halfway: linear.
        input.trigger_top = Some(400.0);
        let fade = FrameEffects::derive(&input, &tuning).header_fade.unwrap();
        assert_eq!(fade.opacity, 0.5);
        assert_eq!(fade.rise_y, -25.0);
    }

    #[test]
    fn header_fade_absent_without_trigger() {
        let tuning = ScrollTuning::default();
        let effects = FrameEffects::derive(&inputs(100.0), &tuning);
        assert_eq!(effects.header_fade, None);
    }

    #[test]
    fn frame_gate_coalesces_until_finished() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.finish();
        assert!(gate.request());
        assert!(!gate.request());
    }
}
