#![forbid(unsafe_code)]

//! Touch gesture recognition: transforms raw pointer events into semantic events.
//!
//! [`GestureRecognizer`] is a stateful processor that converts raw
//! [`PointerEvent`] sequences into [`SemanticEvent`]s (tap, long press, and
//! the long-press drag that follows).
//!
//! # State Machine
//!
//! One contact is tracked at a time (the first pointer down). It moves
//! through:
//!
//! - **Pending**: down, not yet moved beyond the touch slop. Releasing emits
//!   `Tap`; holding past the threshold emits `LongPress` and enters Dragging.
//! - **Slopped**: moved beyond the touch slop before the long press fired.
//!   The contact is dead; releasing emits nothing.
//! - **Dragging**: long press fired. Moves emit `DragMove`, release emits
//!   `DragEnd`, cancel emits `DragCancel`.
//!
//! # Invariants
//!
//! 1. `Tap` and `LongPress` never both emit for the same contact.
//! 2. At most one contact is tracked; secondary pointers are ignored.
//! 3. After `reset()`, the recognizer is idle and emits nothing until the
//!    next down.
//!
//! # Failure Modes
//!
//! - If the host forgets to poll [`check_long_press`](GestureRecognizer::check_long_press),
//!   the long press still fires on the next pointer event past the threshold.
//! - A second `Down` for the tracked pointer (a lost `Up`) restarts the
//!   contact without emitting anything for the old one.

use std::time::Duration;

use web_time::Instant;

use crate::event::{PointerEvent, PointerEventKind, PointerId};
use crate::geometry::Point;
use crate::semantic_event::SemanticEvent;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for gesture recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Duration before a stationary contact triggers a long press (default: 500ms).
    pub long_press_threshold: Duration,
    /// Movement in pixels tolerated before a contact stops being a tap or
    /// long-press candidate (default: 8.0).
    pub touch_slop: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_threshold: Duration::from_millis(500),
            touch_slop: 8.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum ContactPhase {
    Pending,
    Slopped,
    Dragging { start: Point },
}

#[derive(Debug, Clone)]
struct Contact {
    pointer: PointerId,
    origin: Point,
    last: Point,
    down_at: Instant,
    phase: ContactPhase,
}

// ---------------------------------------------------------------------------
// GestureRecognizer
// ---------------------------------------------------------------------------

/// Stateful gesture recognizer for single-contact touch input.
///
/// Call [`process`](GestureRecognizer::process) for each incoming
/// [`PointerEvent`]. Call [`check_long_press`](GestureRecognizer::check_long_press)
/// periodically (e.g., on every frame tick) to detect long presses while the
/// finger is stationary.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    contact: Option<Contact>,
}

impl GestureRecognizer {
    /// Create a new gesture recognizer with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            contact: None,
        }
    }

    /// Process a raw event, returning any semantic events produced.
    ///
    /// Most events produce 0 or 1 semantic events. An event arriving after an
    /// unpolled long-press deadline produces the `LongPress` first.
    pub fn process(&mut self, event: &PointerEvent, now: Instant) -> Vec<SemanticEvent> {
        let mut out = Vec::with_capacity(2);

        let tracked = self.contact.as_ref().map(|c| c.pointer);
        if let Some(pointer) = tracked
            && pointer != event.pointer
        {
            return out;
        }

        if event.kind != PointerEventKind::Down
            && let Some(long_press) = self.check_long_press(now)
        {
            out.push(long_press);
        }

        match event.kind {
            PointerEventKind::Down => self.on_down(event, now),
            PointerEventKind::Move => self.on_move(event.pos, &mut out),
            PointerEventKind::Up => self.on_up(event.pos, &mut out),
            PointerEventKind::Cancel => {
                if let Some(contact) = self.contact.take()
                    && matches!(contact.phase, ContactPhase::Dragging { .. })
                {
                    out.push(SemanticEvent::DragCancel);
                }
            }
        }

        out
    }

    /// Check for long press timeout. Call periodically (e.g., on tick).
    ///
    /// Returns `Some(LongPress { .. })` once per contact, when it has been held
    /// within the touch slop beyond the configured threshold.
    pub fn check_long_press(&mut self, now: Instant) -> Option<SemanticEvent> {
        let threshold = self.config.long_press_threshold;
        let contact = self.contact.as_mut()?;
        if contact.phase != ContactPhase::Pending {
            return None;
        }
        let held = now.saturating_duration_since(contact.down_at);
        if held < threshold {
            return None;
        }
        contact.phase = ContactPhase::Dragging {
            start: contact.last,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "gesture.long_press",
            x = contact.last.x,
            y = contact.last.y,
            held_ms = held.as_millis() as u64
        );

        Some(SemanticEvent::LongPress {
            pos: contact.last,
            duration: held,
        })
    }

    /// Whether a long-press drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.contact
            .as_ref()
            .is_some_and(|c| matches!(c.phase, ContactPhase::Dragging { .. }))
    }

    /// Where the current contact went down, if one is tracked.
    #[must_use]
    pub fn touch_origin(&self) -> Option<Point> {
        self.contact.as_ref().map(|c| c.origin)
    }

    /// Reset all gesture state to idle.
    pub fn reset(&mut self) {
        self.contact = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl GestureRecognizer {
    fn on_down(&mut self, event: &PointerEvent, now: Instant) {
        self.contact = Some(Contact {
            pointer: event.pointer,
            origin: event.pos,
            last: event.pos,
            down_at: now,
            phase: ContactPhase::Pending,
        });
    }

    fn on_move(&mut self, pos: Point, out: &mut Vec<SemanticEvent>) {
        let slop = self.config.touch_slop;
        let Some(contact) = self.contact.as_mut() else {
            return;
        };
        contact.last = pos;
        match contact.phase {
            ContactPhase::Pending => {
                if contact.origin.distance(pos) > slop {
                    contact.phase = ContactPhase::Slopped;
                }
            }
            ContactPhase::Slopped => {}
            ContactPhase::Dragging { start } => {
                out.push(SemanticEvent::DragMove {
                    start,
                    current: pos,
                });
            }
        }
    }

    fn on_up(&mut self, pos: Point, out: &mut Vec<SemanticEvent>) {
        let Some(contact) = self.contact.take() else {
            return;
        };
        match contact.phase {
            ContactPhase::Pending => out.push(SemanticEvent::Tap { pos }),
            ContactPhase::Slopped => {}
            ContactPhase::Dragging { start } => {
                out.push(SemanticEvent::DragEnd { start, end: pos });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);
    const MS_600: Duration = Duration::from_millis(600);

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    #[test]
    fn quick_release_is_tap() {
        let mut gr = recognizer();
        let t = Instant::now();

        assert!(gr.process(&PointerEvent::down(5.0, 5.0), t).is_empty());
        let events = gr.process(&PointerEvent::up(6.0, 5.0), t + MS_50);
        assert_eq!(
            events,
            vec![SemanticEvent::Tap {
                pos: Point::new(6.0, 5.0)
            }]
        );
    }

    #[test]
    fn movement_beyond_slop_kills_tap_and_long_press() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        gr.process(&PointerEvent::moved(40.0, 5.0), t + MS_50);
        assert_eq!(gr.check_long_press(t + MS_600), None);
        assert!(gr.process(&PointerEvent::up(40.0, 5.0), t + MS_600).is_empty());
    }

    #[test]
    fn long_press_fires_once_after_threshold() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        assert_eq!(gr.check_long_press(t + MS_100), None);
        let fired = gr.check_long_press(t + MS_600);
        assert!(matches!(
            fired,
            Some(SemanticEvent::LongPress { pos, .. }) if pos == Point::new(5.0, 5.0)
        ));
        assert!(gr.is_dragging());
        assert_eq!(gr.check_long_press(t + MS_600 + MS_100), None);
    }

    #[test]
    fn small_jitter_keeps_long_press_candidate() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        gr.process(&PointerEvent::moved(8.0, 7.0), t + MS_100);
        assert!(matches!(
            gr.check_long_press(t + MS_600),
            Some(SemanticEvent::LongPress { pos, .. }) if pos == Point::new(8.0, 7.0)
        ));
    }

    #[test]
    fn drag_sequence_after_long_press() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        gr.check_long_press(t + MS_600);

        let events = gr.process(&PointerEvent::moved(50.0, 60.0), t + MS_600 + MS_50);
        assert_eq!(
            events,
            vec![SemanticEvent::DragMove {
                start: Point::new(5.0, 5.0),
                current: Point::new(50.0, 60.0),
            }]
        );

        let events = gr.process(&PointerEvent::up(55.0, 65.0), t + MS_600 + MS_100);
        assert_eq!(
            events,
            vec![SemanticEvent::DragEnd {
                start: Point::new(5.0, 5.0),
                end: Point::new(55.0, 65.0),
            }]
        );
        assert!(!gr.is_dragging());
    }

    #[test]
    fn unpolled_long_press_fires_before_move() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        let events = gr.process(&PointerEvent::moved(30.0, 5.0), t + MS_600);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SemanticEvent::LongPress { .. }));
        assert!(matches!(events[1], SemanticEvent::DragMove { .. }));
    }

    #[test]
    fn cancel_during_drag_emits_drag_cancel() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        gr.check_long_press(t + MS_600);
        let events = gr.process(&PointerEvent::cancel(), t + MS_600 + MS_50);
        assert_eq!(events, vec![SemanticEvent::DragCancel]);
        assert!(!gr.is_dragging());
    }

    #[test]
    fn cancel_before_long_press_is_silent() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        assert!(gr.process(&PointerEvent::cancel(), t + MS_50).is_empty());
        assert_eq!(gr.touch_origin(), None);
    }

    #[test]
    fn secondary_pointer_is_ignored() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        let second = PointerEvent::down(90.0, 90.0).with_pointer(PointerId(1));
        assert!(gr.process(&second, t + MS_50).is_empty());
        assert_eq!(gr.touch_origin(), Some(Point::new(5.0, 5.0)));

        let up2 = PointerEvent::up(90.0, 90.0).with_pointer(PointerId(1));
        assert!(gr.process(&up2, t + MS_100).is_empty());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&PointerEvent::down(5.0, 5.0), t);
        gr.check_long_press(t + MS_600);
        gr.reset();
        assert!(!gr.is_dragging());
        assert!(gr.process(&PointerEvent::up(5.0, 5.0), t + MS_600).is_empty());
    }

    #[test]
    fn custom_threshold_applies() {
        let mut gr = GestureRecognizer::new(GestureConfig {
            long_press_threshold: MS_100,
            ..GestureConfig::default()
        });
        let t = Instant::now();
        gr.process(&PointerEvent::down(0.0, 0.0), t);
        assert!(gr.check_long_press(t + MS_100).is_some());
    }
}
