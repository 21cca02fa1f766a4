//! Structured log events emitted during a drag.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use regrid_core::geometry::{Point, Size};
use regrid_core::semantic_event::SemanticEvent;
use regrid_layout::AxisCount;
use regrid_widgets::{GridAdapter, PlainCell, ReorderGrid};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use web_time::Instant;

struct Four;

impl GridAdapter for Four {
    type View = PlainCell<()>;
    type Region = ();

    fn item_count(&self) -> usize {
        4
    }

    fn row_count(&self) -> AxisCount {
        AxisCount::Fixed(1)
    }

    fn column_count(&self) -> AxisCount {
        AxisCount::Fixed(4)
    }

    fn view(&mut self, _index: usize) -> PlainCell<()> {
        PlainCell::new(())
    }
}

#[derive(Clone, Default)]
struct MessageCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for MessageCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        struct V {
            message: Option<String>,
        }
        impl tracing::field::Visit for V {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    self.message = Some(value.to_owned());
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = Some(format!("{value:?}").trim_matches('"').to_owned());
                }
            }
        }

        let mut visitor = V { message: None };
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.messages.lock().expect("capture lock").push(message);
        }
    }
}

#[test]
fn drag_lifecycle_is_logged() {
    let capture = MessageCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut grid = ReorderGrid::with_adapter(Four);
        grid.layout(Size::new(400.0, 100.0));
        grid.handle_semantic(&SemanticEvent::LongPress {
            pos: Point::new(50.0, 50.0),
            duration: Duration::from_millis(500),
        });
        for x in [250.0, 250.0, 900.0] {
            grid.handle_semantic(&SemanticEvent::DragMove {
                start: Point::ZERO,
                current: Point::new(x, 50.0),
            });
        }
        grid.handle_semantic(&SemanticEvent::DragCancel);
        for _ in 0..30 {
            grid.tick(Instant::now(), Duration::from_millis(16));
        }
    });

    let messages = capture.messages.lock().expect("capture lock").clone();
    for expected in [
        "grid.adapter_attached",
        "layout.metrics",
        "grid.drag_start",
        "grid.reorder",
        "grid.overlap_kept",
        "grid.settle_start",
        "grid.settled",
    ] {
        assert!(
            messages.iter().any(|m| m == expected),
            "missing {expected} in {messages:?}"
        );
    }
    assert_eq!(messages.iter().filter(|m| *m == "grid.reorder").count(), 1);
}
