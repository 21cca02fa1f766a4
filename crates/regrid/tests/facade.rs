//! The facade prelude is enough to drive a grid end to end.

use std::time::Duration;

use regrid::prelude::*;
use web_time::Instant;

struct Words(Vec<&'static str>);

impl GridAdapter for Words {
    type View = PlainCell<&'static str>;
    type Region = ();

    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn row_count(&self) -> AxisCount {
        AxisCount::Fixed(2)
    }

    fn column_count(&self) -> AxisCount {
        AxisCount::Fixed(2)
    }

    fn view(&mut self, index: usize) -> PlainCell<&'static str> {
        PlainCell::new(self.0[index])
    }
}

#[test]
fn prelude_drives_a_drag() {
    let mut grid = ReorderGrid::with_adapter(Words(vec!["n", "e", "s", "w"]));
    grid.layout(Size::new(200.0, 200.0));

    let t = Instant::now();
    grid.handle_pointer(&PointerEvent::down(150.0, 150.0), t);
    let report = grid.tick(t + Duration::from_millis(550), Duration::from_millis(16));
    assert!(matches!(report.gesture, Some(GridResponse::DragStarted(_))));

    grid.handle_pointer(&PointerEvent::moved(50.0, 50.0), t + Duration::from_millis(600));
    grid.handle_pointer(&PointerEvent::up(50.0, 50.0), t + Duration::from_millis(620));
    while grid.phase() != GridPhase::Idle {
        grid.tick(t, Duration::from_millis(16));
    }

    let words: Vec<_> = grid
        .order()
        .iter()
        .filter_map(|id| grid.cell(*id))
        .map(|c| c.view().content)
        .collect();
    assert_eq!(words, vec!["w", "n", "e", "s"]);
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::other("boom").into();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.to_string(), "boom");
}

#[cfg(feature = "config")]
#[test]
fn load_config_picks_format_by_extension() {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    file.write_all(br#"{ "long_press_ms": 0 }"#).expect("write");
    let err = regrid::load_config(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(regrid::GridConfigError::Validation(_))));
}
