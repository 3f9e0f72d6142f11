use std::{cell::RefCell, sync::Once};

use log::{Level, LevelFilter, Log, Metadata};
use raycast::{Sphere, Vector3};

struct CaptureLogger;

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.with(|c| {
                c.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

// Test threads each get their own buffer, so parallel tests don't see each
// other's records.
fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Warn);
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
    f();
    CAPTURED.with(|c| c.take())
}

#[test]
fn negative_radius_warns() {
    let mut sphere = None;
    let records = capture(|| sphere = Some(Sphere::new(Vector3::ZERO, -3.0)));
    assert_eq!(sphere.unwrap().radius(), 1.0);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Warn);
    assert!(records[0].1.contains("radius -3"), "{}", records[0].1);
}

#[test]
fn nan_radius_warns() {
    let mut sphere = None;
    let records = capture(|| sphere = Some(Sphere::new(Vector3::X, f64::NAN)));
    let sphere = sphere.unwrap();
    assert_eq!(sphere.radius(), 1.0);
    assert_eq!(sphere.center(), Vector3::X);
    assert_eq!(records.len(), 1);
    assert!(records[0].1.contains("NaN"), "{}", records[0].1);
}

#[test]
fn invalid_center_and_radius_warn_separately() {
    let mut sphere = None;
    let records = capture(|| {
        sphere = Some(Sphere::new(Vector3::new(f64::NAN, 0.0, 0.0), 0.0));
    });
    assert_eq!(sphere.unwrap(), Sphere::default());
    assert_eq!(records.len(), 2);
    assert!(records[0].1.contains("center"));
    assert!(records[1].1.contains("radius"));
}

#[test]
fn valid_input_is_silent() {
    let records = capture(|| {
        Sphere::new(Vector3::new(1.0, 2.0, 3.0), 0.25);
    });
    assert!(records.is_empty());
}

#[test]
fn strict_constructor_does_not_log() {
    let records = capture(|| {
        assert!(Sphere::try_new(Vector3::ZERO, -1.0).is_err());
    });
    assert!(records.is_empty());
}
