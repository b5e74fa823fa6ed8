use index_grid_pathfinding::{search, Algorithm, SearchRequest};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }
    fn log(&self, record: &Record) {
        if record.level() == Level::Trace {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }
    }
    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

fn take_lines() -> Vec<String> {
    std::mem::take(&mut *CAPTURE.0.lock().unwrap())
}

/// Each expansion and each visit leaves one trace record. Kept in a single test because the
/// logger is process-wide.
#[test]
fn searches_trace_every_step() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);
    let request = SearchRequest::new(0, 8, 9);

    take_lines();
    let outcome = search(Algorithm::BreadthFirst, &request).unwrap();
    let visits = take_lines()
        .into_iter()
        .filter(|l| l.starts_with("Visiting "))
        .collect::<Vec<_>>();
    assert_eq!(visits.len(), outcome.cells.len());
    assert_eq!(visits[0], "Visiting 0 from None");
    assert_eq!(visits[2], "Visiting 3 from Some(0)");

    let outcome = search(Algorithm::DepthFirst, &request).unwrap();
    let visits = take_lines()
        .into_iter()
        .filter(|l| l.starts_with("Visiting "))
        .count();
    assert_eq!(visits, outcome.cells.len());

    search(Algorithm::AStar, &request).unwrap();
    let expansions = take_lines()
        .into_iter()
        .filter(|l| l.starts_with("Expanding node "))
        .count();
    // At least every cell of the returned path [0, 3, 6, 5, 8]
    assert!(expansions >= 5, "{expansions}");
}
