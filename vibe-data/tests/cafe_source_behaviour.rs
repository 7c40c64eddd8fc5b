//! Behavioural tests for café fetching.
//!
//! These tests use [`StubCafeSource`] to exercise the "failure means no
//! cafés" contract of [`fetch_or_empty`] without a running backend.

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use vibe_core::{CafeQuery, CafeRecord, CafeSourceError, fetch_or_empty};
use vibe_data::source::test_support::StubCafeSource;

/// Records produced by the most recent fetch.
type ResultCell = RefCell<Vec<CafeRecord>>;

const CAFES_URL: &str = "http://localhost:8000/cafes";

#[fixture]
fn source() -> RefCell<Option<StubCafeSource>> {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(Vec::new())
}

fn sample_cafes() -> Vec<CafeRecord> {
    vec![
        CafeRecord::new(1, "Pilot", Coord { x: -79.38, y: 43.65 }).with_distance_km(0.2),
        CafeRecord::new(2, "Boxcar", Coord { x: -79.39, y: 43.66 }).with_distance_km(1.1),
    ]
}

fn install(source: &RefCell<Option<StubCafeSource>>, stub: StubCafeSource) {
    *source.borrow_mut() = Some(stub);
}

fn fetch(source: &RefCell<Option<StubCafeSource>>, result: &ResultCell, query: &CafeQuery) {
    let guard = source.borrow();
    let stub = guard.as_ref().expect("source must be initialised");
    *result.borrow_mut() = fetch_or_empty(stub, query);
}

// --- Given steps ---

#[given("a backend returning two cafés")]
fn backend_ok(#[from(source)] source: &RefCell<Option<StubCafeSource>>) {
    install(source, StubCafeSource::with_records(sample_cafes()));
}

#[given("a backend that fails with a network error")]
fn backend_network_error(#[from(source)] source: &RefCell<Option<StubCafeSource>>) {
    install(
        source,
        StubCafeSource::with_error(CafeSourceError::NetworkError {
            url: CAFES_URL.to_owned(),
            message: "connection refused".to_owned(),
        }),
    );
}

#[given("a backend that times out")]
fn backend_timeout(#[from(source)] source: &RefCell<Option<StubCafeSource>>) {
    install(
        source,
        StubCafeSource::with_error(CafeSourceError::Timeout {
            url: CAFES_URL.to_owned(),
            timeout_secs: 30,
        }),
    );
}

#[given("a backend answering with HTTP 500")]
fn backend_server_error(#[from(source)] source: &RefCell<Option<StubCafeSource>>) {
    install(
        source,
        StubCafeSource::with_error(CafeSourceError::HttpError {
            url: CAFES_URL.to_owned(),
            status: 500,
            message: "Internal Server Error".to_owned(),
        }),
    );
}

// --- When steps ---

#[when("I fetch cafés near downtown Toronto")]
fn fetch_default(
    #[from(source)] source: &RefCell<Option<StubCafeSource>>,
    #[from(result)] result: &ResultCell,
) {
    fetch(source, result, &CafeQuery::default());
}

#[when("I fetch cafés with a zero limit")]
fn fetch_zero_limit(
    #[from(source)] source: &RefCell<Option<StubCafeSource>>,
    #[from(result)] result: &ResultCell,
) {
    fetch(source, result, &CafeQuery::default().with_limit(0));
}

// --- Then steps ---

#[then("two cafés are returned")]
fn then_two(#[from(result)] result: &ResultCell) {
    let records = result.borrow();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Pilot", "Boxcar"], "source order must be kept");
}

#[then("no cafés are returned")]
fn then_none(#[from(result)] result: &ResultCell) {
    assert!(result.borrow().is_empty(), "expected no cafés");
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/cafe_source.feature", name = $title)]
        fn $fn_name(source: RefCell<Option<StubCafeSource>>, result: ResultCell) {
            let _ = (source, result);
        }
    };
}

register_scenario!(returning_cafes, "returning cafés from a healthy backend");
register_scenario!(network_error_means_no_cafes, "treating a network error as no cafés");
register_scenario!(timeout_means_no_cafes, "treating a timeout as no cafés");
register_scenario!(server_error_means_no_cafes, "treating a server error as no cafés");
register_scenario!(zero_limit_is_rejected, "rejecting a query with a zero limit");
