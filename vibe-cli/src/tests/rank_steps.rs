//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{cafes_fixture, write_utf8};
use super::*;
use crate::rank::run_rank_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RankWorld {
    _tmp: TempDir,
    scratch_dir: Utf8PathBuf,
    snapshot: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let scratch_dir =
            Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _tmp: tmp,
            scratch_dir,
            snapshot: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.into_iter().map(str::to_owned));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["vibe-radar".to_owned(), "rank".to_owned()];
        if let Some(snapshot) = self.snapshot.borrow().as_ref() {
            argv.push(snapshot.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

#[given("the sample cafe snapshot")]
fn sample_snapshot(#[from(world)] world: &RankWorld) {
    world.snapshot.replace(Some(cafes_fixture()));
}

#[given("no snapshot path")]
fn no_snapshot_path(#[from(world)] world: &RankWorld) {
    world.snapshot.replace(None);
}

#[given("a snapshot containing invalid JSON")]
fn invalid_snapshot(#[from(world)] world: &RankWorld) {
    let path = world.scratch_dir.join("broken.json");
    write_utf8(&path, b"[{ \"id\": 1,");
    world.snapshot.replace(Some(path));
}

#[given("the purpose study")]
fn purpose_study(#[from(world)] world: &RankWorld) {
    world.push_args(["--purpose", "study"]);
}

#[given("the preferences \"quiet,group\"")]
fn preferences_quiet_group(#[from(world)] world: &RankWorld) {
    world.push_args(["--prefer", "quiet,group"]);
}

#[given("the preferences \"quiet,vibes\"")]
fn preferences_with_unknown_name(#[from(world)] world: &RankWorld) {
    world.push_args(["--prefer", "quiet,vibes"]);
}

#[given("the output format json")]
fn output_format_json(#[from(world)] world: &RankWorld) {
    world.push_args(["--format", "json"]);
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rank(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rank_with(args, &mut *buffer)
        }
        Command::Nearby(_) => panic!("expected rank command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the rank command succeeds")]
fn rank_command_succeeds(#[from(world)] world: &RankWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

fn listed_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(". ").map(|(_, rest)| rest))
        .map(|rest| rest.split("  ").next().unwrap_or(rest).to_owned())
        .collect()
}

#[then("the ranked cafes are \"Quiet Corner\"")]
fn ranked_quiet_corner(#[from(world)] world: &RankWorld) {
    assert_eq!(listed_names(&world.stdout()), ["Quiet Corner"]);
}

#[then("the ranked cafes are \"Night Owl, Quiet Corner, Unsurveyed Espresso\"")]
fn ranked_by_group(#[from(world)] world: &RankWorld) {
    assert_eq!(
        listed_names(&world.stdout()),
        ["Night Owl", "Quiet Corner", "Unsurveyed Espresso"]
    );
}

#[then("the output is a JSON document listing 3 cafes")]
fn output_is_json(#[from(world)] world: &RankWorld) {
    let document: serde_json::Value =
        serde_json::from_str(&world.stdout()).expect("output should be JSON");
    let cafes = document["cafes"].as_array().expect("cafes array");
    assert_eq!(cafes.len(), 3);
}

#[then("the rank command fails because the snapshot path is missing")]
fn fails_missing_snapshot(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RANK_INPUT),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the rank command fails because the snapshot cannot be decoded")]
fn fails_decoding(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::ReadSnapshot(_) => {}
        other => panic!("expected ReadSnapshot, found {other:?}"),
    }
}

#[then("the rank command fails because the preference is unknown")]
fn fails_unknown_preference(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::InvalidVibeOption { field, .. } => assert_eq!(*field, ARG_PREFER),
        other => panic!("expected InvalidVibeOption, found {other:?}"),
    }
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(rank_for_study, "ranking a snapshot for the study purpose");
register_rank_scenario!(rank_by_group, "sorting a snapshot by group suitability");
register_rank_scenario!(rank_json_output, "emitting JSON output");
register_rank_scenario!(rank_missing_snapshot, "rejecting missing snapshot paths");
register_rank_scenario!(rank_malformed_snapshot, "rejecting malformed snapshots");
register_rank_scenario!(rank_unknown_preference, "rejecting unknown preferences");
