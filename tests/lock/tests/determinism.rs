//! In-process determinism locks.
//!
//! - Repeated runs of the scripted manor session give identical lines.
//! - Search graphs and reports serialize to identical bytes across runs.
//! - Report directories written twice are byte-identical and verify.
//! - Nothing path- or time-dependent leaks into the hashed surfaces.
//! - Written report JSON is already in canonical form and names its graph.

use std::fs;
use std::path::Path;

use lock_tests::manor_script::{run_manor_script, MANOR_SCRIPT};
use roomplan_harness::config::ResolvedConfig;
use roomplan_harness::report::{
    verify_report_dir, write_report_dir, DIGEST_FILENAME, GRAPH_FILENAME, REPORT_FILENAME,
};
use roomplan_harness::runner::PlannerSession;
use roomplan_harness::world::RoomWorld;
use roomplan_harness::worlds::{builtin_map, BUILTIN_MAPS};
use roomplan_kernel::identity::fingerprint::state_fingerprint;
use roomplan_kernel::model::compile::compile_map;
use roomplan_kernel::model::goal::GoalSpecV1;
use roomplan_kernel::transition::cost::CostTableV1;
use roomplan_search::policy::SearchPolicyV1;
use roomplan_search::search::search;

fn value<'a>(lines: &'a [String], key: &str) -> Vec<&'a str> {
    let prefix = format!("{key}=");
    lines
        .iter()
        .filter_map(|line| line.strip_prefix(prefix.as_str()))
        .collect()
}

#[test]
fn manor_script_is_stable_n10() {
    let first = run_manor_script().expect("script runs");
    for i in 1..=10 {
        let again = run_manor_script().expect("script runs");
        assert_eq!(first, again, "run {i} diverged");
    }
}

#[test]
fn manor_script_outcomes() {
    let lines = run_manor_script().expect("script runs");
    assert_eq!(value(&lines, "command"), MANOR_SCRIPT.to_vec());
    let feedback = value(&lines, "feedback");
    assert_eq!(
        &feedback[..5],
        &[
            "Reached goal in 6 steps, cost 5.25",
            "Reached goal in 1 steps, cost 0.25",
            "Reached goal in 6 steps, cost 5.25",
            "Reached goal in 9 steps, cost 8.25",
            "Reached goal in 6 steps, cost 6",
        ]
    );
    assert!(feedback[5].contains("cellar"), "{}", feedback[5]);
    assert!(feedback[6].starts_with("Bad command"), "{}", feedback[6]);

    assert_eq!(
        value(&lines, "path")[0],
        "a -1-> b -1-> d -0.25-> d -1-> e -1-> f -1-> g"
    );
    assert_eq!(value(&lines, "report_digest").len(), 5);
    assert!(value(&lines, "graph_digest")
        .iter()
        .all(|d| d.starts_with("sha256:")));
    assert_eq!(value(&lines, "final_state").len(), 1);
}

#[test]
fn graph_and_report_bytes_are_identical_across_runs() {
    for name in BUILTIN_MAPS {
        let map = builtin_map(name).expect("builtin map");
        let start = compile_map(&map).expect("map compiles");
        let world = RoomWorld::new(*name, CostTableV1::default());
        let goal = GoalSpecV1 {
            room: start.rooms().last().map(|r| r.name.clone()),
            ..GoalSpecV1::default()
        };
        let pattern = goal.resolve(&start).expect("goal resolves");

        let run = || {
            search(&world, start.clone(), &pattern, &SearchPolicyV1::default())
                .expect("policy valid")
        };
        let a = run();
        let b = run();
        assert_eq!(
            a.graph.to_json_bytes().expect("graph serializes"),
            b.graph.to_json_bytes().expect("graph serializes"),
            "{name}"
        );
        assert_eq!(a.graph.digest().ok(), b.graph.digest().ok(), "{name}");
        assert_eq!(a.termination(), b.termination(), "{name}");
        assert_eq!(a.total_cost(), b.total_cost(), "{name}");
    }
}

#[test]
fn state_fingerprint_is_stable_across_compiles() {
    let a = compile_map(&builtin_map("manor").expect("manor")).expect("compiles");
    let b = compile_map(&builtin_map("MANOR").expect("manor")).expect("compiles");
    assert_eq!(state_fingerprint(&a), state_fingerprint(&b));
}

#[test]
fn report_dirs_are_byte_identical_and_path_free() {
    let write_manor_report = |dir: &Path| {
        let mut session = PlannerSession::new(
            "manor",
            &builtin_map("manor").expect("manor"),
            &ResolvedConfig::default(),
        )
        .expect("map compiles");
        let run = session.run_command("goto l").expect("reachable");
        write_report_dir(dir, &run.report, &run.graph).expect("write")
    };

    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");
    let d1 = write_manor_report(first.path());
    let d2 = write_manor_report(second.path());
    assert_eq!(d1, d2);

    for name in [REPORT_FILENAME, GRAPH_FILENAME, DIGEST_FILENAME] {
        let a = fs::read(first.path().join(name)).expect("read");
        let b = fs::read(second.path().join(name)).expect("read");
        assert_eq!(a, b, "{name} differs");
        let text = String::from_utf8(a).expect("utf-8");
        let tmp = first.path().to_string_lossy();
        assert!(!text.contains(tmp.as_ref()), "{name} embeds a path");
    }

    assert_eq!(verify_report_dir(first.path()).expect("verifies"), d1);
}

#[test]
fn written_report_json_is_canonical_and_names_its_graph() {
    let mut session = PlannerSession::new(
        "manor",
        &builtin_map("manor").expect("manor"),
        &ResolvedConfig::default(),
    )
    .expect("map compiles");
    let run = session.run_command("goto l").expect("reachable");
    let dir = tempfile::tempdir().expect("tempdir");
    write_report_dir(dir.path(), &run.report, &run.graph).expect("write");

    let bytes = fs::read(dir.path().join(REPORT_FILENAME)).expect("read");
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).expect("report parses");
    assert_eq!(
        serde_json::to_vec(&parsed).expect("reserializes"),
        bytes,
        "report bytes are not canonical"
    );

    assert_eq!(parsed["world_id"], "manor");
    assert_eq!(parsed["outcome"], "goal_reached");
    assert_eq!(parsed["final_room"], "l");
    assert_eq!(parsed["total_cost_millis"], 8_250);
    assert_eq!(parsed["steps"].as_array().map(Vec::len), Some(9));
    assert_eq!(
        parsed["search_graph_digest"],
        run.graph.digest().expect("graph digest").to_string()
    );
}
