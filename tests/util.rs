//! Shared test utilities for integration tests
//!
//! Builds an offline snapshot directory in the same layout that
//! `upsolve snapshot` writes, so no test touches the network.

#![allow(dead_code)]

use assert_fs::prelude::*;
use serde_json::json;

pub const HANDLE: &str = "alice";

/// Wrap a result the way the API does.
fn ok(result: serde_json::Value) -> String
{
    json!({ "status": "OK", "result": result }).to_string()
}

/// Contests 100/101 are the two divisions of round 900; 102 is an
/// unrelated educational round; 103 was never entered.
///
/// Candidates (newest first) are: Loose, Paths, Div1 Hard, Edu Walk.
/// Tag ranking: 0 brute force:1, 1 data structures:1, 2 graphs:2, 3 dp:2.
pub fn make_round_fixture() -> assert_fs::TempDir
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    tmp.child("contests.json")
        .write_str(&ok(json!([
            { "id": 103, "name": "Codeforces Round 901 (Div. 2)", "phase": "FINISHED" },
            { "id": 102, "name": "Educational Codeforces Round 155 (Rated for Div. 2)", "phase": "FINISHED" },
            { "id": 101, "name": "Codeforces Round 900 (Div. 1)", "phase": "FINISHED", "startTimeSeconds": 1695047700 },
            { "id": 100, "name": "Codeforces Round 900 (Div. 2)", "phase": "FINISHED", "startTimeSeconds": 1695047700 }
        ])))
        .expect("write contests");

    tmp.child("problems.json")
        .write_str(&ok(json!({
            "problems": [
                { "contestId": 103, "index": "A", "name": "Untouched", "rating": 900, "tags": ["implementation"] },
                { "contestId": 102, "index": "B", "name": "Edu Walk", "rating": 1500, "tags": ["graphs", "dp"] },
                { "contestId": 102, "index": "A", "name": "Edu Sum", "rating": 1000, "tags": ["math"] },
                { "contestId": 101, "index": "B", "name": "Div1 Hard", "rating": 2400, "tags": ["dp", "data structures"] },
                { "contestId": 101, "index": "A", "name": "Sum", "rating": 1200, "tags": ["math"] },
                { "contestId": 100, "index": "B", "name": "Paths", "rating": 1400, "tags": ["graphs"] },
                { "contestId": 100, "index": "A", "name": "Sum", "rating": 800, "tags": ["math"] },
                { "index": "A", "name": "Loose", "tags": ["brute force"] }
            ],
            "problemStatistics": []
        })))
        .expect("write problems");

    tmp.child(format!("submissions-{HANDLE}.json"))
        .write_str(&ok(json!([
            { "id": 4, "contestId": 102, "problem": { "name": "Edu Walk", "index": "B" }, "verdict": "WRONG_ANSWER" },
            { "id": 3, "contestId": 102, "problem": { "name": "Edu Sum", "index": "A" }, "verdict": "OK" },
            { "id": 2, "contestId": 100, "problem": { "name": "Sum", "index": "A" }, "verdict": "OK" },
            { "id": 1, "problem": { "name": "Gym thing", "index": "A" }, "verdict": "OK" }
        ])))
        .expect("write submissions");

    tmp
}

/// Problem names from a `find --format json` document.
pub fn names(stdout: &[u8]) -> Vec<String>
{
    let v: serde_json::Value = serde_json::from_slice(stdout).expect("valid json");
    v.as_array()
        .expect("array")
        .iter()
        .map(|row| {
            row["problem_name"]
                .as_str()
                .expect("problem_name")
                .to_string()
        })
        .collect()
}
