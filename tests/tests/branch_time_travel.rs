//! Branch and time-travel URL resolution flows.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use trellis_tests::prelude::*;

#[test]
fn test_default_branch_is_main() {
    let api = ApiEndpoints::new("https://infra.example.com").unwrap();
    assert_eq!(
        api.graphql_url(None, None),
        "https://infra.example.com/graphql/main"
    );
}

#[test]
fn test_time_travel_query_matches_iso_millis() {
    let api = ApiEndpoints::new("https://infra.example.com").unwrap();
    let at = Utc.with_ymd_and_hms(2023, 6, 2, 14, 5, 9).unwrap();
    assert_eq!(
        api.graphql_url(Some("feature1"), Some(at)),
        "https://infra.example.com/graphql/feature1?at=2023-06-02T14:05:09.000Z"
    );
}

#[test]
fn test_diff_screen_urls() {
    let api = ApiEndpoints::new("https://infra.example.com").unwrap();
    assert_eq!(
        api.data_diff_url(Some("feature1")),
        "https://infra.example.com/diff/data?branch=feature1"
    );
    assert_eq!(
        api.schema_url(Some("feature1")),
        "https://infra.example.com/schema?branch=feature1"
    );
    // No branch selected: no dangling parameter.
    assert_eq!(api.data_diff_url(None), "https://infra.example.com/diff/data");
}

#[test]
fn test_screen_link_with_optional_params() {
    // A review screen links to an object scoped to the change's branch; the
    // time-travel param is only present when the user pinned an instant.
    let link = with_query_params(
        "/objects/device/dev-17",
        &[(qsp::BRANCH, Some("feature1")), (qsp::AT, None)],
    )
    .unwrap();
    assert_eq!(link, "/objects/device/dev-17?branch=feature1");

    let unscoped = with_query_params(
        "/objects/device/dev-17",
        &[(qsp::BRANCH, Some("")), (qsp::AT, None)],
    )
    .unwrap();
    assert_eq!(unscoped, "/objects/device/dev-17");
}

#[test]
fn test_params_round_trip_through_a_real_url() {
    let url = with_query_params(
        "https://infra.example.com/diff/data",
        &[
            (qsp::BRANCH, Some("feat/route leak")),
            ("limit", Some("50")),
        ],
    )
    .unwrap();

    let parsed = url::Url::parse(&url).unwrap();
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("branch".to_string(), "feat/route leak".to_string()),
            ("limit".to_string(), "50".to_string()),
        ]
    );
}
