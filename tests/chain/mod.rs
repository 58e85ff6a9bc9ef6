use std::fmt;
use std::sync::Arc;

use causal_error::{
    chain, serror, verror, werror, AggregateError, ChainError, ConfigError, Options, PlainError,
    SharedError,
};
use serde_json::json;

/// Four-level chain, outermost last: Root <- Mid <- Upper <- Top.
fn four_levels() -> [SharedError; 4] {
    let root: SharedError = Arc::new(PlainError::named("Root", "disk unplugged"));
    let mid: SharedError =
        Arc::new(verror!(Options::new().name("Mid").cause(Arc::clone(&root)), "read failed").unwrap());
    let upper: SharedError =
        Arc::new(werror!(Options::new().name("Upper").cause(Arc::clone(&mid)), "load failed").unwrap());
    let top: SharedError =
        Arc::new(serror!(Options::new().name("Top").cause(Arc::clone(&upper)), "request failed").unwrap());
    [root, mid, upper, top]
}

#[test]
fn info_merges_with_shallow_values_winning() {
    let e1 = verror!(Options::new().info_entry("a", 1).info_entry("shared", "e1"), "e1").unwrap();
    let e2 = verror!(
        Options::new().cause(e1).info_entry("b", 2).info_entry("shared", "e2"),
        "e2"
    )
    .unwrap();
    let e3 = verror!(
        Options::new().cause(e2).info_entry("c", 3).info_entry("shared", "e3"),
        "e3"
    )
    .unwrap();

    let info = chain::info(&e3);
    assert_eq!(
        info,
        *json!({ "a": 1, "b": 2, "c": 3, "shared": "e3" }).as_object().unwrap()
    );
}

#[test]
fn info_skips_links_without_info() {
    let base = verror!(Options::new().info_entry("errno", "ECONNRESET"), "socket").unwrap();
    let plain = PlainError::new("unrelated");
    let top = verror!(base, "call").unwrap();

    assert_eq!(chain::info(&top)["errno"], "ECONNRESET");
    assert!(chain::info(&plain).is_empty());
}

#[test]
fn info_returns_a_fresh_map() {
    let err = verror!(Options::new().info_entry("k", "v"), "msg").unwrap();
    let mut info = chain::info(&err);
    info.insert("k".into(), json!("changed"));
    assert_eq!(chain::info(&err)["k"], "v");
}

#[test]
fn causes_walks_nearest_first() {
    let [root, mid, upper, top] = four_levels();
    let walked: Vec<SharedError> = chain::causes(&*top).collect();

    assert_eq!(walked.len(), 3);
    assert!(Arc::ptr_eq(&walked[0], &upper));
    assert!(Arc::ptr_eq(&walked[1], &mid));
    assert!(Arc::ptr_eq(&walked[2], &root));
    assert_eq!(chain::causes(&*root).count(), 0);
}

#[test]
fn find_cause_by_name_returns_the_matching_error() {
    let [root, mid, upper, top] = four_levels();

    let found = chain::find_cause_by_name(&top, "Mid").unwrap().unwrap();
    assert!(Arc::ptr_eq(&found, &mid));

    let found = chain::find_cause_by_name(&top, "Top").unwrap().unwrap();
    assert!(Arc::ptr_eq(&found, &top));

    let found = chain::find_cause_by_name(&top, "Root").unwrap().unwrap();
    assert!(Arc::ptr_eq(&found, &root));

    assert!(chain::find_cause_by_name(&upper, "Top").unwrap().is_none());
    assert!(chain::find_cause_by_name(&top, "Missing").unwrap().is_none());
}

#[test]
fn find_cause_by_name_rejects_empty_name() {
    let [_, _, _, top] = four_levels();
    assert_eq!(chain::find_cause_by_name(&top, "").unwrap_err(), ConfigError::EmptyName);
    assert_eq!(chain::has_cause_with_name(&*top, "").unwrap_err(), ConfigError::EmptyName);
}

#[test]
fn has_cause_with_name_mirrors_find() {
    let [_, _, upper, top] = four_levels();
    assert!(chain::has_cause_with_name(&*top, "Root").unwrap());
    assert!(chain::has_cause_with_name(&*top, "Top").unwrap());
    assert!(!chain::has_cause_with_name(&*upper, "Top").unwrap());
}

#[test]
fn full_stack_concatenates_traces() {
    let single = verror!("alone").unwrap();
    assert_eq!(chain::full_stack(&single), single.stack());

    let [_, _, upper, top] = four_levels();
    let expected = format!("{}\ncaused by: {}", top.stack(), chain::full_stack(&*upper));
    assert_eq!(chain::full_stack(&*top), expected);
    assert_eq!(chain::full_stack(&*top).matches("\ncaused by: ").count(), 3);
}

#[test]
fn error_from_list_collapses() {
    assert!(chain::error_from_list(Vec::<SharedError>::new()).is_none());

    let only: SharedError = Arc::new(PlainError::new("only"));
    let same = chain::error_from_list([Arc::clone(&only)]).unwrap();
    assert!(Arc::ptr_eq(&same, &only));
    assert!(same.as_aggregate().is_none());

    let e1: SharedError = Arc::new(PlainError::new("e1"));
    let e2: SharedError = Arc::new(PlainError::new("e2"));
    let combined = chain::error_from_list([Arc::clone(&e1), Arc::clone(&e2)]).unwrap();
    let aggregate = combined.as_aggregate().unwrap();
    let errors = aggregate.errors();
    assert_eq!(errors.len(), 2);
    assert!(Arc::ptr_eq(&errors[0], &e1));
    assert!(Arc::ptr_eq(&errors[1], &e2));
    assert_eq!(combined.message(), "first of 2 errors: e1");
}

#[test]
fn error_for_each_visits_aggregates_in_order() {
    let agg = AggregateError::new([PlainError::new("a"), PlainError::new("b"), PlainError::new("c")])
        .unwrap();
    let mut seen = Vec::new();
    chain::error_for_each(&agg, |err| seen.push(err.message().to_owned()));
    assert_eq!(seen, ["a", "b", "c"]);

    let single = verror!("solo").unwrap();
    let mut calls = 0;
    chain::error_for_each(&single, |err| {
        calls += 1;
        assert_eq!(err.message(), "solo");
    });
    assert_eq!(calls, 1);
}

#[derive(Debug)]
struct Timeout {
    cause: SharedError,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Timeout: deadline elapsed")
    }
}

impl std::error::Error for Timeout {}

impl ChainError for Timeout {
    fn name(&self) -> &str {
        "Timeout"
    }

    fn message(&self) -> &str {
        "deadline elapsed"
    }

    fn direct_cause(&self) -> Option<SharedError> {
        Some(Arc::clone(&self.cause))
    }

    fn stack(&self) -> &str {
        "Timeout: deadline elapsed"
    }
}

#[test]
fn custom_implementors_join_chains() {
    let inner = verror!(Options::new().info_entry("attempt", 3), "poll").unwrap();
    let timeout: SharedError = Arc::new(Timeout { cause: Arc::new(inner) });
    let outer = verror!(Arc::clone(&timeout), "job failed").unwrap();

    assert_eq!(outer.message(), "job failed: deadline elapsed");
    assert_eq!(chain::info(&outer)["attempt"], 3);
    assert!(chain::has_cause_with_name(&outer, "Timeout").unwrap());
    assert_eq!(chain::causes(&outer).count(), 2);
}

#[test]
fn direct_cause_is_callable_on_shared_errors() {
    let [root, mid, _, top] = four_levels();

    assert!(root.direct_cause().is_none());
    assert!(Arc::ptr_eq(&mid.direct_cause().unwrap(), &root));

    let upper = top.direct_cause().unwrap();
    let below_upper = upper.direct_cause().unwrap();
    assert!(Arc::ptr_eq(&below_upper, &mid));
}

#[test]
fn inspect_cause_by_name_works_on_owned_errors() {
    let root = PlainError::named("IoError", "disk gone");
    let err = verror!(Options::new().name("SaveError").cause(root), "save failed").unwrap();

    let found = chain::inspect_cause_by_name(&err, "IoError", |e| e.message().to_owned()).unwrap();
    assert_eq!(found.as_deref(), Some("disk gone"));

    let head = chain::inspect_cause_by_name(&err, "SaveError", |e| e.name().to_owned()).unwrap();
    assert_eq!(head.as_deref(), Some("SaveError"));

    let missing = chain::inspect_cause_by_name(&err, "Missing", |_| ()).unwrap();
    assert!(missing.is_none());

    let empty = chain::inspect_cause_by_name(&err, "", |_| ());
    assert_eq!(empty.unwrap_err(), ConfigError::EmptyName);
}
