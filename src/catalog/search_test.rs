use crate::catalog::models::{Product, ProductCategory};
use crate::catalog::search::*;

fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        category: ProductCategory::Fruit,
        name: name.to_string(),
        description: String::new(),
        calories: 52.0,
        fats: 0.2,
        protein: 0.3,
        carbs: 14.0,
    }
}

#[test]
fn test_starts_idle() {
    let lifecycle = SearchLifecycle::new();
    assert_eq!(*lifecycle.phase(), SearchPhase::Idle);
}

#[test]
fn test_input_change_enters_pending() {
    let mut lifecycle = SearchLifecycle::new();
    lifecycle.input_changed("a");
    assert_eq!(*lifecycle.phase(), SearchPhase::Pending);
}

#[test]
fn test_empty_input_returns_to_idle() {
    let mut lifecycle = SearchLifecycle::new();
    lifecycle.input_changed("apple");
    lifecycle.input_changed("");
    assert_eq!(*lifecycle.phase(), SearchPhase::Idle);

    // Whitespace-only counts as empty too
    lifecycle.input_changed("   ");
    assert_eq!(*lifecycle.phase(), SearchPhase::Idle);
}

#[test]
fn test_empty_filter_issues_no_query() {
    let mut lifecycle = SearchLifecycle::new();
    assert!(lifecycle.query_started("").is_none());
    assert!(lifecycle.query_started("  ").is_none());
    assert_eq!(*lifecycle.phase(), SearchPhase::Idle);
}

#[test]
fn test_current_query_settles() {
    let mut lifecycle = SearchLifecycle::new();
    lifecycle.input_changed("apple");
    let token = lifecycle.query_started("apple").unwrap();

    let applied = lifecycle.query_resolved(token, QueryResult::Matches(vec![product(1, "apple")]));
    assert!(applied);
    assert_eq!(
        *lifecycle.phase(),
        SearchPhase::Settled(QueryResult::Matches(vec![product(1, "apple")]))
    );
}

#[test]
fn test_stale_response_discarded() {
    let mut lifecycle = SearchLifecycle::new();

    // Q1 issued for "ab"; the filter then changes to "abc" and Q2 is issued
    // before Q1 resolves.
    lifecycle.input_changed("ab");
    let q1 = lifecycle.query_started("ab").unwrap();
    lifecycle.input_changed("abc");
    let q2 = lifecycle.query_started("abc").unwrap();

    // Q2 resolves first, then Q1 arrives late.
    assert!(lifecycle.query_resolved(q2, QueryResult::Matches(vec![product(2, "abc match")])));
    assert!(!lifecycle.query_resolved(q1, QueryResult::Matches(vec![product(1, "ab match")])));

    // The rendered result set is Q2's, regardless of arrival order.
    assert_eq!(
        *lifecycle.phase(),
        SearchPhase::Settled(QueryResult::Matches(vec![product(2, "abc match")]))
    );
}

#[test]
fn test_response_after_input_change_discarded() {
    let mut lifecycle = SearchLifecycle::new();
    lifecycle.input_changed("ab");
    let token = lifecycle.query_started("ab").unwrap();

    // The user keeps typing while the lookup is in flight; no new query has
    // settled yet, but the response is already outdated.
    lifecycle.input_changed("abc");

    assert!(!lifecycle.query_resolved(token, QueryResult::Matches(vec![product(1, "ab")])));
    assert_eq!(*lifecycle.phase(), SearchPhase::Pending);
}

#[test]
fn test_clear_during_flight_discards_response() {
    let mut lifecycle = SearchLifecycle::new();
    lifecycle.input_changed("apple");
    let token = lifecycle.query_started("apple").unwrap();

    lifecycle.input_changed("");
    assert!(!lifecycle.query_resolved(token, QueryResult::Absent));
    assert_eq!(*lifecycle.phase(), SearchPhase::Idle);
}

#[test]
fn test_absent_distinct_from_empty_matches() {
    let absent = SearchPhase::Settled(QueryResult::Absent);
    let empty = SearchPhase::Settled(QueryResult::Matches(Vec::new()));

    assert_ne!(absent, empty);
    assert_ne!(absent, SearchPhase::Idle);
    assert_ne!(empty, SearchPhase::Idle);
}
