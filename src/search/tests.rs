//! Tests for the filter pass.

use super::*;

fn fruit() -> Vec<ListItem> {
    vec![
        ListItem::visible("Red Apple"),
        ListItem::hidden("Blue Apple"),
        ListItem::visible("Red Banana"),
    ]
}

fn shown(items: &[ListItem]) -> Vec<bool> {
    items.iter().map(ListItem::is_shown).collect()
}

#[test]
fn test_empty_query_restores_prior_partition() {
    let mut items = fruit();
    filter("red apple", &mut items);
    assert_eq!(shown(&items), [true, false, false]);

    filter("", &mut items);
    assert_eq!(shown(&items), [true, false, true]);
}

#[test]
fn test_empty_query_ignores_labels() {
    let mut items = vec![ListItem::hidden(""), ListItem::visible("")];
    filter("   ", &mut items);
    assert_eq!(shown(&items), [false, true]);
}

#[test]
fn test_single_term() {
    let mut items = fruit();
    let outcome = filter("red", &mut items);
    assert_eq!(shown(&items), [true, false, true]);
    assert_eq!(outcome.shown, 2);
    assert_eq!(outcome.not_shown, 1);
    assert_eq!(outcome.total(), 3);
}

#[test]
fn test_multiple_terms_use_and_semantics() {
    let mut items = fruit();
    filter("red apple", &mut items);
    assert_eq!(shown(&items), [true, false, false]);

    filter("apple", &mut items);
    assert_eq!(shown(&items), [true, true, false]);
}

#[test]
fn test_case_insensitive() {
    for query in ["cat", "CAT", "CaT"] {
        let mut items = vec![
            ListItem::visible("Concatenate"),
            ListItem::visible("Dog"),
        ];
        filter(query, &mut items);
        assert_eq!(shown(&items), [true, false], "query {query:?}");
    }
}

#[test]
fn test_substring_not_whole_word() {
    let mut items = vec![ListItem::hidden("concatenate")];
    filter("cat", &mut items);
    assert!(items[0].is_shown());
}

#[test]
fn test_matching_query_shows_hidden_items() {
    let mut items = vec![ListItem::hidden("Blue Apple")];
    filter("blue", &mut items);
    assert_eq!(items[0].display(), DisplayState::Shown);
    assert_eq!(items[0].visibility(), Visibility::Hidden);
}

#[test]
fn test_unclassified_items() {
    let mut items = vec![ListItem::new("Green Apple", Visibility::Unclassified)];

    filter("", &mut items);
    assert_eq!(items[0].display(), DisplayState::NotShown);

    filter("green", &mut items);
    assert_eq!(items[0].display(), DisplayState::Shown);

    filter("red", &mut items);
    assert_eq!(items[0].display(), DisplayState::NotShown);
}

#[test]
fn test_item_without_link_only_matches_empty_query() {
    let mut items = vec![ListItem::with_links(Vec::new(), Visibility::Visible)];
    filter("a", &mut items);
    assert!(!items[0].is_shown());
    filter("", &mut items);
    assert!(items[0].is_shown());
}

#[test]
fn test_filter_is_idempotent() {
    for query in ["", "red", "red apple", "zzz"] {
        let mut once = fruit();
        filter(query, &mut once);

        let mut twice = fruit();
        filter(query, &mut twice);
        filter(query, &mut twice);

        assert_eq!(once, twice, "query {query:?}");
    }
}

#[test]
fn test_filter_keeps_order_and_classification() {
    let mut items = fruit();
    filter("banana", &mut items);
    let labels: Vec<_> = items.iter().map(ListItem::label).collect();
    assert_eq!(labels, ["Red Apple", "Blue Apple", "Red Banana"]);
    let classes: Vec<_> = items.iter().map(ListItem::visibility).collect();
    assert_eq!(
        classes,
        [Visibility::Visible, Visibility::Hidden, Visibility::Visible]
    );
}

#[test]
fn test_filter_with_parsed_query() {
    let mut items = fruit();
    let query = Query::parse("BANANA");
    let outcome = filter_with(query.clone(), &mut items);
    assert_eq!(outcome.query, query);
    assert_eq!(shown(&items), [false, false, true]);
}

#[test]
fn test_empty_list() {
    let mut items: Vec<ListItem> = Vec::new();
    let outcome = filter("red", &mut items);
    assert_eq!(outcome.total(), 0);
}
