//! Tests for the search list component.

use super::*;
use crate::search::{ListItem, Visibility};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::strip_ansi;

fn albums() -> Vec<ListItem> {
    vec![
        ListItem::visible("Radiohead - OK Computer"),
        ListItem::visible("Radiohead - Kid A"),
        ListItem::hidden("Portishead - Dummy"),
        ListItem::visible("Massive Attack - Mezzanine"),
        ListItem::new("Burial - Untrue", Visibility::Unclassified),
    ]
}

fn press(list: &mut Model, code: KeyCode) -> Option<Cmd> {
    list.update(Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg)
}

fn type_text(list: &mut Model, text: &str) {
    for c in text.chars() {
        press(list, KeyCode::Char(c));
    }
}

fn shown_labels(list: &Model) -> Vec<&str> {
    list.shown_items().map(|(_, item)| item.label()).collect()
}

#[test]
fn test_new_shows_baseline() {
    let list = Model::new(albums());
    assert_eq!(
        shown_labels(&list),
        [
            "Radiohead - OK Computer",
            "Radiohead - Kid A",
            "Massive Attack - Mezzanine"
        ]
    );
    assert_eq!(list.outcome().shown, 3);
    assert_eq!(list.outcome().not_shown, 2);
    assert!(list.input().focused());
}

#[test]
fn test_every_keystroke_refilters() {
    let mut list = Model::new(albums());

    type_text(&mut list, "head");
    assert_eq!(list.query(), "head");
    assert_eq!(
        shown_labels(&list),
        [
            "Radiohead - OK Computer",
            "Radiohead - Kid A",
            "Portishead - Dummy"
        ]
    );

    type_text(&mut list, " kid");
    assert_eq!(shown_labels(&list), ["Radiohead - Kid A"]);

    for _ in 0..4 {
        press(&mut list, KeyCode::Backspace);
    }
    assert_eq!(list.query(), "head");
    assert_eq!(list.outcome().shown, 3);
}

#[test]
fn test_unclassified_items_match_queries() {
    let mut list = Model::new(albums());
    type_text(&mut list, "burial");
    assert_eq!(shown_labels(&list), ["Burial - Untrue"]);
}

#[test]
fn test_esc_clears_query_and_restores_baseline() {
    let mut list = Model::new(albums());
    type_text(&mut list, "dummy");
    assert_eq!(shown_labels(&list), ["Portishead - Dummy"]);

    assert!(press(&mut list, KeyCode::Esc).is_none());
    assert_eq!(list.query(), "");
    assert_eq!(list.outcome().shown, 3);
    assert!(!list.items()[2].is_shown());
}

#[test]
fn test_cursor_moves_over_shown_items_only() {
    let mut list = Model::new(albums());
    assert_eq!(list.cursor_index(), Some(0));

    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Down);
    assert_eq!(list.cursor(), 2);
    // The hidden Portishead entry is skipped.
    assert_eq!(list.cursor_index(), Some(3));

    press(&mut list, KeyCode::Down);
    assert_eq!(list.cursor(), 2);

    press(&mut list, KeyCode::Up);
    assert_eq!(list.cursor_index(), Some(1));
}

#[test]
fn test_cursor_clamped_after_refilter() {
    let mut list = Model::new(albums());
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Down);

    list.set_query("kid");
    assert_eq!(list.cursor(), 0);
    assert_eq!(list.cursor_index(), Some(1));

    list.set_query("nothing matches this");
    assert_eq!(list.cursor_index(), None);
}

#[test]
fn test_paging() {
    let items = (0..10)
        .map(|i| ListItem::visible(format!("Album {i}")))
        .collect();
    let mut list = Model::new(items).with_height(3);

    press(&mut list, KeyCode::PageDown);
    assert_eq!(list.cursor(), 3);
    press(&mut list, KeyCode::PageDown);
    press(&mut list, KeyCode::PageDown);
    press(&mut list, KeyCode::PageDown);
    assert_eq!(list.cursor(), 9);
    press(&mut list, KeyCode::PageUp);
    assert_eq!(list.cursor(), 6);
}

#[test]
fn test_viewport_follows_cursor() {
    let items = (0..10)
        .map(|i| ListItem::visible(format!("Album {i}")))
        .collect();
    let mut list = Model::new(items).with_height(3);
    for _ in 0..5 {
        press(&mut list, KeyCode::Down);
    }

    let view = strip_ansi(&list.view());
    assert!(view.contains("> Album 5"));
    assert!(view.contains("Album 3"));
    assert!(!view.contains("Album 2"));
    assert!(!view.contains("Album 6"));
}

#[test]
fn test_enter_selects_item_under_cursor() {
    let mut list = Model::new(albums());
    type_text(&mut list, "mezz");

    let cmd = press(&mut list, KeyCode::Enter);
    assert!(cmd.is_some());
    assert_eq!(list.selected_index(), Some(3));
    assert_eq!(
        list.selected_item().map(ListItem::label),
        Some("Massive Attack - Mezzanine")
    );
}

#[tokio::test]
async fn test_enter_sends_selected_msg() {
    let mut list = Model::new(albums());
    type_text(&mut list, "mezz");

    let cmd = press(&mut list, KeyCode::Enter).expect("enter returns a command");
    let msg = cmd.await.expect("command yields a message");
    let selected = msg
        .downcast_ref::<SelectedMsg>()
        .expect("message is a SelectedMsg");
    assert_eq!(*selected, SelectedMsg { index: 3 });
}

#[test]
fn test_enter_with_nothing_shown() {
    let mut list = Model::new(albums());
    type_text(&mut list, "zzz");
    assert!(press(&mut list, KeyCode::Enter).is_none());
    assert_eq!(list.selected_index(), None);
}

#[test]
fn test_ctrl_c_quits() {
    let mut list = Model::new(albums());
    let cmd = list.update(Box::new(KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg);
    assert!(cmd.is_some());
    assert_eq!(list.query(), "");
}

#[test]
fn test_non_key_messages_are_ignored() {
    let mut list = Model::new(albums());
    assert!(list.update(Box::new(42u8) as Msg).is_none());
    assert_eq!(list.outcome().shown, 3);
}

#[test]
fn test_view() {
    let mut list = Model::new(albums())
        .with_title("Albums")
        .with_item_names("album", "albums");
    type_text(&mut list, "radiohead");

    let view = strip_ansi(&list.view());
    assert!(view.contains("Albums"));
    assert!(view.contains("> radiohead"));
    assert!(view.contains("> Radiohead - OK Computer"));
    assert!(view.contains("  Radiohead - Kid A"));
    assert!(!view.contains("Mezzanine"));
    assert!(view.contains("2 of 5 albums"));
    assert!(view.contains("ctrl+c quit"));
}

#[test]
fn test_view_without_matches() {
    let mut list = Model::new(albums()).with_item_names("album", "albums");
    type_text(&mut list, "zzz");
    let view = strip_ansi(&list.view());
    assert!(view.contains("No albums."));
    assert!(view.contains("0 of 5 albums"));
}

#[test]
fn test_view_truncates_labels() {
    let list = Model::new(vec![ListItem::visible("Massive Attack - Mezzanine")]).with_width(12);
    let view = strip_ansi(&list.view());
    assert!(view.contains("> Massive A…"));
    assert!(view.contains("1 of 1 item"));
}

#[test]
fn test_view_narrow_width_still_truncates() {
    for width in [1, 2] {
        let list =
            Model::new(vec![ListItem::visible("Massive Attack - Mezzanine")]).with_width(width);
        let view = strip_ansi(&list.view());
        assert!(view.contains("> …"), "width {width}");
        assert!(!view.contains("Massive"), "width {width}");
    }
}

#[test]
fn test_status_noun_follows_total() {
    let single = Model::new(vec![ListItem::visible("Air - Moon Safari")])
        .with_item_names("album", "albums");
    let view = strip_ansi(&single.view());
    assert!(view.contains("1 of 1 album"));
    assert!(!view.contains("1 of 1 albums"));

    let mut several = Model::new(albums()).with_item_names("album", "albums");
    several.set_query("kid");
    assert!(strip_ansi(&several.view()).contains("1 of 5 albums"));
}
