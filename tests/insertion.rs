//! Positional inserts and removals keep keys dense

mod common;

use common::{assert_dense, list_of, pairs};
use keyed_list::{KeyedList, ListError};
use test_case::test_case;

#[test_case(0, "new", &["new", "a", "b", "c"] ; "before head")]
#[test_case(1, "new", &["a", "new", "b", "c"] ; "before interior")]
#[test_case(2, "new", &["a", "b", "new", "c"] ; "before tail")]
fn test_insert_before(key: usize, value: &'static str, expected: &[&str]) {
    let mut list = list_of(&["a", "b", "c"]);

    assert_eq!(list.insert_before(key, value), Ok(key));
    assert_eq!(list.values().copied().collect::<Vec<_>>(), expected);
    assert_eq!(list.get(key).map(|n| *n.value()), Some(value));
    assert_dense(&list);
}

#[test_case(0, "new", &["a", "new", "b", "c"] ; "after head")]
#[test_case(1, "new", &["a", "b", "new", "c"] ; "after interior")]
#[test_case(2, "new", &["a", "b", "c", "new"] ; "after tail")]
fn test_insert_after(key: usize, value: &'static str, expected: &[&str]) {
    let mut list = list_of(&["a", "b", "c"]);

    assert_eq!(list.insert_after(key, value), Ok(key + 1));
    assert_eq!(list.values().copied().collect::<Vec<_>>(), expected);
    assert_eq!(list.last().map(|n| *n.value()), expected.last().copied());
    assert_dense(&list);
}

#[test_case(3 ; "one past the end")]
#[test_case(100 ; "far past the end")]
fn test_insert_rejects_missing_key(key: usize) {
    let mut list = list_of(&[1, 2, 3]);

    let expected = Err(ListError::KeyNotFound { key, count: 3 });
    assert_eq!(list.insert_before(key, 9), expected);
    assert_eq!(list.insert_after(key, 9), expected);
    assert_eq!(pairs(&list), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test_case(0, &[20, 30, 40] ; "head")]
#[test_case(1, &[10, 30, 40] ; "interior")]
#[test_case(3, &[10, 20, 30] ; "tail")]
fn test_remove_at(key: usize, expected: &[i32]) {
    let mut list = list_of(&[10, 20, 30, 40]);

    assert!(list.remove_at(key).is_some());
    assert_eq!(list.values().copied().collect::<Vec<_>>(), expected);
    assert_dense(&list);
}

#[test]
fn test_remove_at_missing_key() {
    let mut list = list_of(&[10]);
    assert!(list.remove_at(1).is_none());
    assert_eq!(list.count(), 1);
}

#[test]
fn test_insert_then_remove_restores() {
    let mut list = list_of(&['a', 'c']);

    let key = list.insert_after(0, 'b').expect("key 0 exists");
    assert_eq!(pairs(&list), vec![(0, 'a'), (1, 'b'), (2, 'c')]);

    list.remove_at(key);
    assert_eq!(pairs(&list), vec![(0, 'a'), (1, 'c')]);
    assert_dense(&list);
}

#[test]
fn test_poll_aliases_agree() {
    let mut list = list_of(&[1, 2, 3, 4]);

    assert_eq!(list.poll_first().map(|n| n.into_value()), Some(1));
    assert_eq!(list.remove_first().map(|n| n.into_value()), Some(2));
    assert_eq!(list.remove_last().map(|n| n.into_value()), Some(4));
    assert_eq!(pairs(&list), vec![(0, 3)]);
    assert_dense(&list);
}
