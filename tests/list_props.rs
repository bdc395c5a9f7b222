//! Model-based checks against a plain `Vec`

mod common;

use common::{assert_dense, list_of};
use keyed_list::{KeyedList, LinkedNode};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Poll,
    PollLast,
    RemoveAt(usize),
    Remove(u8),
    InsertBefore(usize, u8),
    InsertAfter(usize, u8),
    Sort,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..8).prop_map(Op::Add),
        1 => Just(Op::Poll),
        1 => Just(Op::PollLast),
        1 => (0usize..12).prop_map(Op::RemoveAt),
        1 => (0u8..8).prop_map(Op::Remove),
        1 => (0usize..12, 0u8..8).prop_map(|(k, v)| Op::InsertBefore(k, v)),
        1 => (0usize..12, 0u8..8).prop_map(|(k, v)| Op::InsertAfter(k, v)),
        1 => Just(Op::Sort),
    ]
}

proptest! {
    #[test]
    fn appends_produce_dense_keys(values in proptest::collection::vec(any::<u16>(), 0..48)) {
        let list = list_of(&values);

        let keys: Vec<usize> = list.iter().map(|(key, _)| key).collect();
        prop_assert_eq!(keys, (0..values.len()).collect::<Vec<_>>());
        prop_assert_eq!(list.values().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn operations_match_vec_model(ops in proptest::collection::vec(op(), 0..64)) {
        let mut list = list_of::<u8>(&[]);
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    prop_assert_eq!(list.add(v), model.len());
                    model.push(v);
                }
                Op::Poll => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.poll().map(|n| n.into_value()), expected);
                }
                Op::PollLast => {
                    prop_assert_eq!(list.pop(), model.pop());
                }
                Op::RemoveAt(k) => {
                    let expected = (k < model.len()).then(|| model.remove(k));
                    let removed = list.remove_at(k);
                    prop_assert_eq!(removed.as_ref().map(|n| n.key()), expected.map(|_| k));
                    prop_assert_eq!(removed.map(|n| n.into_value()), expected);
                }
                Op::Remove(v) => {
                    let before = model.len();
                    model.retain(|x| *x != v);
                    prop_assert_eq!(list.remove(&v), before - model.len());
                }
                Op::InsertBefore(k, v) => {
                    let result = list.insert_before(k, v);
                    if k < model.len() {
                        model.insert(k, v);
                        prop_assert_eq!(result, Ok(k));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::InsertAfter(k, v) => {
                    let result = list.insert_after(k, v);
                    if k < model.len() {
                        model.insert(k + 1, v);
                        prop_assert_eq!(result, Ok(k + 1));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Sort => {
                    list.sort();
                    model.sort();
                }
            }

            assert_dense(&list);
            prop_assert_eq!(list.count(), model.len());
            prop_assert_eq!(list.values().copied().collect::<Vec<_>>(), model.clone());
            prop_assert_eq!(list.first().map(|n| *n.value()), model.first().copied());
            prop_assert_eq!(list.last().map(|n| *n.value()), model.last().copied());
        }
    }

    #[test]
    fn sort_by_key_is_stable(values in proptest::collection::vec((0u8..4, any::<u32>()), 0..40)) {
        let mut list = list_of(&values);
        let mut model = values.clone();

        list.sort_by_key(|&(rank, _)| rank);
        model.sort_by_key(|&(rank, _)| rank);

        prop_assert_eq!(list.values().copied().collect::<Vec<_>>(), model);
        assert_dense(&list);
    }

    #[test]
    fn find_last_agrees_with_forward_scan(values in proptest::collection::vec(0u8..5, 0..32), needle in 0u8..5) {
        let list = list_of(&values);

        let forward = list.nodes().filter(|n| *n.value() == needle).last().map(|n| n.key());
        prop_assert_eq!(list.find_last(&needle).map(|n| n.key()), forward);
        prop_assert_eq!(list.find(&needle).map(|n| n.key()), values.iter().position(|v| *v == needle));
    }
}
