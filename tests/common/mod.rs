//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Once;

use keyed_list::{LinkedList, ListConfig};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once; filter with `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Checked, verbose list holding `values` in order
pub fn list_of<T: Clone>(values: &[T]) -> LinkedList<T> {
    init_tracing();
    let config = ListConfig::default()
        .with_invariant_checks(true)
        .with_verbose(true);
    let mut list = LinkedList::with_config(config);
    list.extend(values.iter().cloned());
    list
}

/// `(key, value)` pairs in traversal order
pub fn pairs<T: Clone>(list: &LinkedList<T>) -> Vec<(usize, T)> {
    list.iter().map(|(key, value)| (key, value.clone())).collect()
}

/// Assert the chain is well formed and keys are exactly `0..count`
pub fn assert_dense<T>(list: &LinkedList<T>) {
    if let Err(err) = list.verify() {
        panic!("list failed verification: {err}");
    }
    let keys: Vec<usize> = list.iter().map(|(key, _)| key).collect();
    let expected: Vec<usize> = (0..list.count()).collect();
    assert_eq!(keys, expected, "keys should be dense");
}
