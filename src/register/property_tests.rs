//! Property-Based Tests for Register Module
//!
//! Uses proptest to check the store against a plain `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::register::{RegisterStore, Removed, ShouldRemove};

// == Strategies ==
/// Generates keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = u32> {
    0u32..1000
}

/// A single register operation
#[derive(Debug, Clone)]
enum RegisterOp {
    Put { key: String, value: u32 },
    Get { key: String },
    Pop { key: String },
    Copy,
}

fn register_op_strategy() -> impl Strategy<Value = RegisterOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| RegisterOp::Put { key, value }),
        key_strategy().prop_map(|key| RegisterOp::Get { key }),
        key_strategy().prop_map(|key| RegisterOp::Pop { key }),
        Just(RegisterOp::Copy),
    ]
}

fn recording_callback() -> (Removed<String, u32>, Arc<Mutex<Vec<(String, u32)>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let callback: Removed<String, u32> = Box::new(move |key, value| {
        sink.lock().unwrap().push((key, value));
    });
    (callback, seen)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of put/get/pop/copy behaves exactly like a HashMap.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(register_op_strategy(), 1..60)) {
        let mut store = RegisterStore::new();
        let mut model: HashMap<String, u32> = HashMap::new();

        for op in ops {
            match op {
                RegisterOp::Put { key, value } => {
                    store.put(key.clone(), value);
                    model.insert(key, value);
                }
                RegisterOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).copied());
                }
                RegisterOp::Pop { key } => {
                    prop_assert_eq!(store.pop(&key), model.remove(&key));
                }
                RegisterOp::Copy => {
                    prop_assert_eq!(store.copy(), model.clone());
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }
    }

    // A sweep removes exactly the entries the predicate accepts, keeps the
    // rest untouched, and reports each removed entry to the callback once.
    #[test]
    fn prop_predicate_sweep_partitions_entries(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..20),
        threshold in value_strategy()
    ) {
        let mut store = RegisterStore::new();
        for (key, value) in &entries {
            store.put(key.clone(), *value);
        }

        let predicate: ShouldRemove<String, u32> = Box::new(move |_, value| *value >= threshold);
        let (callback, seen) = recording_callback();

        let removed = store.sweep(Some(&predicate), Some(&callback));

        let expected_kept: HashMap<String, u32> = entries
            .iter()
            .filter(|(_, value)| **value < threshold)
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        let mut expected_removed: Vec<(String, u32)> = entries
            .iter()
            .filter(|(_, value)| **value >= threshold)
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        expected_removed.sort();

        let mut seen = seen.lock().unwrap().clone();
        seen.sort();

        prop_assert_eq!(removed, expected_removed.len());
        prop_assert_eq!(store.copy(), expected_kept);
        prop_assert_eq!(seen, expected_removed);
    }

    // Popped entries never reach the callback; a later sweep only reports
    // what was still present.
    #[test]
    fn prop_popped_entries_skip_callback(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..20),
        pops in prop::collection::vec(key_strategy(), 0..10)
    ) {
        let mut store = RegisterStore::new();
        let mut model = entries.clone();
        for (key, value) in &entries {
            store.put(key.clone(), *value);
        }
        for key in &pops {
            store.pop(key);
            model.remove(key);
        }

        let (callback, seen) = recording_callback();
        store.sweep(None, Some(&callback));

        let reported: HashMap<String, u32> = seen.lock().unwrap().iter().cloned().collect();
        prop_assert_eq!(seen.lock().unwrap().len(), model.len());
        prop_assert_eq!(reported, model);
        prop_assert!(store.is_empty());
    }
}
