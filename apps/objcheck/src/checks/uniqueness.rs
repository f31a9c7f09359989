//! Duplicate ids and duplicate names across the flattened object set.

use crate::models::catalog::Object;
use crate::models::CheckKind;
use crate::report::Reporter;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Report every object whose id or name was already taken by an earlier
/// object. The earlier object is always the first one seen with that key.
pub fn check_uniqueness(objects: &[&Object], reporter: &mut Reporter) {
    reporter.begin(CheckKind::Uniqueness);

    let mut ids: HashMap<i64, &str> = HashMap::with_capacity(objects.len());
    let mut names: HashMap<&str, i64> = HashMap::with_capacity(objects.len());

    for obj in objects {
        match ids.entry(obj.id) {
            Entry::Vacant(slot) => {
                slot.insert(obj.name.as_str());
            }
            Entry::Occupied(first) => reporter.error(format!(
                "Id duplicate '{}' found with objects with name '{}' and '{}'",
                obj.id,
                obj.name,
                first.get()
            )),
        }

        match names.entry(obj.name.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(obj.id);
            }
            Entry::Occupied(first) => reporter.error(format!(
                "Name duplicate '{}' found with objects with Id '{}' and '{}'",
                obj.name,
                obj.id,
                first.get()
            )),
        }
    }
}
