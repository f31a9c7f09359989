//! Flat object listing with the owning class, sorted for display.

use crate::models::catalog::{Catalog, ClassedObject};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Class,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "class" => Ok(SortKey::Class),
            other => Err(format!("unknown sort key '{}' (expected id|name|class)", other)),
        }
    }
}

/// Every object of `catalog` ordered by `key`; ties fall back to id, then
/// to traversal order.
pub fn list_objects(catalog: &Catalog, key: SortKey) -> Vec<ClassedObject<'_>> {
    let mut rows = catalog.classed_objects();
    match key {
        SortKey::Id => rows.sort_by_key(|r| r.id),
        SortKey::Name => rows.sort_by(|a, b| a.name.cmp(b.name).then(a.id.cmp(&b.id))),
        SortKey::Class => rows.sort_by(|a, b| a.class.cmp(b.class).then(a.id.cmp(&b.id))),
    }
    rows
}
