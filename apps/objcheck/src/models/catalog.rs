//! Catalog schema: named classes owning numerically identified objects.
//!
//! Field names accept both the lowercase spelling and the capitalized one
//! used by older catalog files (`Class`, `Objects`, `Id`, `Name`, `Tags`).

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
/// One named group of objects.
pub struct ObjectClass {
    #[serde(
        default,
        alias = "class",
        alias = "Class",
        alias = "Name",
        deserialize_with = "null_as_empty"
    )]
    pub name: String,
    #[serde(default, alias = "Objects", deserialize_with = "null_as_default")]
    pub objects: Vec<Object>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
/// A single catalog entry.
pub struct Object {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name", deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-form, never validated.
    #[serde(default, alias = "Tags", deserialize_with = "null_as_empty")]
    pub tags: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered list of classes as authored in the source file.
pub struct Catalog {
    pub classes: Vec<ObjectClass>,
}

/// An object paired with the name of the class that owns it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassedObject<'a> {
    pub id: i64,
    pub name: &'a str,
    pub class: &'a str,
}

impl Catalog {
    pub fn new(classes: Vec<ObjectClass>) -> Self {
        Self { classes }
    }

    /// All objects in traversal order: class order, then within-class order.
    pub fn flatten(&self) -> Vec<&Object> {
        self.classes.iter().flat_map(|c| c.objects.iter()).collect()
    }

    /// Like [`Catalog::flatten`], keeping the owning class name.
    pub fn classed_objects(&self) -> Vec<ClassedObject<'_>> {
        self.classes
            .iter()
            .flat_map(|c| {
                c.objects.iter().map(move |o| ClassedObject {
                    id: o.id,
                    name: o.name.as_str(),
                    class: c.name.as_str(),
                })
            })
            .collect()
    }

    pub fn object_count(&self) -> usize {
        self.classes.iter().map(|c| c.objects.len()).sum()
    }
}

// YAML writes a blank `Name:` as null; treat it as an empty name so the
// formatting check reports it instead of the loader rejecting the file.
fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_capitalized_keys_and_nulls() {
        let src = r#"
- Class: Weapons
  Objects:
    - Id: 1
      Name: Sword
      Tags: sharp
    - Id: 2
      Name:
"#;
        let classes: Vec<ObjectClass> = serde_yaml::from_str(src).unwrap();
        assert_eq!(classes[0].name, "Weapons");
        assert_eq!(classes[0].objects[0].tags, "sharp");
        assert_eq!(classes[0].objects[1].name, "");
        assert_eq!(classes[0].objects[1].tags, "");
    }

    #[test]
    fn test_flatten_keeps_traversal_order() {
        let catalog = Catalog::new(vec![
            ObjectClass {
                name: "B".into(),
                objects: vec![
                    Object { id: 5, ..Default::default() },
                    Object { id: 2, ..Default::default() },
                ],
            },
            ObjectClass {
                name: "A".into(),
                objects: vec![Object { id: 1, ..Default::default() }],
            },
        ]);
        let ids: Vec<i64> = catalog.flatten().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![5, 2, 1]);
        assert_eq!(catalog.object_count(), 3);
        let classes: Vec<&str> = catalog.classed_objects().iter().map(|o| o.class).collect();
        assert_eq!(classes, vec!["B", "B", "A"]);
    }

    #[test]
    fn test_missing_objects_is_empty() {
        let classes: Vec<ObjectClass> = serde_json::from_str(r#"[{"name":"Empty"}]"#).unwrap();
        assert!(classes[0].objects.is_empty());
    }
}
