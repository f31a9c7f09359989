//! Capitalization and whitespace conventions for class and object names.
//!
//! Class rules:
//! - empty name is an error, otherwise a first character that is not
//!   uppercase is a warning;
//! - leading/trailing whitespace is an error, otherwise any inner space is
//!   a warning.
//!
//! Object rules are independent of each other except where noted:
//! - id below 1 is an error;
//! - empty name is an error;
//! - a single-word trimmed name not starting uppercase is a warning;
//! - a multi-word trimmed name whose words do not all start with a digit or
//!   an uppercase letter gets one warning (the first word included);
//! - leading/trailing whitespace is an error.

use crate::models::catalog::{Object, ObjectClass};
use crate::models::CheckKind;
use crate::report::Reporter;

pub fn check_formatting(classes: &[ObjectClass], objects: &[&Object], reporter: &mut Reporter) {
    reporter.begin(CheckKind::Formatting);

    for class in classes {
        check_class_name(&class.name, reporter);
    }
    for obj in objects {
        check_object(obj, reporter);
    }
}

fn check_class_name(name: &str, reporter: &mut Reporter) {
    match name.chars().next() {
        None => reporter.error("Nameless class found"),
        // surrounding whitespace is reported below as an error
        Some(first) if first.is_whitespace() => {}
        Some(first) if !first.is_uppercase() => reporter.warning(format!(
            "Class with name '{}' doesn't start with capital letter",
            name
        )),
        Some(_) => {}
    }

    let trimmed = name.trim();
    if trimmed != name {
        reporter.error(format!(
            "Class with name '{}' contains leading or trailing whitespace in its name",
            trimmed
        ));
    } else if name.contains(' ') {
        reporter.warning(format!(
            "Class with name '{}' contains whitespace in its name",
            name
        ));
    }
}

fn check_object(obj: &Object, reporter: &mut Reporter) {
    if obj.id < 1 {
        reporter.error(format!(
            "Object with name '{}' contains Id below 1",
            obj.name
        ));
    }

    let trimmed = obj.name.trim();
    let multi_word = trimmed.contains(' ');
    if obj.name.is_empty() {
        reporter.error(format!("Object with Id '{}' is nameless", obj.id));
    } else if !multi_word && trimmed.chars().next().is_some_and(|c| !c.is_uppercase()) {
        reporter.warning(format!(
            "Object with name '{}' doesn't start with capital letter",
            obj.name
        ));
    }

    if trimmed != obj.name {
        reporter.error(format!(
            "Object with name '{}' contains leading or trailing whitespace in its name",
            trimmed
        ));
    }

    if multi_word && has_uncapitalized_word(trimmed) {
        reporter.warning(format!(
            "Object with name '{}' has parts in its name that don't start with capital letter",
            obj.name
        ));
    }
}

/// True when some space-separated word starts with neither a digit nor an
/// uppercase letter. Empty words from repeated spaces are skipped.
fn has_uncapitalized_word(name: &str) -> bool {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .any(|c| !c.is_numeric() && !c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finding, Severity};

    fn class(name: &str) -> ObjectClass {
        ObjectClass {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    fn obj(id: i64, name: &str) -> Object {
        Object {
            id,
            name: name.into(),
            tags: String::new(),
        }
    }

    fn run_classes(names: &[&str]) -> Vec<Finding> {
        let classes: Vec<ObjectClass> = names.iter().map(|n| class(n)).collect();
        let mut r = Reporter::new();
        check_formatting(&classes, &[], &mut r);
        r.findings().to_vec()
    }

    fn run_object(o: Object) -> Vec<Finding> {
        let mut r = Reporter::new();
        check_formatting(&[], &[&o], &mut r);
        r.findings().to_vec()
    }

    fn severities(findings: &[Finding]) -> Vec<Severity> {
        findings.iter().map(|f| f.severity).collect()
    }

    #[test]
    fn test_well_formed_names_are_clean() {
        assert!(run_classes(&["Weapons", "Armor"]).is_empty());
        assert!(run_object(obj(1, "Long Sword")).is_empty());
    }

    #[test]
    fn test_class_lowercase_is_warning() {
        let f = run_classes(&["alpha"]);
        assert_eq!(severities(&f), vec![Severity::Warning]);
        assert!(f[0].message.contains("capital letter"));
    }

    #[test]
    fn test_class_surrounding_whitespace_is_error_only() {
        let f = run_classes(&[" Alpha"]);
        assert_eq!(severities(&f), vec![Severity::Error]);
        assert_eq!(
            f[0].message,
            "Class with name 'Alpha' contains leading or trailing whitespace in its name"
        );

        // trailing space: no inner-space warning on top of the error
        let f = run_classes(&["Al pha "]);
        assert_eq!(severities(&f), vec![Severity::Error]);
    }

    #[test]
    fn test_class_inner_space_is_warning() {
        let f = run_classes(&["Al pha"]);
        assert_eq!(severities(&f), vec![Severity::Warning]);
        assert!(f[0].message.contains("contains whitespace"));
    }

    #[test]
    fn test_nameless_class() {
        let f = run_classes(&[""]);
        assert_eq!(severities(&f), vec![Severity::Error]);
        assert_eq!(f[0].message, "Nameless class found");
    }

    #[test]
    fn test_object_id_below_one_is_independent() {
        let f = run_object(obj(0, "Sword"));
        assert_eq!(severities(&f), vec![Severity::Error]);
        assert_eq!(f[0].message, "Object with name 'Sword' contains Id below 1");

        let f = run_object(obj(-3, ""));
        assert_eq!(severities(&f), vec![Severity::Error, Severity::Error]);
    }

    #[test]
    fn test_nameless_object_has_no_capital_warning() {
        let f = run_object(obj(4, ""));
        assert_eq!(severities(&f), vec![Severity::Error]);
        assert_eq!(f[0].message, "Object with Id '4' is nameless");
    }

    #[test]
    fn test_object_capital_check_uses_trimmed_name() {
        // capitalized after trimming: only the whitespace error
        let f = run_object(obj(1, " Sword"));
        assert_eq!(severities(&f), vec![Severity::Error]);
        assert_eq!(
            f[0].message,
            "Object with name 'Sword' contains leading or trailing whitespace in its name"
        );

        let f = run_object(obj(1, " sword "));
        assert_eq!(severities(&f), vec![Severity::Warning, Severity::Error]);
        assert!(f[0].message.contains("capital letter"));
    }

    #[test]
    fn test_whitespace_only_object_name() {
        let f = run_object(obj(1, "   "));
        assert_eq!(severities(&f), vec![Severity::Error]);
    }

    #[test]
    fn test_object_word_capitalization() {
        let f = run_object(obj(1, "bob smith"));
        assert_eq!(severities(&f), vec![Severity::Warning]);
        assert!(f[0].message.contains("has parts in its name"));

        let f = run_object(obj(1, "sword"));
        assert!(f[0].message.contains("doesn't start with capital letter"));

        let f = run_object(obj(1, "Bob smith"));
        assert_eq!(severities(&f), vec![Severity::Warning]);

        assert!(run_object(obj(1, "Bob 2nd")).is_empty());
    }

    #[test]
    fn test_word_rule_reports_once_per_object() {
        let f = run_object(obj(1, "Bob of the hill"));
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn test_lowercase_first_word_only_gets_word_warning() {
        let f = run_object(obj(1, "bob Smith"));
        assert_eq!(severities(&f), vec![Severity::Warning]);
        assert!(f[0].message.contains("has parts in its name"));
    }

    #[test]
    fn test_double_space_is_skipped_not_fatal() {
        assert!(run_object(obj(1, "Bob  Smith")).is_empty());
        let f = run_object(obj(1, "Bob  smith"));
        assert_eq!(severities(&f), vec![Severity::Warning]);
    }
}
