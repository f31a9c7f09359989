//! Gaps in the sorted id sequence, counted from an implicit id 0.

use crate::models::catalog::Object;
use crate::models::CheckKind;
use crate::report::Reporter;

pub fn check_sequence(objects: &[&Object], reporter: &mut Reporter) {
    reporter.begin(CheckKind::Sequence);

    let mut ids: Vec<i64> = objects.iter().map(|o| o.id).collect();
    ids.sort_unstable();

    let mut previous = 0i64;
    for id in ids {
        let gap = id.saturating_sub(previous);
        if gap > 1 {
            reporter.error(format!(
                "There's {} number gap between Ids '{}' and '{}'",
                gap, previous, id
            ));
        }
        previous = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ids: &[i64]) -> Reporter {
        let objs: Vec<Object> = ids
            .iter()
            .map(|&id| Object {
                id,
                ..Default::default()
            })
            .collect();
        let refs: Vec<&Object> = objs.iter().collect();
        let mut r = Reporter::new();
        check_sequence(&refs, &mut r);
        r
    }

    #[test]
    fn test_consecutive_ids_are_clean() {
        assert_eq!(run(&[1, 2, 3]).error_count(), 0);
        assert_eq!(run(&[3, 1, 2]).error_count(), 0);
    }

    #[test]
    fn test_gap_reports_size_and_bounds() {
        let r = run(&[1, 2, 4]);
        assert_eq!(r.error_count(), 1);
        assert_eq!(
            r.findings()[0].message,
            "There's 2 number gap between Ids '2' and '4'"
        );

        let r = run(&[1, 4]);
        assert_eq!(
            r.findings()[0].message,
            "There's 3 number gap between Ids '1' and '4'"
        );
    }

    #[test]
    fn test_first_id_measured_from_zero() {
        let r = run(&[3, 4]);
        assert_eq!(r.error_count(), 1);
        assert_eq!(
            r.findings()[0].message,
            "There's 3 number gap between Ids '0' and '3'"
        );
    }

    #[test]
    fn test_duplicates_do_not_open_gaps() {
        assert_eq!(run(&[1, 1, 2, 2, 3]).error_count(), 0);
    }

    #[test]
    fn test_negative_ids_walk_up_to_positive() {
        let r = run(&[-2, 1]);
        assert_eq!(r.error_count(), 1);
        assert_eq!(
            r.findings()[0].message,
            "There's 3 number gap between Ids '-2' and '1'"
        );
    }

    #[test]
    fn test_extreme_ids_do_not_overflow() {
        let r = run(&[i64::MIN, i64::MAX]);
        assert_eq!(r.error_count(), 1);
    }
}
