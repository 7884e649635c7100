// Timetable Tool - core/timetable.rs
//
// The user's timetable: a deduplicated set of courses with a fixed ceiling.
// Batch adds are all-or-nothing.

use crate::core::model::CourseRecord;
use crate::util::constants::MAX_TIMETABLE_COURSES;
use crate::util::error::SelectionError;
use std::collections::BTreeSet;

/// Selected courses, at most `MAX_TIMETABLE_COURSES`, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableSet {
    courses: BTreeSet<CourseRecord>,
}

impl TimetableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of courses.
    ///
    /// The duplicate check runs first, then the capacity check; only if both
    /// pass is anything inserted. A candidate that repeats within the batch
    /// counts as a duplicate.
    pub fn add(&mut self, candidates: &[CourseRecord]) -> Result<(), SelectionError> {
        let mut batch: BTreeSet<&CourseRecord> = BTreeSet::new();
        for candidate in candidates {
            if self.courses.contains(candidate) || !batch.insert(candidate) {
                return Err(SelectionError::Duplicate {
                    code: candidate.code.clone(),
                });
            }
        }

        if self.courses.len() + candidates.len() > MAX_TIMETABLE_COURSES {
            return Err(SelectionError::Capacity {
                current: self.courses.len(),
                requested: candidates.len(),
                max: MAX_TIMETABLE_COURSES,
            });
        }

        self.courses.extend(candidates.iter().cloned());
        tracing::debug!(
            added = candidates.len(),
            total = self.courses.len(),
            "Courses added to timetable"
        );
        Ok(())
    }

    /// Remove everything. Always succeeds.
    pub fn clear(&mut self) {
        self.courses.clear();
    }

    /// Snapshot of the current courses, ordered by code, then name, then time.
    pub fn contents(&self) -> Vec<CourseRecord> {
        self.courses.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.courses.iter()
    }

    pub fn contains(&self, course: &CourseRecord) -> bool {
        self.courses.contains(course)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// How many more courses fit.
    pub fn remaining_capacity(&self) -> usize {
        MAX_TIMETABLE_COURSES.saturating_sub(self.courses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(n: usize) -> CourseRecord {
        CourseRecord::new(format!("CS10{n}"), format!("Course {n}"), "MWF 9-10")
    }

    #[test]
    fn test_add_batch() {
        let mut timetable = TimetableSet::new();
        timetable.add(&[course(1), course(2)]).unwrap();
        assert_eq!(timetable.len(), 2);
        assert!(timetable.contains(&course(1)));
        assert_eq!(timetable.remaining_capacity(), 4);
    }

    #[test]
    fn test_seventh_course_rejected() {
        let mut timetable = TimetableSet::new();
        for n in 0..6 {
            timetable.add(&[course(n)]).unwrap();
        }
        let before = timetable.contents();

        let result = timetable.add(&[course(7)]);
        assert_eq!(
            result,
            Err(SelectionError::Capacity {
                current: 6,
                requested: 1,
                max: 6
            })
        );
        assert_eq!(timetable.contents(), before);
    }

    #[test]
    fn test_capacity_failure_is_atomic() {
        let mut timetable = TimetableSet::new();
        timetable.add(&[course(1), course(2), course(3), course(4)]).unwrap();
        let before = timetable.clone();

        let result = timetable.add(&[course(5), course(6), course(7)]);
        assert!(matches!(result, Err(SelectionError::Capacity { .. })));
        assert_eq!(timetable, before);
    }

    #[test]
    fn test_duplicate_across_calls_rejected() {
        let mut timetable = TimetableSet::new();
        timetable.add(&[course(1)]).unwrap();
        let result = timetable.add(&[course(1)]);
        assert_eq!(
            result,
            Err(SelectionError::Duplicate {
                code: "CS101".to_string()
            })
        );
        assert_eq!(timetable.len(), 1);
    }

    #[test]
    fn test_duplicate_failure_is_atomic() {
        let mut timetable = TimetableSet::new();
        timetable.add(&[course(1)]).unwrap();

        // course(2) is new, but course(1) is not: nothing is inserted.
        let result = timetable.add(&[course(2), course(1)]);
        assert!(matches!(result, Err(SelectionError::Duplicate { .. })));
        assert!(!timetable.contains(&course(2)));
        assert_eq!(timetable.len(), 1);
    }

    #[test]
    fn test_duplicate_within_batch_rejected() {
        let mut timetable = TimetableSet::new();
        let result = timetable.add(&[course(1), course(1)]);
        assert!(matches!(result, Err(SelectionError::Duplicate { .. })));
        assert!(timetable.is_empty());
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut timetable = TimetableSet::new();
        for n in 0..6 {
            timetable.add(&[course(n)]).unwrap();
        }
        let result = timetable.add(&[course(0)]);
        assert!(matches!(result, Err(SelectionError::Duplicate { .. })));
    }

    #[test]
    fn test_same_code_different_time_is_distinct() {
        let mut timetable = TimetableSet::new();
        let morning = CourseRecord::new("CS101", "Intro", "MWF 9-10");
        let evening = CourseRecord::new("CS101", "Intro", "MWF 18-19");
        timetable.add(&[morning, evening]).unwrap();
        assert_eq!(timetable.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut timetable = TimetableSet::new();
        timetable.add(&[course(1), course(2)]).unwrap();
        timetable.clear();
        assert!(timetable.contents().is_empty());
        timetable.clear();
        assert!(timetable.is_empty());
        assert_eq!(timetable.remaining_capacity(), MAX_TIMETABLE_COURSES);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut timetable = TimetableSet::new();
        timetable.add(&[]).unwrap();
        assert!(timetable.is_empty());
    }
}
