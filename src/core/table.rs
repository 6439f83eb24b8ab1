//! Grade table - the single piece of mutable state
//!
//! A `GradeTable` is an ordered sequence of semesters, each an ordered
//! sequence of courses. Ordering is display-relevant: "Semester N" labels
//! derive from position, so deleting a semester reflows the labels of
//! every later one. Every structural mutation is bound-checked and
//! signals `TableError` instead of corrupting state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::course::{Course, CourseField};

/// Out-of-range structural index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("semester index {index} out of range (table has {len})")]
    SemesterOutOfRange { index: usize, len: usize },
    #[error("course index {index} out of range (semester {sem} has {len})")]
    CourseOutOfRange { sem: usize, index: usize, len: usize },
}

/// An ordered sequence of courses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    /// A new semester holding one default course
    pub fn with_default_course() -> Self {
        Self {
            courses: vec![Course::default()],
        }
    }
}

/// The root data structure: an ordered sequence of semesters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeTable {
    semesters: Vec<Semester>,
}

impl GradeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-decoded semesters (import path)
    pub fn from_semesters(semesters: Vec<Semester>) -> Self {
        Self { semesters }
    }

    /// All semesters in display order
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Number of semesters
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether the table holds no semesters
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Get a semester by position
    pub fn semester(&self, index: usize) -> Option<&Semester> {
        self.semesters.get(index)
    }

    /// Append a new semester containing one default course
    pub fn add_semester(&mut self) {
        self.semesters.push(Semester::with_default_course());
    }

    /// Remove the semester at `index`; later semesters shift down one
    /// position and their ordinal labels change accordingly.
    pub fn delete_semester(&mut self, index: usize) -> Result<(), TableError> {
        if index >= self.semesters.len() {
            return Err(TableError::SemesterOutOfRange {
                index,
                len: self.semesters.len(),
            });
        }
        self.semesters.remove(index);
        Ok(())
    }

    /// Append a default course to the given semester
    pub fn add_course(&mut self, sem: usize) -> Result<(), TableError> {
        self.semester_mut(sem)?.courses.push(Course::default());
        Ok(())
    }

    /// Remove a course; later courses in the same semester shift down
    pub fn delete_course(&mut self, sem: usize, course: usize) -> Result<(), TableError> {
        let courses = &mut self.semester_mut(sem)?.courses;
        if course >= courses.len() {
            return Err(TableError::CourseOutOfRange {
                sem,
                index: course,
                len: courses.len(),
            });
        }
        courses.remove(course);
        Ok(())
    }

    /// Set one field on the target course. Values go through the field's
    /// coercion policy (see [`Course::update`]).
    pub fn update_course(
        &mut self,
        sem: usize,
        course: usize,
        field: CourseField,
        value: &str,
    ) -> Result<(), TableError> {
        let courses = &mut self.semester_mut(sem)?.courses;
        let len = courses.len();
        let target = courses
            .get_mut(course)
            .ok_or(TableError::CourseOutOfRange {
                sem,
                index: course,
                len,
            })?;
        target.update(field, value);
        Ok(())
    }

    /// Clear all semesters
    pub fn reset(&mut self) {
        self.semesters.clear();
    }

    /// Wholesale replacement (import and persistence load paths)
    pub fn replace(&mut self, semesters: Vec<Semester>) {
        self.semesters = semesters;
    }

    fn semester_mut(&mut self, index: usize) -> Result<&mut Semester, TableError> {
        let len = self.semesters.len();
        self.semesters
            .get_mut(index)
            .ok_or(TableError::SemesterOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grade::Grade;

    #[test]
    fn test_add_semester_seeds_default_course() {
        let mut table = GradeTable::new();
        table.add_semester();

        assert_eq!(table.len(), 1);
        let courses = &table.semester(0).unwrap().courses;
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0], Course::default());
    }

    #[test]
    fn test_delete_semester_reflows_positions() {
        let mut table = GradeTable::new();
        for name in ["first", "second", "third"] {
            table.add_semester();
            let last = table.len() - 1;
            table
                .update_course(last, 0, CourseField::Name, name)
                .unwrap();
        }

        table.delete_semester(1).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.semester(0).unwrap().courses[0].name, "first");
        // "third" is now at position 1: labels are positional, not identity
        assert_eq!(table.semester(1).unwrap().courses[0].name, "third");
    }

    #[test]
    fn test_course_add_delete() {
        let mut table = GradeTable::new();
        table.add_semester();
        table.add_course(0).unwrap();
        assert_eq!(table.semester(0).unwrap().courses.len(), 2);

        table.delete_course(0, 0).unwrap();
        assert_eq!(table.semester(0).unwrap().courses.len(), 1);
    }

    #[test]
    fn test_update_course() {
        let mut table = GradeTable::new();
        table.add_semester();

        table.update_course(0, 0, CourseField::Grade, "B").unwrap();
        table.update_course(0, 0, CourseField::Credits, "5").unwrap();

        let course = &table.semester(0).unwrap().courses[0];
        assert_eq!(course.grade, Some(Grade::B));
        assert_eq!(course.credits, 5);
    }

    #[test]
    fn test_out_of_range_is_reported_not_fatal() {
        let mut table = GradeTable::new();
        table.add_semester();

        assert_eq!(
            table.delete_semester(3),
            Err(TableError::SemesterOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            table.delete_course(0, 7),
            Err(TableError::CourseOutOfRange {
                sem: 0,
                index: 7,
                len: 1
            })
        );
        assert!(table.add_course(2).is_err());

        // State untouched after every rejection
        assert_eq!(table.len(), 1);
        assert_eq!(table.semester(0).unwrap().courses.len(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut table = GradeTable::new();
        table.add_semester();
        table.add_semester();

        table.reset();
        assert!(table.is_empty());
    }
}
