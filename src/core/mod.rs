//! GPA Jotter core module
//!
//! Core data structures for the grade table:
//! - Grade: letter grade with the fixed point lookup
//! - Course: one editable row (name, grade, credits)
//! - GradeTable: ordered semesters, the sole mutable state

pub mod course;
pub mod grade;
pub mod table;

pub use course::{parse_credits_or_zero, Course, CourseField, DEFAULT_CREDITS};
pub use grade::{Grade, ALL_GRADES};
pub use table::{GradeTable, Semester, TableError};
