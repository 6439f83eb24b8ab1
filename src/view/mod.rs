//! View module
//!
//! The core stays render-agnostic: it exposes `TableSnapshot`, the table
//! contents plus every derived value a front end needs (positional
//! semester labels, per-semester GPA, overall CGPA). Views consume
//! snapshots through the `View` trait and are pulled after each mutation.

pub mod text;

pub use text::TextView;

use serde::{Deserialize, Serialize};

use crate::aggregate::{cumulative_cgpa, semester_gpa};
use crate::core::{Course, GradeTable};

/// One semester with its derived values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterView {
    /// Positional label ("Semester 1", "Semester 2", ...)
    pub label: String,
    /// Credit-weighted GPA of this semester, 2 fractional digits
    pub gpa: String,
    /// The courses, in display order
    pub courses: Vec<Course>,
}

/// The full table plus derived values, captured after a mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub semesters: Vec<SemesterView>,
    /// Credit-weighted average across all semesters combined
    pub cgpa: String,
}

impl TableSnapshot {
    /// Capture the current table contents and derived values
    pub fn capture(table: &GradeTable) -> Self {
        let semesters = table
            .semesters()
            .iter()
            .enumerate()
            .map(|(i, sem)| SemesterView {
                label: format!("Semester {}", i + 1),
                gpa: semester_gpa(&sem.courses),
                courses: sem.courses.clone(),
            })
            .collect();

        Self {
            semesters,
            cgpa: cumulative_cgpa(table),
        }
    }
}

/// Trait for views
pub trait View {
    /// View name
    fn name(&self) -> &str;

    /// Render a snapshot to displayable text
    fn render(&self, snapshot: &TableSnapshot) -> String;
}
