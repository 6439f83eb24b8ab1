//! GPA Jotter
//!
//! A semester GPA and cumulative CGPA tracker.
//!
//! # Overview
//!
//! GPA Jotter provides:
//! - A grade table of semesters and editable courses
//! - A pure aggregation engine (per-semester GPA, overall CGPA)
//! - A JSON protocol for front-end integration
//! - JSON import/export of the table
//! - A file-backed persistence store
//!
//! # Example
//!
//! ```
//! use gpa_jotter::core::{CourseField, GradeTable};
//! use gpa_jotter::aggregate::{cumulative_cgpa, semester_gpa};
//!
//! let mut table = GradeTable::new();
//! table.add_semester();
//! table.update_course(0, 0, CourseField::Grade, "A").unwrap();
//! table.update_course(0, 0, CourseField::Credits, "4").unwrap();
//!
//! assert_eq!(semester_gpa(&table.semester(0).unwrap().courses), "8.00");
//! assert_eq!(cumulative_cgpa(&table), "8.00");
//! ```

pub mod aggregate;
pub mod core;
pub mod exchange;
pub mod protocol;
pub mod session;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Course, CourseField, Grade, GradeTable, Semester, TableError};
pub use exchange::ImportError;
pub use protocol::{Command, Response};
pub use session::Session;
pub use store::Store;
pub use view::{TableSnapshot, TextView, View};
