//! Aggregation engine
//!
//! Pure functions computing a semester's GPA and the overall CGPA from
//! grade table contents. Both are credit-weighted averages over qualifying
//! courses (grade set, credits > 0); both are referentially transparent
//! and never mutate their inputs.
//!
//! Results are fixed-point strings with exactly 2 fractional digits. The
//! quotient is computed in f64 and formatted with the standard formatter,
//! which rounds the exact binary value with ties to even.

use crate::core::{Course, GradeTable};

/// Result string when no course qualifies
const ZERO_GPA: &str = "0.00";

/// Credit-weighted GPA of one semester's courses.
///
/// Sum of `points * credits` over qualifying courses divided by the sum
/// of those credits; `"0.00"` when nothing qualifies.
pub fn semester_gpa(courses: &[Course]) -> String {
    weighted_average(courses.iter())
}

/// Credit-weighted CGPA across every qualifying course in the table.
///
/// Applied across semester boundaries as one global average: this is NOT
/// the mean of per-semester GPAs.
pub fn cumulative_cgpa(table: &GradeTable) -> String {
    weighted_average(table.semesters().iter().flat_map(|s| s.courses.iter()))
}

fn weighted_average<'a>(courses: impl Iterator<Item = &'a Course>) -> String {
    let mut total_points: u64 = 0;
    let mut total_credits: u64 = 0;

    for course in courses {
        if course.credits == 0 {
            continue;
        }
        if let Some(grade) = course.grade {
            total_points += u64::from(grade.points()) * u64::from(course.credits);
            total_credits += u64::from(course.credits);
        }
    }

    if total_credits == 0 {
        return ZERO_GPA.to_string();
    }
    format!("{:.2}", total_points as f64 / total_credits as f64)
}
