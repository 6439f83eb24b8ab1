//! Plain-text view
//!
//! Renders a snapshot as an aligned terminal listing: the CGPA readout,
//! then each semester with its GPA and course grid.

use super::{TableSnapshot, View};

/// Minimum width of the course-name column
const MIN_NAME_WIDTH: usize = 12;

/// Placeholder for a course with an empty name
const UNNAMED: &str = "(unnamed)";

/// The built-in terminal renderer
#[derive(Debug, Default)]
pub struct TextView;

impl TextView {
    pub fn new() -> Self {
        Self
    }
}

impl View for TextView {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, snapshot: &TableSnapshot) -> String {
        let mut out = String::new();
        out.push_str(&format!("Cumulative CGPA: {}\n", snapshot.cgpa));

        if snapshot.semesters.is_empty() {
            out.push_str("\nNo semesters yet. `add-sem` creates one.\n");
            return out;
        }

        let name_width = snapshot
            .semesters
            .iter()
            .flat_map(|s| s.courses.iter())
            .map(|c| display_name(&c.name).chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);

        for sem in &snapshot.semesters {
            out.push_str(&format!("\n{} - GPA: {}\n", sem.label, sem.gpa));
            for (i, course) in sem.courses.iter().enumerate() {
                let grade = course.grade.map(|g| g.symbol()).unwrap_or("-");
                let marker = if course.qualifies() { ' ' } else { '*' };
                out.push_str(&format!(
                    "  {:>2}. {:<name_width$}  {:<2}  {:>2} cr{}\n",
                    i + 1,
                    display_name(&course.name),
                    grade,
                    course.credits,
                    marker,
                ));
            }
        }
        out.push_str("\n  (* = not counted: grade unset or credits 0)\n");
        out
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        UNNAMED
    } else {
        name
    }
}
