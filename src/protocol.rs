//! GPA Jotter protocol
//!
//! JSON-tagged commands and responses covering every table mutation plus
//! import/export and refresh. Front ends send commands, the session sends
//! back the result and a fresh table snapshot.
//!
//! Example:
//! ```json
//! {"cmd": "update_course", "sem": 0, "course": 1, "field": "grade", "value": "B+"}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::CourseField;
use crate::view::TableSnapshot;

/// Commands from a front end to the session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Append a new semester with one default course
    AddSemester,

    /// Remove the semester at `sem`; later semesters shift down
    DeleteSemester {
        sem: usize,
    },

    /// Append a default course to the semester at `sem`
    AddCourse {
        sem: usize,
    },

    /// Remove one course; later courses in the semester shift down
    DeleteCourse {
        sem: usize,
        course: usize,
    },

    /// Set one field on a course. Credits values are coerced through the
    /// parse-or-zero policy; unknown grade symbols unset the grade.
    UpdateCourse {
        sem: usize,
        course: usize,
        field: CourseField,
        value: String,
    },

    /// Clear every semester
    Reset,

    /// Write the table to a file as indented JSON
    /// (default file name: gpa_data.json)
    Export {
        #[serde(default)]
        path: Option<String>,
    },

    /// Replace the table with the contents of a file
    Import {
        path: String,
    },

    /// Request a snapshot without mutating anything
    Refresh,
}

/// Responses from the session to the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Command applied; here is the resulting table
    Table {
        snapshot: TableSnapshot,
    },

    /// Command rejected; state is unchanged
    Error {
        message: String,
    },

    /// Command applied with nothing to show (export)
    Ok,
}

/// Parse a command from JSON
pub fn parse_command(json: &str) -> Result<Command, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a response to JSON
pub fn serialize_response(response: &Response) -> String {
    serde_json::to_string(response)
        .unwrap_or_else(|_| r#"{"type":"error","message":"Serialization failed"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_semester() {
        let cmd = parse_command(r#"{"cmd":"add_semester"}"#).unwrap();
        assert!(matches!(cmd, Command::AddSemester));
    }

    #[test]
    fn test_parse_update_course() {
        let json = r#"{"cmd":"update_course","sem":0,"course":2,"field":"credits","value":"4"}"#;
        let cmd = parse_command(json).unwrap();
        match cmd {
            Command::UpdateCourse { sem, course, field, value } => {
                assert_eq!(sem, 0);
                assert_eq!(course, 2);
                assert_eq!(field, CourseField::Credits);
                assert_eq!(value, "4");
            }
            _ => panic!("Wrong command type"),
        }
    }

    #[test]
    fn test_parse_export_default_path() {
        let cmd = parse_command(r#"{"cmd":"export"}"#).unwrap();
        match cmd {
            Command::Export { path } => assert!(path.is_none()),
            _ => panic!("Wrong command type"),
        }
    }

    #[test]
    fn test_parse_unknown_command_fails() {
        assert!(parse_command(r#"{"cmd":"explode"}"#).is_err());
    }

    #[test]
    fn test_serialize_error_response() {
        let json = serialize_response(&Response::Error {
            message: "semester index 3 out of range (table has 1)".to_string(),
        });
        assert!(json.contains(r#""type":"error""#));
        assert!(json.contains("out of range"));
    }
}
