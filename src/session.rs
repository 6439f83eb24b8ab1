//! Session - owned application state and command dispatch
//!
//! A `Session` owns the grade table and its store. Its lifecycle is
//! load-from-store-or-empty at open and a final persist at teardown.
//! Each command runs to completion before the next: mutate, capture a
//! snapshot of the derived values, persist. Rejected commands (bad
//! indices, malformed imports) leave the table exactly as it was.

use std::fs;

use log::{debug, info};

use crate::core::GradeTable;
use crate::exchange::{self, EXPORT_FILE_NAME};
use crate::protocol::{Command, Response};
use crate::store::Store;
use crate::view::TableSnapshot;

/// The running application: one table, one store
pub struct Session {
    table: GradeTable,
    store: Store,
}

impl Session {
    /// Open a session, loading the persisted table or starting empty
    pub fn open(store: Store) -> Self {
        let table = store.load();
        info!(
            "session opened with {} semester(s) from {}",
            table.len(),
            store.path().display()
        );
        Self { table, store }
    }

    /// Current table contents
    pub fn table(&self) -> &GradeTable {
        &self.table
    }

    /// Capture the table plus derived values
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(&self.table)
    }

    /// Process one command and return the response.
    ///
    /// Successful mutations persist before returning; read-only commands
    /// and rejected commands do not touch the store.
    pub fn apply(&mut self, cmd: Command) -> Response {
        debug!("apply: {:?}", cmd);
        match cmd {
            Command::AddSemester => {
                self.table.add_semester();
                self.commit()
            }

            Command::DeleteSemester { sem } => match self.table.delete_semester(sem) {
                Ok(()) => self.commit(),
                Err(err) => reject(err),
            },

            Command::AddCourse { sem } => match self.table.add_course(sem) {
                Ok(()) => self.commit(),
                Err(err) => reject(err),
            },

            Command::DeleteCourse { sem, course } => {
                match self.table.delete_course(sem, course) {
                    Ok(()) => self.commit(),
                    Err(err) => reject(err),
                }
            }

            Command::UpdateCourse { sem, course, field, value } => {
                match self.table.update_course(sem, course, field, &value) {
                    Ok(()) => self.commit(),
                    Err(err) => reject(err),
                }
            }

            Command::Reset => {
                self.table.reset();
                self.commit()
            }

            Command::Export { path } => {
                let path = path.unwrap_or_else(|| EXPORT_FILE_NAME.to_string());
                let json = exchange::export_json(&self.table);
                match fs::write(&path, json) {
                    Ok(()) => {
                        info!("exported table to {}", path);
                        Response::Ok
                    }
                    Err(err) => Response::Error {
                        message: format!("could not write {}: {}", path, err),
                    },
                }
            }

            Command::Import { path } => {
                let content = match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(err) => {
                        return Response::Error {
                            message: format!("could not read {}: {}", path, err),
                        }
                    }
                };
                match exchange::import_json(&content) {
                    Ok(semesters) => {
                        info!("imported {} semester(s) from {}", semesters.len(), path);
                        self.table.replace(semesters);
                        self.commit()
                    }
                    Err(err) => Response::Error {
                        message: err.to_string(),
                    },
                }
            }

            Command::Refresh => Response::Table {
                snapshot: self.snapshot(),
            },
        }
    }

    /// Persist after a successful mutation and hand back the new state
    fn commit(&mut self) -> Response {
        self.store.save(&self.table);
        Response::Table {
            snapshot: self.snapshot(),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.store.save(&self.table);
    }
}

fn reject(err: crate::core::TableError) -> Response {
    Response::Error {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CourseField;

    fn temp_session(tag: &str) -> Session {
        let path = std::env::temp_dir()
            .join(format!("gpa-jotter-session-{}-{}", std::process::id(), tag))
            .join("store.json");
        let _ = fs::remove_file(&path);
        Session::open(Store::at(path))
    }

    fn snapshot(resp: Response) -> TableSnapshot {
        match resp {
            Response::Table { snapshot } => snapshot,
            other => panic!("expected table response, got {:?}", other),
        }
    }

    #[test]
    fn test_mutations_return_fresh_snapshot() {
        let mut session = temp_session("mutate");
        let snap = snapshot(session.apply(Command::AddSemester));
        assert_eq!(snap.semesters.len(), 1);
        assert_eq!(snap.semesters[0].label, "Semester 1");

        let snap = snapshot(session.apply(Command::UpdateCourse {
            sem: 0,
            course: 0,
            field: CourseField::Credits,
            value: "abc".to_string(),
        }));
        // parse-or-zero policy, not an error state
        assert_eq!(snap.semesters[0].courses[0].credits, 0);
        assert_eq!(snap.cgpa, "0.00");
    }

    #[test]
    fn test_bad_index_is_rejected_without_mutation() {
        let mut session = temp_session("reject");
        session.apply(Command::AddSemester);

        let resp = session.apply(Command::DeleteSemester { sem: 5 });
        assert!(matches!(resp, Response::Error { .. }));
        assert_eq!(session.table().len(), 1);
    }

    #[test]
    fn test_state_survives_reopen() {
        let path = std::env::temp_dir()
            .join(format!("gpa-jotter-session-{}-reopen", std::process::id()))
            .join("store.json");
        let _ = fs::remove_file(&path);

        {
            let mut session = Session::open(Store::at(path.clone()));
            session.apply(Command::AddSemester);
            session.apply(Command::UpdateCourse {
                sem: 0,
                course: 0,
                field: CourseField::Name,
                value: "Compilers".to_string(),
            });
        }

        let session = Session::open(Store::at(path.clone()));
        assert_eq!(session.table().semester(0).unwrap().courses[0].name, "Compilers");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_failure_leaves_table_untouched() {
        let mut session = temp_session("import-fail");
        session.apply(Command::AddSemester);

        let bad = std::env::temp_dir().join(format!(
            "gpa-jotter-bad-import-{}.json",
            std::process::id()
        ));
        fs::write(&bad, r#"{"not": "a sequence"}"#).unwrap();

        let resp = session.apply(Command::Import {
            path: bad.to_string_lossy().into_owned(),
        });
        assert!(matches!(resp, Response::Error { .. }));
        assert_eq!(session.table().len(), 1);
        let _ = fs::remove_file(&bad);
    }

    #[test]
    fn test_export_import_round_trip_through_files() {
        let mut session = temp_session("round-trip");
        session.apply(Command::AddSemester);
        session.apply(Command::UpdateCourse {
            sem: 0,
            course: 0,
            field: CourseField::Grade,
            value: "B+".to_string(),
        });
        let before = session.table().clone();

        let artifact = std::env::temp_dir().join(format!(
            "gpa-jotter-artifact-{}.json",
            std::process::id()
        ));
        let path = artifact.to_string_lossy().into_owned();
        assert!(matches!(
            session.apply(Command::Export { path: Some(path.clone()) }),
            Response::Ok
        ));

        session.apply(Command::Reset);
        session.apply(Command::Import { path });
        assert_eq!(*session.table(), before);
        let _ = fs::remove_file(&artifact);
    }
}
