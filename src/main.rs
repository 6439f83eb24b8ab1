//! GPA Jotter binary
//!
//! Run with: cargo run -- [options]
//!
//! Options:
//!   --data <path>  Store the table at <path> instead of the default
//!                  user data directory location
//!
//! Commands are read line by line from stdin; `help` lists the grammar.
//! Indices shown and accepted are 1-based, matching the semester labels.

use std::env;
use std::io::{self, BufRead, Write};

use log::info;

use gpa_jotter::core::CourseField;
use gpa_jotter::{Command, Response, Session, Store, TextView, View};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let mut data_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                if i + 1 < args.len() {
                    data_path = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --data requires a path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("GPA Jotter v0.1.0");
                println!();
                println!("Usage: gpa-jotter [options]");
                println!();
                println!("Options:");
                println!("  --data <path>  Store file location (default: user data dir)");
                println!("  --help, -h     Show this help");
                println!();
                print_grammar();
                std::process::exit(0);
            }
            arg => {
                eprintln!("Error: unknown argument '{}'", arg);
                std::process::exit(1);
            }
        }
    }

    let store = match data_path {
        Some(path) => Store::at(path),
        None => match Store::default_path() {
            Some(path) => Store::at(path),
            None => {
                eprintln!("Error: no user data directory; pass --data <path>");
                std::process::exit(1);
            }
        },
    };

    info!("GPA Jotter v0.1.0");
    info!("store: {}", store.path().display());

    let mut session = Session::open(store);
    let view = TextView::new();

    println!("{}", view.render(&session.snapshot()));
    println!("Type `help` for commands.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        if input == "help" {
            print_grammar();
            continue;
        }

        let cmd = match parse_line(input) {
            Ok(cmd) => cmd,
            Err(msg) => {
                eprintln!("{}", msg);
                continue;
            }
        };

        match session.apply(cmd) {
            Response::Table { snapshot } => println!("{}", view.render(&snapshot)),
            Response::Ok => println!("Done."),
            Response::Error { message } => eprintln!("Error: {}", message),
        }
    }
    // Session teardown persists the table
}

fn print_grammar() {
    println!("Commands:");
    println!("  add-sem                        Add a semester");
    println!("  del-sem <S>                    Delete semester S");
    println!("  add-course <S>                 Add a course to semester S");
    println!("  del-course <S> <C>             Delete course C of semester S");
    println!("  set <S> <C> name <text>        Rename a course");
    println!("  set <S> <C> grade <symbol>     O, A+, A, B+, B, C+ or C");
    println!("  set <S> <C> credits <n>        Non-numeric input becomes 0");
    println!("  show                           Redisplay the table");
    println!("  export [path]                  Write gpa_data.json (or <path>)");
    println!("  import <path>                  Replace the table from a file");
    println!("  reset                          Delete all semesters");
    println!("  quit                           Save and exit");
}

/// Map one input line onto a protocol command. Indices in the grammar are
/// 1-based; the protocol is 0-based.
fn parse_line(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let word = parts.next().unwrap_or("");

    match word {
        "add-sem" => Ok(Command::AddSemester),
        "del-sem" => Ok(Command::DeleteSemester {
            sem: parse_index(parts.next(), "semester")?,
        }),
        "add-course" => Ok(Command::AddCourse {
            sem: parse_index(parts.next(), "semester")?,
        }),
        "del-course" => Ok(Command::DeleteCourse {
            sem: parse_index(parts.next(), "semester")?,
            course: parse_index(parts.next(), "course")?,
        }),
        "set" => {
            let sem = parse_index(parts.next(), "semester")?;
            let course = parse_index(parts.next(), "course")?;
            let field = match parts.next() {
                Some("name") => CourseField::Name,
                Some("grade") => CourseField::Grade,
                Some("credits") => CourseField::Credits,
                _ => return Err("Expected field: name, grade or credits".to_string()),
            };
            let value = parts.collect::<Vec<_>>().join(" ");
            Ok(Command::UpdateCourse {
                sem,
                course,
                field,
                value,
            })
        }
        "reset" => Ok(Command::Reset),
        "show" => Ok(Command::Refresh),
        "export" => Ok(Command::Export {
            path: parts.next().map(str::to_string),
        }),
        "import" => match parts.next() {
            Some(path) => Ok(Command::Import {
                path: path.to_string(),
            }),
            None => Err("Usage: import <path>".to_string()),
        },
        other => Err(format!("Unknown command '{}'; try `help`", other)),
    }
}

/// Parse a 1-based index argument down to the protocol's 0-based form
fn parse_index(arg: Option<&str>, what: &str) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| format!("Missing {} number", what))?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{}' is not a valid {} number (1-based)", arg, what)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_indices_are_one_based() {
        match parse_line("del-course 2 3").unwrap() {
            Command::DeleteCourse { sem, course } => {
                assert_eq!(sem, 1);
                assert_eq!(course, 2);
            }
            _ => panic!("Wrong command type"),
        }
    }

    #[test]
    fn test_parse_set_name_keeps_spaces() {
        match parse_line("set 1 1 name Linear Algebra II").unwrap() {
            Command::UpdateCourse { field, value, .. } => {
                assert_eq!(field, CourseField::Name);
                assert_eq!(value, "Linear Algebra II");
            }
            _ => panic!("Wrong command type"),
        }
    }

    #[test]
    fn test_parse_rejects_zero_index() {
        assert!(parse_line("del-sem 0").is_err());
        assert!(parse_line("del-sem x").is_err());
    }

    #[test]
    fn test_parse_export_optional_path() {
        match parse_line("export").unwrap() {
            Command::Export { path } => assert!(path.is_none()),
            _ => panic!("Wrong command type"),
        }
        match parse_line("export sems.json").unwrap() {
            Command::Export { path } => assert_eq!(path.as_deref(), Some("sems.json")),
            _ => panic!("Wrong command type"),
        }
    }
}
