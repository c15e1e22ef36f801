//! Metron interactive shell
//!
//! Line-oriented presentation layer over the conversion engine. Plain
//! commands get human-readable output; a line starting with '{' is parsed
//! as a JSON request and answered with a single-line JSON response, so the
//! shell doubles as a scriptable backend. Diagnostics go to stderr, keeping
//! stdout a clean display/protocol channel.
//!
//! Commands:
//! - categories
//! - units <category>
//! - convert <value> <from> <to> <category>
//! - history
//! - help
//! - quit

use std::io::{self, BufRead, IsTerminal, Write};

use metron::{convert, ConversionRecord, History, RECENT_WINDOW, TABLE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// JSON line request
#[derive(Debug, Deserialize)]
struct ConvertRequest {
    value: f64,
    from_unit: String,
    to_unit: String,
    category: String,
}

/// JSON line response; exactly one of the fields is present
#[derive(Debug, Serialize)]
struct ConvertResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Categories,
    Units { category: String },
    Convert {
        value: f64,
        from_unit: String,
        to_unit: String,
        category: String,
    },
    History,
    Help,
    Quit,
}

/// Parse a command line. Category names may contain spaces, so they come
/// last and swallow the remaining tokens.
fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["categories"] => Ok(Command::Categories),
        ["units", category @ ..] if !category.is_empty() => Ok(Command::Units {
            category: category.join(" "),
        }),
        ["convert", value, from_unit, to_unit, category @ ..] if !category.is_empty() => {
            let value = value
                .parse::<f64>()
                .map_err(|_| format!("not a number: {}", value))?;
            Ok(Command::Convert {
                value,
                from_unit: from_unit.to_string(),
                to_unit: to_unit.to_string(),
                category: category.join(" "),
            })
        }
        ["history"] => Ok(Command::History),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        _ => Err("unrecognized command; type 'help'".to_string()),
    }
}

/// Run one command against the session history. Returns false on quit.
fn run_command(command: Command, history: &mut History) -> bool {
    match command {
        Command::Categories => {
            for cat in TABLE.categories() {
                println!("{}", cat.name);
            }
        }
        Command::Units { category } => match TABLE.units_for(&category) {
            Ok(units) => println!("{}", units.join(", ")),
            Err(e) => println!("error: {}", e),
        },
        Command::Convert {
            value,
            from_unit,
            to_unit,
            category,
        } => match convert(value, &from_unit, &to_unit, &category) {
            Ok(result) => {
                println!("{} {} = {:.8} {}", value, from_unit, result, to_unit);
                history.push(ConversionRecord::new(
                    value, &from_unit, result, &to_unit, &category,
                ));
            }
            Err(e) => println!("error: {}", e),
        },
        Command::History => {
            if history.is_empty() {
                println!("no conversions yet");
            } else {
                for record in history.recent() {
                    println!("{}", record);
                }
            }
        }
        Command::Help => print_help(),
        Command::Quit => return false,
    }
    true
}

fn print_help() {
    println!("categories                              list conversion categories");
    println!("units <category>                        list units in a category");
    println!("convert <value> <from> <to> <category>  convert a value");
    println!("history                                 show the {} most recent conversions", RECENT_WINDOW);
    println!("quit                                    exit");
    println!();
    println!("A line starting with '{{' is treated as a JSON request:");
    println!("  {{\"value\": 1, \"from_unit\": \"km\", \"to_unit\": \"mile\", \"category\": \"Length\"}}");
}

/// Handle a JSON request line; always answers with one JSON line
fn handle_json(line: &str, history: &mut History) {
    let response = match serde_json::from_str::<ConvertRequest>(line) {
        Ok(req) => match convert(req.value, &req.from_unit, &req.to_unit, &req.category) {
            Ok(result) => {
                history.push(ConversionRecord::new(
                    req.value,
                    &req.from_unit,
                    result,
                    &req.to_unit,
                    &req.category,
                ));
                ConvertResponse {
                    result: Some(result),
                    error: None,
                }
            }
            Err(e) => ConvertResponse {
                result: None,
                error: Some(e.to_string()),
            },
        },
        Err(e) => ConvertResponse {
            result: None,
            error: Some(format!("parse error: {}", e)),
        },
    };

    match serde_json::to_string(&response) {
        Ok(line) => println!("{}", line),
        Err(e) => eprintln!("failed to serialize response: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let category_count = TABLE.categories().count();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        categories = category_count,
        "metron shell started"
    );

    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("metron unit converter - type 'help' for commands");
    }

    // Session history: owned here, passed to every handler, never global
    let mut history = History::new();

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        if interactive {
            print!("> ");
            let _ = io::stdout().flush();
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "input line");

                if line.starts_with('{') {
                    handle_json(line, &mut history);
                } else {
                    match parse_command(line) {
                        Ok(command) => {
                            if !run_command(command, &mut history) {
                                break;
                            }
                        }
                        Err(e) => println!("error: {}", e),
                    }
                }
            }
            Err(e) => {
                eprintln!("read error: {}", e);
                break;
            }
        }
    }

    info!(conversions = history.len(), "session ended");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        assert_eq!(parse_command("categories").unwrap(), Command::Categories);
    }

    #[test]
    fn test_parse_units_with_spaced_category() {
        assert_eq!(
            parse_command("units Digital Storage").unwrap(),
            Command::Units {
                category: "Digital Storage".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_convert() {
        assert_eq!(
            parse_command("convert 1 km mile Length").unwrap(),
            Command::Convert {
                value: 1.0,
                from_unit: "km".to_string(),
                to_unit: "mile".to_string(),
                category: "Length".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_convert_spaced_category() {
        assert_eq!(
            parse_command("convert 1024 MB GB Digital Storage").unwrap(),
            Command::Convert {
                value: 1024.0,
                from_unit: "MB".to_string(),
                to_unit: "GB".to_string(),
                category: "Digital Storage".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_convert_bad_number() {
        assert!(parse_command("convert one km mile Length").is_err());
    }

    #[test]
    fn test_parse_convert_missing_category() {
        assert!(parse_command("convert 1 km mile").is_err());
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn test_successful_convert_appends_history() {
        let mut history = History::new();
        let command = parse_command("convert 1 km mile Length").unwrap();
        assert!(run_command(command, &mut history));
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].from_unit, "km");
    }

    #[test]
    fn test_failed_convert_leaves_history_untouched() {
        let mut history = History::new();
        let command = parse_command("convert 1 km mile Nonexistent").unwrap();
        assert!(run_command(command, &mut history));
        assert!(history.is_empty());
    }

    #[test]
    fn test_json_request_round_trip() {
        let mut history = History::new();
        handle_json(
            r#"{"value": 1024, "from_unit": "MB", "to_unit": "GB", "category": "Digital Storage"}"#,
            &mut history,
        );
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].to_unit, "GB");
    }

    #[test]
    fn test_json_request_with_unknown_unit() {
        let mut history = History::new();
        handle_json(
            r#"{"value": 5, "from_unit": "xyz", "to_unit": "m", "category": "Length"}"#,
            &mut history,
        );
        assert!(history.is_empty());
    }
}
