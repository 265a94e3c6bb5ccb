//! Command-line interface for the weftc validator

use crate::builder::{build, Description};
use crate::error::{Result, StyleError};
use crate::gradient::{resolve_gradient, Gradient};
use clap::{Arg, Command};
use std::fs;

/// Run the CLI; returns the process exit code.
pub fn run() -> i32 {
    let matches = build_cli().get_matches();
    match matches.subcommand() {
        Some(("check", sub)) => {
            let path = sub.get_one::<String>("input").expect("required arg");
            handle_check(path)
        }
        Some(("build", sub)) => {
            let path = sub.get_one::<String>("input").expect("required arg");
            let output = sub.get_one::<String>("output");
            handle_build(path, output.map(String::as_str))
        }
        Some(("gradient", sub)) => {
            let spec = sub.get_one::<String>("spec").expect("required arg");
            handle_gradient(spec)
        }
        _ => {
            println!("No subcommand specified. Use --help for usage information.");
            0
        }
    }
}

fn build_cli() -> Command {
    Command::new(crate::NAME)
        .version(crate::VERSION)
        .about(crate::DESCRIPTION)
        .subcommand(
            Command::new("check")
                .about("Validate a JSON widget description")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .help("Description file to validate")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Validate a description and emit the normalized tree")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .help("Description file to build")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write the normalized tree here instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("gradient")
                .about("Resolve a structured gradient description to its token")
                .arg(
                    Arg::new("spec")
                        .value_name("JSON")
                        .help("Gradient record, e.g. '{\"type\":\"linear\",...}'")
                        .required(true),
                ),
        )
}

fn load_description(path: &str) -> Result<Description> {
    let text = fs::read_to_string(path).map_err(|e| StyleError::Io(format!("{path}: {e}")))?;
    serde_json::from_str(&text).map_err(|e| StyleError::malformed("description", e.to_string()))
}

fn report_errors(path: &str, errors: &[StyleError]) {
    eprintln!("{path}: {} validation error(s)", errors.len());
    for error in errors {
        eprintln!("  {error}");
    }
}

pub fn handle_check(path: &str) -> i32 {
    let desc = match load_description(path) {
        Ok(desc) => desc,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    match build(&desc) {
        Ok(tree) => {
            println!("{path}: valid <{}> tree", tree.kind.as_str());
            0
        }
        Err(errors) => {
            report_errors(path, &errors);
            1
        }
    }
}

pub fn handle_build(path: &str, output: Option<&str>) -> i32 {
    let desc = match load_description(path) {
        Ok(desc) => desc,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    let tree = match build(&desc) {
        Ok(tree) => tree,
        Err(errors) => {
            report_errors(path, &errors);
            return 1;
        }
    };
    // The tree is a pure value; pretty JSON is its wire form.
    let rendered = match serde_json::to_string_pretty(&tree) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("{path}: {e}");
            return 1;
        }
    };
    match output {
        Some(out_path) => {
            if let Err(e) = fs::write(out_path, rendered + "\n") {
                eprintln!("{out_path}: {e}");
                return 1;
            }
            log::info!("wrote normalized tree to {out_path}");
        }
        None => println!("{rendered}"),
    }
    0
}

pub fn handle_gradient(spec: &str) -> i32 {
    let gradient: Gradient = match serde_json::from_str(spec) {
        Ok(gradient) => gradient,
        Err(e) => {
            eprintln!("malformed gradient record: {e}");
            return 1;
        }
    };
    match resolve_gradient(&gradient) {
        Ok(token) => {
            println!("{token}");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn check_accepts_a_valid_description() {
        let file = write_temp(
            r#"{"kind": "hstack", "children": [
                {"kind": "text", "attrs": {"content": "hi", "font": "body"}}
            ]}"#,
        );
        assert_eq!(handle_check(file.path().to_str().unwrap()), 0);
    }

    #[test]
    fn check_fails_on_schema_violations() {
        let file = write_temp(r#"{"kind": "rect"}"#);
        assert_eq!(handle_check(file.path().to_str().unwrap()), 1);
    }

    #[test]
    fn check_fails_on_unreadable_or_malformed_files() {
        assert_eq!(handle_check("/nonexistent/description.json"), 1);
        let file = write_temp("not json");
        assert_eq!(handle_check(file.path().to_str().unwrap()), 1);
    }

    #[test]
    fn build_writes_the_normalized_tree() {
        let file = write_temp(r#"{"kind": "rect", "attrs": {"corner": "5"}}"#);
        let out = NamedTempFile::new().unwrap();
        let out_path = out.path().to_str().unwrap().to_string();
        assert_eq!(
            handle_build(file.path().to_str().unwrap(), Some(&out_path)),
            0
        );
        let written = std::fs::read_to_string(&out_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["kind"], "rect");
        assert_eq!(value["attrs"]["corner"], "5");
    }

    #[test]
    fn gradient_subcommand_prints_a_token() {
        assert_eq!(
            handle_gradient(
                r#"{"type":"linear","colors":["red","blue"],"startPoint":"top","endPoint":"bottom"}"#
            ),
            0
        );
        assert_eq!(handle_gradient(r#"{"type":"linear"}"#), 1);
    }
}
