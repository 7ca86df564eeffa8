//! Style Linter: checks a RON style pack for authoring mistakes.
//!
//! Usage: style_linter <pack.ron> [<pack.ron> ...]
//!
//! Exits non-zero when any pack has errors or fails to parse.

use std::path::Path;
use std::process;
use weird_names::core::registry::{lint_ron, Severity};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: style_linter <pack.ron> [<pack.ron> ...]");
        process::exit(0);
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &args[1..] {
        let path = Path::new(file);
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ERROR: Failed to read '{}': {}", path.display(), e);
                total_errors += 1;
                continue;
            }
        };

        println!("\n=== {} ===\n", path.display());

        let issues = match lint_ron(&contents) {
            Ok(issues) => issues,
            Err(e) => {
                println!("ERROR: Failed to parse: {}", e);
                total_errors += 1;
                continue;
            }
        };

        if issues.is_empty() {
            println!("All checks passed!");
        }
        for issue in &issues {
            println!("{}", issue);
        }

        total_errors += issues.iter().filter(|i| i.severity == Severity::Error).count();
        total_warnings += issues.iter().filter(|i| i.severity == Severity::Warning).count();
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        total_errors, total_warnings
    );

    if total_errors > 0 {
        process::exit(1);
    }
}
