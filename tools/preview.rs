//! Preview: interactive shell for generating names.
//!
//! Usage: preview [--styles <pack.ron>] [--seed <n>]
//!
//! Commands:
//!   style <name>               set active style
//!   gender <g>                 feminine, masculine or neutral
//!   gen [n]                    generate n names (default 1)
//!   bulk <n>                   generate n distinct names
//!   punct on|off|max <n>       toggle decoration or set the per-name cap
//!   syllables <min> <max>      override the style's syllable range
//!   seed <n>                   reseed the generator
//!   history                    list names generated this session
//!   clear                      clear the history
//!   styles                     list available styles
//!   help                       list commands
//!   quit                       exit
//!
//! Set RUST_LOG=weird_names=debug to watch attempt counts.

use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use weird_names::core::config::GenerationOptions;
use weird_names::core::generator::{GenerationRequest, NameGenerator};
use weird_names::schema::gender::GenderCharacteristic;
use weird_names::schema::name::GeneratedName;
use weird_names::schema::punctuation::PunctuationOptions;
use weird_names::schema::style::NameStyle;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut styles_path = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--styles" if i + 1 < args.len() => {
                i += 1;
                styles_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = match args[i].parse() {
                    Ok(s) => s,
                    Err(_) => {
                        eprintln!("Invalid seed: {}", args[i]);
                        print_usage();
                        std::process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = NameGenerator::builder().seed(seed);
    if let Some(ref path) = styles_path {
        builder = builder.style_pack(path);
    }
    let mut generator = match builder.build() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("ERROR: Failed to load styles: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} styles", generator.registry().styles().len());
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let mut request = GenerationRequest::default();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview [{} / {}]> ", request.style, request.gender);
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "style" => {
                let Some(name) = parts.get(1) else {
                    println!("Usage: style <name>");
                    continue;
                };
                let style = NameStyle::from_name(name);
                if generator.registry().style(&style).is_none() {
                    println!("Unknown style: {}. Type 'styles' to list them.", name);
                    continue;
                }
                request.style = style;
                println!("Style set to {}", request.style);
            }
            "gender" => {
                match parts.get(1).and_then(|g| GenderCharacteristic::from_name(g)) {
                    Some(gender) => {
                        request.gender = gender;
                        println!("Gender set to {}", gender);
                    }
                    None => println!("Usage: gender feminine|masculine|neutral"),
                }
            }
            "gen" | "g" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
                for _ in 0..n {
                    match generator.generate(&request) {
                        Ok(name) => print_name(&name),
                        Err(e) => println!("  Error: {}", e),
                    }
                }
            }
            "bulk" => {
                let Some(n) = parts.get(1).and_then(|s| s.parse::<usize>().ok()) else {
                    println!("Usage: bulk <n>");
                    continue;
                };
                match generator.bulk_generate(n, &request) {
                    Ok(names) => {
                        for name in &names {
                            print_name(name);
                        }
                        print_stats(&names);
                    }
                    Err(e) => println!("  Error: {}", e),
                }
            }
            "punct" => match (parts.get(1).copied(), parts.get(2)) {
                (Some("on"), _) => {
                    request.punctuation.enabled = true;
                    println!("Decoration on (max {} per name)", request.punctuation.max_per_name);
                }
                (Some("off"), _) => {
                    request.punctuation.enabled = false;
                    println!("Decoration off");
                }
                (Some("max"), Some(n)) => match n.parse() {
                    Ok(max) => {
                        request.punctuation = PunctuationOptions {
                            max_per_name: max,
                            ..request.punctuation.clone()
                        };
                        println!("Max decorations per name: {}", max);
                    }
                    Err(_) => println!("Invalid number: {}", n),
                },
                _ => println!("Usage: punct on|off|max <n>"),
            },
            "syllables" => {
                let min = parts.get(1).and_then(|s| s.parse().ok());
                let max = parts.get(2).and_then(|s| s.parse().ok());
                match (min, max) {
                    (Some(min), Some(max)) => {
                        request.options = GenerationOptions {
                            min_syllables: Some(min),
                            max_syllables: Some(max),
                            ..request.options.clone()
                        };
                        println!("Syllables: {}..={}", min, max);
                    }
                    _ => {
                        request.options.min_syllables = None;
                        request.options.max_syllables = None;
                        println!("Syllables: style default");
                    }
                }
            }
            "seed" => match parts.get(1).and_then(|s| s.parse::<u64>().ok()) {
                Some(seed) => {
                    generator.reseed(seed);
                    println!("Seed set to {}", seed);
                }
                None => println!("Usage: seed <n>"),
            },
            "history" => {
                if generator.history().is_empty() {
                    println!("  (empty)");
                }
                for (i, name) in generator.history().iter().enumerate() {
                    println!("  {:>3}. {} [{}, {}]", i + 1, name.name, name.style, name.gender);
                }
            }
            "clear" => {
                generator.clear_history();
                println!("History cleared.");
            }
            "styles" => {
                for style in generator.registry().styles() {
                    let marker = if style == request.style { "*" } else { " " };
                    println!("  {} {}", marker, style);
                }
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn print_name(name: &GeneratedName) {
    println!(
        "  {:<16} {} (stress {})",
        name.name,
        name.syllables.join("·"),
        name.stress_pattern
    );
}

fn print_stats(names: &[GeneratedName]) {
    if names.is_empty() {
        return;
    }
    let total: usize = names.iter().map(|n| n.name.chars().count()).sum();
    let decorated = names
        .iter()
        .filter(|n| n.name.chars().any(|c| !c.is_ascii_alphabetic()))
        .count();
    println!(
        "\n  {} names, avg length {:.1}, {} decorated",
        names.len(),
        total as f64 / names.len() as f64,
        decorated
    );
}

fn print_usage() {
    println!("Usage: preview [--styles <pack.ron>] [--seed <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  style <name>             Set active style");
    println!("  gender <g>               feminine, masculine or neutral");
    println!("  gen [n]                  Generate n names (default 1)");
    println!("  bulk <n>                 Generate n distinct names");
    println!("  punct on|off|max <n>     Toggle decoration or set the per-name cap");
    println!("  syllables <min> <max>    Override the syllable range (no args resets)");
    println!("  seed <n>                 Reseed the generator");
    println!("  history                  List names generated this session");
    println!("  clear                    Clear the history");
    println!("  styles                   List available styles");
    println!("  help                     Show this help");
    println!("  quit                     Exit");
}
