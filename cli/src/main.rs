//! globtrie CLI - driving adapter for the glob trie matcher.
//!
//! Subcommands:
//! - `match <config> [--quiet] <candidate>...` - check candidates against a pattern config
//! - `check <config>` - validate config loads without errors
//! - `dump <config>` - print the trie with per-node attributes
//!
//! Logging goes to stderr; set `RUST_LOG` (e.g. `RUST_LOG=globtrie=debug`).

use std::process;

use globtrie::{GlobTrie, TrieConfig};
use tracing_subscriber::EnvFilter;

/// Exit code for `match --quiet` when at least one candidate did not match.
const EXIT_NO_MATCH: i32 = 2;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "match" => cmd_match(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "dump" => cmd_dump(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(true)
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_NO_MATCH),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

/// Returns `Ok(false)` only in quiet mode, when some candidate missed.
fn cmd_match(args: &[String]) -> Result<bool, String> {
    let opts = parse_match_args(args)?;

    let trie = load_trie(&opts.config_path)?;
    let verdicts = evaluate(&trie, &opts.candidates);

    if opts.quiet {
        return Ok(verdicts.iter().all(|(_, matched)| *matched));
    }

    for (candidate, matched) in verdicts {
        let verdict = if matched { "match" } else { "no match" };
        println!("{candidate}\t{verdict}");
    }
    Ok(true)
}

fn cmd_check(args: &[String]) -> Result<bool, String> {
    let config_path = args.first().ok_or("check requires a config file path")?;

    let config = load_config(config_path)?;
    let trie = config.build().map_err(|e| format!("config invalid: {e}"))?;

    println!(
        "Config valid ({} patterns, {} nodes)",
        config.patterns.len(),
        trie.node_count()
    );
    Ok(true)
}

fn cmd_dump(args: &[String]) -> Result<bool, String> {
    let config_path = args.first().ok_or("dump requires a config file path")?;

    let trie = load_trie(config_path)?;
    print!("{}", trie.dump());
    Ok(true)
}

fn evaluate<'a>(trie: &GlobTrie, candidates: &'a [String]) -> Vec<(&'a str, bool)> {
    candidates
        .iter()
        .map(|c| (c.as_str(), trie.is_match(c)))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_trie(path: &str) -> Result<GlobTrie, String> {
    load_config(path)?
        .build()
        .map_err(|e| format!("config load failed: {e}"))
}

fn load_config(path: &str) -> Result<TrieConfig, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: TrieConfig = if is_json {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))?
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))?
    };

    tracing::debug!(path, patterns = config.patterns.len(), "loaded config");
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, PartialEq, Eq)]
struct MatchArgs {
    config_path: String,
    quiet: bool,
    candidates: Vec<String>,
}

fn parse_match_args(args: &[String]) -> Result<MatchArgs, String> {
    let mut config_path = None;
    let mut quiet = false;
    let mut candidates = Vec::new();
    let mut positional_only = false;

    for arg in args {
        match arg.as_str() {
            "--quiet" | "-q" if !positional_only => quiet = true,
            "--" if !positional_only => positional_only = true,
            flag if flag.starts_with("--") && !positional_only => {
                return Err(format!("unexpected argument \"{flag}\""));
            }
            value if config_path.is_none() => config_path = Some(value.to_owned()),
            value => candidates.push(value.to_owned()),
        }
    }

    let config_path = config_path.ok_or("match requires a config file path")?;
    if candidates.is_empty() {
        return Err("match requires at least one candidate".into());
    }

    Ok(MatchArgs {
        config_path,
        quiet,
        candidates,
    })
}

fn print_usage() {
    eprintln!(
        "Usage: globtrie <command> [options]

Commands:
  match <config> [--quiet] <candidate>...   Check candidates against the patterns
  check <config>                            Validate config
  dump <config>                             Print the trie with node attributes
  help                                      Show this help

Configs are YAML (default) or JSON (.json):
  case_insensitive: false
  patterns:
    - /static/*

With --quiet, match prints nothing and exits {EXIT_NO_MATCH} if any candidate misses."
    );
}
