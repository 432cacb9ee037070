// wordgrid-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use wordgrid_dawg::Dawg;

/// Dictionary file name.
const WORDS_DAT: &str = "words.dat";

/// Load the compiled dictionary.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory containing `words.dat`)
/// 2. `WORDGRID_DICT_PATH` environment variable (likewise)
/// 3. `~/.wordgrid/words.dat`
/// 4. `words.dat` in the current working directory
pub fn load_dawg(dict_path: Option<&str>) -> Result<Dawg, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let file = if candidate.is_dir() {
            candidate.join(WORDS_DAT)
        } else {
            candidate.clone()
        };
        if file.is_file() {
            return Dawg::load(&file)
                .map_err(|e| format!("failed to load {}: {e}", file.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORDS_DAT,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("WORDGRID_DICT_PATH") {
        paths.push(PathBuf::from(&env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".wordgrid").join(WORDS_DAT));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_DAT));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Pull the value of `--name VALUE` / `--name=VALUE` out of `args`,
/// removing both tokens. Returns `None` when the flag is absent.
pub fn take_flag(args: &mut Vec<String>, name: &str) -> Option<String> {
    let eq_prefix = format!("{name}=");
    let mut i = 0;
    while i < args.len() {
        if let Some(val) = args[i].strip_prefix(&eq_prefix) {
            let val = val.to_string();
            args.remove(i);
            return Some(val);
        }
        if args[i] == name {
            if i + 1 >= args.len() {
                eprintln!("error: {name} requires a value");
                process::exit(1);
            }
            args.remove(i);
            return Some(args.remove(i));
        }
        i += 1;
    }
    None
}

/// `take_flag` parsed as an integer, with a default.
pub fn take_int_flag<T: std::str::FromStr>(args: &mut Vec<String>, name: &str, default: T) -> T {
    match take_flag(args, name) {
        Some(raw) => raw
            .parse()
            .unwrap_or_else(|_| fatal(&format!("{name} wants a number, got {raw:?}"))),
        None => default,
    }
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Arrange words into display rows of `columns` cells, column-major, each
/// cell padded to the longest word. The last rows may run short.
pub fn columnize(words: &[String], columns: usize) -> Vec<String> {
    if words.is_empty() || columns == 0 {
        return Vec::new();
    }
    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
    let rows = words.len().div_ceil(columns);
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..columns {
            let index = col * rows + row;
            if let Some(word) = words.get(index) {
                if !line.is_empty() {
                    line.push_str("  ");
                }
                line.push_str(&format!("{word:width$}"));
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}
