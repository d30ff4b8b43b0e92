use std::{
    fmt::Write as _,
    fs,
    io::{self, BufRead},
};

use calcpad::{
    evaluate, interpreter::parser::core::to_postfix, token::join, try_evaluate,
    util::num::format_real,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcpad evaluates infix arithmetic expressions built from numbers,
/// `+ - * / % ^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcpad to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of each expression instead of its value.
    #[arg(short, long)]
    postfix: bool,

    /// Reports invalid expressions instead of printing 0.0 for them.
    #[arg(short, long)]
    strict: bool,

    /// An expression, or a path when `--file` is given. Read from stdin when
    /// omitted.
    contents: Option<String>,
}

/// What a run writes to stdout and stderr, and whether it failed.
#[derive(Debug, Default)]
struct Report {
    stdout: String,
    stderr: String,
    failed: bool,
}

impl Report {
    const fn exit_code(&self) -> i32 {
        if self.failed { 1 } else { 0 }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let lines: Vec<String> = match (&args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            script.lines().map(str::to_string).collect()
        },
        (Some(expression), false) => vec![expression.clone()],
        (None, _) => io::stdin().lock().lines().map_while(Result::ok).collect(),
    };

    let report = run_all(lines.iter().map(String::as_str), &args);
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);
    if report.failed {
        std::process::exit(report.exit_code());
    }
}

/// Trims each line and drops blank lines and `#` comments.
fn expressions<'a>(lines: impl IntoIterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    lines.into_iter()
         .map(str::trim)
         .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn run_all<'a>(lines: impl IntoIterator<Item = &'a str>, args: &Args) -> Report {
    let mut report = Report::default();

    for expression in expressions(lines) {
        match run(expression, args) {
            Ok(output) => {
                let _ = writeln!(report.stdout, "{output}");
            },
            Err(message) => {
                let _ = writeln!(report.stderr, "Invalid input: {message}");
                report.failed = true;
            },
        }
    }

    report
}

/// Produces the output line for one expression.
fn run(expression: &str, args: &Args) -> Result<String, String> {
    if args.postfix {
        return match to_postfix(expression) {
            Ok(postfix) => Ok(join(&postfix)),
            Err(e) if args.strict => Err(e.to_string()),
            Err(_) => Ok(String::new()),
        };
    }

    let value = if args.strict {
        try_evaluate(expression).map_err(|e| e.to_string())?
    } else {
        evaluate(expression)
    };
    Ok(format_real(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("calcpad").chain(flags.iter().copied()))
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let script = "# header\n\n  2+3*4  \n   \n  # note\n(2+3)*4\n";
        let report = run_all(script.lines(), &args(&["--file", "cases.calc"]));
        assert_eq!(report.stdout, "14.0\n20.0\n");
        assert_eq!(report.stderr, "");
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn failures_print_zero_without_strict() {
        let report = run_all(["2+3)", "1.2.3"], &args(&[]));
        assert_eq!(report.stdout, "0.0\n0.0\n");
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn postfix_failure_prints_empty_line_without_strict() {
        let report = run_all(["2+3*4", "2+3)"], &args(&["--postfix"]));
        assert_eq!(report.stdout, "2 3 4 * +\n\n");
        assert_eq!(report.stderr, "");
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn strict_reports_invalid_input_and_fails() {
        let report = run_all(["2+3)", "1+1"], &args(&["--strict"]));
        assert_eq!(report.stdout, "2.0\n");
        assert_eq!(report.stderr,
                   "Invalid input: Unbalanced parenthesis: ')' at token 3 has no matching '('.\n");
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn strict_postfix_reports_invalid_input() {
        let report = run_all(["1..2"], &args(&["-s", "-p"]));
        assert_eq!(report.stdout, "");
        assert_eq!(report.stderr, "Invalid input: Malformed number literal '1..2'.\n");
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn division_by_zero_is_not_a_strict_failure() {
        let report = run_all(["10/0"], &args(&["--strict"]));
        assert_eq!(report.stdout, "Infinity\n");
        assert_eq!(report.exit_code(), 0);
    }
}
