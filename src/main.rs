use std::{fs, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use stackeval::{Evaluator, SymbolError, SymbolTable, interpreter::symbol::core::Symbol};

/// Expressions evaluated when nothing is given on the command line.
///
/// The first one closes its outer `sin` explicitly; left open it would be
/// rejected as an unmatched parenthesis.
const DEMO_EXPRESSIONS: &[&str] =
    &["sin(x - sin(2 * pow(1 + 3 + 4.88 / 45 - 9, 0.33 - x)) + sin(1 + 3.1415 / x))",
      "3 + 3",
      "0.0 -1.0"];

/// stackeval evaluates infix arithmetic expressions with an operator stack and
/// a value stack.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line. Blank lines and lines
    /// starting with `#` are skipped.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Binds an extra variable, for example `-D rate=0.5`.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    definitions: Vec<(String, f64)>,

    /// Lists every known symbol and exits.
    #[arg(long)]
    list: bool,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate, in order.
    expressions: Vec<String>,
}

fn parse_definition(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.trim().to_string(), value))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

fn build_table(definitions: &[(String, f64)]) -> Result<SymbolTable, SymbolError> {
    let builder = definitions.iter()
                             .try_fold(SymbolTable::builder(), |builder, (name, value)| {
                                 builder.define(name, *value)
                             })?;
    Ok(builder.build())
}

fn print_symbols(table: &SymbolTable) {
    for (name, symbol) in table.symbols() {
        match symbol {
            Symbol::Variable(value) => println!("{name:<8} {} = {value}", symbol.kind()),
            _ => println!("{name:<8} {}", symbol.kind()),
        }
    }
}

fn read_expressions(args: &Args) -> Result<Vec<String>, String> {
    let mut expressions = args.expressions.clone();

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).map_err(|e| {
                                                 format!("Failed to read the input file '{}': {e}",
                                                         path.display())
                                             })?;
        expressions.extend(script.lines()
                                 .map(str::trim)
                                 .filter(|line| !line.is_empty() && !line.starts_with('#'))
                                 .map(str::to_string));
    } else if expressions.is_empty() {
        expressions.extend(DEMO_EXPRESSIONS.iter().map(|e| (*e).to_string()));
    }

    Ok(expressions)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = match build_table(&args.definitions) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.list {
        print_symbols(&table);
        return ExitCode::SUCCESS;
    }

    let expressions = match read_expressions(&args) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut evaluator = Evaluator::new(&table);
    let mut failed = false;
    for expression in &expressions {
        match evaluator.evaluate(expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error in '{expression}': {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
