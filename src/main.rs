use std::{fs, process};

use clap::Parser;
use varcalc::VariableMap;

/// varcalc evaluates arithmetic expressions and variable-driven formulas.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells varcalc to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Variable bindings of the form name=value; when present, the
    /// expression is parsed once and evaluated against them.
    #[arg(short, long = "bind", value_name = "NAME=VALUE")]
    bindings: Vec<String>,

    expression: String,
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            process::exit(1);
        })
    } else {
        args.expression
    };

    let result = if args.bindings.is_empty() {
        varcalc::evaluate(&expression)
    } else {
        let variables = parse_bindings(&args.bindings);
        varcalc::evaluate_with(&expression, &variables)
    };

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Collects `name=value` pairs from the command line into a variable map.
///
/// Exits with a message when a pair is not of the expected form.
fn parse_bindings(pairs: &[String]) -> VariableMap {
    let mut variables = VariableMap::new();

    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            eprintln!("Invalid binding '{pair}'. Bindings are written as name=value, e.g. x=4.");
            process::exit(1);
        };
        let Ok(value) = value.parse::<f64>() else {
            eprintln!("Invalid binding '{pair}'. The value must be numeric.");
            process::exit(1);
        };
        variables.insert(name.to_string(), value);
    }

    variables
}
