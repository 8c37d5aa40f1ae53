//! Implementation of the `kalkon eval` command.

use clap::ValueEnum;
use kalkon::{CalcError, Calculator, Outcome, Radix};
use serde::Serialize;

use crate::output::SyntaxDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Expression to evaluate
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Output radix for integer results
    #[arg(long, value_enum, default_value_t = RadixArg::Dec)]
    pub radix: RadixArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output radix choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RadixArg {
    Dec,
    Hex,
    Bin,
}

impl From<RadixArg> for Radix {
    fn from(arg: RadixArg) -> Self {
        match arg {
            RadixArg::Dec => Radix::Decimal,
            RadixArg::Hex => Radix::Hexadecimal,
            RadixArg::Bin => Radix::Binary,
        }
    }
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub expression: String,
    pub result: String,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut calc = Calculator::builder().radix(args.radix.into()).build();

    match calc.submit(&args.expression) {
        Outcome::Value { display, .. } => {
            print_result(&args, display);
            Ok(exitcode::OK)
        }
        Outcome::Assigned { name, value } => {
            let display = calc.format(value);
            print_result(&args, format!("{name} = {display}"));
            Ok(exitcode::OK)
        }
        Outcome::Command(command) => {
            print_result(&args, format!("{command}"));
            Ok(exitcode::OK)
        }
        Outcome::Error(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else if let CalcError::Parse(parse_error) = &e {
                let diagnostic = SyntaxDiagnostic::from_parse_error(&args.expression, parse_error);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            } else {
                eprintln!("evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

fn print_result(args: &EvalArgs, result: impl Into<String>) {
    if args.json {
        let output = EvalResult {
            expression: args.expression.clone(),
            result: result.into(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result.into());
    }
}
