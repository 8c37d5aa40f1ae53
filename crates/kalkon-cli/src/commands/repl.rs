//! The interactive calculator session.

use std::io::{self, BufRead, Write};

use kalkon::{Calculator, Command, Outcome};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use crate::output::format_history_table;

/// Run the interactive session until `:quit` or end of input.
pub fn run_repl() -> miette::Result<i32> {
    let mut calc = Calculator::new();
    let stdin = io::stdin();
    let mut line = String::new();

    println!(
        "kalkon {} — :help for commands, :quit to exit",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        print!("> ");
        io::stdout().flush().into_diagnostic()?;

        line.clear();
        let bytes_read = stdin.lock().read_line(&mut line).into_diagnostic()?;
        if bytes_read == 0 {
            // EOF
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            ":quit" | ":q" => break,
            ":help" => print_help(),
            ":history" => {
                if calc.history().is_empty() {
                    println!("history is empty");
                } else {
                    println!("{}", format_history_table(calc.history().list()));
                }
            }
            _ => {
                debug!(line = input, "submitting input");
                let outcome = calc.submit(input);
                render_outcome(&calc, &outcome);
            }
        }
    }

    Ok(exitcode::OK)
}

fn render_outcome(calc: &Calculator, outcome: &Outcome) {
    match outcome {
        Outcome::Value { display, .. } => println!("{display}"),
        Outcome::Assigned { name, value } => {
            println!("{} = {}", name, calc.format(*value));
        }
        Outcome::Command(Command::Clear) => println!("history cleared"),
        Outcome::Command(command) => println!("mode set: {}", command.name()),
        Outcome::Error(e) => {
            let message = format!("error: {e}");
            eprintln!(
                "{}",
                message.if_supports_color(Stream::Stderr, |text| text.red())
            );
        }
    }
}

fn print_help() {
    println!(
        "\
expressions   2 + 2, sin(pi / 2), 2^10, 0xff & 0b1010, x = 3 * 4
radix         :dec  :hex  :bin
width         :int  :i8  :i16  :i32  :i64  :u8  :u16  :u32  :u64
session       :history  :clear  :help  :quit"
    );
}
