use std::io;

use clap::Parser;
use exprview::render_report;

/// exprview is a single-line arithmetic expression inspector: it prints the
/// token stream, the parsed syntax tree and the evaluated result for one
/// line of arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Declare an identifier before parsing (repeatable). Identifiers that
    /// were never declared fail to parse.
    #[arg(short, long = "declare", value_name = "NAME")]
    declare: Vec<String>,

    /// The expression to inspect. One line is read from standard input when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = args.expression.unwrap_or_else(|| {
        println!("Enter an expression:");
        let mut line = String::new();
        // A failed read degrades to the empty expression; the report still
        // prints and the process exits normally.
        let _ = io::stdin().read_line(&mut line);
        line.trim_end().to_string()
    });

    print!("{}", render_report(&source, &args.declare));
}
