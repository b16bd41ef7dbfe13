//! # exprview
//!
//! exprview is a single-line arithmetic expression inspector written in Rust.
//! It tokenizes one line of text, parses it into an abstract syntax tree with
//! a three-level recursive-descent grammar, pretty-prints the tree, and
//! evaluates it to a double-precision result, reporting every stage in one
//! textual report.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::eval,
    lexer::{Token, tokenize},
    parser::Parser,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of one expression as a tree. The AST is built by the parser and
/// traversed twice: once for diagnostic printing and once for evaluation.
///
/// # Responsibilities
/// - Defines the four expression node variants of the language.
/// - Owns the pre-order tree pretty-printer.
/// - Keeps literal text intact so evaluation decides its numeric meaning.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while declaring names,
/// parsing, or evaluating an expression. Each error renders as one
/// human-readable line; callers wanting programmatic handling match on the
/// kind before the report boundary erases it.
///
/// # Responsibilities
/// - Defines error enums for both phases (parse, runtime).
/// - Attaches the offending name, lexeme or symbol where one exists.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of inspecting one line.
///
/// This module ties together lexing, symbol tracking, parsing and evaluation
/// to provide the complete pipeline behind [`render_report`].
///
/// # Responsibilities
/// - Coordinates all core components: lexer, symbols, parser, evaluator.
/// - Provides the entry points for scanning, parsing and evaluating input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Renders the full pipeline report for one line of input.
///
/// The report contains, in order: the token list (one `Kind: text` line per
/// token, including the trailing `EndOfInput` line), a blank line, the AST
/// pretty-print, a blank line, and the final result line. The token section
/// is always present; the AST section appears as soon as parsing succeeds,
/// even when evaluation subsequently fails. Any failing stage replaces the
/// rest of the report with a single `Error:` line — this function itself
/// never fails.
///
/// Every name in `declarations` is declared on the parser before parsing
/// begins. With no declarations, any identifier in the input fails as
/// undeclared.
///
/// # Parameters
/// - `source`: The line of text to inspect.
/// - `declarations`: Identifier names to pre-declare, in order.
///
/// # Returns
/// The complete report, terminated by a newline.
///
/// # Example
/// ```
/// use exprview::render_report;
///
/// let report = render_report("2+3*4", &[]);
/// assert!(report.starts_with("Tokens:\n"));
/// assert!(report.ends_with("Final Output: User, your final output is: 14\n"));
///
/// // 'x' is never declared, so parsing fails after the tokens are printed.
/// let report = render_report("x+1", &[]);
/// assert!(report.contains("Identifier: x"));
/// assert!(report.ends_with("Error: Variable 'x' is undeclared.\n"));
/// ```
#[must_use]
pub fn render_report(source: &str, declarations: &[String]) -> String {
    let tokens = tokenize(source);

    let mut report = String::from("Tokens:\n");
    for token in &tokens {
        report.push_str(&token.to_string());
        report.push('\n');
    }
    report.push('\n');

    match run_pipeline(tokens, declarations, &mut report) {
        Ok(result) => {
            report.push_str(&format!("Final Output: User, your final output is: {result}\n"));
        },
        Err(e) => report.push_str(&format!("Error: {e}\n")),
    }

    report
}

/// Drives declaration, parsing, tree printing and evaluation.
///
/// The token section was already appended by the caller. The AST section is
/// appended here as soon as the parse succeeds; the first failing stage
/// aborts everything after it.
fn run_pipeline(tokens: Vec<Token>,
                declarations: &[String],
                report: &mut String)
                -> Result<f64, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(tokens);
    for name in declarations {
        parser.declare_variable(name)?;
    }

    let ast = parser.parse_expression()?;
    report.push_str("Abstract Syntax Tree (AST):\n");
    report.push_str(&ast.tree());
    report.push('\n');

    Ok(eval(&ast)?)
}
