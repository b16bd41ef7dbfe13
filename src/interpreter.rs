/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree produced by the parser and reduces it
/// to a single double-precision value, applying the four arithmetic
/// operators. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, left child before right.
/// - Applies binary operators defensively, rejecting unknown symbols.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes one line of input for further parsing.
///
/// The lexer (tokenizer) reads the raw text and produces a stream of tokens,
/// each pairing a lexical category with the raw lexeme. This is the first
/// stage of the pipeline, and it is total: unrecognized characters become
/// `Invalid` tokens instead of halting the scan.
///
/// # Responsibilities
/// - Converts the input character stream into `Kind: text` tokens.
/// - Handles numeric literals, identifiers, operators and parentheses.
/// - Appends exactly one `EndOfInput` token to every scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream with a three-level recursive-descent
/// grammar whose layering enforces operator precedence, and validates
/// identifier declarations against the symbol table as it goes.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces precedence and left-associativity through the grammar shape.
/// - Rejects undeclared identifiers, unmatched parentheses, and tokens no
///   rule accepts.
pub mod parser;
/// The symbols module tracks declared identifier names.
///
/// A `SymbolTable` is a set of names with declare and query operations only;
/// it never stores values. Each parsing session owns its own table.
///
/// # Responsibilities
/// - Records declarations, rejecting duplicates.
/// - Answers declared-or-not queries for the parser.
pub mod symbols;
