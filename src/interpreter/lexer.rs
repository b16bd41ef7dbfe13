use std::fmt;

use logos::Logos;

/// Lexeme text of the synthetic [`TokenKind::EndOfInput`] token.
pub const END_OF_INPUT_TEXT: &str = "EOF";

/// The lexical category of a token.
///
/// This enum defines every category the scanner can recognize. Recognition is
/// deliberately more permissive than the grammar: `=`, `<`, `>` and `!` scan
/// as [`TokenKind::Operator`] even though no grammar rule accepts them, so
/// extending the grammar never requires touching the scanner.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Floating-point literal tokens, such as `12.34`.
    ///
    /// The fractional digits may be absent: `12.` is a single Float token
    /// whose lexeme keeps the trailing dot. A leading dot never starts a
    /// number, so `.5` scans as an Invalid `.` followed by an Integer `5`.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// Identifier tokens; variable names such as `x` or `rate_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Single-character operator tokens from the open set `+ - * / = < > !`.
    #[regex(r"[+\-*/=<>!]")]
    Operator,
    /// `(` or `)`
    #[regex(r"[()]")]
    Parenthesis,
    /// Synthetic token appended exactly once at the end of every scan.
    EndOfInput,
    /// A single character no other pattern recognizes.
    #[regex(r".", priority = 0)]
    Invalid,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Identifier => "Identifier",
            Self::Operator => "Operator",
            Self::Parenthesis => "Parenthesis",
            Self::EndOfInput => "EndOfInput",
            Self::Invalid => "Invalid",
            Self::Ignored => "Ignored",
        };
        write!(f, "{name}")
    }
}

/// A lexeme paired with its lexical category.
///
/// Tokens are created only by [`tokenize`] and consumed read-only by the
/// parser; they live for the duration of one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The raw slice of input text this token was built from.
    pub text: String,
}

impl fmt::Display for Token {
    /// Renders the token in the report line format, `Kind: text`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}

/// Scans one line of text into a token sequence.
///
/// Scanning is total and never fails: whitespace is skipped, every
/// unrecognized character becomes a single [`TokenKind::Invalid`] token, and
/// exactly one [`TokenKind::EndOfInput`] token is appended after the last
/// lexeme. Concatenating the lexemes of all other tokens reproduces the
/// input with its whitespace removed.
///
/// # Parameters
/// - `source`: The line of text to scan.
///
/// # Returns
/// The ordered token sequence, ending in `EndOfInput`.
///
/// # Example
/// ```
/// use exprview::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12.34 + x");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Float,
///                 TokenKind::Operator,
///                 TokenKind::Identifier,
///                 TokenKind::EndOfInput]);
/// assert_eq!(tokens[0].text, "12.34");
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        tokens.push(Token { kind: kind.unwrap_or(TokenKind::Invalid),
                            text: lexer.slice().to_string(), });
    }

    tokens.push(Token { kind: TokenKind::EndOfInput,
                        text: END_OF_INPUT_TEXT.to_string(), });

    tokens
}
