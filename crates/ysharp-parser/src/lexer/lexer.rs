//! Main lexer implementation for Y#.
//!
//! The [`Lexer`] converts a preprocessed [`Pchar`] buffer into a sequence
//! of [`Token`]s terminated by exactly one end-of-file token. It
//! dispatches on the first character of each token and fails fast on the
//! first malformed token.
//!
//! Lexemes and string contents are copied into the arena, so the
//! positioned buffer can be dropped once lexing completes.

use bumpalo::Bump;
use tracing::{debug, trace};
use ysharp_core::ScriptError;

use super::token::{Literal, Token, TokenKind, lookup_keyword};
use crate::source::{Cursor, ESCAPE, Pchar, is_ident_continue, is_ident_start, is_space};

/// Lexer for preprocessed Y# source.
///
/// The `'src` lifetime is the positioned buffer being lexed (temporary).
/// The `'ast` lifetime is the arena where token lexemes are allocated (persists).
pub struct Lexer<'src, 'ast> {
    /// Low-level character cursor.
    cursor: Cursor<'src, Pchar>,
    /// Arena for allocating token lexemes.
    arena: &'ast Bump,
    /// Buffer index where the current token began.
    start: usize,
    /// Originating line of the most recently consumed character.
    line: u32,
}

impl<'src, 'ast> Lexer<'src, 'ast> {
    /// Create a new lexer over a positioned buffer.
    pub fn new(buf: &'src [Pchar], arena: &'ast Bump) -> Self {
        Self {
            cursor: Cursor::new(buf),
            arena,
            start: 0,
            line: 1,
        }
    }

    /// Scan the whole buffer.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error met: an unterminated string or
    /// character literal, a character literal of the wrong length, an
    /// out-of-range integer, or an unsupported character.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn tokenize(mut self) -> Result<Vec<Token<'ast>>, ScriptError> {
        let mut tokens = Vec::with_capacity(self.cursor.buffer().len() / 4 + 1);

        while !self.cursor.is_eof() {
            self.start = self.cursor.position();
            if let Some(token) = self.scan_token()? {
                trace!(
                    target: "ysharp::lexer",
                    kind = ?token.kind,
                    lexeme = token.lexeme,
                    line = token.line,
                    "Produced token"
                );
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        debug!(target: "ysharp::lexer", count = tokens.len(), "Tokenized buffer");
        Ok(tokens)
    }

    // =========================================
    // Internal: Token scanning
    // =========================================

    /// Scan one token, or skip one run of input that yields no token.
    fn scan_token(&mut self) -> Result<Option<Token<'ast>>, ScriptError> {
        use TokenKind::*;

        let escaped = self.cursor.at_escaped();
        let c = self.cursor.peek().ch;

        let token = match c {
            ' ' | '\t' | '\n' | '\r' => {
                self.advance_while(|c| is_space(c) || c == '\r');
                return Ok(None);
            }

            // Number starting with dot (e.g., .5)
            '.' if self.cursor.peek_next().ch.is_ascii_digit() => self.scan_number()?,

            c if c.is_ascii_digit() => self.scan_number()?,

            '"' if escaped => return Err(self.unsupported(c)),
            '"' => self.scan_string()?,

            '\'' if escaped => return Err(self.unsupported(c)),
            '\'' => self.scan_char()?,

            // An identifier may open with an escape: `\name`
            '\\' if is_ident_start(self.cursor.peek_next().ch) => self.scan_identifier(),
            c if is_ident_start(c) => self.scan_identifier(),

            // Stray escape marker
            '\\' => {
                self.advance();
                return Ok(None);
            }

            '(' | ')' | '[' | ']' | '{' | '}' | ',' | '.' | ':' | '?' | ';' | '~' => {
                self.advance();
                let kind = match c {
                    '(' => LeftParen,
                    ')' => RightParen,
                    '[' => LeftBracket,
                    ']' => RightBracket,
                    '{' => LeftBrace,
                    '}' => RightBrace,
                    ',' => Comma,
                    '.' => Dot,
                    ':' => Colon,
                    '?' => Question,
                    ';' => Semicolon,
                    _ => Tilde,
                };
                self.make_token(kind)
            }

            '+' | '-' | '*' | '/' | '%' | '=' | '!' | '<' | '>' | '&' | '|' | '^' => {
                self.scan_operator(c)
            }

            _ => return Err(self.unsupported(c)),
        };

        Ok(Some(token))
    }

    /// Consume one character, tracking the line it came from.
    fn advance(&mut self) -> char {
        let p = self.cursor.advance();
        if !p.loc.is_sentinel() {
            self.line = p.line();
        }
        p.ch
    }

    /// Consume the current character if it is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if !self.cursor.is_eof() && self.cursor.peek().ch == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, f: impl Fn(char) -> bool) {
        while !self.cursor.is_eof() && self.cursor.check(&f) {
            self.advance();
        }
    }

    /// Text from the token start to the cursor.
    fn text(&self) -> String {
        self.cursor
            .slice_from(self.start)
            .iter()
            .map(|p| p.ch)
            .collect()
    }

    /// Create a token from start position to current position.
    /// Copies the lexeme into the arena.
    fn make_token(&self, kind: TokenKind) -> Token<'ast> {
        let lexeme = self.arena.alloc_str(&self.text());
        Token::new(kind, lexeme, self.line)
    }

    fn unsupported(&self, c: char) -> ScriptError {
        let line = match self.cursor.peek().loc.line {
            0 => self.line,
            line => line,
        };
        ScriptError::syntax(line, format!("Unsupported character '{c}'"))
    }

    // =========================================
    // Scanning: Operators
    // =========================================

    /// Scan an operator, always taking the longest match.
    fn scan_operator(&mut self, c: char) -> Token<'ast> {
        use TokenKind::*;

        self.advance();
        let kind = match c {
            '+' => {
                if self.eat('+') {
                    PlusPlus
                } else if self.eat('=') {
                    PlusEqual
                } else {
                    Plus
                }
            }
            '-' => {
                if self.eat('-') {
                    MinusMinus
                } else if self.eat('=') {
                    MinusEqual
                } else {
                    Minus
                }
            }
            '*' => {
                if self.eat('=') {
                    StarEqual
                } else {
                    Star
                }
            }
            '/' => {
                if self.eat('=') {
                    SlashEqual
                } else {
                    Slash
                }
            }
            '%' => {
                if self.eat('=') {
                    PercentEqual
                } else {
                    Percent
                }
            }
            '=' => {
                if self.eat('=') {
                    EqualEqual
                } else {
                    Equal
                }
            }
            '!' => {
                if self.eat('=') {
                    BangEqual
                } else {
                    Bang
                }
            }
            '<' => {
                if self.eat('=') {
                    LessEqual
                } else if self.eat('<') {
                    if self.eat('=') {
                        LessLessEqual
                    } else {
                        LessLess
                    }
                } else {
                    Less
                }
            }
            '>' => {
                if self.eat('=') {
                    GreaterEqual
                } else if self.eat('>') {
                    if self.eat('=') {
                        GreaterGreaterEqual
                    } else {
                        GreaterGreater
                    }
                } else {
                    Greater
                }
            }
            '&' => {
                if self.eat('&') {
                    AmpAmp
                } else if self.eat('=') {
                    AmpEqual
                } else {
                    Amp
                }
            }
            '|' => {
                if self.eat('|') {
                    PipePipe
                } else if self.eat('=') {
                    PipeEqual
                } else {
                    Pipe
                }
            }
            _ => {
                if self.eat('=') {
                    CaretEqual
                } else {
                    Caret
                }
            }
        };

        self.make_token(kind)
    }

    // =========================================
    // Scanning: Numbers
    // =========================================

    /// Scan a number literal.
    ///
    /// A dot joins the number only when a digit follows it, so `3.x` is
    /// `3` `.` `x` and `0.` is `0` `.`.
    fn scan_number(&mut self) -> Result<Token<'ast>, ScriptError> {
        let mut is_double = self.cursor.peek().ch == '.';
        if is_double {
            self.advance();
        }
        self.advance_while(|c| c.is_ascii_digit());

        if !is_double && self.cursor.peek().ch == '.' && self.cursor.peek_next().ch.is_ascii_digit()
        {
            is_double = true;
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        let text = self.text();
        let lexeme = self.arena.alloc_str(&text);

        if is_double {
            let value = if text.starts_with('.') {
                format!("0{text}").parse::<f64>()
            } else {
                text.parse::<f64>()
            }
            .map_err(|_| ScriptError::syntax(self.line, format!("Invalid number '{text}'")))?;
            Ok(Token::with_literal(
                TokenKind::DoubleLiteral,
                lexeme,
                Literal::Double(value),
                self.line,
            ))
        } else {
            let value = text.parse::<i32>().map_err(|_| {
                let message = format!("Integer literal '{text}' is out of range");
                ScriptError::syntax(self.line, message)
            })?;
            Ok(Token::with_literal(
                TokenKind::IntLiteral,
                lexeme,
                Literal::Int(value),
                self.line,
            ))
        }
    }

    // =========================================
    // Scanning: Strings
    // =========================================

    /// Scan up to and including the unescaped closing `quote`.
    ///
    /// Returns the contents between the quotes, verbatim.
    fn scan_quoted(&mut self, quote: char, what: &str) -> Result<String, ScriptError> {
        self.advance();
        let open_line = self.line;

        while !(self.cursor.peek().ch == quote && !self.cursor.at_escaped()) {
            if self.cursor.is_eof() {
                return Err(ScriptError::syntax(open_line, format!("Unterminated {what}")));
            }
            self.advance();
        }

        let content = self
            .cursor
            .slice_from(self.start + 1)
            .iter()
            .map(|p| p.ch)
            .collect();
        self.advance();
        Ok(content)
    }

    /// Scan a double-quoted string literal.
    fn scan_string(&mut self) -> Result<Token<'ast>, ScriptError> {
        let content = self.scan_quoted('"', "string literal")?;
        let value = self.arena.alloc_str(&content);
        let lexeme = self.arena.alloc_str(&self.text());
        Ok(Token::with_literal(
            TokenKind::StringLiteral,
            lexeme,
            Literal::Str(value),
            self.line,
        ))
    }

    /// Scan a single-quoted character literal.
    fn scan_char(&mut self) -> Result<Token<'ast>, ScriptError> {
        let content = self.scan_quoted('\'', "character literal")?;
        let mut chars = content.chars();
        let value = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ScriptError::syntax(
                    self.line,
                    "a character literal must contain exactly one character",
                ));
            }
        };
        let lexeme = self.arena.alloc_str(&self.text());
        Ok(Token::with_literal(
            TokenKind::CharLiteral,
            lexeme,
            Literal::Char(value),
            self.line,
        ))
    }

    // =========================================
    // Scanning: Identifiers and keywords
    // =========================================

    /// Scan an identifier or keyword.
    ///
    /// Backslashes are allowed inside the run and stripped afterwards; an
    /// escaped blank or double quote is kept as part of the name.
    fn scan_identifier(&mut self) -> Token<'ast> {
        loop {
            let c = self.cursor.peek().ch;
            if self.cursor.is_eof() {
                break;
            }
            let continues = is_ident_continue(c)
                || c == ESCAPE
                || ((c == ' ' || c == '\t' || c == '"') && self.cursor.at_escaped());
            if !continues {
                break;
            }
            self.advance();
        }

        let name = strip_escapes(&self.text());

        match lookup_keyword(&name) {
            Some(kind) => {
                let lexeme = self.arena.alloc_str(&name);
                let literal = match kind {
                    TokenKind::True => Literal::Bool(true),
                    TokenKind::False => Literal::Bool(false),
                    _ => Literal::Null,
                };
                Token::with_literal(kind, lexeme, literal, self.line)
            }
            None => {
                let lexeme = self.arena.alloc_str(&name);
                Token::new(TokenKind::Identifier, lexeme, self.line)
            }
        }
    }
}

/// Remove escape markers from an identifier.
///
/// `\\` collapses to a single backslash; any other backslash is dropped.
fn strip_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
        } else if chars.next_if_eq(&ESCAPE).is_some() {
            out.push(ESCAPE);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::preprocess;
    use crate::source::to_pbuffer;
    use ysharp_core::ErrorKind;

    /// Helper to collect all tokens from source, preprocessing first.
    fn tokenize(source: &str) -> Vec<(TokenKind, String)> {
        let arena = Bump::new();
        let buf = preprocess(source).unwrap();
        Lexer::new(&buf, &arena)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    /// Helper to get token kinds only.
    fn token_kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|(kind, _)| kind).collect()
    }

    /// Helper to lex a raw buffer on line 1 without preprocessing.
    fn lex_raw(source: &str) -> Result<Vec<TokenKind>, ScriptError> {
        let arena = Bump::new();
        let buf = to_pbuffer(source, 1);
        Lexer::new(&buf, &arena)
            .tokenize()
            .map(|tokens| tokens.into_iter().map(|t| t.kind).collect())
    }

    /// Helper to get the literal of the first token.
    fn first_literal(source: &str, f: impl FnOnce(Literal<'_>)) {
        let arena = Bump::new();
        let buf = preprocess(source).unwrap();
        let tokens = Lexer::new(&buf, &arena).tokenize().unwrap();
        f(tokens[0].literal);
    }

    // =========================================
    // Basic tokens
    // =========================================

    #[test]
    fn empty_input() {
        assert_eq!(token_kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(token_kinds("   \t\n\n\t   "), vec![TokenKind::Eof]);
    }

    #[test]
    fn eof_has_empty_lexeme() {
        let tokens = tokenize("x");
        assert_eq!(tokens.last(), Some(&(TokenKind::Eof, String::new())));
    }

    #[test]
    fn grouping_symbols() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("( ) [ ] { }"),
            vec![
                LeftParen,
                RightParen,
                LeftBracket,
                RightBracket,
                LeftBrace,
                RightBrace,
                Eof
            ]
        );
        assert_eq!(token_kinds("{[(())]}").len(), 9);
    }

    #[test]
    fn punctuation() {
        use TokenKind::*;
        assert_eq!(
            token_kinds(": ; , . ? ~"),
            vec![Colon, Semicolon, Comma, Dot, Question, Tilde, Eof]
        );
    }

    #[test]
    fn mixed_whitespace() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("  \t\n  var   \t  x  \n\n  =  \t 5  "),
            vec![Var, Identifier, Equal, IntLiteral, Eof]
        );
    }

    #[test]
    fn carriage_returns_are_whitespace() {
        use TokenKind::*;
        assert_eq!(token_kinds("a\r\nb"), vec![Identifier, Identifier, Eof]);
    }

    // =========================================
    // Operators
    // =========================================

    #[test]
    fn increment_alone() {
        assert_eq!(
            tokenize("\t++ "),
            vec![
                (TokenKind::PlusPlus, "++".to_string()),
                (TokenKind::Eof, String::new())
            ]
        );
    }

    #[test]
    fn maximal_munch() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("+ ++ += - -- -= = == ! != < <= << <<= > >= >> >>="),
            vec![
                Plus,
                PlusPlus,
                PlusEqual,
                Minus,
                MinusMinus,
                MinusEqual,
                Equal,
                EqualEqual,
                Bang,
                BangEqual,
                Less,
                LessEqual,
                LessLess,
                LessLessEqual,
                Greater,
                GreaterEqual,
                GreaterGreater,
                GreaterGreaterEqual,
                Eof,
            ]
        );
    }

    #[test]
    fn shift_assign_is_one_token() {
        assert_eq!(
            tokenize(">>="),
            vec![
                (TokenKind::GreaterGreaterEqual, ">>=".to_string()),
                (TokenKind::Eof, String::new())
            ]
        );
    }

    #[test]
    fn bitwise_operators() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("& && &= | || |= ^ ^= ~ << <<= >> >>="),
            vec![
                Amp,
                AmpAmp,
                AmpEqual,
                Pipe,
                PipePipe,
                PipeEqual,
                Caret,
                CaretEqual,
                Tilde,
                LessLess,
                LessLessEqual,
                GreaterGreater,
                GreaterGreaterEqual,
                Eof,
            ]
        );
    }

    #[test]
    fn compound_assignments() {
        use TokenKind::*;
        let kinds = token_kinds("a += b -= c *= d /= e %= f");
        assert_eq!(kinds[1], PlusEqual);
        assert_eq!(kinds[3], MinusEqual);
        assert_eq!(kinds[5], StarEqual);
        assert_eq!(kinds[7], SlashEqual);
        assert_eq!(kinds[9], PercentEqual);
    }

    #[test]
    fn adjacent_operators_without_spaces() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("a+++b"),
            vec![Identifier, PlusPlus, Plus, Identifier, Eof]
        );
    }

    // =========================================
    // Numbers
    // =========================================

    #[test]
    fn integers() {
        first_literal("0", |lit| assert_eq!(lit, Literal::Int(0)));
        first_literal("123", |lit| assert_eq!(lit, Literal::Int(123)));
        first_literal("999999999", |lit| {
            assert_eq!(lit, Literal::Int(999_999_999));
        });
    }

    #[test]
    fn integer_overflow_is_syntax_error() {
        let err = lex_raw("2147483648").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(lex_raw("2147483647").is_ok());
    }

    #[test]
    fn doubles() {
        first_literal("0.0", |lit| assert_eq!(lit, Literal::Double(0.0)));
        first_literal("123.456", |lit| assert_eq!(lit, Literal::Double(123.456)));
        first_literal(".5", |lit| assert_eq!(lit, Literal::Double(0.5)));
    }

    #[test]
    fn trailing_dot_is_not_fraction() {
        use TokenKind::*;
        assert_eq!(token_kinds("0."), vec![IntLiteral, Dot, Eof]);
        assert_eq!(
            token_kinds("3.method"),
            vec![IntLiteral, Dot, Identifier, Eof]
        );
    }

    #[test]
    fn exponent_is_not_part_of_number() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("1.5e-5"),
            vec![DoubleLiteral, Identifier, Minus, IntLiteral, Eof]
        );
    }

    #[test]
    fn number_operator_ambiguity() {
        use TokenKind::*;
        assert_eq!(token_kinds("5-3"), vec![IntLiteral, Minus, IntLiteral, Eof]);
    }

    #[test]
    fn dot_ambiguity() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("obj.method 3.14 .5"),
            vec![
                Identifier,
                Dot,
                Identifier,
                DoubleLiteral,
                DoubleLiteral,
                Eof
            ]
        );
    }

    // =========================================
    // Strings and characters
    // =========================================

    #[test]
    fn empty_string() {
        first_literal("\"\"", |lit| assert_eq!(lit, Literal::Str("")));
    }

    #[test]
    fn string_lexeme_keeps_quotes() {
        assert_eq!(
            tokenize("\"hi there\"")[0],
            (TokenKind::StringLiteral, "\"hi there\"".to_string())
        );
    }

    #[test]
    fn string_escapes_are_left_as_written() {
        first_literal(r#""hello\nworld\t\"quote\"""#, |lit| {
            assert_eq!(lit, Literal::Str(r#"hello\nworld\t\"quote\""#));
        });
    }

    #[test]
    fn string_with_special_chars() {
        first_literal("\"!@#$%^&*(){}[]<>?\"", |lit| {
            assert_eq!(lit, Literal::Str("!@#$%^&*(){}[]<>?"));
        });
    }

    #[test]
    fn multiple_strings() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("\"first\" + \"second\""),
            vec![StringLiteral, Plus, StringLiteral, Eof]
        );
    }

    #[test]
    fn unterminated_string_reports_opening_line() {
        let arena = Bump::new();
        let mut buf = to_pbuffer("x\n", 1);
        buf.extend(to_pbuffer("\"abc", 2));
        let err = Lexer::new(&buf, &arena).tokenize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn char_literal() {
        first_literal("'a'", |lit| assert_eq!(lit, Literal::Char('a')));
    }

    #[test]
    fn char_literal_must_be_one_character() {
        let err = lex_raw("'ab'").unwrap_err();
        assert_eq!(
            err.message(),
            "a character literal must contain exactly one character"
        );
        assert!(lex_raw("''").is_err());
    }

    #[test]
    fn unterminated_char_literal() {
        assert!(lex_raw("'a").is_err());
    }

    // =========================================
    // Identifiers and keywords
    // =========================================

    #[test]
    fn declaration_line() {
        use TokenKind::*;
        let tokens = tokenize("var first_name : string = \"yagiz erdem\"");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![Var, Identifier, Colon, String, Equal, StringLiteral, Eof]
        );
        assert_eq!(tokens[1].1, "first_name");
        assert_eq!(tokens[3].1, "string");
    }

    #[test]
    fn escapes_are_stripped_from_identifiers() {
        assert_eq!(tokenize("\\first_name\\")[0].1, "first_name");
        assert_eq!(tokenize("\\start_name")[0].1, "start_name");
        assert_eq!(tokenize("name_end\\")[0].1, "name_end");
        assert_eq!(tokenize("\\first_name\\").len(), 2);
    }

    #[test]
    fn escaped_backslash_pair_survives() {
        assert_eq!(strip_escapes(r"a\\b"), r"a\b");
        assert_eq!(strip_escapes(r"\a\"), "a");
    }

    #[test]
    fn keywords_vs_identifiers() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("for forloop foreach variable var"),
            vec![For, Identifier, Identifier, Identifier, Var, Eof]
        );
    }

    #[test]
    fn all_keywords() {
        use TokenKind::*;
        let source = concat!(
            "for while do end if elif else then return function class ",
            "break var const int double string  bool"
        );
        assert_eq!(
            token_kinds(source),
            vec![
                For, While, Do, End, If, Elif, Else, Then, Return, Function, Class, Break, Var,
                Const, Int, Double, String, Bool, Eof,
            ]
        );
    }

    #[test]
    fn char_and_fun_types() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("var ch : char = 'a'; fun"),
            vec![
                Var,
                Identifier,
                Colon,
                Char,
                Equal,
                CharLiteral,
                Semicolon,
                Fun,
                Eof
            ]
        );
    }

    #[test]
    fn boolean_literals() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("true false trueish falsehood"),
            vec![True, False, Identifier, Identifier, Eof]
        );
        first_literal("true", |lit| assert_eq!(lit, Literal::Bool(true)));
        first_literal("false", |lit| assert_eq!(lit, Literal::Bool(false)));
    }

    #[test]
    fn null_keyword() {
        use TokenKind::*;
        assert_eq!(
            token_kinds("null nullptr nullish"),
            vec![Null, Identifier, Identifier, Eof]
        );
        first_literal("null", |lit| assert_eq!(lit, Literal::Null));
    }

    #[test]
    fn underscore_identifiers() {
        let kinds = token_kinds("_ _var var_ _var_ __private");
        assert_eq!(kinds.len(), 6);
        assert!(kinds[..5].iter().all(|k| *k == TokenKind::Identifier));
    }

    // =========================================
    // Escapes and unsupported input
    // =========================================

    #[test]
    fn stray_backslash_is_ignored() {
        use TokenKind::*;
        assert_eq!(lex_raw("\\ + \\").unwrap(), vec![Plus, Eof]);
    }

    #[test]
    fn escaped_quote_outside_string_is_unsupported() {
        let err = lex_raw("\\\"abc").unwrap_err();
        assert_eq!(err.message(), "Unsupported character '\"'");
        let err = lex_raw("x \\'a'").unwrap_err();
        assert_eq!(err.message(), "Unsupported character '''");
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn unsupported_character() {
        let err = lex_raw("a @ b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.message(), "Unsupported character '@'");
        assert_eq!(err.line(), Some(1));
    }

    // =========================================
    // Lines
    // =========================================

    #[test]
    fn tokens_carry_lines() {
        let arena = Bump::new();
        let buf = preprocess("a\n\nb\nc").unwrap();
        let tokens = Lexer::new(&buf, &arena).tokenize().unwrap();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3, 4, 4]);
    }

    #[test]
    fn multiline_token_reports_last_line() {
        let arena = Bump::new();
        let mut buf = to_pbuffer("\"a\n", 1);
        buf.extend(to_pbuffer("b\"", 2));
        let tokens = Lexer::new(&buf, &arena).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn empty_input_eof_on_line_one() {
        let arena = Bump::new();
        let tokens = Lexer::new(&[], &arena).tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line, 1);
    }
}
