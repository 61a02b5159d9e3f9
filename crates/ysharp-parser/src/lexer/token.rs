//! Token types and definitions for the Y# lexer.

use std::fmt;

/// A token from the source code.
///
/// The `'ast` lifetime refers to the arena where the lexeme and string
/// literal contents are allocated, so the source buffer can be dropped
/// once lexing finishes.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'ast> {
    /// The type of token.
    pub kind: TokenKind,
    /// The source text of this token (allocated in arena).
    pub lexeme: &'ast str,
    /// The literal value carried by literal tokens, `Null` otherwise.
    pub literal: Literal<'ast>,
    /// Originating line of the last character consumed for this token.
    pub line: u32,
}

impl<'ast> Token<'ast> {
    /// Create a token that carries no literal value.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'ast str, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal: Literal::Null,
            line,
        }
    }

    /// Create a token carrying a literal value.
    #[inline]
    pub fn with_literal(
        kind: TokenKind,
        lexeme: &'ast str,
        literal: Literal<'ast>,
        line: u32,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// Check if this token is of the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ L{})", self.kind, self.lexeme, self.line)
    }
}

/// The value of a literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'ast> {
    /// `null`, and the placeholder for tokens without a value.
    Null,
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit float.
    Double(f64),
    /// `true` or `false`.
    Bool(bool),
    /// String contents without the surrounding quotes. Escapes are left as written.
    Str(&'ast str),
    /// A single character.
    Char(char),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Double(v) => write!(f, "{v:?}"),
            Literal::Bool(v) => write!(f, "{v}"),
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Char(c) => write!(f, "'{c}'"),
        }
    }
}

/// All token types in Y#.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Literals
    // =========================================
    /// Integer literal: `42`
    IntLiteral,
    /// Double literal: `3.14`, `.5`
    DoubleLiteral,
    /// String literal: `"hello"`
    StringLiteral,
    /// Character literal: `'a'`
    CharLiteral,

    // =========================================
    // Identifiers
    // =========================================
    /// Identifier: `foo`, `_bar`, `\baz\`
    Identifier,

    // =========================================
    // Keywords - Types
    // =========================================
    /// `int`
    Int,
    /// `double`
    Double,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `fun`
    Fun,
    /// `char`
    Char,

    // =========================================
    // Keywords - Values
    // =========================================
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // =========================================
    // Keywords - Control Flow
    // =========================================
    /// `for`
    For,
    /// `while`
    While,
    /// `do`
    Do,
    /// `end`
    End,
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `then`
    Then,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `try`
    Try,
    /// `catch`
    Catch,
    /// `finally`
    Finally,

    // =========================================
    // Keywords - Declarations
    // =========================================
    /// `function`
    Function,
    /// `class`
    Class,
    /// `extends`
    Extends,
    /// `var`
    Var,
    /// `const`
    Const,
    /// `use`
    Use,

    // =========================================
    // Keywords - Output
    // =========================================
    /// `print`
    Print,
    /// `println`
    Println,

    // =========================================
    // Operators - Arithmetic
    // =========================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    // =========================================
    // Operators - Compound Assignment
    // =========================================
    /// `=`
    Equal,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    StarEqual,
    /// `/=`
    SlashEqual,
    /// `%=`
    PercentEqual,

    // =========================================
    // Operators - Bitwise
    // =========================================
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `<<`
    LessLess,
    /// `>>`
    GreaterGreater,

    // =========================================
    // Operators - Bitwise Assignment
    // =========================================
    /// `&=`
    AmpEqual,
    /// `|=`
    PipeEqual,
    /// `^=`
    CaretEqual,
    /// `<<=`
    LessLessEqual,
    /// `>>=`
    GreaterGreaterEqual,

    // =========================================
    // Operators - Comparison
    // =========================================
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // =========================================
    // Operators - Logical
    // =========================================
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `!`
    Bang,

    // =========================================
    // Operators - Increment/Decrement
    // =========================================
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    // =========================================
    // Operators - Other
    // =========================================
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `.`
    Dot,

    // =========================================
    // Delimiters
    // =========================================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // =========================================
    // Special
    // =========================================
    /// End of file.
    Eof,
}

impl TokenKind {
    /// Check if this is a reserved word (including type names and `true`/`false`/`null`).
    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Int | Double
                | String
                | Bool
                | Fun
                | Char
                | True
                | False
                | Null
                | For
                | While
                | Do
                | End
                | If
                | Elif
                | Else
                | Then
                | Switch
                | Case
                | Default
                | Return
                | Break
                | Continue
                | Try
                | Catch
                | Finally
                | Function
                | Class
                | Extends
                | Var
                | Const
                | Use
                | Print
                | Println
        )
    }

    /// Check if this is a primitive type keyword.
    pub fn is_type(self) -> bool {
        use TokenKind::*;
        matches!(self, Int | Double | String | Bool | Fun | Char)
    }

    /// Check if this token can appear as a literal expression.
    pub fn is_literal(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            IntLiteral | DoubleLiteral | StringLiteral | CharLiteral | True | False | Null
        )
    }

    /// Check if this is an assignment operator (simple or compound).
    pub fn is_assignment(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Equal
                | PlusEqual
                | MinusEqual
                | StarEqual
                | SlashEqual
                | PercentEqual
                | LessLessEqual
                | GreaterGreaterEqual
                | AmpEqual
                | PipeEqual
                | CaretEqual
        )
    }

    /// Check if this keyword begins a statement.
    pub fn starts_statement(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Var | Const
                | Function
                | Class
                | If
                | While
                | For
                | Do
                | Switch
                | Return
                | Break
                | Continue
                | Print
                | Println
                | Use
                | Try
        )
    }

    /// Human-readable description, used in error messages.
    pub fn description(self) -> &'static str {
        use TokenKind::*;
        match self {
            IntLiteral => "integer literal",
            DoubleLiteral => "double literal",
            StringLiteral => "string literal",
            CharLiteral => "character literal",
            Identifier => "identifier",
            Int => "'int'",
            Double => "'double'",
            String => "'string'",
            Bool => "'bool'",
            Fun => "'fun'",
            Char => "'char'",
            True => "'true'",
            False => "'false'",
            Null => "'null'",
            For => "'for'",
            While => "'while'",
            Do => "'do'",
            End => "'end'",
            If => "'if'",
            Elif => "'elif'",
            Else => "'else'",
            Then => "'then'",
            Switch => "'switch'",
            Case => "'case'",
            Default => "'default'",
            Return => "'return'",
            Break => "'break'",
            Continue => "'continue'",
            Try => "'try'",
            Catch => "'catch'",
            Finally => "'finally'",
            Function => "'function'",
            Class => "'class'",
            Extends => "'extends'",
            Var => "'var'",
            Const => "'const'",
            Use => "'use'",
            Print => "'print'",
            Println => "'println'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Percent => "'%'",
            Equal => "'='",
            PlusEqual => "'+='",
            MinusEqual => "'-='",
            StarEqual => "'*='",
            SlashEqual => "'/='",
            PercentEqual => "'%='",
            Amp => "'&'",
            Pipe => "'|'",
            Caret => "'^'",
            Tilde => "'~'",
            LessLess => "'<<'",
            GreaterGreater => "'>>'",
            AmpEqual => "'&='",
            PipeEqual => "'|='",
            CaretEqual => "'^='",
            LessLessEqual => "'<<='",
            GreaterGreaterEqual => "'>>='",
            EqualEqual => "'=='",
            BangEqual => "'!='",
            Less => "'<'",
            LessEqual => "'<='",
            Greater => "'>'",
            GreaterEqual => "'>='",
            AmpAmp => "'&&'",
            PipePipe => "'||'",
            Bang => "'!'",
            PlusPlus => "'++'",
            MinusMinus => "'--'",
            Question => "'?'",
            Colon => "':'",
            Dot => "'.'",
            LeftParen => "'('",
            RightParen => "')'",
            LeftBracket => "'['",
            RightBracket => "']'",
            LeftBrace => "'{'",
            RightBrace => "'}'",
            Semicolon => "';'",
            Comma => "','",
            Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Look up a keyword from an identifier.
///
/// Returns `None` for ordinary identifiers.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match ident {
        // Types
        "int" => Int,
        "double" => Double,
        "string" => String,
        "bool" => Bool,
        "fun" => Fun,
        "char" => Char,

        // Values
        "true" => True,
        "false" => False,
        "null" => Null,

        // Control flow
        "for" => For,
        "while" => While,
        "do" => Do,
        "end" => End,
        "if" => If,
        "elif" => Elif,
        "else" => Else,
        "then" => Then,
        "switch" => Switch,
        "case" => Case,
        "default" => Default,
        "return" => Return,
        "break" => Break,
        "continue" => Continue,
        "try" => Try,
        "catch" => Catch,
        "finally" => Finally,

        // Declarations
        "function" => Function,
        "class" => Class,
        "extends" => Extends,
        "var" => Var,
        "const" => Const,
        "use" => Use,

        // Output
        "print" => Print,
        "println" => Println,

        _ => return None,
    })
}
