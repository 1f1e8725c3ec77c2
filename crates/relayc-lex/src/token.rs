//! Token type definitions for the Relay rule language.
//!
//! This module declares the closed catalog of token kinds, the semantic
//! values tokens can carry, and the `Token` container emitted by the lexer.
//!
//! Kinds come in two flavors. *Fixed-code* kinds are bound to exactly one
//! canonical source string (keywords, type names, duration units,
//! operators); the registry maps code to kind in one direction and
//! [`TokenKind::code`] maps kind to code in the other. *Open* kinds
//! (identifiers, literals, end of input) have no fixed code and are
//! classified structurally by the shape of the matched text.

use std::fmt;
use std::hash::BuildHasherDefault;
use std::sync::LazyLock;

use indexmap::IndexMap;
use relayc_util::Position;
use rustc_hash::FxHasher;

/// Lexical token kinds recognized by the Relay lexer.
///
/// The enumeration is closed: the lexer never produces a kind outside this
/// set, and every fixed code below is unique across the whole registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End-of-input marker, emitted idempotently once the source is exhausted.
    Eof,
    /// Identifier beginning with an upper-case letter (a state name).
    StateId,
    /// Identifier beginning with a lower-case letter.
    NameId,

    /// The `when` rule keyword.
    When,
    /// The `always` rule keyword.
    Always,
    /// The `every` rule keyword.
    Every,
    /// The `after` rule keyword.
    After,
    /// The `onenter` rule keyword.
    OnEnter,

    /// The `long` type name.
    TyLong,
    /// The `int` type name.
    TyInt,
    /// The `short` type name.
    TyShort,
    /// The `bool` type name.
    TyBool,
    /// The `string` type name.
    TyString,
    /// The `char` type name.
    TyChar,
    /// The `proc` type name.
    TyProc,
    /// The `func` type name.
    TyFunc,

    /// The `d` duration suffix (days).
    UnitDay,
    /// The `h` duration suffix (hours).
    UnitHour,
    /// The `m` duration suffix (minutes).
    UnitMinute,
    /// The `s` duration suffix (seconds).
    UnitSecond,
    /// The `ms` duration suffix (milliseconds).
    UnitMilli,
    /// The `µs` duration suffix (microseconds).
    UnitMicro,

    /// The left parenthesis `(`.
    ParenOpen,
    /// The right parenthesis `)`.
    ParenClose,

    /// The addition operator `+`.
    Plus,
    /// The subtraction operator `-`.
    Minus,
    /// The multiplication operator `*`.
    Star,
    /// The division operator `/`.
    Slash,
    /// The modulo operator `%`.
    Percent,

    /// The boolean and operator `&&`.
    AndAnd,
    /// The boolean or operator `||`.
    OrOr,
    /// The boolean xor operator `^^`.
    XorXor,
    /// The boolean negation operator `!`.
    Bang,

    /// The bitwise and operator `&`.
    Amp,
    /// The bitwise or operator `|`.
    Pipe,
    /// The bitwise xor operator `^`.
    Caret,
    /// The bitwise negation operator `~`.
    Tilde,
    /// The left shift operator `<<`.
    Shl,
    /// The right shift operator `>>`.
    Shr,

    /// The greater-than operator `>`.
    Gt,
    /// The greater-or-equal operator `>=`.
    GtEq,
    /// The less-than operator `<`.
    Lt,
    /// The less-or-equal operator `<=`.
    LtEq,
    /// The equality operator `==`.
    EqEq,
    /// The inequality operator `!=`.
    NotEq,

    /// The change-detection operator `->` ("value changed to").
    ChangeTo,
    /// The change-detection operator `!>` ("value did not change to").
    NotChangeTo,

    /// The old-value marker `§`.
    Old,

    /// A binary integer literal (`0b1010`).
    LitBin,
    /// A hexadecimal integer literal (`0x2A`).
    LitHex,
    /// A decimal integer literal (`42`).
    LitDec,
    /// A boolean literal (`true` / `false`).
    LitBool,
    /// A string literal (`"hello"`).
    LitString,
    /// A character literal (`'a'`).
    LitChar,
    /// A hardware pin reference (`$13`).
    LitPin,
    /// A serial-port reference (`$$0`).
    LitSerial,
}

/// Every fixed-code kind, in registry order.
const FIXED_KINDS: &[TokenKind] = &[
    TokenKind::When,
    TokenKind::Always,
    TokenKind::Every,
    TokenKind::After,
    TokenKind::OnEnter,
    TokenKind::TyLong,
    TokenKind::TyInt,
    TokenKind::TyShort,
    TokenKind::TyBool,
    TokenKind::TyString,
    TokenKind::TyChar,
    TokenKind::TyProc,
    TokenKind::TyFunc,
    TokenKind::UnitDay,
    TokenKind::UnitHour,
    TokenKind::UnitMinute,
    TokenKind::UnitSecond,
    TokenKind::UnitMilli,
    TokenKind::UnitMicro,
    TokenKind::ParenOpen,
    TokenKind::ParenClose,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::AndAnd,
    TokenKind::OrOr,
    TokenKind::XorXor,
    TokenKind::Bang,
    TokenKind::Amp,
    TokenKind::Pipe,
    TokenKind::Caret,
    TokenKind::Tilde,
    TokenKind::Shl,
    TokenKind::Shr,
    TokenKind::Gt,
    TokenKind::GtEq,
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::EqEq,
    TokenKind::NotEq,
    TokenKind::ChangeTo,
    TokenKind::NotChangeTo,
    TokenKind::Old,
];

/// Code-to-kind lookup for the fixed-code kinds.
///
/// Built once at first use; no two kinds share a code string, which the
/// builder checks in debug builds.
static CODE_TO_KIND: LazyLock<IndexMap<&'static str, TokenKind, BuildHasherDefault<FxHasher>>> =
    LazyLock::new(|| {
        let mut map =
            IndexMap::with_capacity_and_hasher(FIXED_KINDS.len(), BuildHasherDefault::default());
        for &kind in FIXED_KINDS {
            if let Some(code) = kind.code() {
                let previous = map.insert(code, kind);
                debug_assert!(previous.is_none(), "duplicate code {code:?} in registry");
            }
        }
        map
    });

impl TokenKind {
    /// Returns the canonical source string for a fixed-code kind.
    ///
    /// Open kinds (identifiers, literals, end of input) have no fixed code
    /// and return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relayc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::When.code(), Some("when"));
    /// assert_eq!(TokenKind::ChangeTo.code(), Some("->"));
    /// assert_eq!(TokenKind::StateId.code(), None);
    /// ```
    pub const fn code(self) -> Option<&'static str> {
        match self {
            TokenKind::When => Some("when"),
            TokenKind::Always => Some("always"),
            TokenKind::Every => Some("every"),
            TokenKind::After => Some("after"),
            TokenKind::OnEnter => Some("onenter"),
            TokenKind::TyLong => Some("long"),
            TokenKind::TyInt => Some("int"),
            TokenKind::TyShort => Some("short"),
            TokenKind::TyBool => Some("bool"),
            TokenKind::TyString => Some("string"),
            TokenKind::TyChar => Some("char"),
            TokenKind::TyProc => Some("proc"),
            TokenKind::TyFunc => Some("func"),
            TokenKind::UnitDay => Some("d"),
            TokenKind::UnitHour => Some("h"),
            TokenKind::UnitMinute => Some("m"),
            TokenKind::UnitSecond => Some("s"),
            TokenKind::UnitMilli => Some("ms"),
            TokenKind::UnitMicro => Some("µs"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::ParenClose => Some(")"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::AndAnd => Some("&&"),
            TokenKind::OrOr => Some("||"),
            TokenKind::XorXor => Some("^^"),
            TokenKind::Bang => Some("!"),
            TokenKind::Amp => Some("&"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Caret => Some("^"),
            TokenKind::Tilde => Some("~"),
            TokenKind::Shl => Some("<<"),
            TokenKind::Shr => Some(">>"),
            TokenKind::Gt => Some(">"),
            TokenKind::GtEq => Some(">="),
            TokenKind::Lt => Some("<"),
            TokenKind::LtEq => Some("<="),
            TokenKind::EqEq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::ChangeTo => Some("->"),
            TokenKind::NotChangeTo => Some("!>"),
            TokenKind::Old => Some("§"),
            _ => None,
        }
    }

    /// Looks up the fixed-code kind bound to the given source string.
    ///
    /// # Examples
    ///
    /// ```
    /// use relayc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_code("every"), Some(TokenKind::Every));
    /// assert_eq!(TokenKind::from_code(">="), Some(TokenKind::GtEq));
    /// assert_eq!(TokenKind::from_code("Motor"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<TokenKind> {
        CODE_TO_KIND.get(code).copied()
    }

    /// Every fixed-code kind, in registry order.
    pub fn fixed_kinds() -> &'static [TokenKind] {
        FIXED_KINDS
    }
}

/// Semantic value carried by a token, where the kind has one.
///
/// Operators and the end-of-input marker carry no value; identifiers and
/// keywords carry their text, numeric and hardware-reference literals the
/// parsed integer, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenValue {
    /// A parsed integer (numeric literals, pin and serial references).
    Int(i64),
    /// A boolean literal value.
    Bool(bool),
    /// A character literal value.
    Char(char),
    /// Identifier, keyword, or string-literal text.
    Str(String),
}

/// A classified lexical token.
///
/// Tokens are immutable values created by the lexer and handed to the
/// caller; the lexer retains no references to previously produced tokens.
/// `position` is the location of the token's first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Source position of the token's first character.
    pub position: Position,
    /// The classified kind.
    pub kind: TokenKind,
    /// Semantic value, for kinds that carry one.
    pub value: Option<TokenValue>,
    /// The raw source text the token was scanned from.
    pub lexeme: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        position: Position,
        kind: TokenKind,
        value: Option<TokenValue>,
        lexeme: impl Into<String>,
    ) -> Self {
        Self {
            position,
            kind,
            value,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.lexeme)
    }
}
