//! Operator kinds and lexical queries.

use std::fmt;

use crate::LookupError;

/// Operator kinds known to the compiler.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorKind {
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `target = value`
    Assignment,
    /// `params => body`
    Arrow,
    /// `f(args)`. Synthesized by the parser, never tokenized.
    FunctionCall,
}

impl OperatorKind {
    /// All kinds in declaration order.
    pub const ALL: [OperatorKind; 5] = [
        Self::Plus,
        Self::Minus,
        Self::Assignment,
        Self::Arrow,
        Self::FunctionCall,
    ];

    /// Lexical symbol. Empty for kinds the lexer never produces, so that it
    /// can never match source text.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Assignment => "=",
            Self::Arrow => "=>",
            Self::FunctionCall => "",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Assignment => "ASSIGNMENT",
            Self::Arrow => "ARROW",
            Self::FunctionCall => "FUNCTION_CALL",
        }
    }

    /// Whether the lexer may produce this kind from source text.
    pub fn matched_by_lexer(self) -> bool {
        !matches!(self, Self::FunctionCall)
    }

    pub fn is_infix(self) -> bool {
        true
    }

    /// Whether the kind computes a new value from its operands.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Whether the kind has a type rule and a fold rule.
    pub fn has_rules(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Assignment => true,
            Self::Arrow | Self::FunctionCall => false,
        }
    }

    /// Operand count, or `None` when it varies (calls).
    pub fn arity(self) -> Option<usize> {
        match self {
            Self::Plus | Self::Minus | Self::Assignment | Self::Arrow => Some(2),
            Self::FunctionCall => None,
        }
    }

    /// Whether some lexer-matched kind has exactly this symbol.
    pub fn is_valid_symbol(text: &str) -> bool {
        Self::lexer_kinds().any(|k| k.symbol() == text)
    }

    /// Whether some lexer-matched kind's symbol starts with `c`.
    ///
    /// Lets the lexer probe one character before committing to an operator.
    pub fn is_valid_symbol_start(c: char) -> bool {
        Self::lexer_kinds().any(|k| k.symbol().starts_with(c))
    }

    /// All lexer-matched kinds with exactly this symbol, in declaration order.
    ///
    /// Two kinds may share a symbol; the caller disambiguates by arity or
    /// context.
    pub fn kinds_for_symbol(text: &str) -> Vec<OperatorKind> {
        matching_symbol(Self::lexer_kinds().map(|k| (k.symbol(), k)), text)
    }

    /// Like [`kinds_for_symbol`](Self::kinds_for_symbol), but nothing
    /// matching is an error.
    pub fn lookup(text: &str) -> Result<Vec<OperatorKind>, LookupError> {
        let kinds = Self::kinds_for_symbol(text);
        if kinds.is_empty() {
            return Err(LookupError::UnknownOperator(text.to_string()));
        }
        Ok(kinds)
    }

    fn lexer_kinds() -> impl Iterator<Item = OperatorKind> {
        Self::ALL.into_iter().filter(|k| k.matched_by_lexer())
    }
}

/// Every item whose symbol equals `text`, keeping input order.
pub(crate) fn matching_symbol<'a, T>(
    entries: impl IntoIterator<Item = (&'a str, T)>,
    text: &str,
) -> Vec<T> {
    entries
        .into_iter()
        .filter(|(symbol, _)| *symbol == text)
        .map(|(_, item)| item)
        .collect()
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
