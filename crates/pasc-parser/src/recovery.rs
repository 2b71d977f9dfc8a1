//! Synchronization sets for panic-mode error recovery.
//!
//! After a syntax error the parser discards tokens until it reaches one in
//! the set for the current grammar position. Every set here is a `const`:
//! computed at compile time, shared by every parse, never mutated.

use std::fmt;

use pasc_lexer::TokenKind;

/// An immutable set of token kinds, one bit per kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

const _: () = assert!(TokenKind::COUNT <= 128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u128 << (kinds[i] as u8);
            i += 1;
        }
        TokenSet(bits)
    }

    /// This set plus one more kind.
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | 1u128 << (kind as u8))
    }

    /// This set minus one kind.
    pub const fn without(self, kind: TokenKind) -> Self {
        TokenSet(self.0 & !(1u128 << (kind as u8)))
    }

    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u128 << (kind as u8)) != 0
    }

    pub const fn is_superset(self, other: TokenSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |&kind| self.contains(kind))
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(TokenKind::name)).finish()
    }
}

/// Tokens that can start a statement.
pub const STMT_START_SET: TokenSet = TokenSet::new(&[
    TokenKind::Begin,
    TokenKind::If,
    TokenKind::Repeat,
    TokenKind::While,
    TokenKind::When,
    TokenKind::Loop,
    TokenKind::Identifier,
    TokenKind::Semicolon,
]);

/// Tokens that can immediately follow a statement.
pub const STMT_FOLLOW_SET: TokenSet = TokenSet::new(&[
    TokenKind::Semicolon,
    TokenKind::End,
    TokenKind::Else,
    TokenKind::Until,
    TokenKind::Dot,
    TokenKind::Equal0,
    TokenKind::GreaterThan0,
]);

/// Tokens that can start an expression.
pub const EXPR_START_SET: TokenSet = TokenSet::new(&[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Identifier,
    TokenKind::Integer,
    TokenKind::Real,
    TokenKind::String,
    TokenKind::Not,
    TokenKind::LeftParen,
]);

/// Resume points around an expected keyword: any statement start, the
/// keyword itself, or anything that may follow a statement.
const fn expecting(kinds: &[TokenKind]) -> TokenSet {
    STMT_START_SET
        .union(TokenSet::new(kinds))
        .union(STMT_FOLLOW_SET)
}

/// `DO` in WHILE and LOOP statements.
pub const DO_SET: TokenSet = expecting(&[TokenKind::Do]);

/// The `)` closing a LOOP header. A `;` is not a resume point here, so a
/// stray separator before `)` is skipped instead of ending the header.
pub const RIGHT_PAREN_SET: TokenSet = DO_SET
    .with(TokenKind::RightParen)
    .without(TokenKind::Semicolon);

/// `THEN` in IF statements.
pub const THEN_SET: TokenSet = expecting(&[TokenKind::Then]);

/// `LESSTHAN0` in WHEN statements. The later branch markers are included so
/// a missing first marker does not swallow the rest of the statement.
pub const LESSTHAN0_SET: TokenSet = expecting(&[
    TokenKind::LessThan0,
    TokenKind::Equal0,
    TokenKind::GreaterThan0,
]);

/// `EQUAL0` in WHEN statements.
pub const EQUAL0_SET: TokenSet = expecting(&[TokenKind::Equal0, TokenKind::GreaterThan0]);

/// `GREATERTHAN0` in WHEN statements.
pub const GREATERTHAN0_SET: TokenSet = expecting(&[TokenKind::GreaterThan0]);

/// `:=` in assignments: the operator, an expression start, or a statement
/// follower.
pub const COLON_EQUALS_SET: TokenSet = EXPR_START_SET
    .with(TokenKind::ColonEquals)
    .union(STMT_FOLLOW_SET);

/// Check if a token starts a statement.
pub fn is_stmt_start(kind: TokenKind) -> bool {
    STMT_START_SET.contains(kind)
}

/// Check if a token may follow a statement.
pub fn is_stmt_follow(kind: TokenKind) -> bool {
    STMT_FOLLOW_SET.contains(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_stmt_start() {
        assert!(is_stmt_start(TokenKind::Loop));
        assert!(is_stmt_start(TokenKind::When));
        assert!(is_stmt_start(TokenKind::Identifier));
        assert!(!is_stmt_start(TokenKind::Plus));
    }

    #[test]
    fn test_expected_keyword_sets_cover_follow_set() {
        for set in [
            DO_SET,
            THEN_SET,
            LESSTHAN0_SET,
            EQUAL0_SET,
            GREATERTHAN0_SET,
            COLON_EQUALS_SET,
        ] {
            assert!(set.is_superset(STMT_FOLLOW_SET), "{set:?}");
        }
    }

    #[test]
    fn test_right_paren_set_skips_semicolon() {
        assert!(RIGHT_PAREN_SET.contains(TokenKind::RightParen));
        assert!(RIGHT_PAREN_SET.contains(TokenKind::Do));
        assert!(!RIGHT_PAREN_SET.contains(TokenKind::Semicolon));
    }

    #[test]
    fn test_set_operations() {
        let set = TokenSet::new(&[TokenKind::Do]).with(TokenKind::Then);
        assert_eq!(set.len(), 2);
        assert!(set.contains(TokenKind::Then));
        assert!(!set.contains(TokenKind::EndOfFile));
        assert!(TokenSet::EMPTY.is_empty());
        assert!(!set.without(TokenKind::Do).contains(TokenKind::Do));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![TokenKind::Do, TokenKind::Then]
        );
    }
}
