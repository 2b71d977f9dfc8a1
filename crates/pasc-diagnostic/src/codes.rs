//! Error codes for pasc diagnostics.

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Token extraction errors (P0001 - P0099)
    InvalidCharacter,
    InvalidNumber,
    RangeInteger,
    RangeReal,
    UnexpectedEof,

    // Parser errors (P0100 - P0199)
    UnexpectedToken,
    MissingColonEquals,
    MissingDo,
    MissingEnd,
    MissingIdentifier,
    MissingLeftParen,
    MissingPeriod,
    MissingRightParen,
    MissingSemicolon,
    MissingThen,
    MissingUntil,
    MissingLessThan0,
    MissingEqual0,
    MissingGreaterThan0,
    TooManyErrors,

    // Driver errors (P0900 - P0999)
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Token extraction
            ErrorCode::InvalidCharacter => "P0001",
            ErrorCode::InvalidNumber => "P0002",
            ErrorCode::RangeInteger => "P0003",
            ErrorCode::RangeReal => "P0004",
            ErrorCode::UnexpectedEof => "P0005",

            // Parser
            ErrorCode::UnexpectedToken => "P0100",
            ErrorCode::MissingColonEquals => "P0101",
            ErrorCode::MissingDo => "P0102",
            ErrorCode::MissingEnd => "P0103",
            ErrorCode::MissingIdentifier => "P0104",
            ErrorCode::MissingLeftParen => "P0105",
            ErrorCode::MissingPeriod => "P0106",
            ErrorCode::MissingRightParen => "P0107",
            ErrorCode::MissingSemicolon => "P0108",
            ErrorCode::MissingThen => "P0109",
            ErrorCode::MissingUntil => "P0110",
            ErrorCode::MissingLessThan0 => "P0111",
            ErrorCode::MissingEqual0 => "P0112",
            ErrorCode::MissingGreaterThan0 => "P0113",
            ErrorCode::TooManyErrors => "P0199",

            // Driver
            ErrorCode::IoError => "P0900",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCharacter => "invalid character",
            ErrorCode::InvalidNumber => "invalid number",
            ErrorCode::RangeInteger => "integer literal out of range",
            ErrorCode::RangeReal => "real literal out of range",
            ErrorCode::UnexpectedEof => "unexpected end of file",

            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::MissingColonEquals => "missing :=",
            ErrorCode::MissingDo => "missing DO",
            ErrorCode::MissingEnd => "missing END",
            ErrorCode::MissingIdentifier => "missing identifier",
            ErrorCode::MissingLeftParen => "missing (",
            ErrorCode::MissingPeriod => "missing .",
            ErrorCode::MissingRightParen => "missing )",
            ErrorCode::MissingSemicolon => "missing ;",
            ErrorCode::MissingThen => "missing THEN",
            ErrorCode::MissingUntil => "missing UNTIL",
            ErrorCode::MissingLessThan0 => "missing LESSTHAN0",
            ErrorCode::MissingEqual0 => "missing EQUAL0",
            ErrorCode::MissingGreaterThan0 => "missing GREATERTHAN0",
            ErrorCode::TooManyErrors => "too many syntax errors",

            ErrorCode::IoError => "object I/O error",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnexpectedEof => Some("look for an unclosed comment or string, or a statement cut short"),
            ErrorCode::MissingDo => Some("add `DO` before the loop body"),
            ErrorCode::MissingThen => Some("add `THEN` after the IF condition"),
            ErrorCode::MissingSemicolon => Some("separate statements with `;`"),
            ErrorCode::MissingColonEquals => Some("assignments are written `name := value`"),
            ErrorCode::MissingLessThan0 => {
                Some("a WHEN statement starts its branches with `LESSTHAN0`")
            }
            ErrorCode::MissingEqual0 => Some("add the `EQUAL0` branch after the `LESSTHAN0` branch"),
            ErrorCode::MissingGreaterThan0 => {
                Some("add the `GREATERTHAN0` branch after the `EQUAL0` branch")
            }
            _ => None,
        }
    }

    /// Errors past this point stop the parse instead of being recovered from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCode::TooManyErrors | ErrorCode::IoError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
