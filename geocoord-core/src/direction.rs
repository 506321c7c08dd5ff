use tracing::trace;

use crate::error::ParseError;

// south and west are negative numbers
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Cardinal::North),
            'E' => Some(Cardinal::East),
            'S' => Some(Cardinal::South),
            'W' => Some(Cardinal::West),
            _ => None,
        }
    }
    pub fn is_negative(self) -> bool {
        matches!(self, Cardinal::South | Cardinal::West)
    }
}

/// Replaces a trailing cardinal letter with an explicit sign, e.g. `14° 27' 56.1''S`
/// becomes `-14° 27' 56.1''`.
///
/// Input without a cardinal letter comes back trimmed and otherwise untouched. A
/// leading `-` combined with a letter is rejected rather than resolved either way.
pub fn normalize_direction(raw: &str) -> Result<String, ParseError> {
    let trimmed = raw.trim();
    let cardinal = match trimmed.chars().last().and_then(Cardinal::from_char) {
        None => return Ok(trimmed.to_string()),
        Some(cardinal) => cardinal,
    };
    if trimmed.starts_with('-') {
        return Err(ParseError::Contradiction(trimmed.to_string()));
    }
    // cardinal letters are ASCII, so the last char is exactly one byte
    let body = trimmed[..trimmed.len() - 1].trim_end();
    trace!(?cardinal, body, "consumed cardinal letter");
    Ok(match cardinal.is_negative() {
        true => format!("-{}", body),
        false => body.to_string(),
    })
}
