use crate::error::QueryError;
use date_span::DateSpan;
use serde::{Deserialize, Serialize};

/// Which value shapes a requirement accepts. Two independent switches, so
/// the legal combinations are visible at the dispatch site instead of
/// hiding in a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub composite: bool,
    pub range: bool,
}

/// `start..end` with either side optionally open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// The typed value carried by a [`Requirement`](crate::Requirement).
///
/// The executor's contract: `Composite` pieces OR together, `Range` and
/// `Time` become inclusive between-bounds predicates (open on the `None`
/// side), `Single` compares directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// One literal value.
    Single(String),
    /// An inclusive range of literal values, e.g. `1..100` or `50..`.
    Range(RangeValue),
    /// An already-resolved timestamp span. Only date requirements produce
    /// this; the resolver hands over the bounds directly rather than
    /// re-encoding them as text for a second parse.
    Time(DateSpan),
    /// Ordered alternatives, each a `Single` or `Range`. Never nested.
    Composite(Vec<Value>),
}

/// Parses a raw token value under the given capability.
///
/// A comma splits the value into alternatives when `composite` is allowed;
/// `..` inside a piece builds a range when `range` is allowed. A shape the
/// capability does not permit is an error, never a silent fallback to
/// `Single`.
///
/// ```
/// use booru_query::{parse_value, Capability, Value};
///
/// let capability = Capability { composite: true, range: true };
/// let value = parse_value("1,3..5", capability).unwrap();
/// let Value::Composite(pieces) = value else { panic!() };
/// assert_eq!(pieces.len(), 2);
/// ```
pub fn parse_value(raw: &str, capability: Capability) -> Result<Value, QueryError> {
    if !raw.contains(',') {
        return parse_piece(raw, capability);
    }
    if !capability.composite {
        return Err(QueryError::InvalidValue(format!(
            "alternatives are not allowed here: {raw:?}"
        )));
    }

    let mut pieces = Vec::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            return Err(QueryError::InvalidValue(format!(
                "empty alternative in {raw:?}"
            )));
        }
        pieces.push(parse_piece(piece, capability)?);
    }
    Ok(Value::Composite(pieces))
}

fn parse_piece(piece: &str, capability: Capability) -> Result<Value, QueryError> {
    let Some(index) = piece.find("..") else {
        return Ok(Value::Single(piece.to_string()));
    };
    if !capability.range {
        return Err(QueryError::InvalidValue(format!(
            "ranges are not allowed here: {piece:?}"
        )));
    }

    let start = piece[..index].trim();
    let end = piece[index + 2..].trim();
    Ok(Value::Range(RangeValue {
        start: (!start.is_empty()).then(|| start.to_string()),
        end: (!end.is_empty()).then(|| end.to_string()),
    }))
}
