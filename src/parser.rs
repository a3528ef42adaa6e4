use crate::error::QueryError;
use crate::filter::{OrderColumn, OrderDirection, PostFilter, Requirement, RequirementKind};
use crate::token::Token;
use crate::value::{parse_value, Capability, Value};
use date_span::{resolve_expression, DateContext, DateSpan};
use tracing::{debug, trace};

/// Compiles a token stream into a [`PostFilter`].
///
/// The first failing token aborts the whole compilation; the caller never
/// receives a partially built filter.
pub fn compile(tokens: &[Token], context: &DateContext) -> Result<PostFilter, QueryError> {
    let mut filter = PostFilter::new();
    for token in tokens {
        apply_token(&mut filter, token, context)?;
    }
    debug!(
        tokens = tokens.len(),
        requirements = filter.requirements.len(),
        "compiled post query"
    );
    Ok(filter)
}

/// Applies one token to the filter: plain tokens become TAG requirements,
/// named tokens dispatch on their key.
pub fn apply_token(
    filter: &mut PostFilter,
    token: &Token,
    context: &DateContext,
) -> Result<(), QueryError> {
    trace!(?token, "applying token");
    let Some(key) = token.key.as_deref() else {
        return apply_plain_token(filter, token);
    };

    match key.to_ascii_lowercase().as_str() {
        "order" => set_order(filter, token),
        "date" => add_date_requirement(filter, token, context),
        lowered => match key_spec(lowered) {
            Some(spec) => add_keyed_requirement(filter, token, spec),
            None => Err(QueryError::UnsupportedKey(key.to_string())),
        },
    }
}

/// Every keyless token is a tag match; alternatives are allowed, ranges are
/// not.
pub fn apply_plain_token(filter: &mut PostFilter, token: &Token) -> Result<(), QueryError> {
    let value = parse_value(
        &token.value,
        Capability {
            composite: true,
            range: false,
        },
    )?;
    filter.add_requirement(Requirement {
        kind: RequirementKind::Tag,
        value,
        negated: token.negated,
    });
    Ok(())
}

/// Maps an order token to its column. The vocabulary is closed; anything
/// else is an unsupported key.
pub fn resolve_order_column(token: &str) -> Result<OrderColumn, QueryError> {
    match token.to_ascii_lowercase().as_str() {
        "id" => Ok(OrderColumn::Id),
        "fav_time" => Ok(OrderColumn::FavTime),
        "fav_count" => Ok(OrderColumn::FavCount),
        "tag_count" => Ok(OrderColumn::TagCount),
        "time" => Ok(OrderColumn::LastEditTime),
        "score" => Ok(OrderColumn::Score),
        _ => Err(QueryError::UnsupportedKey(token.to_string())),
    }
}

/// Requirement type and value capability for one named key. `hash` never
/// carries negation through to its requirement.
struct KeySpec {
    kind: RequirementKind,
    capability: Capability,
    negatable: bool,
}

fn key_spec(key: &str) -> Option<KeySpec> {
    match key {
        "id" => Some(KeySpec {
            kind: RequirementKind::Id,
            capability: Capability {
                composite: true,
                range: true,
            },
            negatable: true,
        }),
        "hash" => Some(KeySpec {
            kind: RequirementKind::Hash,
            capability: Capability {
                composite: true,
                range: false,
            },
            negatable: false,
        }),
        "tag_count" => Some(KeySpec {
            kind: RequirementKind::TagCount,
            capability: Capability {
                composite: true,
                range: true,
            },
            negatable: true,
        }),
        _ => None,
    }
}

fn add_keyed_requirement(
    filter: &mut PostFilter,
    token: &Token,
    spec: KeySpec,
) -> Result<(), QueryError> {
    let value = parse_value(&token.value, spec.capability)?;
    filter.add_requirement(Requirement {
        kind: spec.kind,
        value,
        negated: spec.negatable && token.negated,
    });
    Ok(())
}

fn add_date_requirement(
    filter: &mut PostFilter,
    token: &Token,
    context: &DateContext,
) -> Result<(), QueryError> {
    let span = resolve_date_token(&token.value, context)?;
    filter.add_requirement(Requirement {
        kind: RequirementKind::Date,
        value: Value::Time(span),
        negated: token.negated,
    });
    Ok(())
}

/// A single `..` splits the token into two expressions resolved
/// independently. Each side resolves to a full span of its own; only the
/// left start and the right end survive, the inner halves are discarded.
/// Without a `..` the token's own span is used as-is.
fn resolve_date_token(raw: &str, context: &DateContext) -> Result<DateSpan, QueryError> {
    if let Some((left, right)) = split_single_range(raw) {
        let lower = resolve_expression(left, context)?;
        let upper = resolve_expression(right, context)?;
        Ok(DateSpan::new(lower.start, upper.end))
    } else {
        Ok(resolve_expression(raw, context)?)
    }
}

fn split_single_range(raw: &str) -> Option<(&str, &str)> {
    let (left, right) = raw.split_once("..")?;
    if right.contains("..") {
        return None;
    }
    Some((left, right))
}

fn set_order(filter: &mut PostFilter, token: &Token) -> Result<(), QueryError> {
    let column = resolve_order_column(token.value.trim())?;
    let direction = if token.negated {
        OrderDirection::Ascending
    } else {
        OrderDirection::Descending
    };
    filter.set_ordering(column, direction);
    Ok(())
}
