use crate::value::Value;
use serde::{Deserialize, Serialize};

/// What a requirement constrains. Adding a key to the query vocabulary
/// means a new variant here plus one dispatch arm in the parser; existing
/// variants stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementKind {
    Tag,
    Id,
    Hash,
    Date,
    TagCount,
}

/// One typed, possibly negated filter condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub value: Value,
    pub negated: bool,
}

/// Sortable columns of the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderColumn {
    Id,
    FavTime,
    FavCount,
    TagCount,
    LastEditTime,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    Descending,
    Ascending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub column: OrderColumn,
    pub direction: OrderDirection,
}

/// The compiled query, handed off to the executor. Requirement order
/// mirrors token order; nothing ever removes or reorders entries, so query
/// generation stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostFilter {
    pub requirements: Vec<Requirement>,
    pub ordering: Option<Order>,
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    pub fn set_ordering(&mut self, column: OrderColumn, direction: OrderDirection) {
        self.ordering = Some(Order { column, direction });
    }
}
