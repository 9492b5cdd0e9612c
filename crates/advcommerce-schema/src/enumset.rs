use serde_json::Value;

/// The declared constants of a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Members {
    Strings(&'static [&'static str]),
    Integers(&'static [i64]),
}

/// A closed, named set of string or integer constants.
///
/// Membership is exact: no case-folding, no numeric/string coercion, and
/// no cross-kind matches (an integer never belongs to a string set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumSet {
    name: &'static str,
    members: Members,
}

impl EnumSet {
    /// Define a string-valued enumeration.
    pub const fn strings(name: &'static str, members: &'static [&'static str]) -> Self {
        Self {
            name,
            members: Members::Strings(members),
        }
    }

    /// Define an integer-valued enumeration.
    pub const fn integers(name: &'static str, members: &'static [i64]) -> Self {
        Self {
            name,
            members: Members::Integers(members),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> Members {
        self.members
    }

    /// Check exact membership of a JSON value in this set.
    pub fn contains(&self, value: &Value) -> bool {
        match (self.members, value) {
            (Members::Strings(members), Value::String(s)) => members.iter().any(|m| m == s),
            (Members::Integers(members), Value::Number(n)) => {
                n.as_i64().is_some_and(|v| members.contains(&v))
            }
            _ => false,
        }
    }
}
