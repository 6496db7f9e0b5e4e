use super::SqlValue;

/// One argument bound to a statement.
///
/// A parameter is identified either by name or by its 1-based ordinal
/// position. A parameter with no name and an ordinal of zero or less is
/// neither named nor ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParameter {
    pub name: Option<String>,
    pub ordinal: i32,
    pub value: SqlValue,
}

impl BoundParameter {
    /// Creates a parameter bound by name, e.g. `:id`.
    pub fn named(name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            name: Some(name.into()),
            ordinal: 0,
            value: value.into(),
        }
    }

    /// Creates a parameter bound by position, e.g. `$1`.
    pub fn ordinal(ordinal: i32, value: impl Into<SqlValue>) -> Self {
        Self {
            name: None,
            ordinal,
            value: value.into(),
        }
    }

    /// Binds `values` to `$1..=$n` in order.
    pub fn positional<I, V>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        values
            .into_iter()
            .zip(1..)
            .map(|(value, ordinal)| Self::ordinal(ordinal, value))
            .collect()
    }

    pub fn is_named(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn is_ordinal(&self) -> bool {
        self.ordinal > 0
    }
}
