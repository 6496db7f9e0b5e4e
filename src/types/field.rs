/// A typed value union as exchanged with the Data API.
/// Holds exactly one representation; `Null` stands for SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    Long(i64),
    Boolean(bool),
    String(String),
    Double(f64),
    Blob(Vec<u8>),
}

impl Field {
    /// Name of the populated member, matching the Data API field names.
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Null => "isNull",
            Field::Long(_) => "longValue",
            Field::Boolean(_) => "booleanValue",
            Field::String(_) => "stringValue",
            Field::Double(_) => "doubleValue",
            Field::Blob(_) => "blobValue",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }
}

/// Hint telling the Data API how to interpret a string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Date,
    Timestamp,
}

impl TypeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeHint::Date => "DATE",
            TypeHint::Timestamp => "TIMESTAMP",
        }
    }
}

/// A wire-encoded parameter, referenced from SQL text as `:name`.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlParameter {
    pub name: String,
    pub value: Field,
    pub type_hint: Option<TypeHint>,
}

impl SqlParameter {
    pub fn new(name: impl Into<String>, value: Field) -> Self {
        Self {
            name: name.into(),
            value,
            type_hint: None,
        }
    }

    pub fn with_type_hint(mut self, hint: TypeHint) -> Self {
        self.type_hint = Some(hint);
        self
    }
}
