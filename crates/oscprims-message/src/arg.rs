use bytes::Bytes;

use crate::tag::TypeTag;

/// A typed OSC argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    /// 32-bit signed integer (`i`).
    Int(i32),
    /// 32-bit float (`f`).
    Float(f32),
    /// String (`s`).
    Str(String),
    /// Binary blob (`b`).
    Blob(Bytes),
    /// Boolean (`T` / `F`). Encoded in the tag string only.
    Bool(bool),
}

impl OscArg {
    /// The tag this value encodes as.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Int(_) => TypeTag::Int32,
            Self::Float(_) => TypeTag::Float32,
            Self::Str(_) => TypeTag::String,
            Self::Blob(_) => TypeTag::Blob,
            Self::Bool(true) => TypeTag::True,
            Self::Bool(false) => TypeTag::False,
        }
    }

    /// Whether this value can fill a payload slot for `tag`.
    pub fn matches(&self, tag: TypeTag) -> bool {
        self.type_tag() == tag
    }

    /// Short type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int32",
            Self::Float(_) => "float32",
            Self::Str(_) => "string",
            Self::Blob(_) => "blob",
            Self::Bool(_) => "bool",
        }
    }
}

impl From<i32> for OscArg {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for OscArg {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OscArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OscArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for OscArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Bytes> for OscArg {
    fn from(value: Bytes) -> Self {
        Self::Blob(value)
    }
}

impl From<Vec<u8>> for OscArg {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(Bytes::from(value))
    }
}
