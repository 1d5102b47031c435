use super::Type;
use crate::{Error, Result};

/// A value bound to a placeholder or read from a result column.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// String value
    String(String),

    /// Byte sequence
    Bytes(Vec<u8>),

    /// Instant in time
    Timestamp(jiff::Timestamp),

    /// Universally unique identifier
    Uuid(uuid::Uuid),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    /// Returns the native kind of this value. `Null` has no kind of its own.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Uuid(_) => Type::Uuid,
            Self::Null => Type::Unknown,
        }
    }

    /// Reinterprets a loosely typed value (as returned by stores that only
    /// know a handful of storage classes) as the given kind.
    pub fn cast(self, ty: Type) -> Result<Value> {
        if self.is_null() || ty == Type::Unknown || self.infer_ty() == ty {
            return Ok(self);
        }

        Ok(match ty {
            Type::Bool => Value::Bool(self.try_into()?),
            Type::I8 => Value::I8(self.try_into()?),
            Type::I16 => Value::I16(self.try_into()?),
            Type::I32 => Value::I32(self.try_into()?),
            Type::I64 => Value::I64(self.try_into()?),
            Type::U8 => Value::U8(self.try_into()?),
            Type::U16 => Value::U16(self.try_into()?),
            Type::U32 => Value::U32(self.try_into()?),
            Type::U64 => Value::U64(self.try_into()?),
            Type::F32 => Value::F32(self.try_into()?),
            Type::F64 => Value::F64(self.try_into()?),
            Type::String => Value::String(self.try_into()?),
            Type::Bytes => Value::Bytes(self.try_into()?),
            Type::Timestamp => Value::Timestamp(self.try_into()?),
            Type::Uuid => Value::Uuid(self.try_into()?),
            Type::Unknown => self,
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(src: jiff::Timestamp) -> Self {
        Self::Timestamp(src)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(src: uuid::Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // Stores without a native boolean hand back 0/1 integers
            Value::I8(v) => Ok(v != 0),
            Value::I16(v) => Ok(v != 0),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            Value::U8(v) => Ok(v != 0),
            Value::U16(v) => Ok(v != 0),
            Value::U32(v) => Ok(v != 0),
            Value::U64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => {
                String::from_utf8(v).map_err(|e| Error::type_conversion(e.into_bytes().into(), "String"))
            }
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl TryFrom<Value> for jiff::Timestamp {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            Value::String(v) => match v.parse::<jiff::Timestamp>() {
                Ok(ts) => Ok(ts),
                // MySQL DATETIME text has no offset; it is stored as UTC
                Err(_) => v
                    .parse::<jiff::civil::DateTime>()
                    .and_then(|dt| dt.to_zoned(jiff::tz::TimeZone::UTC))
                    .map(|zoned| zoned.timestamp())
                    .map_err(|_| Error::type_conversion(Value::String(v), "Timestamp")),
            },
            Value::I64(secs) => jiff::Timestamp::from_second(secs).map_err(Error::from),
            value => Err(Error::type_conversion(value, "Timestamp")),
        }
    }
}

impl TryFrom<Value> for uuid::Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => v
                .parse::<uuid::Uuid>()
                .map_err(|_| Error::type_conversion(Value::String(v), "Uuid")),
            Value::Bytes(v) => uuid::Uuid::from_slice(&v).map_err(Error::from),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}
