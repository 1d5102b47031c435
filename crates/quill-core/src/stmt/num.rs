use super::Value;
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty)
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Integers cross-convert with bounds checking: stores often widen
            // every integer column to 64 bits.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted = match &value {
                        Value::I8(v) => <$ty>::try_from(*v).ok(),
                        Value::I16(v) => <$ty>::try_from(*v).ok(),
                        Value::I32(v) => <$ty>::try_from(*v).ok(),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::U8(v) => <$ty>::try_from(*v).ok(),
                        Value::U16(v) => <$ty>::try_from(*v).ok(),
                        Value::U32(v) => <$ty>::try_from(*v).ok(),
                        Value::U64(v) => <$ty>::try_from(*v).ok(),
                        Value::Bool(v) => Some(<$ty>::from(*v)),
                        Value::String(v) => v.parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
}

macro_rules! impl_float {
    (
        $(
            $variant:ident($ty:ty)
        )*
    ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::F32(v) => Ok(v as $ty),
                        Value::F64(v) => Ok(v as $ty),
                        Value::I8(v) => Ok(v as $ty),
                        Value::I16(v) => Ok(v as $ty),
                        Value::I32(v) => Ok(v as $ty),
                        Value::I64(v) => Ok(v as $ty),
                        Value::U8(v) => Ok(v as $ty),
                        Value::U16(v) => Ok(v as $ty),
                        Value::U32(v) => Ok(v as $ty),
                        Value::U64(v) => Ok(v as $ty),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_float! {
    F32(f32)
    F64(f64)
}
