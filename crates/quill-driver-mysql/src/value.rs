use mysql_async::prelude::ToValue;
use quill_core::stmt::{self, Value as CoreValue};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Decodes a wire value as `ty`. `Type::Unknown` keeps the wire class,
    /// with text columns returned as strings.
    pub fn from_sql(value: mysql_async::Value, ty: stmt::Type) -> quill_core::Result<Self> {
        use mysql_async::Value as SqlValue;

        let core_value = match value {
            SqlValue::NULL => CoreValue::Null,
            SqlValue::Int(v) => CoreValue::I64(v),
            SqlValue::UInt(v) => CoreValue::U64(v),
            SqlValue::Float(v) => CoreValue::F32(v),
            SqlValue::Double(v) => CoreValue::F64(v),
            SqlValue::Bytes(v) => match ty {
                stmt::Type::Unknown => match String::from_utf8(v) {
                    Ok(text) => CoreValue::String(text),
                    Err(err) => CoreValue::Bytes(err.into_bytes()),
                },
                stmt::Type::Bytes => CoreValue::Bytes(v),
                _ => CoreValue::String(
                    String::from_utf8(v)
                        .map_err(|err| quill_core::Error::type_conversion(err.into_bytes().into(), "String"))?,
                ),
            },
            SqlValue::Date(year, month, day, hour, minute, second, micros) => {
                let datetime = jiff::civil::DateTime::new(
                    year as i16,
                    month as i8,
                    day as i8,
                    hour as i8,
                    minute as i8,
                    second as i8,
                    micros as i32 * 1000,
                )?;
                CoreValue::Timestamp(datetime.to_zoned(jiff::tz::TimeZone::UTC)?.timestamp())
            }
            SqlValue::Time(negative, days, hours, minutes, seconds, _) => {
                let sign = if negative { "-" } else { "" };
                CoreValue::String(format!(
                    "{sign}{:02}:{minutes:02}:{seconds:02}",
                    days * 24 + hours as u32
                ))
            }
        };

        Ok(Value(core_value.cast(ty)?))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I8(value) => value.to_value(),
            CoreValue::I16(value) => value.to_value(),
            CoreValue::I32(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::U8(value) => value.to_value(),
            CoreValue::U16(value) => value.to_value(),
            CoreValue::U32(value) => value.to_value(),
            CoreValue::U64(value) => value.to_value(),
            CoreValue::F32(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
            CoreValue::Timestamp(value) => {
                let dt = value.to_zoned(jiff::tz::TimeZone::UTC).datetime();
                mysql_async::Value::Date(
                    dt.year() as u16,
                    dt.month() as u8,
                    dt.day() as u8,
                    dt.hour() as u8,
                    dt.minute() as u8,
                    dt.second() as u8,
                    (dt.subsec_nanosecond() / 1000) as u32,
                )
            }
            CoreValue::Uuid(value) => value.to_string().to_value(),
            CoreValue::Null => mysql_async::Value::NULL,
        }
    }
}
