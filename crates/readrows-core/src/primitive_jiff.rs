use crate::{Error, Primitive, Result, Value};

macro_rules! impl_jiff_primitive {
    ($ty:ty, $lit:literal) => {
        impl Primitive for $ty {
            fn load(value: Value) -> Result<Self> {
                let parsed = match &value {
                    Value::String(text) => text.parse().ok(),
                    _ => None,
                };

                parsed.ok_or_else(|| Error::type_conversion(value, $lit))
            }
        }
    };
}

impl_jiff_primitive!(jiff::civil::DateTime, "jiff::civil::DateTime");
impl_jiff_primitive!(jiff::civil::Date, "jiff::civil::Date");
impl_jiff_primitive!(jiff::civil::Time, "jiff::civil::Time");

impl Primitive for jiff::Timestamp {
    fn load(value: Value) -> Result<Self> {
        let parsed = match &value {
            Value::String(text) => text.parse().ok(),
            // Unix epoch seconds
            Value::I64(secs) => jiff::Timestamp::from_second(*secs).ok(),
            _ => None,
        };

        parsed.ok_or_else(|| Error::type_conversion(value, "jiff::Timestamp"))
    }
}
