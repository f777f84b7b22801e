use crate::{Error, Result, Value};

/// A type that can be loaded from a single column value.
///
/// Record fields must implement `Primitive` unless they are marked
/// `#[embed]`.
pub trait Primitive: Sized {
    /// Returns `true` if the primitive accepts `NULL` (e.g. `Option`).
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;
}

/// A storage location a cursor writes one column value into.
///
/// Every [`Primitive`] is a destination: scanning replaces the current
/// value with the loaded one.
pub trait Dest {
    fn store(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive> Dest for T {
    fn store(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

macro_rules! impl_int_primitive {
    ( $($ty:ty),+ ) => {
        $(
            impl Primitive for $ty {
                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$ty>::try_from(v)
                            .map_err(|_| Error::type_conversion(value, stringify!($ty))),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )+
    };
}

impl_int_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Primitive for bool {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // SQLite and friends store booleans as integers
            Value::I64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Primitive for f64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Primitive for f32 {
    fn load(value: Value) -> Result<Self> {
        f64::load(value).map(|v| v as f32)
    }
}

impl Primitive for String {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
