//! Serde deserialization support: turning a decoded [`Value`] into any
//! `T: Deserialize`.
//!
//! Typed decoding is two-stage: [`decode`](crate::decode) parses TOON
//! text into a `Value`, and this module maps the value onto serde's data
//! model. The split keeps all text knowledge in the decoder; nothing here
//! ever looks at TOON syntax.
//!
//! Enum representations mirror the serializer: a bare string is a unit
//! variant, and a single-key object is a newtype, tuple, or struct
//! variant.

use crate::value::{Number, Value};
use crate::{Error, Result};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeOwned, EnumAccess, IntoDeserializer, VariantAccess, Visitor};
use serde::forward_to_deserialize_any;

/// Deserialize a `T` from an already-decoded value tree.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::{from_value, toon};
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let value = toon!({"x": 1, "y": 2});
/// let point: Point = from_value(value).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error when the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Value;

    fn into_deserializer(self) -> Value {
        self
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visit_array(arr, visitor),
            Value::Object(map) => visit_object(map, visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(map) => {
                let mut iter = map.into_iter();
                let (variant, value) = iter.next().ok_or_else(|| {
                    Error::message("expected an enum variant, found an empty object")
                })?;
                if iter.next().is_some() {
                    return Err(Error::message(
                        "expected a single-key object for an enum variant",
                    ));
                }
                visitor.visit_enum(EnumDeserializer { variant, value })
            }
            other => Err(Error::message(format!(
                "expected an enum variant, found {:?}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

fn visit_array<'de, V>(arr: Vec<Value>, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    let mut deserializer = SeqDeserializer::new(arr.into_iter());
    let seq = visitor.visit_seq(&mut deserializer)?;
    deserializer.end()?;
    Ok(seq)
}

fn visit_object<'de, V>(map: crate::ToonMap, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    let mut deserializer = MapDeserializer::new(map.into_iter());
    let object = visitor.visit_map(&mut deserializer)?;
    deserializer.end()?;
    Ok(object)
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = self.variant.into_deserializer();
        let access = VariantDeserializer { value: self.value };
        seed.deserialize(variant).map(|v| (v, access))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(Error::message(format!(
                "expected unit variant, found {:?}",
                other
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visit_array(arr, visitor),
            other => Err(Error::message(format!(
                "expected tuple variant, found {:?}",
                other
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(map) => visit_object(map, visitor),
            other => Err(Error::message(format!(
                "expected struct variant, found {:?}",
                other
            ))),
        }
    }
}
