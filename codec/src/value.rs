//! Values whose shape is only known at runtime.
//!
//! [`Value`] is a closed union over every category the codec knows about. It packs exactly like
//! the static type it stands for, so a buffer packed from `(5i32, String::from("a"))` unpacks
//! with the template `Value::tuple([Value::Int(0), Value::from("")])` and vice versa.
//!
//! [`unpack_values`] is the variadic form of [`unpack`](crate::unpack): it takes any number of
//! templates and returns one value per template.

use crate::{
    types::{
        bounded::{BoundedValue, Int},
        bytes::{prefixed_size, read_prefixed, read_text, write_prefixed},
        collections::{MAPPING, SET},
        primitives::{
            read_boolean, read_float, read_integer, write_boolean, write_float, write_integer,
        },
    },
    EncodeSize, Error, Read, SizeConfig, Write,
};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

/// A dynamically shaped value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A native integer, packed in the 4-byte [`Int`] layout.
    Int(i64),
    /// A boolean, packed at the configured boolean width.
    Bool(bool),
    /// A native float, packed at the configured float width.
    Float(f64),
    /// A length-prefixed byte string.
    Bytes(Bytes),
    /// A length-prefixed UTF-8 string.
    Str(String),
    /// A fixed-arity tuple.
    Tuple(Vec<Value>),
    /// A bounded, fixed-width value.
    Bounded(BoundedValue),
    /// A composite object.
    Object(Object),
    /// A set. Never packs or unpacks.
    Set(Vec<Value>),
    /// A mapping. Never packs or unpacks.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Creates a tuple from its elements.
    pub fn tuple(elements: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Tuple(elements.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(
    i64 => Int,
    i32 => Int,
    bool => Bool,
    f64 => Float,
    f32 => Float,
    Bytes => Bytes,
    Vec<u8> => Bytes,
    String => Str,
    &str => Str,
    BoundedValue => Bounded,
    Object => Object,
);

macro_rules! impl_from_bounded {
    ($($kind:ident),*) => {
        $(
            impl From<crate::types::bounded::$kind> for Value {
                fn from(value: crate::types::bounded::$kind) -> Self {
                    Value::Bounded(value.into())
                }
            }
        )*
    };
}

impl_from_bounded!(
    Char,
    UnsignedChar,
    SignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double
);

/// An ordered sequence of named fields.
///
/// Names are for the caller only: the wire holds the field values in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    fields: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Returns the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Iterates over the fields in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Write for Value {
    fn write(&self, buf: &mut impl BufMut, cfg: &SizeConfig) -> Result<(), Error> {
        match self {
            Value::Int(value) => write_integer(*value, buf),
            Value::Bool(value) => write_boolean(*value, buf, cfg),
            Value::Float(value) => write_float(*value, buf, cfg),
            Value::Bytes(value) => write_prefixed(value, buf, cfg)?,
            Value::Str(value) => write_prefixed(value.as_bytes(), buf, cfg)?,
            Value::Tuple(elements) => {
                for element in elements {
                    element.write(buf, cfg)?;
                }
            }
            Value::Bounded(value) => value.write(buf, cfg)?,
            Value::Object(object) => {
                for (_, value) in &object.fields {
                    value.write(buf, cfg)?;
                }
            }
            Value::Set(_) => return Err(Error::Unsupported(SET)),
            Value::Map(_) => return Err(Error::Unsupported(MAPPING)),
        }
        Ok(())
    }
}

impl EncodeSize for Value {
    fn encode_size(&self, cfg: &SizeConfig) -> usize {
        match self {
            Value::Int(_) => Int::WIDTH,
            Value::Bool(_) => cfg.boolean(),
            Value::Float(_) => cfg.float(),
            Value::Bytes(value) => prefixed_size(value.len(), cfg),
            Value::Str(value) => prefixed_size(value.len(), cfg),
            Value::Tuple(elements) => elements.iter().map(|e| e.encode_size(cfg)).sum(),
            Value::Bounded(value) => value.encode_size(cfg),
            Value::Object(object) => object
                .fields
                .iter()
                .map(|(_, value)| value.encode_size(cfg))
                .sum(),
            Value::Set(_) | Value::Map(_) => 0,
        }
    }
}

impl Read for Value {
    fn read_cfg(&self, buf: &mut impl Buf, cfg: &SizeConfig) -> Result<Self, Error> {
        let value = match self {
            Value::Int(_) => Value::Int(read_integer(buf)?),
            Value::Bool(_) => Value::Bool(read_boolean(buf, cfg)?),
            Value::Float(_) => Value::Float(read_float(buf, cfg)?),
            Value::Bytes(_) => Value::Bytes(read_prefixed(buf, cfg)?),
            Value::Str(_) => Value::Str(read_text(buf, cfg)?),
            Value::Tuple(templates) => {
                let mut elements = Vec::with_capacity(templates.len());
                for template in templates {
                    elements.push(template.read_cfg(buf, cfg)?);
                }
                Value::Tuple(elements)
            }
            Value::Bounded(template) => Value::Bounded(template.read_cfg(buf, cfg)?),
            Value::Object(template) => {
                let mut fields = Vec::with_capacity(template.fields.len());
                for (name, value) in &template.fields {
                    fields.push((name.clone(), value.read_cfg(buf, cfg)?));
                }
                Value::Object(Object { fields })
            }
            Value::Set(_) => return Err(Error::Unsupported(SET)),
            Value::Map(_) => return Err(Error::Unsupported(MAPPING)),
        };
        Ok(value)
    }
}

/// Result of [`unpack_values`].
#[derive(Clone, Debug, PartialEq)]
pub enum Unpacked {
    /// The value decoded from a single template.
    One(Value),
    /// One value per template, in template order.
    Many(Vec<Value>),
}

impl Unpacked {
    /// Returns the decoded values as a list, regardless of how many templates there were.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Unpacked::One(value) => vec![value],
            Unpacked::Many(values) => values,
        }
    }
}

/// Packs `values` back to back, in order.
pub fn pack_values(values: &[Value], cfg: &SizeConfig) -> Result<Bytes, Error> {
    let len = values.iter().map(|value| value.encode_size(cfg)).sum();
    let mut buffer = BytesMut::with_capacity(len);
    for value in values {
        value.write(&mut buffer, cfg).inspect_err(|err| {
            debug!(?err, "pack failed");
        })?;
    }
    trace!(len = buffer.len(), count = values.len(), "packed values");
    Ok(buffer.freeze())
}

/// Unpacks one value per template, left to right, discarding any trailing bytes.
///
/// A single template yields [`Unpacked::One`], several yield [`Unpacked::Many`]. Zero templates
/// fail with [`Error::NoTemplates`].
pub fn unpack_values(buf: &[u8], templates: &[Value], cfg: &SizeConfig) -> Result<Unpacked, Error> {
    if templates.is_empty() {
        debug!("unpack called without templates");
        return Err(Error::NoTemplates);
    }
    let mut rest = buf;
    let mut values = Vec::with_capacity(templates.len());
    for template in templates {
        values.push(template.read_cfg(&mut rest, cfg)?);
    }
    trace!(
        consumed = buf.len() - rest.len(),
        count = values.len(),
        "unpacked values"
    );
    if values.len() == 1 {
        return Ok(Unpacked::One(values.remove(0)));
    }
    Ok(Unpacked::Many(values))
}
