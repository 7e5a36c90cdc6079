//! Byte widths for the primitive categories.
//!
//! A [`SizeConfig`] is passed by reference to every pack and unpack call. Both sides of a
//! round trip must use the same configuration: the wire format carries no widths of its own.
//!
//! # Examples
//!
//! ```
//! use parcel_codec::{Kind, SizeConfig};
//!
//! let cfg = SizeConfig::default();
//! assert_eq!(cfg.size_of(Kind::Integer), 4);
//! assert_eq!(cfg.lookup("str_length").unwrap(), 4);
//!
//! // Reconfiguring produces a new value; `cfg` is untouched.
//! let wide = cfg.with_integer(8).unwrap();
//! assert_eq!(wide.integer(), 8);
//! assert!(cfg.with_float(2).is_err());
//! ```

use crate::Error;
use core::{fmt, str::FromStr};

/// Default width of a native integer.
pub const DEFAULT_INTEGER_WIDTH: usize = 4;

/// Default width of a boolean.
pub const DEFAULT_BOOLEAN_WIDTH: usize = 1;

/// Default width of a native float.
pub const DEFAULT_FLOAT_WIDTH: usize = 4;

/// Default width of the length prefix of byte and text strings.
pub const DEFAULT_STRING_LENGTH_WIDTH: usize = 4;

/// The default layout: 4-byte integers, 1-byte booleans, single-precision floats and 4-byte
/// length prefixes.
pub const X86: SizeConfig = SizeConfig {
    integer: DEFAULT_INTEGER_WIDTH,
    boolean: DEFAULT_BOOLEAN_WIDTH,
    float: DEFAULT_FLOAT_WIDTH,
    string_length: DEFAULT_STRING_LENGTH_WIDTH,
};

/// A primitive category whose width is configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Boolean,
    Float,
    StringLength,
}

impl Kind {
    /// All kinds, in table order.
    pub const ALL: [Kind; 4] = [
        Kind::Integer,
        Kind::Boolean,
        Kind::Float,
        Kind::StringLength,
    ];

    /// Canonical name, as accepted by [`SizeConfig::lookup`].
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Integer => "int",
            Kind::Boolean => "bool",
            Kind::Float => "float",
            Kind::StringLength => "str_length",
        }
    }

    /// Returns true if the codec can encode this kind using `width` bytes.
    pub const fn accepts(&self, width: usize) -> bool {
        match self {
            Kind::Integer | Kind::StringLength => matches!(width, 1 | 2 | 4 | 8),
            Kind::Boolean => width >= 1 && width <= 8,
            Kind::Float => matches!(width, 4 | 8),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "integer" => Ok(Kind::Integer),
            "bool" | "boolean" => Ok(Kind::Boolean),
            "float" => Ok(Kind::Float),
            "str_length" | "string_length" => Ok(Kind::StringLength),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// Widths (in bytes) used to encode each [`Kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SizeConfig {
    integer: usize,
    boolean: usize,
    float: usize,
    string_length: usize,
}

impl Default for SizeConfig {
    fn default() -> Self {
        X86
    }
}

impl SizeConfig {
    /// Creates a configuration, rejecting any width the codec cannot encode.
    pub fn new(
        integer: usize,
        boolean: usize,
        float: usize,
        string_length: usize,
    ) -> Result<Self, Error> {
        Self {
            integer,
            boolean,
            float,
            string_length,
        }
        .validated()
    }

    /// Returns a copy with a different integer width.
    pub fn with_integer(self, width: usize) -> Result<Self, Error> {
        Self {
            integer: width,
            ..self
        }
        .validated()
    }

    /// Returns a copy with a different boolean width.
    pub fn with_boolean(self, width: usize) -> Result<Self, Error> {
        Self {
            boolean: width,
            ..self
        }
        .validated()
    }

    /// Returns a copy with a different float width.
    pub fn with_float(self, width: usize) -> Result<Self, Error> {
        Self {
            float: width,
            ..self
        }
        .validated()
    }

    /// Returns a copy with a different string length prefix width.
    pub fn with_string_length(self, width: usize) -> Result<Self, Error> {
        Self {
            string_length: width,
            ..self
        }
        .validated()
    }

    fn validated(self) -> Result<Self, Error> {
        for kind in Kind::ALL {
            let width = self.size_of(kind);
            if !kind.accepts(width) {
                return Err(Error::InvalidWidth { kind, width });
            }
        }
        Ok(self)
    }

    /// Returns the width of `kind`.
    pub const fn size_of(&self, kind: Kind) -> usize {
        match kind {
            Kind::Integer => self.integer,
            Kind::Boolean => self.boolean,
            Kind::Float => self.float,
            Kind::StringLength => self.string_length,
        }
    }

    /// Returns the width of the kind called `name`.
    ///
    /// Fails with [`Error::UnknownKind`] if `name` is not a recognized kind.
    pub fn lookup(&self, name: &str) -> Result<usize, Error> {
        Ok(self.size_of(name.parse()?))
    }

    /// The integer width entry. Reported by [`Self::lookup`]; native integers always pack in
    /// the 4-byte `Int` layout regardless.
    pub const fn integer(&self) -> usize {
        self.integer
    }

    pub const fn boolean(&self) -> usize {
        self.boolean
    }

    pub const fn float(&self) -> usize {
        self.float
    }

    pub const fn string_length(&self) -> usize {
        self.string_length
    }

    /// The largest length the string length prefix can hold.
    pub const fn max_length(&self) -> u64 {
        match self.string_length {
            8 => u64::MAX,
            width => (1u64 << (width * 8)) - 1,
        }
    }
}
