//! Driver backend interface.
//!
//! This interface provides the small set of introspection primitives a graphics driver must answer so
//! that a capability report can be built: integer queries, string queries and indexed string queries,
//! plus access to the pending error flags.
//!
//! Driver answers are not always well-shaped. An integer query might yield a single scalar or a small
//! array, and a string query might yield text, raw bytes or nothing at all. Those shapes are modelled
//! explicitly with [`IntegerValue`] and [`StringValue`] so that callers coerce them with a `match`.

use std::error;
use std::fmt;
use std::string::FromUtf8Error;

/// Integer driver constants that can be queried.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IntegerQuery {
  /// Major version of the context.
  MajorVersion,
  /// Minor version of the context.
  MinorVersion,
  /// Number of extensions reachable via [`IndexedStringQuery::Extensions`].
  NumExtensions,
  /// Number of shading language versions reachable via
  /// [`IndexedStringQuery::ShadingLanguageVersions`].
  NumShadingLanguageVersions,
}

/// String driver constants that can be queried.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StringQuery {
  /// Company responsible for the implementation.
  Vendor,
  /// Name of the renderer, typically the graphics card.
  Renderer,
  /// Version string, usually starting with `major.minor` followed by vendor details.
  Version,
  /// Highest supported shading language version.
  ShadingLanguageVersion,
  /// Space-separated list of every supported extension.
  ///
  /// This is the legacy way of getting extensions; newer drivers might reject it.
  Extensions,
}

/// Count-bounded string lists that can be queried one item at a time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexedStringQuery {
  /// Name of the Nth extension.
  Extensions,
  /// Nth supported shading language version.
  ShadingLanguageVersions,
}

/// Value returned by an integer query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IntegerValue {
  /// A single integer.
  Scalar(i64),
  /// Several integers; only the first one is meaningful to a scalar query.
  Array(Vec<i64>),
}

impl IntegerValue {
  /// Coerce the value to a non-negative integer.
  ///
  /// An array yields its first element. An empty array, a negative value or a value that doesn’t fit
  /// in a `u32` yields `0`.
  pub fn as_count(&self) -> u32 {
    let value = match *self {
      IntegerValue::Scalar(v) => v,
      IntegerValue::Array(ref values) => match values.first() {
        Some(&v) => v,
        None => return 0,
      },
    };

    u32::try_from(value).unwrap_or(0)
  }
}

impl From<i64> for IntegerValue {
  fn from(v: i64) -> Self {
    IntegerValue::Scalar(v)
  }
}

impl From<Vec<i64>> for IntegerValue {
  fn from(values: Vec<i64>) -> Self {
    IntegerValue::Array(values)
  }
}

/// Value returned by a string query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StringValue {
  /// Already-decoded text.
  Text(String),
  /// Raw bytes, expected to be UTF-8.
  Bytes(Vec<u8>),
}

impl StringValue {
  /// Decode the value to text.
  pub fn decode(self) -> Result<String, DriverError> {
    match self {
      StringValue::Text(s) => Ok(s),
      StringValue::Bytes(bytes) => String::from_utf8(bytes).map_err(DriverError::from),
    }
  }
}

impl From<String> for StringValue {
  fn from(s: String) -> Self {
    StringValue::Text(s)
  }
}

impl<'a> From<&'a str> for StringValue {
  fn from(s: &'a str) -> Self {
    StringValue::Text(s.to_owned())
  }
}

impl From<Vec<u8>> for StringValue {
  fn from(bytes: Vec<u8>) -> Self {
    StringValue::Bytes(bytes)
  }
}

/// Error flags a driver can raise.
///
/// The codes are the ones shared by OpenGL and OpenGL ES.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorFlag {
  /// An unacceptable value was given for an enumerated argument.
  InvalidEnum,
  /// A numeric argument is out of range.
  InvalidValue,
  /// The operation is not allowed in the current state.
  InvalidOperation,
  /// Stack overflow.
  StackOverflow,
  /// Stack underflow.
  StackUnderflow,
  /// Not enough memory left to execute the command.
  OutOfMemory,
  /// The framebuffer object is not complete.
  InvalidFramebufferOperation,
  /// The context has been lost, due to a graphics card reset for instance.
  ContextLost,
  /// Any other code.
  Unknown(u32),
}

impl ErrorFlag {
  /// Map a raw error code to an [`ErrorFlag`].
  pub fn from_code(code: u32) -> Self {
    match code {
      0x0500 => ErrorFlag::InvalidEnum,
      0x0501 => ErrorFlag::InvalidValue,
      0x0502 => ErrorFlag::InvalidOperation,
      0x0503 => ErrorFlag::StackOverflow,
      0x0504 => ErrorFlag::StackUnderflow,
      0x0505 => ErrorFlag::OutOfMemory,
      0x0506 => ErrorFlag::InvalidFramebufferOperation,
      0x0507 => ErrorFlag::ContextLost,
      _ => ErrorFlag::Unknown(code),
    }
  }
}

impl fmt::Display for ErrorFlag {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ErrorFlag::InvalidEnum => f.write_str("GL_INVALID_ENUM"),
      ErrorFlag::InvalidValue => f.write_str("GL_INVALID_VALUE"),
      ErrorFlag::InvalidOperation => f.write_str("GL_INVALID_OPERATION"),
      ErrorFlag::StackOverflow => f.write_str("GL_STACK_OVERFLOW"),
      ErrorFlag::StackUnderflow => f.write_str("GL_STACK_UNDERFLOW"),
      ErrorFlag::OutOfMemory => f.write_str("GL_OUT_OF_MEMORY"),
      ErrorFlag::InvalidFramebufferOperation => f.write_str("GL_INVALID_FRAMEBUFFER_OPERATION"),
      ErrorFlag::ContextLost => f.write_str("GL_CONTEXT_LOST"),
      ErrorFlag::Unknown(code) => write!(f, "unknown error flag 0x{:04x}", code),
    }
  }
}

/// Driver query error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DriverError {
  /// No graphics context is available to answer the query.
  ContextAbsent,
  /// The driver doesn’t provide the entry point or the constant used by the query.
  Unsupported,
  /// The driver returned a string that is not valid UTF-8.
  MalformedString(FromUtf8Error),
  /// The driver raised an error flag while answering the query.
  Failed(ErrorFlag),
}

impl fmt::Display for DriverError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      DriverError::ContextAbsent => f.write_str("no graphics context available"),
      DriverError::Unsupported => f.write_str("query unsupported by the driver"),
      DriverError::MalformedString(ref e) => write!(f, "malformed driver string: {}", e),
      DriverError::Failed(ref flag) => write!(f, "driver query failed: {}", flag),
    }
  }
}

impl error::Error for DriverError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      DriverError::MalformedString(e) => Some(e),
      _ => None,
    }
  }
}

impl From<FromUtf8Error> for DriverError {
  fn from(e: FromUtf8Error) -> Self {
    DriverError::MalformedString(e)
  }
}

impl From<ErrorFlag> for DriverError {
  fn from(flag: ErrorFlag) -> Self {
    DriverError::Failed(flag)
  }
}

/// Drivers that can be introspected.
///
/// Implementors must only read driver state through the query methods. The one exception is the
/// error flag: a query may consume the error flag its own call raised in order to report the
/// failure, and [`Driver::pop_error`] pops pending flags. Queries are expected to be issued on the
/// thread owning the graphics context.
pub unsafe trait Driver {
  /// Query an integer constant.
  fn get_integer(&self, query: IntegerQuery) -> Result<IntegerValue, DriverError>;

  /// Query a string constant.
  ///
  /// `Ok(None)` means the driver answered without error but had nothing to return.
  fn get_string(&self, query: StringQuery) -> Result<Option<StringValue>, DriverError>;

  /// Query the `index`-th item of a count-bounded string list.
  fn get_string_indexed(
    &self,
    query: IndexedStringQuery,
    index: u32,
  ) -> Result<Option<StringValue>, DriverError>;

  /// Pop the oldest pending error flag, if any.
  ///
  /// # Defaults
  ///
  /// Defaults to `None`, for drivers without error flags.
  fn pop_error(&self) -> Option<ErrorFlag> {
    None
  }
}

unsafe impl<'a, D> Driver for &'a D
where
  D: ?Sized + Driver,
{
  fn get_integer(&self, query: IntegerQuery) -> Result<IntegerValue, DriverError> {
    (**self).get_integer(query)
  }

  fn get_string(&self, query: StringQuery) -> Result<Option<StringValue>, DriverError> {
    (**self).get_string(query)
  }

  fn get_string_indexed(
    &self,
    query: IndexedStringQuery,
    index: u32,
  ) -> Result<Option<StringValue>, DriverError> {
    (**self).get_string_indexed(query, index)
  }

  fn pop_error(&self) -> Option<ErrorFlag> {
    (**self).pop_error()
  }
}
