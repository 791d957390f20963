//! Driver implementation for OpenGL.

use gl::types::*;
use glcaps::backend::driver::{
  Driver, DriverError, ErrorFlag, IndexedStringQuery, IntegerQuery, IntegerValue, StringQuery,
  StringValue,
};
use log::trace;
use std::ffi::CStr;

use super::GL33;

unsafe impl Driver for GL33 {
  fn get_integer(&self, query: IntegerQuery) -> Result<IntegerValue, DriverError> {
    if !gl::GetIntegerv::is_loaded() || !gl::GetError::is_loaded() {
      return Err(DriverError::ContextAbsent);
    }

    let mut data: GLint = 0;

    unsafe {
      gl::GetIntegerv(integer_query_to_glenum(query), &mut data);
      check_error()?;
    }

    Ok(IntegerValue::Scalar(data.into()))
  }

  fn get_string(&self, query: StringQuery) -> Result<Option<StringValue>, DriverError> {
    if !gl::GetString::is_loaded() || !gl::GetError::is_loaded() {
      return Err(DriverError::ContextAbsent);
    }

    unsafe {
      let ptr = gl::GetString(string_query_to_glenum(query));
      check_error()?;
      Ok(string_from_ptr(ptr))
    }
  }

  fn get_string_indexed(
    &self,
    query: IndexedStringQuery,
    index: u32,
  ) -> Result<Option<StringValue>, DriverError> {
    if !gl::GetError::is_loaded() {
      return Err(DriverError::ContextAbsent);
    }

    // glGetStringi only exists since OpenGL 3.0
    if !gl::GetStringi::is_loaded() {
      trace!("glGetStringi is not loaded");
      return Err(DriverError::Unsupported);
    }

    unsafe {
      let ptr = gl::GetStringi(indexed_string_query_to_glenum(query), index as GLuint);
      check_error()?;
      Ok(string_from_ptr(ptr))
    }
  }

  fn pop_error(&self) -> Option<ErrorFlag> {
    if !gl::GetError::is_loaded() {
      return None;
    }

    match unsafe { gl::GetError() } {
      gl::NO_ERROR => None,
      code => Some(ErrorFlag::from_code(code)),
    }
  }
}

fn integer_query_to_glenum(query: IntegerQuery) -> GLenum {
  match query {
    IntegerQuery::MajorVersion => gl::MAJOR_VERSION,
    IntegerQuery::MinorVersion => gl::MINOR_VERSION,
    IntegerQuery::NumExtensions => gl::NUM_EXTENSIONS,
    IntegerQuery::NumShadingLanguageVersions => gl::NUM_SHADING_LANGUAGE_VERSIONS,
  }
}

fn string_query_to_glenum(query: StringQuery) -> GLenum {
  match query {
    StringQuery::Vendor => gl::VENDOR,
    StringQuery::Renderer => gl::RENDERER,
    StringQuery::Version => gl::VERSION,
    StringQuery::ShadingLanguageVersion => gl::SHADING_LANGUAGE_VERSION,
    StringQuery::Extensions => gl::EXTENSIONS,
  }
}

fn indexed_string_query_to_glenum(query: IndexedStringQuery) -> GLenum {
  match query {
    IndexedStringQuery::Extensions => gl::EXTENSIONS,
    IndexedStringQuery::ShadingLanguageVersions => gl::SHADING_LANGUAGE_VERSION,
  }
}

// GL_INVALID_ENUM means the constant is unknown to the context, which happens with constants newer
// than the context version.
fn error_code_to_driver_error(code: GLenum) -> DriverError {
  match ErrorFlag::from_code(code) {
    ErrorFlag::InvalidEnum => DriverError::Unsupported,
    flag => DriverError::Failed(flag),
  }
}

unsafe fn check_error() -> Result<(), DriverError> {
  match gl::GetError() {
    gl::NO_ERROR => Ok(()),
    code => {
      trace!("OpenGL error flag raised: 0x{:04x}", code);
      Err(error_code_to_driver_error(code))
    }
  }
}

unsafe fn string_from_ptr(ptr: *const GLubyte) -> Option<StringValue> {
  if ptr.is_null() {
    None
  } else {
    let bytes = CStr::from_ptr(ptr.cast()).to_bytes().to_vec();
    Some(StringValue::Bytes(bytes))
  }
}
