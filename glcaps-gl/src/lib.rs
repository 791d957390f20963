//! OpenGL drivers.
//!
//! This crate exports an [OpenGL](https://www.khronos.org/opengl/) driver for
//! [glcaps](https://crates.io/crates/glcaps). The driver issues its queries through the
//! [gl](https://crates.io/crates/gl) binding, which must have been loaded with the symbols of a
//! current OpenGL context beforehand, either via [`GL33::load_with`] or by calling `gl::load_with`
//! yourself.

#[cfg(feature = "gl33")]
pub mod gl33;

#[cfg(feature = "gl33")]
pub use gl33::GL33;
