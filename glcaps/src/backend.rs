//! Backend interfaces.
//!
//! A backend is whatever graphics binding is able to answer the primitive driver queries the
//! [`Reporter`](crate::reporter::Reporter) relies on. The core crate never talks to a graphics API
//! directly: it goes through the [`Driver`](driver::Driver) trait, which is implemented by backend
//! crates (for instance `glcaps-gl` for OpenGL) or by fake drivers in tests.

pub mod driver;
