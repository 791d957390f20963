//! OpenGL driver.
//!
//! This module implements an OpenGL driver for glcaps. The driver type is [`GL33`]. Despite its name,
//! it copes with older contexts too: entry points and constants missing from the current context are
//! reported as unsupported so that the reporter can take its legacy fallbacks.

mod query;

use glcaps::reporter::{Reporter, ReporterOpt};
use std::marker::PhantomData;
use std::os::raw::c_void;

/// An OpenGL driver.
///
/// Queries are issued against the OpenGL context current on the calling thread, which is why this
/// type is neither [`Send`] nor [`Sync`].
///
/// OpenGL error flags are sticky. A query checks the error flag right after its call, so an error left
/// pending by earlier code is attributed to the next query; drain pending errors with
/// [`Reporter::drain_errors`] before reporting if unsure.
#[derive(Debug)]
pub struct GL33 {
  _a: PhantomData<*const ()>, // !Send and !Sync
}

impl GL33 {
  /// Create a new OpenGL driver.
  ///
  /// The `gl` symbols are expected to be loaded already; if they are not, every query fails with
  /// [`DriverError::ContextAbsent`](glcaps::backend::driver::DriverError::ContextAbsent).
  pub fn new() -> Self {
    GL33 { _a: PhantomData }
  }

  /// Load the `gl` symbols with the given loader and create a new driver.
  ///
  /// The loader typically is the `get_proc_address` function of the windowing library owning the
  /// current context.
  pub fn load_with<F>(loader: F) -> Self
  where
    F: FnMut(&'static str) -> *const c_void,
  {
    gl::load_with(loader);
    Self::new()
  }

  /// Whether the entry points needed to answer basic queries are loaded.
  pub fn is_loaded(&self) -> bool {
    gl::GetString::is_loaded() && gl::GetIntegerv::is_loaded() && gl::GetError::is_loaded()
  }

  /// Create a [`Reporter`] for this driver.
  ///
  /// The reporter is marked initialized only if the basic entry points are loaded.
  pub fn reporter(&self, opt: ReporterOpt) -> Reporter<'_, Self> {
    Reporter::with_opt(self, opt.set_initialized(opt.initialized() && self.is_loaded()))
  }
}

impl Default for GL33 {
  fn default() -> Self {
    Self::new()
  }
}
