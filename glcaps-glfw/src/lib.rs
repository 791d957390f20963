//! [GLFW](https://crates.io/crates/glfw) context bootstrap for [glcaps](https://crates.io/crates/glcaps).
//!
//! Reporting driver capabilities requires a current OpenGL context. This crate creates one in a hidden
//! GLFW window, loads the `gl` symbols for it and hands out an OpenGL driver bound to it.

#![deny(missing_docs)]

use glcaps::reporter::{Reporter, ReporterOpt};
use glcaps::Version;
use glcaps_gl::GL33;
use glfw::{Context as _, Glfw, InitError, Window, WindowEvent};
use std::{error, fmt, os::raw::c_void, sync::mpsc::Receiver};

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum GlfwSurfaceError {
  /// Initialization of the surface went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// The window and its context couldn’t be created.
  ///
  /// This typically happens when the requested context version is not supported.
  NoWindow,

  /// The OpenGL symbols couldn’t be loaded for the context.
  NotLoaded,
}

impl fmt::Display for GlfwSurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlfwSurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      GlfwSurfaceError::NoWindow => f.write_str("cannot create the window and its context"),
      GlfwSurfaceError::NotLoaded => f.write_str("cannot load the OpenGL symbols"),
    }
  }
}

impl From<InitError> for GlfwSurfaceError {
  fn from(e: InitError) -> Self {
    GlfwSurfaceError::InitError(e)
  }
}

impl error::Error for GlfwSurfaceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      GlfwSurfaceError::InitError(e) => Some(e),
      _ => None,
    }
  }
}

/// OpenGL context options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to start
/// with `default()` though.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContextOpt {
  version: Option<Version>,
  core_profile: bool,
}

impl Default for ContextOpt {
  /// Defaults:
  ///
  /// - `version` set to `Some(3.3)`.
  /// - `core_profile` set to `true`.
  fn default() -> Self {
    ContextOpt {
      version: Some(Version::new(3, 3)),
      core_profile: true,
    }
  }
}

impl ContextOpt {
  /// Options letting the platform pick whatever context it creates by default.
  ///
  /// That usually is a compatibility context, which might be older than 3.0 and thus lack the
  /// indexed queries.
  pub fn any() -> Self {
    ContextOpt {
      version: None,
      core_profile: false,
    }
  }

  /// Set the context version to request. Default to `Some(3.3)`.
  ///
  /// Pass `None` to not request any version.
  #[inline]
  pub fn set_version<V>(self, version: V) -> Self
  where
    V: Into<Option<Version>>,
  {
    ContextOpt {
      version: version.into(),
      ..self
    }
  }

  /// Get the context version to request, if any.
  #[inline]
  pub fn version(&self) -> Option<Version> {
    self.version
  }

  /// Request a core profile, forward-compatible context. Default to `true`.
  ///
  /// This is ignored if no version is requested.
  #[inline]
  pub fn set_core_profile(self, core_profile: bool) -> Self {
    ContextOpt {
      core_profile,
      ..self
    }
  }

  /// Whether a core profile context is requested.
  #[inline]
  pub fn core_profile(&self) -> bool {
    self.core_profile
  }
}

/// GLFW surface.
///
/// This type holds a hidden GLFW window, whose OpenGL context is current on the thread that created
/// it, and the [`GL33`] driver bound to that context.
#[derive(Debug)]
pub struct GlfwSurface {
  /// Wrapped GLFW window.
  pub window: Window,

  // kept so that GLFW can deliver events to the window
  _events_rx: Receiver<(f64, WindowEvent)>,

  driver: GL33,
}

impl GlfwSurface {
  /// Initialize GLFW and create a hidden window with a current OpenGL context.
  pub fn new_offscreen(opt: ContextOpt) -> Result<Self, GlfwSurfaceError> {
    #[cfg(feature = "log-errors")]
    let error_cbk = glfw::LOG_ERRORS;
    #[cfg(not(feature = "log-errors"))]
    let error_cbk = glfw::FAIL_ON_ERRORS;

    let mut glfw = glfw::init(error_cbk)?;
    apply_hints(&mut glfw, &opt);

    let (mut window, events_rx) = glfw
      .create_window(1, 1, "glcaps", glfw::WindowMode::Windowed)
      .ok_or(GlfwSurfaceError::NoWindow)?;

    window.make_current();

    // init OpenGL
    let driver = GL33::load_with(|s| window.get_proc_address(s) as *const c_void);

    if !driver.is_loaded() {
      return Err(GlfwSurfaceError::NotLoaded);
    }

    log::debug!("OpenGL context created with {:?}", opt);

    Ok(GlfwSurface {
      window,
      _events_rx: events_rx,
      driver,
    })
  }

  /// The OpenGL driver bound to the context of the surface.
  pub fn driver(&self) -> &GL33 {
    &self.driver
  }

  /// Create a [`Reporter`] querying the context of the surface.
  pub fn reporter(&self, opt: ReporterOpt) -> Reporter<'_, GL33> {
    self.driver.reporter(opt)
  }
}

fn apply_hints(glfw: &mut Glfw, opt: &ContextOpt) {
  glfw.window_hint(glfw::WindowHint::Visible(false));

  if let Some(version) = opt.version {
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(version.major));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(version.minor));

    // OpenGL hints
    if opt.core_profile {
      glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
      ));
      glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    }
  }
}
