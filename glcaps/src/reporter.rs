//! Capability reporter.
//!
//! The [`Reporter`] answers capability queries against a [`Driver`]. Every method queries the driver
//! afresh and none of them fails: whenever the driver can’t answer, the reporter tries the fallback
//! path older drivers understand and, if that fails too, degrades to a default value (`0.0`, an empty
//! list, `"unknown"` or `"not initialized"`). Fallbacks are logged at the `debug` level.

use log::{debug, warn};

use crate::backend::driver::{
  Driver, DriverError, ErrorFlag, IndexedStringQuery, IntegerQuery, StringQuery,
};
use crate::report::CapabilityReport;
use crate::version::{Version, DEFAULT_MIN_VERSION};

/// String reported when a query succeeded but returned nothing.
pub const UNKNOWN: &str = "unknown";

/// String reported when a query failed.
pub const NOT_INITIALIZED: &str = "not initialized";

// Upper bound on the number of error flags popped by a single drain. A lost context keeps
// reporting errors forever on some drivers.
const MAX_DRAINED_ERRORS: usize = 64;

/// Reporter options.
///
/// You may want to start with `default()` and tweak from there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReporterOpt {
  initialized: bool,
  min_version: Version,
}

impl Default for ReporterOpt {
  /// Defaults:
  ///
  /// - `initialized` set to `true`.
  /// - `min_version` set to [`DEFAULT_MIN_VERSION`].
  fn default() -> Self {
    ReporterOpt {
      initialized: true,
      min_version: DEFAULT_MIN_VERSION,
    }
  }
}

impl ReporterOpt {
  /// Tell whether a graphics context exists. Default to `true`.
  ///
  /// An uninitialized reporter reports a `0.0` version and empty extension and shading language
  /// lists without querying its driver. The renderer, card and vendor strings are still queried.
  #[inline]
  pub fn set_initialized(self, initialized: bool) -> Self {
    ReporterOpt {
      initialized,
      ..self
    }
  }

  /// Whether a graphics context exists.
  #[inline]
  pub fn initialized(&self) -> bool {
    self.initialized
  }

  /// Set the minimum version demanded by the application. Default to [`DEFAULT_MIN_VERSION`].
  #[inline]
  pub fn set_min_version(self, min_version: Version) -> Self {
    ReporterOpt {
      min_version,
      ..self
    }
  }

  /// Minimum version demanded by the application.
  #[inline]
  pub fn min_version(&self) -> Version {
    self.min_version
  }
}

/// Capability reporter.
#[derive(Debug)]
pub struct Reporter<'a, D>
where
  D: ?Sized,
{
  driver: &'a D,
  opt: ReporterOpt,
}

impl<'a, D> Reporter<'a, D>
where
  D: ?Sized + Driver,
{
  /// Create a new [`Reporter`] for an initialized driver, with default options.
  pub fn new(driver: &'a D) -> Self {
    Self::with_opt(driver, ReporterOpt::default())
  }

  /// Create a new [`Reporter`] with the given options.
  pub fn with_opt(driver: &'a D, opt: ReporterOpt) -> Self {
    Reporter { driver, opt }
  }

  /// Options the reporter was created with.
  pub fn opt(&self) -> &ReporterOpt {
    &self.opt
  }

  /// Minimum version demanded by the application.
  pub fn min_version(&self) -> Version {
    self.opt.min_version
  }

  /// Highest version the driver provides.
  ///
  /// The integer version constants are preferred. If they can’t be queried or if they are both `0`,
  /// the version is parsed from the driver version string.
  pub fn version(&self) -> Version {
    if !self.opt.initialized {
      return Version::ZERO;
    }

    match self.query_version() {
      Ok(version) if version != Version::ZERO => version,

      Ok(_) => {
        debug!("integer version constants are 0.0; parsing the version string");
        self.parse_version_string()
      }

      Err(e) => {
        debug!("cannot query integer version constants ({}); parsing the version string", e);
        self.parse_version_string()
      }
    }
  }

  /// Check whether the driver version is at least the minimum version.
  pub fn check_version(&self) -> bool {
    self.version() >= self.opt.min_version
  }

  /// Supported extensions, in driver order.
  ///
  /// The indexed query is preferred; drivers without it are asked for the space-separated extension
  /// string instead.
  pub fn extensions(&self) -> Vec<String> {
    if !self.opt.initialized {
      return Vec::new();
    }

    self
      .query_indexed(IntegerQuery::NumExtensions, IndexedStringQuery::Extensions)
      .or_else(|e| {
        debug!("cannot query indexed extensions ({}); using the extension string", e);
        self.query_string(StringQuery::Extensions).map(|all| {
          all
            .map(|all| all.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
        })
      })
      .unwrap_or_else(|e| {
        debug!("cannot query extensions: {}", e);
        Vec::new()
      })
  }

  /// Supported shading language versions, in driver order.
  ///
  /// The indexed query is preferred; drivers without it only report their highest shading language
  /// version.
  pub fn shading_languages(&self) -> Vec<String> {
    if !self.opt.initialized {
      return Vec::new();
    }

    self
      .query_indexed(
        IntegerQuery::NumShadingLanguageVersions,
        IndexedStringQuery::ShadingLanguageVersions,
      )
      .or_else(|e| {
        debug!(
          "cannot query indexed shading languages ({}); using the shading language string",
          e
        );
        self
          .query_string(StringQuery::ShadingLanguageVersion)
          .map(|lang| lang.into_iter().collect())
      })
      .unwrap_or_else(|e| {
        debug!("cannot query shading languages: {}", e);
        Vec::new()
      })
  }

  /// Renderer name.
  ///
  /// The driver is queried even if the reporter is uninitialized; a driver without a context fails
  /// the query and `"not initialized"` is reported.
  pub fn renderer(&self) -> String {
    self.describe(StringQuery::Renderer)
  }

  /// Driver version string.
  pub fn card(&self) -> String {
    self.describe(StringQuery::Version)
  }

  /// Company responsible for the driver.
  pub fn vendor(&self) -> String {
    self.describe(StringQuery::Vendor)
  }

  /// Build a full [`CapabilityReport`] from the live driver state.
  pub fn info(&self) -> CapabilityReport {
    CapabilityReport {
      min_version: self.opt.min_version,
      version: self.version(),
      card: self.card(),
      renderer: self.renderer(),
      shading_languages: self.shading_languages(),
      extensions: self.extensions(),
    }
  }

  /// Build a full report and render it as markup text.
  ///
  /// See [`CapabilityReport::markup`].
  pub fn text_info(&self) -> String {
    self.info().markup().to_string()
  }

  /// Pop every pending driver error flag.
  ///
  /// Each flag is logged as a warning. The drain stops after a bounded number of flags.
  pub fn drain_errors(&self) -> Vec<ErrorFlag> {
    if !self.opt.initialized {
      return Vec::new();
    }

    let flags: Vec<_> = std::iter::from_fn(|| self.driver.pop_error())
      .take(MAX_DRAINED_ERRORS)
      .collect();

    for flag in &flags {
      warn!("pending driver error: {}", flag);
    }

    flags
  }

  fn query_version(&self) -> Result<Version, DriverError> {
    let major = self.driver.get_integer(IntegerQuery::MajorVersion)?.as_count();
    let minor = self.driver.get_integer(IntegerQuery::MinorVersion)?.as_count();
    Ok(Version::new(major, minor))
  }

  fn parse_version_string(&self) -> Version {
    match self.query_string(StringQuery::Version) {
      Ok(Some(version)) => Version::parse_lenient(&version),

      Ok(None) => Version::ZERO,

      Err(e) => {
        debug!("cannot query the version string: {}", e);
        Version::ZERO
      }
    }
  }

  // Query a string constant; empty strings are reported as `None`.
  fn query_string(&self, query: StringQuery) -> Result<Option<String>, DriverError> {
    let s = match self.driver.get_string(query)? {
      Some(value) => value.decode()?,
      None => return Ok(None),
    };

    Ok(if s.is_empty() { None } else { Some(s) })
  }

  // Collect a count-bounded string list, skipping empty items.
  fn query_indexed(
    &self,
    count: IntegerQuery,
    query: IndexedStringQuery,
  ) -> Result<Vec<String>, DriverError> {
    let n = self.driver.get_integer(count)?.as_count();
    let mut items = Vec::new();

    for i in 0..n {
      if let Some(value) = self.driver.get_string_indexed(query, i)? {
        let item = value.decode()?;

        if !item.is_empty() {
          items.push(item);
        }
      }
    }

    Ok(items)
  }

  fn describe(&self, query: StringQuery) -> String {
    match self.query_string(query) {
      Ok(Some(s)) => s,
      Ok(None) => UNKNOWN.to_owned(),
      Err(e) => {
        debug!("cannot query {:?}: {}", query, e);
        NOT_INITIALIZED.to_owned()
      }
    }
  }
}
