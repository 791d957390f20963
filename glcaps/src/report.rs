//! Capability reports.
//!
//! A [`CapabilityReport`] is a snapshot of what a driver answered at the time the report was built.
//! It is never updated afterwards; ask the [`Reporter`](crate::reporter::Reporter) for a new one to
//! observe the live driver state.

use std::fmt;

use crate::version::Version;

/// Flat record of the capabilities of a driver.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapabilityReport {
  pub(crate) min_version: Version,
  pub(crate) version: Version,
  pub(crate) card: String,
  pub(crate) renderer: String,
  pub(crate) shading_languages: Vec<String>,
  pub(crate) extensions: Vec<String>,
}

impl CapabilityReport {
  /// Minimum version demanded by the application.
  pub fn min_version(&self) -> Version {
    self.min_version
  }

  /// Highest version the driver provides.
  pub fn version(&self) -> Version {
    self.version
  }

  /// Whether the driver version satisfies the minimum version.
  pub fn meets_min_version(&self) -> bool {
    self.version >= self.min_version
  }

  /// Driver version string.
  pub fn card(&self) -> &str {
    &self.card
  }

  /// Renderer name.
  pub fn renderer(&self) -> &str {
    &self.renderer
  }

  /// Supported shading language versions, in driver order.
  pub fn shading_languages(&self) -> &[String] {
    &self.shading_languages
  }

  /// Supported extensions, in driver order.
  pub fn extensions(&self) -> &[String] {
    &self.extensions
  }

  /// Check whether an extension is supported. Names must match exactly.
  pub fn supports_extension(&self, name: &str) -> bool {
    self.extensions.iter().any(|ext| ext == name)
  }

  /// Human-readable rendering of the report.
  ///
  /// The output uses a tiny markup dialect: `<br>` breaks lines and `<p>` starts a paragraph. It is
  /// meant to be embedded as-is in a rich-text widget.
  pub fn markup(&self) -> Markup<'_> {
    Markup { report: self }
  }
}

/// Markup rendering of a [`CapabilityReport`].
///
/// Use its [`Display`](fmt::Display) implementation to get the text.
#[derive(Clone, Copy, Debug)]
pub struct Markup<'a> {
  report: &'a CapabilityReport,
}

impl<'a> fmt::Display for Markup<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let report = self.report;

    // versions read as `(major, minor)` pairs in the markup
    let (min, ver) = (report.min_version, report.version);
    write!(f, "Minimum version demanded: ({}, {})", min.major, min.minor)?;
    write!(f, "<br>Highest version available: ({}, {})", ver.major, ver.minor)?;
    write!(f, "<br>Card Driver: {}", report.card)?;
    write!(f, "<br>Renderer: {}", report.renderer)?;

    f.write_str("<p>Shading languages:")?;
    for lang in &report.shading_languages {
      write!(f, "<br>{}", lang)?;
    }

    f.write_str("<p>Extensions:")?;
    for ext in &report.extensions {
      write!(f, "<br>{}", ext)?;
    }

    Ok(())
  }
}
