//! Driver versions.

use std::fmt;

/// Minimum version demanded by default.
pub const DEFAULT_MIN_VERSION: Version = Version::new(2, 1);

/// A `major.minor` version.
///
/// Versions are compared lexicographically: major first, then minor.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version {
  /// Major version.
  pub major: u32,
  /// Minor version.
  pub minor: u32,
}

impl Version {
  /// The `0.0` version, reported when nothing better is known.
  pub const ZERO: Version = Version::new(0, 0);

  /// Create a new version.
  pub const fn new(major: u32, minor: u32) -> Self {
    Version { major, minor }
  }

  /// Parse a version out of a driver version string.
  ///
  /// Only the first whitespace-delimited token is looked at, so that vendor details such as in
  /// `"2.1 Metal - 90.5"` are ignored. That token is split on `'.'`; the first segment is the major
  /// version and the second one the minor version, missing segments being `0`. An empty string or a
  /// segment that is not an unsigned integer yields [`Version::ZERO`].
  pub fn parse_lenient(s: &str) -> Self {
    let token = match s.split_whitespace().next() {
      Some(token) => token,
      None => return Version::ZERO,
    };

    let mut segments = token.split('.');
    let major = segments.next().map(str::parse::<u32>).transpose();
    let minor = segments.next().map(str::parse::<u32>).transpose();

    match (major, minor) {
      (Ok(major), Ok(minor)) => Version::new(major.unwrap_or(0), minor.unwrap_or(0)),
      _ => Version::ZERO,
    }
  }
}

impl From<(u32, u32)> for Version {
  fn from((major, minor): (u32, u32)) -> Self {
    Version::new(major, minor)
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}.{}", self.major, self.minor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_plain() {
    assert_eq!(Version::parse_lenient("4.1"), Version::new(4, 1));
  }

  #[test]
  fn parse_with_vendor_details() {
    assert_eq!(Version::parse_lenient("2.1 Metal - 90.5"), Version::new(2, 1));
    assert_eq!(
      Version::parse_lenient("4.6.0 NVIDIA 535.54.03"),
      Version::new(4, 6)
    );
  }

  #[test]
  fn parse_missing_segments() {
    assert_eq!(Version::parse_lenient("3"), Version::new(3, 0));
    assert_eq!(Version::parse_lenient("  3.3  "), Version::new(3, 3));
  }

  #[test]
  fn parse_malformed() {
    assert_eq!(Version::parse_lenient(""), Version::ZERO);
    assert_eq!(Version::parse_lenient("   "), Version::ZERO);
    assert_eq!(Version::parse_lenient("OpenGL ES 3.0"), Version::ZERO);
    assert_eq!(Version::parse_lenient("4.x"), Version::ZERO);
    assert_eq!(Version::parse_lenient("-1.2"), Version::ZERO);
    assert_eq!(Version::parse_lenient(".5"), Version::ZERO);
  }

  #[test]
  fn lexicographic_order() {
    let min = Version::new(2, 1);

    assert!(Version::new(2, 1) >= min);
    assert!(Version::new(2, 0) < min);
    assert!(Version::new(3, 0) >= min);
    assert!(Version::new(1, 9) < min);
  }

  #[test]
  fn display() {
    assert_eq!(DEFAULT_MIN_VERSION.to_string(), "2.1");
    assert_eq!(Version::from((4, 6)).to_string(), "4.6");
  }
}
