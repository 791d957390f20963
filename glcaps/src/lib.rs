//! # glcaps
//!
//! Graphics driver capability reporting.
//!
//! This crate answers the questions a diagnostics panel or a bug report usually needs: which version
//! of the graphics API the driver provides, which renderer is behind it, which shading language
//! versions and which extensions are available. The answers are exposed as a structured
//! [`CapabilityReport`] and as a human-readable markup text.
//!
//! # Drivers
//!
//! The crate doesn’t bind to any graphics API itself. Instead, it issues a small set of primitive
//! queries through the [`Driver`](backend::driver::Driver) trait. Backend crates implement that trait;
//! `glcaps-gl` does it for OpenGL. Because the driver is passed explicitly to the [`Reporter`], a fake
//! driver can be injected in tests.
//!
//! # Failures
//!
//! Capability reporting is best-effort. Drivers differ a lot in what they can answer, especially
//! older ones, so the [`Reporter`] never fails: a query the driver can’t answer degrades the report
//! (zero version, empty lists, placeholder strings) instead of aborting the application.
//!
//! ```
//! use glcaps::backend::driver::{
//!   Driver, DriverError, IndexedStringQuery, IntegerQuery, IntegerValue, StringQuery, StringValue,
//! };
//! use glcaps::{Reporter, ReporterOpt, Version};
//!
//! // a driver without any context: every query fails
//! struct Headless;
//!
//! unsafe impl Driver for Headless {
//!   fn get_integer(&self, _: IntegerQuery) -> Result<IntegerValue, DriverError> {
//!     Err(DriverError::ContextAbsent)
//!   }
//!
//!   fn get_string(&self, _: StringQuery) -> Result<Option<StringValue>, DriverError> {
//!     Err(DriverError::ContextAbsent)
//!   }
//!
//!   fn get_string_indexed(
//!     &self,
//!     _: IndexedStringQuery,
//!     _: u32,
//!   ) -> Result<Option<StringValue>, DriverError> {
//!     Err(DriverError::ContextAbsent)
//!   }
//! }
//!
//! let opt = ReporterOpt::default().set_min_version(Version::new(3, 3));
//! let reporter = Reporter::with_opt(&Headless, opt);
//! let report = reporter.info();
//!
//! assert_eq!(report.version(), Version::ZERO);
//! assert_eq!(report.renderer(), "not initialized");
//! assert!(!reporter.check_version());
//! ```

#![deny(missing_docs)]

pub mod backend;
pub mod report;
pub mod reporter;
pub mod version;

pub use crate::report::{CapabilityReport, Markup};
pub use crate::reporter::{Reporter, ReporterOpt};
pub use crate::version::{Version, DEFAULT_MIN_VERSION};
