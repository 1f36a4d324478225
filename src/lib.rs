//! Detects the installed .NET Framework (4.5 and later) version from the
//! release key the runtime installer writes to the Windows registry.
//!
//! The resolution core ([`version`]) is a pure lookup over a static table and
//! compiles everywhere; only the registry source in [`source`] touches the
//! registry, and only on Windows.
//!
//! # Modules
//!
//! - [`version`]: release-key table and the resolution algorithm
//! - [`source`]: where the release key comes from (registry, fixed value)
//! - [`report`]: the result record handed to the display sink

pub mod report;
pub mod source;
pub mod version;
