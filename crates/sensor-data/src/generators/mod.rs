//! Package generators.
//!
//! - [`PackageGenerator`]: sensor packages drawn from athlete profiles

pub mod package;

pub use package::PackageGenerator;
