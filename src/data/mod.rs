//! Data acquisition: the DBnomics client, the per-country loader, and the
//! synthetic curve used on the explanations page.

pub mod dbnomics;
pub mod loader;
pub mod theory;

pub use dbnomics::DbnomicsClient;
pub use loader::{LoadError, SeriesProvider, join_on_period, load, load_country};
pub use theory::{TheoryCurve, theory_curve};
