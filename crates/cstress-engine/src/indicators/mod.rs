//! Climate indicators and their registry.
//!
//! - **Green proxies**: simple ratio indicators over the loan table
//! - **Registry**: explicit name-to-function catalog with tolerance for
//!   declared-but-unimplemented names

mod green;
mod registry;

pub use green::{green_bond_share, green_financing_share, sbti_client_share};
pub use registry::{IndicatorEntry, IndicatorFn, IndicatorRegistry};
