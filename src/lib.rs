// Amount & Filter Utilities - Core Library
// Exposes all modules for use in the CLI and tests

pub mod amount;  // Unit-based amount accumulator (crore / lacs / thousand)
pub mod record;  // Tree-shaped key/value records
pub mod filter;  // Deep predicate filter over records
pub mod logging; // tracing subscriber setup
#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use amount::{AmountAccumulator, Unit, compute_amount};
pub use record::NestedRecord;
pub use filter::{DeepFilter, filter, try_filter, predicates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
