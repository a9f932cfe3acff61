//! Metric prefixes, preferred-value series and prefixed display strings.

pub mod format;
pub mod prefix;
pub mod series;

// Re-export for convenience
pub use format::{conv_str, format_si, prefix_of, round_mantissa, split, DISPLAY_DECIMALS};
pub use prefix::Prefix;
pub use series::ESeries;
