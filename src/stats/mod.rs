//! Stats module - change range buckets and counts

mod distribution;

pub use distribution::{ChangeRange, Distribution, RangeCount};
