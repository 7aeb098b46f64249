//! Data module - CSV loading and change column processing

mod loader;
mod processor;

pub use loader::DataLoader;
pub use processor::{DataProcessor, SOURCE_COLUMN};
