//! Offline evaluation of council decisions against gold labels

mod metrics;

pub use metrics::{ClassificationMetrics, ConfusionMatrix};
