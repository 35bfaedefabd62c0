pub mod evaluate;

pub use evaluate::{EpisodeSummary, EvaluateConfig, EvaluateMode};
