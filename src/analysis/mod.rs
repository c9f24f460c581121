//! Mock "AI" analysis.
//!
//! Placeholder computations standing in for inference calls. They are pure
//! functions of their inputs plus an injected random source.

pub mod answer;
pub mod resume;

pub use answer::{Feedback, analyze_answer};
pub use resume::{ResumeAnalysis, ScoreTier, analyze_resume};
