pub mod audio;
pub mod questions;
pub mod session;

pub use audio::SimulatedMicrophone;
pub use questions::{Question, ROLES};
pub use session::{InterviewSession, SessionPhase, format_time};
