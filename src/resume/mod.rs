pub mod file;
pub mod pipeline;

pub use file::ResumeFile;
pub use pipeline::ResumeReview;
