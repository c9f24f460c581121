//! User-facing validation failures.
//!
//! Every variant's `Display` text is the notification shown to the user; none of
//! them change the state of the screen that raised it.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a job role first")]
    MissingRole,

    #[error("Please provide an answer")]
    EmptyAnswer,

    /// The selected file is neither a PDF nor a Word document.
    #[error("Please upload a PDF or Word document")]
    UnsupportedFileType { mime: String },

    #[error("Please upload a resume first")]
    MissingFile,

    #[error("Please enter an API key first")]
    MissingKey,

    /// A mock analysis or connection test is already running.
    #[error("Please wait for the current analysis to finish")]
    Busy,
}
