//! Resume review workflow: pick a file, run the mock analysis, show results.

use super::file::ResumeFile;
use crate::analysis::{ResumeAnalysis, analyze_resume};
use crate::clock::{Scheduler, TimerId};
use crate::consts::cli_consts::resume::{REPORT_FILE_NAME, analysis_delay};
use crate::error::ValidationError;
use crate::notifications::Toasts;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There is no analysis to export yet")]
    NoAnalysis,

    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Default)]
pub struct ResumeReview {
    selected_file: Option<ResumeFile>,
    job_description: String,
    analysis: Option<ResumeAnalysis>,
    scheduler: Scheduler<()>,
    pending: Option<TimerId>,
}

impl ResumeReview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.selected_file.as_ref()
    }

    pub fn analysis(&self) -> Option<&ResumeAnalysis> {
        self.analysis.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    /// Selects a resume. Anything but a PDF or Word document is rejected and
    /// the previous selection is kept.
    pub fn select_file(
        &mut self,
        file: ResumeFile,
        toasts: &mut Toasts,
    ) -> Result<(), ValidationError> {
        if !file.is_supported() {
            let err = ValidationError::UnsupportedFileType { mime: file.mime };
            if let ValidationError::UnsupportedFileType { mime } = &err {
                info!("Rejected {} ({})", file.path.display(), mime);
            }
            toasts.error(err.to_string());
            return Err(err);
        }
        info!("Selected resume {}", file.path.display());
        self.selected_file = Some(file);
        toasts.success("Resume uploaded successfully!");
        Ok(())
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn push_job_description_char(&mut self, c: char) {
        self.job_description.push(c);
    }

    pub fn pop_job_description_char(&mut self) {
        self.job_description.pop();
    }

    /// Starts the mock analysis of the selected file.
    pub fn analyze(&mut self, toasts: &mut Toasts) -> Result<(), ValidationError> {
        if self.is_analyzing() {
            return Err(ValidationError::Busy);
        }
        if self.selected_file.is_none() {
            toasts.error(ValidationError::MissingFile.to_string());
            return Err(ValidationError::MissingFile);
        }
        self.pending = Some(self.scheduler.schedule(analysis_delay(), ()));
        Ok(())
    }

    pub fn advance(&mut self, dt: Duration, toasts: &mut Toasts) {
        if self.scheduler.advance(dt).is_empty() {
            return;
        }
        self.pending = None;
        if let Some(file) = &self.selected_file {
            self.analysis = Some(analyze_resume(file, &self.job_description));
            info!("Analysis of {} completed", file.name);
            toasts.success("Resume analysis completed!");
        }
    }

    /// Clears the file, the analysis and the job description together. An
    /// analysis still in flight is dropped.
    pub fn reset(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.selected_file = None;
        self.analysis = None;
        self.job_description.clear();
    }

    /// Writes the current analysis as a text report into `dir`.
    pub fn export_report(&self, dir: &Path, toasts: &mut Toasts) -> Result<PathBuf, ExportError> {
        let (Some(analysis), Some(file)) = (&self.analysis, &self.selected_file) else {
            toasts.error(ExportError::NoAnalysis.to_string());
            return Err(ExportError::NoAnalysis);
        };
        let path = dir.join(REPORT_FILE_NAME);
        let write = || -> io::Result<()> {
            fs::create_dir_all(dir)?;
            fs::write(&path, analysis.to_report(&file.name))
        };
        if let Err(e) = write() {
            error!("Could not write report to {}: {}", path.display(), e);
            toasts.error(format!("Could not save report: {e}"));
            return Err(e.into());
        }
        toasts.success("Analysis report downloaded!");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationKind;
    use tempfile::tempdir;

    fn with_file(name: &str) -> (ResumeReview, Toasts) {
        let mut review = ResumeReview::new();
        let mut toasts = Toasts::new();
        review
            .select_file(ResumeFile::from_path(name), &mut toasts)
            .unwrap();
        (review, toasts)
    }

    #[test]
    // Unsupported types never set the selection and always notify.
    fn test_rejects_unsupported_types() {
        let mut review = ResumeReview::new();
        let mut toasts = Toasts::new();
        for name in ["resume.txt", "photo.png", "noextension"] {
            let result = review.select_file(ResumeFile::from_path(name), &mut toasts);
            assert!(matches!(
                result,
                Err(ValidationError::UnsupportedFileType { .. })
            ));
            assert!(review.selected_file().is_none());
            assert_eq!(
                toasts.last().unwrap().msg,
                "Please upload a PDF or Word document"
            );
        }
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let (mut review, mut toasts) = with_file("cv.docx");
        let _ = review.select_file(ResumeFile::from_path("cv.txt"), &mut toasts);
        assert_eq!(review.selected_file().unwrap().name, "cv.docx");
    }

    #[test]
    fn test_analyze_requires_file() {
        let mut review = ResumeReview::new();
        let mut toasts = Toasts::new();
        assert_eq!(review.analyze(&mut toasts), Err(ValidationError::MissingFile));
        assert!(!review.is_analyzing());
        assert_eq!(toasts.last().unwrap().msg, "Please upload a resume first");
    }

    #[test]
    fn test_analysis_lands_after_three_seconds() {
        let (mut review, mut toasts) = with_file("cv.pdf");
        review.set_job_description("Rust developer");
        review.analyze(&mut toasts).unwrap();
        assert_eq!(review.analyze(&mut toasts), Err(ValidationError::Busy));

        review.advance(Duration::from_millis(2999), &mut toasts);
        assert!(review.analysis().is_none());
        review.advance(Duration::from_millis(1), &mut toasts);
        assert!(!review.is_analyzing());
        assert_eq!(review.analysis().unwrap().overall_score, 78);
        assert_eq!(toasts.last().unwrap().msg, "Resume analysis completed!");
    }

    #[test]
    // Reset clears file, analysis and job description together.
    fn test_reset_clears_everything() {
        let (mut review, mut toasts) = with_file("cv.pdf");
        review.set_job_description("Platform engineer");
        review.analyze(&mut toasts).unwrap();
        review.advance(analysis_delay(), &mut toasts);
        assert!(review.analysis().is_some());

        review.reset();
        assert!(review.selected_file().is_none());
        assert!(review.analysis().is_none());
        assert_eq!(review.job_description(), "");
    }

    #[test]
    fn test_reset_drops_pending_analysis() {
        let (mut review, mut toasts) = with_file("cv.pdf");
        review.analyze(&mut toasts).unwrap();
        review.reset();
        review.advance(Duration::from_secs(10), &mut toasts);
        assert!(review.analysis().is_none());
        assert!(!review.is_analyzing());
    }

    #[test]
    fn test_export_writes_report() {
        let dir = tempdir().unwrap();
        let (mut review, mut toasts) = with_file("cv.pdf");
        assert!(matches!(
            review.export_report(dir.path(), &mut toasts),
            Err(ExportError::NoAnalysis)
        ));
        assert_eq!(toasts.last().unwrap().kind, NotificationKind::Error);

        review.analyze(&mut toasts).unwrap();
        review.advance(analysis_delay(), &mut toasts);
        let path = review.export_report(dir.path(), &mut toasts).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("Resume Analysis Report: cv.pdf"));
        assert_eq!(toasts.last().unwrap().msg, "Analysis report downloaded!");
    }
}
