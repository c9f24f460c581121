//! Headless command execution
//!
//! The same credential and resume workflows the TUI drives, run once from the
//! command line. Timed steps sleep on the tokio clock for their full delay and
//! then advance the workflow's logical clock by that amount.

use super::messages::print_toasts;
use crate::config::Config;
use crate::consts::cli_consts::credentials::connection_test_delay;
use crate::consts::cli_consts::resume::analysis_delay;
use crate::credentials::{ConnectionTester, CredentialStore, Service, mask_key};
use crate::notifications::Toasts;
use crate::resume::{ResumeFile, ResumeReview};
use crate::{print_cmd_info, print_cmd_warn};
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Prints the saved keys, masked.
pub fn keys_show(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut toasts = Toasts::new();
    let credentials = CredentialStore::load(config.open_store(), &mut toasts);
    print_toasts(&toasts);

    for service in Service::iter() {
        match credentials.get(service) {
            Some(key) => print_cmd_info!(service.label(), "{}", mask_key(key)),
            None => print_cmd_warn!(service.label(), "not set"),
        }
    }
    Ok(())
}

/// Saves one key and keeps the other.
pub fn keys_set(config: &Config, service: Service, value: &str) -> Result<(), Box<dyn Error>> {
    let mut toasts = Toasts::new();
    let mut credentials = CredentialStore::load(config.open_store(), &mut toasts);
    let result = credentials.save(service, value, &mut toasts);
    print_toasts(&toasts);
    result?;
    Ok(())
}

/// Runs the mock connection test against the saved key. Fails when the key is
/// missing or too short.
pub async fn keys_test(config: &Config, service: Service) -> Result<(), Box<dyn Error>> {
    let mut toasts = Toasts::new();
    let credentials = CredentialStore::load(config.open_store(), &mut toasts);
    let mut tester = ConnectionTester::new();
    tester.begin(service)?;

    print_cmd_info!("Testing connection", "{}", service);
    tokio::time::sleep(connection_test_delay()).await;
    tester.advance(connection_test_delay(), &credentials, &mut toasts);
    print_toasts(&toasts);

    if tester.is_connected(service) {
        Ok(())
    } else {
        Err(Box::from(format!("{} connection test failed", service)))
    }
}

/// Analyzes a resume without the TUI, prints the report and optionally writes
/// it to `output`.
pub async fn analyze_resume(
    path: &Path,
    job_description: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    if !path.is_file() {
        return Err(Box::from(format!("File not found: {}", path.display())));
    }

    let mut toasts = Toasts::new();
    let mut review = ResumeReview::new();
    let file = ResumeFile::from_path(path);
    let name = file.name.clone();
    let selected = review.select_file(file, &mut toasts);
    if let Some(description) = job_description {
        review.set_job_description(description);
    }
    let analyzed = selected.and_then(|_| review.analyze(&mut toasts));
    if let Err(e) = analyzed {
        print_toasts(&toasts);
        return Err(e.into());
    }

    info!("Analyzing {}", name);
    tokio::time::sleep(analysis_delay()).await;
    review.advance(analysis_delay(), &mut toasts);

    if let Some(analysis) = review.analysis() {
        println!("{}", analysis.to_report(&name));
    }
    if let Some(dir) = output {
        let written = review.export_report(&dir, &mut toasts);
        print_toasts(&toasts);
        let written = written?;
        print_cmd_info!("Report written", "{}", written.display());
    } else {
        print_toasts(&toasts);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_keys_test_reflects_saved_key() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path());

        assert!(keys_test(&config, Service::OpenAi).await.is_err());
        keys_set(&config, Service::OpenAi, "sk-abcdefghijklmnop").unwrap();
        assert!(keys_test(&config, Service::OpenAi).await.is_ok());
        keys_set(&config, Service::ElevenLabs, "short").unwrap();
        assert!(keys_test(&config, Service::ElevenLabs).await.is_err());
    }

    #[tokio::test]
    async fn test_analyze_resume_writes_report() {
        let dir = tempdir().unwrap();
        let resume = dir.path().join("cv.docx");
        std::fs::write(&resume, b"PK").unwrap();
        let out = dir.path().join("out");

        analyze_resume(&resume, Some("Rust".into()), Some(out.clone()))
            .await
            .unwrap();
        assert!(
            out.join(crate::consts::cli_consts::resume::REPORT_FILE_NAME)
                .exists()
        );
    }

    #[tokio::test]
    async fn test_analyze_resume_rejects_unsupported() {
        let dir = tempdir().unwrap();
        let resume = dir.path().join("cv.txt");
        std::fs::write(&resume, b"plain").unwrap();
        let err = analyze_resume(&resume, None, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Please upload a PDF or Word document");
    }
}
