//! Resume file selection and MIME sniffing.

use std::path::{Path, PathBuf};

const PDF_MIME: &str = "application/pdf";

/// Extension to MIME table for the file picker.
const MIME_TYPES: &[(&str, &str)] = &[
    ("pdf", PDF_MIME),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("dot", "application/msword"),
    (
        "dotx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
    ),
    ("rtf", "application/rtf"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
];

/// A selected resume. Only its name and type are ever looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
}

impl ResumeFile {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path: path.to_path_buf(),
            name,
            mime: mime_for_path(path).to_string(),
        }
    }

    pub fn is_supported(&self) -> bool {
        is_supported_mime(&self.mime)
    }
}

/// Guesses a MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return "application/octet-stream";
    };
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

/// PDF or any Word-family type.
pub fn is_supported_mime(mime: &str) -> bool {
    mime == PDF_MIME || mime.contains("word")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_sniffing() {
        assert_eq!(mime_for_path(Path::new("cv.pdf")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("CV.PDF")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("cv.doc")), "application/msword");
        assert!(mime_for_path(Path::new("cv.docx")).contains("wordprocessingml"));
        assert_eq!(mime_for_path(Path::new("cv")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("cv.xyz")), "application/octet-stream");
    }

    #[test]
    fn test_supported_types() {
        for name in ["a.pdf", "a.doc", "a.docx", "a.dotx", "a.dot"] {
            assert!(ResumeFile::from_path(name).is_supported(), "{name}");
        }
        for name in ["a.txt", "a.png", "a.odt", "a.rtf", "a"] {
            assert!(!ResumeFile::from_path(name).is_supported(), "{name}");
        }
    }

    #[test]
    fn test_name_is_the_file_name() {
        let file = ResumeFile::from_path("/home/me/docs/resume.pdf");
        assert_eq!(file.name, "resume.pdf");
    }
}
