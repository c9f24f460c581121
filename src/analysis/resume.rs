//! Mock resume analysis.
//!
//! The analysis is a constant record. The resume's bytes and the job
//! description are accepted but never inspected.

use crate::resume::ResumeFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionScore {
    pub score: u8,
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub contact: SectionScore,
    pub summary: SectionScore,
    pub experience: SectionScore,
    pub education: SectionScore,
    pub skills: SectionScore,
}

impl Sections {
    /// Sections in display order, with their names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SectionScore)> {
        [
            ("contact", &self.contact),
            ("summary", &self.summary),
            ("experience", &self.experience),
            ("education", &self.education),
            ("skills", &self.skills),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReport {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAnalysis {
    pub overall_score: u8,
    /// Fabricated applicant-tracking-system compatibility percentage.
    pub ats_score: u8,
    pub sections: Sections,
    pub keywords: KeywordReport,
    pub improvements: Vec<String>,
    pub strengths: Vec<String>,
}

/// Badge tier used to color a score.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreTier::High
        } else if score >= 60 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

impl ResumeAnalysis {
    pub fn overall_verdict(&self) -> &'static str {
        match ScoreTier::of(self.overall_score) {
            ScoreTier::High => "Excellent resume!",
            ScoreTier::Medium => "Good with room for improvement",
            ScoreTier::Low => "Needs significant improvements",
        }
    }

    pub fn ats_verdict(&self) -> &'static str {
        if self.ats_score >= 80 {
            "ATS-friendly format!"
        } else {
            "Needs ATS optimization"
        }
    }

    /// Plain-text report, as written by the report export.
    pub fn to_report(&self, file_name: &str) -> String {
        let mut lines = vec![
            format!("Resume Analysis Report: {file_name}"),
            String::new(),
            format!(
                "Overall Score: {}% ({})",
                self.overall_score,
                self.overall_verdict()
            ),
            format!("ATS Compatibility: {}% ({})", self.ats_score, self.ats_verdict()),
            String::new(),
            "Section Analysis".to_string(),
        ];
        for (name, section) in self.sections.iter() {
            lines.push(format!("  {name}: {}%", section.score));
            lines.extend(section.feedback.iter().map(|item| format!("    - {item}")));
        }
        lines.push(String::new());
        lines.push(format!("Keywords Found: {}", self.keywords.present.join(", ")));
        lines.push(format!("Missing Keywords: {}", self.keywords.missing.join(", ")));
        lines.push(String::new());
        lines.push("Strengths".to_string());
        lines.extend(self.strengths.iter().map(|item| format!("  - {item}")));
        lines.push("Improvements".to_string());
        lines.extend(self.improvements.iter().map(|item| format!("  - {item}")));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn section(score: u8, feedback: &[&str]) -> SectionScore {
    SectionScore {
        score,
        feedback: strings(feedback),
    }
}

/// Returns the mock analysis. Identical for every input.
pub fn analyze_resume(_file: &ResumeFile, _job_description: &str) -> ResumeAnalysis {
    ResumeAnalysis {
        overall_score: 78,
        ats_score: 85,
        sections: Sections {
            contact: section(
                95,
                &[
                    "Complete contact information",
                    "Professional email address",
                    "LinkedIn profile included",
                ],
            ),
            summary: section(
                72,
                &[
                    "Good overview of experience",
                    "Could be more specific about achievements",
                    "Add relevant keywords",
                ],
            ),
            experience: section(
                80,
                &[
                    "Strong work history",
                    "Quantified achievements",
                    "Could add more technical details",
                ],
            ),
            education: section(
                88,
                &[
                    "Relevant degree listed",
                    "Good GPA included",
                    "Recent graduation noted",
                ],
            ),
            skills: section(
                65,
                &[
                    "Good technical skills",
                    "Missing some trending technologies",
                    "Add soft skills",
                ],
            ),
        },
        keywords: KeywordReport {
            present: strings(&["JavaScript", "React", "Node.js", "Python", "AWS", "Leadership"]),
            missing: strings(&["Docker", "Kubernetes", "TypeScript", "GraphQL", "Microservices"]),
        },
        improvements: strings(&[
            "Add more specific metrics and achievements",
            "Include trending technologies like Docker and Kubernetes",
            "Optimize for ATS with better keyword placement",
            "Add a professional summary section",
            "Include relevant certifications",
        ]),
        strengths: strings(&[
            "Clear and professional format",
            "Strong educational background",
            "Relevant work experience",
            "Good use of action verbs",
            "Appropriate length for experience level",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> ResumeFile {
        ResumeFile::from_path(name)
    }

    #[test]
    // The analysis does not depend on the file or the job description.
    fn test_analysis_ignores_input() {
        let a = analyze_resume(&pdf("alice.pdf"), "");
        let b = analyze_resume(&pdf("bob.docx"), "Senior Rust engineer, tokio, axum");
        assert_eq!(a, b);
        assert_eq!(a.overall_score, 78);
        assert_eq!(a.ats_score, 85);
    }

    #[test]
    fn test_verdicts() {
        let mut analysis = analyze_resume(&pdf("cv.pdf"), "");
        assert_eq!(analysis.overall_verdict(), "Good with room for improvement");
        assert_eq!(analysis.ats_verdict(), "ATS-friendly format!");

        analysis.overall_score = 80;
        assert_eq!(analysis.overall_verdict(), "Excellent resume!");
        analysis.overall_score = 59;
        assert_eq!(analysis.overall_verdict(), "Needs significant improvements");
        analysis.ats_score = 79;
        assert_eq!(analysis.ats_verdict(), "Needs ATS optimization");
    }

    #[test]
    fn test_sections_in_display_order() {
        let analysis = analyze_resume(&pdf("cv.pdf"), "");
        let scores: Vec<(&str, u8)> = analysis
            .sections
            .iter()
            .map(|(name, s)| (name, s.score))
            .collect();
        assert_eq!(
            scores,
            vec![
                ("contact", 95),
                ("summary", 72),
                ("experience", 80),
                ("education", 88),
                ("skills", 65)
            ]
        );
        assert_eq!(ScoreTier::of(65), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(59), ScoreTier::Low);
    }

    #[test]
    fn test_report_lists_every_part() {
        let report = analyze_resume(&pdf("cv.pdf"), "").to_report("cv.pdf");
        assert!(report.starts_with("Resume Analysis Report: cv.pdf"));
        assert!(report.contains("Overall Score: 78% (Good with room for improvement)"));
        assert!(report.contains("  skills: 65%"));
        assert!(report.contains("Missing Keywords: Docker, Kubernetes"));
        assert!(report.contains("  - Include relevant certifications"));
    }
}
