//! Static progress data shown on the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_interviews: u32,
    pub average_score: u8,
    pub resume_score: u8,
    pub improvement_trend: u8,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_interviews: 12,
            average_score: 87,
            resume_score: 92,
            improvement_trend: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastSession {
    pub id: u32,
    pub role: &'static str,
    pub score: u8,
    pub date: &'static str,
    pub kind: &'static str,
}

pub fn recent_sessions() -> Vec<PastSession> {
    vec![
        PastSession {
            id: 1,
            role: "Software Engineer",
            score: 89,
            date: "2024-01-20",
            kind: "Technical",
        },
        PastSession {
            id: 2,
            role: "Product Manager",
            score: 85,
            date: "2024-01-19",
            kind: "Behavioral",
        },
        PastSession {
            id: 3,
            role: "Data Scientist",
            score: 91,
            date: "2024-01-18",
            kind: "Technical",
        },
    ]
}
