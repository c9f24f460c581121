//! Static interview content.

/// Target roles offered on the role selection screen.
pub const ROLES: [&str; 7] = [
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "UX Designer",
    "DevOps Engineer",
    "Sales Manager",
    "Marketing Specialist",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub tips: Vec<String>,
}

impl Question {
    fn new(id: u32, category: &str, difficulty: Difficulty, prompt: &str, tips: &[&str]) -> Self {
        Self {
            id,
            category: category.to_string(),
            difficulty,
            prompt: prompt.to_string(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The fixed question list used by every session.
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "Technical",
            Difficulty::Medium,
            "Explain the difference between REST and GraphQL APIs. When would you choose one over the other?",
            &[
                "Compare data fetching",
                "Discuss flexibility",
                "Consider performance",
            ],
        ),
        Question::new(
            2,
            "Behavioral",
            Difficulty::Easy,
            "Tell me about a time when you had to work with a difficult team member. How did you handle the situation?",
            &[
                "Use STAR method",
                "Focus on collaboration",
                "Show conflict resolution",
            ],
        ),
        Question::new(
            3,
            "Problem Solving",
            Difficulty::Hard,
            "How would you design a system that can handle 1 million concurrent users?",
            &[
                "Consider scalability",
                "Discuss load balancing",
                "Think about database optimization",
            ],
        ),
    ]
}
