use serde::{Deserialize, Serialize};

/// A job posting as supplied by the feed or by API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub pay_rate: String,
    pub posted_date: String,
    /// Full-Time, Temp-to-Hire, Direct Hire, ...
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// Order matters: the first matched / missing skill drives interview questions.
    pub skills: Vec<String>,
    pub years_experience: u32,
    #[serde(default)]
    pub is_new: bool,
}
