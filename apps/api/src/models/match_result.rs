use serde::{Deserialize, Serialize};

/// Five independent 0–100 sub-scores. Not a decomposition of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringBreakdown {
    pub hard_skills: u32,
    pub experience: u32,
    pub soft_skills: u32,
    pub certifications: u32,
    pub location: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub interview_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate_id: String,
    pub score: u32,
    pub reasoning: String,
    pub breakdown: ScoringBreakdown,
    pub strengths: Vec<String>,
    pub analysis: MatchAnalysis,
}

/// A `MatchResult` keyed by the job it was computed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    #[serde(flatten)]
    pub result: MatchResult,
    pub job_id: String,
}
