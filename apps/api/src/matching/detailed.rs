//! Detailed matcher: expands a job/candidate pair plus an already-assigned target
//! score into a full `MatchResult`.
//!
//! The breakdown is derived from the target score, not the other way round: the
//! overall score comes from the ranking ladder and the five dimensions are filled in
//! afterwards, partly independently of it.

use crate::matching::location::city_contains;
use crate::matching::raw_score::partition_skills;
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::models::match_result::{MatchAnalysis, MatchResult, ScoringBreakdown};
use crate::random::RandomSource;

const JITTER: i32 = 7;
const MAX_STRENGTHS: usize = 3;
const MIN_QUESTIONS: usize = 3;
const LOCAL_TAG: &str = "Local";
const CLOSING_QUESTION: &str =
    "What motivates you to pursue a role at our organization specifically?";

/// Score bands, evaluated high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    TopTier,
    HighlyQualified,
    Competitive,
    Average,
    Limited,
}

impl Band {
    pub fn for_score(score: u32) -> Self {
        match score {
            90.. => Band::TopTier,
            80..=89 => Band::HighlyQualified,
            70..=79 => Band::Competitive,
            55..=69 => Band::Average,
            _ => Band::Limited,
        }
    }

    fn reasoning(self, candidate_name: &str) -> String {
        match self {
            Band::TopTier => format!(
                "Outstanding alignment. {candidate_name} is a top-tier fit \
                 with high skill overlap and ideal experience."
            ),
            Band::HighlyQualified => "Highly qualified candidate with strong core competency \
                                      and a solid industry background."
                .to_string(),
            Band::Competitive => "Competitive candidate with significant relevant skills \
                                  and experience. Worth reviewing."
                .to_string(),
            Band::Average => "Average match. Covers the basic requirements \
                              with room for specialized growth."
                .to_string(),
            Band::Limited => "Limited overlap. Background does not align closely \
                              with this role's specific demands."
                .to_string(),
        }
    }

    fn strengths(self) -> &'static [&'static str] {
        match self {
            Band::TopTier => &["Top Match", "Expertise"],
            Band::HighlyQualified => &["Strong Fit"],
            Band::Competitive => &["Qualified"],
            Band::Average => &["Experienced"],
            Band::Limited => &["Emerging Talent"],
        }
    }

    fn opening_question(self, top_skill: Option<&str>) -> String {
        match self {
            Band::TopTier => format!(
                "How have you optimized {} in your previous roles?",
                top_skill.unwrap_or("operations")
            ),
            Band::HighlyQualified => format!(
                "Can you walk us through your experience with {}?",
                top_skill.unwrap_or("standard procedures")
            ),
            Band::Competitive => format!(
                "Which results from your work with {} are you most proud of?",
                top_skill.unwrap_or("day-to-day operations")
            ),
            Band::Average => format!(
                "How would you apply your background in {} to this role?",
                top_skill.unwrap_or("general operations")
            ),
            Band::Limited => format!(
                "What draws you to a role built around {}?",
                top_skill.unwrap_or("these responsibilities")
            ),
        }
    }

    fn growth_question(self) -> &'static str {
        match self {
            Band::TopTier => "Describe a time you mentored others in a high-pressure environment.",
            _ => "Tell us about a skill you picked up recently and how you went about learning it.",
        }
    }
}

fn clamp_score(value: i32, low: i32, high: i32) -> u32 {
    value.clamp(low, high) as u32
}

/// Builds the full match result for `candidate` against `job` at `target_score`.
pub fn expand(
    job: &Job,
    candidate: &Candidate,
    target_score: u32,
    rng: &mut dyn RandomSource,
) -> MatchResult {
    let (matched_skills, missing_skills) = partition_skills(job, candidate);
    let target = target_score as i32;

    let coverage = matched_skills.len() as f64 / job.skills.len().max(1) as f64 * 100.0;
    let hard_skills = if target_score < 50 {
        // Keep the breakdown visually consistent with a poor overall fit
        if rng.chance(0.5) {
            0
        } else {
            clamp_score(rng.int_in(0, 14), 0, 100)
        }
    } else {
        (coverage + rng.int_in(-JITTER, JITTER) as f64)
            .clamp(0.0, 100.0)
            .round() as u32
    };

    let experience_base = if target_score > 80 { 90 } else { target };
    let experience = clamp_score(experience_base + rng.int_in(-JITTER, JITTER), 0, 100);
    let location = if city_contains(&job.location, &candidate.location) {
        100
    } else {
        60
    };
    let soft_skills = clamp_score(target + rng.int_in(-JITTER, JITTER), 40, 95);
    let certifications = clamp_score(target - 10 + rng.int_in(-JITTER, JITTER), 20, 95);

    let band = Band::for_score(target_score);

    let mut strengths: Vec<String> = band.strengths().iter().map(|s| s.to_string()).collect();
    if location == 100 {
        strengths.push(LOCAL_TAG.to_string());
    }
    strengths.truncate(MAX_STRENGTHS);

    let mut interview_questions = vec![
        band.opening_question(matched_skills.first().map(String::as_str)),
        band.growth_question().to_string(),
    ];
    if let Some(first_missing) = missing_skills.first() {
        interview_questions.push(format!(
            "What is your approach to learning new tools like {first_missing}?"
        ));
    }
    while interview_questions.len() < MIN_QUESTIONS {
        interview_questions.push(CLOSING_QUESTION.to_string());
    }

    MatchResult {
        candidate_id: candidate.id.clone(),
        score: target_score,
        reasoning: band.reasoning(&candidate.name),
        breakdown: ScoringBreakdown {
            hard_skills,
            experience,
            soft_skills,
            certifications,
            location,
        },
        strengths,
        analysis: MatchAnalysis {
            matched_skills,
            missing_skills,
            interview_questions,
        },
    }
}
