//! Raw score: an ordering-only heuristic. Never shown to users; the displayed score
//! comes from the ranking ladder.

use serde::Serialize;

use crate::matching::location::LocationRules;
use crate::models::candidate::Candidate;
use crate::models::job::Job;

const SKILL_WEIGHT: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.3;
const LOCATION_WEIGHT: f64 = 0.2;
/// Skill score used when the job lists no skills.
const NEUTRAL_SKILL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawScore {
    pub id: String,
    pub raw: f64,
}

/// Loose containment match: a job skill matches when it contains, or is contained in,
/// any candidate skill (case-insensitive substring, not token).
pub fn skill_matches(job_skill: &str, candidate_skills_lower: &[String]) -> bool {
    let job_skill = job_skill.to_lowercase();
    candidate_skills_lower
        .iter()
        .any(|cs| cs.contains(&job_skill) || job_skill.contains(cs.as_str()))
}

/// Splits `job.skills` into (matched, missing), preserving job order and duplicates.
pub fn partition_skills(job: &Job, candidate: &Candidate) -> (Vec<String>, Vec<String>) {
    let candidate_skills: Vec<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();
    job.skills
        .iter()
        .cloned()
        .partition(|skill| skill_matches(skill, &candidate_skills))
}

/// Scores a job/candidate pair. `id` is the candidate's.
pub fn score(job: &Job, candidate: &Candidate, rules: &LocationRules) -> RawScore {
    let skill_score = if job.skills.is_empty() {
        NEUTRAL_SKILL_SCORE
    } else {
        let (matched, _) = partition_skills(job, candidate);
        matched.len() as f64 / job.skills.len() as f64 * 100.0
    };

    let exp_score = if candidate.experience_years >= job.years_experience {
        100.0
    } else {
        (candidate.experience_years as f64 / job.years_experience.max(1) as f64 * 100.0).max(0.0)
    };

    let loc_score = rules.tier_score(&job.location, &candidate.location);

    RawScore {
        id: candidate.id.clone(),
        raw: skill_score * SKILL_WEIGHT
            + exp_score * EXPERIENCE_WEIGHT
            + loc_score * LOCATION_WEIGHT,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::candidate::Candidate;
    use crate::models::job::Job;

    pub fn make_job(id: &str, skills: &[&str], years: u32, location: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Forklift Operator".to_string(),
            company: "NorthStar Distribution".to_string(),
            location: location.to_string(),
            pay_rate: "$22.50 / hr".to_string(),
            posted_date: "Today".to_string(),
            employment_type: "Full-Time".to_string(),
            description: "Operate forklifts in a distribution center.".to_string(),
            requirements: vec!["Valid identification".to_string()],
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_experience: years,
            is_new: false,
        }
    }

    pub fn make_candidate(id: &str, skills: &[&str], years: u32, location: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: "Marcus Lee".to_string(),
            title: "Warehouse Associate".to_string(),
            location: location.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            profile_url: "#".to_string(),
            current_employer: None,
            bio: None,
            email: None,
            phone: None,
            linked_in: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{make_candidate, make_job};
    use super::*;

    #[test]
    fn test_loose_match_either_direction() {
        let cand = vec!["forklift certified".to_string(), "sap".to_string()];
        assert!(skill_matches("Forklift", &cand));
        assert!(skill_matches("SAP Inventory", &cand));
        assert!(!skill_matches("Safety", &cand));
    }

    #[test]
    fn test_partition_forklift_scenario() {
        let job = make_job("j1", &["Forklift", "Safety"], 0, "Eagan, MN");
        let cand = make_candidate("c1", &["forklift certified"], 0, "Eagan, MN");
        let (matched, missing) = partition_skills(&job, &cand);
        assert_eq!(matched, vec!["Forklift".to_string()]);
        assert_eq!(missing, vec!["Safety".to_string()]);
    }

    #[test]
    fn test_partition_keeps_duplicates() {
        let job = make_job("j1", &["Teamwork", "Teamwork", "SAP"], 0, "Eagan, MN");
        let cand = make_candidate("c1", &["teamwork"], 0, "Eagan, MN");
        let (matched, missing) = partition_skills(&job, &cand);
        assert_eq!(matched.len() + missing.len(), job.skills.len());
        assert_eq!(matched, vec!["Teamwork".to_string(), "Teamwork".to_string()]);
    }

    #[test]
    fn test_perfect_pair_scores_100() {
        let job = make_job("j1", &["Forklift", "Safety"], 2, "Eagan, MN");
        let cand = make_candidate("c1", &["forklift", "safety"], 5, "Eagan, MN");
        let s = score(&job, &cand, &LocationRules::default());
        assert_eq!(s.id, "c1");
        assert!((s.raw - 100.0).abs() < 1e-9, "raw was {}", s.raw);
    }

    #[test]
    fn test_no_job_skills_uses_neutral_default() {
        let job = make_job("j1", &[], 0, "Eagan, MN");
        let cand = make_candidate("c1", &[], 0, "Madison, WI");
        // 50*0.5 + 100*0.3 + 20*0.2
        let s = score(&job, &cand, &LocationRules::default());
        assert!((s.raw - 59.0).abs() < 1e-9, "raw was {}", s.raw);
    }

    #[test]
    fn test_partial_experience_is_proportional() {
        let job = make_job("j1", &["SAP"], 4, "Eagan, MN");
        let cand = make_candidate("c1", &["python"], 1, "Duluth, MN");
        // 0*0.5 + 25*0.3 + 60*0.2
        let s = score(&job, &cand, &LocationRules::default());
        assert!((s.raw - 19.5).abs() < 1e-9, "raw was {}", s.raw);
    }
}
