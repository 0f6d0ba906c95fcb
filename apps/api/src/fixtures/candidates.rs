//! Candidate pools for a job: a few engineered to match well, the rest random.

use crate::fixtures::{BASE_TITLES, MN_LOCATIONS};
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::random::{pick, shuffle, RandomSource};

const FIRST_NAMES: &[&str] = &[
    "Michael", "Sarah", "David", "Jessica", "Robert", "Emily", "James", "Ashley", "William",
    "Jennifer", "Christopher", "Linda", "Matthew", "Amanda", "Joshua", "Elizabeth", "Andrew",
    "Melissa", "Ryan", "Karen", "Marcus", "Elena", "Julian", "Samira", "Xavier", "Yasmine",
    "Liam", "Olivia", "Noah", "Ava", "Lucas", "Mia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Walker", "Hall", "Young", "King", "Wright", "Baker",
    "Nelson", "Campbell", "Mitchell", "Carter",
];

const EXTRA_TITLES: &[&str] = &[
    "Retail Associate",
    "Barista",
    "Graphic Designer",
    "Project Coordinator",
];

const SKILL_POOL: &[&str] = &[
    "Inventory Control",
    "SAP",
    "RF Scanning",
    "Safety Protocol",
    "Team Leadership",
    "Customer Support",
    "Data Entry",
    "Microsoft Office",
    "Project Management",
    "Forklift Certified",
    "Heavy Lifting",
    "OSHA Compliance",
    "Shipping/Receiving",
    "Lean Six Sigma",
    "Account Management",
    "Quality Control",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Job's title, location and skills plus extras; more experience than asked.
    Top,
    /// Same title, random location, one job skill.
    Mid,
    /// Same location, unrelated skills.
    Partial,
    Random,
}

impl Tier {
    fn label(self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::Mid => "mid",
            Tier::Partial => "part",
            Tier::Random => "rand",
        }
    }
}

fn pool_skills(range: std::ops::Range<usize>) -> impl Iterator<Item = String> {
    SKILL_POOL[range].iter().map(|s| s.to_string())
}

pub fn generate_candidate(
    id: String,
    tier: Tier,
    job: &Job,
    rng: &mut dyn RandomSource,
) -> Candidate {
    let first = *pick(FIRST_NAMES, rng);
    let last = *pick(LAST_NAMES, rng);

    let (title, location, experience_years, skills): (String, String, u32, Vec<String>) =
        match tier {
            Tier::Top => (
                job.title.clone(),
                job.location.clone(),
                job.years_experience.saturating_add(3),
                job.skills.iter().cloned().chain(pool_skills(0..2)).collect(),
            ),
            Tier::Mid => (
                job.title.clone(),
                pick(MN_LOCATIONS, rng).to_string(),
                job.years_experience.saturating_sub(1),
                job.skills.iter().take(1).cloned().chain(pool_skills(2..5)).collect(),
            ),
            Tier::Partial => (
                "General Professional".to_string(),
                job.location.clone(),
                2,
                pool_skills(10..12).collect(),
            ),
            Tier::Random => {
                let title_count = BASE_TITLES.len() + EXTRA_TITLES.len();
                let title = if rng.index(title_count) < BASE_TITLES.len() {
                    pick(BASE_TITLES, rng)
                } else {
                    pick(EXTRA_TITLES, rng)
                };
                let mut skills: Vec<String> = pool_skills(0..SKILL_POOL.len()).collect();
                shuffle(&mut skills, rng);
                skills.truncate(3);
                (
                    title.to_string(),
                    pick(MN_LOCATIONS, rng).to_string(),
                    rng.index(15) as u32,
                    skills,
                )
            }
        };

    let bio = format!(
        "Professional with {experience_years} years of background. \
         Primary skills include {}. Dedicated to operational excellence and teamwork.",
        skills.first().map(String::as_str).unwrap_or("general operations")
    );

    Candidate {
        id,
        name: format!("{first} {last}"),
        title,
        location,
        skills,
        experience_years,
        profile_url: "#".to_string(),
        current_employer: None,
        bio: Some(bio),
        email: Some(format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        )),
        phone: Some(format!(
            "612-{}-{}",
            100 + rng.index(900),
            1000 + rng.index(9000)
        )),
        linked_in: Some(format!(
            "linkedin.com/in/{}-{}",
            first.to_lowercase(),
            last.to_lowercase()
        )),
    }
}

/// 2 top, 3 mid, 3 partial and 6 random candidates for `job`, shuffled.
pub fn candidate_pool_for(job: &Job, rng: &mut dyn RandomSource) -> Vec<Candidate> {
    const MIX: &[(Tier, usize)] = &[
        (Tier::Top, 2),
        (Tier::Mid, 3),
        (Tier::Partial, 3),
        (Tier::Random, 6),
    ];

    let mut pool = Vec::new();
    for &(tier, count) in MIX {
        for i in 0..count {
            let id = format!("candidate-{}-{}-{i}", job.id, tier.label());
            pool.push(generate_candidate(id, tier, job, rng));
        }
    }
    shuffle(&mut pool, rng);
    pool
}
