use crate::fixtures::{BASE_TITLES, MN_LOCATIONS};
use crate::models::job::Job;
use crate::random::{pick, shuffle, RandomSource};

const COMPANIES: &[&str] = &[
    "Global Logistics Corp",
    "Apex Manufacturing",
    "MedTech Solutions",
    "NorthStar Distribution",
    "Valley Food Processing",
    "Twin City Die Castings",
    "Midwest Plastics Group",
    "Logistics Pro International",
    "HealthFirst Medical",
    "Summit Support Services",
    "Target Distribution Center",
    "Modern Manufacturing",
    "Industrial Dynamics",
    "Greenway Solutions",
    "Precision Parts Inc.",
];

const GENERAL_SKILLS: &[&str] = &[
    "Safety Standards",
    "Teamwork",
    "Professional Reliability",
    "Attention to Detail",
    "Workflow Communication",
    "Time Management",
];

/// Generates one posting. Fresh postings are dated "Just Now".
pub fn generate_job(id: String, is_new: bool, rng: &mut dyn RandomSource) -> Job {
    let title = *pick(BASE_TITLES, rng);
    let location = *pick(MN_LOCATIONS, rng);
    let company = *pick(COMPANIES, rng);

    let pay_min = 17 + rng.index(18);
    let pay_max = pay_min + 2 + rng.index(6);

    let posted_date = if is_new {
        "Just Now".to_string()
    } else {
        match rng.index(14) {
            0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            days => format!("{days} days ago"),
        }
    };

    // Title-derived skill plus a handful of general ones, 3–5 in total
    let lead_skill = title.split(' ').next().unwrap_or(title);
    let mut skills: Vec<String> = std::iter::once(lead_skill)
        .chain(GENERAL_SKILLS.iter().copied())
        .map(str::to_string)
        .collect();
    shuffle(&mut skills, rng);
    skills.truncate(3 + rng.index(3));

    let employment_type = if rng.chance(0.2) {
        "Direct Hire"
    } else if rng.chance(0.5) {
        "Temp-to-Hire"
    } else {
        "Full-Time"
    };

    Job {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        pay_rate: format!("${pay_min}.00 - ${pay_max}.00 / hr"),
        posted_date,
        employment_type: employment_type.to_string(),
        description: format!(
            "Professional opportunity for a {title} in the {location} area. \
             Joining the team at {company}, you will follow standard operational procedures, \
             maintain safety records and work with cross-functional departments."
        ),
        requirements: vec![
            "High School Diploma or equivalent".to_string(),
            "Reliable commute/transportation".to_string(),
            "Commitment to workplace excellence".to_string(),
            format!("Relevant {title} experience preferred"),
        ],
        skills,
        years_experience: rng.index(8) as u32,
        is_new,
    }
}

/// Two hand-written postings that always lead the initial cache.
pub fn static_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "j101".to_string(),
            title: "General Labor / Warehouse".to_string(),
            company: "Logistics Pro International".to_string(),
            location: "Rogers, MN".to_string(),
            pay_rate: "$18.00 - $20.00 / hr".to_string(),
            posted_date: "2 days ago".to_string(),
            employment_type: "Full-Time".to_string(),
            description: "Immediate openings for general labor in a high-volume warehouse. \
                          Duties cover material handling, inventory organization \
                          and shipping preparation."
                .to_string(),
            requirements: vec![
                "Ability to lift standard industrial loads".to_string(),
                "Required safety gear compliance".to_string(),
                "Reliability and punctuality".to_string(),
                "Capacity for full-shift standing work".to_string(),
            ],
            skills: vec![
                "Material Handling".to_string(),
                "Warehouse Operations".to_string(),
                "Safety Compliance".to_string(),
            ],
            years_experience: 0,
            is_new: false,
        },
        Job {
            id: "j102".to_string(),
            title: "Forklift Operator".to_string(),
            company: "NorthStar Distribution".to_string(),
            location: "Fridley, MN".to_string(),
            pay_rate: "$22.50 / hr".to_string(),
            posted_date: "3 days ago".to_string(),
            employment_type: "Temp-to-Hire".to_string(),
            description: "Skilled forklift operation for a specialized storage facility. \
                          Manage delicate inventory and keep precise placement records."
                .to_string(),
            requirements: vec![
                "Recent certified forklift experience".to_string(),
                "Inventory tracking familiarity".to_string(),
                "Valid identification and documentation".to_string(),
            ],
            skills: vec![
                "Forklift Operation".to_string(),
                "Inventory Management".to_string(),
                "RF Scanning".to_string(),
            ],
            years_experience: 1,
            is_new: false,
        },
    ]
}

/// Static postings followed by `generated` random ones.
pub fn initial_dataset(generated: usize, rng: &mut dyn RandomSource) -> Vec<Job> {
    let mut jobs = static_jobs();
    jobs.extend((0..generated).map(|i| generate_job(format!("init-gen-{i}"), false, &mut *rng)));
    jobs
}
