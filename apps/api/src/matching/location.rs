//! Location tiers. The rules are plain string heuristics: a city segment compare and a
//! configurable list of region markers (e.g. a state abbreviation) that two locations
//! may share.

/// Text before the first comma, trimmed and lower-cased.
pub fn city_segment(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Whether the job's city segment appears inside the candidate's city segment.
pub fn city_contains(job_location: &str, candidate_location: &str) -> bool {
    city_segment(candidate_location).contains(&city_segment(job_location))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRules {
    /// Case-sensitive substrings; two locations sharing any marker are the same region.
    pub region_markers: Vec<String>,
}

impl Default for LocationRules {
    fn default() -> Self {
        Self {
            region_markers: vec!["MN".to_string()],
        }
    }
}

impl LocationRules {
    pub fn new(region_markers: Vec<String>) -> Self {
        Self { region_markers }
    }

    pub fn shares_region(&self, a: &str, b: &str) -> bool {
        self.region_markers
            .iter()
            .filter(|m| !m.is_empty())
            .any(|m| a.contains(m.as_str()) && b.contains(m.as_str()))
    }

    /// 100 same city, 60 same region, 20 otherwise.
    pub fn tier_score(&self, job_location: &str, candidate_location: &str) -> f64 {
        if city_segment(job_location) == city_segment(candidate_location) {
            100.0
        } else if self.shares_region(job_location, candidate_location) {
            60.0
        } else {
            20.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_segment_trims_and_lowercases() {
        assert_eq!(city_segment("  St. Paul , MN"), "st. paul");
        assert_eq!(city_segment("Remote"), "remote");
        assert_eq!(city_segment(""), "");
    }

    #[test]
    fn test_tier_exact_city() {
        let rules = LocationRules::default();
        assert_eq!(rules.tier_score("Eagan, MN", "eagan, Minnesota"), 100.0);
    }

    #[test]
    fn test_tier_same_region() {
        let rules = LocationRules::default();
        assert_eq!(rules.tier_score("Eagan, MN", "Duluth, MN"), 60.0);
    }

    #[test]
    fn test_tier_other() {
        let rules = LocationRules::default();
        assert_eq!(rules.tier_score("Eagan, MN", "Madison, WI"), 20.0);
    }

    #[test]
    fn test_custom_region_markers() {
        let rules = LocationRules::new(vec!["WI".to_string()]);
        assert_eq!(rules.tier_score("Madison, WI", "Green Bay, WI"), 60.0);
        assert_eq!(rules.tier_score("Eagan, MN", "Duluth, MN"), 20.0);
    }

    #[test]
    fn test_empty_marker_never_matches() {
        let rules = LocationRules::new(vec![String::new()]);
        assert!(!rules.shares_region("Eagan, MN", "Madison, WI"));
    }

    #[test]
    fn test_city_contains_direction() {
        assert!(city_contains("Paul, MN", "St. Paul, MN"));
        assert!(!city_contains("St. Paul, MN", "Paul, MN"));
    }
}
