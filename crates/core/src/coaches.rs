use std::collections::HashSet;

use crate::{
    sport::Sport,
    types::{CoachProfile, GroundingCitation},
};

/// Source of coach entries shown next to the ones found by web search.
pub trait CoachDirectory: Send + Sync {
    fn featured_coaches(&self, sport: Sport) -> Vec<CoachProfile>;
}

/// Built-in featured coaches.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCoachDirectory;

fn coach(name: &str, specialty: &str, location: &str) -> CoachProfile {
    CoachProfile {
        name: name.to_string(),
        specialty: specialty.to_string(),
        location: location.to_string(),
        uri: None,
    }
}

impl CoachDirectory for StaticCoachDirectory {
    fn featured_coaches(&self, sport: Sport) -> Vec<CoachProfile> {
        match sport {
            Sport::Tennis => vec![
                coach("Elena Marquez", "Serve mechanics", "Austin, TX"),
                coach("David Okafor", "Junior development", "Atlanta, GA"),
            ],
            Sport::Pickleball => vec![
                coach("Sam Whitaker", "Dinking and third-shot drops", "Naples, FL"),
                coach("Priya Raman", "Beginner clinics", "Seattle, WA"),
            ],
            Sport::Golf => vec![
                coach("Tom Lindqvist", "Full swing and ball striking", "Scottsdale, AZ"),
                coach("Grace Kim", "Short game", "San Diego, CA"),
            ],
            Sport::Badminton => vec![coach("Wei Chen", "Footwork and smashes", "San Jose, CA")],
            Sport::TableTennis => vec![coach("Marko Petrovic", "Spin and serve", "New York, NY")],
            Sport::Padel => vec![coach("Lucia Ferrer", "Wall play", "Miami, FL")],
            Sport::Baseball => vec![
                coach("Andre Bell", "Hitting mechanics", "Phoenix, AZ"),
                coach("Kenji Sato", "Pitching", "Los Angeles, CA"),
            ],
            Sport::Basketball => vec![coach("Jasmine Ortiz", "Shooting form", "Chicago, IL")],
        }
    }
}

impl CoachProfile {
    /// Coach suggestion built from a web search citation.
    pub fn from_citation(citation: &GroundingCitation) -> Option<Self> {
        let uri = citation.uri()?.to_string();
        let name = citation
            .title()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&uri)
            .to_string();

        Some(Self {
            name,
            specialty: "Found via web search".to_string(),
            location: String::new(),
            uri: Some(uri),
        })
    }
}

/// Classified coaches first, then directory entries not already present by
/// URI or name.
pub fn compose_coaches(
    classified: &[GroundingCitation],
    featured: Vec<CoachProfile>,
) -> Vec<CoachProfile> {
    let mut coaches: Vec<CoachProfile> = classified
        .iter()
        .filter_map(CoachProfile::from_citation)
        .collect();

    let mut seen_uris: HashSet<String> = coaches.iter().filter_map(|c| c.uri.clone()).collect();
    let mut seen_names: HashSet<String> = coaches.iter().map(|c| c.name.to_lowercase()).collect();

    for profile in featured {
        if let Some(uri) = &profile.uri
            && !seen_uris.insert(uri.clone())
        {
            continue;
        }
        if !seen_names.insert(profile.name.to_lowercase()) {
            continue;
        }
        coaches.push(profile);
    }

    coaches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sport_has_featured_coaches() {
        for sport in Sport::ALL {
            assert!(!StaticCoachDirectory.featured_coaches(sport).is_empty());
        }
    }

    #[test]
    fn classified_coaches_come_first() {
        let classified = vec![GroundingCitation::web("Coach Maria", "https://maria.example")];
        let featured = StaticCoachDirectory.featured_coaches(Sport::Tennis);

        let coaches = compose_coaches(&classified, featured.clone());
        assert_eq!(coaches.len(), featured.len() + 1);
        assert_eq!(coaches[0].name, "Coach Maria");
        assert_eq!(coaches[0].uri.as_deref(), Some("https://maria.example"));
    }

    #[test]
    fn duplicates_by_uri_or_name_are_skipped() {
        let classified = vec![GroundingCitation::web("Elena Marquez", "https://elena.example")];
        let mut featured = StaticCoachDirectory.featured_coaches(Sport::Tennis);
        featured.push(CoachProfile {
            name: "Someone Else".to_string(),
            specialty: "Volleys".to_string(),
            location: "Boston, MA".to_string(),
            uri: Some("https://elena.example".to_string()),
        });

        let coaches = compose_coaches(&classified, featured);
        let names: Vec<_> = coaches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Elena Marquez", "David Okafor"]);
    }

    #[test]
    fn untitled_citation_uses_uri_as_name() {
        let citation = GroundingCitation::web("  ", "https://coach.example");
        let profile = CoachProfile::from_citation(&citation).unwrap();
        assert_eq!(profile.name, "https://coach.example");
    }
}
