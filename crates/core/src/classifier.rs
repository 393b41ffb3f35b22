//! Splits a coaching answer into its two sections and sorts grounding
//! citations into display buckets.

use crate::types::{ClassifiedResult, GroundingCitation};

pub const ANALYSIS_MARKER: &str = "## ANALYSIS";
pub const DRILLS_MARKER: &str = "## DRILLS";

pub const ANALYSIS_PLACEHOLDER: &str = "No analysis available.";
pub const DRILLS_PLACEHOLDER: &str = "No drills available.";

const MAPS_URI_MARKERS: &[&str] = &["google.com/maps", "maps.google.", "maps.app.goo.gl"];

/// Words and phrases that identify retail sporting-goods venues. Matched on
/// whole words of the title, so "workshop" is not a shop.
const SHOP_MARKERS: &[&str] = &[
    "shop",
    "store",
    "outlet",
    "sporting goods",
    "decathlon",
    "dick's",
    "academy sports",
    "big 5",
    "walmart",
    "sports authority",
    "tennis warehouse",
    "pickleball central",
    "golf galaxy",
    "golfsmith",
    "play it again",
];

/// Retailer names that are also ordinary words; only the bare name counts.
const BARE_RETAILER_NAMES: &[&str] = &["target"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Videos,
    Places,
    Coaches,
}

type Rule = (Category, fn(&GroundingCitation) -> bool);

/// Checked top to bottom; a citation lands in the first category whose
/// predicate holds and is never tested against later ones.
const RULES: &[Rule] = &[
    (Category::Videos, is_video_content),
    (Category::Places, is_place),
    (Category::Coaches, is_coach),
];

pub fn classify(response_text: &str, citations: &[GroundingCitation]) -> ClassifiedResult {
    let (analysis_section, drills_section) = split_sections(response_text);

    let mut result = ClassifiedResult {
        analysis_section,
        drills_section,
        videos: Vec::new(),
        places: Vec::new(),
        coaches: Vec::new(),
    };

    for citation in citations {
        match categorize(citation) {
            Some(Category::Videos) => result.videos.push(citation.clone()),
            Some(Category::Places) => result.places.push(citation.clone()),
            Some(Category::Coaches) => result.coaches.push(citation.clone()),
            None => {}
        }
    }

    result
}

pub fn categorize(citation: &GroundingCitation) -> Option<Category> {
    if !is_well_formed(citation) {
        return None;
    }

    RULES
        .iter()
        .find(|(_, matches)| matches(citation))
        .map(|(category, _)| *category)
}

/// Returns `(analysis, drills)`, each trimmed and falling back to its
/// placeholder when empty.
pub fn split_sections(text: &str) -> (String, String) {
    let (before, after) = match text.find(DRILLS_MARKER) {
        Some(idx) => (&text[..idx], Some(&text[idx + DRILLS_MARKER.len()..])),
        None => (text, None),
    };

    let analysis = before.replacen(ANALYSIS_MARKER, "", 1);
    let drills = after.map(str::trim).unwrap_or_default();

    (
        or_placeholder(analysis.trim(), ANALYSIS_PLACEHOLDER),
        or_placeholder(drills, DRILLS_PLACEHOLDER),
    )
}

fn or_placeholder(section: &str, placeholder: &str) -> String {
    if section.is_empty() {
        placeholder.to_string()
    } else {
        section.to_string()
    }
}

/// A citation without a usable URI cannot be shown as a link and matches no
/// rule.
fn is_well_formed(citation: &GroundingCitation) -> bool {
    citation.uri().is_some_and(|uri| !uri.trim().is_empty())
}

fn lower_title(citation: &GroundingCitation) -> String {
    citation.title().unwrap_or_default().to_lowercase()
}

fn lower_uri(citation: &GroundingCitation) -> String {
    citation.uri().unwrap_or_default().to_lowercase()
}

pub fn is_video_content(citation: &GroundingCitation) -> bool {
    if !citation.is_web() {
        return false;
    }

    let title = lower_title(citation);
    let uri = lower_uri(citation);

    title.contains("youtube")
        || uri.contains("youtube")
        || uri.contains("youtu.be")
        || title.contains("video")
}

pub fn is_shop_or_store(citation: &GroundingCitation) -> bool {
    let title = lower_title(citation);
    let words: Vec<&str> = title
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .collect();

    if let [name] = words.as_slice()
        && BARE_RETAILER_NAMES.contains(name)
    {
        return true;
    }

    SHOP_MARKERS
        .iter()
        .any(|marker| contains_phrase(&words, marker))
}

/// Whole-word phrase match; a trailing plural "s" on a title word is allowed.
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let phrase: Vec<&str> = phrase.split(' ').collect();
    words.windows(phrase.len()).any(|window| {
        window
            .iter()
            .zip(&phrase)
            .all(|(word, want)| word == want || word.strip_suffix('s') == Some(want))
    })
}

fn has_maps_uri(citation: &GroundingCitation) -> bool {
    let uri = lower_uri(citation);
    MAPS_URI_MARKERS.iter().any(|marker| uri.contains(marker))
}

fn is_place(citation: &GroundingCitation) -> bool {
    (citation.is_maps() || has_maps_uri(citation)) && !is_shop_or_store(citation)
}

fn is_coach(citation: &GroundingCitation) -> bool {
    citation.is_web()
        && !is_video_content(citation)
        && !has_maps_uri(citation)
        && !is_shop_or_store(citation)
}
