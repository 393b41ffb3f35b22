use crate::{
    classifier::{ANALYSIS_MARKER, DRILLS_MARKER},
    sport::Sport,
};

/// Instruction sent alongside the frames.
pub fn coaching_prompt(sport: Sport) -> String {
    format!(
        r#"You are an expert {sport} coach reviewing a player's technique.

INPUT: {frames} still frames taken in order from a short clip of a {motion}, covering the
early, middle and late phases of the movement.

BEFORE ANSWERING:
1. Use web search to find instructional videos (YouTube preferred) about the faults you see
   and {sport} coaches or academies who teach this technique.
2. Use maps search to find {venue} where the player can practise.

OUTPUT exactly two sections with these headings and nothing before the first heading:

{analysis}
Numbered observations about stance, preparation, contact and follow-through. Name what is
done well, then the most important faults and why they matter.

{drills}
3-5 concrete drills that fix the faults above, each with a short description and
repetitions.

RULES:
- Base the analysis only on what is visible in the frames
- Keep each section under 300 words
- Do not list links in the text; sources are attached separately"#,
        sport = sport.name(),
        motion = sport.motion(),
        venue = sport.venue(),
        frames = crate::types::FRAME_COUNT,
        analysis = ANALYSIS_MARKER,
        drills = DRILLS_MARKER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_sport_and_both_headings() {
        for sport in Sport::ALL {
            let prompt = coaching_prompt(sport);
            assert!(prompt.contains(sport.name()));
            assert!(prompt.contains(ANALYSIS_MARKER));
            assert!(prompt.contains(DRILLS_MARKER));
            assert!(prompt.find(ANALYSIS_MARKER) < prompt.find(DRILLS_MARKER));
        }
    }

    #[test]
    fn prompt_asks_for_both_search_tools() {
        let prompt = coaching_prompt(Sport::Pickleball);
        assert!(prompt.contains("web search"));
        assert!(prompt.contains("maps search"));
        assert!(prompt.contains("pickleball courts"));
    }
}
