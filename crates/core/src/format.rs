use crate::types::{AnalysisReport, GroundingCitation};

fn citation_line(citation: &GroundingCitation) -> String {
    let title = citation.title().unwrap_or("Untitled");
    match citation.uri() {
        Some(uri) => format!("• {} - {}\n", title, uri),
        None => format!("• {}\n", title),
    }
}

/// Format an analysis report as human-readable markdown
pub fn format_report_readable(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {} technique review\n\n", report.sport));
    output.push_str(&format!(
        "**Model:** {} | **Frames:** {}\n\n",
        report.model, report.frame_count
    ));

    output.push_str("## Analysis\n\n");
    output.push_str(&report.result.analysis_section);
    output.push_str("\n\n");

    output.push_str("## Drills\n\n");
    output.push_str(&report.result.drills_section);
    output.push_str("\n\n");

    if !report.result.videos.is_empty() {
        output.push_str("## Videos\n\n");
        for video in &report.result.videos {
            output.push_str(&citation_line(video));
        }
        output.push('\n');
    }

    if !report.result.places.is_empty() {
        output.push_str("## Places to practise\n\n");
        for place in &report.result.places {
            output.push_str(&citation_line(place));
        }
        output.push('\n');
    }

    if !report.coaches.is_empty() {
        output.push_str("## Coaches\n\n");
        for coach in &report.coaches {
            output.push_str(&format!("• {} ({})", coach.name, coach.specialty));
            if !coach.location.is_empty() {
                output.push_str(&format!(", {}", coach.location));
            }
            if let Some(uri) = &coach.uri {
                output.push_str(&format!(" - {}", uri));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use crate::{
        sport::Sport,
        types::{ClassifiedResult, CoachProfile},
    };

    use super::*;

    fn report(videos: Vec<GroundingCitation>, places: Vec<GroundingCitation>) -> AnalysisReport {
        AnalysisReport {
            sport: Sport::Golf,
            model: "gemini-2.5-flash".to_string(),
            frame_count: 4,
            result: ClassifiedResult {
                analysis_section: "Head moves on the backswing.".to_string(),
                drills_section: "Alignment stick drill.".to_string(),
                videos,
                places,
                coaches: Vec::new(),
            },
            coaches: vec![CoachProfile {
                name: "Grace Kim".to_string(),
                specialty: "Short game".to_string(),
                location: "San Diego, CA".to_string(),
                uri: None,
            }],
        }
    }

    #[test]
    fn renders_sections_and_suggestions() {
        let output = format_report_readable(&report(
            vec![GroundingCitation::web("Swing video", "https://youtu.be/s")],
            vec![GroundingCitation::maps("Range", "https://maps.google.com/?cid=9")],
        ));

        assert!(output.starts_with("# Golf technique review"));
        assert!(output.contains("## Analysis\n\nHead moves on the backswing."));
        assert!(output.contains("## Drills\n\nAlignment stick drill."));
        assert!(output.contains("• Swing video - https://youtu.be/s"));
        assert!(output.contains("• Range - https://maps.google.com/?cid=9"));
        assert!(output.contains("• Grace Kim (Short game), San Diego, CA"));
    }

    #[test]
    fn empty_lists_are_omitted() {
        let output = format_report_readable(&report(Vec::new(), Vec::new()));
        assert!(!output.contains("## Videos"));
        assert!(!output.contains("## Places"));
    }
}
