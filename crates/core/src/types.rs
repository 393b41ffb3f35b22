use serde::{Deserialize, Serialize};

use crate::sport::Sport;

/// A single JPEG-encoded still taken from the source video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    jpeg: Vec<u8>,
}

impl Frame {
    pub fn from_jpeg(jpeg: Vec<u8>) -> Self {
        Self { jpeg }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    pub fn len(&self) -> usize {
        self.jpeg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jpeg.is_empty()
    }
}

/// Number of frames taken per video.
pub const FRAME_COUNT: usize = 4;

/// Frames in temporal order, taken at 20%, 40%, 60% and 80% of the duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: [Frame; FRAME_COUNT],
}

impl FrameSequence {
    pub fn new(frames: [Frame; FRAME_COUNT]) -> Self {
        Self { frames }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Frame] {
        &self.frames
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Video properties needed to plan the capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMetadata {
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebCitation {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsCitation {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Source reference attached to a grounded model answer.
///
/// Serialized the way Gemini reports grounding chunks: `{"web": {..}}` or
/// `{"maps": {..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundingCitation {
    Web(WebCitation),
    Maps(MapsCitation),
}

impl GroundingCitation {
    pub fn web(title: &str, uri: &str) -> Self {
        GroundingCitation::Web(WebCitation {
            uri: Some(uri.to_string()),
            title: Some(title.to_string()),
        })
    }

    pub fn maps(title: &str, uri: &str) -> Self {
        GroundingCitation::Maps(MapsCitation {
            uri: Some(uri.to_string()),
            title: Some(title.to_string()),
            ..Default::default()
        })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            GroundingCitation::Web(w) => w.title.as_deref(),
            GroundingCitation::Maps(m) => m.title.as_deref(),
        }
    }

    pub fn uri(&self) -> Option<&str> {
        match self {
            GroundingCitation::Web(w) => w.uri.as_deref(),
            GroundingCitation::Maps(m) => m.uri.as_deref(),
        }
    }

    pub fn is_web(&self) -> bool {
        matches!(self, GroundingCitation::Web(_))
    }

    pub fn is_maps(&self) -> bool {
        matches!(self, GroundingCitation::Maps(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    pub analysis_section: String,
    pub drills_section: String,
    pub videos: Vec<GroundingCitation>,
    pub places: Vec<GroundingCitation>,
    pub coaches: Vec<GroundingCitation>,
}

/// Raw answer returned by the model before classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelAnswer {
    pub text: String,
    pub citations: Vec<GroundingCitation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachProfile {
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub sport: Sport,
    pub model: String,
    pub frame_count: usize,
    pub result: ClassifiedResult,
    /// Classified coach citations first, then directory entries not already cited.
    pub coaches: Vec<CoachProfile>,
}
