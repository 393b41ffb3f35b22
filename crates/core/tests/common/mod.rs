#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use swingcoach_core::{
    AnalysisError, CoachingModel, FrameSequence, ModelAnswer, SampleError, Sport, VideoAsset,
    VideoMetadata,
};

#[derive(Clone, Copy)]
pub enum SeekBehaviour {
    Land,
    Fail,
    Hang,
}

/// In-memory video whose seeks follow a script.
pub struct ScriptedVideo {
    pub metadata: Option<VideoMetadata>,
    pub picture_size: (u32, u32),
    pub script: Vec<SeekBehaviour>,
    pub seeks: Vec<Duration>,
    pub release_count: usize,
    current: Option<RgbaImage>,
}

impl ScriptedVideo {
    pub fn new(duration_secs: f64, width: u32, height: u32) -> Self {
        Self {
            metadata: Some(VideoMetadata {
                duration_secs,
                width,
                height,
            }),
            picture_size: (width, height),
            script: Vec::new(),
            seeks: Vec::new(),
            release_count: 0,
            current: None,
        }
    }

    pub fn unloadable() -> Self {
        Self {
            metadata: None,
            ..Self::new(1.0, 1, 1)
        }
    }

    pub fn with_script(mut self, script: Vec<SeekBehaviour>) -> Self {
        self.script = script;
        self
    }
}

#[async_trait]
impl VideoAsset for ScriptedVideo {
    async fn metadata(&mut self) -> Result<VideoMetadata, SampleError> {
        self.metadata.ok_or(SampleError::Load {
            reason: "unsupported codec".to_string(),
        })
    }

    async fn seek(&mut self, at: Duration) -> Result<(), SampleError> {
        let index = self.seeks.len();
        self.seeks.push(at);

        match self.script.get(index).copied().unwrap_or(SeekBehaviour::Land) {
            SeekBehaviour::Land => {
                let shade = (index as u8).wrapping_mul(60);
                let (w, h) = self.picture_size;
                self.current = Some(RgbaImage::from_pixel(w, h, Rgba([shade, 120, 200, 255])));
                Ok(())
            }
            SeekBehaviour::Fail => Err(SampleError::Seek {
                at_secs: at.as_secs_f64(),
                reason: "decoder error".to_string(),
            }),
            SeekBehaviour::Hang => std::future::pending().await,
        }
    }

    fn current_frame(&self) -> Result<RgbaImage, SampleError> {
        self.current.clone().ok_or(SampleError::Load {
            reason: "nothing decoded".to_string(),
        })
    }

    fn release(&mut self) {
        self.release_count += 1;
        self.current = None;
    }
}

/// Model that answers with a canned response.
pub struct CannedModel {
    pub answer: Result<ModelAnswer, String>,
}

#[async_trait]
impl CoachingModel for CannedModel {
    fn model_name(&self) -> &str {
        "canned-model"
    }

    async fn analyze(
        &self,
        _sport: Sport,
        frames: &FrameSequence,
    ) -> Result<ModelAnswer, AnalysisError> {
        assert_eq!(frames.as_slice().len(), 4);
        self.answer
            .clone()
            .map_err(|message| AnalysisError::ApiStatus {
                status: 500,
                message,
            })
    }
}
