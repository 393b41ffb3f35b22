use tracing::info;

use crate::{
    classifier::classify,
    coaches::{CoachDirectory, compose_coaches},
    error::Result,
    gemini::CoachingModel,
    sampler::FrameSampler,
    sport::Sport,
    types::{AnalysisReport, FrameSequence, ModelAnswer},
    video::VideoAsset,
};

/// Sample → ask the model → classify. Every call builds a fresh report.
pub struct Analyzer<M, D> {
    sampler: FrameSampler,
    model: M,
    directory: D,
}

impl<M: CoachingModel, D: CoachDirectory> Analyzer<M, D> {
    pub fn new(sampler: FrameSampler, model: M, directory: D) -> Self {
        Self {
            sampler,
            model,
            directory,
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    pub async fn sample<V: VideoAsset + ?Sized>(&self, video: &mut V) -> Result<FrameSequence> {
        Ok(self.sampler.sample(video).await?)
    }

    pub async fn ask(&self, sport: Sport, frames: &FrameSequence) -> Result<ModelAnswer> {
        self.model.analyze(sport, frames).await
    }

    pub fn report(&self, sport: Sport, frames: &FrameSequence, answer: &ModelAnswer) -> AnalysisReport {
        let result = classify(&answer.text, &answer.citations);
        info!(
            videos = result.videos.len(),
            places = result.places.len(),
            coaches = result.coaches.len(),
            dropped = answer.citations.len()
                - result.videos.len()
                - result.places.len()
                - result.coaches.len(),
            "classified citations"
        );

        let coaches = compose_coaches(&result.coaches, self.directory.featured_coaches(sport));

        AnalysisReport {
            sport,
            model: self.model.model_name().to_string(),
            frame_count: frames.as_slice().len(),
            result,
            coaches,
        }
    }

    pub async fn run<V: VideoAsset + ?Sized>(
        &self,
        video: &mut V,
        sport: Sport,
    ) -> Result<AnalysisReport> {
        let frames = self.sample(video).await?;
        let answer = self.ask(sport, &frames).await?;
        Ok(self.report(sport, &frames, &answer))
    }
}
