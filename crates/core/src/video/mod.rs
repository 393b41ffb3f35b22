pub mod ffmpeg;

pub use ffmpeg::FfmpegVideo;

use std::time::Duration;

use async_trait::async_trait;
use image::RgbaImage;

use crate::{error::SampleError, types::VideoMetadata};

/// Handle to a decodable video with a single seek cursor.
#[async_trait]
pub trait VideoAsset: Send {
    /// Resolves once duration and dimensions are known.
    async fn metadata(&mut self) -> Result<VideoMetadata, SampleError>;

    /// Move the cursor to `at`; resolves once a frame at that position is
    /// decoded and readable through [`VideoAsset::current_frame`].
    async fn seek(&mut self, at: Duration) -> Result<(), SampleError>;

    /// The picture under the cursor.
    fn current_frame(&self) -> Result<RgbaImage, SampleError>;

    /// Drop whatever was opened to read the source. Must be idempotent.
    fn release(&mut self);
}
