//! Frame sampling: four JPEG stills at fixed fractions of the clip.

use std::{
    io::Cursor,
    ops::{Deref, DerefMut},
    time::Duration,
};

use image::{DynamicImage, RgbaImage, codecs::jpeg::JpegEncoder, imageops};
use tracing::{debug, info};

use crate::{
    config::DEFAULT_SEEK_TIMEOUT_SECS,
    error::SampleError,
    types::{FRAME_COUNT, Frame, FrameSequence, VideoMetadata},
    video::VideoAsset,
};

/// Positions of the captured frames as fractions of the duration.
pub const CAPTURE_POINTS: [f64; FRAME_COUNT] = [0.2, 0.4, 0.6, 0.8];

/// JPEG quality used for every frame (0.6 on a 0..1 scale).
pub const JPEG_QUALITY: u8 = 60;

pub fn capture_timestamps(duration_secs: f64) -> [f64; FRAME_COUNT] {
    CAPTURE_POINTS.map(|p| duration_secs * p)
}

pub struct FrameSampler {
    seek_timeout: Duration,
    quality: u8,
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_SEEK_TIMEOUT_SECS))
    }
}

impl FrameSampler {
    pub fn new(seek_timeout: Duration) -> Self {
        Self {
            seek_timeout,
            quality: JPEG_QUALITY,
        }
    }

    /// Capture the four frames. Seeks run one after another on the asset's
    /// single decode cursor; any failure aborts the whole sequence.
    ///
    /// The asset is released before this returns, whatever the outcome, and
    /// also when the future is dropped mid-sampling.
    pub async fn sample<V>(&self, video: &mut V) -> Result<FrameSequence, SampleError>
    where
        V: VideoAsset + ?Sized,
    {
        let mut video = ReleaseOnDrop { video };

        let metadata = video.metadata().await?;
        validate(&metadata)?;

        let timestamps = capture_timestamps(metadata.duration_secs);
        let positions = seek_positions(&timestamps)?;
        info!(
            duration_secs = metadata.duration_secs,
            width = metadata.width,
            height = metadata.height,
            "sampling frames"
        );

        let mut frames = Vec::with_capacity(FRAME_COUNT);
        for (at_secs, at) in timestamps.into_iter().zip(positions) {
            tokio::time::timeout(self.seek_timeout, video.seek(at))
                .await
                .map_err(|_| SampleError::SeekTimeout {
                    at_secs,
                    timeout: self.seek_timeout,
                })??;

            let picture = video.current_frame()?;
            let frame = encode_frame(picture, &metadata, self.quality)?;
            debug!(at_secs, bytes = frame.len(), "captured frame");
            frames.push(frame);
        }

        let frames: [Frame; FRAME_COUNT] =
            frames
                .try_into()
                .map_err(|captured: Vec<Frame>| SampleError::Load {
                    reason: format!("expected {FRAME_COUNT} frames, captured {}", captured.len()),
                })?;

        Ok(FrameSequence::new(frames))
    }
}

fn seek_positions(
    timestamps: &[f64; FRAME_COUNT],
) -> Result<[Duration; FRAME_COUNT], SampleError> {
    let mut positions = [Duration::ZERO; FRAME_COUNT];
    for (position, &at_secs) in positions.iter_mut().zip(timestamps) {
        *position = Duration::try_from_secs_f64(at_secs).map_err(|e| SampleError::Load {
            reason: format!("timestamp {at_secs}s out of range: {e}"),
        })?;
    }
    Ok(positions)
}

fn validate(metadata: &VideoMetadata) -> Result<(), SampleError> {
    if !metadata.duration_secs.is_finite() || metadata.duration_secs <= 0.0 {
        return Err(SampleError::Load {
            reason: format!("invalid duration {}", metadata.duration_secs),
        });
    }
    if metadata.width == 0 || metadata.height == 0 {
        return Err(SampleError::Load {
            reason: format!("invalid dimensions {}x{}", metadata.width, metadata.height),
        });
    }
    Ok(())
}

/// Draw the decoded picture onto a canvas of the source's native size and
/// encode it as JPEG.
fn encode_frame(
    picture: RgbaImage,
    metadata: &VideoMetadata,
    quality: u8,
) -> Result<Frame, SampleError> {
    let canvas = if picture.dimensions() == (metadata.width, metadata.height) {
        picture
    } else {
        imageops::resize(
            &picture,
            metadata.width,
            metadata.height,
            imageops::FilterType::Triangle,
        )
    };

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality).encode_image(&rgb)?;

    Ok(Frame::from_jpeg(buffer.into_inner()))
}

struct ReleaseOnDrop<'a, V: VideoAsset + ?Sized> {
    video: &'a mut V,
}

impl<V: VideoAsset + ?Sized> Deref for ReleaseOnDrop<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.video
    }
}

impl<V: VideoAsset + ?Sized> DerefMut for ReleaseOnDrop<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.video
    }
}

impl<V: VideoAsset + ?Sized> Drop for ReleaseOnDrop<'_, V> {
    fn drop(&mut self) {
        self.video.release();
    }
}
