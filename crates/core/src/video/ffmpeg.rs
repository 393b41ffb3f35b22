use std::{
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use async_trait::async_trait;
use image::RgbaImage;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::{error::SampleError, types::VideoMetadata, video::VideoAsset};

/// Local video file read through the ffmpeg command-line tools.
///
/// Each seek decodes exactly one frame at the requested position, scaled to
/// the reported dimensions, and keeps it as the current picture.
pub struct FfmpegVideo {
    path: PathBuf,
    metadata: Option<VideoMetadata>,
    current: Option<RgbaImage>,
    released: bool,
}

#[derive(Deserialize)]
struct StreamInfo {
    #[serde(default)]
    streams: Vec<StreamEntry>,
    format: Option<FormatEntry>,
}

#[derive(Deserialize)]
struct StreamEntry {
    width: Option<u32>,
    height: Option<u32>,
    #[serde(default)]
    tags: Option<StreamTags>,
    #[serde(default)]
    side_data_list: Vec<SideData>,
}

#[derive(Deserialize)]
struct StreamTags {
    rotate: Option<String>,
}

#[derive(Deserialize)]
struct SideData {
    rotation: Option<f64>,
}

impl StreamEntry {
    /// Display rotation in degrees; side data wins over the legacy tag.
    fn rotation(&self) -> f64 {
        self.side_data_list
            .iter()
            .find_map(|d| d.rotation)
            .or_else(|| {
                self.tags
                    .as_ref()
                    .and_then(|t| t.rotate.as_deref())
                    .and_then(|r| r.trim().parse::<f64>().ok())
            })
            .unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
struct FormatEntry {
    duration: Option<String>,
}

impl FfmpegVideo {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SampleError> {
        let path = path.into();
        if !path.is_file() {
            return Err(SampleError::Load {
                reason: format!("{} is not a readable file", path.display()),
            });
        }

        Ok(Self {
            path,
            metadata: None,
            current: None,
            released: false,
        })
    }

    fn ensure_open(&self) -> Result<(), SampleError> {
        if self.released {
            return Err(SampleError::Load {
                reason: format!("{} was already released", self.path.display()),
            });
        }
        Ok(())
    }

    async fn read_stream_info(path: &Path) -> Result<VideoMetadata, SampleError> {
        let output = Command::new("ffprobe")
            .arg("-v")
            .arg("error")
            .arg("-select_streams")
            .arg("v:0")
            .arg("-show_entries")
            .arg("stream=width,height:stream_tags=rotate:stream_side_data=rotation:format=duration")
            .arg("-of")
            .arg("json")
            .arg(path)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(SampleError::Load {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_stream_info(&output.stdout)
    }

    async fn decode_frame_at(
        path: &Path,
        at: Duration,
        metadata: &VideoMetadata,
    ) -> Result<RgbaImage, SampleError> {
        let at_secs = at.as_secs_f64();
        let output = Command::new("ffmpeg")
            .arg("-v")
            .arg("error")
            .arg("-ss")
            .arg(format!("{at_secs:.3}"))
            .arg("-i")
            .arg(path)
            .arg("-frames:v")
            .arg("1")
            .arg("-vf")
            .arg(format!("scale={}:{}", metadata.width, metadata.height))
            .arg("-f")
            .arg("rawvideo")
            .arg("-pix_fmt")
            .arg("rgba")
            .arg("pipe:1")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(SampleError::Seek {
                at_secs,
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let expected = metadata.width as usize * metadata.height as usize * 4;
        if output.stdout.len() < expected {
            return Err(SampleError::Seek {
                at_secs,
                reason: format!(
                    "decoder produced {} bytes, expected {}",
                    output.stdout.len(),
                    expected
                ),
            });
        }

        let mut data = output.stdout;
        data.truncate(expected);

        RgbaImage::from_raw(metadata.width, metadata.height, data).ok_or(SampleError::Seek {
            at_secs,
            reason: "decoded buffer does not match frame size".to_string(),
        })
    }
}

fn parse_stream_info(stdout: &[u8]) -> Result<VideoMetadata, SampleError> {
    let info: StreamInfo = serde_json::from_slice(stdout).map_err(|e| SampleError::Load {
        reason: format!("unreadable stream info: {e}"),
    })?;

    let stream = info.streams.first().ok_or(SampleError::Load {
        reason: "no video stream".to_string(),
    })?;

    let duration_secs = info
        .format
        .and_then(|f| f.duration)
        .and_then(|d| d.trim().parse::<f64>().ok())
        .ok_or(SampleError::Load {
            reason: "duration unavailable".to_string(),
        })?;

    // ffmpeg auto-rotates on decode, so report the displayed size
    let (coded_width, coded_height) = (stream.width.unwrap_or(0), stream.height.unwrap_or(0));
    let quarter_turn = (stream.rotation().round() as i64).rem_euclid(180) == 90;
    let (width, height) = if quarter_turn {
        (coded_height, coded_width)
    } else {
        (coded_width, coded_height)
    };

    Ok(VideoMetadata {
        duration_secs,
        width,
        height,
    })
}

#[async_trait]
impl VideoAsset for FfmpegVideo {
    async fn metadata(&mut self) -> Result<VideoMetadata, SampleError> {
        self.ensure_open()?;
        if let Some(metadata) = self.metadata {
            return Ok(metadata);
        }

        let metadata = Self::read_stream_info(&self.path).await?;
        debug!(path = %self.path.display(), ?metadata, "read video metadata");
        self.metadata = Some(metadata);
        Ok(metadata)
    }

    async fn seek(&mut self, at: Duration) -> Result<(), SampleError> {
        let metadata = self.metadata().await?;
        self.current = None;
        let picture = Self::decode_frame_at(&self.path, at, &metadata).await?;
        self.current = Some(picture);
        Ok(())
    }

    fn current_frame(&self) -> Result<RgbaImage, SampleError> {
        self.ensure_open()?;
        self.current.clone().ok_or(SampleError::Load {
            reason: "no frame decoded yet".to_string(),
        })
    }

    fn release(&mut self) {
        if !self.released {
            debug!(path = %self.path.display(), "released video");
        }
        self.current = None;
        self.released = true;
    }
}
