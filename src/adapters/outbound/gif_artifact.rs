use crate::common::{DomainError, DomainResult};
use crate::config::{AnimationConfig, OutputConfig, RenderConfig};
use crate::domains::animation::{ArtifactEncoder, Snapshot};
use chrono::{DateTime, Local, TimeZone};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `{prefix}{separator}{YYYYMMDD_HHMMSS}.gif`
pub fn artifact_filename<Tz: TimeZone>(prefix: &str, separator: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}{}.gif", prefix, separator, at.format(TIMESTAMP_FORMAT))
}

/// Writes snapshots as one looping GIF with a fixed per-frame delay.
#[derive(Debug, Clone)]
pub struct GifArtifactEncoder {
    output_dir: PathBuf,
    separator: String,
    frame_duration_ms: u32,
    loop_count: u16,
    speed: i32,
}

impl GifArtifactEncoder {
    pub fn new(output: &OutputConfig, animation: &AnimationConfig, render: &RenderConfig) -> Self {
        Self {
            output_dir: output.dir.clone(),
            separator: output.separator.clone(),
            frame_duration_ms: animation.frame_duration_ms,
            loop_count: animation.loop_count,
            speed: render.gif_speed.clamp(1, 30),
        }
    }
}

impl GifArtifactEncoder {
    fn write_frames(&self, path: &Path, snapshots: &[Snapshot]) -> DomainResult<()> {
        let file = File::create(path)?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), self.speed);
        encoder.set_repeat(Repeat::Finite(self.loop_count))?;

        let delay = Delay::from_numer_denom_ms(self.frame_duration_ms, 1);
        for snapshot in snapshots {
            encoder.encode_frame(Frame::from_parts(snapshot.image.clone(), 0, 0, delay))?;
        }
        Ok(())
    }
}

impl ArtifactEncoder for GifArtifactEncoder {
    fn encode(&self, snapshots: &[Snapshot], prefix: &str) -> DomainResult<PathBuf> {
        if snapshots.is_empty() {
            return Err(DomainError::EmptyArtifact);
        }

        let path = self
            .output_dir
            .join(artifact_filename(prefix, &self.separator, &Local::now()));
        if let Err(e) = self.write_frames(&path, snapshots) {
            let _ = fs::remove_file(&path);
            return Err(e);
        }

        info!(path = %path.display(), frames = snapshots.len(), "wrote animation artifact");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_filename_layout() {
        let at = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(7, 5, 31)
                .unwrap(),
        );
        assert_eq!(artifact_filename("run", "_", &at), "run_20240309_070531.gif");
        assert_eq!(artifact_filename("bfs", "._", &at), "bfs._20240309_070531.gif");
    }

    #[test]
    fn test_empty_snapshots_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let encoder = GifArtifactEncoder::new(
            &OutputConfig { dir: dir.path().to_path_buf(), ..OutputConfig::default() },
            &AnimationConfig::default(),
            &RenderConfig::default(),
        );
        assert!(matches!(encoder.encode(&[], "run"), Err(DomainError::EmptyArtifact)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let encoder = GifArtifactEncoder::new(
            &OutputConfig { dir: dir.path().to_path_buf(), ..OutputConfig::default() },
            &AnimationConfig::default(),
            &RenderConfig { gif_speed: 30, ..RenderConfig::default() },
        );
        // GIF frames are limited to u16 dimensions.
        let snapshots = [
            Snapshot { index: 0, node: 1, image: image::RgbaImage::new(4, 4) },
            Snapshot { index: 1, node: 2, image: image::RgbaImage::new(u32::from(u16::MAX) + 1, 1) },
        ];
        assert!(encoder.encode(&snapshots, "run").is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
