#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tapfield::config::Config;
use tapfield::domains::field::MapPreset;
use tapfield::domains::logger::{DomainLogger, DynLogger};

pub const AGENT_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const RUNNING_BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const CLOSED_GREY: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const ROCK_BROWN: Rgba<u8> = Rgba([120, 80, 40, 255]);
pub const FIELD_GREEN: Rgb<u8> = Rgb([0, 160, 0]);

/// Write a full set of solid-colour assets into `dir`.
pub fn write_assets(dir: &Path) {
    RgbaImage::from_pixel(8, 8, RUNNING_BLUE).save(dir.join("runningTap.png")).unwrap();
    RgbaImage::from_pixel(8, 8, CLOSED_GREY).save(dir.join("closedTap.png")).unwrap();
    RgbaImage::from_pixel(8, 8, AGENT_RED).save(dir.join("human.png")).unwrap();
    RgbaImage::from_pixel(8, 8, ROCK_BROWN).save(dir.join("rock.png")).unwrap();
    RgbImage::from_pixel(16, 16, FIELD_GREEN).save(dir.join("field.jpeg")).unwrap();
}

/// Small-raster configuration rooted in `dir` for both assets and output.
pub fn test_config(dir: &Path, preset: MapPreset) -> Config {
    let mut config = Config::default();
    config.session.preset = preset;
    config.assets.dir = Some(dir.to_path_buf());
    config.output.dir = dir.to_path_buf();
    config.render.pixels_per_unit = 4;
    config.render.gif_speed = 30;
    config
}

pub fn is_agent_red(pixel: &Rgba<u8>) -> bool {
    pixel[0] > 180 && pixel[1] < 100 && pixel[2] < 100
}

pub struct BridgeCapture {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl BridgeCapture {
    pub fn new() -> Self { Self { messages: Arc::new(Mutex::new(Vec::new())) } }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.lock().unwrap().iter().any(|m| m.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.messages.lock().unwrap().iter().filter(|m| m.contains(needle)).count()
    }
}

impl DomainLogger for BridgeCapture {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
}

pub fn capture_logger() -> (Arc<BridgeCapture>, DynLogger) {
    let capture = Arc::new(BridgeCapture::new());
    let logger = capture.clone() as DynLogger;
    (capture, logger)
}
