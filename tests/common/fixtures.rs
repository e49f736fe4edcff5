//! Test fixtures: generated input images in a temporary directory.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Nominal ACeP colors in palette order
pub const NOMINAL: [[u8; 3]; 7] = [
    [0, 0, 0],
    [255, 255, 255],
    [0, 128, 0],
    [0, 0, 255],
    [255, 0, 0],
    [255, 255, 0],
    [255, 128, 0],
];

/// Measured ACeP colors in palette order
pub const MEASURED: [[u8; 3]; 7] = [
    [0, 0, 0],
    [255, 255, 255],
    [0, 100, 0],
    [0, 0, 180],
    [180, 0, 0],
    [200, 200, 0],
    [200, 100, 0],
];

/// A scratch directory that is removed when dropped
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a horizontal hue sweep over a vertical brightness ramp
    pub fn gradient(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let t = x as f32 / width.max(1) as f32;
            let v = 1.0 - y as f32 / height.max(1) as f32;
            let (r, g, b) = hue(t);
            Rgb([
                (r * v * 255.0) as u8,
                (g * v * 255.0) as u8,
                (b * v * 255.0) as u8,
            ])
        });
        self.save(name, &img)
    }

    /// Write a single-color image
    pub fn solid(&self, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
        self.save(name, &RgbImage::from_pixel(width, height, Rgb(color)))
    }

    /// Write a YAML config file
    pub fn config(&self, yaml: &str) -> PathBuf {
        let path = self.path("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    fn save(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.path(name);
        img.save(&path).expect("Failed to write fixture image");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully saturated hue at `t` in 0..1
fn hue(t: f32) -> (f32, f32, f32) {
    let h = (t * 6.0) % 6.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    }
}

/// True if `path` exists and is non-empty
pub fn written(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
