//! I/O helpers for images and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into per-channel float grids.
//! - `save_edge_map`: write a final edge map as an RGBA PNG with pixels
//!   `(gray, gray, gray, 255)`.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, RgbaImageF32};
use image::{Rgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and split it into normalized RGBA channel grids.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbaImageF32::from_rgba8(width, height, &data))
}

/// Save an edge map to an RGBA PNG, mapping each value to a gray pixel with
/// full alpha. Values are scaled by 255 and clamped to [0, 255].
pub fn save_edge_map(map: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbaImage::new(map.w as u32, map.h as u32);
    for y in 0..map.h {
        let row = map.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0) as u8;
            out.put_pixel(x as u32, y as u32, Rgba([v, v, v, 255]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
