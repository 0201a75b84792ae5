//! Single-pass hysteresis linking.
//!
//! A weak pixel becomes an edge (value 1) only if one of its 8-connected
//! neighbors is strong in the *original* classification; otherwise it is
//! discarded. The pass is deliberately not transitive: promoted weak pixels
//! do not recruit further weak pixels. Every non-weak pixel passes its value
//! through unchanged, which carries strong pixels (already 1) and suppressed
//! pixels (already 0) forward.
use super::nms::EdgeClassification;
use crate::image::ImageF32;

/// Promote weak pixels adjacent to strong pixels; discard the rest.
pub fn link_edges(class: &EdgeClassification) -> ImageF32 {
    let w = class.value.w;
    let h = class.value.h;
    let mut out = ImageF32::new(w, h);
    if class.value.is_empty() {
        return out;
    }

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            out.data[idx] = if class.weak[idx] {
                if has_strong_neighbor(class, x, y) {
                    1.0
                } else {
                    0.0
                }
            } else {
                class.value.data[idx]
            };
        }
    }
    out
}

/// Scan the 8-connected neighborhood with border-clamped indices. A border
/// pixel's missing neighbors clamp onto already-inspected cells (or itself,
/// which is weak, never strong), so no extra bounds handling is needed.
fn has_strong_neighbor(class: &EdgeClassification, x: usize, y: usize) -> bool {
    let w = class.value.w as isize;
    let h = class.value.h as isize;
    for dy in -1..=1isize {
        for dx in -1..=1isize {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = (x as isize + dx).clamp(0, w - 1) as usize;
            let ny = (y as isize + dy).clamp(0, h - 1) as usize;
            if class.is_strong(nx, ny) {
                return true;
            }
        }
    }
    false
}
