mod common;

use common::synthetic_image::{uniform_rgba, vertical_line_rgba, vertical_step_rgba};
use edge_detector::image::io::save_edge_map;
use edge_detector::prelude::*;

fn detect(width: usize, height: usize, rgba: &[u8]) -> EdgeReport {
    let image = RgbaImageF32::from_rgba8(width, height, rgba);
    EdgeDetector::new(EdgeParams::default()).process_with_diagnostics(&image)
}

#[test]
fn all_black_image_yields_an_all_black_edge_map() {
    let report = detect(3, 3, &uniform_rgba(3, 3, [0, 0, 0, 255]));

    assert_eq!(report.max_gradient, 0.0);
    assert_eq!(report.strong_pixels, 0);
    assert_eq!(report.weak_pixels, 0);
    assert!(report.edge_map.data.iter().all(|&v| v == 0.0));

    // Round-trip through the encoder: every pixel must come back (0, 0, 0, 255).
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("black.png");
    save_edge_map(&report.edge_map, &path).expect("save edge map");
    let decoded = image::open(&path).expect("reopen edge map").into_rgba8();
    assert_eq!(decoded.dimensions(), (3, 3));
    for px in decoded.pixels() {
        assert_eq!(px.0, [0, 0, 0, 255]);
    }
}

#[test]
fn uniform_color_image_suppresses_every_pixel() {
    let report = detect(8, 6, &uniform_rgba(8, 6, [90, 140, 200, 255]));

    assert_eq!(report.strong_pixels, 0);
    assert_eq!(report.weak_pixels, 0);
    assert!(report.edge_map.data.iter().all(|&v| v == 0.0));
}

#[test]
fn one_pixel_vertical_line_marks_the_gradient_ridges_strong() {
    // A white line at column 2 of a 5x5 black image. The blurred profile is
    // symmetric about the line, so the Sobel response is zero on the line
    // itself and peaks on the flanking columns 1 and 3, which survive the
    // east-west non-max comparison and classify strong.
    let report = detect(5, 5, &vertical_line_rgba(5, 5, 2));
    let map = &report.edge_map;

    for y in 0..5 {
        assert_eq!(map.get(1, y), 1.0, "ridge column 1, row {y}");
        assert_eq!(map.get(3, y), 1.0, "ridge column 3, row {y}");
        for x in [0, 2, 4] {
            assert_eq!(map.get(x, y), 0.0, "column {x}, row {y}");
        }
    }

    // Round-trip: ridge columns encode white, the rest black, alpha opaque.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("line.png");
    save_edge_map(map, &path).expect("save edge map");
    let decoded = image::open(&path).expect("reopen edge map").into_rgba8();
    for (x, _, px) in decoded.enumerate_pixels() {
        let expected = if x == 1 || x == 3 { 255 } else { 0 };
        assert_eq!(px.0, [expected, expected, expected, 255]);
    }
}

#[test]
fn vertical_step_edge_marks_the_boundary_columns_strong() {
    // Black columns 0..3, white columns 3..6. The strongest gradient sits on
    // the two columns flanking the boundary; which of the two wins the >=
    // comparison can come down to rounding, but at least one must survive
    // and everything away from the boundary must stay 0.
    let report = detect(6, 4, &vertical_step_rgba(6, 4, 3));
    let map = &report.edge_map;

    for y in 0..4 {
        for x in [0, 1, 4, 5] {
            assert_eq!(map.get(x, y), 0.0, "column {x}, row {y}");
        }
        let center = [map.get(2, y), map.get(3, y)];
        assert!(
            center.contains(&1.0),
            "no strong boundary column in row {y}: {center:?}"
        );
        for v in center {
            assert!(v == 0.0 || v == 1.0, "unexpected value {v} in row {y}");
        }
    }
    assert!(report.strong_pixels > 0);
}

#[test]
fn degenerate_dimensions_run_without_panicking() {
    for (w, h) in [(1, 1), (1, 6), (6, 1), (0, 0)] {
        let report = detect(w, h, &uniform_rgba(w, h, [255, 255, 255, 255]));
        assert_eq!((report.edge_map.w, report.edge_map.h), (w, h));
        assert!(report.edge_map.data.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn one_by_one_image_is_suppressed() {
    let report = detect(1, 1, &uniform_rgba(1, 1, [200, 10, 30, 255]));
    assert_eq!(report.strong_pixels, 0);
    assert_eq!(report.weak_pixels, 0);
    assert_eq!(report.edge_map.get(0, 0), 0.0);
}
