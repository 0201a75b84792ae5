use edge_detector::image::io::{load_rgba_image, save_edge_map};
use edge_detector::{EdgeDetector, EdgeParams};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    // No path arguments is a no-op, not an error.
    let Some(input) = args.next() else {
        println!("Usage: edge-detector <input-image> [output-image]");
        return;
    };
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    if let Err(err) = run(Path::new(&input), Path::new(&output)) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(input: &Path, output: &Path) -> Result<(), String> {
    let image = load_rgba_image(input)?;
    let detector = EdgeDetector::new(EdgeParams::default());
    let report = detector.process_with_diagnostics(&image);
    save_edge_map(&report.edge_map, output)?;

    println!(
        "Saved edge map to {} ({} strong, {} weak, {} promoted, {:.3} ms)",
        output.display(),
        report.strong_pixels,
        report.weak_pixels,
        report.promoted_pixels,
        report.timing.total_ms
    );
    Ok(())
}
