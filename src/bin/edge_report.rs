use edge_detector::image::io::{load_rgba_image, save_edge_map, write_json_file};
use edge_detector::{EdgeDetector, EdgeParams};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub edge: EdgeParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edge_image")]
    pub edge_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input)?;
    let detector = EdgeDetector::new(config.edge);
    let report = detector.process_with_diagnostics(&image);

    save_edge_map(&report.edge_map, &config.output.edge_image)?;
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Saved edge map to {} ({}x{})",
        config.output.edge_image.display(),
        report.width,
        report.height
    );
    println!(
        "Saved report to {} ({} strong, {} weak, {} promoted)",
        config.output.report_json.display(),
        report.strong_pixels,
        report.weak_pixels,
        report.promoted_pixels
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_report <config.json>".to_string()
}
