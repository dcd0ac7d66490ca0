#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes an input file into a fresh temporary directory
pub fn write_input(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Builds a text-format input from a budget and component and kit lines
pub fn text_input(budget: i64, components: &[&str], kits: &[&str]) -> String {
    let mut text = format!("{budget}\n{}\n", components.len());
    for line in components {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(&format!("{}\n", kits.len()));
    for line in kits {
        text.push_str(line);
        text.push('\n');
    }
    text
}

pub const REFERENCE_COMPONENTS: [&str; 5] = [
    "C1 CPU 50 200 AM4 65",
    "M1 Motherboard 10 100 AM4 DDR4",
    "G1 GPU 80 400 8GB 150",
    "R1 RAM 20 80 DDR4 16GB",
    "P1 PSU 5 90 300 Bronze",
];
