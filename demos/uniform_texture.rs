//! An example of extracting uniform texture regions from a greyscale image.
//! If running from the root directory of this crate you can test on any
//! png image by running
//! `cargo run --example uniform_texture ./input.png ./tmp`

use image::{open, Luma};
use lbp::definitions::{HasBlack, HasWhite};
use lbp::extractor::LbpExtractor;
use lbp::local_binary_patterns::DEFAULT_MAX_TRANSITIONS;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if env::args().len() != 3 {
        panic!("Please enter an input file and a target directory")
    }

    let input_path = env::args().nth(1).unwrap();
    let output_dir = env::args().nth(2).unwrap();

    let input_path = Path::new(&input_path);
    let output_dir = Path::new(&output_dir);

    if !output_dir.is_dir() {
        fs::create_dir(output_dir).expect("Failed to create output directory")
    }

    if !input_path.is_file() {
        panic!("Input file does not exist");
    }

    // Load image and convert to grayscale
    let gray = open(input_path)
        .unwrap_or_else(|_| panic!("Could not load image at {:?}", input_path))
        .to_luma8();

    // Save grayscale image in output directory
    let gray_path = output_dir.join("grey.png");
    gray.save(&gray_path).unwrap();

    // Compute the local binary pattern of every interior pixel
    let mut extractor = LbpExtractor::new(gray);
    extractor.compute_lbp();
    let lbp_path = output_dir.join("lbp.png");
    extractor.lbp().unwrap().save(&lbp_path).unwrap();

    // Mark uniform patterns and stretch the mask to full contrast
    let mask = extractor.uniform_mask(DEFAULT_MAX_TRANSITIONS).unwrap();
    let mut visual = mask;
    for p in visual.pixels_mut() {
        *p = if p[0] > 0 { Luma::white() } else { Luma::black() };
    }
    let mask_path = output_dir.join("uniform.png");
    visual.save(&mask_path).unwrap();

    // Report where the flattest textures sit
    let flat = extractor.point_cloud(&[0b00000000, 0b11111111]).unwrap();
    println!("{}", extractor);
    println!("Found {} pixels with flat patterns", flat.len());
    if let Some(first) = flat.first() {
        println!("First flat pixel at column {}, row {}", first.x, first.y);
    }
}
