//! A stateful wrapper around the functions in
//! [`local_binary_patterns`](crate::local_binary_patterns) that loads an
//! image once and caches its pattern image for repeated queries.

use std::fmt;
use std::path::Path;

use image::GrayImage;
use log::debug;

use crate::local_binary_patterns::{
    local_binary_pattern_map, pattern_point_cloud, uniform_pattern_mask,
};
use crate::point::Point;

/// Errors returned by [`LbpExtractor`].
#[derive(Debug)]
pub enum Error {
    /// The source image could not be opened or decoded.
    Load(image::ImageError),
    /// A query needed the pattern image, but
    /// [`compute_lbp`](LbpExtractor::compute_lbp) has not been called yet.
    NotComputed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(source) => write!(f, "failed to load source image: {source}"),
            Self::NotComputed => write!(f, "call compute_lbp() first"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(source) => Some(source),
            Self::NotComputed => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(source: image::ImageError) -> Self {
        Self::Load(source)
    }
}

/// Computes local binary patterns of a grayscale image and answers
/// queries about them.
///
/// The pattern image is computed once by
/// [`compute_lbp`](LbpExtractor::compute_lbp) and cached; the uniformity
/// and point cloud queries borrow the cache and fail with
/// [`Error::NotComputed`] until then.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate lbp;
/// # fn main() {
/// use lbp::extractor::LbpExtractor;
/// use lbp::local_binary_patterns::DEFAULT_MAX_TRANSITIONS;
///
/// let image = gray_image!(
///     06, 11, 14;
///     09, 10, 10;
///     19, 00, 22);
///
/// let mut extractor = LbpExtractor::new(image);
/// assert!(extractor.uniform_mask(DEFAULT_MAX_TRANSITIONS).is_err());
///
/// extractor.compute_lbp();
/// let lbp = extractor.lbp().unwrap();
/// assert_eq!(lbp.get_pixel(1, 1)[0], 0b01111010);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LbpExtractor {
    image: GrayImage,
    lbp: Option<GrayImage>,
}

impl LbpExtractor {
    /// Creates an extractor for an image that is already in memory.
    pub fn new(image: GrayImage) -> Self {
        LbpExtractor { image, lbp: None }
    }

    /// Loads the image at `path` and converts it to 8-bit grayscale.
    ///
    /// Decoding and IO failures are returned as [`Error::Load`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let image = image::open(path)?.to_luma8();
        debug!(
            "LbpExtractor: loaded {}x{} grayscale image",
            image.width(),
            image.height()
        );
        Ok(LbpExtractor::new(image))
    }

    /// The source image.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Width and height of the source image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Computes and caches the local binary pattern image.
    ///
    /// Calling this again recomputes the patterns from the unchanged
    /// source image, so the result never goes stale.
    pub fn compute_lbp(&mut self) -> &GrayImage {
        let lbp = local_binary_pattern_map(&self.image);
        debug!(
            "LbpExtractor: computed patterns for {}x{} image",
            lbp.width(),
            lbp.height()
        );
        self.lbp.insert(lbp)
    }

    /// The cached pattern image, or [`Error::NotComputed`] if
    /// [`compute_lbp`](LbpExtractor::compute_lbp) has not run yet.
    pub fn lbp(&self) -> Result<&GrayImage, Error> {
        self.lbp.as_ref().ok_or(Error::NotComputed)
    }

    /// Classifies the cached patterns by uniformity.
    ///
    /// See [`uniform_pattern_mask`] for the output format.
    pub fn uniform_mask(&self, max_transitions: u32) -> Result<GrayImage, Error> {
        Ok(uniform_pattern_mask(self.lbp()?, max_transitions))
    }

    /// Collects the coordinates of the cached patterns in `targets`, in
    /// row-major order.
    ///
    /// See [`pattern_point_cloud`] for the scan order.
    pub fn point_cloud(&self, targets: &[u8]) -> Result<Vec<Point<u32>>, Error> {
        Ok(pattern_point_cloud(self.lbp()?, targets))
    }
}

impl fmt::Display for LbpExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.image.dimensions();
        let status = if self.lbp.is_some() {
            "computed"
        } else {
            "not computed"
        };
        write!(f, "{width}x{height} image, patterns {status}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_binary_patterns::DEFAULT_MAX_TRANSITIONS;

    fn checkerboard() -> GrayImage {
        gray_image!(
              0, 255,   0, 255,   0;
            255,   0, 255,   0, 255;
              0, 255,   0, 255,   0;
            255,   0, 255,   0, 255;
              0, 255,   0, 255,   0)
    }

    #[test]
    fn test_queries_fail_before_compute() {
        let extractor = LbpExtractor::new(checkerboard());
        assert_eq!(extractor.dimensions(), (5, 5));

        assert!(matches!(extractor.lbp(), Err(Error::NotComputed)));
        assert!(matches!(
            extractor.uniform_mask(DEFAULT_MAX_TRANSITIONS),
            Err(Error::NotComputed)
        ));
        assert!(matches!(
            extractor.point_cloud(&[255]),
            Err(Error::NotComputed)
        ));
    }

    #[test]
    fn test_queries_match_the_free_functions() {
        let image = checkerboard();
        let mut extractor = LbpExtractor::new(image.clone());
        extractor.compute_lbp();

        let map = local_binary_pattern_map(&image);
        let cached = extractor.lbp().unwrap().clone();
        assert_pixels_eq!(cached, map);
        assert_pixels_eq!(
            extractor.uniform_mask(DEFAULT_MAX_TRANSITIONS).unwrap(),
            uniform_pattern_mask(&map, DEFAULT_MAX_TRANSITIONS)
        );
        assert_eq!(
            extractor.point_cloud(&[0]).unwrap(),
            pattern_point_cloud(&map, &[0])
        );
    }

    #[test]
    fn test_recompute_returns_the_same_patterns() {
        let mut extractor = LbpExtractor::new(checkerboard());
        let first = extractor.compute_lbp().clone();
        let second = extractor.compute_lbp().clone();
        assert_pixels_eq!(first, second);
    }

    #[test]
    fn test_from_path_missing_file_is_a_load_error() {
        let result = LbpExtractor::from_path("this/file/does/not/exist.png");
        match result {
            Err(Error::Load(_)) => {}
            other => panic!("expected a load error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::NotComputed.to_string(), "call compute_lbp() first");
    }

    #[test]
    fn test_display_reports_pattern_status() {
        let mut extractor = LbpExtractor::new(checkerboard());
        assert_eq!(extractor.to_string(), "5x5 image, patterns not computed");
        extractor.compute_lbp();
        assert_eq!(extractor.to_string(), "5x5 image, patterns computed");
    }
}
