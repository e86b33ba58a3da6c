//! Strategies for generating arbitrary grayscale images in property tests.

use image::GrayImage;
use proptest::{
    arbitrary::any,
    sample::SizeRange,
    strategy::{BoxedStrategy, Strategy},
};
use std::ops::RangeInclusive;

/// Create a strategy to generate 8bpp grayscale images with arbitrary
/// contents and with dimensions selected within the specified ranges.
pub(crate) fn arbitrary_gray_image(
    width_range: impl Into<SizeRange>,
    height_range: impl Into<SizeRange>,
) -> BoxedStrategy<GrayImage> {
    dims(width_range, height_range)
        .prop_flat_map(|(w, h)| arbitrary_gray_image_fixed(w, h))
        .boxed()
}

fn arbitrary_gray_image_fixed(width: u32, height: u32) -> BoxedStrategy<GrayImage> {
    let size = (width * height) as usize;
    let vecs = proptest::collection::vec(any::<u8>(), size);

    vecs.prop_map(move |v| GrayImage::from_vec(width, height, v).unwrap())
        .boxed()
}

fn dims(width: impl Into<SizeRange>, height: impl Into<SizeRange>) -> BoxedStrategy<(u32, u32)> {
    let width = dim(width);
    let height = dim(height);
    width
        .prop_flat_map(move |w| height.clone().prop_map(move |h| (w, h)))
        .boxed()
}

fn dim(range: impl Into<SizeRange>) -> RangeInclusive<u32> {
    let range = range.into();
    range.start() as u32..=range.end_incl() as u32
}

#[cfg(not(miri))]
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_arbitrary_gray_image_fixed(img in arbitrary_gray_image(3, 7)) {
            assert_eq!(img.width(), 3);
            assert_eq!(img.height(), 7);
        }

        #[test]
        fn test_arbitrary_gray_image_ranges(img in arbitrary_gray_image(1..30, 2..=150)) {
            assert!((1..30).contains(&img.width()));
            assert!((2..=150).contains(&img.height()));
        }
    }
}
