//! Utils for testing and debugging.

use image::GrayImage;

/// Constructs an 8bpp grayscale image from a list of rows, with rows
/// separated by semicolons and entries within a row separated by commas.
///
/// # Examples
/// ```
/// # #[macro_use]
/// # extern crate lbp;
/// # fn main() {
/// use image::Luma;
///
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
///
/// assert_eq!(image.dimensions(), (3, 2));
/// assert_eq!(*image.get_pixel(2, 1), Luma([6u8]));
/// # }
/// ```
#[macro_export]
macro_rules! gray_image {
    ($( $( $x:expr ),+ );+) => {{
        let rows = [ $( [ $( $x as u8 ),+ ] ),+ ];
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let data = rows.concat();
        image::GrayImage::from_raw(width, height, data).expect("valid image")
    }};
}

/// Panics if any pixels differ between the two input images.
#[macro_export]
macro_rules! assert_pixels_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        let actual_dim = actual.dimensions();
        let expected_dim = expected.dimensions();

        if actual_dim != expected_dim {
            panic!(
                "dimensions do not match. actual: {:?}, expected: {:?}",
                actual_dim, expected_dim
            )
        }

        let diffs = actual
            .enumerate_pixels()
            .zip(expected.enumerate_pixels())
            .filter(|(p, q)| p != q)
            .collect::<Vec<_>>();

        if !diffs.is_empty() {
            let mut err = "pixels do not match. ".to_owned();

            let diff_messages = diffs
                .iter()
                .take(5)
                .map(|(p, q)| format!("\nactual: {:?}, expected {:?} ", p, q))
                .collect::<Vec<_>>()
                .join("");

            err.push_str(&diff_messages);
            panic!("{}", err)
        }
    }};
}

/// Gray image to use in benchmarks. This is neither noise nor
/// similar to natural images - it's just a convenience method
/// to produce an image that's not constant.
pub fn gray_bench_image(width: u32, height: u32) -> GrayImage {
    let mut image = GrayImage::new(width, height);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let intensity = ((x % 7) * 32 + (y % 6) * 8) as u8;
            image.put_pixel(x, y, image::Luma([intensity]));
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_image_dimensions_are_width_then_height() {
        let image = gray_image!(
            1, 2, 3, 4;
            5, 6, 7, 8);
        assert_eq!(image.dimensions(), (4, 2));
    }

    #[test]
    fn test_gray_bench_image_is_not_constant() {
        let image = gray_bench_image(32, 32);
        let first = image.get_pixel(0, 0);
        assert!(image.pixels().any(|p| p != first));
    }
}
