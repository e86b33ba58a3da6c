//! Functions for computing [local binary patterns](https://en.wikipedia.org/wiki/Local_binary_patterns),
//! classifying them by uniformity and extracting the locations of chosen patterns.

use crate::definitions::HasBlack;
use crate::point::Point;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma};
use itertools::Itertools;

/// Offsets `(dx, dy)` of the 8 neighbors of a pixel, visited clockwise
/// starting from the upper-left neighbor.
///
/// The neighbors of a pixel `p` are labelled with their position `i` in
/// this table:
///
/// <pre>
/// 0  1  2
/// 7  p  3
/// 6  5  4
/// </pre>
///
/// The neighbor at position `i` contributes bit `7 - i` of a pattern, so
/// the upper-left neighbor decides the most significant bit and the left
/// neighbor the least significant one.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Default transition threshold below which a pattern counts as uniform.
///
/// Patterns with at most two circular bit transitions correspond to flat
/// regions, spots and edges; anything busier is usually noise.
pub const DEFAULT_MAX_TRANSITIONS: u32 = 2;

/// Computes the basic local binary pattern of a pixel, or `None` if the
/// pixel is too close to the image boundary to have a full ring of 8
/// neighbors.
///
/// Bit `7 - i` of the pattern is 1 if the neighbor at position `i` of
/// [`NEIGHBOR_OFFSETS`] is at least as bright as the center pixel. Ties
/// count as 1.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate lbp;
/// # fn main() {
/// use lbp::local_binary_patterns::local_binary_pattern;
///
/// let image = gray_image!(
///     06, 11, 14;
///     09, 10, 10;
///     19, 00, 22);
///
/// let expected = 0b01111010;
/// let pattern = local_binary_pattern(&image, 1, 1).unwrap();
/// assert_eq!(pattern, expected);
///
/// // Border pixels have no full neighbor ring.
/// assert_eq!(local_binary_pattern(&image, 0, 1), None);
/// # }
/// ```
pub fn local_binary_pattern(image: &GrayImage, x: u32, y: u32) -> Option<u8> {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        return None;
    }
    if x == 0 || x >= width - 1 || y == 0 || y >= height - 1 {
        return None;
    }
    // SAFETY: the checks above guarantee that (x, y) and its 8-neighbor
    // ring are all in bounds.
    Some(unsafe { pattern_at(image, x, y) })
}

/// Reads the local binary pattern at (x, y) without bounds checks.
///
/// # Safety
/// Caller must guarantee `1 <= x < width - 1` and `1 <= y < height - 1`.
unsafe fn pattern_at(image: &GrayImage, x: u32, y: u32) -> u8 {
    debug_assert!(x >= 1 && x + 1 < image.width());
    debug_assert!(y >= 1 && y + 1 < image.height());

    let center = image.unsafe_get_pixel(x, y)[0];
    let mut pattern = 0u8;
    for (i, &(dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        let neighbor =
            image.unsafe_get_pixel(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))[0];
        pattern |= u8::from(neighbor >= center) << (7 - i);
    }
    pattern
}

/// Computes the local binary pattern of every pixel of an image.
///
/// Border pixels have no full neighbor ring and are set to 0, as is the
/// whole output when the image is narrower or shorter than 3 pixels.
/// The result is fully determined by the input: recomputing it yields a
/// bit-identical image.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate lbp;
/// # fn main() {
/// use lbp::local_binary_patterns::local_binary_pattern_map;
///
/// // Ties count as "at least as bright", so a constant image produces
/// // the all-ones pattern at every interior pixel.
/// let image = gray_image!(
///     7, 7, 7;
///     7, 7, 7;
///     7, 7, 7);
///
/// let expected = gray_image!(
///     0,   0, 0;
///     0, 255, 0;
///     0,   0, 0);
///
/// assert_pixels_eq!(local_binary_pattern_map(&image), expected);
/// # }
/// ```
pub fn local_binary_pattern_map(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out: GrayImage = ImageBuffer::from_pixel(width, height, Luma::black());
    if width < 3 || height < 3 {
        return out;
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            // SAFETY: the loop ranges keep (x, y) and its 8-neighbor ring
            // in bounds.
            let pattern = unsafe { pattern_at(image, x, y) };
            out.put_pixel(x, y, Luma([pattern]));
        }
    }
    out
}

/// Number of bit transitions in a byte, counting the first and final bits
/// as adjacent.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::count_transitions;
///
/// assert_eq!(count_transitions(0b00000000), 0);
/// assert_eq!(count_transitions(0b11111111), 0);
/// assert_eq!(count_transitions(0b11110000), 2);
/// assert_eq!(count_transitions(0b10101010), 8);
/// ```
pub fn count_transitions(byte: u8) -> u32 {
    (byte ^ byte.rotate_right(1)).count_ones()
}

/// Whether a pattern has at most `max_transitions` circular bit
/// transitions. The threshold is inclusive.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::{is_uniform, DEFAULT_MAX_TRANSITIONS};
///
/// assert!(is_uniform(0b11110000, DEFAULT_MAX_TRANSITIONS));
/// assert!(!is_uniform(0b10110000, DEFAULT_MAX_TRANSITIONS));
/// ```
pub fn is_uniform(byte: u8, max_transitions: u32) -> bool {
    count_transitions(byte) <= max_transitions
}

/// Marks every interior pixel of a local binary pattern image whose
/// pattern is uniform, i.e. has at most `max_transitions` circular bit
/// transitions.
///
/// The output contains 1 for uniform interior pixels and 0 everywhere
/// else; border pixels are always 0, whatever their pattern. The
/// threshold is inclusive and [`DEFAULT_MAX_TRANSITIONS`] is the usual
/// choice. The input is not checked for being a pattern image - any
/// grayscale image is classified byte by byte.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate lbp;
/// # fn main() {
/// use lbp::local_binary_patterns::{uniform_pattern_mask, DEFAULT_MAX_TRANSITIONS};
///
/// let patterns = gray_image!(
///     0,   0,   0,   0, 0;
///     0, 255, 170,  15, 0;
///     0,   7,  85, 240, 0;
///     0,   1,   2,   3, 0;
///     0,   0,   0,   0, 0);
///
/// // 170 and 85 alternate between 0 and 1 eight times; every other
/// // interior pattern has at most two transitions.
/// let expected = gray_image!(
///     0, 0, 0, 0, 0;
///     0, 1, 0, 1, 0;
///     0, 1, 0, 1, 0;
///     0, 1, 1, 1, 0;
///     0, 0, 0, 0, 0);
///
/// assert_pixels_eq!(uniform_pattern_mask(&patterns, DEFAULT_MAX_TRANSITIONS), expected);
/// # }
/// ```
pub fn uniform_pattern_mask(lbp: &GrayImage, max_transitions: u32) -> GrayImage {
    let (width, height) = lbp.dimensions();
    let mut mask: GrayImage = ImageBuffer::from_pixel(width, height, Luma::black());
    if width < 3 || height < 3 {
        return mask;
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if is_uniform(lbp.get_pixel(x, y)[0], max_transitions) {
                mask.put_pixel(x, y, Luma([1]));
            }
        }
    }
    mask
}

/// Collects the coordinates of every pixel of a local binary pattern
/// image whose pattern belongs to `targets`, in row-major order
/// (ascending `y`, then ascending `x`).
///
/// The whole image is scanned, border included: border patterns are
/// always 0, so a target set containing 0 matches the border ring.
/// Duplicate targets have no effect, and an empty target set matches
/// nothing.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate lbp;
/// # fn main() {
/// use lbp::local_binary_patterns::pattern_point_cloud;
/// use lbp::point::Point;
///
/// let patterns = gray_image!(
///     0,  0,  0,  0, 0;
///     0, 15, 15,  9, 0;
///     0, 15,  9,  9, 0;
///     0,  9,  9,  9, 0;
///     0,  0,  0,  0, 0);
///
/// let cloud = pattern_point_cloud(&patterns, &[15]);
/// assert_eq!(
///     cloud,
///     vec![Point::new(1, 1), Point::new(2, 1), Point::new(1, 2)]
/// );
/// assert!(pattern_point_cloud(&patterns, &[]).is_empty());
/// # }
/// ```
pub fn pattern_point_cloud(lbp: &GrayImage, targets: &[u8]) -> Vec<Point<u32>> {
    let mut wanted = [false; 256];
    for &pattern in targets {
        wanted[pattern as usize] = true;
    }

    let (width, height) = lbp.dimensions();
    (0..height)
        .cartesian_product(0..width)
        .filter(|&(y, x)| wanted[lbp.get_pixel(x, y)[0] as usize])
        .map(|(y, x)| Point::new(x, y))
        .collect()
}
