//! Decoded image type holding single-channel intensities.

/// A single decoded photograph, reduced to grayscale.
///
/// Pixels are stored row-major as one intensity byte per pixel, which
/// is exactly the flattened sequence the extractor walks.
#[derive(Clone)]
pub struct SourceImage {
    /// Grayscale intensities in [0, 255].
    pixels: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Position of the image in the corpus enumeration order.
    index: usize,
}

impl SourceImage {
    /// Creates a new image with the given parameters.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            index,
        }
    }

    /// Returns the flattened intensities.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the enumeration position this image was loaded from.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("index", &self.index)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}
