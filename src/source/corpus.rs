//! Image corpus abstraction.
//!
//! Provides a trait-based abstraction over where photographs come from,
//! allowing a directory on disk in production and an in-memory source
//! for tests.

use super::{EnumerationOrder, SourceImage};
use std::path::{Path, PathBuf};

/// File extensions recognized as photographs.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Result of attempting to decode one corpus entry.
///
/// The corpus is best-effort: an entry that cannot be decoded is
/// skipped rather than failing the whole extraction.
#[derive(Debug)]
pub enum DecodeOutcome {
    /// The entry decoded to grayscale intensities.
    Decoded(SourceImage),
    /// The entry could not be decoded.
    Skipped { reason: String },
}

/// Trait for photograph sources.
///
/// The enumeration order is fixed when the source is built, so index
/// `i` always refers to the same entry.
pub trait ImageSource {
    /// Number of candidate entries, including ones that may fail to decode.
    fn image_count(&self) -> usize;

    /// Decodes the entry at `index` to grayscale.
    fn load(&self, index: usize) -> DecodeOutcome;
}

/// Directory of photographs on disk.
#[derive(Debug, Clone)]
pub struct ImageCorpus {
    files: Vec<PathBuf>,
}

impl ImageCorpus {
    /// Enumerates candidate images in `directory`.
    ///
    /// A missing or unreadable directory yields an empty corpus.
    pub fn open(directory: impl AsRef<Path>, order: EnumerationOrder) -> Self {
        let directory = directory.as_ref();

        let mut files: Vec<PathBuf> = match std::fs::read_dir(directory) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| has_image_extension(path))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    directory = %directory.display(),
                    error = %e,
                    "Image directory unavailable, corpus is empty"
                );
                Vec::new()
            }
        };

        if order == EnumerationOrder::ByName {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        tracing::debug!(
            directory = %directory.display(),
            candidates = files.len(),
            ?order,
            "Enumerated image corpus"
        );

        Self { files }
    }

    /// Returns the candidate files in enumeration order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl ImageSource for ImageCorpus {
    fn image_count(&self) -> usize {
        self.files.len()
    }

    fn load(&self, index: usize) -> DecodeOutcome {
        match self.files.get(index) {
            Some(path) => decode_grayscale(path, index),
            None => DecodeOutcome::Skipped {
                reason: format!("no corpus entry at index {}", index),
            },
        }
    }
}

/// Returns true if the path carries a recognized image extension.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Decodes an image file to single-channel intensities.
pub fn decode_grayscale(path: &Path, index: usize) -> DecodeOutcome {
    match image::open(path) {
        Ok(decoded) => {
            let gray = decoded.to_luma8();
            let (width, height) = gray.dimensions();
            DecodeOutcome::Decoded(SourceImage::new(gray.into_raw(), width, height, index))
        }
        Err(e) => DecodeOutcome::Skipped {
            reason: format!("{}: {}", path.display(), e),
        },
    }
}

/// In-memory source for testing that holds pre-decoded intensities.
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: Vec<Option<Vec<u8>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an image given as a flat row of intensities.
    pub fn push(&mut self, pixels: Vec<u8>) -> &mut Self {
        self.entries.push(Some(pixels));
        self
    }

    /// Appends an entry that always fails to decode.
    pub fn push_unreadable(&mut self) -> &mut Self {
        self.entries.push(None);
        self
    }
}

impl ImageSource for MemorySource {
    fn image_count(&self) -> usize {
        self.entries.len()
    }

    fn load(&self, index: usize) -> DecodeOutcome {
        match self.entries.get(index) {
            Some(Some(pixels)) => DecodeOutcome::Decoded(SourceImage::new(
                pixels.clone(),
                pixels.len() as u32,
                1,
                index,
            )),
            Some(None) => DecodeOutcome::Skipped {
                reason: format!("entry {} marked unreadable", index),
            },
            None => DecodeOutcome::Skipped {
                reason: format!("no entry at index {}", index),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn write_png(dir: &Path, name: &str, value: u8) {
        let img = GrayImage::from_pixel(4, 4, Luma([value]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_extension_filter() {
        assert!(has_image_extension(Path::new("a.png")));
        assert!(has_image_extension(Path::new("b.JPG")));
        assert!(has_image_extension(Path::new("dir/c.jpeg")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("png")));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = ImageCorpus::open(dir.path().join("absent"), EnumerationOrder::Listing);
        assert_eq!(corpus.image_count(), 0);
    }

    #[test]
    fn test_by_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "b.png", 10);
        write_png(dir.path(), "a.png", 20);
        write_png(dir.path(), "c.png", 30);
        std::fs::write(dir.path().join("readme.txt"), b"ignored").unwrap();

        let corpus = ImageCorpus::open(dir.path(), EnumerationOrder::ByName);
        let names: Vec<_> = corpus
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_decode_grayscale_png() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "gray.png", 77);

        match decode_grayscale(&dir.path().join("gray.png"), 0) {
            DecodeOutcome::Decoded(image) => {
                assert_eq!((image.width(), image.height()), (4, 4));
                assert!(image.pixels().iter().all(|&p| p == 77));
            }
            DecodeOutcome::Skipped { reason } => panic!("unexpected skip: {}", reason),
        }
    }

    #[test]
    fn test_corrupt_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.jpg"), b"not a jpeg").unwrap();

        let corpus = ImageCorpus::open(dir.path(), EnumerationOrder::Listing);
        assert_eq!(corpus.image_count(), 1);
        assert!(matches!(corpus.load(0), DecodeOutcome::Skipped { .. }));
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new();
        source.push(vec![1, 2, 3]).push_unreadable();

        assert_eq!(source.image_count(), 2);
        assert!(matches!(source.load(0), DecodeOutcome::Decoded(_)));
        assert!(matches!(source.load(1), DecodeOutcome::Skipped { .. }));
        assert!(matches!(source.load(2), DecodeOutcome::Skipped { .. }));
    }
}
