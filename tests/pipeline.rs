//! End-to-end flow: photographs on disk, key pair, signature, verdict.

use image::{GrayImage, Luma};
use photo_entropy_sign::{
    keys::{generate_from_source, KeyStore, MODULUS_BITS},
    seeding::{KeyRng, Seed, SeedMode},
    signing::{sign_file, verify_file},
    EnumerationOrder, Error, Extractor, ImageCorpus, QualityThresholds, SourceConfig,
};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::path::Path;

/// Writes a noisy grayscale PNG.
fn write_noise_png(dir: &Path, name: &str, seed: u8, side: u32) {
    let mut rng = ChaCha20Rng::from_seed([seed; 32]);
    let img = GrayImage::from_fn(side, side, |_, _| Luma([(rng.next_u32() & 0xFF) as u8]));
    img.save(dir.join(name)).unwrap();
}

fn photo_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_noise_png(dir.path(), "a.png", 1, 48);
    write_noise_png(dir.path(), "b.png", 2, 48);
    write_noise_png(dir.path(), "c.png", 3, 48);
    std::fs::write(dir.path().join("d.jpg"), b"truncated").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();
    dir
}

#[test]
fn extraction_is_reproducible_for_sorted_corpus() {
    let dir = photo_dir();
    let config = SourceConfig {
        order: EnumerationOrder::ByName,
        ..SourceConfig::with_directory(dir.path())
    };

    let corpus = ImageCorpus::open(&config.directory, config.order);
    assert_eq!(corpus.files().len(), 4);

    let extractor = Extractor::from_config(&config);
    let first = extractor.extract(&corpus, config.num_needed);
    let second = extractor.extract(&corpus, config.num_needed);

    assert_eq!(first.len(), 3000);
    assert_eq!(first, second);
    assert_eq!(
        Seed::from_batch(&first).unwrap(),
        Seed::from_batch(&second).unwrap()
    );
}

#[test]
fn exhausted_corpus_returns_short_batch() {
    let dir = photo_dir();
    let corpus = ImageCorpus::open(dir.path(), EnumerationOrder::ByName);

    // Three 48x48 images hold at most 6912 qualifying pixels.
    let batch = Extractor::new().extract(&corpus, 1_000_000);

    assert!(batch.len() > 3000);
    assert!(batch.len() <= 3 * 48 * 48);
    assert_eq!(batch.source_images(), 3);
}

#[test]
fn deterministic_seed_reproduces_generator_output() {
    let dir = photo_dir();
    let corpus = ImageCorpus::open(dir.path(), EnumerationOrder::ByName);
    let batch = Extractor::new().extract(&corpus, 3000);

    let mut a = KeyRng::deterministic(Seed::from_batch(&batch).unwrap());
    let mut b = KeyRng::deterministic(Seed::from_batch(&batch).unwrap());

    assert_eq!(a.next_u64(), b.next_u64());
}

#[test]
fn photographs_to_verified_signature() {
    let photos = photo_dir();
    let work = tempfile::tempdir().unwrap();
    let config = SourceConfig::with_directory(photos.path());

    let store = KeyStore::new(
        work.path().join("private_key.pem"),
        work.path().join("public_key.pem"),
    );
    let pair = store
        .load_or_generate(|| {
            let corpus = ImageCorpus::open(&config.directory, config.order);
            generate_from_source(
                &corpus,
                &config,
                &QualityThresholds::default(),
                SeedMode::Supplemented,
            )
        })
        .unwrap();
    assert_eq!(pair.public().size_bits(), MODULUS_BITS);

    let file = work.path().join("message.txt");
    std::fs::write(&file, b"0123456789").unwrap();
    let sig_path = sign_file(&file, &store.load_private().unwrap()).unwrap();
    assert_eq!(sig_path, work.path().join("message.sig"));
    assert_eq!(std::fs::read(&sig_path).unwrap().len(), MODULUS_BITS / 8);

    assert!(verify_file(&file, store.public_path(), &sig_path).unwrap());

    std::fs::write(&file, b"0123456788").unwrap();
    assert!(!verify_file(&file, store.public_path(), &sig_path).unwrap());

    let absent = work.path().join("missing.sig");
    assert!(!verify_file(&file, store.public_path(), &absent).unwrap());
}

#[test]
fn empty_photo_directory_cannot_seed() {
    let dir = tempfile::tempdir().unwrap();
    let config = SourceConfig::with_directory(dir.path());
    let corpus = ImageCorpus::open(&config.directory, config.order);

    let result = generate_from_source(
        &corpus,
        &config,
        &QualityThresholds::default(),
        SeedMode::Supplemented,
    );

    assert!(matches!(result, Err(Error::InsufficientEntropy { .. })));
}
