use criterion::{black_box, criterion_group, criterion_main, Criterion};
use photo_entropy_sign::extraction::{Extractor, LsbSampler};
use photo_entropy_sign::seeding::Seed;
use photo_entropy_sign::source::MemorySource;

fn pixels(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i: usize| (i.wrapping_mul(2_654_435_761) >> 7) as u8)
        .collect()
}

fn bench_sampler(c: &mut Criterion) {
    let sampler = LsbSampler::new();
    let image = pixels(640 * 480);

    c.bench_function("lsb_sample_640x480", |b| {
        b.iter(|| sampler.sample(black_box(&image), true))
    });
}

fn bench_extract_and_seed(c: &mut Criterion) {
    let mut source = MemorySource::new();
    for _ in 0..4 {
        source.push(pixels(1024));
    }
    let extractor = Extractor::new();

    c.bench_function("extract_3000_bits_and_seed", |b| {
        b.iter(|| {
            let batch = extractor.extract(black_box(&source), 3000);
            Seed::from_batch(&batch)
        })
    });
}

criterion_group!(benches, bench_sampler, bench_extract_and_seed);
criterion_main!(benches);
