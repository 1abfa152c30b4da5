use bytevise::{AlphabetRegistry, ByteOrder, ChunkedCodec, Codec, HexCodec, RadixCodec};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn preset(name: &str) -> ChunkedCodec {
    let registry = AlphabetRegistry::load_default().unwrap();
    registry.get(name).unwrap().codec().unwrap()
}

fn test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode_base64(c: &mut Criterion) {
    let codec = preset("base64");
    let mut group = c.benchmark_group("encode_base64");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = test_data(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data), ByteOrder::BigEndian));
        });
    }
    group.finish();
}

fn bench_decode_base64(c: &mut Criterion) {
    let codec = preset("base64");
    let mut group = c.benchmark_group("decode_base64");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let data = test_data(*size);
        let encoded = codec.encode(&data, ByteOrder::BigEndian);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let codec = HexCodec::lower();
    let mut group = c.benchmark_group("hex");

    for size in [256, 4096].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = test_data(*size);
        let encoded = codec.encode(&data, ByteOrder::BigEndian);

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data), ByteOrder::BigEndian));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_radix(c: &mut Criterion) {
    let codec = RadixCodec::new(36).unwrap();
    let mut group = c.benchmark_group("radix36");

    // Big-integer conversion is superlinear; keep sizes modest.
    for size in [32, 256, 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let mut data = test_data(*size);
        data[0] = 1;

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data), ByteOrder::BigEndian));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_base64,
    bench_decode_base64,
    bench_hex,
    bench_radix
);
criterion_main!(benches);
