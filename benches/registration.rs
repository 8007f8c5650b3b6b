use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spimdata::codec::CodecRegistry;
use spimdata::dataset::{Calibration, DatasetBuilder, SourceImage, SpimData};
use spimdata::document::{DocumentIo, DocumentOptions};
use spimdata::entity::{Attribute, Displaysettings};
use spimdata::loader::PixelType;
use spimdata::registration::{AffineTransform3D, ViewRegistration, ViewTransform};
use spimdata::sequence::ViewId;

/// Create a dataset with `channels` setups and `frames` time points
fn create_dataset(channels: u32, frames: u32) -> SpimData {
    let source = SourceImage::new("bench", "/data/bench.tif", PixelType::Gray16)
        .with_size(512, 512, 64)
        .with_channels(channels)
        .with_frames(frames)
        .with_time_origin(frames / 10)
        .with_calibration(Calibration {
            pixel_width: 0.2,
            pixel_height: 0.2,
            pixel_depth: 1.5,
            unit: "µm".to_string(),
            origin: [256.0, 256.0, 32.0],
        });
    let mut data = DatasetBuilder::new().build(&source).unwrap();
    data.scale_uniform("downsample", 0.5);
    data.pretransform(
        "rotate",
        AffineTransform3D::from_row_major([
            0.0, -1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ]),
    );
    data.translate("center", 10.0, -5.0, 2.5);
    data
}

/// Benchmark replaying chains of increasing length
fn bench_chain_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_composition");

    for length in [4, 16, 64] {
        let transforms: Vec<ViewTransform> = (0..length)
            .map(|i| {
                let s = 1.0 + i as f64 * 1e-3;
                ViewTransform::new(
                    format!("step{}", i),
                    AffineTransform3D::scaling(s, s, s)
                        .preconcatenate(&AffineTransform3D::translation(i as f64, 0.0, -1.0)),
                )
            })
            .collect();

        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}transforms", length)),
            &transforms,
            |b, transforms| {
                b.iter(|| {
                    let reg = ViewRegistration::from_transforms(
                        ViewId::new(0, 0),
                        black_box(transforms).iter().cloned(),
                    );
                    black_box(reg.model().apply([1.0, 2.0, 3.0]));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark encoding and decoding display settings through the registry
fn bench_displaysettings_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("displaysettings_codec");
    let registry = CodecRegistry::builtin().unwrap();

    let mut ds = Displaysettings::with_id(3);
    ds.color = [255, 0, 128, 255];
    ds.min = 1.0 / 3.0;
    ds.max = 4095.0;
    ds.is_set = true;
    let attribute = Attribute::from(ds);
    let tree = registry.encode(&attribute).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(registry.encode(black_box(&attribute)).unwrap()));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(registry.decode(black_box(&tree)).unwrap()));
    });

    group.finish();
}

/// Benchmark writing and reading whole documents
fn bench_document_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_io");
    let io = DocumentIo::builtin(DocumentOptions::default()).unwrap();

    for (channels, frames) in [(2, 10), (4, 100)] {
        let data = create_dataset(channels, frames);
        let xml = io.to_xml_string(&data).unwrap();
        let views = data.registrations().len();

        group.throughput(Throughput::Elements(views as u64));
        group.bench_with_input(
            BenchmarkId::new("write", format!("{}views", views)),
            &data,
            |b, data| {
                b.iter(|| black_box(io.to_xml_string(data).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("read", format!("{}views", views)),
            &xml,
            |b, xml| {
                b.iter(|| black_box(io.from_xml_str(xml).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chain_composition,
    bench_displaysettings_codec,
    bench_document_io
);
criterion_main!(benches);
