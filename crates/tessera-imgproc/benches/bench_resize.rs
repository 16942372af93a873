use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tessera_image::{Color, Image, ImageSize};
use tessera_imgproc::{resize::Downscale, ImageEditor};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Downscale");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let rows: Vec<Vec<Color>> = (0..*height)
            .map(|y| {
                (0..*width)
                    .map(|x| Color::new((x % 256) as u32, (y % 256) as u32, 128))
                    .collect()
            })
            .collect();
        let image = Image::from_rows(&rows, 255).unwrap();

        // integral coordinates only
        let half = Downscale::new(ImageSize {
            width: width / 2,
            height: height / 2,
        })
        .unwrap();

        // fractional coordinates on both axes
        let third = Downscale::new(ImageSize {
            width: width * 2 / 3,
            height: height * 2 / 3,
        })
        .unwrap();

        group.bench_with_input(
            BenchmarkId::new("half", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(half.apply(black_box(i)))),
        );

        group.bench_with_input(
            BenchmarkId::new("two_thirds", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(third.apply(black_box(i)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
