use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mape_metrics::{mape, mape_array, mape_tensor};
use mape_tensor::Tensor2;
use ndarray::Array2;
use rand::Rng;

// single pass with a per-element branch, against the masked two-pass version
fn mape_masked(predicted: &Array2<f32>, truth: &Array2<f32>) -> f32 {
    let zero_mask = truth.mapv(|t| t == 0.0);
    let non_zero: f32 = ndarray::Zip::from(predicted)
        .and(truth)
        .and(&zero_mask)
        .fold(0f32, |acc, &p, &t, &z| {
            if z {
                acc
            } else {
                acc + ((t - p) / t).abs()
            }
        });
    let zero: f32 = ndarray::Zip::from(predicted)
        .and(&zero_mask)
        .fold(0f32, |acc, &p, &z| if z { acc + p.abs() } else { acc });
    (non_zero + zero) / truth.len() as f32
}

fn bench_mape(c: &mut Criterion) {
    let mut group = c.benchmark_group("mape");
    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let predicted: Vec<f32> = (0..width * height)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        let truth: Vec<f32> = (0..width * height)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        let pa = Array2::from_shape_vec((*height, *width), predicted.clone()).unwrap();
        let ta = Array2::from_shape_vec((*height, *width), truth.clone()).unwrap();
        let pt = Tensor2::from_shape_vec([*height, *width], predicted).unwrap();
        let tt = Tensor2::from_shape_vec([*height, *width], truth).unwrap();

        group.bench_with_input(
            BenchmarkId::new("ndarray_zip", &parameter_string),
            &(&pa, &ta),
            |b, (p, t)| b.iter(|| mape_array(black_box(*p), black_box(*t))),
        );

        group.bench_with_input(
            BenchmarkId::new("ndarray_masked", &parameter_string),
            &(&pa, &ta),
            |b, (p, t)| b.iter(|| mape_masked(black_box(*p), black_box(*t))),
        );

        group.bench_with_input(
            BenchmarkId::new("tensor", &parameter_string),
            &(&pt, &tt),
            |b, (p, t)| b.iter(|| mape_tensor(black_box(*p), black_box(*t))),
        );

        group.bench_with_input(
            BenchmarkId::new("dispatch", &parameter_string),
            &(&pa, &tt),
            |b, (p, t)| b.iter(|| mape(black_box(*p), black_box(*t))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_mape);
criterion_main!(benches);
