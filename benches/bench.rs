use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use core::num::NonZeroU64;

use fp_precision::{integrate, Binary32, Binary64, Decimal, DecimalContext, F32Bits, RoundFrom, Rounding};

// Time reconstructing and re-encoding 1 binary32 number

const NUMS: [u32; 4] = [
  0b00111111100000000000000000000000,  // 1.0
  0b01000000010010010000111111011011,  // π
  0b00000000100000000000000000000001,  // Just above MIN_POSITIVE: longest expansions
  0b01111111011111111111111111111111,  // MAX
];

fn exact_decimal(c: &mut Criterion) {
  let mut g = c.benchmark_group("exact_decimal");
  for bits in NUMS.map(F32Bits::from_bits) {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{bits:#010x}")), &bits, |b, &bits| {
      b.iter(|| black_box(bits).exact_decimal());
    });
  }
  g.finish();
}

fn encode(c: &mut Criterion) {
  let mut g = c.benchmark_group("encode");
  for bits in NUMS.map(F32Bits::from_bits) {
    let Ok(value) = bits.exact_decimal() else { continue };
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{bits:#010x}")), &value, |b, value| {
      b.iter(|| F32Bits::round_from(black_box(value)));
    });
  }
  g.finish();
}

// Time the integration loop in each arithmetic

const STEPS: u64 = 1000;

fn integrate_native(c: &mut Criterion) {
  let steps = NonZeroU64::new(STEPS).unwrap();
  let mut g = c.benchmark_group("integrate_native");
  g.throughput(Throughput::Elements(STEPS));
  g.bench_function("f32", |b| b.iter(|| integrate(&Binary32, black_box(steps))));
  g.bench_function("f64", |b| b.iter(|| integrate(&Binary64, black_box(steps))));
  g.finish();
}

fn integrate_decimal(c: &mut Criterion) {
  let steps = NonZeroU64::new(STEPS).unwrap();
  let mut g = c.benchmark_group("integrate_decimal");
  g.throughput(Throughput::Elements(STEPS));
  for precision in [16, 30, 60, 120] {
    let ctx = DecimalContext::new(precision, Rounding::HalfUp).unwrap();
    g.bench_with_input(BenchmarkId::from_parameter(precision), &ctx, |b, ctx| {
      b.iter(|| integrate(ctx, black_box(steps)));
    });
  }
  g.finish();
}

// Time a single rounded division, the most expensive decimal operation

fn div_decimal(c: &mut Criterion) {
  let mut g = c.benchmark_group("div_decimal");
  let four = Decimal::from(4);
  let divisor: Decimal = "1.0000002500000000000000000000000".parse().unwrap();
  for precision in [16, 30, 60, 120] {
    let ctx = DecimalContext::new(precision, Rounding::HalfEven).unwrap();
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(precision), &ctx, |b, ctx| {
      b.iter(|| ctx.div(black_box(&four), black_box(&divisor)));
    });
  }
  g.finish();
}

criterion_group!(ieee,
  exact_decimal,
  encode,
);

criterion_group!(pi,
  integrate_native,
  integrate_decimal,
  div_decimal,
);

criterion_main!(ieee, pi);
