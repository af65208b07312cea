use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sparse_poly::utils::profiling::setup_tracing;
use sparse_poly::SparsePolynomial;

fn setup_inputs(num_terms: usize) -> (SparsePolynomial<i64>, SparsePolynomial<i64>) {
    let mut rng = ChaCha20Rng::seed_from_u64(num_terms as u64);
    let mut random_poly = || {
        (0..num_terms)
            .map(|_| (rng.gen_range(0..4 * num_terms), rng.gen_range(-1000..=1000)))
            .collect::<SparsePolynomial<i64>>()
    };
    (random_poly(), random_poly())
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for &num_terms in &[8, 64, 512, 2048] {
        let (lhs, rhs) = setup_inputs(num_terms);

        group.bench_with_input(BenchmarkId::new("sequential", num_terms), &num_terms, |b, _| {
            b.iter(|| lhs.mul_sequential(&rhs))
        });
        group.bench_with_input(BenchmarkId::new("parallel", num_terms), &num_terms, |b, _| {
            b.iter(|| &lhs * &rhs)
        });
    }

    group.finish();
}

fn profile_mul(_: &mut Criterion) {
    let _guard = setup_tracing(Some("trace-mul.json"));
    let (lhs, rhs) = setup_inputs(4096);
    let span = tracing::info_span!("profile_mul", num_terms = 4096);
    let product = span.in_scope(|| &lhs * &rhs);
    tracing::info!(degree = product.degree(), terms = product.len(), "profiled product");
}

criterion_group!(benches, bench_mul, profile_mul);
criterion_main!(benches);
