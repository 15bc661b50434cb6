use classic_crypto::Cipher;
use classic_crypto::hill::{HillCipher, find_key};
use classic_crypto::ring::{Ring, SquareMatrix};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_hill_roundtrip(c: &mut Criterion) {
    let cipher = HillCipher::try_with("GYBNQKURP").expect("build cipher");
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(30);

    c.bench_function("hill_roundtrip_3x3", |b| {
        b.iter(|| {
            let ct = cipher.encrypt(black_box(&message)).expect("encrypt");
            black_box(cipher.decrypt(&ct).expect("decrypt"));
        })
    });
}

fn bench_inverse_by_order(c: &mut Criterion) {
    let ring = Ring::latin();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut group = c.benchmark_group("inverse_mod");

    // Orders above 6 switch from cofactor expansion to Bareiss elimination
    for order in [2usize, 4, 6, 8] {
        let m = SquareMatrix::random_invertible_mod(order, &ring, &mut rng).expect("keygen");
        group.bench_with_input(BenchmarkId::from_parameter(order), &m, |b, m| {
            b.iter(|| black_box(m.inverse_mod(&ring).expect("inverse")))
        });
    }
    group.finish();
}

fn bench_key_recovery(c: &mut Criterion) {
    c.bench_function("find_key_3x3", |b| {
        b.iter(|| {
            let key = find_key(black_box("ACTBCDKLM"), black_box("POHFXVYKV")).expect("find key");
            black_box(key)
        })
    });
}

criterion_group!(
    benches,
    bench_hill_roundtrip,
    bench_inverse_by_order,
    bench_key_recovery
);
criterion_main!(benches);
