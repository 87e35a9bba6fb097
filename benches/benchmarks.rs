use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::OsRng;
use sha3::Digest;

use srp6_sha3::bigint::Bigint;
use srp6_sha3::config::SrpParams;
use srp6_sha3::keccak::sha3_256;
use srp6_sha3::srp::{identity_hash, Participant};

const INPUT: usize = 100 * 1024;
const TEST_MODULUS: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

fn hash_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("hash");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(INPUT as u64));

    g.bench_with_input("sha3_256 (this crate)", &[0u8; INPUT], |b, block| {
        b.iter(|| sha3_256(block))
    });
    g.bench_with_input("sha3_256 (RustCrypto reference)", &[0u8; INPUT], |b, block| {
        b.iter(|| {
            let mut hasher = sha3::Sha3_256::new();
            hasher.update(block);
            hasher.finalize()
        })
    });
    g.finish();
}

fn modpow_benchmarks(c: &mut Criterion) {
    let n = Bigint::from_hex(TEST_MODULUS).unwrap();
    let base = Bigint::from_u64(3);
    let exp = Bigint::from_hex("9a8b7c6d5e4f30201122334455667788").unwrap();

    c.bench_function("modpow (256-bit modulus)", |b| b.iter(|| base.modpow(&exp, &n)));
}

fn srp_handshake_benchmarks(c: &mut Criterion) {
    let params = SrpParams::CONSERVATIVE;
    let id_hash = identity_hash("bench", "password");

    c.bench_function("srp full handshake", |b| {
        b.iter(|| {
            let mut rng = OsRng;
            let mut server =
                Participant::new_server(&id_hash, TEST_MODULUS, &params, &mut rng).unwrap();
            let mut client = Participant::new_client(
                &id_hash,
                TEST_MODULUS,
                server.salt().clone(),
                &params,
                &mut rng,
            )
            .unwrap();
            server.compute_session_key(client.public_key()).unwrap();
            client.set_session_key(server.public_key(), server.scrambler().unwrap()).unwrap();
        })
    });
}

criterion_group!(benches, hash_benchmarks, modpow_benchmarks, srp_handshake_benchmarks);
criterion_main!(benches);
