use criterion::{black_box, criterion_group, criterion_main, Criterion};

use attest_stark::batch::{generate_consistency_proof, verify_consistency_proof, Period};
use attest_stark::merkle::CommitmentTree;
use attest_stark::proof::{generate_verification_proof_at, ProofRequest};
use attest_stark::Features;

fn sample_periods(count: usize) -> Vec<Period> {
    (0..count)
        .map(|i| Period {
            score: 60 + (i % 30) as u32,
            timestamp: 1_000 + i as u64,
        })
        .collect()
}

fn bench_consistency(c: &mut Criterion) {
    let periods = sample_periods(8);
    c.bench_function("consistency_prove_8_periods", |b| {
        b.iter(|| generate_consistency_proof(black_box(&periods), 55, "agent-bench"))
    });

    let proof = generate_consistency_proof(&periods, 55, "agent-bench").expect("all pass");
    c.bench_function("consistency_verify_8_periods", |b| {
        b.iter(|| verify_consistency_proof(black_box(&proof)))
    });
}

fn bench_single_proof(c: &mut Criterion) {
    let request = ProofRequest {
        agent_id: "agent-bench".to_owned(),
        score: 80,
        features: Features {
            has_github: true,
            has_api_endpoint: true,
            capability_count: 5,
            code_lines: 0,
            has_documentation: true,
            test_coverage: 0,
        },
        threshold: 60,
        validity_days: 30,
    };
    c.bench_function("single_threshold_prove", |b| {
        b.iter(|| generate_verification_proof_at(black_box(&request), 1_700_000_000))
    });
}

fn bench_merkle(c: &mut Criterion) {
    let leaves: Vec<Vec<u8>> = (0..256u32).map(|i| i.to_le_bytes().to_vec()).collect();
    c.bench_function("merkle_commit_256_leaves", |b| {
        b.iter(|| CommitmentTree::from_leaves(black_box(leaves.iter())))
    });
}

criterion_group!(benches, bench_consistency, bench_single_proof, bench_merkle);
criterion_main!(benches);
