//! Benchmarks for the matching engine and ledger.
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run one group
//! cargo bench -- donor_feed
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use blood_match::types::FacilityKind;
use blood_match::{
    can_donate, filter_compatible_inventory, rank_urgent_requests_for_donor, BloodGroup,
    DonationRequest, InventoryEntry, InventoryLedger,
};

// ============================================================================
// HELPER FUNCTIONS - Deterministic data generation
// ============================================================================

fn random_group(rng: &mut ChaCha8Rng) -> BloodGroup {
    BloodGroup::ALL[rng.gen_range(0..BloodGroup::ALL.len())]
}

fn generate_inventory(count: usize, seed: u64) -> Vec<InventoryEntry> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| InventoryEntry::new(i as u64, random_group(&mut rng), rng.gen_range(0..60)))
        .collect()
}

fn generate_requests(count: usize, seed: u64) -> Vec<DonationRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| DonationRequest::new(format!("R{i}"), random_group(&mut rng), rng.gen_range(1..5)))
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_can_donate(c: &mut Criterion) {
    c.bench_function("can_donate_text", |b| {
        b.iter(|| can_donate(black_box("B-"), black_box("AB+")))
    });

    c.bench_function("can_donate_typed_all_pairs", |b| {
        b.iter(|| {
            let mut count = 0;
            for donor in BloodGroup::ALL {
                for recipient in BloodGroup::ALL {
                    count += black_box(donor).can_donate_to(black_box(recipient)) as u32;
                }
            }
            count
        })
    });
}

fn bench_inventory_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_filter");
    for size in [100usize, 10_000] {
        let entries = generate_inventory(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| filter_compatible_inventory(black_box(BloodGroup::OPos), entries))
        });
    }
    group.finish();
}

fn bench_donor_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("donor_feed");
    for size in [100usize, 10_000] {
        let requests = generate_requests(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, requests| {
            b.iter(|| rank_urgent_requests_for_donor(black_box(BloodGroup::ONeg), requests))
        });
    }
    group.finish();
}

fn bench_ledger_state_root(c: &mut Criterion) {
    let mut ledger = InventoryLedger::with_capacity(1_000);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for id in 0..1_000u64 {
        ledger.register_facility(id, FacilityKind::BloodBank).unwrap();
        for group in BloodGroup::ALL {
            ledger.restock(id, group, rng.gen_range(0..60)).unwrap();
        }
    }

    c.bench_function("ledger_state_root_1000_facilities", |b| {
        b.iter(|| ledger.compute_state_root().unwrap())
    });
}

criterion_group!(
    benches,
    bench_can_donate,
    bench_inventory_filter,
    bench_donor_feed,
    bench_ledger_state_root
);
criterion_main!(benches);
