use std::{hint::black_box, time::Duration};

use criterion::{
  criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion, Throughput,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use union_find::{kruskal, ByRank, BySize, DisjointSetUnion, MergePolicy, Unbalanced};

fn random_pairs<R: Rng>(len: usize, count: usize, rng: &mut R) -> Vec<(usize, usize)> {
  (0..count)
    .map(|_| (rng.random_range(0..len), rng.random_range(0..len)))
    .collect()
}

fn benchmark_unions<M: Measurement, P: MergePolicy>(
  group: &mut BenchmarkGroup<M>,
  id: &str,
  policy: P,
  len: usize,
  pairs: &[(usize, usize)],
) {
  group.bench_function(id, |b| {
    b.iter(|| {
      let mut uf = DisjointSetUnion::with_policy(len, policy);
      for &(x, y) in pairs {
        black_box(uf.union(x, y).unwrap());
      }
      black_box(uf.component_count())
    })
  });
}

fn chain_unions(c: &mut Criterion) {
  const N: usize = 100_000;

  let mut group = c.benchmark_group("chain unions");
  group.throughput(Throughput::Elements(N as u64));
  group.measurement_time(Duration::from_secs(10));

  // Reversed chain, so unbalanced merges hang each new root above the last.
  let pairs = (1..N).map(|i| (i, i - 1)).collect::<Vec<_>>();
  benchmark_unions(&mut group, "chain by rank", ByRank, N, &pairs);
  benchmark_unions(&mut group, "chain by size", BySize, N, &pairs);
  benchmark_unions(&mut group, "chain unbalanced", Unbalanced, N, &pairs);

  group.finish();
}

fn random_unions(c: &mut Criterion) {
  const N: usize = 100_000;
  const N_UNIONS: usize = 200_000;

  let mut group = c.benchmark_group("random unions");
  group.throughput(Throughput::Elements(N_UNIONS as u64));
  group.measurement_time(Duration::from_secs(10));

  let mut rng = StdRng::seed_from_u64(392420);
  let pairs = random_pairs(N, N_UNIONS, &mut rng);
  benchmark_unions(&mut group, "random by rank", ByRank, N, &pairs);
  benchmark_unions(&mut group, "random by size", BySize, N, &pairs);
  benchmark_unions(&mut group, "random unbalanced", Unbalanced, N, &pairs);

  group.finish();
}

fn spanning_forest(c: &mut Criterion) {
  const N: usize = 20_000;
  const N_EDGES: usize = 100_000;

  let mut rng = StdRng::seed_from_u64(4328975198);
  let edges = random_pairs(N, N_EDGES, &mut rng)
    .into_iter()
    .map(|(u, v)| (u, v, rng.random_range(0..1_000u32)))
    .collect::<Vec<_>>();

  let mut group = c.benchmark_group("kruskal");
  group.throughput(Throughput::Elements(N_EDGES as u64));
  group.measurement_time(Duration::from_secs(10));

  group.bench_function("kruskal random graph", |b| {
    b.iter(|| black_box(kruskal(N, edges.iter().copied()).unwrap()))
  });
  group.finish();
}

criterion_group!(benches, chain_unions, random_unions, spanning_forest);
criterion_main!(benches);
