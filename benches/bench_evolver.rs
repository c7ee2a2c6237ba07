use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genetics_engine::{
    Chromosome, CrossoverMethod, Evolver, EvolverConfiguration, Population, RandomNumberGenerator,
    SelectionMethod,
};

fn sphere(chromosome: &Chromosome) -> f64 {
    -chromosome.genes.iter().map(|g| g * g).sum::<f64>()
}

fn halve(chromosome: &Chromosome, gene: usize) -> f64 {
    chromosome.genes[gene] / 2.0
}

fn bench_breed_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("breed_generation");

    for (name, selection) in [
        ("rank", SelectionMethod::Rank),
        ("roulette", SelectionMethod::Roulette),
        ("tournament", SelectionMethod::Tournament),
    ] {
        for size in [10, 100, 1000].iter() {
            let configuration = EvolverConfiguration::builder()
                .selection(selection.clone())
                .crossover(CrossoverMethod::point(2))
                .elitism(2)
                .crossover_rate(0.7)
                .mutation_rate(0.05)
                .build()
                .unwrap();
            let evolver = Evolver::new(configuration, sphere, halve);
            let mut rng = RandomNumberGenerator::from_seed(42);
            let mut population =
                Population::generate(*size, 16, |i, j| ((i * 31 + j * 17) % 100) as f64 / 10.0)
                    .unwrap();
            evolver.evaluate(&mut population).unwrap();

            group.bench_function(format!("{}_{}", name, size), |b| {
                b.iter(|| {
                    let next = evolver
                        .breed_generation(black_box(&mut population), &mut rng)
                        .unwrap();
                    black_box(next)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_breed_generation);
criterion_main!(benches);
