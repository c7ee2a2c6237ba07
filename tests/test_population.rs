use genetics_engine::{error::GeneticError, Chromosome, Population, RandomNumberGenerator};

#[test]
fn test_generate_population() {
    let population = Population::generate(3, 2, |i, j| (i * 10 + j) as f64).unwrap();

    assert_eq!(population.len(), 3);
    assert_eq!(population[0].genes, vec![0.0, 1.0]);
    assert_eq!(population[1].genes, vec![10.0, 11.0]);
    assert_eq!(population[2].genes, vec![20.0, 21.0]);
}

#[test]
fn test_generate_calls_generator_in_order() {
    let mut calls = Vec::new();
    Population::generate(2, 3, |i, j| {
        calls.push((i, j));
        0.0
    })
    .unwrap();

    assert_eq!(calls, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_generate_zero_size() {
    let result = Population::generate(0, 2, |_, _| 0.0);
    assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
}

#[test]
fn test_aggregates_on_fresh_population() {
    let population: Population = (0..4)
        .map(|i| {
            let mut c = Chromosome::new(vec![i as f64]);
            c.fitness = i as f64 - 1.0;
            c
        })
        .collect();

    assert_eq!(population.sum_fitnesses(), 2.0);
    // Fresh chromosomes carry zero weight until evaluated.
    assert_eq!(population.sum_weights(), 0.0);
    assert_eq!(population.count_negative_weights(), 0);
    assert_eq!(population.min_weight(), 0.0);
}

#[test]
fn test_shuffle_preserves_chromosomes() {
    let mut population = Population::generate(50, 1, |i, _| i as f64).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(99);
    population.shuffle(&mut rng);

    let mut genes: Vec<f64> = population.iter().map(|c| c.genes[0]).collect();
    assert_ne!(genes, (0..50).map(|i| i as f64).collect::<Vec<_>>());
    genes.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(genes, (0..50).map(|i| i as f64).collect::<Vec<_>>());
}

#[test]
fn test_best_is_last() {
    let mut population: Population = [2.0, 9.0, 4.0]
        .iter()
        .map(|&f| {
            let mut c = Chromosome::new(vec![f]);
            c.fitness = f;
            c
        })
        .collect();
    population.sort_by_fitness();

    assert_eq!(population.best().unwrap().fitness, 9.0);
    assert!(Population::default().best().is_none());
}
