use genetics_engine::{Chromosome, CrossoverMethod, RandomNumberGenerator};
use proptest::prelude::*;

fn genes(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, len)
}

proptest! {
    #[test]
    fn prop_point_zero_copies_parent_a(a in genes(8), b in genes(8), seed in any::<u64>()) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let child = CrossoverMethod::point(0).crossover(
            &Chromosome::new(a.clone()),
            &Chromosome::new(b),
            &mut rng,
        );
        prop_assert_eq!(child.genes, a);
    }

    #[test]
    fn prop_point_genes_come_from_parent_at_same_position(
        a in genes(10),
        b in genes(10),
        count in 0usize..10,
        seed in any::<u64>(),
    ) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let child = CrossoverMethod::point(count).crossover(
            &Chromosome::new(a.clone()),
            &Chromosome::new(b.clone()),
            &mut rng,
        );
        prop_assert_eq!(child.len(), 10);
        for (j, gene) in child.genes.iter().enumerate() {
            prop_assert!(*gene == a[j] || *gene == b[j]);
        }
    }

    #[test]
    fn prop_uniform_genes_come_from_parent_at_same_position(
        a in genes(16),
        b in genes(16),
        seed in any::<u64>(),
    ) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let child = CrossoverMethod::uniform().crossover(
            &Chromosome::new(a.clone()),
            &Chromosome::new(b.clone()),
            &mut rng,
        );
        prop_assert_eq!(child.len(), 16);
        for (j, gene) in child.genes.iter().enumerate() {
            prop_assert!(*gene == a[j] || *gene == b[j]);
        }
    }

    #[test]
    fn prop_identical_parents_round_trip(
        parent in genes(6),
        count in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let parent = Chromosome::new(parent);
        let swap = CrossoverMethod::custom(
            |a: &Chromosome, b: &Chromosome, _: usize| {
                Chromosome::new(a.genes.iter().zip(&b.genes).map(|(&x, _)| x).collect())
            },
            count,
        );

        for method in [CrossoverMethod::point(count), CrossoverMethod::uniform(), swap] {
            let child = method.crossover(&parent, &parent, &mut rng);
            prop_assert_eq!(&child.genes, &parent.genes);
        }
    }
}

#[test]
fn test_point_crossover_single_cut_shape() {
    let a = Chromosome::new(vec![0.0; 6]);
    let b = Chromosome::new(vec![1.0; 6]);
    let mut rng = RandomNumberGenerator::from_seed(10);

    let mut saw_cut_inside = false;
    for _ in 0..100 {
        let child = CrossoverMethod::point(1).crossover(&a, &b, &mut rng);
        let cut = child.genes.iter().position(|&g| g == 1.0).unwrap_or(6);
        assert!(cut >= 1);
        assert!(child.genes[..cut].iter().all(|&g| g == 0.0));
        assert!(child.genes[cut..].iter().all(|&g| g == 1.0));
        saw_cut_inside |= cut < 6;
    }
    assert!(saw_cut_inside);
}

#[test]
fn test_two_point_crossover_middle_segment() {
    let a = Chromosome::new(vec![0.0; 8]);
    let b = Chromosome::new(vec![1.0; 8]);
    let mut rng = RandomNumberGenerator::from_seed(12);

    for _ in 0..100 {
        let child = CrossoverMethod::point(2).crossover(&a, &b, &mut rng);
        // a-segment, b-segment, a-segment
        assert_eq!(child.genes[0], 0.0);
        let ones: Vec<usize> = (0..8).filter(|&j| child.genes[j] == 1.0).collect();
        if let (Some(&first), Some(&last)) = (ones.first(), ones.last()) {
            assert_eq!(last - first + 1, ones.len());
        }
    }
}
