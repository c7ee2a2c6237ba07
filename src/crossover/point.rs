//! Multi-point crossover.

use tracing::instrument;

use crate::{chromosome::Chromosome, rng::RandomNumberGenerator};

/// Draws `count` distinct cut positions from `1..=length` by running the first
/// `count` steps of a Fisher-Yates shuffle.
fn cut_positions(length: usize, count: usize, rng: &mut RandomNumberGenerator) -> Vec<usize> {
    let mut candidates: Vec<usize> = (1..=length).collect();
    for i in 0..count {
        let j = i + rng.index(length - i);
        candidates.swap(i, j);
    }
    candidates.truncate(count);
    candidates.sort_unstable();
    candidates
}

/// Cuts both parents at `count` random positions and alternates the segments
/// between them, starting with `a`.
///
/// `count` is clamped to the gene length. With `count == 0` the child is a copy of
/// `a`'s genes.
#[instrument(level = "trace", skip(a, b, rng), fields(genes = a.len()))]
pub(crate) fn crossover(
    a: &Chromosome,
    b: &Chromosome,
    count: usize,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    let length = a.len();
    let count = count.min(length);

    let mut bounds = Vec::with_capacity(count + 2);
    bounds.push(0);
    bounds.extend(cut_positions(length, count, rng));
    bounds.push(length);

    let mut genes = a.genes.clone();
    for (segment, window) in bounds.windows(2).enumerate() {
        if segment % 2 == 0 {
            continue;
        }
        for j in window[0]..window[1] {
            if let Some(&gene) = b.genes.get(j) {
                genes[j] = gene;
            }
        }
    }

    Chromosome::new(genes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents(length: usize) -> (Chromosome, Chromosome) {
        (
            Chromosome::new(vec![0.0; length]),
            Chromosome::new(vec![1.0; length]),
        )
    }

    /// Number of places where consecutive genes switch parent.
    fn switches(child: &Chromosome) -> usize {
        child.genes.windows(2).filter(|w| w[0] != w[1]).count()
    }

    #[test]
    fn test_zero_points_copies_first_parent() {
        let a = Chromosome::new(vec![1.0, 2.0, 3.0]);
        let b = Chromosome::new(vec![4.0, 5.0, 6.0]);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let child = crossover(&a, &b, 0, &mut rng);
        assert_eq!(child.genes, a.genes);
    }

    #[test]
    fn test_cut_positions_are_distinct_and_sorted() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        for _ in 0..100 {
            let cuts = cut_positions(10, 4, &mut rng);
            assert_eq!(cuts.len(), 4);
            assert!(cuts.windows(2).all(|w| w[0] < w[1]));
            assert!(cuts.iter().all(|&c| (1..=10).contains(&c)));
        }
    }

    #[test]
    fn test_single_point_starts_with_first_parent() {
        let (a, b) = parents(8);
        let mut rng = RandomNumberGenerator::from_seed(3);

        for _ in 0..50 {
            let child = crossover(&a, &b, 1, &mut rng);
            assert_eq!(child.genes[0], 0.0);
            // Genes before the cut come from `a`, the rest from `b`.
            assert!(switches(&child) <= 1);
            let first_b = child.genes.iter().position(|&g| g == 1.0);
            if let Some(p) = first_b {
                assert!(child.genes[p..].iter().all(|&g| g == 1.0));
            }
        }
    }

    #[test]
    fn test_switch_count_bounded_by_points() {
        let (a, b) = parents(12);
        let mut rng = RandomNumberGenerator::from_seed(4);

        for count in 0..=12 {
            let child = crossover(&a, &b, count, &mut rng);
            assert_eq!(child.len(), 12);
            assert!(switches(&child) <= count);
        }
    }

    #[test]
    fn test_count_is_clamped_to_length() {
        let (a, b) = parents(3);
        let mut rng = RandomNumberGenerator::from_seed(5);

        // All three cuts are taken: [0,1) a, [1,2) b, [2,3) a, [3,3) b.
        let child = crossover(&a, &b, 10, &mut rng);
        assert_eq!(child.genes, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_empty_parents() {
        let a = Chromosome::new(Vec::new());
        let b = Chromosome::new(Vec::new());
        let mut rng = RandomNumberGenerator::from_seed(6);
        assert!(crossover(&a, &b, 2, &mut rng).is_empty());
    }
}
