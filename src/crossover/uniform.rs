//! Uniform crossover.

use tracing::instrument;

use crate::{chromosome::Chromosome, rng::RandomNumberGenerator};

/// Takes every gene from `a` or `b` on an independent fair coin flip.
#[instrument(level = "trace", skip(a, b, rng), fields(genes = a.len()))]
pub(crate) fn crossover(
    a: &Chromosome,
    b: &Chromosome,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    let genes = a
        .genes
        .iter()
        .enumerate()
        .map(|(j, &gene)| {
            if rng.coin_flip() {
                gene
            } else {
                b.genes.get(j).copied().unwrap_or(gene)
            }
        })
        .collect();

    Chromosome::new(genes)
}
