use tracing::{debug, error, info, instrument};

use super::{
    functions::{FitnessFunction, MutationFunction},
    options::EvolverConfiguration,
};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    population::Population,
    rng::RandomNumberGenerator,
};

/// Represents the result of an evolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best chromosome of the final population.
    pub best: Chromosome,
    /// The number of generations bred after the initial evaluation.
    pub generations: usize,
}

/// Evolves a population using a configuration, a fitness function and a
/// mutation function.
#[derive(Debug, Clone)]
pub struct Evolver<Fitness, Mutation> {
    configuration: EvolverConfiguration,
    fitness: Fitness,
    mutation: Mutation,
}

impl<Fitness, Mutation> Evolver<Fitness, Mutation>
where
    Fitness: FitnessFunction,
    Mutation: MutationFunction,
{
    /// Creates a new `Evolver`.
    ///
    /// # Arguments
    ///
    /// * `configuration` - Strategies, elitism and rates used for every generation.
    /// * `fitness` - Scores chromosomes. Higher is better.
    /// * `mutation` - Produces the replacement value of a mutated gene.
    pub fn new(configuration: EvolverConfiguration, fitness: Fitness, mutation: Mutation) -> Self {
        Self {
            configuration,
            fitness,
            mutation,
        }
    }

    pub fn configuration(&self) -> &EvolverConfiguration {
        &self.configuration
    }

    /// Evolves `population` in place until `should_continue` returns `false`.
    ///
    /// The initial population is evaluated and sorted first. After that, and after
    /// every bred generation, `should_continue` is asked whether to go on. It is the
    /// only stopping condition: a predicate that never returns `false` never stops.
    ///
    /// On return the population is sorted ascending by fitness, its last chromosome
    /// being the best.
    ///
    /// # Errors
    ///
    /// This method returns an error before any evaluation if:
    /// - The population is empty
    /// - The crossover count is not less than the population size
    /// - The elitism count exceeds the population size
    /// - The chromosomes do not share one gene length
    ///
    /// and aborts the run if:
    /// - The fitness function returns NaN or an infinite value
    /// - A crossover produces a child of the wrong gene length
    #[instrument(level = "debug", skip_all, fields(population_size = population.len()))]
    pub fn evolve<Continue>(
        &self,
        population: &mut Population,
        rng: &mut RandomNumberGenerator,
        mut should_continue: Continue,
    ) -> Result<EvolutionResult>
    where
        Continue: FnMut(&EvolverConfiguration, &Population) -> bool,
    {
        if let Err(err) = self.validate(population) {
            error!(%err, "Refusing to evolve population");
            return Err(err);
        }

        self.evaluate(population)?;
        log_generation(0, population);

        let mut generations = 0;
        while should_continue(&self.configuration, &*population) {
            *population = self.breed_generation(population, rng)?;
            self.evaluate(population)?;

            generations += 1;
            log_generation(generations, population);
        }

        let best = population
            .best()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        info!(generations, best_fitness = best.fitness, "Evolution finished");

        Ok(EvolutionResult { best, generations })
    }

    /// Scores every chromosome, copies the score into its weight and sorts the
    /// population ascending by fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::FitnessCalculation` if a score is NaN or infinite.
    pub fn evaluate(&self, population: &mut Population) -> Result<()> {
        for chromosome in population.iter_mut() {
            let fitness = self.fitness.fitness(chromosome);

            if !fitness.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    fitness
                )));
            }

            chromosome.fitness = fitness;
            chromosome.weight = fitness;
        }

        population.sort_by_fitness();
        Ok(())
    }

    /// Breeds the next generation from an evaluated, ascending-sorted population.
    ///
    /// The last `elitism` chromosomes are carried over unchanged to the front of the
    /// returned population, best first; every other slot is filled with a freshly
    /// bred child. The returned population has the same size and is not yet evaluated. Selection may reorder `population` and rewrite
    /// its weights.
    #[instrument(level = "debug", skip_all)]
    pub fn breed_generation(
        &self,
        population: &mut Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let size = population.len();
        let elitism = self.configuration.elitism().min(size);
        let gene_length = population.gene_length().unwrap_or_default();

        let mut next = Vec::with_capacity(size);
        next.extend(population[size - elitism..].iter().rev().cloned());

        while next.len() < size {
            next.push(self.breed_child(population, gene_length, rng)?);
        }

        Ok(Population::new(next))
    }

    /// Selects one or two parents, optionally crosses them over and mutates the
    /// child gene by gene.
    fn breed_child(
        &self,
        population: &mut Population,
        gene_length: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        let selection = self.configuration.selection();

        let mut child = if rng.chance(self.configuration.crossover_rate()) {
            let a = selection.select(population, rng)?.clone();
            let b = selection.select(population, rng)?;
            self.configuration.crossover().crossover(&a, b, rng)
        } else {
            selection.select(population, rng)?.clone()
        };

        if child.len() != gene_length {
            return Err(GeneticError::Breeding(format!(
                "Child has {} genes, expected {}",
                child.len(),
                gene_length
            )));
        }

        let mutation_rate = self.configuration.mutation_rate();
        for gene in 0..child.len() {
            if rng.chance(mutation_rate) {
                let value = self.mutation.mutate(&child, gene);
                child.genes[gene] = value;
            }
        }

        Ok(child)
    }

    fn validate(&self, population: &Population) -> Result<()> {
        self.configuration.validate_for(population.len())?;

        if population.gene_length().is_none() {
            return Err(GeneticError::Configuration(
                "All chromosomes in the population must have the same number of genes"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

fn log_generation(generation: usize, population: &Population) {
    let best_fitness = population.best().map(|c| c.fitness);
    let mean_fitness = population.sum_fitnesses() / population.len() as f64;
    debug!(generation, ?best_fitness, mean_fitness, "Generation evaluated");
}
