use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::config::GeneticConfig;
use crate::sim::Simulation;

use super::agent::Agent;
use super::rollout::{roll_sequence, Rollout};

/// One evaluated sequence within a generation. Recreated every generation;
/// fitness is never cached across generations.
struct Candidate<A> {
    genes: Vec<A>,
    fitness: f64,
}

/// Linear rank selection over a population ranked ascending by fitness.
///
/// Rank `r` (1 = worst, `population_size` = best) is selected with
/// probability `r / (P(P+1)/2)`: draw a uniform integer in `1..=P(P+1)/2`
/// and walk cumulative rank weights from the best rank downward. Returns an
/// index into the ascending-ranked slice. Every rank has positive mass and
/// the masses sum to 1.
pub(crate) fn select_rank<R: Rng>(rng: &mut R, population_size: usize) -> usize {
    let total = population_size * (population_size + 1) / 2;
    let draw = rng.random_range(1..=total);
    let mut cumulative = 0;
    for rank in (1..=population_size).rev() {
        cumulative += rank;
        if draw <= cumulative {
            return rank - 1;
        }
    }
    // cumulative reaches total on the last rank, so the loop always returns.
    population_size - 1
}

/// Uniform crossover: each gene comes from one of the two parents with
/// equal probability. Parents must share a length.
fn crossover<A: Copy, R: Rng>(rng: &mut R, parent1: &[A], parent2: &[A]) -> Vec<A> {
    parent1
        .iter()
        .zip(parent2)
        .map(|(&g1, &g2)| if rng.random_bool(0.5) { g1 } else { g2 })
        .collect()
}

/// With `probability`, replace one uniformly-random gene with a fresh draw
/// from `universe`. Touches at most one position.
fn mutate<A: Copy, R: Rng>(rng: &mut R, genes: &mut [A], universe: &[A], probability: f64) {
    if genes.is_empty() || !rng.random_bool(probability) {
        return;
    }
    let position = rng.random_range(0..genes.len());
    genes[position] = universe[rng.random_range(0..universe.len())];
}

/// Genetic search over fixed-length action plans: per-generation
/// re-evaluation, rank-based parent selection, uniform crossover, and
/// single-gene mutation.
///
/// Each decision step tracks the best root action seen across all
/// generations; the generation loop has no intrinsic termination and runs
/// until a rollout wins (commit to that sequence) or the simulation budget
/// runs dry (fall back to the tracked best, or the idle action when nothing
/// scored yet).
pub struct GeneticAgent {
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticAgent {
    pub fn new(config: GeneticConfig) -> Self {
        GeneticAgent {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(config: GeneticConfig, seed: u64) -> Self {
        GeneticAgent {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_population<A: Copy>(&mut self, possible: &[A]) -> Vec<Vec<A>> {
        (0..self.config.population_size)
            .map(|_| {
                (0..self.config.sequence_length)
                    .map(|_| possible[self.rng.random_range(0..possible.len())])
                    .collect()
            })
            .collect()
    }
}

impl<S: Simulation> Agent<S> for GeneticAgent {
    fn choose_action(&mut self, sim: &mut S, state: &S::State) -> S::Action {
        let possible = sim.possible_actions(state);
        if possible.is_empty() {
            return sim.idle_action();
        }

        let mut best_action: Option<(S::Action, f64)> = None;
        let mut population = self.random_population(&possible);

        loop {
            // Evaluate the generation. Fitness is recomputed fresh for
            // every member, every generation.
            let mut ranked: Vec<Candidate<S::Action>> =
                Vec::with_capacity(self.config.population_size);
            for genes in &population {
                match roll_sequence(sim, state, genes) {
                    Rollout::Win => return genes[0],
                    Rollout::OutOfBudget => {
                        return match best_action {
                            Some((action, _)) => action,
                            None => sim.idle_action(),
                        };
                    }
                    Rollout::Lost(fitness) | Rollout::Completed(fitness) => {
                        ranked.push(Candidate {
                            genes: genes.clone(),
                            fitness,
                        });
                    }
                }
            }
            ranked.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

            if let Some(best) = ranked.last() {
                let improved = best_action
                    .map_or(true, |(_, fitness)| best.fitness >= fitness);
                if improved {
                    best_action = Some((best.genes[0], best.fitness));
                }
            }

            // Next generation: P/2 pairing rounds of rank selection, then
            // crossover or straight copies, then point mutation.
            let mut next_generation: Vec<Vec<S::Action>> =
                Vec::with_capacity(self.config.population_size);
            for _ in 0..self.config.population_size / 2 {
                let parent1 = &ranked[select_rank(&mut self.rng, ranked.len())];
                let parent2 = &ranked[select_rank(&mut self.rng, ranked.len())];
                if self.rng.random_bool(self.config.crossover_probability) {
                    next_generation.push(crossover(&mut self.rng, &parent1.genes, &parent2.genes));
                    next_generation.push(crossover(&mut self.rng, &parent1.genes, &parent2.genes));
                } else {
                    next_generation.push(parent1.genes.clone());
                    next_generation.push(parent2.genes.clone());
                }
            }
            for member in &mut next_generation {
                mutate(
                    &mut self.rng,
                    member,
                    &possible,
                    self.config.mutation_probability,
                );
            }
            population = next_generation;
        }
    }

    fn name(&self) -> &str {
        "Genetic"
    }
}
