use std::collections::HashSet;

use log::warn;
use rand::{Rng, seq::SliceRandom};

use super::config::OPTIONS_PER_ROUND;
use super::error::{Result, RoundError};
use super::value::RoundValue;

/// Random draws tried before distractors are taken from a shuffled pool instead
const MAX_DISTRACTOR_DRAWS: usize = 64;

/// One round: the value to find and the options offered
#[derive(Debug, Clone, PartialEq)]
pub struct RoundChoice<V> {
    pub target: V,
    /// Exactly `OPTIONS_PER_ROUND` values, unique by key, target included
    pub options: Vec<V>,
}

impl<V: RoundValue> RoundChoice<V> {
    /// Pick a target and distinct distractors from `pool`, then shuffle the options.
    pub fn generate<R: Rng>(pool: &[V], rng: &mut R) -> Result<Self> {
        let distinct = distinct_count(pool);
        if distinct < OPTIONS_PER_ROUND {
            return Err(RoundError::PoolTooSmall {
                distinct,
                required: OPTIONS_PER_ROUND,
            });
        }

        let target = pool[rng.gen_range(0..pool.len())].clone();
        let mut seen = HashSet::from([target.key()]);
        let mut options = vec![target.clone()];

        for _ in 0..MAX_DISTRACTOR_DRAWS {
            if options.len() == OPTIONS_PER_ROUND {
                break;
            }
            let candidate = &pool[rng.gen_range(0..pool.len())];
            if seen.insert(candidate.key()) {
                options.push(candidate.clone());
            }
        }

        if options.len() < OPTIONS_PER_ROUND {
            warn!(
                "distractor sampling gave up after {} draws, slicing a shuffled pool",
                MAX_DISTRACTOR_DRAWS
            );
            let mut rest: Vec<&V> = pool
                .iter()
                .filter(|value| !seen.contains(&value.key()))
                .collect();
            rest.shuffle(rng);
            for value in rest {
                if options.len() == OPTIONS_PER_ROUND {
                    break;
                }
                if seen.insert(value.key()) {
                    options.push(value.clone());
                }
            }
        }

        options.shuffle(rng);
        Ok(Self { target, options })
    }

    pub fn is_target(&self, value: &V) -> bool {
        value.key() == self.target.key()
    }

    /// Position of the target among the options
    pub fn target_index(&self) -> Option<usize> {
        self.options.iter().position(|option| self.is_target(option))
    }
}

fn distinct_count<V: RoundValue>(pool: &[V]) -> usize {
    pool.iter().map(V::key).collect::<HashSet<_>>().len()
}
