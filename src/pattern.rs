use std::fmt;
use std::str::FromStr;

use crate::error::BenchError;
use crate::list::Key;
use crate::rng::Xorshift64;

/// Modulus used by `sawtooth` and `staggered` when the supplied parameter
/// is 0.
pub const DEFAULT_MODULUS: u64 = 32;

/// A named rule mapping index to key, used to synthesize one benchmark
/// input per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    OrganPipe,
    Sawtooth,
    Staggered,
}

impl Pattern {
    /// Every pattern, in the order the driver runs them.
    pub const ALL: [Pattern; 6] = [
        Pattern::Random,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::OrganPipe,
        Pattern::Sawtooth,
        Pattern::Staggered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::OrganPipe => "organpipe",
            Pattern::Sawtooth => "sawtooth",
            Pattern::Staggered => "staggered",
        }
    }

    /// Produces the n keys for this pattern.
    ///
    /// Only `random` draws from the generator; the other five are pure in
    /// (n, param). `param` is the modulus for `sawtooth`/`staggered`, with
    /// 0 meaning [`DEFAULT_MODULUS`]; the remaining patterns ignore it.
    /// n = 0 yields an empty sequence for every pattern.
    pub fn fill(self, n: usize, param: u64, rng: &mut Xorshift64) -> Vec<Key> {
        match self {
            Pattern::Random => (0..n).map(|_| rng.next_key()).collect(),
            Pattern::Ascending => (0..n).map(|i| i as Key).collect(),
            Pattern::Descending => (0..n).map(|i| (n - 1 - i) as Key).collect(),
            Pattern::OrganPipe => (0..n).map(|i| i.min(n - 1 - i) as Key).collect(),
            Pattern::Sawtooth => {
                let m = modulus(param);
                (0..n).map(|i| (i as u64 % m) as Key).collect()
            }
            Pattern::Staggered => {
                let m = modulus(param);
                (0..n)
                    .map(|i| {
                        // Wraps mod 2^64 for extreme moduli, same in every
                        // build profile.
                        let i = i as u64;
                        i.wrapping_mul(m).wrapping_add(i % m) as Key
                    })
                    .collect()
            }
        }
    }
}

fn modulus(param: u64) -> u64 {
    if param == 0 {
        DEFAULT_MODULUS
    } else {
        param
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Pattern::Random),
            "ascending" => Ok(Pattern::Ascending),
            "descending" => Ok(Pattern::Descending),
            "organpipe" => Ok(Pattern::OrganPipe),
            "sawtooth" => Ok(Pattern::Sawtooth),
            "staggered" => Ok(Pattern::Staggered),
            other => Err(BenchError::UnknownPattern {
                name: other.to_string(),
            }),
        }
    }
}
