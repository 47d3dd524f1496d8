//! Synthesized values for unresolved variables.
//!
//! When a template references a variable that is unknown or has no value,
//! a plausible placeholder is generated from the variable's declared type
//! instead of leaving the marker in place. The random source is explicit so
//! callers can seed it for reproducible output.

use crate::models::Variable;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use uuid::Builder;

/// Length of generated alphanumeric tokens.
const TOKEN_LENGTH: usize = 10;

/// Vocabulary for `string`/`text` placeholders.
const WORDS: &[&str] = &[
    "alpha", "amber", "anchor", "apple", "arrow", "atlas", "badge", "bamboo", "beacon", "birch",
    "bridge", "canyon", "carbon", "cedar", "circuit", "cobalt", "comet", "copper", "coral",
    "crystal", "delta", "ember", "falcon", "fern", "garnet", "glacier", "harbor", "hazel",
    "horizon", "indigo", "island", "jasper", "juniper", "lagoon", "lantern", "maple", "meadow",
    "nebula", "oasis", "orbit", "pebble", "pine", "prism", "quartz", "raven", "river", "saffron",
    "signal", "summit", "thunder", "timber", "velvet", "willow", "zenith",
];

/// The shape of a synthesized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// A random word.
    Word,
    /// A random integer in `1..=99`.
    Number,
    /// One of a random token, integer or UUID.
    Any,
}

impl SampleKind {
    /// Picks the kind matching a variable's declared type.
    ///
    /// `string` and `text` map to words, `number` to integers and anything
    /// else (including no variable at all) to [`SampleKind::Any`].
    pub fn for_variable(variable: Option<&Variable>) -> Self {
        let kind = variable
            .and_then(|variable| variable.kind.as_deref())
            .map(str::to_ascii_lowercase);

        match kind.as_deref() {
            Some("string") | Some("text") => SampleKind::Word,
            Some("number") => SampleKind::Number,
            _ => SampleKind::Any,
        }
    }
}

/// Source of synthesized values.
pub trait Sampler {
    /// Generates a value of the given kind.
    fn sample(&self, kind: SampleKind) -> String;
}

/// Default sampler backed by a seedable pseudo-random generator.
///
/// Every call draws a fresh value, so two unresolved occurrences of the same
/// name may receive different values.
#[derive(Debug)]
pub struct RandomSampler {
    rng: RefCell<StdRng>,
}

impl RandomSampler {
    /// Creates a sampler seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Creates a sampler producing a reproducible sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Creates a seeded sampler when `seed` is given, an entropy-seeded one
    /// otherwise.
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    fn word(rng: &mut StdRng) -> String {
        WORDS.choose(rng).copied().unwrap_or("value").to_string()
    }

    fn number(rng: &mut StdRng) -> String {
        rng.gen_range(1..=99).to_string()
    }

    fn token(rng: &mut StdRng) -> String {
        rng.sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect::<String>()
            .to_ascii_lowercase()
    }

    fn uuid(rng: &mut StdRng) -> String {
        Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn sample(&self, kind: SampleKind) -> String {
        let mut rng = self.rng.borrow_mut();
        let rng = &mut *rng;
        match kind {
            SampleKind::Word => Self::word(rng),
            SampleKind::Number => Self::number(rng),
            SampleKind::Any => match rng.gen_range(0..3) {
                0 => Self::token(rng),
                1 => Self::number(rng),
                _ => Self::uuid(rng),
            },
        }
    }
}
