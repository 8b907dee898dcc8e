//! Secret word selection.
//!
//! Engine code never reaches for randomness directly; it asks a
//! [`WordSource`] for the next word so tests can script the sequence.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::errors::domain::{DomainError, ValidationKind};

/// The fixed list of words the game ships with. All lowercase ASCII.
pub const WORDS: &[&str] = &[
    "fromage",
    "chocolat",
    "ordinateur",
    "programmation",
    "soleil",
    "lune",
    "ciel",
    "mer",
    "montagne",
    "voiture",
    "train",
    "avion",
    "livre",
    "stylo",
    "table",
    "chaise",
    "fenetre",
    "porte",
    "mur",
    "plafond",
    "sol",
    "jardin",
    "parc",
    "foret",
    "animal",
    "oiseau",
    "poisson",
    "chien",
    "chat",
    "maison",
    "villa",
    "appartement",
    "ecole",
    "universite",
    "bureau",
    "hopital",
    "pharmacie",
    "magasin",
    "supermarche",
    "restaurant",
    "cafe",
    "cinema",
    "theatre",
    "musee",
    "concert",
    "hotel",
    "plage",
    "camping",
    "village",
    "ville",
    "capitale",
];

/// Picks the secret word for a new round.
pub trait WordSource: Send + Sync {
    fn pick(&self) -> String;
}

/// Uniform random choice over a fixed, non-empty list.
///
/// Repeats are allowed: every pick is independent of the previous one.
pub struct RandomWords {
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl RandomWords {
    /// Random source over [`WORDS`], seeded from OS entropy.
    pub fn builtin() -> Self {
        Self {
            words: WORDS.iter().map(|w| (*w).to_string()).collect(),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Random source over a custom list.
    ///
    /// `seed` makes the sequence reproducible; `None` uses OS entropy.
    pub fn new<I, S>(words: I, seed: Option<u64>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = normalize_list(words)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            words,
            rng: Mutex::new(rng),
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for RandomWords {
    fn pick(&self) -> String {
        let mut rng = self.rng.lock();
        // Non-empty by construction.
        self.words
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_default()
    }
}

/// Yields a fixed sequence of words, cycling back to the start.
pub struct ScriptedWords {
    words: Vec<String>,
    next: AtomicUsize,
}

impl ScriptedWords {
    pub fn new<I, S>(words: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            words: normalize_list(words)?,
            next: AtomicUsize::new(0),
        })
    }
}

/// Trim and lowercase every word, dropping blanks. A round needs at least
/// one cell, so a list with nothing left is rejected.
fn normalize_list<I, S>(words: I) -> Result<Vec<String>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let words: Vec<String> = words
        .into_iter()
        .map(|w| w.into().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyWordList,
            "word list must contain at least one non-blank word",
        ));
    }
    Ok(words)
}

impl WordSource for ScriptedWords {
    fn pick(&self) -> String {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.words[i % self.words.len()].clone()
    }
}
