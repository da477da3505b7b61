//! Colour palette and colour-selection strategies.
//!
//! A new box picks its colour once, at creation. Split children copy the
//! parent's colour verbatim and never consult the picker.

use crate::constants::DEFAULT_PALETTE;
use crate::types::BoxId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Non-empty ordered list of colour names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl TryFrom<Vec<String>> for Palette {
    type Error = &'static str;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors).ok_or("palette must contain at least one colour")
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

impl Palette {
    /// Build a palette; returns `None` if `colors` is empty.
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        (!colors.is_empty()).then_some(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colour at `index`, wrapping around the palette length
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect())
    }
}

/// Picks a palette entry for a freshly created box.
pub trait ColorPicker: std::fmt::Debug {
    fn pick(&mut self, palette: &Palette, id: &BoxId) -> String;
}

/// Uniform random choice.
#[derive(Debug)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPicker for RandomColors {
    fn pick(&mut self, palette: &Palette, _id: &BoxId) -> String {
        let index = self.rng.gen_range(0..palette.len());
        palette.get(index).to_string()
    }
}

/// Cycles through the palette in order.
#[derive(Debug, Default)]
pub struct RoundRobinColors {
    next: usize,
}

impl RoundRobinColors {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorPicker for RoundRobinColors {
    fn pick(&mut self, palette: &Palette, _id: &BoxId) -> String {
        let color = palette.get(self.next).to_string();
        self.next = (self.next + 1) % palette.len();
        color
    }
}

/// Deterministic choice from a SHA-256 digest of the box id.
#[derive(Debug, Default)]
pub struct IdHashColors;

impl ColorPicker for IdHashColors {
    fn pick(&mut self, palette: &Palette, id: &BoxId) -> String {
        let digest = Sha256::digest(id.as_str().as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(head) % palette.len() as u64) as usize;
        palette.get(index).to_string()
    }
}

/// Colour strategy as named in the settings file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorStrategy {
    #[default]
    Random,
    RoundRobin,
    IdHash,
}

impl ColorStrategy {
    pub fn build(self) -> Box<dyn ColorPicker> {
        match self {
            Self::Random => Box::new(RandomColors::new()),
            Self::RoundRobin => Box::new(RoundRobinColors::new()),
            Self::IdHash => Box::new(IdHashColors),
        }
    }
}
