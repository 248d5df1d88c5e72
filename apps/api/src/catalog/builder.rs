//! Occupation Catalog Builder. Materializes the static table into the
//! immutable in-memory dataset served for the life of the process.

use std::collections::HashMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::definitions::{Category, OccupationDefinition};
use crate::catalog::series::{generate, DataPoint, Draws, RngDraws, MONTHS};
use crate::catalog::trend::{classify, Trend};

/// Number of leading code characters that form the series seed.
const SEED_PREFIX_LEN: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("occupation code '{0}' must start with four digits")]
    MalformedCode(String),

    #[error("occupation code '{0}' appears more than once")]
    DuplicateCode(String),

    #[error("occupation '{0}' has an empty title")]
    EmptyTitle(String),

    #[error("occupation '{code}' has {points} data points, expected 12")]
    IncompleteSeries { code: String, points: usize },
}

/// How the invitation/backlog noise is sourced when building the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    /// Fresh entropy on every build.
    Live,
    /// Reproducible: each occupation gets a generator seeded from this value
    /// mixed with a hash of its full code.
    Seeded(u64),
}

impl SeriesMode {
    fn draws_for(&self, code: &str) -> RngDraws<StdRng> {
        match self {
            SeriesMode::Live => RngDraws(StdRng::from_entropy()),
            SeriesMode::Seeded(seed) => RngDraws(StdRng::seed_from_u64(seed ^ code_hash(code))),
        }
    }
}

/// FNV-1a over the code bytes. Stable across builds and platforms.
fn code_hash(code: &str) -> u64 {
    code.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

impl fmt::Display for SeriesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesMode::Live => write!(f, "live"),
            SeriesMode::Seeded(seed) => write!(f, "seeded({seed})"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Occupation {
    pub code: String,
    pub title: String,
    pub category: Category,
    pub trend: Trend,
    pub description: String,
    /// Jan..Dec, always twelve points.
    pub data: Vec<DataPoint>,
}

impl Occupation {
    /// The December data point. `Catalog` only admits twelve-point series.
    pub fn latest(&self) -> &DataPoint {
        &self.data[self.data.len() - 1]
    }

    pub fn total_invitations(&self) -> u32 {
        self.data.iter().map(|p| p.invitations).sum()
    }
}

/// The read-only dataset. Keeps definition order and a code index.
#[derive(Debug, Clone)]
pub struct Catalog {
    occupations: Vec<Occupation>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_occupations(occupations: Vec<Occupation>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(occupations.len());
        for (i, occupation) in occupations.iter().enumerate() {
            if occupation.data.len() != MONTHS.len() {
                return Err(CatalogError::IncompleteSeries {
                    code: occupation.code.clone(),
                    points: occupation.data.len(),
                });
            }
            if index.insert(occupation.code.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCode(occupation.code.clone()));
            }
        }
        Ok(Self { occupations, index })
    }

    pub fn occupations(&self) -> &[Occupation] {
        &self.occupations
    }

    pub fn get(&self, code: &str) -> Option<&Occupation> {
        self.index.get(code).map(|&i| &self.occupations[i])
    }

    pub fn len(&self) -> usize {
        self.occupations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupations.is_empty()
    }
}

/// Builds the catalog, sourcing noise according to `mode`.
pub fn build(
    definitions: &[OccupationDefinition],
    mode: SeriesMode,
) -> Result<Catalog, CatalogError> {
    build_with(definitions, |code| mode.draws_for(code))
}

/// Builds the catalog with a caller-supplied draw source per occupation.
/// `draws_for` receives the occupation's code.
pub fn build_with<F, D>(
    definitions: &[OccupationDefinition],
    mut draws_for: F,
) -> Result<Catalog, CatalogError>
where
    F: FnMut(&str) -> D,
    D: Draws,
{
    let mut occupations = Vec::with_capacity(definitions.len());

    for definition in definitions {
        if definition.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(definition.code.to_string()));
        }

        let seed = seed_from_code(definition.code)?;
        let mut draws = draws_for(definition.code);
        let data = generate(
            definition.base_score,
            volatility_for(definition.base_score),
            seed,
            definition.base_volume,
            &mut draws,
        );
        let trend = classify(&data);

        occupations.push(Occupation {
            code: definition.code.to_string(),
            title: definition.title.to_string(),
            category: definition.category,
            trend,
            description: describe(definition),
            data,
        });
    }

    Catalog::from_occupations(occupations)
}

/// High-cutoff occupations move less.
pub fn volatility_for(base_score: i32) -> i32 {
    if base_score > 85 {
        3
    } else {
        5
    }
}

/// Integer value of the code's first four characters.
pub fn seed_from_code(code: &str) -> Result<u32, CatalogError> {
    code.get(..SEED_PREFIX_LEN)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|prefix| prefix.parse().ok())
        .ok_or_else(|| CatalogError::MalformedCode(code.to_string()))
}

fn describe(definition: &OccupationDefinition) -> String {
    format!(
        "Eligible for skilled migration under ANZSCO {}. This {} occupation involves tasks related to {}. Track the latest invitation rounds and application backlog below.",
        definition.code,
        definition.category,
        definition.title.to_lowercase()
    )
}
