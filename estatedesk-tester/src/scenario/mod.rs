mod query;
mod range;
mod selection;

use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::util::iteration_seed;

/// A property that did not hold for one generated input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{property}: {detail}")]
pub struct Violation {
    pub property: &'static str,
    pub detail: String,
}

impl Violation {
    pub fn new(property: &'static str, detail: impl Into<String>) -> Self {
        Self {
            property,
            detail: detail.into(),
        }
    }
}

/// Fail with `property` unless `holds`.
pub fn ensure(holds: bool, property: &'static str, detail: impl FnOnce() -> String) -> Result<(), Violation> {
    if holds {
        Ok(())
    } else {
        Err(Violation::new(property, detail()))
    }
}

pub type Check = fn(&mut ChaCha20Rng) -> Result<(), Violation>;

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub check: Check,
}

const CATALOG: &[Scenario] = &[
    Scenario {
        key: "range",
        description: "Pagination range ordering, bounds, dense and dotted shapes, purity",
        check: range::check,
    },
    Scenario {
        key: "selection",
        description: "Select-all flip, single-row toggle and header checkbox state",
        check: selection::check,
    },
    Scenario {
        key: "query",
        description: "Page reset on search/filter/sort, stale tickets, total reconciliation",
        check: query::check,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.key == key)
}

pub fn all_keys() -> Vec<String> {
    CATALOG.iter().map(|s| s.key.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub fn run_scenario(scenario: &Scenario, seed: u64, iterations: usize, verbose: bool) -> ScenarioResult {
    if verbose {
        println!(
            "🧪 Testing scenario: {} (seed: {seed})",
            scenario.key.bright_white()
        );
    }

    let mut successes = 0;
    let mut failures = Vec::new();
    let mut elapsed = Duration::ZERO;

    for i in 0..iterations {
        let replay = iteration_seed(seed, i);
        let mut rng = ChaCha20Rng::seed_from_u64(replay);
        let start = Instant::now();
        let outcome = (scenario.check)(&mut rng);
        elapsed += start.elapsed();
        match outcome {
            Ok(()) => successes += 1,
            Err(violation) => {
                log::debug!("{} iteration {} failed: {violation}", scenario.key, i + 1);
                if verbose {
                    println!(
                        "  ❌ Iteration {}/{iterations} failed: {}",
                        i + 1,
                        violation.to_string().red()
                    );
                }
                failures.push(format!("Iteration {} (replay seed {replay}): {violation}", i + 1));
            }
        }
    }

    let average_duration = if iterations == 0 {
        Duration::ZERO
    } else {
        elapsed / u32::try_from(iterations).unwrap_or(u32::MAX)
    };

    ScenarioResult {
        scenario_name: scenario.key.to_string(),
        seed,
        passed: failures.is_empty(),
        iterations_run: iterations,
        successful_iterations: successes,
        failures,
        average_duration,
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}
