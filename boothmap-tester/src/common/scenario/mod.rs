use anyhow::Result;
use boothmap_core::FloorConfig;

pub mod fuzz;
pub mod restore;
pub mod round_trip;
pub mod walkthrough;

/// Per-run inputs handed to every scenario.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub seed: u64,
    /// Operation budget for randomized scenarios.
    pub steps: usize,
    pub config: FloorConfig,
    pub verbose: bool,
}

impl ScenarioCtx {
    #[must_use]
    pub fn new(seed: u64, steps: usize, config: FloorConfig) -> Self {
        Self {
            seed,
            steps,
            config,
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }
}

pub trait Scenario {
    fn name(&self) -> &str;

    /// Run once. Failures carry enough context to reproduce from the seed.
    ///
    /// # Errors
    ///
    /// Returns the first broken expectation.
    fn run(&self, ctx: &ScenarioCtx) -> Result<()>;
}

const SCENARIOS: &[(&str, &str)] = &[
    (
        walkthrough::NAME,
        "Reference floor walkthrough: booked rejection, adds, removal, checkout",
    ),
    (
        restore::NAME,
        "Persist, reopen and restore, including stale and malformed payloads",
    ),
    (
        round_trip::NAME,
        "Add then remove on every open booth leaves the desk unchanged",
    ),
    (
        fuzz::NAME,
        "Seeded random operations with invariant checks after every step",
    ),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    match name.to_lowercase().as_str() {
        walkthrough::NAME | "smoke" => Some(Box::new(walkthrough::WalkthroughScenario)),
        restore::NAME | "persistence" => Some(Box::new(restore::RestoreScenario)),
        round_trip::NAME | "roundtrip" => Some(Box::new(round_trip::RoundTripScenario)),
        fuzz::NAME | "random" => Some(Box::new(fuzz::FuzzScenario)),
        _ => None,
    }
}

/// Expand `all` into every registered scenario, keeping explicit names.
pub fn expand_scenarios(names: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = names
        .iter()
        .filter(|name| name.as_str() != "all")
        .cloned()
        .collect();
    if names.iter().any(|name| name == "all") {
        for (name, _) in SCENARIOS {
            if !expanded.iter().any(|existing| existing == name) {
                expanded.push((*name).to_string());
            }
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (name, description) in list_scenarios() {
            let scenario = get_scenario(name).expect("listed scenario resolves");
            assert_eq!(scenario.name(), name);
            assert!(!description.is_empty());
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn all_expands_without_duplicates() {
        let expanded = expand_scenarios(&["fuzz".to_string(), "all".to_string()]);
        assert_eq!(expanded.len(), SCENARIOS.len());
        assert_eq!(expanded[0], "fuzz");
    }

    #[test]
    fn every_scenario_passes_on_the_default_floor() {
        let ctx = ScenarioCtx::new(1337, 200, FloorConfig::default());
        for (name, _) in list_scenarios() {
            let scenario = get_scenario(name).expect("scenario");
            scenario
                .run(&ctx)
                .unwrap_or_else(|err| panic!("{name} failed: {err:#}"));
        }
    }
}
