use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::{Scenario, ScenarioCtx};

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

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// One result per seed; iteration `i` runs with `seed + i`.
    pub fn run_scenario(
        &self,
        scenario: &dyn Scenario,
        base: &ScenarioCtx,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name().bright_white()
                    );
                }
                self.run_single_scenario(scenario, &base.with_seed(seed), iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &dyn Scenario,
        ctx: &ScenarioCtx,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let iteration_seed = ctx
                .seed
                .wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let iteration_ctx = ctx.with_seed(iteration_seed);
            let start_time = Instant::now();

            match scenario.run(&iteration_ctx) {
                Ok(()) => {
                    successes += 1;
                    performance_data.push(start_time.elapsed());
                }
                Err(err) => {
                    log::debug!("{} failed at seed {iteration_seed}: {err:?}", scenario.name());
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            format!("{err:#}").red()
                        );
                    }
                    failures.push(format!(
                        "Iteration {} (seed {iteration_seed}): {err:#}",
                        i + 1
                    ));
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name().to_string(),
            seed: ctx.seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
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
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boothmap_core::FloorConfig;

    struct FailsOnOddSeeds;

    impl Scenario for FailsOnOddSeeds {
        fn name(&self) -> &str {
            "odd"
        }

        fn run(&self, ctx: &ScenarioCtx) -> anyhow::Result<()> {
            anyhow::ensure!(ctx.seed % 2 == 0, "odd seed {}", ctx.seed);
            Ok(())
        }
    }

    #[test]
    fn iterations_advance_the_seed() {
        let runner = ScenarioRunner::new(false);
        let base = ScenarioCtx::new(0, 10, FloorConfig::default());
        let results = runner.run_scenario(&FailsOnOddSeeds, &base, &[10], 4);
        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.seed, 10);
        assert_eq!(result.iterations_run, 4);
        assert_eq!(result.successful_iterations, 2);
        assert!(!result.passed);
        assert!(result.failures[0].contains("seed 11"));
    }

    #[test]
    fn results_serialize_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "fuzz".into(),
            seed: 7,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(2),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 2000);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(2));
    }
}
