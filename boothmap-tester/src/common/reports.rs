use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;
use super::util::report_timestamp;

fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = (passed as f64 / results.len() as f64) * 100.0;
    rate
}

/// # Errors
///
/// Propagates write failures.
pub fn generate_console_report(
    w: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "📊 Booking Test Results Summary".bright_cyan().bold())?;
    writeln!(w, "{}", "================================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(w, "Total scenarios: {total_tests}")?;
    writeln!(w, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(w, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(w, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(w, "Total time: {total_duration:?}")?;
    writeln!(w)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            w,
            "{status} {} (seed {})",
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            w,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(w, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(w, "   Failures:")?;
            for failure in &result.failures {
                writeln!(w, "     • {}", failure.red())?;
            }
        }
        writeln!(w)?;
    }

    let fastest = results.iter().min_by_key(|r| r.average_duration);
    let slowest = results.iter().max_by_key(|r| r.average_duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(w, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(w, "{}", "=====================".yellow())?;
        writeln!(
            w,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            w,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

/// # Errors
///
/// Propagates serialization and write failures.
pub fn generate_json_report(w: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(w, "{json_output}")?;
    Ok(())
}

/// # Errors
///
/// Propagates write failures.
pub fn generate_markdown_report(w: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(w, "# Boothmap Booking Test Results\n")?;
    writeln!(w, "_Generated {}_\n", report_timestamp())?;

    if results.is_empty() {
        writeln!(w, "_No scenarios executed._")?;
        return Ok(());
    }

    let passed_tests = results.iter().filter(|r| r.passed).count();
    writeln!(w, "## Summary\n")?;
    writeln!(w, "- **Total scenarios**: {}", results.len())?;
    writeln!(w, "- **Passed**: {passed_tests}")?;
    writeln!(w, "- **Failed**: {}", results.len() - passed_tests)?;
    writeln!(w, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(w, "## Detailed Results\n")?;
    writeln!(w, "| Scenario | Seed | Status | Iterations | Average time |")?;
    writeln!(w, "|---|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            w,
            "| {} | {} | {status} | {}/{} | {:?} |",
            result.scenario_name,
            result.seed,
            result.successful_iterations,
            result.iterations_run,
            result.average_duration
        )?;
    }

    let failing: Vec<&ScenarioResult> = results.iter().filter(|r| !r.passed).collect();
    if !failing.is_empty() {
        writeln!(w, "\n## Failures\n")?;
        for result in failing {
            writeln!(w, "### {} (seed {})\n", result.scenario_name, result.seed)?;
            for failure in &result.failures {
                writeln!(w, "- {failure}")?;
            }
            writeln!(w)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: name.to_string(),
            seed: 1337,
            passed,
            iterations_run: 2,
            successful_iterations: if passed { 2 } else { 1 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 2 (seed 1338): line 3: expected total 54, got 53".into()]
            },
            average_duration: Duration::from_micros(150),
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_report_lists_failures() {
        colored::control::set_override(false);
        let results = [sample("walkthrough", true), sample("fuzz", false)];
        let out = render(|w| generate_console_report(w, &results, Duration::from_millis(3)));
        assert!(out.contains("Total scenarios: 2"));
        assert!(out.contains("Success rate: 50.0%"));
        assert!(out.contains("❌ FAIL fuzz (seed 1337)"));
        assert!(out.contains("expected total 54"));
        assert!(out.contains("Fastest: walkthrough"));
    }

    #[test]
    fn console_report_handles_no_results() {
        let out = render(|w| generate_console_report(w, &[], Duration::ZERO));
        assert!(out.contains("Total scenarios: 0"));
        assert!(!out.contains("Performance Summary"));
    }

    #[test]
    fn json_report_is_an_array_of_results() {
        let results = [sample("restore", true)];
        let out = render(|w| generate_json_report(w, &results));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["scenario_name"], "restore");
        assert_eq!(parsed[0]["average_duration"], 150);
    }

    #[test]
    fn markdown_report_has_table_and_failures() {
        let results = [sample("round-trip", true), sample("fuzz", false)];
        let out = render(|w| generate_markdown_report(w, &results));
        assert!(out.starts_with("# Boothmap Booking Test Results"));
        assert!(out.contains("| round-trip | 1337 | ✅ | 2/2 |"));
        assert!(out.contains("## Failures"));
        assert!(out.contains("- Iteration 2 (seed 1338)"));
    }

    #[test]
    fn markdown_report_without_results() {
        let out = render(|w| generate_markdown_report(w, &[]));
        assert!(out.contains("_No scenarios executed._"));
    }
}
