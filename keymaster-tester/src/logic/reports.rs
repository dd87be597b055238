use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::GameResult;

pub fn generate_console_report<W: Write>(
    out: &mut W,
    results: &[GameResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Catalog Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==========================".cyan())?;

    let total_games = results.len();
    let passed_games = results.iter().filter(|r| r.passed).count();
    let failed_games = total_games - passed_games;

    // Overall stats
    writeln!(out, "Total games: {total_games}")?;
    writeln!(out, "Passed: {}", passed_games.to_string().green())?;
    writeln!(out, "Failed: {}", failed_games.to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(out, "{} {}", status, result.game.bold())?;
        writeln!(
            out,
            "   Templates: {} objective, {} constraint",
            result.objective_templates, result.constraint_templates
        )?;
        writeln!(out, "   Fingerprint: {}", result.fingerprint)?;

        if !result.validation.issues.is_empty() {
            writeln!(out, "   Issues:")?;
            for issue in &result.validation.issues {
                writeln!(out, "     • {}", issue.red())?;
            }
        }
        for failure in &result.failures {
            writeln!(out, "     • {}", failure.red())?;
        }

        for constraint in &result.constraints {
            writeln!(out, "   ⚙️  {}", constraint.rendered.bright_white())?;
        }
        for sample in &result.samples {
            let mut tags = Vec::new();
            if sample.is_time_consuming {
                tags.push("time consuming");
            }
            if sample.is_difficult {
                tags.push("difficult");
            }
            if tags.is_empty() {
                writeln!(out, "   🎯 {}", sample.rendered)?;
            } else {
                writeln!(
                    out,
                    "   🎯 {} {}",
                    sample.rendered,
                    format!("({})", tags.join(", ")).dimmed()
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write>(out: &mut W, results: &[GameResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(out: &mut W, results: &[GameResult]) -> Result<()> {
    writeln!(out, "# Keymaster Catalog Results\n")?;

    let total_games = results.len();
    let passed_games = results.iter().filter(|r| r.passed).count();

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total games**: {total_games}")?;
    writeln!(out, "- **Passed**: {passed_games}")?;
    writeln!(out, "- **Failed**: {}\n", total_games - passed_games)?;

    writeln!(out, "## Games\n")?;
    writeln!(out, "| Game | Status | Objectives | Constraints | Fingerprint |")?;
    writeln!(out, "| --- | --- | --- | --- | --- |")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {} | {} | {} | {} | `{}` |",
            result.game,
            status,
            result.objective_templates,
            result.constraint_templates,
            result.fingerprint
        )?;
    }
    writeln!(out)?;

    for result in results {
        writeln!(out, "### {}\n", result.game)?;
        for issue in result.validation.issues.iter().chain(&result.failures) {
            writeln!(out, "- ❌ {issue}")?;
        }
        for constraint in &result.constraints {
            writeln!(out, "- Setup: {}", constraint.rendered)?;
        }
        for sample in &result.samples {
            writeln!(out, "- {}", sample.rendered)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::sampler::SampledObjective;
    use keymaster_catalog::ValidationSummary;

    fn sample_result(passed: bool) -> GameResult {
        GameResult {
            game: "Digseum".to_string(),
            slug: "digseum".to_string(),
            passed,
            fingerprint: "00000000deadbeef".to_string(),
            objective_templates: 15,
            constraint_templates: 0,
            validation: ValidationSummary {
                game: "Digseum",
                templates_checked: 15,
                pools_checked: 8,
                issues: if passed {
                    Vec::new()
                } else {
                    vec!["Digseum: pool \"zones\" is empty".to_string()]
                },
            },
            constraints: Vec::new(),
            samples: vec![SampledObjective {
                label: "Prestige NUMBER times".to_string(),
                rendered: "Prestige 3 times".to_string(),
                is_time_consuming: false,
                is_difficult: false,
                weight: 5,
            }],
            failures: Vec::new(),
            duration: Duration::from_millis(4),
        }
    }

    #[test]
    fn json_report_is_an_array_of_games() {
        let mut buffer = Vec::new();
        generate_json_report(&mut buffer, &[sample_result(true)]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0]["slug"], "digseum");
        assert_eq!(parsed[0]["samples"][0]["rendered"], "Prestige 3 times");
        assert_eq!(parsed[0]["duration"], 4);
    }

    #[test]
    fn markdown_report_lists_issues() {
        let mut buffer = Vec::new();
        generate_markdown_report(&mut buffer, &[sample_result(false)]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("| Digseum | ❌ | 15 | 0 | `00000000deadbeef` |"));
        assert!(text.contains("- ❌ Digseum: pool \"zones\" is empty"));
        assert!(text.contains("- Prestige 3 times"));
    }

    #[test]
    fn console_report_counts_results() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        generate_console_report(
            &mut buffer,
            &[sample_result(true), sample_result(false)],
            Duration::from_millis(10),
        )
        .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Total games: 2"));
        assert!(text.contains("Passed: 1"));
        assert!(text.contains("🎯 Prestige 3 times"));
    }
}
