//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{ApproximateTestResult, ExactTestResult};
use crate::statistic::ks_distance;

/// Format an exact test result for human-readable terminal output.
pub fn format_exact(result: &ExactTestResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("exact-ks\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Samples: {} (X), {} (Y)\n",
        result.factors.sample_size_x, result.factors.sample_size_y
    ));
    output.push_str(&format!("  Meshings: {}\n", result.total_meshings));
    output.push('\n');

    output.push_str(&format!(
        "  Observed value of test statistic is {} (D = {:.4})\n",
        result.observed_statistic,
        ks_distance(result.observed_statistic, &result.factors)
    ));
    let p_value = format!("{} (~{:.4})", result.p_value, result.p_value_f64());
    let p_value = if result.rejects_at(0.05) {
        p_value.red().bold()
    } else {
        p_value.green()
    };
    output.push_str(&format!("  Exact p-value is {}\n", p_value));
    output.push('\n');

    output.push_str("  Distribution:\n");
    if let Ok(probabilities) = result.distribution.probabilities() {
        for (statistic, probability) in probabilities {
            output.push_str(&format!("    {:>6}  {}\n", statistic, probability));
        }
    }
    output.push('\n');

    output.push_str(&sep);
    output.push('\n');
    output
}

/// Format an approximate test result for human-readable terminal output.
pub fn format_approximate(result: &ApproximateTestResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "  Observed approximate value of test statistic is {:.4}\n",
        result.approximate_statistic
    ));
    output.push_str(&format!(
        "  Critical value for 0.05-rejection region is {}\n",
        result.critical_value
    ));

    let verdict = if result.rejects_null {
        "\u{26A0} Samples differ at the 5% level".yellow().bold()
    } else {
        "\u{2713} No difference at the 5% level".green().bold()
    };
    output.push_str(&format!("  {}\n", verdict));
    output
}
