//! JSON serialization for test results.

use serde::Serialize;

/// Serialize a result to a compact JSON string.
///
/// Works for both `ExactTestResult` and `ApproximateTestResult`. Exact
/// probabilities serialize as `[numerator, denominator]` pairs.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for result types).
pub fn to_json<T: Serialize>(result: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for result types).
pub fn to_json_pretty<T: Serialize>(result: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ApproximateTestResult;

    fn make_approximate() -> ApproximateTestResult {
        ApproximateTestResult {
            observed_statistic: 12,
            approximate_statistic: 1.25,
            critical_value: 1.358,
            rejects_null: false,
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_approximate()).unwrap();
        assert!(json.contains("\"observed_statistic\":12"));
        assert!(json.contains("\"critical_value\":1.358"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_approximate()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("approximate_statistic"));
    }
}
