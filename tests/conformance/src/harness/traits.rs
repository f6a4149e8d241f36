//! ConformanceTest - Trait for implementing conformance tests

use super::context::TestContext;

/// Category of conformance test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCategory {
    /// Unit test - single function or behavior
    Unit,
    /// Integration test - multi-frame behavior
    Integration,
    /// Edge case - boundary conditions
    EdgeCase,
}

impl TestCategory {
    /// Get the string name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::Unit => "unit",
            TestCategory::Integration => "integration",
            TestCategory::EdgeCase => "edge_case",
        }
    }

    /// Parse a category name as written in fixtures and on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "unit" => Some(TestCategory::Unit),
            "integration" => Some(TestCategory::Integration),
            "edge_case" | "edge-case" => Some(TestCategory::EdgeCase),
            _ => None,
        }
    }
}

/// Result of a conformance test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Test passed
    Pass,
    /// Test failed with a reason
    Fail { reason: String },
    /// Test was skipped with a reason
    Skipped { reason: String },
}

impl TestResult {
    /// Returns true if the test passed
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass)
    }

    /// Returns true if the test failed
    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Fail { .. })
    }

    /// Returns true if the test was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, TestResult::Skipped { .. })
    }
}

/// Trait for conformance tests
///
/// Each conformance test implements this trait to integrate with
/// the test runner.
pub trait ConformanceTest: Send + Sync {
    /// Human-readable name of the test
    fn name(&self) -> &str;

    /// Which crate this test verifies
    fn crate_name(&self) -> &str;

    /// Category of the test
    fn category(&self) -> TestCategory;

    /// Execute the test with the given context
    fn run(&self, ctx: &mut TestContext) -> TestResult;

    /// Full test ID in the format "crate::name"
    fn id(&self) -> String {
        format!("{}::{}", self.crate_name(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [
            TestCategory::Unit,
            TestCategory::Integration,
            TestCategory::EdgeCase,
        ] {
            assert_eq!(TestCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(TestCategory::parse("performance"), None);
    }

    #[test]
    fn test_result_predicates() {
        assert!(TestResult::Pass.is_pass());
        assert!(TestResult::Fail { reason: "x".into() }.is_fail());
        assert!(TestResult::Skipped { reason: "y".into() }.is_skipped());
    }
}
