//! TestRunner - Executing conformance test suites
//!
//! Provides a runner for executing conformance tests with:
//! - Filtering by crate/category/name
//! - Result aggregation
//! - Plain-text report generation

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use super::context::TestContext;
use super::traits::{ConformanceTest, TestCategory, TestResult};

/// Summary of test execution results
#[derive(Debug, Clone, Default)]
pub struct TestSummary {
    /// Total number of tests
    pub total: usize,
    /// Number of passed tests
    pub passed: usize,
    /// Number of failed tests
    pub failed: usize,
    /// Number of skipped tests
    pub skipped: usize,
    /// Total execution time
    pub duration: Duration,
    /// Per-test results
    pub results: Vec<TestRunResult>,
}

impl TestSummary {
    /// True when nothing failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Results of the tests that failed
    pub fn failures(&self) -> impl Iterator<Item = &TestRunResult> {
        self.results.iter().filter(|r| r.result.is_fail())
    }

    /// Human-readable report, one line per test plus a totals line
    pub fn report(&self) -> String {
        let mut out = String::new();
        for run in &self.results {
            let status = match &run.result {
                TestResult::Pass => "PASS".to_string(),
                TestResult::Fail { reason } => format!("FAIL ({reason})"),
                TestResult::Skipped { reason } => format!("SKIP ({reason})"),
            };
            let _ = writeln!(
                out,
                "{:<60} {:<12} {:.2?} {}",
                run.id,
                run.category.as_str(),
                run.duration,
                status
            );
        }
        let _ = writeln!(
            out,
            "\n{} tests: {} passed, {} failed, {} skipped in {:.2?}",
            self.total, self.passed, self.failed, self.skipped, self.duration
        );
        out
    }
}

/// Result of a single test run
#[derive(Debug, Clone)]
pub struct TestRunResult {
    /// Test ID
    pub id: String,
    /// Test name
    pub name: String,
    /// Crate name
    pub crate_name: String,
    /// Test category
    pub category: TestCategory,
    /// Test result
    pub result: TestResult,
    /// Execution duration
    pub duration: Duration,
}

/// Runner for conformance tests
pub struct TestRunner {
    /// Tests to run
    tests: Vec<Box<dyn ConformanceTest>>,
    /// Filter by crate name (if Some)
    crate_filter: Option<String>,
    /// Filter by category (if Some)
    category_filter: Option<TestCategory>,
    /// Filter by test name pattern (if Some)
    name_filter: Option<String>,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner {
    /// Create a new empty test runner
    pub fn new() -> Self {
        Self {
            tests: Vec::new(),
            crate_filter: None,
            category_filter: None,
            name_filter: None,
        }
    }

    /// Add a test to the runner
    pub fn add_test<T: ConformanceTest + 'static>(&mut self, test: T) {
        self.tests.push(Box::new(test));
    }

    /// Add already boxed tests to the runner
    pub fn add_boxed(&mut self, tests: impl IntoIterator<Item = Box<dyn ConformanceTest>>) {
        self.tests.extend(tests);
    }

    /// Filter tests by crate name
    pub fn filter_crate(mut self, crate_name: &str) -> Self {
        self.crate_filter = Some(crate_name.to_string());
        self
    }

    /// Filter tests by category
    pub fn filter_category(mut self, category: TestCategory) -> Self {
        self.category_filter = Some(category);
        self
    }

    /// Filter tests by name pattern
    pub fn filter_name(mut self, pattern: &str) -> Self {
        self.name_filter = Some(pattern.to_string());
        self
    }

    fn selected(&self, test: &dyn ConformanceTest) -> bool {
        if let Some(ref crate_filter) = self.crate_filter {
            if test.crate_name() != crate_filter {
                return false;
            }
        }
        if let Some(category_filter) = self.category_filter {
            if test.category() != category_filter {
                return false;
            }
        }
        if let Some(ref name_filter) = self.name_filter {
            if !test.name().contains(name_filter.as_str()) {
                return false;
            }
        }
        true
    }

    /// Run all registered tests and return a summary
    pub fn run(&self) -> TestSummary {
        let start = Instant::now();
        let mut summary = TestSummary::default();

        for test in self.tests.iter().filter(|t| self.selected(t.as_ref())) {
            let test_start = Instant::now();
            let mut ctx = TestContext::new().with_test_name(test.name());
            let result = test.run(&mut ctx);
            let test_duration = test_start.elapsed();

            match &result {
                TestResult::Pass => summary.passed += 1,
                TestResult::Fail { reason } => {
                    tracing::error!(test.id = %test.id(), %reason, "Conformance test failed");
                    summary.failed += 1;
                }
                TestResult::Skipped { reason } => {
                    tracing::info!(test.id = %test.id(), %reason, "Conformance test skipped");
                    summary.skipped += 1;
                }
            }

            summary.total += 1;
            summary.results.push(TestRunResult {
                id: test.id(),
                name: test.name().to_string(),
                crate_name: test.crate_name().to_string(),
                category: test.category(),
                result,
                duration: test_duration,
            });
        }

        summary.duration = start.elapsed();
        summary
    }

    /// Get the number of registered tests
    pub fn test_count(&self) -> usize {
        self.tests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        category: TestCategory,
        result: TestResult,
    }

    impl ConformanceTest for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn crate_name(&self) -> &str {
            "demo"
        }

        fn category(&self) -> TestCategory {
            self.category
        }

        fn run(&self, _ctx: &mut TestContext) -> TestResult {
            self.result.clone()
        }
    }

    fn runner() -> TestRunner {
        let mut runner = TestRunner::new();
        runner.add_test(Fixed {
            name: "spring_ok",
            category: TestCategory::Unit,
            result: TestResult::Pass,
        });
        runner.add_test(Fixed {
            name: "spring_bad",
            category: TestCategory::Integration,
            result: TestResult::Fail {
                reason: "off by one".into(),
            },
        });
        runner.add_test(Fixed {
            name: "projectile_skip",
            category: TestCategory::Unit,
            result: TestResult::Skipped {
                reason: "not yet".into(),
            },
        });
        runner
    }

    #[test]
    fn test_run_counts() {
        let summary = runner().run();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.is_success());
        assert_eq!(summary.failures().count(), 1);
        assert!(summary.report().contains("demo::spring_bad"));
    }

    #[test]
    fn test_filters() {
        assert_eq!(runner().filter_name("spring").run().total, 2);
        assert_eq!(runner().filter_category(TestCategory::Unit).run().total, 2);
        assert_eq!(runner().filter_crate("other").run().total, 0);

        let summary = runner()
            .filter_name("spring")
            .filter_category(TestCategory::Unit)
            .run();
        assert!(summary.is_success());
        assert_eq!(summary.total, 1);
    }
}
