//! Generic driver that executes a `TestSuite` using a pluggable engine.

use crate::suites::kat::model::{TestCase, TestGroup, TestSuite};

/// Trait every crypto back-end must implement.
pub trait VectorEngine {
    /// Execute one test case and return `Ok(())` on success.
    fn run(&self, suite: &TestSuite, group: &TestGroup, case: &TestCase) -> Result<(), String>;
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: VectorEngine> {
    engine: &'e E,
}

impl<'e, E: VectorEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Run every case; returns the number that passed
    pub fn run_suite(&self, suite: &TestSuite) -> Result<usize, String> {
        let mut passed = 0;
        let mut failed = 0;

        for group in &suite.groups {
            println!(
                "Running group {}: {} - {}",
                group.group_id, suite.algorithm, group.direction
            );

            for case in &group.tests {
                let res = self.engine.run(suite, group, case);
                match (res, case.expected_result.as_str()) {
                    (Ok(()), "valid") | (Err(_), "invalid") => passed += 1,
                    (Ok(()), expected) => {
                        failed += 1;
                        eprintln!("Case {} succeeded but expected {}", case.test_id, expected);
                    }
                    (Err(e), _) => {
                        failed += 1;
                        eprintln!("Case {} failed: {}", case.test_id, e);
                    }
                }
            }
        }

        println!("Test results: {} passed, {} failed", passed, failed);

        if failed > 0 {
            Err(format!("{} tests failed", failed))
        } else {
            Ok(passed)
        }
    }
}
