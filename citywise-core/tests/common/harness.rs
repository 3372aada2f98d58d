//! Test harness for table-driven integration tests
//!
//! Provides:
//! - A runner that records named results instead of stopping at the first failure
//! - Tolerance assertions for floating-point outputs
//! - A deterministic RNG so randomized scenarios are reproducible

use std::time::Instant;

/// Test result tracking
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub duration_us: u128,
    pub error_message: Option<String>,
}

/// Test harness for running integration tests
#[derive(Default)]
pub struct TestHarness {
    results: Vec<TestResult>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single test case
    pub fn run_test<F>(&mut self, name: &str, test_fn: F)
    where
        F: FnOnce() -> Result<(), String>,
    {
        let start = Instant::now();
        let result = test_fn();

        self.results.push(TestResult {
            name: name.to_string(),
            passed: result.is_ok(),
            duration_us: start.elapsed().as_micros(),
            error_message: result.err(),
        });
    }

    /// Run a parameterized test
    pub fn run_parameterized_test<T, F>(&mut self, name: &str, params: &[T], test_fn: F)
    where
        T: std::fmt::Debug,
        F: Fn(&T) -> Result<(), String>,
    {
        for (i, param) in params.iter().enumerate() {
            self.run_test(&format!("{}[{}]", name, i), || test_fn(param));
        }
    }

    /// Print test results summary
    pub fn print_summary(&self) {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();

        println!("\nTest Results:");
        println!("============");
        println!("Total:  {}", total);
        println!("Passed: {}", passed);
        println!("Failed: {}", total - passed);

        for result in self.results.iter().filter(|r| !r.passed) {
            println!("  ✗ {}", result.name);
            if let Some(msg) = &result.error_message {
                println!("    Error: {}", msg);
            }
        }

        let total_us: u128 = self.results.iter().map(|r| r.duration_us).sum();
        println!("\nTotal time: {} µs", total_us);
    }

    /// Check if all tests passed, printing the summary otherwise
    pub fn all_passed(&self) -> bool {
        let passed = self.results.iter().all(|r| r.passed);
        if !passed {
            self.print_summary();
        }
        passed
    }
}

macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        let diff = (actual - expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, $tolerance, expected, diff
            );
        }
    };
}

/// Fail a harness case unless `actual` is within `tolerance` of `expected`
pub fn check_within(label: &str, actual: f64, expected: f64, tolerance: f64) -> Result<(), String> {
    if (actual - expected).abs() <= tolerance {
        Ok(())
    } else {
        Err(format!("{}: expected {} ± {}, got {}", label, expected, tolerance, actual))
    }
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / 16_777_216.0
    }

    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}
