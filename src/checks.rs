//! Helper self-checks
//!
//! A small built-in sanity run of the normalizer and matcher, triggered
//! from the shell with `check`.

use crate::utils::fuzzy::{is_fuzzy_match, normalize_name};
use tracing::{info, warn};

/// One named expectation
#[derive(Debug, Clone)]
pub struct Check {
    pub description: &'static str,
    pub passed: bool,
}

/// Outcome of a self-check run
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub checks: Vec<Check>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// One-line message for the status bar
    pub fn summary(&self) -> String {
        if self.all_passed() {
            "All tests passed successfully!".to_string()
        } else {
            let failed: Vec<_> = self.failures().map(|c| c.description).collect();
            format!("Some tests failed: {}", failed.join("; "))
        }
    }
}

pub fn run_helper_checks() -> CheckReport {
    let checks = vec![
        Check {
            description: "Expected José → jose",
            passed: normalize_name("José") == "jose",
        },
        Check {
            description: "Expected JOSE → jose",
            passed: normalize_name("JOSE") == "jose",
        },
        Check {
            description: "Should match 'ravi'",
            passed: is_fuzzy_match("rvi", "ravi"),
        },
        Check {
            description: "Should match roll numbers",
            passed: is_fuzzy_match("cse2025-01", "CSE2025-001"),
        },
        Check {
            description: "Should NOT match",
            passed: !is_fuzzy_match("ana", "arun"),
        },
    ];

    let report = CheckReport { checks };
    if report.all_passed() {
        info!("✅ {} helper checks passed", report.checks.len());
    } else {
        for failure in report.failures() {
            warn!("❌ Helper check failed: {}", failure.description);
        }
    }
    report
}
