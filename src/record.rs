//! Student records
//!
//! The single entity tracked by the store, plus its closed set of departments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest year level accepted by the form
pub const MIN_YEAR: u8 = 1;
/// Highest year level accepted by the form
pub const MAX_YEAR: u8 = 4;
/// Upper bound of the CGPA scale (lower bound is 0)
pub const MAX_CGPA: f64 = 10.0;

/// Department a student belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Cse,
    Ece,
    Me,
    Ce,
    Ee,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Cse,
        Department::Ece,
        Department::Me,
        Department::Ce,
        Department::Ee,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Department::Cse => "CSE",
            Department::Ece => "ECE",
            Department::Me => "ME",
            Department::Ce => "CE",
            Department::Ee => "EE",
        }
    }

    /// All department codes, in display order
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.code()).collect()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Department {
    type Err = String;

    /// Exact, case-sensitive code lookup (`"CSE"`, not `"cse"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| format!("unknown department '{}'", s))
    }
}

/// One student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Roll number, unique within a store
    pub roll: String,
    pub name: String,
    pub dept: Department,
    pub year: u8,
    pub cgpa: f64,
}

impl Record {
    pub fn new(roll: &str, name: &str, dept: Department, year: u8, cgpa: f64) -> Self {
        Self {
            roll: roll.to_string(),
            name: name.to_string(),
            dept,
            year,
            cgpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_parse() {
        assert_eq!("ECE".parse::<Department>(), Ok(Department::Ece));
        assert!("ece".parse::<Department>().is_err());
        assert!("".parse::<Department>().is_err());
    }

    #[test]
    fn test_department_serde() {
        let json = serde_json::to_string(&Department::Cse).unwrap();
        assert_eq!(json, "\"CSE\"");
        let dept: Department = serde_json::from_str("\"EE\"").unwrap();
        assert_eq!(dept, Department::Ee);
    }
}
