//! Student form
//!
//! Raw text drafts for a record being added or edited, and the validation
//! that turns them into a [`Record`] or a set of per-field messages.

use crate::record::{Department, Record, MAX_CGPA, MAX_YEAR, MIN_YEAR};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Roll,
    Name,
    Dept,
    Year,
    Cgpa,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Roll, Field::Name, Field::Dept, Field::Year, Field::Cgpa];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Roll => "roll",
            Field::Name => "name",
            Field::Dept => "dept",
            Field::Year => "year",
            Field::Cgpa => "cgpa",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s.to_lowercase())
            .ok_or_else(|| format!("unknown field '{}' (roll, name, dept, year, cgpa)", s))
    }
}

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<Field, String>;

/// Draft values as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub roll: String,
    pub name: String,
    pub dept: String,
    pub year: String,
    pub cgpa: String,
    /// Messages from the last failed save
    pub errors: FieldErrors,
}

impl StudentForm {
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Roll => &mut self.roll,
            Field::Name => &mut self.name,
            Field::Dept => &mut self.dept,
            Field::Year => &mut self.year,
            Field::Cgpa => &mut self.cgpa,
        };
        *slot = value.to_string();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Roll => &self.roll,
            Field::Name => &self.name,
            Field::Dept => &self.dept,
            Field::Year => &self.year,
            Field::Cgpa => &self.cgpa,
        }
    }

    /// Fill the drafts from an existing record for editing
    pub fn load(&mut self, record: &Record) {
        self.roll = record.roll.clone();
        self.name = record.name.clone();
        self.dept = record.dept.code().to_string();
        self.year = record.year.to_string();
        self.cgpa = record.cgpa.to_string();
        self.errors.clear();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate the drafts against the current records
    ///
    /// `editing` is the roll of the record being edited; it may keep its
    /// own roll number without tripping the uniqueness check.
    pub fn validate(&self, existing: &[Record], editing: Option<&str>) -> Result<Record, FieldErrors> {
        let mut errors = FieldErrors::new();

        let roll = self.roll.trim();
        if roll.is_empty() {
            errors.insert(Field::Roll, "Roll number is required".to_string());
        } else if existing
            .iter()
            .any(|r| r.roll == roll && editing != Some(r.roll.as_str()))
        {
            errors.insert(Field::Roll, "Roll number must be unique".to_string());
        }

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(Field::Name, "Name is required".to_string());
        }

        let dept = match self.dept.trim() {
            "" => {
                errors.insert(Field::Dept, "Department is required".to_string());
                None
            }
            code => match code.parse::<Department>() {
                Ok(dept) => Some(dept),
                Err(_) => {
                    errors.insert(
                        Field::Dept,
                        format!("Department must be one of {}", Department::codes().join(", ")),
                    );
                    None
                }
            },
        };

        let year = match self.year.trim() {
            "" => {
                errors.insert(Field::Year, "Year is required".to_string());
                None
            }
            raw => match raw.parse::<u8>() {
                Ok(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => Some(y),
                _ => {
                    errors.insert(
                        Field::Year,
                        format!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR),
                    );
                    None
                }
            },
        };

        let cgpa = match self.cgpa.trim() {
            "" => {
                errors.insert(Field::Cgpa, "CGPA is required".to_string());
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && (0.0..=MAX_CGPA).contains(&v) => Some(v),
                _ => {
                    errors.insert(Field::Cgpa, "CGPA must be between 0 and 10".to_string());
                    None
                }
            },
        };

        match (dept, year, cgpa) {
            (Some(dept), Some(year), Some(cgpa)) if errors.is_empty() => {
                Ok(Record::new(roll, name, dept, year, cgpa))
            }
            _ => Err(errors),
        }
    }
}
