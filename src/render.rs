//! Text rendering for the record table and form
//!
//! One renderer for both themes; the theme only picks the [`TableStyle`].

use crate::app::{AppState, Theme};
use crate::form::{Field, StudentForm};
use crate::record::Record;

const HEADERS: [&str; 5] = ["Roll", "Name", "Department", "Year", "CGPA"];

/// Decoration used around the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub header_prefix: &'static str,
    pub header_suffix: &'static str,
    pub rule: char,
}

impl TableStyle {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                header_prefix: "",
                header_suffix: "",
                rule: '-',
            },
            // bold + reverse video
            Theme::Dark => Self {
                header_prefix: "\x1b[1;7m",
                header_suffix: "\x1b[0m",
                rule: '=',
            },
        }
    }
}

fn row(record: &Record) -> [String; 5] {
    [
        record.roll.clone(),
        record.name.clone(),
        record.dept.to_string(),
        record.year.to_string(),
        record.cgpa.to_string(),
    ]
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

pub fn render_table(records: &[&Record], style: TableStyle) -> String {
    if records.is_empty() {
        return "No students found.".to_string();
    }

    let rows: Vec<[String; 5]> = records.iter().map(|r| row(r)).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let join = |cells: Vec<String>| cells.join(" | ").trim_end().to_string();

    let header = join(HEADERS.iter().zip(widths).map(|(h, w)| pad(h, w)).collect());
    let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let mut out = format!("{}{}{}\n", style.header_prefix, header, style.header_suffix);
    out.push_str(&style.rule.to_string().repeat(total));
    for r in &rows {
        out.push('\n');
        out.push_str(&join(r.iter().zip(widths).map(|(c, w)| pad(c, w)).collect()));
    }
    out
}

/// Current form drafts plus any validation messages
pub fn render_form(form: &StudentForm, editing: Option<&str>) -> String {
    let title = match editing {
        Some(roll) => format!("Edit Student ({})", roll),
        None => "Add Student".to_string(),
    };
    let mut out = title;
    for field in Field::ALL {
        out.push_str(&format!("\n  {:<5} = {}", field.key(), form.get(field)));
        if let Some(err) = form.errors.get(&field) {
            out.push_str(&format!("   ! {}", err));
        }
    }
    out
}

/// The full screen: table, then the status message if there is one
pub fn render_state(state: &AppState) -> String {
    let style = TableStyle::for_theme(state.theme());
    let mut out = render_table(&state.visible(), style);
    if let Some(msg) = state.message() {
        out.push_str("\n\n");
        out.push_str(msg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Department;

    #[test]
    fn test_empty_table() {
        assert_eq!(render_table(&[], TableStyle::for_theme(Theme::Light)), "No students found.");
    }

    #[test]
    fn test_light_table_layout() {
        let rec = Record::new("CSE2025-001", "José", Department::Cse, 2, 8.5);
        let out = render_table(&[&rec], TableStyle::for_theme(Theme::Light));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Roll        | Name | Department | Year | CGPA");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "CSE2025-001 | José | CSE        | 2    | 8.5");
    }

    #[test]
    fn test_dark_table_decorates_header() {
        let rec = Record::new("ME2025-003", "Ana", Department::Me, 1, 6.0);
        let out = render_table(&[&rec], TableStyle::for_theme(Theme::Dark));
        assert!(out.starts_with("\x1b[1;7mRoll"));
        assert!(out.lines().nth(1).unwrap().starts_with("===="));
    }

    #[test]
    fn test_form_shows_errors() {
        let mut form = StudentForm::default();
        form.errors.insert(Field::Name, "Name is required".to_string());
        let out = render_form(&form, None);
        assert!(out.starts_with("Add Student"));
        assert!(out.contains("name  =    ! Name is required"));
    }
}
