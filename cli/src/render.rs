//! Plain-text rendering of a `View`.

use std::fmt::Write;

use students_core::Student;

use crate::state::{Status, View};

const HEADERS: [&str; 4] = ["ID", "Name", "Age", "Email"];

/// Student table, or a placeholder line when there is nothing to show.
pub fn table(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students to show.\n".to_string();
    }

    let rows: Vec<[String; 4]> = students
        .iter()
        .map(|s| [s.id.to_string(), s.name.clone(), s.age.to_string(), s.email.clone()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    write_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// One feedback line for the status, if any.
pub fn status_line(status: &Status) -> Option<String> {
    match status {
        Status::Success(message) => Some(message.clone()),
        Status::Error(message) => Some(format!("error: {message}")),
        Status::Idle | Status::Loading => None,
    }
}

pub fn view(view: &View) -> String {
    table(&view.students)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_placeholder() {
        assert_eq!(table(&[]), "No students to show.\n");
    }

    #[test]
    fn table_aligns_columns() {
        let students = vec![
            Student {
                id: 1,
                name: "Ann".to_string(),
                age: 20,
                email: "a@x.com".to_string(),
            },
            Student {
                id: 12,
                name: "Bartholomew".to_string(),
                age: 7,
                email: "b@x.com".to_string(),
            },
        ];
        let expected = "\
ID  Name         Age  Email
--  -----------  ---  -------
1   Ann          20   a@x.com
12  Bartholomew  7    b@x.com
";
        assert_eq!(table(&students), expected);
    }

    #[test]
    fn status_lines() {
        assert_eq!(status_line(&Status::Idle), None);
        assert_eq!(status_line(&Status::Success("ok".to_string())).as_deref(), Some("ok"));
        assert_eq!(
            status_line(&Status::Error("bad".to_string())).as_deref(),
            Some("error: bad")
        );
    }
}
