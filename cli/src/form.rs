//! Raw user input and its validation into typed payloads.

use students_core::{NewStudent, Student};
use thiserror::Error;

/// Validation failures. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Enter a student ID first.")]
    MissingLookupId,
    #[error("Enter a student ID to delete.")]
    MissingDeleteId,
    #[error("Enter a student ID in form to update.")]
    MissingUpdateId,
    #[error("Student ID must be a whole number.")]
    InvalidId,
    #[error("Name and email are required.")]
    MissingNameOrEmail,
    #[error("Age must be a whole number.")]
    InvalidAge,
}

/// The create/update form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub age: String,
    pub email: String,
}

impl StudentForm {
    /// Payload for a create. A blank age is sent as 0.
    pub fn to_new_student(&self) -> Result<NewStudent, FormError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(FormError::MissingNameOrEmail);
        }
        Ok(NewStudent {
            name: self.name.clone(),
            age: parse_age(&self.age)?,
            email: self.email.clone(),
        })
    }

    /// Target id and full record for an update.
    pub fn to_student(&self) -> Result<(i64, Student), FormError> {
        let id = parse_id(&self.id, FormError::MissingUpdateId)?;
        let student = Student {
            id,
            name: self.name.clone(),
            age: parse_age(&self.age)?,
            email: self.email.clone(),
        };
        Ok((id, student))
    }
}

/// Parse a typed id, reporting `missing` when nothing was entered.
pub fn parse_id(raw: &str, missing: FormError) -> Result<i64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(missing);
    }
    raw.parse().map_err(|_| FormError::InvalidId)
}

// TODO: decide with the API owners whether a missing age should be rejected
// instead of defaulting to 0; the server cannot tell the two apart.
fn parse_age(raw: &str) -> Result<u32, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| FormError::InvalidAge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, age: &str, email: &str) -> StudentForm {
        StudentForm {
            id: id.to_string(),
            name: name.to_string(),
            age: age.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn create_requires_name_and_email() {
        assert_eq!(
            form("", " ", "20", "a@x.com").to_new_student(),
            Err(FormError::MissingNameOrEmail)
        );
        assert_eq!(
            form("", "Ann", "20", "").to_new_student(),
            Err(FormError::MissingNameOrEmail)
        );
    }

    #[test]
    fn blank_age_defaults_to_zero() {
        let student = form("", "Ann", "", "a@x.com").to_new_student().unwrap();
        assert_eq!(student.age, 0);
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        assert_eq!(
            form("", "Ann", "twenty", "a@x.com").to_new_student(),
            Err(FormError::InvalidAge)
        );
        assert_eq!(
            form("", "Ann", "-1", "a@x.com").to_new_student(),
            Err(FormError::InvalidAge)
        );
    }

    #[test]
    fn update_requires_id() {
        assert_eq!(
            form("", "Ann", "20", "a@x.com").to_student(),
            Err(FormError::MissingUpdateId)
        );
    }

    #[test]
    fn update_carries_id_in_body() {
        let (id, student) = form(" 4 ", "Ann", "20", "a@x.com").to_student().unwrap();
        assert_eq!(id, 4);
        assert_eq!(student.id, 4);
        assert_eq!(student.age, 20);
    }

    #[test]
    fn parse_id_errors() {
        assert_eq!(parse_id("", FormError::MissingDeleteId), Err(FormError::MissingDeleteId));
        assert_eq!(parse_id("abc", FormError::MissingLookupId), Err(FormError::InvalidId));
        assert_eq!(parse_id("12", FormError::MissingLookupId), Ok(12));
    }

    #[test]
    fn messages_match_ui_copy() {
        assert_eq!(FormError::MissingNameOrEmail.to_string(), "Name and email are required.");
        assert_eq!(FormError::MissingLookupId.to_string(), "Enter a student ID first.");
    }
}
