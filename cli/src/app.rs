//! Handlers behind each user action.

use students_core::{ApiError, Students, Transport};

use crate::form::{self, FormError, StudentForm};
use crate::state::{Action, View};

/// Drives the CRUD facade and records the outcome in a `View`.
pub struct App<T> {
    api: Students<T>,
    view: View,
}

impl<T: Transport> App<T> {
    pub fn new(api: Students<T>) -> Self {
        Self {
            api,
            view: View::default(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn load_all(&mut self) {
        self.view.dispatch(Action::Started);
        match self.api.list() {
            Ok(students) => {
                self.view.students = students;
                self.view
                    .dispatch(Action::Succeeded("Students loaded successfully.".to_string()));
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn get_by_id(&mut self, raw_id: &str) {
        let id = match form::parse_id(raw_id, FormError::MissingLookupId) {
            Ok(id) => id,
            Err(err) => return self.reject(err),
        };
        self.view.dispatch(Action::Started);
        match self.api.get(id) {
            Ok(student) => {
                self.view.students = vec![student];
                self.view.dispatch(Action::Succeeded(format!("Student {id} loaded.")));
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn create(&mut self, input: &StudentForm) {
        let student = match input.to_new_student() {
            Ok(student) => student,
            Err(err) => return self.reject(err),
        };
        self.view.dispatch(Action::Started);
        match self.api.create(&student) {
            Ok(created) => {
                tracing::info!(id = created.id, "student created");
                self.refresh("Student created successfully.".to_string());
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn update(&mut self, input: &StudentForm) {
        let (id, student) = match input.to_student() {
            Ok(parsed) => parsed,
            Err(err) => return self.reject(err),
        };
        self.view.dispatch(Action::Started);
        match self.api.update(id, &student) {
            Ok(_) => self.refresh(format!("Student {id} updated successfully.")),
            Err(err) => self.fail(err),
        }
    }

    pub fn delete(&mut self, raw_id: &str) {
        let id = match form::parse_id(raw_id, FormError::MissingDeleteId) {
            Ok(id) => id,
            Err(err) => return self.reject(err),
        };
        self.view.dispatch(Action::Started);
        match self.api.delete(id) {
            Ok(()) => self.refresh(format!("Student {id} deleted successfully.")),
            Err(err) => self.fail(err),
        }
    }

    /// Reload the list after a mutation, keeping the mutation's message.
    /// Must be called while `Loading`.
    fn refresh(&mut self, message: String) {
        match self.api.list() {
            Ok(students) => {
                self.view.students = students;
                self.view.dispatch(Action::Succeeded(message));
            }
            Err(err) => self.fail(err),
        }
    }

    fn reject(&mut self, err: FormError) {
        self.view.dispatch(Action::Failed(err.to_string()));
    }

    fn fail(&mut self, err: ApiError) {
        tracing::debug!(error = ?err, "operation failed");
        self.view.dispatch(Action::Failed(err.to_string()));
    }
}
