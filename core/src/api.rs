//! The five CRUD operations, each a single round-trip.

use crate::client::StudentsClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NewStudent, Student};

/// CRUD facade over the Students resource.
///
/// Every call builds one request, executes it once and parses the response.
/// Nothing is cached between calls; concurrent callers are not coordinated.
#[derive(Debug, Clone)]
pub struct Students<T> {
    client: StudentsClient,
    transport: T,
}

impl<T: Transport> Students<T> {
    pub fn new(client: StudentsClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &StudentsClient {
        &self.client
    }

    pub fn list(&self) -> Result<Vec<Student>, ApiError> {
        let response = self.transport.execute(&self.client.build_list())?;
        self.client.parse_list(response)
    }

    pub fn get(&self, id: i64) -> Result<Student, ApiError> {
        let response = self.transport.execute(&self.client.build_get(id))?;
        self.client.parse_get(response)
    }

    pub fn create(&self, input: &NewStudent) -> Result<Student, ApiError> {
        let request = self.client.build_create(input)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_create(response)
    }

    pub fn update(&self, id: i64, input: &Student) -> Result<Option<Student>, ApiError> {
        let request = self.client.build_update(id, input)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_update(response)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.transport.execute(&self.client.build_delete(id))?;
        self.client.parse_delete(response)
    }
}
