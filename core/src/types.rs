//! Domain records for the Students resource.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift. All `Student` fields are required on
//! decode so a malformed server payload fails at the boundary instead of
//! leaking half-filled records to callers.

use serde::{Deserialize, Serialize};

/// A student as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub email: String,
}

/// Request payload for creating a student. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl NewStudent {
    /// Attach a server-assigned id, producing the full record an update sends.
    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}
