//! Passenger is a plain data holder; trips reference one by id only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: u64,
    pub name: String,
    pub phone: String,
}

impl Passenger {
    pub fn new(id: u64, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }
}
