//! Serializable projections of the client entity used at the API boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};

/// Response projection of a [`Client`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub income: f64,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            income: client.income,
        }
    }
}

/// Request payload accepted by create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "income cannot be negative"))]
    pub income: f64,
}

impl From<&ClientForm> for NewClient {
    fn from(form: &ClientForm) -> Self {
        NewClient::new(form.name.clone(), form.income)
    }
}

impl From<&ClientForm> for UpdateClient {
    fn from(form: &ClientForm) -> Self {
        UpdateClient::new(form.name.clone(), form.income)
    }
}
