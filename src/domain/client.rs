use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub income: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub income: f64,
}

impl NewClient {
    #[must_use]
    pub fn new(name: String, income: f64) -> Self {
        Self {
            name: name.trim().to_string(),
            income,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub income: f64,
}

impl UpdateClient {
    #[must_use]
    pub fn new(name: String, income: f64) -> Self {
        Self {
            name: name.trim().to_string(),
            income,
        }
    }
}
