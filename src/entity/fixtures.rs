//! Minimal entity used by the unit tests.

use super::Entity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub value: i64,
}

impl Entity for Item {
    const KIND: &'static str = "item";

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn item(name: &str, value: i64) -> Item {
    Item {
        name: name.to_string(),
        value,
    }
}
