use serde::{Deserialize, Serialize};

/// An `(id, label)` pair backing a selection control.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}
