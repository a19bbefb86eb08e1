use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewDepartment {
    #[validate(length(max = 100), custom = "crate::utils::validation::not_blank")]
    pub name: String,
}
