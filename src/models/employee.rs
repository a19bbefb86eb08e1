use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee row joined with its department's name.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub contact_info: Option<String>,
    pub job_title: Option<String>,
    pub start_date: NaiveDate,
    pub department_id: Option<i32>,
    pub department: Option<String>,
}

/// Full employee record as submitted by the add and edit forms.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewEmployee {
    #[validate(length(max = 100), custom = "crate::utils::validation::not_blank")]
    pub first_name: String,
    #[validate(length(max = 100), custom = "crate::utils::validation::not_blank")]
    pub last_name: String,
    #[validate(length(max = 255))]
    pub contact_info: Option<String>,
    #[validate(length(max = 100))]
    pub job_title: Option<String>,
    pub start_date: NaiveDate,
    pub department_id: Option<i32>,
}

/// Sort keys accepted by the employee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSort {
    ByStartDate,
    ByJobTitle,
    ByDepartment,
}

impl EmployeeSort {
    /// Unknown keys yield `None`, which reads as unsorted.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "start_date" => Some(EmployeeSort::ByStartDate),
            "job_title" => Some(EmployeeSort::ByJobTitle),
            "department" => Some(EmployeeSort::ByDepartment),
            _ => None,
        }
    }

    pub(crate) fn order_by(self) -> &'static str {
        match self {
            EmployeeSort::ByStartDate => "e.start_date",
            EmployeeSort::ByJobTitle => "e.job_title",
            EmployeeSort::ByDepartment => "d.name",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring matched against first name, last name and
    /// contact info independently.
    pub search: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub sort: Option<EmployeeSort>,
}
