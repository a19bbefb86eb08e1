pub mod choice;
pub mod department;
pub mod employee;
pub mod leave;
pub mod outcome;
pub mod report;
pub mod review;
