//! Data access: one SQL statement per operation. Mutations run inside a
//! transaction that commits on success and rolls back when dropped.

pub mod departments;
pub mod employees;
pub mod leave;
pub mod reviews;
