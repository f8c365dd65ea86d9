pub mod employees;

pub use employees::Entity as Employees;
pub use employees::Model as Employee;
