//! Tasks module - domain models, services, and traits.

mod tasks_model;
mod tasks_service;
mod tasks_traits;


pub use tasks_model::{NewTask, Task, TaskFilters, TaskUpdate};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
