mod model;
mod repository;

pub use model::{NewTaskRow, TaskRow, TASKS_TABLE};
pub use repository::TaskRepository;
