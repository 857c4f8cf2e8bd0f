mod model;
mod repository;

pub use model::{CategoryRow, NewCategoryRow, CATEGORIES_TABLE};
pub use repository::CategoryRepository;
