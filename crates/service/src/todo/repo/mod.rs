pub mod json_file;
pub mod seaorm;

pub use json_file::JsonFileTodoRepository;
pub use seaorm::SeaOrmTodoRepository;
