pub mod commands;
pub mod entity;

pub use commands::{from_json_object, CreateComment, UpdateComment};
pub use entity::Comment;
