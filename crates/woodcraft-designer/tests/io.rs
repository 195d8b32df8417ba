#[path = "io/project_file.rs"]
mod project_file;
