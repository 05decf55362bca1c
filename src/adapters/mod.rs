pub mod readme_filesystem;
pub mod terminal_interaction;
pub mod version_check_http;
