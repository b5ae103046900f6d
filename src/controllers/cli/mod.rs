pub mod args;
pub mod render_command;
pub mod report;
