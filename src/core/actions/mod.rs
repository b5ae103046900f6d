pub mod partition_rows;
pub mod render_image;
pub mod render_rows;
