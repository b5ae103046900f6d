pub mod render_rows;
