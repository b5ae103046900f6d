pub mod default_thread_count;
pub mod pixel_to_complex_coords;
