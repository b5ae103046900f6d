pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod image;
pub mod image_size;
pub mod point;
