pub mod blue_white_gradient;
pub mod errors;
pub mod factory;
pub mod fire_gradient;
