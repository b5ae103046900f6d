pub mod escape_time_kernel;
