pub mod partition_rows;
pub mod work_allocation;
