pub mod a001_location;
pub mod a002_plan;
pub mod a003_order;
