pub mod polygon;
pub mod r2;
