pub mod count;
pub mod report;
pub mod titles;
