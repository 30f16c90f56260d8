pub mod earth;
pub mod report;
