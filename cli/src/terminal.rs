pub mod logging;
pub mod print;
pub mod report;
