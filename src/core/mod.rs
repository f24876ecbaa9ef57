pub mod formatter;
pub mod grouper;
pub mod logic;
pub mod parser;
pub mod range;

pub use logic::{AggregateLogic, AggregateReport, AggregateRequest};
