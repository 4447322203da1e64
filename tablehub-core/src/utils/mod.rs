//! Utility modules - id generation, date parsing, input validation

pub mod id;
pub mod time;
pub mod validation;

pub use id::new_id;
pub use time::parse_date;
