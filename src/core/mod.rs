pub mod app;
pub mod decode;

pub use crate::domain::model::{EmptyRecord, RECORD_LITERAL};
pub use crate::domain::ports::{GreetingSource, Sink};
pub use crate::utils::error::Result;
