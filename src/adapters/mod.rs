// Adapters layer: concrete greeting source and output sink.

pub mod greeting;
pub mod printer;

pub use greeting::HelloUtil;
pub use printer::Printer;
