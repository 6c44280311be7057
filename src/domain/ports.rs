use crate::utils::error::Result;

pub trait GreetingSource {
    fn greeting(&self) -> &str;
}

pub trait Sink {
    /// Writes `value` followed by a single line terminator.
    fn print(&mut self, value: &str) -> Result<()>;
}
