use crate::core::decode::decode;
use crate::domain::model::{EmptyRecord, RECORD_LITERAL};
use crate::domain::ports::{GreetingSource, Sink};
use crate::utils::error::Result;

/// The entry routine: decode the record literal, then print the greeting.
pub struct HelloApp<G: GreetingSource, S: Sink> {
    greeting: G,
    sink: S,
    literal: String,
}

impl<G: GreetingSource, S: Sink> HelloApp<G, S> {
    pub fn new(greeting: G, sink: S) -> Self {
        Self {
            greeting,
            sink,
            literal: RECORD_LITERAL.to_string(),
        }
    }

    /// Replaces the decoded literal. The binary never calls this.
    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = literal.into();
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let record: EmptyRecord = decode(&self.literal)?;
        tracing::debug!("Decoded {:?} from {}", record, self.literal);

        let message = self.greeting.greeting();
        tracing::debug!("Printing greeting: {:?}", message);
        self.sink.print(message)?;

        Ok(())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
