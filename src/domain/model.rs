use serde::{Deserialize, Serialize};

/// A record with no declared fields. Any JSON object decodes into it; keys are ignored.
///
/// Must stay braced: a unit struct maps from `null`, not from `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRecord {}

/// The literal the entry routine decodes on every run.
pub const RECORD_LITERAL: &str = "{}";
