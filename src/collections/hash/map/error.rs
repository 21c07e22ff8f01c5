use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("no entry found for the provided key")]
pub struct MissingKey;
