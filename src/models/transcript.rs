use serde::Deserialize;

/// Token counts from an assistant record's `message.usage` payload.
/// Absent fields deserialize to 0; a record missing the whole payload is
/// simply not a usage source.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MessageUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

impl MessageUsage {
    /// Sum of all four token categories, before the context overhead.
    pub fn raw_total(&self) -> u64 {
        self.input_tokens
            + self.cache_creation_input_tokens
            + self.cache_read_input_tokens
            + self.output_tokens
    }
}
