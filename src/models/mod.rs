pub mod hook;
pub mod transcript;

pub use hook::HookJson;
pub use transcript::MessageUsage;
