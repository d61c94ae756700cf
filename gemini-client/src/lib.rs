pub mod api;
mod chat;
mod errors;
mod generative;
mod http;
mod model;
pub mod testing;

pub use api::{Content, GenerationConfig, Part};
pub use chat::ChatSession;
pub use errors::{GeminiError, GeminiResult};
pub use generative::{GenerativeModel, ModelReply, TokenUsage};
pub use model::{GeminiModel, GeminiOptions, ModelConfig};
