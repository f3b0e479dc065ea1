mod chat;
mod core;

pub use self::chat::chat;
pub use self::core::{CompletionParams, Message, Role, completion};
