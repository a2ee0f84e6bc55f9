// Chat relay: one message in, one model reply out. No conversation memory.

pub mod handlers;
pub mod prompts;
