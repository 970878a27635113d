//! Route paths.

pub const GET_ROOT: &str = "/";
pub const GET_HEALTH: &str = "/health";
pub const POST_API_CHAT: &str = "/api/chat";
