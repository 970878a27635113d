//! Substitute replies for when no model answers.
//!
//! Selection goes through [`FillerPicker`] so callers can swap the random
//! source for a fixed one.

use rand::Rng;

/// Model name reported alongside a substitute reply.
pub const MOCK_MODEL: &str = "mock-service";

/// Note attached to a substitute reply.
pub const MOCK_NOTE: &str = "Using mock response while configuring AI models";

pub const FILLER_REPLIES: [&str; 3] = [
    "Hello! I'm SID AI Assistant. Currently testing different AI models.",
    "Hi there! I'm SID, your AI companion. We're configuring the backend right now.",
    "Greetings! I'm SID. The AI service is being optimized for better performance.",
];

/// Chooses an index into a list of canned replies.
pub trait FillerPicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl FillerPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always the same index, wrapped into range.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl FillerPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Pick one entry of `replies`.
pub fn choose<'a>(picker: &dyn FillerPicker, replies: &[&'a str]) -> &'a str {
    replies[picker.pick(replies.len())]
}

/// Pick one of the [`FILLER_REPLIES`].
pub fn filler_reply(picker: &dyn FillerPicker) -> &'static str {
    choose(picker, &FILLER_REPLIES)
}
