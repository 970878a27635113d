//! Offline keyword responder.
//!
//! Produces a canned reply without any network access. Keyword groups are
//! checked in order and the first hit wins; anything unmatched gets one of
//! [`GENERIC_REPLIES`].

use crate::filler::{FillerPicker, choose};

struct Rule {
    words: &'static [&'static str],
    phrases: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        words: &["hello", "hi", "hola"],
        phrases: &[],
        reply: "¡Hola! 👋 I'm SID, your Smart Intelligent Assistant! I'm here to help you with \
                anything - from answering questions to creative brainstorming. What's on your \
                mind today?",
    },
    Rule {
        words: &[],
        phrases: &["how are you"],
        reply: "I'm fantastic! 🤖✨ Ready to dive into some interesting conversations. How about you?",
    },
    Rule {
        words: &["help"],
        phrases: &["what can you do"],
        reply: "I'm your versatile AI companion! 🌟 I can:\n\
                • Answer questions on any topic\n\
                • Help with creative projects\n\
                • Discuss technology & science\n\
                • Assist with learning\n\
                • Or just chat about life!\n\
                What would you like to explore?",
    },
    Rule {
        words: &["thank", "thanks"],
        phrases: &[],
        reply: "You're very welcome! 😊 I'm always happy to help. Is there anything else you're \
                curious about?",
    },
    Rule {
        words: &["name"],
        phrases: &[],
        reply: "I'm SID - which stands for Smart Intelligent Assistant! 🤖 I'm designed to be \
                helpful, knowledgeable, and always ready for a good conversation.",
    },
    Rule {
        words: &["weather"],
        phrases: &[],
        reply: "🌤️ I don't have real-time weather data, but I'd love to discuss climate science, \
                seasons, or environmental topics! What interests you about weather?",
    },
    Rule {
        words: &["love", "like"],
        phrases: &[],
        reply: "That's wonderful! ❤️ I think curiosity and passion are what make conversations \
                truly special. Tell me more about what you enjoy!",
    },
    Rule {
        words: &["joke", "jokes", "funny"],
        phrases: &[],
        reply: "Why don't scientists trust atoms? \n\nBecause they make up everything! 😄 \n\n\
                Want to hear another one?",
    },
    Rule {
        words: &["bye", "goodbye"],
        phrases: &[],
        reply: "Goodbye! 👋 It was great chatting with you! Come back anytime you want to talk - \
                I'm always here! 🌟",
    },
];

pub const GENERIC_REPLIES: [&str; 8] = [
    "That's fascinating! 🧠 I'd love to explore this topic with you. What specific aspect are you most curious about?",
    "Great question! 💫 This really makes me think. Let me share some perspectives on that...",
    "Interesting point! 🌈 I appreciate you bringing this up. Here's what I know about that topic...",
    "Thanks for sharing that! 🚀 I have some thoughts I'd like to discuss with you...",
    "That's a brilliant observation! 💡 Let me provide some insights based on what I understand...",
    "I love this conversation! 🤝 You've raised a really thoughtful point. Here's my take on it...",
    "That's an excellent question! 🌟 Let me break down what I know about this subject...",
    "Interesting! I've been learning about that too. Here's what I can share... 📚",
];

/// Lower-cased alphanumeric words, apostrophes kept inside words.
fn words(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn rule_matches(rule: &Rule, tokens: &[String]) -> bool {
    if rule.words.iter().any(|w| tokens.iter().any(|t| t == w)) {
        return true;
    }
    let joined = tokens.join(" ");
    rule.phrases.iter().any(|phrase| {
        joined == *phrase
            || joined.starts_with(&format!("{phrase} "))
            || joined.ends_with(&format!(" {phrase}"))
            || joined.contains(&format!(" {phrase} "))
    })
}

/// Reply to `message` without calling any model.
pub fn local_reply(message: &str, picker: &dyn FillerPicker) -> &'static str {
    let tokens = words(message);
    RULES
        .iter()
        .find(|rule| rule_matches(rule, &tokens))
        .map(|rule| rule.reply)
        .unwrap_or_else(|| choose(picker, &GENERIC_REPLIES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filler::FixedPicker;

    fn reply(message: &str) -> &'static str {
        local_reply(message, &FixedPicker(0))
    }

    #[test]
    fn greeting_is_recognised() {
        assert!(reply("Hello there!").starts_with("¡Hola!"));
        assert!(reply("hi").starts_with("¡Hola!"));
    }

    #[test]
    fn keywords_match_whole_words_only() {
        // "this" and "history" contain "hi" but are not greetings.
        assert_eq!(reply("this is history"), GENERIC_REPLIES[0]);
    }

    #[test]
    fn thanks_in_any_form() {
        assert!(reply("Thank you so much").starts_with("You're very welcome!"));
        assert!(reply("thanks!").starts_with("You're very welcome!"));
    }

    #[test]
    fn unlisted_greetings_are_not_keywords() {
        assert_eq!(reply("hey"), GENERIC_REPLIES[0]);
    }

    #[test]
    fn phrases_are_matched_on_word_boundaries() {
        assert!(reply("So, how are you?").starts_with("I'm fantastic!"));
        assert!(reply("What can you do").starts_with("I'm your versatile"));
    }

    #[test]
    fn earlier_rules_take_priority() {
        // Greeting beats farewell.
        assert!(reply("hi and bye").starts_with("¡Hola!"));
        // Capabilities beat thanks.
        assert!(reply("thanks for the help").starts_with("I'm your versatile"));
    }

    #[test]
    fn topic_keywords() {
        assert!(reply("What's your name?").starts_with("I'm SID - which"));
        assert!(reply("Nice weather today").starts_with("🌤️"));
        assert!(reply("tell me a joke").starts_with("Why don't scientists"));
        assert!(reply("Goodbye!").starts_with("Goodbye!"));
    }

    #[test]
    fn unmatched_message_uses_picker() {
        assert_eq!(local_reply("quantum chromodynamics", &FixedPicker(3)), GENERIC_REPLIES[3]);
    }
}
