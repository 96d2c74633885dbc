//! IdeaForge++ prompt text
//!
//! The assistant keeps no memory between turns: each request carries only the
//! fixed system instruction and a prompt built from the latest user message.

use serde::Serialize;

/// Fixed system instruction sent with every completion request
pub const SYSTEM_PROMPT: &str = "You are IdeaForge++, an AI project assistant for young innovators \
and student developers on IgniteHub. Help users brainstorm project ideas, solve technical doubts, \
suggest hackathon projects, recommend learning paths and propose creative solutions. Keep answers \
practical, encouraging and concise, and tailor suggestions to the user's skill level when they \
mention it.";

/// Seeded assistant turn every session starts with
pub const GREETING: &str = "👋 Hey Innovator! I'm IdeaForge++, your AI project assistant. \
I can help you brainstorm project ideas, solve technical doubts, suggest hackathon projects, \
or provide creative solutions. What's on your mind today?";

/// A canned prompt offered as a one-click starter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickPrompt {
    /// Short button label
    pub label: &'static str,
    /// Text placed into the input when chosen
    pub prompt: &'static str,
}

/// Starter prompts shown under the conversation
pub const QUICK_PROMPTS: [QuickPrompt; 4] = [
    QuickPrompt {
        label: "Give me a web app idea",
        prompt: "Suggest a creative web application project idea for a beginner developer",
    },
    QuickPrompt {
        label: "Help with React",
        prompt: "I'm learning React and need help with a specific concept or problem",
    },
    QuickPrompt {
        label: "Hackathon project",
        prompt: "Suggest an innovative hackathon project idea that could win prizes",
    },
    QuickPrompt {
        label: "AI project ideas",
        prompt: "Give me some AI/ML project ideas suitable for students",
    },
];

/// Build the user prompt for a completion request
///
/// Only the latest user message is sent; earlier turns are not embedded.
pub fn build_prompt(input: &str) -> String {
    input.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_trims() {
        assert_eq!(build_prompt("  idea please \n"), "idea please");
    }

    #[test]
    fn test_quick_prompts() {
        assert_eq!(QUICK_PROMPTS.len(), 4);
        assert!(QUICK_PROMPTS.iter().all(|p| !p.prompt.is_empty()));
    }
}
