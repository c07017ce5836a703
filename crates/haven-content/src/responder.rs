//! Scripted reply generation.
//!
//! Replies are chosen by keyword over the lower-cased input, in a fixed
//! priority order: breathing, quote, activity, mood, then a supportive fallback.

use haven_types::{MessageCategory, Mood};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::library::{
    mood_response, BreathingExercise, ACTIVITIES, EXERCISES, QUOTES, SUPPORTIVE_RESPONSES, TIPS,
};

const BREATHING_TRIGGERS: &[&str] = &["breathing", "breath"];
const QUOTE_TRIGGERS: &[&str] = &["quote", "motivation"];
const ACTIVITY_TRIGGERS: &[&str] = &["activity", "what should i do", "what to do"];

/// Body and category of an assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub body: String,
    pub category: MessageCategory,
}

/// Generate a reply using the thread-local RNG
pub fn respond(text: &str, mood: Option<Mood>) -> Reply {
    respond_with(&mut rand::thread_rng(), text, mood)
}

pub fn respond_with<R: Rng + ?Sized>(rng: &mut R, text: &str, mood: Option<Mood>) -> Reply {
    let lower = text.to_lowercase();

    if contains_any(&lower, BREATHING_TRIGGERS) {
        let exercise = EXERCISES.choose(rng).unwrap_or(&EXERCISES[0]);
        return Reply {
            body: exercise_body(exercise),
            category: MessageCategory::Exercise,
        };
    }

    if contains_any(&lower, QUOTE_TRIGGERS) {
        let quote = pick(rng, QUOTES);
        return Reply {
            body: format!(
                "Here's a meaningful quote for you:\n\n*\"{}\"*\n\nRemember, you have the strength within you to overcome any challenge. How does this resonate with you?",
                quote
            ),
            category: MessageCategory::Quote,
        };
    }

    if contains_any(&lower, ACTIVITY_TRIGGERS) {
        let activity = pick(rng, ACTIVITIES);
        return Reply {
            body: format!(
                "Here's a helpful activity you might try:\n\n{}\n\nThis can help you feel more grounded and present. Would you like another suggestion?",
                activity
            ),
            category: MessageCategory::Activity,
        };
    }

    if let Some(mood) = mood {
        let entry = mood_response(mood);
        let tip = pick(rng, TIPS);
        let suggestion = pick(rng, entry.suggestions);
        return Reply {
            body: format!(
                "{}\n\nHere's a personalized tip for you: {}\n\n**Suggestion:** {}\n\nHow can I support you further today?",
                entry.greeting, tip, suggestion
            ),
            category: MessageCategory::Tip,
        };
    }

    let support = pick(rng, SUPPORTIVE_RESPONSES);
    let tip = pick(rng, TIPS);
    Reply {
        body: format!(
            "{}\n\nHere's something that might help: {}\n\nWould you like me to suggest a breathing exercise or share a motivational quote?",
            support, tip
        ),
        category: MessageCategory::Tip,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn exercise_body(exercise: &BreathingExercise) -> String {
    let steps = exercise
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "I'd recommend trying the **{}** breathing technique:\n\n{}\n\n**Steps:**\n{}\n\nWould you like me to guide you through this exercise?",
        exercise.name, exercise.description, steps
    )
}
