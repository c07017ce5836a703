pub mod breathing;
pub mod library;
pub mod responder;

pub use breathing::{BreathPhase, BreathingSession};
pub use library::{
    find_exercise, mood_response, BreathingExercise, MoodResponse, ACTIVITIES, EXERCISES, QUOTES,
    SUPPORTIVE_RESPONSES, TIPS,
};
pub use responder::{respond, respond_with, Reply};
