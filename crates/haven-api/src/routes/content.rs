use axum::{extract::Path, Json};
use haven::{
    find_exercise, mood_response, BreathingExercise, Mood, ACTIVITIES, EXERCISES, QUOTES, TIPS,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
    pub duration_secs: u32,
    /// Seconds of inhale, hold, exhale and rest
    pub pattern: Vec<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentListResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoodEntryResponse {
    pub mood: String,
    pub greeting: String,
    pub suggestions: Vec<String>,
}

/// All breathing exercises
#[utoipa::path(
    get,
    path = "/content/exercises",
    responses(
        (status = 200, description = "Breathing exercises", body = [ExerciseResponse])
    ),
    tag = "content"
)]
pub async fn list_exercises() -> Json<Vec<ExerciseResponse>> {
    Json(EXERCISES.iter().map(exercise_to_response).collect())
}

/// One breathing exercise, looked up by name (case-insensitive)
#[utoipa::path(
    get,
    path = "/content/exercises/{name}",
    params(
        ("name" = String, Path, description = "Exercise name, e.g. \"Box Breathing\"")
    ),
    responses(
        (status = 200, description = "Exercise details", body = ExerciseResponse),
        (status = 404, description = "Exercise not found")
    ),
    tag = "content"
)]
pub async fn get_exercise(Path(name): Path<String>) -> ApiResult<Json<ExerciseResponse>> {
    find_exercise(&name)
        .map(|exercise| Json(exercise_to_response(exercise)))
        .ok_or(ApiError::ExerciseNotFound(name))
}

/// Wellness tips
#[utoipa::path(
    get,
    path = "/content/tips",
    responses(
        (status = 200, description = "Wellness tips", body = ContentListResponse)
    ),
    tag = "content"
)]
pub async fn list_tips() -> Json<ContentListResponse> {
    Json(to_list(TIPS))
}

/// Motivational quotes
#[utoipa::path(
    get,
    path = "/content/quotes",
    responses(
        (status = 200, description = "Quotes", body = ContentListResponse)
    ),
    tag = "content"
)]
pub async fn list_quotes() -> Json<ContentListResponse> {
    Json(to_list(QUOTES))
}

/// Suggested activities
#[utoipa::path(
    get,
    path = "/content/activities",
    responses(
        (status = 200, description = "Activities", body = ContentListResponse)
    ),
    tag = "content"
)]
pub async fn list_activities() -> Json<ContentListResponse> {
    Json(to_list(ACTIVITIES))
}

/// The mood picker: every mood with its greeting and suggestions
#[utoipa::path(
    get,
    path = "/content/moods",
    responses(
        (status = 200, description = "Moods", body = [MoodEntryResponse])
    ),
    tag = "content"
)]
pub async fn list_moods() -> Json<Vec<MoodEntryResponse>> {
    let moods = Mood::ALL
        .iter()
        .map(|&mood| {
            let entry = mood_response(mood);
            MoodEntryResponse {
                mood: mood.as_str().to_string(),
                greeting: entry.greeting.to_string(),
                suggestions: entry.suggestions.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect();
    Json(moods)
}

fn exercise_to_response(exercise: &BreathingExercise) -> ExerciseResponse {
    ExerciseResponse {
        name: exercise.name.to_string(),
        description: exercise.description.to_string(),
        steps: exercise.steps.iter().map(|s| s.to_string()).collect(),
        duration_secs: exercise.duration_secs,
        pattern: exercise.pattern.to_vec(),
    }
}

fn to_list(items: &[&str]) -> ContentListResponse {
    ContentListResponse {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}
