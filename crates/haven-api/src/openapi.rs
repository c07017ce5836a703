use axum::Json;
use utoipa::OpenApi;

use crate::handlers::stream;
use crate::routes::{auth, chats, content, health, messages};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Haven API",
        description = "Mental-wellness chat companion"
    ),
    paths(
        health::health_check,
        auth::sign_in,
        auth::sign_up,
        auth::sign_out,
        auth::session,
        chats::list_chats,
        chats::create_chat,
        chats::get_chat,
        chats::delete_chat,
        chats::select_chat,
        messages::list_messages,
        stream::send_message_stream,
        stream::send_to_current_stream,
        content::list_exercises,
        content::get_exercise,
        content::list_tips,
        content::list_quotes,
        content::list_activities,
        content::list_moods,
    ),
    components(schemas(
        health::HealthResponse,
        auth::SignInRequest,
        auth::SignUpRequest,
        auth::UserResponse,
        auth::SessionResponse,
        chats::ChatSummaryResponse,
        chats::ChatResponse,
        chats::ListChatsResponse,
        chats::SelectChatRequest,
        chats::CurrentChatResponse,
        messages::MessageResponse,
        messages::ListMessagesResponse,
        stream::SendMessageRequest,
        content::ExerciseResponse,
        content::ContentListResponse,
        content::MoodEntryResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "auth", description = "Mock session"),
        (name = "chats", description = "Chat list and selection"),
        (name = "messages", description = "Messages and replies"),
        (name = "content", description = "Wellness content library")
    )
)]
pub struct ApiDoc;

/// OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
