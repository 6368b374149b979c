mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

use common::{llm_config, mock_completion, mock_completion_failure, TestApp};
use diario::db::{ConversationStore, DiaryStore, UserStore};
use diario::models::{conversation_key, DiaryEntry, Role};

const SCORES_WITH_REASONING: &str = "<think>Analizo el texto...</think>\nAquí tienes el análisis:\n```json\n{\"openness\": 4.5, \"conscientiousness\": 3, \"extraversion\": 2.5, \"agreeableness\": 4, \"neuroticism\": 2}\n```";

// ── Diary ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn diary_submission_stores_entry_and_scores() {
    let server = MockServer::start().await;
    mock_completion(&server, SCORES_WITH_REASONING).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, body) = app
        .post(
            "/api/v1/diary",
            json!({ "user_id": "u1", "titulo": "Lunes", "entrada": "Hoy empecé un proyecto nuevo" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["titulo"], "Lunes");
    assert_eq!(body["data"]["personality"]["openness"], 4.5);
    assert_eq!(body["data"]["id"].as_str().map(str::len), Some(21));

    let (status, body) = app.get("/api/v1/users/u1/personality").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["personality"]["neuroticism"], 2.0);

    let user = app.db.get_user("u1").await.unwrap().unwrap();
    assert_eq!(user.personality.unwrap().conscientiousness, 3.0);
}

#[tokio::test]
async fn diary_sends_all_entries_as_one_user_turn() {
    let server = MockServer::start().await;
    mock_completion(&server, SCORES_WITH_REASONING).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    for (titulo, entrada) in [("uno", "Primer día."), ("dos", "Segundo día.")] {
        let (status, _) = app
            .post(
                "/api/v1/diary",
                json!({ "user_id": "u1", "titulo": titulo, "entrada": entrada }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let requests = server.received_requests().await.unwrap_or_default();
    let last: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let messages = last["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "Primer día. Segundo día.");
}

#[tokio::test]
async fn duplicate_title_is_rejected_and_stored_once() {
    let server = MockServer::start().await;
    mock_completion(&server, SCORES_WITH_REASONING).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;
    let entry = json!({ "user_id": "u1", "titulo": "Viaje", "entrada": "Fuimos a la playa" });

    let (first, _) = app.post("/api/v1/diary", entry.clone()).await;
    let (second, body) = app.post("/api/v1/diary", entry).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");

    let (_, list) = app.get("/api/v1/diary?user_id=u1").await;
    assert_eq!(list["data"]["entries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn same_title_for_another_user_is_allowed() {
    let server = MockServer::start().await;
    mock_completion(&server, SCORES_WITH_REASONING).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (a, _) = app
        .post("/api/v1/diary", json!({ "user_id": "u1", "titulo": "Hoy", "entrada": "a" }))
        .await;
    let (b, _) = app
        .post("/api/v1/diary", json!({ "user_id": "u2", "titulo": "Hoy", "entrada": "b" }))
        .await;

    assert_eq!((a, b), (StatusCode::CREATED, StatusCode::CREATED));
}

#[tokio::test]
async fn unparseable_analysis_is_bad_request_but_entry_persists() {
    let server = MockServer::start().await;
    mock_completion(&server, "No puedo evaluar la personalidad con tan poco texto.").await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, body) = app
        .post(
            "/api/v1/diary",
            json!({ "user_id": "u1", "titulo": "Corto", "entrada": "ok" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("No valid JSON"));

    let (status, _) = app.get("/api/v1/diary/Corto?user_id=u1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/api/v1/users/u1/personality").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn llm_failure_on_diary_is_bad_request() {
    let server = MockServer::start().await;
    mock_completion_failure(&server).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, body) = app
        .post(
            "/api/v1/diary",
            json!({ "user_id": "u1", "titulo": "Martes", "entrada": "texto" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let server = MockServer::start().await;
    mock_completion(&server, SCORES_WITH_REASONING).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;
    app.post(
        "/api/v1/diary",
        json!({ "user_id": "u1", "titulo": "Borrar", "entrada": "temporal" }),
    )
    .await;

    let (status, body) = app.delete("/api/v1/diary/Borrar?user_id=u1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["detail"].as_str().unwrap().contains("Borrar"));

    let (status, body) = app.get("/api/v1/diary/Borrar?user_id=u1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn deleting_missing_title_is_not_found() {
    let app = TestApp::new(None, false).await;

    let (status, body) = app.delete("/api/v1/diary/Inexistente").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn titles_with_spaces_are_path_decoded() {
    let server = MockServer::start().await;
    mock_completion(&server, SCORES_WITH_REASONING).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;
    app.post(
        "/api/v1/diary",
        json!({ "user_id": "u1", "titulo": "Fin de semana", "entrada": "descanso" }),
    )
    .await;

    let (status, body) = app.get("/api/v1/diary/Fin%20de%20semana").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["entrada"], "descanso");
}

// ── Chat ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_appends_user_and_assistant_turns() {
    let server = MockServer::start().await;
    mock_completion(&server, "<think>ser amable</think>Cuéntame más, te escucho.").await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, body) = app
        .post("/api/v1/messages", json!({ "user_id": "u1", "text": "Estoy ansioso" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user_id"], "u1");
    assert_eq!(body["data"]["text"], "Cuéntame más, te escucho.");

    let turns = app
        .conversations
        .list_turns(&conversation_key("u1"))
        .await
        .unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "Estoy ansioso");
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, "Cuéntame más, te escucho.");
}

#[tokio::test]
async fn chat_replays_history_to_the_model() {
    let server = MockServer::start().await;
    mock_completion(&server, "Entiendo.").await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    app.post("/api/v1/messages", json!({ "user_id": "u1", "text": "uno" }))
        .await;
    app.post("/api/v1/messages", json!({ "user_id": "u1", "text": "dos" }))
        .await;

    let requests = server.received_requests().await.unwrap_or_default();
    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let contents: Vec<&str> = second["messages"]
        .as_array()
        .unwrap()
        .iter()
        .skip(1)
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["uno", "Entiendo.", "dos"]);

    let (status, history) = app.get("/api/v1/messages?user_id=u1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["data"]["messages"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn chat_llm_failure_is_internal_error_and_keeps_only_user_turn() {
    let server = MockServer::start().await;
    mock_completion_failure(&server).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, body) = app
        .post("/api/v1/messages", json!({ "user_id": "u1", "text": "hola" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "internal_error");

    let turns = app
        .conversations
        .list_turns(&conversation_key("u1"))
        .await
        .unwrap();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, Role::User);
}

#[tokio::test]
async fn reasoning_only_reply_is_stored_as_empty_assistant_turn() {
    let server = MockServer::start().await;
    mock_completion(&server, "<think>x</think>").await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, body) = app
        .post("/api/v1/messages", json!({ "user_id": "u1", "text": "hola" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["text"], "");

    let turns = app
        .conversations
        .list_turns(&conversation_key("u1"))
        .await
        .unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, "");
}

#[tokio::test]
async fn empty_analysis_is_bad_request() {
    let server = MockServer::start().await;
    mock_completion(&server, "<think>sin respuesta</think>").await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, _) = app
        .post(
            "/api/v1/diary",
            json!({ "user_id": "u1", "titulo": "Lunes", "entrada": "Día largo" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.db.get_user("u1").await.unwrap().is_none());
}

#[tokio::test]
async fn clearing_history_reports_removed_count() {
    let server = MockServer::start().await;
    mock_completion(&server, "Gracias por compartir.").await;
    let app = TestApp::new(Some(llm_config(server.uri())), true).await;

    app.post("/api/v1/messages", json!({ "user_id": "u1", "text": "hola" }))
        .await;

    let (status, body) = app.delete("/api/v1/messages?user_id=u1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed"], 2);

    let (_, history) = app.get("/api/v1/messages?user_id=u1").await;
    assert!(history["data"]["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn separate_conversation_store_keeps_turns_out_of_documents() {
    let server = MockServer::start().await;
    mock_completion(&server, "Hola.").await;
    let app = TestApp::new(Some(llm_config(server.uri())), true).await;

    app.post("/api/v1/messages", json!({ "user_id": "u1", "text": "hola" }))
        .await;

    let turns = app
        .conversations
        .list_turns(&conversation_key("u1"))
        .await
        .unwrap();
    assert_eq!(turns.len(), 2);
    assert!(app.db.list_entries("u1").await.unwrap().is_empty());
}

// ── Advice ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn advice_is_parsed_into_items() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        "<think>...</think>\n1. **Respira profundo**: dedica cinco minutos a respirar.\n2. Escribe: anota lo que sientes.\n- Muévete: sal a caminar.\nDescansa lo suficiente.",
    )
    .await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;
    app.db
        .create_entry(&DiaryEntry::new(
            "u1",
            "Estrés",
            "Semana muy pesada",
        ))
        .await
        .unwrap();

    let (status, body) = app.get("/api/v1/users/u1/advice").await;

    assert_eq!(status, StatusCode::OK);
    let advice = body["data"]["advice"].as_array().unwrap();
    assert_eq!(advice.len(), 4);
    assert_eq!(advice[0]["title"], "Respira profundo");
    assert_eq!(advice[0]["description"], "dedica cinco minutos a respirar.");
    assert_eq!(advice[2]["title"], "Muévete");
    assert_eq!(advice[3]["title"], "");
    assert_eq!(advice[3]["description"], "Descansa lo suficiente.");
}

#[tokio::test]
async fn advice_without_entries_is_not_found() {
    let server = MockServer::start().await;
    mock_completion(&server, "Consejo: algo").await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;

    let (status, _) = app.get("/api/v1/users/u1/advice").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn advice_llm_failure_is_internal_error() {
    let server = MockServer::start().await;
    mock_completion_failure(&server).await;
    let app = TestApp::new(Some(llm_config(server.uri())), false).await;
    app.db
        .create_entry(&DiaryEntry::new("u1", "Hoy", "texto"))
        .await
        .unwrap();

    let (status, _) = app.get("/api/v1/users/u1/advice").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
