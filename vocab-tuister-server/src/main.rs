use std::sync::{Arc, Mutex, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

use lego::VocabList;
use rogo::{generate_session, Settings};
use transfero::SynonymDb;

/// Seeds the per-process RNG; deterministic when set.
const RANDOM_SEED_ENV: &str = "VOCAB_TUISTER_RANDOM_SEED";
const PORT_ENV: &str = "VOCAB_TUISTER_PORT";
const DEFAULT_PORT: u16 = 5000;

struct AppState {
    /// The last fully parsed vocab list. Replaced atomically after lego
    /// succeeds; a half-parsed list is never observable.
    vocab: RwLock<Option<VocabList>>,
    /// Process-wide RNG. Serialising draws keeps concurrent sessions
    /// deterministic under a fixed seed.
    rng: Mutex<ChaCha8Rng>,
    synonyms: SynonymDb,
}

impl AppState {
    fn new(seed: u64, synonyms: SynonymDb) -> Arc<AppState> {
        Arc::new(AppState {
            vocab: RwLock::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            synonyms,
        })
    }
}

fn seed_from_env() -> u64 {
    if let Ok(raw) = std::env::var(RANDOM_SEED_ENV) {
        if let Ok(seed) = raw.parse::<u64>() {
            log::info!("seeding RNG from {RANDOM_SEED_ENV}={seed}");
            return seed;
        }
        log::warn!("ignoring unparseable {RANDOM_SEED_ENV}='{raw}'");
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the epoch")
        .subsec_nanos() as u64
        ^ SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is after the epoch")
            .as_secs()
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Bad request: 400 Bad Request: {message}"),
    )
        .into_response()
}

async fn root() -> &'static str {
    "vocab-tuister server"
}

async fn send_vocab(State(state): State<Arc<AppState>>, body: String) -> Response {
    match lego::read_list(&body) {
        Ok(list) => {
            log::info!("received vocab list with {} words", list.len());
            *state.vocab.write().expect("vocab lock is never poisoned") = Some(list);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "Vocab list received.",
            )
                .into_response()
        }
        Err(error) => {
            log::info!("rejected vocab list at line {}: {error}", error.line_number);
            bad_request(format!("InvalidVocabFileFormatError: {error}"))
        }
    }
}

async fn session(State(state): State<Arc<AppState>>, body: String) -> Response {
    let value: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => {
            return bad_request(
                "The request body is not valid JSON. (InvalidSettingsError)".to_string(),
            )
        }
    };
    let settings = match Settings::from_json(&value) {
        Ok(settings) => settings,
        Err(error) => return bad_request(format!("{error} (InvalidSettingsError)")),
    };

    // An absent vocab list behaves like an empty one: the sampler reports
    // exhaustion rather than a special case leaking to the client.
    let list = state
        .vocab
        .read()
        .expect("vocab lock is never poisoned")
        .clone()
        .unwrap_or_default();

    let mut rng = state.rng.lock().expect("rng lock is never poisoned");
    match generate_session(&list, &settings, &state.synonyms, &mut *rng) {
        Ok(questions) => Json(questions).into_response(),
        Err(error) => bad_request(format!("{error} (NoQuestionsError)")),
    }
}

fn handle_panic(_: Box<dyn std::any::Any + Send + 'static>) -> Response {
    log::error!("request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Internal server error.",
    )
        .into_response()
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/send-vocab", post(send_vocab))
        .route("/session", post(session))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = std::env::var(PORT_ENV)
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let state = AppState::new(seed_from_env(), SynonymDb::open_default());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("listening on port {port}");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(seed: u64) -> Router {
        app(AppState::new(
            seed,
            SynonymDb::from_entries(std::collections::HashMap::new()),
        ))
    }

    fn full_settings(questions: i64) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (key, kind) in rogo::SETTINGS_SCHEMA {
            let value = match (kind, *key) {
                (rogo::SettingKind::Integer, "number-of-questions") => {
                    serde_json::json!(questions)
                }
                (rogo::SettingKind::Integer, _) => serde_json::json!(3),
                (rogo::SettingKind::Boolean, key) if key.starts_with("include") => {
                    serde_json::json!(true)
                }
                (rogo::SettingKind::Boolean, _) => serde_json::json!(false),
            };
            object.insert(key.to_string(), value);
        }
        serde_json::Value::Object(object)
    }

    async fn post_request(app: &Router, uri: &str, content_type: &str, body: String) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    const VOCAB: &str = "@ Noun\nfarmer: agricola, agricolae, (m)\ngirl: puella, puellae, (f)\nking: rex, regis, (m)\n@ Verb\ntake: capio, capere, cepi, captus\n";

    #[tokio::test]
    async fn test_send_vocab_ok() {
        let app = test_app(1);
        let (status, body) =
            post_request(&app, "/send-vocab", "text/plain", VOCAB.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Vocab list received.");
    }

    #[tokio::test]
    async fn test_send_vocab_error_shape() {
        let app = test_app(1);
        let (status, body) = post_request(
            &app,
            "/send-vocab",
            "text/plain",
            "@ Cause an error\nx: y\n".to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            "Bad request: 400 Bad Request: InvalidVocabFileFormatError: Invalid part of speech: 'Cause an error'"
        );
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let app = test_app(2);
        post_request(&app, "/send-vocab", "text/plain", VOCAB.to_string()).await;
        let (status, body) = post_request(
            &app,
            "/session",
            "application/json",
            full_settings(4).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let questions: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(questions.as_array().unwrap().len(), 4);
        for question in questions.as_array().unwrap() {
            let object = question.as_object().unwrap();
            assert!(object.contains_key("question_type"));
            assert_eq!(object.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_missing_setting_message() {
        let app = test_app(3);
        post_request(&app, "/send-vocab", "text/plain", VOCAB.to_string()).await;
        let mut settings = full_settings(4);
        settings.as_object_mut().unwrap().remove("number-of-questions");
        let (status, body) = post_request(
            &app,
            "/session",
            "application/json",
            settings.to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains(
            "Required settings are missing: 'number-of-questions'. (InvalidSettingsError)"
        ));
    }

    #[tokio::test]
    async fn test_type_error_message() {
        let app = test_app(4);
        let mut settings = full_settings(4);
        settings
            .as_object_mut()
            .unwrap()
            .insert("number-of-questions".to_string(), serde_json::json!("four"));
        let (_, body) = post_request(
            &app,
            "/session",
            "application/json",
            settings.to_string(),
        )
        .await;
        assert!(body.contains("must be an integer (got type str)"));
    }

    #[tokio::test]
    async fn test_session_without_vocab_is_exhaustion() {
        let app = test_app(5);
        let (status, body) = post_request(
            &app,
            "/session",
            "application/json",
            full_settings(1).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("(NoQuestionsError)"));
    }

    #[tokio::test]
    async fn test_deterministic_under_seed() {
        let run = |seed| async move {
            let app = test_app(seed);
            post_request(&app, "/send-vocab", "text/plain", VOCAB.to_string()).await;
            let (_, body) = post_request(
                &app,
                "/session",
                "application/json",
                full_settings(8).to_string(),
            )
            .await;
            body
        };
        assert_eq!(run(99).await, run(99).await);
    }
}
