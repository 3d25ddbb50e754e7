use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// A problem document as served to the browser. Field names follow the
/// camelCase wire format the front end expects.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "problemNumber")]
    pub number: u32,
    #[serde(rename = "problemName")]
    pub name: String,
    #[serde(rename = "problemContent")]
    pub content: String,
    #[serde(rename = "problemUrl")]
    pub url: String,
}

/// An answer submission, decoded from the raw request body.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswer {
    pub answer: String,
}

/// The server's judgement of a submitted answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Uuid,
}

/// A tiny PNG fragment. Deliberately neither valid JSON nor valid UTF-8, so
/// clients exercise their binary-body path.
pub const CAPTCHA_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk header
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE,
];

#[derive(Clone, Debug)]
struct Entry {
    problem: Problem,
    answer: String,
}

type Db = Arc<RwLock<HashMap<u32, Entry>>>;

fn seed() -> HashMap<u32, Entry> {
    let mut problems = HashMap::new();
    problems.insert(
        1,
        Entry {
            problem: Problem {
                number: 1,
                name: "Multiples of 3 and 5".to_string(),
                content: "Find the sum of all the multiples of 3 or 5 below 1000.".to_string(),
                url: "https://projecteuler.net/problem=1".to_string(),
            },
            answer: "233168".to_string(),
        },
    );
    problems.insert(
        2,
        Entry {
            problem: Problem {
                number: 2,
                name: "Even Fibonacci Numbers".to_string(),
                content: "Find the sum of the even-valued Fibonacci terms below four million."
                    .to_string(),
                url: "https://projecteuler.net/problem=2".to_string(),
            },
            answer: "4613732".to_string(),
        },
    );
    problems
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seed()));
    Router::new()
        .route("/problems/{number}", get(get_problem).post(submit_answer))
        .route("/captcha", get(captcha))
        .route("/login", post(login))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_problem(
    State(db): State<Db>,
    Path(number): Path<u32>,
) -> Result<Json<Problem>, StatusCode> {
    let problems = db.read().await;
    problems
        .get(&number)
        .map(|entry| Json(entry.problem.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn captcha() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], CAPTCHA_PNG)
}

/// The body is read as a raw string and decoded by hand: the browser
/// helpers send JSON without a `Content-Type` header, which the `Json`
/// extractor would reject with 415.
async fn submit_answer(
    State(db): State<Db>,
    Path(number): Path<u32>,
    body: String,
) -> Result<Json<Verdict>, StatusCode> {
    let problems = db.read().await;
    let entry = problems.get(&number).ok_or(StatusCode::NOT_FOUND)?;
    let input: SubmitAnswer =
        serde_json::from_str(&body).map_err(|_| StatusCode::BAD_REQUEST)?;

    let correct = input.answer == entry.answer;
    let message = if correct {
        format!("Problem {number} solved")
    } else {
        format!("{} is not the answer to problem {number}", input.answer)
    };
    Ok(Json(Verdict { correct, message }))
}

async fn login(body: String) -> Result<Json<LoginResponse>, StatusCode> {
    let input: LoginRequest =
        serde_json::from_str(&body).map_err(|_| StatusCode::BAD_REQUEST)?;
    if input.username.is_empty() || input.password.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(LoginResponse {
        token: Uuid::new_v4(),
    }))
}
