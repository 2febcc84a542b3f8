//! Route table for the JSON API.

use std::convert::Infallible;

use warp::{Filter, Rejection, Reply};

use crate::error::handle_rejection;
use crate::handlers;
use crate::AppState;

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// All API routes, with rejections recovered into JSON errors.
pub fn api(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    simulate(state.clone())
        .or(compare(state.clone()))
        .or(parameters())
        .or(ai_summary(state.clone()))
        .or(ai_chat(state))
        .recover(handle_rejection)
        .with(warp::trace::request())
}

/// POST /api/simulate
pub fn simulate(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "simulate")
        .and(warp::post())
        .and(json_body())
        .and(with_state(state))
        .and_then(handlers::simulate)
}

/// POST /api/compare
pub fn compare(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "compare")
        .and(warp::post())
        .and(json_body())
        .and(with_state(state))
        .and_then(handlers::compare)
}

/// GET /api/parameters
pub fn parameters() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "parameters")
        .and(warp::get())
        .and_then(handlers::parameters)
}

/// POST /api/ai-summary
pub fn ai_summary(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "ai-summary")
        .and(warp::post())
        .and(json_body())
        .and(with_state(state))
        .and_then(handlers::ai_summary)
}

/// POST /api/ai-chat
pub fn ai_chat(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "ai-chat")
        .and(warp::post())
        .and(json_body())
        .and(with_state(state))
        .and_then(handlers::ai_chat)
}

fn json_body() -> impl Filter<Extract = (warp::hyper::body::Bytes,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::bytes())
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
