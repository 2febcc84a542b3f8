//! Request handlers. Bodies arrive as raw bytes and are parsed here so that
//! malformed input maps to the response each endpoint promises.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::Reply;
use weatherlab_narrative::{NarrativeSections, CHAT_ERROR_REPLY};
use weatherlab_physics::{
    compare as compare_weather, evaluate_raw, parameter_catalogue, ParameterSpec,
    PhysicsParameters, WeatherOutput,
};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub parameters: PhysicsParameters,
    pub weather_output: WeatherOutput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub parameters: PhysicsParameters,
    pub weather_output: WeatherOutput,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ParametersResponse {
    pub defaults: PhysicsParameters,
    pub parameters: Vec<ParameterSpec>,
}

fn parse_parameters(body: &[u8]) -> Result<PhysicsParameters, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected parameters: {}", e);
        ApiError::InvalidParameters
    })
}

fn warn_out_of_range(state: &AppState, params: &PhysicsParameters) {
    if !state.simulation.warn_out_of_range {
        return;
    }
    for violation in params.out_of_range() {
        tracing::warn!("Evaluating out-of-range input: {}", violation);
    }
}

pub async fn simulate(body: Bytes, state: AppState) -> Result<Response, Infallible> {
    let params = match parse_parameters(&body) {
        Ok(params) => params,
        Err(e) => return Ok(e.into_response()),
    };
    warn_out_of_range(&state, &params);

    let raw = evaluate_raw(&params);
    if !raw.is_finite() {
        tracing::warn!("Non-finite weather output for {:?}", params);
    }

    Ok(warp::reply::json(&raw.rounded()).into_response())
}

pub async fn compare(body: Bytes, state: AppState) -> Result<Response, Infallible> {
    let params = match parse_parameters(&body) {
        Ok(params) => params,
        Err(e) => return Ok(e.into_response()),
    };
    warn_out_of_range(&state, &params);

    Ok(warp::reply::json(&compare_weather(params)).into_response())
}

pub async fn parameters() -> Result<Response, Infallible> {
    let body = ParametersResponse {
        defaults: PhysicsParameters::EARTH,
        parameters: parameter_catalogue(),
    };
    Ok(warp::reply::json(&body).into_response())
}

pub async fn ai_summary(body: Bytes, state: AppState) -> Result<Response, Infallible> {
    let request: SummaryRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Summary request unusable: {}", e);
            return Ok(warp::reply::json(&NarrativeSections::unavailable()).into_response());
        }
    };

    let sections = state
        .narrator
        .summarize(&request.parameters, &request.weather_output)
        .await;
    Ok(warp::reply::json(&sections).into_response())
}

pub async fn ai_chat(body: Bytes, state: AppState) -> Result<Response, Infallible> {
    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Chat request unusable: {}", e);
            return Ok(chat_reply(CHAT_ERROR_REPLY, StatusCode::INTERNAL_SERVER_ERROR));
        }
    };

    match state
        .narrator
        .ask(&request.message, &request.parameters, &request.weather_output)
        .await
    {
        Ok(text) => Ok(chat_reply(&text, StatusCode::OK)),
        Err(e) => {
            tracing::error!("Chat failed: {}", e);
            Ok(chat_reply(CHAT_ERROR_REPLY, StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

fn chat_reply(text: &str, status: StatusCode) -> Response {
    let body = ChatResponse {
        response: text.to_string(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}
