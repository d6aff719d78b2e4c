//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{
        FromRequestParts, Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{ClockTime, DomainError, NewTrain, Route, Station, TrainId};
use crate::occupancy;
use crate::registry::RegistryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trains", post(add_train))
        .route("/trains/:id", get(get_train))
        .route("/trains/:id/tickets", post(record_ticket))
        .route("/trains/:id/seats", get(available_seats))
        .route("/trains/:id/boarding", get(boarding_count))
        .route("/trains/:id/oldest", get(oldest_passenger))
        .route("/stations/:station/trains", get(trains_in_window))
        .with_state(state)
}

/// Path extractor that reports malformed segments as [`AppError`].
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
struct ApiPath<T>(T);

/// Query extractor that reports missing or malformed parameters as [`AppError`].
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
struct ApiQuery<T>(T);

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(body), "Rejected JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_station(label: &str, raw: &str) -> Result<Station, AppError> {
    raw.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid {label} station: {raw}"),
    })
}

fn parse_time(label: &str, raw: &str) -> Result<ClockTime, AppError> {
    ClockTime::parse_hhmm(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {label} time {raw}: {e}"),
    })
}

/// Register a new train.
async fn add_train(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddTrainResponse>), AppError> {
    let req: AddTrainRequest = parse_body(&body)?;

    let route = Route::new(req.route)?;
    let departure = parse_time("departure", &req.departure_time)?;

    let id = state
        .registry
        .add_train(NewTrain {
            route,
            capacity: req.seats,
            departure,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddTrainResponse { train_id: id.0 }),
    ))
}

/// Summary of a registered train.
async fn get_train(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Json<TrainResponse>, AppError> {
    let train = state.registry.get(TrainId(id)).await?;
    Ok(Json(TrainResponse::from_train(&train)))
}

/// Record a booked ticket on a train.
async fn record_ticket(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    body: Bytes,
) -> Result<(StatusCode, Json<TicketResponse>), AppError> {
    let req: RecordTicketRequest = parse_body(&body)?;
    let passengers = req.passengers.into_iter().map(Into::into).collect();

    let ticket = state
        .registry
        .record_ticket(TrainId(id), req.from, req.to, passengers)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TicketResponse::from_ticket(&ticket)),
    ))
}

/// Seats available between two stations.
async fn available_seats(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(req): ApiQuery<SeatAvailabilityQuery>,
) -> Result<Json<SeatAvailabilityResponse>, AppError> {
    let from = parse_station("from", &req.from)?;
    let to = parse_station("to", &req.to)?;
    let train = state.registry.get(TrainId(id)).await?;

    let seats = occupancy::available_seats(
        train.route(),
        train.capacity(),
        train.tickets(),
        from,
        to,
    );

    Ok(Json(SeatAvailabilityResponse {
        train_id: id,
        from,
        to,
        available_seats: seats,
    }))
}

/// Passengers boarding at a station.
async fn boarding_count(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(req): ApiQuery<BoardingQuery>,
) -> Result<Json<BoardingResponse>, AppError> {
    let station = parse_station("boarding", &req.station)?;
    let train = state.registry.get(TrainId(id)).await?;

    let passengers = occupancy::boarding_count(train.route(), train.tickets(), station)?;

    Ok(Json(BoardingResponse {
        train_id: id,
        station,
        passengers,
    }))
}

/// Age of the oldest passenger on a train.
async fn oldest_passenger(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Json<OldestPassengerResponse>, AppError> {
    let train = state.registry.get(TrainId(id)).await?;

    Ok(Json(OldestPassengerResponse {
        train_id: id,
        age: occupancy::oldest_passenger_age(train.tickets()),
    }))
}

/// Trains calling at a station within a time window.
async fn trains_in_window(
    State(state): State<AppState>,
    ApiPath(station): ApiPath<String>,
    ApiQuery(req): ApiQuery<TimeWindowQuery>,
) -> Result<Json<TimeWindowResponse>, AppError> {
    let station = parse_station("window", &station)?;
    let start = parse_time("start", &req.start)?;
    let end = parse_time("end", &req.end)?;

    let trains = state.registry.all().await;
    let ids = occupancy::trains_in_window(trains.iter().map(Arc::as_ref), station, start, end);

    Ok(Json(TimeWindowResponse {
        station,
        train_ids: ids.into_iter().map(|id| id.0).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::TrainNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RegistryError::Domain(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
