use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use service::car::{Car, NewCar};
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// 列出所有车辆
#[utoipa::path(
    get, path = "/api/cars", tag = "cars",
    responses(
        (status = 200, description = "All cars, ascending id", body = [crate::openapi::CarDoc]),
        (status = 500, description = "Store failure", body = crate::errors::ErrorMessage)
    )
)]
pub async fn list_cars(State(state): State<ServerState>) -> Result<Json<Vec<Car>>, ApiError> {
    let cars = state.cars.list_all().await?;
    info!(count = cars.len(), "list cars");
    Ok(Json(cars))
}

#[utoipa::path(
    get, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i64, Path, description = "Car ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_car(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Car>, ApiError> {
    state.cars.get_by_id(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get, path = "/api/cars/year/{year}", tag = "cars",
    params(("year" = i32, Path, description = "Model year")),
    responses((status = 200, description = "Cars of that year, possibly none", body = [crate::openapi::CarDoc]))
)]
pub async fn list_cars_by_year(State(state): State<ServerState>, Path(year): Path<i32>) -> Result<Json<Vec<Car>>, ApiError> {
    Ok(Json(state.cars.list_by_year(year).await?))
}

/// 校验并创建车辆
#[utoipa::path(
    post, path = "/api/cars", tag = "cars",
    request_body = crate::openapi::NewCarDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorMessage)
    )
)]
pub async fn create_car(
    State(state): State<ServerState>,
    body: Result<Json<NewCar>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    let Json(input) = body?;
    let car = state.cars.create(input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    delete, path = "/api/cars/{id}", tag = "cars",
    params(("id" = i64, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_car(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.cars.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
