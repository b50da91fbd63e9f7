use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored car record.
#[derive(ToSchema)]
pub struct CarDoc {
    pub id: i64,
    #[schema(example = "BMW")]
    pub make: String,
    #[schema(example = "320")]
    pub model: String,
    #[schema(example = 2021)]
    pub year: i32,
    #[schema(example = "Black")]
    pub color: String,
}

/// Create request; the id is assigned by the server.
#[derive(ToSchema)]
pub struct NewCarDoc {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cars::list_cars,
        crate::routes::cars::get_car,
        crate::routes::cars::list_cars_by_year,
        crate::routes::cars::create_car,
        crate::routes::cars::delete_car,
    ),
    components(
        schemas(
            HealthResponse,
            CarDoc,
            NewCarDoc,
            crate::errors::ErrorMessage,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars")
    )
)]
pub struct ApiDoc;
