//! This module contains the HTTP handlers for the `/api/V1/cafes` endpoint.

use axum::extract::State;
use axum::{Json, Router, routing};
use serde::Serialize;

use super::{
	AddCafeError,
	Cafe,
	CafeID,
	CafeRepository,
	CafeService,
	GetCafesError,
	GetRandomCafeError,
	ReportClosedError,
	SearchCafesError,
	UpdatePriceError,
	add_cafe,
	report_closed,
	search_cafes,
	update_price,
};
use crate::http::extract::{Form, Path, Query};

/// Returns a router for the `/api/V1/cafes` endpoint.
pub fn router<R>(cafe_service: CafeService<R>) -> Router
where
	R: CafeRepository,
{
	Router::new()
		.route("/random", routing::get(get_random_cafe::<R>))
		.route("/all", routing::get(get_cafes::<R>))
		.route("/search", routing::get(search_cafes::<R>))
		.route("/add", routing::post(add_cafe::<R>))
		.route("/update-price/{cafe_id}", routing::patch(update_price::<R>))
		.route("/report-closed/{cafe_id}", routing::delete(report_closed::<R>))
		.with_state(cafe_service)
}

/// `{"cafe": ...}`
#[derive(Debug, Serialize)]
struct CafeResponse
{
	cafe: Cafe,
}

/// `{"cafes": [...]}`
#[derive(Debug, Serialize)]
struct CafesResponse
{
	cafes: Vec<Cafe>,
}

/// `{"success": "..."}`
#[derive(Debug, Serialize)]
struct Success
{
	success: &'static str,
}

/// `{"response": {"success": "..."}}`
#[derive(Debug, Serialize)]
struct Created
{
	response: Success,
}

#[instrument(level = "debug", err(Debug, level = "debug"))]
async fn get_random_cafe<R>(
	State(cafe_service): State<CafeService<R>>,
) -> Result<Json<CafeResponse>, GetRandomCafeError>
where
	R: CafeRepository,
{
	let cafe = cafe_service.get_random_cafe().await?;

	Ok(Json(CafeResponse { cafe }))
}

#[instrument(level = "debug", err(Debug, level = "debug"))]
async fn get_cafes<R>(
	State(cafe_service): State<CafeService<R>>,
) -> Result<Json<CafesResponse>, GetCafesError>
where
	R: CafeRepository,
{
	let cafes = cafe_service.get_cafes().await?;

	Ok(Json(CafesResponse { cafes }))
}

#[instrument(level = "debug", err(Debug, level = "debug"))]
async fn search_cafes<R>(
	State(cafe_service): State<CafeService<R>>,
	Query(request): Query<search_cafes::Request>,
) -> Result<Json<CafesResponse>, SearchCafesError>
where
	R: CafeRepository,
{
	let cafes = cafe_service.search_cafes(request).await?;

	Ok(Json(CafesResponse { cafes }))
}

#[instrument(level = "debug", err(Debug, level = "debug"))]
async fn add_cafe<R>(
	State(cafe_service): State<CafeService<R>>,
	Form(request): Form<add_cafe::Request>,
) -> Result<Json<Created>, AddCafeError>
where
	R: CafeRepository,
{
	cafe_service.add_cafe(request).await?;

	Ok(Json(Created {
		response: Success { success: "Successfully added a new cafe" },
	}))
}

#[instrument(level = "debug", err(Debug, level = "debug"))]
async fn update_price<R>(
	State(cafe_service): State<CafeService<R>>,
	Path(cafe_id): Path<CafeID>,
	Query(request): Query<update_price::Request>,
) -> Result<Json<Success>, UpdatePriceError>
where
	R: CafeRepository,
{
	cafe_service.update_price(cafe_id, request).await?;

	Ok(Json(Success { success: "Successfully updated the coffee price" }))
}

#[instrument(level = "debug", skip(request), err(Debug, level = "debug"))]
async fn report_closed<R>(
	State(cafe_service): State<CafeService<R>>,
	Path(cafe_id): Path<CafeID>,
	Query(request): Query<report_closed::Request>,
) -> Result<Json<Success>, ReportClosedError>
where
	R: CafeRepository,
{
	cafe_service.report_closed(cafe_id, request).await?;

	Ok(Json(Success { success: "The cafe was deleted successfully" }))
}
