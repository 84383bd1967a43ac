//! Utilities for unit & integration tests.

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use crate::auth::SharedSecret;
use crate::config::TracingConfig;
use crate::database::ConnectionPool;
use crate::services::CafeService;

pub(crate) type Result<T = ()> = color_eyre::Result<T>;

/// The key accepted by the [`Context`]'s authorization.
pub(crate) const API_KEY: &str = "TopSecretAPIKey";

/// The full API, backed by a fresh in-memory database.
#[derive(Debug)]
pub(crate) struct Context
{
	router: Router,
	pub(crate) pool: ConnectionPool,
}

impl Context
{
	pub(crate) async fn new() -> Result<Self>
	{
		let pool = ConnectionPool::in_memory().await?;
		let cafe_service = CafeService::new(pool.clone(), SharedSecret::new(API_KEY));
		let router = crate::http::router(cafe_service, &TracingConfig::default())
			.layer(MockConnectInfo(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))));

		Ok(Self { router, pool })
	}

	/// Sends `request` through the router.
	pub(crate) async fn send(&self, request: Request<Body>) -> Result<Response<Body>>
	{
		Ok(self.router.clone().oneshot(request).await?)
	}

	/// Sends a request without a body and decodes the JSON response.
	pub(crate) async fn json(&self, method: Method, uri: &str) -> Result<(StatusCode, JsonValue)>
	{
		let request = Request::builder()
			.method(method)
			.uri(uri)
			.body(Body::empty())?;

		decode_json(self.send(request).await?).await
	}

	/// Submits a URL-encoded form and decodes the JSON response.
	pub(crate) async fn post_form(&self, uri: &str, form: &str) -> Result<(StatusCode, JsonValue)>
	{
		let request = Request::builder()
			.method(Method::POST)
			.uri(uri)
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from(form.to_owned()))?;

		decode_json(self.send(request).await?).await
	}
}

async fn decode_json(response: Response<Body>) -> Result<(StatusCode, JsonValue)>
{
	let status = response.status();
	let body = response.into_body().collect().await?.to_bytes();

	Ok((status, serde_json::from_slice(&body)?))
}
