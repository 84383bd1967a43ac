//! Request IDs.
//!
//! Every request is assigned a UUIDv7, which is recorded in its tracing span
//! and sent back in the `x-request-id` response header.

use tower_http::request_id::{
	MakeRequestId,
	PropagateRequestIdLayer,
	RequestId,
	SetRequestIdLayer,
};
use uuid::Uuid;
use uuid::fmt::Hyphenated;

/// Creates a layer, which produces a middleware that will generate an ID for every
/// request, injecting it both into its [extensions], as well as its headers.
///
/// [extensions]: http::Request::extensions
pub(crate) fn set_layer() -> SetRequestIdLayer<impl MakeRequestId + Clone>
{
	SetRequestIdLayer::x_request_id(MakeUuidRequestId)
}

/// Creates a layer, which produces a middleware that will forward the `x-request-id`
/// header from the request to the response.
pub(crate) fn propagate_layer() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}

#[derive(Clone, Copy)]
struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		let mut buf = [0; Hyphenated::LENGTH];
		let uuid = Uuid::now_v7().as_hyphenated().encode_lower(&mut buf);

		http::HeaderValue::from_str(uuid)
			.inspect_err(|error| warn!(%error, "generated invalid request id"))
			.map(RequestId::new)
			.ok()
	}
}
