//! Request extractors whose rejections render as the API error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

/// JSON body. Syntax errors and a missing JSON content type are 400,
/// a well-formed body of the wrong shape is 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// Path parameters. A parameter that does not parse (e.g. a non-numeric id)
/// is 404, as if the route did not exist.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);

/// Query string. Only a malformed query string is rejected (400).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct AppQuery<T>(pub T);
