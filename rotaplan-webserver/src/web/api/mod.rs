use std::{fmt::Display, result};

use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::adapters::json;
use rotaplan_boundary::ErrorResponse;
use rotaplan_core::usecases;

mod error;
mod geocoding;
mod routing;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        routing::post_optimize,
        geocoding::get_geocode,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = ErrorResponse {
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
