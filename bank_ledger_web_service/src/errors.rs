use bank_ledger_common::errors::LedgerError;
use bank_ledger_common::ErrorResponse;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

#[derive(Debug)]
pub struct WebServiceLedgerError(pub LedgerError);

impl Reject for WebServiceLedgerError {}

#[derive(Debug)]
pub struct WebServiceStringError(pub String);

impl Reject for WebServiceStringError {}

/// The status code a ledger error is reported with
pub fn status_of(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::AccountNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::InvalidAmount(_)
        | LedgerError::InsufficientFunds { .. }
        | LedgerError::AccountOverFunded { .. } => StatusCode::BAD_REQUEST,
        LedgerError::TotalBalanceOverflow => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// **Turns rejections into `{"error": "..."}` replies**
///
/// Our own errors carry their message; warp's built-in rejections
/// are mapped to the closest status code.
pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(WebServiceLedgerError(err)) =
        rejection.find::<WebServiceLedgerError>()
    {
        (status_of(err), err.to_string())
    } else if let Some(WebServiceStringError(msg)) = rejection.find::<WebServiceStringError>() {
        (StatusCode::BAD_REQUEST, msg.clone())
    } else if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else if let Some(err) = rejection.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "Payload too large".to_string(),
        )
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        log::error!("unhandled rejection: {:?}", rejection);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    let body = warp::reply::json(&ErrorResponse { error: message });
    Ok(warp::reply::with_status(body, status))
}
