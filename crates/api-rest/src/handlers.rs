use axum::{
    extract::{Path, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use api_shared::{
    CompatibilityProfileRes, CompatibilityReq, CompatibilityRes, DonationReq, DonationRes,
    ErrorRes, HealthRes, HealthService, MessageRes,
};
use donation_core::CompatibilityService;
use donation_types::BloodType;

use crate::error::{ApiError, ApiJson};
use crate::AppState;

const DONATION_NOT_FOUND: &str = "Donation not found";

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub(crate) async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/donations",
    responses(
        (status = 200, description = "Every stored donation, oldest first", body = [DonationRes])
    )
)]
/// List all donations
///
/// # Returns
/// * `Json<Vec<DonationRes>>` - Snapshot of the store in insertion order
#[axum::debug_handler]
pub(crate) async fn list_donations(State(state): State<AppState>) -> Json<Vec<DonationRes>> {
    let donations = state.store.list_all();
    Json(donations.into_iter().map(DonationRes::from).collect())
}

#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = DonationReq,
    responses(
        (status = 200, description = "Donation created", body = DonationRes),
        (status = 400, description = "Body is not JSON or misses a required field", body = ErrorRes)
    )
)]
/// Create a donation record
///
/// The store assigns the id; any `id` in the body is ignored.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body cannot be parsed as JSON, or
/// - `donorId`, `date`, `location` or `status` is missing or not a string.
#[axum::debug_handler]
pub(crate) async fn create_donation(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DonationReq>,
) -> Json<DonationRes> {
    let created = state.store.create(req.into());
    tracing::info!(id = %created.id, "Created donation");
    Json(created.into())
}

#[utoipa::path(
    get,
    path = "/api/donations/{id}",
    params(("id" = String, Path, description = "Donation id")),
    responses(
        (status = 200, description = "The donation", body = DonationRes),
        (status = 404, description = "No donation with this id", body = ErrorRes)
    )
)]
/// Read one donation record
///
/// # Errors
/// Returns `404 Not Found` if no donation has this id.
#[axum::debug_handler]
pub(crate) async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DonationRes>, ApiError> {
    state
        .store
        .get(&id)
        .map(|donation| Json(donation.into()))
        .ok_or(ApiError::NotFound(DONATION_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/api/donations/{id}",
    params(("id" = String, Path, description = "Donation id")),
    request_body = DonationReq,
    responses(
        (status = 200, description = "Donation updated", body = MessageRes),
        (status = 400, description = "Body is not JSON or misses a required field", body = ErrorRes),
        (status = 404, description = "No donation with this id", body = ErrorRes)
    )
)]
/// Replace every field of a donation except its id
///
/// # Errors
/// Returns `400 Bad Request` for a malformed body and `404 Not Found` for an unknown id.
#[axum::debug_handler]
pub(crate) async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<DonationReq>,
) -> Result<Json<MessageRes>, ApiError> {
    if !state.store.update(&id, req.into()) {
        return Err(ApiError::NotFound(DONATION_NOT_FOUND));
    }
    tracing::info!(%id, "Updated donation");
    Ok(Json(MessageRes {
        message: "Donation updated successfully".into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/donations/{id}",
    params(("id" = String, Path, description = "Donation id")),
    responses(
        (status = 200, description = "Donation deleted", body = MessageRes),
        (status = 404, description = "No donation with this id", body = ErrorRes)
    )
)]
/// Delete a donation record
///
/// # Errors
/// Returns `404 Not Found` if no donation has this id.
#[axum::debug_handler]
pub(crate) async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    if !state.store.delete(&id) {
        return Err(ApiError::NotFound(DONATION_NOT_FOUND));
    }
    tracing::info!(%id, "Deleted donation");
    Ok(Json(MessageRes {
        message: "Donation deleted successfully".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/check_compatibility",
    request_body = CompatibilityReq,
    responses(
        (status = 200, description = "Compatibility verdict", body = CompatibilityRes),
        (status = 400, description = "Missing or unrecognised blood type", body = ErrorRes)
    )
)]
/// Check whether a donor's blood type can be given to a recipient
///
/// Both types are trimmed and uppercased before the check, so the message quotes them in
/// canonical form.
///
/// # Errors
/// Returns `400 Bad Request` if either type is missing, blank, or not one of the eight ABO/Rh
/// blood types.
#[axum::debug_handler]
pub(crate) async fn check_compatibility(
    ApiJson(req): ApiJson<CompatibilityReq>,
) -> Result<Json<CompatibilityRes>, ApiError> {
    let donor = req.donor_type.unwrap_or_default();
    let recipient = req.recipient_type.unwrap_or_default();
    if donor.trim().is_empty() || recipient.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Both donor_type and recipient_type are required".into(),
        ));
    }

    let (Ok(donor), Ok(recipient)) = (BloodType::parse(&donor), BloodType::parse(&recipient))
    else {
        return Err(ApiError::BadRequest(
            "Invalid blood type. Must be one of: A+, A-, B+, B-, AB+, AB-, O+, O-".into(),
        ));
    };

    let check = CompatibilityService::check(donor.as_str(), recipient.as_str());
    Ok(Json(check.into()))
}

#[utoipa::path(
    get,
    path = "/api/compatibility/{blood_type}",
    params(("blood_type" = String, Path, description = "Blood type, e.g. AB+ (URL-encode `+` as %2B if needed)")),
    responses(
        (status = 200, description = "Who this type can give to and receive from", body = CompatibilityProfileRes),
        (status = 404, description = "Not one of the eight ABO/Rh blood types", body = ErrorRes)
    )
)]
/// Compatibility chart for one blood type
///
/// The type is matched case-insensitively.
///
/// # Errors
/// Returns `404 Not Found` if the path segment is not a blood type.
#[axum::debug_handler]
pub(crate) async fn compatibility_profile(
    Path(blood_type): Path<String>,
) -> Result<Json<CompatibilityProfileRes>, ApiError> {
    let blood_type =
        BloodType::parse(&blood_type).map_err(|_| ApiError::NotFound("Blood type not found"))?;
    Ok(Json(CompatibilityService::profile(blood_type).into()))
}

/// Fallback for paths no route matches.
pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound("Not found")
}

/// Answers every `OPTIONS` request with an empty 200.
///
/// CORS preflights never get here: the CORS layer answers them first. This covers plain
/// `OPTIONS` requests, which would otherwise get a 405 or 404.
pub(crate) async fn answer_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
