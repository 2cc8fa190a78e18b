use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::payment::{CreateMolliePaymentDto, MollieCheckoutDto, MollieWebhookDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{mollie::MollieService, stripe::StripeService},
        state::AppState,
    },
};

/// Stripe webhook endpoint.
///
/// Takes the raw body so the signature can be verified over the exact bytes
/// Stripe signed. Any verification failure is a 400 before any database
/// access.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok());

    StripeService::new(&state.db, &state.http_client, &state.config)
        .handle_webhook(signature, &body)
        .await?;

    Ok(StatusCode::OK)
}

/// Mollie webhook endpoint.
///
/// Mollie posts only a payment id as form data; the handler re-fetches the
/// payment from the API and syncs the stored status.
pub async fn mollie_webhook(
    State(state): State<AppState>,
    Form(payload): Form<MollieWebhookDto>,
) -> Result<impl IntoResponse, AppError> {
    MollieService::new(&state.db, &state.http_client, &state.config)
        .sync_payment(&payload.id)
        .await?;

    Ok(StatusCode::OK)
}

/// Create a Mollie payment for the caller and return the checkout URL.
pub async fn create_mollie_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMolliePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let checkout = MollieService::new(&state.db, &state.http_client, &state.config)
        .create_payment(
            caller.id,
            payload.amount_cents,
            &payload.currency,
            &payload.description,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MollieCheckoutDto {
            payment_id: checkout.payment_id,
            checkout_url: checkout.checkout_url,
        }),
    ))
}

/// The caller's payment history, newest first.
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payments = crate::server::data::payment::PaymentRepository::new(&state.db)
        .get_for_profile(caller.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(payments.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}
