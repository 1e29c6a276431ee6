//! Birthday storing and greeting routes

use axum::extract::{Path, State};
use hyper::StatusCode;
use model::{GreetingMessage, UserBirthday, Username};
use utils::time::{current_date, days_until_next_birthday};
use utoipa_axum::{router::OpenApiRouter, routes};

use super::utils::{ApiError, Json};
use crate::{app::S, create_counters};

pub const PATH_HELLO: &str = "/hello/{username}";

/// Get a greeting for a user.
///
/// The greeting tells how many days are left until the user's next
/// birthday, or wishes a happy birthday on the day itself.
#[utoipa::path(
    get,
    path = PATH_HELLO,
    params(
        ("username" = String, Path, description = "Username. ASCII letters only."),
    ),
    responses(
        (status = 200, description = "Greeting for the user.", body = GreetingMessage),
        (status = 404, description = "User not found."),
        (status = 422, description = "Invalid username."),
    ),
)]
pub async fn get_hello(
    State(state): State<S>,
    Path(username): Path<String>,
) -> Result<Json<GreetingMessage>, ApiError> {
    HELLO.get_hello.incr();

    let username = Username::from_string(username).ok_or_else(ApiError::invalid_username)?;

    let birthdate = state
        .store()
        .birthdate(&username)
        .await
        .map_err(|_| ApiError::user_not_found(&username))?;

    let days_until = days_until_next_birthday(birthdate, current_date());

    Ok(GreetingMessage::new(&username, days_until).into())
}

/// Store a user's birthday.
///
/// An existing birthday for the same username is overwritten.
#[utoipa::path(
    put,
    path = PATH_HELLO,
    params(
        ("username" = String, Path, description = "Username. ASCII letters only."),
    ),
    request_body = UserBirthday,
    responses(
        (status = 204, description = "Birthday stored."),
        (status = 422, description = "Invalid username or birth date."),
    ),
)]
pub async fn put_hello(
    State(state): State<S>,
    Path(username): Path<String>,
    Json(birthday): Json<UserBirthday>,
) -> Result<StatusCode, ApiError> {
    HELLO.put_hello.incr();

    let username = Username::from_string(username).ok_or_else(ApiError::invalid_username)?;

    if birthday.date_of_birth > current_date() {
        return Err(ApiError::birthdate_in_future());
    }

    state.store().put(username, birthday.date_of_birth).await;

    Ok(StatusCode::NO_CONTENT)
}

pub fn hello_router(state: S) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_hello, put_hello))
        .with_state(state)
}

create_counters!(HelloCounters, HELLO, get_hello, put_hello,);
