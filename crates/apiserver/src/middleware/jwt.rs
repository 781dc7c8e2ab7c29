use crate::abstract_trait::DynUserQueryRepository;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};

/// Authenticated caller, resolved from the store on every request so role
/// and active state are never trusted from stale token claims.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: i32,
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    Extension(users): Extension<DynUserQueryRepository>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err(unauthorized("You are not logged in, please provide token"));
        }
    };

    let claims = match jwt.verify_token(&token) {
        Ok(claims) => claims,
        Err(_) => {
            return Err(unauthorized("Invalid token"));
        }
    };

    let user = match users.find_by_id(claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Err(unauthorized("The user belonging to this token no longer exists"));
        }
        Err(_) => {
            return Err(unauthorized("Failed to verify the user for this token"));
        }
    };

    if !user.active {
        return Err(unauthorized("This account is not active"));
    }

    req.extensions_mut().insert(AuthUser {
        user_id: user.user_id,
        role: user.role,
    });

    Ok(next.run(req).await)
}
