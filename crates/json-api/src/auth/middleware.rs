//! Bearer token middleware.
//!
//! Resolves `Authorization: Bearer <token>` to a user and stores it in the depot, where
//! handlers pick it up as the actor for stock movements.

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use stockroom_app::auth::AuthServiceError;

use crate::extensions::*;

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.state_or_500() {
        Ok(state) => state.clone(),
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => depot.insert_actor(user),
        Err(AuthServiceError::NotFound) => {
            res.render(StatusError::unauthorized().brief("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let (scheme, token) = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_once(' ')?;

    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
