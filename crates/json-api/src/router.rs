//! App Router

use salvo::Router;

use crate::{auth, products, stock, users};

/// Every route that requires a bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("user").get(users::current::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("stock")
                .push(Router::with_path("in").post(stock::stock_in::handler))
                .push(Router::with_path("out").post(stock::stock_out::handler))
                .push(Router::with_path("history/{product}").get(stock::history::handler))
                .push(Router::with_path("summary").get(stock::summary::handler)),
        )
}
