//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use stockroom_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        stock::{
            MockStockService,
            data::Direction,
            records::{MovementRecord, MovementUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_ACTOR_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) fn test_actor() -> UserRecord {
    UserRecord {
        uuid: TEST_ACTOR_UUID,
        name: "Test Admin".to_string(),
        email: "admin@example.com".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

#[salvo::handler]
pub(crate) async fn inject_actor(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_actor(test_actor());
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid, quantity: i64) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Laptop Pro 14\"".to_string(),
        sku: "LP14-001".to_string(),
        category: Some("Elektronik".to_string()),
        description: None,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_movement(
    product: ProductUuid,
    direction: Direction,
    before: i64,
    after: i64,
) -> MovementRecord {
    MovementRecord {
        uuid: MovementUuid::new(),
        product_uuid: product,
        direction,
        quantity: (after - before).abs(),
        quantity_before: before,
        quantity_after: after,
        reason: direction.default_reason().to_string(),
        actor_uuid: Some(TEST_ACTOR_UUID),
        actor_name: Some(test_actor().name),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// Service mocks for a handler test. Anything a test does not replace refuses every call.
pub(crate) struct TestServices {
    pub(crate) products: MockProductsService,
    pub(crate) stock: MockStockService,
    pub(crate) users: MockUsersService,
    pub(crate) auth: MockAuthService,
}

impl TestServices {
    pub(crate) fn strict() -> Self {
        Self {
            products: strict_products_mock(),
            stock: strict_stock_mock(),
            users: strict_users_mock(),
            auth: strict_auth_mock(),
        }
    }

    fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            stock: Arc::new(self.stock),
            users: Arc::new(self.users),
            auth: Arc::new(self.auth),
        })
    }

    /// Serve `route` as an authenticated request from [`test_actor`].
    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_actor)
                .push(route),
        )
    }

    pub(crate) fn into_service_without_actor(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_summary().never();

    products
}

pub(crate) fn strict_stock_mock() -> MockStockService {
    let mut stock = MockStockService::new();

    stock.expect_apply_movement().never();
    stock.expect_list_movements().never();

    stock
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_create_user().never();
    users.expect_get_user().never();
    users.expect_delete_user().never();

    users
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    TestServices {
        products,
        ..TestServices::strict()
    }
    .into_service(route)
}

pub(crate) fn stock_service(stock: MockStockService, route: Router) -> Service {
    TestServices {
        stock,
        ..TestServices::strict()
    }
    .into_service(route)
}
