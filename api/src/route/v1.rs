use axum::Router;
use registry::AppRegistry;

use super::{
    catalog::build_catalog_routers, checkout::build_checkout_routers,
    health::build_health_check_routers, material::build_material_routers,
    patron::build_patron_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_catalog_routers())
        .merge(build_material_routers())
        .merge(build_patron_routers())
        .merge(build_checkout_routers());

    Router::new().nest("/api/v1", router)
}
