use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::checkout::{
    checkout_material, delete_checkout, return_material, show_checkout,
    show_overdue_checkout_list, show_unreturned_checkout_list,
};

pub fn build_checkout_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route(
            "/",
            get(show_unreturned_checkout_list).post(checkout_material),
        )
        .route("/overdue", get(show_overdue_checkout_list))
        .route("/{checkout_id}", get(show_checkout).delete(delete_checkout))
        .route("/{checkout_id}/returned", put(return_material));

    Router::new().nest("/checkouts", routers)
}
