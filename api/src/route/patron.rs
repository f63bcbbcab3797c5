use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::patron::{
    deactivate_patron, register_patron, show_patron, show_patron_list, update_patron,
};

pub fn build_patron_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_patron_list).post(register_patron))
        .route("/{patron_id}", get(show_patron).put(update_patron))
        .route("/{patron_id}/deactivate", put(deactivate_patron));

    Router::new().nest("/patrons", routers)
}
