use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::material::{
    register_material, show_available_material_list, show_material, show_material_list,
    update_material, withdraw_material,
};

pub fn build_material_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_material_list).post(register_material))
        .route("/available", get(show_available_material_list))
        .route("/{material_id}", get(show_material).put(update_material))
        .route("/{material_id}/withdraw", put(withdraw_material));

    Router::new().nest("/materials", routers)
}
