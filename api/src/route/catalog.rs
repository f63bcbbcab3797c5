use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::catalog::{show_genre_list, show_material_type_list};

pub fn build_catalog_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/materialtypes", get(show_material_type_list))
        .route("/genres", get(show_genre_list))
}
