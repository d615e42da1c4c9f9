//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Number of products to feature on the home page.
const FEATURED_PRODUCTS: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured products for the grid.
    pub featured: Vec<ProductView>,
}

/// Display the home page.
///
/// A catalog outage renders the page without the product grid.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = state.catalog().list_products().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch featured products: {e}");
            Vec::new()
        },
        |products| {
            products
                .into_iter()
                .take(FEATURED_PRODUCTS)
                .map(ProductView::from)
                .collect()
        },
    );

    HomeTemplate { featured }
}
