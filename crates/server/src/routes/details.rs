//! Order details: the per-colleague breakdown with running totals.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::routes::flash::MessageQuery;
use crate::services::orders::{self, ColleagueOrders};
use crate::state::AppState;

/// Details page template.
#[derive(Template, WebTemplate)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    pub notice: Option<&'static str>,
    pub error: Option<&'static str>,
    pub logged_in: bool,
    pub is_admin: bool,
    pub groups: Vec<ColleagueOrders>,
}

/// Display every colleague's orders with line and per-person totals.
#[instrument(skip_all)]
pub async fn details_page(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<DetailsTemplate> {
    let (notice, error) = query.resolve();

    let lines = OrderRepository::new(state.pool()).order_lines().await?;
    let groups = orders::group_by_colleague(&lines);

    Ok(DetailsTemplate {
        notice,
        error,
        logged_in: true,
        is_admin: current.is_admin(),
        groups,
    })
}
