use contracts::system::navigation::{NavItem, View};

use crate::shared::extract::Json;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/system/navigation
///
/// Sidebar entries the caller's role may open, in sidebar order.
pub async fn menu(CurrentUser(claims): CurrentUser) -> Json<Vec<NavItem>> {
    let items = View::visible_for(claims.role)
        .into_iter()
        .map(NavItem::from)
        .collect();
    Json(items)
}
