//! HTML pages rendered from the same providers as the JSON API.

use axum::response::{Html, Redirect};

use crate::services::dashboard as dashboard_service;
use crate::views::{self, layout::SidebarState};

/// GET / - send visitors to the dashboard.
pub async fn index() -> Redirect {
    Redirect::temporary("/dashboard")
}

/// GET /dashboard - the overview page.
pub async fn dashboard() -> Html<String> {
    let stats = dashboard_service::get_stats();
    let orders = dashboard_service::get_recent_orders();

    let content = views::dashboard::render(&stats, &orders);
    let body = views::layout::shell(SidebarState::default(), &content);
    Html(views::document("Admin Panel", &body))
}
