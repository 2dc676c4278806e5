//! Layout shell: sidebar navigation and header around page content.
//!
//! The sidebar's open/closed flag is page-local. It is rendered from
//! [`SidebarState`] and toggled in the browser by flipping the `open` class.

use super::escape;

/// Sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem { icon: "\u{25A6}", label: "Dashboard", href: "/dashboard" },
    MenuItem { icon: "\u{1F465}", label: "Users", href: "/dashboard/users" },
    MenuItem { icon: "\u{1F4E6}", label: "Products", href: "/dashboard/products" },
    MenuItem { icon: "\u{1F6D2}", label: "Orders", href: "/dashboard/orders" },
    MenuItem { icon: "\u{1F4CA}", label: "Analytics", href: "/dashboard/analytics" },
    MenuItem { icon: "\u{2699}", label: "Settings", href: "/dashboard/settings" },
];

/// Unread notification count shown in the header badge.
const NOTIFICATION_COUNT: u32 = 3;

/// Open/closed state of the sidebar on narrow viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn class_suffix(self) -> &'static str {
        if self.open {
            " open"
        } else {
            ""
        }
    }
}

pub fn sidebar(state: SidebarState) -> String {
    let items: String = MENU_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="{href}"><span aria-hidden="true">{icon}</span><span>{label}</span></a></li>"#,
                href = escape(item.href),
                icon = item.icon,
                label = escape(item.label),
            )
        })
        .collect();

    let open = state.class_suffix();
    format!(
        r#"<div id="sidebar-overlay" class="overlay{open}" data-sidebar-toggle></div>
<aside id="sidebar" class="sidebar{open}">
<div class="sidebar-head"><h1>Admin Panel</h1><button type="button" class="icon-btn lg-hidden" aria-label="Close menu" data-sidebar-toggle>&#9776;</button></div>
<nav><ul>{items}</ul></nav>
<div class="sidebar-foot"><div class="avatar"></div><div><p class="name">Admin User</p><p class="email">admin@example.com</p></div></div>
</aside>"#
    )
}

pub fn header(title: &str) -> String {
    format!(
        r#"<header class="header"><div class="header-row">
<div style="display:flex;align-items:center;gap:1rem"><button type="button" class="icon-btn lg-hidden" aria-label="Open menu" data-sidebar-toggle>&#9776;</button><h2 class="header-title">{title}</h2></div>
<div class="search"><input type="text" placeholder="Search..."></div>
<div class="notify"><button type="button" class="icon-btn" aria-label="Notifications">&#128276;</button><span class="count">{NOTIFICATION_COUNT}</span></div>
</div></header>"#,
        title = escape(title),
    )
}

/// Wrap page content in the sidebar and header chrome.
pub fn shell(state: SidebarState, content: &str) -> String {
    format!(
        r#"{sidebar}
<div class="shell">
{header}
<main>{content}</main>
</div>"#,
        sidebar = sidebar(state),
        header = header("Dashboard"),
    )
}
