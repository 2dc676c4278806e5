//! Dashboard overview page: stat cards and the recent orders table.

use super::{escape, group_thousands};
use crate::models::order::OrderSummary;
use crate::models::stats::StatsSummary;

/// Visual style of an order status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Green,
    Yellow,
    Blue,
}

impl BadgeStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeStyle::Green => "badge badge-green",
            BadgeStyle::Yellow => "badge badge-yellow",
            BadgeStyle::Blue => "badge badge-blue",
        }
    }
}

/// Pick the badge style for a raw status string.
///
/// Only the exact strings `Completed` and `Pending` get their own colour;
/// everything else, including unknown values, is blue.
pub fn badge_style(status: &str) -> BadgeStyle {
    if status == "Completed" {
        BadgeStyle::Green
    } else if status == "Pending" {
        BadgeStyle::Yellow
    } else {
        BadgeStyle::Blue
    }
}

/// One overview card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
}

/// Build the four overview cards from the stats record.
pub fn stat_cards(stats: &StatsSummary) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Revenue",
            value: stats.total_revenue.clone(),
            change: "+20.1%",
            icon: "$",
            gradient: "grad-green",
        },
        StatCard {
            title: "Total Users",
            value: group_thousands(stats.total_users),
            change: "+15.3%",
            icon: "\u{1F465}",
            gradient: "grad-blue",
        },
        StatCard {
            title: "Total Orders",
            value: group_thousands(stats.total_orders),
            change: "+8.2%",
            icon: "\u{1F6D2}",
            gradient: "grad-purple",
        },
        StatCard {
            title: "Growth Rate",
            value: stats.growth_rate.clone(),
            change: "+3.1%",
            icon: "\u{1F4C8}",
            gradient: "grad-orange",
        },
    ]
}

fn render_card(card: &StatCard) -> String {
    format!(
        r#"<div class="card"><div><p class="card-title">{title}</p><p class="card-value">{value}</p><p class="card-delta">{change} from last month</p></div><div class="card-icon {gradient}" aria-hidden="true">{icon}</div></div>"#,
        title = escape(card.title),
        value = escape(&card.value),
        change = escape(card.change),
        gradient = card.gradient,
        icon = card.icon,
    )
}

fn render_order_row(order: &OrderSummary) -> String {
    let status = order.status.as_str();
    format!(
        r#"<tr><td class="strong">{id}</td><td>{customer}</td><td>{product}</td><td class="strong">{amount}</td><td><span class="{class}">{status}</span></td></tr>"#,
        id = escape(&order.id),
        customer = escape(&order.customer),
        product = escape(&order.product),
        amount = escape(&order.amount),
        class = badge_style(status).css_class(),
        status = escape(status),
    )
}

/// Render the page content placed inside the layout shell.
pub fn render(stats: &StatsSummary, orders: &[OrderSummary]) -> String {
    let cards: String = stat_cards(stats).iter().map(render_card).collect();
    let rows: String = orders.iter().map(render_order_row).collect();

    format!(
        r#"<h1 class="page-title">Dashboard Overview</h1>
<p class="page-sub">Welcome back! Here&#39;s what&#39;s happening with your business today.</p>
<div class="cards">{cards}</div>
<div class="panel"><h2>Recent Orders</h2><div class="table-wrap"><table>
<thead><tr><th>Order ID</th><th>Customer</th><th>Product</th><th>Amount</th><th>Status</th></tr></thead>
<tbody>{rows}</tbody>
</table></div></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dashboard::{get_recent_orders, get_stats};

    #[test]
    fn completed_is_green() {
        assert_eq!(badge_style("Completed"), BadgeStyle::Green);
    }

    #[test]
    fn pending_is_yellow() {
        assert_eq!(badge_style("Pending"), BadgeStyle::Yellow);
    }

    #[test]
    fn everything_else_is_blue() {
        for status in ["Processing", "", "Shipped", "completed", "Pending "] {
            assert_eq!(badge_style(status), BadgeStyle::Blue, "status {status:?}");
        }
    }

    #[test]
    fn cards_follow_stats() {
        let cards = stat_cards(&get_stats());
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["$45,231", "2,345", "1,234", "24.5%"]);
        assert_eq!(cards[0].title, "Total Revenue");
        assert_eq!(cards[3].change, "+3.1%");
    }

    #[test]
    fn render_includes_every_order_with_badge() {
        let html = render(&get_stats(), &get_recent_orders());
        for id in ["#12345", "#12344", "#12343", "#12342"] {
            assert!(html.contains(&format!(r#"<td class="strong">{id}</td>"#)));
        }
        assert_eq!(html.matches(r#"class="badge badge-green""#).count(), 2);
        assert_eq!(html.matches(r#"class="badge badge-yellow""#).count(), 1);
        assert_eq!(html.matches(r#"class="badge badge-blue""#).count(), 1);
        assert!(html.contains("+20.1% from last month"));
    }

    #[test]
    fn render_escapes_order_fields() {
        let mut orders = get_recent_orders();
        orders[0].customer = "<script>x</script>".to_string();
        let html = render(&get_stats(), &orders);
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>x"));
    }
}
