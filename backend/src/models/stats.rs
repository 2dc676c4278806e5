use serde::{Deserialize, Serialize};

/// Aggregate metrics shown at the top of the dashboard.
///
/// Currency and percentage values arrive pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_revenue: String,
    pub total_users: i64,
    pub total_orders: i64,
    pub growth_rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_field_order() {
        let stats = StatsSummary {
            total_revenue: "$10".to_string(),
            total_users: 1,
            total_orders: 2,
            growth_rate: "3%".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"total_revenue":"$10","total_users":1,"total_orders":2,"growth_rate":"3%"}"#
        );
    }
}
