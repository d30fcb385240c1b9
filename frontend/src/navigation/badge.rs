//! Colors for the order-status counters in the sidebar and dashboard.

pub const NEUTRAL: &str = "#334257";
pub const DELIVERED: &str = "#1E88E5";
pub const PENDING: &str = "#388E3C";
pub const REFUND: &str = "#D32F2F";
pub const WHITE: &str = "#FFFFFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Delivered,
    Pending,
    Refund,
    Other,
}

pub fn classify(status: &str) -> StatusCategory {
    match status {
        "All" | "Cooking" | "Ready For Delivery" | "Delivered" => StatusCategory::Delivered,
        "Pending" | "Confirmed" | "Accepted" | "Dine In" | "Scheduled" | "Payment Failed"
        | "Canceled" => StatusCategory::Pending,
        "Refunded" | "Refund Requested" => StatusCategory::Refund,
        _ => StatusCategory::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub outline: Option<&'static str>,
}

impl BadgeStyle {
    const fn filled(background: &'static str) -> Self {
        Self {
            background,
            text: WHITE,
            outline: None,
        }
    }

    pub fn css(&self) -> String {
        let mut css = format!("background-color: {}; color: {};", self.background, self.text);
        if let Some(outline) = self.outline {
            css.push_str(&format!(" border: 1.5px solid {};", outline));
        }
        css
    }
}

pub fn badge_style(status: &str, count: u32) -> BadgeStyle {
    let category = classify(status);
    if count == 0 {
        return match category {
            StatusCategory::Refund => BadgeStyle {
                background: WHITE,
                text: REFUND,
                outline: Some(REFUND),
            },
            _ => BadgeStyle::filled(NEUTRAL),
        };
    }
    match category {
        StatusCategory::Delivered | StatusCategory::Other => BadgeStyle::filled(DELIVERED),
        StatusCategory::Pending => BadgeStyle::filled(PENDING),
        StatusCategory::Refund => BadgeStyle::filled(REFUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_refund_badges_are_outlined_white() {
        for status in ["Refunded", "Refund Requested"] {
            let style = badge_style(status, 0);
            assert_eq!(style.background, WHITE);
            assert_eq!(style.outline, Some(REFUND));
            assert!(style.css().contains("border: 1.5px solid #D32F2F"));
        }
    }

    #[test]
    fn zero_counts_are_neutral_for_other_statuses() {
        for status in ["All", "Pending", "Cooking", "Canceled", "Something Else"] {
            assert_eq!(badge_style(status, 0), BadgeStyle::filled(NEUTRAL));
        }
    }

    #[test]
    fn nonzero_counts_follow_status_category() {
        assert_eq!(badge_style("Cooking", 5).background, DELIVERED);
        assert_eq!(badge_style("Ready For Delivery", 4).background, DELIVERED);
        assert_eq!(badge_style("Pending", 3).background, PENDING);
        assert_eq!(badge_style("Payment Failed", 1).background, PENDING);
        assert_eq!(badge_style("Refund Requested", 2).background, REFUND);
        assert_eq!(badge_style("Food On The Way", 7).background, DELIVERED);
        assert!(badge_style("Pending", 3).outline.is_none());
    }
}
