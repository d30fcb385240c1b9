use crate::navigation::{badge_style, MenuTree};
use crate::state::session::Session;

pub const BUSINESS_SECTION: &str = "BUSINESS MANAGEMENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTile {
    pub label: &'static str,
    pub href: &'static str,
    pub count: u32,
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub fn welcome_line(session: Option<&Session>) -> String {
    let name = session
        .and_then(|s| s.user_email.as_deref())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .unwrap_or("Admin");
    format!("Welcome back, {}!", name)
}

/// One tile per counted order-status link, colored like its sidebar badge.
pub fn status_tiles(tree: &MenuTree) -> Vec<StatusTile> {
    tree.counted_links()
        .into_iter()
        .filter_map(|node| {
            let count = node.count?;
            Some(StatusTile {
                label: node.title,
                href: node.href?,
                count,
                style: badge_style(node.title, count).css(),
            })
        })
        .collect()
}

pub fn business_shortcuts(tree: &MenuTree) -> Vec<Shortcut> {
    tree.sections()
        .iter()
        .filter(|section| section.title == BUSINESS_SECTION)
        .flat_map(|section| section.items.iter())
        .filter_map(|id| tree.get(*id))
        .filter_map(|node| {
            Some(Shortcut {
                label: node.title,
                icon: node.icon.unwrap_or("fas fa-link"),
                href: node.href?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{badge::REFUND, menu};

    fn session(email: Option<&str>) -> Session {
        Session {
            user_email: email.map(str::to_string),
            token: "tok".into(),
        }
    }

    #[test]
    fn welcome_falls_back_to_admin() {
        assert_eq!(welcome_line(None), "Welcome back, Admin!");
        assert_eq!(welcome_line(Some(&session(None))), "Welcome back, Admin!");
        assert_eq!(welcome_line(Some(&session(Some("  ")))), "Welcome back, Admin!");
        assert_eq!(
            welcome_line(Some(&session(Some("owner@example.com")))),
            "Welcome back, owner@example.com!"
        );
    }

    #[test]
    fn tiles_follow_counted_links_in_menu_order() {
        let tiles = status_tiles(menu());
        assert_eq!(tiles.len(), 14);
        assert_eq!(tiles[0].label, "All");
        assert_eq!(tiles[0].count, 13);
        let refunded = tiles.iter().find(|t| t.label == "Refunded").unwrap();
        assert!(refunded.style.contains(&format!("border: 1.5px solid {}", REFUND)));
    }

    #[test]
    fn shortcuts_cover_restaurant_pages() {
        let hrefs: Vec<_> = business_shortcuts(menu()).iter().map(|s| s.href).collect();
        assert!(hrefs.contains(&"/business-management/myRestaurantProfile"));
        assert!(hrefs.contains(&"/business-management/restaurant-config"));
    }
}
