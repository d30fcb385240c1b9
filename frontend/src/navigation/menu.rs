use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub href: Option<&'static str>,
    pub count: Option<u32>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NavNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: Vec<NodeId>,
}

/// Immutable sidebar tree. Nodes live in one arena and refer to each other by
/// [`NodeId`]; UI flags are kept elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    nodes: Vec<NavNode>,
    sections: Vec<NavSection>,
}

pub struct Item {
    title: &'static str,
    icon: Option<&'static str>,
    href: Option<&'static str>,
    count: Option<u32>,
    children: Vec<Item>,
}

pub fn link(title: &'static str, icon: &'static str, href: &'static str) -> Item {
    Item {
        title,
        icon: Some(icon),
        href: Some(href),
        count: None,
        children: Vec::new(),
    }
}

pub fn sublink(title: &'static str, href: &'static str) -> Item {
    Item {
        title,
        icon: None,
        href: Some(href),
        count: None,
        children: Vec::new(),
    }
}

pub fn counted(title: &'static str, href: &'static str, count: u32) -> Item {
    Item {
        count: Some(count),
        ..sublink(title, href)
    }
}

pub fn group(title: &'static str, icon: &'static str, children: Vec<Item>) -> Item {
    Item {
        title,
        icon: Some(icon),
        href: None,
        count: None,
        children,
    }
}

impl MenuTree {
    pub fn from_sections(sections: Vec<(&'static str, Vec<Item>)>) -> Self {
        let mut tree = MenuTree::default();
        for (title, items) in sections {
            let ids = items
                .into_iter()
                .map(|item| tree.insert(item, None))
                .collect();
            tree.sections.push(NavSection { title, items: ids });
        }
        tree
    }

    fn insert(&mut self, item: Item, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NavNode {
            title: item.title,
            icon: item.icon,
            href: item.href,
            count: item.count,
            parent,
            children: Vec::new(),
        });
        let children: Vec<NodeId> = item
            .children
            .into_iter()
            .map(|child| self.insert(child, Some(id)))
            .collect();
        self.nodes[id.0].children = children;
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&NavNode> {
        self.nodes.get(id.0)
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NavNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn children(&self, id: NodeId) -> Vec<(NodeId, &NavNode)> {
        self.get(id)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|child| self.get(*child).map(|n| (*child, n)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn find_by_title(&self, title: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.title == title)
            .map(|(id, _)| id)
    }

    pub fn find_by_href(&self, href: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.href == Some(href))
            .map(|(id, _)| id)
    }

    /// True when the node, or any node beneath it, links to `pathname`.
    pub fn is_active(&self, id: NodeId, pathname: &str) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        node.href == Some(pathname)
            || node
                .children
                .iter()
                .any(|child| self.is_active(*child, pathname))
    }

    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = cursor {
            out.push(parent);
            cursor = self.get(parent).and_then(|n| n.parent);
        }
        out
    }

    /// Leaves carrying an order-status counter, in menu order.
    pub fn counted_links(&self) -> Vec<&NavNode> {
        self.nodes
            .iter()
            .filter(|node| node.count.is_some())
            .collect()
    }
}

pub fn menu() -> &'static MenuTree {
    static MENU: OnceLock<MenuTree> = OnceLock::new();
    MENU.get_or_init(build_menu)
}

fn build_menu() -> MenuTree {
    MenuTree::from_sections(vec![
        ("MAIN", vec![link("Dashboard", "fas fa-home", "/")]),
        (
            "ORDER MANAGEMENT",
            vec![
                group(
                    "Regular Orders",
                    "fas fa-shopping-cart",
                    vec![
                        counted("All", "/All", 13),
                        counted("Pending", "/Pending", 0),
                        counted("Confirmed", "/Confirmed", 2),
                        counted("Accepted", "/Accepted", 0),
                        counted("Cooking", "/Cooking", 1),
                        counted("Ready For Delivery", "/ReadyForDelivery", 4),
                        counted("Food On The Way", "/FoodOnTheWay", 0),
                        counted("Delivered", "/Delivered", 8),
                        counted("Dine In", "/DineIn", 0),
                        counted("Refunded", "/Refunded", 0),
                        counted("Refund Requested", "/RefundRequested", 2),
                        counted("Scheduled", "/Scheduled", 0),
                        counted("Payment Failed", "/PaymentFailed", 0),
                        counted("Canceled", "/Canceled", 0),
                    ],
                ),
                link(
                    "Subscription Orders",
                    "fas fa-calendar-check",
                    "/order-management/subscription-orders",
                ),
            ],
        ),
        (
            "FOOD MANAGEMENT",
            vec![
                group(
                    "Foods",
                    "fas fa-utensils",
                    vec![
                        sublink("Add New", "/AddNewFood"),
                        sublink("List", "/FoodList"),
                        sublink("Bulk Import", "/FoodBulkImport"),
                        sublink("Bulk Export", "/FoodBulkExport"),
                    ],
                ),
                group(
                    "Categories",
                    "fas fa-th-large",
                    vec![
                        sublink("Category", "/Category"),
                        sublink("Subcategory", "/Subcategory"),
                    ],
                ),
                link("Addons", "fas fa-plus-circle", "/food-management/addons"),
                link("Reviews", "fas fa-star", "/food-management/reviews"),
            ],
        ),
        (
            "PROMOTIONS MANAGEMENT",
            vec![
                group(
                    "Campaign",
                    "fas fa-bullhorn",
                    vec![
                        sublink("Basic Campaign", "/basicCampaign"),
                        sublink("Food Campaign", "/foodCampaign"),
                    ],
                ),
                link("Coupons", "fas fa-ticket-alt", "/coupons"),
            ],
        ),
        ("HELP & SUPPORT", vec![link("Chat", "fas fa-comments", "/chat")]),
        (
            "ADS MANAGEMENT",
            vec![
                link("New Ads", "fas fa-ad", "/newAds"),
                group(
                    "Ads List",
                    "fas fa-list",
                    vec![sublink("Pending", "/pendingAds"), sublink("List", "/adsList")],
                ),
            ],
        ),
        (
            "WALLET MANAGEMENT",
            vec![
                link("My Wallet", "fas fa-wallet", "/myWallet"),
                link("Wallet Method", "fas fa-credit-card", "/walletMethod"),
            ],
        ),
        (
            "DELIVERYMAN MANAGEMENT",
            vec![
                link("Add Delivery Man", "fas fa-user-plus", "/addDeliveryMan"),
                link("DeliveryMan List", "fas fa-motorcycle", "/deliveryManList"),
            ],
        ),
        (
            "REPORTS",
            vec![
                link("Expense Report", "fas fa-file-invoice-dollar", "/expenseReport"),
                link("Transaction", "fas fa-exchange-alt", "/transaction"),
                link("Disbursement Report", "fas fa-money-check", "/disbursementReport"),
                group(
                    "Order Report",
                    "fas fa-chart-bar",
                    vec![
                        sublink("Regular Order Report", "/regularOrderReport"),
                        sublink("Campaign Order Report", "/campaignOrderReport"),
                    ],
                ),
                link("Food Report", "fas fa-chart-pie", "/foodReport"),
                link("Tax Report", "fas fa-percent", "/taxReport"),
            ],
        ),
        (
            "BUSINESS MANAGEMENT",
            vec![
                link(
                    "My Restaurant",
                    "fas fa-store",
                    "/business-management/myRestaurantProfile",
                ),
                link(
                    "Restaurant Config",
                    "fas fa-cog",
                    "/business-management/restaurant-config",
                ),
                link("My QR Code", "fas fa-qrcode", "/business-management/myQRCode"),
                link(
                    "Notification Setup",
                    "fas fa-bell",
                    "/business-management/notification-setup",
                ),
            ],
        ),
        (
            "EMPLOYEE MANAGEMENT",
            vec![
                link(
                    "Employee Role",
                    "fas fa-user-tag",
                    "/employee-management/employee-role",
                ),
                group(
                    "All Employee",
                    "fas fa-users",
                    vec![
                        sublink("Add New Employee", "/employee-management/add-employee"),
                        sublink("List", "/employee-management/employee-list"),
                    ],
                ),
            ],
        ),
    ])
}
