//! What the layout shows for a given page, session and unread count.

use crate::backend::api::UserProfile;

pub const HOME: &str = "Home";
pub const MY_ITEMS: &str = "MyItems";
pub const MATCHES: &str = "Matches";
pub const NOTIFICATIONS: &str = "Notifications";
pub const LOGIN: &str = "Login";
pub const SIGNUP: &str = "Signup";
pub const ADMIN_LOGIN: &str = "AdminLogin";
pub const ADMIN_DASHBOARD: &str = "AdminDashboard";

pub const BARE_PAGES: [&str; 3] = [LOGIN, SIGNUP, ADMIN_LOGIN];

pub fn page_path(page: &str) -> String {
    format!("/{page}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub page: &'static str,
    pub badge: Option<u32>,
    pub active: bool,
}

impl NavLink {
    pub fn path(&self) -> String {
        page_path(self.page)
    }
}

/// The student navigation, in display order. Only Notifications carries a badge,
/// and only while something is unread.
pub fn student_links(current_page: &str, unread: u32) -> [NavLink; 4] {
    let link = |label, icon, page: &'static str| NavLink {
        label,
        icon,
        page,
        badge: None,
        active: page == current_page,
    };

    [
        link("Home", "🏠", HOME),
        link("My Items", "📦", MY_ITEMS),
        link("Matches", "✨", MATCHES),
        NavLink {
            badge: (unread > 0).then_some(unread),
            ..link("Notifications", "🔔", NOTIFICATIONS)
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserBlock {
    pub full_name: String,
    pub email: String,
}

impl From<&UserProfile> for UserBlock {
    fn from(user: &UserProfile) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminBar {
    pub user: Option<UserBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentNav {
    pub links: [NavLink; 4],
    pub user: Option<UserBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chrome {
    Bare,
    Admin(AdminBar),
    Student(StudentNav),
}

impl Chrome {
    pub fn for_page(page: &str, user: Option<&UserProfile>, unread: u32) -> Self {
        if BARE_PAGES.iter().any(|bare| *bare == page) {
            return Chrome::Bare;
        }

        let user = user.map(UserBlock::from);
        if page == ADMIN_DASHBOARD {
            return Chrome::Admin(AdminBar { user });
        }

        Chrome::Student(StudentNav {
            links: student_links(page, if user.is_some() { unread } else { 0 }),
            user,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn icon(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}
