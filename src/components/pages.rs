//! Route targets. Page bodies live with their own features; these render a
//! heading so the layout has something to wrap.

use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::backend::AppCmd;
use crate::components::nav::{page_path, LOGIN, SIGNUP};
use crate::Route;

#[component]
fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{title}" }
            p { class: "text-gray-600", "{subtitle}" }
        }
    }
}

#[component]
pub fn Index() -> Element {
    rsx! { Home {} }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        PageHeader {
            title: "Lost something on campus?",
            subtitle: "Report lost or found items and let matching do the rest.",
        }
    }
}

#[component]
pub fn MyItems() -> Element {
    rsx! {
        PageHeader { title: "My Items", subtitle: "Items you have reported." }
    }
}

#[component]
pub fn Matches() -> Element {
    rsx! {
        PageHeader { title: "Matches", subtitle: "Possible matches for your reports." }
    }
}

#[component]
pub fn Notifications() -> Element {
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    // The badge should not lag behind what this page shows
    use_effect(move || {
        let _ = cmd_tx.send(AppCmd::RefreshUnreadCount);
    });

    rsx! {
        PageHeader { title: "Notifications", subtitle: "Updates about your items and matches." }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            PageHeader { title: "Sign in", subtitle: "Campus Lost & Found" }
            Link { to: page_path(SIGNUP), class: "text-blue-600", "Create an account" }
        }
    }
}

#[component]
pub fn Signup() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            PageHeader { title: "Create an account", subtitle: "Campus Lost & Found" }
            Link { to: page_path(LOGIN), class: "text-blue-600", "Already registered? Sign in" }
        }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            PageHeader { title: "Admin sign in", subtitle: "Campus Lost & Found" }
            Link { to: Route::Home {}, class: "text-blue-600", "Back to the student site" }
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        PageHeader { title: "Admin Dashboard", subtitle: "Review reports and confirm matches." }
    }
}
