use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::backend::AppCmd;
use crate::components::nav::{
    page_path, AdminBar, Chrome, MobileMenu, NavLink, StudentNav, ADMIN_DASHBOARD, HOME,
};
use crate::components::AppState;
use crate::Route;

#[component]
pub fn Layout() -> Element {
    let mut app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let route = use_route::<Route>();

    // Resolve the session once per mount
    let load_tx = cmd_tx.clone();
    use_effect(move || {
        let _ = load_tx.send(AppCmd::LoadSession);
    });

    let logout = use_callback(move |_: ()| {
        app_state.sign_out();
        let _ = cmd_tx.send(AppCmd::Logout);
    });

    let chrome = {
        let layout = app_state.layout.read();
        Chrome::for_page(route.page_name(), layout.session.user(), layout.unread_count)
    };

    match chrome {
        Chrome::Bare => rsx! { Outlet::<Route> {} },
        Chrome::Admin(admin) => rsx! {
            AdminChrome { admin: admin, on_logout: move |_| logout.call(()) }
        },
        Chrome::Student(student) => rsx! {
            StudentChrome { student: student, on_logout: move |_| logout.call(()) }
        },
    }
}

#[component]
fn AdminChrome(admin: AdminBar, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-slate-900 via-slate-800 to-teal-900",
            nav { class: "bg-black/30 backdrop-blur border-b border-white/10 sticky top-0 z-50",
                div { class: "container mx-auto px-4",
                    div { class: "flex items-center justify-between h-16",
                        Link {
                            to: page_path(ADMIN_DASHBOARD),
                            class: "flex items-center gap-3",
                            div { class: "w-10 h-10 rounded-full bg-gradient-to-r from-amber-500 to-orange-500 flex items-center justify-center",
                                span { class: "text-white text-xl", "🛡" }
                            }
                            div {
                                span { class: "text-white font-bold text-lg", "Admin Portal" }
                                p { class: "text-xs text-gray-300", "Campus Lost & Found" }
                            }
                        }

                        if let Some(user) = admin.user.clone() {
                            div { class: "flex items-center gap-4",
                                span { class: "text-gray-300 text-sm hidden md:inline", "{user.full_name}" }
                                button {
                                    class: "btn btn-ghost btn-sm text-gray-300 hover:text-white hover:bg-white/10",
                                    onclick: move |_| on_logout.call(()),
                                    "⎋ Logout"
                                }
                            }
                        }
                    }
                }
            }

            Outlet::<Route> {}
        }
    }
}

#[component]
fn StudentChrome(student: StudentNav, on_logout: EventHandler<()>) -> Element {
    let mut menu = use_signal(MobileMenu::default);
    let menu_state = menu();

    rsx! {
        div { class: "min-h-screen flex flex-col bg-gradient-to-br from-blue-50 via-white to-teal-50",
            nav { class: "bg-white shadow-md sticky top-0 z-50",
                div { class: "container mx-auto px-4",
                    div { class: "flex items-center justify-between h-16",
                        // Logo
                        Link {
                            to: page_path(HOME),
                            class: "flex items-center gap-3",
                            div { class: "w-10 h-10 rounded-full bg-gradient-to-r from-blue-600 to-teal-500 flex items-center justify-center",
                                span { class: "text-white text-xl", "🎓" }
                            }
                            div { class: "hidden sm:block",
                                span { class: "font-bold text-gray-900 text-lg", "Campus Lost & Found" }
                                p { class: "text-xs text-gray-500", "GVPCE" }
                            }
                        }

                        div { class: "hidden md:flex items-center gap-2",
                            for link in student.links.iter().cloned() {
                                NavButton {
                                    key: "{link.page}",
                                    link: link.clone(),
                                    mobile: false,
                                    on_activate: move |_| menu.write().close(),
                                }
                            }
                        }

                        if let Some(user) = student.user.clone() {
                            div { class: "hidden md:flex items-center gap-3",
                                div { class: "text-right",
                                    p { class: "text-sm font-medium text-gray-900", "{user.full_name}" }
                                    p { class: "text-xs text-gray-500", "{user.email}" }
                                }
                                button {
                                    class: "btn btn-ghost btn-icon",
                                    title: "Logout",
                                    onclick: move |_| on_logout.call(()),
                                    "⎋"
                                }
                            }
                        }

                        button {
                            class: "btn btn-ghost btn-icon md:hidden",
                            onclick: move |_| menu.write().toggle(),
                            "{menu_state.icon()}"
                        }
                    }
                }

                if menu_state.open {
                    div { class: "md:hidden border-t bg-white",
                        div { class: "container mx-auto px-4 py-4 space-y-2",
                            for link in student.links.iter().cloned() {
                                NavButton {
                                    key: "{link.page}",
                                    link: link.clone(),
                                    mobile: true,
                                    on_activate: move |_| menu.write().close(),
                                }
                            }

                            if let Some(user) = student.user.clone() {
                                div { class: "pt-4 pb-2 border-t",
                                    p { class: "text-sm font-medium text-gray-900", "{user.full_name}" }
                                    p { class: "text-xs text-gray-500", "{user.email}" }
                                }
                                button {
                                    class: "btn btn-outline w-full",
                                    onclick: move |_| on_logout.call(()),
                                    "⎋ Logout"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "flex-1",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}

#[component]
fn NavButton(link: NavLink, mobile: bool, on_activate: EventHandler<()>) -> Element {
    let layout_class = if mobile { "w-full justify-start" } else { "relative" };
    let state_class = if link.active {
        "bg-gradient-to-r from-blue-600 to-teal-500 text-white"
    } else {
        "text-gray-700 hover:bg-gray-100"
    };
    let badge_class = if mobile { "ml-auto" } else { "ml-2" };

    rsx! {
        Link {
            to: link.path(),
            onclick: move |_| on_activate.call(()),
            span { class: "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium {layout_class} {state_class}",
                span { class: "text-base", "{link.icon}" }
                "{link.label}"
                if let Some(count) = link.badge {
                    span { class: "{badge_class} bg-red-500 text-white text-xs px-1.5 rounded-full", "{count}" }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "bg-white border-t mt-12",
            div { class: "container mx-auto px-4 py-6",
                div { class: "text-center text-sm text-gray-600",
                    p { "© 2024 Campus Lost & Found System - GVPCE" }
                    p { class: "mt-1", "Powered by AI • Designed for Students" }
                }
            }
        }
    }
}
