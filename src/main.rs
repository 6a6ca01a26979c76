mod backend;
mod components;
mod config;

use backend::client::ApiClient;
use backend::{AppCmd, Backend};
use components::layout::Layout;
use components::nav;
use components::pages::{
    AdminDashboard, AdminLogin, Home, Index, Login, Matches, MyItems, Notifications, Signup,
};
use components::AppState;
use config::Config;

use dioxus::prelude::*;
use tokio::sync::mpsc;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Index {},
    #[route("/Home")]
    Home {},
    #[route("/MyItems")]
    MyItems {},
    #[route("/Matches")]
    Matches {},
    #[route("/Notifications")]
    Notifications {},
    #[route("/Login")]
    Login {},
    #[route("/Signup")]
    Signup {},
    #[route("/AdminLogin")]
    AdminLogin {},
    #[route("/AdminDashboard")]
    AdminDashboard {},
}

impl Route {
    pub fn page_name(&self) -> &'static str {
        match self {
            Route::Index {} | Route::Home {} => nav::HOME,
            Route::MyItems {} => nav::MY_ITEMS,
            Route::Matches {} => nav::MATCHES,
            Route::Notifications {} => nav::NOTIFICATIONS,
            Route::Login {} => nav::LOGIN,
            Route::Signup {} => nav::SIGNUP,
            Route::AdminLogin {} => nav::ADMIN_LOGIN,
            Route::AdminDashboard {} => nav::ADMIN_DASHBOARD,
        }
    }
}

fn load_config() -> Config {
    Config::from_env().unwrap_or_else(|e| {
        tracing::error!("invalid configuration, using defaults: {}", e);
        Config::default()
    })
}

fn main() {
    let config = load_config();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(config.tracing_level())
            .try_init();
    }

    tracing::info!(api = %config.api_base_url, app_id = %config.app_id, "starting campus lost & found");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    let cmd_tx = use_hook(|| {
        let config = load_config();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<AppCmd>();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        let client = ApiClient::new(&config);
        let mut backend = Backend::new(client.clone(), client, cmd_rx, event_tx, config.poll_interval());
        spawn(async move {
            backend.run().await;
        });

        let mut app_state = app_state;
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                app_state.apply(event);
            }
        });

        cmd_tx
    });
    use_context_provider(|| cmd_tx);

    rsx! {
        Router::<Route> {}
    }
}
