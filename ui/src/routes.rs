// ui/src/routes.rs
use leptos::prelude::*;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{landing::Landing, login::Login};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p class="text-white p-8">"404 – not found"</p> }>
        <Route path=path!("")       view=Landing />
        <Route path=path!("/login") view=Login   />
      </Routes>
    }
}
