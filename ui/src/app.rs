use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::routes::AppRoutes;

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="Tomatask"/>
      <Stylesheet id="font-awesome" href=FONT_AWESOME/>
      <Router>
        <main class="min-h-screen bg-black">
          <AppRoutes/>
        </main>
      </Router>
    }
}
