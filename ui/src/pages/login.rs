use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::get_started::{ButtonSize, ButtonVariant, GetStarted};

// Sign-in lives outside this site for now; the page only closes the loop
// for the landing CTA.
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <Title text="Tomatask · Iniciar sesión"/>
        <div class="min-h-screen bg-black flex items-center justify-center px-6">
            <div class="max-w-md w-full text-center">
                <img src="/assets/tomato.svg" alt="Tomatask" class="mx-auto h-16 w-16 mb-6"/>
                <h1 class="text-3xl font-semibold text-white mb-4">"Iniciar sesión"</h1>
                <p class="text-gray-400 mb-10">"Muy pronto podrás entrar con tu cuenta."</p>
                <GetStarted
                    text="Volver al inicio"
                    destination="/"
                    size=ButtonSize::Md
                    variant=ButtonVariant::Secondary
                    replace=true
                />
            </div>
        </div>
    }
}
