use leptos::logging::error;
use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::get_started::{ButtonSize, ButtonVariant, GetStarted};
use crate::components::showcase::{ShowcaseData, StickyFeatureShowcase};
use crate::typing::Typewriter;

const SHOWCASE_JSON: &str = include_str!("../../data/showcase.json");

pub const HERO_PHRASES: [&str; 5] = [
    "Ordena tus Deberes",
    "Aclara el camino",
    "Mejora Continua",
    "Previene desórdenes",
    "Acelera tu progreso",
];

const BLOB_CLIP: &str = "clip-path: polygon(74.1% 44.1%, 100% 61.6%, 97.5% 26.9%, 85.5% 0.1%, \
    80.7% 2%, 72.5% 32.5%, 60.2% 62.4%, 52.4% 68.1%, 47.5% 58.3%, 45.2% 34.5%, 27.5% 76.7%, \
    0.1% 64.9%, 17.9% 100%, 27.6% 76.8%, 76.1% 97.7%, 74.1% 44.1%)";

#[component]
fn GradientBlob(outer: &'static str, inner: &'static str) -> impl IntoView {
    view! {
        <div aria-hidden="true" class=format!("absolute inset-x-0 -z-10 transform-gpu overflow-hidden blur-3xl {outer}")>
            <div
                style=BLOB_CLIP
                class=format!("relative aspect-[1155/678] w-96 -translate-x-1/2 bg-gradient-to-tr from-[#ff80b5] to-[#9089fc] opacity-30 sm:w-289 {inner}")
            />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let phrases: Vec<String> = HERO_PHRASES.iter().map(|p| p.to_string()).collect();

    view! {
        <div class="relative isolate px-6 pt-14 lg:px-8">
            <GradientBlob
                outer="-top-40 sm:-top-80"
                inner="left-[calc(50%-11rem)] rotate-[30deg] sm:left-[calc(50%-30rem)]"
            />

            <div class="mx-auto max-w-2xl py-32 sm:py-48 lg:py-56">
                <img src="/assets/tomato.svg" alt="" class="h-25 w-25"/>
                <div class="text-center">
                    <h1 class="text-5xl font-semibold tracking-tight text-balance text-white sm:text-7xl">
                        "Tomatask"
                    </h1>

                    <Typewriter
                        phrases
                        typing_speed=100
                        deleting_speed=30
                        pause_time=1500
                        class="mt-8 text-lg font-medium text-pretty text-gray-400 sm:text-xl/8"
                    />

                    <div class="mt-10 px-0 py-20 flex items-center justify-center gap-x-6">
                        <GetStarted
                            text="Empezar ahora"
                            destination="/login"
                            size=ButtonSize::Lg
                            variant=ButtonVariant::Particles
                            show_aura=true
                        />
                    </div>
                </div>
            </div>

            <GradientBlob
                outer="top-[calc(100%-13rem)] sm:top-[calc(100%-30rem)]"
                inner="left-[calc(50%+3rem)] sm:left-[calc(50%+36rem)]"
            />
        </div>
    }
}

#[component]
fn Showcase() -> impl IntoView {
    match ShowcaseData::from_json(SHOWCASE_JSON) {
        Ok(data) => view! {
            <StickyFeatureShowcase
                main_title=data.main_title
                features=data.features
                breakpoint=data.breakpoint
            />
        }
        .into_any(),
        Err(e) => {
            error!("showcase data unreadable: {e}");
            ().into_any()
        }
    }
}

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black flex flex-col overflow-hidden">
            <a href="/" class="sr-only">"Tomatask"</a>
            <Hero/>
            <Showcase/>
            <Footer/>
        </div>
    }
}
