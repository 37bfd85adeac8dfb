use leptos::prelude::*;
use leptos_meta::Style;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use std::fmt::Write;

const PARTICLE_IMG: &str = "/assets/tomato.svg";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-3 py-2 text-sm font-semibold",
            ButtonSize::Lg => "px-6 py-3 text-lg font-semibold",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Classic,
    #[default]
    Particles,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            // focus ring only, hover border shared with the other variants
            ButtonVariant::Classic | ButtonVariant::Particles => {
                "bg-red-500 text-white shadow hover:bg-orange-500 hover:border-[#00b947] \
                 border-2 border-transparent focus:ring-3 focus:ring-offset-3 focus:ring-orange-500"
            }
            ButtonVariant::Primary => {
                "bg-red-600 hover:bg-red-700 hover:border-[#00b947] border-2 border-transparent text-white"
            }
            ButtonVariant::Secondary => {
                "bg-gray-600 hover:bg-gray-700 hover:border-[#00b947] border-2 border-transparent text-white"
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

pub fn button_classes(size: ButtonSize, variant: ButtonVariant, extra: &str) -> String {
    [
        "rounded-md relative z-30",
        "transition-all duration-300 ease-in-out",
        "disabled:opacity-50 disabled:cursor-not-allowed",
        size.classes(),
        variant.classes(),
        extra,
    ]
    .iter()
    .map(|c| c.trim())
    .filter(|c| !c.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Where a click should take the user, if anywhere.
pub fn click_target<'a>(
    handler_allowed: bool,
    disabled: bool,
    destination: Option<&'a str>,
) -> Option<&'a str> {
    if !handler_allowed || disabled {
        return None;
    }
    destination.filter(|d| !d.is_empty())
}

/// One floating tomato around the button.
pub struct Particle {
    pub placement: &'static str,
    /// `translate()` arguments, spread evenly over one loop. Rotation runs
    /// 0..360deg across the same stops.
    pub path: &'static [&'static str],
    pub duration_ms: u32,
}

const ORBIT_DOWN_LEFT: &[&str] = &["0, 0", "-15px, 23px", "-30px, 45px", "-10px, 23px", "0px, 0px"];
const ORBIT_DOWN_RIGHT: &[&str] = &["0, 0", "20px, 20px", "35px, 40px", "25px, 20px", "0px, 0px"];

pub const PARTICLES: &[Particle] = &[
    Particle {
        placement: "top-0 left-1/10 w-5 h-5 opacity-70 blur-[1px] -translate-x-1/2 rotate-320",
        path: &["-50%, 0", "-50%, -23px", "-50%, -45px", "-50%, -23px", "-50%, 0px"],
        duration_ms: 800,
    },
    Particle {
        placement: "bottom-0 left-1/4 w-4 h-4 opacity-60 blur-[1px] -rotate-10",
        path: ORBIT_DOWN_LEFT,
        duration_ms: 1000,
    },
    Particle {
        placement: "top-1/2 right-0 w-6 h-6 opacity-75 blur-[1px] rotate-45",
        path: &["0, 0", "25px, -20px", "40px, -35px", "30px, -15px", "0px, 0px"],
        duration_ms: 800,
    },
    Particle {
        placement: "top-1/4 right-0 w-5 h-5 opacity-65 blur-[1px] rotate-30",
        path: &["0, 0", "35px, -50px", "0px, 0px"],
        duration_ms: 1400,
    },
    Particle {
        placement: "bottom-1/4 right-1/4 w-4 h-4 opacity-70 blur-[1px] rotate-10",
        path: ORBIT_DOWN_RIGHT,
        duration_ms: 700,
    },
    Particle {
        placement: "top-1/3 left-0 w-5 h-5 opacity-60 blur-[1px] -rotate-15",
        path: &["0, 0", "-40px, 25px", "0px, 0px"],
        duration_ms: 1400,
    },
    Particle {
        placement: "top-0 left-4/9 w-6 h-6 opacity-50 blur-[1px] rotate-0",
        path: &["0, 0", "0, -25px", "0, -40px", "0, -30px", "0, 0px"],
        duration_ms: 1300,
    },
    Particle {
        placement: "bottom-0 right-1/2 w-4 h-4 opacity-55 blur-[1px] -rotate-0",
        path: &["0, 0", "10px, 25px", "20px, 50px", "15px, 25px", "0px, 0px"],
        duration_ms: 1400,
    },
    Particle {
        placement: "top-0 left-1/4 w-4 h-4 opacity-60 blur-[1px] rotate-140",
        path: ORBIT_DOWN_LEFT,
        duration_ms: 1000,
    },
    Particle {
        placement: "top-1/4 right-1/4 w-4 h-4 opacity-70 blur-[1px] rotate-240",
        path: ORBIT_DOWN_RIGHT,
        duration_ms: 700,
    },
];

/// Keyframes plus the hover rules that start them, for every particle.
/// Animation names are `float-aura-1` .. `float-aura-N`.
pub fn aura_css(particles: &[Particle]) -> String {
    let mut css = String::new();
    for (i, p) in particles.iter().enumerate() {
        let n = i + 1;
        let last = p.path.len().saturating_sub(1).max(1);

        let _ = writeln!(css, "@keyframes float-aura-{n} {{");
        for (stop, translate) in p.path.iter().enumerate() {
            let pct = stop * 100 / last;
            let deg = stop * 360 / last;
            let _ = writeln!(
                css,
                "  {pct}% {{ transform: translate({translate}) rotate({deg}deg); }}"
            );
        }
        let _ = writeln!(css, "}}");
    }
    for (i, p) in particles.iter().enumerate() {
        let n = i + 1;
        let _ = writeln!(
            css,
            ".group:hover .float-aura-{n} {{ animation: float-aura-{n} {}ms ease-in-out infinite; }}",
            p.duration_ms
        );
    }
    css
}

#[component]
fn ParticleAura(show_aura: bool) -> impl IntoView {
    view! {
        <Style id="float-aura">{aura_css(PARTICLES)}</Style>
        <div class="absolute inset-0 z-20 opacity-0 group-hover:opacity-100 transition-opacity duration-500">
            {show_aura.then(|| view! {
                <div class="absolute -inset-5 rounded-2xl blur-3xl bg-red-500/40 group-hover:bg-orange-500/50 transition-all duration-500"/>
            })}

            <div class="absolute inset-0">
                {PARTICLES
                    .iter()
                    .enumerate()
                    .map(|(i, p)| view! {
                        <img
                            src=PARTICLE_IMG
                            alt=""
                            class=format!("absolute transform {} float-aura-{}", p.placement, i + 1)
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Call-to-action button. With the `Particles` variant, hovering the
/// surrounding area sets a ring of tomatoes floating around it.
#[component]
pub fn GetStarted(
    #[prop(into, default = "¡Empieza Ya!".into())] text: String,
    #[prop(into, optional)] destination: Option<String>,
    /// Returning `false` cancels navigation.
    #[prop(into, optional)]
    on_click: Option<Callback<(), bool>>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] disabled: bool,
    #[prop(into, optional)] class: String,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] replace: bool,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] show_aura: bool,
) -> impl IntoView {
    let navigate = use_navigate();
    let classes = format!("{} group-hover:scale-105", button_classes(size, variant, &class));

    let handle_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();

        let allowed = on_click.map(|cb| cb.run(())).unwrap_or(true);
        if let Some(dest) = click_target(allowed, disabled, destination.as_deref()) {
            navigate(
                dest,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
        }
    };

    view! {
        <div class="relative inline-flex items-center justify-center group hover:cursor-pointer">
            // wide invisible hover zone so the effect starts before the pointer reaches the button
            <div class="cursor-default absolute inset-0 -mx-140 -my-60"></div>

            <button
                type=button_type.as_str()
                class=classes
                on:click=handle_click
                disabled=disabled
            >
                <span class="relative z-30">{text}</span>
            </button>

            {(variant == ButtonVariant::Particles).then(|| view! { <ParticleAura show_aura/> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_join_without_gaps() {
        let c = button_classes(ButtonSize::Lg, ButtonVariant::Primary, "");
        assert!(c.starts_with("rounded-md relative z-30 "));
        assert!(c.contains("px-6 py-3 text-lg font-semibold"));
        assert!(c.ends_with("text-white"));
        assert!(!c.contains("  "));
    }

    #[test]
    fn extra_classes_go_last() {
        let c = button_classes(ButtonSize::Sm, ButtonVariant::Secondary, " mt-4 ");
        assert!(c.ends_with("mt-4"));
        assert!(c.contains("bg-gray-600"));
    }

    #[test]
    fn defaults_match_cta() {
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(ButtonVariant::default(), ButtonVariant::Particles);
        assert_eq!(ButtonType::default().as_str(), "button");
    }

    #[test]
    fn click_target_rules() {
        assert_eq!(click_target(true, false, Some("/login")), Some("/login"));
        assert_eq!(click_target(false, false, Some("/login")), None);
        assert_eq!(click_target(true, true, Some("/login")), None);
        assert_eq!(click_target(true, false, None), None);
        assert_eq!(click_target(true, false, Some("")), None);
    }

    #[test]
    fn keyframes_cover_every_particle() {
        let css = aura_css(PARTICLES);
        for n in 1..=PARTICLES.len() {
            assert!(css.contains(&format!("@keyframes float-aura-{n} {{")));
            assert!(css.contains(&format!(".group:hover .float-aura-{n} {{")));
        }
    }

    #[test]
    fn keyframe_stops_are_spread_evenly() {
        let css = aura_css(&PARTICLES[3..4]);
        assert!(css.contains("0% { transform: translate(0, 0) rotate(0deg); }"));
        assert!(css.contains("50% { transform: translate(35px, -50px) rotate(180deg); }"));
        assert!(css.contains("100% { transform: translate(0px, 0px) rotate(360deg); }"));
        assert!(css.contains("animation: float-aura-1 1400ms ease-in-out infinite;"));
    }
}
