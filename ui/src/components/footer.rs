use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Social {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Pinterest,
    Telegram,
}

impl Social {
    pub const ALL: [Social; 7] = [
        Social::Facebook,
        Social::Twitter,
        Social::Instagram,
        Social::Linkedin,
        Social::Youtube,
        Social::Pinterest,
        Social::Telegram,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Social::Facebook => "facebook",
            Social::Twitter => "twitter",
            Social::Instagram => "instagram",
            Social::Linkedin => "linkedin",
            Social::Youtube => "youtube",
            Social::Pinterest => "pinterest",
            Social::Telegram => "telegram",
        }
    }

    pub fn aria_label(self) -> String {
        format!("Visit our {} page", self.name())
    }
}

pub fn copyright(year: u32) -> String {
    format!("© {year} Tomatillos. All rights reserved.")
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
fn ColumnHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1 mb-4">
            <h2 class="text-white text-lg font-normal uppercase tracking-wider border-b-2 border-red-500/90 pb-2">
                {title}
            </h2>
        </div>
    }
}

#[component]
fn PhoneLink(href: &'static str, number: &'static str, note: &'static str) -> impl IntoView {
    view! {
        <p class="flex items-center gap-2 hover:text-gray-300">
            <i class="fa-solid fa-phone text-lg"></i>
            <a href=href>{number} " (" <span class="text-xs">{note}</span> ")"</a>
        </p>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let socials = Social::ALL
        .into_iter()
        .map(|s| {
            view! {
                <a
                    href="#"
                    class="w-10 h-10 bg-gray-700 hover:bg-white hover:text-blue-500 rounded-full flex items-center justify-center transition-all duration-300"
                    aria-label=s.aria_label()
                >
                    <i class=format!("fa-brands fa-{} text-lg", s.name())></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-black text-white">
            <div class="container mx-auto px-4">
                <div class="flex justify-center py-10 md:py-9">
                    <img
                        src="/assets/tomato.svg"
                        alt="TomaTask"
                        class="w-2/5 md:w-1/4 lg:w-[18%] xl:w-[15%] max-w-[200px]"
                    />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 py-8">
                    <div class="text-gray-400 font-medium text-sm space-y-3">
                        <ColumnHeading title="Information"/>
                        <p>"Registration Start Date"</p>
                        <p>"Registration End Date"</p>
                        <p>"Exam Last Date"</p>
                    </div>

                    <div class="text-gray-400 font-medium text-sm space-y-3">
                        <ColumnHeading title="Dates"/>
                        <p>"23 Dec 2021"</p>
                        <p>"30 May 2022"</p>
                        <p>"23 Dec 2021 to 31 May 2022"</p>
                    </div>

                    <div class="text-gray-400 font-medium text-sm space-y-3 pt-4">
                        <ColumnHeading title="Support"/>
                        <PhoneLink href="tel:9946948000" number="+52 1 639 117 5750" note="General Enquiry"/>
                        <PhoneLink href="tel:9946947000" number="+52 1 81 1603 0190" note="Technical Support: TomaTask"/>
                    </div>

                    <div class="text-gray-400 font-medium text-sm space-y-4">
                        <ColumnHeading title="Let's Meet"/>
                        <div class="flex items-start gap-2">
                            <i class="fa-solid fa-house text-lg mt-1"></i>
                            <div>
                                <strong class="text-gray-300 block">"Our Company"</strong>
                                <address class="not-italic mt-1 leading-relaxed">
                                    "Garza Sada, Paseo Tecnológico" <br/>
                                    "Monterrey, Nuevo León (México)" <br/>
                                    "General Helpline No: +52 1 921 222 3320"
                                </address>
                            </div>
                        </div>
                        <p class="flex items-center gap-2 hover:text-gray-300 mt-3">
                            <i class="fa-solid fa-envelope text-lg"></i>
                            <a href="mailto:tomatillos@toma.co">"tomatillos@toma.co"</a>
                        </p>
                    </div>
                </div>

                <div class="border-t border-gray-600 my-6"></div>

                <div class="flex justify-center gap-3 py-4 mb-6">{socials}</div>

                <div class="text-center text-gray-500 text-sm pb-4">{copyright(current_year())}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_labels() {
        assert_eq!(Social::ALL.len(), 7);
        assert_eq!(Social::Linkedin.aria_label(), "Visit our linkedin page");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2025), "© 2025 Tomatillos. All rights reserved.");
    }
}
