//! Scroll-driven feature showcase: a column of feature blurbs scrolls past a
//! sticky panel that shows the media of whichever blurb sits closest to the
//! panel's anchor. Below the breakpoint everything is stacked instead.

use leptos::ev;
use leptos::html;
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;
use leptos_use::{UseWindowSizeReturn, use_event_listener, use_window, use_window_size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureColors {
    pub primary: String,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub desktop: Media,
    pub mobile: Media,
    #[serde(default)]
    pub colors: Option<FeatureColors>,
}

fn default_breakpoint() -> f64 {
    1024.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseData {
    pub main_title: String,
    #[serde(default = "default_breakpoint")]
    pub breakpoint: f64,
    pub features: Vec<FeatureSection>,
}

impl ShowcaseData {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub fn is_desktop(width: f64, breakpoint: f64) -> bool {
    width >= breakpoint
}

/// Vertical extent of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemRect {
    pub top: f64,
    pub bottom: f64,
}

impl ItemRect {
    fn center(self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    fn visible_in(self, viewport_height: f64) -> bool {
        self.bottom >= 0.0 && self.top <= viewport_height
    }
}

/// Index of the visible item whose centre is nearest to `anchor_y`.
/// Unmounted (`None`) and off-screen items are skipped; ties go to the
/// earlier item.
pub fn nearest_index(anchor_y: f64, items: &[Option<ItemRect>], viewport_height: f64) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.filter(|r| r.visible_in(viewport_height)).map(|r| (i, r)))
        .fold(None, |best: Option<(usize, f64)>, (i, r)| {
            let dist = (r.center() - anchor_y).abs();
            match best {
                Some((_, d)) if d <= dist => best,
                _ => Some((i, dist)),
            }
        })
        .map(|(i, _)| i)
}

/// How the sticky panel is positioned relative to its wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickyMode {
    Sticky,
    Fixed,
    Bottom,
}

impl StickyMode {
    const TOP_OFFSET: f64 = 20.0;
    const BOTTOM_MARGIN: f64 = 40.0;

    pub fn from_wrapper(wrapper_top: f64, wrapper_bottom: f64, sticky_height: f64) -> Self {
        if wrapper_top > Self::TOP_OFFSET {
            StickyMode::Sticky
        } else if wrapper_bottom > sticky_height + Self::BOTTOM_MARGIN {
            StickyMode::Fixed
        } else {
            StickyMode::Bottom
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            StickyMode::Sticky => "sticky top-10",
            StickyMode::Fixed => "fixed top-10 left-1/2 -translate-x-1/2",
            StickyMode::Bottom => "absolute bottom-10 left-1/2 -translate-x-1/2",
        }
    }
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

/// Which feature the sticky panel shows. Everything it holds is owned by
/// the showcase, and an animation frame may still fire after the showcase
/// is gone, so every access goes through the `try_*` accessors.
#[derive(Clone, Copy)]
struct ActiveTracker {
    observer: NodeRef<html::Div>,
    items: StoredValue<Vec<NodeRef<html::Div>>, LocalStorage>,
    active: RwSignal<usize>,
    frame_queued: StoredValue<bool>,
}

impl ActiveTracker {
    fn new(count: usize, active: RwSignal<usize>) -> Self {
        Self {
            observer: NodeRef::new(),
            items: StoredValue::new_local((0..count).map(|_| NodeRef::new()).collect()),
            active,
            frame_queued: StoredValue::new(false),
        }
    }

    /// Claims the next frame. `false` if one is already queued or the
    /// showcase has been disposed.
    fn begin_frame(self) -> bool {
        self.frame_queued
            .try_update_value(|queued| !std::mem::replace(queued, true))
            .unwrap_or(false)
    }

    fn end_frame(self) {
        self.frame_queued.try_update_value(|queued| *queued = false);
    }

    fn anchor_y(self) -> Option<f64> {
        self.observer.try_get_untracked().flatten().map(|el| {
            let rect = el.get_bounding_client_rect();
            rect.top() + rect.height() / 2.0
        })
    }

    fn item_rects(self) -> Option<Vec<Option<ItemRect>>> {
        self.items.try_with_value(|refs| {
            refs.iter()
                .map(|r| {
                    r.try_get_untracked().flatten().map(|el| {
                        let rect = el.get_bounding_client_rect();
                        ItemRect {
                            top: rect.top(),
                            bottom: rect.bottom(),
                        }
                    })
                })
                .collect()
        })
    }

    fn select(self, index: usize) {
        if self.active.try_get_untracked().is_some_and(|i| i != index) {
            self.active.try_set(index);
        }
    }

    fn refresh(self) {
        let (Some(anchor_y), Some(items)) = (self.anchor_y(), self.item_rects()) else {
            return;
        };
        if let Some(i) = nearest_index(anchor_y, &items, viewport_height()) {
            self.select(i);
        }
    }
}

#[component]
fn ActiveMedia(feature: FeatureSection) -> impl IntoView {
    let media = feature.desktop;
    match media.kind {
        MediaKind::Video => view! {
            <video
                src=media.src
                aria-label=feature.title
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            />
        }
        .into_any(),
        MediaKind::Image => view! {
            <img src=media.src alt=media.alt class="w-full h-full object-fill"/>
        }
        .into_any(),
    }
}

#[component]
pub fn StickyFeatureShowcase(
    #[prop(into)] main_title: String,
    features: Vec<FeatureSection>,
    #[prop(default = default_breakpoint())] breakpoint: f64,
) -> impl IntoView {
    if features.is_empty() {
        return ().into_any();
    }

    let UseWindowSizeReturn { width, .. } = use_window_size();
    let desktop = Memo::new(move |_| is_desktop(width.get(), breakpoint));

    let active = RwSignal::new(0usize);
    let sticky_mode = RwSignal::new(StickyMode::Sticky);

    let wrapper_ref: NodeRef<html::Div> = NodeRef::new();
    let sticky_ref: NodeRef<html::Div> = NodeRef::new();
    let tracker = ActiveTracker::new(features.len(), active);
    let features = StoredValue::new(features);
    let main_title = StoredValue::new(main_title);

    // at most one recomputation per animation frame
    let schedule_update = move || {
        if desktop.try_get_untracked() != Some(true) || !tracker.begin_frame() {
            return;
        }
        request_animation_frame(move || {
            tracker.refresh();
            tracker.end_frame();
        });
    };

    let update_sticky = move || {
        if desktop.try_get_untracked() != Some(true) {
            return;
        }
        let wrapper = wrapper_ref.try_get_untracked().flatten();
        let sticky = sticky_ref.try_get_untracked().flatten();
        if let (Some(wrapper), Some(sticky)) = (wrapper, sticky) {
            let rect = wrapper.get_bounding_client_rect();
            let mode = StickyMode::from_wrapper(rect.top(), rect.bottom(), sticky.offset_height() as f64);
            if sticky_mode.try_get_untracked().is_some_and(|m| m != mode) {
                sticky_mode.try_set(mode);
            }
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        schedule_update();
        update_sticky();
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| schedule_update());

    Effect::new(move |_| {
        if desktop.get() {
            schedule_update();
            update_sticky();
        } else {
            active.set(0);
        }
    });

    let desktop_view = move || {
        let blurbs = features.with_value(|fs| {
            fs.iter()
                .enumerate()
                .map(|(i, f)| {
                    let node_ref = tracker.items.with_value(|refs| refs[i]);
                    view! {
                        <div node_ref=node_ref class="text-white">
                            <h3 class="text-2xl font-bold mb-2">{f.title.clone()}</h3>
                            <p class="text-lg opacity-90">{f.description.clone()}</p>
                        </div>
                    }
                })
                .collect_view()
        });

        view! {
            <div node_ref=wrapper_ref class="relative w-full pt-32 pb-40 max-w-[1400px] mx-auto">
                <div class="relative z-0 w-full max-w-[500px] space-y-50">{blurbs}</div>

                <div class="absolute inset-0 pointer-events-none">
                    <div
                        node_ref=sticky_ref
                        class=move || format!(
                            "pointer-events-auto w-[900px] mx-auto grid grid-cols-2 gap-10 \
                             transition-all duration-0 {}",
                            sticky_mode.get().classes()
                        )
                    >
                        <div class="col-span-2">
                            <div class="bg-[#2D1200] text-white py-4 px-5 rounded-lg text-center mb-6">
                                <h2 class="text-3xl font-bold">{main_title.get_value()}</h2>
                            </div>
                        </div>

                        // anchor the active item is measured against; kept invisible
                        <div node_ref={tracker.observer} class="flex items-start justify-center h-full">
                            <div class="bg-white/10 text-white p-4 rounded-lg invisible">"Observer Target"</div>
                        </div>

                        <div class="w-full aspect-video rounded-lg overflow-hidden">
                            {move || {
                                let feature = features.with_value(|fs| {
                                    fs[active.get().min(fs.len() - 1)].clone()
                                });
                                view! { <ActiveMedia feature/> }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    let mobile_view = move || {
        let cards = features.with_value(|fs| {
            fs.iter()
                .map(|f| {
                    view! {
                        <div class="text-center">
                            <h3 class="text-2xl font-bold text-white mb-3">{f.title.clone()}</h3>
                            <p class="text-lg text-white/90 mb-6">{f.description.clone()}</p>
                            <img
                                src=f.mobile.src.clone()
                                alt=f.mobile.alt.clone()
                                class="w-full rounded-lg object-fill"
                            />
                        </div>
                    }
                })
                .collect_view()
        });

        view! {
            <div class="w-full max-w-3xl mx-auto px-5 py-16">
                <h2 class="text-3xl font-bold text-center text-white mb-14">{main_title.get_value()}</h2>
                <div class="space-y-20">{cards}</div>
            </div>
        }
        .into_any()
    };

    (move || if desktop.get() { desktop_view() } else { mobile_view() }).into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, bottom: f64) -> Option<ItemRect> {
        Some(ItemRect { top, bottom })
    }

    #[test]
    fn desktop_threshold_is_inclusive() {
        assert!(is_desktop(1024.0, 1024.0));
        assert!(!is_desktop(1023.0, 1024.0));
    }

    #[test]
    fn picks_item_nearest_the_anchor() {
        let items = [rect(0.0, 100.0), rect(300.0, 400.0), rect(600.0, 700.0)];
        assert_eq!(nearest_index(380.0, &items, 800.0), Some(1));
        assert_eq!(nearest_index(10.0, &items, 800.0), Some(0));
        assert_eq!(nearest_index(790.0, &items, 800.0), Some(2));
    }

    #[test]
    fn ignores_offscreen_and_unmounted_items() {
        let items = [rect(-500.0, -10.0), None, rect(900.0, 1000.0), rect(500.0, 600.0)];
        assert_eq!(nearest_index(0.0, &items, 800.0), Some(3));
    }

    #[test]
    fn nothing_visible_keeps_previous() {
        let items = [rect(-300.0, -200.0), rect(1200.0, 1300.0), None];
        assert_eq!(nearest_index(400.0, &items, 800.0), None);
        assert_eq!(nearest_index(400.0, &[], 800.0), None);
    }

    #[test]
    fn ties_go_to_the_earlier_item() {
        let items = [rect(0.0, 100.0), rect(200.0, 300.0)];
        assert_eq!(nearest_index(150.0, &items, 800.0), Some(0));
    }

    #[test]
    fn sticky_mode_follows_wrapper() {
        assert_eq!(StickyMode::from_wrapper(120.0, 2000.0, 500.0), StickyMode::Sticky);
        assert_eq!(StickyMode::from_wrapper(20.0, 2000.0, 500.0), StickyMode::Fixed);
        assert_eq!(StickyMode::from_wrapper(-900.0, 541.0, 500.0), StickyMode::Fixed);
        assert_eq!(StickyMode::from_wrapper(-900.0, 540.0, 500.0), StickyMode::Bottom);
    }

    #[test]
    fn parses_showcase_json() {
        let data = ShowcaseData::from_json(
            r#"{
                "main_title": "Teamwork",
                "features": [{
                    "id": "f1",
                    "title": "Plan it",
                    "description": "Track it",
                    "desktop": { "type": "video", "src": "/demos/f1.webm", "alt": "demo" },
                    "mobile": { "type": "image", "src": "/images/f1.jpg", "alt": "shot" }
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(data.breakpoint, 1024.0);
        assert_eq!(data.features[0].desktop.kind, MediaKind::Video);
        assert_eq!(data.features[0].colors, None);
    }

    #[test]
    fn rejects_unknown_media_type() {
        let err = ShowcaseData::from_json(
            r#"{ "main_title": "x", "features": [{
                "id": "f", "title": "t", "description": "d",
                "desktop": { "type": "gif", "src": "a", "alt": "b" },
                "mobile": { "type": "image", "src": "a", "alt": "b" }
            }] }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn one_frame_queued_at_a_time() {
        let owner = Owner::new();
        owner.with(|| {
            let tracker = ActiveTracker::new(2, RwSignal::new(0));
            assert!(tracker.begin_frame());
            assert!(!tracker.begin_frame());
            tracker.end_frame();
            assert!(tracker.begin_frame());
        });
    }

    #[test]
    fn unmounted_items_leave_active_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let active = RwSignal::new(1);
            let tracker = ActiveTracker::new(3, active);
            assert_eq!(tracker.anchor_y(), None);
            assert_eq!(tracker.item_rects(), Some(vec![None, None, None]));
            tracker.refresh();
            assert_eq!(active.get_untracked(), 1);

            tracker.select(2);
            assert_eq!(active.get_untracked(), 2);
        });
    }

    #[test]
    fn frame_after_disposal_is_a_no_op() {
        let owner = Owner::new();
        let tracker = owner.with(|| {
            let tracker = ActiveTracker::new(3, RwSignal::new(0));
            assert!(tracker.begin_frame());
            tracker
        });
        drop(owner);

        // the frame queued above runs after the page navigated away
        tracker.refresh();
        tracker.end_frame();
        tracker.select(1);
        assert!(!tracker.begin_frame());
        assert_eq!(tracker.item_rects(), None);
        assert_eq!(tracker.anchor_y(), None);
        assert_eq!(tracker.active.try_get_untracked(), None);
    }
}
