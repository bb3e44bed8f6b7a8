use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::{error, info};

use crate::config;
use crate::catalog::{filter, CategoryFilter, CategoryOption, FilterCriteria};
use crate::content::downloads::{
    PlatformDownload, PlatformKind, ReleaseChannel, APP_BENEFITS, CURRENT_VERSION, PLATFORMS,
};
use crate::view_state::ViewState;

/// How long each of the "downloading" and "completed" phases stays on screen.
const STATUS_PHASE_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DownloadStatus {
    #[default]
    Idle,
    Downloading,
    Completed,
}

pub enum DownloadAction {
    Begin(&'static str),
    Complete(&'static str),
    Reset(&'static str),
}

/// Per-platform button state. Each platform only moves forward through
/// idle, downloading, completed and back to idle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownloadTracker {
    statuses: HashMap<&'static str, DownloadStatus>,
}

impl DownloadTracker {
    pub fn status(&self, platform: &str) -> DownloadStatus {
        self.statuses.get(platform).copied().unwrap_or_default()
    }

    fn advance(&self, platform: &'static str, from: DownloadStatus, to: DownloadStatus) -> Option<Self> {
        if self.status(platform) != from {
            return None;
        }
        let mut next = self.clone();
        next.statuses.insert(platform, to);
        Some(next)
    }
}

impl Reducible for DownloadTracker {
    type Action = DownloadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            DownloadAction::Begin(platform) => {
                self.advance(platform, DownloadStatus::Idle, DownloadStatus::Downloading)
            }
            DownloadAction::Complete(platform) => {
                self.advance(platform, DownloadStatus::Downloading, DownloadStatus::Completed)
            }
            DownloadAction::Reset(platform) => {
                self.advance(platform, DownloadStatus::Completed, DownloadStatus::Idle)
            }
        };
        next.map(Rc::new).unwrap_or(self)
    }
}

fn open_download_link() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(config::DOWNLOAD_URL, "_blank") {
                error!("Failed to open download link: {:?}", e);
            }
        }
        None => error!("No window to open the download link in"),
    }
}

#[function_component(Download)]
pub fn download() -> Html {
    let channel = use_state(|| ReleaseChannel::Stable);
    let kind_filter = use_state(CategoryFilter::<PlatformKind>::default);
    let hovered = use_state(ViewState::<&'static str>::new);
    let tracker = use_reducer(DownloadTracker::default);

    let start_download = {
        let tracker = tracker.clone();
        let channel = channel.clone();
        Callback::from(move |platform: &'static str| {
            if tracker.status(platform) != DownloadStatus::Idle {
                return;
            }
            info!("Downloading {} build for {}", channel.slug(), platform);
            open_download_link();
            tracker.dispatch(DownloadAction::Begin(platform));

            let dispatcher = tracker.dispatcher();
            Timeout::new(STATUS_PHASE_MS, move || {
                dispatcher.dispatch(DownloadAction::Complete(platform));
                Timeout::new(STATUS_PHASE_MS, move || {
                    dispatcher.dispatch(DownloadAction::Reset(platform));
                })
                .forget();
            })
            .forget();
        })
    };

    let criteria = FilterCriteria::default().with_category(*kind_filter);
    let visible = filter(PLATFORMS, &criteria);

    let kind_chip = |label: &'static str, option: CategoryFilter<PlatformKind>| {
        let onclick = {
            let kind_filter = kind_filter.clone();
            Callback::from(move |_: MouseEvent| kind_filter.set(option))
        };
        html! {
            <button class={classes!("chip", (*kind_filter == option).then(|| "active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <div class="page page-gradient download-page">
            <style>{r#"
                .download-page .tabs {
                    margin-bottom: 1.5rem;
                }
                .channel-note {
                    text-align: center;
                    color: #6b7280;
                    margin-bottom: 2rem;
                }
                .chips {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 3rem;
                }
                .chip {
                    padding: 0.35rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid #c7d2fe;
                    background: transparent;
                    color: #4338ca;
                    cursor: pointer;
                    font-size: 0.85rem;
                }
                .chip.active {
                    background: #e0e7ff;
                }
                .platform-card {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                }
                .platform-card.hovered {
                    transform: translateY(-8px);
                }
                .platform-icon {
                    width: 72px;
                    height: 72px;
                    margin: 0 auto 1rem;
                    border-radius: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.25rem;
                }
                .platform-meta {
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }
                .platform-extra {
                    text-align: left;
                    font-size: 0.85rem;
                    color: #374151;
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                }
                .platform-extra ul {
                    margin: 0.5rem 0 0;
                    padding-left: 1.1rem;
                }
                .platform-card .btn {
                    margin-top: auto;
                }
                .platform-card .btn.completed {
                    background: #16a34a;
                }
                .benefits {
                    margin-top: 5rem;
                }
                .benefit {
                    text-align: center;
                }
                .benefit-icon {
                    font-size: 2.25rem;
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{format!("Version {}", CURRENT_VERSION)}</span>
                    <h1>{"Download Groww Book"}</h1>
                    <p>{"Take your books anywhere with our desktop and mobile apps."}</p>
                </div>

                <div class="tabs">
                    {
                        ReleaseChannel::ALL.iter().map(|&option| {
                            let onclick = {
                                let channel = channel.clone();
                                Callback::from(move |_: MouseEvent| channel.set(option))
                            };
                            html! {
                                <button class={classes!("tab", (*channel == option).then(|| "active"))} {onclick}>
                                    {option.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <p class="channel-note">
                    {
                        match *channel {
                            ReleaseChannel::Stable => "Recommended for everyday use.",
                            ReleaseChannel::Beta => "Try upcoming features early. Beta builds may be less stable.",
                        }
                    }
                </p>

                <div class="chips">
                    { kind_chip("All", CategoryFilter::All) }
                    {
                        PlatformKind::ALL.iter().map(|&kind| {
                            kind_chip(kind.label(), CategoryFilter::Only(kind))
                        }).collect::<Html>()
                    }
                </div>

                <div class="grid grid-4">
                    {
                        visible.into_iter().map(|platform: &'static PlatformDownload| {
                            let name = platform.name;
                            let status = tracker.status(name);
                            let is_hovered = hovered.is_active(&name);
                            let onmouseenter = {
                                let hovered = hovered.clone();
                                Callback::from(move |_: MouseEvent| {
                                    hovered.set((*hovered).clone().activate(name));
                                })
                            };
                            let onmouseleave = {
                                let hovered = hovered.clone();
                                Callback::from(move |_: MouseEvent| {
                                    hovered.set((*hovered).clone().clear());
                                })
                            };
                            let onclick = {
                                let start_download = start_download.clone();
                                Callback::from(move |_: MouseEvent| start_download.emit(name))
                            };
                            let (from, to) = platform.gradient;

                            html! {
                                <div
                                    key={name}
                                    class={classes!("card", "platform-card", is_hovered.then(|| "hovered"))}
                                    {onmouseenter}
                                    {onmouseleave}
                                >
                                    <div
                                        class="platform-icon"
                                        style={format!("background: linear-gradient(135deg, {}, {});", from, to)}
                                    >
                                        {platform.icon}
                                    </div>
                                    <h3>{name}</h3>
                                    <div class="platform-meta">
                                        {format!("v{} · {}", platform.version, platform.size)}
                                    </div>
                                    if is_hovered {
                                        <div class="platform-extra">
                                            <strong>{"Requirements: "}</strong>{platform.requirements}
                                            <ul>
                                                {
                                                    platform.features.iter().map(|feature| html! {
                                                        <li>{*feature}</li>
                                                    }).collect::<Html>()
                                                }
                                            </ul>
                                        </div>
                                    }
                                    <button
                                        class={classes!(
                                            "btn",
                                            "btn-primary",
                                            "btn-block",
                                            (status == DownloadStatus::Completed).then(|| "completed"),
                                        )}
                                        disabled={status == DownloadStatus::Downloading}
                                        {onclick}
                                    >
                                        {
                                            match status {
                                                DownloadStatus::Idle => html! { {"Download"} },
                                                DownloadStatus::Downloading => html! {
                                                    <>
                                                        <span class="spinner"></span>
                                                        {"Downloading..."}
                                                    </>
                                                },
                                                DownloadStatus::Completed => html! { {"✓ Downloaded"} },
                                            }
                                        }
                                    </button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="benefits grid grid-3">
                    {
                        APP_BENEFITS.iter().map(|benefit| html! {
                            <div class="card benefit">
                                <div class="benefit-icon">{benefit.icon}</div>
                                <h3>{benefit.title}</h3>
                                <p>{benefit.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(tracker: DownloadTracker, action: DownloadAction) -> DownloadTracker {
        (*Rc::new(tracker).reduce(action)).clone()
    }

    #[test]
    fn full_download_cycle() {
        let tracker = apply(DownloadTracker::default(), DownloadAction::Begin("Windows"));
        assert_eq!(tracker.status("Windows"), DownloadStatus::Downloading);
        assert_eq!(tracker.status("Linux"), DownloadStatus::Idle);

        let tracker = apply(tracker, DownloadAction::Complete("Windows"));
        assert_eq!(tracker.status("Windows"), DownloadStatus::Completed);

        let tracker = apply(tracker, DownloadAction::Reset("Windows"));
        assert_eq!(tracker.status("Windows"), DownloadStatus::Idle);
    }

    #[test]
    fn begin_is_ignored_while_downloading() {
        let tracker = apply(DownloadTracker::default(), DownloadAction::Begin("macOS"));
        let again = apply(tracker.clone(), DownloadAction::Begin("macOS"));
        assert_eq!(again, tracker);
    }

    #[test]
    fn out_of_order_steps_are_ignored() {
        let tracker = apply(DownloadTracker::default(), DownloadAction::Complete("Mobile"));
        assert_eq!(tracker.status("Mobile"), DownloadStatus::Idle);
        let tracker = apply(tracker, DownloadAction::Reset("Mobile"));
        assert_eq!(tracker, DownloadTracker::default());
    }

    #[test]
    fn platforms_are_tracked_independently() {
        let tracker = apply(DownloadTracker::default(), DownloadAction::Begin("Windows"));
        let tracker = apply(tracker, DownloadAction::Begin("Linux"));
        let tracker = apply(tracker, DownloadAction::Complete("Linux"));
        assert_eq!(tracker.status("Windows"), DownloadStatus::Downloading);
        assert_eq!(tracker.status("Linux"), DownloadStatus::Completed);
    }
}
