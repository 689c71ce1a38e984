use component::video_player::VideoPlayer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use utils::web::copy_to_clipboard;

use crate::visualize::copy_feedback::CopyFeedback;
use crate::visualize::types::{AspectRatio, GeneratedVisualization};

#[component]
fn TrackingNumber(tracking_number: String) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::new(tracking_number.clone()));
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |ticket: u64| {
            feedback.update(|f| {
                f.expire(ticket);
            })
        },
        CopyFeedback::RESET_AFTER.as_millis() as f64,
    );

    let on_copy = move |_| {
        let start = start.clone();
        let text = feedback.with_untracked(|f| f.clipboard_text().to_string());
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    if let Some(ticket) = feedback.try_update(|f| f.confirm()) {
                        start(ticket);
                    }
                }
                Err(e) => leptos::logging::error!("failed to copy tracking number: {e}"),
            }
        });
    };

    view! {
        <div class="flex items-center justify-center gap-2 text-sm">
            <span class="text-neutral-400">"Tracking:"</span>
            <span class="font-mono text-white">{tracking_number}</span>
            <button
                type="button"
                aria-label="Copy tracking number"
                on:click=on_copy
                class="p-1 rounded text-neutral-400 hover:text-white hover:bg-neutral-800 transition-colors"
            >
                <Show
                    when=move || feedback.with(|f| f.is_confirmed())
                    fallback=|| view! { <Icon icon=icondata::IoCopyOutline /> }
                >
                    <Icon icon=icondata::AiCheckOutlined attr:class="text-green-400" />
                </Show>
            </button>
        </div>
    }
}

#[component]
pub fn VisualizationResultScreen(
    result: GeneratedVisualization,
    aspect_ratio: AspectRatio,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_extend: Callback<()>,
    #[prop(into)] on_new: Callback<()>,
) -> impl IntoView {
    let frame_class = match aspect_ratio {
        AspectRatio::Landscape => "aspect-video w-full",
        AspectRatio::Portrait => "aspect-[9/16] h-[70vh] mx-auto",
    };
    let can_extend = result.can_extend();

    view! {
        <div class="flex flex-col items-center gap-6 w-full max-w-3xl mx-auto px-4 py-8">
            <h2 class="text-2xl font-bold text-white text-center">
                "Your Shipment Journey is Ready!"
            </h2>

            <div class=format!("rounded-lg overflow-hidden bg-black shadow-lg {frame_class}")>
                <VideoPlayer video_url=result.video_url.clone() />
            </div>

            {result
                .tracking_number
                .clone()
                .map(|tracking_number| view! { <TrackingNumber tracking_number /> })}

            <div class="flex flex-wrap items-center justify-center gap-3">
                <button
                    type="button"
                    on:click=move |_| on_retry.run(())
                    class="flex items-center gap-2 px-5 py-2.5 rounded-lg border border-neutral-600 text-white font-semibold hover:border-neutral-400 transition-colors"
                >
                    <Icon icon=icondata::AiReloadOutlined attr:class="text-lg" />
                    "Recalculate"
                </button>
                <Show when=move || can_extend>
                    <button
                        type="button"
                        on:click=move |_| on_extend.run(())
                        class="flex items-center gap-2 px-5 py-2.5 rounded-lg border border-sky-600 text-sky-300 font-semibold hover:bg-sky-900/40 transition-colors"
                    >
                        <Icon icon=icondata::AiPlusOutlined attr:class="text-lg" />
                        "Add Stop"
                    </button>
                </Show>
                <button
                    type="button"
                    on:click=move |_| on_new.run(())
                    class="flex items-center gap-2 px-5 py-2.5 rounded-lg bg-sky-600 text-white font-semibold hover:bg-sky-500 transition-colors"
                >
                    <Icon icon=icondata::LuPackage attr:class="text-lg" />
                    "New Shipment"
                </button>
            </div>
        </div>
    }
}
