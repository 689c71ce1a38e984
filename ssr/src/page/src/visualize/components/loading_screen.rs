use consts::{limits::LOADING_MESSAGE_INTERVAL, loading_message};
use leptos::prelude::*;
use leptos_icons::*;
use leptos_use::{use_interval, UseIntervalReturn};

#[component]
pub fn VisualizationLoadingScreen() -> impl IntoView {
    let UseIntervalReturn { counter, .. } =
        use_interval(LOADING_MESSAGE_INTERVAL.as_millis() as u64);
    let message = move || loading_message(counter.get());

    view! {
        <div class="flex flex-col items-center justify-center gap-8 py-16 px-4 w-full">
            <div class="relative w-32 h-32">
                <div class="absolute inset-0 rounded-full border-4 border-neutral-800"></div>
                <svg class="absolute inset-0 w-full h-full -rotate-90 animate-spin" viewBox="0 0 128 128">
                    <circle
                        cx="64"
                        cy="64"
                        r="60"
                        fill="none"
                        stroke="url(#route-gradient)"
                        stroke-width="4"
                        stroke-linecap="round"
                        stroke-dasharray="377"
                        stroke-dashoffset="94.25"
                    />
                    <defs>
                        <linearGradient id="route-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#38BDF8" />
                            <stop offset="50%" stop-color="#0EA5E9" />
                            <stop offset="100%" stop-color="#0C4A6E" />
                        </linearGradient>
                    </defs>
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <Icon icon=icondata::LuPackage attr:class="text-white text-4xl" />
                </div>
            </div>

            <div class="text-center">
                <h2 class="text-2xl font-bold text-white mb-3">"Visualizing Your Shipment"</h2>
                <p class="text-sm text-neutral-400 min-h-5 transition-opacity">{message}</p>
            </div>

            <div class="flex items-center gap-2">
                <div class="w-2 h-2 bg-sky-500 rounded-full animate-bounce" style="animation-delay: 0ms"></div>
                <div class="w-2 h-2 bg-sky-500 rounded-full animate-bounce" style="animation-delay: 150ms"></div>
                <div class="w-2 h-2 bg-sky-500 rounded-full animate-bounce" style="animation-delay: 300ms"></div>
            </div>
        </div>
    }
}
