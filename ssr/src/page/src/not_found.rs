use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center gap-4 min-h-dvh bg-neutral-950 text-white">
            <h1 class="text-3xl font-bold">"404"</h1>
            <p class="text-neutral-400">"This route does not lead anywhere."</p>
            <a href="/" class="px-5 py-2.5 rounded-lg bg-sky-600 font-semibold hover:bg-sky-500">
                "Back to shipments"
            </a>
        </div>
    }
}
