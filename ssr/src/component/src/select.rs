use leptos::prelude::*;

/// A native `<select>` over a fixed set of string options.
#[component]
pub fn LabeledSelect(
    #[prop(into)] label: String,
    options: Vec<&'static str>,
    #[prop(into)] selected: Signal<&'static str>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-xs font-medium text-neutral-400">
            {label}
            <select
                class="w-full p-2 bg-neutral-800 border border-neutral-700 rounded-lg text-sm text-white focus:outline-none focus:border-sky-500 disabled:opacity-50 disabled:cursor-not-allowed"
                prop:value=move || selected.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option selected=move || selected.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
