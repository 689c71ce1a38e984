use consts::{BRAND_ADDRESS, BRAND_NAME, TRACKING_NUMBER_EXAMPLE};
use leptos::ev::SubmitEvent;
use leptos::html::Textarea;
use leptos::prelude::*;
use leptos_icons::*;

use super::media_uploads::MediaUploads;
use super::mode_selector::ModeSelector;
use super::settings_panel::SettingsPanel;
use crate::visualize::gate::SubmissionGate;
use crate::visualize::types::{GenerationRequest, Mode};

/// Composes a [`GenerationRequest`] and hands it to `on_generate` once the
/// submission gate lets it through.
///
/// The form owns its working copy. `seed` only flows in: any change to it
/// replaces the working copy wholesale.
#[component]
pub fn PromptForm(
    #[prop(into)] seed: Signal<Option<GenerationRequest>>,
    #[prop(into)] on_generate: Callback<GenerationRequest>,
    #[prop(into, optional)] error: Signal<Option<String>>,
) -> impl IntoView {
    let draft = RwSignal::new({
        let mut initial = GenerationRequest::default();
        initial.reseed(seed.get_untracked().as_ref());
        initial
    });
    let read_notice = RwSignal::new(false);
    let show_settings = RwSignal::new(false);

    Effect::watch(
        move || seed.get(),
        move |seed, _, _| {
            draft.update(|d| d.reseed(seed.as_ref()));
            read_notice.set(false);
        },
        false,
    );

    let mode = Memo::new(move |_| draft.with(|d| d.mode()));
    let prompt = Memo::new(move |_| draft.with(|d| d.prompt.clone()));
    let gate = Memo::new(move |_| draft.with(SubmissionGate::evaluate));

    let textarea = NodeRef::<Textarea>::new();
    Effect::new(move |_| {
        prompt.track();
        #[cfg(feature = "hydrate")]
        if let Some(textarea) = textarea.get() {
            utils::web::fit_textarea_to_content(&textarea);
        }
    });

    let select_mode = move |mode: Mode| {
        read_notice.set(false);
        draft.update(|d| d.select_mode(mode));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(|d| d.submission()) {
            Some(request) => on_generate.run(request),
            None => leptos::logging::warn!(
                "submit blocked: {}",
                gate.get_untracked().reason
            ),
        }
    };

    view! {
        <div class="relative w-full">
            <Show when=move || error.with(|e| e.is_some())>
                <div role="alert" class="mb-4 p-3 bg-red-900/20 border border-red-500/30 rounded-lg text-sm text-red-400">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || show_settings.get()>
                <SettingsPanel draft />
            </Show>
            <form on:submit=on_submit class="w-full">
                <div class="relative mb-3">
                    <label
                        for="tracking-number"
                        class="block mb-1.5 text-xs font-medium text-neutral-400"
                    >
                        "Shipment Tracking Number (Optional)"
                    </label>
                    <div class="relative">
                        <div class="absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none">
                            <Icon icon=icondata::LuTicket attr:class="text-lg text-neutral-500" />
                        </div>
                        <input
                            id="tracking-number"
                            type="text"
                            placeholder=format!("e.g., {TRACKING_NUMBER_EXAMPLE}")
                            class="w-full pl-10 pr-4 py-2.5 bg-neutral-900 border border-neutral-700 rounded-lg text-white focus:outline-none focus:border-sky-500"
                            prop:value=move || draft.with(|d| d.tracking_number.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.tracking_number = value);
                            }
                        />
                    </div>
                </div>

                <MediaUploads draft read_notice />

                <div class="flex items-end gap-2 p-2 bg-neutral-900 border border-neutral-700 rounded-2xl shadow-lg focus-within:ring-2 focus-within:ring-sky-500">
                    <ModeSelector mode on_select=select_mode />
                    <textarea
                        node_ref=textarea
                        rows=1
                        placeholder=move || mode.get().placeholder()
                        class="flex-grow py-2 max-h-48 bg-transparent text-base text-white placeholder:text-neutral-500 resize-none focus:outline-none"
                        prop:value=move || prompt.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.prompt = value);
                        }
                    ></textarea>
                    <button
                        type="button"
                        aria-label="Toggle settings"
                        on:click=move |_| show_settings.update(|s| *s = !*s)
                        class=move || {
                            if show_settings.get() {
                                "p-2.5 rounded-full bg-neutral-700 text-white"
                            } else {
                                "p-2.5 rounded-full text-neutral-300 hover:bg-neutral-800"
                            }
                        }
                    >
                        <Icon icon=icondata::LuSlidersHorizontal attr:class="text-lg" />
                    </button>
                    <div class="relative group">
                        <button
                            type="submit"
                            aria-label="Generate video"
                            disabled=move || gate.get().is_disabled
                            class="p-2.5 rounded-full bg-sky-600 hover:bg-sky-500 disabled:bg-neutral-700 disabled:cursor-not-allowed"
                        >
                            <Icon icon=icondata::AiRightOutlined attr:class="text-lg text-white" />
                        </button>
                        <Show when=move || gate.get().is_disabled>
                            <div
                                role="tooltip"
                                class="absolute bottom-full right-0 mb-2 w-max max-w-xs px-3 py-1.5 bg-neutral-950 border border-neutral-700 text-sm text-white rounded-lg shadow-lg opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none z-10"
                            >
                                {move || gate.get().reason}
                            </div>
                        </Show>
                    </div>
                </div>

                <p class="mt-2 px-4 text-xs text-center text-neutral-500">
                    {format!("{BRAND_NAME} \u{2014} {BRAND_ADDRESS}")}
                    <br />
                    "Shipment visualization is a premium feature for registered partners."
                </p>
            </form>
        </div>
    }
}
