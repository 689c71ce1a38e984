use component::select::LabeledSelect;
use leptos::prelude::*;

use crate::visualize::display::{OptionLabel, HD_EXTENSION_WARNING};
use crate::visualize::types::{AspectRatio, GenerationRequest, ModelTier, Resolution};

#[component]
pub fn SettingsPanel(draft: RwSignal<GenerationRequest>) -> impl IntoView {
    let locks = Memo::new(move |_| draft.with(|d| d.option_locks()));
    let tier = Memo::new(move |_| draft.with(|d| d.model_tier));
    let aspect_ratio = Memo::new(move |_| draft.with(|d| d.aspect_ratio));
    let resolution = Memo::new(move |_| draft.with(|d| d.resolution));

    view! {
        <div class="absolute bottom-full left-0 right-0 mb-3 p-4 bg-neutral-900 border border-neutral-700 rounded-xl shadow-2xl z-20">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <LabeledSelect
                    label="Freight Type"
                    options=ModelTier::labels()
                    selected=Signal::derive(move || tier.get().label())
                    disabled=Signal::derive(move || locks.get().model_tier)
                    on_change=move |label: String| {
                        if let Some(tier) = ModelTier::from_label(&label) {
                            draft.update(|d| {
                                d.set_model_tier(tier);
                            });
                        }
                    }
                />
                <LabeledSelect
                    label="Viewpoint"
                    options=AspectRatio::labels()
                    selected=Signal::derive(move || aspect_ratio.get().label())
                    disabled=Signal::derive(move || locks.get().aspect_ratio)
                    on_change=move |label: String| {
                        if let Some(aspect_ratio) = AspectRatio::from_label(&label) {
                            draft.update(|d| {
                                d.set_aspect_ratio(aspect_ratio);
                            });
                        }
                    }
                />
                <div>
                    <LabeledSelect
                        label="Quality"
                        options=Resolution::labels()
                        selected=Signal::derive(move || resolution.get().label())
                        disabled=Signal::derive(move || locks.get().resolution)
                        on_change=move |label: String| {
                            if let Some(resolution) = Resolution::from_label(&label) {
                                draft.update(|d| {
                                    d.set_resolution(resolution);
                                });
                            }
                        }
                    />
                    <Show when=move || !resolution.get().is_extendable()>
                        <p class="text-xs text-yellow-400/80 mt-2">{HD_EXTENSION_WARNING}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
