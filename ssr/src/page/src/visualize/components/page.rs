use consts::BRAND_NAME;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_meta::Title;
use state::partner_gate::PartnerGate;

use super::{PartnerGateDialog, PromptForm, VisualizationLoadingScreen, VisualizationResultScreen};
use crate::visualize::server::generate_visualization;
use crate::visualize::types::{GeneratedVisualization, GenerationRequest};

fn error_message(e: ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(msg) => msg,
        other => other.to_string(),
    }
}

#[component]
pub fn ShipmentVisualizerPage() -> impl IntoView {
    let partner_gate = PartnerGate::get();
    let acknowledged = partner_gate.acknowledged();

    // Seed handed to the composer, and the request behind the current result.
    let seed = RwSignal::new(None::<GenerationRequest>);
    let last_request = RwSignal::new(None::<GenerationRequest>);
    let show_form = RwSignal::new(true);

    let generate_action: Action<GenerationRequest, Result<GeneratedVisualization, String>> =
        Action::new_unsync(move |request: &GenerationRequest| {
            let request = request.clone();
            async move {
                let result = generate_visualization(request).await.map_err(error_message);
                match &result {
                    Ok(_) => show_form.set(false),
                    Err(e) => {
                        leptos::logging::error!("visualization failed: {e}");
                        show_form.set(true);
                    }
                }
                result
            }
        });

    let generation_error = Signal::derive(move || {
        generate_action
            .value()
            .get()
            .and_then(|result| result.err())
    });

    let on_generate = move |request: GenerationRequest| {
        last_request.set(Some(request.clone()));
        seed.set(Some(request.clone()));
        generate_action.dispatch(request);
    };

    let on_retry = move |_: ()| match last_request.get_untracked() {
        Some(request) => {
            leptos::logging::log!("recalculating last shipment");
            generate_action.dispatch(request);
        }
        None => show_form.set(true),
    };

    let on_extend = move |_: ()| {
        let next = generate_action.value().with_untracked(|value| match value {
            Some(Ok(result)) => {
                last_request.with_untracked(|last| GenerationRequest::extend_from(last.as_ref(), result))
            }
            _ => None,
        });
        if let Some(next) = next {
            seed.set(Some(next));
            show_form.set(true);
        }
    };

    let on_new = move |_: ()| {
        seed.set(None);
        last_request.set(None);
        show_form.set(true);
    };

    view! {
        <Title text=format!("Shipment Visualizer | {BRAND_NAME}") />
        <PartnerGateDialog
            show=Signal::derive(move || !acknowledged.get())
            on_continue=move |_: ()| partner_gate.acknowledge()
        />
        <div class="flex flex-col min-h-dvh bg-neutral-950 text-white">
            <header class="flex items-center justify-center gap-3 px-4 pt-10 pb-6">
                <Icon icon=icondata::LuPackage attr:class="text-3xl text-sky-400" />
                <h1 class="text-2xl md:text-3xl font-bold tracking-tight">{BRAND_NAME}</h1>
            </header>
            <section class="flex-1 flex flex-col items-center justify-center w-full px-4 pb-8">
                <Show
                    when=move || generate_action.pending().get()
                    fallback=move || {
                        view! {
                            <Show
                                when=move || {
                                    !show_form.get()
                                        && generate_action
                                            .value()
                                            .with(|value| matches!(value, Some(Ok(_))))
                                }
                                fallback=move || {
                                    view! {
                                        <div class="w-full max-w-3xl mt-auto">
                                            <PromptForm seed on_generate error=generation_error />
                                        </div>
                                    }
                                }
                            >
                                {move || {
                                    generate_action
                                        .value()
                                        .get()
                                        .and_then(|result| result.ok())
                                        .map(|result| {
                                            let aspect_ratio = last_request
                                                .with_untracked(|r| {
                                                    r.as_ref().map(|r| r.aspect_ratio).unwrap_or_default()
                                                });
                                            view! {
                                                <VisualizationResultScreen
                                                    result
                                                    aspect_ratio
                                                    on_retry
                                                    on_extend
                                                    on_new
                                                />
                                            }
                                        })
                                }}
                            </Show>
                        }
                    }
                >
                    <VisualizationLoadingScreen />
                </Show>
            </section>
        </div>
    }
}
