use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_use::on_click_outside;

use crate::visualize::types::Mode;

/// Mounted only while the menu is open, so the document listener lives
/// exactly as long as the menu does.
#[component]
fn CloseOnClickOutside(target: NodeRef<Div>, #[prop(into)] on_outside: Callback<()>) -> impl IntoView {
    let _ = on_click_outside(target, move |_| on_outside.run(()));
}

#[component]
pub fn ModeSelector(
    #[prop(into)] mode: Signal<Mode>,
    #[prop(into)] on_select: Callback<Mode>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let container = NodeRef::<Div>::new();

    view! {
        <div class="relative shrink-0" node_ref=container>
            <button
                type="button"
                aria-label="Select generation mode"
                on:click=move |_| open.update(|o| *o = !*o)
                class="flex items-center gap-2 px-3 py-2.5 rounded-lg text-neutral-300 hover:text-white hover:bg-neutral-800 transition-colors"
            >
                <Icon icon=Signal::derive(move || mode.get().icon()) attr:class="text-lg" />
                <span class="text-sm font-medium whitespace-nowrap">
                    {move || mode.get().display_name()}
                </span>
            </button>
            <Show when=move || open.get()>
                <CloseOnClickOutside target=container on_outside=move |_: ()| open.set(false) />
                <div class="absolute bottom-full mb-2 w-60 bg-neutral-900 border border-neutral-700 rounded-lg shadow-xl overflow-hidden z-10">
                    {Mode::SELECTABLE
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        open.set(false);
                                        on_select.run(option);
                                    }
                                    class=move || {
                                        if mode.get() == option {
                                            "w-full text-left flex items-center gap-3 p-3 bg-sky-900/40 text-white"
                                        } else {
                                            "w-full text-left flex items-center gap-3 p-3 text-neutral-300 hover:bg-sky-900/30"
                                        }
                                    }
                                >
                                    <Icon icon=option.icon() />
                                    <span>{option.display_name()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
