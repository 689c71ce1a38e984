use leptos::portal::Portal;
use leptos::prelude::*;

/// Full-viewport overlay without a close affordance. Whatever is rendered
/// inside owns the only way out.
#[component]
pub fn Modal(#[prop(into)] show: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <Show when=move || show.get()>
            <Portal>
                <div
                    role="dialog"
                    aria-modal="true"
                    class="flex fixed inset-0 bg-black/70 z-[999] justify-center items-center backdrop-blur-sm"
                >
                    <div class="mx-4 p-6 w-full max-w-md flex flex-col items-center gap-4 bg-neutral-900 border border-neutral-700 rounded-xl shadow-2xl">
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </Portal>
        </Show>
    }
}
