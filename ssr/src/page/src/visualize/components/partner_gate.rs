use component::modal::Modal;
use leptos::prelude::*;
use leptos_icons::*;

#[component]
pub fn PartnerGateDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal show>
            <div class="flex items-center justify-center w-14 h-14 rounded-full bg-sky-900/50">
                <Icon icon=icondata::LuKeyRound attr:class="text-3xl text-sky-300" />
            </div>
            <h2 class="text-xl font-bold text-white text-center">"Partner Account Required"</h2>
            <p class="text-sm text-neutral-300 text-center">
                "This advanced shipment visualization is a premium feature for our business partners. Please select an API key associated with your partner account to proceed."
            </p>
            <button
                type="button"
                on:click=move |_| on_continue.run(())
                class="w-full h-11 rounded-lg bg-sky-600 text-white font-semibold hover:bg-sky-500 transition-colors"
            >
                "Continue with Partner Key"
            </button>
        </Modal>
    }
}
