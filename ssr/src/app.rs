use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use page::not_found::NotFound;
use page::visualize::ShipmentVisualizerPage;
use state::partner_gate::PartnerGate;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-neutral-950">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    PartnerGate::init();

    view! {
        <Stylesheet id="leptos" href="/pkg/shipment-visualizer.css" />
        <Meta
            name="description"
            content="Preview your shipment's journey as an AI generated visualization."
        />
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ShipmentVisualizerPage />
                </Routes>
            </main>
        </Router>
    }
}
