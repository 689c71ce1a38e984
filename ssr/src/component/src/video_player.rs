use leptos::html::Video;
use leptos::prelude::*;

#[component]
pub fn VideoPlayer(
    #[prop(optional)] node_ref: NodeRef<Video>,
    #[prop(into)] video_url: Signal<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <video
            node_ref=node_ref
            class=format!("w-full h-full object-contain bg-black {class}")
            src=move || video_url.get()
            controls
            autoplay
            loop
            playsinline
            disablepictureinpicture
            preload="auto"
        ></video>
    }
}
