use leptos::prelude::*;
use leptos_icons::*;
use utils::file::{FilePayload, FileReadError};
use utils::read_guard::ReadGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    fn accept(self) -> &'static str {
        match self {
            MediaKind::Image => "image/*",
            MediaKind::Video => "video/*",
        }
    }
}

/// One upload slot: a picker while empty, a preview with a remove button
/// once filled.
///
/// Reads are async. A newer selection, or removal, makes any read still in
/// flight drop its result.
#[component]
pub fn MediaSlot(
    kind: MediaKind,
    #[prop(into)] label: String,
    #[prop(into)] preview: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<FilePayload>,
    #[prop(into)] on_remove: Callback<()>,
    #[prop(into)] on_error: Callback<FileReadError>,
    #[prop(optional)] icon: Option<icondata::Icon>,
) -> impl IntoView {
    let guard = StoredValue::new(ReadGuard::default());
    let icon = icon.unwrap_or(match kind {
        MediaKind::Image => icondata::AiPictureOutlined,
        MediaKind::Video => icondata::AiPlayCircleOutlined,
    });

    let handle_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use leptos::task::spawn_local;
            use utils::file::read_file_payload;
            use web_sys::HtmlInputElement;

            let input = event_target::<HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Lets the same file be picked again after removal.
            input.set_value("");

            let Some(ticket) = guard.try_update_value(|g| g.begin()) else {
                return;
            };
            spawn_local(async move {
                let res = read_file_payload(file).await;
                if !guard
                    .try_with_value(|g| g.is_current(ticket))
                    .unwrap_or(false)
                {
                    return;
                }
                match res {
                    Ok(payload) => on_select.run(payload),
                    Err(e) => {
                        leptos::logging::error!("failed to read selected file: {e}");
                        on_error.run(e);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            _ = ev;
        }
    };

    let remove = move |_| {
        guard.update_value(|g| g.invalidate());
        on_remove.run(());
    };

    let alt = StoredValue::new(label.clone());
    view! {
        <div class="flex flex-col gap-2 w-full">
            <span class="text-xs font-medium text-neutral-400">{label}</span>
            <Show
                when=move || preview.with(|p| p.is_some())
                fallback=move || {
                    view! {
                        <label class="relative flex flex-col items-center justify-center gap-2 h-28 bg-neutral-900 border border-dashed border-neutral-700 rounded-lg hover:bg-neutral-800 transition-colors cursor-pointer">
                            <input
                                type="file"
                                accept=kind.accept()
                                on:change=handle_change
                                class="absolute inset-0 w-full h-full opacity-0 cursor-pointer"
                            />
                            <Icon icon=icon attr:class="text-2xl text-neutral-500" />
                            <span class="text-xs text-neutral-500">"Click to upload"</span>
                        </label>
                    }
                }
            >
                <div class="relative h-28 bg-black rounded-lg overflow-hidden">
                    {move || {
                        let src = preview.get().unwrap_or_default();
                        match kind {
                            MediaKind::Image => {
                                view! {
                                    <img src=src class="w-full h-full object-cover" alt=alt.get_value() />
                                }
                                    .into_any()
                            }
                            MediaKind::Video => {
                                view! {
                                    <video src=src class="w-full h-full object-cover" muted playsinline></video>
                                }
                                    .into_any()
                            }
                        }
                    }}
                    <button
                        type="button"
                        aria-label="Remove"
                        on:click=remove
                        class="absolute top-1 right-1 p-1 text-white bg-black/70 rounded-full hover:bg-black"
                    >
                        <Icon icon=icondata::IoClose />
                    </button>
                </div>
            </Show>
        </div>
    }
}
