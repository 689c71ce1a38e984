use component::media_slot::{MediaKind, MediaSlot};
use leptos::prelude::*;
use leptos_icons::*;
use utils::file::{FilePayload, FileReadError};

use crate::visualize::composer::ComposerError;
use crate::visualize::display::FILE_READ_NOTICE;
use crate::visualize::types::{GenerationRequest, MediaAttachment, Mode, VideoHandle};

fn attach(
    draft: RwSignal<GenerationRequest>,
    read_notice: RwSignal<bool>,
    apply: fn(&mut GenerationRequest, MediaAttachment) -> Result<(), ComposerError>,
) -> Callback<FilePayload> {
    Callback::new(move |payload: FilePayload| {
        read_notice.set(false);
        let attachment = MediaAttachment::new(payload);
        draft.update(|d| {
            if let Err(e) = apply(d, attachment) {
                leptos::logging::warn!("dropped selected file: {e}");
            }
        });
    })
}

#[component]
fn MultiStopUploads(
    draft: RwSignal<GenerationRequest>,
    read_notice: RwSignal<bool>,
    on_error: Callback<FileReadError>,
) -> impl IntoView {
    let origin = Memo::new(move |_| draft.with(|d| d.start_image().map(|a| a.preview_url())));
    let destination = Memo::new(move |_| draft.with(|d| d.end_image().map(|a| a.preview_url())));
    let round_trip_available = Memo::new(move |_| draft.with(|d| d.round_trip_available()));

    view! {
        <div class="flex flex-col items-center gap-4">
            <div class="flex items-center justify-center gap-4 w-full">
                <MediaSlot
                    kind=MediaKind::Image
                    label="Origin"
                    preview=origin
                    on_select=attach(draft, read_notice, GenerationRequest::set_origin)
                    on_remove=move |_: ()| draft.update(|d| d.clear_origin())
                    on_error
                />
                <Icon icon=icondata::AiRightOutlined attr:class="text-2xl text-neutral-500 shrink-0" />
                <MediaSlot
                    kind=MediaKind::Image
                    label="Destination"
                    preview=destination
                    on_select=attach(draft, read_notice, GenerationRequest::set_destination)
                    on_remove=move |_: ()| draft.update(|d| d.clear_destination())
                    on_error
                />
            </div>
            <Show when=move || round_trip_available.get()>
                <label class="flex items-center gap-2 text-sm font-medium text-neutral-300 cursor-pointer">
                    <input
                        type="checkbox"
                        class="w-4 h-4 rounded cursor-pointer"
                        prop:checked=move || draft.with(|d| d.loop_enabled())
                        on:change=move |ev| {
                            let enabled = event_target_checked(&ev);
                            draft.update(|d| {
                                d.set_round_trip(enabled);
                            });
                        }
                    />
                    "Plan a round trip"
                </label>
            </Show>
        </div>
    }
}

#[component]
fn SpecialHandlingUploads(
    draft: RwSignal<GenerationRequest>,
    read_notice: RwSignal<bool>,
    on_error: Callback<FileReadError>,
) -> impl IntoView {
    let items = Memo::new(move |_| draft.with(|d| d.reference_images().to_vec()));
    let can_add = Memo::new(move |_| draft.with(|d| d.can_add_reference()));

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-2 w-full">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    view! {
                        <MediaSlot
                            kind=MediaKind::Image
                            label=item.file_name().to_string()
                            preview=Some(item.preview_url())
                            on_select=|_: FilePayload| {}
                            on_remove=move |_: ()| {
                                draft.update(|d| {
                                    let index = d.reference_images().iter().position(|i| i.id == id);
                                    if let Some(index) = index {
                                        d.remove_reference(index);
                                    }
                                })
                            }
                            on_error
                        />
                    }
                }
            />
            <Show when=move || can_add.get()>
                <MediaSlot
                    kind=MediaKind::Image
                    label="Add Item Photo"
                    preview={None::<String>}
                    on_select=attach(draft, read_notice, GenerationRequest::add_reference)
                    on_remove=|_: ()| {}
                    on_error
                    icon=icondata::AiPlusOutlined
                />
            </Show>
        </div>
    }
}

#[component]
fn AddStopUpload(
    draft: RwSignal<GenerationRequest>,
    read_notice: RwSignal<bool>,
    on_error: Callback<FileReadError>,
) -> impl IntoView {
    // A journey carried over from a result has a handle but no local file.
    let preview = Memo::new(move |_| {
        draft.with(|d| match (d.input_video(), d.input_video_handle()) {
            (Some(video), _) => Some(video.preview_url()),
            (None, Some(VideoHandle::Generated { uri })) => Some(uri.clone()),
            _ => None,
        })
    });

    view! {
        <div class="flex justify-center w-full max-w-xs mx-auto">
            <MediaSlot
                kind=MediaKind::Video
                label="Previous Journey (must be SQ generated)"
                preview
                on_select=attach(draft, read_notice, GenerationRequest::set_input_video)
                on_remove=move |_: ()| draft.update(|d| d.clear_input_video())
                on_error
            />
        </div>
    }
}

/// Attachment slots for the active mode, plus the notice shown after a
/// failed read.
#[component]
pub fn MediaUploads(
    draft: RwSignal<GenerationRequest>,
    read_notice: RwSignal<bool>,
) -> impl IntoView {
    let mode = Memo::new(move |_| draft.with(|d| d.mode()));
    let on_error = Callback::new(move |_: FileReadError| read_notice.set(true));

    let slots = move || match mode.get() {
        Mode::Standard => None,
        Mode::MultiStop => Some(
            view! { <MultiStopUploads draft read_notice on_error /> }.into_any(),
        ),
        Mode::SpecialHandling => Some(
            view! { <SpecialHandlingUploads draft read_notice on_error /> }.into_any(),
        ),
        Mode::AddStop => Some(view! { <AddStopUpload draft read_notice on_error /> }.into_any()),
    };

    view! {
        <Show when=move || mode.get() != Mode::Standard>
            <div class="mb-3 p-4 bg-neutral-900 border border-neutral-700 rounded-xl">
                {slots}
                <Show when=move || read_notice.get()>
                    <p role="alert" class="mt-3 text-xs text-center text-red-400">
                        {FILE_READ_NOTICE}
                    </p>
                </Show>
            </div>
        </Show>
    }
}
