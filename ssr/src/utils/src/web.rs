use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::window;
        use wasm_bindgen_futures::JsFuture;

        let clipboard = window().navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

/// Grows (or shrinks) a textarea to fit its current content.
#[cfg(feature = "hydrate")]
pub fn fit_textarea_to_content(textarea: &web_sys::HtmlTextAreaElement) {
    let style = textarea.style();
    _ = style.set_property("height", "auto");
    _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}
