use web_time::Duration;

/// Item photos accepted in special handling mode.
pub const MAX_REFERENCE_IMAGES: usize = 3;

pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_millis(3000);
pub const COPY_CONFIRMATION_RESET: Duration = Duration::from_millis(2000);

/// Simulated render time of the preview backend when not configured.
pub const DEFAULT_PREVIEW_LATENCY: Duration = Duration::from_millis(4000);
