pub mod limits;

pub const BRAND_NAME: &str = "Semliner Xpress Logistics";
pub const BRAND_ADDRESS: &str = "Bakaluba Mall B31 & B32, Central Region, Uganda.";

/// Session storage key marking the partner gate as acknowledged.
pub const PARTNER_GATE_ACK_STORE: &str = "sxl-partner-gate-acknowledged";

pub const TRACKING_NUMBER_EXAMPLE: &str = "SX-UG-1988-KLA";

// Sample clip handed out by the preview backend when no clip is configured
pub const FALLBACK_PREVIEW_VIDEO_URL: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4";

pub mod env {
    pub const PREVIEW_VIDEO_URL: &str = "SHIPMENT_PREVIEW_VIDEO_URL";
    pub const PREVIEW_LATENCY_MS: &str = "SHIPMENT_PREVIEW_LATENCY_MS";
}

pub const LOADING_MESSAGES: [&str; 17] = [
    "Calculating optimal route...",
    "Assigning delivery vehicle...",
    "Planning logistics...",
    "Consulting with our AI traffic controller...",
    "Visualizing the first leg of the journey...",
    "Loading package onto the truck...",
    "This can take a few minutes, your patience is appreciated!",
    "Ensuring timely delivery...",
    "Finalizing shipment details...",
    "Polishing the visualization...",
    "Confirming delivery address...",
    "Checking for road closures...",
    "Calibrating the GPS...",
    "Printing shipping labels...",
    "The journey is about to begin!",
    "Our digital driver is getting ready.",
    "Fueling up the virtual truck...",
];

/// Status line shown after `tick` rotations of the loading screen.
pub fn loading_message(tick: u64) -> &'static str {
    LOADING_MESSAGES[(tick % LOADING_MESSAGES.len() as u64) as usize]
}
