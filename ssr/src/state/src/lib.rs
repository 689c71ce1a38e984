pub mod partner_gate;
#[cfg(feature = "ssr")]
pub mod server;
