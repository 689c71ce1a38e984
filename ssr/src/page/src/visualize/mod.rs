pub mod components;
pub mod composer;
pub mod copy_feedback;
pub mod display;
pub mod gate;
pub mod server;
pub mod types;

pub use components::page::ShipmentVisualizerPage;
