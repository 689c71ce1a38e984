mod loading_screen;
mod media_uploads;
mod mode_selector;
pub mod page;
mod partner_gate;
mod prompt_form;
mod result_screen;
mod settings_panel;

pub use loading_screen::VisualizationLoadingScreen;
pub use partner_gate::PartnerGateDialog;
pub use prompt_form::PromptForm;
pub use result_screen::VisualizationResultScreen;
