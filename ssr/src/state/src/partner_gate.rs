use codee::string::FromToStringCodec;
use consts::PARTNER_GATE_ACK_STORE;
use leptos::prelude::*;
use leptos_use::storage::use_session_storage;

/// Whether the partner account notice has been acknowledged in this browser
/// session.
#[derive(Clone, Copy)]
pub struct PartnerGate {
    acknowledged: Signal<bool>,
    set_acknowledged: WriteSignal<bool>,
}

impl PartnerGate {
    pub fn init() -> Self {
        let (acknowledged, set_acknowledged, _) =
            use_session_storage::<bool, FromToStringCodec>(PARTNER_GATE_ACK_STORE);
        let this = Self {
            acknowledged,
            set_acknowledged,
        };
        provide_context(this);
        this
    }

    pub fn get() -> Self {
        use_context::<Self>().unwrap_or_else(PartnerGate::init)
    }

    pub fn acknowledged(&self) -> Signal<bool> {
        self.acknowledged
    }

    pub fn acknowledge(&self) {
        log::debug!("partner gate acknowledged");
        self.set_acknowledged.set(true);
    }
}
