use crate::components::Notice;
use crate::storage::WebCartStorage;
use boothmap_core::{BookingEngine, FloorConfig, GridNav};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type Engine = BookingEngine<WebCartStorage>;

#[derive(Clone)]
pub struct AppState {
    pub engine: UseStateHandle<Engine>,
    pub notice: UseStateHandle<Option<Notice>>,
    /// Id of the latest notice shown; dismissal timers compare against it.
    pub notice_seq: Rc<RefCell<u32>>,
    pub focus_idx: UseStateHandle<usize>,
    pub boot_ready: UseStateHandle<bool>,
}

/// Build the floor from the bundled config and restore the saved cart.
#[must_use]
pub fn open_engine() -> Engine {
    let config = FloorConfig::load_from_static();
    let (engine, report) = BookingEngine::open(&config, WebCartStorage::default());
    log::info!(
        "restored {} cart line(s), skipped {}, repriced {}",
        report.applied.len(),
        report.skipped.len(),
        report.repriced.len()
    );
    engine
}

/// First unbooked tile, where the roving tabindex starts.
#[must_use]
pub fn initial_focus(engine: &Engine) -> usize {
    let catalog = engine.desk().catalog();
    GridNav::for_catalog(catalog)
        .first_open(|idx| catalog.get(idx).is_some_and(|b| !b.booked))
        .unwrap_or(0)
}

#[hook]
pub fn use_app_state() -> AppState {
    let engine = use_state(open_engine);
    let focus_idx = {
        let start = initial_focus(&engine);
        use_state(move || start)
    };
    AppState {
        engine,
        notice: use_state(|| None::<Notice>),
        notice_seq: use_mut_ref(|| 0_u32),
        focus_idx,
        boot_ready: use_state(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn currency(&self) -> AttrValue {
        AttrValue::from(self.engine.desk().catalog().currency().to_string())
    }
}
