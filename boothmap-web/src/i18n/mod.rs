mod bundle;
mod format;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::fmt_price;
pub use render::{t, tr};
