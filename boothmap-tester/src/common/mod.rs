pub mod reports;
pub mod runner;
pub mod scenario;
pub mod script;
pub mod util;

pub use runner::{ScenarioResult, ScenarioRunner};
pub use util::{parse_seeds, split_csv};
