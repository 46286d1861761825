use anyhow::{Result, ensure};
use boothmap_core::{BookingDesk, DeskChange};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Scenario, ScenarioCtx};

pub const NAME: &str = "round-trip";

/// For a seeded starting cart, adding then removing any open booth must
/// return the desk to exactly where it was.
pub struct RoundTripScenario;

impl Scenario for RoundTripScenario {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(ctx.seed);
        let mut desk = BookingDesk::new(&ctx.config);
        let ids: Vec<String> = desk.catalog().iter().map(|b| b.id.clone()).collect();

        for id in &ids {
            if rng.gen_bool(0.25) {
                let _ = desk.add(id);
            }
        }
        desk.verify()?;

        let mut checked = 0_usize;
        for id in &ids {
            if !desk.booth(id).is_some_and(|b| b.is_open()) {
                continue;
            }
            let before = desk.clone();
            let added = desk.add(id)?;
            let removed = desk.remove(id)?;
            let DeskChange::Added { price, .. } = added else {
                anyhow::bail!("add {id} returned {added:?}");
            };
            ensure!(
                removed
                    == DeskChange::Removed {
                        id: id.clone(),
                        price
                    },
                "remove {id} returned {removed:?}"
            );
            ensure!(desk == before, "add/remove of {id} changed the desk");
            checked += 1;
        }

        if ctx.verbose {
            log::info!("round-trip checked {checked} booths (seed {})", ctx.seed);
        }
        Ok(())
    }
}
