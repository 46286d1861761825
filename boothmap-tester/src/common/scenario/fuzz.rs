use anyhow::{Result, bail, ensure};
use boothmap_core::{BookingEngine, CartRejection, DeskChange, MemoryCartStorage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Scenario, ScenarioCtx};

pub const NAME: &str = "fuzz";

/// Random add/remove/toggle/clear/checkout traffic, including ids that
/// name no booth, with invariants checked after every step.
pub struct FuzzScenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Remove,
    Toggle,
    Clear,
    Checkout,
}

fn pick_op(rng: &mut ChaCha8Rng) -> Op {
    match rng.gen_range(0..20) {
        0..=7 => Op::Add,
        8..=12 => Op::Remove,
        13..=16 => Op::Toggle,
        17 => Op::Clear,
        _ => Op::Checkout,
    }
}

impl Scenario for FuzzScenario {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(ctx.seed);
        let storage = MemoryCartStorage::new();
        let (mut engine, _) = BookingEngine::open(&ctx.config, storage.clone());
        let mut ids: Vec<String> = engine
            .desk()
            .catalog()
            .iter()
            .map(|b| b.id.clone())
            .collect();
        ids.extend(["", "ZZ99", "a1"].map(String::from));

        for step in 0..ctx.steps {
            let id = ids[rng.gen_range(0..ids.len())].clone();
            let op = pick_op(&mut rng);
            let before_total = engine.total();
            let before_len = engine.desk().cart().len();

            let result = match op {
                Op::Add => engine.add(&id),
                Op::Remove => engine.remove(&id),
                Op::Toggle => engine.toggle(&id),
                Op::Clear => engine.clear(),
                Op::Checkout => engine.checkout(),
            };

            let total = engine.total();
            let len = engine.desk().cart().len();
            match &result {
                Ok(DeskChange::Added { price, .. }) => ensure!(
                    total == before_total + u64::from(*price) && len == before_len + 1,
                    "step {step}: add {id} moved total {before_total} -> {total}"
                ),
                Ok(DeskChange::Removed { price, .. }) => ensure!(
                    total + u64::from(*price) == before_total && len + 1 == before_len,
                    "step {step}: remove {id} moved total {before_total} -> {total}"
                ),
                Ok(DeskChange::Cleared { count }) => ensure!(
                    *count == before_len && len == 0 && total == 0,
                    "step {step}: clear left {len} lines"
                ),
                Ok(DeskChange::CheckedOut { count, total: paid }) => ensure!(
                    *count == before_len && *paid == before_total && len == 0,
                    "step {step}: checkout reported {count} lines for {paid}"
                ),
                Ok(DeskChange::Unchanged) | Err(_) => ensure!(
                    total == before_total && len == before_len,
                    "step {step}: {op:?} {id} without effect still changed the cart"
                ),
            }
            if let Err(CartRejection::NotFound(missing)) = &result
                && engine.desk().booth(missing).is_some()
            {
                bail!("step {step}: {missing} exists but was reported missing");
            }
            if let Err(violation) = engine.desk().verify() {
                bail!("step {step}: {op:?} {id:?} broke an invariant: {violation}");
            }
            let summed: u64 = engine
                .desk()
                .cart()
                .lines()
                .iter()
                .map(|l| u64::from(l.price))
                .sum();
            ensure!(summed == total, "step {step}: total {total} != line sum {summed}");
        }

        let (reopened, _) = BookingEngine::open(&ctx.config, storage);
        ensure!(
            reopened.desk().snapshot() == engine.desk().snapshot(),
            "stored cart drifted from the live cart after {} steps",
            ctx.steps
        );
        Ok(())
    }
}
