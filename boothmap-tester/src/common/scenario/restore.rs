use anyhow::{Context, Result, ensure};
use boothmap_core::{BookingEngine, CartStorage, MemoryCartStorage, RestoreSkip};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Scenario, ScenarioCtx};

pub const NAME: &str = "restore";

pub struct RestoreScenario;

impl RestoreScenario {
    /// Save a seeded cart, reopen from the same storage and compare.
    fn reopen_matches(ctx: &ScenarioCtx) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(ctx.seed);
        let storage = MemoryCartStorage::new();
        let (mut engine, report) = BookingEngine::open(&ctx.config, storage.clone());
        ensure!(report.applied.is_empty(), "fresh storage restored {report:?}");

        let mut open: Vec<String> = engine
            .desk()
            .catalog()
            .iter()
            .filter(|b| b.is_open())
            .map(|b| b.id.clone())
            .collect();
        open.shuffle(&mut rng);
        let picks = rng.gen_range(1..=open.len().clamp(1, 6)).min(open.len());
        for id in &open[..picks] {
            engine.add(id)?;
        }
        let saved = engine.desk().snapshot();

        let (reopened, report) = BookingEngine::open(&ctx.config, storage.clone());
        ensure!(
            reopened.desk().snapshot() == saved,
            "reopened cart differs from saved cart"
        );
        ensure!(report.skipped.is_empty(), "clean restore skipped {report:?}");
        ensure!(
            reopened.total() == engine.total(),
            "restored total {} != {}",
            reopened.total(),
            engine.total()
        );
        reopened.desk().verify()?;
        Ok(())
    }

    /// A payload naming booked, unknown and repeated booths keeps only the
    /// valid ones, at catalog prices.
    fn stale_payload_is_filtered(ctx: &ScenarioCtx) -> Result<()> {
        let (probe, _) = BookingEngine::open(&ctx.config, MemoryCartStorage::new());
        let catalog = probe.desk().catalog();
        let open = catalog
            .iter()
            .find(|b| b.is_open())
            .context("floor has no open booth")?;
        let booked = catalog.iter().find(|b| b.booked);

        let mut entries = vec![
            serde_json::json!({"id": open.id, "price": open.price.saturating_add(1)}),
            serde_json::json!({"id": "ZZ-404", "price": 1}),
            serde_json::json!({"id": open.id, "price": open.price}),
            serde_json::json!({"price": 10}),
        ];
        if let Some(booked) = booked {
            entries.push(serde_json::json!({"id": booked.id, "price": booked.price}));
        }
        let raw = serde_json::to_string(&entries)?;

        let (engine, report) = BookingEngine::open(&ctx.config, MemoryCartStorage::with_raw(raw));
        ensure!(report.applied == [open.id.clone()], "applied {:?}", report.applied);
        ensure!(report.repriced == [open.id.clone()], "repriced {:?}", report.repriced);
        ensure!(
            report
                .skipped
                .iter()
                .any(|(id, why)| id == "ZZ-404" && *why == RestoreSkip::Unknown),
            "unknown id not reported"
        );
        ensure!(
            report
                .skipped
                .iter()
                .any(|(_, why)| *why == RestoreSkip::Duplicate),
            "duplicate not reported"
        );
        if let Some(booked) = booked {
            ensure!(
                report.skipped.contains(&(booked.id.clone(), RestoreSkip::Booked)),
                "booked booth {} not reported",
                booked.id
            );
        }
        ensure!(
            engine.total() == u64::from(open.price),
            "total should use the catalog price"
        );
        engine.desk().verify()?;
        Ok(())
    }

    /// Garbage in storage and a failing store both mean an empty, working cart.
    fn broken_storage_degrades(ctx: &ScenarioCtx) -> Result<()> {
        for raw in ["{not json", "{\"id\":\"A1\"}", "null", "42"] {
            let (engine, report) =
                BookingEngine::open(&ctx.config, MemoryCartStorage::with_raw(raw));
            ensure!(engine.desk().is_empty(), "payload {raw:?} restored lines");
            ensure!(report.applied.is_empty(), "payload {raw:?} applied lines");
        }

        let storage = MemoryCartStorage::new();
        storage.set_available(false);
        ensure!(storage.load_cart().is_err(), "unavailable storage should fail");
        let (mut engine, _) = BookingEngine::open(&ctx.config, storage.clone());
        ensure!(engine.desk().is_empty(), "unreadable storage restored lines");
        let id = engine
            .desk()
            .catalog()
            .iter()
            .find(|b| b.is_open())
            .map(|b| b.id.clone())
            .context("floor has no open booth")?;
        engine.add(&id)?;
        ensure!(engine.desk().cart().len() == 1, "cart must work without storage");
        ensure!(storage.save_count() == 0, "nothing should have been saved");
        Ok(())
    }
}

impl Scenario for RestoreScenario {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        Self::reopen_matches(ctx).context("reopen")?;
        Self::stale_payload_is_filtered(ctx).context("stale payload")?;
        Self::broken_storage_degrades(ctx).context("broken storage")?;
        Ok(())
    }
}
