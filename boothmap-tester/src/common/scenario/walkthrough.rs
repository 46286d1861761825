use anyhow::{Result, ensure};
use boothmap_core::{BookingDesk, CartRejection, DeskChange, FloorConfig};

use super::{Scenario, ScenarioCtx};

pub const NAME: &str = "walkthrough";

/// The reference floor session. Always runs on the default floor with the
/// reference bookings so the expected prices are fixed.
pub struct WalkthroughScenario;

fn cart_ids(desk: &BookingDesk) -> Vec<&str> {
    desk.cart().lines().iter().map(|l| l.id.as_str()).collect()
}

impl Scenario for WalkthroughScenario {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let config = FloorConfig::default().with_booked(["A2", "B5", "C3", "D1"]);
        let mut desk = BookingDesk::new(&config);
        ensure!(desk.catalog().len() == 24, "floor should hold 24 booths");
        ensure!(desk.available_count() == 20, "20 booths should be open");

        let rejected = desk.add("A2");
        ensure!(
            rejected == Err(CartRejection::AlreadyBooked("A2".into())),
            "A2 is booked, got {rejected:?}"
        );
        ensure!(desk.is_empty(), "rejected add must not touch the cart");

        desk.add("A1")?;
        ensure!(desk.total() == 53, "A1 should cost 53, total {}", desk.total());

        let duplicate = desk.add("A1");
        ensure!(
            duplicate == Err(CartRejection::AlreadyInCart("A1".into())),
            "second A1 add should be rejected, got {duplicate:?}"
        );

        desk.add("B1")?;
        ensure!(cart_ids(&desk) == ["A1", "B1"], "cart order {:?}", cart_ids(&desk));
        ensure!(desk.total() == 111, "A1 + B1 should total 111, got {}", desk.total());

        desk.remove("A1")?;
        ensure!(desk.total() == 58, "after removing A1 total {}", desk.total());
        ensure!(
            desk.booth("A1").is_some_and(|b| !b.selected),
            "A1 should be deselected"
        );

        let checkout = desk.checkout()?;
        ensure!(
            checkout
                == DeskChange::CheckedOut {
                    count: 1,
                    total: 58
                },
            "checkout reported {checkout:?}"
        );
        ensure!(desk.is_empty() && desk.total() == 0, "checkout empties the cart");
        ensure!(desk.clear().is_err(), "clearing an empty cart is rejected");
        desk.verify()?;

        if ctx.verbose {
            log::info!("walkthrough ok");
        }
        Ok(())
    }
}
