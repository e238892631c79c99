//! Arrival processing: the deterministic resource-update routine executed
//! once per star reached.

use std::fmt;

use serde::Serialize;

use crate::mission::MissionParams;
use crate::traveler::Traveler;
use crate::universe::{Star, StarId};

/// Immutable log record of one arrival.
///
/// Values are stored at full precision; the `Display` impl rounds to two
/// decimals for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrivalRecord {
    pub star_id: StarId,
    pub star_label: String,
    pub hypergiant: bool,
    pub kg_eaten: f64,
    pub energy_gained: f64,
    pub energy_spent: f64,
    pub eat_time: f64,
    pub research_time: f64,
    pub life_budget_after: f64,
    pub energy_after: f64,
}

impl fmt::Display for ArrivalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): ate {:.2} kg (+{:.2} energy), researched {:.2}s (-{:.2} energy), \
             energy {:.2}, life budget {:.2}",
            self.star_label,
            self.star_id,
            self.kg_eaten,
            self.energy_gained,
            self.research_time,
            self.energy_spent,
            self.energy_after,
            self.life_budget_after,
        )
    }
}

/// Apply the arrival routine for `star` to the traveler.
///
/// Ordering: hypergiant bonus, feeding, research, energy-death check. The
/// life budget has already been debited for the traversed edge by the
/// caller, so the record carries the remaining budget. The same star,
/// parameters and pre-arrival state always produce the same post-arrival
/// state.
pub(crate) fn process_arrival(
    traveler: &mut Traveler,
    star: &Star,
    params: &MissionParams,
) -> ArrivalRecord {
    traveler.set_current_star(star.id);

    if star.hypergiant {
        traveler.apply_hypergiant_bonus();
    }

    let eat_time = star.time_to_eat * params.max_eat_fraction;
    let research_time = (star.time_to_research - eat_time).max(0.0);

    let kg_eaten = traveler.consume_food(params.kg_per_second_eat * eat_time);
    let pct = params.energy_pct_for(traveler.health_status());
    let energy_gained = traveler.gain_energy(pct / 100.0 * traveler.energy_max() * kg_eaten);

    let energy_spent = traveler.spend_energy(params.research_energy_per_second * research_time);

    let was_alive = !traveler.is_dead();
    if traveler.energy() <= 0.0 && was_alive {
        tracing::debug!(star = star.id, "traveler ran out of energy on arrival");
        traveler.mark_dead();
    }

    ArrivalRecord {
        star_id: star.id,
        star_label: star.label.clone(),
        hypergiant: star.hypergiant,
        kg_eaten,
        energy_gained,
        energy_spent,
        eat_time,
        research_time,
        life_budget_after: traveler.life_budget(),
        energy_after: traveler.energy(),
    }
}
