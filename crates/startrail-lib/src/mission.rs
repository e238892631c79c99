//! Mission configuration passed by value into the travel simulator.
//!
//! Field names follow the JSON block the host application edits, so a
//! `missionParams` document deserialises directly. The crate itself never
//! touches the file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::routing::RouteObjective;

/// Mission parameters controlling feeding, research and travel rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MissionParams {
    /// Fraction of a star's `time_to_eat` actually spent feeding (0..=1).
    pub max_eat_fraction: f64,
    /// Feeding rate in kg per second.
    pub kg_per_second_eat: f64,
    /// Percent of max energy gained per kg eaten, keyed by health status.
    pub energy_per_kg_pct: HashMap<String, f64>,
    /// Energy cost per second of idle research time.
    pub research_energy_per_second: f64,
    /// Distance units traveled per second.
    pub travel_speed_units: f64,
    /// Objective used when planning routes for this mission.
    pub route_objective: RouteObjective,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            max_eat_fraction: 0.5,
            kg_per_second_eat: 5.0,
            energy_per_kg_pct: HashMap::from([
                ("Excelente".to_string(), 5.0),
                ("Regular".to_string(), 3.0),
                ("Malo".to_string(), 2.0),
            ]),
            research_energy_per_second: 2.0,
            travel_speed_units: 100.0,
            route_objective: RouteObjective::MaxStars,
        }
    }
}

impl MissionParams {
    /// Validate the mission parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.max_eat_fraction.is_finite() || !(0.0..=1.0).contains(&self.max_eat_fraction) {
            return Err(Error::InvalidMissionParams {
                message: format!(
                    "maxEatFraction must be between 0 and 1, got {}",
                    self.max_eat_fraction
                ),
            });
        }

        for (name, value) in [
            ("kgPerSecondEat", self.kg_per_second_eat),
            ("researchEnergyPerSecond", self.research_energy_per_second),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidMissionParams {
                    message: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }

        if !self.travel_speed_units.is_finite() || self.travel_speed_units <= 0.0 {
            return Err(Error::InvalidMissionParams {
                message: format!(
                    "travelSpeedUnits must be finite and positive, got {}",
                    self.travel_speed_units
                ),
            });
        }

        for (status, pct) in &self.energy_per_kg_pct {
            if !pct.is_finite() || *pct < 0.0 {
                return Err(Error::InvalidMissionParams {
                    message: format!(
                        "energyPerKgPct[{status}] must be finite and non-negative, got {pct}"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Percent of max energy gained per kg for the given health status.
    /// Unknown labels yield 0; malformed data is tolerated, not fatal.
    pub fn energy_pct_for(&self, health_status: &str) -> f64 {
        self.energy_per_kg_pct
            .get(health_status)
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mission_schema() {
        let params = MissionParams::default();
        assert_eq!(params.max_eat_fraction, 0.5);
        assert_eq!(params.kg_per_second_eat, 5.0);
        assert_eq!(params.research_energy_per_second, 2.0);
        assert_eq!(params.travel_speed_units, 100.0);
        assert_eq!(params.route_objective, RouteObjective::MaxStars);
        assert_eq!(params.energy_pct_for("Excelente"), 5.0);
        assert_eq!(params.energy_pct_for("Regular"), 3.0);
        assert_eq!(params.energy_pct_for("Malo"), 2.0);
        params.validate().expect("defaults validate");
    }

    #[test]
    fn unknown_health_status_yields_zero() {
        let params = MissionParams::default();
        assert_eq!(params.energy_pct_for("Pésimo"), 0.0);
    }

    #[test]
    fn eat_fraction_outside_unit_interval_rejected() {
        let params = MissionParams {
            max_eat_fraction: 1.5,
            ..MissionParams::default()
        };
        let error = params.validate().expect_err("fraction out of range");
        assert!(format!("{error}").contains("maxEatFraction"));
    }

    #[test]
    fn zero_travel_speed_rejected() {
        let params = MissionParams {
            travel_speed_units: 0.0,
            ..MissionParams::default()
        };
        assert!(params.validate().is_err());
    }
}
