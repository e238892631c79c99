//! The traveler's mutable resource state.
//!
//! Owned exclusively by the travel simulator during a trip; every numeric
//! mutator clamps so energy and food stay within `[0, max]` and the life
//! budget never goes negative. Mutation is crate-private — the presentation
//! layer only reads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::universe::StarId;

/// Session-start attributes for a traveler, supplied once by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelerConfig {
    pub name: String,
    pub initial_energy: f64,
    pub food_stock_kg: f64,
    pub life_budget: f64,
    pub health_status: String,
}

impl Default for TravelerConfig {
    fn default() -> Self {
        Self {
            name: "Traveler".to_string(),
            initial_energy: 100.0,
            food_stock_kg: 300.0,
            life_budget: 0.0,
            health_status: "Regular".to_string(),
        }
    }
}

/// The traveler's live resource state.
#[derive(Debug, Clone, PartialEq)]
pub struct Traveler {
    name: String,
    energy: f64,
    energy_max: f64,
    food_stock: f64,
    food_stock_max: f64,
    life_budget: f64,
    health_status: String,
    current_star: Option<StarId>,
    alive: bool,
}

impl Traveler {
    /// Create a fresh traveler from session-start attributes. Initial energy
    /// and food stock double as the respective maxima.
    pub fn new(config: TravelerConfig) -> Self {
        let energy = config.initial_energy.max(0.0);
        let food = config.food_stock_kg.max(0.0);
        Self {
            name: config.name,
            energy,
            energy_max: energy,
            food_stock: food,
            food_stock_max: food,
            life_budget: config.life_budget.max(0.0),
            health_status: config.health_status,
            current_star: None,
            alive: energy > 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn energy_max(&self) -> f64 {
        self.energy_max
    }

    pub fn food_stock(&self) -> f64 {
        self.food_stock
    }

    pub fn food_stock_max(&self) -> f64 {
        self.food_stock_max
    }

    pub fn life_budget(&self) -> f64 {
        self.life_budget
    }

    pub fn health_status(&self) -> &str {
        &self.health_status
    }

    pub fn current_star(&self) -> Option<StarId> {
        self.current_star
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    pub(crate) fn set_current_star(&mut self, star: StarId) {
        self.current_star = Some(star);
    }

    /// Add energy, capped at the maximum. Returns the amount actually gained.
    pub(crate) fn gain_energy(&mut self, amount: f64) -> f64 {
        let before = self.energy;
        self.energy = (self.energy + amount.max(0.0)).min(self.energy_max);
        self.energy - before
    }

    /// Remove energy, floored at zero. Returns the amount actually spent.
    pub(crate) fn spend_energy(&mut self, amount: f64) -> f64 {
        let before = self.energy;
        self.energy = (self.energy - amount.max(0.0)).max(0.0);
        before - self.energy
    }

    /// Remove food, floored at zero. Returns the kg actually consumed.
    pub(crate) fn consume_food(&mut self, kg: f64) -> f64 {
        let before = self.food_stock;
        self.food_stock = (self.food_stock - kg.max(0.0)).max(0.0);
        before - self.food_stock
    }

    /// Deplete the life budget by a traversed edge weight, floored at zero.
    pub(crate) fn spend_life(&mut self, distance: f64) {
        self.life_budget = (self.life_budget - distance.max(0.0)).max(0.0);
    }

    /// Hypergiant arrival bonus: energy grows by half its current value
    /// (capped at max); food stock doubles, growing `food_stock_max` to fit
    /// but never past twice its prior value.
    pub(crate) fn apply_hypergiant_bonus(&mut self) {
        self.gain_energy(self.energy * 0.5);
        let doubled = self.food_stock * 2.0;
        if doubled > self.food_stock_max {
            self.food_stock_max = doubled.min(self.food_stock_max * 2.0);
        }
        self.food_stock = doubled.min(self.food_stock_max);
    }

    /// Mark the traveler dead. Idempotent.
    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - energy: {:.2}/{:.2}",
            self.name, self.health_status, self.energy, self.energy_max
        )
    }
}
