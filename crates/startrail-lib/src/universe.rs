//! Star, constellation and universe data model.
//!
//! Stars live in an arena keyed by their globally unique id; adjacency is a
//! per-star neighbour map so edge weights resolve in O(1). Edges within a
//! constellation are undirected and stored from both endpoints. Links between
//! constellations are kept as a separate directed record list and are never
//! consulted by the in-constellation path searches.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Globally unique star identifier.
pub type StarId = u32;

/// Identifier of a constellation within the universe.
pub type ConstellationId = u32;

/// 2D authoring position of a star. Only used to derive edge weights when a
/// graph is authored and to interpolate the traveler sprite in transit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear blend towards `other` by `t` in `[0, 1]`.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// A single star within a constellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub id: StarId,
    pub label: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub hypergiant: bool,
    /// Maximum seconds the traveler may spend feeding at this star.
    #[serde(default)]
    pub time_to_eat: f64,
    /// Total stay-time budget at this star; research time is whatever feeding
    /// leaves over.
    #[serde(default)]
    pub time_to_research: f64,
    /// Raw authored energy figure; informational only.
    #[serde(default)]
    pub energy: f64,
    /// Neighbour id to edge weight. Kept ordered so iteration is
    /// deterministic across runs.
    #[serde(default)]
    connections: BTreeMap<StarId, f64>,
}

impl Star {
    pub fn new(id: StarId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            position: Position::default(),
            radius: 0.0,
            hypergiant: false,
            time_to_eat: 0.0,
            time_to_research: 0.0,
            energy: 0.0,
            connections: BTreeMap::new(),
        }
    }

    /// Neighbour ids with their edge weights, ascending by id.
    pub fn connections(&self) -> impl Iterator<Item = (StarId, f64)> + '_ {
        self.connections.iter().map(|(&id, &w)| (id, w))
    }

    /// Weight of the edge towards `neighbour`, if one exists.
    pub fn connection_to(&self, neighbour: StarId) -> Option<f64> {
        self.connections.get(&neighbour).copied()
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    fn add_connection(&mut self, neighbour: StarId, weight: f64) {
        self.connections.insert(neighbour, weight);
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - hypergiant: {}",
            self.label, self.id, self.hypergiant
        )
    }
}

/// Directed record linking a hypergiant in one constellation to a star in
/// another. Referential validity is the loader's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub from: StarId,
    pub to: StarId,
    pub distance: f64,
}

/// A named collection of stars connected by intra-constellation edges.
///
/// The graph is read-only from the simulation's perspective; only the
/// (external) editor collaborator mutates it between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constellation {
    pub id: ConstellationId,
    pub name: String,
    /// Optional display colour, passed through for the presentation layer.
    #[serde(default)]
    pub color: Option<[u8; 3]>,
    #[serde(default)]
    stars: BTreeMap<StarId, Star>,
    #[serde(default)]
    external_links: Vec<ExternalLink>,
}

impl Constellation {
    pub fn new(id: ConstellationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
            stars: BTreeMap::new(),
            external_links: Vec::new(),
        }
    }

    /// Insert a star, replacing any previous star with the same id.
    pub fn add_star(&mut self, star: Star) {
        self.stars.insert(star.id, star);
    }

    /// Insert a symmetric edge. A no-op when either endpoint is missing;
    /// malformed references are inert by design.
    pub fn add_edge(&mut self, a: StarId, b: StarId, weight: f64) {
        if !self.stars.contains_key(&a) || !self.stars.contains_key(&b) {
            return;
        }
        if let Some(star) = self.stars.get_mut(&a) {
            star.add_connection(b, weight);
        }
        if let Some(star) = self.stars.get_mut(&b) {
            star.add_connection(a, weight);
        }
    }

    /// Append an external link record. Membership is not checked here; the
    /// loader validates references across the whole universe.
    pub fn add_external_link(&mut self, from: StarId, to: StarId, distance: f64) {
        self.external_links.push(ExternalLink { from, to, distance });
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    /// All stars, ascending by id.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn external_links(&self) -> &[ExternalLink] {
        &self.external_links
    }

    /// Neighbours of `id` with edge weights. Unknown ids yield an empty
    /// iterator rather than an error.
    pub fn neighbours(&self, id: StarId) -> impl Iterator<Item = (StarId, f64)> + '_ {
        self.stars
            .get(&id)
            .into_iter()
            .flat_map(|star| star.connections())
    }

    /// Weight of the edge between `a` and `b`, if present.
    pub fn edge_weight(&self, a: StarId, b: StarId) -> Option<f64> {
        self.stars.get(&a).and_then(|star| star.connection_to(b))
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "constellation {} with {} stars",
            self.name,
            self.stars.len()
        )
    }
}

/// All constellations plus a global star index.
///
/// Star ids are unique across the whole universe, so a single map resolves
/// any id to its owning constellation. Constellations are registered once by
/// the loader and the index is maintained on insert.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    constellations: Vec<Constellation>,
    /// Maintained by `add_constellation`; hosts deserialising a universe
    /// register each constellation through it so the index stays in step.
    #[serde(skip)]
    star_index: HashMap<StarId, ConstellationId>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constellation, indexing its stars globally.
    pub fn add_constellation(&mut self, constellation: Constellation) {
        for star in constellation.stars() {
            self.star_index.insert(star.id, constellation.id);
        }
        self.constellations.push(constellation);
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    pub fn constellation(&self, id: ConstellationId) -> Option<&Constellation> {
        self.constellations.iter().find(|c| c.id == id)
    }

    /// Constellation owning the given star, if any.
    pub fn constellation_of(&self, star: StarId) -> Option<ConstellationId> {
        self.star_index.get(&star).copied()
    }

    /// Resolve a star id anywhere in the universe.
    pub fn find_star(&self, id: StarId) -> Option<&Star> {
        let constellation = self.constellation_of(id)?;
        self.constellation(constellation)?.star(id)
    }

    /// Follow an outgoing external link from a hypergiant.
    ///
    /// Returns the target constellation and star when `from` is a hypergiant
    /// with at least one external link whose target resolves to a different
    /// constellation. This is the graph-side half of cross-constellation
    /// navigation; the presentation layer decides when to invoke it.
    pub fn navigate_external(&self, from: StarId) -> Option<(ConstellationId, StarId)> {
        let origin = self.constellation_of(from)?;
        let constellation = self.constellation(origin)?;
        if !constellation.star(from)?.hypergiant {
            return None;
        }
        constellation
            .external_links()
            .iter()
            .filter(|link| link.from == from)
            .find_map(|link| {
                let target = self.constellation_of(link.to)?;
                (target != origin).then_some((target, link.to))
            })
    }
}
