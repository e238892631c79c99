// Shared fixtures for startrail-lib integration tests.
#![allow(dead_code)]

use startrail_lib::{Constellation, Star, StarId};

/// Build a star with the stay-time budgets used by the travel tests.
pub fn star(id: StarId, label: &str, time_to_eat: f64, time_to_research: f64) -> Star {
    let mut s = Star::new(id, label);
    s.time_to_eat = time_to_eat;
    s.time_to_research = time_to_research;
    s
}

/// The three-star line from the planning scenarios: A(1)-B(2)-C(3) with
/// AB = BC = 5 and A carrying a 2s eat / 4s stay budget.
pub fn abc_line() -> Constellation {
    let mut c = Constellation::new(0, "Lyra");
    c.add_star(star(1, "A", 2.0, 4.0));
    c.add_star(star(2, "B", 2.0, 4.0));
    c.add_star(star(3, "C", 2.0, 4.0));
    c.add_edge(1, 2, 5.0);
    c.add_edge(2, 3, 5.0);
    c
}

/// The line with an expensive direct A-C chord, so a blocked A-B still
/// leaves a (costly) route.
pub fn abc_with_chord() -> Constellation {
    let mut c = abc_line();
    c.add_edge(1, 3, 15.0);
    c
}

/// A five-star graph with a known cheapest 1 → 5 path of weight 6
/// (1-2-4-5) against heavier alternatives.
pub fn weighted_five() -> Constellation {
    let mut c = Constellation::new(0, "Cygnus");
    for (id, label) in [(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E")] {
        c.add_star(star(id, label, 0.0, 0.0));
    }
    c.add_edge(1, 2, 2.0);
    c.add_edge(1, 3, 4.0);
    c.add_edge(2, 3, 1.0);
    c.add_edge(2, 4, 3.0);
    c.add_edge(3, 5, 5.0);
    c.add_edge(4, 5, 1.0);
    c
}

/// Two disconnected pairs: 1-2 and 3-4.
pub fn split_pairs() -> Constellation {
    let mut c = Constellation::new(0, "Gemini");
    for id in 1..=4 {
        c.add_star(star(id, &format!("S{id}"), 0.0, 0.0));
    }
    c.add_edge(1, 2, 1.0);
    c.add_edge(3, 4, 1.0);
    c
}
