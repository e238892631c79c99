mod common;

use common::{abc_line, abc_with_chord, star, weighted_five};
use startrail_lib::{
    find_route_max_coverage, plan_route, BlockedEdges, Constellation, Error, RouteObjective,
    RouteRequest, StarId,
};

#[test]
fn budget_of_twelve_covers_all_three_stars() {
    let c = abc_line();
    let blocked = BlockedEdges::new();
    let plan = plan_route(&c, &blocked, &RouteRequest::max_stars(1, 3, 12.0)).expect("route");

    assert_eq!(plan.steps, vec![1, 2, 3]);
    assert_eq!(plan.stars_visited, 3);
    assert_eq!(plan.total_distance, 10.0);
    assert!(plan.within_budget);
}

#[test]
fn coverage_beats_a_cheaper_but_shorter_path() {
    // Direct 1-3 chord costs 15; within budget 16 the planner still prefers
    // the three-star line at weight 10.
    let c = abc_with_chord();
    let blocked = BlockedEdges::new();
    let plan = plan_route(&c, &blocked, &RouteRequest::max_stars(1, 3, 16.0)).expect("route");
    assert_eq!(plan.steps, vec![1, 2, 3]);
}

#[test]
fn blocked_edge_triggers_min_cost_fallback() {
    let c = abc_with_chord();
    let mut blocked = BlockedEdges::new();
    blocked.toggle(c.id, 1, 2);

    // Only the 15-unit chord remains and it exceeds the 12-unit budget; the
    // plan falls back to the min-cost route and flags it unaffordable.
    let plan = plan_route(&c, &blocked, &RouteRequest::max_stars(1, 3, 12.0)).expect("fallback");
    assert_eq!(plan.steps, vec![1, 3]);
    assert_eq!(plan.total_distance, 15.0);
    assert!(!plan.within_budget);
    assert_eq!(plan.objective, RouteObjective::MaxStars);
}

#[test]
fn fully_blocked_goal_reports_route_not_found() {
    let c = abc_line();
    let mut blocked = BlockedEdges::new();
    blocked.toggle(c.id, 1, 2);

    let error =
        plan_route(&c, &blocked, &RouteRequest::max_stars(1, 3, 100.0)).expect_err("unreachable");
    assert!(matches!(error, Error::RouteNotFound { .. }));
}

#[test]
fn equal_coverage_breaks_ties_by_distance() {
    // Two 3-star routes from 1 to 4: via 2 (weight 6) and via 3 (weight 4).
    let mut c = Constellation::new(0, "Aquila");
    for id in 1..=4 {
        c.add_star(star(id, &format!("S{id}"), 0.0, 0.0));
    }
    c.add_edge(1, 2, 3.0);
    c.add_edge(2, 4, 3.0);
    c.add_edge(1, 3, 2.0);
    c.add_edge(3, 4, 2.0);

    let blocked = BlockedEdges::new();
    let coverage = find_route_max_coverage(&c, &blocked, 1, 4, 10.0).expect("route");
    assert_eq!(coverage.steps, vec![1, 3, 4]);
    assert_eq!(coverage.total_distance, 4.0);
}

#[test]
fn full_coverage_ties_still_break_by_distance() {
    // Two Hamiltonian 1 -> 4 paths: 1-2-3-4 at weight 7 and 1-3-2-4 at
    // weight 5. Covering every star must not stop the search before the
    // cheaper full-coverage path is found.
    let mut c = Constellation::new(0, "Corvus");
    for id in 1..=4 {
        c.add_star(star(id, &format!("S{id}"), 0.0, 0.0));
    }
    c.add_edge(1, 2, 2.0);
    c.add_edge(2, 3, 3.0);
    c.add_edge(3, 4, 2.0);
    c.add_edge(1, 3, 1.0);
    c.add_edge(2, 4, 1.0);

    let blocked = BlockedEdges::new();
    let coverage = find_route_max_coverage(&c, &blocked, 1, 4, 100.0).expect("route");
    assert_eq!(coverage.steps, vec![1, 3, 2, 4]);
    assert_eq!(coverage.total_distance, 5.0);
}

#[test]
fn start_equals_goal_is_trivial() {
    let c = abc_line();
    let blocked = BlockedEdges::new();
    let coverage = find_route_max_coverage(&c, &blocked, 2, 2, 0.0).expect("trivial");
    assert_eq!(coverage.steps, vec![2]);
    assert_eq!(coverage.total_distance, 0.0);
}

#[test]
fn search_never_continues_past_the_goal() {
    // Goal 3 sits mid-line 1-2-3-4; star 4 is only reachable through the
    // goal, so no path may include it.
    let mut c = Constellation::new(0, "Draco");
    for id in 1..=4 {
        c.add_star(star(id, &format!("S{id}"), 0.0, 0.0));
    }
    c.add_edge(1, 2, 1.0);
    c.add_edge(2, 3, 1.0);
    c.add_edge(3, 4, 1.0);

    let blocked = BlockedEdges::new();
    let coverage = find_route_max_coverage(&c, &blocked, 1, 3, 100.0).expect("route");
    assert_eq!(coverage.steps, vec![1, 2, 3]);
}

#[test]
fn coverage_respects_budget_on_dense_graph() {
    let c = weighted_five();
    let blocked = BlockedEdges::new();
    for budget in [4.0, 6.0, 8.0, 11.0, 20.0] {
        if let Some(coverage) = find_route_max_coverage(&c, &blocked, 1, 5, budget) {
            assert!(
                coverage.total_distance <= budget,
                "distance {} over budget {}",
                coverage.total_distance,
                budget
            );
        }
    }
}

// Brute-force oracle: enumerate every simple path and keep the best under
// the same (count, then distance) ordering the search uses.
fn oracle(
    c: &Constellation,
    start: StarId,
    goal: StarId,
    budget: f64,
) -> Option<(usize, f64)> {
    fn dfs(
        c: &Constellation,
        goal: StarId,
        budget: f64,
        path: &mut Vec<StarId>,
        spent: f64,
        best: &mut Option<(usize, f64)>,
    ) {
        let node = *path.last().expect("path is never empty");
        if node == goal {
            let candidate = (path.len(), spent);
            let improves = match best {
                None => true,
                Some((count, dist)) => {
                    candidate.0 > *count || (candidate.0 == *count && candidate.1 < *dist)
                }
            };
            if improves {
                *best = Some(candidate);
            }
            return;
        }
        for (next, weight) in c.neighbours(node) {
            if path.contains(&next) || spent + weight > budget {
                continue;
            }
            path.push(next);
            dfs(c, goal, budget, path, spent + weight, best);
            path.pop();
        }
    }

    let mut best = None;
    let mut path = vec![start];
    dfs(c, goal, budget, &mut path, 0.0, &mut best);
    best
}

// Deterministic pseudo-random edge weights, no RNG dependency needed.
fn lcg(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *seed >> 33
}

fn random_constellation(seed: u64, stars: u32, extra_edges: u32) -> Constellation {
    let mut c = Constellation::new(0, format!("Random{seed}"));
    for id in 1..=stars {
        c.add_star(star(id, &format!("S{id}"), 0.0, 0.0));
    }
    let mut state = seed;
    // Spanning chain keeps the graph connected.
    for id in 1..stars {
        let weight = (lcg(&mut state) % 9 + 1) as f64;
        c.add_edge(id, id + 1, weight);
    }
    for _ in 0..extra_edges {
        let a = (lcg(&mut state) % stars as u64) as u32 + 1;
        let b = (lcg(&mut state) % stars as u64) as u32 + 1;
        if a != b && c.edge_weight(a, b).is_none() {
            let weight = (lcg(&mut state) % 9 + 1) as f64;
            c.add_edge(a, b, weight);
        }
    }
    c
}

#[test]
fn matches_brute_force_oracle_on_small_graphs() {
    let blocked = BlockedEdges::new();
    for seed in [3, 17, 42, 99, 1234] {
        let c = random_constellation(seed, 8, 6);
        for budget in [6.0, 12.0, 25.0, 60.0] {
            let found = find_route_max_coverage(&c, &blocked, 1, 8, budget);
            let expected = oracle(&c, 1, 8, budget);
            match (found, expected) {
                (None, None) => {}
                (Some(coverage), Some((count, dist))) => {
                    assert_eq!(
                        coverage.star_count(),
                        count,
                        "seed {seed} budget {budget}: wrong coverage"
                    );
                    assert!(
                        (coverage.total_distance - dist).abs() < 1e-9,
                        "seed {seed} budget {budget}: wrong distance"
                    );
                }
                (found, expected) => {
                    panic!("seed {seed} budget {budget}: {found:?} vs oracle {expected:?}")
                }
            }
        }
    }
}
