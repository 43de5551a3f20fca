//! Unit tests for traffic-route.

use traffic_core::Weight;
use traffic_graph::{RoadMap, Topology};

use crate::{DijkstraRouter, Route, Router};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn w(minutes: u32) -> Weight {
    Weight::new(minutes).unwrap()
}

/// Four locations, four roads:
/// A–B 4, B–C 3, A–C 10, C–D 2.
fn abcd() -> RoadMap {
    let mut topo = Topology::new();
    topo.location("A").location("B").location("C").location("D");
    topo.road("A", "B", 4).road("B", "C", 3);
    topo.road("A", "C", 10).road("C", "D", 2);
    topo.build().unwrap()
}

fn shortest(map: &RoadMap, from: &str, to: &str) -> Option<Route> {
    let from = map.resolve(from).unwrap();
    let to = map.resolve(to).unwrap();
    DijkstraRouter.shortest_path(map, from, to)
}

fn stop_labels(map: &RoadMap, route: &Route) -> Vec<String> {
    route.stops.iter().map(|&v| map.label(v).to_owned()).collect()
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use super::*;

    #[test]
    fn trivial_route() {
        let map = abcd();
        let route = shortest(&map, "A", "A").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A"]);
        assert_eq!(route.total_minutes, 0);
        assert!(route.is_trivial());
    }

    #[test]
    fn cheaper_detour_beats_direct() {
        // A–C costs 10 directly but 7 via B.
        let map = abcd();
        let route = shortest(&map, "A", "C").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A", "B", "C"]);
        assert_eq!(route.total_minutes, 7);
    }

    #[test]
    fn multi_leg_chain() {
        let map = abcd();
        let route = shortest(&map, "A", "D").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A", "B", "C", "D"]);
        assert_eq!(route.total_minutes, 9);
    }

    #[test]
    fn direct_when_cheapest() {
        let mut topo = Topology::new();
        topo.location("A").location("B").location("C");
        topo.road("A", "B", 2).road("B", "C", 2).road("A", "C", 3);
        let map = topo.build().unwrap();

        let route = shortest(&map, "A", "C").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A", "C"]);
        assert_eq!(route.total_minutes, 3);
    }

    #[test]
    fn equal_cost_ties_break_alphabetically() {
        // Two cost-2 paths A→D: via B and via C.  B sorts first.
        let mut topo = Topology::new();
        topo.location("A").location("B").location("C").location("D");
        topo.road("A", "B", 1).road("A", "C", 1);
        topo.road("B", "D", 1).road("C", "D", 1);
        let map = topo.build().unwrap();

        let route = shortest(&map, "A", "D").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A", "B", "D"]);
        assert_eq!(route.total_minutes, 2);
    }

    #[test]
    fn unreachable_is_none() {
        let mut topo = Topology::new();
        topo.location("A").location("B").location("C").location("D").location("E");
        topo.road("A", "B", 4).road("B", "C", 3);
        topo.road("A", "C", 10).road("C", "D", 2);
        let map = topo.build().unwrap();

        assert!(shortest(&map, "A", "E").is_none());
        assert!(shortest(&map, "E", "A").is_none());
    }

    #[test]
    fn isolated_source_still_routes_to_itself() {
        let mut topo = Topology::new();
        topo.location("A").location("B").location("E");
        topo.road("A", "B", 4);
        let map = topo.build().unwrap();

        let route = shortest(&map, "E", "E").unwrap();
        assert_eq!(stop_labels(&map, &route), ["E"]);
        assert_eq!(route.total_minutes, 0);
    }

    #[test]
    fn disconnected_components() {
        let mut topo = Topology::new();
        topo.location("A").location("B").location("C").location("D");
        topo.road("A", "B", 1).road("C", "D", 1);
        let map = topo.build().unwrap();

        assert!(shortest(&map, "A", "B").is_some());
        assert!(shortest(&map, "A", "C").is_none());
    }

    #[test]
    fn symmetric_total() {
        let map = abcd();
        let there = shortest(&map, "A", "D").unwrap();
        let back = shortest(&map, "D", "A").unwrap();
        assert_eq!(there.total_minutes, back.total_minutes);

        let mut reversed = back.stops.clone();
        reversed.reverse();
        assert_eq!(there.stops, reversed);
    }
}

// ── Congestion updates ────────────────────────────────────────────────────────

#[cfg(test)]
mod congestion {
    use super::*;

    #[test]
    fn update_shifts_route() {
        let mut map = abcd();
        let b = map.resolve("B").unwrap();
        let c = map.resolve("C").unwrap();

        map.set_weight(b, c, w(50)).unwrap();
        let route = shortest(&map, "A", "D").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A", "C", "D"]);
        assert_eq!(route.total_minutes, 12);
    }

    #[test]
    fn reset_restores_route() {
        let mut map = abcd();
        let b = map.resolve("B").unwrap();
        let c = map.resolve("C").unwrap();
        map.set_weight(b, c, w(50)).unwrap();

        map.reset_weights();
        let route = shortest(&map, "A", "D").unwrap();
        assert_eq!(stop_labels(&map, &route), ["A", "B", "C", "D"]);
        assert_eq!(route.total_minutes, 9);
    }
}

// ── Route type ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn legs_pair_up_consecutive_stops() {
        let map = abcd();
        let route = shortest(&map, "A", "D").unwrap();
        let legs: Vec<(String, String)> = route
            .legs()
            .map(|(a, b)| (map.label(a).to_owned(), map.label(b).to_owned()))
            .collect();
        assert_eq!(
            legs,
            vec![
                ("A".to_owned(), "B".to_owned()),
                ("B".to_owned(), "C".to_owned()),
                ("C".to_owned(), "D".to_owned()),
            ]
        );
        assert_eq!(route.leg_count(), 3);
        assert!(!route.is_trivial());
    }

    #[test]
    fn trivial_route_has_no_legs() {
        let map = abcd();
        let route = shortest(&map, "B", "B").unwrap();
        assert_eq!(route.leg_count(), 0);
        assert_eq!(route.legs().count(), 0);
    }
}
