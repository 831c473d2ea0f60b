//! End-to-end tests for building a router and answering route queries.

use super::*;
use crate::domain::{Bus, Coordinates};
use crate::graph::{DirectedWeightedGraph, VertexId};
use crate::network::TransportCatalogue;

use proptest::prelude::*;

fn catalogue(stops: &[&str]) -> TransportCatalogue {
    let mut catalogue = TransportCatalogue::new();
    for name in stops {
        catalogue.add_stop(*name, Coordinates::new(0.0, 0.0)).unwrap();
    }
    catalogue
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// The A, B, C network from the scenario: one round-trip bus, 60 km/h.
fn scenario() -> TransportRouter {
    let mut catalogue = catalogue(&["A", "B", "C"]);
    catalogue.set_distance("A", "B", 1000).unwrap();
    catalogue.set_distance("B", "C", 2000).unwrap();
    catalogue.add_bus(Bus::new("X", ["A", "B", "C"], true)).unwrap();

    TransportRouter::build(&catalogue, RoutingSettings::new(5, 60.0)).unwrap()
}

#[test]
fn scenario_rides_through_intermediate_stop() {
    let router = scenario();

    let route = router.get_route("A", "C").unwrap();
    assert_eq!(
        route.items,
        vec![RouteItem::wait("A", 5.0), RouteItem::ride("X", 2, 3.0)]
    );
    assert_eq!(route.total_time, 8.0);
}

#[test]
fn scenario_roundtrip_bus_does_not_run_backwards() {
    let router = scenario();

    let err = router.get_route("C", "A").unwrap_err();
    assert_eq!(
        err,
        RouteError::NoPath {
            from: "C".into(),
            to: "A".into(),
        }
    );
}

#[test]
fn same_stop_is_trivial_for_every_stop() {
    let router = scenario();

    for stop in ["A", "B", "C"] {
        let route = router.get_route(stop, stop).unwrap();
        assert!(route.items.is_empty());
        assert_eq!(route.total_time, 0.0);
    }
}

#[test]
fn unknown_stop_is_not_found() {
    let router = scenario();

    let err = router.get_route("A", "Nowhere").unwrap_err();
    assert_eq!(
        err,
        RouteError::UnknownStop {
            name: "Nowhere".into()
        }
    );

    let err = router.get_route("Nowhere", "Nowhere").unwrap_err();
    assert!(matches!(err, RouteError::UnknownStop { .. }));
}

#[test]
fn isolated_stop_is_unreachable_both_ways() {
    let mut catalogue = catalogue(&["A", "B", "Island"]);
    catalogue.set_distance("A", "B", 500).unwrap();
    catalogue.add_bus(Bus::new("1", ["A", "B"], false)).unwrap();
    let router = TransportRouter::build(&catalogue, RoutingSettings::default()).unwrap();

    for other in ["A", "B"] {
        assert!(matches!(
            router.get_route("Island", other),
            Err(RouteError::NoPath { .. })
        ));
        assert!(matches!(
            router.get_route(other, "Island"),
            Err(RouteError::NoPath { .. })
        ));
    }
    assert!(router.get_route("Island", "Island").unwrap().items.is_empty());
}

#[test]
fn transfer_between_buses_waits_again() {
    let mut catalogue = catalogue(&["A", "B", "C"]);
    catalogue.set_distance("A", "B", 2000).unwrap();
    catalogue.set_distance("B", "C", 4000).unwrap();
    catalogue.add_bus(Bus::new("1", ["A", "B"], false)).unwrap();
    catalogue.add_bus(Bus::new("2", ["B", "C"], false)).unwrap();
    let router = TransportRouter::build(&catalogue, RoutingSettings::new(2, 60.0)).unwrap();

    let route = router.get_route("A", "C").unwrap();
    assert_eq!(
        route.items,
        vec![
            RouteItem::wait("A", 2.0),
            RouteItem::ride("1", 1, 2.0),
            RouteItem::wait("B", 2.0),
            RouteItem::ride("2", 1, 4.0),
        ]
    );
    assert_eq!(route.total_time, 10.0);

    // Bus 1 and bus 2 both run back, using the reverse distances.
    let back = router.get_route("C", "A").unwrap();
    assert_eq!(back.total_time, 10.0);
}

#[test]
fn ring_bus_goes_round_to_reach_earlier_stop() {
    let mut catalogue = catalogue(&["A", "B", "C"]);
    catalogue.set_distance("A", "B", 1000).unwrap();
    catalogue.set_distance("B", "C", 1000).unwrap();
    catalogue.set_distance("C", "A", 1000).unwrap();
    catalogue
        .add_bus(Bus::new("ring", ["A", "B", "C", "A"], true))
        .unwrap();
    let router = TransportRouter::build(&catalogue, RoutingSettings::new(1, 60.0)).unwrap();

    // C → B has to ride to the end of the ring at A and board again.
    let route = router.get_route("C", "B").unwrap();
    assert_eq!(
        route.items,
        vec![
            RouteItem::wait("C", 1.0),
            RouteItem::ride("ring", 1, 1.0),
            RouteItem::wait("A", 1.0),
            RouteItem::ride("ring", 1, 1.0),
        ]
    );
    assert_eq!(route.total_time, 4.0);
}

#[test]
fn faster_bus_wins_over_fewer_spans() {
    let mut catalogue = catalogue(&["A", "B", "C"]);
    catalogue.set_distance("A", "B", 1000).unwrap();
    catalogue.set_distance("B", "C", 1000).unwrap();
    catalogue.set_distance("A", "C", 10000).unwrap();
    catalogue.add_bus(Bus::new("direct", ["A", "C"], false)).unwrap();
    catalogue.add_bus(Bus::new("local", ["A", "B", "C"], false)).unwrap();
    let router = TransportRouter::build(&catalogue, RoutingSettings::new(3, 60.0)).unwrap();

    let route = router.get_route("A", "C").unwrap();
    assert_eq!(
        route.items,
        vec![RouteItem::wait("A", 3.0), RouteItem::ride("local", 2, 2.0)]
    );
}

#[test]
fn asymmetric_distances_give_asymmetric_times() {
    let mut catalogue = catalogue(&["A", "B"]);
    catalogue.set_distance("A", "B", 3000).unwrap();
    catalogue.set_distance("B", "A", 6000).unwrap();
    catalogue.add_bus(Bus::new("7", ["A", "B"], false)).unwrap();
    let router = TransportRouter::build(&catalogue, RoutingSettings::new(0, 60.0)).unwrap();

    assert_eq!(router.get_route("A", "B").unwrap().total_time, 3.0);
    assert_eq!(router.get_route("B", "A").unwrap().total_time, 6.0);
}

#[test]
fn queries_can_run_from_many_threads() {
    let router = scenario();
    let router = &router;

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            handles.push(scope.spawn(move || router.get_route("A", "C").map(|r| r.total_time)));
        }
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(8.0));
        }
    });
}

#[test]
fn unknown_bus_stop_fails_build() {
    let mut catalogue = catalogue(&["A"]);
    catalogue.add_bus(Bus::new("9", ["A", "Missing"], true)).unwrap();

    let err = TransportRouter::build(&catalogue, RoutingSettings::default()).unwrap_err();
    assert!(matches!(err, BuildError::UnknownStop { .. }));
}

/// Minimum path weight by enumerating every simple path in the graph.
fn brute_force_min(graph: &DirectedWeightedGraph, from: VertexId, to: VertexId) -> Option<f64> {
    fn walk(
        graph: &DirectedWeightedGraph,
        vertex: VertexId,
        to: VertexId,
        weight: f64,
        visited: &mut [bool],
        best: &mut Option<f64>,
    ) {
        if vertex == to {
            *best = Some(best.map_or(weight, |b| b.min(weight)));
            return;
        }
        for &edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id).unwrap();
            if visited[edge.to.0] {
                continue;
            }
            visited[edge.to.0] = true;
            walk(graph, edge.to, to, weight + edge.weight, visited, best);
            visited[edge.to.0] = false;
        }
    }

    let mut visited = vec![false; graph.vertex_count()];
    visited[from.0] = true;
    let mut best = None;
    walk(graph, from, to, 0.0, &mut visited, &mut best);
    best
}

prop_compose! {
    /// Small random networks: up to five stops and three buses.
    pub(crate) fn small_network()(stop_count in 2usize..=5)(
        stop_count in Just(stop_count),
        distances in proptest::collection::vec(
            proptest::option::of(0u32..5000),
            stop_count * stop_count,
        ),
        buses in proptest::collection::vec(
            (proptest::collection::vec(0..stop_count, 0..=4), any::<bool>()),
            0..=3,
        ),
        wait in 0u32..=10,
        velocity in 10.0f64..80.0,
    ) -> (TransportCatalogue, RoutingSettings) {
        let names: Vec<String> = (0..stop_count).map(|i| format!("S{i}")).collect();
        let mut catalogue = TransportCatalogue::new();
        for name in &names {
            catalogue.add_stop(name.clone(), Coordinates::default()).unwrap();
        }
        for (idx, meters) in distances.into_iter().enumerate() {
            if let Some(meters) = meters {
                let (from, to) = (idx / stop_count, idx % stop_count);
                catalogue.set_distance(&names[from], &names[to], meters).unwrap();
            }
        }
        for (bus_idx, (stops, roundtrip)) in buses.into_iter().enumerate() {
            let stops: Vec<String> = stops.into_iter().map(|i| names[i].clone()).collect();
            catalogue.add_bus(Bus::new(format!("B{bus_idx}"), stops, roundtrip)).unwrap();
        }
        (catalogue, RoutingSettings::new(wait, velocity))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every answer matches the cheapest simple path, and no path means no answer.
    #[test]
    fn route_time_is_minimal((catalogue, settings) in small_network()) {
        let router = TransportRouter::build(&catalogue, settings).unwrap();
        let essentials = router.essentials();

        for (from, from_v) in essentials.stop_vertexes() {
            for (to, to_v) in essentials.stop_vertexes() {
                if from == to {
                    continue;
                }
                let expected = brute_force_min(router.graph(), from_v.terminal, to_v.terminal);
                match (router.get_route(from, to), expected) {
                    (Ok(route), Some(expected)) => {
                        prop_assert!((route.total_time - expected).abs() < 1e-9);
                    }
                    (Err(RouteError::NoPath { .. }), None) => {}
                    (actual, expected) => {
                        prop_assert!(false, "{from} → {to}: got {actual:?}, expected {expected:?}");
                    }
                }
            }
        }
    }

    /// Itineraries alternate wait and ride, start at the origin and add up.
    #[test]
    fn itineraries_are_well_formed((catalogue, settings) in small_network()) {
        let router = TransportRouter::build(&catalogue, settings).unwrap();
        let names: Vec<&str> = router
            .essentials()
            .stop_vertexes()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();

        for from in &names {
            for to in &names {
                let Ok(route) = router.get_route(from, to) else {
                    continue;
                };
                if from == to {
                    prop_assert!(route.items.is_empty());
                    continue;
                }

                prop_assert_eq!(route.items.len() % 2, 0);
                prop_assert_eq!(route.items[0].name(), *from);
                for pair in route.items.chunks(2) {
                    prop_assert!(pair[0].is_wait());
                    prop_assert_eq!(pair[0].time(), f64::from(settings.bus_wait_time));
                    prop_assert!(!pair[1].is_wait());
                    prop_assert!(pair[1].span_count() >= 1);
                }

                let sum: f64 = route.items.iter().map(RouteItem::time).sum();
                prop_assert!((sum - route.total_time).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn brute_force_agrees_on_scenario() {
    let router = scenario();
    let a = router.essentials().vertexes("A").unwrap();
    let c = router.essentials().vertexes("C").unwrap();

    let expected = brute_force_min(router.graph(), a.terminal, c.terminal).unwrap();
    assert_close(router.get_route("A", "C").unwrap().total_time, expected);
}
