//! Demo city definition.
//!
//! Nine locations and twelve roads, loosely shaped like a harbor city: the
//! Downtown hub connects most districts, Riverside offers a shortcut toward
//! the Harbor, and the Island has no roads at all.

use traffic_graph::Topology;

/// Build the demo city topology.
pub fn city_topology() -> Topology {
    let mut topo = Topology::new();

    topo.location("Airport")
        .location("Downtown")
        .location("Harbor")
        .location("Hospital")
        .location("Island") // ferry-only, deliberately unreachable by road
        .location("Mall")
        .location("Riverside")
        .location("Stadium")
        .location("University");

    topo.road("Airport", "Mall", 15)
        .road("Airport", "Downtown", 25)
        .road("Mall", "Downtown", 12)
        .road("Mall", "University", 18)
        .road("Downtown", "University", 10)
        .road("Downtown", "Hospital", 8)
        .road("Downtown", "Riverside", 11)
        .road("Downtown", "Harbor", 20)
        .road("Hospital", "Stadium", 9)
        .road("University", "Stadium", 14)
        .road("Riverside", "Harbor", 7)
        .road("Stadium", "Harbor", 16);

    topo
}
