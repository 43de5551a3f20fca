//! cityroute — demo app for the traffic routing engine.
//!
//! Builds a nine-location city, answers a few routing queries, then
//! simulates a congestion spike on one road and shows the detour the
//! engine finds around it.
//!
//! Run with `RUST_LOG=traffic_gateway=debug` to watch the gateway handle
//! every query and update.

mod network;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use traffic_gateway::RouteGateway;

use network::city_topology;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "traffic_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== cityroute — congestion-aware route finder ===");
    println!();

    // 1. Build the city and open the gateway.
    let gateway = RouteGateway::new(&city_topology())?;
    println!(
        "City map: {} locations, {} roads",
        gateway.locations().len(),
        gateway.edges().len()
    );
    println!();

    // 2. Road inventory with current travel times.
    println!("Roads:");
    for listing in gateway.edges() {
        println!("  {listing}");
    }
    println!();

    // 3. A few routing queries.
    println!("Routes under normal traffic:");
    for (from, to) in [
        ("Airport", "Harbor"),
        ("Hospital", "Mall"),
        ("Riverside", "University"),
        ("Airport", "Island"),
    ] {
        report(&gateway, from, to)?;
    }
    println!();

    // 4. Congestion spike: roadworks on Downtown–Riverside.
    println!("Roadworks: Downtown ↔ Riverside now takes 60 min");
    gateway.update_weight("Downtown", "Riverside", 60)?;
    report(&gateway, "Airport", "Harbor")?;
    println!();

    // 5. Back to normal.
    gateway.reset_weights();
    println!("Traffic back to normal");
    report(&gateway, "Airport", "Harbor")?;
    println!();

    // 6. Unknown locations are rejected, not routed.
    if let Err(e) = gateway.query_route("Airport", "Atlantis") {
        println!("Rejected query: {e}");
    }

    Ok(())
}

fn report(gateway: &RouteGateway, from: &str, to: &str) -> Result<()> {
    match gateway.query_route(from, to)? {
        Some(itinerary) => println!("  {itinerary}"),
        None => println!("  {from} → {to}: no route"),
    }
    Ok(())
}
