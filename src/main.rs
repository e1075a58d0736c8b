use clap::Parser;
use date_commute::{
    sdk::config::OsrmConfig,
    sdk::geo::GeoPoint,
    sdk::itinerary::{CommuteStep, Itinerary},
    sdk::routing::{OsrmProvider, RouteResult, RoutingProvider},
    sdk::util::log::init_logging,
};
use serde::Serialize;
use std::{fs::File, io::Write};

/// A CLI tool to fetch and segment the commute route for the date itinerary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// [Optional] Commute step to resolve a map viewport for (0-based)
    #[arg(short, long)]
    step: Option<usize>,

    /// Output file for the fetched route data
    #[arg(short, long, default_value = "route.json")]
    output: String,

    /// Skip the walking route to the café
    #[arg(long)]
    skip_walk: bool,
}

#[derive(Serialize)]
struct RouteDump<'a> {
    steps: &'a [CommuteStep],
    driving: &'a RouteResult,
    walking: &'a [GeoPoint],
}

fn main() -> anyhow::Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // --- Dependency initialization ---
    let config = OsrmConfig::from_env();
    log::info!("Using route service at {}", config.base_url);
    let provider = OsrmProvider::new(config);
    let itinerary = Itinerary::default_trip();
    log::info!(
        "Planning the {} trip, pickup at {}, {} commute steps",
        itinerary.date,
        itinerary.pickup.format("%-I:%M %p"),
        itinerary.steps.len()
    );

    // --- Driving route, with the straight-line stand-in on failure ---
    let driving = match provider.driving_route(&itinerary.waypoints) {
        Ok(route) => route,
        Err(err) => {
            log::warn!("Route unavailable ({err}); falling back to a straight-line path");
            RouteResult::straight_line(&itinerary.waypoints)
        }
    };
    log::info!(
        "Driving route: {} points across {} legs",
        driving.full_coordinates.len(),
        driving.legs.len()
    );

    // --- Walking route from the restaurant to the café ---
    let walking = if cli.skip_walk {
        Vec::new()
    } else {
        match provider.walking_route(itinerary.destination, itinerary.cafe) {
            Ok(path) => path,
            Err(err) => {
                log::warn!("Walking route unavailable ({err}); leaving the path empty");
                Vec::new()
            }
        }
    };

    // --- Optional step viewport ---
    if let Some(step) = cli.step {
        match itinerary.resolve_bounds(step, &driving.legs) {
            Some(bounds) => log::info!(
                "Step {} viewport: ({:.6}, {:.6}) -> ({:.6}, {:.6})",
                step,
                bounds.sw.lat,
                bounds.sw.lng,
                bounds.ne.lat,
                bounds.ne.lng
            ),
            None => log::info!("Step {} needs no map focus", step),
        }
    }

    // --- Output ---
    let dump = RouteDump {
        steps: &itinerary.steps,
        driving: &driving,
        walking: &walking,
    };
    let json_output = serde_json::to_string_pretty(&dump)?;
    let mut file = File::create(&cli.output)?;
    file.write_all(json_output.as_bytes())?;
    log::info!("✅ Route data written to {}", cli.output);

    Ok(())
}
