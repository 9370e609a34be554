// route_comparator.rs
//
// Compares candidate routes by total travel time. The comparison never
// touches the congestion model: total time is the plain sum of per-road
// `time` fields.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::PredictError;
use crate::route_analyzer::route_aggregator::total_route_time;
use crate::shared_data::RouteMap;

/// Travel-time summary for one candidate route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub total_time: f64,
    pub number_of_roads: usize,
}

/// The route singled out as fastest.
#[derive(Debug, Clone, Serialize)]
pub struct OptimalRoute {
    pub name: String,
    pub total_time: f64,
    pub info: String,
}

#[derive(Debug, Clone)]
pub struct RouteComparison {
    /// Summaries in the order the routes arrived.
    pub route_details: IndexMap<String, RouteSummary>,
    pub optimal_route: OptimalRoute,
}

/// Summarizes every route and picks the one with the strictly smallest
/// total time. Routes are scanned in input order and only a strict
/// improvement replaces the current best, so ties keep the earliest-seen
/// route.
pub fn compare(routes: &RouteMap) -> Result<RouteComparison, PredictError> {
    if routes.is_empty() {
        return Err(PredictError::InvalidInput(
            "no routes provided to compare".to_string(),
        ));
    }

    let mut route_details = IndexMap::new();
    let mut best: Option<(&str, f64, usize)> = None;

    for (name, roads) in routes {
        let total_time = total_route_time(roads);
        route_details.insert(
            name.clone(),
            RouteSummary {
                total_time,
                number_of_roads: roads.len(),
            },
        );
        let improves = match best {
            None => true,
            Some((_, best_time, _)) => total_time < best_time,
        };
        if improves {
            best = Some((name.as_str(), total_time, roads.len()));
        }
    }

    let (name, total_time, number_of_roads) = best.ok_or_else(|| {
        PredictError::InvalidInput("no routes provided to compare".to_string())
    })?;

    let optimal_route = OptimalRoute {
        name: name.to_string(),
        total_time,
        info: format!(
            "{} is the fastest option with a total travel time of {} across {} road(s)",
            name, total_time, number_of_roads
        ),
    };

    Ok(RouteComparison {
        route_details,
        optimal_route,
    })
}
