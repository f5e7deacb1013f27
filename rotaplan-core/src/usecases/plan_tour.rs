use super::*;

/// Builds the visiting order: a greedy nearest-neighbor tour over all
/// resolved stops, followed by the unresolved stops in input order.
///
/// The scan is O(n²) in the number of resolved stops, which is fine for
/// the few dozen stops of a delivery run.
pub fn plan_tour(origin: Coordinate, stops: Vec<Stop>) -> Vec<StopId> {
    let (resolved, unresolved): (Vec<_>, Vec<_>) =
        stops.into_iter().partition(|stop| stop.pos.is_resolved());

    let mut unvisited: Vec<(StopId, Coordinate)> = resolved
        .into_iter()
        .filter_map(|stop| stop.pos.resolved().map(|coords| (stop.id, coords)))
        .collect();

    let mut order = Vec::with_capacity(unvisited.len() + unresolved.len());
    let mut current = origin;
    while !unvisited.is_empty() {
        let mut nearest = 0;
        let mut min_dist = f64::INFINITY;
        // Ties keep the first candidate, i.e. input order.
        for (i, (_, coords)) in unvisited.iter().enumerate() {
            let dist = distance_km(&current, coords);
            if dist < min_dist {
                min_dist = dist;
                nearest = i;
            }
        }
        let (id, coords) = unvisited.remove(nearest);
        log::debug!("Next stop: {id} ({min_dist:.2} km)");
        current = coords;
        order.push(id);
    }

    for stop in unresolved {
        log::debug!("Appending unresolved stop {} at the end", stop.id);
        order.push(stop.id);
    }
    order
}
