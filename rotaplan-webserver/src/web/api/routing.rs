use super::*;

#[post("/optimize", data = "<request>")]
pub async fn post_optimize(
    geocoding: &State<GeoCoding>,
    request: JsonResult<'_, json::RouteOptimizationRequest>,
) -> Result<Vec<json::StopId>> {
    let request = request?.into_inner();
    if request.entregas.is_empty() {
        return Err(usecases::Error::NoDeliveries.into());
    }

    // The submitted order, kept as fallback in case planning dies.
    let fallback: Vec<json::StopId> = request.entregas.iter().map(|d| d.id.clone()).collect();

    let params = json::route_request(request);
    let geo = geocoding.gateway();
    // Geocoding blocks (sequential lookups with a mandatory delay), so
    // the whole planning step runs outside the async workers.
    let ordered =
        rocket::tokio::task::spawn_blocking(move || usecases::optimize_route(&*geo, params)).await;

    let ids = match ordered {
        Ok(ids) => ids.into_iter().map(Into::into).collect(),
        Err(err) => {
            error!("Route optimization failed, replying with the submitted order: {err}");
            fallback
        }
    };
    Ok(Json(ids))
}
