use super::*;
use rotaplan_entities::address::Address;

#[get("/geocode?<q>")]
pub async fn get_geocode(
    geocoding: &State<GeoCoding>,
    q: Option<String>,
) -> Result<json::GeocodeResponse> {
    let q = q
        .filter(|q| !q.is_empty())
        .ok_or(usecases::Error::MissingAddress)?;
    // Address templates with an unfilled middle segment arrive as
    // "street, , city".
    let addr = Address::new(q.replace(", ,", ","));

    let geo = geocoding.gateway();
    let pos = rocket::tokio::task::spawn_blocking(move || usecases::geocode_address(&*geo, &addr))
        .await
        .unwrap_or_default();
    Ok(Json(json::geocode_response(pos)))
}
