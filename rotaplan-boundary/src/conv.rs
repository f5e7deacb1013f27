use super::*;
use rotaplan_entities as e;

impl From<StopId> for e::stop::StopId {
    fn from(from: StopId) -> Self {
        match from {
            StopId::Text(id) => Self::Text(id),
            StopId::Number(id) => Self::Number(id),
        }
    }
}

impl From<e::stop::StopId> for StopId {
    fn from(from: e::stop::StopId) -> Self {
        match from {
            e::stop::StopId::Text(id) => Self::Text(id),
            e::stop::StopId::Number(id) => Self::Number(id),
        }
    }
}

/// Whether a wire coordinate value counts as supplied at all.
///
/// The legacy API treats `null`, `0`, `""` and `false` as absent, so a
/// zero coordinate falls through to the next field alias or to geocoding.
fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn first_usable<'a>(primary: &'a Option<Value>, fallback: &'a Option<Value>) -> Option<&'a Value> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .find(|value| is_usable(value))
}

/// Numeric coercion of a wire coordinate value. Numbers and numeric
/// strings pass; anything else is `None`.
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// The caller-supplied position of a delivery, if any.
///
/// `None` means no usable coordinate pair was supplied and the address
/// has to be geocoded. A supplied pair that fails numeric conversion
/// coerces to `Unresolved` instead of failing the request.
pub fn supplied_position(delivery: &Delivery) -> Option<e::geo::Position> {
    let lat = first_usable(&delivery.latitude, &delivery.lat)?;
    let lng = first_usable(&delivery.longitude, &delivery.lng)?;
    let pos = match (as_f64(lat), as_f64(lng)) {
        (Some(lat), Some(lng)) => e::geo::Position::from_lat_lng(lat, lng),
        _ => e::geo::Position::Unresolved,
    };
    Some(pos)
}

/// The caller-supplied origin, if both coordinates are usable.
pub fn origin_coordinates(request: &RouteOptimizationRequest) -> Option<e::geo::Coordinate> {
    let lat = request.origin_lat.as_ref().filter(|v| is_usable(v))?;
    let lng = request.origin_lng.as_ref().filter(|v| is_usable(v))?;
    Some(e::geo::Coordinate::new(as_f64(lat)?, as_f64(lng)?))
}

pub fn delivery_address(delivery: &Delivery) -> e::address::Address {
    e::address::Address {
        street: delivery.endereco.clone(),
        district: delivery.bairro.clone().filter(|b| !b.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::geo::{Coordinate, Position};
    use serde_json::json;

    fn delivery() -> Delivery {
        Delivery {
            id: StopId::Text("a".into()),
            endereco: "Rua A".into(),
            bairro: None,
            latitude: None,
            lat: None,
            longitude: None,
            lng: None,
        }
    }

    #[test]
    fn prefers_long_coordinate_field_names() {
        let mut d = delivery();
        d.latitude = Some(json!(1.0));
        d.lat = Some(json!(9.9));
        d.longitude = Some(json!(2.0));
        assert_eq!(
            supplied_position(&d),
            Some(Position::Resolved(Coordinate::new(1.0, 2.0)))
        );
    }

    #[test]
    fn falls_back_to_short_field_names() {
        let mut d = delivery();
        d.lat = Some(json!(1.0));
        d.lng = Some(json!(2.0));
        assert_eq!(
            supplied_position(&d),
            Some(Position::Resolved(Coordinate::new(1.0, 2.0)))
        );
    }

    #[test]
    fn zero_coordinates_count_as_absent() {
        let mut d = delivery();
        d.latitude = Some(json!(0));
        d.longitude = Some(json!(2.0));
        assert_eq!(supplied_position(&d), None);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let mut d = delivery();
        d.latitude = Some(json!("-23.55"));
        d.longitude = Some(json!("-46.63"));
        assert_eq!(
            supplied_position(&d),
            Some(Position::Resolved(Coordinate::new(-23.55, -46.63)))
        );
    }

    #[test]
    fn garbage_coordinates_become_unresolved() {
        let mut d = delivery();
        d.latitude = Some(json!("abc"));
        d.longitude = Some(json!(2.0));
        assert_eq!(supplied_position(&d), Some(Position::Unresolved));
    }

    #[test]
    fn origin_requires_both_coordinates() {
        let request = RouteOptimizationRequest {
            entregas: vec![],
            origin: None,
            origin_lat: Some(json!(1.0)),
            origin_lng: None,
        };
        assert_eq!(origin_coordinates(&request), None);
    }

    #[test]
    fn origin_accepts_a_usable_pair() {
        let request = RouteOptimizationRequest {
            entregas: vec![],
            origin: None,
            origin_lat: Some(json!(-23.55)),
            origin_lng: Some(json!("-46.63")),
        };
        assert_eq!(
            origin_coordinates(&request),
            Some(Coordinate::new(-23.55, -46.63))
        );
    }

    #[test]
    fn ids_convert_verbatim() {
        let text: e::stop::StopId = StopId::Text("abc".into()).into();
        assert_eq!(text, e::stop::StopId::Text("abc".into()));
        let number: e::stop::StopId = StopId::Number(42.into()).into();
        assert_eq!(number, e::stop::StopId::Number(42.into()));
    }

    #[test]
    fn ids_deserialize_as_strings_or_numbers() {
        assert!(matches!(
            serde_json::from_str::<StopId>("42").unwrap(),
            StopId::Number(_)
        ));
        assert!(matches!(
            serde_json::from_str::<StopId>(r#""42""#).unwrap(),
            StopId::Text(_)
        ));
    }

    #[test]
    fn blank_district_is_dropped() {
        let mut d = delivery();
        d.bairro = Some("  ".into());
        assert_eq!(delivery_address(&d).district, None);
        d.bairro = Some("Centro".into());
        assert_eq!(delivery_address(&d).district, Some("Centro".into()));
    }
}
