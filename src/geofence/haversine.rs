use crate::domain::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points on a sphere of radius [`EARTH_RADIUS_M`].
pub fn haversine_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h slightly above 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    const TOLERANCE_M: f64 = 1e-6;

    #[rstest]
    #[case(GeoPoint::new(0.0, 0.0))]
    #[case(GeoPoint::new(40.758, -73.9855))]
    #[case(GeoPoint::new(-90.0, 180.0))]
    #[case(GeoPoint::new(51.8615899, 4.3580323))]
    fn distance_to_itself_is_zero(#[case] point: GeoPoint) {
        assert_eq!(haversine_meters(&point, &point), 0.0);
    }

    #[rstest]
    #[case(GeoPoint::new(40.758, -73.9855), GeoPoint::new(40.7505, -73.9934))]
    #[case(GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(51.5074, -0.1278))]
    #[case(GeoPoint::new(89.9, 10.0), GeoPoint::new(-89.9, -170.0))]
    #[case(GeoPoint::new(0.0, 179.9), GeoPoint::new(0.0, -179.9))]
    fn distance_is_symmetric_and_non_negative(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        let there = haversine_meters(&a, &b);
        let back = haversine_meters(&b, &a);

        assert!(there >= 0.0);
        assert!((there - back).abs() < TOLERANCE_M, "{} != {}", there, back);
    }

    #[test]
    fn one_hundredth_degree_of_latitude_is_about_1112_meters() {
        let distance = haversine_meters(&GeoPoint::new(40.758, -73.9855), &GeoPoint::new(40.768, -73.9855));

        let expected = EARTH_RADIUS_M * 0.01_f64.to_radians();
        assert!((distance - expected).abs() < 1e-3, "got {}", distance);
        assert!((1100.0..1125.0).contains(&distance));
    }

    #[test]
    fn crossing_the_antimeridian_takes_the_short_way() {
        let distance = haversine_meters(&GeoPoint::new(0.0, 179.5), &GeoPoint::new(0.0, -179.5));

        let expected = EARTH_RADIUS_M * 1.0_f64.to_radians();
        assert!((distance - expected).abs() < 1e-3, "got {}", distance);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let distance = haversine_meters(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 180.0));
        assert!((distance - EARTH_RADIUS_M * PI).abs() < 1e-3, "got {}", distance);
    }
}
