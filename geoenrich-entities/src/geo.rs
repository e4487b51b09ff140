use thiserror::Error;

/// A resolved geographical position in decimal degrees.
///
/// Both components are guaranteed to be finite. The absence of a
/// position is expressed with `Option<Coordinate>` and never
/// with a `(0.0, 0.0)` placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is not a finite number")]
    Latitude(f64),
    #[error("longitude {0} is not a finite number")]
    Longitude(f64),
}

impl Coordinate {
    pub fn try_from_lat_lon_deg(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() {
            return Err(CoordinateError::Latitude(lat));
        }
        if !lon.is_finite() {
            return Err(CoordinateError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lon(self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_finite_values() {
        let c = Coordinate::try_from_lat_lon_deg(59.33, 18.06).unwrap();
        assert_eq!(59.33, c.lat());
        assert_eq!(18.06, c.lon());
        assert!(Coordinate::try_from_lat_lon_deg(0.0, 0.0).is_ok());
    }

    #[test]
    fn reject_non_finite_values() {
        assert_eq!(
            Err(CoordinateError::Longitude(f64::INFINITY)),
            Coordinate::try_from_lat_lon_deg(1.0, f64::INFINITY)
        );
        assert!(matches!(
            Coordinate::try_from_lat_lon_deg(f64::NAN, 1.0),
            Err(CoordinateError::Latitude(_))
        ));
    }

    #[test]
    fn display_as_pair() {
        let c = Coordinate::try_from_lat_lon_deg(59.33, 18.06).unwrap();
        assert_eq!("(59.33, 18.06)", c.to_string());
    }
}
