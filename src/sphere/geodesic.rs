//! Direct and inverse geodesic problems on the unit sphere
//!
//! Points are addressed by latitude and longitude in radians. For layout work
//! the latitude of a reference point is its `up` offset from the grip center
//! and the longitude is its `over` offset, both taken as arcs.
//!
//! Bearings are measured at the starting point from the local meridian
//! (toward increasing latitude) and are positive toward increasing longitude.
//! Both problems are solved with the point's tangent frame ([`SurfacePoint::north`],
//! [`SurfacePoint::east`]) rather than the lat/lon closed forms, so they stay
//! well conditioned near the poles.
//!
//! ## Poles
//!
//! On a pole every meridian meets and "north" has no unique direction. The
//! frame there is still built from the point's own longitude: north points
//! along the meridian at `lon + π`, east along `lon + π/2`. Bearings from
//! and destinations out of a pole are therefore deterministic, and the two
//! problems stay inverse to each other.

use super::{asin_clamped, rad_from_inch};
use crate::constants::POLE_EPSILON;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A point on the unit sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Latitude in radians
    pub lat: f64,
    /// Longitude in radians
    pub lon: f64,
}

impl SurfacePoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        SurfacePoint { lat, lon }
    }

    /// Point reached by an `over`/`up` offset in inches from the grip center
    pub fn from_offsets(over: f64, up: f64) -> Self {
        SurfacePoint {
            lat: rad_from_inch(up),
            lon: rad_from_inch(over),
        }
    }

    /// Point in the direction of `v`, which need not be normalized
    pub fn from_unit_vector(v: &Vector3<f64>) -> Self {
        SurfacePoint {
            lat: v.y.atan2(v.x.hypot(v.z)),
            lon: v.x.atan2(v.z),
        }
    }

    /// True when the point sits on a pole, where the meridian is not unique
    pub fn is_polar(&self) -> bool {
        self.lat.cos().abs() < POLE_EPSILON
    }

    /// Unit tangent pointing toward increasing latitude
    pub fn north(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        Vector3::new(-sin_lat * sin_lon, cos_lat, -sin_lat * cos_lon)
    }

    /// Unit tangent pointing toward increasing longitude
    pub fn east(&self) -> Vector3<f64> {
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        Vector3::new(cos_lon, 0.0, -sin_lon)
    }

    /// Solves the direct problem: the point `distance` radians away along `bearing`
    pub fn destination(&self, distance: f64, bearing: f64) -> SurfacePoint {
        if self.is_polar() {
            log::debug!("destination from a pole at lat {}: bearing taken from lon {}", self.lat, self.lon);
        }
        let heading = self.north() * bearing.cos() + self.east() * bearing.sin();
        let end = self.to_unit_vector() * distance.cos() + heading * distance.sin();
        SurfacePoint::from_unit_vector(&end)
    }

    /// Central angle in radians to `other` (haversine form)
    pub fn central_angle_to(&self, other: &SurfacePoint) -> f64 {
        let half_dlat = ((other.lat - self.lat) / 2.0).sin();
        let half_dlon = ((other.lon - self.lon) / 2.0).sin();
        let h = half_dlat * half_dlat + self.lat.cos() * other.lat.cos() * half_dlon * half_dlon;
        2.0 * asin_clamped(h.sqrt())
    }

    /// Initial bearing in radians from this point toward `other`, in `(-π, π]`
    ///
    /// Away from the poles this is the usual
    /// `atan2(sin Δlon·cos lat2, cos lat1·sin lat2 − sin lat1·cos lat2·cos Δlon)`.
    pub fn bearing_to(&self, other: &SurfacePoint) -> f64 {
        if self.is_polar() {
            log::debug!("bearing from a pole at lat {}: measured from lon {}", self.lat, self.lon);
        }
        let target = other.to_unit_vector();
        target.dot(&self.east()).atan2(target.dot(&self.north()))
    }

    /// Unit vector for this point with x right, y up and z toward the grip center
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        Vector3::new(cos_lat * sin_lon, sin_lat, cos_lat * cos_lon)
    }
}
