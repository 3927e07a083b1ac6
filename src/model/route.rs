//! Route request and result types.

use std::fmt;
use std::str::FromStr;

use geo::{LineString, Point};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Travel mode of a routing request.
///
/// Only `Driving` routes over the road network; the other modes always take
/// the synthetic fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Transit,
}

impl TravelMode {
    /// Average speed for the mode, in meters per second.
    pub fn speed_m_s(self) -> f64 {
        match self {
            TravelMode::Driving => 40.0 * 1000.0 / 3600.0,
            TravelMode::Walking => 4.0 * 1000.0 / 3600.0,
            TravelMode::Transit => 25.0 * 1000.0 / 3600.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "transit" => Ok(TravelMode::Transit),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named coordinate supplied by the caller for start, end or waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub name: String,
    /// Position as (longitude, latitude), WGS84
    pub lnglat: Point<f64>,
}

impl RoutePoint {
    pub fn new(name: impl Into<String>, lng: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            lnglat: Point::new(lng, lat),
        }
    }
}

/// One instruction segment of a computed route.
///
/// Consecutive steps share exactly their boundary key point, so chaining all
/// step paths (dropping the duplicated boundaries) reproduces the full route
/// path.
#[derive(Debug, Clone)]
pub struct Step {
    pub instruction: String,
    pub distance_m: u32,
    pub duration_s: u32,
    pub path: LineString<f64>,
}

/// A computed route. Immutable once assembled; owned by the caller.
#[derive(Debug, Clone)]
pub struct Route {
    /// Pseudo-random identity, unique per process run
    pub id: String,
    /// Display name derived from the start and end names
    pub name: String,
    /// Total distance in meters, rounded
    pub distance_m: u32,
    /// Total duration in seconds, rounded
    pub duration_s: u32,
    pub mode: TravelMode,
    /// Start, waypoints and end, in travel order
    pub points: Vec<RoutePoint>,
    /// Full resolved path
    pub path: LineString<f64>,
    pub steps: Vec<Step>,
}

/// Parameters of one routing request.
///
/// `start` and `end` are optional; a request missing either is rejected
/// with a precise input error before any computation begins.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    pub start: Option<RoutePoint>,
    pub end: Option<RoutePoint>,
    pub waypoints: Vec<RoutePoint>,
    pub mode: TravelMode,
}

impl RouteRequest {
    pub fn new(start: RoutePoint, end: RoutePoint) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            waypoints: Vec::new(),
            mode: TravelMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_waypoints(mut self, waypoints: Vec<RoutePoint>) -> Self {
        self.waypoints = waypoints;
        self
    }
}
