//! Waypoint (placemark) model.
//!
//! Placemarks exist in two shapes mirroring the two document kinds:
//! [`TemplatePlacemark`], where most attributes are [`Inheritable`] and may
//! defer to folder defaults, and [`WaylinePlacemark`], where every attribute
//! is fully resolved. The wayline deriver is the only way to get from one to
//! the other.

use serde::{Deserialize, Serialize};

use super::action::ActionGroup;
use super::inherit::Inheritable;

/// `wpml:workType` value for wayline placemarks; the vendor vocabulary
/// treats this as an opaque small integer and executable waylines always
/// carry the none value.
pub const WORK_TYPE_NONE: u32 = 0;

/// Geographic position of a placemark. Serialized inside
/// `<Point><coordinates>` as `"{lng:.6f},{lat:.6f}"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

/// Explicit per-point height pair used when a template placemark does not
/// inherit the folder's global height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHeight {
    /// Height above the WGS84 ellipsoid, in meters.
    pub ellipsoid_height: f64,
    /// Height relative to the takeoff point, in meters.
    pub height: f64,
}

/// How the aircraft nose is steered at and between waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaypointHeadingMode {
    /// Nose follows the flight direction along the wayline.
    FollowWayline,
    /// Pilot steers the nose manually during execution.
    Manually,
    /// Nose locked to `waypoint_heading_angle`.
    Fixed,
    /// Interpolate heading between this waypoint's angle and the next one's.
    SmoothTransition,
    /// Nose tracks the point of interest.
    #[serde(rename = "towardPOI")]
    TowardPoi,
}

/// Rotation direction used when the heading change can go either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaypointHeadingPathMode {
    Clockwise,
    CounterClockwise,
    /// Rotate along the shorter arc.
    FollowBadArc,
}

/// Point of interest for [`WaypointHeadingMode::TowardPoi`]. Serialized as
/// `"{lat},{lng},{alt}"` text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoiPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Serialize for PoiPoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!(
            "{},{},{}",
            self.latitude, self.longitude, self.altitude
        ))
    }
}

impl<'de> Deserialize<'de> for PoiPoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut parts = text.split(',').map(str::trim);
        let mut next = |name: &str| {
            parts
                .next()
                .ok_or_else(|| serde::de::Error::custom(format!("poi point missing {name}")))?
                .parse::<f64>()
                .map_err(|e| serde::de::Error::custom(format!("poi point {name}: {e}")))
        };
        Ok(PoiPoint {
            latitude: next("latitude")?,
            longitude: next("longitude")?,
            altitude: next("altitude")?,
        })
    }
}

/// Heading-control parameters, used both as a folder default and as a
/// per-placemark value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaypointHeadingParam {
    #[serde(rename = "wpml:waypointHeadingMode")]
    pub waypoint_heading_mode: WaypointHeadingMode,
    /// Target heading in degrees; meaningful for the fixed and
    /// smooth-transition modes.
    #[serde(
        rename = "wpml:waypointHeadingAngle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_heading_angle: Option<f64>,
    #[serde(
        rename = "wpml:waypointPoiPoint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_poi_point: Option<PoiPoint>,
    #[serde(rename = "wpml:waypointHeadingPathMode")]
    pub waypoint_heading_path_mode: WaypointHeadingPathMode,
}

impl WaypointHeadingParam {
    /// The follow-the-wayline default used by flight-pattern profiles.
    pub fn follow_wayline() -> Self {
        WaypointHeadingParam {
            waypoint_heading_mode: WaypointHeadingMode::FollowWayline,
            waypoint_heading_angle: None,
            waypoint_poi_point: None,
            waypoint_heading_path_mode: WaypointHeadingPathMode::FollowBadArc,
        }
    }
}

/// How the aircraft passes through a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaypointTurnMode {
    /// Cut the corner, turning early with the configured damping distance.
    CoordinateTurn,
    /// Fly to the point and stop; the trajectory is not curvature-continuous.
    ToPointAndStopWithDiscontinuityCurvature,
    /// Fly to the point and stop with a curvature-continuous trajectory.
    ToPointAndStopWithContinuityCurvature,
    /// Fly through the point with a curvature-continuous trajectory.
    ToPointAndPassWithContinuityCurvature,
}

/// Turn mode plus optional damping distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaypointTurnParam {
    #[serde(rename = "wpml:waypointTurnMode")]
    pub waypoint_turn_mode: WaypointTurnMode,
    /// Distance before the waypoint at which the turn begins, in meters.
    #[serde(
        rename = "wpml:waypointTurnDampingDist",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_turn_damping_dist: Option<f64>,
}

/// Manual gimbal attitude at a waypoint, only meaningful when the folder's
/// gimbal pitch mode is manual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaypointGimbalHeadingParam {
    #[serde(rename = "wpml:waypointGimbalPitchAngle")]
    pub waypoint_gimbal_pitch_angle: f64,
    #[serde(rename = "wpml:waypointGimbalYawAngle")]
    pub waypoint_gimbal_yaw_angle: f64,
}

impl WaypointGimbalHeadingParam {
    /// Zero attitude, attached by the deriver under manual gimbal pitch mode.
    pub fn zeroed() -> Self {
        WaypointGimbalHeadingParam {
            waypoint_gimbal_pitch_angle: 0.0,
            waypoint_gimbal_yaw_angle: 0.0,
        }
    }
}

/// One authoring-time waypoint.
///
/// `index` is the placemark's zero-based position within its folder; the
/// folder builder assigns it at append time and nothing reorders placemarks
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePlacemark {
    pub point: Point,
    pub index: u32,
    pub height: Inheritable<PointHeight>,
    /// Speed in m/s when explicit.
    pub speed: Inheritable<f64>,
    pub heading: Inheritable<WaypointHeadingParam>,
    pub turn: Inheritable<WaypointTurnParam>,
    /// Damping distance applied when `turn` is inherited. The folder default
    /// carries only a turn mode, so an inherited turn takes its damping
    /// distance from here (or zero), never from the folder.
    pub turn_damping_dist: Option<f64>,
    /// Straight-line marker. Unlike the other inheritable attributes this is
    /// the marker itself: `Some(true)` inherits the folder's straight-line
    /// flag at derivation time, anything else clears the field on the
    /// derived placemark.
    pub use_straight_line: Option<bool>,
    /// Gimbal pitch in degrees at this point, under per-point gimbal modes.
    pub gimbal_pitch_angle: Option<f64>,
    pub is_risky: bool,
    pub work_type: Option<u32>,
    pub gimbal_heading: Option<WaypointGimbalHeadingParam>,
    pub action_group: Option<ActionGroup>,
}

impl TemplatePlacemark {
    /// A placemark at `(lng, lat)` with every inherit-capable attribute
    /// deferring to the folder default and the risk flag cleared.
    pub fn at(longitude: f64, latitude: f64) -> Self {
        TemplatePlacemark {
            point: Point {
                longitude,
                latitude,
            },
            index: 0,
            height: Inheritable::Inherit,
            speed: Inheritable::Inherit,
            heading: Inheritable::Inherit,
            turn: Inheritable::Inherit,
            turn_damping_dist: None,
            use_straight_line: Some(true),
            gimbal_pitch_angle: None,
            is_risky: false,
            work_type: None,
            gimbal_heading: None,
            action_group: None,
        }
    }
}

/// One execution-time waypoint: every attribute resolved, no inherit markers.
#[derive(Debug, Clone, PartialEq)]
pub struct WaylinePlacemark {
    pub point: Point,
    pub index: u32,
    /// Resolved flight height in meters, relative to the folder's
    /// execute-height reference.
    pub execute_height: f64,
    /// Resolved speed in m/s.
    pub waypoint_speed: f64,
    pub heading: WaypointHeadingParam,
    pub turn: WaypointTurnParam,
    pub use_straight_line: Option<bool>,
    pub gimbal_pitch_angle: Option<f64>,
    pub gimbal_heading: Option<WaypointGimbalHeadingParam>,
    pub is_risky: bool,
    pub work_type: u32,
    pub action_group: Option<ActionGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placemark_inherits_everything() {
        let pm = TemplatePlacemark::at(117.1323, 36.6669);
        assert!(pm.height.is_inherit());
        assert!(pm.speed.is_inherit());
        assert!(pm.heading.is_inherit());
        assert!(pm.turn.is_inherit());
        assert_eq!(pm.use_straight_line, Some(true));
        assert!(!pm.is_risky);
        assert_eq!(pm.turn_damping_dist, None);
        assert_eq!(pm.point.longitude, 117.1323);
        assert_eq!(pm.point.latitude, 36.6669);
    }

    #[test]
    fn heading_param_round_trips_through_xml() {
        let param = WaypointHeadingParam {
            waypoint_heading_mode: WaypointHeadingMode::TowardPoi,
            waypoint_heading_angle: Some(45.0),
            waypoint_poi_point: Some(PoiPoint {
                latitude: 36.6,
                longitude: 117.1,
                altitude: 30.0,
            }),
            waypoint_heading_path_mode: WaypointHeadingPathMode::CounterClockwise,
        };
        let xml =
            quick_xml::se::to_string_with_root("wpml:waypointHeadingParam", &param).unwrap();
        assert!(xml.contains("<wpml:waypointHeadingMode>towardPOI</wpml:waypointHeadingMode>"));
        assert!(xml.contains("<wpml:waypointPoiPoint>36.6,117.1,30</wpml:waypointPoiPoint>"));
        assert!(xml.contains(
            "<wpml:waypointHeadingPathMode>counterClockwise</wpml:waypointHeadingPathMode>"
        ));
        let back: WaypointHeadingParam = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(back, param);
    }

    #[test]
    fn turn_param_omits_unset_damping() {
        let param = WaypointTurnParam {
            waypoint_turn_mode: WaypointTurnMode::ToPointAndStopWithDiscontinuityCurvature,
            waypoint_turn_damping_dist: None,
        };
        let xml = quick_xml::se::to_string_with_root("wpml:waypointTurnParam", &param).unwrap();
        assert!(xml.contains(
            "<wpml:waypointTurnMode>toPointAndStopWithDiscontinuityCurvature</wpml:waypointTurnMode>"
        ));
        assert!(!xml.contains("waypointTurnDampingDist"));
    }
}
