//! Flight-pattern folder model.
//!
//! A folder is one flight-pattern instance within a mission. The
//! template-only defaults and the wayline-only execution fields never
//! coexist, so the two roles are separate types: [`TemplateFolder`] carries
//! inheritable defaults for its placemarks, [`WaylineFolder`] carries the
//! resolved execution parameters. The deriver maps one to the other.

use serde::{Deserialize, Serialize};

use super::action::ActionGroup;
use super::placemark::{
    TemplatePlacemark, WaylinePlacemark, WaypointHeadingParam, WaypointTurnMode,
};

/// Flight-pattern kind of a template folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateType {
    /// Waypoint-following route.
    Waypoint,
    /// Planar survey grid.
    Mapping2d,
    /// Oblique survey grid.
    Mapping3d,
    /// Corridor survey along a path.
    MappingStrip,
}

/// Whether gimbal pitch is commanded per waypoint or steered manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GimbalPitchMode {
    Manual,
    UsePointSetting,
}

/// Horizontal datum of template geometry. The format admits exactly one
/// value today; the element still appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateMode {
    #[serde(rename = "WGS84")]
    Wgs84,
}

/// Vertical reference for template heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightMode {
    #[serde(rename = "EGM96")]
    Egm96,
    RelativeToStartPoint,
    AboveGroundLevel,
    RealTimeFollowSurface,
}

/// Vertical reference for wayline execute heights. The deriver always sets
/// the WGS84 ellipsoid reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteHeightMode {
    #[serde(rename = "WGS84")]
    Wgs84,
    #[serde(rename = "relativeToStartPoint")]
    RelativeToStartPoint,
    #[serde(rename = "realTimeFollowSurface")]
    RealTimeFollowSurface,
}

/// Template coordinate-system block (`wpml:waylineCoordinateSysParam`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaylineCoordinateSysParam {
    #[serde(rename = "wpml:coordinateMode")]
    pub coordinate_mode: CoordinateMode,
    #[serde(rename = "wpml:heightMode")]
    pub height_mode: HeightMode,
}

/// Payload focus behavior during capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusMode {
    /// Focus once at the first waypoint and hold.
    FirstPoint,
    /// Use the payload's own custom focus settings.
    Custom,
}

/// Payload-capture parameters attached to a template folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadParam {
    #[serde(rename = "wpml:payloadPositionIndex")]
    pub payload_position_index: i32,
    #[serde(
        rename = "wpml:focusMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub focus_mode: Option<FocusMode>,
    /// Comma-separated lens list, e.g. `"wide,zoom"`.
    #[serde(
        rename = "wpml:imageFormat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_format: Option<String>,
}

/// One flight pattern in a template document, carrying the defaults its
/// placemarks may inherit.
///
/// The defaults are optional because the wire format allows their absence; a
/// placemark inheriting a default the folder never set is an
/// `InvalidTemplate` error at derivation time, not a silent zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateFolder {
    pub template_id: Option<u32>,
    pub template_type: Option<TemplateType>,
    pub coordinate_sys: Option<WaylineCoordinateSysParam>,
    /// Default flight speed in m/s.
    pub auto_flight_speed: Option<f64>,
    /// Default height relative to the takeoff point, in meters.
    pub global_height: Option<f64>,
    pub gimbal_pitch_mode: Option<GimbalPitchMode>,
    pub global_heading: Option<WaypointHeadingParam>,
    /// Default turn mode. Note there is no folder-level damping distance.
    pub global_turn_mode: Option<WaypointTurnMode>,
    pub global_use_straight_line: Option<bool>,
    pub payload_param: Option<PayloadParam>,
    /// Precomputed route length in meters, when the planner supplied one.
    pub distance: Option<f64>,
    /// Precomputed flight time in seconds, when the planner supplied one.
    pub duration: Option<f64>,
    pub placemarks: Vec<TemplatePlacemark>,
}

/// One executable wayline in a derived document. Only execution-relevant
/// fields exist; the template defaults have no counterpart here.
#[derive(Debug, Clone, PartialEq)]
pub struct WaylineFolder {
    pub template_id: Option<u32>,
    /// Zero-based position of this wayline in the folder sequence.
    pub wayline_id: u32,
    pub execute_height_mode: ExecuteHeightMode,
    /// Wayline cruise speed in m/s.
    pub auto_flight_speed: f64,
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    /// Actions run once at wayline start, when present.
    pub start_action_group: Option<ActionGroup>,
    pub placemarks: Vec<WaylinePlacemark>,
}
