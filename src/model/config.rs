//! Mission-wide configuration model.
//!
//! [`MissionConfig`] is the `wpml:missionConfig` block shared verbatim by the
//! template document and the derived wayline document. Unlike folders and
//! placemarks it has no template/wayline split, so the same struct is used
//! in-memory and on the wire; element names carry the `wpml:` prefix via
//! serde renames.

use serde::{Deserialize, Serialize};

/// How the aircraft approaches the first waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlyToWaylineMode {
    /// Climb to the takeoff security height first, then fly to the first
    /// waypoint.
    Safely,
    /// Fly directly toward the first waypoint, climbing en route.
    PointToPoint,
}

/// What the aircraft does after the last waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinishAction {
    GoHome,
    NoAction,
    AutoLand,
    GotoFirstWaypoint,
}

/// Whether the mission continues when the RC link is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RcLostBehavior {
    /// Keep executing the mission.
    GoContinue,
    /// Abort and run the configured [`RcLostAction`].
    ExecuteLostAction,
}

/// The abort action taken under [`RcLostBehavior::ExecuteLostAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RcLostAction {
    GoBack,
    Landing,
    Hover,
}

/// Aircraft model descriptor (vendor type codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneInfo {
    #[serde(rename = "wpml:droneEnumValue")]
    pub drone_enum_value: i32,
    #[serde(rename = "wpml:droneSubEnumValue")]
    pub drone_sub_enum_value: i32,
}

/// Payload (camera/gimbal) descriptor and its mount position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadInfo {
    #[serde(rename = "wpml:payloadEnumValue")]
    pub payload_enum_value: i32,
    #[serde(rename = "wpml:payloadSubEnumValue")]
    pub payload_sub_enum_value: i32,
    #[serde(rename = "wpml:payloadPositionIndex")]
    pub payload_position_index: i32,
}

/// Automatic-reroute flags. The format encodes these booleans as `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRerouteInfo {
    #[serde(rename = "wpml:missionAutoRerouteMode", with = "crate::xml::text::bool_int")]
    pub mission_auto_reroute_mode: bool,
    #[serde(
        rename = "wpml:transitionalAutoRerouteMode",
        with = "crate::xml::text::bool_int"
    )]
    pub transitional_auto_reroute_mode: bool,
}

/// Reference takeoff point. Serialized as `"{lat},{lng},{alt}"` text, with
/// latitude first, unlike placemark coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffRefPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Serialize for TakeoffRefPoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!(
            "{},{},{}",
            self.latitude, self.longitude, self.altitude
        ))
    }
}

impl<'de> Deserialize<'de> for TakeoffRefPoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut parts = text.split(',').map(str::trim);
        let mut next = |name: &str| {
            parts
                .next()
                .ok_or_else(|| serde::de::Error::custom(format!("ref point missing {name}")))?
                .parse::<f64>()
                .map_err(|e| serde::de::Error::custom(format!("ref point {name}: {e}")))
        };
        Ok(TakeoffRefPoint {
            latitude: next("latitude")?,
            longitude: next("longitude")?,
            altitude: next("altitude")?,
        })
    }
}

/// Mission-wide parameters (`wpml:missionConfig`).
///
/// A document must hold one of these before serialization; a document without
/// one fails with [`MissionError::MissingMissionConfig`](crate::MissionError).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    #[serde(rename = "wpml:flyToWaylineMode")]
    pub fly_to_wayline_mode: FlyToWaylineMode,
    #[serde(rename = "wpml:finishAction")]
    pub finish_action: FinishAction,
    #[serde(rename = "wpml:exitOnRCLost")]
    pub exit_on_rc_lost: RcLostBehavior,
    /// Only meaningful under [`RcLostBehavior::ExecuteLostAction`].
    #[serde(
        rename = "wpml:executeRCLostAction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub execute_rc_lost_action: Option<RcLostAction>,
    /// Safe climb height before heading to the first waypoint, in meters.
    #[serde(rename = "wpml:takeOffSecurityHeight")]
    pub take_off_security_height: f64,
    /// Transition speed between waypoints outside a wayline, in m/s.
    #[serde(rename = "wpml:globalTransitionalSpeed")]
    pub global_transitional_speed: f64,
    /// Return-to-home height in meters, when overridden for this mission.
    #[serde(
        rename = "wpml:globalRTHHeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub global_rth_height: Option<f64>,
    #[serde(
        rename = "wpml:takeOffRefPoint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub take_off_ref_point: Option<TakeoffRefPoint>,
    /// Ground elevation of the reference takeoff point, in meters.
    #[serde(
        rename = "wpml:takeOffRefPointAGLHeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub take_off_ref_point_agl_height: Option<f64>,
    #[serde(rename = "wpml:droneInfo")]
    pub drone_info: DroneInfo,
    #[serde(rename = "wpml:payloadInfo")]
    pub payload_info: PayloadInfo,
    #[serde(
        rename = "wpml:autoRerouteInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_reroute_info: Option<AutoRerouteInfo>,
}

#[cfg(test)]
impl MissionConfig {
    /// Minimal valid configuration shared by unit tests across the crate.
    pub(crate) fn sample() -> Self {
        MissionConfig {
            fly_to_wayline_mode: FlyToWaylineMode::Safely,
            finish_action: FinishAction::GoHome,
            exit_on_rc_lost: RcLostBehavior::ExecuteLostAction,
            execute_rc_lost_action: Some(RcLostAction::GoBack),
            take_off_security_height: 20.0,
            global_transitional_speed: 10.0,
            global_rth_height: None,
            take_off_ref_point: None,
            take_off_ref_point_agl_height: None,
            drone_info: DroneInfo {
                drone_enum_value: 68,
                drone_sub_enum_value: 0,
            },
            payload_info: PayloadInfo {
                payload_enum_value: 52,
                payload_sub_enum_value: 0,
                payload_position_index: 0,
            },
            auto_reroute_info: None,
        }
    }
}
