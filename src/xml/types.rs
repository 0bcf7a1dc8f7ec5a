//! Serde structs that mirror the WPML XML structure.
//!
//! These are the on-disk representation: dumb field-for-field mirrors of the
//! vendor vocabulary with `wpml:`-prefixed element names and `@`-prefixed
//! namespace attributes. The in-memory representation lives in
//! [`crate::model`]; conversion between the two is done in [`super`]. Wire
//! structs intentionally allow states the domain model forbids (for example
//! a folder carrying both template defaults and wayline fields); the
//! conversion layer is where those states are rejected.

use serde::{Deserialize, Serialize};

use crate::model::config::MissionConfig;
use crate::model::folder::{
    ExecuteHeightMode, GimbalPitchMode, PayloadParam, TemplateType, WaylineCoordinateSysParam,
};
use crate::model::placemark::{
    WaypointGimbalHeadingParam, WaypointHeadingParam, WaypointTurnMode, WaypointTurnParam,
};
use crate::model::{ActionTriggerType, GimbalRotateMode, YawPathMode};
use crate::xml::text::bool_int_opt;

/// `<Point>` wrapper around the coordinate text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PointXml {
    #[serde(rename = "coordinates")]
    pub coordinates: String,
}

/// `<wpml:actionTrigger>` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ActionTriggerXml {
    #[serde(rename = "wpml:actionTriggerType")]
    pub trigger_type: ActionTriggerType,
    #[serde(
        rename = "wpml:actionTriggerParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub param: Option<f64>,
}

/// `<wpml:actionActuatorFuncParam>` block: the union of every actuator
/// function's parameters, all optional. Which subset is meaningful depends
/// on the sibling `wpml:actionActuatorFunc` tag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub(crate) struct ActionFuncParamXml {
    #[serde(
        rename = "wpml:payloadPositionIndex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payload_position_index: Option<i32>,
    #[serde(
        rename = "wpml:fileSuffix",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub file_suffix: Option<String>,
    #[serde(
        rename = "wpml:isPointFocus",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_point_focus: Option<bool>,
    #[serde(rename = "wpml:focusX", default, skip_serializing_if = "Option::is_none")]
    pub focus_x: Option<f64>,
    #[serde(rename = "wpml:focusY", default, skip_serializing_if = "Option::is_none")]
    pub focus_y: Option<f64>,
    #[serde(
        rename = "wpml:focalLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub focal_length: Option<f64>,
    #[serde(
        rename = "wpml:gimbalRotateMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_rotate_mode: Option<GimbalRotateMode>,
    #[serde(
        rename = "wpml:gimbalPitchRotateEnable",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_pitch_rotate_enable: Option<bool>,
    #[serde(
        rename = "wpml:gimbalPitchRotateAngle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_pitch_rotate_angle: Option<f64>,
    #[serde(
        rename = "wpml:gimbalYawRotateEnable",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_yaw_rotate_enable: Option<bool>,
    #[serde(
        rename = "wpml:gimbalYawRotateAngle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_yaw_rotate_angle: Option<f64>,
    #[serde(
        rename = "wpml:aircraftHeading",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub aircraft_heading: Option<f64>,
    #[serde(
        rename = "wpml:aircraftPathMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub aircraft_path_mode: Option<YawPathMode>,
    #[serde(
        rename = "wpml:hoverTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_time: Option<f64>,
}

/// `<wpml:action>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ActionXml {
    #[serde(rename = "wpml:actionId")]
    pub action_id: u32,
    #[serde(rename = "wpml:actionActuatorFunc")]
    pub actuator_func: String,
    #[serde(rename = "wpml:actionActuatorFuncParam")]
    pub param: ActionFuncParamXml,
}

/// `<wpml:actionGroup>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ActionGroupXml {
    #[serde(rename = "wpml:actionGroupId")]
    pub group_id: u32,
    #[serde(rename = "wpml:actionGroupStartIndex")]
    pub start_index: u32,
    #[serde(rename = "wpml:actionGroupEndIndex")]
    pub end_index: u32,
    /// Always `sequence`; the conversion layer rejects anything else.
    #[serde(rename = "wpml:actionGroupMode")]
    pub mode: String,
    #[serde(rename = "wpml:actionTrigger")]
    pub trigger: ActionTriggerXml,
    #[serde(rename = "wpml:action", default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionXml>,
}

/// `<Placemark>` inside a template folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TemplatePlacemarkXml {
    #[serde(rename = "Point")]
    pub point: PointXml,
    #[serde(rename = "wpml:index")]
    pub index: u32,
    #[serde(
        rename = "wpml:useGlobalHeight",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_global_height: Option<bool>,
    #[serde(
        rename = "wpml:ellipsoidHeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ellipsoid_height: Option<f64>,
    #[serde(rename = "wpml:height", default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(
        rename = "wpml:useGlobalSpeed",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_global_speed: Option<bool>,
    #[serde(
        rename = "wpml:waypointSpeed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_speed: Option<f64>,
    #[serde(
        rename = "wpml:useGlobalHeadingParam",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_global_heading_param: Option<bool>,
    #[serde(
        rename = "wpml:waypointHeadingParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_heading_param: Option<WaypointHeadingParam>,
    #[serde(
        rename = "wpml:useGlobalTurnParam",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_global_turn_param: Option<bool>,
    #[serde(
        rename = "wpml:waypointTurnParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoint_turn_param: Option<WaypointTurnParam>,
    #[serde(
        rename = "wpml:waypointTurnDampingDist",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub turn_damping_dist: Option<f64>,
    #[serde(
        rename = "wpml:useStraightLine",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_straight_line: Option<bool>,
    #[serde(
        rename = "wpml:gimbalPitchAngle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_pitch_angle: Option<f64>,
    #[serde(
        rename = "wpml:isRisky",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_risky: Option<bool>,
    #[serde(rename = "wpml:workType", default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<u32>,
    #[serde(
        rename = "wpml:waypointGimbalHeadingParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_heading: Option<WaypointGimbalHeadingParam>,
    #[serde(
        rename = "wpml:actionGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub action_group: Option<ActionGroupXml>,
}

/// `<Folder>` inside a template document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub(crate) struct TemplateFolderXml {
    #[serde(
        rename = "wpml:templateType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub template_type: Option<TemplateType>,
    #[serde(
        rename = "wpml:templateId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub template_id: Option<u32>,
    #[serde(
        rename = "wpml:waylineCoordinateSysParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub coordinate_sys: Option<WaylineCoordinateSysParam>,
    #[serde(
        rename = "wpml:autoFlightSpeed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_flight_speed: Option<f64>,
    #[serde(
        rename = "wpml:globalHeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub global_height: Option<f64>,
    #[serde(
        rename = "wpml:gimbalPitchMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_pitch_mode: Option<GimbalPitchMode>,
    #[serde(
        rename = "wpml:globalWaypointHeadingParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub global_heading: Option<WaypointHeadingParam>,
    #[serde(
        rename = "wpml:globalWaypointTurnMode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub global_turn_mode: Option<WaypointTurnMode>,
    #[serde(
        rename = "wpml:globalUseStraightLine",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub global_use_straight_line: Option<bool>,
    #[serde(
        rename = "wpml:payloadParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payload_param: Option<PayloadParam>,
    #[serde(rename = "wpml:distance", default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(rename = "wpml:duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(rename = "Placemark", default, skip_serializing_if = "Vec::is_empty")]
    pub placemarks: Vec<TemplatePlacemarkXml>,
}

/// `<Document>` of a `template.kml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub(crate) struct TemplateDocumentXml {
    #[serde(rename = "wpml:author", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(
        rename = "wpml:createTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<i64>,
    #[serde(
        rename = "wpml:updateTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_time: Option<i64>,
    #[serde(
        rename = "wpml:missionConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mission_config: Option<MissionConfig>,
    #[serde(rename = "Folder", default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<TemplateFolderXml>,
}

/// Root `<kml>` of a `template.kml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TemplateKmlXml {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "@xmlns:wpml")]
    pub xmlns_wpml: String,
    #[serde(rename = "Document")]
    pub document: TemplateDocumentXml,
}

/// `<Placemark>` inside a wayline folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WaylinePlacemarkXml {
    #[serde(rename = "Point")]
    pub point: PointXml,
    #[serde(rename = "wpml:index")]
    pub index: u32,
    #[serde(rename = "wpml:executeHeight")]
    pub execute_height: f64,
    #[serde(rename = "wpml:waypointSpeed")]
    pub waypoint_speed: f64,
    #[serde(rename = "wpml:waypointHeadingParam")]
    pub heading: WaypointHeadingParam,
    #[serde(rename = "wpml:waypointTurnParam")]
    pub turn: WaypointTurnParam,
    #[serde(
        rename = "wpml:useStraightLine",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_straight_line: Option<bool>,
    #[serde(
        rename = "wpml:gimbalPitchAngle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_pitch_angle: Option<f64>,
    #[serde(
        rename = "wpml:waypointGimbalHeadingParam",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gimbal_heading: Option<WaypointGimbalHeadingParam>,
    #[serde(
        rename = "wpml:isRisky",
        with = "bool_int_opt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_risky: Option<bool>,
    #[serde(rename = "wpml:workType")]
    pub work_type: u32,
    #[serde(
        rename = "wpml:actionGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub action_group: Option<ActionGroupXml>,
}

/// `<Folder>` inside a wayline document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WaylineFolderXml {
    #[serde(
        rename = "wpml:templateId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub template_id: Option<u32>,
    #[serde(rename = "wpml:waylineId")]
    pub wayline_id: u32,
    #[serde(rename = "wpml:executeHeightMode")]
    pub execute_height_mode: ExecuteHeightMode,
    #[serde(rename = "wpml:autoFlightSpeed")]
    pub auto_flight_speed: f64,
    #[serde(rename = "wpml:distance", default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(rename = "wpml:duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(
        rename = "wpml:startActionGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_action_group: Option<ActionGroupXml>,
    #[serde(rename = "Placemark", default, skip_serializing_if = "Vec::is_empty")]
    pub placemarks: Vec<WaylinePlacemarkXml>,
}

/// `<Document>` of a `waylines.wpml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WaylineDocumentXml {
    #[serde(
        rename = "wpml:missionConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mission_config: Option<MissionConfig>,
    #[serde(rename = "Folder", default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<WaylineFolderXml>,
}

/// Root `<kml>` of a `waylines.wpml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WaylineKmlXml {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "@xmlns:wpml")]
    pub xmlns_wpml: String,
    #[serde(rename = "Document")]
    pub document: WaylineDocumentXml,
}
