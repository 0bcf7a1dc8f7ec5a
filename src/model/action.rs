//! Waypoint action model.
//!
//! An [`ActionGroup`] attaches to a placemark and covers a contiguous span of
//! waypoint indices; its [`Action`]s run in sequence when the
//! [`ActionTrigger`] fires. Each actuator function carries its own
//! strongly-typed parameter record in the closed [`ActionPayload`] union.
//! There is no open-ended "any parameter" escape hatch, so the wire
//! conversion can match exhaustively.

use serde::{Deserialize, Serialize};

/// When the actions of a group start executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionTriggerType {
    /// Fire on arriving at the group's first waypoint.
    ReachPoint,
    /// Fire while flying between adjacent waypoints of the span.
    BetweenAdjacentPoints,
    /// Fire repeatedly on a time interval (`param` = seconds).
    MultipleTiming,
    /// Fire repeatedly on a distance interval (`param` = meters).
    MultipleDistance,
}

/// Trigger type plus its optional numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionTrigger {
    pub trigger_type: ActionTriggerType,
    /// Interval value for the `multiple*` trigger types; unused otherwise.
    pub param: Option<f64>,
}

/// Gimbal rotation reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GimbalRotateMode {
    AbsoluteAngle,
    RelativeAngle,
}

/// Rotation direction for an aircraft yaw action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YawPathMode {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TakePhotoParam {
    pub payload_position_index: i32,
    /// Appended to the media file name on the aircraft, when set.
    pub file_suffix: Option<String>,
}

/// Shared by the start-record and stop-record actuator functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordParam {
    pub payload_position_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusParam {
    pub payload_position_index: i32,
    /// `false` focuses on the whole frame; `true` on the point below.
    pub is_point_focus: bool,
    /// Normalized focus point, required by the hardware when
    /// `is_point_focus` is set.
    pub focus_x: Option<f64>,
    pub focus_y: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomParam {
    pub payload_position_index: i32,
    /// Target focal length in millimeters.
    pub focal_length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GimbalRotateParam {
    pub payload_position_index: i32,
    pub rotate_mode: GimbalRotateMode,
    pub pitch_rotate_enable: bool,
    pub pitch_rotate_angle: Option<f64>,
    pub yaw_rotate_enable: bool,
    pub yaw_rotate_angle: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateYawParam {
    /// Target aircraft heading in degrees, -180..180.
    pub aircraft_heading: f64,
    pub aircraft_path_mode: Option<YawPathMode>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverParam {
    /// Hover duration in seconds.
    pub hover_time: f64,
}

/// The closed set of actuator functions and their parameter records.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPayload {
    TakePhoto(TakePhotoParam),
    StartRecord(RecordParam),
    StopRecord(RecordParam),
    Focus(FocusParam),
    Zoom(ZoomParam),
    GimbalRotate(GimbalRotateParam),
    RotateYaw(RotateYawParam),
    Hover(HoverParam),
}

impl ActionPayload {
    /// The `wpml:actionActuatorFunc` tag for this payload.
    pub fn actuator_func(&self) -> &'static str {
        match self {
            ActionPayload::TakePhoto(_) => "takePhoto",
            ActionPayload::StartRecord(_) => "startRecord",
            ActionPayload::StopRecord(_) => "stopRecord",
            ActionPayload::Focus(_) => "focus",
            ActionPayload::Zoom(_) => "zoom",
            ActionPayload::GimbalRotate(_) => "gimbalRotate",
            ActionPayload::RotateYaw(_) => "rotateYaw",
            ActionPayload::Hover(_) => "hover",
        }
    }
}

/// One actuator operation inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub action_id: u32,
    pub payload: ActionPayload,
}

/// A span `[start_index, end_index]` of waypoints sharing one trigger and an
/// ordered action list. Execution mode is always `sequence`; the wire layer
/// writes it as a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionGroup {
    pub group_id: u32,
    pub start_index: u32,
    pub end_index: u32,
    pub trigger: ActionTrigger,
    pub actions: Vec<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actuator_func_tags_match_vocabulary() {
        let cases: [(ActionPayload, &str); 8] = [
            (
                ActionPayload::TakePhoto(TakePhotoParam {
                    payload_position_index: 0,
                    file_suffix: None,
                }),
                "takePhoto",
            ),
            (
                ActionPayload::StartRecord(RecordParam {
                    payload_position_index: 0,
                }),
                "startRecord",
            ),
            (
                ActionPayload::StopRecord(RecordParam {
                    payload_position_index: 0,
                }),
                "stopRecord",
            ),
            (
                ActionPayload::Focus(FocusParam {
                    payload_position_index: 0,
                    is_point_focus: false,
                    focus_x: None,
                    focus_y: None,
                }),
                "focus",
            ),
            (
                ActionPayload::Zoom(ZoomParam {
                    payload_position_index: 0,
                    focal_length: 24.0,
                }),
                "zoom",
            ),
            (
                ActionPayload::GimbalRotate(GimbalRotateParam {
                    payload_position_index: 0,
                    rotate_mode: GimbalRotateMode::AbsoluteAngle,
                    pitch_rotate_enable: true,
                    pitch_rotate_angle: Some(-90.0),
                    yaw_rotate_enable: false,
                    yaw_rotate_angle: None,
                }),
                "gimbalRotate",
            ),
            (
                ActionPayload::RotateYaw(RotateYawParam {
                    aircraft_heading: 90.0,
                    aircraft_path_mode: Some(YawPathMode::Clockwise),
                }),
                "rotateYaw",
            ),
            (
                ActionPayload::Hover(HoverParam { hover_time: 5.0 }),
                "hover",
            ),
        ];
        for (payload, expected) in cases {
            assert_eq!(payload.actuator_func(), expected);
        }
    }
}
