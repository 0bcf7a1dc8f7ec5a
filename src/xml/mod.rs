//! Serialization between the in-memory document model and the WPML XML
//! vocabulary.
//!
//! # Writing
//! 1. Check document-level invariants (a template without a mission config
//!    is refused before any bytes are produced).
//! 2. Convert the domain tree into the wire mirror types in
//!    [`types`](self::types).
//! 3. Serialize with quick-xml under the fixed `<kml>` root carrying the
//!    default geo namespace and the `wpml` vocabulary prefix.
//!
//! # Parsing
//! The reverse: deserialize the wire mirror, then convert into the domain
//! tree, rejecting states the domain model forbids (unknown actuator
//! functions, explicit markers without their value elements, non-`sequence`
//! action groups) with [`MissionError::MalformedDocument`].

pub mod text;
pub(crate) mod types;

use serde::Serialize;

use crate::error::MissionError;
use crate::model::action::{
    Action, ActionGroup, ActionPayload, ActionTrigger, FocusParam, GimbalRotateParam, HoverParam,
    RecordParam, RotateYawParam, TakePhotoParam, ZoomParam,
};
use crate::model::document::{TemplateDocument, WaylineDocument};
use crate::model::folder::{TemplateFolder, WaylineFolder};
use crate::model::inherit::Inheritable;
use crate::model::placemark::{Point, PointHeight, TemplatePlacemark, WaylinePlacemark};

use types::{
    ActionFuncParamXml, ActionGroupXml, ActionTriggerXml, ActionXml, PointXml,
    TemplateDocumentXml, TemplateFolderXml, TemplateKmlXml, TemplatePlacemarkXml,
    WaylineDocumentXml, WaylineFolderXml, WaylineKmlXml, WaylinePlacemarkXml,
};

/// Default namespace of the root element (plain geo vocabulary).
pub const KML_NS: &str = "http://www.opengis.net/kml/2.2";
/// Mission vocabulary namespace, bound to the `wpml` prefix.
pub const WPML_NS: &str = "http://www.dji.com/wpmz/1.0.2";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// The only action-group execution mode the format defines.
const ACTION_GROUP_MODE_SEQUENCE: &str = "sequence";

fn malformed(msg: impl Into<String>) -> MissionError {
    MissionError::MalformedDocument(msg.into())
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Serializes a template document to `template.kml` markup.
///
/// Fails with [`MissionError::MissingMissionConfig`] before producing any
/// output if the document has no mission configuration.
pub fn write_template(doc: &TemplateDocument) -> Result<String, MissionError> {
    let mission_config = doc
        .mission_config
        .clone()
        .ok_or(MissionError::MissingMissionConfig)?;

    let kml = TemplateKmlXml {
        xmlns: KML_NS.to_string(),
        xmlns_wpml: WPML_NS.to_string(),
        document: TemplateDocumentXml {
            author: doc.author.clone(),
            create_time: doc.create_time,
            update_time: doc.update_time,
            mission_config: Some(mission_config),
            folders: doc.folders.iter().map(template_folder_to_xml).collect(),
        },
    };
    serialize_kml(&kml)
}

/// Serializes a wayline document to `waylines.wpml` markup.
pub fn write_wayline(doc: &WaylineDocument) -> Result<String, MissionError> {
    let kml = WaylineKmlXml {
        xmlns: KML_NS.to_string(),
        xmlns_wpml: WPML_NS.to_string(),
        document: WaylineDocumentXml {
            mission_config: Some(doc.mission_config.clone()),
            folders: doc.folders.iter().map(wayline_folder_to_xml).collect(),
        },
    };
    serialize_kml(&kml)
}

fn serialize_kml<T: Serialize>(kml: &T) -> Result<String, MissionError> {
    let mut xml = String::from(XML_DECLARATION);
    let mut ser = quick_xml::se::Serializer::with_root(&mut xml, Some("kml"))?;
    ser.indent(' ', 2);
    kml.serialize(ser)?;
    xml.push('\n');
    Ok(xml)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses `template.kml` markup back into a [`TemplateDocument`].
pub fn parse_template(xml: &str) -> Result<TemplateDocument, MissionError> {
    let kml: TemplateKmlXml = quick_xml::de::from_str(xml)?;
    let doc = kml.document;
    Ok(TemplateDocument {
        author: doc.author,
        create_time: doc.create_time,
        update_time: doc.update_time,
        mission_config: doc.mission_config,
        folders: doc
            .folders
            .into_iter()
            .map(template_folder_from_xml)
            .collect::<Result<_, _>>()?,
    })
}

/// Parses `waylines.wpml` markup back into a [`WaylineDocument`].
pub fn parse_wayline(xml: &str) -> Result<WaylineDocument, MissionError> {
    let kml: WaylineKmlXml = quick_xml::de::from_str(xml)?;
    let doc = kml.document;
    Ok(WaylineDocument {
        mission_config: doc
            .mission_config
            .ok_or_else(|| malformed("wayline document has no missionConfig"))?,
        folders: doc
            .folders
            .into_iter()
            .map(wayline_folder_from_xml)
            .collect::<Result<_, _>>()?,
    })
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

fn point_to_xml(point: &Point) -> PointXml {
    PointXml {
        coordinates: text::format_coordinates(point.longitude, point.latitude),
    }
}

fn point_from_xml(point: &PointXml) -> Result<Point, MissionError> {
    let (longitude, latitude) = text::parse_coordinates(&point.coordinates).map_err(malformed)?;
    Ok(Point {
        longitude,
        latitude,
    })
}

// ---------------------------------------------------------------------------
// Template conversion
// ---------------------------------------------------------------------------

fn template_folder_to_xml(folder: &TemplateFolder) -> TemplateFolderXml {
    TemplateFolderXml {
        template_type: folder.template_type,
        template_id: folder.template_id,
        coordinate_sys: folder.coordinate_sys,
        auto_flight_speed: folder.auto_flight_speed,
        global_height: folder.global_height,
        gimbal_pitch_mode: folder.gimbal_pitch_mode,
        global_heading: folder.global_heading,
        global_turn_mode: folder.global_turn_mode,
        global_use_straight_line: folder.global_use_straight_line,
        payload_param: folder.payload_param.clone(),
        distance: folder.distance,
        duration: folder.duration,
        placemarks: folder
            .placemarks
            .iter()
            .map(template_placemark_to_xml)
            .collect(),
    }
}

fn template_folder_from_xml(folder: TemplateFolderXml) -> Result<TemplateFolder, MissionError> {
    Ok(TemplateFolder {
        template_type: folder.template_type,
        template_id: folder.template_id,
        coordinate_sys: folder.coordinate_sys,
        auto_flight_speed: folder.auto_flight_speed,
        global_height: folder.global_height,
        gimbal_pitch_mode: folder.gimbal_pitch_mode,
        global_heading: folder.global_heading,
        global_turn_mode: folder.global_turn_mode,
        global_use_straight_line: folder.global_use_straight_line,
        payload_param: folder.payload_param,
        distance: folder.distance,
        duration: folder.duration,
        placemarks: folder
            .placemarks
            .into_iter()
            .map(template_placemark_from_xml)
            .collect::<Result<_, _>>()?,
    })
}

fn template_placemark_to_xml(pm: &TemplatePlacemark) -> TemplatePlacemarkXml {
    let (use_global_height, ellipsoid_height, height) = match pm.height {
        Inheritable::Inherit => (Some(true), None, None),
        Inheritable::Explicit(h) => (Some(false), Some(h.ellipsoid_height), Some(h.height)),
    };
    let (use_global_speed, waypoint_speed) = match pm.speed {
        Inheritable::Inherit => (Some(true), None),
        Inheritable::Explicit(s) => (Some(false), Some(s)),
    };
    let (use_global_heading_param, waypoint_heading_param) = match pm.heading {
        Inheritable::Inherit => (Some(true), None),
        Inheritable::Explicit(h) => (Some(false), Some(h)),
    };
    let (use_global_turn_param, waypoint_turn_param) = match pm.turn {
        Inheritable::Inherit => (Some(true), None),
        Inheritable::Explicit(t) => (Some(false), Some(t)),
    };

    TemplatePlacemarkXml {
        point: point_to_xml(&pm.point),
        index: pm.index,
        use_global_height,
        ellipsoid_height,
        height,
        use_global_speed,
        waypoint_speed,
        use_global_heading_param,
        waypoint_heading_param,
        use_global_turn_param,
        waypoint_turn_param,
        turn_damping_dist: pm.turn_damping_dist,
        use_straight_line: pm.use_straight_line,
        gimbal_pitch_angle: pm.gimbal_pitch_angle,
        is_risky: Some(pm.is_risky),
        work_type: pm.work_type,
        gimbal_heading: pm.gimbal_heading,
        action_group: pm.action_group.as_ref().map(action_group_to_xml),
    }
}

fn template_placemark_from_xml(
    pm: TemplatePlacemarkXml,
) -> Result<TemplatePlacemark, MissionError> {
    let point = point_from_xml(&pm.point)?;
    let index = pm.index;

    // An absent marker means inherit; only an explicit 0 switches a field to
    // its per-point value, and the value element must then be present.
    let height = match pm.use_global_height {
        None | Some(true) => Inheritable::Inherit,
        Some(false) => {
            let ellipsoid_height = pm.ellipsoid_height.ok_or_else(|| {
                malformed(format!("placemark {index}: explicit height without ellipsoidHeight"))
            })?;
            let height = pm.height.ok_or_else(|| {
                malformed(format!("placemark {index}: explicit height without height"))
            })?;
            Inheritable::Explicit(PointHeight {
                ellipsoid_height,
                height,
            })
        }
    };
    let speed = match pm.use_global_speed {
        None | Some(true) => Inheritable::Inherit,
        Some(false) => Inheritable::Explicit(pm.waypoint_speed.ok_or_else(|| {
            malformed(format!("placemark {index}: explicit speed without waypointSpeed"))
        })?),
    };
    let heading = match pm.use_global_heading_param {
        None | Some(true) => Inheritable::Inherit,
        Some(false) => Inheritable::Explicit(pm.waypoint_heading_param.ok_or_else(|| {
            malformed(format!(
                "placemark {index}: explicit heading without waypointHeadingParam"
            ))
        })?),
    };
    let turn = match pm.use_global_turn_param {
        None | Some(true) => Inheritable::Inherit,
        Some(false) => Inheritable::Explicit(pm.waypoint_turn_param.ok_or_else(|| {
            malformed(format!(
                "placemark {index}: explicit turn without waypointTurnParam"
            ))
        })?),
    };

    Ok(TemplatePlacemark {
        point,
        index,
        height,
        speed,
        heading,
        turn,
        turn_damping_dist: pm.turn_damping_dist,
        use_straight_line: pm.use_straight_line,
        gimbal_pitch_angle: pm.gimbal_pitch_angle,
        is_risky: pm.is_risky.unwrap_or(false),
        work_type: pm.work_type,
        gimbal_heading: pm.gimbal_heading,
        action_group: pm.action_group.map(action_group_from_xml).transpose()?,
    })
}

// ---------------------------------------------------------------------------
// Wayline conversion
// ---------------------------------------------------------------------------

fn wayline_folder_to_xml(folder: &WaylineFolder) -> WaylineFolderXml {
    WaylineFolderXml {
        template_id: folder.template_id,
        wayline_id: folder.wayline_id,
        execute_height_mode: folder.execute_height_mode,
        auto_flight_speed: folder.auto_flight_speed,
        distance: folder.distance,
        duration: folder.duration,
        start_action_group: folder.start_action_group.as_ref().map(action_group_to_xml),
        placemarks: folder
            .placemarks
            .iter()
            .map(wayline_placemark_to_xml)
            .collect(),
    }
}

fn wayline_folder_from_xml(folder: WaylineFolderXml) -> Result<WaylineFolder, MissionError> {
    Ok(WaylineFolder {
        template_id: folder.template_id,
        wayline_id: folder.wayline_id,
        execute_height_mode: folder.execute_height_mode,
        auto_flight_speed: folder.auto_flight_speed,
        distance: folder.distance,
        duration: folder.duration,
        start_action_group: folder
            .start_action_group
            .map(action_group_from_xml)
            .transpose()?,
        placemarks: folder
            .placemarks
            .into_iter()
            .map(wayline_placemark_from_xml)
            .collect::<Result<_, _>>()?,
    })
}

fn wayline_placemark_to_xml(pm: &WaylinePlacemark) -> WaylinePlacemarkXml {
    WaylinePlacemarkXml {
        point: point_to_xml(&pm.point),
        index: pm.index,
        execute_height: pm.execute_height,
        waypoint_speed: pm.waypoint_speed,
        heading: pm.heading,
        turn: pm.turn,
        use_straight_line: pm.use_straight_line,
        gimbal_pitch_angle: pm.gimbal_pitch_angle,
        gimbal_heading: pm.gimbal_heading,
        is_risky: Some(pm.is_risky),
        work_type: pm.work_type,
        action_group: pm.action_group.as_ref().map(action_group_to_xml),
    }
}

fn wayline_placemark_from_xml(pm: WaylinePlacemarkXml) -> Result<WaylinePlacemark, MissionError> {
    Ok(WaylinePlacemark {
        point: point_from_xml(&pm.point)?,
        index: pm.index,
        execute_height: pm.execute_height,
        waypoint_speed: pm.waypoint_speed,
        heading: pm.heading,
        turn: pm.turn,
        use_straight_line: pm.use_straight_line,
        gimbal_pitch_angle: pm.gimbal_pitch_angle,
        gimbal_heading: pm.gimbal_heading,
        is_risky: pm.is_risky.unwrap_or(false),
        work_type: pm.work_type,
        action_group: pm.action_group.map(action_group_from_xml).transpose()?,
    })
}

// ---------------------------------------------------------------------------
// Action conversion
// ---------------------------------------------------------------------------

fn action_group_to_xml(group: &ActionGroup) -> ActionGroupXml {
    ActionGroupXml {
        group_id: group.group_id,
        start_index: group.start_index,
        end_index: group.end_index,
        mode: ACTION_GROUP_MODE_SEQUENCE.to_string(),
        trigger: ActionTriggerXml {
            trigger_type: group.trigger.trigger_type,
            param: group.trigger.param,
        },
        actions: group.actions.iter().map(action_to_xml).collect(),
    }
}

fn action_group_from_xml(group: ActionGroupXml) -> Result<ActionGroup, MissionError> {
    if group.mode != ACTION_GROUP_MODE_SEQUENCE {
        return Err(malformed(format!(
            "action group {}: unsupported mode `{}`",
            group.group_id, group.mode
        )));
    }
    Ok(ActionGroup {
        group_id: group.group_id,
        start_index: group.start_index,
        end_index: group.end_index,
        trigger: ActionTrigger {
            trigger_type: group.trigger.trigger_type,
            param: group.trigger.param,
        },
        actions: group
            .actions
            .into_iter()
            .map(action_from_xml)
            .collect::<Result<_, _>>()?,
    })
}

fn action_to_xml(action: &Action) -> ActionXml {
    let mut param = ActionFuncParamXml::default();
    match &action.payload {
        ActionPayload::TakePhoto(p) => {
            param.payload_position_index = Some(p.payload_position_index);
            param.file_suffix = p.file_suffix.clone();
        }
        ActionPayload::StartRecord(p) | ActionPayload::StopRecord(p) => {
            param.payload_position_index = Some(p.payload_position_index);
        }
        ActionPayload::Focus(p) => {
            param.payload_position_index = Some(p.payload_position_index);
            param.is_point_focus = Some(p.is_point_focus);
            param.focus_x = p.focus_x;
            param.focus_y = p.focus_y;
        }
        ActionPayload::Zoom(p) => {
            param.payload_position_index = Some(p.payload_position_index);
            param.focal_length = Some(p.focal_length);
        }
        ActionPayload::GimbalRotate(p) => {
            param.payload_position_index = Some(p.payload_position_index);
            param.gimbal_rotate_mode = Some(p.rotate_mode);
            param.gimbal_pitch_rotate_enable = Some(p.pitch_rotate_enable);
            param.gimbal_pitch_rotate_angle = p.pitch_rotate_angle;
            param.gimbal_yaw_rotate_enable = Some(p.yaw_rotate_enable);
            param.gimbal_yaw_rotate_angle = p.yaw_rotate_angle;
        }
        ActionPayload::RotateYaw(p) => {
            param.aircraft_heading = Some(p.aircraft_heading);
            param.aircraft_path_mode = p.aircraft_path_mode;
        }
        ActionPayload::Hover(p) => {
            param.hover_time = Some(p.hover_time);
        }
    }
    ActionXml {
        action_id: action.action_id,
        actuator_func: action.payload.actuator_func().to_string(),
        param,
    }
}

fn action_from_xml(action: ActionXml) -> Result<Action, MissionError> {
    fn require<T>(value: Option<T>, func: &str, field: &str) -> Result<T, MissionError> {
        value.ok_or_else(|| malformed(format!("{func} action missing {field}")))
    }

    let p = action.param;
    let payload = match action.actuator_func.as_str() {
        "takePhoto" => ActionPayload::TakePhoto(TakePhotoParam {
            payload_position_index: require(
                p.payload_position_index,
                "takePhoto",
                "payloadPositionIndex",
            )?,
            file_suffix: p.file_suffix,
        }),
        "startRecord" => ActionPayload::StartRecord(RecordParam {
            payload_position_index: require(
                p.payload_position_index,
                "startRecord",
                "payloadPositionIndex",
            )?,
        }),
        "stopRecord" => ActionPayload::StopRecord(RecordParam {
            payload_position_index: require(
                p.payload_position_index,
                "stopRecord",
                "payloadPositionIndex",
            )?,
        }),
        "focus" => ActionPayload::Focus(FocusParam {
            payload_position_index: require(
                p.payload_position_index,
                "focus",
                "payloadPositionIndex",
            )?,
            is_point_focus: p.is_point_focus.unwrap_or(false),
            focus_x: p.focus_x,
            focus_y: p.focus_y,
        }),
        "zoom" => ActionPayload::Zoom(ZoomParam {
            payload_position_index: require(
                p.payload_position_index,
                "zoom",
                "payloadPositionIndex",
            )?,
            focal_length: require(p.focal_length, "zoom", "focalLength")?,
        }),
        "gimbalRotate" => ActionPayload::GimbalRotate(GimbalRotateParam {
            payload_position_index: require(
                p.payload_position_index,
                "gimbalRotate",
                "payloadPositionIndex",
            )?,
            rotate_mode: require(p.gimbal_rotate_mode, "gimbalRotate", "gimbalRotateMode")?,
            pitch_rotate_enable: p.gimbal_pitch_rotate_enable.unwrap_or(false),
            pitch_rotate_angle: p.gimbal_pitch_rotate_angle,
            yaw_rotate_enable: p.gimbal_yaw_rotate_enable.unwrap_or(false),
            yaw_rotate_angle: p.gimbal_yaw_rotate_angle,
        }),
        "rotateYaw" => ActionPayload::RotateYaw(RotateYawParam {
            aircraft_heading: require(p.aircraft_heading, "rotateYaw", "aircraftHeading")?,
            aircraft_path_mode: p.aircraft_path_mode,
        }),
        "hover" => ActionPayload::Hover(HoverParam {
            hover_time: require(p.hover_time, "hover", "hoverTime")?,
        }),
        other => {
            return Err(malformed(format!("unknown actuator function `{other}`")));
        }
    };
    Ok(Action {
        action_id: action.action_id,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::action::{ActionTriggerType, GimbalRotateMode};
    use crate::model::config::MissionConfig;
    use crate::model::folder::{
        CoordinateMode, ExecuteHeightMode, GimbalPitchMode, HeightMode, TemplateType,
        WaylineCoordinateSysParam,
    };
    use crate::model::placemark::{
        WaypointHeadingParam, WaypointTurnMode, WaypointTurnParam, WORK_TYPE_NONE,
    };

    fn make_action_group() -> ActionGroup {
        ActionGroup {
            group_id: 0,
            start_index: 0,
            end_index: 1,
            trigger: ActionTrigger {
                trigger_type: ActionTriggerType::ReachPoint,
                param: None,
            },
            actions: vec![
                Action {
                    action_id: 0,
                    payload: ActionPayload::GimbalRotate(GimbalRotateParam {
                        payload_position_index: 0,
                        rotate_mode: GimbalRotateMode::AbsoluteAngle,
                        pitch_rotate_enable: true,
                        pitch_rotate_angle: Some(-90.0),
                        yaw_rotate_enable: false,
                        yaw_rotate_angle: None,
                    }),
                },
                Action {
                    action_id: 1,
                    payload: ActionPayload::TakePhoto(TakePhotoParam {
                        payload_position_index: 0,
                        file_suffix: Some("survey".to_string()),
                    }),
                },
            ],
        }
    }

    fn make_template() -> TemplateDocument {
        let mut explicit = TemplatePlacemark::at(117.1328, 36.6669);
        explicit.index = 1;
        explicit.height = Inheritable::Explicit(PointHeight {
            ellipsoid_height: 88.5,
            height: 60.0,
        });
        explicit.speed = Inheritable::Explicit(3.5);
        explicit.turn = Inheritable::Explicit(WaypointTurnParam {
            waypoint_turn_mode: WaypointTurnMode::CoordinateTurn,
            waypoint_turn_damping_dist: Some(2.0),
        });
        explicit.use_straight_line = None;
        explicit.gimbal_pitch_angle = Some(-45.0);
        explicit.is_risky = true;
        explicit.action_group = Some(make_action_group());

        TemplateDocument {
            author: Some("fly".to_string()),
            create_time: Some(1_702_051_864_938),
            update_time: Some(1_702_051_864_938),
            mission_config: Some(MissionConfig::sample()),
            folders: vec![TemplateFolder {
                template_id: Some(0),
                template_type: Some(TemplateType::Waypoint),
                coordinate_sys: Some(WaylineCoordinateSysParam {
                    coordinate_mode: CoordinateMode::Wgs84,
                    height_mode: HeightMode::RelativeToStartPoint,
                }),
                auto_flight_speed: Some(5.0),
                global_height: Some(50.0),
                gimbal_pitch_mode: Some(GimbalPitchMode::Manual),
                global_heading: Some(WaypointHeadingParam::follow_wayline()),
                global_turn_mode: Some(
                    WaypointTurnMode::ToPointAndStopWithDiscontinuityCurvature,
                ),
                global_use_straight_line: Some(true),
                payload_param: None,
                distance: None,
                duration: None,
                placemarks: vec![TemplatePlacemark::at(117.1323, 36.6669), explicit],
            }],
        }
    }

    fn make_wayline() -> WaylineDocument {
        WaylineDocument {
            mission_config: MissionConfig::sample(),
            folders: vec![WaylineFolder {
                template_id: Some(0),
                wayline_id: 0,
                execute_height_mode: ExecuteHeightMode::Wgs84,
                auto_flight_speed: 5.0,
                distance: Some(124.3),
                duration: Some(63.0),
                start_action_group: None,
                placemarks: vec![WaylinePlacemark {
                    point: Point {
                        longitude: 117.1323,
                        latitude: 36.6669,
                    },
                    index: 0,
                    execute_height: 50.0,
                    waypoint_speed: 5.0,
                    heading: WaypointHeadingParam::follow_wayline(),
                    turn: WaypointTurnParam {
                        waypoint_turn_mode:
                            WaypointTurnMode::ToPointAndStopWithDiscontinuityCurvature,
                        waypoint_turn_damping_dist: Some(0.0),
                    },
                    use_straight_line: Some(true),
                    gimbal_pitch_angle: None,
                    gimbal_heading: None,
                    is_risky: false,
                    work_type: WORK_TYPE_NONE,
                    action_group: Some(make_action_group()),
                }],
            }],
        }
    }

    // -------------------------------------------------------------------------
    // Root wrapper and formatting
    // -------------------------------------------------------------------------

    #[test]
    fn template_output_carries_declaration_and_namespaces() {
        let xml = write_template(&make_template()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns=\"http://www.opengis.net/kml/2.2\""));
        assert!(xml.contains("xmlns:wpml=\"http://www.dji.com/wpmz/1.0.2\""));
    }

    #[test]
    fn vocabulary_elements_are_prefixed_and_geometry_is_not() {
        let xml = write_template(&make_template()).unwrap();
        assert!(xml.contains("<wpml:missionConfig>"));
        assert!(xml.contains("<wpml:templateType>waypoint</wpml:templateType>"));
        assert!(xml.contains("<Folder>"));
        assert!(xml.contains("<Placemark>"));
        assert!(xml.contains("<Point>"));
    }

    #[test]
    fn coordinates_are_fixed_precision_lng_first() {
        let xml = write_template(&make_template()).unwrap();
        assert!(
            xml.contains("<coordinates>117.132300,36.666900</coordinates>"),
            "got: {xml}"
        );
    }

    #[test]
    fn inherit_markers_serialize_as_one_with_no_value_elements() {
        let mut doc = make_template();
        doc.folders[0].placemarks.truncate(1); // keep only the all-inherit placemark
        let xml = write_template(&doc).unwrap();
        assert!(xml.contains("<wpml:useGlobalHeight>1</wpml:useGlobalHeight>"));
        assert!(xml.contains("<wpml:useGlobalSpeed>1</wpml:useGlobalSpeed>"));
        assert!(!xml.contains("<wpml:ellipsoidHeight>"));
        assert!(!xml.contains("<wpml:waypointSpeed>"));
    }

    #[test]
    fn explicit_fields_serialize_marker_zero_with_values() {
        let xml = write_template(&make_template()).unwrap();
        assert!(xml.contains("<wpml:useGlobalSpeed>0</wpml:useGlobalSpeed>"));
        assert!(xml.contains("<wpml:waypointSpeed>3.5</wpml:waypointSpeed>"));
        assert!(xml.contains("<wpml:ellipsoidHeight>88.5</wpml:ellipsoidHeight>"));
        assert!(xml.contains("<wpml:height>60</wpml:height>"));
    }

    #[test]
    fn missing_mission_config_fails_without_output() {
        let mut doc = make_template();
        doc.mission_config = None;
        match write_template(&doc) {
            Err(MissionError::MissingMissionConfig) => {}
            other => panic!("expected MissingMissionConfig, got {other:?}"),
        }
    }

    // -------------------------------------------------------------------------
    // Round trips
    // -------------------------------------------------------------------------

    #[test]
    fn template_round_trips_field_for_field() {
        let doc = make_template();
        let xml = write_template(&doc).unwrap();
        let back = parse_template(&xml).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn wayline_round_trips_field_for_field() {
        let doc = make_wayline();
        let xml = write_wayline(&doc).unwrap();
        let back = parse_wayline(&xml).unwrap();
        assert_eq!(back, doc);
    }

    // -------------------------------------------------------------------------
    // Malformed input
    // -------------------------------------------------------------------------

    #[test]
    fn explicit_height_without_value_is_rejected() {
        let mut pm = template_placemark_to_xml(&TemplatePlacemark::at(117.0, 36.0));
        pm.use_global_height = Some(false);
        let result = template_placemark_from_xml(pm);
        assert!(matches!(result, Err(MissionError::MalformedDocument(_))));
    }

    #[test]
    fn unknown_actuator_function_is_rejected() {
        let action = ActionXml {
            action_id: 0,
            actuator_func: "openPodBayDoors".to_string(),
            param: ActionFuncParamXml::default(),
        };
        let result = action_from_xml(action);
        assert!(matches!(result, Err(MissionError::MalformedDocument(_))));
    }

    #[test]
    fn non_sequence_action_group_is_rejected() {
        let mut group = action_group_to_xml(&make_action_group());
        group.mode = "parallel".to_string();
        let result = action_group_from_xml(group);
        assert!(matches!(result, Err(MissionError::MalformedDocument(_))));
    }

    #[test]
    fn wayline_without_mission_config_is_rejected() {
        let xml = write_wayline(&make_wayline())
            .unwrap()
            .replace("wpml:missionConfig", "wpml:oldConfig");
        let result = parse_wayline(&xml);
        assert!(matches!(result, Err(MissionError::MalformedDocument(_))));
    }

    #[test]
    fn action_round_trips_through_wire_form() {
        let group = make_action_group();
        let back = action_group_from_xml(action_group_to_xml(&group)).unwrap();
        assert_eq!(back, group);
    }
}
