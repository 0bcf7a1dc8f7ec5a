//! Template → wayline derivation.
//!
//! [`derive_wayline`] consumes a completed template document and produces
//! the executable wayline document: every inherit marker is resolved against
//! its folder default, template-only fields disappear (they have no
//! counterpart on the wayline types), and the wayline-only execution fields
//! are injected. The input is never mutated; both documents stay available
//! to the packager.
//!
//! Resolution is independent per placemark. A marker that points at a folder
//! default the template never set is a broken authoring invariant and fails
//! fast with `InvalidTemplate`, never a silent zero.

use tracing::debug;

use crate::error::MissionError;
use crate::model::document::{TemplateDocument, WaylineDocument};
use crate::model::folder::{ExecuteHeightMode, GimbalPitchMode, TemplateFolder, WaylineFolder};
use crate::model::inherit::Inheritable;
use crate::model::placemark::{
    TemplatePlacemark, WaylinePlacemark, WaypointGimbalHeadingParam, WaypointTurnParam,
    WORK_TYPE_NONE,
};

/// Derives the wayline document from a completed template.
///
/// Pure with respect to its input: a new tree is built, the template is left
/// untouched for packaging alongside the result.
pub fn derive_wayline(template: &TemplateDocument) -> Result<WaylineDocument, MissionError> {
    let mission_config = template
        .mission_config
        .clone()
        .ok_or_else(|| MissionError::InvalidTemplate("template has no mission config".into()))?;

    let folders = template
        .folders
        .iter()
        .enumerate()
        .map(|(position, folder)| derive_folder(position, folder))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(folders = folders.len(), "derived wayline document");
    Ok(WaylineDocument {
        mission_config,
        folders,
    })
}

fn invalid(folder: usize, detail: impl std::fmt::Display) -> MissionError {
    MissionError::InvalidTemplate(format!("folder {folder}: {detail}"))
}

fn derive_folder(position: usize, folder: &TemplateFolder) -> Result<WaylineFolder, MissionError> {
    let auto_flight_speed = folder
        .auto_flight_speed
        .ok_or_else(|| invalid(position, "no autoFlightSpeed"))?;

    let placemarks = folder
        .placemarks
        .iter()
        .map(|pm| derive_placemark(position, folder, pm))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        folder = position,
        placemarks = placemarks.len(),
        "resolved folder into wayline"
    );

    Ok(WaylineFolder {
        template_id: folder.template_id,
        // The wayline id is the folder's position in the sequence, not
        // anything carried over from the template.
        wayline_id: position as u32,
        execute_height_mode: ExecuteHeightMode::Wgs84,
        auto_flight_speed,
        distance: folder.distance,
        duration: folder.duration,
        start_action_group: None,
        placemarks,
    })
}

fn derive_placemark(
    position: usize,
    folder: &TemplateFolder,
    pm: &TemplatePlacemark,
) -> Result<WaylinePlacemark, MissionError> {
    let index = pm.index;

    let execute_height = match pm.height {
        Inheritable::Inherit => folder.global_height.ok_or_else(|| {
            invalid(
                position,
                format!("placemark {index} inherits height but folder has no globalHeight"),
            )
        })?,
        Inheritable::Explicit(h) => h.ellipsoid_height,
    };

    let waypoint_speed = match pm.speed {
        Inheritable::Inherit => folder.auto_flight_speed.ok_or_else(|| {
            invalid(
                position,
                format!("placemark {index} inherits speed but folder has no autoFlightSpeed"),
            )
        })?,
        Inheritable::Explicit(s) => s,
    };

    let heading = match pm.heading {
        Inheritable::Inherit => folder.global_heading.ok_or_else(|| {
            invalid(
                position,
                format!(
                    "placemark {index} inherits heading but folder has no globalWaypointHeadingParam"
                ),
            )
        })?,
        Inheritable::Explicit(h) => h,
    };

    // The folder default is a bare turn mode. Damping distance is not
    // inherited: an inherited turn takes the placemark's own damping
    // distance, or zero. Observed template behavior, kept as-is.
    let turn = match pm.turn {
        Inheritable::Inherit => WaypointTurnParam {
            waypoint_turn_mode: folder.global_turn_mode.ok_or_else(|| {
                invalid(
                    position,
                    format!(
                        "placemark {index} inherits turn but folder has no globalWaypointTurnMode"
                    ),
                )
            })?,
            waypoint_turn_damping_dist: Some(pm.turn_damping_dist.unwrap_or(0.0)),
        },
        Inheritable::Explicit(t) => t,
    };

    // Marker set: copy the folder flag. Marker cleared or absent: the
    // derived placemark carries no straight-line field at all.
    let use_straight_line = match pm.use_straight_line {
        Some(true) => Some(folder.global_use_straight_line.ok_or_else(|| {
            invalid(
                position,
                format!(
                    "placemark {index} inherits straight-line but folder has no globalUseStraightLine"
                ),
            )
        })?),
        Some(false) | None => None,
    };

    // Manual gimbal pitch gets a zeroed gimbal heading regardless of what
    // the template carried; other modes have no use for the block.
    let gimbal_heading = if folder.gimbal_pitch_mode == Some(GimbalPitchMode::Manual) {
        Some(WaypointGimbalHeadingParam::zeroed())
    } else {
        None
    };

    Ok(WaylinePlacemark {
        point: pm.point,
        index,
        execute_height,
        waypoint_speed,
        heading,
        turn,
        use_straight_line,
        gimbal_pitch_angle: pm.gimbal_pitch_angle,
        gimbal_heading,
        is_risky: pm.is_risky,
        work_type: WORK_TYPE_NONE,
        action_group: pm.action_group.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::MissionConfig;
    use crate::model::folder::TemplateType;
    use crate::model::placemark::{
        PointHeight, WaypointHeadingMode, WaypointHeadingParam, WaypointTurnMode,
    };

    fn make_folder() -> TemplateFolder {
        TemplateFolder {
            template_id: Some(0),
            template_type: Some(TemplateType::Waypoint),
            coordinate_sys: None,
            auto_flight_speed: Some(5.0),
            global_height: Some(50.0),
            gimbal_pitch_mode: Some(GimbalPitchMode::Manual),
            global_heading: Some(WaypointHeadingParam::follow_wayline()),
            global_turn_mode: Some(WaypointTurnMode::ToPointAndStopWithDiscontinuityCurvature),
            global_use_straight_line: Some(true),
            payload_param: None,
            distance: None,
            duration: None,
            placemarks: vec![],
        }
    }

    fn make_template(folders: Vec<TemplateFolder>) -> TemplateDocument {
        TemplateDocument {
            author: Some("fly".to_string()),
            create_time: Some(1_702_051_864_938),
            update_time: Some(1_702_051_864_938),
            mission_config: Some(MissionConfig::sample()),
            folders,
        }
    }

    fn placemark_at_index(index: u32) -> TemplatePlacemark {
        let mut pm = TemplatePlacemark::at(117.1323 + 0.0001 * f64::from(index), 36.6669);
        pm.index = index;
        pm
    }

    // -------------------------------------------------------------------------
    // Folder-level fields
    // -------------------------------------------------------------------------

    #[test]
    fn wayline_ids_follow_folder_positions() {
        let mut second = make_folder();
        second.template_id = Some(7); // deliberately unrelated to position
        let doc = make_template(vec![make_folder(), second]);
        let wayline = derive_wayline(&doc).unwrap();
        assert_eq!(wayline.folders[0].wayline_id, 0);
        assert_eq!(wayline.folders[1].wayline_id, 1);
        assert_eq!(wayline.folders[1].template_id, Some(7));
    }

    #[test]
    fn execute_height_mode_is_always_wgs84() {
        let doc = make_template(vec![make_folder()]);
        let wayline = derive_wayline(&doc).unwrap();
        assert_eq!(
            wayline.folders[0].execute_height_mode,
            ExecuteHeightMode::Wgs84
        );
    }

    #[test]
    fn folder_speed_distance_duration_carry_over() {
        let mut folder = make_folder();
        folder.distance = Some(124.5);
        folder.duration = Some(62.0);
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].auto_flight_speed, 5.0);
        assert_eq!(wayline.folders[0].distance, Some(124.5));
        assert_eq!(wayline.folders[0].duration, Some(62.0));
    }

    #[test]
    fn missing_folder_speed_is_invalid() {
        let mut folder = make_folder();
        folder.auto_flight_speed = None;
        let result = derive_wayline(&make_template(vec![folder]));
        assert!(matches!(result, Err(MissionError::InvalidTemplate(_))));
    }

    #[test]
    fn missing_mission_config_is_invalid() {
        let mut doc = make_template(vec![make_folder()]);
        doc.mission_config = None;
        let result = derive_wayline(&doc);
        assert!(matches!(result, Err(MissionError::InvalidTemplate(_))));
    }

    // -------------------------------------------------------------------------
    // Height resolution
    // -------------------------------------------------------------------------

    #[test]
    fn inherited_height_copies_folder_global() {
        let mut folder = make_folder();
        folder.placemarks = vec![placemark_at_index(0)];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].execute_height, 50.0);
    }

    #[test]
    fn explicit_height_uses_own_ellipsoid_height() {
        let mut pm = placemark_at_index(0);
        pm.height = Inheritable::Explicit(PointHeight {
            ellipsoid_height: 88.5,
            height: 60.0,
        });
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].execute_height, 88.5);
    }

    #[test]
    fn inherited_height_without_folder_default_is_invalid() {
        let mut folder = make_folder();
        folder.global_height = None;
        folder.placemarks = vec![placemark_at_index(0)];
        let result = derive_wayline(&make_template(vec![folder]));
        match result {
            Err(MissionError::InvalidTemplate(msg)) => {
                assert!(msg.contains("globalHeight"), "got: {msg}");
            }
            other => panic!("expected InvalidTemplate, got {other:?}"),
        }
    }

    // -------------------------------------------------------------------------
    // Speed resolution
    // -------------------------------------------------------------------------

    #[test]
    fn inherited_speed_copies_folder_speed() {
        let mut folder = make_folder();
        folder.placemarks = vec![placemark_at_index(0)];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].waypoint_speed, 5.0);
    }

    #[test]
    fn explicit_speed_is_retained() {
        let mut pm = placemark_at_index(0);
        pm.speed = Inheritable::Explicit(3.5);
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].waypoint_speed, 3.5);
    }

    // -------------------------------------------------------------------------
    // Heading resolution
    // -------------------------------------------------------------------------

    #[test]
    fn inherited_heading_copies_folder_default() {
        let mut folder = make_folder();
        folder.placemarks = vec![placemark_at_index(0)];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(
            wayline.folders[0].placemarks[0].heading,
            WaypointHeadingParam::follow_wayline()
        );
    }

    #[test]
    fn explicit_heading_is_retained() {
        let own = WaypointHeadingParam {
            waypoint_heading_mode: WaypointHeadingMode::Fixed,
            waypoint_heading_angle: Some(90.0),
            waypoint_poi_point: None,
            waypoint_heading_path_mode:
                crate::model::placemark::WaypointHeadingPathMode::Clockwise,
        };
        let mut pm = placemark_at_index(0);
        pm.heading = Inheritable::Explicit(own);
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].heading, own);
    }

    #[test]
    fn inherited_heading_without_folder_default_is_invalid() {
        let mut folder = make_folder();
        folder.global_heading = None;
        folder.placemarks = vec![placemark_at_index(0)];
        let result = derive_wayline(&make_template(vec![folder]));
        assert!(matches!(result, Err(MissionError::InvalidTemplate(_))));
    }

    // -------------------------------------------------------------------------
    // Turn resolution — damping distance is deliberately not inherited
    // -------------------------------------------------------------------------

    #[test]
    fn inherited_turn_takes_folder_mode_with_zero_damping() {
        let mut folder = make_folder();
        folder.placemarks = vec![placemark_at_index(0)];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(
            wayline.folders[0].placemarks[0].turn,
            WaypointTurnParam {
                waypoint_turn_mode: WaypointTurnMode::ToPointAndStopWithDiscontinuityCurvature,
                waypoint_turn_damping_dist: Some(0.0),
            }
        );
    }

    #[test]
    fn inherited_turn_keeps_placemark_level_damping() {
        let mut pm = placemark_at_index(0);
        pm.turn_damping_dist = Some(2.5);
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(
            wayline.folders[0].placemarks[0]
                .turn
                .waypoint_turn_damping_dist,
            Some(2.5)
        );
    }

    #[test]
    fn explicit_turn_is_retained_unchanged() {
        let own = WaypointTurnParam {
            waypoint_turn_mode: WaypointTurnMode::CoordinateTurn,
            waypoint_turn_damping_dist: Some(4.0),
        };
        let mut pm = placemark_at_index(0);
        pm.turn = Inheritable::Explicit(own);
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].turn, own);
    }

    // -------------------------------------------------------------------------
    // Straight-line resolution
    // -------------------------------------------------------------------------

    #[test]
    fn straight_line_marker_copies_folder_flag() {
        let mut folder = make_folder();
        folder.global_use_straight_line = Some(false);
        folder.placemarks = vec![placemark_at_index(0)];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(
            wayline.folders[0].placemarks[0].use_straight_line,
            Some(false)
        );
    }

    #[test]
    fn cleared_straight_line_marker_clears_field() {
        let mut pm = placemark_at_index(0);
        pm.use_straight_line = Some(false);
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].use_straight_line, None);
    }

    // -------------------------------------------------------------------------
    // Gimbal heading and work type
    // -------------------------------------------------------------------------

    #[test]
    fn manual_gimbal_mode_overrides_with_zeroed_heading() {
        let mut pm = placemark_at_index(0);
        pm.gimbal_heading = Some(WaypointGimbalHeadingParam {
            waypoint_gimbal_pitch_angle: -30.0,
            waypoint_gimbal_yaw_angle: 15.0,
        });
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(
            wayline.folders[0].placemarks[0].gimbal_heading,
            Some(WaypointGimbalHeadingParam::zeroed())
        );
    }

    #[test]
    fn non_manual_gimbal_mode_drops_gimbal_heading() {
        let mut pm = placemark_at_index(0);
        pm.gimbal_heading = Some(WaypointGimbalHeadingParam::zeroed());
        let mut folder = make_folder();
        folder.gimbal_pitch_mode = Some(GimbalPitchMode::UsePointSetting);
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].gimbal_heading, None);
    }

    #[test]
    fn work_type_is_forced_to_none_value() {
        let mut pm = placemark_at_index(0);
        pm.work_type = Some(3);
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].work_type, WORK_TYPE_NONE);
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    #[test]
    fn indices_and_geometry_are_preserved_in_order() {
        let mut folder = make_folder();
        folder.placemarks = (0..3).map(placemark_at_index).collect();
        let doc = make_template(vec![folder]);
        let wayline = derive_wayline(&doc).unwrap();
        let derived = &wayline.folders[0].placemarks;
        assert_eq!(derived.len(), 3);
        for (i, pm) in derived.iter().enumerate() {
            assert_eq!(pm.index as usize, i);
            assert_eq!(pm.point, doc.folders[0].placemarks[i].point);
        }
    }

    #[test]
    fn input_template_is_left_untouched() {
        let mut folder = make_folder();
        folder.placemarks = vec![placemark_at_index(0)];
        let doc = make_template(vec![folder]);
        let before = doc.clone();
        let _ = derive_wayline(&doc).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn action_group_is_carried_onto_derived_placemark() {
        use crate::model::action::{
            Action, ActionGroup, ActionPayload, ActionTrigger, ActionTriggerType, HoverParam,
        };
        let group = ActionGroup {
            group_id: 0,
            start_index: 0,
            end_index: 0,
            trigger: ActionTrigger {
                trigger_type: ActionTriggerType::ReachPoint,
                param: None,
            },
            actions: vec![Action {
                action_id: 0,
                payload: ActionPayload::Hover(HoverParam { hover_time: 2.0 }),
            }],
        };
        let mut pm = placemark_at_index(0);
        pm.action_group = Some(group.clone());
        let mut folder = make_folder();
        folder.placemarks = vec![pm];
        let wayline = derive_wayline(&make_template(vec![folder])).unwrap();
        assert_eq!(wayline.folders[0].placemarks[0].action_group, Some(group));
    }
}
