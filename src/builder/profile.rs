//! Flight-pattern default profiles.
//!
//! Each template type ships with a builtin profile describing the folder
//! defaults a freshly created folder starts from. Profiles are TOML assets
//! embedded in the crate and parsed once on first use; the
//! `builtin_profiles_parse` test keeps them honest.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::model::folder::{
    CoordinateMode, GimbalPitchMode, HeightMode, TemplateFolder, TemplateType,
    WaylineCoordinateSysParam,
};
use crate::model::placemark::{
    WaypointHeadingMode, WaypointHeadingParam, WaypointHeadingPathMode, WaypointTurnMode,
};

/// `[meta]` — display information.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfileMeta {
    pub name: String,
    pub description: String,
}

/// `[flight]` — speed, height and path defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FlightDefaults {
    /// Folder flight speed in m/s.
    pub auto_flight_speed: f64,
    /// Folder height relative to the takeoff point, in meters.
    pub global_height: f64,
    /// Whether segments hug the straight line between waypoints.
    pub straight_line: bool,
}

/// `[gimbal]` — gimbal pitch control default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GimbalDefaults {
    pub pitch_mode: GimbalPitchMode,
}

/// `[heading]` — heading-control defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HeadingDefaults {
    pub mode: WaypointHeadingMode,
    pub path_mode: WaypointHeadingPathMode,
}

/// `[turn]` — waypoint turn default. Mode only; a folder default never
/// carries a damping distance.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TurnDefaults {
    pub mode: WaypointTurnMode,
}

/// `[coordinate]` — template coordinate-system defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CoordinateDefaults {
    pub height_mode: HeightMode,
}

/// Fully describes the folder defaults of one flight pattern. Loaded from a
/// TOML asset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PatternProfile {
    pub meta: ProfileMeta,
    pub flight: FlightDefaults,
    pub gimbal: GimbalDefaults,
    pub heading: HeadingDefaults,
    pub turn: TurnDefaults,
    pub coordinate: CoordinateDefaults,
}

/// Parses a profile TOML document.
pub fn parse(toml_text: &str) -> Result<PatternProfile, toml::de::Error> {
    toml::from_str(toml_text)
}

macro_rules! builtin_profile {
    ($name:ident, $file:literal) => {
        static $name: LazyLock<PatternProfile> = LazyLock::new(|| {
            parse(include_str!($file))
                .unwrap_or_else(|e| panic!("builtin profile {} is invalid: {e}", $file))
        });
    };
}

builtin_profile!(WAYPOINT, "profiles/waypoint.toml");
builtin_profile!(MAPPING2D, "profiles/mapping2d.toml");
builtin_profile!(MAPPING3D, "profiles/mapping3d.toml");
builtin_profile!(MAPPING_STRIP, "profiles/mapping_strip.toml");

impl PatternProfile {
    /// The builtin profile for a template type.
    pub fn builtin(template_type: TemplateType) -> &'static PatternProfile {
        match template_type {
            TemplateType::Waypoint => &WAYPOINT,
            TemplateType::Mapping2d => &MAPPING2D,
            TemplateType::Mapping3d => &MAPPING3D,
            TemplateType::MappingStrip => &MAPPING_STRIP,
        }
    }

    /// A new, empty template folder carrying this profile's defaults.
    pub fn new_folder(&self, template_type: TemplateType, template_id: u32) -> TemplateFolder {
        TemplateFolder {
            template_id: Some(template_id),
            template_type: Some(template_type),
            coordinate_sys: Some(WaylineCoordinateSysParam {
                coordinate_mode: CoordinateMode::Wgs84,
                height_mode: self.coordinate.height_mode,
            }),
            auto_flight_speed: Some(self.flight.auto_flight_speed),
            global_height: Some(self.flight.global_height),
            gimbal_pitch_mode: Some(self.gimbal.pitch_mode),
            global_heading: Some(WaypointHeadingParam {
                waypoint_heading_mode: self.heading.mode,
                waypoint_heading_angle: None,
                waypoint_poi_point: None,
                waypoint_heading_path_mode: self.heading.path_mode,
            }),
            global_turn_mode: Some(self.turn.mode),
            global_use_straight_line: Some(self.flight.straight_line),
            payload_param: None,
            distance: None,
            duration: None,
            placemarks: Vec::new(),
        }
    }
}
