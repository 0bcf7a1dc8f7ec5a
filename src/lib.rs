//! Waymark — WPML flight-mission document builder and KMZ packager.
//!
//! The crate covers the mission-build pipeline from authoring to artifact:
//!
//! 1. [`TemplateBuilder`] assembles a template document (mission config,
//!    flight-pattern folders, waypoints with inherit-or-explicit
//!    attributes).
//! 2. [`deriver::derive_wayline`] resolves every inherited attribute against
//!    its folder default and produces the executable wayline document.
//! 3. [`Mission`] serializes both documents to the vendor XML vocabulary and
//!    packages them as `wpmz/template.kml` + `wpmz/waylines.wpml` inside a
//!    `.kmz` archive.
//!
//! Everything is synchronous and allocation-only until the final archive
//! write; independent mission builds share no state and can run on any
//! number of threads.
//!
//! ```no_run
//! use waymark::{Mission, TemplateBuilder};
//! use waymark::model::{
//!     DroneInfo, FinishAction, FlyToWaylineMode, MissionConfig, PayloadInfo, RcLostBehavior,
//!     TemplateType,
//! };
//!
//! # fn main() -> Result<(), waymark::MissionError> {
//! let template = TemplateBuilder::new("fly")
//!     .mission_config(MissionConfig {
//!         fly_to_wayline_mode: FlyToWaylineMode::Safely,
//!         finish_action: FinishAction::GoHome,
//!         exit_on_rc_lost: RcLostBehavior::GoContinue,
//!         execute_rc_lost_action: None,
//!         take_off_security_height: 20.0,
//!         global_transitional_speed: 10.0,
//!         global_rth_height: None,
//!         take_off_ref_point: None,
//!         take_off_ref_point_agl_height: None,
//!         drone_info: DroneInfo { drone_enum_value: 68, drone_sub_enum_value: 0 },
//!         payload_info: PayloadInfo {
//!             payload_enum_value: 52,
//!             payload_sub_enum_value: 0,
//!             payload_position_index: 0,
//!         },
//!         auto_reroute_info: None,
//!     })
//!     .folder(TemplateType::Waypoint, 0)
//!     .placemark_at(117.1323, 36.6669)
//!     .placemark_at(117.1328, 36.6669)
//!     .done()
//!     .build();
//!
//! let mission = Mission::from_template(template)?;
//! mission.write_kmz("mission.kmz".as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod deriver;
pub mod error;
mod mission;
pub mod model;
pub mod package;
pub mod xml;

pub use builder::{FolderBuilder, TemplateBuilder};
pub use deriver::derive_wayline;
pub use error::MissionError;
pub use mission::Mission;
pub use model::{MissionConfig, TemplateDocument, TemplateType, WaylineDocument};
