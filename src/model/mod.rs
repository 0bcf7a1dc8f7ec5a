pub mod action;
pub mod config;
pub mod document;
pub mod folder;
pub mod inherit;
pub mod placemark;

pub use action::{
    Action, ActionGroup, ActionPayload, ActionTrigger, ActionTriggerType, FocusParam,
    GimbalRotateMode, GimbalRotateParam, HoverParam, RecordParam, RotateYawParam, TakePhotoParam,
    YawPathMode, ZoomParam,
};
pub use config::{
    AutoRerouteInfo, DroneInfo, FinishAction, FlyToWaylineMode, MissionConfig, PayloadInfo,
    RcLostAction, RcLostBehavior, TakeoffRefPoint,
};
pub use document::{TemplateDocument, WaylineDocument};
pub use folder::{
    CoordinateMode, ExecuteHeightMode, FocusMode, GimbalPitchMode, HeightMode, PayloadParam,
    TemplateFolder, TemplateType, WaylineCoordinateSysParam, WaylineFolder,
};
pub use inherit::Inheritable;
pub use placemark::{
    Point, PointHeight, PoiPoint, TemplatePlacemark, WaylinePlacemark, WaypointGimbalHeadingParam,
    WaypointHeadingMode, WaypointHeadingParam, WaypointHeadingPathMode, WaypointTurnMode,
    WaypointTurnParam, WORK_TYPE_NONE,
};
