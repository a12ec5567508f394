//! Centralized constants used across the application.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Entity store used when the config file does not name one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Initial map centre `[lat, lng]` (central Anatolia)
pub const DEFAULT_MAP_CENTER: [f64; 2] = [39.0, 35.0];

/// Quiet period before a typed search term is applied
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// How long a toast stays on screen
pub const TOAST_DURATION_SECS: f32 = 4.0;

/// Pointer travel in screen pixels before a press on an overlay becomes a drag
pub const DRAG_THRESHOLD_PX: f32 = 4.0;

/// Screen-space pick radius for markers and vertices
pub const PICK_RADIUS_PX: f32 = 8.0;

/// Screen-space pick distance for polyline segments
pub const LINE_PICK_TOLERANCE_PX: f32 = 6.0;

/// Characters of geometry text shown in the entity list
pub const GEOMETRY_PREVIEW_CHARS: usize = 30;

/// Half-extent of the world in projected units
pub const WORLD_HALF_EXTENT: f64 = 4096.0;

/// Camera zoom limits
pub const MIN_ZOOM: f32 = 0.002;
pub const MAX_ZOOM: f32 = 4.0;

/// Camera scale that shows roughly the default region at `map_zoom = 1.0`
pub const BASE_CAMERA_SCALE: f32 = 0.3;

/// Decimal places kept for positions produced by dragging (about 0.1 m)
pub const DRAG_COORDINATE_DECIMALS: i32 = 6;
