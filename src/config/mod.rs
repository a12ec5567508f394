use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_MAP_CENTER, SEARCH_DEBOUNCE_MS};
use crate::geometry::LatLng;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Base URL of the entity store, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Initial map centre as `[lat, lng]`
    #[serde(default = "default_map_center")]
    pub map_center: [f64; 2],

    /// Initial camera scale (1.0 shows the whole default region)
    #[serde(default = "default_map_zoom")]
    pub map_zoom: f32,

    /// Quiet period before a search term is applied
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_map_center() -> [f64; 2] {
    DEFAULT_MAP_CENTER
}

fn default_map_zoom() -> f32 {
    1.0
}

fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            map_center: default_map_center(),
            map_zoom: default_map_zoom(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl AppConfigData {
    pub fn map_center(&self) -> LatLng {
        LatLng::new(self.map_center[0], self.map_center[1])
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Base URL with any trailing slashes removed
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Parse config JSON, falling back to defaults with a user-facing reason
fn parse_config(json: &str) -> (AppConfigData, Option<String>) {
    match serde_json::from_str(json) {
        Ok(data) => (data, None),
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Configuration file was corrupted: {}", e)),
            )
        }
    }
}

/// Load configuration from disk
fn load_config(config_path: PathBuf) -> (AppConfig, Option<String>) {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => {
                let parsed = parse_config(&json);
                if parsed.1.is_none() {
                    info!("Loaded config from {:?}", config_path);
                }
                parsed
            }
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    (
        AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    )
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (loaded, reset_reason) = load_config(crate::paths::config_file());
    *config = loaded;

    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
        // Write the defaults back so the next start is clean
        config.dirty = true;
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}
