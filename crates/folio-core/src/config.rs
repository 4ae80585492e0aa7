use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::effects::TypingTimings;
use crate::nav::NavConfig;
use crate::stats::{PortfolioStats, StatMinimums};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub globe: GlobeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Texts shown on the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Rotating role titles in the hero section
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    /// Typed once when the hero terminal becomes visible
    #[serde(default = "default_terminal_prompt")]
    pub terminal_prompt: String,
    /// Typed once when the collaboration section becomes visible
    #[serde(default = "default_collaboration_text")]
    pub collaboration_text: String,
    /// Rotating code snippets in the collaboration section
    #[serde(default = "default_code_snippets")]
    pub code_snippets: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            roles: default_roles(),
            terminal_prompt: default_terminal_prompt(),
            collaboration_text: default_collaboration_text(),
            code_snippets: default_code_snippets(),
        }
    }
}

/// Typing effect delays in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingConfig {
    #[serde(default = "default_forward_delay")]
    pub forward_delay_ms: u64,
    #[serde(default = "default_backward_delay")]
    pub backward_delay_ms: u64,
    /// Hold at the fully typed item before deleting
    #[serde(default = "default_end_pause")]
    pub end_pause_ms: u64,
    /// Gap between deleting one item and typing the next
    #[serde(default = "default_start_pause")]
    pub start_pause_ms: u64,
    /// Delay before the role title starts after load
    #[serde(default = "default_start_delay")]
    pub start_delay_ms: u64,
    /// Per-character delay of the single-shot texts
    #[serde(default = "default_single_shot_delay")]
    pub single_shot_delay_ms: u64,
    /// Code snippets type faster than the role title
    #[serde(default = "default_snippet_forward_delay")]
    pub snippet_forward_delay_ms: u64,
    #[serde(default = "default_snippet_backward_delay")]
    pub snippet_backward_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            forward_delay_ms: default_forward_delay(),
            backward_delay_ms: default_backward_delay(),
            end_pause_ms: default_end_pause(),
            start_pause_ms: default_start_pause(),
            start_delay_ms: default_start_delay(),
            single_shot_delay_ms: default_single_shot_delay(),
            snippet_forward_delay_ms: default_snippet_forward_delay(),
            snippet_backward_delay_ms: default_snippet_backward_delay(),
        }
    }
}

impl TypingConfig {
    /// Timings for the hero role title
    pub fn role_timings(&self) -> TypingTimings {
        TypingTimings {
            forward: Duration::from_millis(self.forward_delay_ms),
            backward: Duration::from_millis(self.backward_delay_ms),
            end_pause: Duration::from_millis(self.end_pause_ms),
            start_pause: Duration::from_millis(self.start_pause_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
        }
    }

    /// Timings for the rotating code snippets
    pub fn snippet_timings(&self) -> TypingTimings {
        TypingTimings {
            forward: Duration::from_millis(self.snippet_forward_delay_ms),
            backward: Duration::from_millis(self.snippet_backward_delay_ms),
            start_delay: Duration::ZERO,
            ..self.role_timings()
        }
    }

    /// Timings for single-shot texts (only forward and start delay matter)
    pub fn single_shot_timings(&self) -> TypingTimings {
        TypingTimings {
            forward: Duration::from_millis(self.single_shot_delay_ms),
            start_delay: Duration::ZERO,
            ..self.role_timings()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Repository owner whose public repositories are counted
    #[serde(default = "default_username")]
    pub username: String,
    /// Repository API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Count-up duration for stat counters
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    /// Values shown when the API cannot be reached
    #[serde(default = "PortfolioStats::fallback")]
    pub fallback: PortfolioStats,
    /// Lower bounds applied to every derived count
    #[serde(default)]
    pub minimums: StatMinimums,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_timeout(),
            counter_duration_ms: default_counter_duration(),
            fallback: PortfolioStats::fallback(),
            minimums: StatMinimums::default(),
        }
    }
}

impl StatsConfig {
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobeConfig {
    /// Number of points on the sphere
    #[serde(default = "default_globe_points")]
    pub points: usize,
    /// Auto-rotation speed in radians per second
    #[serde(default = "default_globe_speed")]
    pub rotation_speed: f64,
    /// Idle time after a drag before auto-rotation resumes
    #[serde(default = "default_globe_resume")]
    pub resume_after_ms: u64,
    /// Figures shown under the globe, counted up from their display text
    #[serde(default = "default_globe_figures")]
    pub figures: Vec<ReachFigure>,
}

/// A labelled figure such as `"12+"` countries or `"98%"` satisfaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachFigure {
    pub label: String,
    pub value: String,
}

impl ReachFigure {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            points: default_globe_points(),
            rotation_speed: default_globe_speed(),
            resume_after_ms: default_globe_resume(),
            figures: default_globe_figures(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for smooth scrolling to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate jumps to a section instead of snapping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while any animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_name() -> String {
    "Elenyx".to_string()
}

fn default_roles() -> Vec<String> {
    [
        "Full Stack Developer",
        "UI/UX Designer",
        "Problem Solver",
        "Code Enthusiast",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_terminal_prompt() -> String {
    "$ whoami && cat skills.txt".to_string()
}

fn default_collaboration_text() -> String {
    "Open to freelance work, Discord bot commissions and open-source collaboration. Let's build something together.".to_string()
}

fn default_code_snippets() -> Vec<String> {
    [
        "const bot = new Client({ intents: [Guilds] });",
        "SELECT * FROM tickets WHERE status = 'open';",
        "docker compose up -d --build",
        "fn main() { println!(\"hello\"); }",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_forward_delay() -> u64 {
    100
}

fn default_backward_delay() -> u64 {
    50
}

fn default_end_pause() -> u64 {
    2000
}

fn default_start_pause() -> u64 {
    500
}

fn default_start_delay() -> u64 {
    1000
}

fn default_single_shot_delay() -> u64 {
    60
}

fn default_snippet_forward_delay() -> u64 {
    75
}

fn default_snippet_backward_delay() -> u64 {
    35
}

fn default_username() -> String {
    "Elenyx".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_globe_points() -> usize {
    600
}

fn default_globe_speed() -> f64 {
    0.5
}

fn default_globe_resume() -> u64 {
    1500
}

fn default_globe_figures() -> Vec<ReachFigure> {
    vec![
        ReachFigure::new("Countries", "12+"),
        ReachFigure::new("Clients", "25+"),
        ReachFigure::new("Satisfaction", "98%"),
    ]
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_duration() -> u64 {
    300
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
