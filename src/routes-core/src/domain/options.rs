use chrono_tz::Tz;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub zoom_start: u8,
    pub line_weight: u32,
    pub line_opacity: f64,
    /// Timezone used for the human readable time in marker popups. When unset popups show
    /// the time as written in the source.
    pub display_timezone: Option<Tz>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom_start: 6,
            line_weight: 3,
            line_opacity: 0.7,
            display_timezone: None,
        }
    }
}

/// Playback configuration of the time slider driving the animated layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Time advanced per tick.
    #[serde(with = "humantime_serde")]
    pub period: Duration,
    /// How long a point stays visible after its timestamp, forever when unset.
    #[serde(with = "humantime_serde")]
    pub duration: Option<Duration>,
    pub add_last_point: bool,
    pub auto_play: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub max_speed: f64,
    pub min_speed: f64,
    pub loop_button: bool,
    pub time_slider_drag_update: bool,
    pub speed_slider: bool,
    #[serde(with = "humantime_serde")]
    pub transition_time: Duration,
    /// moment.js format of the date shown in the control.
    pub date_options: String,
    pub position: String,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(5 * 60),
            duration: None,
            add_last_point: true,
            auto_play: false,
            loop_playback: false,
            max_speed: 5.0,
            min_speed: 0.1,
            loop_button: true,
            time_slider_drag_update: true,
            speed_slider: true,
            transition_time: Duration::from_millis(200),
            date_options: "YYYY-MM-DD HH:mm:ss".into(),
            position: "bottomleft".into(),
        }
    }
}

/// Formats `duration` as an ISO 8601 time period, e.g. `PT5M`.
///
/// Sub-second parts are dropped, a zero duration becomes `PT0S`.
pub fn iso8601_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    let mut out = String::from("PT");
    if hours > 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if seconds > 0 || total == 0 {
        out.push_str(&format!("{seconds}S"));
    }
    out
}
