//! The fixed catalog of marine parameters and the record keyed by it.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Marker shown in place of a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// One of the 18 marine/surf measurements requested from the marine API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarineParameter {
    SeaLevelHeightMsl,
    SeaSurfaceTemperature,
    OceanCurrentVelocity,
    OceanCurrentDirection,
    SecondarySwellWaveDirection,
    SecondarySwellWavePeriod,
    SecondarySwellWaveHeight,
    SwellWavePeakPeriod,
    SwellWavePeriod,
    SwellWaveDirection,
    SwellWaveHeight,
    WaveHeight,
    WaveDirection,
    WavePeriod,
    WindWavePeakPeriod,
    WindWaveHeight,
    WindWaveDirection,
    WindWavePeriod,
}

impl MarineParameter {
    pub const COUNT: usize = 18;

    /// Canonical order, as requested upstream and as displayed.
    pub const ALL: [MarineParameter; Self::COUNT] = [
        Self::SeaLevelHeightMsl,
        Self::SeaSurfaceTemperature,
        Self::OceanCurrentVelocity,
        Self::OceanCurrentDirection,
        Self::SecondarySwellWaveDirection,
        Self::SecondarySwellWavePeriod,
        Self::SecondarySwellWaveHeight,
        Self::SwellWavePeakPeriod,
        Self::SwellWavePeriod,
        Self::SwellWaveDirection,
        Self::SwellWaveHeight,
        Self::WaveHeight,
        Self::WaveDirection,
        Self::WavePeriod,
        Self::WindWavePeakPeriod,
        Self::WindWaveHeight,
        Self::WindWaveDirection,
        Self::WindWavePeriod,
    ];

    /// Name used by the marine API (`current=` list and response keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeaLevelHeightMsl => "sea_level_height_msl",
            Self::SeaSurfaceTemperature => "sea_surface_temperature",
            Self::OceanCurrentVelocity => "ocean_current_velocity",
            Self::OceanCurrentDirection => "ocean_current_direction",
            Self::SecondarySwellWaveDirection => "secondary_swell_wave_direction",
            Self::SecondarySwellWavePeriod => "secondary_swell_wave_period",
            Self::SecondarySwellWaveHeight => "secondary_swell_wave_height",
            Self::SwellWavePeakPeriod => "swell_wave_peak_period",
            Self::SwellWavePeriod => "swell_wave_period",
            Self::SwellWaveDirection => "swell_wave_direction",
            Self::SwellWaveHeight => "swell_wave_height",
            Self::WaveHeight => "wave_height",
            Self::WaveDirection => "wave_direction",
            Self::WavePeriod => "wave_period",
            Self::WindWavePeakPeriod => "wind_wave_peak_period",
            Self::WindWaveHeight => "wind_wave_height",
            Self::WindWaveDirection => "wind_wave_direction",
            Self::WindWavePeriod => "wind_wave_period",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeaLevelHeightMsl => "Sea Level Height (MSL)",
            Self::SeaSurfaceTemperature => "Sea Surface Temperature",
            Self::OceanCurrentVelocity => "Ocean Current Velocity",
            Self::OceanCurrentDirection => "Ocean Current Direction",
            Self::SecondarySwellWaveDirection => "Secondary Swell Wave Direction",
            Self::SecondarySwellWavePeriod => "Secondary Swell Wave Period",
            Self::SecondarySwellWaveHeight => "Secondary Swell Wave Height",
            Self::SwellWavePeakPeriod => "Swell Wave Peak Period",
            Self::SwellWavePeriod => "Swell Wave Period",
            Self::SwellWaveDirection => "Swell Wave Direction",
            Self::SwellWaveHeight => "Swell Wave Height",
            Self::WaveHeight => "Wave Height",
            Self::WaveDirection => "Wave Direction",
            Self::WavePeriod => "Wave Period",
            Self::WindWavePeakPeriod => "Wind Wave Peak Period",
            Self::WindWaveHeight => "Wind Wave Height",
            Self::WindWaveDirection => "Wind Wave Direction",
            Self::WindWavePeriod => "Wind Wave Period",
        }
    }

    /// Display unit; sea level height is reported without one
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::SeaLevelHeightMsl => None,
            Self::SeaSurfaceTemperature => Some("°C"),
            Self::OceanCurrentVelocity => Some("m/s"),
            Self::OceanCurrentDirection
            | Self::SecondarySwellWaveDirection
            | Self::SwellWaveDirection
            | Self::WaveDirection
            | Self::WindWaveDirection => Some("°"),
            Self::SecondarySwellWavePeriod
            | Self::SwellWavePeakPeriod
            | Self::SwellWavePeriod
            | Self::WavePeriod
            | Self::WindWavePeakPeriod
            | Self::WindWavePeriod => Some("s"),
            Self::SecondarySwellWaveHeight
            | Self::SwellWaveHeight
            | Self::WaveHeight
            | Self::WindWaveHeight => Some("m"),
        }
    }

    /// Comma-joined names for the marine API `current=` parameter
    pub fn query_list() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for MarineParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every catalog parameter, `None` where absent.
///
/// The key set is the whole catalog by construction; there is no way to drop
/// or add a key.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarineRecord {
    values: [Option<f64>; MarineParameter::COUNT],
}

impl MarineRecord {
    /// Every parameter absent
    pub fn all_absent() -> Self {
        Self::default()
    }

    pub fn get(&self, param: MarineParameter) -> Option<f64> {
        self.values[param.index()]
    }

    pub fn set(&mut self, param: MarineParameter, value: Option<f64>) {
        self.values[param.index()] = value;
    }

    /// Builder-style `set`
    pub fn with(mut self, param: MarineParameter, value: f64) -> Self {
        self.set(param, Some(value));
        self
    }

    /// All parameters in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (MarineParameter, Option<f64>)> + '_ {
        MarineParameter::ALL.iter().map(|p| (*p, self.get(*p)))
    }

    pub fn is_all_absent(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// `(label, value)` rows for display; absent values read "N/A"
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(param, value)| (param.label(), format_value(value, param.unit())))
            .collect()
    }
}

fn format_value(value: Option<f64>, unit: Option<&str>) -> String {
    match (value, unit) {
        (None, _) => NOT_AVAILABLE.to_string(),
        (Some(v), Some(u)) if u.starts_with('°') => format!("{}{}", v, u),
        (Some(v), Some(u)) => format!("{} {}", v, u),
        (Some(v), None) => v.to_string(),
    }
}

impl Serialize for MarineRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MarineParameter::COUNT))?;
        for (param, value) in self.iter() {
            map.serialize_entry(param.as_str(), &value)?;
        }
        map.end()
    }
}
