use crate::domain::development_data::{
    AggregateSeries, CountryTrajectory, RaceEntry, RaceMetric, RadarProfile, RegionalGdpPoint,
    StreamRow, Year, YearRecord,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Playback state of one chart instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    #[display(fmt = "Idle")]
    Idle,
    #[display(fmt = "Animating")]
    Animating,
    #[display(fmt = "Scrubbing")]
    Scrubbing,
}

/// Chart a controller feeds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Scroll-linked wealth and health timeline
    #[default]
    #[display(fmt = "Timeline")]
    #[strum(serialize = "timeline")]
    Timeline,
    #[display(fmt = "RacingBars")]
    #[strum(serialize = "racing_bars")]
    RacingBars,
    #[display(fmt = "Bubbles")]
    #[strum(serialize = "bubbles")]
    Bubbles,
    /// GDP/life-expectancy paths of the focus countries
    #[display(fmt = "Trajectory")]
    #[strum(serialize = "trajectory")]
    Trajectory,
    #[display(fmt = "Radar")]
    #[strum(serialize = "radar")]
    Radar,
    /// Regional GDP stream graph
    #[display(fmt = "Stream")]
    #[strum(serialize = "stream")]
    Stream,
}

/// Series drawn by the timeline chart for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    pub year: Year,
    pub regional_trend: Vec<RegionalGdpPoint>,
    pub life_west: AggregateSeries,
    pub life_rest: AggregateSeries,
}

/// Chart specific part of a render instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartPayload {
    Timeline(TimelineFrame),
    RacingBars {
        metric: RaceMetric,
        entries: Vec<RaceEntry>,
    },
    Bubbles {
        records: Vec<YearRecord>,
    },
    Trajectory {
        trajectories: Vec<CountryTrajectory>,
    },
    Radar {
        profiles: Vec<RadarProfile>,
    },
    Stream {
        rows: Vec<StreamRow>,
    },
}

impl ChartPayload {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Timeline(_) => ChartKind::Timeline,
            Self::RacingBars { .. } => ChartKind::RacingBars,
            Self::Bubbles { .. } => ChartKind::Bubbles,
            Self::Trajectory { .. } => ChartKind::Trajectory,
            Self::Radar { .. } => ChartKind::Radar,
            Self::Stream { .. } => ChartKind::Stream,
        }
    }

    pub fn as_timeline(&self) -> Option<&TimelineFrame> {
        match self {
            Self::Timeline(frame) => Some(frame),
            _ => None,
        }
    }
}

/// Value handed to the rendering collaborator on every state entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInstruction {
    pub chart_id: String,
    pub state: PlaybackState,
    pub year: Year,
    pub payload: ChartPayload,
}
