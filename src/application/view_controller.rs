use crate::application::config::TimelineConfig;
use crate::domain::{
    development_data::{Aggregator, DataStore, GainsSummary, RaceMetric, Year},
    errors::{TimelineError, TimelineResult},
    logging::LogComponent,
    timeline::{
        AnimationTimer, ChartKind, ChartPayload, PlaybackState, RenderInstruction, RenderSink,
    },
};
use crate::view_state::{TimerCommand, Transition, ViewState};
use crate::{log_debug, log_info, log_warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Drives one chart instance: turns play/pause/scrub/scroll input into state
/// transitions, keeps its single animation timer in step with the state and
/// emits one render instruction per state entry.
pub struct ViewController<T: AnimationTimer, R: RenderSink> {
    store: Arc<DataStore>,
    config: TimelineConfig,
    view: ViewState,
    timer: T,
    renderer: R,
    payloads: HashMap<Year, ChartPayload>,
}

impl<T: AnimationTimer, R: RenderSink> ViewController<T, R> {
    pub fn new(
        store: Arc<DataStore>,
        timer: T,
        renderer: R,
        config: TimelineConfig,
    ) -> TimelineResult<Self> {
        config.validate()?;

        let first_year = store.first_year().ok_or_else(|| {
            TimelineError::Configuration(format!("chart '{}' has no data to show", config.chart_id))
        })?;
        let initial = config.initial_year.map(Year::new).unwrap_or(first_year);
        let view = ViewState::new(store.available_years().to_vec(), initial).ok_or_else(|| {
            TimelineError::Configuration(format!(
                "chart '{}' has no snapshot years",
                config.chart_id
            ))
        })?;

        log_info!(
            LogComponent::Application("ViewController"),
            "chart '{}' ({}) ready at {} over {} years",
            config.chart_id,
            config.chart,
            view.year(),
            view.years().len()
        );

        Ok(Self {
            store,
            config,
            view,
            timer,
            renderer,
            payloads: HashMap::new(),
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.view.state()
    }

    pub fn year(&self) -> Year {
        self.view.year()
    }

    pub fn available_years(&self) -> &[Year] {
        self.view.years()
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Emit the current state without changing it (first paint).
    pub fn render_current(&mut self) -> TimelineResult<()> {
        self.render(self.view.year())
    }

    pub fn play(&mut self) -> TimelineResult<Transition> {
        let transition = self.view.play();
        self.apply(transition)
    }

    pub fn pause(&mut self) -> TimelineResult<Transition> {
        let transition = self.view.pause();
        self.apply(transition)
    }

    /// Timer callback.
    pub fn tick(&mut self) -> TimelineResult<Transition> {
        let transition = self.view.tick();
        if !transition.render {
            log_debug!(
                LogComponent::Application("ViewController"),
                "ignoring tick for '{}' in state {}",
                self.config.chart_id,
                transition.state
            );
        }
        self.apply(transition)
    }

    pub fn scrub(&mut self, year: Year) -> TimelineResult<Transition> {
        let transition = self.view.scrub(year);
        self.apply(transition)
    }

    pub fn release(&mut self) -> TimelineResult<Transition> {
        let transition = self.view.release();
        self.apply(transition)
    }

    /// Scroll position or slider value expressed as a year.
    pub fn show_year(&mut self, year: Year) -> TimelineResult<Transition> {
        let transition = self.view.jump(year);
        self.apply(transition)
    }

    /// Scrollytelling step, counted from the first snapshot year.
    pub fn show_step(&mut self, step_index: usize) -> TimelineResult<Transition> {
        let year = self.view.step_year(step_index);
        self.show_year(year)
    }

    /// Switch the racing bar metric; stops a running race and redraws the current year.
    pub fn set_race_metric(&mut self, metric: RaceMetric) -> TimelineResult<Transition> {
        if self.config.race_metric != metric {
            self.config.race_metric = metric;
            self.payloads.clear();
        }
        let transition = self.view.jump(self.view.year());
        self.apply(Transition { render: true, ..transition })
    }

    /// West-vs-Rest gains between the first and last snapshot years.
    pub fn gains_summary(&self) -> TimelineResult<GainsSummary> {
        let years = self.view.years();
        let (Some(&start), Some(&end)) = (years.first(), years.last()) else {
            return Err(TimelineError::Configuration("no snapshot years".to_string()));
        };
        Ok(Aggregator::new(&self.store).gains_between(start, end)?)
    }

    fn apply(&mut self, transition: Transition) -> TimelineResult<Transition> {
        match transition.timer {
            TimerCommand::Start => {
                self.timer.cancel();
                self.timer.start(self.config.tick_interval_ms);
            }
            TimerCommand::Cancel => self.timer.cancel(),
            TimerCommand::Keep => {}
        }

        if transition.render {
            self.render(transition.year)?;
        }
        Ok(transition)
    }

    fn render(&mut self, year: Year) -> TimelineResult<()> {
        let payload = self.payload_for(year)?;
        let instruction = RenderInstruction {
            chart_id: self.config.chart_id.clone(),
            state: self.view.state(),
            year,
            payload,
        };

        if let Err(e) = self.renderer.render(&instruction) {
            log_warn!(
                LogComponent::Application("ViewController"),
                "render of '{}' at {} failed: {}",
                self.config.chart_id,
                year,
                e
            );
        }
        Ok(())
    }

    fn payload_for(&mut self, year: Year) -> TimelineResult<ChartPayload> {
        if let Some(payload) = self.payloads.get(&year) {
            return Ok(payload.clone());
        }

        let aggregator = Aggregator::new(&self.store);
        let payload = match self.config.chart {
            ChartKind::Timeline => ChartPayload::Timeline(aggregator.timeline_frame(year)?),
            ChartKind::RacingBars => {
                let metric = self.config.race_metric;
                ChartPayload::RacingBars {
                    metric,
                    entries: aggregator.race_ranking(year, metric, self.config.race_limit)?,
                }
            }
            ChartKind::Bubbles => ChartPayload::Bubbles {
                records: self.store.records_for_year(year)?.to_vec(),
            },
            ChartKind::Trajectory => ChartPayload::Trajectory {
                trajectories: aggregator.country_trajectories(&self.config.countries, year),
            },
            ChartKind::Radar => ChartPayload::Radar {
                profiles: aggregator.radar_profiles(year, &self.config.countries)?,
            },
            ChartKind::Stream => ChartPayload::Stream {
                rows: aggregator.stream_rows(year),
            },
        };

        self.payloads.insert(year, payload.clone());
        Ok(payload)
    }
}

impl<T: AnimationTimer, R: RenderSink> Drop for ViewController<T, R> {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
