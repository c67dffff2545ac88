use std::cell::{Cell, OnceCell, RefCell};
use std::rc::{Rc, Weak};
use std::str::FromStr;
use std::sync::Arc;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::application::{ChartStatus, StatusTracking, TimelineConfig, ViewController};
use crate::domain::{
    development_data::{Aggregator, DataStore, RaceMetric, Region, Year},
    errors::{TimelineError, TimelineResult},
    logging::LogComponent,
    timeline::{PlaybackState, RenderInstruction, RenderSink},
};
use crate::infrastructure::IntervalTimer;
use crate::{log_error, log_info, log_warn};
use strum::IntoEnumIterator;

type JsController = ViewController<IntervalTimer, StatusTracking<JsRenderSink>>;

/// Delivers render instructions to a page callback as JSON strings.
pub struct JsRenderSink {
    callback: Function,
}

impl JsRenderSink {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

impl RenderSink for JsRenderSink {
    fn render(&mut self, instruction: &RenderInstruction) -> TimelineResult<()> {
        let json = serde_json::to_string(instruction)
            .map_err(|e| TimelineError::Render(format!("serialize: {}", e)))?;
        self.callback
            .call1(&JsValue::NULL, &JsValue::from_str(&json))
            .map_err(|e| TimelineError::Render(format!("callback threw: {:?}", e)))?;
        Ok(())
    }
}

fn to_js(err: TimelineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One chart instance driven from the page.
///
/// `onRender` receives a JSON render instruction each time the chart enters
/// a new state or year. Queries (`state`, `year`, `availableYears`,
/// `gainsSummary`) never borrow the controller, so the callback may call them.
#[wasm_bindgen]
pub struct TimelineChartApi {
    controller: Rc<RefCell<JsController>>,
    status: Rc<Cell<ChartStatus>>,
    store: Arc<DataStore>,
}

#[wasm_bindgen]
impl TimelineChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(
        on_render: Function,
        config_json: Option<String>,
    ) -> Result<TimelineChartApi, JsValue> {
        let config = match config_json {
            Some(json) => TimelineConfig::from_json(&json).map_err(to_js)?,
            None => TimelineConfig::default(),
        };

        // The timer callback reaches the controller through a weak handle
        // filled in once the controller exists.
        let handle: Rc<OnceCell<Weak<RefCell<JsController>>>> = Rc::new(OnceCell::new());
        let tick_handle = Rc::clone(&handle);
        let timer = IntervalTimer::new(move || {
            let Some(controller) = tick_handle.get().and_then(Weak::upgrade) else {
                return;
            };
            let Ok(mut controller) = controller.try_borrow_mut() else {
                log_warn!(
                    LogComponent::Presentation("TimelineChartApi"),
                    "controller busy, tick skipped"
                );
                return;
            };
            if let Err(e) = controller.tick() {
                log_error!(LogComponent::Presentation("TimelineChartApi"), "tick failed: {}", e);
            }
        });

        let store = DataStore::sample();
        let first_year = store.first_year().unwrap_or(Year::new(0));
        let sink = StatusTracking::new(
            JsRenderSink::new(on_render),
            ChartStatus {
                state: PlaybackState::Idle,
                year: first_year,
            },
        );
        let status = sink.status();
        let controller =
            ViewController::new(Arc::clone(&store), timer, sink, config).map_err(to_js)?;
        status.set(ChartStatus {
            state: controller.state(),
            year: controller.year(),
        });
        let controller = Rc::new(RefCell::new(controller));
        let _ = handle.set(Rc::downgrade(&controller));

        let api = Self {
            controller,
            status,
            store,
        };
        api.with_controller(|c| c.render_current())?;
        log_info!(LogComponent::Presentation("TimelineChartApi"), "chart instance created");
        Ok(api)
    }

    pub fn play(&self) -> Result<(), JsValue> {
        self.with_controller(|c| c.play().map(|_| ()))
    }

    pub fn pause(&self) -> Result<(), JsValue> {
        self.with_controller(|c| c.pause().map(|_| ()))
    }

    pub fn scrub(&self, year: u32) -> Result<(), JsValue> {
        self.with_controller(|c| c.scrub(Year::new(year)).map(|_| ()))
    }

    pub fn release(&self) -> Result<(), JsValue> {
        self.with_controller(|c| c.release().map(|_| ()))
    }

    #[wasm_bindgen(js_name = showYear)]
    pub fn show_year(&self, year: u32) -> Result<(), JsValue> {
        self.with_controller(|c| c.show_year(Year::new(year)).map(|_| ()))
    }

    #[wasm_bindgen(js_name = showStep)]
    pub fn show_step(&self, step_index: usize) -> Result<(), JsValue> {
        self.with_controller(|c| c.show_step(step_index).map(|_| ()))
    }

    /// `gdp`, `population` or `life_expectancy`.
    #[wasm_bindgen(js_name = setRaceMetric)]
    pub fn set_race_metric(&self, metric: &str) -> Result<(), JsValue> {
        let metric = RaceMetric::from_str(metric).map_err(|_| {
            to_js(TimelineError::Configuration(format!(
                "unknown race metric '{}'",
                metric
            )))
        })?;
        self.with_controller(|c| c.set_race_metric(metric).map(|_| ()))
    }

    /// Re-emit the current frame, e.g. after the page resized the chart.
    pub fn refresh(&self) -> Result<(), JsValue> {
        self.with_controller(|c| c.render_current())
    }

    pub fn state(&self) -> String {
        self.status.get().state.to_string()
    }

    pub fn year(&self) -> u32 {
        self.status.get().year.value()
    }

    #[wasm_bindgen(js_name = availableYears)]
    pub fn available_years(&self) -> Vec<u32> {
        self.store.available_years().iter().map(Year::value).collect()
    }

    /// West-vs-Rest gains between the first and last years, as JSON.
    #[wasm_bindgen(js_name = gainsSummary)]
    pub fn gains_summary(&self) -> Result<String, JsValue> {
        let (Some(start), Some(end)) = (self.store.first_year(), self.store.last_year()) else {
            return Err(to_js(TimelineError::Configuration("no snapshot years".to_string())));
        };
        let summary = Aggregator::new(&self.store)
            .gains_between(start, end)
            .map_err(|e| to_js(e.into()))?;
        serde_json::to_string(&summary).map_err(|e| to_js(TimelineError::Render(e.to_string())))
    }

    /// Inputs; rejected while the controller is inside a render callback.
    fn with_controller<T>(
        &self,
        f: impl FnOnce(&mut JsController) -> TimelineResult<T>,
    ) -> Result<T, JsValue> {
        let mut controller = self.controller.try_borrow_mut().map_err(|_| {
            to_js(TimelineError::Configuration(
                "chart is busy; inputs cannot be sent from inside the render callback".to_string(),
            ))
        })?;
        f(&mut controller).map_err(to_js)
    }
}

/// Region colours as a JSON object keyed by region label.
#[wasm_bindgen(js_name = regionPalette)]
pub fn region_palette() -> String {
    let palette: serde_json::Map<String, serde_json::Value> = Region::iter()
        .map(|region| (region.label().to_string(), serde_json::Value::from(region.color())))
        .collect();
    serde_json::Value::Object(palette).to_string()
}
