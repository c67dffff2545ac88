use echoes_timeline_wasm::application::{
    ChartStatus, DEFAULT_TICK_INTERVAL_MS, StatusTracking, TimelineConfig, ViewController,
};
use echoes_timeline_wasm::domain::development_data::{
    DataStore, RaceMetric, RadarIndicator, Region, Year,
};
use echoes_timeline_wasm::domain::errors::{TimelineError, TimelineResult};
use echoes_timeline_wasm::domain::timeline::{
    AnimationTimer, ChartKind, ChartPayload, PlaybackState, RenderInstruction, RenderSink,
};
use echoes_timeline_wasm::view_state::TimerCommand;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

/// Counts live intervals without replacing them on `start`, so a missing
/// cancel shows up as two active intervals.
#[derive(Default)]
struct FakeTimer {
    active: usize,
    max_active: usize,
    starts: usize,
    last_interval_ms: Option<u32>,
}

impl AnimationTimer for FakeTimer {
    fn start(&mut self, interval_ms: u32) {
        self.active += 1;
        self.max_active = self.max_active.max(self.active);
        self.starts += 1;
        self.last_interval_ms = Some(interval_ms);
    }

    fn cancel(&mut self) {
        self.active = 0;
    }

    fn is_running(&self) -> bool {
        self.active > 0
    }
}

type Rendered = Rc<RefCell<Vec<RenderInstruction>>>;

fn recording_sink() -> (impl RenderSink, Rendered) {
    let rendered: Rendered = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&rendered);
    let sink = move |instruction: &RenderInstruction| -> TimelineResult<()> {
        log.borrow_mut().push(instruction.clone());
        Ok(())
    };
    (sink, rendered)
}

fn controller(chart: ChartKind) -> (ViewController<FakeTimer, impl RenderSink>, Rendered) {
    let (sink, rendered) = recording_sink();
    let config = TimelineConfig::for_chart("test-chart", chart);
    let controller =
        ViewController::new(DataStore::sample(), FakeTimer::default(), sink, config).unwrap();
    (controller, rendered)
}

fn year(value: u32) -> Year {
    Year::new(value)
}

#[test]
fn starts_idle_on_first_year_without_rendering() {
    let (controller, rendered) = controller(ChartKind::Timeline);
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.year(), year(1960));
    assert!(rendered.borrow().is_empty());
    assert!(!controller.timer().is_running());
}

#[test]
fn play_starts_one_timer_and_renders() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    let transition = controller.play().unwrap();

    assert_eq!(transition.state, PlaybackState::Animating);
    assert_eq!(transition.timer, TimerCommand::Start);
    assert!(controller.timer().is_running());
    assert_eq!(controller.timer().last_interval_ms, Some(DEFAULT_TICK_INTERVAL_MS));

    let rendered = rendered.borrow();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].state, PlaybackState::Animating);
    assert_eq!(rendered[0].chart_id, "test-chart");
}

#[test]
fn play_twice_keeps_a_single_timer() {
    let (mut controller, _) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    controller.play().unwrap();
    assert_eq!(controller.timer().starts, 2);
    assert_eq!(controller.timer().max_active, 1);
}

#[test]
fn replay_while_animating_restarts_timer_without_rendering() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    controller.tick().unwrap();
    let transition = controller.play().unwrap();

    assert_eq!(transition.timer, TimerCommand::Start);
    assert!(!transition.render);
    assert_eq!(controller.year(), year(1970));
    assert_eq!(controller.timer().starts, 2);
    assert_eq!(controller.timer().max_active, 1);
    // play, tick
    assert_eq!(rendered.borrow().len(), 2);
}

#[test]
fn ticks_walk_available_years_and_stop_at_the_end() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    for _ in 0..6 {
        controller.tick().unwrap();
    }

    assert_eq!(controller.year(), year(2020));
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert!(!controller.timer().is_running());

    let years: Vec<u32> = rendered.borrow().iter().map(|i| i.year.value()).collect();
    assert_eq!(years, vec![1960, 1970, 1980, 1990, 2000, 2010, 2020]);
    let last = rendered.borrow().last().cloned().unwrap();
    assert_eq!(last.state, PlaybackState::Idle);
}

#[test]
fn stale_tick_is_ignored() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    let transition = controller.tick().unwrap();
    assert!(!transition.render);
    assert_eq!(controller.year(), year(1960));
    assert!(rendered.borrow().is_empty());
}

#[test]
fn play_at_the_end_rewinds() {
    let (mut controller, _) = controller(ChartKind::Timeline);
    controller.show_year(year(2020)).unwrap();
    controller.play().unwrap();
    assert_eq!(controller.year(), year(1960));
    assert_eq!(controller.state(), PlaybackState::Animating);
}

#[test]
fn scrub_cancels_animation_and_snaps() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    let transition = controller.scrub(year(1987)).unwrap();

    assert_eq!(transition.state, PlaybackState::Scrubbing);
    assert_eq!(controller.year(), year(1990));
    assert!(!controller.timer().is_running());
    assert_eq!(rendered.borrow().last().map(|i| i.state), Some(PlaybackState::Scrubbing));

    // a tick already queued before the cancel must not move the chart
    controller.tick().unwrap();
    assert_eq!(controller.year(), year(1990));
}

#[test]
fn scrub_to_same_year_renders_once() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.scrub(year(1990)).unwrap();
    controller.scrub(year(1991)).unwrap();
    assert_eq!(rendered.borrow().len(), 1);
}

#[test]
fn pause_and_play_while_scrubbing_do_nothing() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.scrub(year(2000)).unwrap();
    let before = rendered.borrow().len();

    controller.pause().unwrap();
    controller.play().unwrap();

    assert_eq!(controller.state(), PlaybackState::Scrubbing);
    assert_eq!(rendered.borrow().len(), before);
    assert!(!controller.timer().is_running());
}

#[test]
fn release_goes_idle_without_resuming() {
    let (mut controller, _) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    controller.scrub(year(1970)).unwrap();
    controller.release().unwrap();

    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.year(), year(1970));
    assert!(!controller.timer().is_running());
    assert_eq!(controller.timer().starts, 1);
}

#[test]
fn pause_stops_the_timer() {
    let (mut controller, _) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    controller.tick().unwrap();
    controller.pause().unwrap();
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.year(), year(1970));
    assert!(!controller.timer().is_running());
}

#[test]
fn show_step_clamps_to_last_year() {
    let (mut controller, _) = controller(ChartKind::Timeline);
    controller.show_step(2).unwrap();
    assert_eq!(controller.year(), year(1980));
    controller.show_step(99).unwrap();
    assert_eq!(controller.year(), year(2020));
}

#[test]
fn show_year_cancels_animation() {
    let (mut controller, _) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    controller.show_year(year(2004)).unwrap();
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.year(), year(2000));
    assert!(!controller.timer().is_running());
}

#[test]
fn timeline_payload_covers_years_so_far() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.show_year(year(1980)).unwrap();
    let rendered = rendered.borrow();
    let frame = rendered[0].payload.as_timeline().unwrap();
    assert_eq!(frame.year, year(1980));
    assert_eq!(frame.life_west.len(), 3);
    assert_eq!(frame.life_rest.len(), 3);
}

#[test]
fn racing_bars_follow_metric_switch() {
    let (mut controller, rendered) = controller(ChartKind::RacingBars);
    controller.show_year(year(2020)).unwrap();
    controller.set_race_metric(RaceMetric::Population).unwrap();

    let rendered = rendered.borrow();
    assert_eq!(rendered.len(), 2);
    match &rendered[1].payload {
        ChartPayload::RacingBars { metric, entries } => {
            assert_eq!(*metric, RaceMetric::Population);
            assert_eq!(entries[0].country, "China");
        }
        other => panic!("unexpected payload {:?}", other.kind()),
    }
}

#[test]
fn bubbles_get_the_year_records() {
    let (mut controller, rendered) = controller(ChartKind::Bubbles);
    controller.render_current().unwrap();
    match &rendered.borrow()[0].payload {
        ChartPayload::Bubbles { records } => assert_eq!(records.len(), 6),
        other => panic!("unexpected payload {:?}", other.kind()),
    }
}

#[test]
fn trajectory_payload_follows_configured_countries() {
    let (sink, rendered) = recording_sink();
    let config = TimelineConfig {
        countries: vec!["Nigeria".to_string(), "Germany".to_string()],
        ..TimelineConfig::for_chart("trajectory-viz", ChartKind::Trajectory)
    };
    let mut controller =
        ViewController::new(DataStore::sample(), FakeTimer::default(), sink, config).unwrap();
    controller.show_year(year(1980)).unwrap();

    match &rendered.borrow()[0].payload {
        ChartPayload::Trajectory { trajectories } => {
            let names: Vec<&str> = trajectories.iter().map(|t| t.country.as_str()).collect();
            assert_eq!(names, vec!["Nigeria", "Germany"]);
            assert!(trajectories.iter().all(|t| t.values.len() == 3));
        }
        other => panic!("unexpected payload {:?}", other.kind()),
    }
}

#[test]
fn radar_payload_has_one_profile_per_focus_country() {
    let (mut controller, rendered) = controller(ChartKind::Radar);
    controller.show_year(year(2020)).unwrap();

    match &rendered.borrow()[0].payload {
        ChartPayload::Radar { profiles } => {
            assert_eq!(profiles.len(), 6);
            assert_eq!(profiles[0].country, "United States");
            assert_eq!(profiles[0].values[0].indicator, RadarIndicator::GdpPerCapita);
        }
        other => panic!("unexpected payload {:?}", other.kind()),
    }
}

#[test]
fn stream_payload_stacks_every_region() {
    let (mut controller, rendered) = controller(ChartKind::Stream);
    controller.show_year(year(2020)).unwrap();

    let json = serde_json::to_value(&rendered.borrow()[0]).unwrap();
    assert_eq!(json["payload"]["chart"], "stream");
    match &rendered.borrow()[0].payload {
        ChartPayload::Stream { rows } => {
            assert_eq!(rows.len(), 7);
            assert!(rows.iter().all(|row| row.layers.len() == 6));
            assert_eq!(rows[0].layers[4].region, Region::Africa);
        }
        other => panic!("unexpected payload {:?}", other.kind()),
    }
}

#[test]
fn status_is_readable_from_inside_the_render_callback() {
    let seen: Rc<RefCell<Vec<ChartStatus>>> = Rc::new(RefCell::new(Vec::new()));
    let status_slot: Rc<RefCell<Option<Rc<Cell<ChartStatus>>>>> = Rc::new(RefCell::new(None));

    let log = Rc::clone(&seen);
    let slot = Rc::clone(&status_slot);
    let inner = move |instruction: &RenderInstruction| -> TimelineResult<()> {
        let status = slot.borrow().as_ref().map(|s| s.get());
        if let Some(status) = status {
            assert_eq!(status.state, instruction.state);
            assert_eq!(status.year, instruction.year);
            log.borrow_mut().push(status);
        }
        Ok(())
    };
    let sink = StatusTracking::new(
        inner,
        ChartStatus {
            state: PlaybackState::Idle,
            year: year(1960),
        },
    );
    *status_slot.borrow_mut() = Some(sink.status());

    let config = TimelineConfig::for_chart("status", ChartKind::Timeline);
    let mut controller =
        ViewController::new(DataStore::sample(), FakeTimer::default(), sink, config).unwrap();
    controller.play().unwrap();
    controller.tick().unwrap();
    controller.scrub(year(2000)).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].year, year(1970));
    assert_eq!(seen[2].state, PlaybackState::Scrubbing);
    assert_eq!(seen[2].year, year(2000));
}

#[test]
fn render_instruction_json_shape() {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    controller.play().unwrap();
    let json = serde_json::to_value(&rendered.borrow()[0]).unwrap();
    assert_eq!(json["chartId"], "test-chart");
    assert_eq!(json["state"], "animating");
    assert_eq!(json["year"], 1960);
    assert_eq!(json["payload"]["chart"], "timeline");
    assert!(json["payload"]["regionalTrend"].is_array());
}

#[test]
fn failing_sink_does_not_change_state() {
    let sink = |_: &RenderInstruction| -> TimelineResult<()> {
        Err(TimelineError::Render("canvas gone".to_string()))
    };
    let config = TimelineConfig::for_chart("broken", ChartKind::Timeline);
    let mut controller =
        ViewController::new(DataStore::sample(), FakeTimer::default(), sink, config).unwrap();

    controller.play().unwrap();
    assert_eq!(controller.state(), PlaybackState::Animating);
    controller.tick().unwrap();
    assert_eq!(controller.year(), year(1970));
}

#[test]
fn initial_year_snaps_to_available() {
    let (sink, _) = recording_sink();
    let config = TimelineConfig {
        initial_year: Some(1987),
        ..TimelineConfig::for_chart("late-start", ChartKind::Timeline)
    };
    let controller =
        ViewController::new(DataStore::sample(), FakeTimer::default(), sink, config).unwrap();
    assert_eq!(controller.year(), year(1990));
}

#[test]
fn empty_store_is_a_configuration_error() {
    let (sink, _) = recording_sink();
    let result = ViewController::new(
        Arc::new(DataStore::builder().build()),
        FakeTimer::default(),
        sink,
        TimelineConfig::default(),
    );
    assert!(matches!(result, Err(TimelineError::Configuration(_))));
}

#[test]
fn gains_summary_spans_all_years() {
    let (controller, _) = controller(ChartKind::Timeline);
    let summary = controller.gains_summary().unwrap();
    assert_eq!(summary.start_year, year(1960));
    assert_eq!(summary.end_year, year(2020));
    assert!(summary.west.gdp_gain > 0.0);
}

#[test]
fn dropping_the_controller_cancels_its_timer() {
    let cancelled = Rc::new(RefCell::new(false));

    struct WatchedTimer(Rc<RefCell<bool>>);
    impl AnimationTimer for WatchedTimer {
        fn start(&mut self, _interval_ms: u32) {}
        fn cancel(&mut self) {
            *self.0.borrow_mut() = true;
        }
        fn is_running(&self) -> bool {
            false
        }
    }

    let (sink, _) = recording_sink();
    let controller = ViewController::new(
        DataStore::sample(),
        WatchedTimer(Rc::clone(&cancelled)),
        sink,
        TimelineConfig::default(),
    )
    .unwrap();
    drop(controller);
    assert!(*cancelled.borrow());
}

#[derive(Clone, Debug)]
enum Input {
    Play,
    Pause,
    Tick,
    Scrub(u32),
    Release,
    ShowYear(u32),
    ShowStep(usize),
}

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Self {
        let year = 1950 + u32::arbitrary(g) % 80;
        match u8::arbitrary(g) % 7 {
            0 => Input::Play,
            1 => Input::Pause,
            2 => Input::Tick,
            3 => Input::Scrub(year),
            4 => Input::Release,
            5 => Input::ShowYear(year),
            _ => Input::ShowStep(usize::arbitrary(g) % 10),
        }
    }
}

#[quickcheck]
fn any_input_sequence_keeps_invariants(inputs: Vec<Input>) -> bool {
    let (mut controller, rendered) = controller(ChartKind::Timeline);
    for input in inputs {
        let result = match input {
            Input::Play => controller.play(),
            Input::Pause => controller.pause(),
            Input::Tick => controller.tick(),
            Input::Scrub(y) => controller.scrub(year(y)),
            Input::Release => controller.release(),
            Input::ShowYear(y) => controller.show_year(year(y)),
            Input::ShowStep(step) => controller.show_step(step),
        };
        if result.is_err() {
            return false;
        }

        let timer_matches_state =
            controller.timer().is_running() == (controller.state() == PlaybackState::Animating);
        let on_available_year = controller.available_years().contains(&controller.year());
        if !timer_matches_state || !on_available_year || controller.timer().max_active > 1 {
            return false;
        }
    }
    let rendered = rendered.borrow();
    rendered
        .iter()
        .all(|i| DataStore::sample().contains_year(i.year))
}
