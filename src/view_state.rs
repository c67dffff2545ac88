use crate::domain::development_data::Year;
use crate::domain::timeline::PlaybackState;

/// Timer side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Cancel,
    Keep,
}

/// Outcome of feeding one input to [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: PlaybackState,
    pub year: Year,
    pub timer: TimerCommand,
    /// The state or the year changed and must be rendered.
    pub render: bool,
}

/// Playback position of one chart instance over a fixed set of snapshot years.
///
/// Pure state machine: it never touches timers or renderers, it only reports
/// what the owner has to do.
#[derive(Clone, Debug)]
pub struct ViewState {
    years: Vec<Year>,
    index: usize,
    state: PlaybackState,
}

impl ViewState {
    /// `None` when `years` is empty. `years` must be ascending.
    pub fn new(years: Vec<Year>, initial: Year) -> Option<Self> {
        let index = snap_to_available(&years, initial)?;
        Some(Self { years, index, state: PlaybackState::Idle })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn year(&self) -> Year {
        self.years[self.index]
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 == self.years.len()
    }

    /// Start the animation, rewinding when on the last year. While already
    /// animating only the timer restarts; nothing new to render.
    pub fn play(&mut self) -> Transition {
        match self.state {
            PlaybackState::Scrubbing => self.unchanged(),
            PlaybackState::Animating => self.transition(TimerCommand::Start, false),
            PlaybackState::Idle => {
                if self.is_at_end() {
                    self.index = 0;
                }
                self.state = PlaybackState::Animating;
                self.transition(TimerCommand::Start, true)
            }
        }
    }

    pub fn pause(&mut self) -> Transition {
        match self.state {
            PlaybackState::Animating => {
                self.state = PlaybackState::Idle;
                self.transition(TimerCommand::Cancel, true)
            }
            PlaybackState::Idle | PlaybackState::Scrubbing => self.unchanged(),
        }
    }

    /// Advance to the next snapshot year; stops on the last one.
    pub fn tick(&mut self) -> Transition {
        if self.state != PlaybackState::Animating {
            return self.unchanged();
        }
        if !self.is_at_end() {
            self.index += 1;
        }
        if self.is_at_end() {
            self.state = PlaybackState::Idle;
            return self.transition(TimerCommand::Cancel, true);
        }
        self.transition(TimerCommand::Keep, true)
    }

    /// Slider drag. Cancels a running animation.
    pub fn scrub(&mut self, target: Year) -> Transition {
        let timer = self.cancel_if_animating();
        let changed = self.move_to(target) || self.state != PlaybackState::Scrubbing;
        self.state = PlaybackState::Scrubbing;
        self.transition(timer, changed)
    }

    /// End of a slider drag; never resumes an animation.
    pub fn release(&mut self) -> Transition {
        match self.state {
            PlaybackState::Scrubbing => {
                self.state = PlaybackState::Idle;
                self.transition(TimerCommand::Keep, true)
            }
            PlaybackState::Idle | PlaybackState::Animating => self.unchanged(),
        }
    }

    /// Direct positioning from a scroll step or a slider value.
    pub fn jump(&mut self, target: Year) -> Transition {
        let timer = self.cancel_if_animating();
        let changed = self.move_to(target) || self.state != PlaybackState::Idle;
        self.state = PlaybackState::Idle;
        self.transition(timer, changed)
    }

    /// Year of a scrollytelling step; steps past the end clamp to the last year.
    pub fn step_year(&self, step_index: usize) -> Year {
        self.years[step_index.min(self.years.len() - 1)]
    }

    fn move_to(&mut self, target: Year) -> bool {
        let index = snap_to_available(&self.years, target).unwrap_or(self.index);
        let moved = index != self.index;
        self.index = index;
        moved
    }

    fn cancel_if_animating(&self) -> TimerCommand {
        if self.state == PlaybackState::Animating {
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        }
    }

    fn transition(&self, timer: TimerCommand, render: bool) -> Transition {
        Transition { state: self.state, year: self.year(), timer, render }
    }

    fn unchanged(&self) -> Transition {
        self.transition(TimerCommand::Keep, false)
    }
}

/// Index of the available year closest to `target`; ties go to the earlier year.
pub fn snap_to_available(years: &[Year], target: Year) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, year) in years.iter().enumerate() {
        let distance = year.distance(target);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> Vec<Year> {
        [1960, 1970, 1980, 1990, 2000, 2010, 2020].into_iter().map(Year::new).collect()
    }

    #[test]
    fn snap_prefers_earlier_year_on_tie() {
        let years = years();
        assert_eq!(snap_to_available(&years, Year::new(1965)), Some(0));
        assert_eq!(snap_to_available(&years, Year::new(1967)), Some(1));
        assert_eq!(snap_to_available(&years, Year::new(1800)), Some(0));
        assert_eq!(snap_to_available(&years, Year::new(2100)), Some(6));
        assert_eq!(snap_to_available(&[], Year::new(2000)), None);
    }

    #[test]
    fn play_from_last_year_rewinds() {
        let mut view = ViewState::new(years(), Year::new(2020)).unwrap();
        let t = view.play();
        assert_eq!(t.year, Year::new(1960));
        assert_eq!(t.state, PlaybackState::Animating);
        assert_eq!(t.timer, TimerCommand::Start);
    }

    #[test]
    fn replay_while_animating_restarts_timer_without_render() {
        let mut view = ViewState::new(years(), Year::new(1960)).unwrap();
        view.play();
        view.tick();
        let again = view.play();
        assert_eq!(again.timer, TimerCommand::Start);
        assert!(!again.render);
        assert_eq!(again.year, Year::new(1970));
        assert_eq!(again.state, PlaybackState::Animating);
    }

    #[test]
    fn animation_stops_on_last_year() {
        let mut view = ViewState::new(years(), Year::new(2000)).unwrap();
        view.play();
        assert_eq!(view.tick().timer, TimerCommand::Keep);
        let last = view.tick();
        assert_eq!(last.year, Year::new(2020));
        assert_eq!(last.state, PlaybackState::Idle);
        assert_eq!(last.timer, TimerCommand::Cancel);
        assert!(!view.tick().render);
    }

    #[test]
    fn release_never_resumes_animation() {
        let mut view = ViewState::new(years(), Year::new(1960)).unwrap();
        view.play();
        let scrub = view.scrub(Year::new(1990));
        assert_eq!(scrub.timer, TimerCommand::Cancel);
        assert_eq!(scrub.state, PlaybackState::Scrubbing);
        let release = view.release();
        assert_eq!(release.state, PlaybackState::Idle);
        assert_eq!(release.timer, TimerCommand::Keep);
    }
}
