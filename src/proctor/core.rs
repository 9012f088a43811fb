use crate::gaze_estimator::interface::GazePredicates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Cheating,
    NoCheating,
    Unknown,
}

/// First match wins: blink, then direction, then center.
pub fn classify_gaze(predicates: &GazePredicates) -> Label {
    if predicates.blinking {
        return Label::NoCheating;
    }
    if predicates.looking_left || predicates.looking_right {
        return Label::Cheating;
    }
    if predicates.looking_center {
        return Label::NoCheating;
    }
    Label::Unknown
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub cheating: u64,
    pub no_cheating: u64,
    pub unknown: u64,
    pub total_frames: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: Label) {
        match label {
            Label::Cheating => self.cheating += 1,
            Label::NoCheating => self.no_cheating += 1,
            Label::Unknown => self.unknown += 1,
        }
        self.total_frames += 1;
    }

    pub fn cheating_detected(&self) -> bool {
        self.cheating > self.no_cheating
    }
}
