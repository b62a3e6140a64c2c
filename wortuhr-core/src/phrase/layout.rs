//! Layout variant selection
//!
//! The adjusted minute domain `0..=60` is split into three disjoint
//! groups of spans. Each group maps to one text container on the face.
//! The lookup table is built at compile time and the build fails if any
//! minute is matched by zero or by more than one group.

use super::rounding::MAX_ADJUSTED_MINUTE;

/// Number of adjusted minute slots (0..=60)
pub const MINUTE_SLOTS: usize = MAX_ADJUSTED_MINUTE as usize + 1;

/// Display arrangement needed to fit a minute phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutVariant {
    /// Three lines of smaller text ("fünf\nvor\nhalb")
    ThreeLine,
    /// Two long lines of smaller text ("dreizehn nach")
    TwoLineLong,
    /// Two lines of large text ("fünf\nnach")
    TwoLineBig,
}

impl LayoutVariant {
    /// All variants in selection precedence order
    pub const ALL: [LayoutVariant; 3] = [
        LayoutVariant::ThreeLine,
        LayoutVariant::TwoLineLong,
        LayoutVariant::TwoLineBig,
    ];

    /// Minute spans assigned to this variant
    pub const fn spans(self) -> &'static [MinuteSpan] {
        match self {
            LayoutVariant::ThreeLine => THREE_LINE_SPANS,
            LayoutVariant::TwoLineLong => TWO_LINE_LONG_SPANS,
            LayoutVariant::TwoLineBig => TWO_LINE_BIG_SPANS,
        }
    }
}

/// Inclusive span of adjusted minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSpan {
    pub first: u8,
    pub last: u8,
}

impl MinuteSpan {
    const fn new(first: u8, last: u8) -> Self {
        Self { first, last }
    }

    const fn single(minute: u8) -> Self {
        Self::new(minute, minute)
    }

    /// Check whether `minute` falls inside this span
    pub const fn contains(&self, minute: u8) -> bool {
        self.first <= minute && minute <= self.last
    }
}

/// "x vor halb", "x nach halb" and "zwanzig nach"
pub const THREE_LINE_SPANS: &[MinuteSpan] = &[MinuteSpan::new(20, 29), MinuteSpan::new(31, 40)];

/// Long single-word counts ("dreizehn nach", "siebzehn vor")
pub const TWO_LINE_LONG_SPANS: &[MinuteSpan] = &[
    MinuteSpan::new(13, 14),
    MinuteSpan::new(16, 19),
    MinuteSpan::new(41, 44),
    MinuteSpan::new(46, 47),
];

/// Short phrases and the quarter marks
pub const TWO_LINE_BIG_SPANS: &[MinuteSpan] = &[
    MinuteSpan::new(0, 12),
    MinuteSpan::single(15),
    MinuteSpan::single(30),
    MinuteSpan::single(45),
    MinuteSpan::new(48, 60),
];

/// Layout per adjusted minute, validated at compile time
pub const LAYOUT_TABLE: [LayoutVariant; MINUTE_SLOTS] = build_layout_table();

const fn spans_contain(spans: &[MinuteSpan], minute: u8) -> bool {
    let mut i = 0;
    while i < spans.len() {
        if spans[i].contains(minute) {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_layout_table() -> [LayoutVariant; MINUTE_SLOTS] {
    let mut table = [LayoutVariant::TwoLineBig; MINUTE_SLOTS];
    let mut minute = 0;
    while minute < MINUTE_SLOTS {
        let mut matches = 0;
        let mut v = 0;
        while v < LayoutVariant::ALL.len() {
            let variant = LayoutVariant::ALL[v];
            if spans_contain(variant.spans(), minute as u8) {
                if matches == 0 {
                    table[minute] = variant;
                }
                matches += 1;
            }
            v += 1;
        }
        if matches != 1 {
            panic!("layout spans must cover every minute exactly once");
        }
        minute += 1;
    }
    table
}

/// Layout for an adjusted minute (`0..=60`)
pub fn select_layout(adjusted_minute: u8) -> LayoutVariant {
    debug_assert!(adjusted_minute <= MAX_ADJUSTED_MINUTE);
    LAYOUT_TABLE[adjusted_minute as usize]
}
