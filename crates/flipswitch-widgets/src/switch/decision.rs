//! Release decision: turns a finished knob drag into a target state.
//!
//! Pure functions only; nothing here touches widget state.

/// Everything known about a knob gesture at the moment it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    /// Committed state before the gesture began.
    pub previous_checked: bool,
    /// Knob offset captured when the drag started.
    pub saved_value: i32,
    /// Knob offset at release.
    pub final_value: i32,
    /// Rail length the knob can travel (`track_width - button_width`).
    pub travel: i32,
    /// Minimum percent of travel that commits a flip.
    pub threshold_percentage: i32,
    /// Whether a stationary click on the knob flips the state.
    pub toggle_on_button_click: bool,
}

impl Release {
    /// Whether the knob ended where it started.
    #[must_use]
    pub const fn is_stationary(&self) -> bool {
        self.final_value == self.saved_value
    }
}

/// Percent of the rail covered by `value`, rounded half up.
///
/// A zero (or negative) rail yields `0` instead of dividing by zero.
#[must_use]
pub fn percent_of_travel(value: i32, travel: i32) -> i32 {
    if travel <= 0 {
        return 0;
    }
    let value = i64::from(value.clamp(0, travel));
    let travel = i64::from(travel);
    ((200 * value + travel) / (2 * travel)) as i32
}

/// Decide the state a released knob should settle into.
///
/// Crossing the threshold in the direction of travel always flips. Falling
/// short snaps back, unless the knob never moved and stationary clicks are
/// allowed to toggle. Both threshold comparisons are inclusive.
#[must_use]
pub fn decide(release: &Release) -> bool {
    let percent = percent_of_travel(release.final_value, release.travel);
    let clicked = release.toggle_on_button_click && release.is_stationary();

    if release.previous_checked {
        let turns_off = percent <= 100 - release.threshold_percentage || clicked;
        !turns_off
    } else {
        percent >= release.threshold_percentage || clicked
    }
}
