//! Draggable on/off switch.
//!
//! A knob slides along a track. Users drag it, click it, or click the track
//! beside it; the knob then animates to a rail end and the new state is
//! committed. The switch is always in exactly one [`Mode`]:
//!
//! - `Idle --press on knob--> Dragging`
//! - `Dragging --release--> Animating` (target from [`decision::decide`])
//! - `Idle --side click / set_checked--> Animating`
//! - `Animating --knob reaches target--> Idle`
//!
//! Requests that arrive while dragging or animating wait in a single slot
//! and run after the current animation completes.
//!
//! ```
//! use flipswitch_widgets::Switch;
//! use flipswitch_core::Point;
//!
//! let mut switch = Switch::new();
//! switch.pointer_down(Point::new(5.0, 10.0)).unwrap();
//! switch.pointer_move(Point::new(25.0, 10.0)).unwrap();
//! switch.pointer_up(Point::new(25.0, 10.0)).unwrap();
//! while switch.is_animating() {
//!     switch.advance(1).unwrap();
//! }
//! assert!(switch.is_checked());
//! ```

pub mod config;
pub mod decision;
pub mod engine;
pub mod geometry;
pub mod render;
pub mod tracker;

use crate::error::{Result, SwitchError};
use config::{validate_interval, validate_step, validate_threshold, SwitchConfig, SwitchPalette};
use decision::{decide, Release};
use engine::{AnimationEngine, TickOutcome};
use flipswitch_core::{
    AccessibleRole, Canvas, Event, LayoutResult, MouseButton, Point, Rect, Widget,
};
use geometry::{SwitchGeometry, Zone};
use render::{DefaultRenderer, SwitchRenderer, SwitchVisual};
use std::any::Any;
use std::fmt;
use tracker::{PointerRelease, PointerTracker};
use tracing::{debug, trace, warn};

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// At rest; the committed state is authoritative.
    Idle,
    /// The knob follows the pointer.
    Dragging,
    /// The knob is moving toward a rail end.
    Animating,
}

/// Message raised once per completed animation, after the state and knob
/// position hold their final values.
///
/// Listeners get one per completion. [`Switch::advance`] and the message
/// returned by [`Widget::event`] fold every completion of that call into
/// one, so `previous` is the state before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedChanged {
    /// The committed state.
    pub checked: bool,
    /// The state before the animation.
    pub previous: bool,
}

impl CheckedChanged {
    /// Whether the committed state differs from the previous one. A
    /// snap-back after a short drag completes without flipping.
    #[must_use]
    pub const fn flipped(&self) -> bool {
        self.checked != self.previous
    }

    /// Fold a later change into this one: the state before the first, the
    /// state after the second.
    #[must_use]
    pub const fn then(self, later: Self) -> Self {
        Self {
            checked: later.checked,
            previous: self.previous,
        }
    }
}

type Listener = Box<dyn FnMut(&CheckedChanged)>;

/// Toggle switch widget.
pub struct Switch {
    checked: bool,
    button_value: i32,
    geometry: SwitchGeometry,
    bounds: Rect,
    config: SwitchConfig,
    palette: SwitchPalette,
    tracker: PointerTracker,
    engine: AnimationEngine,
    listeners: Vec<Listener>,
    renderer: Box<dyn SwitchRenderer>,
    /// Completions folded together during the current call.
    last_change: Option<CheckedChanged>,
    repaint_requested: bool,
    repaint_requests: u64,
    disposed: bool,
}

impl Default for Switch {
    fn default() -> Self {
        let config = SwitchConfig::default();
        let geometry = SwitchGeometry::default();
        let interval = u32::try_from(config.animation_interval_ms).unwrap_or(1);
        Self {
            checked: false,
            button_value: 0,
            geometry,
            bounds: geometry.track_rect(),
            engine: AnimationEngine::new(config.animation_step, interval),
            config,
            palette: SwitchPalette::default(),
            tracker: PointerTracker::new(),
            listeners: Vec::new(),
            renderer: Box::new(DefaultRenderer),
            last_change: None,
            repaint_requested: false,
            repaint_requests: 0,
            disposed: false,
        }
    }
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("checked", &self.checked)
            .field("mode", &self.mode())
            .field("button_value", &self.button_value)
            .field("geometry", &self.geometry)
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("listeners", &self.listeners.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl Switch {
    /// Create an unchecked 50x21 switch with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidArgument`] if any setting is out of
    /// range.
    pub fn with_config(config: SwitchConfig) -> Result<Self> {
        config.validate()?;
        let interval = validate_interval(config.animation_interval_ms)?;
        let mut switch = Self::default();
        switch.engine = AnimationEngine::new(config.animation_step, interval);
        switch.config = config;
        Ok(switch)
    }

    /// Set the widget size in pixels.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.geometry = SwitchGeometry::from_size(width, height);
        self.bounds = self.bounds.with_size(self.geometry.track_rect().size());
        self.button_value = self.geometry.rest_position(self.checked);
        self
    }

    /// Set the initial state without raising an event.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.button_value = self.geometry.rest_position(checked);
        self
    }

    /// Set the colors.
    #[must_use]
    pub const fn palette(mut self, palette: SwitchPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the renderer.
    #[must_use]
    pub fn renderer(mut self, renderer: impl SwitchRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    // ===== Queries =====

    /// Committed state. Authoritative while [`Mode::Idle`].
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Current interaction mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.engine.is_animating() {
            Mode::Animating
        } else if self.tracker.is_dragging() {
            Mode::Dragging
        } else {
            Mode::Idle
        }
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    /// Whether the knob is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Knob offset from the left edge, in `[0, travel]`.
    #[must_use]
    pub const fn button_value(&self) -> i32 {
        self.button_value
    }

    /// Distance the knob can slide.
    #[must_use]
    pub const fn travel(&self) -> i32 {
        self.geometry.travel()
    }

    /// Track width.
    #[must_use]
    pub const fn track_width(&self) -> i32 {
        self.geometry.track_width()
    }

    /// Knob width.
    #[must_use]
    pub const fn button_width(&self) -> i32 {
        self.geometry.button_width()
    }

    /// Target of the animation in flight.
    #[must_use]
    pub fn animation_target(&self) -> Option<i32> {
        self.engine.current().map(|a| a.target)
    }

    /// State the animation in flight will commit.
    #[must_use]
    pub fn animation_result(&self) -> Option<bool> {
        self.engine.current().map(|a| a.result)
    }

    /// Timer ticks counted since the last animation began. Only
    /// [`Switch::advance`] counts ticks.
    #[must_use]
    pub const fn animation_ticks(&self) -> u64 {
        self.engine.ticks()
    }

    /// Request waiting for the current gesture or animation to finish.
    #[must_use]
    pub const fn pending_request(&self) -> Option<bool> {
        self.engine.pending()
    }

    /// Zone under the pointer.
    #[must_use]
    pub const fn hover(&self) -> Option<Zone> {
        self.tracker.hover()
    }

    /// Zone held down.
    #[must_use]
    pub const fn pressed(&self) -> Option<Zone> {
        self.tracker.pressed()
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Current colors.
    #[must_use]
    pub const fn get_palette(&self) -> &SwitchPalette {
        &self.palette
    }

    /// Whether [`Switch::dispose`] has been called.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Total render requests raised so far.
    #[must_use]
    pub const fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    /// Consume the pending render request, if any.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Knob rectangle in widget-local coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn button_rectangle(&self) -> Result<Rect> {
        self.ensure_alive()?;
        Ok(self.geometry.button_rect(self.button_value))
    }

    /// Snapshot for renderers.
    #[must_use]
    pub fn visual(&self) -> SwitchVisual {
        let value = self.button_value;
        SwitchVisual {
            origin: self.bounds.origin(),
            checked: self.checked,
            mode: self.mode(),
            button_value: value,
            track_rect: self.geometry.track_rect(),
            button_rect: self.geometry.button_rect(value),
            left_side_rect: self.geometry.left_side_rect(value),
            right_side_rect: self.geometry.right_side_rect(value),
            hover: self.tracker.hover(),
            pressed: self.tracker.pressed(),
            enabled: self.config.allow_user_change,
            palette: self.palette,
        }
    }

    // ===== State =====

    /// Request a new committed state.
    ///
    /// Idle with the same state is a no-op. While dragging or animating the
    /// request is queued, replacing any earlier queued request, and runs
    /// once the current animation completes.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn set_checked(&mut self, checked: bool) -> Result<()> {
        self.ensure_alive()?;
        self.request_checked(checked);
        Ok(())
    }

    /// Register a listener for [`CheckedChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn on_checked_changed(
        &mut self,
        listener: impl FnMut(&CheckedChanged) + 'static,
    ) -> Result<()> {
        self.ensure_alive()?;
        self.listeners.push(Box::new(listener));
        Ok(())
    }

    // ===== Settings =====

    /// Pixels the knob moves per animation tick.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidArgument`] for `px <= 0`; the previous
    /// step is kept.
    pub fn set_animation_step(&mut self, px: i32) -> Result<()> {
        self.ensure_alive()?;
        let px = validate_step(px).inspect_err(|e| warn!(%e, "rejected animation step"))?;
        self.config.animation_step = px;
        self.engine.set_step(px);
        Ok(())
    }

    /// Milliseconds between animation ticks.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidArgument`] for `ms <= 0`; the previous
    /// interval is kept.
    pub fn set_animation_interval(&mut self, ms: i32) -> Result<()> {
        self.ensure_alive()?;
        let interval =
            validate_interval(ms).inspect_err(|e| warn!(%e, "rejected animation interval"))?;
        self.config.animation_interval_ms = ms;
        self.engine.set_interval_ms(interval);
        Ok(())
    }

    /// Percent of travel a released drag must cover to flip.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidArgument`] outside `0..=100`; values
    /// are never clamped and the previous threshold is kept.
    pub fn set_threshold_percentage(&mut self, percent: i32) -> Result<()> {
        self.ensure_alive()?;
        let percent = validate_threshold(percent)
            .inspect_err(|e| warn!(%e, "rejected threshold percentage"))?;
        self.config.threshold_percentage = percent;
        Ok(())
    }

    /// Accept or ignore pointer input. Disabling mid-drag abandons the drag
    /// and animates the knob back to the committed side.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn set_allow_user_change(&mut self, allow: bool) -> Result<()> {
        self.ensure_alive()?;
        self.config.allow_user_change = allow;
        if !allow {
            if self.tracker.cancel_drag().is_some() {
                debug!(checked = self.checked, "drag abandoned, user changes disabled");
                self.tracker.clear_flags();
                self.begin_animation(self.checked);
            } else {
                self.tracker.clear_flags();
            }
            self.invalidate();
        }
        Ok(())
    }

    /// Whether a stationary click on the knob toggles.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn set_toggle_on_button_click(&mut self, enabled: bool) -> Result<()> {
        self.ensure_alive()?;
        self.config.toggle_on_button_click = enabled;
        Ok(())
    }

    /// Whether clicking beside the knob moves it to that side.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn set_toggle_on_side_click(&mut self, enabled: bool) -> Result<()> {
        self.ensure_alive()?;
        self.config.toggle_on_side_click = enabled;
        Ok(())
    }

    /// Animate state changes, or apply them immediately. Turning animation
    /// off mid-flight lands the knob at once.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn set_use_animation(&mut self, enabled: bool) -> Result<()> {
        self.ensure_alive()?;
        self.config.use_animation = enabled;
        if !enabled && self.engine.is_animating() {
            self.complete_animation();
        }
        Ok(())
    }

    /// Replace the colors.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn set_palette(&mut self, palette: SwitchPalette) -> Result<()> {
        self.ensure_alive()?;
        self.palette = palette;
        self.invalidate();
        Ok(())
    }

    // ===== Pointer input =====

    /// Pointer pressed at a widget-local position.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn pointer_down(&mut self, position: Point) -> Result<()> {
        self.ensure_alive()?;
        if !self.accepts_pointer(position) {
            return Ok(());
        }
        if self
            .tracker
            .press(position, &self.geometry, self.button_value)
        {
            debug!(value = self.button_value, "drag started");
        }
        self.invalidate();
        Ok(())
    }

    /// Pointer moved to a widget-local position.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn pointer_move(&mut self, position: Point) -> Result<()> {
        self.ensure_alive()?;
        if !self.accepts_pointer(position) {
            return Ok(());
        }
        if let Some(value) = self.tracker.drag_to(position, &self.geometry) {
            trace!(value, "dragging");
            self.set_button_value(value);
        } else if self
            .tracker
            .hover_at(position, &self.geometry, self.button_value)
        {
            self.invalidate();
        }
        Ok(())
    }

    /// Pointer released at a widget-local position.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn pointer_up(&mut self, position: Point) -> Result<()> {
        self.ensure_alive()?;
        if !self.accepts_pointer(position) {
            return Ok(());
        }
        match self.tracker.release(position) {
            PointerRelease::Drag { saved_value } => {
                let release = Release {
                    previous_checked: self.checked,
                    saved_value,
                    final_value: self.button_value,
                    travel: self.geometry.travel(),
                    threshold_percentage: self.config.threshold_percentage,
                    toggle_on_button_click: self.config.toggle_on_button_click,
                };
                let target = decide(&release);
                debug!(
                    from = saved_value,
                    to = self.button_value,
                    target,
                    "drag released"
                );
                self.begin_animation(target);
            }
            PointerRelease::Side(zone) if self.config.toggle_on_side_click => {
                self.request_checked(zone == Zone::RightSide);
            }
            PointerRelease::Side(_) | PointerRelease::Nothing => {}
        }
        self.invalidate();
        Ok(())
    }

    /// Pointer left the widget.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn pointer_leave(&mut self) -> Result<()> {
        self.ensure_alive()?;
        if !self.config.allow_user_change || self.engine.is_animating() {
            self.tracker.forget();
            return Ok(());
        }
        self.tracker.leave();
        self.invalidate();
        Ok(())
    }

    // ===== Host notifications =====

    /// Widget resized. An animation heading for the right rail end keeps
    /// heading for the new end.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        self.ensure_alive()?;
        self.apply_resize(SwitchGeometry::from_host_size(width, height));
        Ok(())
    }

    /// Feed elapsed time to the animation timer and run every tick that
    /// fell due. Ticks left over when an animation completes go to the
    /// queued request it started. Returns the completions folded into one
    /// change (see [`CheckedChanged::then`]); listeners see each one.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn advance(&mut self, delta_ms: u32) -> Result<Option<CheckedChanged>> {
        self.ensure_alive()?;
        self.last_change = None;
        let mut due = self.engine.advance(delta_ms);
        while due > 0 && self.engine.is_animating() {
            self.tick();
            due -= 1;
        }
        Ok(self.last_change.take())
    }

    /// Run exactly one animation tick, for hosts that own the timer.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Disposed`] after disposal.
    pub fn on_timer_tick(&mut self) -> Result<Option<CheckedChanged>> {
        self.ensure_alive()?;
        self.last_change = None;
        self.tick();
        Ok(self.last_change.take())
    }

    /// Stop the timer and drop listeners and pending requests. Every later
    /// operation returns [`SwitchError::Disposed`].
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.engine.shutdown();
        self.tracker.clear_flags();
        self.listeners.clear();
        self.disposed = true;
        debug!("switch disposed");
    }

    // ===== Internals =====

    fn ensure_alive(&self) -> Result<()> {
        if self.disposed {
            debug!("operation on disposed switch");
            return Err(SwitchError::Disposed);
        }
        Ok(())
    }

    /// Pointer gate. Positions seen while an animation runs are still
    /// remembered so hover can be restored when it completes.
    fn accepts_pointer(&mut self, position: Point) -> bool {
        if !self.config.allow_user_change {
            return false;
        }
        if self.engine.is_animating() {
            self.tracker.remember(position);
            return false;
        }
        true
    }

    fn invalidate(&mut self) {
        self.repaint_requested = true;
        self.repaint_requests += 1;
    }

    fn set_button_value(&mut self, value: i32) {
        let value = self.geometry.clamp(value);
        if value != self.button_value {
            self.button_value = value;
            self.invalidate();
        }
    }

    fn request_checked(&mut self, checked: bool) {
        match self.mode() {
            Mode::Idle if checked == self.checked => {}
            Mode::Idle => self.begin_animation(checked),
            Mode::Dragging | Mode::Animating => {
                debug!(checked, "request queued");
                self.engine.queue(checked);
            }
        }
    }

    fn begin_animation(&mut self, checked: bool) {
        if self.engine.is_animating() {
            debug!(checked, "animation busy, request queued");
            self.engine.queue(checked);
            return;
        }
        let timed = self.config.use_animation;
        let animation = self.engine.begin(checked, self.geometry.travel(), timed);
        debug!(
            checked,
            target = animation.target,
            from = self.button_value,
            timed,
            "animation started"
        );
        self.invalidate();
        if !timed {
            self.complete_animation();
        }
    }

    fn tick(&mut self) {
        match self.engine.tick(self.button_value) {
            TickOutcome::Idle => {}
            TickOutcome::Moved(value) => {
                trace!(value, "animation tick");
                self.set_button_value(value);
            }
            TickOutcome::Arrived(value) => {
                self.set_button_value(value);
                self.complete_animation();
            }
        }
    }

    fn complete_animation(&mut self) {
        let Some(animation) = self.engine.finish() else {
            return;
        };
        self.button_value = self.geometry.clamp(animation.target);
        let change = CheckedChanged {
            checked: animation.result,
            previous: self.checked,
        };
        self.checked = animation.result;
        self.tracker.clear_flags();
        debug!(checked = change.checked, previous = change.previous, "animation complete");

        for listener in &mut self.listeners {
            listener(&change);
        }
        self.last_change = Some(match self.last_change {
            Some(earlier) => earlier.then(change),
            None => change,
        });

        if self.config.allow_user_change {
            if let Some(position) = self.tracker.last_position() {
                self.tracker
                    .hover_at(position, &self.geometry, self.button_value);
            }
        }
        self.invalidate();

        if let Some(next) = self.engine.take_pending() {
            self.request_checked(next);
        }
    }

    fn apply_resize(&mut self, geometry: SwitchGeometry) {
        let old_travel = self.geometry.travel();
        self.geometry = geometry;
        self.bounds = self.bounds.with_size(geometry.track_rect().size());
        let new_travel = geometry.travel();
        if self.engine.retarget(new_travel) {
            debug!(old_travel, new_travel, "animation retargeted after resize");
        }
        self.button_value = match self.mode() {
            Mode::Idle => geometry.rest_position(self.checked),
            Mode::Dragging | Mode::Animating => geometry.clamp(self.button_value),
        };
        if self.mode() == Mode::Dragging {
            self.tracker.rebase(&geometry, self.button_value);
        }
        self.invalidate();
    }
}

impl Widget for Switch {
    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if !self.disposed {
            self.apply_resize(SwitchGeometry::from_host_size(bounds.width, bounds.height));
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.disposed {
            return;
        }
        self.renderer.render(&self.visual(), canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disposed {
            return None;
        }
        self.last_change = None;
        let handled = match *event {
            Event::PointerDown {
                position,
                button: MouseButton::Left,
            } => self.pointer_down(position),
            Event::PointerMove { position } => self.pointer_move(position),
            Event::PointerUp {
                position,
                button: MouseButton::Left,
            } => self.pointer_up(position),
            Event::PointerLeave => self.pointer_leave(),
            Event::Resize { width, height } => self.resize(width, height),
            Event::PointerDown { .. } | Event::PointerUp { .. } => Ok(()),
        };
        handled.ok()?;
        self.last_change
            .take()
            .map(|change| Box::new(change) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        !self.disposed && self.config.allow_user_change
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipswitch_core::RecordingCanvas;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KNOB: Point = Point::new(5.0, 10.0);
    const RIGHT_SIDE: Point = Point::new(40.0, 10.0);
    const LEFT_SIDE: Point = Point::new(10.0, 10.0);

    fn settle(switch: &mut Switch) -> Option<CheckedChanged> {
        let mut last = None;
        for _ in 0..1000 {
            if !switch.is_animating() {
                break;
            }
            if let Some(change) = switch.on_timer_tick().unwrap() {
                last = Some(change);
            }
        }
        last
    }

    fn recorded(switch: &mut Switch) -> Rc<RefCell<Vec<CheckedChanged>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        switch
            .on_checked_changed(move |change| sink.borrow_mut().push(*change))
            .unwrap();
        log
    }

    // ===== Construction =====

    #[test]
    fn test_switch_new() {
        let switch = Switch::new();
        assert!(!switch.is_checked());
        assert_eq!(switch.mode(), Mode::Idle);
        assert_eq!(switch.button_value(), 0);
        assert_eq!(switch.travel(), 31);
        assert_eq!(switch.pending_request(), None);
    }

    #[test]
    fn test_switch_builder() {
        let switch = Switch::new().size(70, 21).checked(true);
        assert!(switch.is_checked());
        assert_eq!(switch.track_width(), 70);
        assert_eq!(switch.button_width(), 19);
        assert_eq!(switch.button_value(), 51);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = SwitchConfig {
            animation_step: 0,
            ..SwitchConfig::default()
        };
        assert!(matches!(
            Switch::with_config(config),
            Err(SwitchError::InvalidArgument {
                name: "animation_step",
                ..
            })
        ));
    }

    // ===== Pointer =====

    #[test]
    fn test_drag_past_threshold_flips() {
        let mut switch = Switch::new();
        switch.pointer_down(KNOB).unwrap();
        assert_eq!(switch.mode(), Mode::Dragging);
        switch.pointer_move(Point::new(25.0, 10.0)).unwrap();
        assert_eq!(switch.button_value(), 20);
        switch.pointer_up(Point::new(25.0, 10.0)).unwrap();
        assert_eq!(switch.mode(), Mode::Animating);
        assert_eq!(switch.animation_result(), Some(true));

        let change = settle(&mut switch).unwrap();
        assert_eq!(
            change,
            CheckedChanged {
                checked: true,
                previous: false
            }
        );
        assert_eq!(switch.button_value(), 31);
        assert_eq!(switch.mode(), Mode::Idle);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut switch = Switch::new();
        switch.pointer_down(KNOB).unwrap();
        switch.pointer_move(Point::new(10.0, 10.0)).unwrap();
        switch.pointer_up(Point::new(10.0, 10.0)).unwrap();
        let change = settle(&mut switch).unwrap();
        assert!(!change.checked);
        assert!(!change.flipped());
        assert_eq!(switch.button_value(), 0);
    }

    #[test]
    fn test_drag_clamps_to_rail() {
        let mut switch = Switch::new();
        switch.pointer_down(KNOB).unwrap();
        switch.pointer_move(Point::new(500.0, 10.0)).unwrap();
        assert_eq!(switch.button_value(), 31);
        switch.pointer_move(Point::new(-500.0, 10.0)).unwrap();
        assert_eq!(switch.button_value(), 0);
    }

    #[test]
    fn test_stationary_click_toggles() {
        let mut switch = Switch::new();
        switch.pointer_down(KNOB).unwrap();
        switch.pointer_up(KNOB).unwrap();
        assert_eq!(switch.animation_result(), Some(true));
        settle(&mut switch);
        assert!(switch.is_checked());
    }

    #[test]
    fn test_stationary_click_without_button_toggle() {
        let mut switch = Switch::new();
        switch.set_toggle_on_button_click(false).unwrap();
        switch.pointer_down(KNOB).unwrap();
        switch.pointer_up(KNOB).unwrap();
        settle(&mut switch);
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_side_clicks() {
        let mut switch = Switch::new();
        switch.pointer_down(RIGHT_SIDE).unwrap();
        assert_eq!(switch.pressed(), Some(Zone::RightSide));
        switch.pointer_up(RIGHT_SIDE).unwrap();
        settle(&mut switch);
        assert!(switch.is_checked());

        switch.pointer_down(LEFT_SIDE).unwrap();
        switch.pointer_up(LEFT_SIDE).unwrap();
        settle(&mut switch);
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_side_click_disabled() {
        let mut switch = Switch::new();
        switch.set_toggle_on_side_click(false).unwrap();
        switch.pointer_down(RIGHT_SIDE).unwrap();
        switch.pointer_up(RIGHT_SIDE).unwrap();
        assert_eq!(switch.mode(), Mode::Idle);
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_hover_tracks_zone() {
        let mut switch = Switch::new();
        switch.pointer_move(RIGHT_SIDE).unwrap();
        assert_eq!(switch.hover(), Some(Zone::RightSide));
        switch.pointer_move(KNOB).unwrap();
        assert_eq!(switch.hover(), Some(Zone::Button));
        switch.pointer_leave().unwrap();
        assert_eq!(switch.hover(), None);
    }

    #[test]
    fn test_pointer_ignored_while_animating_then_hover_restored() {
        let mut switch = Switch::new();
        switch.set_checked(true).unwrap();
        switch.pointer_move(RIGHT_SIDE).unwrap();
        assert_eq!(switch.hover(), None);
        settle(&mut switch);
        // Knob now covers x in [31, 50).
        assert_eq!(switch.hover(), Some(Zone::Button));
    }

    #[test]
    fn test_pointer_ignored_when_user_change_disabled() {
        let mut switch = Switch::new();
        switch.set_allow_user_change(false).unwrap();
        switch.pointer_down(KNOB).unwrap();
        assert_eq!(switch.mode(), Mode::Idle);
        switch.pointer_up(KNOB).unwrap();
        assert!(!switch.is_animating());
    }

    #[test]
    fn test_disabling_user_change_mid_drag_returns_knob() {
        let mut switch = Switch::new();
        switch.pointer_down(KNOB).unwrap();
        switch.pointer_move(Point::new(30.0, 10.0)).unwrap();
        switch.set_allow_user_change(false).unwrap();
        assert_eq!(switch.mode(), Mode::Animating);
        assert_eq!(switch.animation_target(), Some(0));
        settle(&mut switch);
        assert!(!switch.is_checked());
        assert_eq!(switch.button_value(), 0);
    }

    // ===== Programmatic =====

    #[test]
    fn test_set_checked_same_value_is_noop() {
        let mut switch = Switch::new();
        let log = recorded(&mut switch);
        switch.set_checked(false).unwrap();
        assert_eq!(switch.mode(), Mode::Idle);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_checked_queues_while_animating() {
        let mut switch = Switch::new();
        let log = recorded(&mut switch);
        switch.set_checked(true).unwrap();
        switch.set_checked(false).unwrap();
        assert_eq!(switch.pending_request(), Some(false));

        settle(&mut switch);
        assert!(!switch.is_checked());
        assert_eq!(log.borrow().len(), 2);
        assert!(log.borrow()[0].checked);
        assert!(!log.borrow()[1].checked);
    }

    #[test]
    fn test_queued_request_matching_result_is_dropped() {
        let mut switch = Switch::new();
        let log = recorded(&mut switch);
        switch.set_checked(true).unwrap();
        switch.set_checked(true).unwrap();
        settle(&mut switch);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(switch.mode(), Mode::Idle);
    }

    #[test]
    fn test_no_animation_applies_immediately() {
        let mut switch = Switch::new();
        switch.set_use_animation(false).unwrap();
        let log = recorded(&mut switch);
        switch.set_checked(true).unwrap();
        assert!(switch.is_checked());
        assert_eq!(switch.mode(), Mode::Idle);
        assert_eq!(switch.button_value(), 31);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_disabling_animation_mid_flight_lands_knob() {
        let mut switch = Switch::new();
        switch.set_checked(true).unwrap();
        switch.on_timer_tick().unwrap();
        assert_eq!(switch.button_value(), 10);
        switch.set_use_animation(false).unwrap();
        assert!(switch.is_checked());
        assert_eq!(switch.button_value(), 31);
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut switch = Switch::new();
        switch.set_animation_interval(5).unwrap();
        switch.set_checked(true).unwrap();
        assert_eq!(switch.advance(4).unwrap(), None);
        assert_eq!(switch.button_value(), 0);
        assert_eq!(switch.advance(6).unwrap(), None);
        assert_eq!(switch.button_value(), 20);
        assert!(switch.advance(100).unwrap().is_some());
        assert_eq!(switch.button_value(), 31);
    }

    #[test]
    fn test_host_driven_ticks_are_counted() {
        let mut switch = Switch::new();
        switch.set_checked(true).unwrap();
        settle(&mut switch);
        assert_eq!(switch.animation_ticks(), 4);
    }

    #[test]
    fn test_advance_carries_ticks_into_queued_request() {
        let mut switch = Switch::new();
        switch.set_animation_interval(5).unwrap();
        let log = recorded(&mut switch);
        switch.set_checked(true).unwrap();
        switch.set_checked(false).unwrap();

        let change = switch.advance(100).unwrap();
        assert_eq!(
            change,
            Some(CheckedChanged {
                checked: false,
                previous: false,
            })
        );
        assert_eq!(switch.mode(), Mode::Idle);
        assert_eq!(switch.button_value(), 0);
        assert_eq!(switch.animation_ticks(), 4);
        assert_eq!(log.borrow().len(), 2);
    }

    // ===== Settings =====

    #[test]
    fn test_threshold_rejected_keeps_previous() {
        let mut switch = Switch::new();
        switch.set_threshold_percentage(30).unwrap();
        assert!(switch.set_threshold_percentage(101).is_err());
        assert!(switch.set_threshold_percentage(-1).is_err());
        assert_eq!(switch.config().threshold_percentage, 30);
    }

    #[test]
    fn test_step_and_interval_rejected() {
        let mut switch = Switch::new();
        assert!(switch.set_animation_step(0).is_err());
        assert!(switch.set_animation_interval(-3).is_err());
        assert_eq!(switch.config().animation_step, 10);
        assert_eq!(switch.config().animation_interval_ms, 1);
    }

    #[test]
    fn test_larger_step_fewer_ticks() {
        let mut switch = Switch::new();
        switch.set_animation_step(31).unwrap();
        switch.set_checked(true).unwrap();
        assert!(switch.on_timer_tick().unwrap().is_some());
    }

    // ===== Resize =====

    #[test]
    fn test_resize_idle_moves_to_rest() {
        let mut switch = Switch::new().checked(true);
        switch.resize(70.0, 21.0).unwrap();
        assert_eq!(switch.travel(), 51);
        assert_eq!(switch.button_value(), 51);
    }

    #[test]
    fn test_resize_retargets_on_animation() {
        let mut switch = Switch::new();
        switch.set_checked(true).unwrap();
        switch.on_timer_tick().unwrap();
        switch.resize(70.0, 21.0).unwrap();
        assert_eq!(switch.animation_target(), Some(51));
        settle(&mut switch);
        assert_eq!(switch.button_value(), 51);
    }

    #[test]
    fn test_resize_while_pressed_keeps_click() {
        let mut switch = Switch::new().checked(true);
        switch.pointer_down(RIGHT_SIDE).unwrap();
        assert_eq!(switch.mode(), Mode::Dragging);
        switch.resize(40.0, 21.0).unwrap();
        assert_eq!(switch.button_value(), 21);

        switch.pointer_up(RIGHT_SIDE).unwrap();
        settle(&mut switch);
        assert!(!switch.is_checked());
        assert_eq!(switch.button_value(), 0);
    }

    #[test]
    fn test_resize_while_dragging_knob_follows_next_move() {
        let mut switch = Switch::new();
        switch.pointer_down(KNOB).unwrap();
        switch.pointer_move(Point::new(30.0, 10.0)).unwrap();
        assert_eq!(switch.button_value(), 25);

        switch.resize(40.0, 21.0).unwrap();
        assert_eq!(switch.button_value(), 21);
        switch.pointer_move(Point::new(29.0, 10.0)).unwrap();
        assert_eq!(switch.button_value(), 20);
    }

    #[test]
    fn test_resize_to_zero_collapses_rail() {
        let mut switch = Switch::new().checked(true);
        switch.resize(0.0, 0.0).unwrap();
        assert_eq!(switch.travel(), 0);
        assert_eq!(switch.button_value(), 0);
    }

    // ===== Disposal =====

    #[test]
    fn test_dispose_rejects_operations() {
        let mut switch = Switch::new();
        switch.set_checked(true).unwrap();
        switch.dispose();
        assert!(switch.is_disposed());
        assert!(!switch.is_animating());
        assert_eq!(switch.set_checked(false), Err(SwitchError::Disposed));
        assert_eq!(switch.pointer_down(KNOB), Err(SwitchError::Disposed));
        assert_eq!(switch.on_timer_tick(), Err(SwitchError::Disposed));
        assert_eq!(switch.button_rectangle(), Err(SwitchError::Disposed));
        switch.dispose();
    }

    // ===== Widget =====

    #[test]
    fn test_widget_event_returns_change() {
        let mut switch = Switch::new();
        switch.set_use_animation(false).unwrap();
        assert!(switch.event(&Event::down(5.0, 10.0)).is_none());
        let message = switch.event(&Event::up(5.0, 10.0)).unwrap();
        let change = message.downcast_ref::<CheckedChanged>().unwrap();
        assert!(change.checked);
    }

    #[test]
    fn test_widget_event_folds_chained_changes() {
        let mut switch = Switch::new();
        switch.set_use_animation(false).unwrap();
        let log = recorded(&mut switch);
        switch.event(&Event::down(5.0, 10.0));
        switch.event(&Event::moved(10.0, 10.0));
        switch.set_checked(true).unwrap();

        // Short drag snaps back, then the queued request runs.
        let message = switch.event(&Event::up(10.0, 10.0)).unwrap();
        let change = message.downcast_ref::<CheckedChanged>().unwrap();
        assert_eq!(
            *change,
            CheckedChanged {
                checked: true,
                previous: false,
            }
        );
        assert_eq!(log.borrow().len(), 2);
        assert!(!log.borrow()[0].checked);
        assert!(log.borrow()[1].checked);
    }

    #[test]
    fn test_widget_event_hover_and_leave() {
        let mut switch = Switch::new();
        switch.event(&Event::moved(40.0, 10.0));
        assert_eq!(switch.hover(), Some(Zone::RightSide));
        switch.event(&Event::PointerLeave);
        assert_eq!(switch.hover(), None);
        switch.event(&Event::Resize {
            width: 70.0,
            height: 21.0,
        });
        assert_eq!(switch.travel(), 51);
    }

    #[test]
    fn test_widget_ignores_right_button() {
        let mut switch = Switch::new();
        switch.event(&Event::PointerDown {
            position: KNOB,
            button: MouseButton::Right,
        });
        assert_eq!(switch.mode(), Mode::Idle);
    }

    #[test]
    fn test_widget_layout_and_role() {
        let mut switch = Switch::new();
        let result = switch.layout(Rect::new(10.0, 10.0, 60.0, 25.0));
        assert_eq!(result.size.width, 60.0);
        assert_eq!(switch.bounds().origin(), Point::new(10.0, 10.0));
        assert_eq!(switch.travel(), 37);
        assert_eq!(switch.accessible_role(), AccessibleRole::Switch);
        assert!(switch.is_interactive());
    }

    #[test]
    fn test_widget_paint_uses_renderer() {
        let switch = Switch::new();
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 3);
    }

    #[test]
    fn test_take_repaint() {
        let mut switch = Switch::new();
        assert!(!switch.take_repaint());
        switch.pointer_move(RIGHT_SIDE).unwrap();
        assert!(switch.take_repaint());
        assert!(!switch.take_repaint());
        assert!(switch.repaint_requests() >= 1);
    }
}
