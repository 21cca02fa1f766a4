#![forbid(unsafe_code)]

//! [`ReorderGrid`]: a fixed grid of cells that can be rearranged by
//! long-press dragging.
//!
//! The grid owns the cells, the layout, the animation driver, the gesture
//! recognizer, and the one drag session. The host feeds it three things:
//!
//! - the available size, through [`layout`](ReorderGrid::layout);
//! - pointer input, through [`handle_pointer`](ReorderGrid::handle_pointer)
//!   (or already-recognized gestures through
//!   [`handle_semantic`](ReorderGrid::handle_semantic));
//! - frame time, through [`tick`](ReorderGrid::tick).
//!
//! It then reads cell frames back with [`children`](ReorderGrid::children)
//! or [`paint_order`](ReorderGrid::paint_order) and draws them.
//!
//! # Drag lifecycle
//!
//! 1. **Idle → Dragging** on a long press over a drawn cell, topmost first,
//!    as for taps. The cell is raised to the top of the paint order, every
//!    cell's start hook fires, then the drag source's, and a [`DragPayload`]
//!    is returned.
//! 2. **Dragging**: each move hit-tests the pointer against the grid slots.
//!    A new overlap index reorders the cells in between; the same index, or
//!    no index at all, reorders nothing. The dragged cell always follows the
//!    pointer at its original grab offset.
//! 3. **Dragging → Settling** on release or platform cancel. Every cell's end
//!    hook fires and the dragged cell animates into the slot for its final
//!    index over the settle duration.
//! 4. **Settling → Idle** when that animation completes. The cell lands
//!    exactly on its slot and the drag source's end hook fires.
//!
//! # Invariants
//!
//! 1. Cell indices always form a permutation of `0..cell_count`.
//! 2. Outside a session, after a layout pass and once animations finish,
//!    every cell's frame is `cell_rect(index)`.
//! 3. Neither a layout pass nor a shift animation moves the floating cell.
//! 4. Tap and long press are honoured only in [`GridPhase::Idle`].
//!
//! # Failure Modes
//!
//! - No adapter: the placeholder single-cell shape is used and there are no
//!   cells; every gesture is ignored.
//! - Replacing the adapter mid-drag drops the session on the spot and fires
//!   the drag source's end hook.

use std::fmt;
use std::time::Duration;

use regrid_core::event::PointerEvent;
use regrid_core::geometry::{Point, Rect, Size};
use regrid_core::gesture::GestureRecognizer;
use regrid_core::semantic_event::SemanticEvent;
use regrid_layout::{GridMetrics, GridShape};
use web_time::Instant;

use crate::adapter::GridAdapter;
use crate::animator::{AnimationKind, CellAnimator, Completed};
use crate::cell::{Cell, CellElement, CellId};
use crate::config::GridConfig;
use crate::drag::{DragPayload, DragSession, DragSource, GridPhase};
use crate::layout::{GridLayout, LayoutDirty, place_cells};
use crate::reorder::reorder;

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// What an input event did to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridResponse {
    /// A long press picked up a cell.
    DragStarted(DragPayload),
    /// A move changed the overlap index and cells were shifted.
    Reordered {
        cell: CellId,
        from: usize,
        to: usize,
        /// Number of other cells that changed index.
        shifted: usize,
    },
    /// The dragged cell followed the pointer without reordering.
    Moved { cell: CellId, origin: Point },
    /// The dragged cell was released and started settling at `index`.
    Dropped { cell: CellId, index: usize },
    /// A cell was tapped.
    Tapped(CellId),
    /// The event had no effect.
    Ignored,
}

/// Everything that happened during one [`ReorderGrid::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Result of a long press detected by polling, if one fired.
    pub gesture: Option<GridResponse>,
    /// Animations that finished this tick.
    pub completed: Vec<Completed>,
    /// The cell whose settle finished, ending the drag session.
    pub settled: Option<CellId>,
}

/// One child of the grid container, tagged by kind.
#[derive(Debug)]
pub enum GridChild<'a, V, R> {
    Header { region: &'a R, frame: Rect },
    Cell(&'a Cell<V>),
    Footer { region: &'a R, frame: Rect },
}

impl<V: CellElement, R> GridChild<'_, V, R> {
    /// Where to draw this child.
    #[must_use]
    pub fn frame(&self) -> Rect {
        match self {
            Self::Header { frame, .. } | Self::Footer { frame, .. } => *frame,
            Self::Cell(cell) => cell.visual_rect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ReorderGrid
// ---------------------------------------------------------------------------

/// A drag-to-reorder grid over the cells supplied by an adapter `A`.
pub struct ReorderGrid<A: GridAdapter> {
    config: GridConfig,
    adapter: Option<A>,
    header: Option<A::Region>,
    footer: Option<A::Region>,
    cells: Vec<Cell<A::View>>,
    /// Bottom to top.
    paint: Vec<CellId>,
    next_id: u64,
    layout: GridLayout,
    animator: CellAnimator,
    gestures: GestureRecognizer,
    session: Option<DragSession>,
    phase: GridPhase,
    drag_source: Option<Box<dyn DragSource<A::View>>>,
}

impl<A: GridAdapter> ReorderGrid<A> {
    /// An empty grid with no adapter.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        let gestures = GestureRecognizer::new(config.gesture_config());
        Self {
            config,
            adapter: None,
            header: None,
            footer: None,
            cells: Vec::new(),
            paint: Vec::new(),
            next_id: 0,
            layout: GridLayout::new(GridShape::placeholder()),
            animator: CellAnimator::new(),
            gestures,
            session: None,
            phase: GridPhase::Idle,
            drag_source: None,
        }
    }

    /// A grid populated from `adapter` with default configuration.
    #[must_use]
    pub fn with_adapter(adapter: A) -> Self {
        let mut grid = Self::new(GridConfig::default());
        grid.set_adapter(adapter);
        grid
    }

    #[must_use]
    pub fn with_drag_source(mut self, source: impl DragSource<A::View> + 'static) -> Self {
        self.set_drag_source(source);
        self
    }

    pub fn set_drag_source(&mut self, source: impl DragSource<A::View> + 'static) {
        self.drag_source = Some(Box::new(source));
    }

    pub fn clear_drag_source(&mut self) {
        self.drag_source = None;
    }

    // -- adapter ------------------------------------------------------------

    /// Attach `adapter`, destroying every existing cell and creating one per
    /// `item_count()`. Returns the previous adapter.
    pub fn set_adapter(&mut self, adapter: A) -> Option<A> {
        let previous = self.adapter.take();
        self.attach(adapter);
        previous
    }

    /// Detach the adapter. The grid falls back to the placeholder shape with
    /// no cells.
    pub fn clear_adapter(&mut self) -> Option<A> {
        self.teardown();
        self.header = None;
        self.footer = None;
        self.layout.set_shape(GridShape::placeholder());
        self.relayout();
        self.adapter.take()
    }

    /// Re-read the adapter's declared counts and sizes.
    ///
    /// A changed item count recreates every cell, like attaching a new
    /// adapter. Otherwise the cells are kept and only the layout is redone.
    pub fn notify_data_changed(&mut self) {
        let Some(adapter) = self.adapter.take() else {
            return;
        };
        if adapter.item_count() != self.cells.len() {
            self.attach(adapter);
            return;
        }
        self.layout.set_shape(adapter.shape());
        self.adapter = Some(adapter);
        self.relayout();
    }

    #[must_use]
    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    /// Mutable access to the adapter. Call
    /// [`notify_data_changed`](Self::notify_data_changed) after changing
    /// anything it declares.
    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    fn attach(&mut self, mut adapter: A) {
        self.teardown();

        let count = adapter.item_count();
        self.cells.reserve(count);
        for index in 0..count {
            let mut view = adapter.view(index);
            view.set_index(index);
            let id = CellId(self.next_id);
            self.next_id += 1;
            self.cells.push(Cell::new(id, view));
            self.paint.push(id);
        }
        self.header = adapter.header();
        self.footer = adapter.footer();
        self.layout.set_shape(adapter.shape());
        self.adapter = Some(adapter);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "grid.adapter_attached", cells = count);

        self.relayout();
    }

    /// Destroy every cell. A live session ends without settling.
    fn teardown(&mut self) {
        if self.session.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "grid.session_dropped");

            if let Some(source) = self.drag_source.as_deref_mut() {
                source.on_drag_ended();
            }
        }
        self.phase = GridPhase::Idle;
        self.animator.clear();
        self.gestures.reset();
        self.cells.clear();
        self.paint.clear();
    }

    // -- configuration ------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replace the configuration. Running animations keep their durations.
    pub fn set_config(&mut self, config: GridConfig) {
        self.gestures.set_config(config.gesture_config());
        self.config = config;
    }

    // -- layout -------------------------------------------------------------

    /// Lay the grid out in a container of size `available`.
    ///
    /// Every cell except the floating one is moved to its slot. Running
    /// animations are redirected to the new slots rather than cancelled.
    pub fn layout(&mut self, available: Size) {
        self.layout.update(available);
        self.place();
    }

    fn relayout(&mut self) {
        self.layout.mark_dirty(LayoutDirty::SHAPE);
        self.layout.update(self.layout.available());
        self.place();
    }

    fn place(&mut self) {
        let floating = self.session.as_ref().map(DragSession::cell);
        place_cells(
            &mut self.cells,
            self.layout.metrics(),
            floating,
            &mut self.animator,
        );
    }

    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        self.layout.metrics()
    }

    /// Header frame, if the adapter supplied a header.
    #[must_use]
    pub fn header_frame(&self) -> Option<Rect> {
        self.header.as_ref().map(|_| self.metrics().header_rect())
    }

    /// Footer frame, if the adapter supplied a footer.
    #[must_use]
    pub fn footer_frame(&self) -> Option<Rect> {
        self.footer.as_ref().map(|_| self.metrics().footer_rect())
    }

    // -- input --------------------------------------------------------------

    /// Feed a raw pointer event through the gesture recognizer.
    ///
    /// Returns the responses of every gesture it produced, without
    /// [`GridResponse::Ignored`] entries.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> Vec<GridResponse> {
        self.gestures
            .process(event, now)
            .iter()
            .map(|gesture| self.handle_semantic(gesture))
            .filter(|r| *r != GridResponse::Ignored)
            .collect()
    }

    /// Apply one recognized gesture.
    pub fn handle_semantic(&mut self, event: &SemanticEvent) -> GridResponse {
        match *event {
            SemanticEvent::Tap { pos } => self.tap(pos),
            SemanticEvent::LongPress { pos, .. } => self.start_drag(pos),
            SemanticEvent::DragMove { current, .. } => self.drag_to(current),
            SemanticEvent::DragEnd { end, .. } => {
                if self.phase != GridPhase::Dragging {
                    return GridResponse::Ignored;
                }
                self.drag_to(end);
                self.drop_dragged()
            }
            SemanticEvent::DragCancel => self.drop_dragged(),
        }
    }

    fn tap(&mut self, pos: Point) -> GridResponse {
        if !self.phase.is_idle() {
            return GridResponse::Ignored;
        }
        let Some(slot) = self.topmost_at(pos) else {
            return GridResponse::Ignored;
        };
        let id = self.cells[slot].id();
        if let Some(source) = self.drag_source.as_deref_mut() {
            source.on_click_element(self.cells[slot].view());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "grid.tap", cell = id.get());

        GridResponse::Tapped(id)
    }

    fn start_drag(&mut self, pos: Point) -> GridResponse {
        if !self.phase.is_idle() {
            return GridResponse::Ignored;
        }
        let Some(slot) = self.topmost_at(pos) else {
            return GridResponse::Ignored;
        };

        let cell = &mut self.cells[slot];
        let id = cell.id();
        let start_index = cell.index();
        // Pick the cell up where it is drawn, even mid-animation.
        self.animator.cancel(id);
        let origin = cell.visual;
        cell.frame = cell.frame.with_origin(origin);
        let session = DragSession::new(id, start_index, pos - origin);

        self.raise(id);
        let dragged = self.cells[slot].descriptor();
        for cell in &mut self.cells {
            cell.view_mut().on_drag_start_preceding(&dragged);
        }
        if let Some(source) = self.drag_source.as_deref_mut() {
            source.on_drag_start_preceding();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "grid.drag_start",
            cell = id.get(),
            index = start_index,
            grab_x = session.grab_offset().x,
            grab_y = session.grab_offset().y
        );

        let payload = session.payload();
        self.session = Some(session);
        self.phase = GridPhase::Dragging;
        GridResponse::DragStarted(payload)
    }

    fn drag_to(&mut self, pointer: Point) -> GridResponse {
        if self.phase != GridPhase::Dragging {
            return GridResponse::Ignored;
        }
        let overlap = self.metrics().geometry().index_for_point(pointer);
        let Some(session) = self.session.as_mut() else {
            return GridResponse::Ignored;
        };
        let id = session.cell();
        let changed = session.observe_overlap(overlap);

        #[cfg(feature = "tracing")]
        if overlap.is_none() {
            tracing::trace!(
                message = "grid.overlap_kept",
                last = session.last_overlap().map(|i| i as u64)
            );
        }

        let mut response = None;
        if let Some(to) = changed
            && let Some(from) = self.cells.iter().find(|c| c.id() == id).map(Cell::index)
            && from != to
        {
            let shifted = self.apply_reorder(id, from, to);
            if let Some(session) = self.session.as_mut() {
                session.note_reorder();
            }
            response = Some(GridResponse::Reordered {
                cell: id,
                from,
                to,
                shifted,
            });
        }

        let origin = match self.session.as_ref() {
            Some(session) => session.origin_for(pointer),
            None => return GridResponse::Ignored,
        };
        if let Some(cell) = self.cells.iter_mut().find(|c| c.id() == id) {
            cell.frame = cell.frame.with_origin(origin);
            cell.visual = origin;
        }

        response.unwrap_or(GridResponse::Moved { cell: id, origin })
    }

    /// Reorder and start a shift animation for every cell that moved.
    fn apply_reorder(&mut self, dragged: CellId, from: usize, to: usize) -> usize {
        let shifts = reorder(&mut self.cells, dragged, to);
        let geometry = *self.layout.metrics().geometry();
        let duration = self.config.animation_duration();

        for shift in &shifts {
            let Some(cell) = self.cells.iter_mut().find(|c| c.id() == shift.cell) else {
                continue;
            };
            let target = geometry.cell_rect(shift.to);
            self.animator.start(
                shift.cell,
                AnimationKind::Shift,
                cell.visual,
                target.origin(),
                duration,
            );
            cell.frame = target;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "grid.reorder",
            cell = dragged.get(),
            from,
            to,
            shifted = shifts.len()
        );
        #[cfg(not(feature = "tracing"))]
        let _ = from;

        shifts.len()
    }

    fn drop_dragged(&mut self) -> GridResponse {
        if self.phase != GridPhase::Dragging {
            return GridResponse::Ignored;
        }
        let Some(id) = self.session.as_ref().map(DragSession::cell) else {
            return GridResponse::Ignored;
        };
        let Some(slot) = self.cells.iter().position(|c| c.id() == id) else {
            return GridResponse::Ignored;
        };

        let dragged = self.cells[slot].descriptor();
        for cell in &mut self.cells {
            cell.view_mut().on_drag_ended(&dragged);
        }

        let target = self.metrics().geometry().cell_rect(dragged.index);
        let from = self.cells[slot].visual;
        self.animator.start(
            id,
            AnimationKind::Settle,
            from,
            target.origin(),
            self.config.settle_duration(),
        );
        self.phase = GridPhase::Settling;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "grid.settle_start",
            cell = id.get(),
            index = dragged.index,
            from_x = from.x,
            from_y = from.y
        );

        GridResponse::Dropped {
            cell: id,
            index: dragged.index,
        }
    }

    // -- time ---------------------------------------------------------------

    /// Advance the grid to `now`, `dt` after the previous tick.
    ///
    /// Polls the long-press timer, steps every animation, and finishes the
    /// drag session if the settle animation completed.
    pub fn tick(&mut self, now: Instant, dt: Duration) -> TickReport {
        let mut report = TickReport::default();

        if let Some(gesture) = self.gestures.check_long_press(now) {
            let response = self.handle_semantic(&gesture);
            if response != GridResponse::Ignored {
                report.gesture = Some(response);
            }
        }

        let completed = self.animator.tick(dt);
        for cell in &mut self.cells {
            if let Some(pos) = self.animator.position(cell.id()) {
                cell.visual = pos;
            }
        }

        let geometry = *self.layout.metrics().geometry();
        for done in &completed {
            let Some(cell) = self.cells.iter_mut().find(|c| c.id() == done.cell) else {
                continue;
            };
            match done.kind {
                AnimationKind::Shift => cell.visual = cell.frame.origin(),
                AnimationKind::Settle => {
                    cell.snap_to(geometry.cell_rect(cell.index()));
                    if self.session.as_ref().is_some_and(|s| s.cell() == done.cell) {
                        report.settled = Some(done.cell);
                    }
                }
            }
        }
        report.completed = completed;

        if let Some(id) = report.settled {
            self.finish_session(id);
        }
        report
    }

    fn finish_session(&mut self, id: CellId) {
        self.session = None;
        self.phase = GridPhase::Idle;
        if let Some(source) = self.drag_source.as_deref_mut() {
            source.on_drag_ended();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "grid.settled", cell = id.get());
        #[cfg(not(feature = "tracing"))]
        let _ = id;
    }

    // -- queries ------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The dragged or settling cell.
    #[must_use]
    pub fn dragged_cell(&self) -> Option<&Cell<A::View>> {
        let id = self.session.as_ref()?.cell();
        self.cell(id)
    }

    /// Cells in creation order.
    #[must_use]
    pub fn cells(&self) -> &[Cell<A::View>] {
        &self.cells
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell<A::View>> {
        self.cells.iter().find(|c| c.id() == id)
    }

    /// The cell currently at logical `index`.
    #[must_use]
    pub fn cell_at_index(&self, index: usize) -> Option<&Cell<A::View>> {
        self.cells.iter().find(|c| c.index() == index)
    }

    /// The topmost cell drawn under `point`.
    #[must_use]
    pub fn cell_at_point(&self, point: Point) -> Option<&Cell<A::View>> {
        self.topmost_at(point).map(|slot| &self.cells[slot])
    }

    /// Cell ids in logical order.
    #[must_use]
    pub fn order(&self) -> Vec<CellId> {
        let mut cells: Vec<&Cell<A::View>> = self.cells.iter().collect();
        cells.sort_by_key(|c| c.index());
        cells.iter().map(|c| c.id()).collect()
    }

    /// Cell ids from bottom to top.
    #[must_use]
    pub fn paint_order(&self) -> &[CellId] {
        &self.paint
    }

    /// Header, cells bottom to top, then footer.
    #[must_use]
    pub fn children(&self) -> Vec<GridChild<'_, A::View, A::Region>> {
        let mut out = Vec::with_capacity(self.cells.len() + 2);
        if let Some(region) = self.header.as_ref() {
            out.push(GridChild::Header {
                region,
                frame: self.metrics().header_rect(),
            });
        }
        out.extend(
            self.paint
                .iter()
                .filter_map(|id| self.cell(*id))
                .map(GridChild::Cell),
        );
        if let Some(region) = self.footer.as_ref() {
            out.push(GridChild::Footer {
                region,
                frame: self.metrics().footer_rect(),
            });
        }
        out
    }

    /// Number of animations in flight.
    #[must_use]
    pub fn active_animations(&self) -> usize {
        self.animator.len()
    }

    #[must_use]
    pub fn is_animating(&self, id: CellId) -> bool {
        self.animator.is_animating(id)
    }

    /// No drag session and nothing moving. Hosts can stop ticking until the
    /// next pointer event.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.phase.is_idle() && self.animator.is_empty()
    }

    // -- internals ----------------------------------------------------------

    fn raise(&mut self, id: CellId) {
        if let Some(pos) = self.paint.iter().position(|p| *p == id) {
            let raised = self.paint.remove(pos);
            self.paint.push(raised);
        }
    }

    /// Storage slot of the topmost cell whose drawn rect contains `point`.
    fn topmost_at(&self, point: Point) -> Option<usize> {
        self.paint.iter().rev().find_map(|id| {
            let slot = self.cells.iter().position(|c| c.id() == *id)?;
            self.cells[slot]
                .visual_rect()
                .contains(point)
                .then_some(slot)
        })
    }
}

impl<A: GridAdapter> fmt::Debug for ReorderGrid<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderGrid")
            .field("config", &self.config)
            .field("has_adapter", &self.adapter.is_some())
            .field("cells", &self.cells.len())
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("animations", &self.animator.len())
            .field("metrics", self.layout.metrics())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
