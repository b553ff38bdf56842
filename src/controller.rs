use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{FetchError, WindowError};
use crate::layout::{Frame, compute_frame};
use crate::model::BlockRecord;
use crate::window::Window;

/// Live-tracking mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No topoheight known yet; empty window, no fetches emitted.
    Uninitialized,
    /// Window tracks the node's reported chain tip.
    Following,
    /// Window frozen at a user-chosen scrub anchor.
    Paused { anchor: u64 },
}

/// Identifies one issued fetch. Only the most recently issued ticket is
/// accepted back; anything older is a stale completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// Ask the host to fetch all blocks whose topoheight lies in `window`
/// (both bounds inclusive) and report back via
/// [`DagController::complete_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub window: Window,
}

/// What became of a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    /// The result was current; a new frame was published.
    Applied,
    /// The window moved on while the fetch was in flight; the result was
    /// discarded and the frame left untouched.
    Stale,
}

/// Event-driven window controller. The host owns one instance per DAG
/// view, feeds it node events (`notify_*`), performs the fetches it
/// requests, and reads the latest [`Frame`] after each applied completion.
///
/// All recomputation happens synchronously inside these calls; fetches run
/// outside the controller and may complete out of order, which is why
/// every request carries a ticket.
#[derive(Debug)]
pub struct DagController {
    config: EngineConfig,
    state: ControllerState,
    known_topoheight: Option<u64>,
    window: Option<Window>,
    records: Vec<BlockRecord>,
    frame: Frame,
    pinned: HashMap<String, BlockRecord>,
    next_ticket: u64,
    inflight: Option<FetchRequest>,
}

impl DagController {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: ControllerState::Uninitialized,
            known_topoheight: None,
            window: None,
            records: Vec::new(),
            frame: Frame::empty(),
            pinned: HashMap::new(),
            next_ticket: 0,
            inflight: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// The latest fully computed frame. Empty until the first fetch for a
    /// known topoheight completes.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Latest chain tip reported by the node, whether or not the window
    /// currently tracks it.
    pub fn known_topoheight(&self) -> Option<u64> {
        self.known_topoheight
    }

    /// New chain tip reported by the node. Initializes the controller on
    /// first call; while following, slides the window forward to end at
    /// the new tip. While paused the tip is only recorded so that a later
    /// `resume` reflects the latest chain state.
    pub fn notify_topoheight(&mut self, topoheight: u64) -> Option<FetchRequest> {
        self.known_topoheight = Some(self.known_topoheight.map_or(topoheight, |known| {
            known.max(topoheight)
        }));

        match self.state {
            ControllerState::Uninitialized => {
                self.state = ControllerState::Following;
                self.move_window(Window::tail(topoheight, self.max_width()))
            }
            ControllerState::Following => {
                let current_high = self.window.map(|w| w.high());
                if current_high.is_some_and(|high| topoheight <= high) {
                    return None;
                }
                self.move_window(Window::tail(topoheight, self.max_width()))
            }
            ControllerState::Paused { .. } => None,
        }
    }

    /// A previously unordered block received its final topological
    /// position. Patches the stored record (recomputing the frame in
    /// place, no fetch needed) and then treats the position as a tip
    /// notification, which may slide the window while following.
    pub fn notify_block_ordered(
        &mut self,
        topoheight: u64,
        block_hash: &str,
    ) -> Option<FetchRequest> {
        let mut patched = false;
        for record in &mut self.records {
            if record.hash == block_hash {
                record.topoheight = Some(topoheight);
                patched = true;
                break;
            }
        }
        if let Some(record) = self.pinned.get_mut(block_hash) {
            record.topoheight = Some(topoheight);
        }
        if patched {
            self.frame = compute_frame(&self.records, self.window, &self.config.layout);
            debug!(block_hash, topoheight, "patched ordered block");
        }

        self.notify_topoheight(topoheight)
    }

    /// Freezes the window at the current high bound. No-op unless
    /// following.
    pub fn pause(&mut self) {
        if self.state != ControllerState::Following {
            return;
        }
        let anchor = self
            .window
            .map(|w| w.high())
            .or(self.known_topoheight)
            .unwrap_or(0);
        self.state = ControllerState::Paused { anchor };
        debug!(anchor, "paused");
    }

    /// Returns to following the chain tip. The window snaps to the latest
    /// known topoheight, which may have advanced while paused.
    pub fn resume(&mut self) -> Option<FetchRequest> {
        let ControllerState::Paused { .. } = self.state else {
            return None;
        };
        self.state = ControllerState::Following;
        let tip = self.known_topoheight?;
        self.move_window(Window::tail(tip, self.max_width()))
    }

    /// Moves the scrub anchor by `delta` topoheights while paused, clamped
    /// to `[max_width, known topoheight]` so the window never dips below a
    /// full view nor beyond the chain tip.
    pub fn scrub(&mut self, delta: i64) -> Option<FetchRequest> {
        let ControllerState::Paused { anchor } = self.state else {
            return None;
        };
        let floor = self.max_width();
        let ceiling = self.known_topoheight.unwrap_or(anchor).max(floor);
        let target = anchor.saturating_add_signed(delta).clamp(floor, ceiling);
        if target == anchor {
            return None;
        }
        self.state = ControllerState::Paused { anchor: target };
        self.move_window(Window::tail(target, self.max_width()))
    }

    /// Scrub backward by one configured stride.
    pub fn step_back(&mut self) -> Option<FetchRequest> {
        let stride = self.config.window.scrub_stride as i64;
        self.scrub(-stride)
    }

    /// Scrub forward by one configured stride.
    pub fn step_forward(&mut self) -> Option<FetchRequest> {
        let stride = self.config.window.scrub_stride as i64;
        self.scrub(stride)
    }

    /// Explicitly sets the window. Bounds are validated against the
    /// configured maximum width; on violation the current window and frame
    /// are left untouched. While paused the scrub anchor follows the new
    /// high bound.
    pub fn set_window(&mut self, low: u64, high: u64) -> Result<Option<FetchRequest>, WindowError> {
        let window = Window::new(low, high, self.max_width())?;
        if let ControllerState::Paused { .. } = self.state {
            self.state = ControllerState::Paused {
                anchor: window.high(),
            };
        }
        if self.window == Some(window) {
            return Ok(None);
        }
        Ok(self.move_window(window))
    }

    /// Reports the outcome of a previously requested fetch. A ticket other
    /// than the most recently issued one is stale: its result is discarded
    /// so an out-of-order completion can never overwrite a newer frame. On
    /// success the whole frame is replaced atomically; on failure nothing
    /// changes and the host decides whether to retry.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<BlockRecord>, FetchError>,
    ) -> Result<FetchDisposition, FetchError> {
        let Some(request) = self.inflight else {
            warn!(?ticket, "fetch completed with no request outstanding, discarded");
            return Ok(FetchDisposition::Stale);
        };
        if request.ticket != ticket {
            warn!(
                stale = ticket.0,
                current = request.ticket.0,
                "stale fetch completion discarded"
            );
            return Ok(FetchDisposition::Stale);
        }

        match result {
            Ok(records) => {
                self.inflight = None;
                self.records = records;
                self.frame = compute_frame(&self.records, Some(request.window), &self.config.layout);
                Ok(FetchDisposition::Applied)
            }
            Err(err) => {
                warn!(window = ?request.window, %err, "fetch failed, keeping previous frame");
                Err(err)
            }
        }
    }

    /// Retains the named block beyond window eviction, e.g. while the user
    /// has it open in a detail view. Returns false if the hash is not in
    /// the currently materialized set.
    pub fn pin(&mut self, hash: &str) -> bool {
        if self.pinned.contains_key(hash) {
            return true;
        }
        match self.records.iter().find(|record| record.hash == hash) {
            Some(record) => {
                self.pinned.insert(hash.to_string(), record.clone());
                true
            }
            None => false,
        }
    }

    pub fn pinned(&self, hash: &str) -> Option<&BlockRecord> {
        self.pinned.get(hash)
    }

    pub fn unpin(&mut self, hash: &str) -> Option<BlockRecord> {
        self.pinned.remove(hash)
    }

    fn max_width(&self) -> u64 {
        self.config.window.max_width.max(1)
    }

    fn move_window(&mut self, window: Window) -> Option<FetchRequest> {
        self.window = Some(window);
        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        let request = FetchRequest { ticket, window };
        self.inflight = Some(request);
        debug!(low = window.low(), high = window.high(), ticket = ticket.0, "window moved");
        Some(request)
    }
}
