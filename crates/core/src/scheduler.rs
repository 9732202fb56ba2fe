//! Cooperative task scheduler.
//!
//! A task is a state machine that does one tick worth of work per call to
//! [`Task::step`] and reports whether it wants to be resumed again. The
//! scheduler resumes every live task exactly once per [`Scheduler::tick`]:
//!
//! - Tasks run in insertion order of the live set as it stood when the tick
//!   started.
//! - Tasks spawned during a tick (through the [`Spawner`]) are appended after
//!   the pass and first run on the next tick.
//! - A task cancelled during a tick is dropped before its turn if it has not
//!   run yet; it is never resumed again either way.
//!
//! Everything is single threaded. "Suspending" is returning
//! [`Step::Pending`]; the task keeps its locals in its own fields.

use std::collections::HashSet;
use std::fmt;

/// Outcome of one resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Resume again next tick.
    Pending,
    /// Finished; drop the task.
    Done,
}

/// Handle to a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// A suspendable unit of per-tick behavior over a shared context `C`.
pub trait Task<C> {
    fn step(&mut self, ctx: &mut C, spawner: &mut Spawner<C>) -> Step;

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "task"
    }
}

struct Entry<C> {
    id: TaskId,
    task: Box<dyn Task<C>>,
}

/// Collects tasks spawned and cancelled while a tick is in progress.
pub struct Spawner<C> {
    next_id: u64,
    spawned: Vec<Entry<C>>,
    cancelled: HashSet<TaskId>,
}

impl<C> Spawner<C> {
    fn new() -> Self {
        Self {
            next_id: 0,
            spawned: Vec::new(),
            cancelled: HashSet::new(),
        }
    }

    /// Queue a task; it first runs on the tick after the current one.
    pub fn spawn(&mut self, task: impl Task<C> + 'static) -> TaskId {
        self.spawn_boxed(Box::new(task))
    }

    fn spawn_boxed(&mut self, task: Box<dyn Task<C>>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.spawned.push(Entry { id, task });
        id
    }

    /// Remove a task from the live set. Unknown or finished ids are dropped
    /// at the end of the current tick.
    pub fn cancel(&mut self, id: TaskId) {
        self.cancelled.insert(id);
    }

    /// Number of tasks waiting to join the live set.
    pub fn pending(&self) -> usize {
        self.spawned.len()
    }
}

/// The live task set.
pub struct Scheduler<C> {
    live: Vec<Entry<C>>,
    spawner: Spawner<C>,
    ticks: u64,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            live: Vec::new(),
            spawner: Spawner::new(),
            ticks: 0,
        }
    }

    /// Add a task to the live set (it runs on the next tick).
    pub fn spawn(&mut self, task: impl Task<C> + 'static) -> TaskId {
        self.spawner.spawn(task)
    }

    pub fn cancel(&mut self, id: TaskId) {
        self.spawner.cancel(id);
    }

    /// Live tasks, including ones spawned but not yet run.
    pub fn len(&self) -> usize {
        self.live.len() + self.spawner.pending()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` is still scheduled.
    pub fn is_live(&self, id: TaskId) -> bool {
        !self.spawner.cancelled.contains(&id)
            && self
                .live
                .iter()
                .chain(self.spawner.spawned.iter())
                .any(|e| e.id == id)
    }

    /// Completed scheduler passes.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Resume every live task once.
    pub fn tick(&mut self, ctx: &mut C) {
        self.admit_spawned();

        let snapshot = std::mem::take(&mut self.live);
        let mut survivors = Vec::with_capacity(snapshot.len());

        for mut entry in snapshot {
            if self.spawner.cancelled.remove(&entry.id) {
                continue;
            }
            match entry.task.step(ctx, &mut self.spawner) {
                Step::Pending => survivors.push(entry),
                Step::Done => {}
            }
        }

        // Cancellations aimed at tasks that already ran this tick.
        if !self.spawner.cancelled.is_empty() {
            let cancelled = &mut self.spawner.cancelled;
            survivors.retain(|e| !cancelled.remove(&e.id));

            // Only ids of tasks still waiting to be admitted stay pending.
            let spawned = &self.spawner.spawned;
            cancelled.retain(|id| spawned.iter().any(|e| e.id == *id));
        }

        self.live = survivors;
        self.ticks += 1;
    }

    fn admit_spawned(&mut self) {
        if self.spawner.spawned.is_empty() {
            return;
        }
        let cancelled = &mut self.spawner.cancelled;
        let spawned = std::mem::take(&mut self.spawner.spawned);
        self.live
            .extend(spawned.into_iter().filter(|e| !cancelled.remove(&e.id)));
    }
}

/// Tick counter used to hold a task for a fixed number of scheduler passes.
///
/// ```
/// use space_garbage_core::Delay;
///
/// let mut delay = Delay::default();
/// // Suspends for 3 ticks: the call that starts the wait counts as one.
/// assert!(delay.wait(3));
/// assert!(delay.poll());
/// assert!(delay.poll());
/// assert!(!delay.poll());
///
/// // A zero wait does not suspend at all.
/// assert!(!delay.wait(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delay {
    remaining: u32,
}

impl Delay {
    /// A delay already armed for `ticks` polls.
    pub fn ticks(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Start waiting `ticks` ticks and consume the first one.
    ///
    /// Returns `true` when the caller must yield now.
    pub fn wait(&mut self, ticks: u32) -> bool {
        self.remaining = ticks;
        self.poll()
    }

    /// Consume one tick. Returns `true` while the delay still holds.
    pub fn poll(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
