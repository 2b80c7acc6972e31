//! Main thread task queue
//!
//! Allows background threads to queue work to execute on the main game thread.
//! Tasks are processed once per frame by whoever owns the [`TaskQueue`].

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::host::Host;

/// A task to execute on the main thread
///
/// Tasks receive the host when they run, so they never hold on to
/// engine state across frames.
pub type Task = Box<dyn FnOnce(&dyn Host) + Send + 'static>;

/// Capacity of the task queue per frame
pub const QUEUE_CAPACITY: usize = 1024;

/// Error returned when a task cannot be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task queue is full")]
    Full,

    #[error("task queue is disconnected")]
    Disconnected,
}

/// Task queue channels
pub struct TaskQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

impl TaskQueue {
    /// Create a queue holding up to [`QUEUE_CAPACITY`] pending tasks
    pub fn new() -> Self {
        Self::with_capacity(QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Get a sender that can be moved to other threads
    pub fn sender(&self) -> TaskSender {
        TaskSender {
            sender: self.sender.clone(),
        }
    }

    /// Process the queued tasks
    ///
    /// Only tasks already queued when processing starts run now. Tasks
    /// queued by a running task wait for the next frame.
    /// Returns the number of tasks processed.
    #[tracing::instrument(skip_all)]
    pub fn process(&self, host: &dyn Host) -> usize {
        let pending = self.receiver.len();
        let mut count = 0;

        while count < pending {
            let Ok(task) = self.receiver.try_recv() else {
                break;
            };
            task(host);
            count += 1;
        }

        count
    }

    /// Check how many tasks are currently queued
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle for queueing tasks from any thread
#[derive(Clone)]
pub struct TaskSender {
    sender: Sender<Task>,
}

impl TaskSender {
    /// Queue a task to execute on the next game frame
    ///
    /// This is safe to call from any thread. A full queue drops the task.
    pub fn queue(&self, task: Task) -> Result<(), TaskError> {
        match self.sender.try_send(task) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Task queue full, dropping task");
                Err(TaskError::Full)
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Task queue disconnected");
                Err(TaskError::Disconnected)
            }
        }
    }

    /// Queue a closure to execute on the next game frame
    pub fn queue_fn<F>(&self, task: F) -> Result<(), TaskError>
    where
        F: FnOnce(&dyn Host) + Send + 'static,
    {
        self.queue(Box::new(task))
    }

    /// Queue a task, blocking if the queue is full
    ///
    /// # Warning
    /// Only call from background threads, never from the main thread
    /// (would deadlock if queue is full and waiting for frame to process)
    pub fn queue_blocking<F>(&self, task: F) -> Result<(), TaskError>
    where
        F: FnOnce(&dyn Host) + Send + 'static,
    {
        self.sender.send(Box::new(task)).map_err(|e| {
            tracing::error!("Failed to queue task (blocking): {}", e);
            TaskError::Disconnected
        })
    }
}

impl std::fmt::Debug for TaskSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskSender")
            .field("queued", &self.sender.len())
            .finish()
    }
}
