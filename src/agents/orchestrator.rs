//! The coordination engine
//!
//! The orchestrator owns the worker registry, the per-worker state table,
//! and the append-only message log. All mutation of this shared state
//! happens on the single coordination path between await points, so no
//! interior locking is needed; callers that share an orchestrator across
//! request handlers wrap it in one mutex.

use std::collections::{BTreeMap, HashMap};

use super::decompose::decompose;
use super::messages::Message;
use super::state::{WorkerReport, WorkerState};
use super::types::{SubtaskCategory, SubtaskResult, Task, WorkerStatus};
use super::worker::Worker;

/// Coordinates a fixed set of specialized workers over one subtask queue
/// at a time
pub struct Orchestrator {
    /// Registration order doubles as the score tie-break, so this stays a Vec
    workers: Vec<Box<dyn Worker>>,
    states: HashMap<String, WorkerState>,
    history: Vec<Message>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            workers: Vec::new(),
            states: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Register a worker and create its state record
    ///
    /// Workers live for the life of the orchestrator; there is no
    /// deregistration.
    pub fn register_worker(&mut self, worker: Box<dyn Worker>) {
        tracing::info!(worker = worker.name(), role = worker.role(), "registering worker");
        self.states
            .insert(worker.name().to_string(), WorkerState::default());
        self.workers.push(worker);
    }

    /// Run a task through decomposition, routing, and sequential execution
    ///
    /// Every queued subtask is processed exactly once, in order; a worker
    /// failure is recorded and the run continues. Subtasks whose category
    /// no worker can handle are skipped silently.
    pub async fn run_task(&mut self, task: Task, initiator: &str) -> Vec<SubtaskResult> {
        tracing::info!(kind = ?task.kind, description = %task.description, "task accepted");

        self.history.push(Message::task_assignment(initiator, &task));

        // Announcement pass: workers observe the task in registration
        // order, before any subtask is delegated.
        for i in 0..self.workers.len() {
            let name = self.workers[i].name().to_string();
            self.set_status(&name, WorkerStatus::Evaluating);
            if let Some(announcement) = self.workers[i].evaluate_task(&task).await {
                self.broadcast(announcement, &name, None);
            }
        }
        for state in self.states.values_mut() {
            state.status = WorkerStatus::Idle;
        }

        let queue = decompose(&task);
        tracing::info!(subtasks = queue.len(), "task decomposed");

        let mut results = Vec::with_capacity(queue.len());
        for subtask in queue {
            let Some(index) = self.select_worker(subtask.category) else {
                tracing::debug!(category = %subtask.category, "no eligible worker, skipping subtask");
                continue;
            };
            let name = self.workers[index].name().to_string();
            tracing::debug!(category = %subtask.category, worker = %name, "subtask routed");

            self.set_status(&name, WorkerStatus::Working);
            match self.workers[index].execute(&subtask).await {
                Ok(report) => {
                    results.push(SubtaskResult {
                        worker: name.clone(),
                        subtask: subtask.clone(),
                        outcome: report.summary,
                        success: true,
                    });
                    if let Some(state) = self.states.get_mut(&name) {
                        state.tasks_completed += 1;
                        state.status = WorkerStatus::Idle;
                    }
                    self.broadcast(
                        format!("{} completed: {}", name, subtask.category),
                        &name,
                        None,
                    );
                }
                Err(error) => {
                    tracing::warn!(worker = %name, category = %subtask.category, %error, "subtask failed");
                    results.push(SubtaskResult {
                        worker: name.clone(),
                        subtask: subtask.clone(),
                        outcome: error.to_string(),
                        success: false,
                    });
                    if let Some(state) = self.states.get_mut(&name) {
                        state.errors.push(error.to_string());
                        state.status = WorkerStatus::Idle;
                    }
                }
            }
        }

        tracing::info!(
            completed = results.iter().filter(|r| r.success).count(),
            failed = results.iter().filter(|r| !r.success).count(),
            "run finished"
        );
        results
    }

    /// Append a message to the log, then deliver it to every target
    /// worker's inbox except the sender
    ///
    /// The log append happens before any delivery; deliveries follow
    /// registration order. No targets means fan-out to all workers.
    pub fn broadcast(
        &mut self,
        body: impl Into<String>,
        sender: &str,
        targets: Option<&[String]>,
    ) -> Message {
        let message = Message::broadcast(sender, body);
        self.history.push(message.clone());

        for i in 0..self.workers.len() {
            let name = self.workers[i].name().to_string();
            if name == sender {
                continue;
            }
            if let Some(targets) = targets {
                if !targets.iter().any(|t| *t == name) {
                    continue;
                }
            }
            self.workers[i].receive_message(message.clone());
            if let Some(state) = self.states.get_mut(&name) {
                state.last_message = Some(message.clone());
            }
        }

        message
    }

    /// Pick the first registered worker holding the maximum score for the
    /// category, or `None` when the best score is 0
    fn select_worker(&self, category: SubtaskCategory) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;
        for (index, worker) in self.workers.iter().enumerate() {
            let score = worker.can_handle(category);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Read-only snapshot joining each worker's state with its capabilities
    pub fn status(&self) -> BTreeMap<String, WorkerReport> {
        self.workers
            .iter()
            .filter_map(|worker| {
                let state = self.states.get(worker.name())?;
                Some((
                    worker.name().to_string(),
                    WorkerReport::new(state, worker.capabilities().to_vec()),
                ))
            })
            .collect()
    }

    /// The full communication log, oldest first
    pub fn message_history(&self) -> &[Message] {
        &self.history
    }

    /// Truncate the communication log
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn set_status(&mut self, name: &str, status: WorkerStatus) {
        if let Some(state) = self.states.get_mut(name) {
            state.status = status;
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
