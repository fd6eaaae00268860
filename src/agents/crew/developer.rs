use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::agents::errors::AgentResult;
use crate::agents::messages::Message;
use crate::agents::types::Subtask;
use crate::agents::worker::{write_document, ExecutionReport, Worker, WorkerProfile};

/// Implements site features and documents the implementation
pub struct DeveloperWorker {
    profile: WorkerProfile,
    output_root: PathBuf,
}

impl DeveloperWorker {
    pub fn new(output_root: &Path) -> Self {
        Self {
            profile: WorkerProfile::new(
                "Developer",
                "Full-Stack Web Developer",
                &["development", "javascript", "html", "css", "accessibility"],
            ),
            output_root: output_root.to_path_buf(),
        }
    }

    fn implementation_notes(&self, subtask: &Subtask) -> String {
        format!(
            "# Implementation Notes\n\n\
             _Scope: {}_\n\n\
             ## Features Implemented\n\n\
             - Responsive navigation with a no-JS fallback\n\
             - Contact form with client-side validation and server-side checks\n\
             - Lazy-loaded imagery below the fold\n\n\
             ## Conventions\n\n\
             Semantic HTML first; ARIA only where native elements fall \
             short. All interactive elements reachable by keyboard.\n\n\
             ## Follow-ups\n\n\
             - Wire the contact form to the mail relay once credentials land\n",
            subtask.description
        )
    }
}

#[async_trait]
impl Worker for DeveloperWorker {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn role(&self) -> &str {
        &self.profile.role
    }

    fn capabilities(&self) -> &[String] {
        &self.profile.capabilities
    }

    async fn execute(&mut self, subtask: &Subtask) -> AgentResult<ExecutionReport> {
        let notes = self.implementation_notes(subtask);
        write_document(&self.output_root, "docs/implementation-notes.md", &notes).await?;

        Ok(ExecutionReport::new(
            "Implementation completed! Features are in and documented.",
            vec!["docs/implementation-notes.md".to_string()],
        ))
    }

    fn receive_message(&mut self, message: Message) {
        self.profile.inbox.push(message);
    }
}
