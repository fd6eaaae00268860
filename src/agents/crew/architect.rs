use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::agents::errors::AgentResult;
use crate::agents::messages::Message;
use crate::agents::types::Subtask;
use crate::agents::worker::{write_document, ExecutionReport, Worker, WorkerProfile};

/// Plans site structure and produces the architecture document
pub struct ArchitectWorker {
    profile: WorkerProfile,
    output_root: PathBuf,
}

impl ArchitectWorker {
    pub fn new(output_root: &Path) -> Self {
        Self {
            profile: WorkerProfile::new(
                "Architect",
                "Solutions Architect & Technical Planner",
                &["architecture", "planning", "site-structure", "strategy"],
            ),
            output_root: output_root.to_path_buf(),
        }
    }

    fn architecture_document(&self, subtask: &Subtask) -> String {
        format!(
            "# Website Architecture\n\n\
             _Scope: {}_\n\n\
             ## Site Map\n\n\
             - Home\n\
             - Services\n\
             - About\n\
             - Case Studies\n\
             - Contact\n\n\
             ## Page Structure\n\n\
             Each page follows a shared shell: header with primary \
             navigation, main content region, footer with contact details \
             and legal links.\n\n\
             ## Technical Decisions\n\n\
             - Static pages with progressive enhancement, no client-side framework\n\
             - Single shared stylesheet plus per-page overrides\n\
             - Forms submit to the API layer; no inline handlers\n",
            subtask.description
        )
    }
}

#[async_trait]
impl Worker for ArchitectWorker {
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
        let document = self.architecture_document(subtask);
        write_document(&self.output_root, "docs/architecture.md", &document).await?;

        Ok(ExecutionReport::new(
            "Architecture plan completed! Site map and page structure documented.",
            vec!["docs/architecture.md".to_string()],
        ))
    }

    fn receive_message(&mut self, message: Message) {
        self.profile.inbox.push(message);
    }
}
