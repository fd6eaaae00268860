use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::agents::errors::AgentResult;
use crate::agents::messages::Message;
use crate::agents::types::Subtask;
use crate::agents::worker::{write_document, ExecutionReport, Worker, WorkerProfile};

/// Develops the content strategy and page copy outline
///
/// Role deliberately avoids the word "strategist", which is an
/// architecture keyword and would make this worker eligible for
/// architecture subtasks.
pub struct ContentWorker {
    profile: WorkerProfile,
    output_root: PathBuf,
}

impl ContentWorker {
    pub fn new(output_root: &Path) -> Self {
        Self {
            profile: WorkerProfile::new(
                "Content Lead",
                "Content & Copywriting Lead",
                &["content", "copywriting", "messaging", "branding"],
            ),
            output_root: output_root.to_path_buf(),
        }
    }

    fn content_strategy(&self, subtask: &Subtask) -> String {
        format!(
            "# Content Strategy\n\n\
             _Scope: {}_\n\n\
             ## Voice & Tone\n\n\
             Plain, confident, free of filler. Short sentences. Every page \
             answers \"what do I get\" within the first paragraph.\n\n\
             ## Page Copy Outline\n\n\
             - **Home**: value proposition, three proof points, single call to action\n\
             - **Services**: one section per offering, each with outcome-first headline\n\
             - **About**: team story in under 200 words\n\
             - **Contact**: low-friction form, response-time promise\n\n\
             ## Messaging Pillars\n\n\
             1. Ship fast without cutting corners\n\
             2. Fixed, transparent pricing\n\
             3. Support after launch\n",
            subtask.description
        )
    }
}

#[async_trait]
impl Worker for ContentWorker {
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
        let strategy = self.content_strategy(subtask);
        write_document(&self.output_root, "docs/content-strategy.md", &strategy).await?;

        Ok(ExecutionReport::new(
            "Content strategy completed! Copy outline and messaging pillars documented.",
            vec!["docs/content-strategy.md".to_string()],
        ))
    }

    fn receive_message(&mut self, message: Message) {
        self.profile.inbox.push(message);
    }
}
