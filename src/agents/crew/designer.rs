use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::agents::errors::AgentResult;
use crate::agents::messages::Message;
use crate::agents::types::Subtask;
use crate::agents::worker::{write_document, ExecutionReport, Worker, WorkerProfile};

/// Produces the design system document and CSS enhancements
pub struct DesignerWorker {
    profile: WorkerProfile,
    output_root: PathBuf,
}

impl DesignerWorker {
    pub fn new(output_root: &Path) -> Self {
        Self {
            profile: WorkerProfile::new(
                "Designer",
                "UI/UX Designer",
                &["design", "ui", "ux", "visual-design", "user-experience"],
            ),
            output_root: output_root.to_path_buf(),
        }
    }

    fn design_system_document(&self, subtask: &Subtask) -> String {
        format!(
            "# Design System\n\n\
             _Scope: {}_\n\n\
             ## Color Palette\n\n\
             | Token | Value | Usage |\n\
             |-------|-------|-------|\n\
             | --color-primary | #1f6feb | Links, primary actions |\n\
             | --color-surface | #ffffff | Page background |\n\
             | --color-ink | #1c2128 | Body text |\n\
             | --color-accent | #2da44e | Success states, highlights |\n\n\
             ## Typography\n\n\
             System font stack; 1.125rem base size, 1.6 line height. \
             Headings step down a 1.25 modular scale.\n\n\
             ## Spacing\n\n\
             4px base unit. Sections use 64px vertical rhythm on desktop, \
             40px on mobile.\n",
            subtask.description
        )
    }

    fn css_enhancements(&self) -> String {
        ":root {\n\
         \x20 --color-primary: #1f6feb;\n\
         \x20 --color-surface: #ffffff;\n\
         \x20 --color-ink: #1c2128;\n\
         \x20 --color-accent: #2da44e;\n\
         \x20 --space-unit: 4px;\n\
         }\n\n\
         body {\n\
         \x20 color: var(--color-ink);\n\
         \x20 background: var(--color-surface);\n\
         \x20 line-height: 1.6;\n\
         }\n\n\
         a {\n\
         \x20 color: var(--color-primary);\n\
         }\n"
        .to_string()
    }
}

#[async_trait]
impl Worker for DesignerWorker {
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
        let document = self.design_system_document(subtask);
        write_document(&self.output_root, "docs/design-system.md", &document).await?;
        write_document(
            &self.output_root,
            "css/design-enhancements.css",
            &self.css_enhancements(),
        )
        .await?;

        Ok(ExecutionReport::new(
            "Design system completed! Design guide and CSS enhancements are in place.",
            vec![
                "docs/design-system.md".to_string(),
                "css/design-enhancements.css".to_string(),
            ],
        ))
    }

    fn receive_message(&mut self, message: Message) {
        self.profile.inbox.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::types::SubtaskCategory;

    #[tokio::test]
    async fn writes_design_guide_and_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = DesignerWorker::new(dir.path());

        let report = worker
            .execute(&Subtask {
                category: SubtaskCategory::Design,
                description: "Create visual design and UI/UX".to_string(),
                priority: 2,
            })
            .await
            .unwrap();

        assert_eq!(report.documents.len(), 2);
        let css =
            std::fs::read_to_string(dir.path().join("css/design-enhancements.css")).unwrap();
        assert!(css.contains("--color-primary"));
    }
}
