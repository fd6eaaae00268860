use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::agents::errors::AgentResult;
use crate::agents::messages::Message;
use crate::agents::types::Subtask;
use crate::agents::worker::{write_document, ExecutionReport, Worker, WorkerProfile};

/// Produces the SEO report, sitemap, and robots.txt
pub struct SeoWorker {
    profile: WorkerProfile,
    output_root: PathBuf,
    site_url: String,
}

impl SeoWorker {
    pub fn new(output_root: &Path) -> Self {
        Self {
            profile: WorkerProfile::new(
                "SEO Specialist",
                "SEO & Digital Marketing Specialist",
                &["seo", "optimization", "sem", "analytics", "search-marketing"],
            ),
            output_root: output_root.to_path_buf(),
            site_url: "https://www.example.com".to_string(),
        }
    }

    fn seo_report(&self, subtask: &Subtask) -> String {
        format!(
            "# SEO Report\n\n\
             _Scope: {}_\n\n\
             ## On-Page Checklist\n\n\
             - Unique title and meta description per page\n\
             - One h1 per page, heading levels in order\n\
             - Descriptive alt text on all imagery\n\
             - Canonical link on every page\n\n\
             ## Structured Data\n\n\
             Organization and LocalBusiness JSON-LD on the home page; \
             BreadcrumbList on inner pages.\n\n\
             ## Off-Page\n\n\
             Submit the sitemap to search consoles and keep business \
             listings consistent (name, address, phone) across directories.\n",
            subtask.description
        )
    }

    fn sitemap(&self) -> String {
        let pages = ["", "services", "about", "case-studies", "contact"];
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for page in pages {
            xml.push_str(&format!(
                "  <url><loc>{}/{}</loc></url>\n",
                self.site_url, page
            ));
        }
        xml.push_str("</urlset>\n");
        xml
    }

    fn robots(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            self.site_url
        )
    }
}

#[async_trait]
impl Worker for SeoWorker {
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
        write_document(&self.output_root, "docs/seo-report.md", &self.seo_report(subtask)).await?;
        write_document(&self.output_root, "sitemap.xml", &self.sitemap()).await?;
        write_document(&self.output_root, "robots.txt", &self.robots()).await?;

        Ok(ExecutionReport::new(
            "SEO optimization completed! Report, sitemap, and robots.txt generated.",
            vec![
                "docs/seo-report.md".to_string(),
                "sitemap.xml".to_string(),
                "robots.txt".to_string(),
            ],
        ))
    }

    fn receive_message(&mut self, message: Message) {
        self.profile.inbox.push(message);
    }
}
