//! The concrete worker crew
//!
//! Five specialists mirroring the subtask categories. Each generates its
//! artifacts as plain strings and writes them under a shared output root;
//! the orchestration engine never touches the filesystem itself.

mod architect;
mod content;
mod designer;
mod developer;
mod seo;

pub use architect::ArchitectWorker;
pub use content::ContentWorker;
pub use designer::DesignerWorker;
pub use developer::DeveloperWorker;
pub use seo::SeoWorker;

use std::path::Path;

use super::worker::Worker;

/// Build the default crew in its fixed registration order
///
/// Registration order matters: it is the scoring tie-break.
pub fn default_crew(output_root: &Path) -> Vec<Box<dyn Worker>> {
    vec![
        Box::new(ArchitectWorker::new(output_root)),
        Box::new(DesignerWorker::new(output_root)),
        Box::new(DeveloperWorker::new(output_root)),
        Box::new(ContentWorker::new(output_root)),
        Box::new(SeoWorker::new(output_root)),
    ]
}
