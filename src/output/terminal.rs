//! Terminal renderer: one line per year, request details for the first
//! pending job.

use colored::Colorize;

use crate::output::OutputRenderer;
use crate::plan::{JobStatus, Plan};

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, plan: &Plan) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            " {}  {}\n\n",
            "folder:".cyan(),
            plan.directory.display()
        ));

        for job in &plan.jobs {
            let (icon, status) = match job.status {
                JobStatus::Pending => ("↓".cyan().bold().to_string(), "pending".cyan().to_string()),
                JobStatus::Skipped => (
                    "✔".green().bold().to_string(),
                    "already downloaded".dimmed().to_string(),
                ),
            };
            let name = job
                .target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            output.push_str(&format!(" {icon} {} {}  {status}\n", job.year, name.bold()));
        }

        if let Some(first) = plan.pending().next() {
            output.push_str(&format!(
                "\n {} {}\n",
                "request:".cyan(),
                first.request.dataset.bold()
            ));
            for line in first.request.describe() {
                output.push_str(&format!("   {}\n", line.dimmed()));
            }
        }

        let pending = plan.pending().count();
        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} jobs: {} pending, {} skipped\n",
            plan.jobs.len().to_string().bold(),
            pending.to_string().cyan().bold(),
            plan.skipped().to_string().green(),
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Dataset, Source};
    use crate::plan::PlanSpec;

    fn plan(root: &std::path::Path) -> Plan {
        let spec = PlanSpec {
            source: Source::Reanalysis(Dataset::SingleLevels),
            variable: "total_precipitation".into(),
            country: "IT".parse().unwrap(),
            area: Area::GLOBAL,
            years: "2010-2011".parse().unwrap(),
        };
        Plan::build(root, &spec)
    }

    #[test]
    fn render_lists_years_and_first_request() {
        colored::control::set_override(false);
        let root = tempfile::tempdir().unwrap();
        let output = TerminalRenderer.render(&plan(root.path()));

        assert!(output.contains("total_precipitation_single-levels_IT_2010.nc"));
        assert!(output.contains("total_precipitation_single-levels_IT_2011.nc"));
        assert!(output.contains("reanalysis-era5-single-levels"));
        assert!(output.contains("product_type"));
        assert!(output.contains("2 jobs: 2 pending, 0 skipped"));
    }

    #[test]
    fn render_without_pending_jobs_omits_request() {
        colored::control::set_override(false);
        let root = tempfile::tempdir().unwrap();
        let first = plan(root.path());
        std::fs::create_dir_all(&first.directory).unwrap();
        for job in &first.jobs {
            std::fs::write(&job.target, b"x").unwrap();
        }

        let output = TerminalRenderer.render(&plan(root.path()));
        assert!(output.contains("already downloaded"));
        assert!(!output.contains("request:"));
        assert!(output.contains("0 pending, 2 skipped"));
    }
}
