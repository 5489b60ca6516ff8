//! JSON output renderer.
//!
//! Outputs `{"directory": ..., "jobs": [...], "summary": {...}}` so the
//! plan can be fed to another client.

use crate::output::OutputRenderer;
use crate::plan::Plan;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, plan: &Plan) -> String {
        let pending = plan.pending().count();
        let output = serde_json::json!({
            "directory": plan.directory,
            "jobs": plan.jobs,
            "summary": {
                "total": plan.jobs.len(),
                "pending": pending,
                "skipped": plan.skipped(),
            },
        });

        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Dataset, Source};
    use crate::plan::PlanSpec;

    #[test]
    fn render_json() {
        let root = tempfile::tempdir().unwrap();
        let spec = PlanSpec {
            source: Source::Reanalysis(Dataset::Land),
            variable: "2m_temperature".into(),
            country: "PT".parse().unwrap(),
            area: Area::GLOBAL,
            years: "2001-2002".parse().unwrap(),
        };
        let plan = Plan::build(root.path(), &spec);

        let output = JsonRenderer.render(&plan);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["jobs"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["jobs"][0]["status"], "pending");
        assert_eq!(parsed["jobs"][0]["request"]["dataset"], "reanalysis-era5-land");
        assert_eq!(parsed["jobs"][1]["request"]["body"]["year"][0], "2002");
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["skipped"], 0);
    }
}
