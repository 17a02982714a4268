use crate::db::activity_log::ActivityLog;
use crate::db::projects::Project;
use crate::db::titles::WindowTitle;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn title_summary(summary: &[(String, i64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DURATION"]);
        for (title, seconds) in summary {
            table.add_row(row![title, format_duration(*seconds)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn project_summary(summary: &[(i64, String, i64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "DURATION"]);
        for (id, name, seconds) in summary {
            table.add_row(row![id, name, format_duration(*seconds)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for project in projects {
            table.add_row(row![project.id, project.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn titles(titles: &[WindowTitle], log: &mut ActivityLog) -> Result<()> {
        let intervals = log.intervals()?;
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PROJECT", "INTERVALS"]);
        for title in titles {
            let count = intervals.iter().filter(|i| i.title_id == title.id).count();
            table.add_row(row![title.id, title.title, title.project_id, count]);
        }
        table.printstd();

        Ok(())
    }
}

fn format_duration(seconds: i64) -> String {
    format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
}
