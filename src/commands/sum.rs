//! Daily activity summary command.

use crate::db::activity_log::ActivityLog;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, help = "Date to summarize (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
    #[arg(long, help = "Group by project instead of title")]
    projects: bool,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let date = sum_args.date.unwrap_or_else(|| Local::now().date_naive());
    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1);

    msg_print!(Message::SummaryHeader(date.format("%Y-%m-%d").to_string()), true);

    let db_path = Config::read()?.database_path()?;
    let mut log = ActivityLog::new(&db_path)?;

    if sum_args.projects {
        let summary = log.project_summary(start, end)?;
        if summary.is_empty() {
            msg_info!(Message::SummaryEmpty);
            return Ok(());
        }
        View::project_summary(&summary)?;
    } else {
        let summary = log.title_summary(start, end)?;
        if summary.is_empty() {
            msg_info!(Message::SummaryEmpty);
            return Ok(());
        }
        View::title_summary(&summary)?;
    }

    Ok(())
}
