//! Window title management command.

use crate::db::activity_log::ActivityLog;
use crate::db::titles::Titles;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TitleArgs {
    #[command(subcommand)]
    command: TitleCommand,
}

#[derive(Debug, Subcommand)]
enum TitleCommand {
    #[command(about = "List titles with their projects and interval counts")]
    List,
    #[command(about = "Assign a title to a project")]
    Assign {
        title_id: u32,
        project_id: i64,
    },
    #[command(about = "Delete a title and all its intervals")]
    Delete {
        title_id: u32,
    },
    #[command(about = "Merge titles into the first given id")]
    Merge {
        /// Target id followed by one or more source ids
        #[arg(num_args = 2..)]
        ids: Vec<u32>,
    },
}

pub fn cmd(title_args: TitleArgs) -> Result<()> {
    let db_path = Config::read()?.database_path()?;
    let mut titles = Titles::new(&db_path)?;

    match title_args.command {
        TitleCommand::List => {
            let mut log = ActivityLog::new(&db_path)?;
            View::titles(&titles.list()?, &mut log)?;
        }
        TitleCommand::Assign { title_id, project_id } => {
            titles.assign_project(title_id, project_id)?;
            msg_success!(Message::TitleAssigned);
        }
        TitleCommand::Delete { title_id } => {
            titles.delete(title_id)?;
            msg_success!(Message::TitleDeleted);
        }
        TitleCommand::Merge { ids } => {
            let merged = titles.merge(&ids)?;
            msg_success!(Message::TitlesMerged(merged));
        }
    }

    Ok(())
}
