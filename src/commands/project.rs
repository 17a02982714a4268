//! Project management command.

use crate::db::projects::Projects;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    #[command(about = "List projects")]
    List,
    #[command(about = "Create a project")]
    Create {
        name: String,
    },
    #[command(about = "Rename a project")]
    Rename {
        id: i64,
        name: String,
    },
    #[command(about = "Delete a project; titles move to Misc unless --cascade")]
    Delete {
        id: i64,
        /// Also delete the project's titles and all their intervals
        #[arg(long)]
        cascade: bool,
    },
}

pub fn cmd(project_args: ProjectArgs) -> Result<()> {
    let db_path = Config::read()?.database_path()?;
    let mut projects = Projects::new(&db_path)?;

    match project_args.command {
        ProjectCommand::List => {
            View::projects(&projects.list()?)?;
        }
        ProjectCommand::Create { name } => {
            let id = projects.create(&name)?;
            msg_success!(Message::ProjectCreated(id));
        }
        ProjectCommand::Rename { id, name } => {
            projects.rename(id, &name)?;
            msg_success!(Message::ProjectRenamed);
        }
        ProjectCommand::Delete { id, cascade } => {
            projects.delete(id, cascade)?;
            msg_success!(Message::ProjectDeleted);
        }
    }

    Ok(())
}
