mod changelog;
mod icons;

use clap::Subcommand;

use crate::config::DocsiteConfig;
use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the changelog timeline of the component documented at a page path
    Changelog(changelog::ChangelogArgs),
    /// Search icons and copy usage snippets
    #[command(subcommand)]
    Icons(icons::IconsCommand),
}

impl Commands {
    pub(crate) fn execute(self, config: &DocsiteConfig) -> Result<()> {
        match self {
            Self::Changelog(args) => changelog::run(args, config),
            Self::Icons(command) => icons::run(command, config),
        }
    }
}
