use std::path::PathBuf;

use clap::{Args, Subcommand};
use docsite_icons::{IconCatalog, IconTheme, copy_icon, import_snippet, usage_snippet};

use crate::clipboard::TerminalClipboard;
use crate::config::DocsiteConfig;
use crate::error::{CliError, Result};
use crate::output::{IconsFormatter, PlainTextIconsFormatter};

#[derive(Subcommand)]
pub(crate) enum IconsCommand {
    /// List icons whose name contains QUERY, grouped by category
    Search(SearchArgs),
    /// Print the usage snippet of an icon and copy it to the clipboard
    Copy(CopyArgs),
}

#[derive(Args)]
pub(crate) struct CatalogArgs {
    /// Icon catalog JSON file (default: [icons] catalog in docsite.toml)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Case-insensitive substring of the icon name; empty lists everything
    #[arg(default_value = "")]
    query: String,

    /// Icon theme to list
    #[arg(long, value_enum)]
    theme: Option<IconTheme>,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Args)]
pub(crate) struct CopyArgs {
    /// Component name such as SmileOutlined (case-insensitive)
    component: String,

    /// Also print the import statement
    #[arg(long)]
    import: bool,

    #[command(flatten)]
    catalog: CatalogArgs,
}

pub(crate) fn run(command: IconsCommand, config: &DocsiteConfig) -> Result<()> {
    match command {
        IconsCommand::Search(args) => run_search(args, config),
        IconsCommand::Copy(args) => run_copy(args, config),
    }
}

fn load_catalog(args: &CatalogArgs, config: &DocsiteConfig) -> Result<IconCatalog> {
    let path = args
        .catalog
        .as_ref()
        .or(config.icons.catalog.as_ref())
        .ok_or(CliError::NoCatalog)?;

    Ok(IconCatalog::from_path(path)?)
}

fn run_search(args: SearchArgs, config: &DocsiteConfig) -> Result<()> {
    let catalog = load_catalog(&args.catalog, config)?;
    let theme = args.theme.unwrap_or(config.icons.default_theme);

    let matches = catalog.search(&args.query, theme);

    if args.json {
        let json = serde_json::to_string_pretty(&matches).map_err(CliError::Serialize)?;
        println!("{json}");
    } else {
        print!("{}", PlainTextIconsFormatter.format_matches(&matches));
    }

    Ok(())
}

fn run_copy(args: CopyArgs, config: &DocsiteConfig) -> Result<()> {
    let catalog = load_catalog(&args.catalog, config)?;
    let component = catalog
        .find_component(&args.component)
        .ok_or_else(|| CliError::UnknownIcon(args.component.clone()))?;

    if args.import {
        println!("{}", import_snippet(&component));
    }
    println!("{}", usage_snippet(&component));

    let notice = copy_icon(&TerminalClipboard, &component);
    if notice.is_success() {
        println!("{notice}");
    } else {
        eprintln!("{notice}");
    }

    Ok(())
}
