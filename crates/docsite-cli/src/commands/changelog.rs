use std::path::PathBuf;

use clap::Args;
use docsite_changelog::build_timeline;
use docsite_core::Language;
use docsite_loader::{
    ChangelogLoader, ChangelogSource, FileSystemChangelogSource, HttpChangelogSource,
};
use docsite_version::DeprecationTable;
use tracing::debug;

use crate::config::DocsiteConfig;
use crate::error::{CliError, Result};
use crate::output::{PlainTextTimelineFormatter, TimelineFormatter};

#[derive(Args)]
pub(crate) struct ChangelogArgs {
    /// Documentation page path, e.g. /components/date-picker/
    pathname: String,

    /// Dataset language (default: from the page path, then docsite.toml)
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Directory holding components-changelog-<lang>.json
    #[arg(long, conflicts_with = "base_url")]
    data_dir: Option<PathBuf>,

    /// URL prefix serving components-changelog-<lang>.json
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file mapping version ranges to bug reports
    #[arg(long)]
    deprecations: Option<PathBuf>,

    /// Print the timeline as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(args: ChangelogArgs, config: &DocsiteConfig) -> Result<()> {
    let settings = &config.changelog;

    let language = args.lang.unwrap_or_else(|| {
        match Language::from_pathname(&args.pathname) {
            Language::Cn => Language::Cn,
            Language::En => settings.default_language,
        }
    });

    let source = select_source(&args, config)?;

    let deprecations = match args
        .deprecations
        .as_ref()
        .or(settings.deprecations.as_ref())
    {
        Some(path) => DeprecationTable::from_path(path)?,
        None => DeprecationTable::empty(),
    };
    debug!(rules = deprecations.len(), %language, "resolved changelog settings");

    let mut loader = ChangelogLoader::new(source);
    let Some(changelog) = loader.load(&args.pathname, language) else {
        println!("No changelog available for '{}'.", args.pathname);
        return Ok(());
    };

    let timeline = build_timeline(&changelog.key, &changelog.entries, &deprecations);

    if args.json {
        let json = serde_json::to_string_pretty(&timeline).map_err(CliError::Serialize)?;
        println!("{json}");
    } else {
        print!("{}", PlainTextTimelineFormatter.format_timeline(&timeline));
    }

    Ok(())
}

/// Flags win over the config file; a base URL wins over a data directory.
fn select_source(
    args: &ChangelogArgs,
    config: &DocsiteConfig,
) -> Result<Box<dyn ChangelogSource>> {
    let settings = &config.changelog;

    if let Some(dir) = &args.data_dir {
        return Ok(Box::new(FileSystemChangelogSource::new(dir)));
    }
    if let Some(url) = args.base_url.as_ref().or(settings.base_url.as_ref()) {
        return Ok(Box::new(HttpChangelogSource::new(url.as_str())?));
    }
    if let Some(dir) = &settings.data_dir {
        return Ok(Box::new(FileSystemChangelogSource::new(dir)));
    }

    Err(CliError::NoDataSource)
}
