use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::layout::Layout;
use crate::scaffold::{self, ScaffoldOptions};

const SUCCESS_MESSAGE: &str = "Directory structure created successfully!";

#[derive(Debug, Clone)]
struct CliContext {
    chdir: Option<PathBuf>,
    dry_run: bool,
}

impl From<&Cli> for CliContext {
    fn from(cli: &Cli) -> Self {
        Self {
            chdir: cli.chdir.clone(),
            dry_run: cli.dry_run,
        }
    }
}

impl CliContext {
    fn root(&self) -> Result<Utf8PathBuf> {
        let root = match &self.chdir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("determining current directory")?,
        };
        Utf8PathBuf::from_path_buf(root)
            .map_err(|path| anyhow!("root path {} is not valid UTF-8", path.display()))
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from(&cli);
    let layout = Layout::unity()?;

    match cli.command {
        Some(Command::List) => handle_list(&layout),
        None => handle_scaffold(&ctx, &layout),
    }
}

fn handle_list(layout: &Layout) -> Result<()> {
    for directory in &layout.directories {
        println!("{}/{}", layout.base, directory);
    }
    Ok(())
}

fn handle_scaffold(ctx: &CliContext, layout: &Layout) -> Result<()> {
    let root = ctx.root()?;
    debug!(root = %root, dry_run = ctx.dry_run, "resolved scaffold root");

    let options = ScaffoldOptions {
        dry_run: ctx.dry_run,
    };
    let report = scaffold::run(&root, layout, &options)?;

    if ctx.dry_run {
        if report.is_noop() {
            println!("[dry-run] nothing to create under {}", root.join(&layout.base));
        } else {
            println!("[dry-run] pending under {}:", root);
            print!("{}", report.format_plan(&layout.base, &layout.marker));
        }
        return Ok(());
    }

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    #[test]
    fn chdir_sets_root() {
        let (_guard, root) = temp_root();
        let cli = Cli::try_parse_from(["setup-project", "-C", root.as_str()]).unwrap();
        let ctx = CliContext::from(&cli);
        assert_eq!(ctx.root().unwrap(), root);
    }

    #[test]
    fn default_root_is_current_dir() {
        let cli = Cli::try_parse_from(["setup-project"]).unwrap();
        let ctx = CliContext::from(&cli);
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(ctx.root().unwrap().as_std_path(), cwd.as_path());
    }

    #[test]
    fn run_scaffolds_chdir_target() {
        let (_guard, root) = temp_root();
        let cli = Cli::try_parse_from(["setup-project", "--chdir", root.as_str()]).unwrap();
        run(cli).unwrap();
        assert!(root.join("Assets/StreamingAssets/dictionary/.gitkeep").is_file());
    }

    #[test]
    fn dry_run_leaves_target_untouched() {
        let (_guard, root) = temp_root();
        let cli =
            Cli::try_parse_from(["setup-project", "--chdir", root.as_str(), "--dry-run"]).unwrap();
        run(cli).unwrap();
        assert!(!root.join("Assets").exists());
    }
}
