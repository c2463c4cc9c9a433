use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use studiolink_core::{
    AdhocForm, BaselineEnvironment, LaunchOptions, WorkspaceSettings, render_launch_page,
};
use studiolink_manifest::Workspace;

use super::args::{ConfigArg, DEFAULT_CONFIG};
use crate::{
    ops,
    reports::{LaunchReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct LaunchCommand {
    /// Directory to open (defaults to [workspace] files)
    dir: Option<PathBuf>,

    /// Write the launch page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the form fields instead of the page
    #[arg(long)]
    dry_run: bool,

    /// Provisioning endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Open Studio in the current tab instead of a new one
    #[arg(long)]
    same_tab: bool,

    /// Baseline environment: flutter, stitch, html, react, angular, python
    #[arg(long)]
    baseline: Option<BaselineEnvironment>,

    /// Source of the request, sent with the workspace settings
    #[arg(long)]
    referrer: Option<String>,

    /// File or directory name to skip (repeatable)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    #[command(flatten)]
    config: ConfigArg,
}

impl LaunchCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.config.load();
        let workspace = manifest
            .as_ref()
            .and_then(|m| m.manifest().workspace.as_ref());

        let dir = match (&self.dir, &manifest, workspace) {
            (Some(dir), _, _) => dir.clone(),
            (None, Some(file), Some(ws)) => file.resolve(&ws.files),
            _ => bail!(
                "no directory given; pass one or set [workspace] files in {DEFAULT_CONFIG}"
            ),
        };

        let mut exclude = workspace.map(|ws| ws.exclude.clone()).unwrap_or_default();
        exclude.extend(self.exclude.iter().cloned());

        let mut content = ops::collect_files(&dir, &exclude)?;
        content.settings = self.settings(workspace);
        let options = self.options(workspace);

        if self.dry_run {
            let form = AdhocForm::build(&content, &options)?;
            LaunchReport::new(&dir, &form).render(&mut TerminalOutput::new());
            return Ok(());
        }

        let page = render_launch_page(&content, &options)?;
        match &self.output {
            Some(path) => {
                fs::write(path, page)
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                println!(
                    "Wrote {} ({} files); open it in a browser to launch the workspace",
                    path.display(),
                    content.files.len()
                );
            }
            None => print!("{page}"),
        }

        Ok(())
    }

    /// `[workspace.settings]` with the flags laid over it.
    fn settings(&self, workspace: Option<&Workspace>) -> Option<WorkspaceSettings> {
        let mut settings = workspace
            .and_then(|ws| ws.settings.clone())
            .unwrap_or_default();
        if let Some(baseline) = self.baseline {
            settings.baseline_environment = Some(baseline);
        }
        if let Some(referrer) = &self.referrer {
            settings.referrer = Some(referrer.clone());
        }

        (settings != WorkspaceSettings::default()).then_some(settings)
    }

    fn options(&self, workspace: Option<&Workspace>) -> LaunchOptions {
        let mut options = workspace
            .map(Workspace::launch_options)
            .unwrap_or_default();
        if let Some(endpoint) = &self.endpoint {
            options.url = Some(endpoint.clone());
        }
        if self.same_tab {
            options.new_window = false;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> LaunchCommand {
        LaunchCommand {
            dir: None,
            output: None,
            dry_run: false,
            endpoint: None,
            same_tab: false,
            baseline: None,
            referrer: None,
            exclude: Vec::new(),
            config: ConfigArg { config: None },
        }
    }

    fn workspace() -> Workspace {
        Workspace {
            files: PathBuf::from("site"),
            endpoint: Some("https://studio.example.dev/run.api".to_string()),
            new_window: true,
            exclude: Vec::new(),
            settings: Some(WorkspaceSettings::default().with_referrer("docs")),
        }
    }

    #[test]
    fn test_no_settings_when_nothing_set() {
        assert_eq!(command().settings(None), None);
    }

    #[test]
    fn test_flags_override_settings() {
        let cmd = LaunchCommand {
            baseline: Some(BaselineEnvironment::React),
            referrer: Some("cli".to_string()),
            ..command()
        };
        let settings = cmd.settings(Some(&workspace())).unwrap();
        assert_eq!(settings.baseline_environment, Some(BaselineEnvironment::React));
        assert_eq!(settings.referrer.as_deref(), Some("cli"));
    }

    #[test]
    fn test_manifest_settings_kept() {
        let settings = command().settings(Some(&workspace())).unwrap();
        assert_eq!(settings.referrer.as_deref(), Some("docs"));
        assert_eq!(settings.baseline_environment, None);
    }

    #[test]
    fn test_options() {
        assert_eq!(command().options(None), LaunchOptions::default());

        let options = command().options(Some(&workspace()));
        assert_eq!(options.url.as_deref(), Some("https://studio.example.dev/run.api"));
        assert!(options.new_window);

        let cmd = LaunchCommand {
            endpoint: Some("http://localhost:8080/run.api".to_string()),
            same_tab: true,
            ..command()
        };
        let options = cmd.options(Some(&workspace()));
        assert_eq!(options.url.as_deref(), Some("http://localhost:8080/run.api"));
        assert!(!options.new_window);
    }
}
