//! Static snapshot export.
//!
//! Writes one pre-rendered HTML file per requested tab so the page can be
//! previewed or served without the WASM bundle.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::render_page;
use crate::state::{SiteState, Tab};

/// What to export and where.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Tabs to snapshot; empty means all four
    pub tabs: Vec<Tab>,
    /// Render with the mobile panel open
    pub menu_open: bool,
    pub config: SiteConfig,
}

impl ExportOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            tabs: Vec::new(),
            menu_open: false,
            config: SiteConfig::default(),
        }
    }
}

/// File name for a tab's snapshot. Home is the index page.
pub fn snapshot_file_name(tab: Tab) -> String {
    match tab {
        Tab::Home => "index.html".to_string(),
        other => format!("{}.html", other.slug()),
    }
}

/// Render and write every requested snapshot. Returns the written paths in
/// header order, without duplicates.
pub fn export_snapshots(options: &ExportOptions) -> SiteResult<Vec<PathBuf>> {
    create_dir(&options.out_dir)?;

    let tabs: Vec<Tab> = if options.tabs.is_empty() {
        Tab::ALL.to_vec()
    } else {
        Tab::ALL
            .into_iter()
            .filter(|tab| options.tabs.contains(tab))
            .collect()
    };

    let mut written = Vec::with_capacity(tabs.len());
    for tab in tabs {
        let state = SiteState {
            active_tab: tab,
            menu_open: options.menu_open,
        };
        let html = render_page(&state, &options.config);
        let path = options.out_dir.join(snapshot_file_name(tab));
        std::fs::write(&path, html).map_err(|source| SiteError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(tab = %tab, path = %path.display(), "wrote snapshot");
        written.push(path);
    }

    Ok(written)
}

fn create_dir(dir: &Path) -> SiteResult<()> {
    std::fs::create_dir_all(dir).map_err(|source| SiteError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_is_index() {
        assert_eq!(snapshot_file_name(Tab::Home), "index.html");
        assert_eq!(snapshot_file_name(Tab::Pricing), "pricing.html");
    }

    #[test]
    fn exports_all_tabs_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_snapshots(&ExportOptions::new(dir.path())).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["index.html", "features.html", "pricing.html", "about.html"]
        );

        let about = std::fs::read_to_string(dir.path().join("about.html")).unwrap();
        assert!(about.contains(r#"data-panel="about""#));
        assert!(!about.contains(r#"data-panel="home""#));
    }

    #[test]
    fn exports_selected_tabs_once_in_header_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = ExportOptions::new(dir.path().join("nested"));
        options.tabs = vec![Tab::About, Tab::Features, Tab::About];
        options.menu_open = true;

        let written = export_snapshots(&options).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("features.html"));

        let html = std::fs::read_to_string(&written[0]).unwrap();
        assert!(html.contains(r#"data-role="mobile-panel""#));
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = export_snapshots(&ExportOptions::new(&blocker)).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
