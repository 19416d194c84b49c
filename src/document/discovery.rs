use anyhow::{Context, Result};
use dirs::home_dir;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::model::Document;

pub struct PageDiscovery {
    glob_set: GlobSet,
}

impl PageDiscovery {
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob =
                Glob::new(&pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
            builder.add(glob);
        }

        let glob_set = builder.build().context("Failed to build glob set")?;

        Ok(Self { glob_set })
    }

    pub fn from_pattern(pattern: &str) -> Result<Self> {
        Self::new(vec![pattern.to_string()])
    }

    /// Matching files under `base_path`, sorted by path so output is stable.
    pub fn discover_pages(&self, base_path: &Path) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = WalkDir::new(base_path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && self.glob_set.is_match(e.path()))
            .map(|e| e.into_path())
            .collect();

        files.sort();
        Ok(files)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Resolve a CLI path argument into HTML pages.
///
/// A file is returned as is, a directory is searched recursively for
/// `*.html`/`*.htm`, anything else is treated as a glob.
pub fn discover_pages(pattern: &str) -> Result<Vec<PathBuf>> {
    let expanded_path = expand_tilde(pattern);

    if expanded_path.is_file() {
        return Ok(vec![expanded_path]);
    }

    if expanded_path.is_dir() {
        let base = expanded_path.display().to_string();
        let base = base.trim_end_matches('/');
        let discovery = PageDiscovery::new(vec![
            format!("{base}/**/*.html"),
            format!("{base}/**/*.htm"),
        ])?;
        return discovery.discover_pages(&expanded_path);
    }

    let path_str = expanded_path.to_string_lossy();
    let base_path = match path_str.find('*') {
        Some(pos) => {
            let base = &path_str[..pos];
            if base.ends_with('/') {
                PathBuf::from(base)
            } else {
                Path::new(base)
                    .parent()
                    .unwrap_or(Path::new("."))
                    .to_path_buf()
            }
        }
        None => anyhow::bail!("No such file or directory: {}", expanded_path.display()),
    };

    let discovery = PageDiscovery::from_pattern(&path_str)?;
    discovery.discover_pages(&base_path)
}

pub fn load_page(path: &Path) -> Result<Document> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;
    Ok(Document::parse_html(&source))
}
