//! File writer: the only side-effecting step of a sitemap run.
//!
//! All XML is rendered in memory before anything touches the disk. Files are then
//! staged as `*.xml.tmp`, every live file is copied to `*.xml.bak`, and only then
//! are the staged files renamed into place, index last. Any failure puts the
//! backups back, so the directory holds either the old set or the new one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::sitemap::enumerator::{cross_category_duplicates, enumerate_all, SitemapCategory};
use crate::sitemap::taxonomy::Taxonomy;
use crate::sitemap::xml::{render_index, render_urlset};
use crate::sitemap::{BASE_URL, INDEX_FILENAME};

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to back up {path}: {source}")]
    Backup { path: PathBuf, source: io::Error },

    #[error("failed to move {path} into place: {source}")]
    Publish { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub category: SitemapCategory,
    pub filename: String,
    pub urls: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub lastmod: NaiveDate,
    pub index_path: PathBuf,
    pub files: Vec<FileReport>,
    pub total_urls: usize,
}

struct RenderedFile {
    filename: String,
    xml: String,
}

/// Enumerates, serializes and writes every category plus the index into `out_dir`.
pub fn generate(
    out_dir: &Path,
    taxonomy: &Taxonomy<'_>,
    lastmod: NaiveDate,
) -> Result<GenerationReport, SitemapError> {
    let sets = enumerate_all(taxonomy, lastmod);

    for dup in cross_category_duplicates(&sets) {
        let categories: Vec<&str> = dup.categories.iter().map(|c| c.name()).collect();
        warn!(
            "URL {} appears in more than one sitemap: {}",
            dup.loc,
            categories.join(", ")
        );
    }

    let mut files = Vec::with_capacity(sets.len());
    let mut rendered = Vec::with_capacity(sets.len() + 1);
    for (category, entries) in &sets {
        let filename = category.filename();
        debug!("Rendered {filename}: {} URLs", entries.len());
        files.push(FileReport {
            category: *category,
            filename: filename.clone(),
            urls: entries.len(),
        });
        rendered.push(RenderedFile {
            filename,
            xml: render_urlset(entries),
        });
    }

    let filenames: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
    rendered.push(RenderedFile {
        filename: INDEX_FILENAME.to_string(),
        xml: render_index(BASE_URL, &filenames, lastmod),
    });

    write_all(out_dir, &rendered)?;

    let total_urls = files.iter().map(|f| f.urls).sum();
    info!(
        "Wrote {} sitemap files ({total_urls} URLs) to {}",
        files.len(),
        out_dir.display()
    );

    Ok(GenerationReport {
        lastmod,
        index_path: out_dir.join(INDEX_FILENAME),
        files,
        total_urls,
    })
}

struct Staged {
    tmp: PathBuf,
    target: PathBuf,
    backup: Option<PathBuf>,
}

fn write_all(out_dir: &Path, rendered: &[RenderedFile]) -> Result<(), SitemapError> {
    fs::create_dir_all(out_dir).map_err(|source| SitemapError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut staged: Vec<Staged> = Vec::with_capacity(rendered.len());
    for file in rendered {
        let target = out_dir.join(&file.filename);
        let tmp = out_dir.join(format!("{}.tmp", file.filename));
        if let Err(source) = fs::write(&tmp, file.xml.as_bytes()) {
            discard(&staged);
            let _ = fs::remove_file(&tmp);
            return Err(SitemapError::Write {
                path: target,
                source,
            });
        }
        staged.push(Staged {
            tmp,
            target,
            backup: None,
        });
    }

    for i in 0..staged.len() {
        match back_up(&staged[i].target) {
            Ok(backup) => staged[i].backup = backup,
            Err(source) => {
                let path = staged[i].target.clone();
                discard(&staged);
                return Err(SitemapError::Backup { path, source });
            }
        }
    }

    // Index is the last staged file, so it is published last.
    for i in 0..staged.len() {
        if let Err(source) = fs::rename(&staged[i].tmp, &staged[i].target) {
            roll_back(&staged[..i]);
            discard(&staged[i..]);
            return Err(SitemapError::Publish {
                path: staged[i].target.clone(),
                source,
            });
        }
    }

    for file in &staged {
        if let Some(backup) = &file.backup {
            let _ = fs::remove_file(backup);
        }
    }
    Ok(())
}

/// Copies a live file aside. `None` when there is nothing to keep.
fn back_up(target: &Path) -> io::Result<Option<PathBuf>> {
    match fs::symlink_metadata(target) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
        Ok(_) => {}
    }
    let mut name = target.as_os_str().to_owned();
    name.push(".bak");
    let backup = PathBuf::from(name);
    fs::copy(target, &backup)?;
    Ok(Some(backup))
}

/// Undoes already-published files: restores each backup, or removes a file that
/// did not exist before the run.
fn roll_back(published: &[Staged]) {
    for file in published {
        let restored = match &file.backup {
            Some(backup) => fs::rename(backup, &file.target),
            None => fs::remove_file(&file.target),
        };
        if let Err(e) = restored {
            warn!("Could not restore {}: {e}", file.target.display());
        }
    }
}

fn discard(staged: &[Staged]) {
    for file in staged {
        let _ = fs::remove_file(&file.tmp);
        if let Some(backup) = &file.backup {
            let _ = fs::remove_file(backup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
    }

    #[test]
    fn test_writes_every_category_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public");

        let report = generate(&out, &Taxonomy::builtin(), date()).unwrap();

        assert_eq!(report.files.len(), SitemapCategory::ALL.len());
        for file in &report.files {
            assert!(out.join(&file.filename).is_file(), "{} missing", file.filename);
        }
        assert_eq!(report.index_path, out.join("sitemap.xml"));

        let index = fs::read_to_string(&report.index_path).unwrap();
        assert_eq!(index.matches("<sitemap>").count(), report.files.len());
        for file in &report.files {
            assert!(index.contains(&format!(
                "<loc>https://indeedflex.com/{}</loc>",
                file.filename
            )));
        }
    }

    #[test]
    fn test_no_temporaries_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        generate(dir.path(), &Taxonomy::builtin(), date()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_report_counts_match_files() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(dir.path(), &Taxonomy::builtin(), date()).unwrap();

        for file in &report.files {
            let xml = fs::read_to_string(dir.path().join(&file.filename)).unwrap();
            assert_eq!(xml.matches("<url>").count(), file.urls, "{}", file.filename);
        }
        assert_eq!(
            report.total_urls,
            report.files.iter().map(|f| f.urls).sum::<usize>()
        );
    }

    #[test]
    fn test_rerun_overwrites_identically() {
        let dir = tempfile::tempdir().unwrap();
        generate(dir.path(), &Taxonomy::builtin(), date()).unwrap();
        let first = fs::read_to_string(dir.path().join("sitemap-cities.xml")).unwrap();
        generate(dir.path(), &Taxonomy::builtin(), date()).unwrap();
        let second = fs::read_to_string(dir.path().join("sitemap-cities.xml")).unwrap();
        assert_eq!(first, second);
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_unwritable_output_dir_fails_whole_run() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("public");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = generate(&blocker, &Taxonomy::builtin(), date()).unwrap_err();
        assert!(matches!(err, SitemapError::CreateDir { .. }), "{err}");
        assert!(blocker.is_file());
        assert_eq!(file_names(dir.path()), ["public"]);
    }

    #[test]
    fn test_failed_staging_removes_temporaries() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("sitemap-guides.xml.tmp");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), b"x").unwrap();

        let err = generate(dir.path(), &Taxonomy::builtin(), date()).unwrap_err();
        assert!(
            matches!(&err, SitemapError::Write { path, .. } if path.ends_with("sitemap-guides.xml")),
            "{err}"
        );
        assert_eq!(file_names(dir.path()), ["sitemap-guides.xml.tmp"]);
    }

    #[test]
    fn test_failed_run_keeps_previous_set() {
        let dir = tempfile::tempdir().unwrap();
        let old = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        generate(dir.path(), &Taxonomy::builtin(), old).unwrap();
        let before: Vec<(String, String)> = file_names(dir.path())
            .into_iter()
            .filter(|name| name != "sitemap-tools.xml")
            .map(|name| {
                let xml = fs::read_to_string(dir.path().join(&name)).unwrap();
                (name, xml)
            })
            .collect();

        let tools = dir.path().join("sitemap-tools.xml");
        fs::remove_file(&tools).unwrap();
        fs::create_dir(&tools).unwrap();
        fs::write(tools.join("keep"), b"x").unwrap();

        let err = generate(dir.path(), &Taxonomy::builtin(), date()).unwrap_err();
        assert!(matches!(err, SitemapError::Backup { .. }), "{err}");

        for (name, xml) in &before {
            let now = fs::read_to_string(dir.path().join(name)).unwrap();
            assert_eq!(&now, xml, "{name} changed after a failed run");
            assert!(now.contains("2020-01-01"));
        }
        let leftovers: Vec<_> = file_names(dir.path())
            .into_iter()
            .filter(|name| name.ends_with(".tmp") || name.ends_with(".bak"))
            .collect();
        assert!(leftovers.is_empty(), "{leftovers:?}");
    }

    #[test]
    fn test_roll_back_restores_backups_and_removes_new_files() {
        let dir = tempfile::tempdir().unwrap();
        let core = dir.path().join("sitemap-core.xml");
        let core_backup = dir.path().join("sitemap-core.xml.bak");
        let roles = dir.path().join("sitemap-roles.xml");
        fs::write(&core, b"new").unwrap();
        fs::write(&core_backup, b"old").unwrap();
        fs::write(&roles, b"new").unwrap();

        roll_back(&[
            Staged {
                tmp: dir.path().join("sitemap-core.xml.tmp"),
                target: core.clone(),
                backup: Some(core_backup.clone()),
            },
            Staged {
                tmp: dir.path().join("sitemap-roles.xml.tmp"),
                target: roles.clone(),
                backup: None,
            },
        ]);

        assert_eq!(fs::read_to_string(&core).unwrap(), "old");
        assert!(!core_backup.exists());
        assert!(!roles.exists());
    }

    #[test]
    fn test_successful_run_leaves_no_backups() {
        let dir = tempfile::tempdir().unwrap();
        generate(dir.path(), &Taxonomy::builtin(), date()).unwrap();
        generate(dir.path(), &Taxonomy::builtin(), date()).unwrap();
        assert!(file_names(dir.path()).iter().all(|name| name.ends_with(".xml")));
    }
}
