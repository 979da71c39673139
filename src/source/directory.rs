//! A directory of chapter files (for example an unpacked EPUB content
//! folder) or a single chapter file, read as a book.

use std::path::{Path, PathBuf};

use crate::engine::extractor::DocumentNode;
use crate::types::{HoardError, HoardResult};

use super::markup::{parse_markup, plain_text};
use super::ChapterSource;

const MARKUP_EXTENSIONS: &[&str] = &["xhtml", "html", "htm", "xml"];
const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Chapter files sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    title: String,
    chapters: Vec<PathBuf>,
}

impl DirectorySource {
    /// Open a directory of chapter files, or a single chapter file.
    ///
    /// Fails if the path cannot be read or holds no chapter files.
    pub fn open(path: &Path) -> HoardResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| HoardError::io(path, e))?;

        let chapters = if metadata.is_dir() {
            let mut chapters = Vec::new();
            let entries = std::fs::read_dir(path).map_err(|e| HoardError::io(path, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| HoardError::io(path, e))?;
                let chapter = entry.path();
                if chapter.is_file() && is_chapter_file(&chapter) {
                    chapters.push(chapter);
                }
            }
            chapters.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
            chapters
        } else if is_chapter_file(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        };

        if chapters.is_empty() {
            return Err(HoardError::InvalidSource(format!(
                "{} contains no chapter files",
                path.display()
            )));
        }

        Ok(Self {
            title: title_from_path(path),
            chapters,
        })
    }

    /// Replace the path-derived title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    pub fn chapters(&self) -> &[PathBuf] {
        &self.chapters
    }
}

impl ChapterSource for DirectorySource {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    async fn load_chapter(&self, index: usize) -> HoardResult<DocumentNode> {
        let path = self
            .chapters
            .get(index)
            .ok_or_else(|| HoardError::Chapter {
                index,
                reason: "no such chapter".into(),
            })?;
        let raw = tokio::fs::read(path).await.map_err(|e| HoardError::Chapter {
            index,
            reason: format!("{}: {}", path.display(), e),
        })?;
        let raw = String::from_utf8_lossy(&raw);

        if has_extension(path, TEXT_EXTENSIONS) {
            Ok(plain_text(&raw))
        } else {
            parse_markup(&raw)
        }
    }
}

fn is_chapter_file(path: &Path) -> bool {
    has_extension(path, MARKUP_EXTENSIONS) || has_extension(path, TEXT_EXTENSIONS)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Book title from a path: a directory's name without a trailing `.epub`,
/// or a file's stem.
pub fn title_from_path(path: &Path) -> String {
    let name = if path.is_dir() {
        path.file_name()
    } else {
        path.file_stem()
    };
    let name = name
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lower = name.to_ascii_lowercase();
    match lower.strip_suffix(".epub") {
        Some(stem) => name[..stem.len()].to_string(),
        None => name,
    }
}
