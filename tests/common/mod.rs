//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use wordhoard::{
    AnalysisConfig, Analyzer, ChapterSource, DocumentNode, HoardError, HoardResult,
    ReferenceCorpus,
};

/// A small corpus with a few common and a few rare words.
pub fn scenario_corpus() -> ReferenceCorpus {
    ReferenceCorpus::from_ranks([
        ("the", 1),
        ("cat", 2),
        ("sat", 3),
        ("mat", 4),
        ("evening", 800),
        ("house", 2500),
        ("melancholy", 4200),
        ("lugubrious", 9000),
        ("sonorous", 12000),
        ("obdurate", 15000),
    ])
}

pub fn analyzer() -> Analyzer {
    Analyzer::new(Arc::new(scenario_corpus()), AnalysisConfig::default()).unwrap()
}

pub fn paragraph(text: &str) -> DocumentNode {
    DocumentNode::element("p", vec![DocumentNode::text(text)])
}

/// A chapter body with one paragraph per entry.
pub fn chapter(paragraphs: &[&str]) -> DocumentNode {
    let mut children = Vec::new();
    for text in paragraphs {
        children.push(paragraph(text));
        children.push(DocumentNode::text("\n"));
    }
    DocumentNode::element("body", children)
}

/// What a scripted chapter does when loaded.
#[derive(Clone)]
pub enum Script {
    Load(DocumentNode),
    Fail,
    Panic,
}

/// An in-memory book whose chapters can fail on demand. Later chapters
/// finish first so completion order differs from source order.
pub struct ScriptedSource {
    pub title: String,
    pub chapters: Vec<Script>,
}

impl ScriptedSource {
    pub fn new(title: &str, chapters: Vec<Script>) -> Arc<Self> {
        Arc::new(Self {
            title: title.to_string(),
            chapters,
        })
    }
}

impl ChapterSource for ScriptedSource {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    async fn load_chapter(&self, index: usize) -> HoardResult<DocumentNode> {
        for _ in 0..(self.chapters.len() - index) * 3 {
            tokio::task::yield_now().await;
        }
        match &self.chapters[index] {
            Script::Load(root) => Ok(root.clone()),
            Script::Fail => Err(HoardError::Chapter {
                index,
                reason: "corrupt chapter".into(),
            }),
            Script::Panic => panic!("chapter {index} exploded"),
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
