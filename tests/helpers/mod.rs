#![allow(dead_code)]

use shelf::corpus::Corpus;
use std::path::Path;
use tempfile::TempDir;

/// A corpus root in a temporary directory, removed on drop.
pub struct TestCorpus {
    pub dir: TempDir,
    pub corpus: Corpus,
}

impl TestCorpus {
    /// Empty root with no mode directories.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let corpus = Corpus::new(dir.path());
        Self { dir, corpus }
    }

    /// Root populated with one file per mode plus some noise.
    pub fn sample() -> Self {
        let t = Self::empty();
        t.write(
            "instructions",
            "example.instructions.md",
            "---\ntitle: \"Example Guide\"\ndescription: Helpful notes\n---\nBody text mentioning widgets.\n",
        );
        t.write(
            "instructions",
            "python.instructions.md",
            "---\ndescription: 'Python coding conventions'\napplyTo: '**/*.py'\n---\nUse type hints.\n",
        );
        t.write("instructions", "README.txt", "widgets python everywhere");
        t.write(
            "prompts",
            "pytest-coverage.prompt.md",
            "---\nmode: agent\ndescription: Raise test coverage with pytest\n---\nRun the suite.\n",
        );
        t.write(
            "collections",
            "python-kit.collection.yml",
            "id: python-kit\nname: Python Kit\ndescription: \"Everything for Python projects\"\nitems:\n  - path: instructions/python.instructions.md\n",
        );
        t.write(
            "agents",
            "planner.agent.md",
            "---\ndescription: Plans work before coding\n---\nYou are a planner.\n",
        );
        t
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `body` to `<root>/<mode>/<name>`, creating the mode directory.
    pub fn write(&self, mode: &str, name: &str, body: &str) {
        let dir = self.root().join(mode);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), body).unwrap();
    }

    pub fn remove_mode(&self, mode: &str) {
        std::fs::remove_dir_all(self.root().join(mode)).unwrap();
    }
}

/// `(mode, filename)` pairs of a search, sorted for order-independent comparison.
pub fn hits(corpus: &Corpus, keywords: &str) -> Vec<(String, String)> {
    let mut hits: Vec<_> = shelf::corpus::search(corpus, keywords)
        .into_iter()
        .map(|r| (r.mode.to_string(), r.filename))
        .collect();
    hits.sort();
    hits
}
