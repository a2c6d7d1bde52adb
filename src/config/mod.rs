use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .spidocrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(|v| v.parse::<u32>().ok())
    }

    pub fn pandoc_bin(&self) -> String {
        self.get("PANDOC_BIN").unwrap_or_else(|| "pandoc".into())
    }

    pub fn reference_doc(&self) -> PathBuf {
        PathBuf::from(self.get("REFERENCE_DOC").unwrap_or_else(|| "template.docx".into()))
    }

    pub fn toc_depth(&self) -> u32 {
        self.get_u32("TOC_DEPTH").unwrap_or(3)
    }

    pub fn highlight_style(&self) -> String {
        self.get("HIGHLIGHT_STYLE").unwrap_or_else(|| "tango".into())
    }

    pub fn scan_extension(&self) -> String {
        self.get("SCAN_EXTENSION").unwrap_or_else(|| "js".into())
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or SPIDOC_* for forward-compat
    const KEYS: &[&str] = &[
        "PANDOC_BIN",
        "REFERENCE_DOC",
        "TOC_DEPTH",
        "HIGHLIGHT_STYLE",
        "SCAN_EXTENSION",
    ];

    KEYS.contains(&k) || k.starts_with("SPIDOC_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("spidoc").join(".spidocrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    m.insert("PANDOC_BIN".into(), "pandoc".into());
    m.insert("REFERENCE_DOC".into(), "template.docx".into());
    m.insert("TOC_DEPTH".into(), "3".into());
    m.insert("HIGHLIGHT_STYLE".into(), "tango".into());
    m.insert("SCAN_EXTENSION".into(), "js".into());

    m
}
