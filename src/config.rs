use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use winbuf::Summary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,

    /// Summary line rendering.
    ///
    /// Example in winbuf.toml:
    /// ```toml
    /// [summary]
    /// threshold = 7   # buffers this large or larger are elided
    /// head      = 4   # leading values kept when elided
    /// ```
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Capacity used when --capacity is not given
    pub capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self { capacity: 8 }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(e) => {
                match Config::config_path() {
                    Some(p) if p.exists() => log::warn!("ignoring {}: {:#}", p.display(), e),
                    // Write defaults on first run (best-effort)
                    _ => {
                        log::debug!("no config file, using defaults");
                        let _ = try_write_defaults();
                    }
                }
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("winbuf").join("winbuf.toml"))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer.capacity == 0 {
            bail!("buffer.capacity must be at least 1");
        }
        if self.summary.head >= self.summary.threshold {
            bail!(
                "summary.head ({}) must be smaller than summary.threshold ({})",
                self.summary.head, self.summary.threshold
            );
        }
        Ok(())
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    Config::parse(&text)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# winbuf configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
