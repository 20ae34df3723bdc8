use anyhow::{Context, Result, anyhow, bail};

const DEFAULT_HOPS: u32 = 1;
// each hop is a real swap
const DEFAULT_MAX_HOPS: u32 = 3;

/// Everything the binary needs for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pairs_file: String,
    pub src_token: String,
    pub dst_token: String,
    pub hops: u32,
    pub max_hops: u32,
    pub output_file: Option<String>,
}

impl Config {
    /// Load from the process environment, after pulling in any .env file
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow!("{} is not set", key));
        let number = |key: &str, default: u32| -> Result<u32> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a non-negative integer, got {:?}", key, raw)),
                None => Ok(default),
            }
        };

        let config = Self {
            pairs_file: required("PAIRS_FILE")?,
            src_token: required("SRC_TOKEN")?,
            dst_token: required("DST_TOKEN")?,
            hops: number("HOPS", DEFAULT_HOPS)?,
            max_hops: number("MAX_HOPS", DEFAULT_MAX_HOPS)?,
            output_file: lookup("OUTPUT_FILE").filter(|file| !file.is_empty()),
        };

        if config.hops > config.max_hops {
            bail!("HOPS {} exceeds MAX_HOPS {}", config.hops, config.max_hops);
        }
        Ok(config)
    }
}
