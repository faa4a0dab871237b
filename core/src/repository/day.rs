use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{anyhow, Context, Result};
use serde_json;

const DAYS_FILE_NAME: &str = "days.json";

/// Storage for the per-day flags of the tracked range.
///
/// Flags are positional: index `i` is the i-th day of the range.
pub trait DayRepository {
    fn load(&self) -> Result<Vec<bool>>;
    fn save(&self, flags: &[bool]) -> Result<()>;
}

/// Keeps the flags as a single JSON array of booleans.
#[derive(Clone)]
pub struct FileDayRepository {
    file_path: PathBuf,
}

impl FileDayRepository {
    /// Opens (or creates) `days.json` under `base_dir`, defaulting to `~/.streakcal`.
    /// A new file is filled with `len` unset days.
    pub fn new(base_dir: Option<PathBuf>, len: usize) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".streakcal")
            }
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create data directory {}", path.display()))?;
        path.push(DAYS_FILE_NAME);

        let repo = FileDayRepository { file_path: path };
        if !repo.file_path.exists() {
            tracing::info!(path = %repo.file_path.display(), days = len, "Creating day store");
            repo.save(&vec![false; len])?;
        }

        Ok(repo)
    }

    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl DayRepository for FileDayRepository {
    fn load(&self) -> Result<Vec<bool>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let flags: Vec<bool> = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(flags)
    }

    fn save(&self, flags: &[bool]) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, flags)?;
        writer.flush()?;
        Ok(())
    }
}
