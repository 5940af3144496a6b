//! Filesystem-backed JSON persistence for the expense ledger.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    domain::{Entry, Ledger},
    errors::{ExpenseError, Result},
};

const LEDGER_FILE: &str = "expenses.json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_DIR_NAME: &str = ".spendlog";
const HOME_ENV: &str = "SPENDLOG_HOME";

/// Owns the persisted ledger location. Ledger state is threaded explicitly
/// through every call; the store never retains it.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    ledger_path: PathBuf,
}

impl ExpenseStore {
    /// Opens a store rooted at `base`, or at the default data directory
    /// (`$SPENDLOG_HOME`, falling back to `~/.spendlog`).
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let dir = base.unwrap_or_else(default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            ledger_path: dir.join(LEDGER_FILE),
        })
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Reads the persisted ledger, or defaults when none has been written yet.
    pub fn load(&self) -> Result<Ledger> {
        if !self.ledger_path.exists() {
            debug!(path = %self.ledger_path.display(), "no ledger file, starting empty");
            return Ok(Ledger::default());
        }
        let data = fs::read_to_string(&self.ledger_path)?;
        let ledger: Ledger = serde_json::from_str(&data)
            .map_err(|err| ExpenseError::CorruptLedger(err.to_string()))?;
        debug!(entries = ledger.entries.len(), "ledger loaded");
        Ok(ledger)
    }

    /// Serialises the full ledger and atomically replaces the persisted file.
    /// A failed write never clobbers the previous contents.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)
            .map_err(|err| ExpenseError::Storage(err.to_string()))?;
        let tmp = tmp_path(&self.ledger_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.ledger_path)?;
        debug!(path = %self.ledger_path.display(), entries = ledger.entries.len(), "ledger saved");
        Ok(())
    }

    /// Validates and appends one entry, persisting the result. The ledger is
    /// returned unchanged in meaning on failure paths (validation fails before
    /// any mutation, and a failed save never reaches the old file).
    pub fn append(&self, mut ledger: Ledger, entry: Entry) -> Result<Ledger> {
        entry.validate()?;
        ledger.entries.push(entry);
        self.save(&ledger)?;
        Ok(ledger)
    }

    /// Validates and updates the monthly budget, persisting the result.
    pub fn set_budget(&self, mut ledger: Ledger, amount: f64) -> Result<Ledger> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExpenseError::InvalidBudget(format!(
                "budget must be non-negative, got {amount}"
            )));
        }
        ledger.monthly_budget = amount;
        self.save(&ledger)?;
        Ok(ledger)
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
