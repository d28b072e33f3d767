use crate::{
    history::DEFAULT_HISTORY_LIMIT,
    storage::{self, StorageManager},
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.yaml";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// How many history entries survive a save; oldest are dropped first.
    #[serde(default = "history_limit")]
    pub history_limit: usize,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history_limit: DEFAULT_HISTORY_LIMIT,
            base_path: String::new(),
        }
    }
}

fn history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Config {
    fn validate(&self) {
        if self.history_limit == 0 {
            panic!("history_limit must be greater than 0");
        }
    }

    pub fn load_with(base_path: &str) -> anyhow::Result<Self> {
        let store = storage::BackendLocal::new(base_path)?;

        // create new if does not exist
        if !store.exists(CONFIG_FILE) {
            store.write(
                CONFIG_FILE,
                serde_yml::to_string(&Self::default())?.as_bytes(),
            )?;
        }

        let config_str = String::from_utf8(store.read(CONFIG_FILE)?)?;
        let mut config: Self = serde_yml::from_str(&config_str)?;

        config.base_path = base_path.to_string();

        config.validate();

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let store = storage::BackendLocal::new(&self.base_path)?;

        let config_str = serde_yml::to_string(&self)?;
        store.write(CONFIG_FILE, config_str.as_bytes())?;
        Ok(())
    }
}
