use anyhow::{
  Context,
  bail
};
use serde::Deserialize;
use tracing::{
  debug,
  info
};

use crate::ids::IdPolicy;
use crate::validate::{
  DEFAULT_MIN_TITLE_LEN,
  TitleRule
};

pub const DEFAULT_SOURCE_URL: &str =
  "https://jsonplaceholder.typicode.com/users/1/todos";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct BoardConfig {
  pub source:     SourceConfig,
  pub validation: ValidationConfig,
  pub ids:        IdsConfig
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct SourceConfig {
  pub url: String
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct ValidationConfig {
  pub min_title_len: usize
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct IdsConfig {
  pub policy: IdPolicy
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      source:     SourceConfig::default(),
      validation:
        ValidationConfig::default(),
      ids:        IdsConfig::default()
    }
  }
}

impl Default for SourceConfig {
  fn default() -> Self {
    Self {
      url: DEFAULT_SOURCE_URL
        .to_string()
    }
  }
}

impl Default for ValidationConfig {
  fn default() -> Self {
    Self {
      min_title_len:
        DEFAULT_MIN_TITLE_LEN
    }
  }
}

impl BoardConfig {
  #[tracing::instrument(skip(text), fields(bytes = text.len()))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: BoardConfig =
      toml::from_str(text).context(
        "failed to parse board \
         config"
      )?;
    cfg.validate()?;
    info!(
      url = %cfg.source.url,
      min_title_len =
        cfg.validation.min_title_len,
      id_policy = ?cfg.ids.policy,
      "loaded board config"
    );
    Ok(cfg)
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    let url = self.source.url.trim();
    if !(url.starts_with("http://")
      || url.starts_with("https://"))
    {
      bail!(
        "source.url must be an http(s) \
         URL, got {url:?}"
      );
    }
    if self.validation.min_title_len
      == 0
    {
      bail!(
        "validation.min_title_len \
         must be at least 1"
      );
    }
    debug!("board config validated");
    Ok(())
  }

  pub fn title_rule(&self) -> TitleRule {
    TitleRule::new(
      self.validation.min_title_len
    )
  }
}
