//! Target Use Cases
//!
//! `context add/list/use/current/rm`: argument checks on top of the
//! target repository.

use tracing::info;

use crate::domain::ports::TargetRepository;
use crate::domain::target::{parse_target_uri, validate_name, Target};
use crate::error::{ZeroopsError, ZeroopsResult};

/// Stored target names plus the selected one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetListing {
    pub names: Vec<String>,
    pub current: Option<String>,
}

impl TargetListing {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub struct TargetsUseCase<TR: TargetRepository> {
    targets: TR,
}

impl<TR: TargetRepository> TargetsUseCase<TR> {
    pub fn new(targets: TR) -> Self {
        Self { targets }
    }

    /// Register (or overwrite) a target from a `host=ssh://user@host` URI
    pub fn add(&self, name: &str, uri: &str, key: Option<&str>) -> ZeroopsResult<Target> {
        validate_name(name, "context name")?;
        if uri.is_empty() {
            return Err(ZeroopsError::MissingArgument {
                what: "--docker URI",
            });
        }
        let (user, host) = parse_target_uri(uri)?;

        let mut target = Target::new(name, user, host);
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            target = target.with_key(key);
        }

        self.targets.save(&target)?;
        info!(target = %target, "context saved");
        Ok(target)
    }

    pub fn list(&self) -> ZeroopsResult<TargetListing> {
        Ok(TargetListing {
            names: self.targets.list()?,
            current: self.targets.current_name()?,
        })
    }

    /// Select an existing target as current
    pub fn use_target(&self, name: &str) -> ZeroopsResult<()> {
        validate_name(name, "context name")?;
        self.targets.set_current(name)?;
        info!(name, "current context set");
        Ok(())
    }

    /// Name of the current target, if one is selected
    pub fn current(&self) -> ZeroopsResult<Option<String>> {
        self.targets.current_name()
    }

    /// Delete a target; returns `true` if it was also the current one
    pub fn remove(&self, name: &str) -> ZeroopsResult<bool> {
        validate_name(name, "context name")?;
        let cleared = self.targets.remove(name)?;
        info!(name, cleared_current = cleared, "context removed");
        Ok(cleared)
    }
}
