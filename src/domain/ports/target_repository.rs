//! Target Repository Port
//!
//! Persistence for named targets and the "current" pointer.

use crate::domain::target::Target;
use crate::error::{ZeroopsError, ZeroopsResult};

pub trait TargetRepository {
    /// Create or overwrite a target record
    fn save(&self, target: &Target) -> ZeroopsResult<()>;

    /// Load a target record by name
    fn load(&self, name: &str) -> ZeroopsResult<Target>;

    fn exists(&self, name: &str) -> bool;

    /// Names of all stored targets, in stable order
    fn list(&self) -> ZeroopsResult<Vec<String>>;

    /// Delete a target. Removing an unknown name is not an error.
    ///
    /// Returns `true` when the current pointer referenced it and was cleared.
    fn remove(&self, name: &str) -> ZeroopsResult<bool>;

    /// Name held by the current pointer, if any
    fn current_name(&self) -> ZeroopsResult<Option<String>>;

    /// Point "current" at an existing target
    fn set_current(&self, name: &str) -> ZeroopsResult<()>;

    /// Resolve the current target
    fn current(&self) -> ZeroopsResult<Target> {
        let name = self.current_name()?.ok_or(ZeroopsError::NoCurrentTarget)?;
        self.load(&name)
    }
}

impl<T: TargetRepository + ?Sized> TargetRepository for &T {
    fn save(&self, target: &Target) -> ZeroopsResult<()> {
        (**self).save(target)
    }

    fn load(&self, name: &str) -> ZeroopsResult<Target> {
        (**self).load(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn list(&self) -> ZeroopsResult<Vec<String>> {
        (**self).list()
    }

    fn remove(&self, name: &str) -> ZeroopsResult<bool> {
        (**self).remove(name)
    }

    fn current_name(&self) -> ZeroopsResult<Option<String>> {
        (**self).current_name()
    }

    fn set_current(&self, name: &str) -> ZeroopsResult<()> {
        (**self).set_current(name)
    }
}
