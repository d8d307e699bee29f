//! Property tests for the filesystem target store.

use proptest::prelude::*;
use tempfile::tempdir;

use zeroops::domain::ports::TargetRepository;
use zeroops::{FsTargetStore, Target};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9._-]{0,15}").unwrap()
}

fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9.-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A saved target loads back unchanged.
    #[test]
    fn prop_save_then_load(name in name(), user in field(), host in field()) {
        let dir = tempdir().unwrap();
        let store = FsTargetStore::with_root(dir.path());
        let target = Target::new(name.clone(), user, host);

        store.save(&target).unwrap();
        prop_assert_eq!(store.load(&name).unwrap(), target);
    }

    /// PROPERTY: `list` returns each saved name once, sorted.
    #[test]
    fn prop_list_sorted_and_unique(names in proptest::collection::vec(name(), 1..6)) {
        let dir = tempdir().unwrap();
        let store = FsTargetStore::with_root(dir.path());
        for name in &names {
            store.save(&Target::new(name.clone(), "u", "h")).unwrap();
        }

        let mut expected = names.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(store.list().unwrap(), expected);
    }

    /// PROPERTY: Removing the current target always clears the pointer.
    #[test]
    fn prop_remove_current_clears_pointer(name in name()) {
        let dir = tempdir().unwrap();
        let store = FsTargetStore::with_root(dir.path());
        store.save(&Target::new(name.clone(), "u", "h")).unwrap();
        store.set_current(&name).unwrap();

        prop_assert!(store.remove(&name).unwrap());
        prop_assert_eq!(store.current_name().unwrap(), None);
    }
}
