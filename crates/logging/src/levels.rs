//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for user-facing diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Matches reported as they are found.
    Match,
    /// Members skipped by the skip set.
    Skip,
    /// Search statistics.
    Stats,
}

/// Debug flags for internal diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Skip-set construction and filtering.
    Filter,
    /// Root loading.
    Load,
    /// Access path resolution.
    Resolve,
    /// Graph traversal.
    Walk,
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Match reporting level.
    pub matches: u8,
    /// Skipped member level.
    pub skip: u8,
    /// Statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Match => self.matches,
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Match => self.matches = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Stats => self.stats = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.matches = level;
        self.skip = level;
        self.stats = level;
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Skip-set filtering level.
    pub filter: u8,
    /// Root loading level.
    pub load: u8,
    /// Path resolution level.
    pub resolve: u8,
    /// Traversal level.
    pub walk: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Filter => self.filter,
            DebugFlag::Load => self.load,
            DebugFlag::Resolve => self.resolve,
            DebugFlag::Walk => self.walk,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Filter => self.filter = level,
            DebugFlag::Load => self.load = level,
            DebugFlag::Resolve => self.resolve = level,
            DebugFlag::Walk => self.walk = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.filter = level;
        self.load = level;
        self.resolve = level;
        self.walk = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod info_levels {
        use super::*;

        #[test]
        fn default_info_levels_are_zero() {
            let levels = InfoLevels::default();
            assert_eq!(levels.matches, 0);
            assert_eq!(levels.skip, 0);
            assert_eq!(levels.stats, 0);
        }

        #[test]
        fn set_updates_correct_level_for_each_flag() {
            let mut levels = InfoLevels::default();
            levels.set(InfoFlag::Match, 1);
            levels.set(InfoFlag::Skip, 2);
            levels.set(InfoFlag::Stats, 3);

            assert_eq!(levels.get(InfoFlag::Match), 1);
            assert_eq!(levels.get(InfoFlag::Skip), 2);
            assert_eq!(levels.get(InfoFlag::Stats), 3);
        }

        #[test]
        fn set_all_updates_all_levels() {
            let mut levels = InfoLevels::default();
            levels.set_all(4);
            for flag in [InfoFlag::Match, InfoFlag::Skip, InfoFlag::Stats] {
                assert_eq!(levels.get(flag), 4);
            }
        }
    }

    mod debug_levels {
        use super::*;

        const ALL: [DebugFlag; 4] = [
            DebugFlag::Filter,
            DebugFlag::Load,
            DebugFlag::Resolve,
            DebugFlag::Walk,
        ];

        #[test]
        fn default_debug_levels_are_zero() {
            let levels = DebugLevels::default();
            for flag in ALL {
                assert_eq!(levels.get(flag), 0);
            }
        }

        #[test]
        fn set_touches_only_the_requested_flag() {
            let mut levels = DebugLevels::default();
            levels.set(DebugFlag::Resolve, 3);

            assert_eq!(levels.resolve, 3);
            assert_eq!(levels.filter, 0);
            assert_eq!(levels.load, 0);
            assert_eq!(levels.walk, 0);
        }

        #[test]
        fn set_all_updates_all_levels() {
            let mut levels = DebugLevels::default();
            levels.set_all(2);
            for flag in ALL {
                assert_eq!(levels.get(flag), 2);
            }
        }
    }
}
