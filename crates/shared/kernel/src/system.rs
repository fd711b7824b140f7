//! Host operating system classification.

/// Reports whether the host belongs to the Windows family.
pub trait HostOs {
    fn is_windows(&self) -> bool;
}

impl<O: HostOs + ?Sized> HostOs for &O {
    fn is_windows(&self) -> bool {
        (**self).is_windows()
    }
}

/// The operating system this binary was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl HostSystem {
    /// Short OS name (`windows`, `linux`, `macos`, ...).
    #[must_use]
    pub const fn os_name() -> &'static str {
        std::env::consts::OS
    }
}

impl HostOs for HostSystem {
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// A fixed classification, for overrides and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticOs {
    windows: bool,
}

impl StaticOs {
    pub const WINDOWS: Self = Self { windows: true };
    pub const OTHER: Self = Self { windows: false };

    #[must_use]
    pub const fn new(windows: bool) -> Self {
        Self { windows }
    }
}

impl HostOs for StaticOs {
    fn is_windows(&self) -> bool {
        self.windows
    }
}
