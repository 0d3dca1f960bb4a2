use std::path::PathBuf;

/// Host OS family, as far as the agent launcher layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// Every non-Windows host, including unrecognized ones.
    Posix,
}

impl Platform {
    pub fn host() -> Self {
        Self::from_family(std::env::consts::FAMILY)
    }

    /// Map a `std::env::consts::FAMILY` value to a launcher layout.
    pub fn from_family(family: &str) -> Self {
        match family {
            "windows" => Platform::Windows,
            _ => Platform::Posix,
        }
    }

    /// Launcher script, relative to the installation directory.
    pub fn launcher(&self) -> &'static str {
        match self {
            Platform::Windows => "\\bin\\agent.cmd",
            Platform::Posix => "/bin/agent.sh",
        }
    }

    /// Agent executable for an installation at `home`.
    ///
    /// Plain concatenation onto the trimmed home, so a trailing separator in
    /// `home` is kept as-is.
    pub fn executable(&self, home: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", home.trim(), self.launcher()))
    }
}
