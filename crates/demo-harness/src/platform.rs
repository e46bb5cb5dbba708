use crate::HarnessError;
use core::fmt;
use core::str::FromStr;

/// Platforms the demo ships native libraries and keyword files for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    Linux,
    Mac,
    Windows,
    RaspberryPi,
    Jetson,
    Beaglebone,
}

impl Platform {
    /// Name used in resource directories and file suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::RaspberryPi => "raspberry-pi",
            Platform::Jetson => "jetson",
            Platform::Beaglebone => "beaglebone",
        }
    }

    /// Shared library extension.
    pub fn lib_ext(&self) -> &'static str {
        match self {
            Platform::Windows => "dll",
            Platform::Mac => "dylib",
            _ => "so",
        }
    }
}

impl FromStr for Platform {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Platform::Linux),
            "mac" => Ok(Platform::Mac),
            "windows" => Ok(Platform::Windows),
            "raspberry-pi" => Ok(Platform::RaspberryPi),
            "jetson" => Ok(Platform::Jetson),
            "beaglebone" => Ok(Platform::Beaglebone),
            other => Err(HarnessError::UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
