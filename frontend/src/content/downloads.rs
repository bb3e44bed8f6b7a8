use crate::catalog::{Categorized, CategoryOption, Searchable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseChannel {
    Stable,
    Beta,
}

impl CategoryOption for ReleaseChannel {
    const ALL: &'static [Self] = &[ReleaseChannel::Stable, ReleaseChannel::Beta];

    fn slug(self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "stable",
            ReleaseChannel::Beta => "beta",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "Stable Release",
            ReleaseChannel::Beta => "Beta Version",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformKind {
    Desktop,
    Mobile,
}

impl CategoryOption for PlatformKind {
    const ALL: &'static [Self] = &[PlatformKind::Desktop, PlatformKind::Mobile];

    fn slug(self) -> &'static str {
        match self {
            PlatformKind::Desktop => "desktop",
            PlatformKind::Mobile => "mobile",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PlatformKind::Desktop => "Desktop",
            PlatformKind::Mobile => "Mobile",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformDownload {
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: PlatformKind,
    pub version: &'static str,
    pub size: &'static str,
    pub gradient: (&'static str, &'static str),
    pub requirements: &'static str,
    pub features: &'static [&'static str],
}

impl Searchable for PlatformDownload {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.requirements]
    }
}

impl Categorized for PlatformDownload {
    type Category = PlatformKind;

    fn category(&self) -> PlatformKind {
        self.kind
    }
}

pub const CURRENT_VERSION: &str = "2.1.0";

pub const PLATFORMS: &[PlatformDownload] = &[
    PlatformDownload {
        name: "Windows",
        icon: "🪟",
        kind: PlatformKind::Desktop,
        version: CURRENT_VERSION,
        size: "64.5 MB",
        gradient: ("#60a5fa", "#3b82f6"),
        requirements: "Windows 10 or later",
        features: &["Auto-updates", "Native notifications", "Windows integration"],
    },
    PlatformDownload {
        name: "macOS",
        icon: "🍎",
        kind: PlatformKind::Desktop,
        version: CURRENT_VERSION,
        size: "68.2 MB",
        gradient: ("#4b5563", "#374151"),
        requirements: "macOS 10.15 or later",
        features: &["Apple Silicon support", "Touch Bar support", "iCloud sync"],
    },
    PlatformDownload {
        name: "Linux",
        icon: "🐧",
        kind: PlatformKind::Desktop,
        version: CURRENT_VERSION,
        size: "61.8 MB",
        gradient: ("#fb923c", "#f97316"),
        requirements: "Ubuntu 20.04 or equivalent",
        features: &["AppImage format", "System tray support", "Native notifications"],
    },
    PlatformDownload {
        name: "Mobile",
        icon: "📱",
        kind: PlatformKind::Mobile,
        version: CURRENT_VERSION,
        size: "45.3 MB",
        gradient: ("#4ade80", "#22c55e"),
        requirements: "iOS 14+ / Android 8+",
        features: &["Cross-platform sync", "Offline mode", "Touch ID/Face ID"],
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct AppBenefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const APP_BENEFITS: &[AppBenefit] = &[
    AppBenefit {
        icon: "🔄",
        title: "Cross-Platform Sync",
        description: "Seamlessly sync your data across all your devices",
    },
    AppBenefit {
        icon: "🔒",
        title: "Secure & Private",
        description: "Enterprise-grade security with end-to-end encryption",
    },
    AppBenefit {
        icon: "⚡",
        title: "Regular Updates",
        description: "Get the latest features and security updates automatically",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, FilterCriteria};

    #[test]
    fn desktop_platforms_in_order() {
        let found = filter(PLATFORMS, &FilterCriteria::category(PlatformKind::Desktop));
        let names: Vec<_> = found.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Windows", "macOS", "Linux"]);
    }

    #[test]
    fn requirements_are_searchable() {
        let found = filter(PLATFORMS, &FilterCriteria::default().with_query("android"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mobile");
    }
}
