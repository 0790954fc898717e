use std::fmt;

/// Upstream services the hub relays to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Users,
    Weather,
    News,
    Images,
    TikTok,
    YouTube,
    Instagram,
    Twitter,
}

impl Provider {
    pub const ALL: [Self; 8] = [
        Self::Users,
        Self::Weather,
        Self::News,
        Self::Images,
        Self::TikTok,
        Self::YouTube,
        Self::Instagram,
        Self::Twitter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Weather => "weather",
            Self::News => "news",
            Self::Images => "images",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
        }
    }

    /// Body text returned to clients when this provider's route fails.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Users => "Error fetching users",
            Self::Weather => "Error fetching weather data",
            Self::News => "Error fetching news",
            Self::Images => "Error fetching images",
            Self::TikTok => "Error fetching TikTok videos",
            Self::YouTube => "Error searching YouTube",
            Self::Instagram => "Error fetching Instagram media",
            Self::Twitter => "Error fetching Twitter timeline",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
