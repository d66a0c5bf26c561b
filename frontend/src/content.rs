//! Copy and figures shown on the landing page.

pub const TOKEN_NAME: &str = "Salmoon";
pub const TOKEN_SYMBOL: &str = "$SALMO";
pub const TOTAL_SUPPLY: u64 = 1_000_000_000;

pub const TWITTER_URL: &str = "https://x.com/zenjoee";
pub const TELEGRAM_URL: &str = "https://t.me/airdroplim";
pub const DISCORD_URL: &str = "https://discord.com/";
pub const MEDIUM_URL: &str = "https://medium.com/@zenjoee";

pub const WHITEPAPER_URL: &str = "/bitcoin.pdf";
pub const DISCLAIMER_URL: &str = "/disclaimer.pdf";

/// In-page anchors, in nav order.
pub static SECTIONS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Tokenomics", "#tokenomics"),
    ("Roadmap", "#roadmap"),
    ("Community", "#community"),
];

pub struct Feature {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "🌊",
        accent: "blue",
        title: "Upstream Innovation",
        body: "Just like salmon swimming upstream, we're persistent in creating innovative DeFi solutions for our community.",
    },
    Feature {
        icon: "🌙",
        accent: "purple",
        title: "Lunar Destination",
        body: "We're not just another fish in the sea - we're a salmon aiming for the moon with ambitious growth goals.",
    },
    Feature {
        icon: "🌐",
        accent: "green",
        title: "Ocean Community",
        body: "Join our school of crypto enthusiasts and swim together in the vast ocean of decentralized finance.",
    },
];

pub struct Allocation {
    pub label: &'static str,
    pub percent: u32,
    pub rgb: (u8, u8, u8),
}

impl Allocation {
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

pub static ALLOCATIONS: [Allocation; 5] = [
    Allocation { label: "Presale Allocation", percent: 40, rgb: (59, 130, 246) },
    Allocation { label: "Liquidity Pool", percent: 30, rgb: (139, 92, 246) },
    Allocation { label: "Team & Development", percent: 15, rgb: (96, 165, 250) },
    Allocation { label: "Marketing", percent: 10, rgb: (192, 132, 252) },
    Allocation { label: "Community Rewards", percent: 5, rgb: (34, 197, 94) },
];

/// `1000000000` -> `1,000,000,000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Done,
    InProgress,
    Planned,
}

impl MilestoneStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            MilestoneStatus::Done => "✓",
            MilestoneStatus::InProgress => "⟳",
            MilestoneStatus::Planned => "○",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            MilestoneStatus::Done => "milestone-done",
            MilestoneStatus::InProgress => "milestone-in-progress",
            MilestoneStatus::Planned => "milestone-planned",
        }
    }
}

pub struct Phase {
    pub title: &'static str,
    pub quarter: &'static str,
    pub milestones: [(&'static str, MilestoneStatus); 3],
}

pub static ROADMAP: [Phase; 4] = [
    Phase {
        title: "Phase 1: Spawning",
        quarter: "Q2 2025",
        milestones: [
            ("Website and social media launch", MilestoneStatus::Done),
            ("Community building", MilestoneStatus::Done),
            ("Smart contract development", MilestoneStatus::InProgress),
        ],
    },
    Phase {
        title: "Phase 2: Swimming Upstream",
        quarter: "Q3 2025",
        milestones: [
            ("Token presale", MilestoneStatus::InProgress),
            ("DEX listing", MilestoneStatus::Planned),
            ("Marketing campaign", MilestoneStatus::Planned),
        ],
    },
    Phase {
        title: "Phase 3: Reaching the Ocean",
        quarter: "Q4 2025",
        milestones: [
            ("CEX listings", MilestoneStatus::Planned),
            ("NFT collection launch", MilestoneStatus::Planned),
            ("Cross-chain bridge", MilestoneStatus::Planned),
        ],
    },
    Phase {
        title: "Phase 4: To the Moon",
        quarter: "Q1 2026",
        milestones: [
            ("Salmoon DApp ecosystem", MilestoneStatus::Planned),
            ("Governance implementation", MilestoneStatus::Planned),
            ("Global partnership announcements", MilestoneStatus::Planned),
        ],
    },
];

pub struct Platform {
    pub name: &'static str,
    pub short: &'static str,
    pub url: &'static str,
}

pub static PLATFORMS: [Platform; 4] = [
    Platform { name: "Twitter", short: "T", url: TWITTER_URL },
    Platform { name: "Telegram", short: "TG", url: TELEGRAM_URL },
    Platform { name: "Discord", short: "D", url: DISCORD_URL },
    Platform { name: "Medium", short: "M", url: MEDIUM_URL },
];

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: [(&'static str, &'static str); 3],
}

pub static FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "About",
        links: [
            ("Our Story", WHITEPAPER_URL),
            ("Team", WHITEPAPER_URL),
            ("Careers", WHITEPAPER_URL),
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: [
            ("Whitepaper", WHITEPAPER_URL),
            ("Documentation", WHITEPAPER_URL),
            ("Media Kit", WHITEPAPER_URL),
        ],
    },
    FooterColumn {
        heading: "Community",
        links: [
            ("Twitter", TWITTER_URL),
            ("Telegram", "https://t.me/whalevomitcalls"),
            ("Discord", DISCORD_URL),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: [
            ("Privacy Policy", DISCLAIMER_URL),
            ("Terms of Service", DISCLAIMER_URL),
            ("Cookie Policy", DISCLAIMER_URL),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_cover_the_whole_supply() {
        let total: u32 = ALLOCATIONS.iter().map(|a| a.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn allocation_colors_render_as_hex() {
        assert_eq!(ALLOCATIONS[0].hex(), "#3b82f6");
        assert_eq!(ALLOCATIONS[4].hex(), "#22c55e");
    }

    #[test]
    fn supply_is_grouped() {
        assert_eq!(group_thousands(TOTAL_SUPPLY), "1,000,000,000");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(0), "0");
    }

    #[test]
    fn every_platform_has_its_own_link() {
        for (i, a) in PLATFORMS.iter().enumerate() {
            assert!(a.url.starts_with("https://"));
            for b in PLATFORMS.iter().skip(i + 1) {
                assert_ne!(a.url, b.url, "{} and {} share a link", a.name, b.name);
            }
        }
    }

    #[test]
    fn nav_anchors_point_at_sections() {
        for (label, href) in SECTIONS {
            assert_eq!(href, format!("#{}", label.to_lowercase()));
        }
    }
}
