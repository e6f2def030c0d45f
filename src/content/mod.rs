//! Static catalog for the buying guide page.
//!
//! Everything here is plain data consumed by the views: section metadata for
//! navigation, table rows, bullet lists, FAQ entries, and the illustrative
//! cost figures. None of it feeds the recommendation engine.

/// Sections of the guide page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Intro,
    Glance,
    Why,
    Definitions,
    Comparison,
    CapacityCost,
    Reliability,
    DataRecovery,
    Durability,
    Quiz,
    Laptop,
    ProsCons,
    UseCases,
    Brand,
    CapacityInfographic,
    Conclusion,
    Faqs,
    References,
    LearnMore,
}

impl Section {
    pub const ALL: [Section; 19] = [
        Section::Intro,
        Section::Glance,
        Section::Why,
        Section::Definitions,
        Section::Comparison,
        Section::CapacityCost,
        Section::Reliability,
        Section::DataRecovery,
        Section::Durability,
        Section::Quiz,
        Section::Laptop,
        Section::ProsCons,
        Section::UseCases,
        Section::Brand,
        Section::CapacityInfographic,
        Section::Conclusion,
        Section::Faqs,
        Section::References,
        Section::LearnMore,
    ];

    /// Stable identifier, also accepted by the `--section` CLI flag.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Glance => "glance",
            Section::Why => "why",
            Section::Definitions => "defs",
            Section::Comparison => "comparison",
            Section::CapacityCost => "capacity-cost",
            Section::Reliability => "reliability",
            Section::DataRecovery => "data-recovery",
            Section::Durability => "durability",
            Section::Quiz => "quiz",
            Section::Laptop => "laptop",
            Section::ProsCons => "pros-cons",
            Section::UseCases => "use-cases",
            Section::Brand => "brand",
            Section::CapacityInfographic => "capacity-infographic",
            Section::Conclusion => "conclusion",
            Section::Faqs => "faqs",
            Section::References => "references",
            Section::LearnMore => "learn-more",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }

    /// Label shown in the navigation bar; sections without one are reachable
    /// only by scrolling.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Section::Glance => Some("Compare"),
            Section::Why => Some("Why it matters"),
            Section::Definitions => Some("HDD & SSD"),
            Section::Comparison => Some("Comparison"),
            Section::CapacityCost => Some("Capacity & Cost"),
            Section::Reliability => Some("Reliability"),
            Section::DataRecovery => Some("Data Recovery"),
            Section::Durability => Some("Durability"),
            Section::Quiz => Some("Quiz"),
            Section::UseCases => Some("Use Cases"),
            Section::Faqs => Some("FAQs"),
            Section::References => Some("References"),
            _ => None,
        }
    }
}

pub const PAGE_TITLE: &str = "SSD vs HDD: Which Storage is Right for You?";
pub const PAGE_TAGLINE: &str = "HDD vs. SSD: How to Choose the Right Drive for Your Data";
pub const PAGE_INTRO: &str = "Choosing the right storage drive is one of the most important \
decisions you'll make for your computer. The SSD vs HDD debate affects everything from \
startup speed to reliability. Looking for lightning-fast performance or maximum capacity \
on a budget? This guide makes the trade-offs clear so you can pick with confidence.";

/// One row of a factor-by-factor SSD/HDD table.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRow {
    pub factor: &'static str,
    pub ssd: &'static str,
    pub hdd: &'static str,
}

/// The at-a-glance table near the top of the page.
pub const GLANCE_ROWS: [ComparisonRow; 5] = [
    ComparisonRow {
        factor: "Speed/Latency",
        ssd: "Winner",
        hdd: "-",
    },
    ComparisonRow {
        factor: "Capacity per Drive",
        ssd: "-",
        hdd: "Winner (10-20+ TB)",
    },
    ComparisonRow {
        factor: "Cost per GB",
        ssd: "-",
        hdd: "Winner",
    },
    ComparisonRow {
        factor: "Data Recovery Pathways",
        ssd: "More complex",
        hdd: "Mature ecosystem",
    },
    ComparisonRow {
        factor: "Best For",
        ssd: "OS/apps, active projects",
        hdd: "Libraries, backups, NAS, surveillance, scale",
    },
];

/// Stat tiles rendered beside the glance table.
pub const GLANCE_STATS: [(&str, &str); 3] = [
    ("Speed", "SSD boots in seconds"),
    ("Capacity", "HDD up to 22TB+"),
    ("Value", "Lowest $/GB = HDD"),
];

/// The long-form comparison table further down the page.
pub const COMPARISON_ROWS: [ComparisonRow; 4] = [
    ComparisonRow {
        factor: "Speed & Performance",
        ssd: "Boot/app load speed",
        hdd: "Great for large libraries, streaming",
    },
    ComparisonRow {
        factor: "Capacity per Drive",
        ssd: "-",
        hdd: "10-20+ TB options",
    },
    ComparisonRow {
        factor: "Cost per GB",
        ssd: "Higher",
        hdd: "Lower",
    },
    ComparisonRow {
        factor: "Recovery",
        ssd: "Complex when controller fails",
        hdd: "Mature services exist",
    },
];

/// Illustrative relative cost of a drive at a capacity point, on a 0-100
/// scale. Pricing varies by model, region, and capacity point.
#[derive(Debug, Clone, Copy)]
pub struct CostPoint {
    pub capacity_tb: f64,
    pub ssd_relative: f64,
    pub hdd_relative: f64,
}

pub const COST_CURVE: [CostPoint; 3] = [
    CostPoint {
        capacity_tb: 4.0,
        ssd_relative: 80.0,
        hdd_relative: 35.0,
    },
    CostPoint {
        capacity_tb: 8.0,
        ssd_relative: 85.0,
        hdd_relative: 30.0,
    },
    CostPoint {
        capacity_tb: 16.0,
        ssd_relative: 90.0,
        hdd_relative: 25.0,
    },
];

/// A labelled bullet: bold lead-in plus body text.
pub type Bullet = (&'static str, &'static str);

pub const WHY_BULLETS: [Bullet; 3] = [
    ("Speed for tasks.", "Keep your OS and apps snappy."),
    (
        "Capacity for life.",
        "Store years of photos, videos, and games.",
    ),
    (
        "Value for budget.",
        "Maximize space without overspending.",
    ),
];

pub const HDD_DEFINITION: &str = "A hard disk drive is the proven workhorse of storage: \
spinning platters store your data while a moving head reads and writes. Perfected over \
decades for reliability and capacity, HDDs are the backbone for data centers, creative \
studios, and home libraries.";

pub const SSD_DEFINITION: &str = "A solid state drive stores data in flash memory with no \
moving parts. Benefits include rapid access times, silent operation, and low latency, \
which is excellent for operating systems, apps, and active projects. HDDs still lead for \
large-scale, cost-efficient storage.";

pub const CAPACITY_COST_BULLETS: [Bullet; 3] = [
    (
        "Cost curve:",
        "SSD $/GB rises sharply above 4TB; HDD remains economical up to 20TB+.",
    ),
    (
        "Workload fit:",
        "SSD for frequent random I/O; HDD for sequential media & archives.",
    ),
    (
        "Practical pick:",
        "Hybrid: OS on SSD, libraries/backups on HDD.",
    ),
];

pub const RELIABILITY_BULLETS: [Bullet; 3] = [
    (
        "HDD:",
        "Mature tech with predictable failure modes (MTBF). Often shows early warnings \
         (SMART, bad sectors).",
    ),
    (
        "SSD:",
        "Finite write endurance (TBW). Controller/firmware faults may be abrupt and \
         unrecoverable.",
    ),
    (
        "Best practice:",
        "Monitor SMART, keep firmware current, and maintain backups regardless of drive type.",
    ),
];

pub const DATA_RECOVERY_BULLETS: [Bullet; 3] = [
    (
        "HDD:",
        "Multiple professional recovery paths (head swap, platter transplant, firmware service).",
    ),
    (
        "SSD:",
        "Controller failures and wear-leveling can complicate or prevent recovery.",
    ),
    (
        "Plan:",
        "Back up proactively; recovery should be last resort.",
    ),
];

pub const DURABILITY_BULLETS: [Bullet; 3] = [
    (
        "SSD:",
        "No moving parts, strong shock resistance, ideal for laptops and mobile workflows.",
    ),
    (
        "HDD:",
        "For stationary desktops/NAS, mechanical nature is a non-issue; value & capacity dominate.",
    ),
    (
        "Tip:",
        "Use proper mounting and avoid movement while powered.",
    ),
];

pub const LAPTOP_GUIDANCE: &str = "Most laptops use internal SSDs for responsiveness, but \
often with limited capacity. Pair with a high-capacity, portable external HDD to store \
large libraries and backups.";

/// Pros and trade-offs for one drive family.
#[derive(Debug, Clone, Copy)]
pub struct ProsCons {
    pub name: &'static str,
    pub pros: [&'static str; 3],
    pub trade_offs: &'static str,
}

pub const SSD_PROS_CONS: ProsCons = ProsCons {
    name: "SSD",
    pros: [
        "Speedy boots and loads",
        "Silent, low power, no moving parts",
        "Great for OS/apps and active projects",
    ],
    trade_offs: "higher cost/GB, finite write cycles (TBW), controller failures can be abrupt.",
};

pub const HDD_PROS_CONS: ProsCons = ProsCons {
    name: "HDD",
    pros: [
        "Massive capacities (10-20+ TB)",
        "Best $/GB for libraries and backups",
        "Mature data recovery ecosystem",
    ],
    trade_offs: "slower seeks/latency, mechanical wear, audible noise, higher power draw.",
};

/// One audience-specific guidance block.
#[derive(Debug, Clone, Copy)]
pub struct UseCase {
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [Bullet],
}

pub const USE_CASES: [UseCase; 5] = [
    UseCase {
        title: "For Gamers",
        summary: "Balance speed with space so you can play more and shuffle less.",
        bullets: &[
            (
                "SSD:",
                "Install your OS and the 3-5 titles you play most for instant level loads.",
            ),
            (
                "HDD:",
                "Keep the rest of your Steam/Epic library ready without constant uninstalls.",
            ),
            (
                "Hybrid tip:",
                "Move games between drives using the launcher to avoid re-downloads.",
            ),
        ],
    },
    UseCase {
        title: "For Content Creators",
        summary: "Keep active timelines fast while controlling storage costs on large media.",
        bullets: &[
            ("SSD:", "Use as a scratch/work drive for current edits and exports."),
            (
                "HDD:",
                "Archive raw footage, proxies, and completed projects at scale.",
            ),
            (
                "Workflow:",
                "SSD (working set) to HDD (archive) to cloud/off-site (backup).",
            ),
        ],
    },
    UseCase {
        title: "For Families & Everyday Use",
        summary: "Make space for years of photos, school projects, and home videos without \
                  slowing your PC.",
        bullets: &[
            ("SSD:", "Speed up an older laptop for day-to-day responsiveness."),
            ("HDD:", "Store the growing photo/video library affordably."),
            ("Backup rule:", "Follow 3-2-1: 3 copies, 2 media, 1 off-site."),
        ],
    },
    UseCase {
        title: "For NAS & Home Servers",
        summary: "Build a personal cloud that balances capacity and responsiveness.",
        bullets: &[
            (
                "HDD:",
                "Purpose-built for multi-drive, 24/7 environments; best for bulk media and backups.",
            ),
            ("SSD:", "Use for cache tiers, metadata, or light VM workloads."),
            ("Practice:", "Plan RAID + backups; test restore regularly."),
        ],
    },
    UseCase {
        title: "The Hybrid Approach: Using Both SSD and HDD",
        summary: "Get speed where it's felt and space where it's needed; this is the most \
                  common, cost-effective setup.",
        bullets: &[
            ("SSD:", "Your OS & apps on an SSD (250GB-1TB) for responsiveness."),
            (
                "HDD:",
                "Your life on an HDD: photos, videos, games, archives, so you never run out \
                 of space.",
            ),
        ],
    },
];

/// A reason to trust established drive makers.
#[derive(Debug, Clone, Copy)]
pub struct TrustPoint {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const TRUST_POINTS: [TrustPoint; 4] = [
    TrustPoint {
        title: "Reliability",
        blurb: "Decades of proven performance across consumer and enterprise.",
    },
    TrustPoint {
        title: "Innovation",
        blurb: "Continuous R&D pushes capacity and endurance forward.",
    },
    TrustPoint {
        title: "Global Scale",
        blurb: "Trusted worldwide for personal and business storage.",
    },
    TrustPoint {
        title: "Support",
        blurb: "Documentation and service when you need it.",
    },
];

/// What an 18TB drive holds, illustratively.
pub const CAPACITY_STATS: [(&str, &str); 3] = [
    ("4,500+", "hours of HD video"),
    ("3.6M+", "photos (at 5MB each)"),
    ("~12,000", "indie games (~1.5GB each)"),
];

pub const CONCLUSION: &str = "There's no single \"best\" drive for every task. Use the right \
tool for the job: SSDs for operating systems and active workloads, HDDs for affordable, \
scalable capacity. The most common, and smartest, setup is a hybrid that delivers speed \
where it's felt and space where it's needed.";

/// One FAQ entry rendered as an expandable row.
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "What lasts longer HDD or SSD?",
        answer: "HDDs have predictable, mechanical wear and published MTBF figures; SSDs have \
                 finite write endurance (TBW) and can fail without warning. With backups, both \
                 can serve for years; choose based on workload and capacity needs.",
    },
    Faq {
        question: "Is HDD worth it over SSD?",
        answer: "For multi-terabyte libraries and backups, HDDs offer unmatched value per \
                 gigabyte. SSDs are ideal where speed is the top priority.",
    },
    Faq {
        question: "Should I buy an external SSD or HDD?",
        answer: "Portable SSDs are great for speed-sensitive workflows; portable HDDs maximize \
                 capacity and value for media libraries and backups.",
    },
    Faq {
        question: "Can you have both an SSD and HDD?",
        answer: "Absolutely. Many users boot from an SSD and store large files on a \
                 high-capacity HDD for the best mix of performance and cost.",
    },
    Faq {
        question: "Is it better to store photos on SSD or HDD?",
        answer: "For active editing, SSD scratch space helps. For archiving large photo \
                 libraries, HDDs provide exceptional capacity-per-dollar. Always back up.",
    },
    Faq {
        question: "What's the hybrid setup you recommend?",
        answer: "SSD (250GB-1TB) for OS/apps + large HDD for media, projects, and backups.",
    },
];

pub const METHODOLOGY: &str = "Comparisons reflect common workloads (OS boot, app loads, \
large-file storage), typical capacity points (1-20TB), and prevailing market cost bands at \
time of writing. Consult drive spec sheets and independent benchmarks for exact figures.";

pub const METHODOLOGY_NOTES: [&str; 2] = [
    "Refer to spec sheets, whitepapers, and product pages for TBW/MTBF and performance profiles.",
    "Cross-reference independent benchmarks where applicable.",
];

pub const DISCLAIMER: &str = "Disclaimers: Results vary by configuration and workload. \
Performance and endurance depend on model, capacity, environment, and use.";

/// External further-reading links.
pub const LEARN_MORE_LINKS: [(&str, &str); 6] = [
    (
        "Network Attached Storage",
        "https://www.westerndigital.com/solutions/network-attached-storage",
    ),
    (
        "Home Backup Solutions",
        "https://www.westerndigital.com/solutions/home-backup-solutions",
    ),
    ("Gaming", "https://www.westerndigital.com/solutions/gaming"),
    (
        "Creative Professionals",
        "https://www.westerndigital.com/solutions/creative-professionals",
    ),
    ("RAID", "https://www.westerndigital.com/solutions/raid"),
    (
        "Surveillance",
        "https://www.westerndigital.com/solutions/surveillance",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_sections_have_unique_anchors() {
        let anchors: HashSet<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("not-a-section"), None);
    }

    #[test]
    fn test_nav_covers_the_main_sections() {
        let nav_count = Section::ALL.iter().filter(|s| s.nav_label().is_some()).count();
        assert_eq!(nav_count, 12);
        assert!(Section::Quiz.nav_label().is_some());
        assert!(Section::Intro.nav_label().is_none());
    }

    #[test]
    fn test_use_case_coverage() {
        // One guidance block per audience, each with actionable bullets
        assert!(USE_CASES.len() >= 4);
        for use_case in USE_CASES {
            assert!(!use_case.title.is_empty());
            assert!(!use_case.bullets.is_empty());
        }
    }

    #[test]
    fn test_faq_entries_are_complete() {
        for faq in FAQS {
            assert!(faq.question.ends_with('?'));
            assert!(!faq.answer.is_empty());
        }
    }

    #[test]
    fn test_cost_curve_is_ordered_and_in_range() {
        let mut last_capacity = 0.0;
        for point in COST_CURVE {
            assert!(point.capacity_tb > last_capacity);
            last_capacity = point.capacity_tb;
            assert!((0.0..=100.0).contains(&point.ssd_relative));
            assert!((0.0..=100.0).contains(&point.hdd_relative));
            // The illustrative data keeps HDD cheaper per GB at every point
            assert!(point.hdd_relative < point.ssd_relative);
        }
    }
}
