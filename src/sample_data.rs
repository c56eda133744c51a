//! Built-in dataset the registry is seeded with on startup and on every reload.

use crate::models::{FounderInfo, StartupRecord, StartupStatus};

fn founder(
    name: &str,
    role: &str,
    linkedin: &str,
    email: &str,
    twitter: Option<&str>,
) -> FounderInfo {
    FounderInfo {
        name: name.to_string(),
        email: Some(email.to_string()),
        linkedin: Some(linkedin.to_string()),
        twitter: twitter.map(str::to_string),
        role: Some(role.to_string()),
    }
}

struct Trending<'a> {
    name: &'a str,
    description: &'a str,
    funding: &'a str,
    founders: Vec<FounderInfo>,
    industry: &'a str,
    location: Option<&'a str>,
    website: &'a str,
    date_added: &'a str,
}

impl Trending<'_> {
    fn into_record(self) -> StartupRecord {
        StartupRecord {
            name: self.name.to_string(),
            description: self.description.to_string(),
            funding_amount: Some(self.funding.to_string()),
            founders: self.founders,
            location: self.location.map(str::to_string),
            industry: Some(self.industry.to_string()),
            website: Some(self.website.to_string()),
            social_links: None,
            date_added: self.date_added.to_string(),
            source: "TechCrunch".to_string(),
            status: StartupStatus::Trending,
            reason: None,
        }
    }
}

struct Failed<'a> {
    name: &'a str,
    description: &'a str,
    funding: Option<&'a str>,
    founders: &'a [&'a str],
    industry: &'a str,
    location: &'a str,
    website: Option<&'a str>,
    date_added: &'a str,
    source: &'a str,
    reason: &'a str,
}

impl Failed<'_> {
    fn into_record(self) -> StartupRecord {
        StartupRecord {
            name: self.name.to_string(),
            description: self.description.to_string(),
            funding_amount: self.funding.map(str::to_string),
            founders: self.founders.iter().map(|n| FounderInfo::named(*n)).collect(),
            location: Some(self.location.to_string()),
            industry: Some(self.industry.to_string()),
            website: self.website.map(str::to_string),
            social_links: None,
            date_added: self.date_added.to_string(),
            source: self.source.to_string(),
            status: StartupStatus::Failed,
            reason: Some(self.reason.to_string()),
        }
    }
}

/// Recently funded startups shown in the "trending" column
pub fn trending_startups() -> Vec<StartupRecord> {
    vec![
        Trending {
            name: "Vega Security",
            description: "AI-powered cybersecurity platform that rethinks how enterprises detect cyber threats using advanced behavioral analysis",
            funding: "$120M Series B",
            founders: vec![founder(
                "Dvir Hatabi",
                "Software Engineer & Co-Founder",
                "https://linkedin.com/in/dvir-hatabi-359121233",
                "contact@vegasecurity.io",
                None,
            )],
            industry: "Cybersecurity AI",
            location: None,
            website: "https://techcrunch.com/2026/02/10/vega-raises-120m-series-b-to-rethink-how-enterprises-detect-cyber-threats/",
            date_added: "2026-02-10",
        },
        Trending {
            name: "Hauler Hero",
            description: "AI waste management software platform helping waste collection companies optimize routes and operations",
            funding: "$16M",
            founders: vec![founder(
                "CEO & Co-Founder",
                "Chief Executive Officer",
                "https://linkedin.com/company/hauler-hero",
                "hello@haulerhero.com",
                None,
            )],
            industry: "Climate Tech / AI",
            location: None,
            website: "https://techcrunch.com/2026/02/10/hauler-hero-collects-16m-for-its-ai-waste-management-software/",
            date_added: "2026-02-10",
        },
        Trending {
            name: "Entire (by former GitHub CEO)",
            description: "Developer tools platform by former GitHub CEO Thomas Dohmke, raising record seed round",
            funding: "$60M seed at $300M valuation",
            founders: vec![founder(
                "Thomas Dohmke",
                "CEO & Founder (Former GitHub CEO)",
                "https://linkedin.com/in/ashtom",
                "contact@entire.dev",
                Some("https://twitter.com/ashtom"),
            )],
            industry: "Developer Tools",
            location: None,
            website: "https://techcrunch.com/2026/02/10/former-github-ceo-raises-record-60m-dev-tool-seed-round-at-300m-valuation/",
            date_added: "2026-02-10",
        },
        Trending {
            name: "Smart Bricks",
            description: "Proptech startup revolutionizing property development and management",
            funding: "$5M pre-seed led by a16z",
            founders: vec![founder(
                "Founder & CEO",
                "Chief Executive Officer",
                "https://linkedin.com/company/smartbricks",
                "founders@smartbricks.com",
                None,
            )],
            industry: "Proptech",
            location: None,
            website: "https://techcrunch.com/2026/02/10/proptech-startup-smart-bricks-raises-5-million-pre-seed-in-round-led-by-a16z/",
            date_added: "2026-02-10",
        },
        Trending {
            name: "Gather AI",
            description: "Maker of 'curious' warehouse drones that autonomously navigate and inventory warehouses",
            funding: "$40M led by Keith Block's firm",
            founders: vec![founder(
                "Sankalp Arora",
                "CEO & Co-Founder",
                "https://linkedin.com/in/sankalparora",
                "info@gatherai.com",
                None,
            )],
            industry: "Robotics / Logistics",
            location: None,
            website: "https://techcrunch.com/2026/02/09/gather-ai-maker-of-curious-warehouse-drones-lands-40m-led-by-keith-blocks-firm/",
            date_added: "2026-02-09",
        },
        Trending {
            name: "Fundamental",
            description: "New approach to big data analysis with AI-powered analytics platform",
            funding: "$255M Series A",
            founders: vec![founder(
                "Co-Founders",
                "Founding Team",
                "https://linkedin.com/company/fundamental-ai",
                "team@fundamental.ai",
                None,
            )],
            industry: "AI / Data Analytics",
            location: None,
            website: "https://techcrunch.com/2026/02/05/fundamental-raises-255-million-series-a-with-a-new-take-on-big-data-analysis/",
            date_added: "2026-02-05",
        },
        Trending {
            name: "ElevenLabs",
            description: "AI voice synthesis and text-to-speech platform with hyper-realistic voice cloning",
            funding: "$500M from Sequoia at $11B valuation",
            founders: vec![
                founder(
                    "Mati Staniszewski",
                    "CEO & Co-Founder",
                    "https://linkedin.com/in/mati-staniszewski",
                    "contact@elevenlabs.io",
                    Some("https://twitter.com/elevenlabsio"),
                ),
                founder(
                    "Piotr Dabkowski",
                    "CTO & Co-Founder",
                    "https://linkedin.com/in/piotr-dabkowski",
                    "contact@elevenlabs.io",
                    None,
                ),
            ],
            industry: "AI / Voice Tech",
            location: None,
            website: "https://techcrunch.com/2026/02/04/elevenlabs-raises-500m-from-sequioia-at-a-11-billion-valuation/",
            date_added: "2026-02-04",
        },
        Trending {
            name: "Lunar Energy",
            description: "Home battery systems that prop up the grid during peak demand",
            funding: "$232M",
            founders: vec![founder(
                "Kunal Girotra",
                "CEO & Co-Founder",
                "https://linkedin.com/in/kunalgirotra",
                "info@lunar.energy",
                None,
            )],
            industry: "Climate Tech / Energy",
            location: None,
            website: "https://techcrunch.com/2026/02/04/lunar-energy-raises-232m-to-deploy-home-batteries-that-prop-up-the-grid/",
            date_added: "2026-02-04",
        },
        Trending {
            name: "Positron",
            description: "AI chip company taking on Nvidia with custom silicon for AI workloads",
            funding: "$230M Series B",
            founders: vec![founder(
                "Founding Team",
                "Co-Founders",
                "https://linkedin.com/company/positron-ai",
                "hello@positron.ai",
                None,
            )],
            industry: "AI Hardware / Semiconductors",
            location: None,
            website: "https://techcrunch.com/2026/02/04/exclusive-positron-raises-230m-series-b-to-take-on-nvidias-ai-chips/",
            date_added: "2026-02-04",
        },
        Trending {
            name: "Varaha",
            description: "Carbon removal platform scaling solutions from the Global South",
            funding: "$20M",
            founders: vec![founder(
                "Madhur Jain",
                "CEO & Co-Founder",
                "https://linkedin.com/in/madhurjain",
                "contact@varaha.com",
                None,
            )],
            industry: "Climate Tech",
            location: Some("India"),
            website: "https://techcrunch.com/2026/02/03/indias-varaha-bags-20m-to-scale-carbon-removal-from-the-global-south/",
            date_added: "2026-02-03",
        },
    ]
    .into_iter()
    .map(Trending::into_record)
    .collect()
}

/// Shutdowns and fire sales shown in the "failed" column
pub fn failed_startups() -> Vec<StartupRecord> {
    vec![
        Failed {
            name: "Getir (Delivery Arm)",
            description: "Turkish quick-commerce delivery startup that pioneered ultrafast grocery delivery",
            funding: None,
            founders: &[],
            industry: "E-commerce / Delivery",
            location: "Turkey",
            website: Some("https://techcrunch.com/2026/02/09/uber-to-buy-delivery-arm-of-turkeys-getir/"),
            date_added: "2026-02-09",
            source: "TechCrunch",
            reason: "Acquired by Uber - delivery arm sold off after struggling with profitability",
        },
        Failed {
            name: "Fast",
            description: "One-click checkout startup that raised $120M+ before shutting down",
            funding: Some("$120M+ raised"),
            founders: &[],
            industry: "Fintech / E-commerce",
            location: "San Francisco",
            website: None,
            date_added: "2022-04-05",
            source: "Startup Autopsy Database",
            reason: "Burned through cash too quickly, struggled to achieve product-market fit",
        },
        Failed {
            name: "Quibi",
            description: "Mobile-first short-form video streaming platform backed by Hollywood",
            funding: Some("$1.75B raised"),
            founders: &["Jeffrey Katzenberg", "Meg Whitman"],
            industry: "Media / Entertainment",
            location: "Los Angeles",
            website: None,
            date_added: "2020-12-01",
            source: "Public Records",
            reason: "Failed to gain traction, shut down 6 months after launch despite massive funding",
        },
        Failed {
            name: "Zirtual",
            description: "Virtual assistant service connecting clients with remote executive assistants",
            funding: Some("$5.5M raised"),
            founders: &[],
            industry: "Services / SaaS",
            location: "San Francisco",
            website: None,
            date_added: "2015-08-10",
            source: "Autopsy.io",
            reason: "Misclassified workers as contractors, faced legal issues and cash flow problems",
        },
        Failed {
            name: "Theranos",
            description: "Blood testing company that claimed to revolutionize diagnostics",
            funding: Some("$700M+ raised"),
            founders: &["Elizabeth Holmes"],
            industry: "Healthcare / Biotech",
            location: "Palo Alto",
            website: None,
            date_added: "2018-09-05",
            source: "Public Records",
            reason: "Fraud - technology didn't work as claimed, founder convicted of fraud",
        },
    ]
    .into_iter()
    .map(Failed::into_record)
    .collect()
}

/// Both collections, trending first
pub fn all_startups() -> Vec<StartupRecord> {
    let mut all = trending_startups();
    all.extend(failed_startups());
    all
}
