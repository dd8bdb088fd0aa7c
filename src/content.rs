//! Portfolio content and the NPC scripts generated from it.
//!
//! All content is static and read-only. Both presentation modes read from
//! [`PORTFOLIO`]; the sandbox additionally turns each section into a
//! dialogue script through [`dialogue_script`].

use crate::entity::{NpcRecord, Section, TilePos};

/// Placeholder in a contact line, replaced by a mail link to the contact address.
pub const CLICK_TO_EMAIL: &str = "CLICK_TO_EMAIL";
/// Placeholder in a contact line, replaced by a link to the named platform.
pub const CLICK_TO_OPEN: &str = "CLICK_TO_OPEN";
pub const MAIL_ICON: &str = "📧";
pub const LINK_ICON: &str = "🔗";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Personal {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub social_links: &'static [SocialLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub short: &'static str,
    pub long: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    /// Featured projects are the ones the sandbox talks about.
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Soft,
}

impl SkillCategory {
    pub const ALL: [Self; 4] = [Self::Frontend, Self::Backend, Self::Tools, Self::Soft];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools & Technologies",
            Self::Soft => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
    /// Percentage, `1..=100`.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    Award,
    Certification,
    Milestone,
    Publication,
}

impl AchievementKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Award => "Award",
            Self::Certification => "Certification",
            Self::Milestone => "Milestone",
            Self::Publication => "Publication",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub kind: AchievementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub heading: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portfolio {
    pub personal: Personal,
    pub about: About,
    pub projects: &'static [Project],
    pub skills: &'static [Skill],
    pub achievements: &'static [Achievement],
    pub contact: Contact,
}

impl Portfolio {
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Exact, case-sensitive platform lookup.
    pub fn social_link(&self, platform: &str) -> Option<&SocialLink> {
        self.personal
            .social_links
            .iter()
            .find(|link| link.platform == platform)
    }
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

pub static PORTFOLIO: Portfolio = Portfolio {
    personal: Personal {
        name: "Murali Vennapusa",
        title: "Web Developer",
        tagline: "Living in the Internet where Several Stories are told and even more being written",
        email: "muralireddyvennapusa@gmail.com",
        location: "India",
        social_links: &[
            SocialLink {
                platform: "GitHub",
                url: "https://github.com/muralivennapusa",
            },
            SocialLink {
                platform: "LinkedIn",
                url: "https://linkedin.com/in/vennapusa-murali",
            },
            SocialLink {
                platform: "Twitter",
                url: "https://twitter.com/muralireddyon",
            },
            SocialLink {
                platform: "Instagram",
                url: "https://instagram.com/muralireddyonline",
            },
            SocialLink {
                platform: "Discord",
                url: "https://discord.com/users/yourusername",
            },
            SocialLink {
                platform: "LeetCode",
                url: "https://leetcode.com/u/Murali-Cyber/",
            },
        ],
    },
    about: About {
        short: "A Web Developer, Tech Enthusiast, Creative Coder, and Expert-Level Typist.",
        long: "Living in the Internet where Several Stories are told and even more being written. \
               I code and script in Python, play high resolution games that can probably burn a \
               graphics card, and read plenty of graphic novels. I'm intrigued by tech and \
               everything to do with it and that's how I got here.",
        highlights: &[
            "Web Developer",
            "Tech Enthusiast",
            "Creative Coder",
            "Expert-Level Typist",
        ],
    },
    projects: &[
        Project {
            id: "project-1",
            title: "AETHER",
            description: "AI-Enhanced Threat Enumeration and Reconnaissance platform.",
            long_description: "AETHER is an advanced cybersecurity framework designed to automate \
                reconnaissance, threat analysis, and reporting using AI-driven workflows. It \
                integrates multiple security tools and APIs to streamline information gathering, \
                vulnerability identification, and structured analysis for ethical hacking and \
                research purposes.",
            technologies: &["Python", "Cybersecurity", "OSINT", "Automation", "RAG-LLM"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/AETHER"),
            featured: true,
        },
        Project {
            id: "project-2",
            title: "Oleo",
            description: "Lightweight web application for efficient data handling and visualization.",
            long_description: "Oleo is a lightweight and modular web application focused on \
                efficient data handling, visualization, and interaction. It emphasizes clean UI \
                design, performance optimization, and scalability, making it suitable for \
                dashboards and data-centric applications.",
            technologies: &["React", "JavaScript", "Web Development", "Data Visualization"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/Oleo"),
            featured: true,
        },
        Project {
            id: "project-3",
            title: "Unified Learning",
            description: "Centralized learning platform that combines multiple learning resources into one system.",
            long_description: "Unified Learning is a centralized education platform designed to \
                bring together multiple learning resources, tools, and content into a single \
                unified system. It aims to simplify access to educational material while \
                enhancing learning efficiency through structured organization and modern UI.",
            technologies: &["Web Development", "Education Tech", "React", "Node.js"],
            live_url: Some("https://unified-learning.vercel.app/"),
            github_url: Some("https://github.com/muralivennapusa/Unified-Learning"),
            featured: true,
        },
        Project {
            id: "project-4",
            title: "UniLang",
            description: "A multilingual NLP system that answers user queries using translation and real-time processing.",
            long_description: "UniLang is a multilingual NLP system designed to answer user \
                queries using advanced translation and real-time processing capabilities. It \
                leverages OpenAI and AIML APIs to provide accurate responses across multiple \
                languages.",
            technologies: &["NLP", "OpenAI", "Python", "AIML API", "Flask"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/UniLang"),
            featured: false,
        },
        Project {
            id: "project-5",
            title: "Mirus",
            description: "A VirusTotal-powered threat scanner that checks files and URLs for malicious indicators.",
            long_description: "Mirus is a security tool powered by the VirusTotal API that scans \
                files and URLs for potential malicious indicators. It provides comprehensive \
                threat analysis and reporting for cybersecurity purposes.",
            technologies: &["VirusTotal API", "Python"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/Mirus"),
            featured: false,
        },
        Project {
            id: "project-6",
            title: "Manga Gari",
            description: "Web scraper that extracts manga chapters and converts them to downloadable PDFs.",
            long_description: "Manga Gari is a web scraping tool that extracts manga chapters \
                from various sources and converts them into downloadable PDF format. Built with \
                Python, BeautifulSoup, and PIL for image processing.",
            technologies: &["Python", "BeautifulSoup", "PIL", "Flask"],
            live_url: Some("https://mangagari.vercel.app/"),
            github_url: None,
            featured: false,
        },
        Project {
            id: "project-7",
            title: "Project Citizen",
            description: "Cybercrime classification tool that analyzes citizen complaints using machine learning.",
            long_description: "Project Citizen is a cybercrime classification tool that leverages \
                machine learning to analyze and categorize citizen complaints. It helps law \
                enforcement agencies process and prioritize cybercrime reports efficiently.",
            technologies: &["Python", "AIML API", "Streamlit"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/Cyber-Project-v2"),
            featured: false,
        },
        Project {
            id: "project-8",
            title: "Project OnePiece",
            description: "Scrapes One Piece episode summaries and converts them into narrated audio files.",
            long_description: "Project OnePiece is a web scraping application that extracts One \
                Piece anime episode summaries and converts them into narrated audio files using \
                text-to-speech technology.",
            technologies: &["Python", "Web Scraping", "pyttsx3"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/Project-OnePiece"),
            featured: false,
        },
        Project {
            id: "project-9",
            title: "Project Emo",
            description: "Emotion analysis tool designed to assist law enforcement by providing emotional context from statements.",
            long_description: "Project Emo is an emotion analysis tool that uses NLP and \
                sentiment analysis to provide emotional context from statements. It's designed \
                to assist law enforcement agencies in understanding the emotional state of \
                individuals during investigations.",
            technologies: &["Python", "NLP", "Sentiment Analysis", "Whisper", "OpenAI"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/Emolyzer"),
            featured: false,
        },
        Project {
            id: "project-10",
            title: "Portfolio Website",
            description: "A sleek personal portfolio with dark mode and an explorable game mode.",
            long_description: "A personal portfolio with two faces: a classic scrolling page and \
                a small top-down town where each resident tells you about one part of it.",
            technologies: &["Rust", "egui", "WebAssembly"],
            live_url: None,
            github_url: Some("https://github.com/muralivennapusa/portfolio"),
            featured: false,
        },
        Project {
            id: "project-11",
            title: "Fav Chars",
            description: "Tribute site to my favorite anime and fictional characters with interactive UI.",
            long_description: "Fav Chars is a tribute website showcasing favorite anime and \
                fictional characters with an interactive user interface and custom loading \
                animations.",
            technologies: &["React", "Vite", "Custom Loader"],
            live_url: Some("https://fav-chars.vercel.app"),
            github_url: None,
            featured: false,
        },
    ],
    skills: &[
        Skill { id: "skill-1", name: "Python", category: SkillCategory::Backend, level: 90 },
        Skill { id: "skill-2", name: "React", category: SkillCategory::Frontend, level: 85 },
        Skill { id: "skill-3", name: "Vite", category: SkillCategory::Tools, level: 80 },
        Skill { id: "skill-4", name: "Flask", category: SkillCategory::Backend, level: 75 },
        Skill { id: "skill-5", name: "Streamlit", category: SkillCategory::Tools, level: 85 },
        Skill { id: "skill-6", name: "NLP", category: SkillCategory::Backend, level: 80 },
        Skill { id: "skill-7", name: "Web Scraping", category: SkillCategory::Backend, level: 85 },
        Skill { id: "skill-8", name: "OpenAI API", category: SkillCategory::Tools, level: 75 },
        Skill { id: "skill-9", name: "BeautifulSoup", category: SkillCategory::Backend, level: 80 },
        Skill { id: "skill-10", name: "Tailwind CSS", category: SkillCategory::Frontend, level: 85 },
        Skill { id: "skill-11", name: "VS Code", category: SkillCategory::Tools, level: 90 },
        Skill { id: "skill-12", name: "Postman", category: SkillCategory::Tools, level: 75 },
        Skill { id: "skill-13", name: "Git", category: SkillCategory::Tools, level: 80 },
        Skill { id: "skill-14", name: "Problem Solving", category: SkillCategory::Soft, level: 90 },
        Skill { id: "skill-15", name: "Creative Thinking", category: SkillCategory::Soft, level: 85 },
    ],
    achievements: &[
        Achievement {
            id: "achievement-1",
            title: "SIH 2025 Winner",
            description: "Won the Smart India Hackathon 2025 held at BPUT, Odisha for developing Oleo",
            date: "2025",
            kind: AchievementKind::Award,
        },
        Achievement {
            id: "achievement-2",
            title: "NPTEL",
            description: "Certified by NPTEL with elite certificate in Demystifying Network, \
                Systems and usable Security and Google Cloud Programming",
            date: "2023-2024",
            kind: AchievementKind::Certification,
        },
        Achievement {
            id: "achievement-3",
            title: "Typeracer",
            description: "Acquired \"Megaracer\" rank in typeracer with a WPM% of 96.3 percentile",
            date: "2024",
            kind: AchievementKind::Milestone,
        },
    ],
    contact: Contact {
        heading: "Trails of Me",
        description: "I'm always interested in hearing about new projects and opportunities. \
            Whether you have a question or just want to say hi, feel free to reach out!",
        email: "muralireddyvennapusa@gmail.com",
        availability: "Currently available for new projects and collaborations",
    },
};

// ---------------------------------------------------------------------------
// Scripts and NPCs
// ---------------------------------------------------------------------------

/// What the NPC for `section` says, line by line.
pub fn dialogue_script(section: Section, portfolio: &Portfolio) -> Vec<String> {
    let name = portfolio.personal.name;
    match section {
        Section::About => vec![
            "Hello there! Welcome to the world of development!".to_owned(),
            format!("Let me tell you about {name}..."),
            format!("{} {}", portfolio.about.short, portfolio.personal.tagline),
            "You can find their contact by asking the other Professor.".to_owned(),
            "And that's all about them! Come back anytime you want to learn more!".to_owned(),
        ],
        Section::Projects => {
            let mut lines = vec![
                "Ahoy! Welcome to the Project Harbor!".to_owned(),
                format!("Here you'll find the featured creations done by {name}. Let me tell you about each one..."),
            ];
            lines.extend(portfolio.featured_projects().map(|p| {
                format!(
                    "{} : {} Built with: {}",
                    p.title,
                    p.description,
                    p.technologies.join(", ")
                )
            }));
            lines.push("And that's the featured fleet! Projects ready to set sail! Anchors aweigh!".to_owned());
            lines
        }
        Section::Skills => vec![
            format!("So, you want to know about {name}'s skills?"),
            "The techniques mastered by him are many... Let me break them down for you!".to_owned(),
            "Press K to view the skills in detail, it reads much better there.".to_owned(),
            "That's his skill set! A true champion never stops training!".to_owned(),
        ],
        Section::Achievements => {
            let mut lines = vec![
                format!("I'm Just an Old-Timer who knows about {name}'s achievements ..."),
                "His accomplishments are legendary! Let me tell you about each one...".to_owned(),
            ];
            lines.extend(
                portfolio
                    .achievements
                    .iter()
                    .map(|a| format!("{} : {}", a.title, a.description)),
            );
            lines.push(
                "And not bad for a youngster, eh?\nBack in my day, we had to walk uphill both ways to code!"
                    .to_owned(),
            );
            lines
        }
        Section::Contact => {
            let mut lines = vec![
                "Greetings, young trainer!".to_owned(),
                "Want to get in touch with the developer? Here's how you can reach them...".to_owned(),
                format!("{MAIL_ICON} Email: {CLICK_TO_EMAIL}"),
            ];
            lines.extend(
                portfolio
                    .personal
                    .social_links
                    .iter()
                    .map(|link| format!("{LINK_ICON} {}: {CLICK_TO_OPEN}", link.platform)),
            );
            lines.push(portfolio.contact.availability.to_owned());
            lines.push("He is Always open to connect with fellow developers and enthusiasts!".to_owned());
            lines.push(
                "That's all the contact info! Now go forth and connect! Your Pokédex... I mean, portfolio journey awaits!"
                    .to_owned(),
            );
            lines
        }
    }
}

struct Placement {
    id: &'static str,
    name: &'static str,
    section: Section,
    tile: TilePos,
    detail_title: &'static str,
}

const PLACEMENTS: [Placement; 5] = [
    Placement {
        id: "npc-about",
        name: "Prof. Oak",
        section: Section::About,
        tile: TilePos::new(13, 6),
        detail_title: "About Me",
    },
    Placement {
        id: "npc-projects",
        name: "Captain",
        section: Section::Projects,
        tile: TilePos::new(4, 6),
        detail_title: "My Projects",
    },
    Placement {
        id: "npc-skills",
        name: "Champion",
        section: Section::Skills,
        tile: TilePos::new(10, 2),
        detail_title: "Skills & Expertise",
    },
    Placement {
        id: "npc-achievements",
        name: "Old Man",
        section: Section::Achievements,
        tile: TilePos::new(15, 9),
        detail_title: "Achievements",
    },
    Placement {
        id: "npc-contact",
        name: "Professor",
        section: Section::Contact,
        tile: TilePos::new(8, 11),
        detail_title: "Get In Touch",
    },
];

/// The town's residents, one per section, in registration order.
pub fn town_npcs(portfolio: &Portfolio) -> Vec<NpcRecord> {
    PLACEMENTS
        .iter()
        .map(|p| NpcRecord {
            id: p.id.to_owned(),
            name: p.name.to_owned(),
            section: p.section,
            tile: p.tile,
            dialogue: dialogue_script(p.section, portfolio),
            detail_title: p.detail_title.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_projects_are_the_first_three() {
        let titles: Vec<_> = PORTFOLIO.featured_projects().map(|p| p.title).collect();
        assert_eq!(titles, vec!["AETHER", "Oleo", "Unified Learning"]);
    }

    #[test]
    fn social_link_lookup_is_exact() {
        assert_eq!(
            PORTFOLIO.social_link("GitHub").map(|l| l.url),
            Some("https://github.com/muralivennapusa")
        );
        assert!(PORTFOLIO.social_link("github").is_none());
        assert!(PORTFOLIO.social_link("Mastodon").is_none());
    }

    #[test]
    fn every_skill_has_a_sane_level() {
        for skill in PORTFOLIO.skills {
            assert!((1..=100).contains(&skill.level), "{}", skill.name);
        }
        let grouped: usize = SkillCategory::ALL
            .iter()
            .map(|c| PORTFOLIO.skills_in(*c).count())
            .sum();
        assert_eq!(grouped, PORTFOLIO.skills.len());
    }

    // -- scripts -------------------------------------------------------------

    #[test]
    fn every_section_has_a_script() {
        for section in Section::ALL {
            assert!(!dialogue_script(section, &PORTFOLIO).is_empty(), "{section:?}");
        }
    }

    #[test]
    fn project_script_mentions_only_featured_projects() {
        let script = dialogue_script(Section::Projects, &PORTFOLIO);
        assert_eq!(script.len(), 2 + 3 + 1);
        assert!(script.iter().any(|l| l.starts_with("Oleo : ")));
        assert!(!script.iter().any(|l| l.contains("Mirus")));
    }

    #[test]
    fn contact_script_carries_placeholders() {
        let script = dialogue_script(Section::Contact, &PORTFOLIO);
        let mail: Vec<_> = script.iter().filter(|l| l.contains(CLICK_TO_EMAIL)).collect();
        assert_eq!(mail, vec!["📧 Email: CLICK_TO_EMAIL"]);
        let links = script.iter().filter(|l| l.contains(CLICK_TO_OPEN)).count();
        assert_eq!(links, PORTFOLIO.personal.social_links.len());
        assert!(script.contains(&"🔗 LeetCode: CLICK_TO_OPEN".to_owned()));
        // The raw address is never spelled out in dialogue.
        assert!(!script.iter().any(|l| l.contains(PORTFOLIO.contact.email)));
    }

    #[test]
    fn achievements_script_lists_each_one() {
        let script = dialogue_script(Section::Achievements, &PORTFOLIO);
        assert_eq!(script.len(), 2 + PORTFOLIO.achievements.len() + 1);
    }

    // -- npcs ----------------------------------------------------------------

    #[test]
    fn town_npcs_are_placed_as_authored() {
        let npcs = town_npcs(&PORTFOLIO);
        let placed: Vec<_> = npcs.iter().map(|n| (n.id.as_str(), n.tile)).collect();
        assert_eq!(
            placed,
            vec![
                ("npc-about", TilePos::new(13, 6)),
                ("npc-projects", TilePos::new(4, 6)),
                ("npc-skills", TilePos::new(10, 2)),
                ("npc-achievements", TilePos::new(15, 9)),
                ("npc-contact", TilePos::new(8, 11)),
            ]
        );
        for npc in &npcs {
            assert_eq!(npc.dialogue, dialogue_script(npc.section, &PORTFOLIO));
        }
    }
}
