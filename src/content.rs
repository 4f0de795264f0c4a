//! Everything the page says about its owner.
//!
//! All records are `'static` and compiled in; nothing here is created or
//! mutated at runtime.

/// Glyphs used across the page. Rendered as emoji so the page carries no
/// icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Database,
    Server,
    Flask,
    Branch,
    Wrench,
    File,
    Mail,
    Phone,
    Pin,
    Languages,
    Network,
    Rocket,
    LinkedIn,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "💻",
            Icon::Database => "🗄️",
            Icon::Server => "🖧",
            Icon::Flask => "🧪",
            Icon::Branch => "🌿",
            Icon::Wrench => "🔧",
            Icon::File => "📄",
            Icon::Mail => "📧",
            Icon::Phone => "📞",
            Icon::Pin => "📍",
            Icon::Languages => "🗣️",
            Icon::Network => "🕸️",
            Icon::Rocket => "🚀",
            Icon::LinkedIn => "🔗",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub title: &'static str,
    pub age: u8,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin_url: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Dialer link; the display form keeps its spaces, the URI does not.
    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        format!("tel:{}", digits)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Mohamed Liban",
    tagline: "Junior Software Developer • .NET • React • TypeScript",
    title: "Junior .NET Developer",
    age: 29,
    location: "Gothenburg, Sweden",
    email: "Mohamedmoe@hotmail.se",
    phone: "+46 708 197 242",
    linkedin_url: "https://www.linkedin.com/in/mohamed-liban-187b77153/?originalSubdomain=se",
};

pub static INTRO: &str = "29-year-old Junior .NET Developer who recently graduated. Skilled in C#, .NET, React and TypeScript with hands-on LIA experience in ASP.NET Core, Entity Framework, Java and Python integrations. Strong background in production & quality control, structured, detail-oriented and test-focused.";

pub static PROFILE_POINTS: &[&str] = &[
    "Before tech: years in manufacturing & quality control, a foundation in structured testing and documentation.",
    "Enjoy hands-on work combining hardware & software, solving tricky problems.",
    "People-oriented mindset from youth work & project leadership.",
    "Goal: grow into a skilled Software Developer who grows together with technology.",
];

pub static ABOUT: &str = "Junior .NET Developer with strong interest in React and TypeScript. Recently graduated from a 2-year YH program with hands-on LIA in ASP.NET Core/EF, plus Java and Python integrations. I enjoy structured testing and building reliable systems.";

pub static FOCUS_POINTS: &[&str] = &[
    "Focus: .NET, React, TypeScript, SQL, testing",
    "Soft skills: teamwork, communication, problem-solving",
    "Looking for: Junior Developer / Software Developer roles",
];

#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub icon: Icon,
    pub label: &'static str,
}

pub static BADGES: &[Badge] = &[
    Badge {
        icon: Icon::Code,
        label: "C# / .NET",
    },
    Badge {
        icon: Icon::Code,
        label: "React",
    },
    Badge {
        icon: Icon::Code,
        label: "TypeScript",
    },
    Badge {
        icon: Icon::Database,
        label: "SQL / EF Core",
    },
    Badge {
        icon: Icon::Server,
        label: "APIs",
    },
    Badge {
        icon: Icon::Flask,
        label: "Testing mindset",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat {
        label: "Background",
        value: "4+ yrs production & QA",
    },
    Stat {
        label: "Studies",
        value: "2 yrs .NET / React",
    },
    Stat {
        label: "Languages",
        value: "SV • EN • SO",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub icon: Icon,
}

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming & Web",
        items: &[
            "C#, .NET Core, ASP.NET Core",
            "React, TypeScript, JavaScript",
            "HTML, CSS",
            "SQL, Entity Framework Core",
            "API development",
            "Java, Python",
        ],
        icon: Icon::Code,
    },
    SkillCategory {
        title: "Tools & Platforms",
        items: &[
            "Git & GitHub",
            "Docker (basics)",
            "CI (GitHub Actions)",
            "Azure/AWS (basics)",
            "Measurement instruments (basic)",
        ],
        icon: Icon::Wrench,
    },
    SkillCategory {
        title: "Testing & Production",
        items: &[
            "Quality control & documentation",
            "Troubleshooting & process improvement",
            "Hardware/software integration",
            "Structured test processes",
        ],
        icon: Icon::Flask,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    /// Free text, never parsed.
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Youth Worker – HVB Home",
        company: "Gothenburg",
        period: "Sep 2024 – Present",
        bullets: &[
            "Supported youths with structure, patience and problem-solving.",
            "Built strong teamwork and independent decision-making.",
        ],
    },
    ExperienceEntry {
        role: "Project Leader – TryggRätt",
        company: "Gothenburg",
        period: "Mar 2024 – Jun 2024",
        bullets: &[
            "Planned and coordinated youth safety projects with stakeholders.",
            "Developed leadership, communication and organizational skills.",
        ],
    },
    ExperienceEntry {
        role: "Machine Operator – Wellspect",
        company: "Gothenburg",
        period: "2021 – 2023",
        bullets: &[
            "Operated production equipment in cleanroom environment.",
            "Ensured documentation accuracy and process improvements.",
        ],
    },
    ExperienceEntry {
        role: "Assembler – Adient",
        company: "Gothenburg",
        period: "2015 – 2021",
        bullets: &[
            "Assembly and quality checks in automotive industry.",
            "Precision, structured testing and teamwork under pace.",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub stack: &'static [&'static str],
    pub description: &'static str,
    pub source_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

impl ProjectEntry {
    pub fn stack_line(&self) -> String {
        self.stack.join(" • ")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectGroup {
    pub heading: &'static str,
    pub projects: &'static [ProjectEntry],
}

pub static PROJECT_GROUPS: &[ProjectGroup] = &[
    ProjectGroup {
        heading: "Featured Repos",
        projects: &[
            ProjectEntry {
                name: "CleanCodeRepo",
                stack: &["C#", ".NET"],
                description: "Refactoring/clean code exercises and patterns.",
                source_url: Some("https://github.com/MohamedLiban/CleanCodeRepo"),
                demo_url: None,
            },
            ProjectEntry {
                name: "Gamification-Language",
                stack: &["JavaScript", "Web"],
                description: "Gamified language learning / webapp concept.",
                source_url: Some("https://github.com/MohamedLiban/Gamification-Language"),
                demo_url: None,
            },
        ],
    },
    ProjectGroup {
        heading: "LIA Projects",
        projects: &[
            ProjectEntry {
                name: "ASP.NET Core Webapp",
                stack: &["C#", ".NET", "EF Core", "SQL"],
                description: "Built during LIA: CRUD web app with Entity Framework, authentication and REST API.",
                source_url: None,
                demo_url: None,
            },
            ProjectEntry {
                name: "Java/Python Integrations",
                stack: &["Java", "Python"],
                description: "Backend utilities for data processing and system integrations (LIA).",
                source_url: None,
                demo_url: None,
            },
        ],
    },
    ProjectGroup {
        heading: "This Portfolio",
        projects: &[ProjectEntry {
            name: "Rust Portfolio (this)",
            stack: &["Rust", "Leptos", "Axum", "Tailwind"],
            description: "Interactive single-page portfolio with animated orbit navigation.",
            source_url: Some("https://github.com/MohamedLiban/portfolio-mohamed"),
            demo_url: Some("https://portfolio-mohamed-pc2p.vercel.app"),
        }],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub name: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        name: ".NET Developer – NBI Handelsakademin (YH)",
        period: "Aug 2023 – Jun 2025",
        bullets: &[
            "Programming, databases, web development, agile methods.",
            "LIA: ASP.NET Core + EF, Java/Python backend integrations.",
        ],
    },
    EducationEntry {
        name: "Burgårdens Gymnasium – Social & Behavioral Science",
        period: "2011 – 2014",
        bullets: &["High school diploma."],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct LanguageProficiency {
    pub name: &'static str,
    pub level: &'static str,
}

pub static LANGUAGES: &[LanguageProficiency] = &[
    LanguageProficiency {
        name: "Swedish",
        level: "Native",
    },
    LanguageProficiency {
        name: "English",
        level: "Fluent",
    },
    LanguageProficiency {
        name: "Somali",
        level: "Fluent",
    },
];
