//! Project cards, filtering and the detail modal

use serde::Serialize;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    /// Filter category of the card
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    /// Live demo link; `None` when there is no deployment
    pub live: Option<&'static str>,
}

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Discord Nexium",
        category: "discord",
        description: "A feature-rich space exploration RPG bot for Discord with procedural galaxy exploration, dual economies, PvP/PvE combat, guilds, minigames, and seasonal events. Built with TypeScript and Node.js, featuring PostgreSQL database integration, Docker containerization, and AWS deployment for scalability and reliability.",
        image: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=400&h=250&fit=crop",
        tech: &["TypeScript", "Node.js", "PostgreSQL", "Docker", "AWS"],
        github: "https://github.com/Elenyx/discord-nexium",
        live: None,
    },
    Project {
        id: 2,
        title: "Friendly Eureka",
        category: "web",
        description: "Space MMO-style Discord bot and web application with React SPA frontend and Express backend, featuring real-time updates and Discord OAuth2 authentication. The project combines bot functionality with a modern web interface for enhanced user experience and management capabilities.",
        image: "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=400&h=250&fit=crop",
        tech: &["React", "Vite", "PostgreSQL", "Discord OAuth2", "Express"],
        github: "https://github.com/Elenyx/friendly-eureka",
        live: None,
    },
    Project {
        id: 3,
        title: "TicketMesh",
        category: "discord",
        description: "Advanced Discord ticket management bot with automated channel creation, persistent PostgreSQL storage, transcript generation, analytics dashboards, and role-based permissions. Built with Java and JDA library, featuring Docker containerization and comprehensive analytics for server management.",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400&h=250&fit=crop",
        tech: &["Java", "JDA", "PostgreSQL", "Docker", "Analytics"],
        github: "https://github.com/Elenyx/TicketMesh",
        live: None,
    },
];

/// Static in-memory project table
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectCatalog;

impl ProjectCatalog {
    pub fn all(&self) -> &'static [Project] {
        PROJECTS
    }

    pub fn get(&self, id: u32) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: u32) -> Result<&'static Project> {
        self.get(id).ok_or(Error::ProjectNotFound(id))
    }

    /// Distinct categories in card order
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for project in PROJECTS {
            if !categories.contains(&project.category) {
                categories.push(project.category);
            }
        }
        categories
    }

    /// Cards shown under `filter`
    pub fn visible(&self, filter: &ProjectFilter) -> Vec<&'static Project> {
        PROJECTS.iter().filter(|p| filter.matches(p)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parse a filter button value; `"all"` shows everything
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(value.to_lowercase())
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == c,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c,
        }
    }

    /// Next filter button: all, then each category, then back to all
    pub fn next(&self, catalog: &ProjectCatalog) -> Self {
        let categories = catalog.categories();
        match self {
            ProjectFilter::All => categories
                .first()
                .map(|c| ProjectFilter::Category(c.to_string()))
                .unwrap_or(ProjectFilter::All),
            ProjectFilter::Category(current) => {
                let pos = categories.iter().position(|c| c == current);
                match pos.and_then(|i| categories.get(i + 1)) {
                    Some(next) => ProjectFilter::Category(next.to_string()),
                    None => ProjectFilter::All,
                }
            }
        }
    }
}

/// Project detail dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct Modal {
    open: Option<&'static Project>,
}

impl Modal {
    /// Show `id`; unknown projects leave the modal untouched
    pub fn open(&mut self, catalog: &ProjectCatalog, id: u32) -> bool {
        match catalog.get(id) {
            Some(project) => {
                self.open = Some(project);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Escape closes the modal only while it is shown
    pub fn on_escape(&mut self) -> bool {
        if self.open.is_some() {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn project(&self) -> Option<&'static Project> {
        self.open
    }
}
