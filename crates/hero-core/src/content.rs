//! Static site content: the tech-stack badge table, mock projects, routes
//! and navigation links. Everything here is fixed at build time.

use crate::color;
use crate::error::ContentError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechStackEntry {
    pub name: &'static str,
    pub color: &'static str,
    pub icon_url: &'static str,
    pub position: [f32; 3],
    pub rotation_speed: f32,
}

macro_rules! tech {
    ($name:expr, $color:expr, $icon:literal, [$x:expr, $y:expr, $z:expr], $speed:expr) => {
        TechStackEntry {
            name: $name,
            color: $color,
            icon_url: concat!(
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/",
                $icon
            ),
            position: [$x, $y, $z],
            rotation_speed: $speed,
        }
    };
}

pub const TECH_STACK: &[TechStackEntry] = &[
    tech!("React", "#61dafb", "react/react-original.svg", [3.0, 1.3, 0.4], 0.6),
    tech!("TypeScript", "#3178c6", "typescript/typescript-original.svg", [-3.0, 1.1, 0.5], 0.5),
    tech!("Node.js", "#339933", "nodejs/nodejs-original.svg", [2.7, -1.5, 1.0], 0.7),
    tech!("Next.js", "#ffffff", "nextjs/nextjs-original.svg", [-2.8, -1.3, 1.0], 0.45),
    tech!("Tailwind CSS", "#38bdf8", "tailwindcss/tailwindcss-original.svg", [1.0, 2.4, -0.6], 0.55),
    tech!("PostgreSQL", "#4169e1", "postgresql/postgresql-original.svg", [-1.1, 2.3, -0.5], 0.65),
    tech!("MongoDB", "#47a248", "mongodb/mongodb-original.svg", [1.3, -2.4, -0.4], 0.5),
    tech!("Docker", "#2496ed", "docker/docker-original.svg", [-1.5, -2.3, -0.4], 0.6),
    tech!("GraphQL", "#e10098", "graphql/graphql-plain.svg", [3.4, 0.0, -1.4], 0.4),
    tech!("Git", "#f05032", "git/git-original.svg", [-3.4, 0.0, -1.4], 0.7),
];

/// Every record needs a non-empty name, colour and icon URL, and the colour
/// must parse.
pub fn validate_entries(entries: &[TechStackEntry]) -> Result<(), ContentError> {
    for (index, e) in entries.iter().enumerate() {
        for (field, value) in [("name", e.name), ("color", e.color), ("icon_url", e.icon_url)] {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyField { index, field });
            }
        }
        color::parse_hex(e.color)?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

impl Project {
    /// First `limit` technologies plus how many were left out (shown as `+N`).
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub const MOCK_PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with cart, checkout, and payment integration.",
        image: "/placeholder.svg",
        technologies: &["Next.js", "Prisma", "PostgreSQL", "Stripe"],
        live_url: "https://example.com",
        github_url: "https://github.com",
    },
    Project {
        id: "2",
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates.",
        image: "/placeholder.svg",
        technologies: &["React", "Firebase", "TailwindCSS"],
        live_url: "https://example.com",
        github_url: "https://github.com",
    },
    Project {
        id: "3",
        title: "Social Media Dashboard",
        description: "Analytics dashboard for social media management with data visualization.",
        image: "/placeholder.svg",
        technologies: &["React", "Node.js", "MongoDB", "Chart.js"],
        live_url: "https://example.com",
        github_url: "https://github.com",
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    MOCK_PROJECTS.iter().find(|p| p.id == id)
}

/// Outcome of a project-detail lookup; unknown ids are a normal empty state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectView {
    Found(&'static Project),
    NotFound,
}

impl ProjectView {
    pub fn resolve(id: &str) -> Self {
        find_project(id).map_or(ProjectView::NotFound, ProjectView::Found)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Portfolio,
    Project(String),
    ThemePreview,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["portfolio"] => Route::Portfolio,
            ["portfolio", id] => Route::Project((*id).to_string()),
            ["theme"] => Route::ThemePreview,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Portfolio => "/portfolio".into(),
            Route::Project(id) => format!("/portfolio/{id}"),
            Route::ThemePreview => "/theme".into(),
            Route::NotFound => "/404".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    /// Project detail pages keep the Portfolio link highlighted.
    pub fn is_active(&self, route: &Route) -> bool {
        match route {
            Route::Project(_) => self.path == "/portfolio",
            other => other.path() == self.path,
        }
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
    NavLink {
        label: "Portfolio",
        path: "/portfolio",
    },
];
