//! Static project catalog shown in the gallery.
//!
//! DESIGN
//! ======
//! Records are immutable for the session. `title` is unique and is the key
//! used to resolve a clicked gallery item back to its record.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static str,
    pub client: &'static str,
    pub date: &'static str,
    pub url: &'static str,
    pub image_url: &'static str,
}

pub const WEB_DEVELOPMENT: &str = "Web Development";
pub const APP_DEVELOPMENT: &str = "App Development";
pub const UI_UX_DESIGN: &str = "UI/UX Design";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-commerce Website",
        category: WEB_DEVELOPMENT,
        description: "A fully responsive e-commerce platform built with modern web technologies. Features include user authentication, product catalog, shopping cart, payment integration, and admin dashboard for managing products and orders.",
        technologies: "HTML, CSS, JavaScript, React, Node.js, MongoDB",
        client: "RetailCorp Inc.",
        date: "January 2023",
        url: "https://example.com/ecommerce",
        image_url: "https://images.pexels.com/photos/326501/pexels-photo-326501.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    ProjectRecord {
        id: 2,
        title: "Task Management App",
        category: APP_DEVELOPMENT,
        description: "A task management application that helps users organize their projects and tasks. It includes features like task creation, due dates, priority levels, progress tracking, and team collaboration.",
        technologies: "React, Redux, Firebase, Material UI",
        client: "ProductivityTech",
        date: "March 2023",
        url: "https://example.com/taskapp",
        image_url: "https://images.pexels.com/photos/6456139/pexels-photo-6456139.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    ProjectRecord {
        id: 3,
        title: "Brand Identity Design",
        category: UI_UX_DESIGN,
        description: "Complete brand identity design for a tech startup. The project included logo design, color palette selection, typography guidelines, business cards, and social media templates.",
        technologies: "Figma, Adobe Illustrator, Adobe Photoshop",
        client: "TechStart Solutions",
        date: "June 2023",
        url: "https://example.com/brandidentity",
        image_url: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    ProjectRecord {
        id: 4,
        title: "Blog Platform",
        category: WEB_DEVELOPMENT,
        description: "A modern blog platform with a focus on performance and user experience. Features include content management system, user comments, categories and tags, search functionality, and responsive design.",
        technologies: "HTML, CSS, JavaScript, Node.js, MongoDB",
        client: "ContentCreators Inc.",
        date: "August 2023",
        url: "https://example.com/blogplatform",
        image_url: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    ProjectRecord {
        id: 5,
        title: "Weather App",
        category: APP_DEVELOPMENT,
        description: "A weather application that provides real-time weather data and forecasts. It features location-based weather updates, hourly and weekly forecasts, weather maps, and notifications for weather alerts.",
        technologies: "React Native, OpenWeatherMap API, Redux",
        client: "WeatherNow",
        date: "October 2023",
        url: "https://example.com/weatherapp",
        image_url: "https://images.pexels.com/photos/6633920/pexels-photo-6633920.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    ProjectRecord {
        id: 6,
        title: "Mobile App UI",
        category: UI_UX_DESIGN,
        description: "UI/UX design for a health and fitness tracking mobile application. The design focuses on user-friendly interface, intuitive navigation, and visual representation of fitness data.",
        technologies: "Figma, Adobe XD, Sketch",
        client: "FitLife Health",
        date: "December 2023",
        url: "https://example.com/appui",
        image_url: "https://images.pexels.com/photos/6804590/pexels-photo-6804590.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
];

/// Find the record whose title equals `title` exactly.
#[must_use]
pub fn find_by_title(title: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.title == title)
}

/// Filter class carried by gallery items of `category`.
#[must_use]
pub fn category_class(category: &str) -> Option<&'static str> {
    match category {
        WEB_DEVELOPMENT => Some("filter-web"),
        APP_DEVELOPMENT => Some("filter-app"),
        UI_UX_DESIGN => Some("filter-design"),
        _ => None,
    }
}
